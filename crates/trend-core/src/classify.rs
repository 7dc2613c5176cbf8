//! Sign-based classification of distribution shape

use std::fmt;

/// Asymmetry bucket derived from the sign of the skewness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkewShape {
    /// Positive skewness, long right tail
    Right,
    /// Negative skewness, long left tail
    Left,
    /// Zero (or undefined) skewness
    Symmetric,
}

impl SkewShape {
    /// Classify a skewness value by sign. NaN falls into the symmetric
    /// bucket since neither strict comparison holds.
    pub fn from_skewness(skewness: f64) -> Self {
        if skewness > 0.0 {
            Self::Right
        } else if skewness < 0.0 {
            Self::Left
        } else {
            Self::Symmetric
        }
    }
}

impl fmt::Display for SkewShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Right => write!(f, "right skewed"),
            Self::Left => write!(f, "left skewed"),
            Self::Symmetric => write!(f, "not skewed"),
        }
    }
}

/// Tail-heaviness bucket derived from the sign of the excess kurtosis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TailShape {
    /// Positive excess kurtosis, heavier tails than a normal distribution
    Leptokurtic,
    /// Negative excess kurtosis, lighter tails than a normal distribution
    Platykurtic,
    /// Zero (or undefined) excess kurtosis
    Mesokurtic,
}

impl TailShape {
    /// Classify an excess-kurtosis value by sign. NaN maps to mesokurtic.
    pub fn from_excess_kurtosis(excess_kurtosis: f64) -> Self {
        if excess_kurtosis > 0.0 {
            Self::Leptokurtic
        } else if excess_kurtosis < 0.0 {
            Self::Platykurtic
        } else {
            Self::Mesokurtic
        }
    }
}

impl fmt::Display for TailShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leptokurtic => write!(f, "leptokurtic"),
            Self::Platykurtic => write!(f, "platykurtic"),
            Self::Mesokurtic => write!(f, "mesokurtic"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skew_sign_buckets() {
        assert_eq!(SkewShape::from_skewness(1.5), SkewShape::Right);
        assert_eq!(SkewShape::from_skewness(-0.01), SkewShape::Left);
        assert_eq!(SkewShape::from_skewness(0.0), SkewShape::Symmetric);
        assert_eq!(SkewShape::from_skewness(f64::NAN), SkewShape::Symmetric);
    }

    #[test]
    fn test_tail_sign_buckets() {
        assert_eq!(TailShape::from_excess_kurtosis(0.2), TailShape::Leptokurtic);
        assert_eq!(TailShape::from_excess_kurtosis(-0.5), TailShape::Platykurtic);
        assert_eq!(TailShape::from_excess_kurtosis(0.0), TailShape::Mesokurtic);
        assert_eq!(TailShape::from_excess_kurtosis(f64::NAN), TailShape::Mesokurtic);
    }

    #[test]
    fn test_display_wording() {
        assert_eq!(SkewShape::Right.to_string(), "right skewed");
        assert_eq!(TailShape::Platykurtic.to_string(), "platykurtic");
    }
}
