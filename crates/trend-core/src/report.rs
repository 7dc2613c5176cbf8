//! Textual report over a column's moments

use crate::{Moments, SkewShape, TailShape};

/// Format the analysis report for one column: the four moments to two
/// decimal places followed by a one-sentence shape interpretation.
///
/// Pure string producer; the caller decides where it is printed.
pub fn describe(moments: &Moments, column: &str) -> String {
    let skew = SkewShape::from_skewness(moments.skewness);
    let tails = TailShape::from_excess_kurtosis(moments.excess_kurtosis);

    format!(
        "For the attribute {column}:\n\
         Mean = {:.2}, Standard Deviation = {:.2}, \
         Skewness = {:.2}, and Excess Kurtosis = {:.2}.\n\
         The data was {skew} and {tails}.",
        moments.mean, moments.std_dev, moments.skewness, moments.excess_kurtosis,
    )
}
