//! Weighted average-of-squares computation.

use crate::error::{Error, Result};

/// Compute the weighted average of squares of `numbers`.
///
/// `sum(w_i * x_i^2) / sum(w_i)`, with every `w_i = 1` when `weights` is
/// `None`. Supplied weights must match the numbers in length; a total weight
/// of zero (empty input included) is an error, not a NaN.
pub fn average_of_squares(numbers: &[f64], weights: Option<&[f64]>) -> Result<f64> {
    if let Some(weights) = weights {
        if weights.len() != numbers.len() {
            return Err(Error::LengthMismatch {
                numbers: numbers.len(),
                weights: weights.len(),
            });
        }
    }

    let (weighted_sum_squares, total_weight) = match weights {
        Some(weights) => (
            numbers
                .iter()
                .zip(weights)
                .map(|(x, w)| w * (x * x))
                .sum::<f64>(),
            weights.iter().sum::<f64>(),
        ),
        None => (
            numbers.iter().map(|x| x * x).sum::<f64>(),
            numbers.len() as f64,
        ),
    };

    if total_weight == 0.0 {
        return Err(Error::ZeroTotalWeight);
    }

    Ok(weighted_sum_squares / total_weight)
}
