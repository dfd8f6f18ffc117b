use crate::config::ZeroScorePolicy;

/// First harmonic-mean input that is not strictly positive and finite.
#[derive(Debug, Clone, PartialEq)]
pub struct DegenerateInput {
    pub column: String,
    pub value: f64,
}

/// n / Σ(1/xᵢ) over named inputs.
///
/// Non-positive or non-finite inputs are degenerate: under
/// [`ZeroScorePolicy::Zero`] the mean collapses to 0.0, otherwise the first
/// such input is reported back.
pub fn harmonic_mean(
    inputs: &[(&str, f64)],
    policy: ZeroScorePolicy,
) -> Result<f64, DegenerateInput> {
    if inputs.is_empty() {
        return Ok(0.0);
    }
    let mut inv_sum = 0.0f64;
    for &(column, value) in inputs {
        if !(value.is_finite() && value > 0.0) {
            return match policy {
                ZeroScorePolicy::Zero => Ok(0.0),
                ZeroScorePolicy::Error => Err(DegenerateInput {
                    column: column.to_string(),
                    value,
                }),
            };
        }
        inv_sum += 1.0 / value;
    }
    Ok(inputs.len() as f64 / inv_sum)
}

#[cfg(test)]
#[path = "../../tests/src_inline/aggregate/score.rs"]
mod tests;
