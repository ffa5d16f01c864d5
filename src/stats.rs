use serde::Serialize;

/// Presentation tier of a single monthly value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Highlight {
    /// The value equals the largest value of the series.
    Max,

    /// The value equals the smallest non-zero value of the series.
    Min,

    /// Any other value, including months without refuelings.
    Normal,
}

/// The largest value and the smallest non-zero value of a series.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Extremes {
    pub max: f64,
    pub min: f64,
}

impl Extremes {
    /// Assigns the tier for `value`. Every value equal to an extreme gets its
    /// tier, and `Max` takes precedence when both extremes are the same.
    pub fn classify(&self, value: f64) -> Highlight {
        if value == self.max {
            Highlight::Max
        } else if value == self.min {
            Highlight::Min
        } else {
            Highlight::Normal
        }
    }
}

/// Computes the extremes of a series of monthly values.
///
/// Zero values never count as the minimum. When the series has no non-zero
/// value the minimum falls back to the maximum, so an all zero series yields
/// `(0, 0)`.
pub fn compute_extremes(values: &[f64]) -> Extremes {
    let max = values.iter().copied().fold(0.0, f64::max);
    let min = values
        .iter()
        .copied()
        .filter(|value| *value != 0.0)
        .fold(max, f64::min);

    Extremes { max, min }
}
