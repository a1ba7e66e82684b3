//! Linear trend fitted by ordinary least squares on the observation index.

use crate::error::{ForecastError, Result};
use tracing::debug;

/// Result of a degree-1 least-squares fit `value = slope * t + intercept`,
/// where `t` is the 0-based observation index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendModel {
    /// Change in value per month.
    pub slope: f64,
    pub intercept: f64,
}

impl TrendModel {
    /// Value of the fitted line at index `t`.
    pub fn fitted(&self, t: usize) -> f64 {
        self.intercept + self.slope * t as f64
    }
}

/// Fit a linear trend to `values` against their index.
pub fn fit_trend(values: &[f64]) -> Result<TrendModel> {
    if values.len() < 2 {
        return Err(ForecastError::InsufficientData {
            needed: 2,
            got: values.len(),
        });
    }

    let n = values.len() as f64;
    let mean_x = (n - 1.0) / 2.0;
    let mean_y = values.iter().sum::<f64>() / n;

    let mut ss_xy = 0.0;
    let mut ss_xx = 0.0;
    for (i, &y) in values.iter().enumerate() {
        let dx = i as f64 - mean_x;
        ss_xy += dx * (y - mean_y);
        ss_xx += dx * dx;
    }

    // ss_xx > 0 whenever there are at least two points
    let slope = ss_xy / ss_xx;
    let intercept = mean_y - slope * mean_x;

    debug!(slope, intercept, n = values.len(), "fitted linear trend");
    Ok(TrendModel { slope, intercept })
}

/// Slope of the least-squares line through `values`.
pub fn trend_slope(values: &[f64]) -> Result<f64> {
    fit_trend(values).map(|t| t.slope)
}
