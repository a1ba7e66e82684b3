//! Forecaster trait defining the common interface for monthly models.

use crate::core::{Forecast, MonthlySeries};
use crate::error::Result;

/// Common interface for forecasting models.
///
/// This trait is object-safe and can be used with `Box<dyn Forecaster>`.
pub trait Forecaster {
    /// Fit the model to a monthly series.
    fn fit(&mut self, series: &MonthlySeries) -> Result<()>;

    /// Project the given number of months past the end of the fitted series.
    fn predict(&self, horizon: usize) -> Result<Forecast>;

    /// Get the model name.
    fn name(&self) -> &str;

    /// Check if the model has been fitted.
    fn is_fitted(&self) -> bool;
}

/// Type alias for boxed forecaster trait objects.
pub type BoxedForecaster = Box<dyn Forecaster>;
