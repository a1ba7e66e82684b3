//! Forecasting models and the one-shot forecast entry points.

mod config;
mod seasonal_trend;
mod traits;

pub use config::{ForecastConfig, MissingMonthPolicy};
pub use seasonal_trend::SeasonalTrend;
pub use traits::{BoxedForecaster, Forecaster};

use crate::core::{Forecast, MonthlySeries};
use crate::error::Result;
use tracing::instrument;

/// Project `horizon` months past the end of `series` with the default configuration.
///
/// A fresh model is fitted on every call; nothing is retained between calls.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use palm_forecast::core::MonthlySeriesBuilder;
/// use palm_forecast::models::forecast;
///
/// let series = MonthlySeriesBuilder::new()
///     .start(NaiveDate::from_ymd_opt(2023, 1, 1).unwrap())
///     .values(vec![100.0; 12])
///     .build()
///     .unwrap();
///
/// let projected = forecast(&series, 6).unwrap();
/// assert_eq!(projected.horizon(), 6);
/// ```
pub fn forecast(series: &MonthlySeries, horizon: usize) -> Result<Forecast> {
    forecast_with_config(series, horizon, &ForecastConfig::default())
}

/// Project `horizon` months past the end of `series`.
#[instrument(skip(series, config), fields(n = series.len(), policy = ?config.missing_month))]
pub fn forecast_with_config(
    series: &MonthlySeries,
    horizon: usize,
    config: &ForecastConfig,
) -> Result<Forecast> {
    let mut model = SeasonalTrend::with_config(config.clone());
    model.fit(series)?;
    model.predict(horizon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MonthlySeriesBuilder;
    use crate::error::ForecastError;
    use chrono::NaiveDate;

    fn series_from(values: Vec<f64>) -> MonthlySeries {
        MonthlySeriesBuilder::new()
            .start(NaiveDate::from_ymd_opt(2023, 1, 1).unwrap())
            .values(values)
            .build()
            .unwrap()
    }

    #[test]
    fn forecast_is_repeatable() {
        let series = series_from(vec![3.0, 9.0, 4.0, 11.0, 6.0, 13.0, 5.0, 12.0, 7.0, 10.0, 8.0, 14.0]);
        let a = forecast(&series, 18).unwrap();
        let b = forecast(&series, 18).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn forecast_leaves_input_untouched() {
        let series = series_from(vec![10.0, 20.0, 30.0]);
        let before = series.clone();
        forecast_with_config(&series, 3, &ForecastConfig::neutral_missing_months()).unwrap();
        assert_eq!(series, before);
    }

    #[test]
    fn forecast_propagates_fit_errors() {
        assert!(matches!(
            forecast(&series_from(vec![1.0, 2.0]), 3),
            Err(ForecastError::InsufficientData { needed: 3, got: 2 })
        ));
        assert!(matches!(
            forecast(&series_from(vec![-5.0, 0.0, 5.0]), 3),
            Err(ForecastError::DegenerateSeries(_))
        ));
    }

    #[test]
    fn forecast_has_no_partial_result() {
        // Jan..Mar observed; April is missing from the seasonal index
        let series = series_from(vec![10.0, 20.0, 30.0]);
        assert!(matches!(
            forecast(&series, 12),
            Err(ForecastError::MissingSeasonalMonth { month: 4 })
        ));
    }
}
