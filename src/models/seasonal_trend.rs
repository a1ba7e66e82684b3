//! Linear trend with multiplicative month-of-year seasonality.
//!
//! Projections are anchored at the last observed value rather than at the
//! fitted trend line:
//!
//! ```text
//! y_hat[T + k] = (y[T] + k * slope) * S[month_of_year(T + k)]
//! ```
//!
//! where `slope` is the least-squares slope of the history against its index
//! and `S` is the seasonal index.

use crate::core::{add_months, Forecast, ForecastPoint, MonthlySeries, TimeSeriesPoint};
use crate::decomposition::{fit_trend, seasonal_indices, SeasonalIndex, TrendModel};
use crate::error::{ForecastError, Result};
use crate::models::{ForecastConfig, Forecaster, MissingMonthPolicy};
use chrono::Datelike;
use tracing::{debug, instrument, trace, warn};

#[derive(Debug, Clone)]
struct Fitted {
    trend: TrendModel,
    seasonal: SeasonalIndex,
    last: TimeSeriesPoint,
}

/// Trend plus seasonal-index forecaster for monthly series.
#[derive(Debug, Clone, Default)]
pub struct SeasonalTrend {
    config: ForecastConfig,
    fitted: Option<Fitted>,
}

impl SeasonalTrend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ForecastConfig) -> Self {
        Self {
            config,
            fitted: None,
        }
    }

    pub fn config(&self) -> &ForecastConfig {
        &self.config
    }

    /// Fitted trend slope per month.
    pub fn slope(&self) -> Option<f64> {
        self.fitted.as_ref().map(|f| f.trend.slope)
    }

    pub fn trend(&self) -> Option<&TrendModel> {
        self.fitted.as_ref().map(|f| &f.trend)
    }

    pub fn seasonal_index(&self) -> Option<&SeasonalIndex> {
        self.fitted.as_ref().map(|f| &f.seasonal)
    }

    /// The observation projections are anchored at.
    pub fn last_observation(&self) -> Option<TimeSeriesPoint> {
        self.fitted.as_ref().map(|f| f.last)
    }

    fn seasonal_factor(&self, seasonal: &SeasonalIndex, month: u32) -> Result<f64> {
        match (seasonal.get(month), self.config.missing_month) {
            (Some(factor), _) => Ok(factor),
            (None, MissingMonthPolicy::Fail) => Err(ForecastError::MissingSeasonalMonth { month }),
            (None, MissingMonthPolicy::Neutral) => {
                warn!(month, "month never observed, using neutral seasonal index");
                Ok(1.0)
            }
        }
    }
}

impl Forecaster for SeasonalTrend {
    #[instrument(skip(self, series), fields(n = series.len()))]
    fn fit(&mut self, series: &MonthlySeries) -> Result<()> {
        self.fitted = None;

        if series.len() < self.config.min_points {
            return Err(ForecastError::InsufficientData {
                needed: self.config.min_points,
                got: series.len(),
            });
        }

        let seasonal = seasonal_indices(series)?;
        let trend = fit_trend(series.values())?;
        let last = series.last().ok_or(ForecastError::EmptyData)?;

        debug!(
            slope = trend.slope,
            base = last.value,
            base_month = %last.month,
            "fitted seasonal trend"
        );

        self.fitted = Some(Fitted {
            trend,
            seasonal,
            last,
        });
        Ok(())
    }

    fn predict(&self, horizon: usize) -> Result<Forecast> {
        let fitted = self.fitted.as_ref().ok_or(ForecastError::FitRequired)?;

        let mut forecast = Forecast::new();
        for k in 1..=horizon {
            let month = add_months(fitted.last.month, k as u32)?;
            let raw = fitted.last.value + k as f64 * fitted.trend.slope;
            let factor = self.seasonal_factor(&fitted.seasonal, month.month())?;
            let projected = raw * factor;

            trace!(step = k, %month, raw, factor, projected, "projected month");
            forecast.push(ForecastPoint::new(month, projected));
        }

        Ok(forecast)
    }

    fn name(&self) -> &str {
        "SeasonalTrend"
    }

    fn is_fitted(&self) -> bool {
        self.fitted.is_some()
    }
}
