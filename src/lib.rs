//! # palm-forecast
//!
//! Monthly yield forecasting for oil-palm plantation records.
//!
//! Plantation records are filtered and summed into a gap-free monthly series,
//! which is decomposed into a least-squares trend and a multiplicative
//! month-of-year seasonal index. Projections start from the last observed
//! month and extend the trend from the last actual value, scaled by the
//! seasonal index of each projected month.

pub mod core;
pub mod decomposition;
pub mod error;
pub mod models;
pub mod provider;
pub mod utils;

pub use error::{ForecastError, Result};

pub mod prelude {
    pub use crate::core::{
        Forecast, ForecastPoint, ForecastSummary, Horizon, MonthlySeries, MonthlySeriesBuilder,
        TimeSeriesPoint,
    };
    pub use crate::error::{ForecastError, Result};
    pub use crate::models::{
        forecast, forecast_with_config, ForecastConfig, Forecaster, MissingMonthPolicy,
        SeasonalTrend,
    };
    pub use crate::provider::{
        monthly_series, Metric, MonthlyStats, PlantationRecord, RecordFilter, Treatment,
    };
}
