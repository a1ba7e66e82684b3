//! Core data structures for monthly forecasting.

mod forecast;
mod horizon;
mod summary;
mod time_series;

pub use forecast::{Forecast, ForecastPoint};
pub use horizon::Horizon;
pub use summary::ForecastSummary;
pub use time_series::{add_months, month_start, MonthlySeries, MonthlySeriesBuilder, TimeSeriesPoint};
