//! Trend and seasonal decomposition of monthly series.
//!
//! - Trend: least-squares slope of value on observation index
//! - Seasonal: multiplicative month-of-year index

mod seasonal;
mod trend;

pub use seasonal::{seasonal_indices, SeasonalIndex};
pub use trend::{fit_trend, trend_slope, TrendModel};
