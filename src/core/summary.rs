//! Headline figures for a forecast.

use crate::core::{Forecast, MonthlySeries};
use crate::error::{ForecastError, Result};
use chrono::NaiveDate;

/// Aggregate figures comparing a forecast with its most recent history.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastSummary {
    /// Sum of all projected values over the horizon.
    pub projected_total: f64,
    /// Last projected value minus last historical value.
    pub growth: f64,
    /// Growth as a percentage of the last historical value (0 when that value is 0).
    pub growth_pct: f64,
    /// Month with the highest projection (earliest on ties).
    pub peak_month: NaiveDate,
    pub peak_value: f64,
    /// Most recent observed value.
    pub last_historical: f64,
}

impl ForecastSummary {
    pub fn new(history: &MonthlySeries, forecast: &Forecast) -> Result<Self> {
        let last_historical = history.last().ok_or(ForecastError::EmptyData)?.value;
        let last_projected = forecast.last().ok_or(ForecastError::EmptyData)?.value;

        let mut peak = forecast.first().ok_or(ForecastError::EmptyData)?;
        for point in forecast.points() {
            if point.value > peak.value {
                peak = point;
            }
        }

        let growth = last_projected - last_historical;
        let growth_pct = if last_historical != 0.0 {
            growth / last_historical * 100.0
        } else {
            0.0
        };

        Ok(Self {
            projected_total: forecast.values().iter().sum(),
            growth,
            growth_pct,
            peak_month: peak.month,
            peak_value: peak.value,
            last_historical,
        })
    }
}
