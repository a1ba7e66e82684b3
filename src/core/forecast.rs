//! Forecast result structure for holding monthly projections.

use crate::core::{ForecastSummary, MonthlySeries};
use crate::error::{ForecastError, Result};
use chrono::NaiveDate;

/// A projected value for one future month.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastPoint {
    pub month: NaiveDate,
    pub value: f64,
}

impl ForecastPoint {
    pub fn new(month: NaiveDate, value: f64) -> Self {
        Self { month, value }
    }
}

/// A forecast result: one projected value per future month, in chronological order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Forecast {
    months: Vec<NaiveDate>,
    values: Vec<f64>,
}

impl Forecast {
    /// Create an empty forecast.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a forecast from parallel month and value vectors.
    pub fn from_parts(months: Vec<NaiveDate>, values: Vec<f64>) -> Result<Self> {
        if months.len() != values.len() {
            return Err(ForecastError::DimensionMismatch {
                expected: months.len(),
                got: values.len(),
            });
        }
        Ok(Self { months, values })
    }

    /// Append a projected month.
    pub fn push(&mut self, point: ForecastPoint) {
        self.months.push(point.month);
        self.values.push(point.value);
    }

    /// Get the forecast horizon (number of months).
    pub fn horizon(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn months(&self) -> &[NaiveDate] {
        &self.months
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Iterate over projected points in chronological order.
    pub fn points(&self) -> impl Iterator<Item = ForecastPoint> + '_ {
        self.months
            .iter()
            .zip(self.values.iter())
            .map(|(&month, &value)| ForecastPoint::new(month, value))
    }

    pub fn first(&self) -> Option<ForecastPoint> {
        self.points().next()
    }

    pub fn last(&self) -> Option<ForecastPoint> {
        match (self.months.last(), self.values.last()) {
            (Some(&month), Some(&value)) => Some(ForecastPoint::new(month, value)),
            _ => None,
        }
    }

    /// Summarize this forecast against the history it was projected from.
    pub fn summary(&self, history: &MonthlySeries) -> Result<ForecastSummary> {
        ForecastSummary::new(history, self)
    }
}
