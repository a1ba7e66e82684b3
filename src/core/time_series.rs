//! Monthly series data structure used as forecast input.

use crate::error::{ForecastError, Result};
use chrono::{Datelike, Months, NaiveDate};

/// A single monthly observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeSeriesPoint {
    /// First day of the calendar month.
    pub month: NaiveDate,
    pub value: f64,
}

impl TimeSeriesPoint {
    pub fn new(month: NaiveDate, value: f64) -> Self {
        Self { month, value }
    }

    /// Month of the year, 1 through 12.
    pub fn month_of_year(&self) -> u32 {
        self.month.month()
    }
}

/// Truncate a date to the first day of its month.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    // Day 1 exists in every month, so `with_day` cannot fail here.
    date.with_day(1).unwrap_or(date)
}

/// Shift a month-start date forward by `n` calendar months.
pub fn add_months(month: NaiveDate, n: u32) -> Result<NaiveDate> {
    month.checked_add_months(Months::new(n)).ok_or_else(|| {
        ForecastError::TimestampError(format!("cannot advance {} by {} months", month, n))
    })
}

/// A gap-free sequence of monthly values.
///
/// Every month is the first day of its calendar month, and each month follows
/// the previous one by exactly one calendar month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySeries {
    months: Vec<NaiveDate>,
    values: Vec<f64>,
    label: Option<String>,
}

/// Builder for constructing MonthlySeries.
#[derive(Debug, Clone, Default)]
pub struct MonthlySeriesBuilder {
    start: Option<NaiveDate>,
    months: Vec<NaiveDate>,
    values: Vec<f64>,
    label: Option<String>,
}

impl MonthlySeriesBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate consecutive months beginning at `start` (truncated to month start).
    pub fn start(mut self, start: NaiveDate) -> Self {
        self.start = Some(month_start(start));
        self
    }

    /// Explicit month for each value. Takes precedence over `start`.
    pub fn months(mut self, months: Vec<NaiveDate>) -> Self {
        self.months = months;
        self
    }

    pub fn values(mut self, values: Vec<f64>) -> Self {
        self.values = values;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn build(self) -> Result<MonthlySeries> {
        let months = if !self.months.is_empty() {
            self.months
        } else if let Some(start) = self.start {
            (0..self.values.len())
                .map(|i| add_months(start, i as u32))
                .collect::<Result<Vec<_>>>()?
        } else if self.values.is_empty() {
            Vec::new()
        } else {
            return Err(ForecastError::InvalidParameter(
                "either a start month or explicit months is required".to_string(),
            ));
        };

        let mut series = MonthlySeries::new(months, self.values)?;
        series.label = self.label;
        Ok(series)
    }
}

impl MonthlySeries {
    /// Create a validated monthly series.
    pub fn new(months: Vec<NaiveDate>, values: Vec<f64>) -> Result<Self> {
        if months.len() != values.len() {
            return Err(ForecastError::DimensionMismatch {
                expected: months.len(),
                got: values.len(),
            });
        }

        for month in &months {
            if month.day() != 1 {
                return Err(ForecastError::TimestampError(format!(
                    "{} is not the first day of a month",
                    month
                )));
            }
        }

        for pair in months.windows(2) {
            let (prev, curr) = (pair[0], pair[1]);
            if curr <= prev {
                return Err(ForecastError::TimestampError(
                    "months must be strictly increasing".to_string(),
                ));
            }
            if curr != add_months(prev, 1)? {
                return Err(ForecastError::TimestampError(format!(
                    "gap between {} and {}",
                    prev, curr
                )));
            }
        }

        if values.iter().any(|v| !v.is_finite()) {
            return Err(ForecastError::MissingValues);
        }

        Ok(Self {
            months,
            values,
            label: None,
        })
    }

    /// Create a series from points.
    pub fn from_points(points: &[TimeSeriesPoint]) -> Result<Self> {
        Self::new(
            points.iter().map(|p| p.month).collect(),
            points.iter().map(|p| p.value).collect(),
        )
    }

    /// Build a gap-free series from sparse monthly points.
    ///
    /// Point months are truncated to month start. Months missing between two
    /// points take the value of the preceding month.
    pub fn forward_filled(points: &[TimeSeriesPoint]) -> Result<Self> {
        let mut filled: Vec<TimeSeriesPoint> = Vec::with_capacity(points.len());

        for point in points {
            let month = month_start(point.month);
            if let Some(&last) = filled.last() {
                if month <= last.month {
                    return Err(ForecastError::TimestampError(
                        "months must be strictly increasing".to_string(),
                    ));
                }
                let mut next = add_months(last.month, 1)?;
                while next < month {
                    filled.push(TimeSeriesPoint::new(next, last.value));
                    next = add_months(next, 1)?;
                }
            }
            filled.push(TimeSeriesPoint::new(month, point.value));
        }

        Self::from_points(&filled)
    }

    /// Attach a descriptive label (e.g. the metric name).
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Get the number of observations.
    pub fn len(&self) -> usize {
        self.months.len()
    }

    /// Check if the series is empty.
    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    pub fn months(&self) -> &[NaiveDate] {
        &self.months
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Iterate over observations in chronological order.
    pub fn points(&self) -> impl Iterator<Item = TimeSeriesPoint> + '_ {
        self.months
            .iter()
            .zip(self.values.iter())
            .map(|(&month, &value)| TimeSeriesPoint::new(month, value))
    }

    /// Most recent observation.
    pub fn last(&self) -> Option<TimeSeriesPoint> {
        match (self.months.last(), self.values.last()) {
            (Some(&month), Some(&value)) => Some(TimeSeriesPoint::new(month, value)),
            _ => None,
        }
    }

    pub fn first_month(&self) -> Option<NaiveDate> {
        self.months.first().copied()
    }

    pub fn last_month(&self) -> Option<NaiveDate> {
        self.months.last().copied()
    }
}
