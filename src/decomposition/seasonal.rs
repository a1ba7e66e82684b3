//! Multiplicative month-of-year seasonal index.
//!
//! Each month's index is the mean of the observations falling in that month
//! of the year divided by the mean of all observations. Weighted by how often
//! each month occurs in the history, the indices average to 1.0.
//!
//! Every index must be strictly positive. A series whose month means differ in
//! sign from the overall mean (possible only with mixed-sign values) has no
//! meaningful multiplicative seasonality and is rejected as degenerate.

use crate::core::MonthlySeries;
use crate::error::{ForecastError, Result};
use crate::utils::stats::mean;
use tracing::debug;

/// Seasonal multipliers keyed by month of the year (1 = January).
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonalIndex {
    factors: [Option<f64>; 12],
    counts: [usize; 12],
}

impl SeasonalIndex {
    /// Multiplier for `month` (1-12), or `None` if that month was never observed.
    pub fn get(&self, month: u32) -> Option<f64> {
        Self::slot(month).and_then(|i| self.factors[i])
    }

    /// Number of historical observations that fell in `month`.
    pub fn count(&self, month: u32) -> usize {
        Self::slot(month).map(|i| self.counts[i]).unwrap_or(0)
    }

    pub fn is_observed(&self, month: u32) -> bool {
        self.get(month).is_some()
    }

    /// Months of the year with at least one observation, ascending.
    pub fn observed_months(&self) -> impl Iterator<Item = u32> + '_ {
        (1..=12u32).filter(move |&m| self.is_observed(m))
    }

    /// Mean of the indices weighted by their observation counts.
    pub fn weighted_mean(&self) -> f64 {
        let total: usize = self.counts.iter().sum();
        if total == 0 {
            return f64::NAN;
        }
        let weighted: f64 = self
            .factors
            .iter()
            .zip(self.counts.iter())
            .filter_map(|(f, &c)| f.map(|f| f * c as f64))
            .sum();
        weighted / total as f64
    }

    fn slot(month: u32) -> Option<usize> {
        (1..=12).contains(&month).then(|| (month - 1) as usize)
    }
}

/// Compute the seasonal index of a monthly series.
///
/// Fails with `EmptyData` on an empty series and with `DegenerateSeries`
/// when the overall mean is exactly zero or any month's index is not positive.
pub fn seasonal_indices(series: &MonthlySeries) -> Result<SeasonalIndex> {
    if series.is_empty() {
        return Err(ForecastError::EmptyData);
    }

    let overall = mean(series.values());
    if overall == 0.0 {
        return Err(ForecastError::DegenerateSeries(
            "overall mean is zero, seasonal index is undefined".to_string(),
        ));
    }

    let mut sums = [0.0_f64; 12];
    let mut counts = [0_usize; 12];
    for point in series.points() {
        let slot = (point.month_of_year() - 1) as usize;
        sums[slot] += point.value;
        counts[slot] += 1;
    }

    let mut factors = [None; 12];
    for slot in 0..12 {
        if counts[slot] > 0 {
            let factor = sums[slot] / counts[slot] as f64 / overall;
            if factor <= 0.0 {
                return Err(ForecastError::DegenerateSeries(format!(
                    "seasonal index for month {} is {factor}, expected a positive multiplier",
                    slot + 1
                )));
            }
            factors[slot] = Some(factor);
        }
    }

    let index = SeasonalIndex { factors, counts };
    debug!(
        overall_mean = overall,
        observed_months = index.observed_months().count(),
        "computed seasonal index"
    );
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MonthlySeriesBuilder;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    fn series_from(year: i32, month: u32, values: Vec<f64>) -> MonthlySeries {
        MonthlySeriesBuilder::new()
            .start(NaiveDate::from_ymd_opt(year, month, 1).unwrap())
            .values(values)
            .build()
            .unwrap()
    }

    #[test]
    fn flat_series_has_unit_indices() {
        let series = series_from(2022, 1, vec![100.0; 12]);
        let index = seasonal_indices(&series).unwrap();

        for month in 1..=12 {
            assert_relative_eq!(index.get(month).unwrap(), 1.0, epsilon = 1e-12);
            assert_eq!(index.count(month), 1);
        }
    }

    #[test]
    fn indices_average_month_occurrences() {
        // Jan..Dec 2022 then Jan..Mar 2023
        let mut values: Vec<f64> = (1..=12).map(|m| m as f64 * 10.0).collect();
        values.extend([30.0, 40.0, 50.0]);
        let series = series_from(2022, 1, values.clone());

        let overall = values.iter().sum::<f64>() / values.len() as f64;
        let index = seasonal_indices(&series).unwrap();

        assert_eq!(index.count(1), 2);
        assert_relative_eq!(index.get(1).unwrap(), 20.0 / overall, epsilon = 1e-12);
        assert_relative_eq!(index.get(2).unwrap(), 30.0 / overall, epsilon = 1e-12);
        assert_relative_eq!(index.get(12).unwrap(), 120.0 / overall, epsilon = 1e-12);
    }

    #[test]
    fn weighted_mean_is_one() {
        let values = vec![12.0, 7.5, 3.1, 9.9, 14.2, 8.8, 6.0, 11.1, 5.5];
        let series = series_from(2021, 6, values);
        let index = seasonal_indices(&series).unwrap();

        assert_relative_eq!(index.weighted_mean(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn unobserved_months_have_no_index() {
        let series = series_from(2023, 3, vec![1.0, 2.0, 3.0]);
        let index = seasonal_indices(&series).unwrap();

        assert_eq!(index.observed_months().collect::<Vec<_>>(), vec![3, 4, 5]);
        assert!(index.get(6).is_none());
        assert!(!index.is_observed(1));
        assert_eq!(index.count(6), 0);
    }

    #[test]
    fn out_of_range_month_is_none() {
        let series = series_from(2023, 1, vec![1.0, 2.0, 3.0]);
        let index = seasonal_indices(&series).unwrap();

        assert!(index.get(0).is_none());
        assert!(index.get(13).is_none());
        assert_eq!(index.count(13), 0);
    }

    #[test]
    fn zero_mean_is_degenerate() {
        let series = series_from(2023, 1, vec![-5.0, 0.0, 5.0]);
        assert!(matches!(
            seasonal_indices(&series),
            Err(ForecastError::DegenerateSeries(_))
        ));
    }

    #[test]
    fn mixed_sign_series_is_degenerate() {
        // Overall mean is -11/3, so January's positive mean gives a negative index
        let series = series_from(2023, 1, vec![10.0, -1.0, -20.0]);
        assert!(matches!(
            seasonal_indices(&series),
            Err(ForecastError::DegenerateSeries(_))
        ));
    }

    #[test]
    fn zero_month_mean_is_degenerate() {
        let series = series_from(2023, 1, vec![10.0, 0.0, 20.0]);
        assert!(matches!(
            seasonal_indices(&series),
            Err(ForecastError::DegenerateSeries(_))
        ));
    }

    #[test]
    fn all_negative_series_has_positive_indices() {
        let series = series_from(2023, 1, vec![-10.0, -20.0, -30.0]);
        let index = seasonal_indices(&series).unwrap();
        assert_relative_eq!(index.get(1).unwrap(), 0.5, epsilon = 1e-12);
        assert_relative_eq!(index.get(3).unwrap(), 1.5, epsilon = 1e-12);
    }

    #[test]
    fn empty_series_is_rejected() {
        let series = MonthlySeriesBuilder::new().build().unwrap();
        assert!(matches!(
            seasonal_indices(&series),
            Err(ForecastError::EmptyData)
        ));
    }
}
