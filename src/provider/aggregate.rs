//! Monthly aggregation of plantation records into forecast input.

use crate::core::{month_start, MonthlySeries, TimeSeriesPoint};
use crate::error::{ForecastError, Result};
use crate::provider::{Metric, PlantationRecord};
use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, instrument};

/// Sum `metric` per calendar month and return a gap-free monthly series.
///
/// Months with no records between the first and last month take the
/// previous month's total.
#[instrument(skip(records))]
pub fn monthly_series<'a, I>(records: I, metric: Metric) -> Result<MonthlySeries>
where
    I: IntoIterator<Item = &'a PlantationRecord>,
{
    let mut totals: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    let mut count = 0usize;
    for record in records {
        *totals.entry(month_start(record.date)).or_insert(0.0) += record.metric(metric);
        count += 1;
    }

    if totals.is_empty() {
        return Err(ForecastError::EmptyData);
    }

    let points: Vec<TimeSeriesPoint> = totals
        .into_iter()
        .map(|(month, value)| TimeSeriesPoint::new(month, value))
        .collect();
    let series = MonthlySeries::forward_filled(&points)?.with_label(metric.to_string());

    debug!(
        records = count,
        observed_months = points.len(),
        filled_months = series.len() - points.len(),
        "aggregated monthly series"
    );
    Ok(series)
}

/// Headline figures over a set of records.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordKpis {
    /// Number of distinct fields.
    pub field_count: usize,
    pub total_yield_mt: f64,
    pub total_bunches: f64,
    /// Fertilizer applied across all records, in bags.
    pub total_fertilizer_usage: f64,
    /// Total yield divided by the number of fields (0 when there are none).
    pub yield_per_field: f64,
    pub bunches_per_field: f64,
    pub fertilizer_per_field: f64,
}

impl RecordKpis {
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a PlantationRecord>,
    {
        let mut fields = BTreeSet::new();
        let mut total_yield_mt = 0.0;
        let mut total_bunches = 0.0;
        let mut total_fertilizer_usage = 0.0;
        for record in records {
            fields.insert(record.field.as_str());
            total_yield_mt += record.yield_mt;
            total_bunches += record.bunches;
            total_fertilizer_usage += record.fertilizer_usage;
        }

        let field_count = fields.len();
        let per_field = |total: f64| {
            if field_count > 0 {
                total / field_count as f64
            } else {
                0.0
            }
        };

        Self {
            field_count,
            total_yield_mt,
            total_bunches,
            total_fertilizer_usage,
            yield_per_field: per_field(total_yield_mt),
            bunches_per_field: per_field(total_bunches),
            fertilizer_per_field: per_field(total_fertilizer_usage),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::RecordFilter;
    use approx::assert_relative_eq;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> Vec<PlantationRecord> {
        vec![
            PlantationRecord::new(ymd(2023, 1, 5), "A", 10.0, 600.0).with_fertilizer_usage(6.0, 1),
            PlantationRecord::new(ymd(2023, 1, 20), "B", 5.0, 300.0).with_fertilizer_usage(3.0, 1),
            PlantationRecord::new(ymd(2023, 2, 11), "A", 12.0, 700.0),
            // no records in March or April
            PlantationRecord::new(ymd(2023, 5, 2), "B", 7.0, 420.0),
        ]
    }

    #[test]
    fn sums_per_month_and_fills_gaps() {
        let series = monthly_series(&sample(), Metric::YieldMt).unwrap();

        assert_eq!(series.first_month(), Some(ymd(2023, 1, 1)));
        assert_eq!(series.last_month(), Some(ymd(2023, 5, 1)));
        assert_eq!(series.values(), &[15.0, 12.0, 12.0, 12.0, 7.0]);
        assert_eq!(series.label(), Some("MT"));
    }

    #[test]
    fn aggregates_selected_metric() {
        let series = monthly_series(&sample(), Metric::Bunches).unwrap();
        assert_eq!(series.values()[0], 900.0);
        assert_eq!(series.label(), Some("Bunches"));
    }

    #[test]
    fn works_with_filtered_records() {
        let records = sample();
        let selected = RecordFilter::new().fields(["A"]).apply(&records);
        let series = monthly_series(selected, Metric::YieldMt).unwrap();
        assert_eq!(series.values(), &[10.0, 12.0]);
    }

    #[test]
    fn unordered_records_are_grouped() {
        let mut records = sample();
        records.reverse();
        let series = monthly_series(&records, Metric::YieldMt).unwrap();
        assert_eq!(series.values(), &[15.0, 12.0, 12.0, 12.0, 7.0]);
    }

    #[test]
    fn no_records_is_empty_data() {
        let records: Vec<PlantationRecord> = Vec::new();
        assert!(matches!(
            monthly_series(&records, Metric::YieldMt),
            Err(ForecastError::EmptyData)
        ));
    }

    #[test]
    fn kpis_count_fields_and_totals() {
        let kpis = RecordKpis::from_records(&sample());
        assert_eq!(kpis.field_count, 2);
        assert_relative_eq!(kpis.total_yield_mt, 34.0, epsilon = 1e-12);
        assert_relative_eq!(kpis.total_bunches, 2020.0, epsilon = 1e-12);
        assert_relative_eq!(kpis.yield_per_field, 17.0, epsilon = 1e-12);
        assert_relative_eq!(kpis.bunches_per_field, 1010.0, epsilon = 1e-12);
        assert_relative_eq!(kpis.total_fertilizer_usage, 9.0, epsilon = 1e-12);
        assert_relative_eq!(kpis.fertilizer_per_field, 4.5, epsilon = 1e-12);

        let empty: Vec<PlantationRecord> = Vec::new();
        let none = RecordKpis::from_records(&empty);
        assert_eq!(none.yield_per_field, 0.0);
        assert_eq!(none.fertilizer_per_field, 0.0);
    }
}
