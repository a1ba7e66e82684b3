//! Descriptive analytics over plantation records.
//!
//! Treatment breakdowns (yield, bunches and rounds per fertilizer, weed
//! control or pest/disease type), harvest efficiency ratios and headline
//! statistics of a monthly series.

use crate::core::{month_start, MonthlySeries};
use crate::error::{ForecastError, Result};
use crate::provider::{PlantationRecord, Treatment};
use crate::utils::stats::mean;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use tracing::{debug, instrument};

/// Harvest and round totals for one treatment type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TreatmentTotals {
    /// Number of records naming this type.
    pub records: usize,
    pub yield_mt: f64,
    pub bunches: f64,
    /// Rounds summed over the records.
    pub total_rounds: u32,
    /// Largest round count on a single record.
    pub max_rounds: u32,
}

/// Group records by the type applied for `treatment` and total each group.
///
/// Records that name no type for the treatment are left out.
#[instrument(skip(records))]
pub fn totals_by_treatment<'a, I>(records: I, treatment: Treatment) -> BTreeMap<String, TreatmentTotals>
where
    I: IntoIterator<Item = &'a PlantationRecord>,
{
    let mut groups: BTreeMap<String, TreatmentTotals> = BTreeMap::new();
    let mut untyped = 0usize;
    for record in records {
        let Some(kind) = record.treatment_type(treatment) else {
            untyped += 1;
            continue;
        };
        let rounds = record.treatment_rounds(treatment);
        let totals = groups.entry(kind.to_string()).or_default();
        totals.records += 1;
        totals.yield_mt += record.yield_mt;
        totals.bunches += record.bunches;
        totals.total_rounds = totals.total_rounds.saturating_add(rounds);
        totals.max_rounds = totals.max_rounds.max(rounds);
    }

    debug!(types = groups.len(), untyped, "grouped records by treatment type");
    groups
}

/// Harvest efficiency ratios.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Efficiency {
    /// Bunches needed for one metric ton.
    pub bunches_per_mt: f64,
    /// Average bunch weight in kilograms.
    pub kg_per_bunch: f64,
}

impl Efficiency {
    /// Ratios of a single record, or `None` unless both yield and bunch count are positive.
    pub fn of(record: &PlantationRecord) -> Option<Self> {
        (record.yield_mt > 0.0 && record.bunches > 0.0).then(|| Self {
            bunches_per_mt: record.bunches / record.yield_mt,
            kg_per_bunch: record.yield_mt * 1000.0 / record.bunches,
        })
    }
}

#[derive(Default)]
struct RatioSums {
    bunches_per_mt: f64,
    kg_per_bunch: f64,
    n: usize,
}

impl RatioSums {
    fn add(&mut self, ratios: Efficiency) {
        self.bunches_per_mt += ratios.bunches_per_mt;
        self.kg_per_bunch += ratios.kg_per_bunch;
        self.n += 1;
    }

    fn mean(&self) -> Efficiency {
        let n = self.n as f64;
        Efficiency {
            bunches_per_mt: self.bunches_per_mt / n,
            kg_per_bunch: self.kg_per_bunch / n,
        }
    }
}

fn mean_efficiency_by<'a, I, K, F>(records: I, key: F) -> BTreeMap<K, Efficiency>
where
    I: IntoIterator<Item = &'a PlantationRecord>,
    K: Ord,
    F: Fn(&PlantationRecord) -> K,
{
    let mut groups: BTreeMap<K, RatioSums> = BTreeMap::new();
    for record in records {
        if let Some(ratios) = Efficiency::of(record) {
            groups.entry(key(record)).or_default().add(ratios);
        }
    }
    groups.into_iter().map(|(k, sums)| (k, sums.mean())).collect()
}

/// Mean of the per-record ratios in each calendar month, keyed by month start.
///
/// Months without a record that has both yield and bunches are absent.
#[instrument(skip(records))]
pub fn monthly_efficiency<'a, I>(records: I) -> BTreeMap<NaiveDate, Efficiency>
where
    I: IntoIterator<Item = &'a PlantationRecord>,
{
    let monthly = mean_efficiency_by(records, |r| month_start(r.date));
    debug!(months = monthly.len(), "computed monthly efficiency");
    monthly
}

/// Mean of the per-record ratios for each field.
pub fn field_efficiency<'a, I>(records: I) -> BTreeMap<String, Efficiency>
where
    I: IntoIterator<Item = &'a PlantationRecord>,
{
    mean_efficiency_by(records, |r| r.field.clone())
}

/// Range and extremes of monthly efficiency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EfficiencySummary {
    /// Mean of the monthly ratios.
    pub average: Efficiency,
    pub min_bunches_per_mt: f64,
    pub max_bunches_per_mt: f64,
    pub min_kg_per_bunch: f64,
    pub max_kg_per_bunch: f64,
    /// Month needing the fewest bunches per metric ton (earliest on ties).
    pub most_efficient_month: NaiveDate,
    /// Month with the heaviest average bunch (earliest on ties).
    pub heaviest_bunch_month: NaiveDate,
}

impl EfficiencySummary {
    /// Summarise the output of [`monthly_efficiency`]; `None` when it is empty.
    pub fn from_monthly(monthly: &BTreeMap<NaiveDate, Efficiency>) -> Option<Self> {
        let (&first_month, &first) = monthly.iter().next()?;
        let mut summary = Self {
            average: first,
            min_bunches_per_mt: first.bunches_per_mt,
            max_bunches_per_mt: first.bunches_per_mt,
            min_kg_per_bunch: first.kg_per_bunch,
            max_kg_per_bunch: first.kg_per_bunch,
            most_efficient_month: first_month,
            heaviest_bunch_month: first_month,
        };

        let mut sums = RatioSums::default();
        for (&month, &ratios) in monthly {
            sums.add(ratios);
            if ratios.bunches_per_mt < summary.min_bunches_per_mt {
                summary.min_bunches_per_mt = ratios.bunches_per_mt;
                summary.most_efficient_month = month;
            }
            if ratios.kg_per_bunch > summary.max_kg_per_bunch {
                summary.max_kg_per_bunch = ratios.kg_per_bunch;
                summary.heaviest_bunch_month = month;
            }
            summary.max_bunches_per_mt = summary.max_bunches_per_mt.max(ratios.bunches_per_mt);
            summary.min_kg_per_bunch = summary.min_kg_per_bunch.min(ratios.kg_per_bunch);
        }
        summary.average = sums.mean();
        Some(summary)
    }
}

/// Headline statistics of a monthly series.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyStats {
    pub peak: f64,
    /// Earliest month holding the peak.
    pub peak_month: NaiveDate,
    pub lowest: f64,
    pub lowest_month: NaiveDate,
    pub average: f64,
    /// Change from the first to the last month in percent, 0 when the first month is 0.
    pub growth_pct: f64,
}

impl MonthlyStats {
    pub fn from_series(series: &MonthlySeries) -> Result<Self> {
        let (first, last) = match (series.points().next(), series.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Err(ForecastError::EmptyData),
        };

        let mut peak = first;
        let mut lowest = first;
        for point in series.points().skip(1) {
            if point.value > peak.value {
                peak = point;
            }
            if point.value < lowest.value {
                lowest = point;
            }
        }

        let growth_pct = if first.value != 0.0 {
            (last.value - first.value) / first.value * 100.0
        } else {
            0.0
        };

        Ok(Self {
            peak: peak.value,
            peak_month: peak.month,
            lowest: lowest.value,
            lowest_month: lowest.month,
            average: mean(series.values()),
            growth_pct,
        })
    }
}
