//! Data provider: turns plantation records into a monthly forecast input.
//!
//! Records are selected with a [`RecordFilter`], then summed per calendar
//! month by [`monthly_series`], which forward-fills months without records.
//! [`totals_by_treatment`], [`monthly_efficiency`] and [`MonthlyStats`] cover
//! the descriptive figures: treatment breakdowns, bunch weights and peaks.

mod aggregate;
mod analytics;
mod filter;
mod records;

pub use aggregate::{monthly_series, RecordKpis};
pub use analytics::{
    field_efficiency, monthly_efficiency, totals_by_treatment, Efficiency, EfficiencySummary,
    MonthlyStats, TreatmentTotals,
};
pub use filter::RecordFilter;
pub use records::{Metric, PlantationRecord, Treatment};
