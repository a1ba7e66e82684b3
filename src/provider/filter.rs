//! Record selection by field, calendar and planting attributes.

use crate::provider::PlantationRecord;
use std::collections::BTreeSet;

/// Selects plantation records. Each empty criterion matches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordFilter {
    fields: BTreeSet<String>,
    years: BTreeSet<i32>,
    months: BTreeSet<u32>,
    years_planted: BTreeSet<i32>,
    fertilizers: BTreeSet<String>,
}

impl RecordFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields.extend(fields.into_iter().map(Into::into));
        self
    }

    /// Calendar years of the harvest date.
    pub fn years(mut self, years: impl IntoIterator<Item = i32>) -> Self {
        self.years.extend(years);
        self
    }

    /// Months of the year (1-12) of the harvest date.
    pub fn months(mut self, months: impl IntoIterator<Item = u32>) -> Self {
        self.months.extend(months);
        self
    }

    pub fn years_planted(mut self, years: impl IntoIterator<Item = i32>) -> Self {
        self.years_planted.extend(years);
        self
    }

    pub fn fertilizers<I, S>(mut self, fertilizers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fertilizers.extend(fertilizers.into_iter().map(Into::into));
        self
    }

    /// Check whether a record passes every criterion.
    ///
    /// Records without a planting year or fertilizer type fail the
    /// corresponding criterion when it is set.
    pub fn matches(&self, record: &PlantationRecord) -> bool {
        (self.fields.is_empty() || self.fields.contains(&record.field))
            && (self.years.is_empty() || self.years.contains(&record.year()))
            && (self.months.is_empty() || self.months.contains(&record.month()))
            && (self.years_planted.is_empty()
                || record
                    .year_planted
                    .is_some_and(|y| self.years_planted.contains(&y)))
            && (self.fertilizers.is_empty()
                || record
                    .fertilizer_type
                    .as_ref()
                    .is_some_and(|f| self.fertilizers.contains(f)))
    }

    /// Records that pass the filter, in input order.
    pub fn apply<'a>(&self, records: &'a [PlantationRecord]) -> Vec<&'a PlantationRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(y: i32, m: u32, field: &str) -> PlantationRecord {
        PlantationRecord::new(NaiveDate::from_ymd_opt(y, m, 10).unwrap(), field, 1.0, 10.0)
    }

    #[test]
    fn empty_filter_matches_everything() {
        let records = vec![record(2022, 1, "A"), record(2023, 5, "B")];
        assert_eq!(RecordFilter::new().apply(&records).len(), 2);
    }

    #[test]
    fn criteria_are_combined() {
        let records = vec![
            record(2022, 1, "A"),
            record(2022, 2, "B"),
            record(2023, 1, "A"),
            record(2023, 3, "C"),
        ];

        let filter = RecordFilter::new().fields(["A", "C"]).years([2023]);
        let selected = filter.apply(&records);
        assert_eq!(selected.len(), 2);
        assert!(selected.iter().all(|r| r.year() == 2023));

        let filter = RecordFilter::new().months([1]);
        assert_eq!(filter.apply(&records).len(), 2);
    }

    #[test]
    fn optional_attributes_must_be_present_when_filtered() {
        let planted = record(2023, 1, "A").with_year_planted(2010).with_fertilizer("NPK");
        let bare = record(2023, 1, "B");

        let filter = RecordFilter::new().years_planted([2010]);
        assert!(filter.matches(&planted));
        assert!(!filter.matches(&bare));

        let filter = RecordFilter::new().fertilizers(["NPK"]);
        assert!(filter.matches(&planted));
        assert!(!filter.matches(&bare));

        let filter = RecordFilter::new().fertilizers(["Urea"]);
        assert!(!filter.matches(&planted));
    }
}
