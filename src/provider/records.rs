//! Plantation harvest records.

use chrono::{Datelike, NaiveDate};
use std::fmt;

/// One row of plantation data: a field's harvest on a given date.
#[derive(Debug, Clone, PartialEq)]
pub struct PlantationRecord {
    pub date: NaiveDate,
    /// Field (block) identifier.
    pub field: String,
    /// Year the palms in this field were planted.
    pub year_planted: Option<i32>,
    pub fertilizer_type: Option<String>,
    /// Fertilizer applied, in bags.
    pub fertilizer_usage: f64,
    /// Number of fertilizer application rounds.
    pub fertilizer_rounds: u32,
    pub weed_control_type: Option<String>,
    pub weed_control_rounds: u32,
    pub pest_disease_type: Option<String>,
    pub pest_disease_rounds: u32,
    /// Fresh fruit bunch yield in metric tons.
    pub yield_mt: f64,
    /// Number of fresh fruit bunches harvested.
    pub bunches: f64,
}

impl PlantationRecord {
    pub fn new(date: NaiveDate, field: impl Into<String>, yield_mt: f64, bunches: f64) -> Self {
        Self {
            date,
            field: field.into(),
            year_planted: None,
            fertilizer_type: None,
            fertilizer_usage: 0.0,
            fertilizer_rounds: 0,
            weed_control_type: None,
            weed_control_rounds: 0,
            pest_disease_type: None,
            pest_disease_rounds: 0,
            yield_mt,
            bunches,
        }
    }

    pub fn with_year_planted(mut self, year: i32) -> Self {
        self.year_planted = Some(year);
        self
    }

    pub fn with_fertilizer(mut self, fertilizer: impl Into<String>) -> Self {
        self.fertilizer_type = Some(fertilizer.into());
        self
    }

    /// Fertilizer quantity (bags) and number of application rounds.
    pub fn with_fertilizer_usage(mut self, bags: f64, rounds: u32) -> Self {
        self.fertilizer_usage = bags;
        self.fertilizer_rounds = rounds;
        self
    }

    pub fn with_weed_control(mut self, kind: impl Into<String>, rounds: u32) -> Self {
        self.weed_control_type = Some(kind.into());
        self.weed_control_rounds = rounds;
        self
    }

    pub fn with_pest_disease(mut self, kind: impl Into<String>, rounds: u32) -> Self {
        self.pest_disease_type = Some(kind.into());
        self.pest_disease_rounds = rounds;
        self
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// Month of the year, 1 through 12.
    pub fn month(&self) -> u32 {
        self.date.month()
    }

    /// Value of the selected metric for this record.
    pub fn metric(&self, metric: Metric) -> f64 {
        match metric {
            Metric::YieldMt => self.yield_mt,
            Metric::Bunches => self.bunches,
        }
    }

    /// Type applied for `treatment`, if the record names one.
    pub fn treatment_type(&self, treatment: Treatment) -> Option<&str> {
        match treatment {
            Treatment::Fertilizer => self.fertilizer_type.as_deref(),
            Treatment::WeedControl => self.weed_control_type.as_deref(),
            Treatment::PestDisease => self.pest_disease_type.as_deref(),
        }
    }

    /// Number of rounds recorded for `treatment`.
    pub fn treatment_rounds(&self, treatment: Treatment) -> u32 {
        match treatment {
            Treatment::Fertilizer => self.fertilizer_rounds,
            Treatment::WeedControl => self.weed_control_rounds,
            Treatment::PestDisease => self.pest_disease_rounds,
        }
    }
}

/// Numeric column of a record to aggregate and forecast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Metric {
    /// Yield in metric tons.
    #[default]
    YieldMt,
    /// Bunch count.
    Bunches,
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::YieldMt => write!(f, "MT"),
            Metric::Bunches => write!(f, "Bunches"),
        }
    }
}

/// Field treatment activity recorded alongside the harvest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Treatment {
    Fertilizer,
    WeedControl,
    PestDisease,
}

impl fmt::Display for Treatment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Treatment::Fertilizer => write!(f, "fertilizer"),
            Treatment::WeedControl => write!(f, "weed control"),
            Treatment::PestDisease => write!(f, "pest and disease"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_exposes_calendar_parts_and_metrics() {
        let record = PlantationRecord::new(NaiveDate::from_ymd_opt(2023, 7, 14).unwrap(), "A1", 12.5, 830.0)
            .with_year_planted(2009)
            .with_fertilizer("NPK");

        assert_eq!(record.year(), 2023);
        assert_eq!(record.month(), 7);
        assert_eq!(record.metric(Metric::YieldMt), 12.5);
        assert_eq!(record.metric(Metric::Bunches), 830.0);
        assert_eq!(record.year_planted, Some(2009));
        assert_eq!(record.fertilizer_type.as_deref(), Some("NPK"));
    }

    #[test]
    fn record_exposes_treatments() {
        let record = PlantationRecord::new(NaiveDate::from_ymd_opt(2023, 3, 2).unwrap(), "B4", 8.0, 500.0)
            .with_fertilizer("MOP")
            .with_fertilizer_usage(14.0, 2)
            .with_weed_control("Spraying", 3);

        assert_eq!(record.fertilizer_usage, 14.0);
        assert_eq!(record.treatment_type(Treatment::Fertilizer), Some("MOP"));
        assert_eq!(record.treatment_rounds(Treatment::Fertilizer), 2);
        assert_eq!(record.treatment_type(Treatment::WeedControl), Some("Spraying"));
        assert_eq!(record.treatment_rounds(Treatment::WeedControl), 3);
        assert_eq!(record.treatment_type(Treatment::PestDisease), None);
        assert_eq!(record.treatment_rounds(Treatment::PestDisease), 0);
    }

    #[test]
    fn metric_labels() {
        assert_eq!(Metric::YieldMt.to_string(), "MT");
        assert_eq!(Metric::Bunches.to_string(), "Bunches");
        assert_eq!(Metric::default(), Metric::YieldMt);
    }
}
