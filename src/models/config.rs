//! Forecast configuration.

/// What to do when a projected month of the year never occurs in the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingMonthPolicy {
    /// Fail with `ForecastError::MissingSeasonalMonth`.
    #[default]
    Fail,
    /// Apply no seasonal adjustment (index 1.0) to that month.
    Neutral,
}

/// Configuration for the seasonal-trend forecast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastConfig {
    /// Handling of months without a seasonal index.
    pub missing_month: MissingMonthPolicy,
    /// Minimum number of monthly observations required to fit.
    pub min_points: usize,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            missing_month: MissingMonthPolicy::Fail,
            min_points: Self::MIN_POINTS,
        }
    }
}

impl ForecastConfig {
    /// Lower bound on `min_points`.
    pub const MIN_POINTS: usize = 3;

    pub fn new() -> Self {
        Self::default()
    }

    /// Substitute a neutral index for unobserved months instead of failing.
    pub fn neutral_missing_months() -> Self {
        Self {
            missing_month: MissingMonthPolicy::Neutral,
            ..Default::default()
        }
    }

    pub fn with_missing_month(mut self, policy: MissingMonthPolicy) -> Self {
        self.missing_month = policy;
        self
    }

    /// Require more history before fitting. Values below `MIN_POINTS` are raised to it.
    pub fn with_min_points(mut self, min_points: usize) -> Self {
        self.min_points = min_points.max(Self::MIN_POINTS);
        self
    }
}
