//! Forecast horizon as selected by an interactive caller.

use crate::error::{ForecastError, Result};
use std::fmt;

/// Number of future months to project, bounded to `1..=Horizon::MAX_MONTHS`.
///
/// The engine itself accepts any `usize`; this type is for input surfaces
/// that want to enforce the usual range before calling it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Horizon(usize);

impl Horizon {
    pub const MAX_MONTHS: usize = 60;

    pub fn new(months: usize) -> Result<Self> {
        if months == 0 || months > Self::MAX_MONTHS {
            return Err(ForecastError::InvalidParameter(format!(
                "horizon must be between 1 and {} months, got {}",
                Self::MAX_MONTHS,
                months
            )));
        }
        Ok(Self(months))
    }

    pub fn months(&self) -> usize {
        self.0
    }
}

impl Default for Horizon {
    fn default() -> Self {
        Self(12)
    }
}

impl From<Horizon> for usize {
    fn from(h: Horizon) -> usize {
        h.0
    }
}

impl fmt::Display for Horizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (years, months) = (self.0 / 12, self.0 % 12);
        match (years, months) {
            (0, 1) => write!(f, "1 month"),
            (0, m) => write!(f, "{} months", m),
            (1, 0) => write!(f, "1 year"),
            (y, 0) => write!(f, "{} years", y),
            (y, m) => write!(f, "{} years, {} months", y, m),
        }
    }
}
