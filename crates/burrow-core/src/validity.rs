use crate::error::CoreError;
use jiff::SignedDuration;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Validity applied when a creation request does not specify one.
pub const DEFAULT_VALIDITY_DAYS: u32 = 30;

/// Upper bound on the validity of a single link (about one hundred years).
///
/// Keeps `created_at + validity` well inside the range of [`jiff::Timestamp`].
pub const MAX_VALIDITY_DAYS: u32 = 36_500;

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Lifetime of a short link, in whole days.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct ValidityDays(u32);

impl ValidityDays {
    /// Creates a validity from a caller-supplied number of days.
    ///
    /// Zero, negative values and values above [`MAX_VALIDITY_DAYS`] are rejected.
    pub fn new(days: i64) -> Result<Self, CoreError> {
        if days <= 0 {
            return Err(CoreError::InvalidValidity(format!(
                "validity must be a positive number of days, got {}",
                days
            )));
        }

        if days > i64::from(MAX_VALIDITY_DAYS) {
            return Err(CoreError::InvalidValidity(format!(
                "validity must not exceed {} days, got {}",
                MAX_VALIDITY_DAYS, days
            )));
        }

        Ok(Self(days as u32))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// The validity as an exact duration of `days * 24h`.
    pub fn as_duration(self) -> SignedDuration {
        SignedDuration::from_secs(i64::from(self.0) * SECONDS_PER_DAY)
    }
}

impl Default for ValidityDays {
    fn default() -> Self {
        Self(DEFAULT_VALIDITY_DAYS)
    }
}

impl Display for ValidityDays {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}d", self.0)
    }
}

impl TryFrom<i64> for ValidityDays {
    type Error = CoreError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ValidityDays> for u32 {
    fn from(value: ValidityDays) -> Self {
        value.0
    }
}
