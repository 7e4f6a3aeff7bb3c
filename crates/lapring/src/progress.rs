use derive_more::{Display, Into};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Fraction of a full revolution completed. `1.0` is one lap, `2.5` is two
/// and a half.
///
/// Construction clamps anything that is not a finite, non-negative number to
/// zero, so every value held by this type is a valid angle multiplier.
#[derive(
    Debug, Clone, Copy, PartialEq, PartialOrd, Default, Display, Into, Serialize, Deserialize,
)]
#[serde(from = "f64", into = "f64")]
pub struct Progress(f64);

impl Progress {
    pub const ZERO: Self = Self(0.0);
    pub const FULL: Self = Self(1.0);

    pub fn new(value: f64) -> Self {
        if value.is_finite() && value > 0.0 {
            Self(value)
        } else {
            if value != 0.0 {
                log::debug!("Clamping progress {} to 0", value);
            }
            Self::ZERO
        }
    }

    pub fn from_percentage(percentage: f64) -> Self {
        Self::new(percentage / 100.0)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// At least one full lap has been completed.
    pub fn is_wrapped(self) -> bool {
        self.0 >= 1.0
    }

    /// Position within the current lap, in `[0, 1)`.
    pub fn fraction(self) -> f64 {
        self.0.fract()
    }

    /// Number of completed laps.
    pub fn laps(self) -> u64 {
        self.0.trunc() as u64
    }
}

impl From<f64> for Progress {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProgressError {
    #[error("Invalid progress value '{0}' (expected e.g. '0.75' or '75%')")]
    Invalid(String),
}

impl FromStr for Progress {
    type Err = ProgressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || ProgressError::Invalid(s.to_string());

        match trimmed.strip_suffix('%') {
            Some(pct) => pct
                .trim_end()
                .parse::<f64>()
                .map(Self::from_percentage)
                .map_err(|_| invalid()),
            None => trimmed.parse::<f64>().map(Self::new).map_err(|_| invalid()),
        }
    }
}
