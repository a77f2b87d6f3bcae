use crate::error::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default sampling interval [s]
pub const DEFAULT_STEP: f64 = 30.0;

/// Tolerance on the closing boundary, so floating point error
/// never drops the final epoch
const BOUNDARY_TOLERANCE: f64 = 1E-9;

/// Linear space of sampling epochs, from `start` to `end` (included),
/// `step` seconds apart. Epochs are GPS time of week [s].
#[derive(Debug, Clone, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimeSeries {
    /// First epoch [s]
    pub start: f64,
    /// Last epoch [s]
    pub end: f64,
    /// Spacing (increment value) [s]
    pub step: f64,
}

impl TimeSeries {
    /// Builds a new [TimeSeries]. `step` must be strictly positive
    /// and `end` may not precede `start`.
    pub fn new(start: f64, end: f64, step: f64) -> Result<Self, Error> {
        if step <= 0.0 || end < start {
            return Err(Error::BadTimeSeriesSpecs);
        }
        Ok(Self { start, end, step })
    }

    /// Returns series length, in terms of epochs
    pub fn length(&self) -> usize {
        ((self.end - self.start + BOUNDARY_TOLERANCE) / self.step).floor() as usize + 1
    }

    /// Returns true if self is a single point series
    pub fn is_single_point(&self) -> bool {
        self.length() == 1
    }

    /// Ascending epoch iterator. The series is restartable:
    /// each call yields a fresh iteration from `start`.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.length()).map(move |i| self.start + i as f64 * self.step)
    }
}
