//! Calendar time of clock and its GPS time of week conversion.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Duration of the GPS week [s]
pub const SECONDS_PER_WEEK: f64 = 604_800.0;

/// Half a GPS week [s], the rollover threshold
pub const HALF_WEEK: f64 = 302_400.0;

/// Julian Day of the GPS time origin (1980-01-06 00:00:00)
const JD_GPS_ORIGIN: f64 = 2_444_244.5;

/// Calendar time of clock (ToC), as published on the first
/// line of a broadcast navigation record.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Toc {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: f64,
}

impl Toc {
    /// Converts Self to GPS time of week [s], in [0, 604800).
    /// The conversion runs through the Julian Day of the civil date and
    /// deliberately discards the week counter: only the intra week offset
    /// survives. Leap seconds are not accounted for. Exact for any
    /// Gregorian date from the GPS origin (1980-01-06) onwards.
    pub fn to_time_of_week(&self) -> f64 {
        let jd = julian_day(self.year, self.month, self.day) as f64
            + (self.hour as f64 - 12.0) / 24.0
            + self.minute as f64 / 1440.0
            + self.second / 86400.0;
        ((jd - JD_GPS_ORIGIN) * 86400.0).rem_euclid(SECONDS_PER_WEEK)
    }
}

/// Julian Day number of a civil (Gregorian) date at 12:00:00,
/// from the standard integer formula with Gregorian leap correction.
fn julian_day(year: i32, month: u8, day: u8) -> i64 {
    let a = (14 - month as i64) / 12;
    let y = year as i64 + 4800 - a;
    let m = month as i64 + 12 * a - 3;
    day as i64 + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - 32045
}
