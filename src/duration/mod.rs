/*
* Isochron, part of the Nyx Space tools
* Copyright (C) 2017-onward Christopher Rabotin <christopher.rabotin@gmail.com> et al. (cf. https://github.com/nyx-space/isochron/graphs/contributors)
* This Source Code Form is subject to the terms of the Mozilla Public
* License, v. 2.0. If a copy of the MPL was not distributed with this
* file, You can obtain one at https://mozilla.org/MPL/2.0/.
*
* Documentation: https://nyxspace.com/
*/

use crate::{
    APPROX_DAYS_PER_MONTH, APPROX_DAYS_PER_YEAR, DAYS_PER_WEEK, SECONDS_PER_DAY, SECONDS_PER_HOUR,
    SECONDS_PER_MINUTE,
};
use core::fmt;
use core::ops::{Add, Neg, Sub};

#[cfg(feature = "serde")]
use core::str::FromStr;
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub mod parse;

/// An ISO 8601 duration with year, month, day, and second components, all signed.
///
/// The year and month components are **date-relative**: one month is not a fixed number of
/// seconds, so it is carried symbolically and only resolved (with day-of-month clamping) when
/// the duration is applied to a [`DateTime`](crate::DateTime).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Duration {
    pub(crate) years: i32,
    pub(crate) months: i32,
    pub(crate) days: i32,
    pub(crate) seconds: i64,
}

impl Duration {
    /// The zero duration.
    pub const ZERO: Self = Self {
        years: 0,
        months: 0,
        days: 0,
        seconds: 0,
    };

    /// Creates a duration from all four components.
    pub const fn compose(years: i32, months: i32, days: i32, seconds: i64) -> Self {
        Self {
            years,
            months,
            days,
            seconds,
        }
    }

    pub const fn from_years(years: i32) -> Self {
        Self::compose(years, 0, 0, 0)
    }

    pub const fn from_months(months: i32) -> Self {
        Self::compose(0, months, 0, 0)
    }

    pub const fn from_weeks(weeks: i32) -> Self {
        Self::compose(0, 0, weeks * DAYS_PER_WEEK, 0)
    }

    pub const fn from_days(days: i32) -> Self {
        Self::compose(0, 0, days, 0)
    }

    pub const fn from_hours(hours: i64) -> Self {
        Self::compose(0, 0, 0, hours * SECONDS_PER_HOUR)
    }

    pub const fn from_minutes(minutes: i64) -> Self {
        Self::compose(0, 0, 0, minutes * SECONDS_PER_MINUTE)
    }

    pub const fn from_seconds(seconds: i64) -> Self {
        Self::compose(0, 0, 0, seconds)
    }

    /// Signed year component.
    pub const fn years(&self) -> i32 {
        self.years
    }

    /// Signed month component. Never converted to days by arithmetic.
    pub const fn months(&self) -> i32 {
        self.months
    }

    /// Signed day component. May exceed a year; applied with year carry on a date.
    pub const fn days(&self) -> i32 {
        self.days
    }

    /// Signed second component.
    pub const fn seconds(&self) -> i64 {
        self.seconds
    }

    pub const fn is_zero(&self) -> bool {
        self.years == 0 && self.months == 0 && self.days == 0 && self.seconds == 0
    }

    /// Returns this duration as a flat second count.
    ///
    /// **Approximation**: a month counts as 30 days and a year as 365 days, since both are
    /// date-relative quantities. Exact arithmetic requires applying the duration to a
    /// [`DateTime`](crate::DateTime) instead.
    pub const fn to_seconds(&self) -> i64 {
        self.years as i64 * APPROX_DAYS_PER_YEAR * SECONDS_PER_DAY
            + self.months as i64 * APPROX_DAYS_PER_MONTH * SECONDS_PER_DAY
            + self.days as i64 * SECONDS_PER_DAY
            + self.seconds
    }

    /// Renders this duration in the canonical ISO 8601 `P…` notation, e.g. `P1Y2M10DT2H30M`.
    /// The zero duration renders as `PT0S`. This notation round-trips through `FromStr`.
    pub fn to_iso8601(&self) -> String {
        if self.is_zero() {
            return "PT0S".to_string();
        }
        let mut out = String::from("P");
        if self.years != 0 {
            out.push_str(&format!("{}Y", self.years));
        }
        if self.months != 0 {
            out.push_str(&format!("{}M", self.months));
        }
        if self.days != 0 {
            out.push_str(&format!("{}D", self.days));
        }
        if self.seconds != 0 {
            out.push('T');
            // Truncating division keeps all three parts on the same sign.
            let hours = self.seconds / SECONDS_PER_HOUR;
            let minutes = (self.seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
            let seconds = self.seconds % SECONDS_PER_MINUTE;
            if hours != 0 {
                out.push_str(&format!("{hours}H"));
            }
            if minutes != 0 {
                out.push_str(&format!("{minutes}M"));
            }
            if seconds != 0 {
                out.push_str(&format!("{seconds}S"));
            }
        }
        out
    }
}

/// Splits an absolute second count into (hours, minutes, seconds).
pub(crate) fn split_hms(seconds: i64) -> (u32, u32, u32) {
    let seconds = seconds.unsigned_abs();
    let hours = seconds / SECONDS_PER_HOUR as u64;
    let minutes = (seconds % SECONDS_PER_HOUR as u64) / SECONDS_PER_MINUTE as u64;
    (hours as u32, minutes as u32, (seconds % 60) as u32)
}

impl fmt::Display for Duration {
    /// Prints this duration as prose, omitting zero components, e.g.
    /// `1 year 2 months 10 days 9000 seconds ( 2 hours 30 minutes )`.
    /// The zero duration prints as the empty string.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut insert_space = false;
        for (value, unit) in [
            (self.years, "year"),
            (self.months, "month"),
            (self.days, "day"),
        ] {
            if value != 0 {
                if insert_space {
                    write!(f, " ")?;
                }
                write!(f, "{} {}{}", value, unit, if value > 1 { "s" } else { "" })?;
                insert_space = true;
            }
        }
        if self.seconds != 0 {
            if insert_space {
                write!(f, " ")?;
            }
            write!(f, "{} seconds (", self.seconds)?;
            let (hours, minutes, seconds) = split_hms(self.seconds);
            for (value, unit) in [(hours, "hour"), (minutes, "minute"), (seconds, "second")] {
                if value != 0 {
                    write!(f, " {} {}{}", value, unit, if value > 1 { "s" } else { "" })?;
                }
            }
            write!(f, " )")?;
        }
        Ok(())
    }
}

impl Neg for Duration {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            years: -self.years,
            months: -self.months,
            days: -self.days,
            seconds: -self.seconds,
        }
    }
}

impl Add for Duration {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            years: self.years + rhs.years,
            months: self.months + rhs.months,
            days: self.days + rhs.days,
            seconds: self.seconds + rhs.seconds,
        }
    }
}

impl Sub for Duration {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + -rhs
    }
}

#[cfg(feature = "serde")]
impl Serialize for Duration {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_iso8601())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Duration::from_str(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod ut_duration {
    use super::Duration;

    #[test]
    fn approximate_seconds() {
        assert_eq!(Duration::from_months(1).to_seconds(), 2_592_000);
        assert_eq!(Duration::from_years(1).to_seconds(), 31_536_000);
        assert_eq!(Duration::from_weeks(2).to_seconds(), 14 * 86_400);
        assert_eq!(Duration::from_minutes(-90).to_seconds(), -5_400);
        assert_eq!(Duration::ZERO.to_seconds(), 0);
    }

    #[test]
    fn prose() {
        let dur = Duration::compose(1, 2, 10, 9_000);
        assert_eq!(
            format!("{dur}"),
            "1 year 2 months 10 days 9000 seconds ( 2 hours 30 minutes )"
        );
        assert_eq!(format!("{}", Duration::from_days(1)), "1 day");
        assert_eq!(format!("{}", Duration::from_seconds(61)), "61 seconds ( 1 minute 1 second )");
        assert_eq!(format!("{}", Duration::ZERO), "");
    }

    #[test]
    fn iso_rendering() {
        assert_eq!(Duration::compose(1, 2, 10, 9_000).to_iso8601(), "P1Y2M10DT2H30M");
        assert_eq!(Duration::from_seconds(61).to_iso8601(), "PT1M1S");
        assert_eq!(Duration::from_weeks(2).to_iso8601(), "P14D");
        assert_eq!(Duration::ZERO.to_iso8601(), "PT0S");
        assert_eq!((-Duration::from_hours(1)).to_iso8601(), "PT-1H");
    }

    #[test]
    fn field_ops() {
        let a = Duration::compose(1, 0, 3, 30);
        let b = Duration::compose(0, 2, 1, 10);
        assert_eq!(a + b, Duration::compose(1, 2, 4, 40));
        assert_eq!(a - b, Duration::compose(1, -2, 2, 20));
        assert_eq!(-(a - a), Duration::ZERO);
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_serdes() {
        let dur = Duration::compose(1, 2, 10, 9_000);
        let content = r#""P1Y2M10DT2H30M""#;
        assert_eq!(content, serde_json::to_string(&dur).unwrap());
        let parsed: Duration = serde_json::from_str(content).unwrap();
        assert_eq!(dur, parsed);
    }
}
