/*
* Isochron, part of the Nyx Space tools
* Copyright (C) 2017-onward Christopher Rabotin <christopher.rabotin@gmail.com> et al. (cf. https://github.com/nyx-space/isochron/graphs/contributors)
* This Source Code Form is subject to the terms of the Mozilla Public
* License, v. 2.0. If a copy of the MPL was not distributed with this
* file, You can obtain one at https://mozilla.org/MPL/2.0/.
*
* Documentation: https://nyxspace.com/
*/

mod formatting;
mod ops;
mod parse;

pub use formatting::{DateStyle, TimeFormat};

use crate::calendar::{
    carry_days, days_in_month, days_in_year, gregorian_from_ordinal, january_1_weekday,
    ordinal_day, weeks_in_year,
};
use crate::duration::split_hms;
use crate::errors::{IsochronError, ParsingError};
use crate::{system_time, SECONDS_PER_DAY, SECONDS_PER_DAY_I32, UNIX_EPOCH_OFFSET_SECONDS};

#[cfg(feature = "serde")]
use core::str::FromStr;
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A specific moment on the ISO 8601 calendar, stored as (year, ordinal day-of-year,
/// second-of-day, UTC offset).
///
/// The ordinal storage keeps day arithmetic cheap; the Gregorian (month, day) and ISO
/// week-date views are derived on demand. Comparison and equality are timezone-aware: two
/// instants that denote the same UTC moment through different offsets compare equal.
#[derive(Copy, Clone)]
pub struct DateTime {
    /// Gregorian year, >= 1.
    pub(crate) years: i32,
    /// Ordinal day of the year, in [1, days_in_year(years)].
    pub(crate) days: i32,
    /// Seconds since midnight at the local offset, in [0, 86_399].
    pub(crate) seconds: i32,
    /// Signed seconds east of UTC, magnitude below 86_400.
    pub(crate) offset: i32,
}

impl DateTime {
    /// The UNIX reference epoch, 1970-01-01 at midnight UTC.
    pub const UNIX_EPOCH: Self = Self {
        years: 1970,
        days: 1,
        seconds: 0,
        offset: 0,
    };

    /// Reads the current moment from the host clock, carrying the host's local UTC offset.
    #[must_use]
    pub fn now() -> Self {
        let (timestamp, _) = system_time::now_timestamp();
        Self::from_unix_seconds_with_offset(timestamp, system_time::local_utc_offset())
    }

    /// Builds a DateTime from whole seconds since the UNIX epoch, in UTC.
    #[must_use]
    pub fn from_unix_seconds(timestamp: i64) -> Self {
        Self::from_unix_seconds_with_offset(timestamp, 0)
    }

    /// Builds a DateTime from whole seconds since the UNIX epoch, expressed at the provided
    /// UTC offset (the wall-clock fields are shifted, the instant denoted is unchanged).
    #[must_use]
    pub fn from_unix_seconds_with_offset(timestamp: i64, offset: i32) -> Self {
        let wall = timestamp + i64::from(offset);
        let mut days = wall.div_euclid(SECONDS_PER_DAY) as i32 + 1;
        let seconds = wall.rem_euclid(SECONDS_PER_DAY) as i32;
        let mut years = 1970;
        carry_days(&mut years, &mut days);
        Self {
            years,
            days,
            seconds,
            offset,
        }
    }

    /// Builds a DateTime from a Gregorian calendar date, at midnight UTC.
    ///
    /// Note: the month is ONE indexed, i.e. January is month 1 and December is month 12.
    pub fn from_gregorian(year: i32, month: u32, day: u32) -> Result<Self, IsochronError> {
        if !(1..=12).contains(&month) {
            return Err(IsochronError::Parse {
                source: ParsingError::OutOfRange {
                    field: "month",
                    value: i64::from(month),
                },
                details: "building from a Gregorian date",
            });
        }
        if day < 1 || day as i32 > days_in_month(month, year) {
            return Err(IsochronError::Parse {
                source: ParsingError::OutOfRange {
                    field: "day of month",
                    value: i64::from(day),
                },
                details: "building from a Gregorian date",
            });
        }
        Self::from_ordinal(year, ordinal_day(year, month, day) as u32)
    }

    /// Builds a DateTime from a Gregorian date and a time of day, at UTC.
    pub fn from_gregorian_hms(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self, IsochronError> {
        let mut dt = Self::from_gregorian(year, month, day)?;
        for (field, value, bound) in [
            ("hour", hour, 24),
            ("minute", minute, 60),
            ("second", second, 60),
        ] {
            if value >= bound {
                return Err(IsochronError::Parse {
                    source: ParsingError::OutOfRange {
                        field,
                        value: i64::from(value),
                    },
                    details: "building from a time of day",
                });
            }
        }
        dt.seconds = (hour * 3_600 + minute * 60 + second) as i32;
        Ok(dt)
    }

    /// Builds a DateTime from a year and the 1-based ordinal day of that year, at midnight UTC.
    pub fn from_ordinal(year: i32, day: u32) -> Result<Self, IsochronError> {
        if year < 1 {
            return Err(IsochronError::InvalidDate {
                details: "years start at 1",
            });
        }
        if day < 1 || day as i32 > days_in_year(year) {
            return Err(IsochronError::Parse {
                source: ParsingError::OutOfRange {
                    field: "day of year",
                    value: i64::from(day),
                },
                details: "building from an ordinal date",
            });
        }
        Ok(Self {
            years: year,
            days: day as i32,
            seconds: 0,
            offset: 0,
        })
    }

    /// Builds a DateTime from an ISO week date (year, week, weekday with Monday = 1), at
    /// midnight UTC. Week 1 is the week containing the first Thursday of the year, so the
    /// resolved calendar date may fall in the previous or following Gregorian year:
    /// `2009-W01-1` is 2008-12-29 and `2009-W53-7` is 2010-01-03.
    pub fn from_iso_week(year: i32, week: u32, day: u32) -> Result<Self, IsochronError> {
        if week < 1 || week as i32 > weeks_in_year(year) {
            return Err(IsochronError::Parse {
                source: ParsingError::OutOfRange {
                    field: "week",
                    value: i64::from(week),
                },
                details: "building from an ISO week date",
            });
        }
        if !(1..=7).contains(&day) {
            return Err(IsochronError::Parse {
                source: ParsingError::OutOfRange {
                    field: "weekday",
                    value: i64::from(day),
                },
                details: "building from an ISO week date",
            });
        }

        let jan1 = january_1_weekday(year);
        let mut days = (week as i32 - 1) * 7;
        // Align week 1 on the week of the first Thursday.
        if jan1 <= 4 {
            days += 1 - jan1;
        } else {
            days += 8 - jan1;
        }
        days += day as i32;

        let mut years = year;
        carry_days(&mut years, &mut days);
        Ok(Self {
            years,
            days,
            seconds: 0,
            offset: 0,
        })
    }

    /// Returns a copy carrying the provided UTC offset, shifting the wall-clock fields so the
    /// denoted instant is unchanged.
    pub fn in_offset(&self, offset: i32) -> Result<Self, IsochronError> {
        if offset.abs() >= SECONDS_PER_DAY_I32 {
            return Err(IsochronError::Parse {
                source: ParsingError::OutOfRange {
                    field: "UTC offset",
                    value: i64::from(offset),
                },
                details: "offsets span less than a day",
            });
        }
        let mut shifted = self.to_utc();
        shifted.add_seconds(i64::from(offset));
        shifted.offset = offset;
        Ok(shifted)
    }

    /// The Gregorian year.
    pub const fn year(&self) -> i32 {
        self.years
    }

    /// The 1-based ordinal day of the year.
    pub const fn ordinal_day(&self) -> u32 {
        self.days as u32
    }

    /// Seconds since midnight at this instant's offset.
    pub const fn seconds_of_day(&self) -> u32 {
        self.seconds as u32
    }

    /// Signed seconds east of UTC.
    pub const fn utc_offset(&self) -> i32 {
        self.offset
    }

    /// Returns the Gregorian (year, month, day) view of this instant.
    #[must_use]
    pub fn to_gregorian(&self) -> (i32, u32, u32) {
        let (month, day) = gregorian_from_ordinal(self.years, self.days);
        (self.years, month, day)
    }

    /// Returns the ordinal (year, day-of-year) view of this instant.
    #[must_use]
    pub const fn to_ordinal(&self) -> (i32, u32) {
        (self.years, self.days as u32)
    }

    /// Returns the ISO week-date (year, week, weekday) view of this instant, with weeks
    /// starting on Monday and week 1 containing the first Thursday of the year.
    #[must_use]
    pub fn to_iso_week(&self) -> (i32, u32, u32) {
        let jan1 = january_1_weekday(self.years);

        // Weekday for the ordinal day.
        let h = self.days + jan1 - 1;
        let weekday = 1 + (h - 1) % 7;

        // The first days of January may belong to the last week of the previous year.
        let mut year_num = self.years;
        let mut week = 0;
        if self.days <= 8 - jan1 && jan1 > 4 {
            year_num = self.years - 1;
            week = weeks_in_year(year_num);
        }

        // The last days of December may belong to week 1 of the following year.
        if year_num == self.years {
            let correction = 4 - weekday;
            if days_in_year(year_num) - self.days < correction {
                year_num = self.years + 1;
                week = 1;
            }
        }

        if year_num == self.years {
            let j = self.days + (7 - weekday) + (jan1 - 1);
            week = j / 7;
            if jan1 > 4 {
                week -= 1;
            }
        }

        (year_num, week as u32, weekday as u32)
    }

    /// Returns the (hours, minutes, seconds) of the time of day at this instant's offset.
    #[must_use]
    pub fn to_time_of_day(&self) -> (u32, u32, u32) {
        split_hms(i64::from(self.seconds))
    }

    /// Returns a copy normalized to UTC: the offset is folded into the day and second fields
    /// and zeroed.
    #[must_use]
    pub fn to_utc(&self) -> Self {
        let mut utc = *self;
        utc.offset = 0;
        if self.offset != 0 {
            utc.add_seconds(-i64::from(self.offset));
        }
        utc
    }

    /// Returns whether this instant upholds the representation invariants. Arithmetic cannot
    /// break them; hand-assembled or out-of-domain values (year zero) can.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.years >= 1
            && self.days >= 1
            && self.days <= days_in_year(self.years)
            && self.seconds >= 0
            && self.seconds < SECONDS_PER_DAY_I32
            && self.offset.abs() < SECONDS_PER_DAY_I32
    }

    pub(crate) fn validated(self) -> Result<Self, IsochronError> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(IsochronError::InvalidDate {
                details: "field out of range after assembly",
            })
        }
    }

    /// Returns the number of seconds between the calendar origin (0001-001 at midnight UTC)
    /// and this instant.
    #[must_use]
    pub fn to_seconds_since_origin(&self) -> i64 {
        let utc = self.to_utc();
        let mut seconds = 0_i64;
        for year in 1..utc.years {
            seconds += SECONDS_PER_DAY * i64::from(days_in_year(year));
        }
        seconds += SECONDS_PER_DAY * i64::from(utc.days - 1);
        seconds + i64::from(utc.seconds)
    }

    /// Returns the number of seconds between the UNIX epoch (1970-01-01 at midnight UTC) and
    /// this instant.
    #[must_use]
    pub fn to_unix_seconds(&self) -> i64 {
        self.to_seconds_since_origin() - UNIX_EPOCH_OFFSET_SECONDS
    }
}

#[cfg(feature = "serde")]
impl Serialize for DateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for DateTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        DateTime::from_str(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod ut_datetime {
    use super::DateTime;

    #[test]
    fn unix_round_trip() {
        assert_eq!(DateTime::from_unix_seconds(0), DateTime::UNIX_EPOCH);
        for timestamp in [0, 1, 86_399, 86_400, 951_782_400, 1_583_020_800, -1, -86_401] {
            let dt = DateTime::from_unix_seconds(timestamp);
            assert!(dt.is_valid());
            assert_eq!(dt.to_unix_seconds(), timestamp);
        }
        // One second before the epoch is New Year's Eve 1969.
        let dt = DateTime::from_unix_seconds(-1);
        assert_eq!(dt.to_gregorian(), (1969, 12, 31));
        assert_eq!(dt.to_time_of_day(), (23, 59, 59));
    }

    #[test]
    fn offset_does_not_move_the_instant() {
        let utc = DateTime::from_unix_seconds(951_782_400); // 2000-02-29 00:00:00 UTC
        let shifted = DateTime::from_unix_seconds_with_offset(951_782_400, -3_600);
        assert_eq!(shifted.to_gregorian(), (2000, 2, 28));
        assert_eq!(shifted.to_time_of_day(), (23, 0, 0));
        assert_eq!(shifted.to_unix_seconds(), utc.to_unix_seconds());
        assert_eq!(shifted, utc);
    }

    #[test]
    fn gregorian_constructors() {
        let dt = DateTime::from_gregorian_hms(2005, 1, 20, 0, 30, 0).unwrap();
        assert_eq!(dt.to_ordinal(), (2005, 20));
        assert_eq!(dt.seconds_of_day(), 1_800);
        assert!(DateTime::from_gregorian(2000, 2, 29).is_ok());
        assert!(DateTime::from_gregorian(1900, 2, 29).is_err());
        assert!(DateTime::from_gregorian(2005, 13, 1).is_err());
        assert!(DateTime::from_gregorian(2005, 4, 31).is_err());
        assert!(DateTime::from_gregorian_hms(2005, 4, 30, 24, 0, 0).is_err());
        assert!(DateTime::from_ordinal(2005, 366).is_err());
        assert!(DateTime::from_ordinal(2004, 366).is_ok());
    }

    #[test]
    fn iso_week_boundaries() {
        let dt = DateTime::from_iso_week(2009, 1, 1).unwrap();
        assert_eq!(dt.to_gregorian(), (2008, 12, 29));
        let dt = DateTime::from_iso_week(2009, 53, 7).unwrap();
        assert_eq!(dt.to_gregorian(), (2010, 1, 3));
        assert_eq!(dt.to_iso_week(), (2009, 53, 7));
        assert!(DateTime::from_iso_week(2008, 53, 1).is_err());
        assert!(DateTime::from_iso_week(2009, 54, 1).is_err());
        assert!(DateTime::from_iso_week(2009, 1, 8).is_err());

        // Round trip every day of a year straddling both week-date edge cases.
        for ordinal in 1..=365u32 {
            let dt = DateTime::from_ordinal(2009, ordinal).unwrap();
            let (wy, week, weekday) = dt.to_iso_week();
            assert_eq!(DateTime::from_iso_week(wy, week, weekday).unwrap(), dt);
        }
    }

    #[test]
    fn seconds_since_origin() {
        assert_eq!(
            DateTime::UNIX_EPOCH.to_seconds_since_origin(),
            crate::UNIX_EPOCH_OFFSET_SECONDS
        );
        assert_eq!(DateTime::UNIX_EPOCH.to_unix_seconds(), 0);
    }

    #[test]
    fn in_offset_shifts_wall_clock() {
        let utc = DateTime::from_gregorian_hms(2020, 2, 29, 10, 0, 0).unwrap();
        let shifted = utc.in_offset(7_200).unwrap();
        assert_eq!(shifted.to_time_of_day(), (12, 0, 0));
        assert_eq!(shifted, utc);
        assert!(utc.in_offset(90_000).is_err());
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_serdes() {
        let dt = DateTime::from_gregorian_hms(2005, 1, 20, 0, 30, 0).unwrap();
        let content = r#""2005-01-20 00:30:00Z""#;
        assert_eq!(content, serde_json::to_string(&dt).unwrap());
        let parsed: DateTime = serde_json::from_str(content).unwrap();
        assert_eq!(dt, parsed);
    }
}
