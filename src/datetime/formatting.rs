/*
* Isochron, part of the Nyx Space tools
* Copyright (C) 2017-onward Christopher Rabotin <christopher.rabotin@gmail.com> et al. (cf. https://github.com/nyx-space/isochron/graphs/contributors)
* This Source Code Form is subject to the terms of the Mozilla Public
* License, v. 2.0. If a copy of the MPL was not distributed with this
* file, You can obtain one at https://mozilla.org/MPL/2.0/.
*
* Documentation: https://nyxspace.com/
*/

use core::fmt;

use crate::duration::split_hms;
use crate::DateTime;

/// Which textual notation the date portion uses.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum DateStyle {
    /// `YYYY-MM-DD`
    #[default]
    Gregorian,
    /// `YYYY-DDD`
    Ordinal,
    /// `YYYY-Www-D`
    Weeks,
    /// Decimal seconds since the calendar origin.
    SecondsSinceOrigin,
    /// Decimal seconds since the UNIX epoch.
    SecondsSinceEpoch,
}

/// Selects the parts and notation of a formatted [`DateTime`].
///
/// When `with_timezone` is off and the instant carries a non-zero offset, the value is
/// converted to UTC before rendering; the time of day then ends with `Z`. With
/// `with_timezone` on, a non-zero offset renders as a trailing ` ±HH:MM`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TimeFormat {
    pub date: Option<DateStyle>,
    pub time_of_day: bool,
    pub with_timezone: bool,
}

impl TimeFormat {
    /// Date only, Gregorian: `2005-01-20`.
    pub const DATE: Self = Self {
        date: Some(DateStyle::Gregorian),
        time_of_day: false,
        with_timezone: false,
    };

    /// Gregorian date with time of day, rendered in UTC: `2005-01-20 00:30:00Z`.
    pub const DATE_TIME: Self = Self {
        date: Some(DateStyle::Gregorian),
        time_of_day: true,
        with_timezone: false,
    };

    /// Gregorian date, time of day, and timezone: `2005-01-20 02:30:00 +02:00`.
    pub const FULL: Self = Self {
        date: Some(DateStyle::Gregorian),
        time_of_day: true,
        with_timezone: true,
    };

    /// Ordinal date only: `2005-020`.
    pub const ORDINAL: Self = Self {
        date: Some(DateStyle::Ordinal),
        time_of_day: false,
        with_timezone: false,
    };

    /// ISO week date only: `2005-W03-4`.
    pub const WEEKS: Self = Self {
        date: Some(DateStyle::Weeks),
        time_of_day: false,
        with_timezone: false,
    };

    /// Seconds since the calendar origin.
    pub const SECONDS: Self = Self {
        date: Some(DateStyle::SecondsSinceOrigin),
        time_of_day: false,
        with_timezone: false,
    };

    /// Seconds since the UNIX epoch.
    pub const EPOCH_SECONDS: Self = Self {
        date: Some(DateStyle::SecondsSinceEpoch),
        time_of_day: false,
        with_timezone: false,
    };

    #[must_use]
    pub const fn with_time_of_day(mut self) -> Self {
        self.time_of_day = true;
        self
    }

    #[must_use]
    pub const fn with_timezone(mut self) -> Self {
        self.with_timezone = true;
        self
    }
}

impl Default for TimeFormat {
    fn default() -> Self {
        Self::FULL
    }
}

impl DateTime {
    /// Renders this instant according to the provided format selection.
    #[must_use]
    pub fn format(&self, format: TimeFormat) -> String {
        let dt = if self.offset != 0 && !format.with_timezone {
            self.to_utc()
        } else {
            *self
        };

        let mut out = String::with_capacity(40);
        match format.date {
            Some(DateStyle::SecondsSinceOrigin) => {
                out.push_str(&dt.to_seconds_since_origin().to_string());
            }
            Some(DateStyle::SecondsSinceEpoch) => {
                out.push_str(&dt.to_unix_seconds().to_string());
            }
            Some(DateStyle::Weeks) => {
                let (year, week, weekday) = dt.to_iso_week();
                out.push_str(&format!("{year}-W{week:02}-{weekday}"));
            }
            Some(DateStyle::Ordinal) => {
                let (year, day) = dt.to_ordinal();
                out.push_str(&format!("{year}-{day:03}"));
            }
            Some(DateStyle::Gregorian) => {
                let (year, month, day) = dt.to_gregorian();
                out.push_str(&format!("{year:04}-{month:02}-{day:02}"));
            }
            None => {}
        }

        if format.time_of_day {
            let (hours, minutes, seconds) = dt.to_time_of_day();
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(&format!("{hours:02}:{minutes:02}:{seconds:02}"));

            if !format.with_timezone || dt.offset == 0 {
                out.push('Z');
            } else {
                let (offset_hours, offset_minutes, _) = split_hms(i64::from(dt.offset));
                let sign = if dt.offset < 0 { '-' } else { '+' };
                out.push_str(&format!(" {sign}{offset_hours:02}:{offset_minutes:02}"));
            }
        }

        out
    }
}

impl fmt::Display for DateTime {
    /// Prints the Gregorian date, time of day, and timezone.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.format(TimeFormat::FULL))
    }
}

impl fmt::Debug for DateTime {
    /// The debug format is always in UTC.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.format(TimeFormat::DATE_TIME))
    }
}

#[cfg(test)]
mod ut_formatting {
    use super::TimeFormat;
    use crate::DateTime;
    use core::str::FromStr;

    #[test]
    fn notation_selection() {
        let dt = DateTime::from_gregorian_hms(2005, 1, 20, 0, 30, 0).unwrap();
        assert_eq!(dt.format(TimeFormat::DATE), "2005-01-20");
        assert_eq!(dt.format(TimeFormat::ORDINAL), "2005-020");
        assert_eq!(dt.format(TimeFormat::WEEKS), "2005-W03-4");
        assert_eq!(dt.format(TimeFormat::DATE_TIME), "2005-01-20 00:30:00Z");
        assert_eq!(dt.format(TimeFormat::FULL), "2005-01-20 00:30:00Z");
        assert_eq!(dt.format(TimeFormat::EPOCH_SECONDS), "1106181000");
        assert_eq!(
            dt.format(TimeFormat::ORDINAL.with_time_of_day()),
            "2005-020 00:30:00Z"
        );
    }

    #[test]
    fn offsets_render_or_fold() {
        let dt = DateTime::from_str("2020-02-29T12:00:00+02:00").unwrap();
        // Without the timezone switch the instant is first converted to UTC.
        assert_eq!(dt.format(TimeFormat::DATE_TIME), "2020-02-29 10:00:00Z");
        assert_eq!(dt.format(TimeFormat::FULL), "2020-02-29 12:00:00 +02:00");
        assert_eq!(dt.format(TimeFormat::DATE), "2020-02-29");

        let dt = DateTime::from_str("2020-03-01T01:00:00+05:30").unwrap();
        assert_eq!(dt.format(TimeFormat::DATE_TIME), "2020-02-29 19:30:00Z");
        assert_eq!(dt.format(TimeFormat::FULL), "2020-03-01 01:00:00 +05:30");
    }

    #[test]
    fn display_round_trips() {
        for text in [
            "2005-01-20 00:30:00Z",
            "2020-02-29 12:00:00 +02:00",
            "2010-01-03 23:59:59 -05:30",
            "1970-01-01 00:00:00Z",
        ] {
            let dt = DateTime::from_str(text).unwrap();
            assert_eq!(format!("{dt}"), text);
            assert_eq!(DateTime::from_str(&format!("{dt}")).unwrap(), dt);
        }
    }
}
