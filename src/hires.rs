/*
* Isochron, part of the Nyx Space tools
* Copyright (C) 2017-onward Christopher Rabotin <christopher.rabotin@gmail.com> et al. (cf. https://github.com/nyx-space/isochron/graphs/contributors)
* This Source Code Form is subject to the terms of the Mozilla Public
* License, v. 2.0. If a copy of the MPL was not distributed with this
* file, You can obtain one at https://mozilla.org/MPL/2.0/.
*
* Documentation: https://nyxspace.com/
*/

use core::fmt::Write;
use core::str::FromStr;

use chrono::format::{Item, StrftimeItems};
use chrono::FixedOffset;

use crate::{system_time, DateTime, IsochronError, ParsingError};

/// A [`DateTime`] extended with a microsecond field.
///
/// This is a thin wrapper: every calendar operation goes through the embedded base instant,
/// and converting to a plain [`DateTime`] simply drops the microseconds.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HiResDateTime {
    pub(crate) base: DateTime,
    /// Microseconds into the current second, in [0, 999_999].
    pub(crate) useconds: u32,
}

impl HiResDateTime {
    /// Reads the current moment from the host clock, with microsecond resolution, carrying
    /// the host's local UTC offset.
    #[must_use]
    pub fn now() -> Self {
        let (timestamp, useconds) = system_time::now_timestamp();
        Self {
            base: DateTime::from_unix_seconds_with_offset(
                timestamp,
                system_time::local_utc_offset(),
            ),
            useconds,
        }
    }

    /// Builds a high-resolution instant from a wall-clock (seconds, microseconds) pair since
    /// the UNIX epoch, in UTC. Whole seconds are carried out of the microsecond field.
    #[must_use]
    pub fn from_timestamp(seconds: i64, microseconds: u32) -> Self {
        Self::from_timestamp_with_offset(seconds, microseconds, 0)
    }

    /// Builds a high-resolution instant from a wall-clock (seconds, microseconds) pair,
    /// expressed at the provided UTC offset.
    #[must_use]
    pub fn from_timestamp_with_offset(seconds: i64, microseconds: u32, offset: i32) -> Self {
        let carry = i64::from(microseconds / 1_000_000);
        Self {
            base: DateTime::from_unix_seconds_with_offset(seconds + carry, offset),
            useconds: microseconds % 1_000_000,
        }
    }

    /// The embedded base instant.
    #[must_use]
    pub const fn to_date_time(&self) -> DateTime {
        self.base
    }

    /// Microseconds into the current second.
    pub const fn microseconds(&self) -> u32 {
        self.useconds
    }

    /// Renders this instant through a `strftime`-style template.
    ///
    /// A `%<digits>N` directive renders the sub-second fraction: the microseconds are padded
    /// to nine digits and truncated to the requested digit count, which is capped at 6 (and a
    /// count of zero renders nothing). Every other directive is delegated to the host
    /// formatter at this instant's fixed offset.
    ///
    /// # Example
    /// ```
    /// use isochron::HiResDateTime;
    ///
    /// let hr = HiResDateTime::from_timestamp(1_106_181_000, 123_456);
    /// assert_eq!(
    ///     hr.format("%Y-%m-%d %H:%M:%S.%6N").unwrap(),
    ///     "2005-01-20 00:30:00.123456"
    /// );
    /// assert_eq!(hr.format("%H:%M:%S.%3N").unwrap(), "00:30:00.123");
    /// ```
    pub fn format(&self, template: &str) -> Result<String, IsochronError> {
        let bytes = template.as_bytes();
        let mut out = String::with_capacity(template.len() + 8);
        let mut chunk_start = 0;
        let mut idx = 0;

        while idx < bytes.len() {
            if bytes[idx] != b'%' {
                idx += 1;
                continue;
            }
            let mut directive_end = idx + 1;
            while directive_end < bytes.len() && bytes[directive_end].is_ascii_digit() {
                directive_end += 1;
            }
            if directive_end < bytes.len() && bytes[directive_end] == b'N' {
                self.render_host_directives(&template[chunk_start..idx], &mut out)?;
                let digits = if directive_end > idx + 1 {
                    template[idx + 1..directive_end].parse::<usize>().unwrap_or(0)
                } else {
                    0
                };
                let digits = digits.min(6);
                if digits > 0 {
                    let padded = format!("{:06}000", self.useconds);
                    out.push_str(&padded[..digits]);
                }
                idx = directive_end + 1;
                chunk_start = idx;
            } else {
                // A host directive: skip its specifier so a following N is not misread.
                idx = directive_end + 1;
            }
        }
        self.render_host_directives(&template[chunk_start..], &mut out)?;

        Ok(out)
    }

    /// Delegates a template chunk to the host's broken-down-time formatter.
    fn render_host_directives(&self, chunk: &str, out: &mut String) -> Result<(), IsochronError> {
        if chunk.is_empty() {
            return Ok(());
        }
        let items: Vec<Item> = StrftimeItems::new(chunk).collect();
        if items.iter().any(|item| matches!(item, Item::Error)) {
            return Err(IsochronError::Parse {
                source: ParsingError::UnknownFormattingToken,
                details: "unsupported strftime directive",
            });
        }
        let broken_down = self.to_host_datetime()?;
        write!(out, "{}", broken_down.format_with_items(items.into_iter())).map_err(|_| {
            IsochronError::Format {
                details: "strftime rendering failed",
            }
        })
    }

    fn to_host_datetime(&self) -> Result<chrono::DateTime<FixedOffset>, IsochronError> {
        let invalid = IsochronError::InvalidDate {
            details: "instant not representable by the host formatter",
        };
        let date = chrono::NaiveDate::from_yo_opt(self.base.years, self.base.days as u32)
            .ok_or_else(|| invalid.clone())?;
        let time = chrono::NaiveTime::from_num_seconds_from_midnight_opt(
            self.base.seconds as u32,
            self.useconds * 1_000,
        )
        .ok_or_else(|| invalid.clone())?;
        let offset = FixedOffset::east_opt(self.base.offset).ok_or_else(|| invalid.clone())?;
        date.and_time(time)
            .and_local_timezone(offset)
            .single()
            .ok_or(invalid)
    }
}

impl From<DateTime> for HiResDateTime {
    fn from(base: DateTime) -> Self {
        Self { base, useconds: 0 }
    }
}

impl From<HiResDateTime> for DateTime {
    /// Microseconds are lost in this conversion.
    fn from(hr: HiResDateTime) -> Self {
        hr.base
    }
}

impl FromStr for HiResDateTime {
    type Err = IsochronError;

    /// Parses the same representations as [`DateTime`]; the microseconds start at zero.
    fn from_str(s_in: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(DateTime::from_str(s_in)?))
    }
}

#[cfg(test)]
mod ut_hires {
    use super::HiResDateTime;
    use crate::DateTime;

    #[test]
    fn timestamp_construction() {
        let hr = HiResDateTime::from_timestamp(0, 0);
        assert_eq!(hr.to_date_time(), DateTime::UNIX_EPOCH);
        assert_eq!(hr.microseconds(), 0);

        // Whole seconds carry out of the microsecond field.
        let hr = HiResDateTime::from_timestamp(10, 2_500_000);
        assert_eq!(hr.to_date_time().to_unix_seconds(), 12);
        assert_eq!(hr.microseconds(), 500_000);
    }

    #[test]
    fn conversions_are_thin() {
        let dt = DateTime::from_gregorian_hms(2005, 1, 20, 0, 30, 0).unwrap();
        let hr = HiResDateTime::from(dt);
        assert_eq!(hr.microseconds(), 0);
        assert_eq!(DateTime::from(hr), dt);

        let precise = HiResDateTime::from_timestamp(1_106_181_000, 999_999);
        assert_eq!(DateTime::from(precise), dt);
    }

    #[test]
    fn fraction_directive() {
        let hr = HiResDateTime::from_timestamp(1_106_181_000, 123_456);
        assert_eq!(hr.format("%6N").unwrap(), "123456");
        assert_eq!(hr.format("%3N").unwrap(), "123");
        assert_eq!(hr.format("%1N").unwrap(), "1");
        // Digit counts beyond six are capped; the padding beyond microseconds is zeros.
        assert_eq!(hr.format("%9N").unwrap(), "123456");
        // A bare %N renders nothing, matching a zero digit count.
        assert_eq!(hr.format("a%Nb").unwrap(), "ab");
        assert_eq!(
            hr.format("%Y-%m-%dT%H:%M:%S.%6N").unwrap(),
            "2005-01-20T00:30:00.123456"
        );
    }

    #[test]
    fn host_directives() {
        let hr = HiResDateTime::from_timestamp(1_106_181_000, 0);
        assert_eq!(hr.format("%Y-%j").unwrap(), "2005-020");
        assert_eq!(hr.format("%H:%M:%S %z").unwrap(), "00:30:00 +0000");
        assert_eq!(hr.format("100%% organic").unwrap(), "100% organic");
        assert!(hr.format("%Q").is_err());

        let shifted = HiResDateTime::from_timestamp_with_offset(1_106_181_000, 0, 7_200);
        assert_eq!(shifted.format("%H:%M %z").unwrap(), "02:30 +0200");
    }
}
