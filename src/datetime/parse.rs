/*
* Isochron, part of the Nyx Space tools
* Copyright (C) 2017-onward Christopher Rabotin <christopher.rabotin@gmail.com> et al. (cf. https://github.com/nyx-space/isochron/graphs/contributors)
* This Source Code Form is subject to the terms of the Mozilla Public
* License, v. 2.0. If a copy of the MPL was not distributed with this
* file, You can obtain one at https://mozilla.org/MPL/2.0/.
*
* Documentation: https://nyxspace.com/
*/

use core::str::FromStr;

use crate::parser::scan_digits;
use crate::{system_time, DateTime, IsochronError, ParsingError};

impl FromStr for DateTime {
    type Err = IsochronError;

    /// Parses an ISO 8601 date/time representation.
    ///
    /// Recognized forms:
    ///  + `epoch`, the UNIX reference epoch
    ///  + Gregorian `YYYY-MM-DD` or compact `YYYYMMDD`
    ///  + ordinal `YYYY-DDD`
    ///  + ISO week `YYYY-Www-D`
    ///  + an optional time of day after `T` or a space: `HH:MM:SS`, compact `HHMMSS`, or the
    ///    partial forms `HH` and `HH:MM`
    ///  + an optional timezone suffix: `Z`, `±HH:MM`, or `±HHMM`; when absent, the host's
    ///    current local offset applies (a date without any time of day stays at UTC)
    ///  + a time of day alone (leading `T` or `HH:` prefix), resolved against the current date
    ///
    /// # Example
    /// ```
    /// use isochron::DateTime;
    /// use core::str::FromStr;
    ///
    /// let dt = DateTime::from_str("2005-01-20T00:30:00Z").unwrap();
    /// assert_eq!(dt.to_gregorian(), (2005, 1, 20));
    /// assert_eq!(dt, DateTime::from_str("20050120 00:30:00Z").unwrap());
    /// assert_eq!(dt, DateTime::from_str("2005-020 003000Z").unwrap());
    /// assert_eq!(dt, DateTime::from_str("2005-W03-4 01:30:00+01:00").unwrap());
    /// ```
    fn from_str(s_in: &str) -> Result<Self, Self::Err> {
        Self::parse_relative_to(s_in, Self::now(), system_time::local_utc_offset())
    }
}

impl DateTime {
    /// The pure core of `from_str`: `now` supplies the date for time-only inputs and
    /// `default_offset` the offset for inputs without a timezone suffix, so tests and hosts
    /// with a fixed clock stay deterministic.
    pub(crate) fn parse_relative_to(
        s_in: &str,
        now: Self,
        default_offset: i32,
    ) -> Result<Self, IsochronError> {
        let s = s_in.trim();
        if s.is_empty() {
            return Err(IsochronError::Parse {
                source: ParsingError::NothingToParse,
                details: "input string is empty",
            });
        }
        let bytes = s.as_bytes();

        // A leading time designator or an `HH:` prefix means only a time was supplied; the
        // current date is assumed.
        if bytes[0] == b'T' || (bytes.len() > 2 && bytes[2] == b':') {
            let time_str = if bytes[0] == b'T' { &s[1..] } else { s };
            let (seconds, offset) = parse_time_and_offset(time_str, default_offset)?;
            let mut dt = now;
            dt.seconds = seconds;
            dt.offset = offset;
            return dt.validated();
        }

        if s == "epoch" {
            return Ok(Self::UNIX_EPOCH);
        }

        // The date/time separator is a space or a `T`.
        let separator = s.find(' ').or_else(|| s.find('T'));
        let (date_part, time_part) = match separator {
            Some(idx) => (&s[..idx], Some(&s[idx + 1..])),
            None => (s, None),
        };

        let mut dt = Self::parse_date_part(date_part)?;
        if let Some(time_str) = time_part {
            let (seconds, offset) = parse_time_and_offset(time_str, default_offset)?;
            dt.seconds = seconds;
            dt.offset = offset;
        }
        dt.validated()
    }

    /// Dispatches over the three date notations.
    fn parse_date_part(part: &str) -> Result<Self, IsochronError> {
        if part.contains('W') {
            return Self::parse_week_date(part);
        }

        let fields: Vec<&str> = part.split('-').collect();
        match fields.len() {
            // YYYY-MM-DD
            3 => Self::from_gregorian(
                parse_numeric(fields[0], "year")?,
                parse_numeric::<u32>(fields[1], "month")?,
                parse_numeric::<u32>(fields[2], "day of month")?,
            ),
            // YYYY-DDD
            2 => Self::from_ordinal(
                parse_numeric(fields[0], "year")?,
                parse_numeric::<u32>(fields[1], "day of year")?,
            ),
            // YYYYMMDD
            1 => {
                let bytes = part.as_bytes();
                if part.len() != 8 || !bytes.iter().all(u8::is_ascii_digit) {
                    return Err(IsochronError::Parse {
                        source: ParsingError::UnknownFormat,
                        details: "expected YYYY-MM-DD, YYYYMMDD, YYYY-DDD, or YYYY-Www-D",
                    });
                }
                Self::from_gregorian(
                    parse_numeric(&part[..4], "year")?,
                    parse_numeric::<u32>(&part[4..6], "month")?,
                    parse_numeric::<u32>(&part[6..8], "day of month")?,
                )
            }
            _ => Err(IsochronError::Parse {
                source: ParsingError::UnknownFormat,
                details: "too many date fields",
            }),
        }
    }

    /// Parses `YYYY-Www-D`.
    fn parse_week_date(part: &str) -> Result<Self, IsochronError> {
        let fields: Vec<&str> = part.split('-').collect();
        let week_field = fields
            .get(1)
            .and_then(|field| field.strip_prefix('W'))
            .ok_or(IsochronError::Parse {
                source: ParsingError::UnknownFormat,
                details: "expected YYYY-Www-D",
            })?;
        if fields.len() != 3 {
            return Err(IsochronError::Parse {
                source: ParsingError::UnknownFormat,
                details: "expected YYYY-Www-D",
            });
        }
        Self::from_iso_week(
            parse_numeric(fields[0], "year")?,
            parse_numeric::<u32>(week_field, "week")?,
            parse_numeric::<u32>(fields[2], "weekday")?,
        )
    }
}

fn parse_numeric<T: lexical_core::FromLexical>(
    field: &str,
    name: &'static str,
) -> Result<T, IsochronError> {
    match lexical_core::parse(field.as_bytes()) {
        Ok(value) => Ok(value),
        Err(err) => Err(IsochronError::Parse {
            source: ParsingError::Lexical { err },
            details: name,
        }),
    }
}

/// Parses a time of day (`HH:MM:SS`, compact `HHMMSS`, or a valid prefix thereof) followed by
/// an optional timezone suffix. Returns (seconds of day, offset seconds).
fn parse_time_and_offset(s: &str, default_offset: i32) -> Result<(i32, i32), IsochronError> {
    let bytes = s.trim_start().as_bytes();
    let (seconds, used) = parse_time_of_day(bytes)?;
    let offset = parse_offset_suffix(&bytes[used..], default_offset)?;
    Ok((seconds, offset))
}

/// Scans `HH[:MM[:SS]]` or `HH[MM[SS]]` and validates each subfield, identifying the one that
/// is out of range. Returns the second count and the number of bytes consumed.
fn parse_time_of_day(bytes: &[u8]) -> Result<(i32, usize), IsochronError> {
    let (hour, mut idx) = scan_digits(bytes, 2).ok_or(IsochronError::Parse {
        source: ParsingError::NothingToParse,
        details: "expected a time of day",
    })?;

    let mut minute = 0;
    let mut second = 0;
    if bytes.get(idx) == Some(&b':') {
        idx += 1;
        if let Some((parsed, used)) = scan_digits(&bytes[idx..], 2) {
            minute = parsed;
            idx += used;
            if bytes.get(idx) == Some(&b':') {
                idx += 1;
                if let Some((parsed, used)) = scan_digits(&bytes[idx..], 2) {
                    second = parsed;
                    idx += used;
                }
            }
        }
    } else if let Some((parsed, used)) = scan_digits(&bytes[idx..], 2) {
        minute = parsed;
        idx += used;
        if let Some((parsed, used)) = scan_digits(&bytes[idx..], 2) {
            second = parsed;
            idx += used;
        }
    }

    for (field, value, bound) in [("hour", hour, 24), ("minute", minute, 60), ("second", second, 60)]
    {
        if value >= bound {
            return Err(IsochronError::Parse {
                source: ParsingError::OutOfRange {
                    field,
                    value: i64::from(value),
                },
                details: "parsing a time of day",
            });
        }
    }

    Ok((hour * 3_600 + minute * 60 + second, idx))
}

/// Parses the timezone suffix after a time of day: `Z` is UTC, a signed `HH:MM`/`HHMM` is a
/// fixed offset, and an absent suffix yields the provided default.
fn parse_offset_suffix(bytes: &[u8], default_offset: i32) -> Result<i32, IsochronError> {
    let mut idx = 0;
    while idx < bytes.len() && bytes[idx] == b' ' {
        idx += 1;
    }
    match bytes.get(idx) {
        None => Ok(default_offset),
        Some(b'Z') => Ok(0),
        Some(sign @ (b'+' | b'-')) => {
            let (seconds, _) = parse_time_of_day(&bytes[idx + 1..])?;
            if *sign == b'-' {
                Ok(-seconds)
            } else {
                Ok(seconds)
            }
        }
        Some(byte) if byte.is_ascii_digit() => {
            let (seconds, _) = parse_time_of_day(&bytes[idx..])?;
            Ok(seconds)
        }
        Some(_) => Err(IsochronError::Parse {
            source: ParsingError::UnknownFormat,
            details: "expected Z or a signed HH:MM offset",
        }),
    }
}
