/*
* Isochron, part of the Nyx Space tools
* Copyright (C) 2017-onward Christopher Rabotin <christopher.rabotin@gmail.com> et al. (cf. https://github.com/nyx-space/isochron/graphs/contributors)
* This Source Code Form is subject to the terms of the Mozilla Public
* License, v. 2.0. If a copy of the MPL was not distributed with this
* file, You can obtain one at https://mozilla.org/MPL/2.0/.
*
* Documentation: https://nyxspace.com/
*/

use super::Duration;
use crate::parser::scan_field;
use crate::{IsochronError, ParsingError, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
use core::str::FromStr;

impl FromStr for Duration {
    type Err = IsochronError;

    /// Parses an ISO 8601 duration string, e.g. `P1Y2M10DT2H30M`.
    ///
    /// Identifiers:
    ///  + `Y` years, `W` weeks (7 days), `D` days
    ///  + `M` months before the `T` time designator, minutes after it
    ///  + `H` hours, `S` seconds
    ///
    /// Components may repeat (days and seconds accumulate) and carry signs. A bare `P` is the
    /// zero duration.
    ///
    /// # Example
    /// ```
    /// use isochron::Duration;
    /// use core::str::FromStr;
    ///
    /// assert_eq!(Duration::from_str("P2W").unwrap(), Duration::from_days(14));
    /// assert_eq!(Duration::from_str("PT1M").unwrap(), Duration::from_minutes(1));
    /// assert_eq!(Duration::from_str("P1M").unwrap(), Duration::from_months(1));
    /// assert_eq!(
    ///     Duration::from_str("P1Y2M10DT2H30M").unwrap(),
    ///     Duration::compose(1, 2, 10, 9000)
    /// );
    /// ```
    fn from_str(s_in: &str) -> Result<Self, Self::Err> {
        let s = s_in.trim();
        if s.is_empty() {
            return Err(IsochronError::Parse {
                source: ParsingError::NothingToParse,
                details: "input string is empty",
            });
        }

        let bytes = s.as_bytes();
        if bytes[0] != b'P' {
            return Err(IsochronError::Parse {
                source: ParsingError::UnknownFormat,
                details: "a duration starts with P",
            });
        }

        let mut duration = Duration::ZERO;
        let mut in_time_portion = false;
        let mut idx = 1;
        while idx < bytes.len() {
            if bytes[idx] == b'T' {
                in_time_portion = true;
                idx += 1;
                continue;
            }

            // Duration subfields carry no upper bound, so fractions truncate to zero.
            let (value, used) = match scan_field(&bytes[idx..], 10, 0) {
                Some(scanned) => scanned,
                None => {
                    return Err(IsochronError::Parse {
                        source: ParsingError::ValueError,
                        details: "expected an integer before a unit letter",
                    });
                }
            };
            idx += used;

            let unit = match bytes.get(idx) {
                Some(unit) => *unit,
                None => {
                    return Err(IsochronError::Parse {
                        source: ParsingError::MissingUnit,
                        details: "duration ends after a value",
                    });
                }
            };
            idx += 1;

            match unit {
                b'Y' => duration.years = value,
                b'M' => {
                    if in_time_portion {
                        duration.seconds += i64::from(value) * SECONDS_PER_MINUTE;
                    } else {
                        duration.months = value;
                    }
                }
                b'W' => duration.days += value * 7,
                b'D' => duration.days += value,
                b'H' => duration.seconds += i64::from(value) * SECONDS_PER_HOUR,
                b'S' => duration.seconds += i64::from(value),
                unknown => {
                    return Err(IsochronError::Parse {
                        source: ParsingError::UnknownUnit {
                            unit: unknown as char,
                        },
                        details: "valid units are Y, M, W, D, H, S",
                    });
                }
            }
        }

        Ok(duration)
    }
}
