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
use core::str::FromStr;

use crate::{system_time, DateTime, Duration, IsochronError};

/// An ISO 8601 time interval, determined by any two of start, end, and duration.
///
/// The constructor derives whichever part was not supplied, so a constructed period always
/// carries all three.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Period {
    start: DateTime,
    end: DateTime,
    diff: Duration,
}

impl Period {
    /// Builds a period from its two endpoints; the duration is their difference.
    #[must_use]
    pub fn from_endpoints(start: DateTime, end: DateTime) -> Self {
        Self {
            start,
            end,
            diff: end - start,
        }
    }

    /// Builds a period covering `diff` from the provided start.
    #[must_use]
    pub fn from_start(start: DateTime, diff: Duration) -> Self {
        Self {
            start,
            end: start + diff,
            diff,
        }
    }

    /// Builds a period covering `diff` up to the provided end.
    #[must_use]
    pub fn from_end(end: DateTime, diff: Duration) -> Self {
        Self {
            start: end - diff,
            end,
            diff,
        }
    }

    pub const fn start(&self) -> DateTime {
        self.start
    }

    pub const fn end(&self) -> DateTime {
        self.end
    }

    pub const fn duration(&self) -> Duration {
        self.diff
    }

    /// Returns whether the provided instant falls within this period, both bounds included.
    #[must_use]
    pub fn contains(&self, dt: DateTime) -> bool {
        self.start <= dt && dt <= self.end
    }

    /// The pure core of `from_str`, with the "now" instant and default UTC offset supplied by
    /// the caller.
    pub(crate) fn parse_relative_to(
        s_in: &str,
        now: DateTime,
        default_offset: i32,
    ) -> Result<Self, IsochronError> {
        let s = s_in.trim();

        let (first, second) = match s.split_once('/') {
            Some((first, second)) => (first.trim(), Some(second.trim())),
            None => (s, None),
        };

        let mut start = None;
        let mut end = None;
        let mut diff = None;

        if first.starts_with('P') {
            diff = Some(Duration::from_str(first)?);
        } else {
            start = Some(DateTime::parse_relative_to(first, now, default_offset)?);
        }

        match second {
            Some(second) => {
                if second.starts_with('P') {
                    diff = Some(Duration::from_str(second)?);
                } else {
                    end = Some(DateTime::parse_relative_to(second, now, default_offset)?);
                }
            }
            None => {
                // A bare duration implicitly starts now.
                if diff.is_some() {
                    start = Some(now);
                }
            }
        }

        match (start, end, diff) {
            (Some(start), Some(end), _) => Ok(Self::from_endpoints(start, end)),
            (Some(start), None, Some(diff)) => Ok(Self::from_start(start, diff)),
            (None, Some(end), Some(diff)) => Ok(Self::from_end(end, diff)),
            _ => Err(IsochronError::IncompletePeriod),
        }
    }
}

impl FromStr for Period {
    type Err = IsochronError;

    /// Parses an ISO 8601 period: `start/end`, `start/duration`, `duration/end`, or a bare
    /// duration which implicitly starts at the current instant.
    ///
    /// # Example
    /// ```
    /// use isochron::Period;
    /// use core::str::FromStr;
    ///
    /// let period = Period::from_str("2005-01-20/P1M").unwrap();
    /// assert_eq!(period.end().to_gregorian(), (2005, 2, 20));
    /// ```
    fn from_str(s_in: &str) -> Result<Self, Self::Err> {
        Self::parse_relative_to(s_in, DateTime::now(), system_time::local_utc_offset())
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.start, self.end)
    }
}
