#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
/*
* Isochron, part of the Nyx Space tools
* Copyright (C) 2017-onward Christopher Rabotin <christopher.rabotin@gmail.com> et al. (cf. https://github.com/nyx-space/isochron/graphs/contributors)
* This Source Code Form is subject to the terms of the Mozilla Public
* License, v. 2.0. If a copy of the MPL was not distributed with this
* file, You can obtain one at https://mozilla.org/MPL/2.0/.
*
* Documentation: https://nyxspace.com/
*/

/// `SECONDS_PER_MINUTE` defines the number of seconds per minute.
pub const SECONDS_PER_MINUTE: i64 = 60;
/// `SECONDS_PER_HOUR` defines the number of seconds per hour.
pub const SECONDS_PER_HOUR: i64 = 3_600;
/// `SECONDS_PER_DAY` defines the number of seconds per day.
pub const SECONDS_PER_DAY: i64 = 86_400;
pub(crate) const SECONDS_PER_DAY_I32: i32 = 86_400;
pub const DAYS_PER_WEEK: i32 = 7;
pub const MONTHS_PER_YEAR: i32 = 12;
/// Number of days a month is worth in `Duration::to_seconds`, an **approximation** since a
/// calendar month cannot be reduced to a fixed number of seconds.
pub const APPROX_DAYS_PER_MONTH: i64 = 30;
/// Number of days a year is worth in `Duration::to_seconds`, an **approximation** since a
/// calendar year cannot be reduced to a fixed number of seconds.
pub const APPROX_DAYS_PER_YEAR: i64 = 365;
/// Seconds between the calendar origin (0001-001 at midnight UTC) and the UNIX reference epoch
/// of 1970-01-01 at midnight UTC.
pub const UNIX_EPOCH_OFFSET_SECONDS: i64 = 62_135_596_800;

pub mod calendar;
mod parser;

pub mod errors;
pub use errors::{IsochronError, ParsingError};

mod datetime;
pub use datetime::*;

mod duration;
pub use duration::*;

mod period;
pub use period::*;

mod hires;
pub use hires::*;

mod system_time;

pub mod prelude {
    pub use crate::{
        DateStyle, DateTime, Duration, HiResDateTime, IsochronError, ParsingError, Period,
        TimeFormat,
    };
}
