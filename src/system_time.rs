/*
* Isochron, part of the Nyx Space tools
* Copyright (C) 2017-onward Christopher Rabotin <christopher.rabotin@gmail.com> et al. (cf. https://github.com/nyx-space/isochron/graphs/contributors)
* This Source Code Form is subject to the terms of the Mozilla Public
* License, v. 2.0. If a copy of the MPL was not distributed with this
* file, You can obtain one at https://mozilla.org/MPL/2.0/.
*
* Documentation: https://nyxspace.com/
*/

//! The only module that touches host state: the wall clock and the ambient local UTC offset.

use chrono::{Local, Offset};

/// Reads the wall clock once, returning whole seconds since the UNIX epoch and the
/// microseconds into the current second.
pub(crate) fn now_timestamp() -> (i64, u32) {
    let now = Local::now();
    (now.timestamp(), now.timestamp_subsec_micros())
}

/// Reads the ambient local offset once, in signed seconds east of UTC.
pub(crate) fn local_utc_offset() -> i32 {
    Local::now().offset().fix().local_minus_utc()
}
