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

use isochron::{DateTime, HiResDateTime, TimeFormat};

#[test]
fn wraps_the_base_instant() {
    let hr = HiResDateTime::from_str("2005-01-20T00:30:00Z").unwrap();
    assert_eq!(hr.microseconds(), 0);
    assert_eq!(hr.to_date_time().format(TimeFormat::FULL), "2005-01-20 00:30:00Z");

    // Conversion to the base drops the microseconds.
    let precise = HiResDateTime::from_timestamp(1_106_181_000, 250_000);
    assert_eq!(
        DateTime::from(precise),
        DateTime::from_str("2005-01-20T00:30:00Z").unwrap()
    );
}

#[test]
fn sub_second_fraction_directive() {
    let hr = HiResDateTime::from_timestamp(1_106_181_000, 123_456);
    assert_eq!(
        hr.format("%Y-%m-%d %H:%M:%S.%6N").unwrap(),
        "2005-01-20 00:30:00.123456"
    );
    assert_eq!(hr.format("%H:%M:%S.%3N").unwrap(), "00:30:00.123");
    assert_eq!(hr.format("%1N").unwrap(), "1");
    // Counts beyond six digits are capped at microsecond resolution.
    assert_eq!(hr.format("%7N").unwrap(), "123456");

    let small = HiResDateTime::from_timestamp(1_106_181_000, 42);
    assert_eq!(small.format("%S.%6N").unwrap(), "00.000042");
}

#[test]
fn host_directives_delegate() {
    let hr = HiResDateTime::from_timestamp(1_106_181_000, 0);
    assert_eq!(hr.format("%Y-%j").unwrap(), "2005-020");
    assert_eq!(hr.format("%a %d %b %Y").unwrap(), "Thu 20 Jan 2005");
    assert!(hr.format("%Q").is_err());

    let shifted = HiResDateTime::from_timestamp_with_offset(1_106_181_000, 0, -19_800);
    assert_eq!(shifted.format("%H:%M %z").unwrap(), "19:00 -0530");
}

#[test]
fn offsets_carry_through() {
    let hr = HiResDateTime::from_timestamp_with_offset(1_106_181_000, 500_000, 7_200);
    assert_eq!(hr.to_date_time().utc_offset(), 7_200);
    assert_eq!(hr.to_date_time().to_time_of_day(), (2, 30, 0));
    assert_eq!(hr.to_date_time().to_unix_seconds(), 1_106_181_000);
}
