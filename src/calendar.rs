/*
* Isochron, part of the Nyx Space tools
* Copyright (C) 2017-onward Christopher Rabotin <christopher.rabotin@gmail.com> et al. (cf. https://github.com/nyx-space/isochron/graphs/contributors)
* This Source Code Form is subject to the terms of the Mozilla Public
* License, v. 2.0. If a copy of the MPL was not distributed with this
* file, You can obtain one at https://mozilla.org/MPL/2.0/.
*
* Documentation: https://nyxspace.com/
*/

//! Pure calendar primitives: total functions over integers with no host state.

use crate::SECONDS_PER_DAY;

/// `is_leap_year` returns whether the provided Gregorian year is a leap year.
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns the number of days in the provided year: 366 in leap years, 365 otherwise.
pub const fn days_in_year(year: i32) -> i32 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Returns the number of days in a given month (ONE indexed, i.e. January is month 1 and
/// December is month 12), accounting for leap years.
///
/// # Warning
/// This will return 0 days if the month is invalid.
pub const fn days_in_month(month: u32, year: i32) -> i32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Returns the weekday of January 1 of the provided year, with Monday = 1 through Sunday = 7.
///
/// Zeller-style formula from <http://myweb.ecu.edu/mccartyr/ISOwdALG.txt>:
/// `YY = (Y-1) % 100; C = (Y-1) - YY; G = YY + YY/4; 1 + (((((C/100) % 4) * 5) + G) % 7)`.
pub const fn january_1_weekday(year: i32) -> i32 {
    let yy = (year - 1) % 100;
    let c = (year - 1) - yy;
    let g = yy + yy / 4;
    1 + ((((c / 100) % 4) * 5 + g) % 7)
}

/// Returns the number of ISO weeks in the provided year: 53 when January 1 is a Thursday, or
/// when January 1 of the following year is a Friday (i.e. December 31 is a Thursday), else 52.
pub const fn weeks_in_year(year: i32) -> i32 {
    if january_1_weekday(year) == 4 || january_1_weekday(year + 1) == 5 {
        53
    } else {
        52
    }
}

/// Converts a Gregorian (year, month, day) into the 1-based ordinal day of the year.
pub fn ordinal_day(year: i32, month: u32, day: u32) -> i32 {
    let mut ordinal = day as i32;
    for m in 1..month {
        ordinal += days_in_month(m, year);
    }
    ordinal
}

/// Converts a 1-based ordinal day of the year back into Gregorian (month, day).
pub(crate) fn gregorian_from_ordinal(year: i32, ordinal: i32) -> (u32, u32) {
    let mut days = ordinal;
    let mut month = 1;
    while month < 12 {
        let mdays = days_in_month(month, year);
        if mdays >= days {
            break;
        }
        days -= mdays;
        month += 1;
    }
    (month, days as u32)
}

/// Moves whole days out of a second count, leaving `seconds` in `[0, 86_400)`.
pub(crate) fn carry_seconds(seconds: &mut i64, days: &mut i32) {
    let carry = seconds.div_euclid(SECONDS_PER_DAY);
    *seconds = seconds.rem_euclid(SECONDS_PER_DAY);
    *days += carry as i32;
}

/// Moves whole years out of an ordinal day count, leaving `days` in `[1, days_in_year(years)]`.
/// Borrowed years contribute their full day count, so leap years are honored in both directions.
pub(crate) fn carry_days(years: &mut i32, days: &mut i32) {
    while *days > days_in_year(*years) {
        *days -= days_in_year(*years);
        *years += 1;
    }
    while *days < 1 {
        *years -= 1;
        *days += days_in_year(*years);
    }
}
