/*
* Isochron, part of the Nyx Space tools
* Copyright (C) 2017-onward Christopher Rabotin <christopher.rabotin@gmail.com> et al. (cf. https://github.com/nyx-space/isochron/graphs/contributors)
* This Source Code Form is subject to the terms of the Mozilla Public
* License, v. 2.0. If a copy of the MPL was not distributed with this
* file, You can obtain one at https://mozilla.org/MPL/2.0/.
*
* Documentation: https://nyxspace.com/
*/

// Here lives all of the arithmetic on DateTime.

use core::cmp::Ordering;
use core::ops::{Add, AddAssign, Sub, SubAssign};

use crate::calendar::{carry_days, carry_seconds, days_in_month, days_in_year, ordinal_day};
use crate::{DateTime, Duration, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};

impl DateTime {
    /// Adds a signed number of seconds in place, carrying whole days as needed.
    pub fn add_seconds(&mut self, extra: i64) {
        let mut seconds = i64::from(self.seconds) + extra;
        let mut day_carry = 0;
        carry_seconds(&mut seconds, &mut day_carry);
        self.seconds = seconds as i32;
        self.add_days(day_carry);
    }

    /// Adds a signed number of minutes in place.
    pub fn add_minutes(&mut self, extra: i64) {
        self.add_seconds(extra * SECONDS_PER_MINUTE);
    }

    /// Adds a signed number of hours in place.
    pub fn add_hours(&mut self, extra: i64) {
        self.add_seconds(extra * SECONDS_PER_HOUR);
    }

    /// Adds a signed number of days in place, carrying whole years as needed. Borrowed years
    /// contribute their full day count, so leap years are honored.
    pub fn add_days(&mut self, extra: i32) {
        self.days += extra;
        carry_days(&mut self.years, &mut self.days);
    }

    /// Adds a signed number of weeks in place.
    pub fn add_weeks(&mut self, extra: i32) {
        self.add_days(extra * 7);
    }

    /// Adds a signed number of calendar months in place. The month is stepped with year
    /// rollover, then the day of month is clamped once to the length of the landing month:
    /// January 31 plus one month is February 28, or February 29 in leap years.
    pub fn add_months(&mut self, extra: i32) {
        let (mut year, month, day) = self.to_gregorian();
        let mut month = month as i32;
        let mut day = day as i32;

        if extra > 0 {
            for _ in 0..extra {
                month += 1;
                if month == 13 {
                    month = 1;
                    year += 1;
                }
            }
        } else {
            for _ in 0..-extra {
                month -= 1;
                if month == 0 {
                    month = 12;
                    year -= 1;
                }
            }
        }

        let month_max = days_in_month(month as u32, year);
        if day > month_max {
            day = month_max;
        }

        self.years = year;
        self.days = ordinal_day(year, month as u32, day as u32);
    }

    /// Adds a signed number of calendar years in place. The ordinal day is clamped to the
    /// length of the landing year, so December 31 of a leap year plus one year is December 31.
    pub fn add_years(&mut self, extra: i32) {
        self.years += extra;
        let year_max = days_in_year(self.years);
        if self.days > year_max {
            self.days = year_max;
        }
    }

    /// Returns the earlier of the two instants.
    ///
    /// ```
    /// use isochron::DateTime;
    ///
    /// let e0 = DateTime::from_gregorian(2022, 10, 20).unwrap();
    /// let e1 = DateTime::from_gregorian(2022, 10, 21).unwrap();
    ///
    /// assert_eq!(e0, e1.min(e0));
    /// assert_eq!(e0, e0.min(e1));
    /// ```
    pub fn min(&self, other: Self) -> Self {
        if *self < other {
            *self
        } else {
            other
        }
    }

    /// Returns the later of the two instants.
    ///
    /// ```
    /// use isochron::DateTime;
    ///
    /// let e0 = DateTime::from_gregorian(2022, 10, 20).unwrap();
    /// let e1 = DateTime::from_gregorian(2022, 10, 21).unwrap();
    ///
    /// assert_eq!(e1, e1.max(e0));
    /// assert_eq!(e1, e0.max(e1));
    /// ```
    pub fn max(&self, other: Self) -> Self {
        if *self > other {
            *self
        } else {
            other
        }
    }
}

impl Add<Duration> for DateTime {
    type Output = Self;

    /// Applies a duration: years first, then months, days, and seconds. Months are applied
    /// while the date still sits in its original month, which preserves the intended
    /// day-of-month clamping.
    fn add(mut self, rhs: Duration) -> Self {
        self.add_years(rhs.years);
        if rhs.months != 0 {
            self.add_months(rhs.months);
        }
        self.add_days(rhs.days);
        self.add_seconds(rhs.seconds);
        self
    }
}

impl Sub<Duration> for DateTime {
    type Output = Self;

    fn sub(self, rhs: Duration) -> Self {
        self + -rhs
    }
}

impl AddAssign<Duration> for DateTime {
    fn add_assign(&mut self, rhs: Duration) {
        *self = *self + rhs;
    }
}

impl SubAssign<Duration> for DateTime {
    fn sub_assign(&mut self, rhs: Duration) {
        *self = *self - rhs;
    }
}

impl Sub for DateTime {
    type Output = Duration;

    /// Returns the field-wise difference of the two instants after UTC normalization. The
    /// result never carries a month component.
    fn sub(self, rhs: Self) -> Duration {
        let a = self.to_utc();
        let b = rhs.to_utc();
        Duration {
            years: a.years - b.years,
            months: 0,
            days: a.days - b.days,
            seconds: i64::from(a.seconds) - i64::from(b.seconds),
        }
    }
}

impl PartialEq for DateTime {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for DateTime {}

impl PartialOrd for DateTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DateTime {
    /// Total order on the UTC normalization: years, then ordinal day, then second of day.
    fn cmp(&self, other: &Self) -> Ordering {
        let a = self.to_utc();
        let b = other.to_utc();
        a.years
            .cmp(&b.years)
            .then(a.days.cmp(&b.days))
            .then(a.seconds.cmp(&b.seconds))
    }
}
