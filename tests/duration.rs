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

use isochron::{DateTime, Duration, TimeFormat};

#[test]
fn parse_components() {
    let dur = Duration::from_str("P1Y2M10DT2H30M").unwrap();
    assert_eq!(dur.years(), 1);
    assert_eq!(dur.months(), 2);
    assert_eq!(dur.days(), 10);
    assert_eq!(dur.seconds(), 9_000);

    assert_eq!(Duration::from_str("P2W").unwrap(), Duration::from_days(14));
    assert_eq!(Duration::from_str("PT45S").unwrap(), Duration::from_seconds(45));
    assert_eq!(Duration::from_str("P").unwrap(), Duration::ZERO);
}

#[test]
fn month_letter_dispatch() {
    // The `M` unit is months before the time designator and minutes after it.
    assert_eq!(Duration::from_str("P1M").unwrap(), Duration::from_months(1));
    assert_eq!(Duration::from_str("PT1M").unwrap(), Duration::from_minutes(1));
    let both = Duration::from_str("P2MT2M").unwrap();
    assert_eq!(both.months(), 2);
    assert_eq!(both.seconds(), 120);
}

#[test]
fn flat_second_approximation() {
    // Months flatten at 30 days and years at 365; exact month arithmetic requires a date.
    assert_eq!(Duration::from_str("P1M").unwrap().to_seconds(), 2_592_000);
    assert_eq!(Duration::from_str("P1Y").unwrap().to_seconds(), 31_536_000);
    assert_eq!(Duration::from_str("PT2H30M").unwrap().to_seconds(), 9_000);
    assert_eq!(Duration::from_str("P-1D").unwrap().to_seconds(), -86_400);
}

#[test]
fn month_is_date_relative() {
    let one_month = Duration::from_str("P1M").unwrap();
    let feb = DateTime::from_str("2021-02-01").unwrap();
    let mar = DateTime::from_str("2021-03-01").unwrap();
    // 28 days in one case, 31 in the other, from the same duration.
    assert_eq!((feb + one_month) - feb, Duration::from_days(28));
    assert_eq!((mar + one_month) - mar, Duration::from_days(31));
}

#[test]
fn prose_rendering() {
    let dur = Duration::from_str("P1Y2M10DT2H30M").unwrap();
    assert_eq!(
        dur.to_string(),
        "1 year 2 months 10 days 9000 seconds ( 2 hours 30 minutes )"
    );
    assert_eq!(Duration::from_str("P1D").unwrap().to_string(), "1 day");
    assert_eq!(
        Duration::from_str("PT3661S").unwrap().to_string(),
        "3661 seconds ( 1 hour 1 minute 1 second )"
    );
    assert_eq!(Duration::ZERO.to_string(), "");
}

#[test]
fn iso_rendering_round_trips() {
    for text in ["P1Y2M10DT2H30M", "P14D", "P1Y", "PT1M1S", "PT0S"] {
        let dur = Duration::from_str(text).unwrap();
        assert_eq!(dur.to_iso8601(), text);
        assert_eq!(Duration::from_str(&dur.to_iso8601()).unwrap(), dur);
    }
}

#[test]
fn applying_to_dates() {
    let base = DateTime::from_str("2020-01-31T00:00:00Z").unwrap();
    assert_eq!(
        (base + Duration::from_str("P1M").unwrap()).format(TimeFormat::DATE),
        "2020-02-29"
    );
    assert_eq!(
        (base - Duration::from_str("P1M").unwrap()).format(TimeFormat::DATE),
        "2019-12-31"
    );
    assert_eq!(
        (base + Duration::from_str("PT24H").unwrap()).format(TimeFormat::DATE),
        "2020-02-01"
    );
    assert_eq!(
        (base + Duration::from_str("P-31D").unwrap()).format(TimeFormat::DATE),
        "2019-12-31"
    );
}

#[test]
fn rejects_malformed() {
    assert!(Duration::from_str("10D").is_err());
    assert!(Duration::from_str("P10").is_err());
    assert!(Duration::from_str("P10Q").is_err());
    assert!(Duration::from_str("PTY").is_err());
    assert!(Duration::from_str("").is_err());
}
