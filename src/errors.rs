/*
* Isochron, part of the Nyx Space tools
* Copyright (C) 2017-onward Christopher Rabotin <christopher.rabotin@gmail.com> et al. (cf. https://github.com/nyx-space/isochron/graphs/contributors)
* This Source Code Form is subject to the terms of the Mozilla Public
* License, v. 2.0. If a copy of the MPL was not distributed with this
* file, You can obtain one at https://mozilla.org/MPL/2.0/.
*
* Documentation: https://nyxspace.com/
*/

use snafu::prelude::*;

/// Top-level error of this crate. Every fallible operation reports one of these; the crate
/// never panics on invalid input.
#[derive(Clone, Debug, PartialEq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum IsochronError {
    #[snafu(display("{source}, {details}"))]
    Parse {
        source: ParsingError,
        details: &'static str,
    },
    #[snafu(display("invalid date: {details}"))]
    InvalidDate { details: &'static str },
    #[snafu(display("a period requires at least two of start, end, and duration"))]
    IncompletePeriod,
    #[snafu(display("formatting failed: {details}"))]
    Format { details: &'static str },
}

/// Identifies which part of the input could not be parsed.
#[derive(Copy, Clone, Debug, PartialEq, Snafu)]
pub enum ParsingError {
    #[snafu(display("nothing to parse"))]
    NothingToParse,
    #[snafu(display("unknown or unsupported ISO 8601 format"))]
    UnknownFormat,
    #[snafu(display("{field} out of range: {value}"))]
    OutOfRange { field: &'static str, value: i64 },
    #[snafu(display("expected an integer field"))]
    ValueError,
    #[snafu(display("unknown duration unit `{unit}`"))]
    UnknownUnit { unit: char },
    #[snafu(display("duration value without a unit letter"))]
    MissingUnit,
    #[snafu(display("unknown formatting directive"))]
    UnknownFormattingToken,
    #[snafu(display("lexical parse error: {err:?}"))]
    Lexical { err: lexical_core::Error },
}

#[cfg(test)]
mod ut_errors {
    use super::{IsochronError, ParsingError};

    #[test]
    fn error_display() {
        let err = IsochronError::Parse {
            source: ParsingError::OutOfRange {
                field: "hour",
                value: 25,
            },
            details: "parsing a time of day",
        };
        assert_eq!(format!("{err}"), "hour out of range: 25, parsing a time of day");
        assert!(IsochronError::IncompletePeriod == IsochronError::IncompletePeriod);
    }
}
