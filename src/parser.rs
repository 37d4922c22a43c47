/*
* Isochron, part of the Nyx Space tools
* Copyright (C) 2017-onward Christopher Rabotin <christopher.rabotin@gmail.com> et al. (cf. https://github.com/nyx-space/isochron/graphs/contributors)
* This Source Code Form is subject to the terms of the Mozilla Public
* License, v. 2.0. If a copy of the MPL was not distributed with this
* file, You can obtain one at https://mozilla.org/MPL/2.0/.
*
* Documentation: https://nyxspace.com/
*/

//! Low-level field scanning shared by the date, time, and duration parsers.

/// Scans a run of ASCII digits, at most `max_digits` long, and parses it as an integer.
/// Returns the value and the number of bytes consumed, or None if no digit was found.
pub(crate) fn scan_digits(bytes: &[u8], max_digits: usize) -> Option<(i32, usize)> {
    let mut len = 0;
    while len < bytes.len() && len < max_digits && bytes[len].is_ascii_digit() {
        len += 1;
    }
    if len == 0 {
        return None;
    }
    match lexical_core::parse(&bytes[..len]) {
        Ok(value) => Some((value, len)),
        Err(_) => None,
    }
}

/// Scans a signed integer subfield, with fractional notation support: a leading `.` or `,`
/// starts a fraction whose value is scaled by `upper_bound`. For plain integers, a positive
/// `upper_bound` clamps the result. Returns the value and the number of bytes consumed.
pub(crate) fn scan_field(bytes: &[u8], max_digits: usize, upper_bound: i32) -> Option<(i32, usize)> {
    let mut idx = 0;
    let mut negate = false;
    let mut fraction = false;
    match bytes.first()? {
        b'.' | b',' => {
            fraction = true;
            idx += 1;
        }
        b'-' => {
            negate = true;
            idx += 1;
        }
        b'+' | b':' => idx += 1,
        _ => {}
    }

    let mut value;
    if fraction {
        let mut scale = 0.1_f64;
        let mut frac = 0.0_f64;
        let start = idx;
        while idx < bytes.len() && bytes[idx].is_ascii_digit() {
            frac += f64::from(bytes[idx] - b'0') * scale;
            scale /= 10.0;
            idx += 1;
        }
        if idx == start {
            return None;
        }
        value = (frac * f64::from(upper_bound)) as i32;
    } else {
        let (parsed, len) = scan_digits(&bytes[idx..], max_digits)?;
        idx += len;
        value = parsed;
        if upper_bound > 0 && value > upper_bound {
            value = upper_bound;
        }
    }

    if negate {
        value = -value;
    }
    Some((value, idx))
}
