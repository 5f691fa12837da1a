//
// generate-emoji
//
// Copyright 2024 generate-emoji contributors
//
// This file is part of generate-emoji.
//
// generate-emoji is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// generate-emoji is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with generate-emoji. If not, see <http://www.gnu.org/licenses/>.
//
// SPDX-License-Identifier: EUPL-1.2 OR GPL-3.0-or-later

//! Decoding of hyphen-separated hexadecimal codepoint sequences, as found in
//! the `unified` field of emoji-data records (e.g. `1F1EB-1F1F7`).

use crate::error::{Error, ErrorKind, Result, ResultIntoError};

/// Separator between codepoints of a unified codepoint string.
pub const SEPARATOR: char = '-';

/// Parse one hexadecimal codepoint. Surrounding whitespace is ignored.
pub fn parse_hex(hex: &str) -> Result<u32> {
    u32::from_str_radix(hex.trim(), 16)
        .chain_err_summary(|| format!("`{}` is not a hexadecimal codepoint", hex))
}

/// Convert a codepoint value to a `char`.
///
/// `char` holds every Unicode scalar value, astral planes included, so there
/// is a single construction path. Surrogates and values above `U+10FFFF` are
/// rejected.
pub fn scalar(value: u32) -> Result<char> {
    char::from_u32(value).ok_or_else(|| {
        Error::new(format!(
            "U+{:04X} is not a Unicode scalar value",
            value
        ))
        .set_kind(ErrorKind::ValueError)
    })
}

/// Decode a unified codepoint string into the text it represents, keeping
/// the order of the codepoints.
///
/// ```
/// # use generate_emoji::codepoint::decode_unified;
/// assert_eq!(decode_unified("1F600").unwrap(), "\u{1F600}");
/// assert_eq!(decode_unified("1F1EB-1F1F7").unwrap(), "\u{1F1EB}\u{1F1F7}");
/// ```
pub fn decode_unified(unified: &str) -> Result<String> {
    let mut ret = String::with_capacity(unified.len());
    for hex in unified.split(SEPARATOR) {
        ret.push(scalar(parse_hex(hex)?)?);
    }
    Ok(ret)
}
