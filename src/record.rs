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

//! Emoji metadata records as published by
//! <https://github.com/iamcal/emoji-data>.
//!
//! Only the fields needed to build a lookup table are deserialized, every
//! other field is ignored.

use std::collections::BTreeMap;

use crate::error::Result;

/// One entry of `emoji.json`.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct EmojiRecord {
    pub short_name: String,
    /// Hyphen-separated hexadecimal codepoints, e.g. `1F1EB-1F1F7`.
    pub unified: String,
    /// All short names of this emoji, including `short_name`.
    #[serde(default)]
    pub short_names: Vec<String>,
    /// Skin tone variations keyed by their modifier codepoints, e.g. `1F3FB`
    /// or `1F3FB-1F3FC`.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub skin_variations: BTreeMap<String, SkinVariation>,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct SkinVariation {
    pub unified: String,
}

impl EmojiRecord {
    pub fn new(short_name: impl Into<String>, unified: impl Into<String>) -> Self {
        Self {
            short_name: short_name.into(),
            unified: unified.into(),
            short_names: vec![],
            skin_variations: BTreeMap::default(),
        }
    }

    /// Alternative short names, excluding `short_name` itself.
    pub fn aliases(&self) -> impl Iterator<Item = &str> + '_ {
        self.short_names
            .iter()
            .map(String::as_str)
            .filter(move |n| *n != self.short_name)
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + serde::Deserialize<'de>,
{
    use serde::Deserialize;

    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserialize a JSON array of records, in input order.
///
/// A record missing `short_name` or `unified` is an error; its position is
/// reported in the error summary, e.g. ``missing field `unified` at `[2]` ``.
pub fn parse_records(bytes: &[u8]) -> Result<Vec<EmojiRecord>> {
    let jd = &mut serde_json::Deserializer::from_slice(bytes);
    let records: Vec<EmojiRecord> = serde_path_to_error::deserialize(&mut *jd)?;
    jd.end()?;
    log::info!("Parsed {} emoji records", records.len());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_parse_records_ignores_unknown_fields() {
        let records = parse_records(
            br#"[
    {"name": "GRINNING FACE", "unified": "1F600", "non_qualified": null,
     "short_name": "grinning", "short_names": ["grinning"], "sort_order": 1,
     "has_img_apple": true},
    {"unified": "1F44D", "short_name": "+1", "short_names": ["+1", "thumbsup"],
     "skin_variations": {"1F3FB": {"unified": "1F44D-1F3FB", "image": "1f44d-1f3fb.png"}}}
]"#,
        )
        .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], {
            let mut r = EmojiRecord::new("grinning", "1F600");
            r.short_names = vec!["grinning".into()];
            r
        });
        assert_eq!(records[1].aliases().collect::<Vec<_>>(), ["thumbsup"]);
        assert_eq!(records[1].skin_variations["1F3FB"].unified, "1F44D-1F3FB");
    }

    #[test]
    fn test_parse_records_null_skin_variations() {
        let records =
            parse_records(br#"[{"short_name": "a", "unified": "61", "skin_variations": null}]"#)
                .unwrap();
        assert!(records[0].skin_variations.is_empty());
    }

    #[test]
    fn test_parse_records_missing_field_fails() {
        let err = parse_records(
            br#"[{"short_name": "grinning", "unified": "1F600"}, {"short_name": "smile"}]"#,
        )
        .unwrap_err();
        assert_eq!(err.kind, ErrorKind::ValueError);
        assert!(err.summary.contains("missing field `unified`"), "{}", err);
        assert!(err.summary.contains("[1]"), "{}", err);
    }

    #[test]
    fn test_parse_records_malformed_json_fails() {
        for input in [&b"{}"[..], b"[", b"not json", b"[] []", b"\xff\xfe"] {
            let err = parse_records(input).unwrap_err();
            assert_eq!(err.kind, ErrorKind::ValueError, "{:?}", input);
        }
    }

    #[test]
    fn test_parse_records_empty() {
        assert!(parse_records(b"[]").unwrap().is_empty());
        assert!(parse_records(b"  [ ]\n").unwrap().is_empty());
    }
}
