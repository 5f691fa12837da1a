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

//! Short name to emoji lookup table.
//!
//! The table serializes to a JSON object with sorted keys and four space
//! indentation:
//!
//! ```text
//! {
//!     "+1": "👍",
//!     "grinning": "😀"
//! }
//! ```

use std::{
    borrow::Cow,
    collections::{btree_map, BTreeMap},
    fs::File,
    io::{BufWriter, Read, Write},
    path::Path,
};

use serde::Serialize;

use crate::{
    codepoint::{decode_unified, parse_hex},
    error::{Error, ErrorKind, Result, ResultIntoError},
    record::EmojiRecord,
};


const INDENT: &[u8] = b"    ";

/// Which optional entries to add on top of the `short_name` entries.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TableOptions {
    /// Add an entry for every alternative short name of a record.
    pub aliases: bool,
    /// Add `short_name::skin-tone-N` entries for skin tone variations.
    pub skin_tones: bool,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct EmojiTable {
    entries: BTreeMap<String, String>,
}

/// Name of a Fitzpatrick skin tone modifier, `U+1F3FB` to `U+1F3FF`.
pub const fn skin_tone_name(modifier: u32) -> Option<&'static str> {
    Some(match modifier {
        0x1F3FB => "skin-tone-2",
        0x1F3FC => "skin-tone-3",
        0x1F3FD => "skin-tone-4",
        0x1F3FE => "skin-tone-5",
        0x1F3FF => "skin-tone-6",
        _ => return None,
    })
}

/// Turn a `skin_variations` key such as `1F3FB-1F3FC` into
/// `skin-tone-2::skin-tone-3`.
fn skin_tone_suffix(modifiers: &str) -> Result<String> {
    let tones = modifiers
        .split(crate::codepoint::SEPARATOR)
        .map(|hex| {
            skin_tone_name(parse_hex(hex)?).ok_or_else(|| {
                Error::new(format!("`{}` is not a skin tone modifier", hex))
                    .set_kind(ErrorKind::ValueError)
            })
        })
        .collect::<Result<Vec<&'static str>>>()?;
    Ok(tones.join("::"))
}

impl EmojiTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from records in input order. When two records share a
    /// key, the later one wins.
    pub fn from_records(records: &[EmojiRecord], options: TableOptions) -> Result<Self> {
        let mut ret = Self::new();
        for (idx, record) in records.iter().enumerate() {
            ret.add_record(record, options).chain_err_summary(|| {
                format!(
                    "Could not decode emoji record #{} (`{}`)",
                    idx, record.short_name
                )
            })?;
        }
        Ok(ret)
    }

    fn add_record(&mut self, record: &EmojiRecord, options: TableOptions) -> Result<()> {
        let emoji = decode_unified(&record.unified)?;
        if options.aliases {
            for alias in record.aliases() {
                self.insert(alias.to_string(), emoji.clone());
            }
        }
        self.insert(record.short_name.clone(), emoji);
        if options.skin_tones {
            for (modifiers, variation) in &record.skin_variations {
                self.insert(
                    format!("{}::{}", record.short_name, skin_tone_suffix(modifiers)?),
                    decode_unified(&variation.unified)?,
                );
            }
        }
        Ok(())
    }

    /// Insert or overwrite an entry, returning the previous value.
    pub fn insert(&mut self, short_name: String, emoji: String) -> Option<String> {
        self.entries.insert(short_name, emoji)
    }

    pub fn get(&self, short_name: &str) -> Option<&str> {
        self.entries.get(short_name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
        self.entries.iter()
    }

    /// Serialize as indented JSON with sorted keys and literal (unescaped)
    /// non-ASCII text. No trailing newline is written.
    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
        let mut ser = serde_json::Serializer::with_formatter(writer, formatter);
        self.serialize(&mut ser)?;
        Ok(())
    }

    pub fn to_json_string(&self) -> Result<String> {
        let mut buf = Vec::with_capacity(self.len() * 32);
        self.write_to(&mut buf)?;
        // serde_json only emits valid UTF-8.
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Write the table to `path`, replacing any existing file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let file = File::create(path)
            .chain_err_summary(|| format!("Could not create {}", path.display()))
            .chain_err_related_path(path)?;
        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer)
            .chain_err_related_path(path)?;
        writer
            .flush()
            .chain_err_summary(|| format!("Could not write {}", path.display()))
            .chain_err_related_path(path)?;
        Ok(())
    }

    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        let jd = &mut serde_json::Deserializer::from_slice(bytes);
        let ret: Self = serde_path_to_error::deserialize(&mut *jd)?;
        jd.end()?;
        Ok(ret)
    }

    /// Read a table previously written with [`EmojiTable::save`].
    pub fn load(path: &Path) -> Result<Self> {
        let mut buf = vec![];
        File::open(path)
            .and_then(|mut f| f.read_to_end(&mut buf))
            .chain_err_summary(|| format!("Could not read emoji table {}", path.display()))
            .chain_err_related_path(path)?;
        Self::from_json(&buf)
            .chain_err_summary(|| format!("Could not parse emoji table {}", path.display()))
            .chain_err_related_path(path)
    }

    /// Replace `:short_name:` codes in `text` with their emoji.
    ///
    /// Unknown codes are left as they are. A code followed by a skin tone
    /// code, as in `:wave::skin-tone-3:`, resolves to the `wave::skin-tone-3`
    /// entry if the table has one.
    pub fn emojify<'t>(&self, text: &'t str) -> Cow<'t, str> {
        let mut ret = String::new();
        let mut copied = 0;
        let mut pos = 0;
        while let Some(offset) = text[pos..].find(':') {
            let colon = pos + offset;
            let Some((name, mut end)) = code_at(text, colon) else {
                pos = colon + 1 + code_len(text, colon + 1);
                continue;
            };
            let mut value = self.get(name);
            if value.is_some() {
                if let Some((tone, tone_end)) = code_at(text, end) {
                    if let Some(v) = tone
                        .starts_with("skin-tone-")
                        .then(|| self.get(&format!("{}::{}", name, tone)))
                        .flatten()
                    {
                        value = Some(v);
                        end = tone_end;
                    }
                }
            }
            match value {
                Some(emoji) => {
                    ret.push_str(&text[copied..colon]);
                    ret.push_str(emoji);
                    copied = end;
                    pos = end;
                }
                // The closing colon may open the next code.
                None => pos = end - 1,
            }
        }
        if copied == 0 {
            return Cow::Borrowed(text);
        }
        ret.push_str(&text[copied..]);
        Cow::Owned(ret)
    }
}

impl<'a> IntoIterator for &'a EmojiTable {
    type Item = (&'a String, &'a String);
    type IntoIter = btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<(String, String)> for EmojiTable {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

fn code_len(text: &str, from: usize) -> usize {
    text.as_bytes()[from..]
        .iter()
        .take_while(|b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'-' | b'+'))
        .count()
}

/// If a `:code:` starts at byte `colon`, return the code and the byte
/// offset right after its closing colon.
fn code_at(text: &str, colon: usize) -> Option<(&str, usize)> {
    if text.as_bytes().get(colon) != Some(&b':') {
        return None;
    }
    let start = colon + 1;
    let end = start + code_len(text, start);
    if end > start && text.as_bytes().get(end) == Some(&b':') {
        Some((&text[start..end], end + 1))
    } else {
        None
    }
}
