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

#![deny(
    /* groups */
    clippy::correctness,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::style,
    /* restriction */
    clippy::dbg_macro,
    clippy::as_underscore,
    /* rustdoc */
    rustdoc::broken_intra_doc_links,
    /* pedantic */
    clippy::doc_markdown,
    clippy::expect_fun_call,
    clippy::or_fun_call,
)]

//! Generate a lookup table from emoji short names (`grinning`, `+1`,
//! `flag-fr`) to the emoji text they stand for.
//!
//! The table is built from the emoji metadata published by
//! [emoji-data](https://github.com/iamcal/emoji-data):
//!
//! - [`fetch`] reads the metadata from its URL, a file or standard input,
//! - [`record`] deserializes it into [`EmojiRecord`]s,
//! - [`codepoint`] decodes the `unified` codepoint strings,
//! - [`table`] assembles an [`EmojiTable`] and writes it out as indented JSON
//!   with sorted keys.
//!
//! [`generate::run`] ties these together as configured by
//! [`Settings`](conf::Settings).

#[macro_use]
extern crate serde_derive;
pub extern crate log;

pub mod args;
pub mod codepoint;
pub mod conf;
pub mod error;
pub mod fetch;
pub mod generate;
pub mod logging;
pub mod record;
pub mod table;

pub use conf::{PathOrStdio, Settings};
pub use error::{Error, ErrorKind, NetworkErrorKind, Result};
pub use logging::{LogLevel, StderrLogger};
pub use record::EmojiRecord;
pub use table::{EmojiTable, TableOptions};
