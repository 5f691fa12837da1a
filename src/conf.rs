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

//! Configuration.
//!
//! Every setting has a default, so a configuration file is optional. When
//! given, it is a TOML file:
//!
//! ```toml
//! url = "https://raw.githubusercontent.com/iamcal/emoji-data/master/emoji.json"
//! # input = "emoji-data.json"
//! output = "emoji.json"
//! aliases = false
//! skin_tones = false
//! # timeout = 30
//! log_level = "WARN"
//! ```

use std::{
    ffi::OsStr,
    io::Read,
    path::PathBuf,
    sync::Arc,
    time::Duration,
};

use crate::{
    error::{Error, ErrorKind, Result, ResultIntoError},
    fetch::{Source, DEFAULT_URL},
    logging::LogLevel,
    table::TableOptions,
};

#[cfg(test)]
mod tests;

pub const DEFAULT_OUTPUT: &str = "emoji.json";

/// `Pathbuf` or standard stream (`-` operand).
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(from = "PathBuf", into = "PathBuf")]
pub enum PathOrStdio {
    /// Path
    Path(PathBuf),
    /// standard stream (`-` operand)
    Stdio,
}

impl PathOrStdio {
    pub fn from_os_str(input: &OsStr) -> Self {
        if input == "-" {
            Self::Stdio
        } else {
            Self::Path(PathBuf::from(input))
        }
    }
}

impl From<PathBuf> for PathOrStdio {
    fn from(val: PathBuf) -> Self {
        Self::from_os_str(val.as_os_str())
    }
}

impl From<PathOrStdio> for PathBuf {
    fn from(val: PathOrStdio) -> Self {
        match val {
            PathOrStdio::Path(p) => p,
            PathOrStdio::Stdio => Self::from("-"),
        }
    }
}

impl std::fmt::Display for PathOrStdio {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Path(p) => write!(fmt, "{}", p.display()),
            Self::Stdio => write!(fmt, "-"),
        }
    }
}

fn default_url() -> String {
    DEFAULT_URL.to_string()
}

fn default_output() -> PathOrStdio {
    PathOrStdio::Path(PathBuf::from(DEFAULT_OUTPUT))
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Location of the emoji metadata.
    #[serde(default = "default_url")]
    pub url: String,
    /// Read emoji metadata from this file (or `-` for standard input)
    /// instead of fetching `url`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<PathOrStdio>,
    /// Where to write the table, `-` for standard output.
    #[serde(default = "default_output")]
    pub output: PathOrStdio,
    #[serde(default)]
    pub aliases: bool,
    #[serde(default)]
    pub skin_tones: bool,
    /// Timeout of the whole request in seconds. No timeout if unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,
    #[serde(default)]
    pub log_level: LogLevel,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            url: default_url(),
            input: None,
            output: default_output(),
            aliases: false,
            skin_tones: false,
            timeout: None,
            log_level: LogLevel::default(),
        }
    }
}

impl Settings {
    /// Load settings from a configuration file, or `-` for standard input.
    pub fn new(path: &PathOrStdio) -> Result<Self> {
        match path {
            PathOrStdio::Path(p) => {
                let s = std::fs::read_to_string(p)
                    .chain_err_summary(|| {
                        format!("Could not read configuration file {}", p.display())
                    })
                    .chain_err_related_path(p)?;
                Self::validate_string(&s).chain_err_related_path(p)
            }
            PathOrStdio::Stdio => {
                let mut s = String::new();
                std::io::stdin()
                    .lock()
                    .read_to_string(&mut s)
                    .chain_err_summary(|| "Could not read configuration from standard input")?;
                Self::validate_string(&s)
            }
        }
    }

    /// Validate configuration from `input` string.
    pub fn validate_string(s: &str) -> Result<Self> {
        let _: toml::value::Table = serde_path_to_error::deserialize(toml::Deserializer::new(s))
            .map_err(|err| {
                Error::new("Config file is invalid TOML")
                    .set_source(Some(Arc::new(err)))
                    .set_kind(ErrorKind::Configuration)
            })?;

        let s: Self = serde_path_to_error::deserialize(toml::Deserializer::new(s)).map_err(
            |err| {
                Error::new(format!("Config file contains errors at `{}`", err.path()))
                    .set_details(err.inner().message().to_string())
                    .set_source(Some(Arc::new(err)))
                    .set_kind(ErrorKind::Configuration)
            },
        )?;
        if s.url.trim().is_empty() && s.input.is_none() {
            return Err(Error::new("Config file contains errors at `url`")
                .set_details("url must not be empty")
                .set_kind(ErrorKind::Configuration));
        }
        Ok(s)
    }

    /// Sample configuration with every option set to its default.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    pub fn source(&self) -> Source {
        match self.input.as_ref() {
            Some(input) => input.clone().into(),
            None => Source::Url(self.url.clone()),
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }

    pub fn table_options(&self) -> TableOptions {
        TableOptions {
            aliases: self.aliases,
            skin_tones: self.skin_tones,
        }
    }
}
