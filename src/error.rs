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

//! An error object for `generate-emoji`

use std::{borrow::Cow, fmt, io, path::PathBuf, result, sync::Arc};

pub mod network;
pub use network::NetworkErrorKind;

pub type Result<T> = result::Result<T, Error>;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ErrorKind {
    #[default]
    None,
    Configuration,
    Io,
    Network(NetworkErrorKind),
    NotSupported,
    ValueError,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(
            fmt,
            "{}",
            match self {
                Self::None => "None",
                Self::Configuration => "Configuration error",
                Self::Io => "I/O error",
                Self::Network(inner) => inner.as_str(),
                Self::NotSupported => "Not supported in this build",
                Self::ValueError => "Invalid value",
            }
        )
    }
}

impl ErrorKind {
    pub const fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    pub const fn is_value_error(&self) -> bool {
        matches!(self, Self::ValueError)
    }
}

#[derive(Clone, Debug)]
pub struct Error {
    pub summary: Cow<'static, str>,
    pub details: Option<Cow<'static, str>>,
    pub related_path: Option<PathBuf>,
    pub source: Option<Arc<dyn std::error::Error + Send + Sync + 'static>>,
    pub kind: ErrorKind,
}

pub trait IntoError {
    fn set_err_summary<M>(self, msg: M) -> Error
    where
        M: Into<Cow<'static, str>>;

    fn set_err_kind(self, kind: ErrorKind) -> Error;
}

pub trait ResultIntoError<T> {
    fn chain_err_summary<M, F>(self, msg_fn: F) -> Result<T>
    where
        F: Fn() -> M,
        M: Into<Cow<'static, str>>;

    fn chain_err_related_path(self, p: &std::path::Path) -> Result<T>;

    fn chain_err_kind(self, kind: ErrorKind) -> Result<T>;
}

impl<I: Into<Error>> IntoError for I {
    #[inline]
    fn set_err_summary<M>(self, msg: M) -> Error
    where
        M: Into<Cow<'static, str>>,
    {
        let err: Error = self.into();
        err.set_summary(msg)
    }

    #[inline]
    fn set_err_kind(self, kind: ErrorKind) -> Error {
        let err: Error = self.into();
        err.set_kind(kind)
    }
}

impl<T, I: Into<Error>> ResultIntoError<T> for result::Result<T, I> {
    #[inline]
    fn chain_err_summary<M, F>(self, msg_fn: F) -> Result<T>
    where
        F: Fn() -> M,
        M: Into<Cow<'static, str>>,
    {
        self.map_err(|err| err.set_err_summary(msg_fn()))
    }

    #[inline]
    fn chain_err_related_path(self, p: &std::path::Path) -> Result<T> {
        self.map_err(|err| {
            let err: Error = err.into();
            err.set_related_path(Some(p.to_path_buf()))
        })
    }

    #[inline]
    fn chain_err_kind(self, kind: ErrorKind) -> Result<T> {
        self.map_err(|err| err.set_err_kind(kind))
    }
}

impl Error {
    pub fn new<M>(msg: M) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        Self {
            summary: msg.into(),
            details: None,
            related_path: None,
            source: None,
            kind: ErrorKind::None,
        }
    }

    /// Replace the summary, moving the previous one into `details`.
    pub fn set_summary<M>(mut self, summary: M) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        let previous = std::mem::replace(&mut self.summary, summary.into());
        self.details = Some(match self.details.take() {
            Some(details) => format!("{}\n{}", previous, details).into(),
            None => previous,
        });
        self
    }

    pub fn set_details<M>(mut self, details: M) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        self.details = Some(details.into());
        self
    }

    pub fn set_source(
        mut self,
        new_val: Option<Arc<dyn std::error::Error + Send + Sync + 'static>>,
    ) -> Self {
        self.source = new_val;
        self
    }

    pub fn set_kind(mut self, new_val: ErrorKind) -> Self {
        self.kind = new_val;
        self
    }

    pub fn set_related_path(mut self, new_val: Option<PathBuf>) -> Self {
        self.related_path = new_val;
        self
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.summary)?;
        if let Some(details) = self.details.as_ref() {
            if !details.trim().is_empty() {
                write!(f, "\n{}", details)?;
            }
        }
        if let Some(path) = self.related_path.as_ref() {
            write!(f, "\nRelated path: {}", path.display())?;
        }
        if let Some(source) = self.source.as_ref() {
            write!(f, "\nCaused by: {}", source)?;
        }
        if !matches!(self.kind, ErrorKind::None) {
            write!(f, "\nError kind: {}", self.kind)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|s| s.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl From<io::Error> for Error {
    #[inline]
    fn from(err: io::Error) -> Self {
        Self::new(err.to_string())
            .set_kind(ErrorKind::Io)
            .set_source(Some(Arc::new(err)))
    }
}

impl From<serde_json::Error> for Error {
    #[inline]
    fn from(err: serde_json::Error) -> Self {
        let kind = if err.is_io() {
            ErrorKind::Io
        } else {
            ErrorKind::ValueError
        };
        Self::new(err.to_string())
            .set_kind(kind)
            .set_source(Some(Arc::new(err)))
    }
}

impl From<serde_path_to_error::Error<serde_json::Error>> for Error {
    #[inline]
    fn from(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        Self::new(format!("{} at `{}`", err.inner(), err.path()))
            .set_kind(ErrorKind::ValueError)
            .set_source(Some(Arc::new(err)))
    }
}

impl From<toml::de::Error> for Error {
    #[inline]
    fn from(err: toml::de::Error) -> Self {
        Self::new(err.to_string())
            .set_kind(ErrorKind::Configuration)
            .set_source(Some(Arc::new(err)))
    }
}

impl From<toml::ser::Error> for Error {
    #[inline]
    fn from(err: toml::ser::Error) -> Self {
        Self::new(err.to_string())
            .set_kind(ErrorKind::Configuration)
            .set_source(Some(Arc::new(err)))
    }
}

impl From<std::num::ParseIntError> for Error {
    #[inline]
    fn from(err: std::num::ParseIntError) -> Self {
        Self::new(err.to_string())
            .set_kind(ErrorKind::ValueError)
            .set_source(Some(Arc::new(err)))
    }
}

#[cfg(feature = "http")]
impl From<isahc::Error> for Error {
    #[inline]
    fn from(err: isahc::Error) -> Self {
        let kind = NetworkErrorKind::from(err.kind());
        Self::new(err.to_string())
            .set_kind(ErrorKind::Network(kind))
            .set_source(Some(Arc::new(err)))
    }
}

impl From<&str> for Error {
    #[inline]
    fn from(kind: &str) -> Self {
        Self::new(kind.to_string())
    }
}

impl From<String> for Error {
    #[inline]
    fn from(kind: String) -> Self {
        Self::new(kind)
    }
}
