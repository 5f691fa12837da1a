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

//! Retrieval of the raw emoji metadata.

use std::{io::Read, path::PathBuf, time::Duration};

use crate::{
    conf::PathOrStdio,
    error::{Error, ErrorKind, Result, ResultIntoError},
};

pub const DEFAULT_URL: &str =
    "https://raw.githubusercontent.com/iamcal/emoji-data/master/emoji.json";

/// Where emoji metadata is read from.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Source {
    Url(String),
    Path(PathBuf),
    Stdio,
}

impl Default for Source {
    fn default() -> Self {
        Self::Url(DEFAULT_URL.to_string())
    }
}

impl From<PathOrStdio> for Source {
    fn from(val: PathOrStdio) -> Self {
        match val {
            PathOrStdio::Path(p) => Self::Path(p),
            PathOrStdio::Stdio => Self::Stdio,
        }
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Url(url) => write!(fmt, "{}", url),
            Self::Path(p) => write!(fmt, "{}", p.display()),
            Self::Stdio => write!(fmt, "standard input"),
        }
    }
}

impl Source {
    /// Read the whole body of the source.
    pub fn read(&self, timeout: Option<Duration>) -> Result<Vec<u8>> {
        log::info!("Reading emoji data from {}", self);
        let body = match self {
            Self::Url(url) => fetch_url(url, timeout)?,
            Self::Path(p) => std::fs::read(p)
                .chain_err_summary(|| format!("Could not read {}", p.display()))
                .chain_err_related_path(p)?,
            Self::Stdio => {
                let mut buf = vec![];
                std::io::stdin()
                    .lock()
                    .read_to_end(&mut buf)
                    .chain_err_summary(|| "Could not read standard input")?;
                buf
            }
        };
        log::debug!("Read {} bytes from {}", body.len(), self);
        Ok(body)
    }
}

/// Issue a single `GET` for `url` and return the response body.
///
/// Redirects are followed. A response with a non-success status is an error
/// of kind [`ErrorKind::Network`] carrying the status code.
#[cfg(feature = "http")]
pub fn fetch_url(url: &str, timeout: Option<Duration>) -> Result<Vec<u8>> {
    use isahc::{
        config::{Configurable, RedirectPolicy},
        HttpClient,
    };

    use crate::error::NetworkErrorKind;

    let client = HttpClient::builder().redirect_policy(RedirectPolicy::Limit(10));
    let client = match timeout {
        Some(timeout) => client.timeout(timeout),
        None => client,
    };
    let client = client.build()?;
    let mut response = client
        .get(url)
        .chain_err_summary(|| format!("Could not fetch {}", url))?;
    log::trace!("fetch_url(): url `{}` response {:?}", url, response);

    if !response.status().is_success() {
        let kind: NetworkErrorKind = response.status().into();
        return Err(Error::new(format!(
            "Could not fetch {}. Reply from server: {}",
            url,
            response.status()
        ))
        .set_kind(kind.into()));
    }

    let mut body = vec![];
    response
        .body_mut()
        .read_to_end(&mut body)
        .chain_err_summary(|| format!("Could not read response body of {}", url))
        .chain_err_kind(ErrorKind::Network(NetworkErrorKind::Io))?;
    Ok(body)
}

#[cfg(not(feature = "http"))]
pub fn fetch_url(url: &str, _timeout: Option<Duration>) -> Result<Vec<u8>> {
    Err(Error::new(format!(
        "Could not fetch {}: this build of generate-emoji was compiled without the `http` \
         feature. Use --input to read emoji data from a file instead.",
        url
    ))
    .set_kind(ErrorKind::NotSupported))
}
