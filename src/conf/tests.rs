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

use tempfile::TempDir;

use super::*;

#[test]
fn test_conf_empty_is_default() {
    let s = Settings::validate_string("").unwrap();
    assert_eq!(s, Settings::default());
    assert_eq!(s.source(), Source::Url(DEFAULT_URL.to_string()));
    assert_eq!(s.output, PathOrStdio::Path(PathBuf::from("emoji.json")));
    assert_eq!(s.timeout(), None);
    assert_eq!(s.table_options(), TableOptions::default());
}

#[test]
fn test_conf_all_keys() {
    let s = Settings::validate_string(
        r#"
url = "https://example.com/emoji.json"
input = "-"
output = "-"
aliases = true
skin_tones = true
timeout = 30
log_level = "DEBUG"
"#,
    )
    .unwrap();
    assert_eq!(s.url, "https://example.com/emoji.json");
    assert_eq!(s.source(), Source::Stdio);
    assert_eq!(s.output, PathOrStdio::Stdio);
    assert_eq!(s.timeout(), Some(Duration::from_secs(30)));
    assert_eq!(s.log_level, LogLevel::DEBUG);
    assert_eq!(
        s.table_options(),
        TableOptions {
            aliases: true,
            skin_tones: true
        }
    );

    let s = Settings::validate_string(r#"input = "data/emoji.json""#).unwrap();
    assert_eq!(s.source(), Source::Path(PathBuf::from("data/emoji.json")));
}

#[test]
fn test_conf_errors() {
    let err = Settings::validate_string("url = ").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Configuration);
    assert_eq!(err.summary, "Config file is invalid TOML");

    let err = Settings::validate_string(r#"ouptut = "emoji.json""#).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Configuration);
    assert!(err.details.as_deref().unwrap().contains("ouptut"), "{}", err);

    let err = Settings::validate_string("aliases = \"yes\"").unwrap_err();
    assert_eq!(err.summary, "Config file contains errors at `aliases`");

    let err = Settings::validate_string("url = \"\"").unwrap_err();
    assert_eq!(err.summary, "Config file contains errors at `url`");
}

#[test]
fn test_conf_default_toml_roundtrip() {
    let sample = Settings::default().to_toml_string().unwrap();
    assert!(sample.contains(DEFAULT_URL));
    assert!(sample.contains(r#"output = "emoji.json""#));
    assert!(sample.contains(r#"log_level = "WARN""#));
    assert!(!sample.contains("timeout"));
    assert_eq!(Settings::validate_string(&sample).unwrap(), Settings::default());
}

#[test]
fn test_conf_from_file() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("config.toml");
    std::fs::write(&path, "skin_tones = true\n").unwrap();
    let s = Settings::new(&PathOrStdio::Path(path.clone())).unwrap();
    assert!(s.skin_tones);

    std::fs::write(&path, "skin_tone = true\n").unwrap();
    let err = Settings::new(&PathOrStdio::Path(path.clone())).unwrap_err();
    assert_eq!(err.related_path, Some(path));

    let err = Settings::new(&PathOrStdio::Path(tmp_dir.path().join("nope.toml"))).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Io);
}

#[test]
fn test_path_or_stdio() {
    assert_eq!(PathOrStdio::from_os_str(OsStr::new("-")), PathOrStdio::Stdio);
    assert_eq!(
        PathOrStdio::from_os_str(OsStr::new("./-")),
        PathOrStdio::Path(PathBuf::from("./-"))
    );
    assert_eq!(PathBuf::from(PathOrStdio::Stdio), PathBuf::from("-"));
    assert_eq!(PathOrStdio::Stdio.to_string(), "-");
}
