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

//! The fetch, parse, transform and write pipeline.

use std::io::Write;

use crate::{
    conf::{PathOrStdio, Settings},
    error::{Result, ResultIntoError},
    record::parse_records,
    table::EmojiTable,
};

/// Read and decode the emoji metadata described by `settings`.
pub fn generate(settings: &Settings) -> Result<EmojiTable> {
    let body = settings.source().read(settings.timeout())?;
    let records = parse_records(&body)
        .chain_err_summary(|| format!("Could not parse emoji data from {}", settings.source()))?;
    EmojiTable::from_records(&records, settings.table_options())
}

/// Write `table` to `output`, replacing an existing file.
pub fn write_table(table: &EmojiTable, output: &PathOrStdio) -> Result<()> {
    match output {
        PathOrStdio::Path(p) => table.save(p)?,
        PathOrStdio::Stdio => {
            let stdout = std::io::stdout();
            let mut stdout = stdout.lock();
            table.write_to(&mut stdout)?;
            stdout.flush()?;
        }
    }
    log::info!("Wrote {} entries to {}", table.len(), output);
    Ok(())
}

pub fn run(settings: &Settings) -> Result<()> {
    let table = generate(settings)?;
    write_table(&table, &settings.output)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_run_from_file() {
        let tmp_dir = TempDir::new().unwrap();
        let input = tmp_dir.path().join("emoji-data.json");
        let output = tmp_dir.path().join("emoji.json");
        std::fs::write(&input, r#"[{"short_name": "grinning", "unified": "1F600"}]"#).unwrap();
        let settings = Settings {
            input: Some(PathOrStdio::Path(input)),
            output: PathOrStdio::Path(output.clone()),
            ..Settings::default()
        };
        run(&settings).unwrap();
        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            "{\n    \"grinning\": \"😀\"\n}"
        );
        let written: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&output).unwrap()).unwrap();
        assert_eq!(written, serde_json::json!({"grinning": "😀"}));
    }

    #[test]
    fn test_generate_bad_data_leaves_output_untouched() {
        let tmp_dir = TempDir::new().unwrap();
        let input = tmp_dir.path().join("emoji-data.json");
        let output = tmp_dir.path().join("emoji.json");
        std::fs::write(&input, r#"[{"name": "GRINNING FACE", "unified": "1F600"}]"#).unwrap();
        std::fs::write(&output, "previous").unwrap();
        let settings = Settings {
            input: Some(PathOrStdio::Path(input)),
            output: PathOrStdio::Path(output.clone()),
            ..Settings::default()
        };
        let err = run(&settings).unwrap_err();
        assert!(err.kind.is_value_error());
        assert!(err.summary.starts_with("Could not parse emoji data from"));
        assert_eq!(err.to_string().matches("Could not parse emoji data").count(), 1);
        assert!(
            err.details.as_deref().unwrap().contains("missing field `short_name`"),
            "{}",
            err
        );
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "previous");
    }
}
