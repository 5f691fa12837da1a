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

//! Command line arguments.

use std::{
    io::{BufRead, Write},
    path::PathBuf,
};

use structopt::StructOpt;

use crate::{
    conf::{PathOrStdio, Settings},
    error::{Result, ResultIntoError},
    logging::LogLevel,
    table::EmojiTable,
};

#[derive(Debug, StructOpt)]
#[structopt(
    name = "generate-emoji",
    about = "generate a short name to emoji lookup table",
    version_short = "v"
)]
pub struct Opt {
    /// use specified configuration file. Path `-` reads it from standard
    /// input.
    #[structopt(short, long, value_name = "CONFIG_PATH", parse(from_os_str = PathOrStdio::from_os_str))]
    pub config: Option<PathOrStdio>,

    /// fetch emoji metadata from URL.
    #[structopt(long, value_name = "URL")]
    pub url: Option<String>,

    /// read emoji metadata from INPUT instead of fetching it. Path `-` reads
    /// standard input.
    #[structopt(short, long, value_name = "INPUT", parse(from_os_str = PathOrStdio::from_os_str))]
    pub input: Option<PathOrStdio>,

    /// write the table to OUTPUT instead of `emoji.json`. Path `-` writes to
    /// standard output.
    #[structopt(short, long, value_name = "OUTPUT", parse(from_os_str = PathOrStdio::from_os_str))]
    pub output: Option<PathOrStdio>,

    /// add entries for every alternative short name of an emoji.
    #[structopt(long)]
    pub aliases: bool,

    /// add `name::skin-tone-N` entries for skin tone variations.
    #[structopt(long)]
    pub skin_tones: bool,

    /// log more; may be repeated. Once for progress messages, twice for
    /// debug output.
    #[structopt(long, parse(from_occurrences))]
    pub verbose: u8,

    /// only log errors.
    #[structopt(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    #[structopt(subcommand)]
    pub subcommand: Option<SubCommand>,
}

#[derive(Debug, StructOpt)]
pub enum SubCommand {
    /// replace `:short_name:` codes in TEXT with emoji from a generated
    /// table. Without TEXT, standard input is read line by line.
    Emojify {
        /// table to use.
        #[structopt(short, long, value_name = "TABLE_PATH", default_value = "emoji.json", parse(from_os_str))]
        table: PathBuf,
        #[structopt(value_name = "TEXT")]
        text: Vec<String>,
    },
    /// test a configuration file for syntax issues or unknown options. Path
    /// `-` will read input from standard input instead.
    TestConfig {
        #[structopt(value_name = "CONFIG_PATH", parse(from_os_str = PathOrStdio::from_os_str))]
        path: PathOrStdio,
    },
    /// print a configuration file with every option set to its default value.
    PrintDefaultConfig,
}

impl Opt {
    /// Settings from the configuration file, if any, with command line
    /// options applied on top.
    pub fn settings(&self) -> Result<Settings> {
        let mut s = match self.config.as_ref() {
            Some(path) => Settings::new(path)?,
            None => Settings::default(),
        };
        if let Some(url) = self.url.as_ref() {
            s.url = url.clone();
            s.input = None;
        }
        if let Some(input) = self.input.as_ref() {
            s.input = Some(input.clone());
        }
        if let Some(output) = self.output.as_ref() {
            s.output = output.clone();
        }
        s.aliases |= self.aliases;
        s.skin_tones |= self.skin_tones;
        if self.quiet {
            s.log_level = LogLevel::ERROR;
        } else if self.verbose > 0 {
            s.log_level = s.log_level.more_verbose(self.verbose);
        }
        Ok(s)
    }

    /// Execute `self.subcommand` if any, and return its result. Otherwise
    /// return `None`.
    pub fn execute(&self) -> Option<Result<()>> {
        Some(match self.subcommand.as_ref()? {
            SubCommand::Emojify { table, text } => emojify(table, text),
            SubCommand::TestConfig { path } => Settings::new(path).map(|_| {
                println!("No errors found in {}.", path);
            }),
            SubCommand::PrintDefaultConfig => Settings::default()
                .to_toml_string()
                .map(|s| print!("{}", s)),
        })
    }
}

fn emojify(table: &std::path::Path, text: &[String]) -> Result<()> {
    let table = EmojiTable::load(table)?;
    let stdout = std::io::stdout();
    let mut stdout = stdout.lock();
    if !text.is_empty() {
        writeln!(stdout, "{}", table.emojify(&text.join(" ")))?;
        return Ok(());
    }
    for line in std::io::stdin().lock().lines() {
        let line = line.chain_err_summary(|| "Could not read standard input")?;
        writeln!(stdout, "{}", table.emojify(&line))?;
    }
    Ok(())
}
