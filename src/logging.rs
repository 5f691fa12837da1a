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

//! Logging to standard error through the [`log`] facade.

use std::io::Write;

use log::{Level, LevelFilter, Log, Metadata, Record};

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, PartialOrd, Serialize)]
#[repr(u8)]
pub enum LogLevel {
    OFF = 0,
    ERROR,
    #[default]
    WARN,
    INFO,
    DEBUG,
    TRACE,
}

impl LogLevel {
    /// Raise verbosity by `steps` levels, saturating at `TRACE`.
    pub fn more_verbose(self, steps: u8) -> Self {
        Self::from((self as u8).saturating_add(steps))
    }
}

impl From<u8> for LogLevel {
    fn from(verbosity: u8) -> Self {
        match verbosity {
            0 => Self::OFF,
            1 => Self::ERROR,
            2 => Self::WARN,
            3 => Self::INFO,
            4 => Self::DEBUG,
            _ => Self::TRACE,
        }
    }
}

impl From<Level> for LogLevel {
    fn from(l: Level) -> Self {
        match l {
            Level::Error => Self::ERROR,
            Level::Warn => Self::WARN,
            Level::Info => Self::INFO,
            Level::Debug => Self::DEBUG,
            Level::Trace => Self::TRACE,
        }
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::OFF => Self::Off,
            LogLevel::ERROR => Self::Error,
            LogLevel::WARN => Self::Warn,
            LogLevel::INFO => Self::Info,
            LogLevel::DEBUG => Self::Debug,
            LogLevel::TRACE => Self::Trace,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                OFF => "OFF",
                ERROR => "ERROR",
                WARN => "WARN",
                INFO => "INFO",
                DEBUG => "DEBUG",
                TRACE => "TRACE",
            }
        )
    }
}

use LogLevel::*;

#[derive(Clone, Copy, Debug)]
pub struct StderrLogger {
    level: LogLevel,
}

impl Default for StderrLogger {
    fn default() -> Self {
        Self::new(LogLevel::default())
    }
}

impl StderrLogger {
    /// Create a logger and install it as the global [`log`] logger.
    ///
    /// Only the first logger created in a process is installed. Later calls
    /// only adjust the global maximum level.
    pub fn new(level: LogLevel) -> Self {
        use std::sync::Once;

        static INIT_STDERR_LOGGING: Once = Once::new();

        let logger = Self { level };
        log::set_max_level(LevelFilter::from(level));

        INIT_STDERR_LOGGING.call_once(|| {
            _ = log::set_boxed_logger(Box::new(logger));
        });
        logger
    }

    pub fn log_level(&self) -> LogLevel {
        self.level
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        // isahc and curl are chatty at debug level.
        !["isahc", "curl", "polling", "async_io"]
            .iter()
            .any(|t| metadata.target().starts_with(t))
            && LogLevel::from(metadata.level()) <= self.log_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        fn write(writer: &mut impl Write, record: &Record) -> Option<()> {
            write!(
                writer,
                "[{}]: {}: {}",
                record.level(),
                record.metadata().target(),
                record.args()
            )
            .ok()?;
            writer.write_all(b"\n").ok()?;
            writer.flush().ok()?;
            Some(())
        }

        _ = write(&mut std::io::stderr().lock(), record);
    }

    fn flush(&self) {
        _ = std::io::stderr().flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_verbosity() {
        assert_eq!(LogLevel::default(), WARN);
        assert_eq!(WARN.more_verbose(1), INFO);
        assert_eq!(INFO.more_verbose(1), DEBUG);
        assert_eq!(INFO.more_verbose(200), TRACE);
        assert_eq!(OFF.more_verbose(0), OFF);
        assert!(ERROR < WARN);
        assert_eq!(LevelFilter::from(WARN), LevelFilter::Warn);
        assert_eq!(LogLevel::from(Level::Debug), DEBUG);
    }

    #[test]
    fn test_log_level_deserialize() {
        #[derive(Deserialize)]
        struct Wrapper {
            level: LogLevel,
        }
        let w: Wrapper = toml::from_str(r#"level = "TRACE""#).unwrap();
        assert_eq!(w.level, TRACE);
        assert!(toml::from_str::<Wrapper>(r#"level = "LOUD""#).is_err());
    }

    #[test]
    fn test_stderr_logger_filter() {
        let logger = StderrLogger::new(INFO);
        assert_eq!(logger.log_level(), INFO);
        let metadata = |level, target| {
            log::MetadataBuilder::new()
                .level(level)
                .target(target)
                .build()
        };
        assert!(logger.enabled(&metadata(Level::Info, "generate_emoji::record")));
        assert!(logger.enabled(&metadata(Level::Error, "generate_emoji::table")));
        assert!(!logger.enabled(&metadata(Level::Debug, "generate_emoji::fetch")));
        assert!(!logger.enabled(&metadata(Level::Info, "isahc::agent")));
    }
}
