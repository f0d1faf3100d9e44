// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Integration with the `log` crate.

use crate::default_sink;

struct GlobalSinkLogger(());

impl log::Log for GlobalSinkLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        let Some(sink) = default_sink() else {
            return false;
        };

        sink.enabled(metadata.level())
    }

    fn log(&self, record: &log::Record) {
        if let Some(sink) = default_sink() {
            sink.log(record.level(), *record.args());
        }
    }

    fn flush(&self) {
        if let Some(sink) = default_sink() {
            sink.flush();
        }
    }
}

/// Set up the log crate global logger.
///
/// This function calls [`log::set_logger`] so that all records produced
/// through the `log` crate macros are forwarded to the process-wide sink.
/// Records emitted before [`crate::init`] succeeds are ignored.
///
/// This function will set the global maximum log level to `Trace`; the sink's
/// own level filter decides what is kept. To override this, call
/// [`log::set_max_level`] after this function.
///
/// # Errors
///
/// Return an error if the log crate global logger has already been set.
///
/// # Examples
///
/// ```no_run
/// rotalog::bridge::setup_log_crate();
/// rotalog::init("./logs/app.log").unwrap();
///
/// log::info!("routed through the sink");
/// ```
pub fn try_setup_log_crate() -> Result<(), log::SetLoggerError> {
    static LOGGER: GlobalSinkLogger = GlobalSinkLogger(());
    log::set_logger(&LOGGER)?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}

/// Set up the log crate global logger.
///
/// Same as [`try_setup_log_crate`], but panics if the log crate global logger
/// has already been set.
///
/// # Panics
///
/// Panic if the log crate global logger has already been set.
pub fn setup_log_crate() {
    try_setup_log_crate().expect(
        "rotalog::bridge::setup_log_crate must be called before the log crate global logger initialized",
    );
}
