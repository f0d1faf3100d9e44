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

//! The process-wide sink and its free-function surface.
//!
//! The global sink is created lazily by the first successful [`init`] call;
//! every logging function here is a silent no-op until then. Initialization is
//! first-call-wins: calling [`init`] again, with any parameters, returns
//! success without touching the active configuration.

use std::fmt::Arguments;
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::OnceLock;
use std::sync::PoisonError;

use log::Level;
use log::LevelFilter;

use crate::sink::Sink;
use crate::sink::SinkBuilder;

static SINK: OnceLock<Sink> = OnceLock::new();

// Serializes racing init calls so only one of them builds a sink and writes
// the initialization marker.
static SETUP: Mutex<()> = Mutex::new(());

/// Initializes the process-wide sink with default configuration.
///
/// Equivalent to `init_with(SinkBuilder::new(path))`. Parent directories are
/// created if absent, and an initialization marker record is durably written
/// before this returns.
///
/// # Errors
///
/// Returns an error if the log directory or file cannot be opened. The sink
/// stays uninitialized and all logging calls remain no-ops.
pub fn init(path: impl Into<PathBuf>) -> anyhow::Result<()> {
    init_with(SinkBuilder::new(path))
}

/// Initializes the process-wide sink from a configured [`SinkBuilder`].
///
/// First caller wins: if the sink is already initialized, this returns
/// `Ok(())` immediately and the builder is discarded.
pub fn init_with(builder: SinkBuilder) -> anyhow::Result<()> {
    let _guard = SETUP.lock().unwrap_or_else(PoisonError::into_inner);
    if SINK.get().is_some() {
        return Ok(());
    }
    let sink = builder.build()?;
    let _ = SINK.set(sink);
    Ok(())
}

/// Returns the process-wide sink, if [`init`] has succeeded.
pub fn default_sink() -> Option<&'static Sink> {
    SINK.get()
}

/// Logs a message to the process-wide sink at the given level.
pub fn log(level: Level, args: Arguments) {
    if let Some(sink) = SINK.get() {
        sink.log(level, args);
    }
}

/// Logs a message to the process-wide sink at the error level.
pub fn error(args: Arguments) {
    log(Level::Error, args);
}

/// Logs a message to the process-wide sink at the warning level.
pub fn warning(args: Arguments) {
    log(Level::Warn, args);
}

/// Logs a message to the process-wide sink at the info level.
pub fn info(args: Arguments) {
    log(Level::Info, args);
}

/// Logs a message to the process-wide sink at the debug level.
pub fn debug(args: Arguments) {
    log(Level::Debug, args);
}

/// Changes the minimum severity filter of the process-wide sink.
pub fn set_level(level: LevelFilter) {
    if let Some(sink) = SINK.get() {
        sink.set_level(level);
    }
}

/// Enables or disables the console echo of the process-wide sink.
pub fn set_console_output(enable: bool) {
    if let Some(sink) = SINK.get() {
        sink.set_console_output(enable);
    }
}

/// Flushes the process-wide sink's pending records to disk.
pub fn flush() {
    if let Some(sink) = SINK.get() {
        sink.flush();
    }
}

/// Flushes, writes a shutdown marker, and closes the log file handle.
///
/// Rust statics are never dropped, so call this once before process exit to
/// get the shutdown marker on disk. Logging afterwards reopens the file.
pub fn shutdown() {
    if let Some(sink) = SINK.get() {
        sink.close();
    }
}
