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

use std::fmt::Arguments;
use std::fs;
use std::fs::File;
use std::fs::OpenOptions;
use std::io;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;
use std::time::Duration;
use std::time::Instant;

use anyhow::Context;
use jiff::Zoned;
use log::Level;
use log::LevelFilter;

use crate::layout;
use crate::sink::SinkBuilder;
use crate::sink::clock::Clock;
use crate::trap::Trap;

/// Default rotation threshold in bytes.
pub const DEFAULT_MAX_FILE_SIZE: usize = 32 * 1024;

/// Default number of pending records that forces a flush.
pub const DEFAULT_BUFFER_CAPACITY: usize = 100;

/// Default elapsed time since the last flush that forces a flush.
pub const DEFAULT_FLUSH_INTERVAL: Duration = Duration::from_millis(1000);

/// A buffered, self-rotating file sink.
///
/// All state lives behind one mutex; every operation holds it for its full
/// duration. Log calls from different threads are totally ordered with respect
/// to buffer insertion and flush/rotation decisions.
///
/// A record is only ever dropped because its level is below the configured
/// threshold or because a file handle could not be written; never because of
/// buffer pressure.
#[derive(Debug)]
pub struct Sink {
    state: Mutex<SinkState>,
}

impl Sink {
    /// Creates a new [`SinkBuilder`].
    ///
    /// # Examples
    ///
    /// ```
    /// use rotalog::Sink;
    ///
    /// let builder = Sink::builder("my_service.log");
    /// ```
    #[must_use]
    pub fn builder(path: impl Into<PathBuf>) -> SinkBuilder {
        SinkBuilder::new(path)
    }

    pub(crate) fn new(state: SinkState) -> Self {
        Self {
            state: Mutex::new(state),
        }
    }

    fn state(&self) -> MutexGuard<'_, SinkState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Logs a message at the given level.
    ///
    /// The message is truncated to [`layout::MAX_MESSAGE_LEN`] bytes, echoed to
    /// stdout if console output is enabled, and buffered for the file. This
    /// call never fails; I/O problems are reported through the configured
    /// [`Trap`].
    pub fn log(&self, level: Level, args: Arguments) {
        let mut state = self.state();
        if level > state.level {
            return;
        }
        let message = layout::truncate_message(args.to_string());
        state.append(level, &message);
    }

    /// Logs a message at the error level.
    pub fn error(&self, args: Arguments) {
        self.log(Level::Error, args);
    }

    /// Logs a message at the warning level.
    pub fn warning(&self, args: Arguments) {
        self.log(Level::Warn, args);
    }

    /// Logs a message at the info level.
    pub fn info(&self, args: Arguments) {
        self.log(Level::Info, args);
    }

    /// Logs a message at the debug level.
    pub fn debug(&self, args: Arguments) {
        self.log(Level::Debug, args);
    }

    /// Whether a record at `level` would pass the filter.
    ///
    /// The ordering is inclusive: with the filter set to `Warn`, `Error` and
    /// `Warn` records pass and `Info` and below do not.
    pub fn enabled(&self, level: Level) -> bool {
        level <= self.state().level
    }

    /// Returns the current minimum severity filter.
    pub fn level(&self) -> LevelFilter {
        self.state().level
    }

    /// Changes the minimum severity filter, effective from the next log call.
    ///
    /// Already-buffered records are not re-filtered.
    pub fn set_level(&self, level: LevelFilter) {
        self.state().level = level;
    }

    /// Enables or disables the console echo, effective from the next log call.
    pub fn set_console_output(&self, enable: bool) {
        self.state().console = enable;
    }

    /// Writes all pending records to the file and clears the buffer.
    ///
    /// This is the synchronous durability point: once it returns, every
    /// accepted record has been handed to the file handle. Calling it with an
    /// empty buffer is a no-op apart from resetting the flush timer.
    pub fn flush(&self) {
        self.state().flush_buffer();
    }

    /// Flushes, writes a shutdown marker record, and drops the file handle.
    ///
    /// Call this before process exit; statics are not dropped, so the sink
    /// cannot do it on its own. Logging after `close` reopens the file.
    pub fn close(&self) {
        let mut state = self.state();
        state.write_marker("Logger shutdown");
        state.file = None;
    }
}

/// Everything the sink mutates, guarded by the one mutex in [`Sink`].
#[derive(Debug)]
pub(crate) struct SinkState {
    pub(crate) level: LevelFilter,
    pub(crate) path: PathBuf,
    pub(crate) max_file_size: usize,
    pub(crate) console: bool,
    pub(crate) file: Option<File>,
    /// Running estimate of the on-disk size, bumped per buffered record.
    /// Advisory only: a stale value skews a rotation decision by the length of
    /// the unflushed records, nothing more.
    pub(crate) current_size: usize,
    pub(crate) pending: Vec<String>,
    pub(crate) last_flush: Instant,
    pub(crate) buffer_capacity: usize,
    pub(crate) flush_interval: Duration,
    pub(crate) clock: Clock,
    pub(crate) trap: Box<dyn Trap>,
}

impl SinkState {
    fn append(&mut self, level: Level, message: &str) {
        let now = Zoned::now();

        // The echo is immediate and unbuffered, but still inside the critical
        // section so console and file ordering match.
        if self.console {
            let line = layout::format_console_record(&now, level, message);
            let _ = io::stdout().write_all(line.as_bytes());
        }

        let record = layout::format_record(&now, level, message);
        self.push_record(record);

        if self.pending.len() >= self.buffer_capacity
            || self.clock.now().duration_since(self.last_flush) >= self.flush_interval
        {
            self.flush_buffer();
        }
    }

    /// Appends one rendered record, rotating first if it would push the file
    /// past the size limit.
    fn push_record(&mut self, record: String) {
        if self.current_size + record.len() > self.max_file_size {
            self.rotate();
        }
        self.current_size += record.len();
        self.pending.push(record);
    }

    pub(crate) fn flush_buffer(&mut self) {
        self.last_flush = self.clock.now();
        if self.pending.is_empty() {
            return;
        }
        let records = std::mem::take(&mut self.pending);

        if self.file.is_none() {
            match open_append(&self.path) {
                Ok(file) => self.file = Some(file),
                Err(err) => {
                    // The records are lost. Logging must never block or crash
                    // the host application, so this is reported and swallowed.
                    self.trap.trap(&err);
                    return;
                }
            }
        }
        let Some(file) = self.file.as_mut() else {
            return;
        };

        let mut result = io::Result::Ok(());
        for record in &records {
            result = file.write_all(record.as_bytes());
            if result.is_err() {
                break;
            }
        }
        if result.is_ok() {
            result = file.flush();
        }
        if let Err(err) = result {
            self.file = None;
            let err = anyhow::Error::new(err).context("failed to write log records");
            self.trap.trap(&err);
        }
    }

    /// Flush-then-rename-then-reopen, atomic with respect to other log calls
    /// because the caller already holds the lock.
    ///
    /// Only one backup generation is kept; a second rotation overwrites the
    /// first backup. Failures are trapped and logging continues against
    /// whatever handle can be opened next.
    fn rotate(&mut self) {
        self.flush_buffer();
        // Drop the handle before the rename so every platform allows it. The
        // fresh file is opened lazily by the next flush.
        self.file = None;

        let backup = backup_path(&self.path);
        if backup.exists() {
            if let Err(err) = fs::remove_file(&backup) {
                let err = anyhow::Error::new(err).context("failed to remove backup log file");
                self.trap.trap(&err);
            }
        }
        if let Err(err) = fs::rename(&self.path, &backup) {
            let err = anyhow::Error::new(err).context("failed to rename log file");
            self.trap.trap(&err);
        }
        self.current_size = 0;
    }

    /// Writes a lifecycle marker record at info level, bypassing the filter,
    /// and flushes it durably.
    pub(crate) fn write_marker(&mut self, message: &str) {
        let record = layout::format_record(&Zoned::now(), Level::Info, message);
        self.push_record(record);
        self.flush_buffer();
    }
}

pub(crate) fn open_append(path: &Path) -> anyhow::Result<File> {
    OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .with_context(|| format!("failed to open log file: {}", path.display()))
}

pub(crate) fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".bak");
    PathBuf::from(name)
}
