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

use std::fs;
use std::io::Seek;
use std::io::SeekFrom;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use anyhow::ensure;
use log::LevelFilter;

use crate::sink::Sink;
use crate::sink::clock::Clock;
use crate::sink::sink::DEFAULT_BUFFER_CAPACITY;
use crate::sink::sink::DEFAULT_FLUSH_INTERVAL;
use crate::sink::sink::DEFAULT_MAX_FILE_SIZE;
use crate::sink::sink::SinkState;
use crate::sink::sink::open_append;
use crate::trap::DefaultTrap;
use crate::trap::Trap;

/// A builder for configuring a [`Sink`].
#[derive(Debug)]
pub struct SinkBuilder {
    // required
    path: PathBuf,

    level: LevelFilter,
    console: bool,
    max_file_size: usize,
    buffer_capacity: usize,
    flush_interval: Duration,
    trap: Box<dyn Trap>,
    clock: Clock,
}

impl SinkBuilder {
    /// Creates a new [`SinkBuilder`] for the given log file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            level: LevelFilter::Info,
            console: true,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
            flush_interval: DEFAULT_FLUSH_INTERVAL,
            trap: Box::new(DefaultTrap::default()),
            clock: Clock::DefaultClock,
        }
    }

    /// Sets the minimum severity that passes the filter.
    ///
    /// Defaults to [`LevelFilter::Info`].
    #[must_use]
    pub fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Enables or disables echoing records to stdout.
    ///
    /// Defaults to enabled.
    #[must_use]
    pub fn console(mut self, enable: bool) -> Self {
        self.console = enable;
        self
    }

    /// Sets the rotation threshold in bytes.
    ///
    /// Defaults to [`DEFAULT_MAX_FILE_SIZE`].
    #[must_use]
    pub fn max_file_size(mut self, n: usize) -> Self {
        self.max_file_size = n;
        self
    }

    /// Sets the number of pending records that forces a flush.
    ///
    /// Defaults to [`DEFAULT_BUFFER_CAPACITY`].
    ///
    /// [`DEFAULT_BUFFER_CAPACITY`]: crate::sink::DEFAULT_BUFFER_CAPACITY
    #[must_use]
    pub fn buffer_capacity(mut self, n: usize) -> Self {
        self.buffer_capacity = n;
        self
    }

    /// Sets the elapsed time since the last flush that forces a flush.
    ///
    /// Defaults to [`DEFAULT_FLUSH_INTERVAL`].
    ///
    /// [`DEFAULT_FLUSH_INTERVAL`]: crate::sink::DEFAULT_FLUSH_INTERVAL
    #[must_use]
    pub fn flush_interval(mut self, interval: Duration) -> Self {
        self.flush_interval = interval;
        self
    }

    /// Sets the handler for rotation and flush failures.
    ///
    /// Defaults to [`DefaultTrap`], which writes to stderr.
    #[must_use]
    pub fn trap(mut self, trap: impl Trap) -> Self {
        self.trap = Box::new(trap);
        self
    }

    #[cfg(test)]
    pub(crate) fn clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Builds the [`Sink`].
    ///
    /// Creates missing parent directories, opens the log file in append mode,
    /// reads its current size, and durably writes an initialization marker
    /// record before returning.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the log file
    /// cannot be opened. Nothing is written in that case.
    pub fn build(self) -> anyhow::Result<Sink> {
        let Self {
            path,
            level,
            console,
            max_file_size,
            buffer_capacity,
            flush_interval,
            trap,
            clock,
        } = self;

        ensure!(max_file_size > 0, "max_file_size must be positive");

        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir).context("failed to create log directory")?;
            }
        }

        let mut file = open_append(&path)?;
        let current_size = file
            .seek(SeekFrom::End(0))
            .context("failed to read log file size")? as usize;

        let last_flush = clock.now();
        let mut state = SinkState {
            level,
            path,
            max_file_size,
            console,
            file: Some(file),
            current_size,
            pending: Vec::new(),
            last_flush,
            buffer_capacity,
            flush_interval,
            clock,
            trap,
        };
        state.write_marker("Logger initialized");

        Ok(Sink::new(state))
    }
}
