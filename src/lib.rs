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

//! Rotalog is a buffered, thread-safe, self-rotating file logging sink.
//!
//! # Overview
//!
//! One shared [`Sink`] owns the log file handle, buffers formatted records in
//! memory, flushes them when the buffer fills or a flush interval elapses, and
//! rotates the file to a single `.bak` backup once it would grow past a size
//! limit. Every operation is serialized behind one mutex, so records from
//! concurrent threads are never lost or interleaved mid-line.
//!
//! # Examples
//!
//! Simple setup with the process-wide sink:
//!
//! ```no_run
//! rotalog::init("./logs/app.log").unwrap();
//!
//! rotalog::info!("service started on port {}", 8080);
//! rotalog::flush();
//! ```
//!
//! Advanced setup with an explicit [`Sink`] and custom limits:
//!
//! ```no_run
//! use rotalog::LevelFilter;
//! use rotalog::SinkBuilder;
//!
//! let sink = SinkBuilder::new("./logs/app.log")
//!     .level(LevelFilter::Debug)
//!     .console(false)
//!     .max_file_size(64 * 1024)
//!     .build()
//!     .unwrap();
//!
//! sink.info(format_args!("explicit sinks work without the global state"));
//! sink.flush();
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod bridge;
pub mod layout;
pub mod sink;
pub mod trap;

pub use log::Level;
pub use log::LevelFilter;
pub use sink::Sink;
pub use sink::SinkBuilder;
pub use trap::DefaultTrap;
pub use trap::Trap;

mod global;
pub use global::*;

mod macros;
