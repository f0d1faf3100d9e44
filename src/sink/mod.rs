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

//! The buffered, self-rotating file sink.
//!
//! # Example
//!
//! ```no_run
//! use rotalog::LevelFilter;
//! use rotalog::sink::SinkBuilder;
//!
//! let sink = SinkBuilder::new("/path/to/file.log")
//!     .level(LevelFilter::Debug)
//!     .max_file_size(32 * 1024)
//!     .build()
//!     .unwrap();
//!
//! sink.info(format_args!("this record is buffered, then flushed to disk"));
//! sink.flush();
//! ```

pub use builder::SinkBuilder;
pub use sink::DEFAULT_BUFFER_CAPACITY;
pub use sink::DEFAULT_FLUSH_INTERVAL;
pub use sink::DEFAULT_MAX_FILE_SIZE;
pub use sink::Sink;

mod builder;
mod clock;
mod sink;
