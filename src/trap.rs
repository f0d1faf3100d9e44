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

//! Error reporting channel for failures the sink cannot surface to callers.
//!
//! Leveled log calls are fire-and-forget: rotation and flush failures must not
//! propagate to the caller, so they are handed to a [`Trap`] instead. The
//! default trap writes to stderr; tests install a collecting trap.

use std::fmt;
use std::io;
use std::io::Write;

/// A trait representing a handler for internal sink errors.
pub trait Trap: fmt::Debug + Send + Sync + 'static {
    /// Processes an error the sink could not report any other way.
    fn trap(&self, err: &anyhow::Error);
}

/// A default trap that sends errors to standard error if possible.
///
/// If standard error is not available, it does nothing.
#[derive(Debug, Default)]
#[non_exhaustive]
pub struct DefaultTrap {}

impl Trap for DefaultTrap {
    fn trap(&self, err: &anyhow::Error) {
        let _ = writeln!(io::stderr(), "{err:#}");
    }
}
