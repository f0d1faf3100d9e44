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

#[cfg(test)]
use std::time::Duration;
use std::time::Instant;

/// Monotonic clock driving the time-based flush policy.
#[derive(Debug)]
pub(crate) enum Clock {
    DefaultClock,
    #[cfg(test)]
    ManualClock(ManualClock),
}

impl Clock {
    pub(crate) fn now(&self) -> Instant {
        match self {
            Clock::DefaultClock => Instant::now(),
            #[cfg(test)]
            Clock::ManualClock(clock) => clock.now(),
        }
    }

    #[cfg(test)]
    pub(crate) fn advance(&mut self, delta: Duration) {
        if let Clock::ManualClock(clock) = self {
            clock.advance(delta);
        }
    }
}

/// The time only moves when a test says so.
#[derive(Debug)]
#[cfg(test)]
pub(crate) struct ManualClock {
    now: Instant,
}

#[cfg(test)]
impl ManualClock {
    pub(crate) fn new() -> ManualClock {
        ManualClock {
            now: Instant::now(),
        }
    }

    fn now(&self) -> Instant {
        self.now
    }

    pub(crate) fn advance(&mut self, delta: Duration) {
        self.now += delta;
    }
}
