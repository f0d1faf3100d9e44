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

//! Formats log records as plain text lines.
//!
//! Output format:
//!
//! ```text
//! [22:44:57.172] [ERROR] failed to reach upstream
//! [22:44:57.173] [WARN ] retrying in 2s
//! [22:44:57.175] [INFO ] request served
//! [22:44:57.176] [DEBUG] cache hit for key "user:42"
//! ```
//!
//! Level names are padded to five columns so the message column always lines
//! up. The timestamp is local time, millisecond precision, and stays the same
//! format for the whole lifetime of a build.

use jiff::Zoned;
use log::Level;

/// The maximum byte length of a message after formatting.
///
/// Longer messages are truncated at a character boundary before layout; a log
/// call never fails or overruns because its message is too long.
pub const MAX_MESSAGE_LEN: usize = 256;

const TIMESTAMP_FORMAT: &str = "%H:%M:%S.%3f";

/// Renders one complete record line, trailing newline included.
pub fn format_record(now: &Zoned, level: Level, message: &str) -> String {
    let time = now.strftime(TIMESTAMP_FORMAT);
    format!("[{time}] [{level:<5}] {message}\n")
}

/// Truncates a formatted message to [`MAX_MESSAGE_LEN`] bytes.
///
/// The cut point backs up to the nearest character boundary so multi-byte
/// characters are never split.
pub fn truncate_message(mut message: String) -> String {
    if message.len() > MAX_MESSAGE_LEN {
        let mut end = MAX_MESSAGE_LEN;
        while !message.is_char_boundary(end) {
            end -= 1;
        }
        message.truncate(end);
    }
    message
}

/// Renders a record line for the console echo.
///
/// Identical to [`format_record`] unless the `colored` feature is enabled, in
/// which case the level name is colorized. File output always goes through
/// [`format_record`] so no escape codes ever reach the log file.
#[cfg(feature = "colored")]
pub fn format_console_record(now: &Zoned, level: Level, message: &str) -> String {
    use colored::Color;
    use colored::ColoredString;
    use colored::Colorize;

    let color = match level {
        Level::Error => Color::Red,
        Level::Warn => Color::Yellow,
        Level::Info => Color::Green,
        Level::Debug => Color::Blue,
        Level::Trace => Color::Magenta,
    };

    let time = now.strftime(TIMESTAMP_FORMAT);
    let level = ColoredString::from(format!("{level:<5}")).color(color);
    format!("[{time}] [{level}] {message}\n")
}

#[cfg(not(feature = "colored"))]
pub fn format_console_record(now: &Zoned, level: Level, message: &str) -> String {
    format_record(now, level, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_names_are_fixed_width() {
        let now = Zoned::now();
        for level in [Level::Error, Level::Warn, Level::Info, Level::Debug] {
            let line = format_record(&now, level, "msg");
            let open = line.find("] [").unwrap() + 3;
            let close = line[open..].find(']').unwrap();
            assert_eq!(close, 5, "level tag in {line:?} is not five columns");
        }
    }

    #[test]
    fn test_record_shape() {
        let now = Zoned::now();
        let line = format_record(&now, Level::Info, "hello");
        assert!(line.starts_with('['));
        assert!(line.ends_with("] [INFO ] hello\n"));
        // HH:MM:SS.mmm is twelve characters between the first brackets.
        assert_eq!(line.find(']').unwrap(), 13);
    }

    #[test]
    fn test_truncate_long_message() {
        let long = "x".repeat(MAX_MESSAGE_LEN * 2);
        let truncated = truncate_message(long);
        assert_eq!(truncated.len(), MAX_MESSAGE_LEN);
    }

    #[test]
    fn test_truncate_respects_char_boundary() {
        // A message of three-byte characters whose boundaries do not line up
        // with MAX_MESSAGE_LEN.
        let long = "夏".repeat(MAX_MESSAGE_LEN);
        let truncated = truncate_message(long);
        assert!(truncated.len() <= MAX_MESSAGE_LEN);
        assert!(truncated.is_char_boundary(truncated.len()));
    }

    #[test]
    fn test_short_message_untouched() {
        let message = "short".to_string();
        assert_eq!(truncate_message(message.clone()), message);
    }
}
