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

use std::thread;

use rotalog::LevelFilter;
use rotalog::SinkBuilder;

fn main() {
    rotalog::init_with(
        SinkBuilder::new("./logs/advanced.log")
            .level(LevelFilter::Debug)
            .max_file_size(4 * 1024),
    )
    .expect("failed to initialize the logger");

    // Route log crate macros from this binary and its libraries to the sink.
    rotalog::bridge::setup_log_crate();
    log::info!("records from the log crate land in the same file");

    // A small file size limit makes the rotation visible: after this loop,
    // ./logs/advanced.log.bak holds the previous generation.
    let handles = (0..4)
        .map(|worker| {
            thread::spawn(move || {
                for i in 0..100 {
                    rotalog::debug!("worker {worker} unit of work {i}");
                }
            })
        })
        .collect::<Vec<_>>();
    for handle in handles {
        handle.join().expect("worker panicked");
    }

    rotalog::set_console_output(false);
    rotalog::info!("this record reaches the file only");

    rotalog::set_level(LevelFilter::Warn);
    rotalog::info!("filtered out after the level change");
    rotalog::warn!("still visible at warn");

    rotalog::shutdown();
}
