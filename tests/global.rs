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

use rotalog::LevelFilter;
use rotalog::SinkBuilder;
use tempfile::TempDir;

// The process-wide sink is a singleton, so its whole lifecycle is exercised
// in one test function rather than racing #[test]s against the OnceLock.
#[test]
fn test_global_sink_lifecycle() {
    let temp_dir = TempDir::new().expect("failed to create a temporary directory");
    let path = temp_dir.path().join("global.log");

    // Logging before init is a silent no-op.
    rotalog::info!("dropped on the floor");
    rotalog::flush();
    assert!(rotalog::default_sink().is_none());

    rotalog::init_with(
        SinkBuilder::new(&path)
            .console(false)
            .level(LevelFilter::Info),
    )
    .unwrap();

    // The file exists and starts with the initialization marker.
    let first_line = fs::read_to_string(&path)
        .unwrap()
        .lines()
        .next()
        .unwrap()
        .to_string();
    assert!(first_line.contains("[INFO ] Logger initialized"));
    assert!(!first_line.contains("dropped on the floor"));

    // Re-initializing with different parameters succeeds without changing
    // the active configuration: the path stays, the level stays.
    let other_path = temp_dir.path().join("other.log");
    rotalog::init_with(
        SinkBuilder::new(&other_path)
            .console(false)
            .level(LevelFilter::Debug),
    )
    .unwrap();
    assert!(!other_path.exists());
    rotalog::debug!("still filtered at info");

    // The macro surface and the generic entry point both land in the file.
    rotalog::error!("macro error {}", 1);
    rotalog::warn!("macro warn");
    rotalog::info!("macro info");
    rotalog::log(rotalog::Level::Info, format_args!("generic call"));
    rotalog::flush();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("macro error 1"));
    assert!(content.contains("macro warn"));
    assert!(content.contains("macro info"));
    assert!(content.contains("generic call"));
    assert!(!content.contains("still filtered at info"));

    // Runtime reconfiguration through the global setters.
    rotalog::set_level(LevelFilter::Debug);
    rotalog::debug!("debug now audible");
    rotalog::flush();
    assert!(
        fs::read_to_string(&path)
            .unwrap()
            .contains("debug now audible")
    );

    // The log crate bridge routes records into the same sink.
    rotalog::bridge::setup_log_crate();
    log::info!("bridged record");
    log::trace!("bridged but filtered");
    rotalog::flush();
    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("bridged record"));
    assert!(!content.contains("bridged but filtered"));

    // Shutdown flushes and appends the marker as the final line.
    rotalog::shutdown();
    let content = fs::read_to_string(&path).unwrap();
    assert!(
        content
            .lines()
            .last()
            .unwrap()
            .contains("[INFO ] Logger shutdown")
    );
}
