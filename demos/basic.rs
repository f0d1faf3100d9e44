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

fn main() {
    rotalog::init("./logs/basic.log").expect("failed to initialize the logger");

    rotalog::error!("Hello error!");
    rotalog::warn!("Hello warn!");
    rotalog::info!("Hello info!");
    rotalog::debug!("Hello debug (filtered at the default info level)!");

    rotalog::info!("formatted values work too: {} + {} = {}", 1, 2, 1 + 2);

    rotalog::shutdown();
}
