// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Device configuration.
//!
//! This is configuration of the appliance itself (where the catalog and
//! settings files live, whether the playback position is written back on
//! exit), as opposed to [`crate::settings`] which is the per-session playback
//! state. Managed by `confy` in the platform config directory.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const CONFIG_NAME: &str = "backtrack";

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AppConfig {
    pub version: u32,
    /// Catalog file produced by `mkcatalog`.
    pub catalog_file: PathBuf,
    /// Playback position and volume, loaded at startup.
    pub settings_file: PathBuf,
    /// Write the current playlist/track position back to the settings file
    /// when the run loop exits. Off by default.
    pub persist_position: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            catalog_file: PathBuf::from("tracks.json"),
            settings_file: PathBuf::from("settings.json"),
            persist_position: false,
        }
    }
}

pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}
