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

//! Playback settings: last position and volume.
//!
//! A small JSON file next to the catalog. Every field has a documented
//! fallback so a partial or missing file still yields a usable state.
//! Saving only happens when `persist_position` is enabled in the device
//! configuration.

use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Last playback position and channel volumes.
///
/// Per-field defaults: playlist 0, track 0, both volumes 0.8.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub playlist_number: usize,
    pub track_number: usize,
    pub volume_left: f32,
    pub volume_right: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            playlist_number: 0,
            track_number: 0,
            volume_left: 0.8,
            volume_right: 0.8,
        }
    }
}

pub fn load(path: &Path) -> Result<Settings, SettingsError> {
    let file = File::open(path).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_reader(BufReader::new(file)).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn save(path: &Path, settings: &Settings) -> Result<(), SettingsError> {
    let file = File::create(path).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::to_writer(BufWriter::new(file), settings).map_err(|source| {
        SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"playlist_number": 2}}"#).unwrap();

        let settings = load(file.path()).unwrap();
        assert_eq!(settings.playlist_number, 2);
        assert_eq!(settings.track_number, 0);
        assert_eq!(settings.volume_left, 0.8);
        assert_eq!(settings.volume_right, 0.8);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load(Path::new("/nonexistent/settings.json")).unwrap_err();
        assert!(matches!(err, SettingsError::Io { .. }));
    }

    #[test]
    fn save_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let settings = Settings {
            playlist_number: 1,
            track_number: 4,
            volume_left: 0.5,
            volume_right: 0.6,
        };

        save(&path, &settings).unwrap();
        assert_eq!(load(&path).unwrap(), settings);
    }
}
