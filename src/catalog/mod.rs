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

//! The playlist/track catalog.
//!
//! The catalog is an ordered sequence of playlists, loaded once from a JSON
//! file at startup and read-only from then on. Track order inside a playlist
//! is by the `number` field, not array position; [`Playlist::sorted_tracks`]
//! is applied every time track information is displayed.

pub mod scan;

use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse catalog file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("catalog contains no playlists")]
    NoPlaylists,
    #[error("playlist '{name}' contains no tracks")]
    EmptyPlaylist { name: String },
}

/// A single backing track. Field defaults match what the device displays
/// when a tag was missing at catalog-generation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    #[serde(default = "default_artist")]
    pub artist: String,
    #[serde(default = "default_title")]
    pub title: String,
    /// Zero-padded track number; also the sort key within a playlist.
    #[serde(default = "default_number")]
    pub number: String,
    pub file: PathBuf,
    /// Track length in seconds.
    #[serde(default)]
    pub length: u64,
}

fn default_artist() -> String {
    "No artist".to_string()
}

fn default_title() -> String {
    "No title".to_string()
}

fn default_number() -> String {
    "000".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub tracks: Vec<Track>,
}

fn default_name() -> String {
    "No name".to_string()
}

impl Playlist {
    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    /// Tracks ordered by `number` ascending. Array order in the catalog file
    /// is not authoritative.
    pub fn sorted_tracks(&self) -> Vec<&Track> {
        let mut tracks: Vec<&Track> = self.tracks.iter().collect();
        tracks.sort_by(|a, b| a.number.cmp(&b.number));
        tracks
    }
}

/// The full set of playlists available to the device. Immutable after load.
#[derive(Debug, Clone)]
pub struct Catalog {
    playlists: Vec<Playlist>,
}

impl Catalog {
    /// Loads and validates a catalog file.
    ///
    /// # Errors
    ///
    /// Fails on unreadable or unparsable files, and on catalogs that would
    /// break the navigation invariants downstream: no playlists at all, or a
    /// playlist with no tracks.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let file = File::open(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let playlists: Vec<Playlist> =
            serde_json::from_reader(BufReader::new(file)).map_err(|source| {
                CatalogError::Parse {
                    path: path.to_path_buf(),
                    source,
                }
            })?;

        Self::from_playlists(playlists)
    }

    /// Builds a validated catalog from already-parsed playlists.
    pub fn from_playlists(playlists: Vec<Playlist>) -> Result<Self, CatalogError> {
        if playlists.is_empty() {
            return Err(CatalogError::NoPlaylists);
        }
        for playlist in &playlists {
            if playlist.tracks.is_empty() {
                return Err(CatalogError::EmptyPlaylist {
                    name: playlist.name.clone(),
                });
            }
        }
        Ok(Self { playlists })
    }

    pub fn playlist_count(&self) -> usize {
        self.playlists.len()
    }

    /// The playlist at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range; the player's index invariants
    /// guarantee it never is.
    pub fn playlist(&self, index: usize) -> &Playlist {
        &self.playlists[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    fn track(number: &str, title: &str) -> Track {
        Track {
            artist: "Artist".to_string(),
            title: title.to_string(),
            number: number.to_string(),
            file: PathBuf::from(format!("/music/{}.mp3", number)),
            length: 180,
        }
    }

    #[test]
    fn load_parses_catalog_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"name": "Set 1", "tracks": [
                {{"artist": "A", "title": "T", "number": "001", "file": "/m/001.mp3"}}
            ]}}]"#
        )
        .unwrap();

        let catalog = Catalog::load(file.path()).unwrap();
        assert_eq!(catalog.playlist_count(), 1);

        let playlist = catalog.playlist(0);
        assert_eq!(playlist.name, "Set 1");
        assert_eq!(playlist.track_count(), 1);
        // Length was absent from the file and defaults to zero.
        assert_eq!(playlist.tracks[0].length, 0);
    }

    #[test]
    fn load_fails_on_missing_file() {
        let err = Catalog::load(Path::new("/nonexistent/tracks.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[test]
    fn empty_catalog_is_rejected() {
        let err = Catalog::from_playlists(vec![]).unwrap_err();
        assert!(matches!(err, CatalogError::NoPlaylists));
    }

    #[test]
    fn empty_playlist_is_rejected() {
        let err = Catalog::from_playlists(vec![Playlist {
            name: "Empty".to_string(),
            tracks: vec![],
        }])
        .unwrap_err();
        assert!(matches!(err, CatalogError::EmptyPlaylist { name } if name == "Empty"));
    }

    #[test]
    fn sorted_tracks_orders_by_number_not_position() {
        let playlist = Playlist {
            name: "Set".to_string(),
            tracks: vec![track("003", "c"), track("001", "a"), track("002", "b")],
        };

        let numbers: Vec<&str> = playlist
            .sorted_tracks()
            .iter()
            .map(|t| t.number.as_str())
            .collect();
        assert_eq!(numbers, vec!["001", "002", "003"]);
    }
}
