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

//! Catalog generation from a directory tree of backing tracks.
//!
//! Layout convention: each first-level subdirectory of the scan root is one
//! playlist, and the MP3 files inside it are its tracks. The track number is
//! taken from the first three characters of the file name, e.g.
//! `001 - Opener.mp3`.
//!
//! It utilizes `WalkDir` for directory traversal and `Lofty` for metadata
//! extraction. This is the one-off utility behind the `mkcatalog` binary;
//! the appliance itself only ever reads the generated file.

use std::{fs::File, io::BufWriter, path::Path};

use anyhow::{Context, Result};
use lofty::prelude::*;
use lofty::probe::Probe;
use walkdir::WalkDir;

use crate::catalog::{Playlist, Track};

/// Scans `root` and builds one playlist per subdirectory, ordered by
/// directory name.
///
/// Files that cannot be probed are skipped with a warning rather than
/// failing the whole scan.
pub fn scan_library(root: &Path) -> Result<Vec<Playlist>> {
    let mut playlists = Vec::new();

    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_dir())
    {
        playlists.push(scan_playlist(entry.path())?);
    }

    Ok(playlists)
}

fn scan_playlist(dir: &Path) -> Result<Playlist> {
    let name = dir
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "No name".to_string());

    let mut tracks = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().map_or(false, |ext| ext == "mp3"))
    {
        let path = entry.path();
        let file_name = entry.file_name().to_string_lossy().to_string();

        let tagged_file = match Probe::open(path).and_then(|p| p.read()) {
            Ok(file) => file,
            Err(e) => {
                log::warn!("skipping {}: {}", path.display(), e);
                continue;
            }
        };

        let tag = tagged_file.primary_tag().or_else(|| tagged_file.first_tag());

        let artist = tag
            .and_then(|t| t.artist())
            .map(|a| a.to_string())
            .unwrap_or_else(|| "No artist".to_string());
        let title = tag
            .and_then(|t| t.title())
            .map(|t| t.to_string())
            .unwrap_or_else(|| file_name.clone());

        // First three characters of the file name are the track number.
        let number: String = file_name.chars().take(3).collect();

        tracks.push(Track {
            artist,
            title,
            number,
            file: path.to_path_buf(),
            length: tagged_file.properties().duration().as_secs(),
        });
    }

    Ok(Playlist { name, tracks })
}

/// Writes the scanned playlists as the catalog JSON file the appliance
/// loads at startup.
pub fn write_catalog(path: &Path, playlists: &[Playlist]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create catalog file {}", path.display()))?;
    serde_json::to_writer(BufWriter::new(file), playlists)
        .with_context(|| format!("failed to write catalog file {}", path.display()))?;
    Ok(())
}
