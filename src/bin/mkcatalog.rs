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

//! Catalog generator.
//!
//! One-off utility run on a workstation, not on the appliance: scans a
//! directory tree (one subdirectory per playlist, MP3 files as tracks),
//! extracts tags, and writes the `tracks.json` catalog the player loads at
//! startup.
//!
//! Usage: `mkcatalog <music-dir> [output-file]`

use std::{env, path::PathBuf, time::Instant};

use anyhow::{Result, bail};

use backtrack::catalog::scan;

fn main() -> Result<()> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let Some(root) = args.next().map(PathBuf::from) else {
        bail!("usage: mkcatalog <music-dir> [output-file]");
    };
    let output = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("tracks.json"));

    println!("Generating catalog from {}", root.display());
    let started = Instant::now();

    let playlists = scan::scan_library(&root)?;

    println!("Playlists found: {}", playlists.len());
    for playlist in &playlists {
        println!("{}: {} tracks", playlist.name, playlist.track_count());
    }

    scan::write_catalog(&output, &playlists)?;

    println!(
        "Catalog written to {} in {:.2?}",
        output.display(),
        started.elapsed()
    );
    Ok(())
}
