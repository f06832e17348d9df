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

//! The audio transport and its controlling façade.
//!
//! [`Transport`] is the capability the playback backend has to supply:
//! rebind media, set gain, start, halt, report the playhead. The
//! [`TransportController`] sits between the state machine and the backend
//! and owns the playback-adjacent policy: skip reloading an already-loaded
//! track, apply the reference volume on every play, drive the elapsed-time
//! display from a repeating timer, and catch backend faults so the control
//! loop keeps accepting commands.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
    time::Duration,
};

use thiserror::Error;

use crate::{
    catalog::Track,
    display::{self, SharedDisplay},
    timer::RepeatingTimer,
    util::format,
};

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("failed to load media {path}: {reason}")]
    Load { path: PathBuf, reason: String },
    #[error("playback backend error: {0}")]
    Backend(String),
}

/// Playback backend capability. Implementations must be callable from both
/// the consumer thread and the playtime timer thread.
pub trait Transport: Send + Sync {
    /// Rebinds the transport to new media. The playhead resets to zero.
    fn load(&self, path: &Path) -> Result<(), TransportError>;

    /// Sets the output gain as a percentage.
    fn set_volume(&self, percent: u32) -> Result<(), TransportError>;

    /// Starts playback of the loaded media.
    fn play(&self) -> Result<(), TransportError>;

    /// Halts playback and resets the playhead.
    fn stop(&self) -> Result<(), TransportError>;

    /// Current playhead position. Reports zero when nothing sensible is
    /// known; the playtime display tolerates that.
    fn elapsed_millis(&self) -> u64;
}

/// Output gain applied on every play, regardless of stored settings.
pub const REFERENCE_VOLUME: u32 = 100;

/// Cadence of the elapsed-time display refresh.
const PLAYTIME_REFRESH: Duration = Duration::from_secs(1);

/// Display line used for load progress and the playtime readout.
const PLAYTIME_LINE: usize = 3;

/// Façade over the playback backend.
pub struct TransportController {
    transport: Arc<dyn Transport>,
    display: SharedDisplay,
    playtime_timer: Option<RepeatingTimer>,
    loaded: Option<PathBuf>,
}

impl TransportController {
    pub fn new(transport: Arc<dyn Transport>, display: SharedDisplay) -> Self {
        Self {
            transport,
            display,
            playtime_timer: None,
            loaded: None,
        }
    }

    /// Loads (if needed) and starts the given track, and begins refreshing
    /// the playtime line.
    ///
    /// Backend faults are caught here: they are logged and shown on the
    /// display with the track number, and the control loop carries on.
    pub fn play(&mut self, track: &Track) {
        self.start_playtime_timer(track.length);

        if let Err(e) = self.try_play(track) {
            log::error!("playback of track {} failed: {}", track.number, e);
            display::show_error(
                &self.display,
                &[
                    String::new(),
                    String::new(),
                    "Error in playing".to_string(),
                    track.number.clone(),
                ],
            );
        }
    }

    fn try_play(&mut self, track: &Track) -> Result<(), TransportError> {
        if self.loaded.as_deref() != Some(track.file.as_path()) {
            display::write_line(&self.display, "Loading the MP3...", PLAYTIME_LINE);
            self.transport.load(&track.file)?;
            self.loaded = Some(track.file.clone());
            display::write_line(&self.display, "", PLAYTIME_LINE);
        }

        self.transport.set_volume(REFERENCE_VOLUME)?;
        self.transport.play()
    }

    /// Halts playback and cancels the playtime refresh.
    pub fn stop(&mut self) {
        if let Some(timer) = self.playtime_timer.take() {
            timer.cancel();
        }
        if let Err(e) = self.transport.stop() {
            log::error!("failed to stop transport: {}", e);
        }
    }

    fn start_playtime_timer(&mut self, track_length_seconds: u64) {
        if let Some(timer) = self.playtime_timer.take() {
            timer.cancel();
        }

        // The refresh task reads the playhead and writes one display line.
        // It never touches player state, so the consumer thread stays the
        // sole writer.
        let transport = self.transport.clone();
        let display = self.display.clone();
        self.playtime_timer = Some(RepeatingTimer::schedule(PLAYTIME_REFRESH, move || {
            let line = format::playtime_line(transport.elapsed_millis(), track_length_seconds);
            display::write_line(&display, &line, PLAYTIME_LINE);
        }));
    }
}
