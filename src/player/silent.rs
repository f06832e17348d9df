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

//! Clock-only transport.
//!
//! Default backend when the `mpv-backend` feature is off: no audio comes
//! out, but the playhead advances on the wall clock so the whole control
//! loop — including the playtime display — behaves as on the device.

use std::{
    path::{Path, PathBuf},
    sync::Mutex,
    time::Instant,
};

use crate::player::transport::{Transport, TransportError};

#[derive(Default)]
struct SilentState {
    loaded: Option<PathBuf>,
    started: Option<Instant>,
    accumulated_millis: u64,
}

/// A transport that plays silence against a wall clock.
#[derive(Default)]
pub struct SilentTransport {
    state: Mutex<SilentState>,
}

impl SilentTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Transport for SilentTransport {
    fn load(&self, path: &Path) -> Result<(), TransportError> {
        let mut state = self.state.lock().unwrap();
        state.loaded = Some(path.to_path_buf());
        state.started = None;
        state.accumulated_millis = 0;
        log::debug!("silent transport loaded {}", path.display());
        Ok(())
    }

    fn set_volume(&self, percent: u32) -> Result<(), TransportError> {
        log::debug!("silent transport volume set to {}", percent);
        Ok(())
    }

    fn play(&self) -> Result<(), TransportError> {
        let mut state = self.state.lock().unwrap();
        if state.loaded.is_none() {
            return Err(TransportError::Backend("no media loaded".to_string()));
        }
        if state.started.is_none() {
            state.started = Some(Instant::now());
        }
        Ok(())
    }

    fn stop(&self) -> Result<(), TransportError> {
        let mut state = self.state.lock().unwrap();
        state.started = None;
        state.accumulated_millis = 0;
        Ok(())
    }

    fn elapsed_millis(&self) -> u64 {
        let state = self.state.lock().unwrap();
        let running = state
            .started
            .map(|started| started.elapsed().as_millis() as u64)
            .unwrap_or(0);
        state.accumulated_millis + running
    }
}
