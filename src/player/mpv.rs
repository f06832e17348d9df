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

//! MPV-backed audio transport.
//!
//! Leverages `libmpv` for audio decoding and output. Media is loaded
//! paused, so load and play stay separate operations the way the control
//! loop expects them.

use std::{path::Path, sync::Mutex};

use mpv::{MpvHandler, MpvHandlerBuilder};

use crate::player::transport::{Transport, TransportError};

/// Transport over a local `libmpv` context.
pub struct MpvTransport {
    handler: Mutex<MpvHandler>,
}

impl MpvTransport {
    pub fn new() -> Result<Self, TransportError> {
        let mut builder = MpvHandlerBuilder::new()
            .map_err(|e| TransportError::Backend(format!("failed to create MPV builder: {:?}", e)))?;
        builder
            .set_option("vo", "null")
            .map_err(|e| TransportError::Backend(format!("failed to set no video output: {:?}", e)))?;
        let handler = builder
            .build()
            .map_err(|e| TransportError::Backend(format!("failed to build MPV handler: {:?}", e)))?;

        Ok(Self {
            handler: Mutex::new(handler),
        })
    }
}

impl Transport for MpvTransport {
    fn load(&self, path: &Path) -> Result<(), TransportError> {
        let mut handler = self.handler.lock().unwrap();
        let filename = path.to_string_lossy();

        handler
            .command(&["loadfile", &filename, "replace"])
            .map_err(|e| TransportError::Load {
                path: path.to_path_buf(),
                reason: format!("{:?}", e),
            })?;

        // Hold the new media paused until play() is called.
        handler
            .set_property("pause", true)
            .map_err(|e| TransportError::Backend(format!("{:?}", e)))
    }

    fn set_volume(&self, percent: u32) -> Result<(), TransportError> {
        let mut handler = self.handler.lock().unwrap();
        handler
            .set_property("volume", percent as f64)
            .map_err(|e| TransportError::Backend(format!("{:?}", e)))
    }

    fn play(&self) -> Result<(), TransportError> {
        let mut handler = self.handler.lock().unwrap();
        handler
            .set_property("pause", false)
            .map_err(|e| TransportError::Backend(format!("{:?}", e)))
    }

    fn stop(&self) -> Result<(), TransportError> {
        let mut handler = self.handler.lock().unwrap();
        handler
            .command(&["stop"])
            .map_err(|e| TransportError::Backend(format!("{:?}", e)))
    }

    fn elapsed_millis(&self) -> u64 {
        let mut handler = self.handler.lock().unwrap();
        handler
            .get_property::<f64>("time-pos")
            .map(|seconds| (seconds * 1000.0) as u64)
            .unwrap_or(0)
    }
}
