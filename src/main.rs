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

//! The appliance binary.
//!
//! Wires the pieces together in the order the device boots: display first
//! (so every later failure has somewhere to be reported), then settings and
//! catalog, then the transport, then the input producer, and finally the
//! consumer loop on this thread. The process normally runs until externally
//! terminated; on a development box the keyboard source can also end it.

use std::{
    io,
    sync::{Arc, Mutex, mpsc::Sender},
};

use anyhow::{Context, Result};
use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};

use backtrack::{
    catalog::Catalog,
    command::Command,
    config::{self, AppConfig},
    display::{self, SharedDisplay, console::ConsoleDisplay},
    input::keyboard,
    player::{Player, transport::Transport},
    settings::{self, Settings},
};

fn main() -> Result<()> {
    env_logger::init();

    let config = config::load_config();
    let display: SharedDisplay = Arc::new(Mutex::new(ConsoleDisplay::new()));

    setup_terminal().context("Failed to prepare terminal")?;
    let res = run(&config, &display);
    restore_terminal();

    res
}

/// Puts the terminal into the state the console display needs: raw mode for
/// unbuffered keys, the alternate screen so the 4x20 frame owns the window.
fn setup_terminal() -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    execute!(io::stdout(), EnterAlternateScreen, Hide)
        .context("Failed to enter alternate screen")?;
    Ok(())
}

/// Best-effort restore, also called on the error paths.
fn restore_terminal() {
    execute!(io::stdout(), LeaveAlternateScreen, Show).ok();
    disable_raw_mode().ok();
}

fn run(config: &AppConfig, display: &SharedDisplay) -> Result<()> {
    display::show(
        display,
        &[
            format!("Backtrack {}", env!("CARGO_PKG_VERSION")),
            "Initializing".to_string(),
            String::new(),
            String::new(),
        ],
    );

    display::write_line(display, "Reading settings...", 2);
    let settings = load_settings(config, display);

    display::write_line(display, "Reading tracks...", 3);
    let catalog = match Catalog::load(&config.catalog_file) {
        Ok(catalog) => catalog,
        Err(e) => {
            // Nothing to play without a catalog; show the failure and give
            // up rather than limping into out-of-range indices.
            display::show_error(
                display,
                &[
                    "tracks JSON file".to_string(),
                    "loading failed".to_string(),
                    String::new(),
                    String::new(),
                ],
            );
            return Err(e).context("A valid catalog is required");
        }
    };

    let transport = build_transport()?;
    let (command_tx, command_rx) = std::sync::mpsc::channel();

    let mut player = Player::new(catalog, &settings, display.clone(), transport);

    spawn_producers(command_tx, &player);

    // Consumer loop; returns once every producer has dropped its sender.
    player.run(command_rx);

    if config.persist_position {
        settings::save(&config.settings_file, &player.settings_snapshot(&settings))
            .context("Failed to persist playback position")?;
        log::info!("persisted playback position");
    }

    Ok(())
}

/// Settings are best-effort: a missing or broken file is reported once and
/// replaced by the documented defaults.
fn load_settings(config: &AppConfig, display: &SharedDisplay) -> Settings {
    match settings::load(&config.settings_file) {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("falling back to default settings: {}", e);
            display::show_error(
                display,
                &[
                    "settings JSON file".to_string(),
                    "loading failed".to_string(),
                    String::new(),
                    String::new(),
                ],
            );
            Settings::default()
        }
    }
}

/// Starts the input producer threads.
///
/// On the device this is where the GPIO implementation of
/// [`backtrack::input::InputLine`] would be attached through
/// [`backtrack::input::Debouncer::attach`]; the development build uses the
/// keyboard stand-in, which needs no debouncing.
fn spawn_producers(command_tx: Sender<Command>, player: &Player) {
    keyboard::spawn(command_tx, player.playing_flag());
}

#[cfg(feature = "mpv-backend")]
fn build_transport() -> Result<Arc<dyn Transport>> {
    use backtrack::player::mpv::MpvTransport;
    Ok(Arc::new(
        MpvTransport::new().context("Failed to initialise MPV")?,
    ))
}

#[cfg(not(feature = "mpv-backend"))]
fn build_transport() -> Result<Arc<dyn Transport>> {
    use backtrack::player::silent::SilentTransport;
    log::info!("mpv-backend feature disabled, using the silent transport");
    Ok(Arc::new(SilentTransport::new()))
}
