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

//! The mode state machine: the sole consumer of the command queue.
//!
//! [`Player::run`] blocks on the queue and interprets each [`Command`]
//! against the current mode and playing flag:
//!
//! * `Idle` — rotary turns and the navigation footswitches step through the
//!   tracks of the current playlist; the rotary push switches to `Playlist`.
//! * `Playlist` — the same inputs step through playlists; the rotary push
//!   switches back to `Idle`.
//! * `Play` — entered by the play footswitch from any non-play mode. While
//!   playing, every command except the stop footswitch is silently dropped.
//! * `Settings` — declared for completeness; nothing transitions into it.
//!
//! The `Player` is exclusively owned by the consumer thread. The one piece
//! of its state other threads may observe is the `playing` flag, exposed as
//! an atomic that only this thread writes.

pub mod navigate;
#[cfg(feature = "mpv-backend")]
pub mod mpv;
pub mod silent;
pub mod transport;

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
    mpsc::Receiver,
};

use crate::{
    catalog::{Catalog, Track},
    command::Command,
    display::{self, SharedDisplay, layout},
    player::{
        navigate::Direction,
        transport::{Transport, TransportController},
    },
    settings::Settings,
};

/// Interpretation mode for incoming commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Track selection within the current playlist.
    Idle,
    /// Playlist selection.
    Playlist,
    /// Active playback; navigation disabled.
    Play,
    /// Reserved. No transition currently reaches this mode.
    Settings,
}

/// The playback appliance state machine.
pub struct Player {
    catalog: Catalog,
    display: SharedDisplay,
    controller: TransportController,
    playing: Arc<AtomicBool>,
    mode: Mode,
    playlist_index: usize,
    track_index: usize,
    last_track_index: usize,
    current_track: Option<Track>,
    track_playtime_millis: u64,
}

impl Player {
    /// Builds the player from the loaded catalog and settings and shows the
    /// initial track screen.
    ///
    /// Indices from a stale settings file are clamped into catalog range so
    /// the navigation invariants hold from the start.
    pub fn new(
        catalog: Catalog,
        settings: &Settings,
        display: SharedDisplay,
        transport: Arc<dyn Transport>,
    ) -> Self {
        let mut playlist_index = settings.playlist_number;
        if playlist_index >= catalog.playlist_count() {
            log::warn!(
                "settings playlist {} out of range, falling back to 0",
                playlist_index
            );
            playlist_index = 0;
        }

        let last_track_index = catalog.playlist(playlist_index).track_count() - 1;

        let mut track_index = settings.track_number;
        if track_index > last_track_index {
            log::warn!("settings track {} out of range, falling back to 0", track_index);
            track_index = 0;
        }

        let controller = TransportController::new(transport, display.clone());

        let mut player = Self {
            catalog,
            display,
            controller,
            playing: Arc::new(AtomicBool::new(false)),
            mode: Mode::Idle,
            playlist_index,
            track_index,
            last_track_index,
            current_track: None,
            track_playtime_millis: 0,
        };
        player.show_track_info();
        player
    }

    /// The shared playing flag. This thread is its only writer; the input
    /// debouncer reads it to suppress rotary commands and to pick between
    /// play and stop for the level-sensitive footswitch.
    pub fn playing_flag(&self) -> Arc<AtomicBool> {
        self.playing.clone()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn playlist_index(&self) -> usize {
        self.playlist_index
    }

    pub fn track_index(&self) -> usize {
        self.track_index
    }

    pub fn track_playtime_millis(&self) -> u64 {
        self.track_playtime_millis
    }

    /// Current position folded back into a settings value, for persistence
    /// on exit.
    pub fn settings_snapshot(&self, base: &Settings) -> Settings {
        Settings {
            playlist_number: self.playlist_index,
            track_number: self.track_index,
            ..base.clone()
        }
    }

    /// Consumes commands until every producer has dropped its sender.
    ///
    /// The blocking `recv()` here is the only blocking point in the system;
    /// commands are processed strictly one at a time in FIFO order.
    pub fn run(&mut self, commands: Receiver<Command>) {
        while let Ok(command) = commands.recv() {
            log::debug!("command: {:?}", command);
            self.handle_command(command);
        }
        log::info!("command queue closed, leaving run loop");
    }

    /// Applies a single command to the state machine.
    pub fn handle_command(&mut self, command: Command) {
        if !self.playing.load(Ordering::Relaxed) {
            match command {
                Command::RotaryNext | Command::FootswitchNext => self.select(Direction::Next),
                Command::RotaryPrev | Command::FootswitchPrev => self.select(Direction::Prev),
                Command::RotaryPush => self.toggle_playlist_mode(),
                Command::FootswitchPlay => self.start_playback(),
                // Stop without playback is a no-op.
                Command::FootswitchStop => {}
            }
        } else if command == Command::FootswitchStop {
            self.stop_playback();
        }
        // Everything else while playing is dropped on the floor.
    }

    fn select(&mut self, direction: Direction) {
        match self.mode {
            Mode::Idle => self.select_track(direction),
            Mode::Playlist => self.select_playlist(direction),
            Mode::Play | Mode::Settings => {}
        }
    }

    fn select_track(&mut self, direction: Direction) {
        self.track_index = navigate::step(self.track_index, self.last_track_index + 1, direction);
        self.show_track_info();
    }

    /// Selects the adjacent playlist, resetting the track position and
    /// recomputing the last track index for the new playlist.
    fn select_playlist(&mut self, direction: Direction) {
        self.playlist_index =
            navigate::step(self.playlist_index, self.catalog.playlist_count(), direction);
        self.track_index = 0;
        self.last_track_index = self.catalog.playlist(self.playlist_index).track_count() - 1;
        self.show_playlist_info();
    }

    fn toggle_playlist_mode(&mut self) {
        match self.mode {
            Mode::Idle => {
                self.mode = Mode::Playlist;
                self.show_playlist_info();
            }
            Mode::Playlist => {
                self.mode = Mode::Idle;
                self.show_track_info();
            }
            Mode::Play | Mode::Settings => {}
        }
    }

    fn start_playback(&mut self) {
        self.track_playtime_millis = 0;
        self.show_track_info();
        self.mode = Mode::Play;
        self.playing.store(true, Ordering::Relaxed);

        // show_track_info always leaves a current track behind.
        if let Some(track) = self.current_track.clone() {
            self.controller.play(&track);
        }
    }

    fn stop_playback(&mut self) {
        self.playing.store(false, Ordering::Relaxed);
        self.mode = Mode::Idle;
        self.controller.stop();
        self.show_track_info();
    }

    /// Renders the current track (in sorted order) and records it as the
    /// selection the play footswitch acts on.
    fn show_track_info(&mut self) {
        let playlist = self.catalog.playlist(self.playlist_index);
        let tracks = playlist.sorted_tracks();
        let track = tracks[self.track_index].clone();

        display::show(&self.display, &layout::track_screen(&track));
        self.current_track = Some(track);
    }

    fn show_playlist_info(&self) {
        let playlist = self.catalog.playlist(self.playlist_index);
        display::show(&self.display, &layout::playlist_screen(playlist));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::{
        path::{Path, PathBuf},
        sync::{Mutex, mpsc},
        thread,
    };

    use crate::{
        catalog::Playlist,
        display::Display,
        player::transport::TransportError,
    };

    /// Records transport calls for assertion.
    #[derive(Default)]
    struct FakeTransport {
        calls: Mutex<Vec<String>>,
    }

    impl FakeTransport {
        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl Transport for FakeTransport {
        fn load(&self, path: &Path) -> Result<(), TransportError> {
            self.calls.lock().unwrap().push(format!("load {}", path.display()));
            Ok(())
        }

        fn set_volume(&self, percent: u32) -> Result<(), TransportError> {
            self.calls.lock().unwrap().push(format!("volume {}", percent));
            Ok(())
        }

        fn play(&self) -> Result<(), TransportError> {
            self.calls.lock().unwrap().push("play".to_string());
            Ok(())
        }

        fn stop(&self) -> Result<(), TransportError> {
            self.calls.lock().unwrap().push("stop".to_string());
            Ok(())
        }

        fn elapsed_millis(&self) -> u64 {
            0
        }
    }

    /// Captures the last full screen written.
    #[derive(Default)]
    struct FakeDisplay {
        lines: [String; 4],
    }

    impl Display for FakeDisplay {
        fn clear(&mut self) {
            self.lines = Default::default();
        }

        fn write_line(&mut self, text: &str, line: usize) {
            if line < 4 {
                self.lines[line] = text.to_string();
            }
        }
    }

    fn track(number: &str) -> Track {
        Track {
            artist: "Artist".to_string(),
            title: "Title".to_string(),
            number: number.to_string(),
            file: PathBuf::from(format!("/music/{}.mp3", number)),
            length: 120,
        }
    }

    fn catalog() -> Catalog {
        Catalog::from_playlists(vec![
            Playlist {
                name: "Set 1".to_string(),
                tracks: vec![track("001"), track("002"), track("003")],
            },
            Playlist {
                name: "Set 2".to_string(),
                tracks: vec![track("101"), track("102")],
            },
        ])
        .unwrap()
    }

    struct Fixture {
        player: Player,
        transport: Arc<FakeTransport>,
        display: Arc<Mutex<FakeDisplay>>,
    }

    fn fixture() -> Fixture {
        fixture_with_settings(&Settings::default())
    }

    fn fixture_with_settings(settings: &Settings) -> Fixture {
        let transport = Arc::new(FakeTransport::default());
        let display = Arc::new(Mutex::new(FakeDisplay::default()));
        let shared: SharedDisplay = display.clone();
        let player = Player::new(catalog(), settings, shared, transport.clone());
        Fixture {
            player,
            transport,
            display,
        }
    }

    #[test]
    fn footswitch_next_steps_and_wraps_through_the_playlist() {
        let mut f = fixture();
        assert_eq!(f.player.track_index(), 0);

        f.player.handle_command(Command::FootswitchNext);
        assert_eq!(f.player.track_index(), 1);

        f.player.handle_command(Command::FootswitchNext);
        f.player.handle_command(Command::FootswitchNext);
        assert_eq!(f.player.track_index(), 0, "should wrap back to the start");
    }

    #[test]
    fn rotary_push_toggles_between_track_and_playlist_screens() {
        let mut f = fixture();

        f.player.handle_command(Command::RotaryPush);
        assert_eq!(f.player.mode(), Mode::Playlist);
        assert_eq!(f.display.lock().unwrap().lines[0], "Name: Set 1");

        f.player.handle_command(Command::RotaryPush);
        assert_eq!(f.player.mode(), Mode::Idle);
        assert_eq!(f.display.lock().unwrap().lines[0], "001 - Artist");
    }

    #[test]
    fn selecting_a_playlist_resets_the_track_position() {
        let mut f = fixture();
        f.player.handle_command(Command::FootswitchNext);
        assert_eq!(f.player.track_index(), 1);

        f.player.handle_command(Command::RotaryPush);
        f.player.handle_command(Command::RotaryNext);

        assert_eq!(f.player.playlist_index(), 1);
        assert_eq!(f.player.track_index(), 0);
        assert_eq!(f.display.lock().unwrap().lines[1], "Tracks: 2");
    }

    #[test]
    fn play_enters_play_mode_and_drives_the_transport() {
        let mut f = fixture();

        f.player.handle_command(Command::FootswitchPlay);

        assert_eq!(f.player.mode(), Mode::Play);
        assert!(f.player.playing_flag().load(Ordering::Relaxed));
        assert_eq!(f.player.track_playtime_millis(), 0);
        assert_eq!(
            f.transport.calls(),
            vec!["load /music/001.mp3", "volume 100", "play"]
        );
    }

    #[test]
    fn while_playing_only_stop_is_honoured() {
        let mut f = fixture();
        f.player.handle_command(Command::FootswitchPlay);

        for command in [
            Command::RotaryNext,
            Command::RotaryPrev,
            Command::RotaryPush,
            Command::FootswitchNext,
            Command::FootswitchPrev,
            Command::FootswitchPlay,
        ] {
            f.player.handle_command(command);
            assert_eq!(f.player.mode(), Mode::Play);
            assert_eq!(f.player.track_index(), 0);
            assert_eq!(f.player.playlist_index(), 0);
        }

        f.player.handle_command(Command::FootswitchStop);
        assert_eq!(f.player.mode(), Mode::Idle);
        assert!(!f.player.playing_flag().load(Ordering::Relaxed));
        assert_eq!(f.transport.calls().last().unwrap(), "stop");
    }

    #[test]
    fn stop_without_playback_is_ignored() {
        let mut f = fixture();
        f.player.handle_command(Command::FootswitchStop);
        assert_eq!(f.player.mode(), Mode::Idle);
        assert!(f.transport.calls().is_empty());
    }

    #[test]
    fn out_of_range_settings_are_clamped() {
        let settings = Settings {
            playlist_number: 9,
            track_number: 7,
            ..Settings::default()
        };
        let f = fixture_with_settings(&settings);
        assert_eq!(f.player.playlist_index(), 0);
        assert_eq!(f.player.track_index(), 0);
    }

    #[test]
    fn settings_snapshot_carries_position_and_keeps_volume() {
        let mut f = fixture();
        f.player.handle_command(Command::FootswitchNext);

        let snapshot = f.player.settings_snapshot(&Settings::default());
        assert_eq!(snapshot.track_number, 1);
        assert_eq!(snapshot.volume_left, 0.8);
    }

    // End-to-end over the real queue: producer thread enqueues, consumer
    // loop drains until the sender is gone.
    #[test]
    fn run_loop_processes_queued_commands_in_order() {
        let mut f = fixture();
        let (command_tx, command_rx) = mpsc::channel();

        let producer = thread::spawn(move || {
            for command in [
                Command::FootswitchNext,
                Command::FootswitchPlay,
                Command::FootswitchStop,
            ] {
                command_tx.send(command).unwrap();
            }
            // Dropping the sender ends the run loop.
        });

        f.player.run(command_rx);
        producer.join().unwrap();

        assert_eq!(f.player.mode(), Mode::Idle);
        assert_eq!(f.player.track_index(), 1);
        assert_eq!(
            f.transport.calls(),
            vec!["load /music/002.mp3", "volume 100", "play", "stop"]
        );
    }
}
