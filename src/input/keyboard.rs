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

//! Keyboard stand-in for the control surface.
//!
//! Development producer thread mapping terminal keys onto the same commands
//! the footswitches and rotary encoder would produce:
//!
//! * Left / Right — previous/next footswitch
//! * Up / Down — rotary turn (suppressed while playing, like the hardware)
//! * Enter — rotary push
//! * Space — play/stop footswitch (level-sensitive on the playing flag)
//! * `q` or Esc — drop the producer, which ends the consumer loop
//!
//! Keys need no debouncing, so this source feeds the queue directly rather
//! than going through the [`crate::input::Debouncer`].

use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
        mpsc::Sender,
    },
    thread,
};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

use crate::command::Command;

/// Spawns the keyboard producer thread. The thread owns `command_tx`; when
/// the user quits (or the terminal goes away) the sender drops and the
/// consumer loop drains out.
pub fn spawn(command_tx: Sender<Command>, playing: Arc<AtomicBool>) {
    thread::spawn(move || {
        loop {
            let key = match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => key,
                Ok(_) => continue,
                Err(e) => {
                    log::error!("keyboard input failed: {}", e);
                    break;
                }
            };

            let playing_now = playing.load(Ordering::Relaxed);

            let command = match key.code {
                KeyCode::Right => Some(Command::FootswitchNext),
                KeyCode::Left => Some(Command::FootswitchPrev),
                KeyCode::Down if !playing_now => Some(Command::RotaryNext),
                KeyCode::Up if !playing_now => Some(Command::RotaryPrev),
                KeyCode::Down | KeyCode::Up => None,
                KeyCode::Enter => Some(Command::RotaryPush),
                KeyCode::Char(' ') => Some(if playing_now {
                    Command::FootswitchStop
                } else {
                    Command::FootswitchPlay
                }),
                KeyCode::Char('q') | KeyCode::Esc => break,
                _ => None,
            };

            if let Some(command) = command {
                if command_tx.send(command).is_err() {
                    break;
                }
            }
        }
    });
}
