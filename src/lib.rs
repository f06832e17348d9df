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

//! # Backing-track player.
//!
//! Control loop for a dedicated backing-track playback appliance: two
//! navigation footswitches, a play/stop footswitch, a rotary encoder with a
//! push button, a 4x20 character display, and an audio transport.
//!
//! It uses an event-driven architecture where:
//!
//! * **Producer threads** (one per input source) debounce raw hardware edges
//!   into [`command::Command`] tokens and enqueue them.
//! * A **single consumer thread** runs the [`player::Player`] mode state
//!   machine, the only writer of playback state.
//! * **Repeating timers** drive the elapsed-time display and footswitch
//!   auto-repeat on their own threads.
//!
//! ## Architecture
//!
//! Communication between producers and the consumer is a single
//! `std::sync::mpsc` channel; the blocking `recv()` in the consumer loop is
//! the only blocking point in the system. The display is the one resource
//! shared across threads (the playtime timer writes to it) and is guarded by
//! a mutex.

pub mod catalog;
pub mod command;
pub mod config;
pub mod display;
pub mod input;
pub mod player;
pub mod settings;
pub mod timer;
pub mod util;
