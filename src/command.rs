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

//! Commands carried by the input queue.
//!
//! Every input source is reduced to one of these tokens before it reaches
//! the player; the meaning of a token depends on the player's current mode.

/// A debounced, validated input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Rotary encoder turned clockwise.
    RotaryNext,
    /// Rotary encoder turned counter-clockwise.
    RotaryPrev,
    /// Rotary encoder push button pressed.
    RotaryPush,
    /// Next footswitch pressed (or auto-repeated while held).
    FootswitchNext,
    /// Previous footswitch pressed (or auto-repeated while held).
    FootswitchPrev,
    /// Play footswitch pressed while stopped.
    FootswitchPlay,
    /// Play footswitch pressed while playing.
    FootswitchStop,
}
