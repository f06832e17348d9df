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

//! The character display.
//!
//! The hardware bus protocol lives outside this crate; the control loop only
//! needs [`Display`]: clear everything, write a line. The display is shared
//! between the consumer thread and the playtime refresh timer, hence
//! [`SharedDisplay`].
//!
//! Every full-screen render clears the display first, and single-line writes
//! blank the line first, so a shorter string never leaves trailing
//! characters from a previous, longer one.

pub mod console;
pub mod layout;

use std::sync::{Arc, Mutex};

/// Number of lines on the display.
pub const LINE_COUNT: usize = 4;
/// Character budget of line 0 (the track number prefix eats the rest).
pub const LINE1_WIDTH: usize = 16;
/// Character budget of lines 1 to 3.
pub const LINE_WIDTH: usize = 20;

/// A 4-line fixed-width character display. Lines are indexed from 0.
pub trait Display: Send {
    fn clear(&mut self);
    fn write_line(&mut self, text: &str, line: usize);
}

/// Display handle shared between the consumer loop and timer threads.
pub type SharedDisplay = Arc<Mutex<dyn Display>>;

/// Renders a full screen: clear, then write all four lines.
pub fn show(display: &SharedDisplay, lines: &[String; LINE_COUNT]) {
    let mut display = display.lock().unwrap();
    display.clear();
    for (index, line) in lines.iter().enumerate() {
        display.write_line(line, index);
    }
}

/// Rewrites a single line, blanking it first.
pub fn write_line(display: &SharedDisplay, text: &str, line: usize) {
    let mut display = display.lock().unwrap();
    display.write_line(&" ".repeat(LINE_WIDTH), line);
    display.write_line(text, line);
}

/// Shows an error screen. Same clearing contract as [`show`]; kept separate
/// so call sites read as error reporting.
pub fn show_error(display: &SharedDisplay, lines: &[String; LINE_COUNT]) {
    show(display, lines);
}
