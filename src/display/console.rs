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

//! Development display: the 4x20 character LCD rendered in the terminal.
//!
//! Writes are best-effort — a broken terminal must never take down the
//! control loop, same as a flaky LCD bus would not.

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};

use crate::display::{Display, LINE_COUNT, LINE_WIDTH};

/// A crossterm-backed stand-in for the character display.
pub struct ConsoleDisplay {
    out: io::Stdout,
}

impl ConsoleDisplay {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for ConsoleDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for ConsoleDisplay {
    fn clear(&mut self) {
        execute!(self.out, Clear(ClearType::All)).ok();
    }

    fn write_line(&mut self, text: &str, line: usize) {
        if line >= LINE_COUNT {
            return;
        }

        // The LCD drops anything past its width.
        let text: String = text.chars().take(LINE_WIDTH).collect();

        execute!(self.out, MoveTo(0, line as u16)).ok();
        write!(self.out, "{}", text).ok();
        self.out.flush().ok();
    }
}
