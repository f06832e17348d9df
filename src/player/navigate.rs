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

//! Wraparound index arithmetic over the catalog.

/// Navigation direction for track and playlist selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

/// Steps `index` one position in `direction`, wrapping at both ends:
/// past the last index wraps to 0, before 0 wraps to the last index.
///
/// `count` must be non-zero; the catalog validation guarantees it.
pub fn step(index: usize, count: usize, direction: Direction) -> usize {
    debug_assert!(count > 0);
    match direction {
        Direction::Next => {
            if index >= count - 1 {
                0
            } else {
                index + 1
            }
        }
        Direction::Prev => {
            if index == 0 {
                count - 1
            } else {
                index - 1
            }
        }
    }
}
