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

//! Layout of variable-length track metadata into the fixed display lines.
//!
//! Line budgets: 16 characters for the artist on line 0 (the track number
//! prefix takes the rest), 20 characters for lines 1 to 3. A trailing
//! parenthetical annotation — `" (...)"` at the end of the string — is
//! stripped from artist and title before layout, so `Intro (Live Version)`
//! renders as `Intro`.

use std::sync::OnceLock;

use regex::Regex;

use crate::catalog::{Playlist, Track};
use crate::display::{LINE1_WIDTH, LINE_COUNT, LINE_WIDTH};

fn suffix_note_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\s\(.*\)$").unwrap())
}

/// Strips a trailing parenthetical annotation, whitespace included.
pub fn strip_suffix_note(text: &str) -> &str {
    match suffix_note_pattern().find(text) {
        Some(found) => &text[..found.start()],
        None => text,
    }
}

fn split_at_chars(text: &str, width: usize) -> (String, String) {
    let head: String = text.chars().take(width).collect();
    let tail: String = text.chars().skip(width).collect();
    (head, tail)
}

/// Lays out a track's metadata over the four display lines.
///
/// * Line 0: `"<number> - <artist up to 16 chars>"`.
/// * Line 1: the artist overflow if there was one, else the title.
/// * Line 2: the title if the artist overflowed, else the title overflow.
/// * Line 3: the title overflow, but only when *both* the artist and the
///   title run past 20 characters. An artist of 17 to 20 characters leaves
///   line 3 blank even with a long title — the condition is joint, not
///   orthogonal, and is kept exactly as the device has always behaved.
pub fn track_screen(track: &Track) -> [String; LINE_COUNT] {
    let artist = strip_suffix_note(&track.artist);
    let title = strip_suffix_note(&track.title);

    let (artist_head, artist_tail) = if artist.chars().count() > LINE1_WIDTH {
        split_at_chars(artist, LINE1_WIDTH)
    } else {
        (artist.to_string(), String::new())
    };

    let (title_head, title_tail) = if title.chars().count() > LINE_WIDTH {
        split_at_chars(title, LINE_WIDTH)
    } else {
        (title.to_string(), String::new())
    };

    let line1 = format!("{} - {}", track.number, artist_head);
    let line2 = if artist_tail.is_empty() {
        title_head.clone()
    } else {
        artist_tail.clone()
    };
    let line3 = if artist_tail.is_empty() {
        title_tail.clone()
    } else {
        title_head
    };
    let line4 = if artist.chars().count() > LINE_WIDTH && title.chars().count() > LINE_WIDTH {
        title_tail
    } else {
        String::new()
    };

    [line1, line2, line3, line4]
}

/// Lays out playlist information: name and track count, two lines.
pub fn playlist_screen(playlist: &Playlist) -> [String; LINE_COUNT] {
    [
        format!("Name: {}", playlist.name),
        format!("Tracks: {}", playlist.track_count()),
        String::new(),
        String::new(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::PathBuf;

    fn track(artist: &str, title: &str) -> Track {
        Track {
            artist: artist.to_string(),
            title: title.to_string(),
            number: "001".to_string(),
            file: PathBuf::from("/music/001.mp3"),
            length: 0,
        }
    }

    #[test]
    fn suffix_note_is_stripped() {
        assert_eq!(strip_suffix_note("Intro (Live Version)"), "Intro");
        assert_eq!(strip_suffix_note("Plain Title"), "Plain Title");
        // No leading whitespace before the parenthesis, no strip.
        assert_eq!(strip_suffix_note("Intro(x)"), "Intro(x)");
    }

    #[test]
    fn short_artist_and_title_fit_on_two_lines() {
        let screen = track_screen(&track("Artist", "Title"));
        assert_eq!(screen[0], "001 - Artist");
        assert_eq!(screen[1], "Title");
        assert_eq!(screen[2], "");
        assert_eq!(screen[3], "");
    }

    #[test]
    fn long_artist_overflows_to_second_line() {
        let screen = track_screen(&track("Very Long Artist Name Here", "Short"));
        assert_eq!(screen[0], "001 - Very Long Artist");
        assert_eq!(screen[1], " Name Here");
        assert_eq!(screen[2], "Short");
        assert_eq!(screen[3], "");
    }

    #[test]
    fn short_artist_with_long_title_splits_title_over_lines_two_and_three() {
        let title = "A Title That Runs Well Past Twenty";
        let screen = track_screen(&track("Artist", title));
        assert_eq!(screen[1], "A Title That Runs We");
        assert_eq!(screen[2], "ll Past Twenty");
        assert_eq!(screen[3], "");
    }

    #[test]
    fn fourth_line_needs_both_artist_and_title_past_twenty() {
        let artist = "An Artist Name Well Past Twenty Chars";
        let title = "A Title That Runs Well Past Twenty";
        let screen = track_screen(&track(artist, title));
        assert_eq!(screen[0], "001 - An Artist Name W");
        assert_eq!(screen[1], "ell Past Twenty Chars");
        assert_eq!(screen[2], "A Title That Runs We");
        assert_eq!(screen[3], "ll Past Twenty");
    }

    // The observed quirk: an artist of 17-20 characters overflows line 1 but
    // does not count as "long" for the line-4 condition, so the title tail
    // is dropped instead of shown.
    #[test]
    fn artist_between_17_and_20_chars_suppresses_fourth_line() {
        let artist = "Eighteen Char Band"; // 18 chars
        let title = "A Title That Runs Well Past Twenty";
        let screen = track_screen(&track(artist, title));
        assert_eq!(screen[1], "nd");
        assert_eq!(screen[2], "A Title That Runs We");
        assert_eq!(screen[3], "");
    }

    #[test]
    fn playlist_screen_shows_name_and_count() {
        let playlist = Playlist {
            name: "Set 1".to_string(),
            tracks: vec![track("a", "b"), track("c", "d")],
        };
        let screen = playlist_screen(&playlist);
        assert_eq!(screen[0], "Name: Set 1");
        assert_eq!(screen[1], "Tracks: 2");
        assert_eq!(screen[2], "");
        assert_eq!(screen[3], "");
    }
}
