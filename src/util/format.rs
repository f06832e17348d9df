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

/// Formats a duration in seconds into a human-readable `MM:SS` string.
///
/// Minutes are not capped, so an hour-long track renders as `60:00`.
pub fn format_time(total_seconds: u64) -> String {
    let mins = total_seconds / 60;
    let secs = total_seconds % 60;
    format!("{:02}:{:02}", mins, secs)
}

/// Formats the playtime line shown during playback: elapsed position against
/// the track's declared length, e.g. `01:05 / 03:30`.
///
/// The elapsed minutes wrap at 60 so the line never outgrows its budget on
/// a runaway playhead.
pub fn playtime_line(elapsed_millis: u64, track_length_seconds: u64) -> String {
    let secs = (elapsed_millis / 1000) % 60;
    let mins = (elapsed_millis / 60_000) % 60;
    format!(
        "{:02}:{:02} / {}",
        mins,
        secs,
        format_time(track_length_seconds)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0), "00:00");
        assert_eq!(format_time(65), "01:05");
        assert_eq!(format_time(3600), "60:00");
    }

    #[test]
    fn test_playtime_line() {
        assert_eq!(playtime_line(0, 210), "00:00 / 03:30");
        assert_eq!(playtime_line(65_000, 210), "01:05 / 03:30");
    }

    #[test]
    fn elapsed_minutes_wrap_at_sixty() {
        assert_eq!(playtime_line(3_600_000, 30), "00:00 / 00:30");
    }
}
