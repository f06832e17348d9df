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

//! Input debouncing: raw hardware edges in, validated commands out.
//!
//! The hardware bus lives outside this crate. What a physical line has to
//! offer is the [`InputLine`] capability: edge-callback registration plus a
//! synchronous level query. The [`Debouncer`] wires six lines into command
//! producers:
//!
//! * The rotary encoder's two quadrature lines decode direction by reading
//!   the level of the opposite line on each edge. Rotary commands are
//!   suppressed entirely while playback is active.
//! * The next/prev footswitches get auto-repeat: a press enqueues once and
//!   marks the switch held; a repeating timer re-enqueues while the line
//!   stays asserted, and a one-shot reset clears the held mark so the next
//!   fresh press starts a new cycle.
//! * The play footswitch is level-sensitive on the playing flag: the same
//!   button produces play when stopped and stop when playing.
//!
//! Hardware delivering duplicate edges faster than the reset window may
//! enqueue duplicate commands; navigation is idempotent modulo wraparound,
//! so this is accepted rather than engineered away.

pub mod keyboard;

use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
        mpsc::Sender,
    },
    time::Duration,
};

use crate::{
    command::Command,
    timer::{self, RepeatingTimer},
};

/// Cadence at which a held footswitch re-enqueues its command.
pub const REPEAT_INTERVAL: Duration = Duration::from_millis(500);

/// Window after a press during which repeats are honoured, after which the
/// held mark is cleared.
pub const HOLD_RESET: Duration = Duration::from_millis(2000);

/// A single edge-triggered hardware input line.
pub trait InputLine: Send + Sync {
    /// Registers a callback invoked on each asserted edge. The callback runs
    /// in the hardware runtime's callback context.
    fn register(&self, callback: Box<dyn Fn() + Send + Sync>);

    /// Whether the line is currently asserted.
    fn is_asserted(&self) -> bool;
}

/// The six physical lines of the control surface.
pub struct InputLines {
    pub footswitch_next: Arc<dyn InputLine>,
    pub footswitch_prev: Arc<dyn InputLine>,
    pub footswitch_play: Arc<dyn InputLine>,
    pub rotary_clk: Arc<dyn InputLine>,
    pub rotary_dt: Arc<dyn InputLine>,
    pub rotary_button: Arc<dyn InputLine>,
}

/// Converts raw line edges into queue commands. Keep the returned value
/// alive for as long as input should be processed; dropping it stops the
/// auto-repeat timers.
pub struct Debouncer {
    _repeat_next: RepeatingTimer,
    _repeat_prev: RepeatingTimer,
}

impl Debouncer {
    /// Wires all lines with the production repeat/reset cadences.
    pub fn attach(lines: InputLines, command_tx: Sender<Command>, playing: Arc<AtomicBool>) -> Self {
        Self::attach_with(lines, command_tx, playing, REPEAT_INTERVAL, HOLD_RESET)
    }

    /// Wires all lines with explicit cadences.
    pub fn attach_with(
        lines: InputLines,
        command_tx: Sender<Command>,
        playing: Arc<AtomicBool>,
        repeat_interval: Duration,
        hold_reset: Duration,
    ) -> Self {
        // Quadrature decode: an edge on one line reads the level of the
        // other to pick the direction.
        {
            let playing = playing.clone();
            let clk = lines.rotary_clk.clone();
            let tx = command_tx.clone();
            lines.rotary_dt.register(Box::new(move || {
                if !playing.load(Ordering::Relaxed) && clk.is_asserted() {
                    let _ = tx.send(Command::RotaryNext);
                }
            }));
        }
        {
            let playing = playing.clone();
            let dt = lines.rotary_dt.clone();
            let tx = command_tx.clone();
            lines.rotary_clk.register(Box::new(move || {
                if !playing.load(Ordering::Relaxed) && dt.is_asserted() {
                    let _ = tx.send(Command::RotaryPrev);
                }
            }));
        }
        {
            let button = lines.rotary_button.clone();
            let tx = command_tx.clone();
            lines.rotary_button.register(Box::new(move || {
                if button.is_asserted() {
                    let _ = tx.send(Command::RotaryPush);
                }
            }));
        }

        // One physical button serves both roles, picked by the current
        // playing level.
        {
            let switch = lines.footswitch_play.clone();
            let tx = command_tx.clone();
            lines.footswitch_play.register(Box::new(move || {
                if switch.is_asserted() {
                    let command = if playing.load(Ordering::Relaxed) {
                        Command::FootswitchStop
                    } else {
                        Command::FootswitchPlay
                    };
                    let _ = tx.send(command);
                }
            }));
        }

        let repeat_next = attach_footswitch(
            &lines.footswitch_next,
            Command::FootswitchNext,
            &command_tx,
            repeat_interval,
            hold_reset,
        );
        let repeat_prev = attach_footswitch(
            &lines.footswitch_prev,
            Command::FootswitchPrev,
            &command_tx,
            repeat_interval,
            hold_reset,
        );

        Self {
            _repeat_next: repeat_next,
            _repeat_prev: repeat_prev,
        }
    }
}

/// Wires one navigation footswitch: enqueue on press, auto-repeat while
/// held, reset the held mark after the hold window.
fn attach_footswitch(
    line: &Arc<dyn InputLine>,
    command: Command,
    command_tx: &Sender<Command>,
    repeat_interval: Duration,
    hold_reset: Duration,
) -> RepeatingTimer {
    // Written by the press callback and the reset one-shot; last writer
    // wins, duplicates within the window are accepted.
    let held = Arc::new(AtomicBool::new(false));

    {
        let switch = line.clone();
        let held = held.clone();
        let tx = command_tx.clone();
        line.register(Box::new(move || {
            if switch.is_asserted() {
                held.store(true, Ordering::Relaxed);
                let _ = tx.send(command);

                let held = held.clone();
                timer::one_shot(hold_reset, move || {
                    held.store(false, Ordering::Relaxed);
                });
            }
        }));
    }

    let switch = line.clone();
    let tx = command_tx.clone();
    RepeatingTimer::schedule(repeat_interval, move || {
        if switch.is_asserted() && held.load(Ordering::Relaxed) {
            let _ = tx.send(command);
        }
    })
}
