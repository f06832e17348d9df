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

//! Re-arming periodic tasks.
//!
//! A [`RepeatingTimer`] runs its task on a dedicated thread and re-arms
//! *after* the task returns, so the interval is a gap, not a rate — drift
//! accumulates by the task's own duration, which is fine for display refresh
//! and footswitch auto-repeat. At most one invocation is ever in flight.

use std::{
    sync::mpsc::{self, RecvTimeoutError, Sender},
    thread,
    time::Duration,
};

/// A periodic task with cancel semantics.
///
/// The re-arm is performed by the timer thread between invocations, not by
/// the task re-scheduling itself, so there is no re-entrancy. Dropping the
/// timer cancels it just like [`RepeatingTimer::cancel`] (the cancel channel
/// disconnects).
pub struct RepeatingTimer {
    cancel_tx: Sender<()>,
}

impl RepeatingTimer {
    /// Starts a timer that invokes `task` every `interval`, measured from
    /// the end of the previous invocation.
    pub fn schedule<F>(interval: Duration, mut task: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let (cancel_tx, cancel_rx) = mpsc::channel();

        thread::spawn(move || {
            loop {
                match cancel_rx.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => task(),
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
        });

        Self { cancel_tx }
    }

    /// Stops future firings. An invocation already in flight runs to
    /// completion.
    pub fn cancel(&self) {
        let _ = self.cancel_tx.send(());
    }
}

/// Runs `task` once after `delay` on a detached thread.
///
/// Fire-and-forget; there is no handle and no cancellation. Used for the
/// footswitch held-state reset, where a stale firing is harmless.
pub fn one_shot<F>(delay: Duration, task: F)
where
    F: FnOnce() + Send + 'static,
{
    thread::spawn(move || {
        thread::sleep(delay);
        task();
    });
}
