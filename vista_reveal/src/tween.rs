// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A restartable, reversible tween over a fixed duration.
//!
//! [`Tween`] tracks a playhead as a [`Duration`] in `[0, duration]` rather
//! than as a float, so repeated forward/reverse cycles never accumulate
//! error: a settled tween is always exactly at one of its endpoints.
//!
//! The playhead only moves while the tween is running. Calling
//! [`Tween::play`] while already running replaces the direction in place
//! (last writer wins); it never stacks a second motion on top of the first.

use core::time::Duration;

use crate::easing::Easing;

/// Playhead direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward the end (resting state).
    Forward,
    /// Toward the start (offset state).
    Reverse,
}

/// A tween playhead with delay, easing, and direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    position: Duration,
    duration: Duration,
    easing: Easing,
    direction: Direction,
    pending_delay: Duration,
    running: bool,
}

impl Tween {
    /// Creates a paused tween at its start.
    ///
    /// A zero duration is bumped to one nanosecond so progress stays defined.
    #[must_use]
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self {
            position: Duration::ZERO,
            duration: if duration.is_zero() {
                Duration::from_nanos(1)
            } else {
                duration
            },
            easing,
            direction: Direction::Forward,
            pending_delay: Duration::ZERO,
            running: false,
        }
    }

    /// Starts (or redirects) playback after `delay`.
    ///
    /// The playhead keeps its current position, so reversing a tween halfway
    /// through walks back along the same curve.
    pub fn play(&mut self, direction: Direction, delay: Duration) {
        self.direction = direction;
        self.pending_delay = delay;
        self.running = !self.is_at_target();
    }

    /// Stops playback where the playhead currently is.
    pub fn cancel(&mut self) {
        self.running = false;
        self.pending_delay = Duration::ZERO;
    }

    /// Stops playback and moves the playhead to the start.
    pub fn seek_start(&mut self) {
        self.cancel();
        self.position = Duration::ZERO;
    }

    /// Stops playback and moves the playhead to the end.
    pub fn seek_end(&mut self) {
        self.cancel();
        self.position = self.duration;
    }

    /// Advances the playhead by `dt`. Returns `true` on the tick that reaches
    /// the target endpoint.
    ///
    /// Time left over from an expiring delay is forwarded into the motion.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if !self.running {
            return false;
        }
        let mut dt = dt;
        if !self.pending_delay.is_zero() {
            if dt < self.pending_delay {
                self.pending_delay -= dt;
                return false;
            }
            dt -= self.pending_delay;
            self.pending_delay = Duration::ZERO;
        }
        self.position = match self.direction {
            Direction::Forward => self.position.saturating_add(dt).min(self.duration),
            Direction::Reverse => self.position.saturating_sub(dt),
        };
        if self.is_at_target() {
            self.running = false;
            return true;
        }
        false
    }

    /// Whether the playhead is moving (or waiting out a delay).
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether a delay is still pending.
    #[must_use]
    pub fn is_delayed(&self) -> bool {
        self.running && !self.pending_delay.is_zero()
    }

    /// Current direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Total duration of one pass.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Whether the playhead sits exactly at the start.
    #[must_use]
    pub fn is_at_start(&self) -> bool {
        self.position.is_zero()
    }

    /// Whether the playhead sits exactly at the end.
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.position == self.duration
    }

    /// Linear progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.is_at_end() {
            return 1.0;
        }
        (self.position.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Eased progress in `[0, 1]`; exactly `0.0`/`1.0` at the endpoints.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.easing.apply(self.progress())
    }

    fn is_at_target(&self) -> bool {
        match self.direction {
            Direction::Forward => self.is_at_end(),
            Direction::Reverse => self.is_at_start(),
        }
    }
}
