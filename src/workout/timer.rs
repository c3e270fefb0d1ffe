//! Workout timer
//!
//! A repeating one-second tick driven by the UI loop. The loop calls
//! [`WorkoutTimer::poll`] on every iteration; each deadline that has passed
//! fires exactly one tick. Stopping clears the pending deadline, so once
//! [`WorkoutTimer::stop`] returns no further tick can fire.

use crate::util::units::format_clock;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Interval between ticks
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Default)]
pub struct WorkoutTimer {
    elapsed_seconds: u64,
    /// Deadline of the next tick; `Some` exactly while running
    next_tick: Option<Instant>,
}

impl WorkoutTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset to zero and schedule the first tick one interval after `now`
    pub fn start(&mut self, now: Instant) {
        self.elapsed_seconds = 0;
        self.next_tick = Some(now + TICK_INTERVAL);
        debug!("Workout timer started");
    }

    /// Cancel all pending ticks, returning the elapsed seconds
    pub fn stop(&mut self) -> u64 {
        if self.next_tick.take().is_some() {
            info!(
                elapsed = %humantime::format_duration(Duration::from_secs(self.elapsed_seconds)),
                "Workout timer stopped"
            );
        }
        self.elapsed_seconds
    }

    pub fn is_running(&self) -> bool {
        self.next_tick.is_some()
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    /// Elapsed time as `HH:MM:SS`
    pub fn label(&self) -> String {
        format_clock(self.elapsed_seconds)
    }

    /// Fire every tick whose deadline is at or before `now`
    ///
    /// Returns the number of ticks fired. A late poll catches up one tick per
    /// missed interval rather than skipping.
    pub fn poll(&mut self, now: Instant) -> u64 {
        let mut fired = 0;
        while let Some(deadline) = self.next_tick {
            if now < deadline {
                break;
            }
            self.elapsed_seconds += 1;
            self.next_tick = Some(deadline + TICK_INTERVAL);
            fired += 1;
        }
        fired
    }

    /// Fire a single tick immediately; ignored unless running
    pub fn tick(&mut self) -> bool {
        match self.next_tick {
            Some(deadline) => {
                self.elapsed_seconds += 1;
                self.next_tick = Some(deadline + TICK_INTERVAL);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_resets_to_zero() {
        let mut timer = WorkoutTimer::new();
        let t0 = Instant::now();
        timer.start(t0);
        timer.poll(t0 + Duration::from_secs(10));
        assert_eq!(timer.elapsed_seconds(), 10);

        timer.stop();
        timer.start(t0 + Duration::from_secs(20));
        assert_eq!(timer.elapsed_seconds(), 0);
        assert_eq!(timer.label(), "00:00:00");
    }

    #[test]
    fn test_no_tick_before_first_interval() {
        let mut timer = WorkoutTimer::new();
        let t0 = Instant::now();
        timer.start(t0);
        assert_eq!(timer.poll(t0), 0);
        assert_eq!(timer.poll(t0 + Duration::from_millis(999)), 0);
        assert_eq!(timer.poll(t0 + Duration::from_secs(1)), 1);
        assert_eq!(timer.elapsed_seconds(), 1);
    }

    #[test]
    fn test_poll_counts_each_interval_once() {
        let mut timer = WorkoutTimer::new();
        let t0 = Instant::now();
        timer.start(t0);

        let mut total = 0;
        for ms in (0..=65_000).step_by(250) {
            total += timer.poll(t0 + Duration::from_millis(ms));
        }
        assert_eq!(total, 65);
        assert_eq!(timer.elapsed_seconds(), 65);
        assert_eq!(timer.label(), "00:01:05");

        // Polling the same instant again fires nothing.
        assert_eq!(timer.poll(t0 + Duration::from_secs(65)), 0);
    }

    #[test]
    fn test_late_poll_catches_up() {
        let mut timer = WorkoutTimer::new();
        let t0 = Instant::now();
        timer.start(t0);
        assert_eq!(timer.poll(t0 + Duration::from_millis(3725_500)), 3725);
        assert_eq!(timer.label(), "01:02:05");
    }

    #[test]
    fn test_no_tick_after_stop() {
        let mut timer = WorkoutTimer::new();
        let t0 = Instant::now();
        timer.start(t0);
        timer.poll(t0 + Duration::from_secs(5));

        assert_eq!(timer.stop(), 5);
        assert!(!timer.is_running());
        assert_eq!(timer.poll(t0 + Duration::from_secs(3600)), 0);
        assert!(!timer.tick());
        assert_eq!(timer.elapsed_seconds(), 5);
    }

    #[test]
    fn test_manual_tick() {
        let mut timer = WorkoutTimer::new();
        assert!(!timer.tick());

        timer.start(Instant::now());
        for _ in 0..3 {
            assert!(timer.tick());
        }
        assert_eq!(timer.elapsed_seconds(), 3);
    }
}
