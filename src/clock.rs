//! Frame clock: the per-refresh scheduler driving all simulation updates.
//!
//! Each game instance owns exactly one `FrameClock`. The clock holds at most
//! one pending tick deadline at any time: `start` arms it (re-arming, never
//! duplicating, if already running), `cancel` clears it, and `poll` reports
//! how many whole frames have elapsed while advancing the single deadline.
//!
//! A cancelled clock never reports a tick, so a simulation that cancels its
//! clock on game over or unmount cannot be advanced by a stale host loop.

use std::time::{Duration, Instant};

/// Nominal frame period in milliseconds (~60 Hz).
pub const FRAME_MS: u32 = 16;

#[derive(Debug, Clone)]
pub struct FrameClock {
    period: Duration,
    /// The single pending tick deadline. `None` means stopped.
    deadline: Option<Instant>,
    frame: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::with_period(Duration::from_millis(FRAME_MS as u64))
    }

    pub fn with_period(period: Duration) -> Self {
        assert!(!period.is_zero(), "frame period must be non-zero");
        Self {
            period,
            deadline: None,
            frame: 0,
        }
    }

    /// Arm the clock. If it is already running the pending deadline is
    /// replaced, keeping the one-pending-tick invariant across restarts.
    pub fn start(&mut self, now: Instant) {
        self.deadline = Some(now + self.period);
    }

    /// Stop the clock and drop the pending deadline.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_running(&self) -> bool {
        self.deadline.is_some()
    }

    /// Total frames reported since construction.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Time remaining until the pending deadline, or `None` when stopped.
    /// Hosts use this as their input-poll timeout.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|d| d.saturating_duration_since(now))
    }

    /// Report elapsed whole frames at `now` and advance the deadline past
    /// `now`. Returns 0 while the deadline is in the future or the clock is
    /// stopped. When the host fell behind, the missed frames are reported in
    /// one batch rather than queued as extra deadlines.
    pub fn poll(&mut self, now: Instant) -> u32 {
        let Some(deadline) = self.deadline else {
            return 0;
        };
        if now < deadline {
            return 0;
        }

        let behind = now.duration_since(deadline);
        let ticks = 1 + (behind.as_nanos() / self.period.as_nanos()) as u32;
        self.deadline = Some(deadline + self.period * ticks);
        self.frame += u64::from(ticks);
        ticks
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stopped_clock_never_ticks() {
        let mut clock = FrameClock::new();
        assert!(!clock.is_running());
        assert_eq!(clock.poll(Instant::now()), 0);
        assert_eq!(clock.frame(), 0);
    }

    #[test]
    fn ticks_once_per_period() {
        let mut clock = FrameClock::with_period(Duration::from_millis(10));
        let t0 = Instant::now();
        clock.start(t0);

        assert_eq!(clock.poll(t0 + Duration::from_millis(9)), 0);
        assert_eq!(clock.poll(t0 + Duration::from_millis(10)), 1);
        assert_eq!(clock.poll(t0 + Duration::from_millis(19)), 0);
        assert_eq!(clock.poll(t0 + Duration::from_millis(20)), 1);
        assert_eq!(clock.frame(), 2);
    }

    #[test]
    fn late_poll_batches_missed_frames() {
        let mut clock = FrameClock::with_period(Duration::from_millis(10));
        let t0 = Instant::now();
        clock.start(t0);

        // 35ms late: deadlines at 10, 20, 30 have all passed.
        assert_eq!(clock.poll(t0 + Duration::from_millis(35)), 3);
        // The single pending deadline is now at 40ms.
        assert_eq!(clock.poll(t0 + Duration::from_millis(39)), 0);
        assert_eq!(clock.poll(t0 + Duration::from_millis(40)), 1);
    }

    #[test]
    fn cancel_stops_ticking() {
        let mut clock = FrameClock::with_period(Duration::from_millis(10));
        let t0 = Instant::now();
        clock.start(t0);
        clock.cancel();

        assert!(!clock.is_running());
        assert_eq!(clock.poll(t0 + Duration::from_secs(1)), 0);
        assert_eq!(clock.time_until_due(t0), None);
    }

    #[test]
    fn restart_replaces_pending_deadline() {
        let mut clock = FrameClock::with_period(Duration::from_millis(10));
        let t0 = Instant::now();
        clock.start(t0);
        // Restart half-way: the old deadline at t0+10 must be gone.
        clock.start(t0 + Duration::from_millis(5));

        assert_eq!(clock.poll(t0 + Duration::from_millis(10)), 0);
        assert_eq!(clock.poll(t0 + Duration::from_millis(15)), 1);
    }
}
