//! # Refresh Scheduler
//!
//! Coalesces bursts of change events into one annotation pass.
//!
//! ```text
//! Idle    + Immediate  → Idle     (pass runs now)
//! Idle    + Throttled  → Pending  (timer armed)
//! Pending + Throttled  → Pending  (timer re-armed, last trigger wins)
//! Pending + Immediate  → Idle     (timer cancelled, pass runs now)
//! Pending + timer      → Idle     (pass runs against live state)
//! ```
//!
//! The scheduler only tracks time. Whoever owns it runs the pass.

use std::time::Duration;
use tokio::time::Instant;

/// Debounce window used when none is configured
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Editor switched or word list changed
    Immediate,
    /// Text or selection changed
    Throttled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    Idle,
    Pending { deadline: Instant },
}

/// What the owner should do after a trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schedule {
    RunNow,
    Deferred { deadline: Instant },
}

#[derive(Debug, Clone)]
pub struct RefreshScheduler {
    delay: Duration,
    state: SchedulerState,
}

impl RefreshScheduler {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            state: SchedulerState::Idle,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, SchedulerState::Pending { .. })
    }

    pub fn deadline(&self) -> Option<Instant> {
        match self.state {
            SchedulerState::Pending { deadline } => Some(deadline),
            SchedulerState::Idle => None,
        }
    }

    pub fn trigger(&mut self, trigger: Trigger, now: Instant) -> Schedule {
        match trigger {
            Trigger::Immediate => {
                self.state = SchedulerState::Idle;
                Schedule::RunNow
            }
            Trigger::Throttled => {
                let deadline = now + self.delay;
                self.state = SchedulerState::Pending { deadline };
                Schedule::Deferred { deadline }
            }
        }
    }

    /// Return to Idle if the timer is due. `true` means a pass should run.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.state {
            SchedulerState::Pending { deadline } if now >= deadline => {
                self.state = SchedulerState::Idle;
                true
            }
            _ => false,
        }
    }

    /// Drop a pending timer. Returns whether one was armed.
    pub fn cancel(&mut self) -> bool {
        let was_pending = self.is_pending();
        self.state = SchedulerState::Idle;
        was_pending
    }
}

impl Default for RefreshScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_immediate_runs_now_and_stays_idle() {
        let mut scheduler = RefreshScheduler::default();

        assert_eq!(scheduler.trigger(Trigger::Immediate, Instant::now()), Schedule::RunNow);
        assert_eq!(scheduler.state(), SchedulerState::Idle);
    }

    #[test]
    fn test_throttled_arms_timer() {
        let mut scheduler = RefreshScheduler::default();
        let now = Instant::now();

        let schedule = scheduler.trigger(Trigger::Throttled, now);
        assert_eq!(scheduler.delay(), DEFAULT_DEBOUNCE);
        assert_eq!(schedule, Schedule::Deferred { deadline: now + scheduler.delay() });
        assert!(scheduler.is_pending());
    }

    #[test]
    fn test_retrigger_rearms_from_latest() {
        let mut scheduler = RefreshScheduler::new(Duration::from_millis(100));
        let start = Instant::now();

        scheduler.trigger(Trigger::Throttled, start);
        scheduler.trigger(Trigger::Throttled, start + Duration::from_millis(80));

        assert!(!scheduler.fire(start + Duration::from_millis(120)));
        assert!(scheduler.fire(start + Duration::from_millis(180)));
        assert_eq!(scheduler.state(), SchedulerState::Idle);
    }

    #[test]
    fn test_fire_only_once() {
        let mut scheduler = RefreshScheduler::new(Duration::from_millis(10));
        let start = Instant::now();

        scheduler.trigger(Trigger::Throttled, start);
        let later = start + Duration::from_millis(50);
        assert!(scheduler.fire(later));
        assert!(!scheduler.fire(later));
    }

    #[test]
    fn test_immediate_cancels_pending() {
        let mut scheduler = RefreshScheduler::default();
        let now = Instant::now();

        scheduler.trigger(Trigger::Throttled, now);
        assert_eq!(scheduler.trigger(Trigger::Immediate, now), Schedule::RunNow);
        assert!(!scheduler.fire(now + Duration::from_secs(1)));
    }

    #[test]
    fn test_cancel_reports_pending() {
        let mut scheduler = RefreshScheduler::default();
        assert!(!scheduler.cancel());

        scheduler.trigger(Trigger::Throttled, Instant::now());
        assert!(scheduler.cancel());
        assert_eq!(scheduler.deadline(), None);
    }
}
