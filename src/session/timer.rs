use std::time::{Duration, Instant};

const ONE_SECOND: Duration = Duration::from_secs(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerState {
    Idle,
    Running,
    Paused,
    Stopped,
    Expired,
}

/// Proof of ownership for one run of a [`Countdown`].
///
/// Every transition out of `Running` bumps the countdown's epoch, so handles
/// issued earlier can no longer advance it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickHandle {
    epoch: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    Stale,
    Running { remaining_secs: u64 },
    Expired,
}

/// A whole-second countdown advanced by the event loop's tick stream.
#[derive(Clone, Debug)]
pub struct Countdown {
    total_secs: u64,
    remaining_secs: u64,
    state: TimerState,
    epoch: u64,
    last_tick: Option<Instant>,
}

impl Countdown {
    pub fn new(total_secs: u64) -> Self {
        Self {
            total_secs,
            remaining_secs: total_secs,
            state: TimerState::Idle,
            epoch: 0,
            last_tick: None,
        }
    }

    pub fn start(&mut self, now: Instant) -> TickHandle {
        self.remaining_secs = self.total_secs;
        self.state = TimerState::Running;
        self.last_tick = Some(now);
        self.issue()
    }

    pub fn pause(&mut self) {
        if self.state == TimerState::Running {
            self.state = TimerState::Paused;
            self.revoke();
        }
    }

    pub fn resume(&mut self, now: Instant) -> Option<TickHandle> {
        if self.state != TimerState::Paused {
            return None;
        }
        self.state = TimerState::Running;
        self.last_tick = Some(now);
        Some(self.issue())
    }

    /// Freeze the remaining time without expiring.
    pub fn stop(&mut self) {
        if matches!(self.state, TimerState::Running | TimerState::Paused) {
            self.state = TimerState::Stopped;
            self.revoke();
        }
    }

    pub fn cancel(&mut self) {
        self.revoke();
        self.state = TimerState::Idle;
        self.remaining_secs = self.total_secs;
    }

    /// Ignored while a run is in progress.
    pub fn set_duration(&mut self, total_secs: u64) -> bool {
        if matches!(self.state, TimerState::Running | TimerState::Paused) {
            return false;
        }
        self.total_secs = total_secs;
        self.remaining_secs = total_secs;
        self.state = TimerState::Idle;
        true
    }

    pub fn tick(&mut self, handle: TickHandle, now: Instant) -> Tick {
        if handle.epoch != self.epoch || self.state != TimerState::Running {
            return Tick::Stale;
        }
        let Some(mut last) = self.last_tick else {
            return Tick::Stale;
        };

        while self.remaining_secs > 0 && now.saturating_duration_since(last) >= ONE_SECOND {
            last += ONE_SECOND;
            self.remaining_secs -= 1;
        }
        self.last_tick = Some(last);

        if self.remaining_secs == 0 {
            self.state = TimerState::Expired;
            self.revoke();
            Tick::Expired
        } else {
            Tick::Running {
                remaining_secs: self.remaining_secs,
            }
        }
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn total_secs(&self) -> u64 {
        self.total_secs
    }

    pub fn remaining_ratio(&self) -> f64 {
        if self.total_secs == 0 {
            return 0.0;
        }
        self.remaining_secs as f64 / self.total_secs as f64
    }

    fn issue(&mut self) -> TickHandle {
        self.epoch += 1;
        TickHandle { epoch: self.epoch }
    }

    fn revoke(&mut self) {
        self.epoch += 1;
        self.last_tick = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(n: u64) -> Duration {
        Duration::from_secs(n)
    }

    #[test]
    fn test_counts_down_whole_seconds() {
        let t0 = Instant::now();
        let mut timer = Countdown::new(60);
        let handle = timer.start(t0);
        assert_eq!(
            timer.tick(handle, t0 + Duration::from_millis(900)),
            Tick::Running { remaining_secs: 60 }
        );
        assert_eq!(
            timer.tick(handle, t0 + Duration::from_millis(1100)),
            Tick::Running { remaining_secs: 59 }
        );
        // A late tick catches up on every missed second.
        assert_eq!(
            timer.tick(handle, t0 + Duration::from_millis(4050)),
            Tick::Running { remaining_secs: 56 }
        );
    }

    #[test]
    fn test_expiry_revokes_handle() {
        let t0 = Instant::now();
        let mut timer = Countdown::new(3);
        let handle = timer.start(t0);
        assert_eq!(timer.tick(handle, t0 + secs(3)), Tick::Expired);
        assert_eq!(timer.state(), TimerState::Expired);
        assert_eq!(timer.remaining_secs(), 0);
        assert_eq!(timer.tick(handle, t0 + secs(4)), Tick::Stale);
    }

    #[test]
    fn test_cancel_makes_handle_stale() {
        let t0 = Instant::now();
        let mut timer = Countdown::new(30);
        let handle = timer.start(t0);
        timer.tick(handle, t0 + secs(2));
        timer.cancel();
        assert_eq!(timer.tick(handle, t0 + secs(10)), Tick::Stale);
        assert_eq!(timer.remaining_secs(), 30);
        assert_eq!(timer.state(), TimerState::Idle);
    }

    #[test]
    fn test_pause_and_resume_issue_new_handle() {
        let t0 = Instant::now();
        let mut timer = Countdown::new(10);
        let first = timer.start(t0);
        timer.tick(first, t0 + secs(2));
        timer.pause();
        assert_eq!(timer.tick(first, t0 + secs(5)), Tick::Stale);
        assert_eq!(timer.remaining_secs(), 8);

        let second = timer.resume(t0 + secs(20)).unwrap();
        assert_ne!(first, second);
        assert_eq!(timer.tick(first, t0 + secs(22)), Tick::Stale);
        assert_eq!(
            timer.tick(second, t0 + secs(21)),
            Tick::Running { remaining_secs: 7 }
        );
    }

    #[test]
    fn test_resume_requires_pause() {
        let mut timer = Countdown::new(10);
        assert!(timer.resume(Instant::now()).is_none());
    }

    #[test]
    fn test_stop_freezes_remaining() {
        let t0 = Instant::now();
        let mut timer = Countdown::new(10);
        let handle = timer.start(t0);
        timer.tick(handle, t0 + secs(4));
        timer.stop();
        assert_eq!(timer.state(), TimerState::Stopped);
        assert_eq!(timer.tick(handle, t0 + secs(9)), Tick::Stale);
        assert_eq!(timer.remaining_secs(), 6);
    }

    #[test]
    fn test_set_duration_only_when_idle() {
        let mut timer = Countdown::new(60);
        assert!(timer.set_duration(30));
        assert_eq!(timer.remaining_secs(), 30);
        timer.start(Instant::now());
        assert!(!timer.set_duration(120));
        assert_eq!(timer.total_secs(), 30);
    }

    #[test]
    fn test_zero_duration_expires_on_first_tick() {
        let t0 = Instant::now();
        let mut timer = Countdown::new(0);
        let handle = timer.start(t0);
        assert_eq!(timer.tick(handle, t0), Tick::Expired);
    }
}
