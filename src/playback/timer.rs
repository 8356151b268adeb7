use std::time::{Duration, Instant};

/// Fixed-interval tick source that is polled instead of slept on.
///
/// Ticks are only issued while the timer is running; `cancel` stops them.
#[derive(Debug)]
pub struct PlaybackTimer {
    interval: Duration,
    next_tick: Option<Instant>,
}

impl PlaybackTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_tick: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Changes the interval; a pending tick is rescheduled relative to the
    /// previous one.
    pub fn set_interval(&mut self, interval: Duration) {
        if let Some(next) = self.next_tick {
            let last = next.checked_sub(self.interval).unwrap_or(next);
            self.next_tick = Some(last + interval);
        }
        self.interval = interval;
    }

    /// Schedules the first tick one interval after `now`.
    pub fn start(&mut self, now: Instant) {
        self.next_tick = Some(now + self.interval);
    }

    pub fn cancel(&mut self) {
        self.next_tick = None;
    }

    pub fn is_running(&self) -> bool {
        self.next_tick.is_some()
    }

    /// Returns `true` once per elapsed interval.
    ///
    /// Missed deadlines are not replayed: after a long stall a single tick is
    /// issued and the schedule restarts from `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(next) = self.next_tick else {
            return false;
        };
        if now < next {
            return false;
        }
        let following = next + self.interval;
        self.next_tick = Some(if following > now {
            following
        } else {
            now + self.interval
        });
        true
    }

    /// Time left until the next tick, `None` while cancelled.
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.next_tick
            .map(|next| next.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn ticks_once_per_interval() {
        let t0 = Instant::now();
        let mut timer = PlaybackTimer::new(100 * MS);
        assert!(!timer.poll(t0));

        timer.start(t0);
        assert!(!timer.poll(t0 + 50 * MS));
        assert!(timer.poll(t0 + 100 * MS));
        assert!(!timer.poll(t0 + 150 * MS));
        assert!(timer.poll(t0 + 200 * MS));
        assert_eq!(timer.time_until_next(t0 + 250 * MS), Some(50 * MS));
    }

    #[test]
    fn stall_does_not_burst() {
        let t0 = Instant::now();
        let mut timer = PlaybackTimer::new(100 * MS);
        timer.start(t0);
        assert!(timer.poll(t0 + 1000 * MS));
        assert!(!timer.poll(t0 + 1050 * MS));
        assert!(timer.poll(t0 + 1100 * MS));
    }

    #[test]
    fn cancel_stops_ticks() {
        let t0 = Instant::now();
        let mut timer = PlaybackTimer::new(10 * MS);
        timer.start(t0);
        timer.cancel();
        assert!(!timer.is_running());
        assert!(!timer.poll(t0 + 1000 * MS));
        assert_eq!(timer.time_until_next(t0), None);
    }

    #[test]
    fn interval_change_reschedules_pending_tick() {
        let t0 = Instant::now();
        let mut timer = PlaybackTimer::new(100 * MS);
        timer.start(t0);
        timer.set_interval(20 * MS);
        assert!(timer.poll(t0 + 20 * MS));
        assert_eq!(timer.interval(), 20 * MS);
    }
}
