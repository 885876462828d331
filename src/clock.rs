/// Time source and the cancellable repeating interval driven from it.
use std::time::{Duration, Instant};

pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall-clock time.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to; clones share the same time.
#[cfg(test)]
#[derive(Clone, Debug)]
pub struct ManualClock {
    now: std::rc::Rc<std::cell::Cell<Instant>>,
}

#[cfg(test)]
impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: std::rc::Rc::new(std::cell::Cell::new(Instant::now())),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

#[cfg(test)]
impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

pub type TimerId = u64;

/// A repeating timer handle. Dropping it cancels it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Interval {
    id: TimerId,
    period: Duration,
    next_due: Instant,
}

impl Interval {
    pub fn start(id: TimerId, period: Duration, now: Instant) -> Self {
        Self {
            id,
            period,
            next_due: now + period,
        }
    }

    pub fn id(&self) -> TimerId {
        self.id
    }

    /// Number of whole periods elapsed since the last call. `next_due`
    /// advances by exactly that many periods so late polls don't drift.
    pub fn due(&mut self, now: Instant) -> u32 {
        if now < self.next_due || self.period.is_zero() {
            return 0;
        }
        let overdue = now - self.next_due;
        let fired = (overdue.as_nanos() / self.period.as_nanos()) as u32 + 1;
        self.next_due += self.period * fired;
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECOND: Duration = Duration::from_secs(1);

    #[test]
    fn nothing_due_before_first_period() {
        let clock = ManualClock::new();
        let mut interval = Interval::start(1, SECOND, clock.now());
        clock.advance(Duration::from_millis(999));
        assert_eq!(interval.due(clock.now()), 0);
        clock.advance(Duration::from_millis(1));
        assert_eq!(interval.due(clock.now()), 1);
        assert_eq!(interval.due(clock.now()), 0);
    }

    #[test]
    fn late_poll_reports_every_missed_period() {
        let clock = ManualClock::new();
        let mut interval = Interval::start(1, SECOND, clock.now());
        clock.advance(Duration::from_millis(3_500));
        assert_eq!(interval.due(clock.now()), 3);
        // the half second already elapsed counts towards the next one
        clock.advance(Duration::from_millis(500));
        assert_eq!(interval.due(clock.now()), 1);
    }

    #[test]
    fn quarter_second_polls_fire_once_per_second() {
        let clock = ManualClock::new();
        let mut interval = Interval::start(7, SECOND, clock.now());
        let mut fired = 0;
        for _ in 0..40 {
            clock.advance(Duration::from_millis(250));
            fired += interval.due(clock.now());
        }
        assert_eq!(fired, 10);
        assert_eq!(interval.id(), 7);
    }
}
