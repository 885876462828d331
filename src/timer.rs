/// The countdown session: name, length, remaining time and the persisted
/// completion record.
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::clock::{Clock, Interval, TimerId};
use crate::phrases;
use crate::store::KeyValueStore;
use crate::types::{COMPLETED_COUNT_KEY, CountdownLength, Phase, SAVED_NAME_KEY};

pub const TICK_PERIOD: Duration = Duration::from_secs(1);

pub struct TimerSession<S, C> {
    store: S,
    clock: C,
    name: String,
    length: CountdownLength,
    remaining: u32,
    running: bool,
    completed: bool,
    completed_count: u32,
    saved_name: String,
    interval: Option<Interval>,
    next_timer_id: TimerId,
}

/// Stored count, or 0 when missing or not a number.
pub fn parse_completed_count(value: Option<&str>) -> u32 {
    value
        .and_then(|raw| raw.trim().parse::<u32>().ok())
        .unwrap_or(0)
}

impl<S: KeyValueStore, C: Clock> TimerSession<S, C> {
    /// Builds a fresh idle session and reads the completion record.
    pub fn load(store: S, clock: C) -> Self {
        let completed_count = match store.get(COMPLETED_COUNT_KEY) {
            Ok(value) => parse_completed_count(value.as_deref()),
            Err(err) => {
                warn!("failed to read {COMPLETED_COUNT_KEY}: {err:#}");
                0
            }
        };
        let saved_name = match store.get(SAVED_NAME_KEY) {
            Ok(value) => value.unwrap_or_default(),
            Err(err) => {
                warn!("failed to read {SAVED_NAME_KEY}: {err:#}");
                String::new()
            }
        };
        let length = CountdownLength::default();
        debug!(completed_count, saved_name = %saved_name, "loaded completion record");
        Self {
            store,
            clock,
            name: saved_name.clone(),
            length,
            remaining: length.secs(),
            running: false,
            completed: false,
            completed_count,
            saved_name,
            interval: None,
            next_timer_id: 1,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn saved_name(&self) -> &str {
        &self.saved_name
    }

    pub fn length(&self) -> CountdownLength {
        self.length
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn completed_count(&self) -> u32 {
        self.completed_count
    }

    pub fn phase(&self) -> Phase {
        if self.is_running() {
            Phase::Running
        } else if self.is_completed() {
            Phase::Completed
        } else {
            Phase::Idle
        }
    }

    /// Id of the pending one-second timer, if any.
    pub fn active_timer(&self) -> Option<TimerId> {
        self.interval.as_ref().map(Interval::id)
    }

    pub fn can_start(&self) -> bool {
        !self.running && !self.name.trim().is_empty()
    }

    pub fn progress_percentage(&self) -> f64 {
        let total = f64::from(self.length.secs());
        (total - f64::from(self.remaining)) / total * 100.0
    }

    /// Replace the name. The name is locked while counting down.
    pub fn set_name(&mut self, name: impl Into<String>) {
        if self.running {
            return;
        }
        self.name = name.into();
    }

    pub fn push_name_char(&mut self, ch: char) {
        if self.running || ch.is_control() {
            return;
        }
        self.name.push(ch);
    }

    pub fn pop_name_char(&mut self) {
        if self.running {
            return;
        }
        self.name.pop();
    }

    pub fn start(&mut self) {
        if !self.can_start() {
            debug!(running = self.running, "start ignored");
            return;
        }
        self.cancel_interval();
        self.running = true;
        self.completed = false;
        self.remaining = self.length.secs();
        let id = self.next_timer_id;
        self.next_timer_id += 1;
        self.interval = Some(Interval::start(id, TICK_PERIOD, self.clock.now()));
        info!(name = %self.name, secs = self.remaining, timer = id, "countdown started");
    }

    /// Runs every tick whose period has elapsed on the clock.
    pub fn poll(&mut self) {
        let now = self.clock.now();
        let fired = match self.interval.as_mut() {
            Some(interval) => interval.due(now),
            None => return,
        };
        for _ in 0..fired {
            if !self.running {
                break;
            }
            self.tick();
        }
    }

    /// One-second decrement; completes the session when it hits zero.
    pub fn tick(&mut self) {
        if !self.running || self.remaining == 0 {
            return;
        }
        self.remaining -= 1;
        debug!(remaining = self.remaining, "tick");
        if self.remaining == 0 {
            self.on_reach_zero();
        }
    }

    fn on_reach_zero(&mut self) {
        self.cancel_interval();
        self.running = false;
        self.completed = true;
        self.completed_count = self.completed_count.saturating_add(1);
        self.persist(COMPLETED_COUNT_KEY, &self.completed_count.to_string());
        if !self.name.is_empty() {
            self.persist(SAVED_NAME_KEY, &self.name);
            self.saved_name = self.name.clone();
        }
        info!(name = %self.name, completed = self.completed_count, "countdown completed");
    }

    /// Leaves the completion screen. Does not restart the countdown.
    pub fn try_again(&mut self) {
        if !self.completed {
            return;
        }
        self.completed = false;
        self.remaining = self.length.secs();
        debug!("back to idle after completion");
    }

    /// Back to defaults, forgetting the completion record.
    pub fn reset(&mut self) {
        self.cancel_interval();
        self.running = false;
        self.completed = false;
        self.remaining = self.length.secs();
        self.name.clear();
        self.completed_count = 0;
        self.saved_name.clear();
        self.forget(COMPLETED_COUNT_KEY);
        self.forget(SAVED_NAME_KEY);
        info!("session reset");
    }

    /// Out-of-range lengths are ignored.
    pub fn select_duration(&mut self, secs: u32) {
        let Some(length) = CountdownLength::from_secs(secs) else {
            debug!(secs, "ignoring unsupported duration");
            return;
        };
        self.length = length;
        if self.running {
            self.remaining = self.remaining.min(length.secs());
        } else {
            self.remaining = length.secs();
        }
        debug!(secs, "duration selected");
    }

    pub fn cycle_duration(&mut self, forward: bool) {
        let next = if forward {
            self.length.next()
        } else {
            self.length.prev()
        };
        self.select_duration(next.secs());
    }

    pub fn celebration_phrase(&self) -> String {
        phrases::random_phrase(&self.name)
    }

    fn cancel_interval(&mut self) {
        if let Some(interval) = self.interval.take() {
            debug!(timer = interval.id(), "timer cancelled");
        }
    }

    fn persist(&self, key: &str, value: &str) {
        if let Err(err) = self.store.set(key, value) {
            warn!("failed to persist {key}: {err:#}");
        }
    }

    fn forget(&self, key: &str) {
        if let Err(err) = self.store.remove(key) {
            warn!("failed to remove {key}: {err:#}");
        }
    }
}
