//! Purpose-keyed timers polled from the frame tick.
//!
//! Every timer the canvas needs (countdown, hint, preview rotation) lives in
//! one [`Scheduler`], so teardown can cancel all of them at once and
//! re-scheduling a purpose always replaces the previous handle. Time is
//! whatever `Instant` the caller passes to [`Scheduler::poll`]; nothing
//! here reads the clock.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::time::{Duration, Instant};

use crate::constants::timers;

/// Timer purposes used by the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TimerKey {
    AutoNavCountdown,
    AutoNavHint,
    PreviewRotation,
}

#[derive(Debug, Clone, Copy)]
struct TimerEntry {
    deadline: Instant,
    interval: Option<Duration>,
}

/// Cancelable one-shot and repeating timers, at most one per key.
pub struct Scheduler<K> {
    entries: HashMap<K, TimerEntry>,
    max_fires_per_poll: usize,
}

impl<K> fmt::Debug for Scheduler<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scheduler")
            .field("pending", &self.entries.keys().collect::<Vec<_>>())
            .field("max_fires_per_poll", &self.max_fires_per_poll)
            .finish()
    }
}

impl<K> Default for Scheduler<K> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            max_fires_per_poll: timers::MAX_FIRES_PER_POLL,
        }
    }
}

impl<K> Scheduler<K>
where
    K: Copy + Eq + Hash + Ord + fmt::Debug,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire once at `now + delay`, replacing any timer for `key`.
    pub fn schedule_once(&mut self, key: K, now: Instant, delay: Duration) {
        self.entries.insert(
            key,
            TimerEntry {
                deadline: now + delay,
                interval: None,
            },
        );
    }

    /// Fire every `interval` starting at `now + interval`, replacing any
    /// timer for `key`. A zero interval is treated as one millisecond.
    pub fn schedule_repeating(
        &mut self,
        key: K,
        now: Instant,
        interval: Duration,
    ) {
        let interval = interval.max(Duration::from_millis(1));
        self.entries.insert(
            key,
            TimerEntry {
                deadline: now + interval,
                interval: Some(interval),
            },
        );
    }

    /// Remove the timer for `key`. Returns whether one was pending.
    pub fn cancel(&mut self, key: K) -> bool {
        self.entries.remove(&key).is_some()
    }

    /// Remove every timer. Returns how many were pending.
    pub fn cancel_all(&mut self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        if count > 0 {
            log::debug!("cancelled {count} pending timers");
        }
        count
    }

    pub fn is_scheduled(&self, key: K) -> bool {
        self.entries.contains_key(&key)
    }

    pub fn deadline(&self, key: K) -> Option<Instant> {
        self.entries.get(&key).map(|entry| entry.deadline)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Collect every event due at `now`, in deadline order (ties by key).
    ///
    /// A repeating timer that fell several intervals behind fires once per
    /// elapsed interval. Past the per-poll bound, overdue repeating timers
    /// are re-based to `now + interval` and the backlog is dropped.
    pub fn poll(&mut self, now: Instant) -> Vec<K> {
        let mut fired = Vec::new();
        while fired.len() < self.max_fires_per_poll {
            let next = self
                .entries
                .iter()
                .filter(|(_, entry)| entry.deadline <= now)
                .min_by_key(|(key, entry)| (entry.deadline, **key))
                .map(|(key, _)| *key);
            let Some(key) = next else {
                return fired;
            };
            fired.push(key);
            match self.entries.get_mut(&key) {
                Some(TimerEntry {
                    deadline,
                    interval: Some(interval),
                }) => *deadline += *interval,
                _ => {
                    self.entries.remove(&key);
                }
            }
        }

        let mut dropped = 0usize;
        for entry in self.entries.values_mut() {
            if let Some(interval) = entry.interval
                && entry.deadline <= now
            {
                entry.deadline = now + interval;
                dropped += 1;
            }
        }
        if dropped > 0 {
            log::warn!(
                "timer backlog exceeded {} events; re-based {dropped} timers",
                self.max_fires_per_poll
            );
        }
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn one_shot_fires_once() {
        let t0 = Instant::now();
        let mut timers = Scheduler::new();
        timers.schedule_once(TimerKey::AutoNavHint, t0, ms(4000));
        assert!(timers.poll(t0 + ms(3999)).is_empty());
        assert_eq!(timers.poll(t0 + ms(4000)), vec![TimerKey::AutoNavHint]);
        assert!(timers.poll(t0 + ms(9000)).is_empty());
        assert!(!timers.is_scheduled(TimerKey::AutoNavHint));
    }

    #[test]
    fn repeating_catches_up_per_interval() {
        let t0 = Instant::now();
        let mut timers = Scheduler::new();
        timers.schedule_repeating(TimerKey::PreviewRotation, t0, ms(500));
        let fired = timers.poll(t0 + ms(1600));
        assert_eq!(fired, vec![TimerKey::PreviewRotation; 3]);
        assert_eq!(
            timers.deadline(TimerKey::PreviewRotation),
            Some(t0 + ms(2000))
        );
    }

    #[test]
    fn events_come_out_in_deadline_order() {
        let t0 = Instant::now();
        let mut timers = Scheduler::new();
        timers.schedule_repeating(TimerKey::PreviewRotation, t0, ms(500));
        timers.schedule_repeating(TimerKey::AutoNavCountdown, t0, ms(1000));
        let fired = timers.poll(t0 + ms(1000));
        assert_eq!(
            fired,
            vec![
                TimerKey::PreviewRotation,
                TimerKey::AutoNavCountdown,
                TimerKey::PreviewRotation,
            ]
        );
    }

    #[test]
    fn cancel_is_idempotent() {
        let t0 = Instant::now();
        let mut timers = Scheduler::new();
        timers.schedule_once(TimerKey::AutoNavHint, t0, ms(10));
        assert!(timers.cancel(TimerKey::AutoNavHint));
        assert!(!timers.cancel(TimerKey::AutoNavHint));
        assert!(timers.poll(t0 + ms(20)).is_empty());
    }

    #[test]
    fn rescheduling_replaces_the_handle() {
        let t0 = Instant::now();
        let mut timers = Scheduler::new();
        timers.schedule_once(TimerKey::AutoNavHint, t0, ms(10));
        timers.schedule_once(TimerKey::AutoNavHint, t0, ms(100));
        assert_eq!(timers.len(), 1);
        assert!(timers.poll(t0 + ms(50)).is_empty());
    }

    #[test]
    fn backlog_is_bounded() {
        let t0 = Instant::now();
        let mut timers = Scheduler::new();
        timers.schedule_repeating(TimerKey::PreviewRotation, t0, ms(1));
        let now = t0 + ms(1000);
        assert_eq!(
            timers.poll(now).len(),
            crate::constants::timers::MAX_FIRES_PER_POLL
        );
        assert_eq!(timers.deadline(TimerKey::PreviewRotation), Some(now + ms(1)));
        assert!(timers.poll(now).is_empty());
    }

    #[test]
    fn cancel_all_empties_the_scheduler() {
        let t0 = Instant::now();
        let mut timers = Scheduler::new();
        timers.schedule_once(TimerKey::AutoNavHint, t0, ms(10));
        timers.schedule_repeating(TimerKey::AutoNavCountdown, t0, ms(1000));
        assert_eq!(timers.cancel_all(), 2);
        assert!(timers.is_empty());
    }
}
