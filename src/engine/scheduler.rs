//! One-shot, cancellable timers for the pacing loop.
//!
//! The engine never sleeps. It arms a timer and returns; the host polls its
//! scheduler and hands expired timers back through `Pacer::tick`.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

pub trait Scheduler {
    /// Arms a one-shot timer firing after `delay`.
    fn schedule(&mut self, delay: Duration) -> TimerId;

    /// Disarms `id`. Unknown or already fired ids are ignored.
    fn cancel(&mut self, id: TimerId);

    /// Removes and returns the earliest expired timer.
    fn poll_due(&mut self) -> Option<TimerId>;

    /// Time left until the earliest pending timer expires.
    fn time_until_next(&self) -> Option<Duration>;
}

#[derive(Debug)]
struct TimerQueue<T> {
    next_id: u64,
    pending: Vec<(TimerId, T)>,
}

impl<T: Copy + Ord> TimerQueue<T> {
    fn new() -> Self {
        Self {
            next_id: 0,
            pending: Vec::new(),
        }
    }

    fn insert(&mut self, deadline: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push((id, deadline));
        id
    }

    fn remove(&mut self, id: TimerId) {
        self.pending.retain(|(pending_id, _)| *pending_id != id);
    }

    fn earliest(&self) -> Option<T> {
        self.pending.iter().map(|&(_, deadline)| deadline).min()
    }

    fn pop_due(&mut self, now: T) -> Option<TimerId> {
        let position = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, (_, deadline))| *deadline <= now)
            .min_by_key(|(_, (_, deadline))| *deadline)
            .map(|(position, _)| position)?;
        Some(self.pending.remove(position).0)
    }
}

/// Scheduler on a virtual clock that only moves when told to.
#[derive(Debug)]
pub struct ManualScheduler {
    now: Duration,
    queue: TimerQueue<Duration>,
    requested: Vec<Duration>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            queue: TimerQueue::new(),
            requested: Vec::new(),
        }
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn advance(&mut self, by: Duration) {
        self.now += by;
    }

    /// Moves the clock to the earliest deadline and pops that timer.
    pub fn advance_to_next(&mut self) -> Option<TimerId> {
        let deadline = self.queue.earliest()?;
        self.now = self.now.max(deadline);
        self.poll_due()
    }

    pub fn pending(&self) -> usize {
        self.queue.pending.len()
    }

    /// Every delay ever passed to `schedule`, in order.
    pub fn requested_delays(&self) -> &[Duration] {
        &self.requested
    }
}

impl Default for ManualScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, delay: Duration) -> TimerId {
        self.requested.push(delay);
        self.queue.insert(self.now + delay)
    }

    fn cancel(&mut self, id: TimerId) {
        self.queue.remove(id);
    }

    fn poll_due(&mut self) -> Option<TimerId> {
        self.queue.pop_due(self.now)
    }

    fn time_until_next(&self) -> Option<Duration> {
        self.queue
            .earliest()
            .map(|deadline| deadline.saturating_sub(self.now))
    }
}

/// Scheduler backed by `Instant`, polled by an interactive event loop.
#[derive(Debug)]
pub struct WallClockScheduler {
    queue: TimerQueue<Instant>,
}

impl WallClockScheduler {
    pub fn new() -> Self {
        Self {
            queue: TimerQueue::new(),
        }
    }
}

impl Default for WallClockScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for WallClockScheduler {
    fn schedule(&mut self, delay: Duration) -> TimerId {
        self.queue.insert(Instant::now() + delay)
    }

    fn cancel(&mut self, id: TimerId) {
        self.queue.remove(id);
    }

    fn poll_due(&mut self) -> Option<TimerId> {
        self.queue.pop_due(Instant::now())
    }

    fn time_until_next(&self) -> Option<Duration> {
        self.queue
            .earliest()
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }
}
