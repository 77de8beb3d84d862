//! Deferred, cancelable timers keyed by virtual time.
//!
//! The widget never blocks: "wait three seconds, then show results" is a
//! timer entry in a [`TimerQueue`]. The owner advances the clock and pops due
//! entries one at a time, which keeps firing order deterministic (deadline
//! first, then arming order) and makes the whole pipeline testable without
//! real sleeps.
//!
//! Every entry carries the [`SearchToken`] of the submission that armed it.
//! A newer submission bumps the token, and stale entries are both pruned from
//! the queue and ignored if they fire anyway.

use std::time::Duration;

/// Generation number of a query submission.
///
/// Captured when a timer is armed and compared against the current token
/// when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SearchToken(u64);

impl SearchToken {
    /// Token for the next submission.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

/// What a timer does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Searching → Results.
    SearchComplete,
    /// Results: sources finished loading.
    SourcesComplete,
    /// Searching: rotate the "Searching through …" word.
    SearchingTick,
}

/// A timer identity: its kind plus the submission it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Timer {
    pub kind: TimerKind,
    pub token: SearchToken,
}

impl Timer {
    #[must_use]
    pub const fn new(kind: TimerKind, token: SearchToken) -> Self {
        Self { kind, token }
    }
}

#[derive(Debug, Clone)]
struct Pending {
    deadline: Duration,
    seq: u64,
    timer: Timer,
}

/// Ordered set of pending timers.
#[derive(Debug, Clone, Default)]
pub struct TimerQueue {
    pending: Vec<Pending>,
    next_seq: u64,
}

impl TimerQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms `timer` to fire at `deadline`.
    pub fn schedule(&mut self, deadline: Duration, timer: Timer) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(Pending { deadline, seq, timer });
        tracing::trace!(?timer, deadline_ms = deadline.as_millis(), "timer armed");
    }

    /// Removes and returns the earliest timer due at or before `now`.
    pub fn pop_due(&mut self, now: Duration) -> Option<(Duration, Timer)> {
        let idx = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.deadline <= now)
            .min_by_key(|(_, p)| (p.deadline, p.seq))
            .map(|(idx, _)| idx)?;

        let entry = self.pending.remove(idx);
        Some((entry.deadline, entry.timer))
    }

    /// Drops every timer armed by a submission older than `current`.
    ///
    /// Returns how many entries were cancelled.
    pub fn cancel_stale(&mut self, current: SearchToken) -> usize {
        let before = self.pending.len();
        self.pending.retain(|p| p.timer.token >= current);
        let cancelled = before - self.pending.len();
        if cancelled > 0 {
            tracing::debug!(cancelled, current = current.value(), "stale timers cancelled");
        }
        cancelled
    }

    /// Cancels everything.
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    /// Deadline of the earliest pending timer.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.iter().map(|p| p.deadline).min()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

/// The single host timeout that wakes the widget for its next deadline.
///
/// Records which controller deadline the pending host timeout was requested
/// for, so a new one is only requested when something earlier comes due.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HostTimeout {
    armed: Option<Duration>,
}

impl HostTimeout {
    #[must_use]
    pub const fn new() -> Self {
        Self { armed: None }
    }

    /// Decides whether the host must be asked for a new timeout.
    ///
    /// # Parameters
    ///
    /// - `next`: The controller's earliest pending deadline, if any
    /// - `now`: Current virtual time
    ///
    /// # Returns
    ///
    /// How long the host should wait, or `None` when nothing is pending or the
    /// timeout already requested fires no later than `next`.
    pub fn rearm(&mut self, next: Option<Duration>, now: Duration) -> Option<Duration> {
        let deadline = next?;
        if self.armed.is_some_and(|armed| armed <= deadline) {
            return None;
        }
        self.armed = Some(deadline);
        Some(deadline.saturating_sub(now))
    }

    /// Forgets the pending timeout, after it fired or the widget reset.
    ///
    /// A host timeout can fire a little before the wall clock reaches its
    /// deadline; forgetting it unconditionally lets the next [`rearm`] cover
    /// whatever is still pending.
    ///
    /// [`rearm`]: Self::rearm
    pub fn clear(&mut self) {
        self.armed = None;
    }

    #[must_use]
    pub const fn armed(&self) -> Option<Duration> {
        self.armed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn nothing_is_due_before_its_deadline() {
        let mut queue = TimerQueue::new();
        let token = SearchToken::default().next();
        queue.schedule(ms(100), Timer::new(TimerKind::SearchComplete, token));

        assert_eq!(queue.pop_due(ms(99)), None);
        assert_eq!(
            queue.pop_due(ms(100)),
            Some((ms(100), Timer::new(TimerKind::SearchComplete, token)))
        );
        assert!(queue.is_empty());
    }

    #[test]
    fn earliest_deadline_pops_first_and_ties_keep_arming_order() {
        let mut queue = TimerQueue::new();
        let token = SearchToken::default();
        queue.schedule(ms(50), Timer::new(TimerKind::SearchingTick, token));
        queue.schedule(ms(20), Timer::new(TimerKind::SearchComplete, token));
        queue.schedule(ms(20), Timer::new(TimerKind::SourcesComplete, token));

        let order: Vec<TimerKind> = std::iter::from_fn(|| queue.pop_due(ms(1_000)))
            .map(|(_, t)| t.kind)
            .collect();
        assert_eq!(
            order,
            vec![
                TimerKind::SearchComplete,
                TimerKind::SourcesComplete,
                TimerKind::SearchingTick
            ]
        );
    }

    #[test]
    fn cancel_stale_keeps_current_generation() {
        let mut queue = TimerQueue::new();
        let old = SearchToken::default().next();
        let new = old.next();
        queue.schedule(ms(10), Timer::new(TimerKind::SearchComplete, old));
        queue.schedule(ms(30), Timer::new(TimerKind::SearchComplete, new));

        assert_eq!(queue.cancel_stale(new), 1);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.next_deadline(), Some(ms(30)));
    }

    #[test]
    fn host_timeout_is_only_requested_for_an_earlier_deadline() {
        let mut timeout = HostTimeout::new();
        assert_eq!(timeout.rearm(None, ms(0)), None);

        assert_eq!(timeout.rearm(Some(ms(3_000)), ms(0)), Some(ms(3_000)));
        assert_eq!(timeout.rearm(Some(ms(6_000)), ms(10)), None);
        assert_eq!(timeout.rearm(Some(ms(1_000)), ms(10)), Some(ms(990)));
        assert_eq!(timeout.armed(), Some(ms(1_000)));
    }

    #[test]
    fn early_host_timeout_is_requested_again() {
        let mut timeout = HostTimeout::new();
        timeout.rearm(Some(ms(3_000)), ms(0));

        // Woken at 2999 ms: the deadline has not passed on the wall clock.
        timeout.clear();
        assert_eq!(timeout.rearm(Some(ms(3_000)), ms(2_999)), Some(ms(1)));
    }

    #[test]
    fn overdue_deadline_asks_for_an_immediate_wake() {
        let mut timeout = HostTimeout::new();
        assert_eq!(timeout.rearm(Some(ms(100)), ms(250)), Some(Duration::ZERO));
    }

    #[test]
    fn clear_empties_the_queue() {
        let mut queue = TimerQueue::new();
        queue.schedule(ms(1), Timer::new(TimerKind::SearchComplete, SearchToken::default()));
        queue.clear();
        assert_eq!(queue.next_deadline(), None);
        assert_eq!(queue.pop_due(ms(10)), None);
    }
}
