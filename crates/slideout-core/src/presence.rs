//! Mount/unmount tracking with exit animations.
//!
//! An element that is closed keeps its mount until the closing animation has
//! run, then disappears. Reopening before that point cancels the removal and
//! animates back from wherever the exit had reached.

use std::time::{Duration, Instant};

use crate::animation::{Animator, Easing};
use crate::types::VisualState;

/// Lifecycle phase of an element with exit animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Not mounted.
    Hidden,
    /// Mounted and open (or opening).
    Present,
    /// Mounted while the closing animation runs.
    Exiting,
}

/// Snapshot of what to render at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Whether the element should be in the tree.
    pub mounted: bool,
    /// Animation progress, 0.0 closed to 1.0 open.
    pub progress: f64,
}

impl Frame {
    /// Frame of an element resting in `state`.
    pub fn settled(state: VisualState) -> Self {
        Self {
            mounted: state == VisualState::Open,
            progress: state.progress(),
        }
    }
}

/// Tracks presence and animation of one element.
#[derive(Debug, Clone)]
pub struct PresenceTracker {
    phase: Phase,
    animator: Animator,
}

impl PresenceTracker {
    /// Creates a tracker resting in the state given by `is_open`.
    ///
    /// A tracker created open starts at the closed value and animates in,
    /// matching an element that enters on its first render.
    pub fn new(is_open: bool, duration: Duration, easing: Easing, now: Instant) -> Self {
        let mut animator = Animator::new(VisualState::Closed, duration, easing, now);
        let phase = if is_open {
            animator.retarget(VisualState::Open, now);
            Phase::Present
        } else {
            Phase::Hidden
        };
        Self { phase, animator }
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns true if the tracker is open or opening.
    pub fn is_open(&self) -> bool {
        self.phase == Phase::Present
    }

    /// Changes the full-travel duration for later transitions.
    pub fn set_duration(&mut self, duration: Duration) {
        self.animator.set_duration(duration);
    }

    /// Applies a new open flag. Returns true if the phase changed.
    pub fn set_open(&mut self, is_open: bool, now: Instant) -> bool {
        let next = match (self.phase, is_open) {
            (Phase::Hidden | Phase::Exiting, true) => Phase::Present,
            (Phase::Present, false) => Phase::Exiting,
            _ => return false,
        };

        if self.phase == Phase::Exiting {
            tracing::debug!("Exit interrupted, reopening");
        }
        self.animator
            .retarget(VisualState::from_open(is_open), now);
        self.phase = next;
        true
    }

    /// Advances time, finishing an exit whose animation has completed.
    pub fn tick(&mut self, now: Instant) -> Frame {
        if self.phase == Phase::Exiting && self.animator.is_settled(now) {
            self.phase = Phase::Hidden;
        }
        self.frame(now)
    }

    /// Frame at `now` without advancing the phase.
    pub fn frame(&self, now: Instant) -> Frame {
        Frame {
            mounted: self.phase != Phase::Hidden,
            progress: self.animator.value_at(now),
        }
    }

    /// Returns true when no further ticks would change anything.
    pub fn is_settled(&self, now: Instant) -> bool {
        self.phase != Phase::Exiting && self.animator.is_settled(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    fn tracker(is_open: bool, now: Instant) -> PresenceTracker {
        PresenceTracker::new(is_open, 100 * MS, Easing::Linear, now)
    }

    #[test]
    fn test_closed_tracker_is_hidden() {
        let now = Instant::now();
        let tracker = tracker(false, now);
        assert_eq!(tracker.frame(now), Frame::settled(VisualState::Closed));
        assert!(tracker.is_settled(now));
    }

    #[test]
    fn test_initially_open_animates_in() {
        let now = Instant::now();
        let mut tracker = tracker(true, now);
        let frame = tracker.tick(now);
        assert!(frame.mounted);
        assert_eq!(frame.progress, 0.0);
        assert_eq!(tracker.tick(now + 100 * MS), Frame::settled(VisualState::Open));
    }

    #[test]
    fn test_exit_keeps_mount_until_done() {
        let start = Instant::now();
        let mut tracker = tracker(true, start);
        let opened = start + 100 * MS;
        tracker.tick(opened);

        assert!(tracker.set_open(false, opened));
        assert_eq!(tracker.phase(), Phase::Exiting);

        let during = tracker.tick(opened + 50 * MS);
        assert!(during.mounted);
        assert!(during.progress > 0.0 && during.progress < 1.0);
        assert!(!tracker.is_settled(opened + 50 * MS));

        let after = tracker.tick(opened + 100 * MS);
        assert!(!after.mounted);
        assert_eq!(tracker.phase(), Phase::Hidden);
        assert!(tracker.is_settled(opened + 100 * MS));
    }

    #[test]
    fn test_reopen_cancels_exit() {
        let start = Instant::now();
        let mut tracker = tracker(true, start);
        let opened = start + 100 * MS;
        tracker.tick(opened);

        tracker.set_open(false, opened);
        let mid = opened + 30 * MS;
        tracker.tick(mid);
        assert!(tracker.set_open(true, mid));
        assert_eq!(tracker.phase(), Phase::Present);

        // Long after the exit would have finished, the element is still there.
        let frame = tracker.tick(opened + 500 * MS);
        assert!(frame.mounted);
        assert_eq!(frame.progress, 1.0);
    }

    #[test]
    fn test_redundant_updates_ignored() {
        let now = Instant::now();
        let mut tracker = tracker(false, now);
        assert!(!tracker.set_open(false, now));
        assert!(tracker.set_open(true, now));
        assert!(!tracker.set_open(true, now));
    }
}
