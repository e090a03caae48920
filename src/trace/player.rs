//! Cursor for stepping through a finished trace.

use super::Trace;
use crate::models::Snapshot;

/// A replay cursor over a borrowed [`Trace`].
///
/// Supports forward/backward stepping and random access. Positions are
/// clamped to the trace bounds; playback pacing is left to the caller.
///
/// # Example
///
/// ```
/// use u_cpusched::models::ProcessDescriptor;
/// use u_cpusched::policy::Policy;
/// use u_cpusched::simulation::simulate;
/// use u_cpusched::trace::TracePlayer;
///
/// let outcome = simulate(Policy::Fcfs, &[ProcessDescriptor::new(1, 0, 2)]).unwrap();
/// let mut player = TracePlayer::new(outcome.trace());
/// player.step_forward();
/// assert_eq!(player.position(), 1);
/// player.seek(usize::MAX);
/// assert!(player.is_at_end());
/// ```
#[derive(Debug, Clone)]
pub struct TracePlayer<'a> {
    trace: &'a Trace,
    position: usize,
    exhausted: bool,
}

impl<'a> TracePlayer<'a> {
    /// Creates a player positioned at the first snapshot.
    pub fn new(trace: &'a Trace) -> Self {
        Self {
            trace,
            position: 0,
            exhausted: false,
        }
    }

    /// Current index.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Snapshot at the current index.
    pub fn current(&self) -> Option<&'a Snapshot> {
        self.trace.get(self.position)
    }

    /// Total number of snapshots.
    pub fn total_steps(&self) -> usize {
        self.trace.len()
    }

    fn last_index(&self) -> usize {
        self.trace.len().saturating_sub(1)
    }

    /// Advances one snapshot. Returns `false` at the end.
    pub fn step_forward(&mut self) -> bool {
        if self.position < self.last_index() {
            self.position += 1;
            true
        } else {
            false
        }
    }

    /// Moves back one snapshot. Returns `false` at the start.
    pub fn step_backward(&mut self) -> bool {
        self.exhausted = false;
        if self.position > 0 {
            self.position -= 1;
            true
        } else {
            false
        }
    }

    /// Jumps to `index`, clamped to the trace. Returns the new position.
    pub fn seek(&mut self, index: usize) -> usize {
        self.exhausted = false;
        self.position = index.min(self.last_index());
        self.position
    }

    /// Returns to the first snapshot.
    pub fn reset(&mut self) {
        self.exhausted = false;
        self.position = 0;
    }

    pub fn is_at_start(&self) -> bool {
        self.position == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.last_index()
    }

    /// Fraction of the trace already shown (0.0..=1.0).
    pub fn progress(&self) -> f64 {
        let last = self.last_index();
        if last == 0 {
            1.0
        } else {
            self.position as f64 / last as f64
        }
    }
}

impl<'a> Iterator for TracePlayer<'a> {
    type Item = &'a Snapshot;

    /// Yields the current snapshot, then advances. Ends after the terminal
    /// one, leaving the cursor on it; `seek`, `reset` or `step_backward`
    /// rewind the iteration.
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let item = self.current();
        if !self.step_forward() {
            self.exhausted = true;
        }
        item
    }
}
