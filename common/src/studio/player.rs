//! Preview slideshow state machine.
//!
//! The player never owns the iteration list: the caller passes the current
//! slice to every operation, so edits made in the data manager are seen on
//! the next call. The frontend arms a single timer for
//! [`PreviewPlayer::remaining_dwell_ms`] and calls
//! [`PreviewPlayer::timer_fired`] when it expires; [`PreviewPlayer::advance_by`]
//! drives the same transitions from an elapsed-time count.

use crate::model::iteration::{DataIteration, IterationValues, DEFAULT_DURATION_MS};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewPlayer {
    current_index: usize,
    is_playing: bool,
    /// Time already spent on the current iteration.
    elapsed_ms: u64,
}

impl PreviewPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Starts playback. Returns `false`, and stays paused, when there is
    /// nothing to play.
    pub fn play(&mut self, iterations: &[DataIteration]) -> bool {
        if iterations.is_empty() {
            return false;
        }
        self.sync(iterations);
        self.is_playing = true;
        self.elapsed_ms = 0;
        true
    }

    pub fn pause(&mut self) {
        self.is_playing = false;
        self.elapsed_ms = 0;
    }

    pub fn next(&mut self, iterations: &[DataIteration]) {
        let count = iterations.len();
        if count == 0 {
            return;
        }
        self.current_index = (self.current_index + 1) % count;
        self.elapsed_ms = 0;
    }

    pub fn previous(&mut self, iterations: &[DataIteration]) {
        let count = iterations.len();
        if count == 0 {
            return;
        }
        self.current_index = (self.current_index % count + count - 1) % count;
        self.elapsed_ms = 0;
    }

    /// Reconciles the player with an edited iteration list: the index is
    /// clamped to the last iteration and playback stops when the list is
    /// empty.
    pub fn sync(&mut self, iterations: &[DataIteration]) {
        if iterations.is_empty() {
            self.current_index = 0;
            self.is_playing = false;
            self.elapsed_ms = 0;
        } else if self.current_index >= iterations.len() {
            self.current_index = iterations.len() - 1;
            self.elapsed_ms = 0;
        }
    }

    /// Milliseconds until the current iteration hands over to the next one,
    /// or `None` when no timer should be armed.
    pub fn remaining_dwell_ms(&self, iterations: &[DataIteration]) -> Option<u64> {
        if !self.is_playing {
            return None;
        }
        let current = iterations.get(self.current_index)?;
        Some(dwell_ms(current).saturating_sub(self.elapsed_ms))
    }

    /// The armed timer expired: move on to the next iteration.
    pub fn timer_fired(&mut self, iterations: &[DataIteration]) {
        if self.is_playing {
            self.next(iterations);
        }
    }

    /// Lets `elapsed_ms` of playback pass, stepping through as many
    /// iterations as their durations allow.
    pub fn advance_by(&mut self, iterations: &[DataIteration], elapsed_ms: u64) {
        self.sync(iterations);
        let mut left = elapsed_ms;
        while let Some(remaining) = self.remaining_dwell_ms(iterations) {
            if left < remaining {
                self.elapsed_ms += left;
                return;
            }
            left -= remaining;
            self.next(iterations);
        }
    }

    pub fn current<'a>(&self, iterations: &'a [DataIteration]) -> Option<&'a DataIteration> {
        iterations.get(self.current_index)
    }

    pub fn current_values<'a>(&self, iterations: &'a [DataIteration]) -> Option<&'a IterationValues> {
        self.current(iterations).map(|iteration| &iteration.values)
    }

    pub fn status_label(&self, iterations: &[DataIteration]) -> String {
        if iterations.is_empty() {
            "No iterations to preview".to_string()
        } else {
            format!(
                "Iteration {} of {}",
                self.current_index.min(iterations.len() - 1) + 1,
                iterations.len()
            )
        }
    }
}

/// A zero duration in an imported document falls back to the default.
fn dwell_ms(iteration: &DataIteration) -> u64 {
    if iteration.duration == 0 {
        DEFAULT_DURATION_MS
    } else {
        iteration.duration
    }
}
