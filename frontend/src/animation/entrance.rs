//! One-shot entrance lifecycle.
//!
//! An [`EntranceController`] is created per component instance. The first
//! `attach` starts the transition; every later `attach` (a re-render of the
//! same instance) is ignored, so the entrance only ever plays once. `detach`
//! abandons a transition that is still running.

use super::Transition;
use crate::types::VisualState;

/// Lifecycle phase of an entrance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Not yet attached to the render tree.
    Detached,
    /// Attached, frames are being produced.
    Running,
    /// Target state reached (or skipped to).
    Settled,
    /// Detached before settling.
    Abandoned,
}

#[derive(Debug)]
pub struct EntranceController {
    transition: Transition,
    phase: Phase,
    started_at: Option<f64>,
    current: VisualState,
}

impl EntranceController {
    pub fn new(transition: Transition) -> Self {
        Self {
            transition,
            phase: Phase::Detached,
            started_at: None,
            current: transition.from(),
        }
    }

    pub fn transition(&self) -> &Transition {
        &self.transition
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// State rendered for the most recent frame.
    pub fn current(&self) -> VisualState {
        self.current
    }

    pub fn is_settled(&self) -> bool {
        self.phase == Phase::Settled
    }

    /// Start the transition at `now` (seconds). Returns `false` if it was
    /// already started, settled or abandoned.
    pub fn attach(&mut self, now: f64) -> bool {
        if self.phase != Phase::Detached {
            return false;
        }
        self.started_at = Some(now);
        self.phase = Phase::Running;
        true
    }

    /// Advance to `now` (seconds) and return the state to render.
    pub fn frame(&mut self, now: f64) -> VisualState {
        if let (Phase::Running, Some(start)) = (self.phase, self.started_at) {
            let elapsed = (now - start).max(0.0);
            self.current = self.transition.sample(elapsed);
            if elapsed >= self.transition.total() {
                self.current = self.transition.to();
                self.phase = Phase::Settled;
            }
        }
        self.current
    }

    /// Jump straight to the target state.
    pub fn skip(&mut self) -> VisualState {
        if self.phase != Phase::Abandoned {
            self.current = self.transition.to();
            self.phase = Phase::Settled;
        }
        self.current
    }

    /// Leave the render tree. A running transition is abandoned.
    pub fn detach(&mut self) {
        if matches!(self.phase, Phase::Detached | Phase::Running) {
            self.phase = Phase::Abandoned;
        }
    }
}
