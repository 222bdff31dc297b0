//! Timed interpolation between two visual states.

use crate::types::{AppError, AppResult, Easing, VisualState};

/// A one-shot entrance transition.
///
/// Times are in seconds. `sample(t)` holds `from` until `delay`, eases
/// towards `to` over `duration`, then holds `to` forever.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    from: VisualState,
    to: VisualState,
    duration: f64,
    delay: f64,
    easing: Easing,
}

impl Transition {
    /// Instant transition from `from` to `to`; chain [`lasting`](Self::lasting)
    /// and [`delayed`](Self::delayed) to time it.
    pub const fn between(from: VisualState, to: VisualState) -> Self {
        Self {
            from,
            to,
            duration: 0.0,
            delay: 0.0,
            easing: Easing::EaseOut,
        }
    }

    pub const fn lasting(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }

    pub const fn delayed(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    pub const fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Build a validated transition.
    pub fn new(from: VisualState, to: VisualState, duration: f64, delay: f64) -> AppResult<Self> {
        let transition = Self::between(from, to).lasting(duration).delayed(delay);
        transition.validate()?;
        Ok(transition)
    }

    /// Check that duration and delay are finite and non-negative.
    pub fn validate(&self) -> AppResult<()> {
        for (name, value) in [("duration", self.duration), ("delay", self.delay)] {
            if !value.is_finite() || value < 0.0 {
                return Err(AppError::Animation(format!(
                    "{} must be finite and non-negative, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    pub fn from(&self) -> VisualState {
        self.from
    }

    pub fn to(&self) -> VisualState {
        self.to
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn delay(&self) -> f64 {
        self.delay
    }

    /// Time from start until the target state is reached.
    pub fn total(&self) -> f64 {
        self.delay + self.duration
    }

    /// Linear progress in `[0, 1]` at `elapsed` seconds after start.
    pub fn progress(&self, elapsed: f64) -> f64 {
        if elapsed.is_nan() || elapsed < self.delay {
            return 0.0;
        }
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((elapsed - self.delay) / self.duration).clamp(0.0, 1.0)
    }

    /// Visual state at `elapsed` seconds after start.
    pub fn sample(&self, elapsed: f64) -> VisualState {
        let p = self.progress(elapsed);
        if p >= 1.0 {
            self.to
        } else {
            self.from.lerp(&self.to, self.easing.apply(p))
        }
    }

    /// Value-over-time producer for this transition.
    pub fn producer(self) -> impl Fn(f64) -> VisualState {
        move |elapsed| self.sample(elapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CARD_ENTRANCE, TEXT_ENTRANCE};

    #[test]
    fn test_text_entrance_timing() {
        assert_eq!(TEXT_ENTRANCE.from(), VisualState::new(0.0, 20.0, 0.0));
        assert_eq!(TEXT_ENTRANCE.to(), VisualState::SETTLED);
        assert_eq!(TEXT_ENTRANCE.duration(), 0.5);
        assert_eq!(TEXT_ENTRANCE.delay(), 0.0);
    }

    #[test]
    fn test_card_entrance_timing() {
        assert_eq!(CARD_ENTRANCE.from(), VisualState::new(0.0, 0.0, -5.0));
        assert_eq!(CARD_ENTRANCE.to(), VisualState::SETTLED);
        assert_eq!(CARD_ENTRANCE.duration(), 1.0);
        assert_eq!(CARD_ENTRANCE.delay(), 0.3);
        assert!(CARD_ENTRANCE.delay() > TEXT_ENTRANCE.delay());
    }

    #[test]
    fn test_sample_holds_from_before_delay() {
        assert_eq!(CARD_ENTRANCE.sample(0.0), CARD_ENTRANCE.from());
        assert_eq!(CARD_ENTRANCE.sample(0.29), CARD_ENTRANCE.from());
        assert_eq!(CARD_ENTRANCE.sample(-1.0), CARD_ENTRANCE.from());
    }

    #[test]
    fn test_sample_settles_at_target() {
        assert_eq!(TEXT_ENTRANCE.sample(0.5), VisualState::SETTLED);
        assert_eq!(TEXT_ENTRANCE.sample(60.0), VisualState::SETTLED);
        assert_eq!(CARD_ENTRANCE.sample(1.31), VisualState::SETTLED);
        assert_eq!(CARD_ENTRANCE.sample(f64::INFINITY), VisualState::SETTLED);
    }

    #[test]
    fn test_sample_is_monotonic() {
        let produce = TEXT_ENTRANCE.producer();
        let mut last = produce(0.0);
        for step in 1..=50 {
            let next = produce(step as f64 * 0.01);
            assert!(next.opacity >= last.opacity);
            assert!(next.offset_y <= last.offset_y);
            last = next;
        }
        assert_eq!(last, VisualState::SETTLED);
    }

    #[test]
    fn test_linear_midpoint() {
        let linear = TEXT_ENTRANCE.with_easing(Easing::Linear);
        let mid = linear.sample(0.25);
        assert_eq!(mid.opacity, 0.5);
        assert_eq!(mid.offset_y, 10.0);
    }

    #[test]
    fn test_zero_duration_jumps_at_delay() {
        let t = Transition::new(VisualState::new(0.0, 0.0, 0.0), VisualState::SETTLED, 0.0, 0.2)
            .unwrap();
        assert_eq!(t.sample(0.1).opacity, 0.0);
        assert_eq!(t.sample(0.2), VisualState::SETTLED);
    }

    #[test]
    fn test_nan_elapsed_is_not_started() {
        assert_eq!(TEXT_ENTRANCE.sample(f64::NAN), TEXT_ENTRANCE.from());
    }

    #[test]
    fn test_invalid_timing_rejected() {
        let from = VisualState::new(0.0, 0.0, 0.0);
        assert!(Transition::new(from, VisualState::SETTLED, -1.0, 0.0).is_err());
        assert!(Transition::new(from, VisualState::SETTLED, 1.0, f64::NAN).is_err());
        assert!(Transition::new(from, VisualState::SETTLED, f64::INFINITY, 0.0).is_err());
        assert!(TEXT_ENTRANCE.validate().is_ok());
        assert!(CARD_ENTRANCE.validate().is_ok());
    }
}
