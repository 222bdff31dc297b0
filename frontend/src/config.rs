//! Application configuration.
//!
//! Centralized configuration for the Innovation Cell frontend.
//! Routes, asset paths and entrance timings are fixed at compile time;
//! the hero copy lives in `assets/hero.json` (see [`crate::services::content`]).

use crate::animation::Transition;
use crate::types::VisualState;

/// Site name, used for the document title.
pub const SITE_NAME: &str = "Innovation Cell";

/// Client-side route of the events page (primary hero action).
pub const EVENTS_PATH: &str = "/events";

/// Client-side route of the registration page (secondary hero action).
pub const REGISTER_PATH: &str = "/register";

/// Logo shown on the hero visual card.
pub const LOGO_PATH: &str = "/assets/logo.svg";

/// Text block entrance: fade in while sliding up 20px, 0.5s, immediately.
pub const TEXT_ENTRANCE: Transition = Transition::between(
    VisualState::new(0.0, 20.0, 0.0),
    VisualState::SETTLED,
)
.lasting(0.5);

/// Visual card entrance: fade in while straightening from -5°, 1s, after 0.3s.
pub const CARD_ENTRANCE: Transition = Transition::between(
    VisualState::new(0.0, 0.0, -5.0),
    VisualState::SETTLED,
)
.lasting(1.0)
.delayed(0.3);

/// Extra time (seconds) after a transition's window before it is forced
/// to its target state.
pub const SETTLE_GRACE: f64 = 0.25;

/// Media query honoured to skip entrance transitions entirely.
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
