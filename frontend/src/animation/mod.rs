//! Entrance animations.
//!
//! - [`Transition`] - timed interpolation between two [`VisualState`](crate::VisualState)s
//! - [`EntranceController`] - one-shot attach/detach lifecycle
//! - [`use_entrance`] - Leptos hook playing a transition on the browser frame loop

mod driver;
mod entrance;
mod transition;

pub use driver::*;
pub use entrance::*;
pub use transition::*;
