//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Visual Types** - Animated visual properties
//! - **Navigation Types** - Hero routes and links
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{EVENTS_PATH, REGISTER_PATH};

// =============================================================================
// Visual Types
// =============================================================================

/// Animated visual properties of an element.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualState {
    /// Opacity in `[0, 1]`
    pub opacity: f64,
    /// Vertical offset in pixels (positive is down)
    pub offset_y: f64,
    /// Rotation in degrees
    pub rotation_deg: f64,
}

impl VisualState {
    /// Fully visible, in place, unrotated.
    pub const SETTLED: VisualState = VisualState::new(1.0, 0.0, 0.0);

    pub const fn new(opacity: f64, offset_y: f64, rotation_deg: f64) -> Self {
        Self {
            opacity,
            offset_y,
            rotation_deg,
        }
    }

    /// Linear blend between `self` (`t = 0`) and `other` (`t = 1`).
    pub fn lerp(&self, other: &VisualState, t: f64) -> VisualState {
        VisualState {
            opacity: self.opacity + (other.opacity - self.opacity) * t,
            offset_y: self.offset_y + (other.offset_y - self.offset_y) * t,
            rotation_deg: self.rotation_deg + (other.rotation_deg - self.rotation_deg) * t,
        }
    }

    /// Inline CSS declarations for this state.
    pub fn to_css(&self) -> String {
        format!(
            "opacity: {}; transform: translateY({}px) rotate({}deg);",
            self.opacity, self.offset_y, self.rotation_deg
        )
    }
}

/// Easing curve applied to transition progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Easing {
    Linear,
    /// Cubic ease-out
    #[default]
    EaseOut,
}

impl Easing {
    /// Map linear progress in `[0, 1]` onto the curve.
    pub fn apply(&self, p: f64) -> f64 {
        let p = p.clamp(0.0, 1.0);
        match self {
            Easing::Linear => p,
            Easing::EaseOut => 1.0 - (1.0 - p).powi(3),
        }
    }
}

// =============================================================================
// Navigation Types
// =============================================================================

/// Client-side routes the hero links to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavTarget {
    Events,
    Register,
}

impl NavTarget {
    /// Route path.
    pub fn path(&self) -> &'static str {
        match self {
            NavTarget::Events => EVENTS_PATH,
            NavTarget::Register => REGISTER_PATH,
        }
    }
}

/// Visual weight of a link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkEmphasis {
    Primary,
    Secondary,
}

impl LinkEmphasis {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            LinkEmphasis::Primary => "btn btn-primary",
            LinkEmphasis::Secondary => "btn btn-secondary",
        }
    }
}

/// A navigation affordance rendered by the hero.
#[derive(Clone, Debug, PartialEq)]
pub struct HeroLink {
    pub label: String,
    pub target: NavTarget,
    pub emphasis: LinkEmphasis,
}

impl HeroLink {
    pub fn href(&self) -> &'static str {
        self.target.path()
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// None of these reach the visitor: every path degrades to static,
/// fully visible content.
#[derive(Debug, Error)]
pub enum AppError {
    /// Hero content could not be parsed.
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    /// Transition timing is unusable.
    #[error("Animation error: {0}")]
    Animation(String),

    /// Browser frame scheduler unavailable.
    #[error("Scheduler error: {0}")]
    Scheduler(String),
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
