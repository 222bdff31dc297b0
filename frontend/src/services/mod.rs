//! Hero services.
//!
//! # Services
//!
//! - [`content`] - Hero copy loaded from `assets/hero.json`
//! - [`navigation`] - Client-side navigation seam over `leptos_router`

pub mod content;
pub mod navigation;

pub use content::*;
pub use navigation::*;
