//! UI Components for the Innovation Cell site.
//!
//! # Layout Components
//! - [`Header`] - Site bar with logo and navigation
//!
//! # Feature Components
//! - [`HeroSection`] - Animated hero with the two calls to action
//! - [`NavLink`] - Client-side navigation anchor
//!
//! # Pages
//! - [`HomePage`], [`EventsPage`], [`RegisterPage`]

mod header;
mod hero;
mod nav_link;
mod pages;

pub use header::*;
pub use hero::*;
pub use nav_link::*;
pub use pages::*;
