//! Innovation Cell - Frontend Rust/Leptos Application
//!
//! A WebAssembly hero section for a university innovation-cell website:
//! animated headline, two calls to action and a logo card.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (logo, navigation)                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Routes                                                      │
//! │  ├── /          HomePage → HeroSection                       │
//! │  ├── /events    EventsPage                                   │
//! │  └── /register  RegisterPage                                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (VisualState, NavTarget, AppError, etc.)
//! - [`animation`] - Entrance transitions and their lifecycle
//! - [`components`] - UI components (Header, HeroSection, pages)
//! - [`services`] - Hero content and client-side navigation

use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::{Route, Router, Routes};

// =============================================================================
// Module declarations
// =============================================================================

pub mod animation;
pub mod components;
pub mod config;
pub mod services;
pub mod types;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Visual
    Easing, VisualState,
    // Navigation
    HeroLink, LinkEmphasis, NavTarget,
    // Errors
    AppError, AppResult,
};

// Animation
pub use animation::{use_entrance, EntranceController, Phase, Transition};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install the panic hook and console logger.
pub fn init_logging() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Router>
            <Header/>
            <main class="container">
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path=EVENTS_PATH view=EventsPage/>
                    <Route path=REGISTER_PATH view=RegisterPage/>
                </Routes>
            </main>
        </Router>
    }
}
