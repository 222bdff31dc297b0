//! Entry point for the WASM application

use innovation_cell::{init_logging, App};
use leptos::*;

pub fn main() {
    init_logging();

    log::info!("🦀 Innovation Cell - Starting Leptos App");

    mount_to_body(|| view! { <App/> })
}
