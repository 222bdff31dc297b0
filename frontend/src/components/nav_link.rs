//! Client-side navigation link.

use leptos::*;
use web_sys::MouseEvent;

use crate::services::{activate, is_plain_click, router_navigator};
use crate::HeroLink;

/// Anchor that navigates without a full page reload.
///
/// The real `href` is kept so modified clicks (new tab, etc.) and
/// non-JS contexts still work.
#[component]
pub fn NavLink(link: HeroLink) -> impl IntoView {
    let navigator = router_navigator();
    let target = link.target;

    let on_click = move |ev: MouseEvent| {
        if !is_plain_click(ev.button(), ev.ctrl_key(), ev.meta_key(), ev.shift_key(), ev.alt_key()) {
            return;
        }
        ev.prevent_default();
        activate(target, &navigator);
    };

    view! {
        <a href=link.href() class=link.emphasis.css_class() on:click=on_click>
            {link.label}
        </a>
    }
}
