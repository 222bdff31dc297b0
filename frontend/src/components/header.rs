use leptos::*;
use leptos_router::A;

use crate::components::NavLink;
use crate::services::{hero_links, HeroContent};
use crate::{LOGO_PATH, SITE_NAME};

/// Site bar. Repeats the hero's two actions so they stay reachable from
/// the landing pages.
#[component]
pub fn Header() -> impl IntoView {
    let links = hero_links(&HeroContent::load());

    view! {
        <header>
            <div class="header-left">
                <A href="/" class="logo">
                    <img src=LOGO_PATH alt="" class="logo-mark"/>
                    {SITE_NAME}
                </A>
            </div>
            <nav class="header-right">
                {links.into_iter().map(|link| view! { <NavLink link=link/> }).collect_view()}
            </nav>
        </header>
    }
}
