//! Hero section component

use leptos::*;

use crate::animation::use_entrance;
use crate::components::NavLink;
use crate::services::{hero_links, HeroContent};
use crate::{CARD_ENTRANCE, TEXT_ENTRANCE};

/// Two-column hero: animated text block with the two actions, and the
/// logo card entering slightly later.
#[component]
pub fn HeroSection(content: HeroContent) -> impl IntoView {
    let text_style = use_entrance(TEXT_ENTRANCE);
    let card_style = use_entrance(CARD_ENTRANCE);
    let links = hero_links(&content);

    view! {
        <section class="hero">
            <div class="hero-text" style=move || text_style.get()>
                <span class="hero-eyebrow">{content.eyebrow}</span>
                <h1>{content.title}</h1>
                <p class="subtitle">{content.tagline}</p>
                <div class="hero-actions">
                    {links.into_iter().map(|link| view! { <NavLink link=link/> }).collect_view()}
                </div>
            </div>
            <div class="hero-visual">
                <div class="hero-card" style=move || card_style.get()>
                    <img class="hero-logo" src=content.logo_path alt=content.logo_alt/>
                </div>
            </div>
        </section>
    }
}
