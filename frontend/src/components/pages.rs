//! Route views.

use leptos::*;
use leptos_meta::Title;
use leptos_router::A;

use crate::components::HeroSection;
use crate::services::HeroContent;
use crate::SITE_NAME;

#[component]
pub fn HomePage() -> impl IntoView {
    let content = HeroContent::load();

    view! {
        <Title text=SITE_NAME/>
        <HeroSection content=content/>
    }
}

#[component]
pub fn EventsPage() -> impl IntoView {
    view! {
        <Title text=format!("Events • {}", SITE_NAME)/>
        <section class="page">
            <h1>"Events"</h1>
            <p class="subtitle">"Workshops, hackathons and talks run by the cell."</p>
            <A href="/" class="btn btn-secondary">"Back to home"</A>
        </section>
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <Title text=format!("Register • {}", SITE_NAME)/>
        <section class="page">
            <h1>"Register"</h1>
            <p class="subtitle">"Join the cell to take part in upcoming programmes."</p>
            <A href="/" class="btn btn-secondary">"Back to home"</A>
        </section>
    }
}
