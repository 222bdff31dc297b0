//! Client-side navigation for the hero links.
//!
//! Components never talk to the router directly: they go through
//! [`Navigate`], which the router implements via [`RouterNavigator`].

use leptos_router::{use_navigate, NavigateOptions};

use crate::services::content::HeroContent;
use crate::types::{HeroLink, LinkEmphasis, NavTarget};

/// "Navigate to path P, client-side" capability.
pub trait Navigate {
    fn navigate(&self, path: &str);
}

/// [`Navigate`] backed by `leptos_router`.
///
/// Must be created inside a `<Router>`.
#[derive(Clone)]
pub struct RouterNavigator<F> {
    navigate: F,
}

/// Navigator for the enclosing router.
pub fn router_navigator() -> RouterNavigator<impl Fn(&str, NavigateOptions) + Clone> {
    RouterNavigator {
        navigate: use_navigate(),
    }
}

impl<F> Navigate for RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    fn navigate(&self, path: &str) {
        (self.navigate)(path, NavigateOptions::default());
    }
}

/// Follow a hero link: exactly one navigation request to its route.
pub fn activate(target: NavTarget, navigator: &impl Navigate) {
    log::info!("🧭 Navigating to {}", target.path());
    navigator.navigate(target.path());
}

/// Whether a click should be handled client-side. Modified or non-primary
/// clicks (new tab, new window, download) are left to the browser.
pub fn is_plain_click(button: i16, ctrl: bool, meta: bool, shift: bool, alt: bool) -> bool {
    button == 0 && !(ctrl || meta || shift || alt)
}

/// The hero's two actions, primary first.
pub fn hero_links(content: &HeroContent) -> [HeroLink; 2] {
    [
        HeroLink {
            label: content.primary_label.clone(),
            target: NavTarget::Events,
            emphasis: LinkEmphasis::Primary,
        },
        HeroLink {
            label: content.secondary_label.clone(),
            target: NavTarget::Register,
            emphasis: LinkEmphasis::Secondary,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingNavigator {
        requests: RefCell<Vec<String>>,
    }

    impl Navigate for RecordingNavigator {
        fn navigate(&self, path: &str) {
            self.requests.borrow_mut().push(path.to_string());
        }
    }

    #[test]
    fn test_hero_link_hrefs() {
        let links = hero_links(&HeroContent::default());
        let hrefs: Vec<_> = links.iter().map(|l| l.href()).collect();
        assert_eq!(hrefs, vec!["/events", "/register"]);
        assert_eq!(links[0].emphasis, LinkEmphasis::Primary);
        assert_eq!(links[1].emphasis, LinkEmphasis::Secondary);
    }

    #[test]
    fn test_links_use_loaded_labels() {
        let content = HeroContent::load();
        let [primary, secondary] = hero_links(&content);
        assert_eq!(primary.label, content.primary_label);
        assert_eq!(primary.target, NavTarget::Events);
        assert_eq!(primary.emphasis, LinkEmphasis::Primary);
        assert_eq!(secondary.label, content.secondary_label);
        assert_eq!(secondary.target, NavTarget::Register);
        assert_eq!(secondary.emphasis, LinkEmphasis::Secondary);
    }

    #[test]
    fn test_primary_navigates_once_to_events() {
        let navigator = RecordingNavigator::default();
        let links = hero_links(&HeroContent::default());

        activate(links[0].target, &navigator);

        assert_eq!(*navigator.requests.borrow(), vec!["/events".to_string()]);
    }

    #[test]
    fn test_secondary_navigates_once_to_register() {
        let navigator = RecordingNavigator::default();
        let links = hero_links(&HeroContent::default());

        activate(links[1].target, &navigator);

        assert_eq!(*navigator.requests.borrow(), vec!["/register".to_string()]);
    }

    #[test]
    fn test_only_hero_paths_requested() {
        let navigator = RecordingNavigator::default();
        for link in hero_links(&HeroContent::default()) {
            activate(link.target, &navigator);
            activate(link.target, &navigator);
        }
        let requests = navigator.requests.borrow();
        assert_eq!(requests.len(), 4);
        assert!(requests.iter().all(|p| p == "/events" || p == "/register"));
        assert_eq!(requests.iter().filter(|p| *p == "/events").count(), 2);
    }

    #[test]
    fn test_plain_click_detection() {
        assert!(is_plain_click(0, false, false, false, false));
        assert!(!is_plain_click(1, false, false, false, false));
        assert!(!is_plain_click(0, true, false, false, false));
        assert!(!is_plain_click(0, false, true, false, false));
        assert!(!is_plain_click(0, false, false, true, false));
        assert!(!is_plain_click(0, false, false, false, true));
    }
}
