//! Hero copy, loaded from the embedded `assets/hero.json`.

use serde::{Deserialize, Serialize};

use crate::types::AppResult;
use crate::LOGO_PATH;

/// Text and asset references displayed by the hero.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroContent {
    /// Small line above the title
    pub eyebrow: String,
    /// Main heading
    pub title: String,
    /// Paragraph under the heading
    pub tagline: String,
    /// Logo image on the visual card
    pub logo_path: String,
    /// Logo alt text
    pub logo_alt: String,
    /// Label of the `/events` link
    pub primary_label: String,
    /// Label of the `/register` link
    pub secondary_label: String,
}

impl Default for HeroContent {
    fn default() -> Self {
        Self {
            eyebrow: "University Innovation Cell".to_string(),
            title: "Where ideas become ventures".to_string(),
            tagline: "Workshops, hackathons and mentoring for student founders and builders."
                .to_string(),
            logo_path: LOGO_PATH.to_string(),
            logo_alt: "Innovation Cell logo".to_string(),
            primary_label: "Explore Events".to_string(),
            secondary_label: "Register Now".to_string(),
        }
    }
}

const HERO_JSON: &str = include_str!("../../assets/hero.json");

impl HeroContent {
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Embedded hero copy, or the built-in defaults if it does not parse.
    pub fn load() -> Self {
        match Self::from_json(HERO_JSON) {
            Ok(content) => content,
            Err(e) => {
                log::warn!("Falling back to default hero content: {}", e);
                Self::default()
            }
        }
    }
}
