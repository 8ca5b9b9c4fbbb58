//! Homepage configuration model.
//!
//! A singleton document controlling the public homepage: hero content, featured
//! tour references, testimonials and per-section visibility toggles.

use serde::{Deserialize, Serialize};

use super::Faq;

/// Hero banner content.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSection {
    pub title: String,
    pub subtitle: String,
    pub background_image: String,
    pub cta_text: String,
    pub cta_link: String,
}

/// A customer testimonial shown on the homepage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub rating: i32,
    pub comment: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Visibility toggles for each homepage region.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnabledSections {
    pub hero: bool,
    pub featured_tours: bool,
    pub best_selling: bool,
    pub why_choose_us: bool,
    pub testimonials: bool,
    pub blog_preview: bool,
    pub about_us: bool,
    pub popular_destinations: bool,
    pub travel_tips: bool,
    pub newsletter: bool,
    pub faq: bool,
}

impl Default for EnabledSections {
    fn default() -> Self {
        Self {
            hero: true,
            featured_tours: true,
            best_selling: true,
            why_choose_us: true,
            testimonials: true,
            blog_preview: true,
            about_us: false,
            popular_destinations: false,
            travel_tips: false,
            newsletter: true,
            faq: false,
        }
    }
}

/// "About us" block with optional headline stats.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutUsSection {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<Vec<AboutUsStat>>,
}

/// A single label/value stat in the about-us block.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutUsStat {
    pub label: String,
    pub value: String,
}

/// A destination teaser card.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// A short travel tip card.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelTip {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// The full homepage configuration document.
///
/// `featured_tours` holds soft references to tour ids; dangling ids are pruned
/// when the list is resolved, not when it is stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomepageData {
    pub hero: HeroSection,
    pub featured_tours: Vec<String>,
    pub testimonials: Vec<Testimonial>,
    pub enabled_sections: EnabledSections,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about_us: Option<AboutUsSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub popular_destinations: Option<Vec<Destination>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub travel_tips: Option<Vec<TravelTip>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faq: Option<Vec<Faq>>,
}

impl Default for HomepageData {
    fn default() -> Self {
        Self {
            hero: HeroSection {
                title: "Discover the Himalayas".to_string(),
                subtitle: "Treks, tours and adventures across Nepal".to_string(),
                background_image: String::new(),
                cta_text: "Explore Tours".to_string(),
                cta_link: "/tours".to_string(),
            },
            featured_tours: Vec::new(),
            testimonials: Vec::new(),
            enabled_sections: EnabledSections::default(),
            about_us: None,
            popular_destinations: None,
            travel_tips: None,
            faq: None,
        }
    }
}
