//! Tour model matching the frontend Tour interface.

use serde::{Deserialize, Serialize};

/// Price display currency.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Currency {
    USD,
    NPR,
}

impl Currency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::NPR => "NPR",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "USD" => Some(Currency::USD),
            "NPR" => Some(Currency::NPR),
            _ => None,
        }
    }
}

/// Physical difficulty rating of a tour.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Moderate,
    Challenging,
    Strenuous,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Moderate => "Moderate",
            Difficulty::Challenging => "Challenging",
            Difficulty::Strenuous => "Strenuous",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Easy" => Some(Difficulty::Easy),
            "Moderate" => Some(Difficulty::Moderate),
            "Challenging" => Some(Difficulty::Challenging),
            "Strenuous" => Some(Difficulty::Strenuous),
            _ => None,
        }
    }
}

/// A single day in a tour itinerary. Days are expected to be sequential
/// starting at 1, but this is not enforced.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryDay {
    pub day: i32,
    pub title: String,
    pub description: String,
}

/// A titled information block shown on the tour detail page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportantInfo {
    pub title: String,
    pub description: String,
}

/// A question/answer pair, used on tours and the homepage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

/// A customer review attached to a tour.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourReview {
    pub id: String,
    pub author: String,
    pub rating: i32,
    pub comment: String,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
}

/// Optional per-entity display overrides set by the admin.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CustomStyles {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_font_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_font_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

/// A bookable travel package.
///
/// `images[0]` is the implicit cover image. `similar_tours` holds soft
/// references to other tour ids; dangling ids are pruned when resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tour {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub category: String,
    pub duration: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    pub highlights: Vec<String>,
    pub itinerary: Vec<ItineraryDay>,
    pub images: Vec<String>,
    pub is_published: bool,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whats_included: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whats_excluded: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub important_info: Option<Vec<ImportantInfo>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancellation_policy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faq: Option<Vec<Faq>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similar_tours: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_altitude: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detailed_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preparation_guide: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub what_to_expect: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviews: Option<Vec<TourReview>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_styles: Option<CustomStyles>,
}

/// Request body for creating a new tour.
///
/// When `slug` is omitted or blank it is generated from the title.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTourRequest {
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub currency: Option<Currency>,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub itinerary: Vec<ItineraryDay>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub whats_included: Option<Vec<String>>,
    #[serde(default)]
    pub whats_excluded: Option<Vec<String>>,
    #[serde(default)]
    pub important_info: Option<Vec<ImportantInfo>>,
    #[serde(default)]
    pub cancellation_policy: Option<String>,
    #[serde(default)]
    pub faq: Option<Vec<Faq>>,
    #[serde(default)]
    pub similar_tours: Option<Vec<String>>,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub max_altitude: Option<String>,
    #[serde(default)]
    pub group_size: Option<String>,
    #[serde(default)]
    pub best_time: Option<String>,
    #[serde(default)]
    pub detailed_description: Option<String>,
    #[serde(default)]
    pub preparation_guide: Option<String>,
    #[serde(default)]
    pub what_to_expect: Option<String>,
    #[serde(default)]
    pub reviews: Option<Vec<TourReview>>,
    #[serde(default)]
    pub custom_styles: Option<CustomStyles>,
}

/// Request body for updating an existing tour. Absent fields are preserved.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTourRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub currency: Option<Currency>,
    #[serde(default)]
    pub highlights: Option<Vec<String>>,
    #[serde(default)]
    pub itinerary: Option<Vec<ItineraryDay>>,
    #[serde(default)]
    pub images: Option<Vec<String>>,
    #[serde(default)]
    pub is_published: Option<bool>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub whats_included: Option<Vec<String>>,
    #[serde(default)]
    pub whats_excluded: Option<Vec<String>>,
    #[serde(default)]
    pub important_info: Option<Vec<ImportantInfo>>,
    #[serde(default)]
    pub cancellation_policy: Option<String>,
    #[serde(default)]
    pub faq: Option<Vec<Faq>>,
    #[serde(default)]
    pub similar_tours: Option<Vec<String>>,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub max_altitude: Option<String>,
    #[serde(default)]
    pub group_size: Option<String>,
    #[serde(default)]
    pub best_time: Option<String>,
    #[serde(default)]
    pub detailed_description: Option<String>,
    #[serde(default)]
    pub preparation_guide: Option<String>,
    #[serde(default)]
    pub what_to_expect: Option<String>,
    #[serde(default)]
    pub reviews: Option<Vec<TourReview>>,
    #[serde(default)]
    pub custom_styles: Option<CustomStyles>,
}
