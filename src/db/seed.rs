//! Demo content seeding.
//!
//! Inserts a small set of sample tours, blogs and homepage content into an
//! empty database so a fresh install has something to render. Enabled with
//! `TOURCMS_SEED_DEMO=true`; a non-empty tours table disables it.

use super::{Repository, TourFilter};
use crate::errors::AppError;
use crate::models::{
    CreateBlogRequest, CreateTourRequest, Currency, Difficulty, Faq, ImportantInfo, ItineraryDay,
    Testimonial,
};

/// Seed demo data if the database holds no tours yet.
pub async fn seed_demo_data(repo: &Repository) -> Result<(), AppError> {
    if !repo.list_tours(&TourFilter::default()).await?.is_empty() {
        tracing::debug!("Database already has tours, skipping demo seed");
        return Ok(());
    }

    let everest = repo
        .create_tour(&CreateTourRequest {
            title: "Everest Base Camp Trek".to_string(),
            slug: None,
            category: "Trekking".to_string(),
            duration: "14 Days".to_string(),
            price: 1299.0,
            currency: Some(Currency::USD),
            highlights: vec![
                "Stunning views of Mount Everest".to_string(),
                "Sherpa culture and villages".to_string(),
                "Tengboche Monastery".to_string(),
                "Kala Patthar summit".to_string(),
            ],
            itinerary: vec![
                ItineraryDay {
                    day: 1,
                    title: "Arrival in Kathmandu".to_string(),
                    description: "Welcome to Nepal. Transfer to hotel and briefing.".to_string(),
                },
                ItineraryDay {
                    day: 2,
                    title: "Fly to Lukla, Trek to Phakding".to_string(),
                    description: "Scenic flight to Lukla and start trekking.".to_string(),
                },
            ],
            images: vec![
                "https://images.example.com/everest-cover.jpg".to_string(),
                "https://images.example.com/everest-2.jpg".to_string(),
            ],
            is_published: true,
            description: Some(
                "Experience the ultimate Himalayan adventure on this classic trek to the foot \
                 of Mount Everest."
                    .to_string(),
            ),
            whats_included: Some(vec![
                "Airport transfers".to_string(),
                "Domestic flights".to_string(),
                "Accommodation in tea houses".to_string(),
                "Experienced guide and porter".to_string(),
            ]),
            whats_excluded: Some(vec![
                "International flights".to_string(),
                "Nepal visa fees".to_string(),
                "Travel insurance".to_string(),
            ]),
            important_info: Some(vec![ImportantInfo {
                title: "Travel Insurance".to_string(),
                description: "Insurance covering trekking up to 6,000m is mandatory.".to_string(),
            }]),
            cancellation_policy: Some(
                "Cancellations made 30+ days before departure: 80% refund.".to_string(),
            ),
            faq: Some(vec![Faq {
                question: "How difficult is the trek?".to_string(),
                answer: "Challenging but achievable for anyone in good physical condition."
                    .to_string(),
            }]),
            similar_tours: None,
            difficulty: Some(Difficulty::Challenging),
            max_altitude: Some("5,545m (Kala Patthar)".to_string()),
            group_size: Some("2-12 people".to_string()),
            best_time: Some("March-May, September-November".to_string()),
            detailed_description: None,
            preparation_guide: None,
            what_to_expect: None,
            reviews: None,
            custom_styles: None,
        })
        .await?;

    let annapurna = repo
        .create_tour(&CreateTourRequest {
            title: "Annapurna Circuit Trek".to_string(),
            slug: None,
            category: "Trekking".to_string(),
            duration: "18 Days".to_string(),
            price: 1199.0,
            currency: Some(Currency::USD),
            highlights: vec![
                "Thorong La Pass".to_string(),
                "Diverse landscapes".to_string(),
                "Traditional villages".to_string(),
            ],
            itinerary: vec![ItineraryDay {
                day: 1,
                title: "Drive to Besisahar".to_string(),
                description: "Leave Kathmandu for the trailhead.".to_string(),
            }],
            images: vec!["https://images.example.com/annapurna-cover.jpg".to_string()],
            is_published: true,
            description: Some("The complete circuit around the Annapurna massif.".to_string()),
            whats_included: None,
            whats_excluded: None,
            important_info: None,
            cancellation_policy: None,
            faq: None,
            similar_tours: Some(vec![everest.id.clone()]),
            difficulty: Some(Difficulty::Challenging),
            max_altitude: Some("5,416m (Thorong La)".to_string()),
            group_size: Some("2-10 people".to_string()),
            best_time: Some("October-November".to_string()),
            detailed_description: None,
            preparation_guide: None,
            what_to_expect: None,
            reviews: None,
            custom_styles: None,
        })
        .await?;

    // Cross-link the first tour back to the second
    repo.update_tour(
        &everest.id,
        &crate::models::UpdateTourRequest {
            similar_tours: Some(vec![annapurna.id.clone()]),
            ..Default::default()
        },
    )
    .await?;

    repo.create_blog(&CreateBlogRequest {
        title: "Nepal Trekking Guide".to_string(),
        slug: None,
        content: "<p>Everything you need to know before your first trek in Nepal.</p>"
            .to_string(),
        excerpt: Some("Permits, packing and preparation.".to_string()),
        cover_image: "https://images.example.com/trekking-guide.jpg".to_string(),
        is_published: true,
        author: Some("Tour CMS Team".to_string()),
        images: None,
        tags: Some(vec!["trekking".to_string(), "guide".to_string()]),
        read_time: Some("8 min".to_string()),
        category: Some("Guides".to_string()),
        featured: true,
        custom_styles: None,
    })
    .await?;

    repo.create_blog(&CreateBlogRequest {
        title: "Best Time to Visit Nepal".to_string(),
        slug: None,
        content: "<p>Season by season breakdown of weather and crowds.</p>".to_string(),
        excerpt: Some("When to go for treks, safaris and city tours.".to_string()),
        cover_image: "https://images.example.com/seasons.jpg".to_string(),
        is_published: false,
        author: Some("Tour CMS Team".to_string()),
        images: None,
        tags: Some(vec!["planning".to_string()]),
        read_time: Some("5 min".to_string()),
        category: Some("Planning".to_string()),
        featured: false,
        custom_styles: None,
    })
    .await?;

    let mut homepage = repo.get_homepage().await?;
    homepage.featured_tours = vec![everest.id, annapurna.id];
    homepage.testimonials = vec![Testimonial {
        id: "t1".to_string(),
        name: "Sarah M.".to_string(),
        location: Some("Australia".to_string()),
        rating: 5,
        comment: "The Everest trek was the experience of a lifetime.".to_string(),
        image: None,
    }];
    repo.update_homepage(&homepage).await?;

    tracing::info!("Seeded demo tours, blogs and homepage content");
    Ok(())
}
