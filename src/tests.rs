//! Integration tests for the tour CMS backend.

use std::sync::Arc;

use reqwest::Client;
use serde_json::{json, Value};
use tempfile::TempDir;

use crate::config::Config;
use crate::db::{init_database, Repository};
use crate::{create_router, AppState};

/// Test fixture for integration tests.
struct TestFixture {
    client: Client,
    base_url: String,
    _temp_dir: TempDir,
}

impl TestFixture {
    async fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.sqlite");

        // Initialize database
        let pool = init_database(&db_path).await.expect("Failed to init DB");
        let repo = Arc::new(Repository::new(pool));

        // Create config
        let config = Config {
            db_path,
            bind_addr: "127.0.0.1:0".parse().unwrap(),
            log_level: "warn".to_string(),
            seed_demo_data: false,
        };

        let state = AppState {
            repo,
            config: Arc::new(config),
        };

        let app = create_router(state);

        // Bind to random port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind");
        let addr = listener.local_addr().expect("Failed to get addr");
        let base_url = format!("http://{}", addr);

        // Spawn server
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Wait for server to start
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        TestFixture {
            client: Client::new(),
            base_url,
            _temp_dir: temp_dir,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn create_tour(&self, body: Value) -> Value {
        let resp = self
            .client
            .post(self.url("/api/tours"))
            .json(&body)
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
        resp.json().await.unwrap()
    }

    async fn create_blog(&self, body: Value) -> Value {
        let resp = self
            .client
            .post(self.url("/api/blogs"))
            .json(&body)
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
        resp.json().await.unwrap()
    }
}

#[tokio::test]
async fn test_health_check() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .get(fixture.url("/health"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text().await.unwrap(), "OK");
}

#[tokio::test]
async fn test_tour_crud() {
    let fixture = TestFixture::new().await;

    // Create tour; slug is generated from the title
    let create_body = fixture
        .create_tour(json!({
            "title": "Everest Base Camp Trek!",
            "category": "Trekking",
            "duration": "14 Days",
            "price": 1299.0,
            "currency": "USD",
            "highlights": ["Kala Patthar summit"],
            "itinerary": [
                { "day": 1, "title": "Arrival", "description": "Transfer to hotel." }
            ],
            "images": ["https://images.example.com/cover.jpg"],
            "isPublished": true,
            "difficulty": "Challenging"
        }))
        .await;

    assert_eq!(create_body["success"], true);
    let tour_id = create_body["data"]["id"].as_str().unwrap();
    assert_eq!(create_body["data"]["slug"], "everest-base-camp-trek");
    assert!(create_body["data"]["createdAt"].is_string());

    // Get by id
    let get_resp = fixture
        .client
        .get(fixture.url(&format!("/api/tours/{}", tour_id)))
        .send()
        .await
        .unwrap();
    assert_eq!(get_resp.status(), 200);
    let get_body: Value = get_resp.json().await.unwrap();
    assert_eq!(get_body["data"]["title"], "Everest Base Camp Trek!");
    assert_eq!(get_body["data"]["itinerary"][0]["day"], 1);

    // Get by slug
    let slug_resp = fixture
        .client
        .get(fixture.url("/api/tours/slug/everest-base-camp-trek"))
        .send()
        .await
        .unwrap();
    assert_eq!(slug_resp.status(), 200);
    let slug_body: Value = slug_resp.json().await.unwrap();
    assert_eq!(slug_body["data"]["id"], tour_id);

    // Partial update flips one field and preserves the rest
    let update_resp = fixture
        .client
        .put(fixture.url(&format!("/api/tours/{}", tour_id)))
        .json(&json!({ "isPublished": false }))
        .send()
        .await
        .unwrap();
    assert_eq!(update_resp.status(), 200);
    let update_body: Value = update_resp.json().await.unwrap();
    assert_eq!(update_body["data"]["isPublished"], false);
    assert_eq!(update_body["data"]["title"], "Everest Base Camp Trek!");
    assert_eq!(update_body["data"]["price"], 1299.0);
    assert_eq!(update_body["data"]["difficulty"], "Challenging");
    assert_eq!(update_body["data"]["createdAt"], create_body["data"]["createdAt"]);

    // Delete
    let delete_resp = fixture
        .client
        .delete(fixture.url(&format!("/api/tours/{}", tour_id)))
        .send()
        .await
        .unwrap();
    assert_eq!(delete_resp.status(), 200);

    // Verify deleted
    let get_deleted_resp = fixture
        .client
        .get(fixture.url(&format!("/api/tours/{}", tour_id)))
        .send()
        .await
        .unwrap();
    assert_eq!(get_deleted_resp.status(), 404);
}

#[tokio::test]
async fn test_identical_creates_get_distinct_ids_and_slugs() {
    let fixture = TestFixture::new().await;

    let body = json!({ "title": "Annapurna Circuit", "category": "Trekking" });
    let first = fixture.create_tour(body.clone()).await;
    let second = fixture.create_tour(body).await;

    assert_ne!(first["data"]["id"], second["data"]["id"]);
    assert_eq!(first["data"]["slug"], "annapurna-circuit");
    assert_eq!(second["data"]["slug"], "annapurna-circuit-2");
}

#[tokio::test]
async fn test_published_listing_and_category_sentinel() {
    let fixture = TestFixture::new().await;

    fixture
        .create_tour(json!({ "title": "Trek One", "category": "Trekking", "isPublished": true }))
        .await;
    fixture
        .create_tour(json!({ "title": "Trek Two", "category": "Trekking", "isPublished": false }))
        .await;
    fixture
        .create_tour(json!({ "title": "Jungle Safari", "category": "Safari", "isPublished": true }))
        .await;

    // Published listing excludes drafts, preserves insertion order
    let resp = fixture
        .client
        .get(fixture.url("/api/tours/published"))
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    let titles: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Trek One", "Jungle Safari"]);

    // Sentinel "All" behaves like no category filter
    let all_resp = fixture
        .client
        .get(fixture.url("/api/tours/published?category=All"))
        .send()
        .await
        .unwrap();
    let all_body: Value = all_resp.json().await.unwrap();
    assert_eq!(all_body["data"].as_array().unwrap().len(), 2);

    // Exact category match over published entities only
    let trekking_resp = fixture
        .client
        .get(fixture.url("/api/tours/published?category=Trekking"))
        .send()
        .await
        .unwrap();
    let trekking_body: Value = trekking_resp.json().await.unwrap();
    let trekking = trekking_body["data"].as_array().unwrap();
    assert_eq!(trekking.len(), 1);
    assert_eq!(trekking[0]["title"], "Trek One");
}

#[tokio::test]
async fn test_publish_toggle_end_to_end() {
    let fixture = TestFixture::new().await;

    let created = fixture
        .create_tour(json!({ "title": "Chitwan Safari", "category": "Safari" }))
        .await;
    let tour_id = created["data"]["id"].as_str().unwrap();

    // Draft tours are invisible to the public category listing
    let before_resp = fixture
        .client
        .get(fixture.url("/api/tours/published?category=Safari"))
        .send()
        .await
        .unwrap();
    let before: Value = before_resp.json().await.unwrap();
    assert_eq!(before["data"].as_array().unwrap().len(), 0);

    // Toggle publish
    fixture
        .client
        .put(fixture.url(&format!("/api/tours/{}", tour_id)))
        .json(&json!({ "isPublished": true }))
        .send()
        .await
        .unwrap();

    let after_resp = fixture
        .client
        .get(fixture.url("/api/tours/published?category=Safari"))
        .send()
        .await
        .unwrap();
    let after: Value = after_resp.json().await.unwrap();
    let tours = after["data"].as_array().unwrap();
    assert_eq!(tours.len(), 1);
    assert_eq!(tours[0]["id"], tour_id);
}

#[tokio::test]
async fn test_admin_filter_pipeline() {
    let fixture = TestFixture::new().await;

    fixture
        .create_tour(json!({ "title": "Everest Trek", "category": "Trekking", "isPublished": true }))
        .await;
    fixture
        .create_tour(json!({ "title": "Hidden Trek", "category": "Trekking", "isPublished": false }))
        .await;
    fixture
        .create_tour(json!({ "title": "City Tour", "category": "Sightseeing", "isPublished": true }))
        .await;

    // Text search is case-insensitive substring match
    let search_resp = fixture
        .client
        .get(fixture.url("/api/tours?q=TREK"))
        .send()
        .await
        .unwrap();
    let search_body: Value = search_resp.json().await.unwrap();
    assert_eq!(search_body["data"].as_array().unwrap().len(), 2);

    // Draft status filter
    let draft_resp = fixture
        .client
        .get(fixture.url("/api/tours?status=draft"))
        .send()
        .await
        .unwrap();
    let draft_body: Value = draft_resp.json().await.unwrap();
    let drafts = draft_body["data"].as_array().unwrap();
    assert_eq!(drafts.len(), 1);
    assert_eq!(drafts[0]["title"], "Hidden Trek");

    // Combined search + category + status
    let combined_resp = fixture
        .client
        .get(fixture.url("/api/tours?q=trek&category=Trekking&status=published"))
        .send()
        .await
        .unwrap();
    let combined_body: Value = combined_resp.json().await.unwrap();
    let combined = combined_body["data"].as_array().unwrap();
    assert_eq!(combined.len(), 1);
    assert_eq!(combined[0]["title"], "Everest Trek");
}

#[tokio::test]
async fn test_blog_crud_and_search() {
    let fixture = TestFixture::new().await;

    let created = fixture
        .create_blog(json!({
            "title": "Nepal Trekking Guide",
            "content": "<p>Everything about treks.</p>",
            "excerpt": "Permits and packing.",
            "coverImage": "https://images.example.com/guide.jpg",
            "isPublished": true,
            "tags": ["trekking", "guide"]
        }))
        .await;
    let blog_id = created["data"]["id"].as_str().unwrap();
    assert_eq!(created["data"]["slug"], "nepal-trekking-guide");
    assert_eq!(created["data"]["views"], 0);

    fixture
        .create_blog(json!({
            "title": "City Tour",
            "content": "<p>Kathmandu sightseeing.</p>",
            "coverImage": "https://images.example.com/city.jpg",
            "isPublished": true
        }))
        .await;

    // Case-insensitive substring search matches only the first blog
    let search_resp = fixture
        .client
        .get(fixture.url("/api/blogs?q=trek"))
        .send()
        .await
        .unwrap();
    let search_body: Value = search_resp.json().await.unwrap();
    let results = search_body["data"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["title"], "Nepal Trekking Guide");

    // Get by slug
    let slug_resp = fixture
        .client
        .get(fixture.url("/api/blogs/slug/nepal-trekking-guide"))
        .send()
        .await
        .unwrap();
    assert_eq!(slug_resp.status(), 200);

    // Update content, other fields preserved
    let update_resp = fixture
        .client
        .put(fixture.url(&format!("/api/blogs/{}", blog_id)))
        .json(&json!({ "content": "<p>Updated.</p>" }))
        .send()
        .await
        .unwrap();
    let update_body: Value = update_resp.json().await.unwrap();
    assert_eq!(update_body["data"]["content"], "<p>Updated.</p>");
    assert_eq!(update_body["data"]["excerpt"], "Permits and packing.");
    assert_eq!(update_body["data"]["tags"][0], "trekking");

    // Delete
    let delete_resp = fixture
        .client
        .delete(fixture.url(&format!("/api/blogs/{}", blog_id)))
        .send()
        .await
        .unwrap();
    assert_eq!(delete_resp.status(), 200);

    let get_deleted = fixture
        .client
        .get(fixture.url(&format!("/api/blogs/{}", blog_id)))
        .send()
        .await
        .unwrap();
    assert_eq!(get_deleted.status(), 404);
}

#[tokio::test]
async fn test_similar_tours_prune_dangling_and_unpublished() {
    let fixture = TestFixture::new().await;

    let published = fixture
        .create_tour(json!({ "title": "Target Trek", "category": "Trekking", "isPublished": true }))
        .await;
    let draft = fixture
        .create_tour(json!({ "title": "Draft Trek", "category": "Trekking", "isPublished": false }))
        .await;

    let source = fixture
        .create_tour(json!({
            "title": "Source Trek",
            "category": "Trekking",
            "isPublished": true,
            "similarTours": [
                published["data"]["id"],
                draft["data"]["id"],
                "no-such-tour"
            ]
        }))
        .await;
    let source_id = source["data"]["id"].as_str().unwrap();

    let resp = fixture
        .client
        .get(fixture.url(&format!("/api/tours/{}/similar", source_id)))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    let similar = body["data"].as_array().unwrap();
    assert_eq!(similar.len(), 1);
    assert_eq!(similar[0]["title"], "Target Trek");

    // The stored reference list itself is returned untouched
    let raw_resp = fixture
        .client
        .get(fixture.url(&format!("/api/tours/{}", source_id)))
        .send()
        .await
        .unwrap();
    let raw: Value = raw_resp.json().await.unwrap();
    assert_eq!(raw["data"]["similarTours"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_homepage_roundtrip_and_featured_tours() {
    let fixture = TestFixture::new().await;

    // Default document is installed at migration time
    let default_resp = fixture
        .client
        .get(fixture.url("/api/homepage"))
        .send()
        .await
        .unwrap();
    assert_eq!(default_resp.status(), 200);
    let default_body: Value = default_resp.json().await.unwrap();
    assert_eq!(default_body["data"]["enabledSections"]["hero"], true);
    assert_eq!(
        default_body["data"]["featuredTours"].as_array().unwrap().len(),
        0
    );

    let tour = fixture
        .create_tour(json!({ "title": "Featured Trek", "category": "Trekking", "isPublished": true }))
        .await;
    let tour_id = tour["data"]["id"].as_str().unwrap();

    // Replace the document with a featured list containing a dangling id
    let mut homepage = default_body["data"].clone();
    homepage["featuredTours"] = json!([tour_id, "gone-tour"]);
    homepage["enabledSections"]["newsletter"] = json!(false);

    let put_resp = fixture
        .client
        .put(fixture.url("/api/homepage"))
        .json(&homepage)
        .send()
        .await
        .unwrap();
    assert_eq!(put_resp.status(), 200);

    let get_resp = fixture
        .client
        .get(fixture.url("/api/homepage"))
        .send()
        .await
        .unwrap();
    let get_body: Value = get_resp.json().await.unwrap();
    assert_eq!(get_body["data"]["enabledSections"]["newsletter"], false);
    assert_eq!(get_body["data"]["featuredTours"].as_array().unwrap().len(), 2);

    // Resolution drops the dangling reference
    let featured_resp = fixture
        .client
        .get(fixture.url("/api/homepage/featured-tours"))
        .send()
        .await
        .unwrap();
    let featured_body: Value = featured_resp.json().await.unwrap();
    let featured = featured_body["data"].as_array().unwrap();
    assert_eq!(featured.len(), 1);
    assert_eq!(featured[0]["id"], tour_id);
}

#[tokio::test]
async fn test_contact_message_lifecycle() {
    let fixture = TestFixture::new().await;

    let create_resp = fixture
        .client
        .post(fixture.url("/api/messages"))
        .json(&json!({
            "name": "Jamie",
            "email": "jamie@example.com",
            "message": "Do you run winter treks?"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(create_resp.status(), 200);
    let create_body: Value = create_resp.json().await.unwrap();
    let message_id = create_body["data"]["id"].as_str().unwrap();
    assert_eq!(create_body["data"]["isRead"], false);

    // Mark read
    let read_resp = fixture
        .client
        .put(fixture.url(&format!("/api/messages/{}/read", message_id)))
        .send()
        .await
        .unwrap();
    assert_eq!(read_resp.status(), 200);
    let read_body: Value = read_resp.json().await.unwrap();
    assert_eq!(read_body["data"]["isRead"], true);

    // List
    let list_resp = fixture
        .client
        .get(fixture.url("/api/messages"))
        .send()
        .await
        .unwrap();
    let list_body: Value = list_resp.json().await.unwrap();
    assert_eq!(list_body["data"].as_array().unwrap().len(), 1);

    // Delete
    let delete_resp = fixture
        .client
        .delete(fixture.url(&format!("/api/messages/{}", message_id)))
        .send()
        .await
        .unwrap();
    assert_eq!(delete_resp.status(), 200);

    let empty_resp = fixture
        .client
        .get(fixture.url("/api/messages"))
        .send()
        .await
        .unwrap();
    let empty_body: Value = empty_resp.json().await.unwrap();
    assert_eq!(empty_body["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_dashboard_stats() {
    let fixture = TestFixture::new().await;

    fixture
        .create_tour(json!({ "title": "T1", "category": "Trekking", "isPublished": true }))
        .await;
    fixture
        .create_tour(json!({ "title": "T2", "category": "Trekking", "isPublished": false }))
        .await;
    fixture
        .create_blog(json!({ "title": "B1", "content": "x", "isPublished": true }))
        .await;
    fixture
        .client
        .post(fixture.url("/api/messages"))
        .json(&json!({ "name": "A", "email": "a@example.com", "message": "Hi" }))
        .send()
        .await
        .unwrap();

    let resp = fixture
        .client
        .get(fixture.url("/api/dashboard/stats"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["toursCount"], 2);
    assert_eq!(body["data"]["publishedToursCount"], 1);
    assert_eq!(body["data"]["blogsCount"], 1);
    assert_eq!(body["data"]["publishedBlogsCount"], 1);
    assert_eq!(body["data"]["messagesCount"], 1);
}

#[tokio::test]
async fn test_validation_errors() {
    let fixture = TestFixture::new().await;

    // Tour with empty title
    let resp = fixture
        .client
        .post(fixture.url("/api/tours"))
        .json(&json!({ "title": "   ", "category": "Trekking" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    // Contact message without a message body
    let resp2 = fixture
        .client
        .post(fixture.url("/api/messages"))
        .json(&json!({ "name": "A", "email": "a@example.com", "message": "" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp2.status(), 400);
}

#[tokio::test]
async fn test_not_found_errors() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .get(fixture.url("/api/tours/non-existent-id"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "NOT_FOUND");

    // Update on a missing id leaves the collection unchanged
    let update_resp = fixture
        .client
        .put(fixture.url("/api/tours/non-existent-id"))
        .json(&json!({ "isPublished": true }))
        .send()
        .await
        .unwrap();
    assert_eq!(update_resp.status(), 404);

    let list_resp = fixture
        .client
        .get(fixture.url("/api/tours"))
        .send()
        .await
        .unwrap();
    let list_body: Value = list_resp.json().await.unwrap();
    assert_eq!(list_body["data"].as_array().unwrap().len(), 0);

    // Delete on a missing id fails the same way
    let delete_resp = fixture
        .client
        .delete(fixture.url("/api/tours/non-existent-id"))
        .send()
        .await
        .unwrap();
    assert_eq!(delete_resp.status(), 404);

    let missing_slug_resp = fixture
        .client
        .get(fixture.url("/api/blogs/slug/no-such-slug"))
        .send()
        .await
        .unwrap();
    assert_eq!(missing_slug_resp.status(), 404);
}
