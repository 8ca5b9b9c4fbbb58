//! Database repository for all content CRUD and filtering operations.
//!
//! List operations return rows in insertion order, which is the storage order
//! the admin and public listings observe.

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use sqlx::{Row, SqlitePool};

use crate::errors::AppError;
use crate::models::{
    Blog, ContactMessage, CreateBlogRequest, CreateMessageRequest, CreateTourRequest, Currency,
    DashboardStats, Difficulty, HomepageData, Tour, UpdateBlogRequest, UpdateTourRequest,
};
use crate::slug::{generate_slug, suffixed_slug};

/// Category sentinel meaning "no category filter".
pub const ALL_CATEGORIES: &str = "All";

const TOUR_COLUMNS: &str = "id, title, slug, category, duration, price, currency, highlights, \
     itinerary, images, is_published, created_at, description, whats_included, whats_excluded, \
     important_info, cancellation_policy, faq, similar_tours, difficulty, max_altitude, \
     group_size, best_time, detailed_description, preparation_guide, what_to_expect, reviews, \
     custom_styles";

const BLOG_COLUMNS: &str = "id, title, slug, content, excerpt, cover_image, is_published, \
     created_at, author, images, tags, read_time, views, category, featured, custom_styles";

/// Publish-status filter used by the admin list screens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Published,
    Draft,
}

/// Admin list filter for tours: text search, category and publish status.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TourFilter {
    pub q: Option<String>,
    pub category: Option<String>,
    #[serde(default)]
    pub status: StatusFilter,
}

/// Admin list filter for blogs: text search and publish status.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlogFilter {
    pub q: Option<String>,
    #[serde(default)]
    pub status: StatusFilter,
}

impl StatusFilter {
    fn matches(&self, is_published: bool) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Published => is_published,
            StatusFilter::Draft => !is_published,
        }
    }
}

/// Apply the admin filter pipeline to a tour list, preserving order.
pub fn filter_tours(tours: Vec<Tour>, filter: &TourFilter) -> Vec<Tour> {
    let query = filter.q.as_deref().map(str::to_lowercase);
    tours
        .into_iter()
        .filter(|t| filter.status.matches(t.is_published))
        .filter(|t| match filter.category.as_deref() {
            None | Some(ALL_CATEGORIES) => true,
            Some(category) => t.category == category,
        })
        .filter(|t| match &query {
            None => true,
            Some(q) => {
                q.is_empty()
                    || t.title.to_lowercase().contains(q)
                    || t.description
                        .as_deref()
                        .is_some_and(|d| d.to_lowercase().contains(q))
            }
        })
        .collect()
}

/// Apply the admin filter pipeline to a blog list, preserving order.
pub fn filter_blogs(blogs: Vec<Blog>, filter: &BlogFilter) -> Vec<Blog> {
    let query = filter.q.as_deref().map(str::to_lowercase);
    blogs
        .into_iter()
        .filter(|b| filter.status.matches(b.is_published))
        .filter(|b| match &query {
            None => true,
            Some(q) => {
                q.is_empty()
                    || b.title.to_lowercase().contains(q)
                    || b.excerpt
                        .as_deref()
                        .is_some_and(|e| e.to_lowercase().contains(q))
                    || b.content.to_lowercase().contains(q)
            }
        })
        .collect()
}

/// Database repository for all data operations.
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find a free slug in `table` by suffixing the base with `-2`, `-3`, ...
    /// `exclude_id` keeps an entity's own slug valid during updates.
    async fn unique_slug(
        &self,
        table: &str,
        base: &str,
        exclude_id: Option<&str>,
    ) -> Result<String, AppError> {
        let base = if base.is_empty() { "untitled" } else { base };
        let sql = format!("SELECT id FROM {} WHERE slug = ?", table);

        let mut attempt = 1u32;
        loop {
            let candidate = suffixed_slug(base, attempt);
            let taken = sqlx::query(&sql)
                .bind(&candidate)
                .fetch_optional(&self.pool)
                .await?;

            match taken {
                None => return Ok(candidate),
                Some(row) => {
                    let owner: String = row.get("id");
                    if exclude_id == Some(owner.as_str()) {
                        return Ok(candidate);
                    }
                    attempt += 1;
                }
            }
        }
    }

    // ==================== TOUR OPERATIONS ====================

    /// List all tours with the admin filter pipeline applied.
    pub async fn list_tours(&self, filter: &TourFilter) -> Result<Vec<Tour>, AppError> {
        let rows = sqlx::query(&format!("SELECT {} FROM tours ORDER BY rowid", TOUR_COLUMNS))
            .fetch_all(&self.pool)
            .await?;

        let tours = rows.iter().map(tour_from_row).collect();
        Ok(filter_tours(tours, filter))
    }

    /// List published tours, optionally narrowed to an exact category.
    /// The sentinel category "All" means no category filter.
    pub async fn list_published_tours(
        &self,
        category: Option<&str>,
    ) -> Result<Vec<Tour>, AppError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM tours WHERE is_published = 1 ORDER BY rowid",
            TOUR_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        let tours: Vec<Tour> = rows.iter().map(tour_from_row).collect();
        Ok(match category {
            None | Some(ALL_CATEGORIES) => tours,
            Some(category) => tours.into_iter().filter(|t| t.category == category).collect(),
        })
    }

    /// Get a tour by ID.
    pub async fn get_tour(&self, id: &str) -> Result<Option<Tour>, AppError> {
        let row = sqlx::query(&format!("SELECT {} FROM tours WHERE id = ?", TOUR_COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(tour_from_row))
    }

    /// Get a tour by slug.
    pub async fn get_tour_by_slug(&self, slug: &str) -> Result<Option<Tour>, AppError> {
        let row = sqlx::query(&format!("SELECT {} FROM tours WHERE slug = ?", TOUR_COLUMNS))
            .bind(slug)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(tour_from_row))
    }

    /// Create a new tour with a server-assigned id, timestamp and unique slug.
    pub async fn create_tour(&self, request: &CreateTourRequest) -> Result<Tour, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();

        let base = match request.slug.as_deref() {
            Some(s) if !s.trim().is_empty() => generate_slug(s),
            _ => generate_slug(&request.title),
        };
        let slug = self.unique_slug("tours", &base, None).await?;

        let tour = Tour {
            id,
            title: request.title.clone(),
            slug,
            category: request.category.clone(),
            duration: request.duration.clone(),
            price: request.price,
            currency: request.currency.clone(),
            highlights: request.highlights.clone(),
            itinerary: request.itinerary.clone(),
            images: request.images.clone(),
            is_published: request.is_published,
            created_at: now,
            description: request.description.clone(),
            whats_included: request.whats_included.clone(),
            whats_excluded: request.whats_excluded.clone(),
            important_info: request.important_info.clone(),
            cancellation_policy: request.cancellation_policy.clone(),
            faq: request.faq.clone(),
            similar_tours: request.similar_tours.clone(),
            difficulty: request.difficulty.clone(),
            max_altitude: request.max_altitude.clone(),
            group_size: request.group_size.clone(),
            best_time: request.best_time.clone(),
            detailed_description: request.detailed_description.clone(),
            preparation_guide: request.preparation_guide.clone(),
            what_to_expect: request.what_to_expect.clone(),
            reviews: request.reviews.clone(),
            custom_styles: request.custom_styles.clone(),
        };

        self.insert_tour(&tour).await?;
        Ok(tour)
    }

    async fn insert_tour(&self, tour: &Tour) -> Result<(), AppError> {
        sqlx::query(&format!(
            "INSERT INTO tours ({}) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, \
             ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            TOUR_COLUMNS
        ))
        .bind(&tour.id)
        .bind(&tour.title)
        .bind(&tour.slug)
        .bind(&tour.category)
        .bind(&tour.duration)
        .bind(tour.price)
        .bind(tour.currency.as_ref().map(Currency::as_str))
        .bind(to_json(&tour.highlights))
        .bind(to_json(&tour.itinerary))
        .bind(to_json(&tour.images))
        .bind(tour.is_published as i32)
        .bind(&tour.created_at)
        .bind(&tour.description)
        .bind(to_json_opt(&tour.whats_included))
        .bind(to_json_opt(&tour.whats_excluded))
        .bind(to_json_opt(&tour.important_info))
        .bind(&tour.cancellation_policy)
        .bind(to_json_opt(&tour.faq))
        .bind(to_json_opt(&tour.similar_tours))
        .bind(tour.difficulty.as_ref().map(Difficulty::as_str))
        .bind(&tour.max_altitude)
        .bind(&tour.group_size)
        .bind(&tour.best_time)
        .bind(&tour.detailed_description)
        .bind(&tour.preparation_guide)
        .bind(&tour.what_to_expect)
        .bind(to_json_opt(&tour.reviews))
        .bind(to_json_opt(&tour.custom_styles))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Update a tour by shallow merge. Absent request fields are preserved.
    pub async fn update_tour(
        &self,
        id: &str,
        request: &UpdateTourRequest,
    ) -> Result<Tour, AppError> {
        let existing = self
            .get_tour(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Tour {} not found", id)))?;

        let slug = match request.slug.as_deref() {
            Some(s) if !s.trim().is_empty() => {
                self.unique_slug("tours", &generate_slug(s), Some(id)).await?
            }
            _ => existing.slug.clone(),
        };

        let updated = Tour {
            id: existing.id.clone(),
            title: request.title.clone().unwrap_or(existing.title),
            slug,
            category: request.category.clone().unwrap_or(existing.category),
            duration: request.duration.clone().unwrap_or(existing.duration),
            price: request.price.unwrap_or(existing.price),
            currency: request.currency.clone().or(existing.currency),
            highlights: request.highlights.clone().unwrap_or(existing.highlights),
            itinerary: request.itinerary.clone().unwrap_or(existing.itinerary),
            images: request.images.clone().unwrap_or(existing.images),
            is_published: request.is_published.unwrap_or(existing.is_published),
            created_at: existing.created_at,
            description: request.description.clone().or(existing.description),
            whats_included: request.whats_included.clone().or(existing.whats_included),
            whats_excluded: request.whats_excluded.clone().or(existing.whats_excluded),
            important_info: request.important_info.clone().or(existing.important_info),
            cancellation_policy: request
                .cancellation_policy
                .clone()
                .or(existing.cancellation_policy),
            faq: request.faq.clone().or(existing.faq),
            similar_tours: request.similar_tours.clone().or(existing.similar_tours),
            difficulty: request.difficulty.clone().or(existing.difficulty),
            max_altitude: request.max_altitude.clone().or(existing.max_altitude),
            group_size: request.group_size.clone().or(existing.group_size),
            best_time: request.best_time.clone().or(existing.best_time),
            detailed_description: request
                .detailed_description
                .clone()
                .or(existing.detailed_description),
            preparation_guide: request
                .preparation_guide
                .clone()
                .or(existing.preparation_guide),
            what_to_expect: request.what_to_expect.clone().or(existing.what_to_expect),
            reviews: request.reviews.clone().or(existing.reviews),
            custom_styles: request.custom_styles.clone().or(existing.custom_styles),
        };

        sqlx::query(
            "UPDATE tours SET title = ?, slug = ?, category = ?, duration = ?, price = ?, \
             currency = ?, highlights = ?, itinerary = ?, images = ?, is_published = ?, \
             description = ?, whats_included = ?, whats_excluded = ?, important_info = ?, \
             cancellation_policy = ?, faq = ?, similar_tours = ?, difficulty = ?, \
             max_altitude = ?, group_size = ?, best_time = ?, detailed_description = ?, \
             preparation_guide = ?, what_to_expect = ?, reviews = ?, custom_styles = ? \
             WHERE id = ?",
        )
        .bind(&updated.title)
        .bind(&updated.slug)
        .bind(&updated.category)
        .bind(&updated.duration)
        .bind(updated.price)
        .bind(updated.currency.as_ref().map(Currency::as_str))
        .bind(to_json(&updated.highlights))
        .bind(to_json(&updated.itinerary))
        .bind(to_json(&updated.images))
        .bind(updated.is_published as i32)
        .bind(&updated.description)
        .bind(to_json_opt(&updated.whats_included))
        .bind(to_json_opt(&updated.whats_excluded))
        .bind(to_json_opt(&updated.important_info))
        .bind(&updated.cancellation_policy)
        .bind(to_json_opt(&updated.faq))
        .bind(to_json_opt(&updated.similar_tours))
        .bind(updated.difficulty.as_ref().map(Difficulty::as_str))
        .bind(&updated.max_altitude)
        .bind(&updated.group_size)
        .bind(&updated.best_time)
        .bind(&updated.detailed_description)
        .bind(&updated.preparation_guide)
        .bind(&updated.what_to_expect)
        .bind(to_json_opt(&updated.reviews))
        .bind(to_json_opt(&updated.custom_styles))
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(updated)
    }

    /// Delete a tour.
    pub async fn delete_tour(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM tours WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Tour {} not found", id)));
        }

        Ok(())
    }

    /// Resolve a tour's similar-tour references to published tours,
    /// silently dropping dangling ids.
    pub async fn similar_tours(&self, id: &str) -> Result<Vec<Tour>, AppError> {
        let tour = self
            .get_tour(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Tour {} not found", id)))?;

        self.resolve_published_tours(&tour.similar_tours.unwrap_or_default())
            .await
    }

    /// Resolve a list of tour ids to the subset that exists and is published,
    /// preserving the reference order.
    pub async fn resolve_published_tours(&self, ids: &[String]) -> Result<Vec<Tour>, AppError> {
        let mut tours = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(tour) = self.get_tour(id).await? {
                if tour.is_published {
                    tours.push(tour);
                }
            }
        }
        Ok(tours)
    }

    // ==================== BLOG OPERATIONS ====================

    /// List all blogs with the admin filter pipeline applied.
    pub async fn list_blogs(&self, filter: &BlogFilter) -> Result<Vec<Blog>, AppError> {
        let rows = sqlx::query(&format!("SELECT {} FROM blogs ORDER BY rowid", BLOG_COLUMNS))
            .fetch_all(&self.pool)
            .await?;

        let blogs = rows.iter().map(blog_from_row).collect();
        Ok(filter_blogs(blogs, filter))
    }

    /// List published blogs in insertion order.
    pub async fn list_published_blogs(&self) -> Result<Vec<Blog>, AppError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM blogs WHERE is_published = 1 ORDER BY rowid",
            BLOG_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(blog_from_row).collect())
    }

    /// Get a blog by ID.
    pub async fn get_blog(&self, id: &str) -> Result<Option<Blog>, AppError> {
        let row = sqlx::query(&format!("SELECT {} FROM blogs WHERE id = ?", BLOG_COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(blog_from_row))
    }

    /// Get a blog by slug.
    pub async fn get_blog_by_slug(&self, slug: &str) -> Result<Option<Blog>, AppError> {
        let row = sqlx::query(&format!("SELECT {} FROM blogs WHERE slug = ?", BLOG_COLUMNS))
            .bind(slug)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(blog_from_row))
    }

    /// Create a new blog with a server-assigned id, timestamp and unique slug.
    pub async fn create_blog(&self, request: &CreateBlogRequest) -> Result<Blog, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();

        let base = match request.slug.as_deref() {
            Some(s) if !s.trim().is_empty() => generate_slug(s),
            _ => generate_slug(&request.title),
        };
        let slug = self.unique_slug("blogs", &base, None).await?;

        let blog = Blog {
            id,
            title: request.title.clone(),
            slug,
            content: request.content.clone(),
            excerpt: request.excerpt.clone(),
            cover_image: request.cover_image.clone(),
            is_published: request.is_published,
            created_at: now,
            author: request.author.clone(),
            images: request.images.clone(),
            tags: request.tags.clone(),
            read_time: request.read_time.clone(),
            views: 0,
            category: request.category.clone(),
            featured: request.featured,
            custom_styles: request.custom_styles.clone(),
        };

        sqlx::query(&format!(
            "INSERT INTO blogs ({}) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            BLOG_COLUMNS
        ))
        .bind(&blog.id)
        .bind(&blog.title)
        .bind(&blog.slug)
        .bind(&blog.content)
        .bind(&blog.excerpt)
        .bind(&blog.cover_image)
        .bind(blog.is_published as i32)
        .bind(&blog.created_at)
        .bind(&blog.author)
        .bind(to_json_opt(&blog.images))
        .bind(to_json_opt(&blog.tags))
        .bind(&blog.read_time)
        .bind(blog.views)
        .bind(&blog.category)
        .bind(blog.featured as i32)
        .bind(to_json_opt(&blog.custom_styles))
        .execute(&self.pool)
        .await?;

        Ok(blog)
    }

    /// Update a blog by shallow merge. Absent request fields are preserved.
    pub async fn update_blog(
        &self,
        id: &str,
        request: &UpdateBlogRequest,
    ) -> Result<Blog, AppError> {
        let existing = self
            .get_blog(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Blog {} not found", id)))?;

        let slug = match request.slug.as_deref() {
            Some(s) if !s.trim().is_empty() => {
                self.unique_slug("blogs", &generate_slug(s), Some(id)).await?
            }
            _ => existing.slug.clone(),
        };

        let updated = Blog {
            id: existing.id.clone(),
            title: request.title.clone().unwrap_or(existing.title),
            slug,
            content: request.content.clone().unwrap_or(existing.content),
            excerpt: request.excerpt.clone().or(existing.excerpt),
            cover_image: request.cover_image.clone().unwrap_or(existing.cover_image),
            is_published: request.is_published.unwrap_or(existing.is_published),
            created_at: existing.created_at,
            author: request.author.clone().or(existing.author),
            images: request.images.clone().or(existing.images),
            tags: request.tags.clone().or(existing.tags),
            read_time: request.read_time.clone().or(existing.read_time),
            views: request.views.unwrap_or(existing.views),
            category: request.category.clone().or(existing.category),
            featured: request.featured.unwrap_or(existing.featured),
            custom_styles: request.custom_styles.clone().or(existing.custom_styles),
        };

        sqlx::query(
            "UPDATE blogs SET title = ?, slug = ?, content = ?, excerpt = ?, cover_image = ?, \
             is_published = ?, author = ?, images = ?, tags = ?, read_time = ?, views = ?, \
             category = ?, featured = ?, custom_styles = ? WHERE id = ?",
        )
        .bind(&updated.title)
        .bind(&updated.slug)
        .bind(&updated.content)
        .bind(&updated.excerpt)
        .bind(&updated.cover_image)
        .bind(updated.is_published as i32)
        .bind(&updated.author)
        .bind(to_json_opt(&updated.images))
        .bind(to_json_opt(&updated.tags))
        .bind(&updated.read_time)
        .bind(updated.views)
        .bind(&updated.category)
        .bind(updated.featured as i32)
        .bind(to_json_opt(&updated.custom_styles))
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(updated)
    }

    /// Delete a blog.
    pub async fn delete_blog(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM blogs WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Blog {} not found", id)));
        }

        Ok(())
    }

    // ==================== HOMEPAGE OPERATIONS ====================

    /// Get the homepage configuration document.
    pub async fn get_homepage(&self) -> Result<HomepageData, AppError> {
        let row = sqlx::query("SELECT data FROM homepage WHERE id = 1")
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => {
                let data: String = row.get("data");
                serde_json::from_str(&data).map_err(|e| {
                    AppError::Internal(format!("Corrupt homepage document: {}", e))
                })
            }
            None => Ok(HomepageData::default()),
        }
    }

    /// Replace the homepage configuration document.
    pub async fn update_homepage(&self, data: &HomepageData) -> Result<HomepageData, AppError> {
        let json = serde_json::to_string(data)
            .map_err(|e| AppError::Internal(format!("Failed to encode homepage: {}", e)))?;
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT INTO homepage (id, data, updated_at) VALUES (1, ?, ?) \
             ON CONFLICT(id) DO UPDATE SET data = excluded.data, updated_at = excluded.updated_at",
        )
        .bind(&json)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(data.clone())
    }

    /// Resolve the homepage featured-tour references to published tours,
    /// silently dropping dangling ids.
    pub async fn featured_tours(&self) -> Result<Vec<Tour>, AppError> {
        let homepage = self.get_homepage().await?;
        self.resolve_published_tours(&homepage.featured_tours).await
    }

    // ==================== MESSAGE OPERATIONS ====================

    /// List contact messages, newest first.
    pub async fn list_messages(&self) -> Result<Vec<ContactMessage>, AppError> {
        let rows = sqlx::query(
            "SELECT id, name, email, phone, message, created_at, is_read FROM messages \
             ORDER BY rowid DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(message_from_row).collect())
    }

    /// Store a contact-form submission.
    pub async fn create_message(
        &self,
        request: &CreateMessageRequest,
    ) -> Result<ContactMessage, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT INTO messages (id, name, email, phone, message, created_at, is_read) \
             VALUES (?, ?, ?, ?, ?, ?, 0)",
        )
        .bind(&id)
        .bind(&request.name)
        .bind(&request.email)
        .bind(&request.phone)
        .bind(&request.message)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(ContactMessage {
            id,
            name: request.name.clone(),
            email: request.email.clone(),
            phone: request.phone.clone(),
            message: request.message.clone(),
            created_at: now,
            is_read: false,
        })
    }

    /// Mark a contact message as read.
    pub async fn mark_message_read(&self, id: &str) -> Result<ContactMessage, AppError> {
        let result = sqlx::query("UPDATE messages SET is_read = 1 WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Message {} not found", id)));
        }

        let row = sqlx::query(
            "SELECT id, name, email, phone, message, created_at, is_read FROM messages \
             WHERE id = ?",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(message_from_row(&row))
    }

    /// Delete a contact message.
    pub async fn delete_message(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM messages WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Message {} not found", id)));
        }

        Ok(())
    }

    // ==================== DASHBOARD ====================

    /// Compute aggregate counts for the admin dashboard.
    pub async fn dashboard_stats(&self) -> Result<DashboardStats, AppError> {
        let row = sqlx::query(
            "SELECT \
               (SELECT COUNT(*) FROM tours) AS tours_count, \
               (SELECT COUNT(*) FROM blogs) AS blogs_count, \
               (SELECT COUNT(*) FROM messages) AS messages_count, \
               (SELECT COUNT(*) FROM tours WHERE is_published = 1) AS published_tours_count, \
               (SELECT COUNT(*) FROM blogs WHERE is_published = 1) AS published_blogs_count",
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(DashboardStats {
            tours_count: row.get("tours_count"),
            blogs_count: row.get("blogs_count"),
            messages_count: row.get("messages_count"),
            published_tours_count: row.get("published_tours_count"),
            published_blogs_count: row.get("published_blogs_count"),
        })
    }
}

// Helper functions for row conversion

fn tour_from_row(row: &sqlx::sqlite::SqliteRow) -> Tour {
    let is_published: i32 = row.get("is_published");
    let currency: Option<String> = row.get("currency");
    let difficulty: Option<String> = row.get("difficulty");

    Tour {
        id: row.get("id"),
        title: row.get("title"),
        slug: row.get("slug"),
        category: row.get("category"),
        duration: row.get("duration"),
        price: row.get("price"),
        currency: currency.as_deref().and_then(Currency::from_str),
        highlights: from_json(row.get("highlights")),
        itinerary: from_json(row.get("itinerary")),
        images: from_json(row.get("images")),
        is_published: is_published != 0,
        created_at: row.get("created_at"),
        description: row.get("description"),
        whats_included: from_json_opt(row.get("whats_included")),
        whats_excluded: from_json_opt(row.get("whats_excluded")),
        important_info: from_json_opt(row.get("important_info")),
        cancellation_policy: row.get("cancellation_policy"),
        faq: from_json_opt(row.get("faq")),
        similar_tours: from_json_opt(row.get("similar_tours")),
        difficulty: difficulty.as_deref().and_then(Difficulty::from_str),
        max_altitude: row.get("max_altitude"),
        group_size: row.get("group_size"),
        best_time: row.get("best_time"),
        detailed_description: row.get("detailed_description"),
        preparation_guide: row.get("preparation_guide"),
        what_to_expect: row.get("what_to_expect"),
        reviews: from_json_opt(row.get("reviews")),
        custom_styles: from_json_opt(row.get("custom_styles")),
    }
}

fn blog_from_row(row: &sqlx::sqlite::SqliteRow) -> Blog {
    let is_published: i32 = row.get("is_published");
    let featured: i32 = row.get("featured");

    Blog {
        id: row.get("id"),
        title: row.get("title"),
        slug: row.get("slug"),
        content: row.get("content"),
        excerpt: row.get("excerpt"),
        cover_image: row.get("cover_image"),
        is_published: is_published != 0,
        created_at: row.get("created_at"),
        author: row.get("author"),
        images: from_json_opt(row.get("images")),
        tags: from_json_opt(row.get("tags")),
        read_time: row.get("read_time"),
        views: row.get("views"),
        category: row.get("category"),
        featured: featured != 0,
        custom_styles: from_json_opt(row.get("custom_styles")),
    }
}

fn message_from_row(row: &sqlx::sqlite::SqliteRow) -> ContactMessage {
    let is_read: i32 = row.get("is_read");

    ContactMessage {
        id: row.get("id"),
        name: row.get("name"),
        email: row.get("email"),
        phone: row.get("phone"),
        message: row.get("message"),
        created_at: row.get("created_at"),
        is_read: is_read != 0,
    }
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

fn to_json_opt<T: Serialize>(value: &Option<T>) -> Option<String> {
    value.as_ref().map(|v| to_json(v))
}

fn from_json<T: DeserializeOwned + Default>(value: Option<String>) -> T {
    value
        .and_then(|s| serde_json::from_str(&s).ok())
        .unwrap_or_default()
}

fn from_json_opt<T: DeserializeOwned>(value: Option<String>) -> Option<T> {
    value.and_then(|s| serde_json::from_str(&s).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tour(title: &str, category: &str, published: bool) -> Tour {
        Tour {
            id: title.to_lowercase(),
            title: title.to_string(),
            slug: generate_slug(title),
            category: category.to_string(),
            duration: "5 Days".to_string(),
            price: 499.0,
            currency: Some(Currency::USD),
            highlights: Vec::new(),
            itinerary: Vec::new(),
            images: Vec::new(),
            is_published: published,
            created_at: "2024-01-01T00:00:00Z".to_string(),
            description: None,
            whats_included: None,
            whats_excluded: None,
            important_info: None,
            cancellation_policy: None,
            faq: None,
            similar_tours: None,
            difficulty: None,
            max_altitude: None,
            group_size: None,
            best_time: None,
            detailed_description: None,
            preparation_guide: None,
            what_to_expect: None,
            reviews: None,
            custom_styles: None,
        }
    }

    fn sample_blog(title: &str, content: &str, published: bool) -> Blog {
        Blog {
            id: title.to_lowercase(),
            title: title.to_string(),
            slug: generate_slug(title),
            content: content.to_string(),
            excerpt: None,
            cover_image: String::new(),
            is_published: published,
            created_at: "2024-01-01T00:00:00Z".to_string(),
            author: None,
            images: None,
            tags: None,
            read_time: None,
            views: 0,
            category: None,
            featured: false,
            custom_styles: None,
        }
    }

    #[test]
    fn test_status_filter_published_only() {
        let tours = vec![
            sample_tour("A", "Trekking", true),
            sample_tour("B", "Trekking", false),
            sample_tour("C", "Safari", true),
        ];
        let filter = TourFilter {
            status: StatusFilter::Published,
            ..Default::default()
        };

        let result = filter_tours(tours, &filter);
        let titles: Vec<&str> = result.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "C"]);
    }

    #[test]
    fn test_status_filter_draft_only() {
        let tours = vec![
            sample_tour("A", "Trekking", true),
            sample_tour("B", "Trekking", false),
        ];
        let filter = TourFilter {
            status: StatusFilter::Draft,
            ..Default::default()
        };

        let result = filter_tours(tours, &filter);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "B");
    }

    #[test]
    fn test_category_filter_exact_match() {
        let tours = vec![
            sample_tour("A", "Trekking", true),
            sample_tour("B", "Safari", true),
        ];
        let filter = TourFilter {
            category: Some("Safari".to_string()),
            ..Default::default()
        };

        let result = filter_tours(tours, &filter);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].category, "Safari");
    }

    #[test]
    fn test_category_sentinel_all_matches_everything() {
        let tours = vec![
            sample_tour("A", "Trekking", true),
            sample_tour("B", "Safari", true),
        ];
        let filter = TourFilter {
            category: Some(ALL_CATEGORIES.to_string()),
            ..Default::default()
        };

        assert_eq!(filter_tours(tours, &filter).len(), 2);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let blogs = vec![
            sample_blog("Nepal Trekking Guide", "All about treks", true),
            sample_blog("City Tour", "Kathmandu sightseeing", true),
        ];
        let filter = BlogFilter {
            q: Some("trek".to_string()),
            ..Default::default()
        };

        let result = filter_blogs(blogs, &filter);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Nepal Trekking Guide");
    }

    #[test]
    fn test_search_matches_content() {
        let blogs = vec![
            sample_blog("First", "nothing here", true),
            sample_blog("Second", "Visa requirements for NEPAL", true),
        ];
        let filter = BlogFilter {
            q: Some("nepal".to_string()),
            ..Default::default()
        };

        let result = filter_blogs(blogs, &filter);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Second");
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let tours = vec![
            sample_tour("A", "Trekking", true),
            sample_tour("B", "Safari", false),
        ];
        let filter = TourFilter {
            q: Some(String::new()),
            ..Default::default()
        };

        assert_eq!(filter_tours(tours, &filter).len(), 2);
    }

    #[test]
    fn test_combined_filters_preserve_order() {
        let tours = vec![
            sample_tour("Everest Trek", "Trekking", true),
            sample_tour("Annapurna Trek", "Trekking", true),
            sample_tour("Jungle Safari", "Safari", true),
            sample_tour("Hidden Trek", "Trekking", false),
        ];
        let filter = TourFilter {
            q: Some("trek".to_string()),
            category: Some("Trekking".to_string()),
            status: StatusFilter::Published,
        };

        let result = filter_tours(tours, &filter);
        let titles: Vec<&str> = result.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Everest Trek", "Annapurna Trek"]);
    }
}
