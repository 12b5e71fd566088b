//! Editing session for one blog post.

use std::time::Instant;

use crate::models::blog_post::{BlogPost, UpdateBlogPost};
use crate::models::trip::MetaPatch;

use super::status::{SaveTracker, SessionError, SessionStatus};

pub struct BlogSession {
    post_id: String,

    slug: String,
    title: String,
    excerpt: String,
    content: String,
    cover_image: String,
    author: String,
    published: bool,
    meta_title: String,
    meta_description: String,
    meta_og_image: String,
    tags: Vec<String>,

    tracker: SaveTracker,
}

impl BlogSession {
    /// Build a draft mirroring the stored post.
    pub fn new(post: &BlogPost) -> Self {
        Self {
            post_id: post.id.clone(),
            slug: post.slug.clone(),
            title: post.title.clone(),
            excerpt: post.excerpt.clone().unwrap_or_default(),
            content: post.content.clone(),
            cover_image: post.cover_image.clone().unwrap_or_default(),
            author: post.author.clone().unwrap_or_default(),
            published: post.published,
            meta_title: post.meta_title.clone().unwrap_or_default(),
            meta_description: post.meta_description.clone().unwrap_or_default(),
            meta_og_image: post.meta_og_image.clone().unwrap_or_default(),
            tags: post.tags.as_ref().map(|t| t.0.clone()).unwrap_or_default(),
            tracker: SaveTracker::new(),
        }
    }

    pub fn post_id(&self) -> &str {
        &self.post_id
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn set_slug(&mut self, value: impl Into<String>) {
        self.slug = value.into();
        self.tracker.mark_dirty();
    }

    pub fn set_title(&mut self, value: impl Into<String>) {
        self.title = value.into();
        self.tracker.mark_dirty();
    }

    pub fn set_excerpt(&mut self, value: impl Into<String>) {
        self.excerpt = value.into();
        self.tracker.mark_dirty();
    }

    pub fn set_content(&mut self, value: impl Into<String>) {
        self.content = value.into();
        self.tracker.mark_dirty();
    }

    pub fn set_cover_image(&mut self, value: impl Into<String>) {
        self.cover_image = value.into();
        self.tracker.mark_dirty();
    }

    pub fn set_author(&mut self, value: impl Into<String>) {
        self.author = value.into();
        self.tracker.mark_dirty();
    }

    pub fn published(&self) -> bool {
        self.published
    }

    pub fn set_published(&mut self, published: bool) {
        self.published = published;
        self.tracker.mark_dirty();
    }

    pub fn set_meta_title(&mut self, value: impl Into<String>) {
        self.meta_title = value.into();
        self.tracker.mark_dirty();
    }

    pub fn set_meta_description(&mut self, value: impl Into<String>) {
        self.meta_description = value.into();
        self.tracker.mark_dirty();
    }

    pub fn set_meta_og_image(&mut self, value: impl Into<String>) {
        self.meta_og_image = value.into();
        self.tracker.mark_dirty();
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Add a tag. Whitespace is trimmed and duplicates are ignored;
    /// returns whether the tag was actually added.
    pub fn add_tag(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() || self.tags.iter().any(|t| t == tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        self.tracker.mark_dirty();
        true
    }

    /// Remove a tag by value.
    pub fn remove_tag(&mut self, tag: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|t| t != tag);
        let removed = self.tags.len() != before;
        if removed {
            self.tracker.mark_dirty();
        }
        removed
    }

    /// Start a save: transitions to `Saving` and returns the merge-patch
    /// payload for `PUT /api/blog/{id}`. Rejected while a save is in
    /// flight. `publishedAt` is never part of the payload; the server
    /// stamps it on the first publish.
    pub fn begin_save(&mut self) -> Result<UpdateBlogPost, SessionError> {
        self.tracker.begin_save()?;

        Ok(UpdateBlogPost {
            slug: Some(self.slug.clone()),
            title: Some(self.title.clone()),
            excerpt: Some(Some(self.excerpt.clone())),
            content: Some(self.content.clone()),
            cover_image: Some(Some(self.cover_image.clone())),
            author: Some(Some(self.author.clone())),
            published: Some(self.published),
            meta: Some(MetaPatch {
                title: Some(Some(self.meta_title.clone())),
                description: Some(Some(self.meta_description.clone())),
                og_image: Some(Some(self.meta_og_image.clone())),
            }),
            tags: Some(Some(self.tags.clone())),
        })
    }

    pub fn complete_save(&mut self, now: Instant) {
        self.tracker.complete_save(now);
    }

    pub fn fail_save(&mut self, message: impl Into<String>) {
        self.tracker.fail_save(message);
    }

    pub fn status_at(&self, now: Instant) -> SessionStatus {
        self.tracker.status_at(now)
    }

    pub fn blocks_navigation(&self) -> bool {
        self.tracker.blocks_navigation()
    }

    pub fn message(&self) -> Option<&str> {
        self.tracker.message()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sqlx::types::Json;

    fn stored_post() -> BlogPost {
        let now = Utc::now();
        BlogPost {
            id: "p1".into(),
            slug: "ten-tips".into(),
            title: "Ten Tips".into(),
            excerpt: Some("Short intro".into()),
            content: "<p>Body</p>".into(),
            cover_image: None,
            author: Some("Maria".into()),
            published: false,
            meta_title: None,
            meta_description: None,
            meta_og_image: None,
            tags: Some(Json(vec!["travel".into()])),
            created_at: now,
            updated_at: now,
            published_at: None,
        }
    }

    #[test]
    fn duplicate_and_blank_tags_are_ignored() {
        let mut session = BlogSession::new(&stored_post());

        assert!(session.add_tag("  asia "));
        assert!(!session.add_tag("asia"));
        assert!(!session.add_tag("travel"));
        assert!(!session.add_tag("   "));
        assert_eq!(session.tags(), ["travel", "asia"]);
    }

    #[test]
    fn remove_tag_by_value() {
        let mut session = BlogSession::new(&stored_post());
        session.add_tag("asia");

        assert!(session.remove_tag("travel"));
        assert!(!session.remove_tag("travel"));
        assert_eq!(session.tags(), ["asia"]);
    }

    #[test]
    fn save_payload_carries_the_whole_form() {
        let mut session = BlogSession::new(&stored_post());
        session.set_published(true);
        session.set_cover_image("/images/cover.jpg");

        let patch = session.begin_save().unwrap();
        assert_eq!(patch.slug.as_deref(), Some("ten-tips"));
        assert_eq!(patch.published, Some(true));
        assert_eq!(patch.cover_image, Some(Some("/images/cover.jpg".into())));
        assert_eq!(patch.author, Some(Some("Maria".into())));
        assert_eq!(patch.tags, Some(Some(vec!["travel".to_string()])));
    }

    #[test]
    fn double_submit_is_rejected() {
        let mut session = BlogSession::new(&stored_post());
        session.set_title("Eleven Tips");

        assert!(session.begin_save().is_ok());
        assert!(matches!(
            session.begin_save(),
            Err(SessionError::SaveInFlight)
        ));
        session.fail_save("Failed to save");
        assert!(session.begin_save().is_ok());
    }

    #[test]
    fn tag_edits_mark_the_draft_dirty() {
        let mut session = BlogSession::new(&stored_post());
        assert!(!session.blocks_navigation());

        session.add_tag("asia");
        assert!(session.blocks_navigation());

        session.begin_save().unwrap();
        session.complete_save(Instant::now());
        assert!(!session.blocks_navigation());
    }
}
