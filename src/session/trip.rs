//! Editing session for one trip.
//!
//! Holds a mutable draft of the trip decomposed into the sections the
//! admin form edits. Scalar fields mirror the stored values; list
//! sections use [`SectionList`] so entries keep a stable identity across
//! sibling deletions. On submit the draft is folded back into one full
//! `data` document and serialized as a single merge-patch request.

use std::time::Instant;

use crate::models::trip::{MetaPatch, Trip, UpdateTrip};
use crate::models::trip_data::{
    Accommodation, Activity, FaqEntry, GalleryImage, Hero, InfoTag, ItineraryDay, Overview,
    Pricing, PriceRow, SectionImage, TripData,
};

use super::list::{EntryId, SectionList};
use super::status::{SaveTracker, SessionError, SessionStatus};

/// Draft of one itinerary day. The day number is not stored: it is the
/// entry's position + 1, so days are renumbered simply by being
/// serialized after a deletion.
#[derive(Debug, Clone, Default)]
pub struct DayDraft {
    pub date: String,
    pub title: String,
    pub meals: String,
    pub accommodation: Option<String>,
    pub activities: SectionList<Activity>,
}

impl DayDraft {
    fn from_stored(day: ItineraryDay) -> Self {
        Self {
            date: day.date,
            title: day.title,
            meals: day.meals,
            accommodation: day.accommodation,
            activities: SectionList::from_values(day.activities),
        }
    }

    fn to_stored(&self, number: u32) -> ItineraryDay {
        ItineraryDay {
            day: number,
            date: self.date.clone(),
            title: self.title.clone(),
            meals: self.meals.clone(),
            accommodation: self.accommodation.clone(),
            activities: self.activities.values(),
        }
    }
}

pub struct TripSession {
    trip_id: String,

    // Scalar fields
    slug: String,
    featured: bool,
    meta_title: String,
    meta_description: String,
    meta_og_image: String,
    hero_title: String,
    hero_subtitle: String,
    overview_title: String,
    overview_image_src: String,
    overview_image_alt: String,
    pricing_title: String,
    pricing_description: String,

    // List sections
    gallery: SectionList<GalleryImage>,
    paragraphs: SectionList<String>,
    tags: SectionList<InfoTag>,
    prices: SectionList<PriceRow>,
    itinerary: SectionList<DayDraft>,
    accommodations: SectionList<Accommodation>,
    faq: SectionList<FaqEntry>,

    tracker: SaveTracker,
}

impl TripSession {
    /// Build a draft mirroring the stored entity.
    pub fn new(trip: &Trip) -> Self {
        let data: &TripData = &trip.data;
        let hero = data.hero.clone().unwrap_or_default();
        let overview = data.overview.clone().unwrap_or_default();
        let overview_image = overview.image.unwrap_or_default();
        let pricing = data.pricing.clone().unwrap_or_default();

        Self {
            trip_id: trip.id.clone(),
            slug: trip.slug.clone(),
            featured: trip.featured,
            meta_title: trip.meta_title.clone().unwrap_or_default(),
            meta_description: trip.meta_description.clone().unwrap_or_default(),
            meta_og_image: trip.meta_og_image.clone().unwrap_or_default(),
            hero_title: hero.title,
            hero_subtitle: hero.subtitle,
            overview_title: overview.title,
            overview_image_src: overview_image.src,
            overview_image_alt: overview_image.alt,
            pricing_title: pricing.title,
            pricing_description: pricing.description,
            gallery: SectionList::from_values(data.gallery.clone().unwrap_or_default()),
            paragraphs: SectionList::from_values(overview.paragraphs),
            tags: SectionList::from_values(overview.tags),
            prices: SectionList::from_values(pricing.prices),
            itinerary: SectionList::from_values(
                data.itinerary
                    .clone()
                    .unwrap_or_default()
                    .into_iter()
                    .map(DayDraft::from_stored)
                    .collect(),
            ),
            accommodations: SectionList::from_values(
                data.accommodations.clone().unwrap_or_default(),
            ),
            faq: SectionList::from_values(data.faq.clone().unwrap_or_default()),
            tracker: SaveTracker::new(),
        }
    }

    pub fn trip_id(&self) -> &str {
        &self.trip_id
    }

    // ------------------------------------------------------------------
    // Scalar fields
    // ------------------------------------------------------------------

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn set_slug(&mut self, slug: impl Into<String>) {
        self.slug = slug.into();
        self.tracker.mark_dirty();
    }

    pub fn featured(&self) -> bool {
        self.featured
    }

    pub fn set_featured(&mut self, featured: bool) {
        self.featured = featured;
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

    pub fn set_hero_title(&mut self, value: impl Into<String>) {
        self.hero_title = value.into();
        self.tracker.mark_dirty();
    }

    pub fn set_hero_subtitle(&mut self, value: impl Into<String>) {
        self.hero_subtitle = value.into();
        self.tracker.mark_dirty();
    }

    pub fn set_overview_title(&mut self, value: impl Into<String>) {
        self.overview_title = value.into();
        self.tracker.mark_dirty();
    }

    pub fn set_overview_image(&mut self, src: impl Into<String>, alt: impl Into<String>) {
        self.overview_image_src = src.into();
        self.overview_image_alt = alt.into();
        self.tracker.mark_dirty();
    }

    pub fn set_pricing_title(&mut self, value: impl Into<String>) {
        self.pricing_title = value.into();
        self.tracker.mark_dirty();
    }

    pub fn set_pricing_description(&mut self, value: impl Into<String>) {
        self.pricing_description = value.into();
        self.tracker.mark_dirty();
    }

    // ------------------------------------------------------------------
    // Gallery
    // ------------------------------------------------------------------

    pub fn gallery(&self) -> &SectionList<GalleryImage> {
        &self.gallery
    }

    pub fn add_gallery_image(&mut self) -> EntryId {
        let id = self.gallery.push_default();
        self.tracker.mark_dirty();
        id
    }

    pub fn remove_gallery_image(&mut self, id: EntryId) -> bool {
        let removed = self.gallery.remove(id);
        if removed {
            self.tracker.mark_dirty();
        }
        removed
    }

    pub fn update_gallery_image(&mut self, id: EntryId, f: impl FnOnce(&mut GalleryImage)) -> bool {
        let updated = self.gallery.update(id, f);
        if updated {
            self.tracker.mark_dirty();
        }
        updated
    }

    // ------------------------------------------------------------------
    // Overview paragraphs and tags
    // ------------------------------------------------------------------

    pub fn paragraphs(&self) -> &SectionList<String> {
        &self.paragraphs
    }

    pub fn add_paragraph(&mut self) -> EntryId {
        let id = self.paragraphs.push_default();
        self.tracker.mark_dirty();
        id
    }

    pub fn remove_paragraph(&mut self, id: EntryId) -> bool {
        let removed = self.paragraphs.remove(id);
        if removed {
            self.tracker.mark_dirty();
        }
        removed
    }

    pub fn update_paragraph(&mut self, id: EntryId, text: impl Into<String>) -> bool {
        let text = text.into();
        let updated = self.paragraphs.update(id, |p| *p = text);
        if updated {
            self.tracker.mark_dirty();
        }
        updated
    }

    pub fn tags(&self) -> &SectionList<InfoTag> {
        &self.tags
    }

    pub fn add_tag(&mut self) -> EntryId {
        // New tags start with a generic icon, like the form does
        let id = self.tags.push(InfoTag {
            icon: "lucide:info".to_string(),
            label: String::new(),
            value: String::new(),
        });
        self.tracker.mark_dirty();
        id
    }

    pub fn remove_tag(&mut self, id: EntryId) -> bool {
        let removed = self.tags.remove(id);
        if removed {
            self.tracker.mark_dirty();
        }
        removed
    }

    pub fn update_tag(&mut self, id: EntryId, f: impl FnOnce(&mut InfoTag)) -> bool {
        let updated = self.tags.update(id, f);
        if updated {
            self.tracker.mark_dirty();
        }
        updated
    }

    // ------------------------------------------------------------------
    // Pricing rows
    // ------------------------------------------------------------------

    pub fn prices(&self) -> &SectionList<PriceRow> {
        &self.prices
    }

    pub fn add_price(&mut self) -> EntryId {
        let id = self.prices.push_default();
        self.tracker.mark_dirty();
        id
    }

    pub fn remove_price(&mut self, id: EntryId) -> bool {
        let removed = self.prices.remove(id);
        if removed {
            self.tracker.mark_dirty();
        }
        removed
    }

    pub fn update_price(&mut self, id: EntryId, f: impl FnOnce(&mut PriceRow)) -> bool {
        let updated = self.prices.update(id, f);
        if updated {
            self.tracker.mark_dirty();
        }
        updated
    }

    // ------------------------------------------------------------------
    // Itinerary
    // ------------------------------------------------------------------

    pub fn itinerary(&self) -> &SectionList<DayDraft> {
        &self.itinerary
    }

    /// Append a new empty day at the end of the itinerary.
    pub fn add_day(&mut self) -> EntryId {
        let id = self.itinerary.push_default();
        self.tracker.mark_dirty();
        id
    }

    /// Remove a day. Remaining days renumber automatically because day
    /// numbers are derived from position at serialization time.
    pub fn remove_day(&mut self, id: EntryId) -> bool {
        let removed = self.itinerary.remove(id);
        if removed {
            self.tracker.mark_dirty();
        }
        removed
    }

    pub fn update_day(&mut self, id: EntryId, f: impl FnOnce(&mut DayDraft)) -> bool {
        let updated = self.itinerary.update(id, f);
        if updated {
            self.tracker.mark_dirty();
        }
        updated
    }

    pub fn add_activity(&mut self, day: EntryId) -> Option<EntryId> {
        let id = self.itinerary.get_mut(day)?.activities.push_default();
        self.tracker.mark_dirty();
        Some(id)
    }

    pub fn remove_activity(&mut self, day: EntryId, activity: EntryId) -> bool {
        let removed = self
            .itinerary
            .get_mut(day)
            .map(|d| d.activities.remove(activity))
            .unwrap_or(false);
        if removed {
            self.tracker.mark_dirty();
        }
        removed
    }

    pub fn update_activity(
        &mut self,
        day: EntryId,
        activity: EntryId,
        f: impl FnOnce(&mut Activity),
    ) -> bool {
        let updated = self
            .itinerary
            .get_mut(day)
            .map(|d| d.activities.update(activity, f))
            .unwrap_or(false);
        if updated {
            self.tracker.mark_dirty();
        }
        updated
    }

    // ------------------------------------------------------------------
    // Accommodations and FAQ
    // ------------------------------------------------------------------

    pub fn accommodations(&self) -> &SectionList<Accommodation> {
        &self.accommodations
    }

    pub fn add_accommodation(&mut self) -> EntryId {
        let id = self.accommodations.push_default();
        self.tracker.mark_dirty();
        id
    }

    pub fn remove_accommodation(&mut self, id: EntryId) -> bool {
        let removed = self.accommodations.remove(id);
        if removed {
            self.tracker.mark_dirty();
        }
        removed
    }

    pub fn update_accommodation(
        &mut self,
        id: EntryId,
        f: impl FnOnce(&mut Accommodation),
    ) -> bool {
        let updated = self.accommodations.update(id, f);
        if updated {
            self.tracker.mark_dirty();
        }
        updated
    }

    pub fn faq(&self) -> &SectionList<FaqEntry> {
        &self.faq
    }

    pub fn add_faq(&mut self) -> EntryId {
        let id = self.faq.push_default();
        self.tracker.mark_dirty();
        id
    }

    pub fn remove_faq(&mut self, id: EntryId) -> bool {
        let removed = self.faq.remove(id);
        if removed {
            self.tracker.mark_dirty();
        }
        removed
    }

    pub fn update_faq(&mut self, id: EntryId, f: impl FnOnce(&mut FaqEntry)) -> bool {
        let updated = self.faq.update(id, f);
        if updated {
            self.tracker.mark_dirty();
        }
        updated
    }

    // ------------------------------------------------------------------
    // Save lifecycle
    // ------------------------------------------------------------------

    /// Fold the draft into the full document it will submit.
    fn build_data(&self) -> TripData {
        TripData {
            hero: Some(Hero {
                title: self.hero_title.clone(),
                subtitle: self.hero_subtitle.clone(),
            }),
            gallery: Some(self.gallery.values()),
            overview: Some(Overview {
                title: self.overview_title.clone(),
                paragraphs: self.paragraphs.values(),
                tags: self.tags.values(),
                image: Some(SectionImage {
                    src: self.overview_image_src.clone(),
                    alt: self.overview_image_alt.clone(),
                }),
            }),
            itinerary: Some(
                self.itinerary
                    .iter()
                    .enumerate()
                    .map(|(i, entry)| entry.value.to_stored((i + 1) as u32))
                    .collect(),
            ),
            accommodations: Some(self.accommodations.values()),
            pricing: Some(Pricing {
                title: self.pricing_title.clone(),
                description: self.pricing_description.clone(),
                prices: self.prices.values(),
            }),
            faq: Some(self.faq.values()),
        }
    }

    /// Start a save: transitions to `Saving` and returns the merge-patch
    /// payload for `PUT /api/trips/{id}`. Rejected while a save is in
    /// flight.
    pub fn begin_save(&mut self) -> Result<UpdateTrip, SessionError> {
        self.tracker.begin_save()?;

        Ok(UpdateTrip {
            slug: Some(self.slug.clone()),
            featured: Some(self.featured),
            meta: Some(MetaPatch {
                title: Some(Some(self.meta_title.clone())),
                description: Some(Some(self.meta_description.clone())),
                og_image: Some(Some(self.meta_og_image.clone())),
            }),
            data: Some(self.build_data()),
            ..Default::default()
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

    fn stored_trip(data: TripData) -> Trip {
        let now = Utc::now();
        Trip {
            id: "t1".into(),
            slug: "sri-lanka".into(),
            title: "Sri Lanka".into(),
            featured: false,
            summary: None,
            meta_title: None,
            meta_description: None,
            meta_og_image: None,
            data: Json(data),
            created_at: now,
            updated_at: now,
        }
    }

    fn day(n: u32, title: &str) -> ItineraryDay {
        ItineraryDay {
            day: n,
            title: title.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn day_removal_renumbers_contiguously() {
        let trip = stored_trip(TripData {
            itinerary: Some(vec![day(1, "arrive"), day(2, "safari"), day(3, "beach")]),
            ..Default::default()
        });
        let mut session = TripSession::new(&trip);
        let ids = session.itinerary().ids();

        assert!(session.remove_day(ids[1]));

        let patch = session.begin_save().unwrap();
        let days = patch.data.unwrap().itinerary.unwrap();
        assert_eq!(days.len(), 2);
        assert_eq!(
            days.iter().map(|d| d.day).collect::<Vec<_>>(),
            vec![1, 2]
        );
        assert_eq!(days[1].title, "beach");
    }

    #[test]
    fn sibling_edits_survive_deletion() {
        let trip = stored_trip(TripData {
            gallery: Some(vec![
                GalleryImage {
                    src: "/a.jpg".into(),
                    alt: String::new(),
                },
                GalleryImage {
                    src: "/b.jpg".into(),
                    alt: String::new(),
                },
            ]),
            ..Default::default()
        });
        let mut session = TripSession::new(&trip);
        let ids = session.gallery().ids();

        // delete the first image, then edit the second by its stable id
        assert!(session.remove_gallery_image(ids[0]));
        assert!(session.update_gallery_image(ids[1], |img| img.alt = "Beach".into()));

        let patch = session.begin_save().unwrap();
        let gallery = patch.data.unwrap().gallery.unwrap();
        assert_eq!(gallery.len(), 1);
        assert_eq!(gallery[0].src, "/b.jpg");
        assert_eq!(gallery[0].alt, "Beach");
    }

    #[test]
    fn insert_appends_default_record() {
        let trip = stored_trip(TripData::default());
        let mut session = TripSession::new(&trip);

        let day_id = session.add_day();
        session.update_day(day_id, |d| d.title = "Arrival".into());
        let act = session.add_activity(day_id).unwrap();
        session.update_activity(day_id, act, |a| a.description = "Transfer".into());

        let patch = session.begin_save().unwrap();
        let days = patch.data.unwrap().itinerary.unwrap();
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].day, 1);
        assert_eq!(days[0].activities[0].description, "Transfer");
    }

    #[test]
    fn unedited_sections_are_submitted_back_unchanged() {
        let trip = stored_trip(TripData {
            faq: Some(vec![FaqEntry {
                question: "Visa?".into(),
                answer: "On arrival".into(),
            }]),
            pricing: Some(Pricing {
                title: "Prices".into(),
                description: String::new(),
                prices: vec![PriceRow {
                    package: "2 Adults".into(),
                    early_booking: "2999".into(),
                    standard: "3299".into(),
                }],
            }),
            ..Default::default()
        });
        let mut session = TripSession::new(&trip);
        session.set_slug("sri-lanka-2026");

        let patch = session.begin_save().unwrap();
        assert_eq!(patch.slug.as_deref(), Some("sri-lanka-2026"));
        let data = patch.data.unwrap();
        assert_eq!(data.faq.unwrap()[0].question, "Visa?");
        assert_eq!(data.pricing.unwrap().prices[0].standard, "3299");
    }

    #[test]
    fn double_submit_is_rejected() {
        let trip = stored_trip(TripData::default());
        let mut session = TripSession::new(&trip);
        session.set_featured(true);

        assert!(session.begin_save().is_ok());
        assert!(matches!(
            session.begin_save(),
            Err(SessionError::SaveInFlight)
        ));
    }

    #[test]
    fn navigation_guard_follows_save_lifecycle() {
        let trip = stored_trip(TripData::default());
        let mut session = TripSession::new(&trip);
        assert!(!session.blocks_navigation());

        session.set_hero_title("New title");
        assert!(session.blocks_navigation());

        session.begin_save().unwrap();
        session.complete_save(Instant::now());
        assert!(!session.blocks_navigation());
    }

    #[test]
    fn failed_save_keeps_draft_dirty_for_manual_retry() {
        let trip = stored_trip(TripData::default());
        let mut session = TripSession::new(&trip);
        session.set_hero_title("x");

        session.begin_save().unwrap();
        session.fail_save("Failed to save");
        assert!(session.blocks_navigation());
        assert_eq!(session.status_at(Instant::now()), SessionStatus::Error);
        assert!(session.begin_save().is_ok());
    }
}
