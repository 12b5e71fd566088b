//! Typed trip document model.
//!
//! The `data` column holds one JSON document per trip, composed of named,
//! independently optional sections. An absent section means "not rendered",
//! never an error. The document is validated on write instead of trusting
//! the client shape.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Full trip document. Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TripData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero: Option<Hero>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gallery: Option<Vec<GalleryImage>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<Overview>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub itinerary: Option<Vec<ItineraryDay>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accommodations: Option<Vec<Accommodation>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing: Option<Pricing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faq: Option<Vec<FaqEntry>>,
}

/// Hero banner: main title and subtitle of the trip page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Hero {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
}

/// One gallery image
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GalleryImage {
    #[serde(default)]
    pub src: String,
    #[serde(default)]
    pub alt: String,
}

/// Overview section: introduction paragraphs, info tags and an illustration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Overview {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub tags: Vec<InfoTag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<SectionImage>,
}

/// Icon + label + value triple shown in the overview header
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct InfoTag {
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SectionImage {
    #[serde(default)]
    pub src: String,
    #[serde(default)]
    pub alt: String,
}

/// One day of the itinerary. `day` is 1-based and must stay contiguous
/// after deletions; renumbering is the editing session's responsibility,
/// the store only validates it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ItineraryDay {
    pub day: u32,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub meals: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accommodation: Option<String>,
    #[serde(default)]
    pub activities: Vec<Activity>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Activity {
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Accommodation {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub photo: String,
    #[serde(default)]
    pub dates: String,
}

/// Pricing section: heading, free-text terms and the price table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Pricing {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub prices: Vec<PriceRow>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PriceRow {
    #[serde(default)]
    pub package: String,
    #[serde(default)]
    pub early_booking: String,
    #[serde(default)]
    pub standard: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FaqEntry {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
}

impl TripData {
    /// Validate the document before it is written.
    ///
    /// Itinerary days must be numbered exactly 1..=N in order.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(ref itinerary) = self.itinerary {
            for (i, day) in itinerary.iter().enumerate() {
                let expected = (i + 1) as u32;
                if day.day != expected {
                    return Err(format!(
                        "itinerary days must be numbered 1..{} in order (entry {} has day {})",
                        itinerary.len(),
                        i,
                        day.day
                    ));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn day(n: u32) -> ItineraryDay {
        ItineraryDay {
            day: n,
            ..Default::default()
        }
    }

    #[test]
    fn empty_document_is_valid() {
        assert!(TripData::default().validate().is_ok());
    }

    #[test]
    fn contiguous_days_are_valid() {
        let data = TripData {
            itinerary: Some(vec![day(1), day(2), day(3)]),
            ..Default::default()
        };
        assert!(data.validate().is_ok());
    }

    #[test]
    fn gap_in_days_is_rejected() {
        let data = TripData {
            itinerary: Some(vec![day(1), day(3)]),
            ..Default::default()
        };
        assert!(data.validate().is_err());
    }

    #[test]
    fn zero_based_days_are_rejected() {
        let data = TripData {
            itinerary: Some(vec![day(0), day(1)]),
            ..Default::default()
        };
        assert!(data.validate().is_err());
    }

    #[test]
    fn absent_sections_deserialize_as_none() {
        let data: TripData = serde_json::from_value(json!({
            "hero": { "title": "Sri Lanka", "subtitle": "11 days" }
        }))
        .unwrap();

        assert_eq!(data.hero.as_ref().unwrap().title, "Sri Lanka");
        assert!(data.gallery.is_none());
        assert!(data.itinerary.is_none());
        assert!(data.faq.is_none());
    }

    #[test]
    fn absent_sections_are_not_serialized() {
        let data = TripData {
            hero: Some(Hero {
                title: "t".into(),
                subtitle: "s".into(),
            }),
            ..Default::default()
        };
        let value = serde_json::to_value(&data).unwrap();
        let obj = value.as_object().unwrap();
        assert!(obj.contains_key("hero"));
        assert!(!obj.contains_key("gallery"));
        assert!(!obj.contains_key("pricing"));
    }

    #[test]
    fn full_document_round_trips_unknown_optional_fields() {
        let data: TripData = serde_json::from_value(json!({
            "itinerary": [
                {
                    "day": 1,
                    "date": "April 4, 2026",
                    "title": "Arrival in Colombo",
                    "meals": "Dinner",
                    "activities": [
                        { "icon": "mdi:airplane", "description": "Airport transfer" }
                    ]
                },
                { "day": 2, "date": "", "title": "", "meals": "" }
            ],
            "pricing": {
                "title": "Package Prices",
                "description": "",
                "prices": [
                    { "package": "2 Adults", "early_booking": "2999", "standard": "3299" }
                ]
            }
        }))
        .unwrap();

        assert!(data.validate().is_ok());
        let days = data.itinerary.as_ref().unwrap();
        assert_eq!(days[0].activities.len(), 1);
        assert!(days[1].accommodation.is_none());
        assert_eq!(
            data.pricing.as_ref().unwrap().prices[0].early_booking,
            "2999"
        );
    }
}
