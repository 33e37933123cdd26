//! Travel plan view over a generation payload.

use serde::{Deserialize, Serialize};

use super::Payload;

/// Fallback strings used when the generator omits a field.
const DEFAULT_THEME: &str = "No Theme";
const DEFAULT_CLOTHING: &str = "No specific clothing advice available.";
const DEFAULT_RUSH: &str = "No specific rush information available.";
const DEFAULT_DISCLAIMER: &str =
    "This plan is AI-generated. Real-time data and booking require additional integrations.";

/// A single itinerary day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayPlan {
    pub day: u64,
    pub theme: String,
    pub activities: Vec<String>,
    pub notes: String,
}

/// A complete travel plan, every field defaulted when absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TravelPlan {
    pub itinerary: Vec<DayPlan>,
    pub hotels: Vec<String>,
    pub food_outlets: Vec<String>,
    pub clothing_advice: String,
    pub rush_info: String,
    pub disclaimer: String,
}

impl TravelPlan {
    /// Build a plan view from a generation payload.
    ///
    /// Never fails: absent or mistyped fields degrade to their
    /// documented fallbacks, and empty lists stay empty.
    pub fn from_payload(payload: &Payload) -> Self {
        let itinerary = payload
            .array("itinerary")
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let day = Payload::new(entry.clone());
                DayPlan {
                    // Missing day numbers fall back to list position.
                    day: day.u64_or("day", i as u64 + 1),
                    theme: day.str_or("theme", DEFAULT_THEME).to_string(),
                    activities: day.strings("activities"),
                    notes: day.str_or("notes", "").to_string(),
                }
            })
            .collect();

        Self {
            itinerary,
            hotels: payload.strings("hotels"),
            food_outlets: payload.strings("food_outlets"),
            clothing_advice: payload.str_or("clothing_advice", DEFAULT_CLOTHING).to_string(),
            rush_info: payload.str_or("rush_info", DEFAULT_RUSH).to_string(),
            disclaimer: payload.str_or("disclaimer", DEFAULT_DISCLAIMER).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn full_payload_maps_every_field() {
        let payload = Payload::new(json!({
            "itinerary": [
                {"day": 1, "theme": "Arrival", "activities": ["Check in"], "notes": "Rest up"},
                {"day": 2, "theme": "Beach", "activities": ["Swim", "Surf"], "notes": ""},
            ],
            "hotels": ["Sea View Inn - close to the beach"],
            "food_outlets": ["Fisherman's Wharf - seafood"],
            "clothing_advice": "Light cottons",
            "rush_info": "Avoid noon",
            "disclaimer": "AI generated",
        }));

        let plan = TravelPlan::from_payload(&payload);
        assert_eq!(plan.itinerary.len(), 2);
        assert_eq!(plan.itinerary[0].theme, "Arrival");
        assert_eq!(plan.itinerary[1].activities, vec!["Swim", "Surf"]);
        assert_eq!(plan.hotels.len(), 1);
        assert_eq!(plan.clothing_advice, "Light cottons");
        assert_eq!(plan.rush_info, "Avoid noon");
        assert_eq!(plan.disclaimer, "AI generated");
    }

    #[test]
    fn empty_payload_yields_defaults() {
        let plan = TravelPlan::from_payload(&Payload::new(json!({})));
        assert!(plan.itinerary.is_empty());
        assert!(plan.hotels.is_empty());
        assert!(plan.food_outlets.is_empty());
        assert_eq!(plan.clothing_advice, DEFAULT_CLOTHING);
        assert_eq!(plan.rush_info, DEFAULT_RUSH);
        assert_eq!(plan.disclaimer, DEFAULT_DISCLAIMER);
    }

    #[test]
    fn missing_day_numbers_fall_back_to_position() {
        let payload = Payload::new(json!({
            "itinerary": [{"theme": "Arrival"}, {"theme": "Departure"}],
        }));
        let plan = TravelPlan::from_payload(&payload);
        assert_eq!(plan.itinerary[0].day, 1);
        assert_eq!(plan.itinerary[1].day, 2);
        assert_eq!(plan.itinerary[1].theme, "Departure");
        assert!(plan.itinerary[0].activities.is_empty());
    }

    #[test]
    fn mistyped_itinerary_is_ignored() {
        let payload = Payload::new(json!({"itinerary": "day one: arrive"}));
        let plan = TravelPlan::from_payload(&payload);
        assert!(plan.itinerary.is_empty());
    }
}
