//! Instruction builders.
//!
//! The generation endpoint enforces no schema, so every instruction spells
//! out the required output shape explicitly: keys, types, cardinalities,
//! and a closing demand for JSON-only output.

/// Instruction for a full travel plan.
pub fn travel_plan(origin: &str, destination: &str, days: u32) -> String {
    format!(
        r#"You are an expert travel planner. I need a detailed travel plan for a trip from {origin} to {destination} for {days} days.
Please provide the information in a structured JSON format.

The JSON should have the following keys:
- "itinerary": An array of objects, one per day. Each day object should have:
    - "day": Integer (e.g., 1, 2)
    - "theme": String (e.g., "Beach Exploration", "Cultural Immersion")
    - "activities": An array of strings describing activities for that day.
    - "notes": String with special considerations or tips for the day.
- "hotels": An array of strings, listing 2-3 recommended hotel names/types with a brief reason.
- "food_outlets": An array of strings, listing 2-3 recommended food outlets/restaurants with a brief description of cuisine.
- "clothing_advice": A string advising on clothing to pack given the weather in {origin} and {destination} at this time of year.
- "rush_info": A string with general advice on typical rush hours or crowded periods for popular attractions in {destination}, and tips to avoid them.
- "disclaimer": A string stating that real-time data for rush and hotel availability requires external APIs.

Ensure the JSON is valid and complete. Do not include any text outside the JSON block."#
    )
}

/// Instruction for estimated daily visitor counts, used for charting.
pub fn daily_footfall(destination: &str, days: u32) -> String {
    format!(
        r#"Estimate daily tourist footfall for {destination} over the next {days} days.
Respond in structured JSON format with a single key:
- "footfall": An array of exactly {days} objects, each with:
    - "date": String in YYYY-MM-DD format
    - "visitors": Integer estimate of visitors for that date

Ensure the JSON is valid and complete. Do not include any text outside the JSON block."#
    )
}

/// Instruction for a crowd-percentage breakdown across attractions.
pub fn crowd_split(destination: &str) -> String {
    format!(
        r#"For the top attractions in {destination}, estimate what share of tourist crowds each attracts.
Respond in structured JSON format with a single key:
- "places": An array of objects, each with:
    - "place": String, the attraction name
    - "crowd_percentage": Number between 0 and 100

The percentages should sum to roughly 100. Ensure the JSON is valid and complete. Do not include any text outside the JSON block."#
    )
}
