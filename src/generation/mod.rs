//! Structured generation: prompt building, endpoint client, and payload
//! validation.

pub mod client;
pub mod http;
pub mod prompt;

pub use client::{
    GeminiClient, GenerationRequest, GenerationResult, ResponseFormat, TextGenerator,
};

use crate::error::Result;
use crate::types::TravelPlan;

/// One structured-generation round trip: instruction in, validated
/// payload out.
pub async fn generate_structured(
    generator: &dyn TextGenerator,
    instruction: impl Into<String>,
    format: ResponseFormat,
) -> Result<GenerationResult> {
    let request = GenerationRequest::builder()
        .instruction(instruction)
        .format(format)
        .build();
    generator.generate(&request).await
}

/// Generate a complete travel plan for a trip.
pub async fn generate_plan(
    generator: &dyn TextGenerator,
    origin: &str,
    destination: &str,
    days: u32,
) -> Result<TravelPlan> {
    let instruction = prompt::travel_plan(origin, destination, days);
    let result = generate_structured(generator, instruction, ResponseFormat::Json).await?;
    Ok(TravelPlan::from_payload(&result.payload))
}
