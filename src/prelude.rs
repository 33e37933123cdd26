//! Convenience re-exports for common use.

pub use crate::config::Config;
pub use crate::dispatch::{dispatch, hotels::HotelSearchClient, CredentialSet};
pub use crate::error::{ErrorCategory, Result, YatraError};
pub use crate::generation::{
    GeminiClient, GenerationRequest, GenerationResult, ResponseFormat, TextGenerator,
};
pub use crate::types::{DayPlan, Payload, TravelPlan};
