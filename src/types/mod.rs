//! Core types for yatra.

pub mod payload;
pub mod plan;

pub use payload::Payload;
pub use plan::{DayPlan, TravelPlan};
