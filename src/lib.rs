//! Yatra — AI-assisted travel planning toolkit.
//!
//! Builds structured travel plans by prompting a Gemini-style generation
//! endpoint for JSON, validating the response defensively, and enriching
//! the result with hotel lookups (multi-credential failover), place
//! images, and speech narration.
//!
//! # Quick Start
//!
//! ```no_run
//! use yatra::prelude::*;
//!
//! # async fn example() -> yatra::error::Result<()> {
//! let config = Config::from_env();
//! let client = GeminiClient::from_config(&config)?;
//! let plan = yatra::generation::generate_plan(&client, "Bengaluru, India", "Goa, India", 5).await?;
//! for day in &plan.itinerary {
//!     println!("Day {}: {}", day.day, day.theme);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod dispatch;
pub mod enrich;
pub mod error;
pub mod generation;
pub mod prelude;
pub mod store;
pub mod types;
