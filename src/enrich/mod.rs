//! Best-effort enrichment lookups.
//!
//! Images and narration are decorations on a travel plan: each is an
//! independent fallible operation exposed as "fill if available, omit
//! otherwise". A failed enrichment never aborts the primary result.

pub mod images;
pub mod tts;

pub use images::place_image;
pub use tts::SpeechSynthesizer;
