//! Integration with the external foreground extractor.
//!
//! This module provides the traits a background-subtraction backend implements
//! to feed candidate regions into the [`MotionTracker`](crate::MotionTracker),
//! plus a connected-component extractor for backends that only produce masks.

mod blob_extractor;
mod builder;
mod detector;
mod pipeline;

pub use blob_extractor::{BlobExtractor, ExtractError, ForegroundModel};
pub use builder::CandidateBuilder;
pub use detector::{CandidateSource, IntoCandidates};
pub use pipeline::MotionPipeline;
