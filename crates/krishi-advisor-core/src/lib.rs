//! # Krishi Advisor Core
//!
//! Pure logic for Krishi Advisor: spell correction, knowledge matching,
//! crop/location suitability rules, long-form response assembly and
//! presentational formatting.
//!
//! This crate performs no filesystem, network or process I/O. Data is
//! handed in as strings (or comes from the bundled static tables), so the
//! whole pipeline is deterministic apart from timestamps and ids.
//!
//! ```text
//! query ──▶ SpellChecker ──▶ KnowledgeBase ──┐
//!                                             ├──▶ ResponseGenerator ──▶ ResponseFormatter
//!           LocationCropAdaptation ──────────┘
//! ```

pub mod error;
pub mod format;
pub mod generator;
pub mod knowledge;
pub mod location;
pub mod models;
pub mod similarity;
pub mod spell;

pub use error::{FormatError, GenerateError, KnowledgeError};
pub use format::{FormatOptions, FormatType, FormattedResponse, ResponseFormatter};
pub use generator::{GenerateOptions, ResponseGenerator};
pub use knowledge::KnowledgeBase;
pub use location::LocationCropAdaptation;
pub use models::{Category, GeneratedResponse, KnowledgeEntry, Language, QueryAnalysis, RagResult};
pub use spell::SpellChecker;
