//! Core traits for the triage pipeline
//!
//! Collaborators the pipeline consumes but does not own sit behind traits so
//! they can be swapped per deployment or mocked in tests.
//!
//! ```text
//! Language Identification:
//!   - LanguageDetector: general-purpose fallback used when script ratios
//!     are inconclusive
//! ```

mod language_detector;

pub use language_detector::{LanguageDetector, NoopLanguageDetector};
