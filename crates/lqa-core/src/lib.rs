//! LQA Core: shared data model and error taxonomy
//!
//! Types exchanged between the rubric, the artifact inspector, and the
//! duplicate index. Nothing here performs I/O.

pub mod error;
pub mod record;

pub use error::GateError;
pub use record::{DuplicateSummary, ListingStatus, ProductRecord};

/// Version of the listing QA engine
pub const LQA_VERSION: &str = "1.0.0";
