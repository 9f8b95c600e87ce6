//! Unified Error Model
//!
//! Input-shape deficiencies (short title, missing artifact, bad price) are
//! rubric inputs, not errors, and never appear here. The variants below are
//! the only raising paths: caller bugs and broken configuration.
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GateError {
    #[error("CONTRACT/{0}")]
    Contract(String),

    #[error("CONFIG/{0}")]
    Config(String),

    #[error("STORE/{0}")]
    Store(String),
}
