//! Error types for the BodySense application

use thiserror::Error;

/// Input validation failures
///
/// Missing fields are the client's fault and surface as 400s; a body that
/// cannot hold fields at all is reported as a server error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Cannot check required fields on a JSON {0}")]
    UnsupportedBody(&'static str),
}
