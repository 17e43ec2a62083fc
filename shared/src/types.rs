//! API request and response types

use serde::{Deserialize, Serialize};

/// Response envelope wrapping every API payload.
///
/// Successful responses carry `data` (and optionally `message`); failed ones
/// carry `error`. Absent members are omitted from the JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
            error: None,
        }
    }

    pub fn ok_with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::ok(data)
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: None,
            data: None,
            error: Some(error.into()),
        }
    }
}

/// Service identity returned from the root endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub message: String,
    pub version: String,
    pub status: String,
}

/// Query parameters for the trends endpoint.
///
/// `hours` stays a raw string so a malformed value reaches the handler
/// instead of being rejected by the extractor.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrendsQuery {
    pub hours: Option<String>,
}

/// Query parameters for the emergency doctors endpoint.
///
/// Coordinates are accepted as given and never parsed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DoctorsQuery {
    pub lat: Option<String>,
    pub lng: Option<String>,
}
