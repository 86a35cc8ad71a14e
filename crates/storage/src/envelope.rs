//! Versioned payload format for persisted lists.
//!
//! Current format:
//!
//! ```json
//! {"version": 1, "items": [ ... ]}
//! ```
//!
//! Payloads written before the envelope existed are bare JSON arrays; they are
//! read as version 0 with the same item shape.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Envelope version written by this build.
pub const CURRENT_VERSION: u32 = 1;

/// Version reported for legacy bare-array payloads.
pub const LEGACY_VERSION: u32 = 0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub version: u32,
    pub items: Vec<T>,
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("payload is not valid JSON: {0}")]
    Json(#[source] serde_json::Error),

    #[error("payload is neither an envelope nor a list")]
    UnknownShape,

    #[error("unsupported payload version {found} (max supported {max})", max = CURRENT_VERSION)]
    UnsupportedVersion { found: u32 },

    #[error("list items do not match the expected shape: {0}")]
    Items(#[source] serde_json::Error),
}

#[derive(Serialize)]
struct EnvelopeRef<'a, T> {
    version: u32,
    items: &'a [T],
}

pub(crate) fn encode<T: Serialize>(items: &[T]) -> serde_json::Result<String> {
    serde_json::to_string(&EnvelopeRef {
        version: CURRENT_VERSION,
        items,
    })
}

pub(crate) fn decode<T: DeserializeOwned>(raw: &str) -> Result<Envelope<T>, DecodeError> {
    let value: Value = serde_json::from_str(raw).map_err(DecodeError::Json)?;

    let (version, items) = match value {
        Value::Array(_) => (LEGACY_VERSION, value),
        Value::Object(mut map) => {
            let version = map
                .get("version")
                .and_then(Value::as_u64)
                .ok_or(DecodeError::UnknownShape)?;
            let version = u32::try_from(version)
                .map_err(|_| DecodeError::UnsupportedVersion { found: u32::MAX })?;
            if version > CURRENT_VERSION {
                return Err(DecodeError::UnsupportedVersion { found: version });
            }
            let items = map.remove("items").ok_or(DecodeError::UnknownShape)?;
            (version, items)
        }
        _ => return Err(DecodeError::UnknownShape),
    };

    // Versions 0 and 1 share the same item layout.
    let items = serde_json::from_value(items).map_err(DecodeError::Items)?;
    Ok(Envelope {
        version,
        items,
    })
}
