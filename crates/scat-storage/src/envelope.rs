//! The stored form of a draft: `{ "data": <record>, "timestamp": <epoch ms> }`.
//!
//! Entries written before timestamps were added hold the bare record.

use jiff::Timestamp;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::StorageError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftEnvelope<R> {
    pub data: R,
    /// Capture time in milliseconds since the Unix epoch.
    pub timestamp: i64,
}

/// A decoded entry. `captured_at` is `None` for legacy entries.
#[derive(Debug, Clone)]
pub struct StoredDraft<R> {
    pub record: R,
    pub captured_at: Option<Timestamp>,
}

pub fn encode<R: Serialize>(record: &R, captured_at: Timestamp) -> Result<Vec<u8>, StorageError> {
    let envelope = DraftEnvelope {
        data: record,
        timestamp: captured_at.as_millisecond(),
    };
    Ok(serde_json::to_vec(&envelope)?)
}

/// Decode an envelope or a legacy bare record.
///
/// An object carrying either `data` or `timestamp` is an envelope and must
/// have both: `data` a record object and `timestamp` a positive epoch-millis
/// integer. Only an object with neither key reads as a legacy record.
pub fn decode<R>(key: &str, bytes: &[u8]) -> Result<StoredDraft<R>, StorageError>
where
    R: Serialize + DeserializeOwned,
{
    let malformed = || StorageError::Malformed {
        key: key.to_string(),
    };

    let value: Value = serde_json::from_slice(bytes)?;
    let Value::Object(mut object) = value else {
        return Err(malformed());
    };

    if !object.contains_key("data") && !object.contains_key("timestamp") {
        if object.is_empty() {
            return Err(malformed());
        }
        return Ok(StoredDraft {
            record: record_from(key, object)?,
            captured_at: None,
        });
    }

    let captured_at = object
        .get("timestamp")
        .and_then(Value::as_i64)
        .filter(|&ms| ms > 0)
        .and_then(|ms| Timestamp::from_millisecond(ms).ok())
        .ok_or_else(malformed)?;
    let Some(Value::Object(data)) = object.remove("data") else {
        return Err(malformed());
    };

    Ok(StoredDraft {
        record: record_from(key, data)?,
        captured_at: Some(captured_at),
    })
}

/// Records default every missing field and ignore unknown ones, so a
/// non-empty object sharing no key with the record's own shape is rejected.
fn record_from<R>(key: &str, object: Map<String, Value>) -> Result<R, StorageError>
where
    R: Serialize + DeserializeOwned,
{
    let keys: Vec<String> = object.keys().cloned().collect();
    let record: R = serde_json::from_value(Value::Object(object))?;
    if keys.is_empty() {
        return Ok(record);
    }

    let shape = serde_json::to_value(&record)?;
    let recognised = shape
        .as_object()
        .is_some_and(|known| keys.iter().any(|k| known.contains_key(k)));
    if !recognised {
        return Err(StorageError::Malformed {
            key: key.to_string(),
        });
    }
    Ok(record)
}
