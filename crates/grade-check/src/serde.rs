use grade_core::errors::{ErrorInfo, GradeError};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Serializes `value` as pretty JSON bytes.
pub fn to_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, GradeError> {
    serde_json::to_vec_pretty(value)
        .map_err(|err| GradeError::Serde(ErrorInfo::new("json-encode", err.to_string())))
}

/// Decodes a JSON payload.
pub fn from_json_slice<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, GradeError> {
    serde_json::from_slice(bytes)
        .map_err(|err| GradeError::Serde(ErrorInfo::new("json-decode", err.to_string())))
}
