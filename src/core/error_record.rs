//! Error-to-mapping serialization
//!
//! Flattens an error into `{"type": ..., "message": ...}`, leaving out
//! any source chain or backtrace, so it can be logged as JSON or sent
//! over the wire.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error;
use std::io;

use crate::error::ToolbeltError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorRecord {
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
}

impl ErrorRecord {
    pub fn new<K: Into<String>, M: Into<String>>(kind: K, message: M) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
        }
    }

    /// Record for any error
    ///
    /// Errors of this crate and I/O errors get their kind name, the same one
    /// `From` produces. Anything else is named after its Rust type.
    pub fn from_error<E: Error + 'static>(error: &E) -> Self {
        Self::from_known_error(error)
            .unwrap_or_else(|| Self::new(short_type_name::<E>(), error.to_string()))
    }

    fn from_known_error(error: &(dyn Error + 'static)) -> Option<Self> {
        if let Some(e) = error.downcast_ref::<ToolbeltError>() {
            return Some(Self::from(e));
        }
        error.downcast_ref::<io::Error>().map(Self::from)
    }

    /// Record for an `anyhow` error, named after the most specific type it wraps
    pub fn from_anyhow(error: &anyhow::Error) -> Self {
        if let Some(e) = error.downcast_ref::<ToolbeltError>() {
            return Self::from(e);
        }
        if let Some(e) = error.downcast_ref::<io::Error>() {
            return Self::from(e);
        }
        Self::new("Error", format!("{:#}", error))
    }

    pub fn to_map(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            ("type".to_string(), self.kind.clone()),
            ("message".to_string(), self.message.clone()),
        ])
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({ "type": self.kind, "message": self.message })
    }
}

impl From<&ToolbeltError> for ErrorRecord {
    fn from(error: &ToolbeltError) -> Self {
        Self::new(error.kind_name(), error.to_string())
    }
}

impl From<&io::Error> for ErrorRecord {
    fn from(error: &io::Error) -> Self {
        Self::new(format!("{:?}", error.kind()), error.to_string())
    }
}

impl ToolbeltError {
    pub fn to_record(&self) -> ErrorRecord {
        ErrorRecord::from(self)
    }
}

/// `core::num::error::ParseIntError` -> `ParseIntError`
fn short_type_name<T: ?Sized>() -> String {
    let full = std::any::type_name::<T>();
    let without_generics = full.split('<').next().unwrap_or(full);
    let name = without_generics
        .rsplit("::")
        .next()
        .unwrap_or(without_generics);
    name.trim_start_matches("dyn ").to_string()
}
