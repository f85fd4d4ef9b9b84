//! Errors crossing the WASM boundary
//!
//! Conversions themselves never fail; these cover input limits and result
//! serialization. Errors reach JavaScript as `{ kind, message, details? }`.

use serde::{Deserialize, Serialize};
use std::fmt;
use wasm_bindgen::prelude::*;

/// Largest input accepted by the bindings (10MB)
pub const MAX_INPUT_BYTES: usize = 10_000_000;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
#[allow(clippy::enum_variant_names)]
pub enum WasmError {
    /// Input rejected before conversion
    #[serde(rename_all = "camelCase")]
    ValidationError {
        message: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        details: Option<String>,
    },

    /// A result could not be turned into a JS value
    #[serde(rename_all = "camelCase")]
    SerializationError {
        message: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        details: Option<String>,
    },
}

impl WasmError {
    pub fn validation_with_details(message: impl Into<String>, details: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
            details: Some(details.into()),
        }
    }

    pub fn serialization_with_details(
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self::SerializationError {
            message: message.into(),
            details: Some(details.into()),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::ValidationError { message, .. } | Self::SerializationError { message, .. } => {
                message
            }
        }
    }
}

impl fmt::Display for WasmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (label, message, details) = match self {
            Self::ValidationError { message, details } => ("Validation Error", message, details),
            Self::SerializationError { message, details } => {
                ("Serialization Error", message, details)
            }
        };
        write!(f, "{}: {}", label, message)?;
        if let Some(d) = details {
            write!(f, "\nDetails: {}", d)?;
        }
        Ok(())
    }
}

impl std::error::Error for WasmError {}

impl From<WasmError> for JsValue {
    fn from(err: WasmError) -> Self {
        match serde_wasm_bindgen::to_value(&err) {
            Ok(js_value) => js_value,
            Err(serialization_err) => JsValue::from_str(&format!(
                "Error serialization failed: {} (original error: {})",
                serialization_err, err
            )),
        }
    }
}

/// Reject inputs larger than `max_size` bytes
pub fn validate_input(source: &str, max_size: usize) -> Result<(), WasmError> {
    if source.len() > max_size {
        return Err(WasmError::validation_with_details(
            "Input size exceeds maximum allowed",
            format!(
                "Input is {} bytes, maximum is {} bytes ({}MB)",
                source.len(),
                max_size,
                max_size / 1_000_000
            ),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_input_limit() {
        assert!(validate_input("short", 10).is_ok());
        let err = validate_input("way too long", 4).unwrap_err();
        assert_eq!(err.message(), "Input size exceeds maximum allowed");
        assert!(err.to_string().contains("maximum is 4 bytes"));
    }
}
