//! Configuration error type.
//!
//! A [`ConfigError`] carries a stable code, the offending field path, a
//! human-readable message, and an optional hint. Diagnostics are
//! serializable so callers can surface them as JSON.

use serde::{Serialize, Serializer};

/// Stable identifiers for every configuration diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// `min_frequency` is zero; a threshold below 1 is meaningless.
    MinFrequencyZero,
    /// `top_k` is zero; output will always be empty.
    TopKZero,
    /// `min_token_length` is large enough to drop nearly all CJK words.
    MinTokenLengthExcessive,
    /// A field not recognized by the configuration schema.
    UnknownField,
}

impl ErrorCode {
    /// The short code used in logs and serialized diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MinFrequencyZero => "E001",
            Self::TopKZero => "W002",
            Self::MinTokenLengthExcessive => "W003",
            Self::UnknownField => "E004",
        }
    }
}

impl Serialize for ErrorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A single configuration problem.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigError {
    /// Stable diagnostic code.
    pub code: ErrorCode,
    /// Path of the offending field (e.g. `"min_frequency"`).
    pub field: String,
    /// Human-readable description of the problem.
    pub message: String,
    /// Optional suggestion for fixing it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ConfigError {
    pub fn new(code: ErrorCode, field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            field: field.into(),
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at `{}`: {}",
            self.code.as_str(),
            self.field,
            self.message
        )?;
        if let Some(hint) = &self.hint {
            write!(f, " (hint: {hint})")?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigError {}
