//! Validation engine for analysis configurations.
//!
//! The engine runs all registered [`ValidationRule`]s against an
//! [`AnalysisConfig`](super::config::AnalysisConfig) and collects every
//! diagnostic into a [`ValidationReport`] — it never short-circuits on
//! the first error, so callers see all problems at once.
//!
//! # Quick start
//!
//! ```rust,ignore
//! let report = config.validate();
//! if report.has_errors() {
//!     for err in report.errors() {
//!         eprintln!("{err}");
//!     }
//! }
//! ```

use serde::Serialize;

use super::config::AnalysisConfig;
use super::errors::{ConfigError, ErrorCode};

// ─── Severity ───────────────────────────────────────────────────────────────

/// Whether a diagnostic is a hard error or a soft warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

// ─── Diagnostic ─────────────────────────────────────────────────────────────

/// A single validation finding — an error or warning attached to a
/// [`ConfigError`] that carries the code, field, message, and hint.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationDiagnostic {
    pub severity: Severity,
    #[serde(flatten)]
    pub error: ConfigError,
}

impl ValidationDiagnostic {
    pub fn error(err: ConfigError) -> Self {
        Self {
            severity: Severity::Error,
            error: err,
        }
    }

    pub fn warning(err: ConfigError) -> Self {
        Self {
            severity: Severity::Warning,
            error: err,
        }
    }
}

// ─── Report ─────────────────────────────────────────────────────────────────

/// Collected diagnostics from running all validation rules.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    /// Iterate over error-severity diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &ConfigError> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .map(|d| &d.error)
    }

    /// Iterate over warning-severity diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &ConfigError> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .map(|d| &d.error)
    }

    /// Returns `true` if any diagnostic is an error.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// Returns `true` if there are no errors (warnings are acceptable).
    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    /// Total number of diagnostics (errors + warnings).
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Returns `true` if there are no diagnostics at all.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

impl std::fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.diagnostics.is_empty() {
            return write!(f, "configuration is valid");
        }
        for (i, d) in self.diagnostics.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let tag = match d.severity {
                Severity::Error => "error",
                Severity::Warning => "warning",
            };
            write!(f, "{tag}: {}", d.error)?;
        }
        Ok(())
    }
}

// ─── Rule trait ─────────────────────────────────────────────────────────────

/// A single validation rule that inspects an [`AnalysisConfig`] and
/// returns zero or more diagnostics.
///
/// Rules are stateless and must be `Send + Sync` so they can be shared
/// across threads (e.g., in a long-lived validation engine).
pub trait ValidationRule: Send + Sync {
    /// Short, stable identifier for this rule (e.g., `"min_frequency"`).
    fn name(&self) -> &str;

    /// Inspect `config` and return any findings.
    fn validate(&self, config: &AnalysisConfig) -> Vec<ValidationDiagnostic>;
}

// ─── Engine ─────────────────────────────────────────────────────────────────

/// Runs a set of [`ValidationRule`]s against an [`AnalysisConfig`] and
/// collects all diagnostics.
#[derive(Default)]
pub struct ValidationEngine {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl ValidationEngine {
    /// An engine with no rules registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// An engine with the full default rule set.
    pub fn with_defaults() -> Self {
        let mut engine = Self::new();
        engine.register(Box::new(MinFrequencyRule));
        engine.register(Box::new(TopKRule));
        engine.register(Box::new(TokenLengthRule));
        engine.register(Box::new(UnknownFieldsRule));
        engine
    }

    /// Register an additional rule.
    pub fn register(&mut self, rule: Box<dyn ValidationRule>) {
        self.rules.push(rule);
    }

    /// Run every rule and collect all diagnostics.
    pub fn validate(&self, config: &AnalysisConfig) -> ValidationReport {
        let mut report = ValidationReport::default();
        for rule in &self.rules {
            report.diagnostics.extend(rule.validate(config));
        }
        report
    }
}

// ─── Default rules ──────────────────────────────────────────────────────────

/// `min_frequency` must be at least 1.
struct MinFrequencyRule;

impl ValidationRule for MinFrequencyRule {
    fn name(&self) -> &str {
        "min_frequency"
    }

    fn validate(&self, config: &AnalysisConfig) -> Vec<ValidationDiagnostic> {
        if config.min_frequency >= 1 {
            return Vec::new();
        }
        vec![ValidationDiagnostic::error(
            ConfigError::new(
                ErrorCode::MinFrequencyZero,
                "min_frequency",
                "must be at least 1",
            )
            .with_hint("use 1 to keep every counted token"),
        )]
    }
}

/// `top_k == 0` is legal but the ranked output will always be empty.
struct TopKRule;

impl ValidationRule for TopKRule {
    fn name(&self) -> &str {
        "top_k"
    }

    fn validate(&self, config: &AnalysisConfig) -> Vec<ValidationDiagnostic> {
        if config.top_k > 0 {
            return Vec::new();
        }
        vec![ValidationDiagnostic::warning(
            ConfigError::new(
                ErrorCode::TopKZero,
                "top_k",
                "is 0; ranked output will always be empty",
            )
            .with_hint("set top_k to the number of keywords you want"),
        )]
    }
}

/// Very large `min_token_length` drops nearly every Chinese word.
struct TokenLengthRule;

impl ValidationRule for TokenLengthRule {
    fn name(&self) -> &str {
        "min_token_length"
    }

    fn validate(&self, config: &AnalysisConfig) -> Vec<ValidationDiagnostic> {
        if config.min_token_length < 8 {
            return Vec::new();
        }
        vec![ValidationDiagnostic::warning(
            ConfigError::new(
                ErrorCode::MinTokenLengthExcessive,
                "min_token_length",
                format!(
                    "is {}; almost all Chinese words are 2-4 characters",
                    config.min_token_length
                ),
            )
            .with_hint("1 (drop single characters) is the usual setting"),
        )]
    }
}

/// Unrecognized configuration fields: warnings, or errors in strict mode.
struct UnknownFieldsRule;

impl ValidationRule for UnknownFieldsRule {
    fn name(&self) -> &str {
        "unknown_fields"
    }

    fn validate(&self, config: &AnalysisConfig) -> Vec<ValidationDiagnostic> {
        let mut fields: Vec<&String> = config.unknown_fields.keys().collect();
        fields.sort(); // deterministic diagnostic order

        fields
            .into_iter()
            .map(|field| {
                let err = ConfigError::new(
                    ErrorCode::UnknownField,
                    field.clone(),
                    "unrecognized configuration field",
                )
                .with_hint("check the field name against the documented options");
                if config.strict {
                    ValidationDiagnostic::error(err)
                } else {
                    ValidationDiagnostic::warning(err)
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let report = AnalysisConfig::default().validate();
        assert!(report.is_valid());
        assert!(report.is_empty());
    }

    #[test]
    fn test_zero_min_frequency_is_error() {
        let config = AnalysisConfig {
            min_frequency: 0,
            ..Default::default()
        };
        let report = config.validate();

        assert!(report.has_errors());
        let err = report.errors().next().unwrap();
        assert_eq!(err.code, ErrorCode::MinFrequencyZero);
        assert_eq!(err.field, "min_frequency");
    }

    #[test]
    fn test_zero_top_k_is_warning_only() {
        let config = AnalysisConfig {
            top_k: 0,
            ..Default::default()
        };
        let report = config.validate();

        assert!(report.is_valid());
        assert_eq!(report.warnings().count(), 1);
        assert_eq!(report.warnings().next().unwrap().code, ErrorCode::TopKZero);
    }

    #[test]
    fn test_excessive_token_length_is_warning() {
        let config = AnalysisConfig {
            min_token_length: 8,
            ..Default::default()
        };
        let report = config.validate();

        assert!(report.is_valid());
        assert_eq!(
            report.warnings().next().unwrap().code,
            ErrorCode::MinTokenLengthExcessive
        );
    }

    #[test]
    fn test_unknown_fields_warn_by_default() {
        let config: AnalysisConfig =
            serde_json::from_str(r#"{ "max_tokens": 1000, "window": 3 }"#).unwrap();
        let report = config.validate();

        assert!(report.is_valid());
        assert_eq!(report.warnings().count(), 2);
        // Sorted by field name.
        let fields: Vec<&str> = report.warnings().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["max_tokens", "window"]);
    }

    #[test]
    fn test_unknown_fields_error_in_strict_mode() {
        let config: AnalysisConfig =
            serde_json::from_str(r#"{ "strict": true, "max_tokens": 1000 }"#).unwrap();
        let report = config.validate();

        assert!(report.has_errors());
        assert_eq!(report.errors().next().unwrap().code, ErrorCode::UnknownField);
    }

    #[test]
    fn test_engine_collects_all_diagnostics() {
        let config = AnalysisConfig {
            min_frequency: 0,
            top_k: 0,
            ..Default::default()
        };
        let report = config.validate();

        assert!(report.has_errors());
        assert_eq!(report.len(), 2);
        assert_eq!(report.errors().count(), 1);
        assert_eq!(report.warnings().count(), 1);
    }

    #[test]
    fn test_report_display_lists_each_diagnostic() {
        let config = AnalysisConfig {
            min_frequency: 0,
            ..Default::default()
        };
        let rendered = config.validate().to_string();
        assert!(rendered.contains("error: E001"));
    }

    #[test]
    fn test_report_serializes() {
        let config = AnalysisConfig {
            min_frequency: 0,
            ..Default::default()
        };
        let json = serde_json::to_value(config.validate()).unwrap();
        assert_eq!(json["diagnostics"][0]["severity"], "error");
        assert_eq!(json["diagnostics"][0]["code"], "E001");
    }
}
