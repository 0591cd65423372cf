//! Typed error handling for the billed crate
//!
//! Every failure the core can produce is represented here, so callers can
//! match on specific cases instead of dealing with opaque `anyhow::Error`
//! values.
//!
//! # Error Categories
//!
//! - [`ProofError`]: a proof file was missing or has an unsupported extension
//! - [`SubmissionError`]: an illegal transition of the submission state machine
//! - [`ValidationError`]: a bill payload failed field validation
//! - [`StoreError`]: the store collaborator rejected an operation
//! - [`ConfigError`]: configuration parsing problems
//!
//! Store rejection messages are surfaced verbatim: the original API reports
//! human-readable strings such as `"Erreur 404"` and the UI is expected to
//! display them unchanged.

use serde::Serialize;
use std::fmt;

/// The main error type for the billed crate
///
/// This enum encompasses all possible errors that can occur within the core.
/// Each variant contains a more specific error type for that category.
#[derive(Debug)]
pub enum BilledError {
    /// Proof-file validation errors
    Proof(ProofError),

    /// Submission state machine errors
    Submission(SubmissionError),

    /// Bill payload validation errors
    Validation(ValidationError),

    /// Store collaborator errors
    Store(StoreError),

    /// Configuration errors
    Config(ConfigError),
}

impl fmt::Display for BilledError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BilledError::Proof(e) => write!(f, "{}", e),
            BilledError::Submission(e) => write!(f, "{}", e),
            BilledError::Validation(e) => write!(f, "{}", e),
            BilledError::Store(e) => write!(f, "{}", e),
            BilledError::Config(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for BilledError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BilledError::Proof(e) => Some(e),
            BilledError::Submission(e) => Some(e),
            BilledError::Validation(e) => Some(e),
            BilledError::Store(e) => Some(e),
            BilledError::Config(e) => Some(e),
        }
    }
}

impl BilledError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            BilledError::Proof(e) => e.error_code(),
            BilledError::Submission(e) => e.error_code(),
            BilledError::Validation(_) => "VALIDATION_ERROR",
            BilledError::Store(_) => "STORE_ERROR",
            BilledError::Config(_) => "CONFIG_ERROR",
        }
    }
}

// =============================================================================
// Proof Errors
// =============================================================================

/// Errors produced by the proof-file validator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProofError {
    /// No file was selected when validation was invoked
    Missing,

    /// The selected file's extension is not in the accepted set
    UnsupportedExtension {
        file_name: String,
    },
}

impl fmt::Display for ProofError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProofError::Missing => {
                write!(f, "Aucun justificatif sélectionné")
            }
            ProofError::UnsupportedExtension { file_name } => {
                write!(
                    f,
                    "Le fichier '{}' n'est pas accepté (extensions autorisées: jpg, jpeg, png)",
                    file_name
                )
            }
        }
    }
}

impl std::error::Error for ProofError {}

impl ProofError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ProofError::Missing => "MISSING_FILE",
            ProofError::UnsupportedExtension { .. } => "UNSUPPORTED_EXTENSION",
        }
    }
}

impl From<ProofError> for BilledError {
    fn from(err: ProofError) -> Self {
        BilledError::Proof(err)
    }
}

// =============================================================================
// Submission Errors
// =============================================================================

/// Errors produced by the submission state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    /// The requested transition is not allowed from the current state
    InvalidTransition {
        from: &'static str,
        event: &'static str,
    },

    /// Submit was requested without a validated proof file
    NotValidated,
}

impl fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionError::InvalidTransition { from, event } => {
                write!(f, "Cannot apply '{}' in state '{}'", event, from)
            }
            SubmissionError::NotValidated => {
                write!(f, "Submit requires a validated proof file")
            }
        }
    }
}

impl std::error::Error for SubmissionError {}

impl SubmissionError {
    pub fn error_code(&self) -> &'static str {
        match self {
            SubmissionError::InvalidTransition { .. } => "INVALID_TRANSITION",
            SubmissionError::NotValidated => "NOT_VALIDATED",
        }
    }
}

impl From<SubmissionError> for BilledError {
    fn from(err: SubmissionError) -> Self {
        BilledError::Submission(err)
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors related to bill payload validation
#[derive(Debug)]
pub enum ValidationError {
    /// Single field validation error
    FieldError {
        field: String,
        message: String,
    },

    /// Multiple field validation errors
    FieldErrors(Vec<FieldValidationError>),

    /// Invalid JSON format
    InvalidJson {
        message: String,
    },
}

/// A single field validation error
#[derive(Debug, Clone, Serialize)]
pub struct FieldValidationError {
    pub field: String,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::FieldError { field, message } => {
                write!(f, "Validation error for field '{}': {}", field, message)
            }
            ValidationError::FieldErrors(errors) => {
                let msgs: Vec<String> = errors
                    .iter()
                    .map(|e| format!("{}: {}", e.field, e.message))
                    .collect();
                write!(f, "Validation errors: {}", msgs.join(", "))
            }
            ValidationError::InvalidJson { message } => {
                write!(f, "Invalid JSON: {}", message)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for BilledError {
    fn from(err: ValidationError) -> Self {
        BilledError::Validation(err)
    }
}

// =============================================================================
// Store Errors
// =============================================================================

/// Errors reported by the store collaborator
///
/// The store's rejection message is displayed to the user unchanged, so
/// `Display` for [`StoreError::Rejected`] is the raw message with no prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store rejected the operation with a human-readable message
    Rejected {
        message: String,
    },

    /// The requested bill does not exist in the store
    NotFound {
        id: String,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Rejected { message } => write!(f, "{}", message),
            StoreError::NotFound { id } => write!(f, "Bill with id '{}' not found", id),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<StoreError> for BilledError {
    fn from(err: StoreError) -> Self {
        BilledError::Store(err)
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to parse configuration
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// Configuration file not found or unreadable
    IoError {
        message: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError { file, message } => {
                if let Some(file) = file {
                    write!(f, "Failed to parse config file '{}': {}", file, message)
                } else {
                    write!(f, "Failed to parse config: {}", message)
                }
            }
            ConfigError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for BilledError {
    fn from(err: ConfigError) -> Self {
        BilledError::Config(err)
    }
}

// =============================================================================
// Conversions from external errors
// =============================================================================

impl From<serde_json::Error> for BilledError {
    fn from(err: serde_json::Error) -> Self {
        BilledError::Validation(ValidationError::InvalidJson {
            message: err.to_string(),
        })
    }
}

impl From<serde_yaml::Error> for BilledError {
    fn from(err: serde_yaml::Error) -> Self {
        BilledError::Config(ConfigError::ParseError {
            file: None,
            message: err.to_string(),
        })
    }
}

impl From<std::io::Error> for BilledError {
    fn from(err: std::io::Error) -> Self {
        BilledError::Config(ConfigError::IoError {
            message: err.to_string(),
        })
    }
}

// =============================================================================
// Result type alias
// =============================================================================

/// A specialized Result type for billed operations
pub type BilledResult<T> = Result<T, BilledError>;

// =============================================================================
// Tests
// =============================================================================
