//! Proof-file validation
//!
//! A new bill must carry an image proof. Only `jpg`, `jpeg` and `png` are
//! accepted, matched case-insensitively on the last dot-delimited segment
//! of the file name. Validation is extension-based on purpose: the declared
//! MIME type is carried for information but never consulted, because that
//! is the observed behavior of the application being replaced and changing
//! it would alter which inputs are accepted.

use crate::core::error::ProofError;

/// Extensions accepted for expense proofs (lowercase)
pub const ACCEPTED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// A user-selected proof file, before upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProofFile {
    /// Original file name, extension included
    pub name: String,
    /// Declared content type, informational only
    pub mime_type: Option<String>,
}

impl ProofFile {
    pub fn new(name: impl Into<String>, mime_type: Option<&str>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.map(str::to_string),
        }
    }

    /// The extension of the file name: everything after the last dot
    ///
    /// `archive.tar.png` yields `png`. A name with no dot has no extension.
    pub fn extension(&self) -> Option<&str> {
        self.name.rsplit_once('.').map(|(_, ext)| ext)
    }
}

/// Validate a selected proof file against the default accepted extensions
///
/// `None` means no file was selected. Pure, no I/O; clearing the file
/// input and alerting the user on rejection is the caller's job.
pub fn validate(file: Option<&ProofFile>) -> Result<(), ProofError> {
    validate_against(&ACCEPTED_EXTENSIONS, file)
}

/// Validate a selected proof file against a custom accepted-extension set
///
/// Extensions are compared case-insensitively. Used by deployments that
/// override the accepted set in configuration.
pub fn validate_against<S: AsRef<str>>(
    accepted: &[S],
    file: Option<&ProofFile>,
) -> Result<(), ProofError> {
    let file = file.ok_or(ProofError::Missing)?;

    let supported = file.extension().is_some_and(|ext| {
        accepted
            .iter()
            .any(|accepted| accepted.as_ref().eq_ignore_ascii_case(ext))
    });

    if supported {
        Ok(())
    } else {
        Err(ProofError::UnsupportedExtension {
            file_name: file.name.clone(),
        })
    }
}
