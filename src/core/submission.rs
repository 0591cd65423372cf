//! Submission gating state machine
//!
//! A new bill may only reach the store with a validated proof file. The
//! machine is:
//!
//! ```text
//! Idle ──choose_file──▶ FileChosen ──run_validation──▶ Validated
//!                                 └──────────────────▶ Rejected ──clear──▶ Idle
//! Validated ──begin_submit──▶ Submitting ──complete──▶ Submitted
//!                                        └──fail─────▶ SubmissionFailed
//! ```
//!
//! `Submitted` is terminal. `SubmissionFailed` is terminal for that attempt;
//! the form stays editable and the user may retry manually, there is no
//! automatic retry. Transitions consume the state and return the next one;
//! an illegal transition returns a typed error and never panics.

use crate::core::bill::Bill;
use crate::core::error::{ProofError, SubmissionError};
use crate::core::proof::{self, ProofFile};

/// State of one new-bill submission
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmissionState {
    /// No file selected
    #[default]
    Idle,
    /// A file was picked but not yet validated
    FileChosen(ProofFile),
    /// The picked file passed validation; submit is enabled
    Validated(ProofFile),
    /// The picked file was rejected; the input must be cleared
    Rejected(ProofError),
    /// The create call to the store is in flight
    Submitting(ProofFile),
    /// The store accepted the bill
    Submitted(Bill),
    /// The store rejected the bill; the form remains editable
    SubmissionFailed { file: ProofFile, message: String },
}

impl SubmissionState {
    /// Short name of the current state, used in transition errors and logs
    pub fn label(&self) -> &'static str {
        match self {
            SubmissionState::Idle => "idle",
            SubmissionState::FileChosen(_) => "file-chosen",
            SubmissionState::Validated(_) => "validated",
            SubmissionState::Rejected(_) => "rejected",
            SubmissionState::Submitting(_) => "submitting",
            SubmissionState::Submitted(_) => "submitted",
            SubmissionState::SubmissionFailed { .. } => "submission-failed",
        }
    }

    /// Submit is enabled only with a validated proof file
    pub fn can_submit(&self) -> bool {
        matches!(self, SubmissionState::Validated(_))
    }

    /// The proof file currently attached to the submission, if any
    pub fn file(&self) -> Option<&ProofFile> {
        match self {
            SubmissionState::FileChosen(file)
            | SubmissionState::Validated(file)
            | SubmissionState::Submitting(file)
            | SubmissionState::SubmissionFailed { file, .. } => Some(file),
            _ => None,
        }
    }

    /// The rejection reason, when the last picked file was refused
    pub fn rejection(&self) -> Option<&ProofError> {
        match self {
            SubmissionState::Rejected(reason) => Some(reason),
            _ => None,
        }
    }

    /// The store's failure message, when the last submit attempt failed
    pub fn failure_message(&self) -> Option<&str> {
        match self {
            SubmissionState::SubmissionFailed { message, .. } => Some(message),
            _ => None,
        }
    }

    /// A file was picked in the form
    ///
    /// Allowed whenever the form is editable. Re-picking replaces any
    /// previously chosen or validated file. Not allowed while a submit is
    /// in flight or after the bill was accepted.
    pub fn choose_file(self, file: ProofFile) -> Result<Self, SubmissionError> {
        match self {
            SubmissionState::Idle
            | SubmissionState::FileChosen(_)
            | SubmissionState::Validated(_)
            | SubmissionState::Rejected(_)
            | SubmissionState::SubmissionFailed { .. } => Ok(SubmissionState::FileChosen(file)),
            other => Err(SubmissionError::InvalidTransition {
                from: other.label(),
                event: "choose_file",
            }),
        }
    }

    /// The file input was emptied
    ///
    /// Any attached file is dropped and the machine returns to `Idle`.
    /// Like `choose_file`, allowed whenever the form is editable and
    /// refused while a submit is in flight or after acceptance.
    pub fn remove_file(self) -> Result<Self, SubmissionError> {
        match self {
            SubmissionState::Idle
            | SubmissionState::FileChosen(_)
            | SubmissionState::Validated(_)
            | SubmissionState::Rejected(_)
            | SubmissionState::SubmissionFailed { .. } => Ok(SubmissionState::Idle),
            other => Err(SubmissionError::InvalidTransition {
                from: other.label(),
                event: "remove_file",
            }),
        }
    }

    /// Run the proof-file validator on the chosen file
    ///
    /// Moves to `Validated` or `Rejected` depending on the outcome.
    pub fn run_validation<S: AsRef<str>>(self, accepted: &[S]) -> Result<Self, SubmissionError> {
        match self {
            SubmissionState::FileChosen(file) => {
                match proof::validate_against(accepted, Some(&file)) {
                    Ok(()) => Ok(SubmissionState::Validated(file)),
                    Err(reason) => Ok(SubmissionState::Rejected(reason)),
                }
            }
            other => Err(SubmissionError::InvalidTransition {
                from: other.label(),
                event: "run_validation",
            }),
        }
    }

    /// Acknowledge a rejection: back to `Idle`, the caller clears the input
    pub fn clear(self) -> Result<Self, SubmissionError> {
        match self {
            SubmissionState::Rejected(_) => Ok(SubmissionState::Idle),
            other => Err(SubmissionError::InvalidTransition {
                from: other.label(),
                event: "clear",
            }),
        }
    }

    /// Start the store create call
    ///
    /// Only a validated submission may be sent; anything else is a
    /// `NotValidated` error so the caller can distinguish "user pressed
    /// submit too early" from a plain illegal transition.
    pub fn begin_submit(self) -> Result<Self, SubmissionError> {
        match self {
            SubmissionState::Validated(file) => Ok(SubmissionState::Submitting(file)),
            SubmissionState::Submitting(_) | SubmissionState::Submitted(_) => {
                Err(SubmissionError::InvalidTransition {
                    from: self.label(),
                    event: "begin_submit",
                })
            }
            _ => Err(SubmissionError::NotValidated),
        }
    }

    /// The store accepted the bill
    pub fn complete(self, bill: Bill) -> Result<Self, SubmissionError> {
        match self {
            SubmissionState::Submitting(_) => Ok(SubmissionState::Submitted(bill)),
            other => Err(SubmissionError::InvalidTransition {
                from: other.label(),
                event: "complete",
            }),
        }
    }

    /// The store rejected the bill with a human-readable message
    pub fn fail(self, message: impl Into<String>) -> Result<Self, SubmissionError> {
        match self {
            SubmissionState::Submitting(file) => Ok(SubmissionState::SubmissionFailed {
                file,
                message: message.into(),
            }),
            other => Err(SubmissionError::InvalidTransition {
                from: other.label(),
                event: "fail",
            }),
        }
    }

    /// Manual retry after a failed submit: the validated file is kept
    pub fn retry(self) -> Result<Self, SubmissionError> {
        match self {
            SubmissionState::SubmissionFailed { file, .. } => {
                Ok(SubmissionState::Validated(file))
            }
            other => Err(SubmissionError::InvalidTransition {
                from: other.label(),
                event: "retry",
            }),
        }
    }
}
