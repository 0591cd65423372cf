//! New bill controller
//!
//! Drives the submission state machine from the two form events: the file
//! input changing and the form being submitted. The controller owns the
//! observable side effects the view needs on rejection (clear the input,
//! show an alert) and only ever talks to the store from a validated state.

use crate::config::UploadConfig;
use crate::core::bill::{Bill, CreateBillPayload};
use crate::core::error::{BilledResult, ProofError, StoreError, SubmissionError};
use crate::core::proof::ProofFile;
use crate::core::service::BillService;
use crate::core::session::SessionContext;
use crate::core::submission::SubmissionState;
use crate::core::validation;
use std::sync::Arc;

/// The form fields of a new expense report, minus the proof file
#[derive(Debug, Clone, Default)]
pub struct NewBillForm {
    pub bill_type: String,
    pub name: String,
    pub date: String,
    pub amount: Option<f64>,
    pub vat: Option<String>,
    pub pct: Option<u32>,
    pub commentary: String,
}

/// Controller for the new-bill page
pub struct NewBillController {
    store: Arc<dyn BillService>,
    session: SessionContext,
    uploads: UploadConfig,
    state: SubmissionState,
    alert: Option<String>,
    input_cleared: bool,
}

impl NewBillController {
    pub fn new(store: Arc<dyn BillService>, session: SessionContext, uploads: UploadConfig) -> Self {
        Self {
            store,
            session,
            uploads,
            state: SubmissionState::Idle,
            alert: None,
            input_cleared: false,
        }
    }

    /// Construct with the default upload configuration
    pub fn with_defaults(store: Arc<dyn BillService>, session: SessionContext) -> Self {
        Self::new(store, session, UploadConfig::default())
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// True when a validated proof file is attached
    pub fn can_submit(&self) -> bool {
        self.state.can_submit()
    }

    /// The alert text to show the user, set when the last file pick was rejected
    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    /// True when the view must reset the file input's value
    pub fn input_cleared(&self) -> bool {
        self.input_cleared
    }

    /// The store's failure message from the last submit attempt, verbatim
    pub fn error(&self) -> Option<&str> {
        self.state.failure_message()
    }

    /// Handle a change event on the file input
    ///
    /// Runs the validator on the selected file. On acceptance the
    /// submission advances to `Validated`; on rejection the controller
    /// records the alert text, flags the input for clearing and returns
    /// to `Idle`. An empty change event (the user removed the file) also
    /// returns to `Idle`, dropping whatever was attached. A rejection is
    /// a handled outcome, not an error: `Err` only signals an illegal
    /// transition (e.g. while a submit is in flight).
    pub fn handle_file_change(&mut self, file: Option<ProofFile>) -> BilledResult<()> {
        self.alert = None;
        self.input_cleared = false;

        let Some(file) = file else {
            tracing::debug!("File input cleared without a selection");
            // Any previously validated file is gone with the input
            self.state = self.state.clone().remove_file()?;
            self.alert = Some(ProofError::Missing.to_string());
            self.input_cleared = true;
            return Ok(());
        };

        let state = self
            .state
            .clone()
            .choose_file(file)?
            .run_validation(&self.uploads.accepted_extensions)?;

        if let Some(reason) = state.rejection() {
            tracing::debug!(reason = %reason, "Proof file rejected");
            self.alert = Some(reason.to_string());
            self.input_cleared = true;
            self.state = state.clear()?;
        } else {
            tracing::debug!("Proof file accepted");
            self.state = state;
        }

        Ok(())
    }

    /// Handle the form submit event
    ///
    /// Gated on the submission state: without a validated proof file the
    /// store is never invoked and `SubmissionError::NotValidated` comes
    /// back. A payload that fails field validation also stays local, with
    /// the state still `Validated` so the form can be corrected. A store
    /// rejection moves to `SubmissionFailed` carrying the store's message
    /// verbatim; the form remains editable for a manual retry.
    pub async fn handle_submit(&mut self, form: NewBillForm) -> BilledResult<Bill> {
        let SubmissionState::Validated(file) = &self.state else {
            tracing::debug!(state = self.state.label(), "Submit refused");
            return Err(SubmissionError::NotValidated.into());
        };

        let payload = CreateBillPayload {
            date: form.date,
            amount: form.amount,
            bill_type: form.bill_type,
            name: form.name,
            email: self.session.email.clone(),
            commentary: form.commentary,
            file_name: file.name.clone(),
            file_url: self.uploads.placeholder_url.clone(),
            pct: form.pct,
            vat: form.vat,
        };
        validation::validate_create_payload(&payload)?;

        self.state = self.state.clone().begin_submit()?;

        match self.store.create(payload).await {
            Ok(bill) => {
                tracing::info!(bill_id = %bill.id, "Bill submitted");
                self.state = self.state.clone().complete(bill.clone())?;
                Ok(bill)
            }
            Err(e) => {
                let message = e.to_string();
                tracing::warn!(error = %message, "Bill submission failed");
                self.state = self.state.clone().fail(message.clone())?;
                Err(StoreError::Rejected { message }.into())
            }
        }
    }

    /// Re-enable submit after a failed attempt, keeping the validated file
    pub fn retry(&mut self) -> BilledResult<()> {
        self.state = self.state.clone().retry()?;
        Ok(())
    }
}
