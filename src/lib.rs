//! # Billed
//!
//! Core logic of an employee expense-report application: the bills list
//! and the new-bill submission form, decoupled from any UI framework.
//!
//! ## Features
//!
//! - **Bill list ordering**: stable, lexicographic, most-recent-first
//!   ordering of `YYYY-MM-DD` date strings, tolerant of malformed input
//! - **Proof-file validation**: extension-based gating of expense proofs
//!   (`jpg`, `jpeg`, `png`, case-insensitive)
//! - **Submission gating**: a typed state machine that only lets a
//!   validated submission reach the store
//! - **Pluggable store**: all persistence behind the [`BillService`]
//!   trait, with in-memory and mocked implementations included
//! - **Explicit session**: the connected user is a value passed to each
//!   controller, never ambient global state
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use billed::prelude::*;
//!
//! let store = Arc::new(InMemoryBillService::new());
//! let session = SessionContext::employee("jane@corp.tld");
//!
//! // Bills page: fetched, then ordered from most recent to earliest
//! let bills = BillsController::new(store.clone(), session.clone());
//! let view = bills.view().await;
//!
//! // New bill form: validation gates the submit
//! let mut form = NewBillController::with_defaults(store, session);
//! form.handle_file_change(Some(ProofFile::new("facture.png", Some("image/png"))))?;
//! assert!(form.can_submit());
//! ```

pub mod config;
pub mod controller;
pub mod core;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        bill::{Bill, BillStatus, CreateBillPayload, UpdateBillPayload},
        error::{BilledError, BilledResult, ProofError, StoreError, SubmissionError},
        ordering::{order_by_date_desc, sort_dates_desc},
        proof::{ACCEPTED_EXTENSIONS, ProofFile, validate},
        service::BillService,
        session::{SessionContext, UserType},
        submission::SubmissionState,
    };

    // === Controllers ===
    pub use crate::controller::{BillsController, BillsView, NewBillController, NewBillForm};

    // === Storage ===
    pub use crate::storage::{FailingBillService, InMemoryBillService, MockBillService};

    // === Config ===
    pub use crate::config::{AppConfig, StoreConfig, UploadConfig};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use std::sync::Arc;
}
