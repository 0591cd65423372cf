//! Core module containing the domain types and pure logic

pub mod bill;
pub mod error;
pub mod ordering;
pub mod proof;
pub mod service;
pub mod session;
pub mod submission;
pub mod validation;

pub use bill::{Bill, BillStatus, CreateBillPayload, EXPENSE_TYPES, UpdateBillPayload};
pub use error::{
    BilledError, BilledResult, ConfigError, ProofError, StoreError, SubmissionError,
    ValidationError,
};
pub use ordering::{anti_chrono, order_by_date_desc, sort_dates_desc};
pub use proof::{ACCEPTED_EXTENSIONS, ProofFile, validate, validate_against};
pub use service::BillService;
pub use session::{SessionContext, UserType};
pub use submission::SubmissionState;
