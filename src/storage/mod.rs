//! Storage implementations of the bill service

pub mod in_memory;
pub mod mock;

pub use in_memory::InMemoryBillService;
pub use mock::{FailingBillService, MockBillService, fixture_bills};
