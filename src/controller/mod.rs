//! View controllers: thin event-handling adapters over the pure core

pub mod bills;
pub mod new_bill;

pub use bills::{BillsController, BillsView};
pub use new_bill::{NewBillController, NewBillForm};
