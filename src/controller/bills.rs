//! Bills list controller
//!
//! Thin adapter between the store collaborator and the list view: fetches
//! the bills, orders them from most recent to earliest and captures store
//! failures as the error text the view displays.

use crate::core::bill::Bill;
use crate::core::ordering::order_by_date_desc;
use crate::core::service::BillService;
use crate::core::session::SessionContext;
use std::sync::Arc;

/// What the bills page renders
#[derive(Debug, Clone, PartialEq)]
pub struct BillsView {
    /// Bills ordered from most recent to earliest date
    pub bills: Vec<Bill>,
    /// Store failure message, surfaced verbatim
    pub error: Option<String>,
}

/// Controller for the bills list page
pub struct BillsController {
    store: Arc<dyn BillService>,
    session: SessionContext,
}

impl BillsController {
    pub fn new(store: Arc<dyn BillService>, session: SessionContext) -> Self {
        Self { store, session }
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    /// Build the list view: fetch, order, or capture the failure message
    ///
    /// A store failure yields an empty list and the store's message
    /// unchanged in [`BillsView::error`]; the fetch itself never
    /// propagates an error to the view layer.
    pub async fn view(&self) -> BillsView {
        match self.store.list().await {
            Ok(bills) => {
                tracing::debug!(count = bills.len(), "Fetched bills");
                BillsView {
                    bills: order_by_date_desc(bills),
                    error: None,
                }
            }
            Err(e) => {
                let message = e.to_string();
                tracing::warn!(error = %message, "Failed to fetch bills");
                BillsView {
                    bills: Vec::new(),
                    error: Some(message),
                }
            }
        }
    }
}
