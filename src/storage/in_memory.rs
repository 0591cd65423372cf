//! In-memory implementation of BillService for testing and development

use crate::core::bill::{Bill, BillStatus, CreateBillPayload, UpdateBillPayload};
use crate::core::error::StoreError;
use crate::core::service::BillService;
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// In-memory bill service implementation
///
/// Useful for testing and development. Uses RwLock for thread-safe access.
/// Bills are kept in insertion order, so a freshly listed collection
/// reflects creation order until the caller sorts it for display.
#[derive(Clone)]
pub struct InMemoryBillService {
    bills: Arc<RwLock<Vec<Bill>>>,
}

impl InMemoryBillService {
    /// Create an empty in-memory bill service
    pub fn new() -> Self {
        Self {
            bills: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Create a service pre-populated with the given bills
    pub fn with_bills(bills: Vec<Bill>) -> Self {
        Self {
            bills: Arc::new(RwLock::new(bills)),
        }
    }
}

impl Default for InMemoryBillService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BillService for InMemoryBillService {
    async fn list(&self) -> Result<Vec<Bill>> {
        let bills = self
            .bills
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(bills.clone())
    }

    async fn create(&self, payload: CreateBillPayload) -> Result<Bill> {
        let mut bills = self
            .bills
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let bill = Bill {
            id: Uuid::new_v4().simple().to_string(),
            date: payload.date,
            amount: payload.amount,
            status: BillStatus::Pending,
            file_url: Some(payload.file_url),
            file_name: Some(payload.file_name),
            bill_type: payload.bill_type,
            name: payload.name,
            email: payload.email,
            commentary: payload.commentary,
            comment_admin: None,
            pct: payload.pct,
            vat: payload.vat,
        };

        tracing::debug!(bill_id = %bill.id, "Created bill");
        bills.push(bill.clone());

        Ok(bill)
    }

    async fn update(&self, payload: UpdateBillPayload) -> Result<Bill> {
        let mut bills = self
            .bills
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let bill = bills
            .iter_mut()
            .find(|b| b.id == payload.id)
            .ok_or_else(|| {
                anyhow::Error::new(StoreError::NotFound {
                    id: payload.id.clone(),
                })
            })?;

        if let Some(status) = payload.status {
            bill.status = status;
        }
        if let Some(comment) = payload.comment_admin {
            bill.comment_admin = Some(comment);
        }
        if let Some(amount) = payload.amount {
            bill.amount = Some(amount);
        }
        if let Some(date) = payload.date {
            bill.date = date;
        }

        tracing::debug!(bill_id = %bill.id, "Updated bill");

        Ok(bill.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(name: &str, date: &str) -> CreateBillPayload {
        CreateBillPayload {
            date: date.to_string(),
            amount: Some(100.0),
            bill_type: "Transports".to_string(),
            name: name.to_string(),
            email: "a@a".to_string(),
            commentary: String::new(),
            file_name: format!("{}.png", name),
            file_url: format!("https://localhost/storage/{}.png", name),
            pct: Some(20),
            vat: None,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_pending_status() {
        let service = InMemoryBillService::new();
        let bill = service.create(payload("taxi", "2023-01-01")).await.unwrap();

        assert!(!bill.id.is_empty());
        assert_eq!(bill.status, BillStatus::Pending);
        assert_eq!(bill.file_name.as_deref(), Some("taxi.png"));
    }

    #[tokio::test]
    async fn test_list_returns_bills_in_insertion_order() {
        let service = InMemoryBillService::new();
        service.create(payload("one", "2023-01-01")).await.unwrap();
        service.create(payload("two", "2023-02-01")).await.unwrap();

        let bills = service.list().await.unwrap();
        assert_eq!(bills.len(), 2);
        assert_eq!(bills[0].name, "one");
        assert_eq!(bills[1].name, "two");
    }

    #[tokio::test]
    async fn test_update_changes_status_and_comment() {
        let service = InMemoryBillService::new();
        let bill = service.create(payload("taxi", "2023-01-01")).await.unwrap();

        let updated = service
            .update(UpdateBillPayload {
                id: bill.id.clone(),
                status: Some(BillStatus::Accepted),
                comment_admin: Some("ok".to_string()),
                amount: None,
                date: None,
            })
            .await
            .unwrap();

        assert_eq!(updated.status, BillStatus::Accepted);
        assert_eq!(updated.comment_admin.as_deref(), Some("ok"));
        // untouched fields survive a partial update
        assert_eq!(updated.amount, Some(100.0));
    }

    #[tokio::test]
    async fn test_update_unknown_id_fails() {
        let service = InMemoryBillService::new();
        let result = service
            .update(UpdateBillPayload {
                id: "missing".to_string(),
                status: None,
                comment_admin: None,
                amount: None,
                date: None,
            })
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_with_bills_preloads_the_store() {
        let service = InMemoryBillService::new();
        let bill = service.create(payload("taxi", "2023-01-01")).await.unwrap();

        let preloaded = InMemoryBillService::with_bills(vec![bill]);
        assert_eq!(preloaded.list().await.unwrap().len(), 1);
    }
}
