//! Mocked bill services for tests
//!
//! [`MockBillService`] serves a fixed set of fixture bills and records how
//! many times each mutating operation was invoked, so tests can assert
//! that a rejected submission never reaches the store.
//! [`FailingBillService`] rejects every operation with a given message,
//! mirroring the API's human-readable failures (`"Erreur 404"`,
//! `"Erreur 500"`).

use crate::core::bill::{Bill, BillStatus, CreateBillPayload, UpdateBillPayload};
use crate::core::error::StoreError;
use crate::core::service::BillService;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

/// The canonical fixture bills, matching the original application's test data
pub fn fixture_bills() -> Vec<Bill> {
    vec![
        Bill {
            id: "47qAXb6fIm2zOKkLzMro".to_string(),
            date: "2004-04-04".to_string(),
            amount: Some(400.0),
            status: BillStatus::Pending,
            file_url: Some(
                "https://test.storage.tld/v0/b/billable-677b6.a…f-1.jpg".to_string(),
            ),
            file_name: Some("preview-facture-free-201801-pdf-1.jpg".to_string()),
            bill_type: "Hôtel et logement".to_string(),
            name: "encore".to_string(),
            email: "a@a".to_string(),
            commentary: "séminaire billed".to_string(),
            comment_admin: Some("ok".to_string()),
            pct: Some(20),
            vat: Some("80".to_string()),
        },
        Bill {
            id: "BeKy5Mo4jkmdfPGYpTxZ".to_string(),
            date: "2001-01-01".to_string(),
            amount: Some(100.0),
            status: BillStatus::Refused,
            file_url: Some("https://test.storage.tld/v0/b/billable-677b6.a…9d3.jpg".to_string()),
            file_name: None,
            bill_type: "Transports".to_string(),
            name: "test1".to_string(),
            email: "a@a".to_string(),
            commentary: "plop".to_string(),
            comment_admin: Some("en fait non".to_string()),
            pct: Some(20),
            vat: None,
        },
        Bill {
            id: "UIUZtnPQvnbFnB0ozvJh".to_string(),
            date: "2003-03-03".to_string(),
            amount: Some(300.0),
            status: BillStatus::Accepted,
            file_url: Some("https://test.storage.tld/v0/b/billable-677b6.a…dur.png".to_string()),
            file_name: Some("facture-client-php-exportee-dans-document-pdf.png".to_string()),
            bill_type: "Services en ligne".to_string(),
            name: "test3".to_string(),
            email: "a@a".to_string(),
            commentary: String::new(),
            comment_admin: Some("bon bah dacord".to_string()),
            pct: Some(20),
            vat: Some("60".to_string()),
        },
        Bill {
            id: "qcCK3SzECmaZAGRrHjaC".to_string(),
            date: "2002-02-02".to_string(),
            amount: Some(200.0),
            status: BillStatus::Refused,
            file_url: Some("https://test.storage.tld/v0/b/billable-677b6.a…l-1.jpg".to_string()),
            file_name: None,
            bill_type: "Restaurants et bars".to_string(),
            name: "test2".to_string(),
            email: "a@a".to_string(),
            commentary: "test2".to_string(),
            comment_admin: Some("grandement accepté".to_string()),
            pct: Some(20),
            vat: Some("40".to_string()),
        },
    ]
}

/// Mocked bill service backed by the fixture bills
///
/// `create` and `update` succeed and echo a bill built from the request
/// (or the canonical fixture for `update`, like the original mocked
/// store), while counting invocations.
#[derive(Clone)]
pub struct MockBillService {
    bills: Arc<RwLock<Vec<Bill>>>,
    create_calls: Arc<AtomicUsize>,
    update_calls: Arc<AtomicUsize>,
}

impl MockBillService {
    pub fn new() -> Self {
        Self {
            bills: Arc::new(RwLock::new(fixture_bills())),
            create_calls: Arc::new(AtomicUsize::new(0)),
            update_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// How many times `create` was invoked
    pub fn create_count(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    /// How many times `update` was invoked
    pub fn update_count(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }
}

impl Default for MockBillService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BillService for MockBillService {
    async fn list(&self) -> Result<Vec<Bill>> {
        let bills = self
            .bills
            .read()
            .map_err(|e| anyhow::anyhow!("Failed to acquire read lock: {}", e))?;
        Ok(bills.clone())
    }

    async fn create(&self, payload: CreateBillPayload) -> Result<Bill> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);

        let bill = Bill {
            id: "47qAXb6fIm2zOKkLzMro".to_string(),
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
        Ok(bill)
    }

    async fn update(&self, _payload: UpdateBillPayload) -> Result<Bill> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        // The original mocked store resolves update with the canonical bill
        Ok(fixture_bills().remove(0))
    }
}

/// Bill service that rejects every operation with a fixed message
///
/// The message is surfaced to the user verbatim, so tests construct it
/// with the exact literals the API produces.
#[derive(Clone)]
pub struct FailingBillService {
    message: String,
}

impl FailingBillService {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    fn rejection(&self) -> anyhow::Error {
        StoreError::Rejected {
            message: self.message.clone(),
        }
        .into()
    }
}

#[async_trait]
impl BillService for FailingBillService {
    async fn list(&self) -> Result<Vec<Bill>> {
        Err(self.rejection())
    }

    async fn create(&self, _payload: CreateBillPayload) -> Result<Bill> {
        Err(self.rejection())
    }

    async fn update(&self, _payload: UpdateBillPayload) -> Result<Bill> {
        Err(self.rejection())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_serves_fixture_bills() {
        let service = MockBillService::new();
        let bills = service.list().await.unwrap();
        assert_eq!(bills.len(), 4);
        assert_eq!(bills[0].id, "47qAXb6fIm2zOKkLzMro");
    }

    #[tokio::test]
    async fn test_mock_counts_create_calls() {
        let service = MockBillService::new();
        assert_eq!(service.create_count(), 0);

        let payload = CreateBillPayload {
            date: "2023-01-01".to_string(),
            amount: Some(10.0),
            bill_type: "Transports".to_string(),
            name: "bus".to_string(),
            email: "a@a".to_string(),
            commentary: String::new(),
            file_name: "ticket.png".to_string(),
            file_url: "https://localhost/storage/ticket.png".to_string(),
            pct: None,
            vat: None,
        };
        service.create(payload).await.unwrap();
        assert_eq!(service.create_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_update_resolves_canonical_bill() {
        let service = MockBillService::new();
        let bill = service
            .update(UpdateBillPayload {
                id: "47qAXb6fIm2zOKkLzMro".to_string(),
                status: None,
                comment_admin: None,
                amount: None,
                date: None,
            })
            .await
            .unwrap();
        assert_eq!(bill.id, "47qAXb6fIm2zOKkLzMro");
        assert_eq!(bill.date, "2004-04-04");
        assert_eq!(service.update_count(), 1);
    }

    #[tokio::test]
    async fn test_failing_service_surfaces_message_verbatim() {
        let service = FailingBillService::new("Erreur 404");
        let err = service.list().await.unwrap_err();
        assert_eq!(err.to_string(), "Erreur 404");
    }
}
