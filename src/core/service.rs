//! Service trait for the store collaborator
//!
//! All network I/O is delegated to an implementation of [`BillService`];
//! the core itself never performs I/O. The trait mirrors the original
//! store surface (`bills().list()`, `bills().create()`, `bills().update()`)
//! and is agnostic to the underlying backend.

use crate::core::bill::{Bill, CreateBillPayload, UpdateBillPayload};
use anyhow::Result;
use async_trait::async_trait;

/// Persistence seam for bill records
///
/// Implementations are provided in [`crate::storage`]: an in-memory store
/// for development, plus mocked stores for tests. Failures carry the
/// store's human-readable message; callers surface it to the user
/// unchanged (e.g. `"Erreur 404"`).
#[async_trait]
pub trait BillService: Send + Sync {
    /// Fetch all bills visible to the connected user
    async fn list(&self) -> Result<Vec<Bill>>;

    /// Persist a new bill
    async fn create(&self, payload: CreateBillPayload) -> Result<Bill>;

    /// Update an existing bill
    async fn update(&self, payload: UpdateBillPayload) -> Result<Bill>;
}
