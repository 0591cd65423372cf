//! Bill record and payload types
//!
//! The wire format follows the original API: camelCase field names, `type`
//! for the expense category, `vat` as a string and `pct` as a number. A
//! [`Bill`] is a read-only record for display; mutations go through the
//! create/update payloads handed to the store collaborator.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The expense categories offered by the new-bill form's select
pub const EXPENSE_TYPES: [&str; 7] = [
    "Transports",
    "Restaurants et bars",
    "Hôtel et logement",
    "Services en ligne",
    "IT et électronique",
    "Equipement et matériel",
    "Fournitures de bureau",
];

/// Status of an expense report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    #[default]
    Pending,
    Accepted,
    Refused,
}

impl BillStatus {
    /// The lowercase wire name for this status
    pub fn as_str(&self) -> &'static str {
        match self {
            BillStatus::Pending => "pending",
            BillStatus::Accepted => "accepted",
            BillStatus::Refused => "refused",
        }
    }
}

/// An employee expense report record
///
/// `date` is kept as the raw `YYYY-MM-DD` string the API delivers; the
/// ordering core compares it lexicographically and never parses it.
/// `amount` is optional because malformed records have been observed in
/// production data and the list view must still render them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub id: String,
    pub date: String,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub status: BillStatus,
    #[serde(default)]
    pub file_url: Option<String>,
    #[serde(default)]
    pub file_name: Option<String>,
    /// Expense category (e.g. "Transports", "Hôtel et logement")
    #[serde(rename = "type", default)]
    pub bill_type: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub commentary: String,
    #[serde(default)]
    pub comment_admin: Option<String>,
    #[serde(default)]
    pub pct: Option<u32>,
    #[serde(default)]
    pub vat: Option<String>,
}

impl Bill {
    /// Deserialize a list of bills from a JSON array, skipping entries that
    /// are null or malformed beyond repair
    ///
    /// The list view degrades gracefully on corrupted data rather than
    /// failing the whole fetch, so a bad entry is logged and dropped.
    pub fn list_from_json(value: &Value) -> Vec<Bill> {
        let Some(entries) = value.as_array() else {
            return Vec::new();
        };

        entries
            .iter()
            .filter_map(|entry| match serde_json::from_value(entry.clone()) {
                Ok(bill) => Some(bill),
                Err(e) => {
                    tracing::warn!("Skipping malformed bill entry: {}", e);
                    None
                }
            })
            .collect()
    }
}

/// Payload for creating a new bill
///
/// Built by the new-bill controller from the form fields, the validated
/// proof file name and the session email. The server assigns the id and
/// the initial `pending` status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBillPayload {
    pub date: String,
    pub amount: Option<f64>,
    #[serde(rename = "type")]
    pub bill_type: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub commentary: String,
    pub file_name: String,
    pub file_url: String,
    #[serde(default)]
    pub pct: Option<u32>,
    #[serde(default)]
    pub vat: Option<String>,
}

/// Payload for updating an existing bill
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBillPayload {
    pub id: String,
    #[serde(default)]
    pub status: Option<BillStatus>,
    #[serde(default)]
    pub comment_admin: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub date: Option<String>,
}
