//! Patient model types used throughout the patient service.
//!
//! These types bridge the persistence layer, the record mapper, and the web
//! API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Domain record
// ---------------------------------------------------------------------------

/// The authoritative internal representation of a patient, as held by the
/// persistence layer.
///
/// Every field is optional: the backing store permits absent columns, and
/// the mapper copies absence through rather than papering over it. `id`
/// stays `None` until the persistence layer assigns one on first save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientRecord {
    pub id: Option<Uuid>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub registered_date: Option<NaiveDate>,
}

impl PatientRecord {
    /// Attach an identifier to a record that does not have one yet.
    ///
    /// For the persistence layer when it assigns an id on first save; the
    /// mapper itself never generates identifiers.
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }
}

// ---------------------------------------------------------------------------
// Inbound request shape
// ---------------------------------------------------------------------------

/// A patient create request as received from an external caller.
///
/// Deserialized by the request layer, pre-validated by its validation
/// collaborator, and consumed once by the mapper. Dates arrive as calendar
/// dates, already parsed by the time they get here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub registered_date: Option<NaiveDate>,
}

// ---------------------------------------------------------------------------
// Outbound response shape
// ---------------------------------------------------------------------------

/// A patient record as returned to callers after a read.
///
/// `id` and `date_of_birth` are rendered to text by the mapper and are
/// always present; the remaining fields pass through as-is and serialize as
/// `null` when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientResponse {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub date_of_birth: String,
}
