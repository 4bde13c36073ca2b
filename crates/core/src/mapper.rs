//! Record mapping between the patient domain record and its wire shapes.
//!
//! Both functions are pure and stateless: no shared state, no I/O, safe to
//! call from any number of request-handling tasks without coordination.
//! Each call reads its input and builds a fresh output instance.

use tracing::debug;

use crate::errors::MappingError;
use crate::models::{PatientRecord, PatientRequest, PatientResponse};

/// Map a stored patient record to the outbound response shape.
///
/// `id` and `date_of_birth` are rendered to their canonical text forms
/// (lowercase hyphenated UUID, ISO-8601 `YYYY-MM-DD`). Both must be present
/// on the record or the mapping fails with [`MappingError::MissingField`];
/// the remaining fields are copied verbatim, absence included.
pub fn to_response(record: &PatientRecord) -> Result<PatientResponse, MappingError> {
    let id = record.id.ok_or(MappingError::MissingField("id"))?;
    let date_of_birth = record
        .date_of_birth
        .ok_or(MappingError::MissingField("date_of_birth"))?;

    debug!(patient_id = %id, "mapping patient record to response shape");

    Ok(PatientResponse {
        id: id.to_string(),
        name: record.name.clone(),
        email: record.email.clone(),
        address: record.address.clone(),
        date_of_birth: date_of_birth.to_string(),
    })
}

/// Map an inbound request to a fresh domain record.
///
/// The five request fields are moved across verbatim; dates stay calendar
/// dates and are never reformatted. `id` is left unset — the persistence
/// layer assigns one on first save.
pub fn to_record(request: PatientRequest) -> PatientRecord {
    debug!("mapping patient request to domain record");

    PatientRecord {
        id: None,
        name: request.name,
        email: request.email,
        address: request.address,
        date_of_birth: request.birth_date,
        registered_date: request.registered_date,
    }
}
