//! Patient service core library.
//!
//! This crate provides the record-mapping core of the patient service: the
//! patient domain record, the inbound/outbound wire shapes, and the pure
//! mapping functions between them. The HTTP layer, persistence, and request
//! validation live in sibling crates and hand well-formed values in and out.

pub mod errors;
pub mod mapper;
pub mod models;

// Re-exports for convenience.
pub use errors::MappingError;
pub use models::{PatientRecord, PatientRequest, PatientResponse};
