//! Error types for the patient service core library.
//!
//! Derived with `thiserror`, one enum per subsystem as in the wider
//! service; this crate only carries the record-mapping subsystem.

use thiserror::Error;

// ---------------------------------------------------------------------------
// Mapping errors
// ---------------------------------------------------------------------------

/// Errors from the record mapping subsystem.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MappingError {
    /// A field the response shape requires is absent on the domain record.
    ///
    /// The mapper performs no local recovery; the caller (ordinarily the
    /// service's global error handler) translates this into a failure
    /// response.
    #[error("patient record is missing required field '{0}'")]
    MissingField(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = MappingError::MissingField("date_of_birth");
        assert_eq!(
            err.to_string(),
            "patient record is missing required field 'date_of_birth'"
        );
    }
}
