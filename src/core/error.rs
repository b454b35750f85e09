use thiserror::Error;

use crate::registry::RegistryError;
use crate::vat::VatIdError;

/// Errors that can occur during a company lookup.
///
/// "Not found" and "found but inactive" are not errors: both come back as
/// an invalid [`CompanyData`](super::CompanyData).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LookupError {
    /// The searched identifier is malformed or fails its checksum.
    #[error("validation failed: {0}")]
    Validation(#[from] VatIdError),

    /// Session with the registry could not be established or was rejected.
    #[error("checking status currently not available: {0}")]
    ServiceUnavailable(String),

    /// Enrichment was requested for a report with a closed activity.
    #[error("no active report, look up the company first")]
    NoActiveReport,

    /// The report's legal-form tag has no classification report.
    #[error("unsupported entity type '{0}'")]
    UnsupportedEntityType(String),

    /// A remote call failed for a reason other than "not found".
    #[error("registry error: {0}")]
    Registry(RegistryError),
}

impl From<RegistryError> for LookupError {
    fn from(e: RegistryError) -> Self {
        match e {
            RegistryError::Session(msg) => Self::ServiceUnavailable(msg),
            other => Self::Registry(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_error_becomes_service_unavailable() {
        let e = LookupError::from(RegistryError::Session("invalid user key".into()));
        assert!(matches!(e, LookupError::ServiceUnavailable(ref m) if m == "invalid user key"));
        assert!(e.to_string().contains("currently not available"));
    }

    #[test]
    fn transport_error_stays_registry_error() {
        let e = LookupError::from(RegistryError::Transport("connection reset".into()));
        assert!(matches!(e, LookupError::Registry(RegistryError::Transport(_))));
        assert!(e.to_string().contains("connection reset"));
    }

    #[test]
    fn unsupported_entity_display() {
        let e = LookupError::UnsupportedEntityType("lp".into());
        assert_eq!(e.to_string(), "unsupported entity type 'lp'");
    }
}
