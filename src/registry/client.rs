//! Interface to the remote registry session.

use std::fmt;

use thiserror::Error;

use super::report::{ClassificationRow, RawReport, ReportType};
use crate::core::LookupError;

/// Public key of the registry's test environment.
pub const SANDBOX_API_KEY: &str = "abcde12345abcde12345";

/// Error reported by a [`RegistryClient`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum RegistryError {
    /// The registry has no entity for the given key.
    #[error("no entity found")]
    NotFound,

    /// The session was rejected (invalid key, expired session).
    #[error("session error: {0}")]
    Session(String),

    /// Network, protocol or decoding failure.
    #[error("transport error: {0}")]
    Transport(String),
}

/// A live session with the company registry.
///
/// Implementations own the transport and the session handshake. Queries
/// return the raw search hits in registry order; an unknown entity may be
/// reported either as [`RegistryError::NotFound`] or as an empty list.
pub trait RegistryClient {
    /// Open a session. Called once, before any query.
    fn login(&mut self, key: &ApiKey) -> Result<(), RegistryError>;

    /// Search by NIP (10 digits, no prefix).
    fn query_by_tax(&mut self, nip: &str) -> Result<Vec<RawReport>, RegistryError>;

    /// Search by KRS number.
    fn query_by_register_number(&mut self, krs: &str) -> Result<Vec<RawReport>, RegistryError>;

    /// Search by REGON.
    fn query_by_statistical_number(&mut self, regon: &str)
    -> Result<Vec<RawReport>, RegistryError>;

    /// Fetch a detail report for an entity returned by one of the searches.
    fn fetch_detail_report(
        &mut self,
        report: &RawReport,
        report_type: ReportType,
    ) -> Result<Vec<ClassificationRow>, RegistryError>;
}

/// Registry user key.
///
/// Never empty. The value is kept out of `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a key, rejecting an empty one.
    pub fn new(key: impl Into<String>) -> Result<Self, LookupError> {
        let key = key.into().trim().to_string();
        if key.is_empty() {
            return Err(LookupError::ServiceUnavailable("missing API key".into()));
        }
        Ok(Self(key))
    }

    /// Read the key from an environment variable.
    pub fn from_env(var: &str) -> Result<Self, LookupError> {
        let key = std::env::var(var).map_err(|e| {
            LookupError::ServiceUnavailable(format!("API key variable {var}: {e}"))
        })?;
        Self::new(key)
    }

    /// Key for the registry's public test environment.
    pub fn sandbox() -> Self {
        Self(SANDBOX_API_KEY.to_string())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}
