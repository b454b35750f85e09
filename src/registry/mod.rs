//! Company registry interface.
//!
//! [`RegistryClient`] is the narrow seam between the lookup workflow and the
//! remote service: it searches by NIP, KRS or REGON and fetches detail
//! reports. [`StaticRegistry`] implements it over fixed data.

mod client;
mod fixture;
mod report;

pub use client::{ApiKey, RegistryClient, RegistryError, SANDBOX_API_KEY};
pub use fixture::StaticRegistry;
pub use report::{ClassificationRow, LegalForm, RawReport, ReportType};
