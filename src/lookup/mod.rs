//! Company lookup by NIP, KRS or REGON.
//!
//! [`CompanyLookup`] runs the same template for all three identifiers:
//! query the registry, skip entities whose activity has ended, normalize the
//! first active hit with [`map_report`] and enrich it with PKD codes via
//! [`fetch_pkd_codes`]. An unknown or inactive entity is a normal outcome
//! and comes back as an invalid [`CompanyData`](crate::core::CompanyData).

mod enrich;
mod mapper;
mod service;

pub use enrich::fetch_pkd_codes;
pub use mapper::{map_address, map_report};
pub use service::{CompanyLookup, LookupConfig};
