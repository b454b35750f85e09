//! # regon-lookup
//!
//! Company lookup against the Polish GUS REGON registry (BIR).
//!
//! A company can be searched by NIP (tax number), KRS (court register
//! number) or REGON (statistical number). Whatever the registry returns is
//! normalized into a single [`CompanyData`] record, enriched with the
//! entity's PKD activity classification codes.
//!
//! The SOAP transport and session handshake are not part of this crate;
//! they sit behind the [`registry::RegistryClient`] trait.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use regon_lookup::lookup::CompanyLookup;
//! use regon_lookup::registry::{ApiKey, RawReport, ReportType, StaticRegistry};
//!
//! let report = RawReport::new("987654321", "1234563218", "ACME SP Z O O")
//!     .entity_type("p")
//!     .city("Warszawa")
//!     .street("Długa")
//!     .property_number("10");
//!
//! let registry = StaticRegistry::new("secret-key")
//!     .with_report(report)
//!     .with_classifications("987654321", ReportType::LegalEntityActivity, ["62.01.Z"]);
//!
//! let key = ApiKey::new("secret-key").unwrap();
//! let mut lookup = CompanyLookup::connect(registry, &key).unwrap();
//!
//! let company = lookup.lookup_by_tax("PL 123-456-32-18").unwrap();
//! assert!(company.valid);
//! assert_eq!(company.main_address.unwrap().address, "Długa 10");
//! assert_eq!(company.pkd_codes, vec!["62.01.Z"]);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`core`] | Company record types and the error taxonomy |
//! | [`vat`] | NIP parsing and checksum validation |
//! | [`registry`] | Registry client interface, raw reports, in-memory client |
//! | [`lookup`] | Lookup workflow: query, filter, map, enrich |

pub mod core;
pub mod lookup;
pub mod registry;
pub mod vat;

// Re-export core types at crate root for convenience
pub use crate::core::*;
