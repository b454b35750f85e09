//! Tax identifier (NIP) validation.
//!
//! Turns whatever the user typed into a clean `(country, number)` pair and
//! checks the number against its country's checksum rule.
//!
//! # Example
//!
//! ```
//! use regon_lookup::vat::*;
//!
//! let (country, number) = resolve_vat_id("PL 123-456-32-18", HOME_COUNTRY).unwrap();
//! assert_eq!(country, "PL");
//! assert_eq!(number, "1234563218");
//!
//! assert!(validate_nip("1234563219").is_err());
//! ```

mod countries;
mod nip;

pub use countries::is_known_vat_prefix;
pub use nip::{HOME_COUNTRY, VatIdError, VatIdErrorKind, resolve_vat_id, validate_nip};
