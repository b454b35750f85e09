//! Core company record types and errors.
//!
//! Every lookup, whether it found a company or not, ends in a
//! [`CompanyData`] record; failures that are not business outcomes are
//! reported as [`LookupError`].

mod error;
mod types;

pub use error::*;
pub use types::*;
