//! Raw report to [`CompanyData`] normalization.

use super::enrich::fetch_pkd_codes;
use crate::core::{CompanyAddress, CompanyData, CompanyIdentifier, LookupError};
use crate::registry::{RawReport, RegistryClient};

/// Build the seat address of a report.
///
/// The address line is street and property number, followed by
/// `/apartment` when the report has one. Missing parts leave no stray
/// whitespace.
pub fn map_address(report: &RawReport, country: &str) -> CompanyAddress {
    let mut address = format!("{} {}", report.street, report.property_number)
        .trim()
        .to_string();
    if let Some(apartment) = report.apartment() {
        address.push('/');
        address.push_str(apartment);
    }

    CompanyAddress {
        country: country.to_string(),
        postal_code: report.postal_code.clone(),
        address,
        city: report.city.clone(),
    }
}

/// Normalize an active report into a valid [`CompanyData`].
///
/// Identifiers are NIP then REGON, as reported. PKD codes come from one
/// detail query for the same report.
pub fn map_report<C: RegistryClient + ?Sized>(
    client: &mut C,
    report: &RawReport,
    country: &str,
) -> Result<CompanyData, LookupError> {
    let pkd_codes = fetch_pkd_codes(client, report)?;

    Ok(CompanyData {
        valid: true,
        name: report.name.clone(),
        identifiers: vec![
            CompanyIdentifier::vat(report.nip.as_str()),
            CompanyIdentifier::regon(report.regon.as_str()),
        ],
        main_address: Some(map_address(report, country)),
        pkd_codes,
    })
}
