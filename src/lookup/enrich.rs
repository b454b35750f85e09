//! PKD classification enrichment.

use tracing::debug;

use crate::core::LookupError;
use crate::registry::{RawReport, RegistryClient};

/// Fetch the PKD codes of the entity behind `report`.
///
/// The legal-form tag picks the detail report: legal entities and natural
/// persons are kept in separate reports. Exactly one detail query is made,
/// keyed by the same report the search returned. Codes keep registry order,
/// duplicates included.
///
/// # Errors
///
/// - [`LookupError::NoActiveReport`] if the report's activity has ended
/// - [`LookupError::UnsupportedEntityType`] for any tag other than "p"/"f"
/// - any failure of the detail query itself
pub fn fetch_pkd_codes<C: RegistryClient + ?Sized>(
    client: &mut C,
    report: &RawReport,
) -> Result<Vec<String>, LookupError> {
    if !report.is_active() {
        return Err(LookupError::NoActiveReport);
    }
    let report_type = report.legal_form()?.classification_report();
    debug!(regon = %report.regon, %report_type, "fetching PKD codes");

    let rows = client.fetch_detail_report(report, report_type)?;
    Ok(rows.into_iter().map(|row| row.code).collect())
}
