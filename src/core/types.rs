use serde::{Deserialize, Serialize};

/// Kind of company identifier known to the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdentifierKind {
    /// NIP — tax identification number.
    #[serde(rename = "vat")]
    Vat,
    /// KRS — National Court Register number.
    #[serde(rename = "krs")]
    NationalRegister,
    /// REGON — statistical number.
    #[serde(rename = "regon")]
    StatisticalNumber,
}

impl IdentifierKind {
    /// Short name used in serialized records ("vat", "krs", "regon").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vat => "vat",
            Self::NationalRegister => "krs",
            Self::StatisticalNumber => "regon",
        }
    }
}

impl std::fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single identifier attached to a company record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompanyIdentifier {
    pub kind: IdentifierKind,
    pub value: String,
}

impl CompanyIdentifier {
    pub fn new(kind: IdentifierKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    pub fn vat(value: impl Into<String>) -> Self {
        Self::new(IdentifierKind::Vat, value)
    }

    pub fn krs(value: impl Into<String>) -> Self {
        Self::new(IdentifierKind::NationalRegister, value)
    }

    pub fn regon(value: impl Into<String>) -> Self {
        Self::new(IdentifierKind::StatisticalNumber, value)
    }
}

/// Registered seat address of a company.
///
/// Fields the registry leaves out stay empty, never missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyAddress {
    /// ISO 3166-1 alpha-2 country code.
    pub country: String,
    pub postal_code: String,
    /// Street, property number and optional unit ("Długa 10/4").
    pub address: String,
    pub city: String,
}

/// Normalized result of a company lookup.
///
/// An invalid record (`valid == false`) only carries the identifier that was
/// searched for. A valid one carries name, address, identifiers reported by
/// the registry and PKD codes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyData {
    pub valid: bool,
    pub name: String,
    pub identifiers: Vec<CompanyIdentifier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_address: Option<CompanyAddress>,
    /// PKD activity classification codes, in registry order.
    #[serde(default)]
    pub pkd_codes: Vec<String>,
}

impl CompanyData {
    /// Invalid record for an entity the registry does not know, or only
    /// knows as inactive.
    pub fn not_found(searched: CompanyIdentifier) -> Self {
        Self {
            valid: false,
            name: String::new(),
            identifiers: vec![searched],
            main_address: None,
            pkd_codes: Vec::new(),
        }
    }

    /// First identifier of the given kind, if any.
    pub fn identifier(&self, kind: IdentifierKind) -> Option<&str> {
        self.identifiers
            .iter()
            .find(|id| id.kind == kind)
            .map(|id| id.value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_carries_only_searched_identifier() {
        let data = CompanyData::not_found(CompanyIdentifier::krs("0000123456"));
        assert!(!data.valid);
        assert_eq!(data.identifiers, vec![CompanyIdentifier::krs("0000123456")]);
        assert!(data.main_address.is_none());
        assert!(data.pkd_codes.is_empty());
        assert!(data.name.is_empty());
    }

    #[test]
    fn identifier_lookup_by_kind() {
        let data = CompanyData {
            valid: true,
            identifiers: vec![
                CompanyIdentifier::vat("1234563218"),
                CompanyIdentifier::regon("987654321"),
            ],
            ..Default::default()
        };
        assert_eq!(data.identifier(IdentifierKind::Vat), Some("1234563218"));
        assert_eq!(
            data.identifier(IdentifierKind::StatisticalNumber),
            Some("987654321")
        );
        assert_eq!(data.identifier(IdentifierKind::NationalRegister), None);
    }

    #[test]
    fn kind_short_names() {
        assert_eq!(IdentifierKind::Vat.as_str(), "vat");
        assert_eq!(IdentifierKind::NationalRegister.to_string(), "krs");
        assert_eq!(IdentifierKind::StatisticalNumber.as_str(), "regon");
    }
}
