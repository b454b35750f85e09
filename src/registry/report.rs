//! Raw registry reports and the report types derived from them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::LookupError;

/// One search hit as returned by the registry, before normalization.
///
/// Fields the registry leaves out are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawReport {
    /// REGON (statistical number).
    pub regon: String,
    /// NIP (tax number), digits only.
    pub nip: String,
    pub name: String,
    pub city: String,
    pub postal_code: String,
    pub street: String,
    pub property_number: String,
    pub apartment_number: Option<String>,
    /// Legal-form tag: "p" for a legal entity, "f" for a natural person.
    pub entity_type: String,
    /// Set once the entity has ceased its activity.
    pub activity_end_date: Option<NaiveDate>,
}

impl RawReport {
    pub fn new(regon: impl Into<String>, nip: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            regon: regon.into(),
            nip: nip.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn entity_type(mut self, tag: impl Into<String>) -> Self {
        self.entity_type = tag.into();
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    pub fn postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.postal_code = postal_code.into();
        self
    }

    pub fn street(mut self, street: impl Into<String>) -> Self {
        self.street = street.into();
        self
    }

    pub fn property_number(mut self, number: impl Into<String>) -> Self {
        self.property_number = number.into();
        self
    }

    pub fn apartment_number(mut self, number: impl Into<String>) -> Self {
        self.apartment_number = Some(number.into());
        self
    }

    pub fn activity_end_date(mut self, date: NaiveDate) -> Self {
        self.activity_end_date = Some(date);
        self
    }

    /// True while the entity has no activity end date.
    pub fn is_active(&self) -> bool {
        self.activity_end_date.is_none()
    }

    /// Apartment number, treating an empty value as absent.
    pub fn apartment(&self) -> Option<&str> {
        self.apartment_number
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty())
    }

    /// Parse the legal-form tag.
    pub fn legal_form(&self) -> Result<LegalForm, LookupError> {
        LegalForm::from_tag(&self.entity_type)
    }
}

/// Legal form of a registered entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LegalForm {
    /// Osoba prawna.
    LegalEntity,
    /// Osoba fizyczna prowadząca działalność.
    NaturalPerson,
}

impl LegalForm {
    /// Parse the registry's one-letter tag, exactly "p" or "f".
    ///
    /// Local-unit tags ("lp", "lf"), other casings and padded values are
    /// rejected.
    pub fn from_tag(tag: &str) -> Result<Self, LookupError> {
        match tag {
            "p" => Ok(Self::LegalEntity),
            "f" => Ok(Self::NaturalPerson),
            other => Err(LookupError::UnsupportedEntityType(other.to_string())),
        }
    }

    /// Secondary report listing the entity's PKD codes.
    pub fn classification_report(&self) -> ReportType {
        match self {
            Self::LegalEntity => ReportType::LegalEntityActivity,
            Self::NaturalPerson => ReportType::NaturalPersonActivity,
        }
    }
}

/// Detail report types requested from the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportType {
    /// Public PKD activity report for legal entities.
    LegalEntityActivity,
    /// Public PKD activity report for natural persons.
    NaturalPersonActivity,
}

impl ReportType {
    /// Report name as the registry expects it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LegalEntityActivity => "BIR11OsPrawnaPkd",
            Self::NaturalPersonActivity => "BIR11OsFizycznaPkd",
        }
    }
}

impl std::fmt::Display for ReportType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of a PKD detail report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationRow {
    /// PKD code, e.g. "62.01.Z".
    pub code: String,
}

impl ClassificationRow {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legal_form_tags() {
        assert_eq!(LegalForm::from_tag("p").unwrap(), LegalForm::LegalEntity);
        assert_eq!(LegalForm::from_tag("f").unwrap(), LegalForm::NaturalPerson);
    }

    #[test]
    fn other_casings_and_padding_rejected() {
        for tag in ["P", "F", " f ", "p "] {
            assert!(
                matches!(
                    LegalForm::from_tag(tag),
                    Err(LookupError::UnsupportedEntityType(ref t)) if t == tag
                ),
                "{tag:?} should be rejected"
            );
        }
    }

    #[test]
    fn local_unit_tags_rejected() {
        for tag in ["lp", "lf", "", "x"] {
            assert!(matches!(
                LegalForm::from_tag(tag),
                Err(LookupError::UnsupportedEntityType(_))
            ));
        }
    }

    #[test]
    fn classification_report_routing() {
        assert_eq!(
            LegalForm::LegalEntity.classification_report(),
            ReportType::LegalEntityActivity
        );
        assert_eq!(
            LegalForm::NaturalPerson.classification_report(),
            ReportType::NaturalPersonActivity
        );
        assert_eq!(ReportType::LegalEntityActivity.as_str(), "BIR11OsPrawnaPkd");
        assert_eq!(ReportType::NaturalPersonActivity.to_string(), "BIR11OsFizycznaPkd");
    }

    #[test]
    fn empty_apartment_is_absent() {
        let report = RawReport::new("1", "2", "X").apartment_number("  ");
        assert_eq!(report.apartment(), None);
        let report = RawReport::new("1", "2", "X").apartment_number("4");
        assert_eq!(report.apartment(), Some("4"));
    }

    #[test]
    fn activity_end_date_marks_inactive() {
        let report = RawReport::new("1", "2", "X");
        assert!(report.is_active());
        let closed = report.activity_end_date(NaiveDate::from_ymd_opt(2020, 3, 31).unwrap());
        assert!(!closed.is_active());
    }
}
