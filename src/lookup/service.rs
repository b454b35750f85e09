//! The lookup workflow: query, skip inactive, map or fall back.

use tracing::{debug, warn};

use super::mapper::map_report;
use crate::core::{CompanyData, CompanyIdentifier, IdentifierKind, LookupError};
use crate::registry::{ApiKey, RawReport, RegistryClient, RegistryError};
use crate::vat::{HOME_COUNTRY, VatIdError, resolve_vat_id};

/// Lookup settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupConfig {
    /// Country of the registry. Tax identifiers from other countries are
    /// rejected and mapped addresses carry this code.
    pub home_country: String,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            home_country: HOME_COUNTRY.to_string(),
        }
    }
}

impl LookupConfig {
    pub fn home_country(mut self, country: impl Into<String>) -> Self {
        self.home_country = country.into().trim().to_ascii_uppercase();
        self
    }
}

type QueryFn<C> = fn(&mut C, &str) -> Result<Vec<RawReport>, RegistryError>;

/// Company lookup against a logged-in registry session.
///
/// Each lookup makes at most two remote calls: the search and one detail
/// query for the first active hit. Nothing is cached between calls.
///
/// ```
/// use regon_lookup::lookup::CompanyLookup;
/// use regon_lookup::registry::{ApiKey, StaticRegistry};
///
/// let registry = StaticRegistry::new("key");
/// let mut lookup = CompanyLookup::connect(registry, &ApiKey::new("key").unwrap()).unwrap();
///
/// let company = lookup.lookup_by_statistical_number("000000000").unwrap();
/// assert!(!company.valid);
/// ```
#[derive(Debug)]
pub struct CompanyLookup<C: RegistryClient> {
    client: C,
    config: LookupConfig,
}

impl<C: RegistryClient> CompanyLookup<C> {
    /// Log in with the default configuration.
    ///
    /// # Errors
    ///
    /// [`LookupError::ServiceUnavailable`] if the registry rejects the key.
    pub fn connect(client: C, key: &ApiKey) -> Result<Self, LookupError> {
        Self::with_config(client, key, LookupConfig::default())
    }

    /// Log in with a custom configuration.
    ///
    /// The home country is normalized to upper case, however the config
    /// was built.
    pub fn with_config(
        mut client: C,
        key: &ApiKey,
        mut config: LookupConfig,
    ) -> Result<Self, LookupError> {
        config.home_country = config.home_country.trim().to_ascii_uppercase();
        client.login(key).map_err(|e| {
            warn!(error = %e, "registry login failed");
            LookupError::ServiceUnavailable(e.to_string())
        })?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &LookupConfig {
        &self.config
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn client_mut(&mut self) -> &mut C {
        &mut self.client
    }

    pub fn into_client(self) -> C {
        self.client
    }

    /// Look up a company by tax identifier (NIP).
    ///
    /// Accepts formatting noise and an optional country prefix. An unknown
    /// or inactive entity yields an invalid record carrying the bare NIP.
    ///
    /// # Errors
    ///
    /// - [`LookupError::Validation`] for a malformed or foreign identifier
    /// - [`LookupError::ServiceUnavailable`] if the session is rejected
    /// - any other registry failure
    pub fn lookup_by_tax(&mut self, vat_id: &str) -> Result<CompanyData, LookupError> {
        let home = self.config.home_country.as_str();
        let (country, number) = resolve_vat_id(vat_id, home)?;
        if country != home {
            return Err(VatIdError::foreign(vat_id, &country, home).into());
        }
        self.lookup(C::query_by_tax, IdentifierKind::Vat, &number, false)
    }

    /// Look up a company by KRS number.
    ///
    /// The registry's own report never carries the KRS, so a found record
    /// gets the searched number appended after NIP and REGON.
    pub fn lookup_by_register_number(&mut self, krs: &str) -> Result<CompanyData, LookupError> {
        self.lookup(
            C::query_by_register_number,
            IdentifierKind::NationalRegister,
            krs,
            true,
        )
    }

    /// Look up a company by REGON.
    pub fn lookup_by_statistical_number(
        &mut self,
        regon: &str,
    ) -> Result<CompanyData, LookupError> {
        self.lookup(
            C::query_by_statistical_number,
            IdentifierKind::StatisticalNumber,
            regon,
            false,
        )
    }

    fn lookup(
        &mut self,
        query: QueryFn<C>,
        kind: IdentifierKind,
        value: &str,
        append_searched: bool,
    ) -> Result<CompanyData, LookupError> {
        let searched = CompanyIdentifier::new(kind, value);
        debug!(%kind, value, "querying registry");

        let reports = match query(&mut self.client, value) {
            Ok(reports) => reports,
            Err(RegistryError::NotFound) => {
                debug!(%kind, value, "registry has no such entity");
                return Ok(CompanyData::not_found(searched));
            }
            Err(e) => {
                if let RegistryError::Session(msg) = &e {
                    warn!(%kind, value, error = %msg, "registry session rejected");
                }
                return Err(e.into());
            }
        };

        let Some(report) = reports.iter().find(|r| {
            let active = r.is_active();
            if !active {
                debug!(regon = %r.regon, "skipping inactive entity");
            }
            active
        }) else {
            debug!(%kind, value, candidates = reports.len(), "no active entity");
            return Ok(CompanyData::not_found(searched));
        };

        let mut data = map_report(&mut self.client, report, &self.config.home_country)?;
        if append_searched {
            data.identifiers.push(searched);
        }
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::StaticRegistry;
    use crate::vat::VatIdErrorKind;

    fn connect(registry: StaticRegistry) -> CompanyLookup<StaticRegistry> {
        CompanyLookup::connect(registry, &ApiKey::new("key").unwrap()).unwrap()
    }

    #[test]
    fn login_failure_is_service_unavailable() {
        let err = CompanyLookup::connect(StaticRegistry::new("key"), &ApiKey::new("bad").unwrap())
            .unwrap_err();
        assert!(matches!(err, LookupError::ServiceUnavailable(_)));
    }

    #[test]
    fn foreign_country_rejected() {
        let mut lookup = connect(StaticRegistry::new("key"));
        let err = lookup.lookup_by_tax("DE1234563218").unwrap_err();
        // DE has no validator, so it fails before the home-country check
        assert!(matches!(
            err,
            LookupError::Validation(ref e) if e.kind == VatIdErrorKind::UnsupportedCountry
        ));
    }

    #[test]
    fn home_country_mismatch() {
        let mut lookup = CompanyLookup::with_config(
            StaticRegistry::new("key"),
            &ApiKey::new("key").unwrap(),
            LookupConfig::default().home_country("cz"),
        )
        .unwrap();
        let err = lookup.lookup_by_tax("PL1234563218").unwrap_err();
        assert!(matches!(
            err,
            LookupError::Validation(ref e) if e.kind == VatIdErrorKind::ForeignCountry
        ));
    }

    #[test]
    fn lowercase_home_country_in_literal_config() {
        let config = LookupConfig {
            home_country: "pl".into(),
        };
        let key = ApiKey::new("key").unwrap();
        let mut lookup = CompanyLookup::with_config(StaticRegistry::new("key"), &key, config).unwrap();
        assert_eq!(lookup.config().home_country, "PL");
        let data = lookup.lookup_by_tax("1234563218").unwrap();
        assert_eq!(data, CompanyData::not_found(CompanyIdentifier::vat("1234563218")));
        let data = lookup.lookup_by_tax("pl1234563218").unwrap();
        assert!(!data.valid);
    }

    #[test]
    fn not_found_stub_uses_bare_number() {
        let mut lookup = connect(StaticRegistry::new("key"));
        let data = lookup.lookup_by_tax("PL 123-456-32-18").unwrap();
        assert_eq!(data, CompanyData::not_found(CompanyIdentifier::vat("1234563218")));
    }

    #[test]
    fn config_accessors() {
        let lookup = connect(StaticRegistry::new("key"));
        assert_eq!(lookup.config().home_country, "PL");
        assert!(lookup.client().detail_requests().is_empty());
    }
}
