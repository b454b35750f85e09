//! In-memory registry over fixed data.
//!
//! Useful wherever a live session is unavailable or unwanted: tests, demos,
//! offline development.

use std::collections::HashMap;

use super::client::{ApiKey, RegistryClient, RegistryError};
use super::report::{ClassificationRow, RawReport, ReportType};

/// A [`RegistryClient`] answering from a fixed set of reports.
///
/// Reports are returned in insertion order. Classification rows are keyed
/// by the report's REGON and the requested report type.
#[derive(Debug, Clone, Default)]
pub struct StaticRegistry {
    api_key: String,
    logged_in: bool,
    session_expired: bool,
    empty_results: bool,
    detail_failure: Option<String>,
    entries: Vec<Entry>,
    classifications: HashMap<(String, ReportType), Vec<ClassificationRow>>,
    detail_requests: Vec<(String, ReportType)>,
}

#[derive(Debug, Clone)]
struct Entry {
    krs: Option<String>,
    report: RawReport,
}

impl StaticRegistry {
    /// Registry accepting only `api_key` at login.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    pub fn with_report(mut self, report: RawReport) -> Self {
        self.entries.push(Entry { krs: None, report });
        self
    }

    /// Add a report that can also be found by KRS number.
    pub fn with_krs_report(mut self, krs: impl Into<String>, report: RawReport) -> Self {
        self.entries.push(Entry {
            krs: Some(krs.into()),
            report,
        });
        self
    }

    /// Attach PKD codes for the entity with `regon`.
    pub fn with_classifications<I, S>(
        mut self,
        regon: impl Into<String>,
        report_type: ReportType,
        codes: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let rows = codes.into_iter().map(ClassificationRow::new).collect();
        self.classifications.insert((regon.into(), report_type), rows);
        self
    }

    /// Answer searches without hits with an empty list instead of
    /// [`RegistryError::NotFound`].
    pub fn empty_results(mut self) -> Self {
        self.empty_results = true;
        self
    }

    /// Make every detail report fail with a transport error.
    pub fn failing_detail_reports(mut self, message: impl Into<String>) -> Self {
        self.detail_failure = Some(message.into());
        self
    }

    /// Reject all further queries as if the session had timed out.
    pub fn expire_session(&mut self) {
        self.session_expired = true;
    }

    /// Detail reports requested so far, as `(regon, report type)`.
    pub fn detail_requests(&self) -> &[(String, ReportType)] {
        &self.detail_requests
    }

    fn ensure_session(&self) -> Result<(), RegistryError> {
        if !self.logged_in {
            return Err(RegistryError::Session("not logged in".into()));
        }
        if self.session_expired {
            return Err(RegistryError::Session("session expired".into()));
        }
        Ok(())
    }

    fn search(
        &self,
        matches: impl Fn(&Entry) -> bool,
    ) -> Result<Vec<RawReport>, RegistryError> {
        self.ensure_session()?;
        let hits: Vec<RawReport> = self
            .entries
            .iter()
            .filter(|e| matches(e))
            .map(|e| e.report.clone())
            .collect();
        if hits.is_empty() && !self.empty_results {
            return Err(RegistryError::NotFound);
        }
        Ok(hits)
    }
}

impl RegistryClient for StaticRegistry {
    fn login(&mut self, key: &ApiKey) -> Result<(), RegistryError> {
        if key.expose() != self.api_key {
            return Err(RegistryError::Session("invalid user key".into()));
        }
        self.logged_in = true;
        self.session_expired = false;
        Ok(())
    }

    fn query_by_tax(&mut self, nip: &str) -> Result<Vec<RawReport>, RegistryError> {
        self.search(|e| e.report.nip == nip)
    }

    fn query_by_register_number(&mut self, krs: &str) -> Result<Vec<RawReport>, RegistryError> {
        self.search(|e| e.krs.as_deref() == Some(krs))
    }

    fn query_by_statistical_number(
        &mut self,
        regon: &str,
    ) -> Result<Vec<RawReport>, RegistryError> {
        self.search(|e| e.report.regon == regon)
    }

    fn fetch_detail_report(
        &mut self,
        report: &RawReport,
        report_type: ReportType,
    ) -> Result<Vec<ClassificationRow>, RegistryError> {
        self.ensure_session()?;
        self.detail_requests.push((report.regon.clone(), report_type));
        if let Some(msg) = &self.detail_failure {
            return Err(RegistryError::Transport(msg.clone()));
        }
        Ok(self
            .classifications
            .get(&(report.regon.clone(), report_type))
            .cloned()
            .unwrap_or_default())
    }
}
