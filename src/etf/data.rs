//! ETF reference data structures matching the published etf_data.json format

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CalcError, DataError};

/// A single dividend-paying ETF (or stock) as shown to the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EtfRecord {
    /// Unique short code, e.g. "SCHD"
    pub ticker: String,

    /// Display name
    pub name: String,

    /// Current unit price in KRW
    pub price: f64,

    /// Annual dividend yield in percent (3.4 means 3.4%)
    #[serde(rename = "yield")]
    pub yield_pct: f64,

    /// Risk category label
    pub risk: String,

    /// Sector label
    pub sector: String,
}

impl EtfRecord {
    pub fn new(
        ticker: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        yield_pct: f64,
        risk: impl Into<String>,
        sector: impl Into<String>,
    ) -> Self {
        Self {
            ticker: ticker.into(),
            name: name.into(),
            price,
            yield_pct,
            risk: risk.into(),
            sector: sector.into(),
        }
    }

    /// Check the price and yield invariants
    pub fn validate(&self) -> Result<(), DataError> {
        if self.ticker.trim().is_empty() {
            return Err(DataError::InvalidRecord("empty ticker".into()));
        }
        if !(self.price.is_finite() && self.price > 0.0) {
            return Err(DataError::InvalidRecord(format!(
                "{}: price must be positive, got {}",
                self.ticker, self.price
            )));
        }
        if !(self.yield_pct.is_finite() && self.yield_pct >= 0.0) {
            return Err(DataError::InvalidRecord(format!(
                "{}: yield must be non-negative, got {}",
                self.ticker, self.yield_pct
            )));
        }
        Ok(())
    }
}

/// The static document the front end fetches
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EtfDocument {
    pub updated_at: NaiveDate,
    pub etfs: Vec<EtfRecord>,
}

/// Validated, ordered set of ETF records for a session
#[derive(Debug, Clone, PartialEq)]
pub struct EtfCatalog {
    updated_at: Option<NaiveDate>,
    records: Vec<EtfRecord>,
}

impl EtfCatalog {
    /// Build a catalog, checking every record and ticker uniqueness
    pub fn new(updated_at: Option<NaiveDate>, records: Vec<EtfRecord>) -> Result<Self, DataError> {
        for (idx, record) in records.iter().enumerate() {
            record.validate()?;
            let duplicate = records[..idx]
                .iter()
                .any(|other| other.ticker.eq_ignore_ascii_case(&record.ticker));
            if duplicate {
                return Err(DataError::InvalidRecord(format!(
                    "duplicate ticker {}",
                    record.ticker
                )));
            }
        }
        Ok(Self { updated_at, records })
    }

    pub fn from_document(document: EtfDocument) -> Result<Self, DataError> {
        Self::new(Some(document.updated_at), document.etfs)
    }

    pub fn empty() -> Self {
        Self {
            updated_at: None,
            records: Vec::new(),
        }
    }

    pub fn updated_at(&self) -> Option<NaiveDate> {
        self.updated_at
    }

    pub fn records(&self) -> &[EtfRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Case-insensitive ticker lookup
    pub fn find(&self, ticker: &str) -> Option<&EtfRecord> {
        self.records
            .iter()
            .find(|r| r.ticker.eq_ignore_ascii_case(ticker.trim()))
    }

    /// Resolve the "current ETF"
    ///
    /// With no ticker the first record is current. An empty catalog or an
    /// unknown ticker is an error, never a placeholder record.
    pub fn select(&self, ticker: Option<&str>) -> Result<&EtfRecord, CalcError> {
        match ticker {
            Some(t) => self
                .find(t)
                .ok_or_else(|| CalcError::NoReferenceData(format!("ticker {} not in catalog", t))),
            None => self
                .records
                .first()
                .ok_or_else(|| CalcError::NoReferenceData("empty ETF catalog".into())),
        }
    }

    pub fn to_document(&self, fallback_date: NaiveDate) -> EtfDocument {
        EtfDocument {
            updated_at: self.updated_at.unwrap_or(fallback_date),
            etfs: self.records.clone(),
        }
    }
}
