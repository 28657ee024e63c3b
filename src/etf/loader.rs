//! Load the ETF catalog from etf_data.json (or CSV), with a hardcoded fallback

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use chrono::NaiveDate;
use csv::Reader;

use super::data::{EtfCatalog, EtfDocument, EtfRecord};
use crate::error::DataError;

/// Default location of the published data document
pub const DEFAULT_DATA_PATH: &str = "data/etf_data.json";

/// Load and validate a catalog from a JSON document on disk
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<EtfCatalog, DataError> {
    let file = File::open(path.as_ref())?;
    let catalog = load_catalog_from_reader(BufReader::new(file))?;
    log::info!(
        "Loaded {} ETF records from {} (updated {:?})",
        catalog.len(),
        path.as_ref().display(),
        catalog.updated_at()
    );
    Ok(catalog)
}

/// Load a catalog from any reader producing the JSON document
pub fn load_catalog_from_reader<R: Read>(reader: R) -> Result<EtfCatalog, DataError> {
    let document: EtfDocument = serde_json::from_reader(reader)?;
    EtfCatalog::from_document(document)
}

/// Load a catalog from a CSV file with ticker,name,price,yield,risk,sector columns
pub fn load_catalog_csv<P: AsRef<Path>>(path: P) -> Result<EtfCatalog, DataError> {
    let mut reader = Reader::from_path(path)?;
    let mut records = Vec::new();

    for result in reader.deserialize() {
        let record: EtfRecord = result?;
        records.push(record);
    }

    EtfCatalog::new(None, records)
}

/// Load the document, falling back to the built-in list on any failure
pub fn load_or_fallback<P: AsRef<Path>>(path: P) -> EtfCatalog {
    match load_catalog(path.as_ref()) {
        Ok(catalog) => catalog,
        Err(err) => {
            log::warn!(
                "Failed to load {} ({}), using fallback ETF list",
                path.as_ref().display(),
                err
            );
            fallback_catalog()
        }
    }
}

/// Date stamped on the built-in list
pub fn fallback_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 20).unwrap_or_default()
}

/// Built-in list used when the data document is unavailable
pub fn fallback_records() -> Vec<EtfRecord> {
    vec![
        EtfRecord::new("SCHD", "Schwab US Dividend Equity", 105000.0, 3.4, "Medium", "Dividend growth"),
        EtfRecord::new("JEPI", "JPMorgan Equity Premium", 75000.0, 7.5, "Medium", "Covered call"),
        EtfRecord::new("TQQQ", "ProShares UltraPro QQQ", 80000.0, 0.8, "High", "Leveraged tech"),
    ]
}

pub fn fallback_catalog() -> EtfCatalog {
    EtfCatalog::new(Some(fallback_date()), fallback_records())
        .unwrap_or_else(|_| EtfCatalog::empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn sample_path(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("data").join(name)
    }

    #[test]
    fn test_load_sample_document() {
        let catalog = load_catalog(sample_path("etf_data.json")).expect("sample document");
        assert_eq!(catalog.len(), 10);
        assert_eq!(catalog.records()[0].ticker, "SCHD");
        assert_eq!(catalog.updated_at(), NaiveDate::from_ymd_opt(2025, 1, 6));
        assert!(catalog.find("TLT").is_some());
    }

    #[test]
    fn test_load_csv_catalog() {
        let catalog = load_catalog_csv(sample_path("etf_catalog.csv")).expect("sample csv");
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.records()[1].ticker, "JEPI");
        assert_eq!(catalog.records()[1].yield_pct, 7.5);
        assert!(catalog.updated_at().is_none());
    }

    #[test]
    fn test_missing_file_uses_fallback() {
        let catalog = load_or_fallback(sample_path("does_not_exist.json"));
        assert_eq!(catalog, fallback_catalog());
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.updated_at(), Some(fallback_date()));
    }

    #[test]
    fn test_malformed_document_is_error() {
        let result = load_catalog_from_reader("{\"etfs\": []}".as_bytes());
        assert!(matches!(result, Err(DataError::Json(_))));
    }

    #[test]
    fn test_empty_document_loads_as_empty_catalog() {
        let raw = r#"{"updated_at": "2024-05-20", "etfs": []}"#;
        let catalog = load_catalog_from_reader(raw.as_bytes()).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_invalid_record_is_rejected() {
        let raw = r#"{"updated_at": "2024-05-20", "etfs": [
            {"ticker": "TSLA", "name": "Tesla Inc", "price": 0, "yield": 0, "risk": "High", "sector": "EV"}
        ]}"#;
        let result = load_catalog_from_reader(raw.as_bytes());
        assert!(matches!(result, Err(DataError::InvalidRecord(_))));
    }
}
