//! Build etf_data.json from raw market quotes
//!
//! Quotes arrive as USD prices and fractional yields (0.034 for 3.4%). The
//! published document carries KRW prices and percentage yields.

use std::fs::{self, File};
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use chrono::NaiveDate;
use csv::Reader;
use serde::Deserialize;

use super::data::{EtfDocument, EtfRecord};
use crate::error::DataError;

/// KRW per USD used when no rate is supplied
pub const DEFAULT_EXCHANGE_RATE: f64 = 1450.0;

/// One row of the quotes CSV
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawQuote {
    pub ticker: String,
    pub name: String,
    pub risk: String,
    pub sector: String,
    pub price_usd: f64,
    /// Fractional trailing yield; missing when the provider has none
    pub dividend_yield: Option<f64>,
}

impl RawQuote {
    /// Convert to a published record; `None` when the converted price is unusable
    pub fn to_record(&self, exchange_rate: f64) -> Option<EtfRecord> {
        let price = (self.price_usd * exchange_rate).trunc();
        if !(price.is_finite() && price > 0.0) {
            return None;
        }
        let fraction = self.dividend_yield.filter(|y| y.is_finite()).unwrap_or(0.0);
        let yield_pct = (fraction * 100.0 * 100.0).round() / 100.0;

        Some(EtfRecord::new(
            self.ticker.clone(),
            self.name.clone(),
            price,
            yield_pct.max(0.0),
            self.risk.clone(),
            self.sector.clone(),
        ))
    }
}

pub fn read_quotes<R: Read>(reader: R) -> Result<Vec<RawQuote>, DataError> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut quotes = Vec::new();

    for result in csv_reader.deserialize() {
        let quote: RawQuote = result?;
        quotes.push(quote);
    }

    Ok(quotes)
}

pub fn read_quotes_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<RawQuote>, DataError> {
    read_quotes(File::open(path)?)
}

/// Convert every usable quote, skipping the rest with a warning
pub fn build_document(quotes: &[RawQuote], exchange_rate: f64, updated_at: NaiveDate) -> EtfDocument {
    let mut etfs = Vec::with_capacity(quotes.len());

    for quote in quotes {
        match quote.to_record(exchange_rate) {
            Some(record) => etfs.push(record),
            None => log::warn!(
                "Skipping {}: no usable price (price_usd={})",
                quote.ticker,
                quote.price_usd
            ),
        }
    }

    log::info!("Built ETF document with {} of {} quotes", etfs.len(), quotes.len());
    EtfDocument { updated_at, etfs }
}

/// Write the document as pretty JSON, creating the parent directory if needed
pub fn write_document<P: AsRef<Path>>(document: &EtfDocument, path: P) -> Result<(), DataError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, document)?;
    writer.write_all(b"\n")?;
    writer.flush()?;

    log::info!("Wrote {} records to {}", document.etfs.len(), path.display());
    Ok(())
}
