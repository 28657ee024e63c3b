//! ETF reference data: records, catalog selection, loading and data building

mod data;
pub mod loader;
pub mod quotes;

pub use data::{EtfCatalog, EtfDocument, EtfRecord};
pub use loader::{
    fallback_catalog, load_catalog, load_catalog_csv, load_catalog_from_reader, load_or_fallback,
    DEFAULT_DATA_PATH,
};
pub use quotes::{build_document, read_quotes_from_path, write_document, RawQuote, DEFAULT_EXCHANGE_RATE};
