pub mod aggregate;
pub mod csv;

pub use aggregate::{Store, StoreDto, StoreId};
pub use csv::{parse_store_csv, CsvImportResult, CsvStoreRow};
