pub mod aggregate;
pub mod csv;
pub mod target_coverage;

pub use aggregate::{Product, ProductDto, ProductId};
pub use csv::parse_product_csv;
pub use target_coverage::TargetCoverage;
