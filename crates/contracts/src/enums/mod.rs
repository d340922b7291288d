pub mod product_type;
pub mod store_level;

pub use product_type::ProductType;
pub use store_level::StoreLevel;
