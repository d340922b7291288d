pub mod common;

pub mod a001_store;
pub mod a002_product;
pub mod a003_sale;
pub mod a004_visit_plan;
pub mod a005_settings;
