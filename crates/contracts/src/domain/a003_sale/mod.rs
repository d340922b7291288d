pub mod record;

pub use record::{delete_pair, Sale};
