//! d400: coverage dashboard computations.
//!
//! The engine turns the three flat collections (stores, products, sales)
//! into the completion metrics every dashboard surface renders. All
//! functions are pure projections: no caching, no side effects.

pub mod dto;
pub mod engine;

pub use dto::{
    ProductCoverage, StoreProgress, StoreProgressFilter, TargetsMet, Trend, WeekStats, WeeklyStats,
};
pub use engine::{
    product_coverage, required_count, store_progress, targets_met, week_bounds, weekly_stats,
};
