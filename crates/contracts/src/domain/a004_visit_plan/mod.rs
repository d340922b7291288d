pub mod plan;

pub use plan::{DailyVisitPlan, VISIT_DAYS};
