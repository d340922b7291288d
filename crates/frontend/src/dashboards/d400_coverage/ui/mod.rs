pub mod dashboard;
pub mod performance_panel;
pub mod store_card;
pub mod targets_panel;
pub mod visit_panel;
