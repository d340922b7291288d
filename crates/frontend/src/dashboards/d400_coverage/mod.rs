pub mod notifiers;
pub mod ui;
