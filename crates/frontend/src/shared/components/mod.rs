pub mod modal;
pub mod progress_bar;
pub mod progress_ring;
pub mod stat_card;

pub use modal::Modal;
pub use progress_bar::ProgressBar;
pub use progress_ring::ProgressRing;
pub use stat_card::StatCard;
