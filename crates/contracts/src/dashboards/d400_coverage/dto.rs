use serde::{Deserialize, Serialize};

/// Coverage result for a single product.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCoverage {
    /// Distinct registered stores with at least one sale for the product.
    pub achieved: u32,
    /// Total required store count over all targeted levels.
    pub target: u32,
}

impl ProductCoverage {
    /// Raw completion percentage for the numeric label. May exceed 100 when
    /// over-achieved; 0 when no enforceable target exists.
    pub fn display_percent(&self) -> f64 {
        if self.target == 0 {
            0.0
        } else {
            self.achieved as f64 / self.target as f64 * 100.0
        }
    }

    /// Percentage capped at 100, for bounded visuals (ring gauge arc).
    pub fn gauge_percent(&self) -> f64 {
        self.display_percent().min(100.0)
    }

    /// Whether the product has an enforceable goal at all.
    ///
    /// `target == 0` means "not applicable", never "100% complete".
    pub fn has_target(&self) -> bool {
        self.target > 0
    }

    pub fn is_met(&self) -> bool {
        self.has_target() && self.achieved >= self.target
    }
}

/// Count of fully-met products, partitioned by product type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetsMet {
    pub drive_met: u32,
    pub focus_met: u32,
}

/// Aggregates for one Monday-through-Sunday window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekStats {
    /// Distinct stores with at least one sale in the window (any product).
    pub visited_stores: u32,
    /// Sale records (not distinct stores) for Drive products in the window.
    pub drive_achieved: u32,
    /// Sale records for Focus products in the window.
    pub focus_achieved: u32,
}

/// Current and previous week, same weekday alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyStats {
    pub this_week: WeekStats,
    pub last_week: WeekStats,
}

impl WeeklyStats {
    pub fn visited_delta(&self) -> i64 {
        self.this_week.visited_stores as i64 - self.last_week.visited_stores as i64
    }

    pub fn drive_delta(&self) -> i64 {
        self.this_week.drive_achieved as i64 - self.last_week.drive_achieved as i64
    }

    pub fn focus_delta(&self) -> i64 {
        self.this_week.focus_achieved as i64 - self.last_week.focus_achieved as i64
    }
}

/// Week-over-week direction for the dashboard arrows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    pub fn from_delta(delta: i64) -> Self {
        match delta.cmp(&0) {
            std::cmp::Ordering::Greater => Trend::Up,
            std::cmp::Ordering::Less => Trend::Down,
            std::cmp::Ordering::Equal => Trend::Flat,
        }
    }
}

/// Per-store checklist progress across the active catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreProgress {
    pub drive_achieved: u32,
    pub drive_total: u32,
    pub focus_achieved: u32,
    pub focus_total: u32,
}

impl StoreProgress {
    /// Under 50% on a side that actually has products.
    pub fn needs_attention(&self) -> bool {
        let below_half = |achieved: u32, total: u32| {
            total > 0 && (achieved as f64 / total as f64) < 0.5
        };
        below_half(self.drive_achieved, self.drive_total)
            || below_half(self.focus_achieved, self.focus_total)
    }

    pub fn is_completed(&self) -> bool {
        self.drive_achieved == self.drive_total && self.focus_achieved == self.focus_total
    }
}

/// Dashboard progress-status filter over store cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreProgressFilter {
    #[default]
    All,
    NeedsAttention,
    Completed,
}

impl StoreProgressFilter {
    pub fn matches(&self, progress: &StoreProgress) -> bool {
        match self {
            StoreProgressFilter::All => true,
            StoreProgressFilter::NeedsAttention => progress.needs_attention(),
            StoreProgressFilter::Completed => progress.is_completed(),
        }
    }
}
