use crate::enums::StoreLevel;
use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Pure per-user configuration: discount table + campaign deadline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Discount percentage per store level (≥ 0), applied to base prices.
    pub discounts: BTreeMap<StoreLevel, f64>,

    /// Drive campaign deadline (inclusive).
    pub deadline: NaiveDate,
}

impl Settings {
    pub fn discount_for(&self, level: StoreLevel) -> f64 {
        self.discounts.get(&level).copied().unwrap_or(0.0)
    }

    /// Price after the level discount is applied.
    pub fn discounted_price(&self, base_price: f64, level: StoreLevel) -> f64 {
        base_price * (1.0 - self.discount_for(level) / 100.0)
    }

    pub fn validate(&self) -> Result<(), String> {
        for (level, pct) in &self.discounts {
            if *pct < 0.0 {
                return Err(format!("Discount for {} must not be negative", level));
            }
        }
        Ok(())
    }

    /// Last day of the month containing `date`.
    pub fn end_of_month(date: NaiveDate) -> NaiveDate {
        let (year, month) = if date.month() == 12 {
            (date.year() + 1, 1)
        } else {
            (date.year(), date.month() + 1)
        };
        // First of next month always exists, so does the day before it.
        NaiveDate::from_ymd_opt(year, month, 1)
            .and_then(|d| d.pred_opt())
            .unwrap_or(date)
    }
}

impl Default for Settings {
    fn default() -> Self {
        let mut discounts = BTreeMap::new();
        discounts.insert(StoreLevel::Ws1, 1.5);
        discounts.insert(StoreLevel::Ws2, 0.75);
        discounts.insert(StoreLevel::RitelL, 0.0);
        discounts.insert(StoreLevel::Ritel, 0.0);
        discounts.insert(StoreLevel::Others, 0.0);

        Self {
            discounts,
            deadline: Self::end_of_month(Utc::now().date_naive()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_of_month_handles_december_and_leap_february() {
        let dec = NaiveDate::from_ymd_opt(2025, 12, 10).unwrap();
        assert_eq!(
            Settings::end_of_month(dec),
            NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()
        );
        let feb = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        assert_eq!(
            Settings::end_of_month(feb),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
    }

    #[test]
    fn discounted_price_uses_level_table() {
        let settings = Settings::default();
        assert_eq!(settings.discounted_price(1000.0, StoreLevel::Ws1), 985.0);
        assert_eq!(settings.discounted_price(1000.0, StoreLevel::Ritel), 1000.0);
    }

    #[test]
    fn validate_rejects_negative_discount() {
        let mut settings = Settings::default();
        settings.discounts.insert(StoreLevel::Others, -1.0);
        assert!(settings.validate().is_err());
    }
}
