//! Time-of-day pricing rules
//!
//! Hours are wall-clock hours (0..=23) in the business timezone.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::models::MenuCategory;

use super::calculator::Adjustment;

/// Refresh count at which the anti-bot surcharge kicks in
pub const ANTI_BOT_REFRESH_THRESHOLD: u32 = 5;

/// Anti-bot surcharge factor (+5%)
pub fn anti_bot_factor() -> Decimal {
    Decimal::new(105, 2)
}

/// Time windows, evaluated in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeRule {
    /// 08:00-12:00, beverages -10%
    MorningBeverage,
    /// 12:00-16:00, everything +15%
    AfternoonPeak,
    /// 19:00-22:00, per-item flash discount
    EveningFlash,
    /// 22:00-01:00, everything +25%
    LateNightSurge,
}

impl TimeRule {
    pub const ORDERED: [TimeRule; 4] = [
        TimeRule::MorningBeverage,
        TimeRule::AfternoonPeak,
        TimeRule::EveningFlash,
        TimeRule::LateNightSurge,
    ];

    pub fn is_active(self, hour: u32) -> bool {
        match self {
            TimeRule::MorningBeverage => (8..12).contains(&hour),
            TimeRule::AfternoonPeak => (12..16).contains(&hour),
            TimeRule::EveningFlash => (19..22).contains(&hour),
            TimeRule::LateNightSurge => (22..24).contains(&hour) || hour < 1,
        }
    }

    pub fn matches_category(self, category: MenuCategory) -> bool {
        match self {
            TimeRule::MorningBeverage => category == MenuCategory::Beverage,
            _ => true,
        }
    }

    /// Fixed multiplier, `None` when the factor is decided per item
    pub fn factor(self) -> Option<(Adjustment, Decimal)> {
        match self {
            TimeRule::MorningBeverage => Some((Adjustment::MorningBeverage, Decimal::new(90, 2))),
            TimeRule::AfternoonPeak => Some((Adjustment::AfternoonPeak, Decimal::new(115, 2))),
            TimeRule::EveningFlash => None,
            TimeRule::LateNightSurge => Some((Adjustment::LateNightSurge, Decimal::new(125, 2))),
        }
    }
}

/// Part of the day shown next to the menu
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PricingPeriod {
    Morning,
    Afternoon,
    Evening,
    LateNight,
}

impl PricingPeriod {
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            8..=11 => Self::Morning,
            12..=15 => Self::Afternoon,
            16..=21 => Self::Evening,
            _ => Self::LateNight,
        }
    }
}

/// Banner describing the promotion active at `hour`, if any
pub fn pricing_notice(hour: u32) -> Option<&'static str> {
    if TimeRule::MorningBeverage.is_active(hour) {
        Some("Morning Special: 10% off all beverages!")
    } else if TimeRule::AfternoonPeak.is_active(hour) {
        Some("Peak Hours: Prices are 15% higher during lunch rush.")
    } else if TimeRule::EveningFlash.is_active(hour) {
        Some("Evening Special: Random items discounted every 10 minutes!")
    } else if TimeRule::LateNightSurge.is_active(hour) {
        Some("Late Night Surge: 25% price increase for last orders.")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_boundaries() {
        assert!(!TimeRule::MorningBeverage.is_active(7));
        assert!(TimeRule::MorningBeverage.is_active(8));
        assert!(TimeRule::MorningBeverage.is_active(11));
        assert!(!TimeRule::MorningBeverage.is_active(12));

        assert!(TimeRule::AfternoonPeak.is_active(12));
        assert!(TimeRule::AfternoonPeak.is_active(15));
        assert!(!TimeRule::AfternoonPeak.is_active(16));

        assert!(!TimeRule::EveningFlash.is_active(18));
        assert!(TimeRule::EveningFlash.is_active(19));
        assert!(TimeRule::EveningFlash.is_active(21));
        assert!(!TimeRule::EveningFlash.is_active(22));

        assert!(TimeRule::LateNightSurge.is_active(22));
        assert!(TimeRule::LateNightSurge.is_active(23));
        assert!(TimeRule::LateNightSurge.is_active(0));
        assert!(!TimeRule::LateNightSurge.is_active(1));
    }

    #[test]
    fn test_out_of_range_hour_matches_nothing() {
        for rule in TimeRule::ORDERED {
            assert!(!rule.is_active(24));
            assert!(!rule.is_active(99));
        }
    }

    #[test]
    fn test_default_schedule_windows_do_not_overlap() {
        for hour in 0..24 {
            let active = TimeRule::ORDERED
                .iter()
                .filter(|r| r.is_active(hour))
                .count();
            assert!(active <= 1, "hour {} has {} windows", hour, active);
        }
    }

    #[test]
    fn test_morning_rule_only_matches_beverages() {
        assert!(TimeRule::MorningBeverage.matches_category(MenuCategory::Beverage));
        assert!(!TimeRule::MorningBeverage.matches_category(MenuCategory::Main));
        assert!(TimeRule::AfternoonPeak.matches_category(MenuCategory::Dessert));
    }

    #[test]
    fn test_period_and_notice() {
        assert_eq!(PricingPeriod::from_hour(9), PricingPeriod::Morning);
        assert_eq!(PricingPeriod::from_hour(13), PricingPeriod::Afternoon);
        assert_eq!(PricingPeriod::from_hour(17), PricingPeriod::Evening);
        assert_eq!(PricingPeriod::from_hour(23), PricingPeriod::LateNight);
        assert_eq!(PricingPeriod::from_hour(3), PricingPeriod::LateNight);

        assert!(pricing_notice(9).unwrap().starts_with("Morning"));
        assert!(pricing_notice(20).unwrap().starts_with("Evening"));
        assert!(pricing_notice(0).unwrap().starts_with("Late Night"));
        // 16:00-19:00 and 01:00-08:00 run at list price
        assert_eq!(pricing_notice(17), None);
        assert_eq!(pricing_notice(4), None);
    }
}
