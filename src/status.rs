// src/status.rs
//! Closed enumerations for the status strings the forecasting service emits.
//!
//! Anything outside these variants fails to deserialize, so a new status
//! coming from the service shows up as a load failure instead of a grey badge.

use serde::{Deserialize, Serialize};

/// Stock adequacy classification. The bulk endpoint reports `CRITICAL`, the
/// single-product endpoint reports `CRITICAL_LOW` for the same condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StockStatus {
    Critical,
    CriticalLow,
    Low,
    Adequate,
    Excess,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionNeeded {
    OrderImmediately,
    OrderSoon,
    Monitor,
    NoOrderNeeded,
}

/// How a badge is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeStyle {
    pub color: &'static str,
    pub icon: &'static str,
}

const RED: &str = "#ef4444";
const AMBER: &str = "#f59e0b";
const GREEN: &str = "#10b981";
const INDIGO: &str = "#6366f1";

impl StockStatus {
    pub fn style(self) -> BadgeStyle {
        match self {
            StockStatus::Critical | StockStatus::CriticalLow => BadgeStyle { color: RED, icon: "🚨" },
            StockStatus::Low => BadgeStyle { color: AMBER, icon: "⚠️" },
            StockStatus::Adequate => BadgeStyle { color: GREEN, icon: "✅" },
            StockStatus::Excess => BadgeStyle { color: INDIGO, icon: "📦" },
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StockStatus::Critical => "CRITICAL",
            StockStatus::CriticalLow => "CRITICAL LOW",
            StockStatus::Low => "LOW",
            StockStatus::Adequate => "ADEQUATE",
            StockStatus::Excess => "EXCESS",
        }
    }
}

impl ActionNeeded {
    pub fn style(self) -> BadgeStyle {
        match self {
            ActionNeeded::OrderImmediately => BadgeStyle { color: RED, icon: "🚨" },
            ActionNeeded::OrderSoon => BadgeStyle { color: AMBER, icon: "⚡" },
            ActionNeeded::Monitor => BadgeStyle { color: GREEN, icon: "👀" },
            ActionNeeded::NoOrderNeeded => BadgeStyle { color: INDIGO, icon: "📦" },
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ActionNeeded::OrderImmediately => "ORDER IMMEDIATELY",
            ActionNeeded::OrderSoon => "ORDER SOON",
            ActionNeeded::Monitor => "MONITOR",
            ActionNeeded::NoOrderNeeded => "NO ORDER NEEDED",
        }
    }
}

impl std::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.style().icon, self.label())
    }
}

impl std::fmt::Display for ActionNeeded {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_round_trip() {
        let s: StockStatus = serde_json::from_str("\"CRITICAL_LOW\"").unwrap();
        assert_eq!(s, StockStatus::CriticalLow);
        let a: ActionNeeded = serde_json::from_str("\"NO_ORDER_NEEDED\"").unwrap();
        assert_eq!(a, ActionNeeded::NoOrderNeeded);
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert!(serde_json::from_str::<StockStatus>("\"OUT_OF_STOCK\"").is_err());
        assert!(serde_json::from_str::<ActionNeeded>("\"PANIC\"").is_err());
    }

    #[test]
    fn critical_variants_share_red() {
        assert_eq!(StockStatus::Critical.style(), StockStatus::CriticalLow.style());
        assert_eq!(StockStatus::Critical.style().color, "#ef4444");
        assert_eq!(StockStatus::Excess.style().color, "#6366f1");
    }

    #[test]
    fn labels_replace_underscores() {
        assert_eq!(StockStatus::CriticalLow.label(), "CRITICAL LOW");
        assert_eq!(ActionNeeded::OrderImmediately.to_string(), "ORDER IMMEDIATELY");
        assert_eq!(StockStatus::Low.to_string(), "⚠️ LOW");
    }
}
