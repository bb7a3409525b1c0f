//! Alert tiers and the per-category alert shown on the dashboard.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::NEAR_LIMIT_RATIO;

/// How close a category is to its monthly limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertTier {
    Normal,
    NearLimit,
    Exceeded,
}

impl AlertTier {
    /// Classifies `spent` against `limit`. A zero limit means "no limit".
    pub fn from_amounts(spent: Decimal, limit: Decimal) -> Self {
        if limit <= Decimal::ZERO {
            return AlertTier::Normal;
        }
        if spent > limit {
            AlertTier::Exceeded
        } else if spent >= limit.saturating_mul(NEAR_LIMIT_RATIO) {
            AlertTier::NearLimit
        } else {
            AlertTier::Normal
        }
    }

    pub fn is_alert(&self) -> bool {
        !matches!(self, AlertTier::Normal)
    }

    /// Sort rank, exceeded first.
    pub(crate) fn severity(&self) -> u8 {
        match self {
            AlertTier::Exceeded => 2,
            AlertTier::NearLimit => 1,
            AlertTier::Normal => 0,
        }
    }
}

/// Share of the limit already spent, in percent. Zero when there is no limit;
/// saturates at `Decimal::MAX` when the ratio is not representable.
pub fn spending_percentage(spent: Decimal, limit: Decimal) -> Decimal {
    if limit <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    spent
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|scaled| scaled.checked_div(limit))
        .or_else(|| {
            spent
                .checked_div(limit)
                .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        })
        .unwrap_or(Decimal::MAX)
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAlert {
    pub category_id: String,
    pub category_name: String,
    pub color: String,
    pub spent: Decimal,
    pub limit: Decimal,
    pub percentage: Decimal,
    pub tier: AlertTier,
    /// Progress bar fill, capped at 100.
    pub bar_width: Decimal,
}

/// Builds the alert for a category, or `None` when its tier is `Normal`.
pub fn evaluate_alert(
    category_id: &str,
    category_name: &str,
    color: &str,
    spent: Decimal,
    limit: Decimal,
) -> Option<CategoryAlert> {
    let tier = AlertTier::from_amounts(spent, limit);
    if !tier.is_alert() {
        return None;
    }
    let percentage = spending_percentage(spent, limit);
    Some(CategoryAlert {
        category_id: category_id.to_string(),
        category_name: category_name.to_string(),
        color: color.to_string(),
        spent,
        limit,
        percentage,
        tier,
        bar_width: percentage.min(Decimal::ONE_HUNDRED),
    })
}
