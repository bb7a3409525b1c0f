//! Category domain models.

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::alerts::AlertTier;
use crate::constants::{
    CATEGORY_COLOR_PALETTE, CATEGORY_ICONS, DEFAULT_CATEGORY_COLOR, MAX_AMOUNT,
};
use crate::errors::{Error, Result};

/// Domain model representing a spending category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub user_id: String,
    pub name: String,
    /// Monthly limit; zero means the category has no limit.
    pub limit_amount: Decimal,
    pub color: String,
    pub icon: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Category {
    pub fn has_limit(&self) -> bool {
        self.limit_amount > Decimal::ZERO
    }
}

/// Input model for creating a new category
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    pub name: String,
    pub limit_amount: Option<Decimal>,
    pub color: Option<String>,
    pub icon: Option<String>,
}

/// Input model for updating an existing category
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryUpdate {
    pub name: String,
    pub limit_amount: Decimal,
    pub color: String,
    pub icon: Option<String>,
}

/// Validated category fields, as written to the repository.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryDetails {
    pub name: String,
    pub limit_amount: Decimal,
    pub color: String,
    pub icon: Option<String>,
}

impl NewCategory {
    /// Validates the input and fills in the defaults: no limit, and a random
    /// palette color when none is given.
    pub fn into_details(self) -> Result<CategoryDetails> {
        let color = match self.color.filter(|c| !c.trim().is_empty()) {
            Some(color) => color,
            None => random_palette_color().to_string(),
        };
        CategoryDetails::validated(
            self.name,
            self.limit_amount.unwrap_or(Decimal::ZERO),
            color,
            self.icon,
        )
    }
}

impl CategoryUpdate {
    pub fn into_details(self) -> Result<CategoryDetails> {
        CategoryDetails::validated(self.name, self.limit_amount, self.color, self.icon)
    }
}

impl CategoryDetails {
    fn validated(
        name: String,
        limit_amount: Decimal,
        color: String,
        icon: Option<String>,
    ) -> Result<Self> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(Error::missing_field("name"));
        }
        if limit_amount < Decimal::ZERO {
            return Err(Error::invalid_input("Limit must not be negative"));
        }
        if limit_amount > MAX_AMOUNT {
            return Err(Error::invalid_input(format!(
                "Limit must not exceed {}",
                MAX_AMOUNT
            )));
        }
        let color = color.trim().to_string();
        if !is_valid_hex_color(&color) {
            return Err(Error::invalid_input(format!("Invalid color '{}'", color)));
        }
        let icon = icon.map(|i| i.trim().to_string()).filter(|i| !i.is_empty());
        if let Some(icon) = &icon {
            if !CATEGORY_ICONS.contains(&icon.as_str()) {
                return Err(Error::invalid_input(format!("Unknown icon '{}'", icon)));
            }
        }
        Ok(CategoryDetails {
            name,
            limit_amount,
            color,
            icon,
        })
    }
}

/// Checks for a `#RRGGBB` color.
pub fn is_valid_hex_color(color: &str) -> bool {
    color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit())
}

fn random_palette_color() -> &'static str {
    CATEGORY_COLOR_PALETTE
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(DEFAULT_CATEGORY_COLOR)
}

/// A category together with what was spent on it in the current month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryWithSpending {
    #[serde(flatten)]
    pub category: Category,
    pub spent: Decimal,
    pub expense_count: usize,
    pub percentage: Decimal,
    pub tier: AlertTier,
}
