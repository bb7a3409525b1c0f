use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Share of a category limit at which spending is flagged as near the limit.
pub const NEAR_LIMIT_RATIO: Decimal = dec!(0.8);

/// Largest amount accepted for an expense, a category limit or a fixed account
pub const MAX_AMOUNT: Decimal = dec!(1_000_000_000);

/// Minimum accepted password length for sign-up and password changes
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Number of expenses shown in the dashboard's recent list
pub const RECENT_EXPENSES_LIMIT: usize = 5;

/// Fallback label for expenses whose category row is missing
pub const UNCATEGORIZED_NAME: &str = "Uncategorized";

/// Fallback color for expenses whose category row is missing
pub const DEFAULT_CATEGORY_COLOR: &str = "#3B82F6";

/// Colors offered when creating a category; one is picked when none is given
pub const CATEGORY_COLOR_PALETTE: [&str; 10] = [
    "#3B82F6", "#EF4444", "#10B981", "#F59E0B", "#8B5CF6", "#EC4899", "#06B6D4", "#84CC16",
    "#F97316", "#6366F1",
];

/// Icon tags a category may carry
pub const CATEGORY_ICONS: [&str; 10] = [
    "carro", "comida", "viagem", "lazer", "jogos", "internet", "dinheiro", "saude", "educacao",
    "outros",
];
