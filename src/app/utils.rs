use anyhow::{Context, Result};
use rust_decimal::{Decimal, RoundingStrategy};

pub const QUANTITY_DP: u32 = 6;
pub const PRICE_DP: u32 = 2;

// Statement numbers carry thousands separators, e.g. "1,234.56".
pub fn parse_statement_decimal(field: &str) -> Result<Decimal> {
    field
        .replace(',', "")
        .parse::<Decimal>()
        .with_context(|| format!("Failed to parse number '{}'", field))
}

pub fn round_half_up(value: &Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}
