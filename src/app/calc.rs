use std::collections::HashMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::{PositionState, Trade};

// Net quantities at or below this are dust left over from fractional sells.
pub const HELD_EPSILON: Decimal = dec!(0.001);

pub fn aggregate_positions(trades: &[Trade]) -> HashMap<String, PositionState> {
    let mut positions: HashMap<String, PositionState> = HashMap::new();

    for trade in trades {
        let position = positions
            .entry(trade.isin().clone())
            .or_insert_with(|| PositionState::open(trade));
        position.apply(trade);
    }

    positions
}

pub fn held_positions(positions: &HashMap<String, PositionState>) -> Vec<&PositionState> {
    let mut held: Vec<&PositionState> = positions
        .values()
        .filter(|position| *position.net_quantity() > HELD_EPSILON)
        .collect();

    held.sort_by(|a, b| a.name().cmp(b.name()));
    held
}
