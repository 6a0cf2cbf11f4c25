use derive_getters::Getters;
use rust_decimal::Decimal;

use super::{Trade, TradeAction};

#[derive(Clone, Debug, Getters)]
pub struct PositionState {
    isin: String,
    name: String,
    net_quantity: Decimal,
    cost_basis: Decimal,
    cumulative_buy_quantity: Decimal,
}

impl PositionState {
    pub fn open(trade: &Trade) -> Self {
        Self {
            isin: trade.isin().clone(),
            name: trade.name().clone(),
            net_quantity: Decimal::ZERO,
            cost_basis: Decimal::ZERO,
            cumulative_buy_quantity: Decimal::ZERO,
        }
    }

    pub fn apply(&mut self, trade: &Trade) {
        match trade.action() {
            TradeAction::Buy => {
                self.cumulative_buy_quantity += trade.quantity();
                self.net_quantity += trade.quantity();
                self.cost_basis += trade.amount();
            }
            TradeAction::Sell => {
                self.net_quantity -= trade.quantity();
                if self.cumulative_buy_quantity > Decimal::ZERO {
                    // Average over every unit ever bought, not just the ones still held
                    let avg_cost = self.cost_basis / self.cumulative_buy_quantity;
                    self.cost_basis -= avg_cost * trade.quantity();
                    if self.cost_basis < Decimal::ZERO {
                        self.cost_basis = Decimal::ZERO;
                    }
                }
            }
        }
    }

    pub fn average_price(&self) -> Decimal {
        if self.cumulative_buy_quantity > Decimal::ZERO {
            return self.cost_basis / self.cumulative_buy_quantity;
        }
        Decimal::ZERO
    }
}
