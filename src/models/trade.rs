use anyhow::Result;
use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;

#[derive(Clone, Debug, Getters, PartialEq, new)]
pub struct Trade {
    action: TradeAction,
    isin: String,
    name: String,
    quantity: Decimal,
    amount: Decimal,
}

impl Trade {
    pub fn unit_price(&self) -> Decimal {
        if self.quantity > Decimal::ZERO {
            return self.amount / self.quantity;
        }
        Decimal::ZERO
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TradeAction {
    Buy,
    Sell,
}

impl TradeAction {
    pub fn from_str(s: &str) -> Result<TradeAction> {
        match s {
            "Buy" => Ok(TradeAction::Buy),
            "Sell" => Ok(TradeAction::Sell),
            _ => Err(anyhow::anyhow!("Unknown trade action")),
        }
    }

    pub fn to_str(&self) -> &str {
        match self {
            TradeAction::Buy => "Buy",
            TradeAction::Sell => "Sell",
        }
    }
}
