use std::collections::HashMap;
use std::fs;

use anyhow::{Context, Result};

use crate::app::TradeExtractor;
use crate::app::calc::{aggregate_positions, held_positions};
use crate::app::utils::{PRICE_DP, QUANTITY_DP, round_half_up};
use crate::models::{Holding, PositionState, Trade};

#[derive(Clone, Debug, Default)]
pub struct Portfolio {
    base_currency: String,
    trades: Vec<Trade>,
    positions: HashMap<String, PositionState>,
}

impl Portfolio {
    pub fn new(base_currency: String) -> Self {
        Self {
            base_currency,
            trades: Vec::new(),
            positions: HashMap::new(),
        }
    }

    pub fn import_statement(&mut self, path: &str) -> Result<()> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read statement text at path: {}", path))?;

        let lines: Vec<String> = text.lines().map(String::from).collect();
        self.scan_text(&lines)
    }

    pub fn scan_text(&mut self, lines: &[String]) -> Result<()> {
        let extractor = TradeExtractor::new()?;
        self.trades = extractor.extract(lines);
        self.positions = aggregate_positions(&self.trades);
        Ok(())
    }

    pub fn holdings(&self) -> Vec<Holding> {
        held_positions(&self.positions)
            .into_iter()
            .map(|position| {
                Holding::new(
                    position.name().clone(),
                    position.isin().clone(),
                    round_half_up(position.net_quantity(), QUANTITY_DP),
                    round_half_up(&position.average_price(), PRICE_DP),
                    self.base_currency.clone(),
                )
            })
            .collect()
    }

    pub fn trades(&self) -> &Vec<Trade> {
        &self.trades
    }

    pub fn positions(&self) -> &HashMap<String, PositionState> {
        &self.positions
    }
}
