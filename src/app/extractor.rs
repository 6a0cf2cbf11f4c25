use anyhow::Result;
use regex::Regex;

use crate::app::utils::parse_statement_decimal;
use crate::models::{Trade, TradeAction};

// Euro sign as it comes out of the statement's text extraction layer:
// the UTF-8 bytes of '€' re-read as Windows-1252.
pub const AMOUNT_MARKER: &str = "\u{e2}\u{201a}\u{ac}";

// A single trade entry may be wrapped across up to this many extra lines.
const LOOKAHEAD_LINES: usize = 3;

pub struct TradeExtractor {
    pattern: Regex,
}

impl TradeExtractor {
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(&format!(
            r"(Buy|Sell)\s+trade\s+([A-Z0-9]{{12}})\s+(.+?),\s*quantity:\s*([\d,.]+)\s+{}([\d,.]+)",
            regex::escape(AMOUNT_MARKER)
        ))?;
        Ok(Self { pattern })
    }

    pub fn extract(&self, lines: &[String]) -> Vec<Trade> {
        let mut trades = Vec::new();
        for i in 0..lines.len() {
            let window = self.window(lines, i);
            if let Some(trade) = self.recognize(&window) {
                trades.push(trade);
            }
        }
        trades
    }

    fn window(&self, lines: &[String], start: usize) -> String {
        let end = (start + LOOKAHEAD_LINES + 1).min(lines.len());
        lines[start..end]
            .iter()
            .map(|line| line.trim())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn recognize(&self, window: &str) -> Option<Trade> {
        let caps = self.pattern.captures(window)?;

        let action = TradeAction::from_str(&caps[1]).ok()?;
        let isin = caps[2].to_string();
        let name = caps[3].trim().to_string();
        let quantity = parse_statement_decimal(&caps[4]).ok()?;
        let amount = parse_statement_decimal(&caps[5]).ok()?;

        Some(Trade::new(action, isin, name, quantity, amount))
    }
}
