pub mod holding;
pub mod position_state;
pub mod trade;

pub use holding::Holding;
pub use position_state::PositionState;
pub use trade::{Trade, TradeAction};
