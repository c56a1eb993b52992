//! Market data access port trait.

use crate::domain::error::LeofiError;
use crate::domain::portfolio::Holding;
use crate::domain::snapshot::MarketSnapshot;

/// Supplies the snapshot set an analysis run works on.
pub trait MarketDataPort {
    fn fetch_snapshots(&self) -> Result<Vec<MarketSnapshot>, LeofiError>;
}

/// Supplies holdings for the portfolio tally.
pub trait HoldingsPort {
    fn fetch_holdings(&self) -> Result<Vec<Holding>, LeofiError>;
}
