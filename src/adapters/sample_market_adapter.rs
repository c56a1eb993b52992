//! Built-in demo market data.

use crate::domain::error::LeofiError;
use crate::domain::snapshot::MarketSnapshot;
use crate::ports::market_data_port::MarketDataPort;

/// Five fixed snapshots used when no data file is configured.
#[derive(Debug, Default)]
pub struct SampleMarketAdapter;

impl SampleMarketAdapter {
    pub fn snapshots() -> Vec<MarketSnapshot> {
        vec![
            MarketSnapshot::new("BTC", 50_000.0, 1_000_000.0, 51_000.0, 49_000.0),
            MarketSnapshot::new("ETH", 3_000.0, 500_000.0, 3_100.0, 2_900.0),
            MarketSnapshot::new("ADA", 2.0, 750_000.0, 2.1, 1.9),
            MarketSnapshot::new("DOT", 30.0, 250_000.0, 31.0, 29.0),
            MarketSnapshot::new("SOL", 150.0, 400_000.0, 155.0, 145.0),
        ]
    }
}

impl MarketDataPort for SampleMarketAdapter {
    fn fetch_snapshots(&self) -> Result<Vec<MarketSnapshot>, LeofiError> {
        tracing::debug!("using built-in sample market data");
        Ok(Self::snapshots())
    }
}
