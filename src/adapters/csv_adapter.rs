//! CSV file data adapters.
//!
//! Snapshot files carry a `symbol,price,volume,high_24h,low_24h` header;
//! holdings files carry `asset,amount,buy_price`.

use crate::domain::error::LeofiError;
use crate::domain::portfolio::Holding;
use crate::domain::snapshot::MarketSnapshot;
use crate::ports::market_data_port::{HoldingsPort, MarketDataPort};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, LeofiError> {
    let content = fs::read_to_string(path).map_err(|e| LeofiError::Data {
        reason: format!("failed to read {}: {}", path.display(), e),
    })?;

    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let mut rows = Vec::new();
    for (index, result) in rdr.deserialize().enumerate() {
        let row: T = result.map_err(|e| LeofiError::Data {
            // header is line 1
            reason: format!("{} line {}: {}", path.display(), index + 2, e),
        })?;
        rows.push(row);
    }
    Ok(rows)
}

pub struct CsvMarketAdapter {
    path: PathBuf,
}

impl CsvMarketAdapter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl MarketDataPort for CsvMarketAdapter {
    fn fetch_snapshots(&self) -> Result<Vec<MarketSnapshot>, LeofiError> {
        let snapshots: Vec<MarketSnapshot> = read_rows(&self.path)?;
        tracing::info!(
            path = %self.path.display(),
            count = snapshots.len(),
            "loaded market snapshots"
        );
        Ok(snapshots)
    }
}

pub struct CsvHoldingsAdapter {
    path: PathBuf,
}

impl CsvHoldingsAdapter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl HoldingsPort for CsvHoldingsAdapter {
    fn fetch_holdings(&self) -> Result<Vec<Holding>, LeofiError> {
        let rows: Vec<Holding> = read_rows(&self.path)?;
        rows.into_iter()
            .map(|h| Holding::new(&h.asset, h.amount, h.buy_price))
            .collect()
    }
}
