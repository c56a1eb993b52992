#![allow(dead_code)]

use leofi::domain::error::LeofiError;
use leofi::domain::snapshot::MarketSnapshot;
use leofi::ports::market_data_port::MarketDataPort;
use leofi::ports::reply_port::ReplyPort;
use rand::SeedableRng;
use rand::rngs::StdRng;

pub struct MockMarketDataPort {
    pub snapshots: Vec<MarketSnapshot>,
    pub error: Option<String>,
}

impl MockMarketDataPort {
    pub fn new(snapshots: Vec<MarketSnapshot>) -> Self {
        Self {
            snapshots,
            error: None,
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            snapshots: Vec::new(),
            error: Some(reason.to_string()),
        }
    }
}

impl MarketDataPort for MockMarketDataPort {
    fn fetch_snapshots(&self) -> Result<Vec<MarketSnapshot>, LeofiError> {
        if let Some(reason) = &self.error {
            return Err(LeofiError::Data {
                reason: reason.clone(),
            });
        }
        Ok(self.snapshots.clone())
    }
}

/// Captures every message instead of delivering it.
pub struct RecordingReplyPort {
    pub messages: Vec<String>,
    pub max_len: usize,
}

impl RecordingReplyPort {
    pub fn new() -> Self {
        Self::with_max_len(4096)
    }

    pub fn with_max_len(max_len: usize) -> Self {
        Self {
            messages: Vec::new(),
            max_len,
        }
    }

    pub fn joined(&self) -> String {
        self.messages.concat()
    }
}

impl ReplyPort for RecordingReplyPort {
    fn send(&mut self, message: &str) -> Result<(), LeofiError> {
        self.messages.push(message.to_string());
        Ok(())
    }

    fn max_message_len(&self) -> usize {
        self.max_len
    }
}

pub fn make_snapshot(symbol: &str, price: f64, volume: f64, high: f64, low: f64) -> MarketSnapshot {
    MarketSnapshot::new(symbol, price, volume, high, low)
}

/// Price above the midpoint on high volume.
pub fn bullish_snapshot(symbol: &str, price: f64) -> MarketSnapshot {
    make_snapshot(symbol, price, 1_000_000.0, price * 1.02, price * 0.90)
}

/// Price below the midpoint on high volume.
pub fn bearish_snapshot(symbol: &str, price: f64) -> MarketSnapshot {
    make_snapshot(symbol, price, 1_000_000.0, price * 1.10, price * 0.98)
}

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
