//! Market snapshot representation.

use crate::domain::error::LeofiError;
use serde::{Deserialize, Serialize};

/// A point-in-time view of one asset's 24h trading window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    pub symbol: String,
    pub price: f64,
    pub volume: f64,
    pub high_24h: f64,
    pub low_24h: f64,
}

impl MarketSnapshot {
    pub fn new(symbol: &str, price: f64, volume: f64, high_24h: f64, low_24h: f64) -> Self {
        Self {
            symbol: symbol.to_string(),
            price,
            volume,
            high_24h,
            low_24h,
        }
    }

    /// (high_24h + low_24h) / 2
    pub fn midpoint(&self) -> f64 {
        (self.high_24h + self.low_24h) / 2.0
    }

    /// (high_24h - low_24h) / price. Negative when the range is inverted.
    pub fn volatility(&self) -> f64 {
        (self.high_24h - self.low_24h) / self.price
    }

    /// Rejects snapshots the classifier has no defined answer for.
    ///
    /// An inverted range (`low_24h > high_24h`) is accepted.
    pub fn validate(&self) -> Result<(), LeofiError> {
        if self.symbol.trim().is_empty() {
            return Err(LeofiError::invalid_input("snapshot symbol is empty"));
        }
        for (field, value) in [
            ("price", self.price),
            ("volume", self.volume),
            ("high_24h", self.high_24h),
            ("low_24h", self.low_24h),
        ] {
            if !value.is_finite() {
                return Err(LeofiError::invalid_input(format!(
                    "{}: {} is not a finite number",
                    self.symbol, field
                )));
            }
        }
        if self.price <= 0.0 {
            return Err(LeofiError::invalid_input(format!(
                "{}: price must be positive, got {}",
                self.symbol, self.price
            )));
        }
        if self.volume < 0.0 {
            return Err(LeofiError::invalid_input(format!(
                "{}: volume must be non-negative, got {}",
                self.symbol, self.volume
            )));
        }
        Ok(())
    }
}
