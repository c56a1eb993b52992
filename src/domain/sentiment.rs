//! Sentiment classifier and trade-level recommendation.
//!
//! Maps a [`MarketSnapshot`] to a [`SentimentResult`]:
//! - sentiment from price vs. the 24h midpoint, gated on volume strength
//! - confidence from 24h volatility plus a volume bonus, clamped to [0, 1]
//! - entry / stop-loss / take-profit levels derived multiplicatively from price
//! - a recommendation label from sentiment and confidence
//! - up to three related assets sampled from the [`AssetUniverse`]

use std::fmt;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

use crate::domain::error::LeofiError;
use crate::domain::snapshot::MarketSnapshot;
use crate::domain::universe::{AssetUniverse, RELATED_ASSET_COUNT};

pub const HIGH_VOLUME_THRESHOLD: f64 = 500_000.0;
pub const MEDIUM_VOLUME_THRESHOLD: f64 = 250_000.0;

const VOLATILITY_WEIGHT: f64 = 5.0;

pub const BULLISH_STOP_LOSS: f64 = 0.95;
pub const BULLISH_TAKE_PROFIT: f64 = 1.10;
pub const BEARISH_STOP_LOSS: f64 = 1.05;
pub const BEARISH_TAKE_PROFIT: f64 = 0.90;

const STRONG_CONFIDENCE: f64 = 0.7;
const MODERATE_CONFIDENCE: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Bullish,
    Bearish,
    Neutral,
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sentiment::Bullish => write!(f, "bullish"),
            Sentiment::Bearish => write!(f, "bearish"),
            Sentiment::Neutral => write!(f, "neutral"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VolumeStrength {
    Low,
    Medium,
    High,
}

impl VolumeStrength {
    pub fn from_volume(volume: f64) -> Self {
        if volume > HIGH_VOLUME_THRESHOLD {
            VolumeStrength::High
        } else if volume > MEDIUM_VOLUME_THRESHOLD {
            VolumeStrength::Medium
        } else {
            VolumeStrength::Low
        }
    }

    pub fn confidence_bonus(self) -> f64 {
        match self {
            VolumeStrength::High => 0.3,
            VolumeStrength::Medium => 0.15,
            VolumeStrength::Low => 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Recommendation {
    #[serde(rename = "Strong Buy")]
    StrongBuy,
    Buy,
    Hold,
    Sell,
    #[serde(rename = "Strong Sell")]
    StrongSell,
}

impl Recommendation {
    pub fn from_signal(sentiment: Sentiment, confidence: f64) -> Self {
        match sentiment {
            Sentiment::Bullish if confidence > STRONG_CONFIDENCE => Recommendation::StrongBuy,
            Sentiment::Bullish if confidence > MODERATE_CONFIDENCE => Recommendation::Buy,
            Sentiment::Bearish if confidence > STRONG_CONFIDENCE => Recommendation::StrongSell,
            Sentiment::Bearish if confidence > MODERATE_CONFIDENCE => Recommendation::Sell,
            _ => Recommendation::Hold,
        }
    }

    pub fn is_buy(self) -> bool {
        matches!(self, Recommendation::StrongBuy | Recommendation::Buy)
    }

    pub fn is_sell(self) -> bool {
        matches!(self, Recommendation::StrongSell | Recommendation::Sell)
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Recommendation::StrongBuy => "Strong Buy",
            Recommendation::Buy => "Buy",
            Recommendation::Hold => "Hold",
            Recommendation::Sell => "Sell",
            Recommendation::StrongSell => "Strong Sell",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentResult {
    pub symbol: String,
    pub sentiment: Sentiment,
    pub confidence: f64,
    pub recommendation: Recommendation,
    pub entry_point: f64,
    pub stop_loss: f64,
    pub take_profit: f64,
    pub related_assets: Vec<String>,
}

/// Bullish only when price is strictly above the midpoint, bearish only when
/// strictly below; low volume always yields neutral.
pub fn classify(snapshot: &MarketSnapshot, strength: VolumeStrength) -> Sentiment {
    let midpoint = snapshot.midpoint();
    if strength == VolumeStrength::Low {
        return Sentiment::Neutral;
    }
    if snapshot.price > midpoint {
        Sentiment::Bullish
    } else if snapshot.price < midpoint {
        Sentiment::Bearish
    } else {
        Sentiment::Neutral
    }
}

pub fn confidence(volatility: f64, strength: VolumeStrength) -> f64 {
    (volatility * VOLATILITY_WEIGHT + strength.confidence_bonus()).clamp(0.0, 1.0)
}

/// (stop_loss, take_profit). Bearish and neutral share the same levels.
pub fn trade_levels(price: f64, sentiment: Sentiment) -> (f64, f64) {
    match sentiment {
        Sentiment::Bullish => (price * BULLISH_STOP_LOSS, price * BULLISH_TAKE_PROFIT),
        Sentiment::Bearish | Sentiment::Neutral => {
            (price * BEARISH_STOP_LOSS, price * BEARISH_TAKE_PROFIT)
        }
    }
}

pub fn related_assets<R: Rng + ?Sized>(
    symbol: &str,
    universe: &AssetUniverse,
    rng: &mut R,
) -> Vec<String> {
    universe
        .excluding(symbol)
        .choose_multiple(rng, RELATED_ASSET_COUNT)
        .map(|s| s.to_string())
        .collect()
}

pub fn analyze<R: Rng + ?Sized>(
    snapshot: &MarketSnapshot,
    universe: &AssetUniverse,
    rng: &mut R,
) -> Result<SentimentResult, LeofiError> {
    snapshot.validate()?;

    let strength = VolumeStrength::from_volume(snapshot.volume);
    let sentiment = classify(snapshot, strength);
    let confidence = confidence(snapshot.volatility(), strength);
    let (stop_loss, take_profit) = trade_levels(snapshot.price, sentiment);

    Ok(SentimentResult {
        symbol: snapshot.symbol.clone(),
        sentiment,
        confidence,
        recommendation: Recommendation::from_signal(sentiment, confidence),
        entry_point: snapshot.price,
        stop_loss,
        take_profit,
        related_assets: related_assets(&snapshot.symbol, universe, rng),
    })
}

/// Analyzes every snapshot in order. The first invalid snapshot aborts the batch.
pub fn analyze_all<R: Rng + ?Sized>(
    snapshots: &[MarketSnapshot],
    universe: &AssetUniverse,
    rng: &mut R,
) -> Result<Vec<SentimentResult>, LeofiError> {
    snapshots
        .iter()
        .map(|snapshot| analyze(snapshot, universe, rng))
        .collect()
}
