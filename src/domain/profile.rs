//! Trader profile synthesis.
//!
//! `preferred_assets` follows the analysis (bullish symbols, else bearish
//! symbols). Risk tolerance, trading style and experience are drawn uniformly
//! at random and carry no information about the input.

use std::fmt;

use rand::Rng;
use serde::Serialize;

use crate::domain::sentiment::{Sentiment, SentimentResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTolerance {
    Low,
    Medium,
    High,
}

impl RiskTolerance {
    pub const ALL: [RiskTolerance; 3] = [
        RiskTolerance::Low,
        RiskTolerance::Medium,
        RiskTolerance::High,
    ];
}

impl fmt::Display for RiskTolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskTolerance::Low => write!(f, "low"),
            RiskTolerance::Medium => write!(f, "medium"),
            RiskTolerance::High => write!(f, "high"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TradingStyle {
    Day,
    Swing,
    Position,
}

impl TradingStyle {
    pub const ALL: [TradingStyle; 3] = [
        TradingStyle::Day,
        TradingStyle::Swing,
        TradingStyle::Position,
    ];
}

impl fmt::Display for TradingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradingStyle::Day => write!(f, "day"),
            TradingStyle::Swing => write!(f, "swing"),
            TradingStyle::Position => write!(f, "position"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Experience {
    Beginner,
    Intermediate,
    Advanced,
}

impl Experience {
    pub const ALL: [Experience; 3] = [
        Experience::Beginner,
        Experience::Intermediate,
        Experience::Advanced,
    ];
}

impl fmt::Display for Experience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Experience::Beginner => write!(f, "beginner"),
            Experience::Intermediate => write!(f, "intermediate"),
            Experience::Advanced => write!(f, "advanced"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraderProfile {
    pub risk_tolerance: RiskTolerance,
    pub preferred_assets: Vec<String>,
    pub trading_style: TradingStyle,
    pub experience: Experience,
}

fn pick<T: Copy, R: Rng + ?Sized>(options: &[T], rng: &mut R) -> T {
    // options are the non-empty ALL arrays above
    options[rng.gen_range(0..options.len())]
}

fn symbols_with(results: &[SentimentResult], sentiment: Sentiment) -> Vec<String> {
    results
        .iter()
        .filter(|r| r.sentiment == sentiment)
        .map(|r| r.symbol.clone())
        .collect()
}

pub fn synthesize_profile<R: Rng + ?Sized>(
    results: &[SentimentResult],
    rng: &mut R,
) -> TraderProfile {
    let bullish = symbols_with(results, Sentiment::Bullish);
    let preferred_assets = if bullish.is_empty() {
        symbols_with(results, Sentiment::Bearish)
    } else {
        bullish
    };

    TraderProfile {
        risk_tolerance: pick(&RiskTolerance::ALL, rng),
        preferred_assets,
        trading_style: pick(&TradingStyle::ALL, rng),
        experience: pick(&Experience::ALL, rng),
    }
}

/// The three canned profiles offered by the standalone profile command.
pub fn preset_profiles() -> Vec<TraderProfile> {
    let assets = |list: &[&str]| list.iter().map(|s| s.to_string()).collect::<Vec<_>>();
    vec![
        TraderProfile {
            risk_tolerance: RiskTolerance::Low,
            preferred_assets: assets(&["BTC", "ETH", "USDC"]),
            trading_style: TradingStyle::Position,
            experience: Experience::Beginner,
        },
        TraderProfile {
            risk_tolerance: RiskTolerance::Medium,
            preferred_assets: assets(&["ETH", "SOL", "ADA", "DOT"]),
            trading_style: TradingStyle::Swing,
            experience: Experience::Intermediate,
        },
        TraderProfile {
            risk_tolerance: RiskTolerance::High,
            preferred_assets: assets(&["SOL", "DOT", "AVAX", "LINK"]),
            trading_style: TradingStyle::Day,
            experience: Experience::Advanced,
        },
    ]
}

pub fn pick_preset_profile<R: Rng + ?Sized>(rng: &mut R) -> TraderProfile {
    let mut presets = preset_profiles();
    let index = rng.gen_range(0..presets.len());
    presets.swap_remove(index)
}
