//! Asset lookup and investment simulation.

use crate::domain::error::LeofiError;
use crate::domain::sentiment::{Sentiment, SentimentResult};
use crate::domain::snapshot::MarketSnapshot;

/// Result of looking a symbol up in a snapshot set.
///
/// A missing symbol is a normal outcome: callers render the available symbols.
#[derive(Debug, Clone, PartialEq)]
pub enum AssetLookup<'a> {
    Found(&'a MarketSnapshot),
    NotFound {
        symbol: String,
        available: Vec<String>,
    },
}

pub fn find_snapshot<'a>(snapshots: &'a [MarketSnapshot], symbol: &str) -> AssetLookup<'a> {
    let wanted = symbol.trim();
    match snapshots
        .iter()
        .find(|s| s.symbol.eq_ignore_ascii_case(wanted))
    {
        Some(snapshot) => AssetLookup::Found(snapshot),
        None => AssetLookup::NotFound {
            symbol: wanted.to_uppercase(),
            available: snapshots.iter().map(|s| s.symbol.clone()).collect(),
        },
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InvestmentOutcome {
    pub amount: f64,
    pub multiplier: f64,
    pub final_value: f64,
    pub profit: f64,
}

impl InvestmentOutcome {
    pub fn is_gain(&self) -> bool {
        self.profit >= 0.0
    }
}

pub fn outcome_multiplier(sentiment: Sentiment) -> f64 {
    match sentiment {
        Sentiment::Bullish => 1.1,
        Sentiment::Bearish => 0.9,
        Sentiment::Neutral => 1.0,
    }
}

/// Rejects zero, negative and non-finite investment amounts.
pub fn validate_amount(amount: f64) -> Result<(), LeofiError> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(LeofiError::invalid_input(format!(
            "investment amount must be a positive number, got {amount}"
        )));
    }
    Ok(())
}

pub fn simulate_investment(
    amount: f64,
    analysis: &SentimentResult,
) -> Result<InvestmentOutcome, LeofiError> {
    validate_amount(amount)?;
    let multiplier = outcome_multiplier(analysis.sentiment);
    let final_value = amount * multiplier;
    Ok(InvestmentOutcome {
        amount,
        multiplier,
        final_value,
        profit: final_value - amount,
    })
}
