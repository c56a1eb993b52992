//! Market pulse: one full analysis pass over a snapshot set.

use rand::Rng;
use serde::Serialize;

use crate::domain::aggregate::top_pick;
use crate::domain::error::LeofiError;
use crate::domain::profile::{TraderProfile, synthesize_profile};
use crate::domain::sentiment::{SentimentResult, analyze_all};
use crate::domain::snapshot::MarketSnapshot;
use crate::domain::universe::AssetUniverse;

#[derive(Debug, Clone, Serialize)]
pub struct PulseEntry {
    pub snapshot: MarketSnapshot,
    pub analysis: SentimentResult,
}

#[derive(Debug, Clone, Serialize)]
pub struct MarketPulse {
    pub entries: Vec<PulseEntry>,
    pub profile: TraderProfile,
    pub top_pick: Option<SentimentResult>,
}

impl MarketPulse {
    pub fn results(&self) -> Vec<&SentimentResult> {
        self.entries.iter().map(|e| &e.analysis).collect()
    }
}

pub fn build_market_pulse<R: Rng + ?Sized>(
    snapshots: &[MarketSnapshot],
    universe: &AssetUniverse,
    rng: &mut R,
) -> Result<MarketPulse, LeofiError> {
    if snapshots.is_empty() {
        return Err(LeofiError::invalid_input("no market snapshots to analyze"));
    }

    let results = analyze_all(snapshots, universe, rng)?;
    let profile = synthesize_profile(&results, rng);
    let top_pick = top_pick(&results).cloned();

    tracing::debug!(
        assets = results.len(),
        top_pick = top_pick.as_ref().map(|r| r.symbol.as_str()).unwrap_or("none"),
        "market pulse built"
    );

    let entries = snapshots
        .iter()
        .cloned()
        .zip(results)
        .map(|(snapshot, analysis)| PulseEntry { snapshot, analysis })
        .collect();

    Ok(MarketPulse {
        entries,
        profile,
        top_pick,
    })
}
