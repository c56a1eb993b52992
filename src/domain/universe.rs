//! Related-asset universe.
//!
//! The classifier suggests related assets by sampling from a fixed symbol
//! universe. The default set can be replaced from configuration with a
//! comma-separated list parsed by [`parse_symbols`].

use std::collections::HashSet;

/// Symbols related assets are drawn from when no override is configured.
pub const DEFAULT_UNIVERSE: [&str; 10] = [
    "BTC", "ETH", "ADA", "DOT", "SOL", "LINK", "XRP", "UNI", "AAVE", "SNX",
];

/// Maximum number of related assets attached to a single result.
pub const RELATED_ASSET_COUNT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetUniverse {
    symbols: Vec<String>,
}

impl AssetUniverse {
    pub fn new(symbols: Vec<String>) -> Self {
        Self { symbols }
    }

    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    /// Every symbol except `symbol` (case-insensitive), in universe order.
    pub fn excluding(&self, symbol: &str) -> Vec<&str> {
        self.symbols
            .iter()
            .filter(|s| !s.eq_ignore_ascii_case(symbol))
            .map(String::as_str)
            .collect()
    }
}

impl Default for AssetUniverse {
    fn default() -> Self {
        Self::new(DEFAULT_UNIVERSE.iter().map(|s| s.to_string()).collect())
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UniverseError {
    #[error("empty token in symbol list")]
    EmptyToken,

    #[error("duplicate symbol: {0}")]
    DuplicateSymbol(String),
}

pub fn parse_symbols(input: &str) -> Result<Vec<String>, UniverseError> {
    let mut symbols = Vec::new();
    let mut seen = HashSet::new();

    for token in input.split(',') {
        let trimmed = token.trim();
        if trimmed.is_empty() {
            return Err(UniverseError::EmptyToken);
        }
        let symbol = trimmed.to_uppercase();
        if !seen.insert(symbol.clone()) {
            return Err(UniverseError::DuplicateSymbol(symbol));
        }
        symbols.push(symbol);
    }

    Ok(symbols)
}
