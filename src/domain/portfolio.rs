//! In-memory holdings tally.
//!
//! Holdings are entered as `Asset,Amount,BuyPrice` (e.g. `BTC,0.5,30000`) and
//! live only for the current invocation.

use serde::Deserialize;

use crate::domain::error::LeofiError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Holding {
    pub asset: String,
    pub amount: f64,
    pub buy_price: f64,
}

impl Holding {
    pub fn new(asset: &str, amount: f64, buy_price: f64) -> Result<Self, LeofiError> {
        let holding = Self {
            asset: asset.trim().to_uppercase(),
            amount,
            buy_price,
        };
        holding.validate()?;
        Ok(holding)
    }

    pub fn parse_line(line: &str) -> Result<Self, LeofiError> {
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        let [asset, amount, buy_price] = fields.as_slice() else {
            return Err(LeofiError::invalid_input(format!(
                "expected Asset,Amount,BuyPrice but got '{line}'"
            )));
        };
        let amount: f64 = amount.parse().map_err(|_| {
            LeofiError::invalid_input(format!("invalid amount '{amount}' in '{line}'"))
        })?;
        let buy_price: f64 = buy_price.parse().map_err(|_| {
            LeofiError::invalid_input(format!("invalid buy price '{buy_price}' in '{line}'"))
        })?;
        Self::new(asset, amount, buy_price)
    }

    pub fn validate(&self) -> Result<(), LeofiError> {
        if self.asset.is_empty() {
            return Err(LeofiError::invalid_input("holding asset is empty"));
        }
        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(LeofiError::invalid_input(format!(
                "{}: amount must be positive",
                self.asset
            )));
        }
        if !self.buy_price.is_finite() || self.buy_price <= 0.0 {
            return Err(LeofiError::invalid_input(format!(
                "{}: buy price must be positive",
                self.asset
            )));
        }
        Ok(())
    }

    pub fn value(&self) -> f64 {
        self.amount * self.buy_price
    }
}

#[derive(Debug, Clone, Default)]
pub struct Portfolio {
    pub holdings: Vec<Holding>,
}

impl Portfolio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, holding: Holding) {
        tracing::debug!(asset = %holding.asset, value = holding.value(), "holding added");
        self.holdings.push(holding);
    }

    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }

    pub fn total_value(&self) -> f64 {
        self.holdings.iter().map(Holding::value).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn parse_line_reads_three_fields() {
        let h = Holding::parse_line(" btc , 0.5 , 30000 ").unwrap();
        assert_eq!(h.asset, "BTC");
        assert_relative_eq!(h.amount, 0.5);
        assert_relative_eq!(h.buy_price, 30_000.0);
        assert_relative_eq!(h.value(), 15_000.0);
    }

    #[test]
    fn parse_line_rejects_wrong_field_count() {
        assert!(Holding::parse_line("BTC,0.5").is_err());
        assert!(Holding::parse_line("BTC,0.5,30000,extra").is_err());
    }

    #[test]
    fn parse_line_rejects_bad_numbers() {
        let err = Holding::parse_line("ETH,lots,3000").unwrap_err();
        assert!(matches!(err, LeofiError::InvalidInput { reason } if reason.contains("amount")));
        assert!(Holding::parse_line("ETH,1,-3000").is_err());
        assert!(Holding::parse_line(",1,3000").is_err());
    }

    #[test]
    fn total_value_sums_holdings() {
        let mut portfolio = Portfolio::new();
        assert!(portfolio.is_empty());
        portfolio.add(Holding::new("BTC", 0.5, 30_000.0).unwrap());
        portfolio.add(Holding::new("ETH", 2.0, 1_500.0).unwrap());
        assert_relative_eq!(portfolio.total_value(), 18_000.0);
    }
}
