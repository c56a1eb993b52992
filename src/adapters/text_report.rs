//! Chat-style text reports.
//!
//! Renders domain results as Markdown-flavoured plain text suitable for a chat
//! reply. Length limits are the reply sink's concern, see
//! [`ReplyPort::send_chunked`](crate::ports::reply_port::ReplyPort::send_chunked).

use crate::domain::portfolio::Portfolio;
use crate::domain::profile::TraderProfile;
use crate::domain::pulse::MarketPulse;
use crate::domain::sentiment::{Recommendation, Sentiment, SentimentResult};
use crate::domain::simulation::InvestmentOutcome;

/// US-dollar amount with thousands separators, e.g. `$50,000.00`.
pub fn format_usd(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}${grouped}.{cents}")
}

/// Fraction rendered as a percentage, e.g. `0.5` -> `50.00%`.
pub fn format_percent(fraction: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, fraction * 100.0)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn sentiment_marker(sentiment: Sentiment) -> &'static str {
    match sentiment {
        Sentiment::Bullish => "📈",
        Sentiment::Bearish => "📉",
        Sentiment::Neutral => "➖",
    }
}

pub fn trend_marker(recommendation: Recommendation) -> &'static str {
    if recommendation.is_buy() {
        "📈"
    } else if recommendation.is_sell() {
        "📉"
    } else {
        "➖"
    }
}

fn levels_line(result: &SentimentResult) -> String {
    format!(
        "Entry: {} | SL: {} | TP: {}",
        format_usd(result.entry_point),
        format_usd(result.stop_loss),
        format_usd(result.take_profit)
    )
}

/// Per-asset analysis, personalised profile and token spotlight in one text.
pub fn market_pulse(pulse: &MarketPulse) -> String {
    let mut out = String::from("🚀 *Crypto Market Pulse* 🚀\n\n");

    for entry in &pulse.entries {
        let a = &entry.analysis;
        out.push_str(&format!(
            "{} *{}* {}\n",
            sentiment_marker(a.sentiment),
            a.symbol,
            trend_marker(a.recommendation),
        ));
        out.push_str(&format!("💰 Price: {}\n", format_usd(a.entry_point)));
        out.push_str(&format!(
            "🔮 AI Sentiment: {} ({})\n",
            a.sentiment.to_string().to_uppercase(),
            format_percent(a.confidence, 2),
        ));
        out.push_str(&format!("🎯 Recommendation: {}\n", a.recommendation));
        out.push_str(&format!("📊 {}\n", levels_line(a)));
        out.push_str(&format!("📈 24h High: {}\n", format_usd(entry.snapshot.high_24h)));
        out.push_str(&format!("📉 24h Low: {}\n", format_usd(entry.snapshot.low_24h)));
        out.push_str(&format!("🔗 Related: {}\n\n", a.related_assets.join(", ")));
    }

    out.push_str(&personalized_profile(&pulse.profile));
    out.push_str(&token_spotlight(pulse.top_pick.as_ref()));
    out
}

pub fn personalized_profile(profile: &TraderProfile) -> String {
    let mut out = String::from("👤 *Your Personalized Trader Profile* 👤\n\n");
    out.push_str(&format!(
        "🎭 Risk Appetite: {}\n",
        profile.risk_tolerance.to_string().to_uppercase(),
    ));
    out.push_str(&format!("💼 Suggested Assets: {}\n", profile.preferred_assets.join(", ")));
    out.push_str(&format!(
        "⏱ Trading Style: {} Trading\n",
        capitalize(&profile.trading_style.to_string()),
    ));
    out.push_str(&format!(
        "🏆 Trader Level: {}\n\n",
        capitalize(&profile.experience.to_string()),
    ));
    out
}

pub fn token_spotlight(top_pick: Option<&SentimentResult>) -> String {
    let mut out = String::from("🔮 *AI-Powered Token Spotlight* 🔮\n\n");
    let Some(pick) = top_pick else {
        out.push_str("🔍 No standout bullish tokens identified in the current market analysis.\n");
        return out;
    };
    out.push_str(&format!("🏅 Top Pick: *{}*\n", pick.symbol));
    out.push_str(&format!("💰 Current Price: {}\n", format_usd(pick.entry_point)));
    out.push_str(&format!(
        "🔮 AI Sentiment: {}\n",
        pick.sentiment.to_string().to_uppercase(),
    ));
    out.push_str(&format!("🎯 Confidence Level: {}\n", format_percent(pick.confidence, 2)));
    out.push_str(&format!("💡 Strategy: {}\n", pick.recommendation));
    out.push_str("📊 Suggested Levels:\n");
    out.push_str(&format!("   Entry: {}\n", format_usd(pick.entry_point)));
    out.push_str(&format!("   Stop Loss: {}\n", format_usd(pick.stop_loss)));
    out.push_str(&format!("   Take Profit: {}\n", format_usd(pick.take_profit)));
    out
}

/// Standalone recommendation reply for the single best bullish token.
pub fn token_recommendation(top_pick: Option<&SentimentResult>) -> String {
    let Some(pick) = top_pick else {
        return "No bullish tokens found in the current market analysis.".to_string();
    };
    let mut out = String::from("🔮 AI Token Recommendation (DEMO/SIMULATION)\n\n");
    out.push_str(&format!("Recommended Token: {}\n", pick.symbol));
    out.push_str(&format!("Current Price: {}\n", format_usd(pick.entry_point)));
    out.push_str(&format!(
        "Sentiment: {} ({})\n",
        pick.sentiment.to_string().to_uppercase(),
        format_percent(pick.confidence, 0),
    ));
    out.push_str(&format!("Recommendation: {}\n", pick.recommendation));
    out.push_str(&format!("{}\n\n", levels_line(pick)));
    out.push_str(&format!("Related Assets: {}\n", pick.related_assets.join(", ")));
    out
}

pub fn preset_profile(profile: &TraderProfile) -> String {
    let mut out = String::from("👤 Recommended Trader Profile (DEMO/SIMULATION)\n\n");
    out.push_str(&format!(
        "Risk Tolerance: {}\n",
        profile.risk_tolerance.to_string().to_uppercase(),
    ));
    out.push_str(&format!("Preferred Assets: {}\n", profile.preferred_assets.join(", ")));
    out.push_str(&format!(
        "Trading Style: {} Trading\n",
        capitalize(&profile.trading_style.to_string()),
    ));
    out.push_str(&format!(
        "Experience Level: {}\n",
        capitalize(&profile.experience.to_string()),
    ));
    out
}

pub fn asset_not_found(symbol: &str, available: &[String]) -> String {
    format!(
        "Asset {} not found. Available assets: {}",
        symbol,
        available.join(", ")
    )
}

pub fn investment_simulation(analysis: &SentimentResult, outcome: &InvestmentOutcome) -> String {
    let mut out = String::from("🎮 Investment Simulation Report (DEMO/SIMULATION)\n\n");
    out.push_str(&format!(
        "💰 Investment: {} in {}\n\n",
        format_usd(outcome.amount),
        analysis.symbol,
    ));
    out.push_str(&format!("{} *AI Analysis*\n", sentiment_marker(analysis.sentiment)));
    out.push_str(&format!(
        "Sentiment: {} ({})\n",
        analysis.sentiment.to_string().to_uppercase(),
        format_percent(analysis.confidence, 0),
    ));
    out.push_str(&format!("Recommendation: {}\n", analysis.recommendation));
    out.push_str(&format!("{}\n\n", levels_line(analysis)));
    out.push_str("*Simulated Outcome*\n");
    out.push_str(&format!("Final Value: {}\n", format_usd(outcome.final_value)));
    out.push_str(&format!(
        "Profit/Loss: {} {}\n",
        if outcome.is_gain() { "✅" } else { "❌" },
        format_usd(outcome.profit),
    ));
    out
}

pub fn portfolio(portfolio: &Portfolio) -> String {
    if portfolio.is_empty() {
        return "Your portfolio is empty. Add holdings as Asset,Amount,BuyPrice (e.g. BTC,0.5,30000)."
            .to_string();
    }
    let mut out = String::from("Your Portfolio:\n\n");
    for h in &portfolio.holdings {
        out.push_str(&format!("Asset: {}\n", h.asset));
        out.push_str(&format!("Amount: {}\n", h.amount));
        out.push_str(&format!("Buy Price: {}\n", format_usd(h.buy_price)));
        out.push_str(&format!("Value: {}\n\n", format_usd(h.value())));
    }
    out.push_str(&format!(
        "Total Portfolio Value: {}",
        format_usd(portfolio.total_value()),
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::portfolio::Holding;
    use crate::domain::profile::{Experience, RiskTolerance, TradingStyle};
    use crate::domain::pulse::PulseEntry;
    use crate::domain::snapshot::MarketSnapshot;

    fn result(symbol: &str, sentiment: Sentiment, confidence: f64, price: f64) -> SentimentResult {
        SentimentResult {
            symbol: symbol.into(),
            sentiment,
            confidence,
            recommendation: Recommendation::from_signal(sentiment, confidence),
            entry_point: price,
            stop_loss: price * 0.95,
            take_profit: price * 1.1,
            related_assets: vec!["ETH".into(), "SOL".into(), "LINK".into()],
        }
    }

    fn profile() -> TraderProfile {
        TraderProfile {
            risk_tolerance: RiskTolerance::Medium,
            preferred_assets: vec!["BTC".into()],
            trading_style: TradingStyle::Swing,
            experience: Experience::Intermediate,
        }
    }

    #[test]
    fn usd_groups_thousands() {
        assert_eq!(format_usd(50_000.0), "$50,000.00");
        assert_eq!(format_usd(1_234_567.891), "$1,234,567.89");
        assert_eq!(format_usd(999.999), "$1,000.00");
        assert_eq!(format_usd(2.0), "$2.00");
        assert_eq!(format_usd(0.0), "$0.00");
    }

    #[test]
    fn usd_negative_amounts() {
        assert_eq!(format_usd(-25.0), "-$25.00");
        assert_eq!(format_usd(-0.001), "$0.00");
    }

    #[test]
    fn percent_formatting() {
        assert_eq!(format_percent(0.5, 2), "50.00%");
        assert_eq!(format_percent(0.876, 0), "88%");
    }

    #[test]
    fn markers() {
        assert_eq!(sentiment_marker(Sentiment::Bullish), "📈");
        assert_eq!(sentiment_marker(Sentiment::Neutral), "➖");
        assert_eq!(trend_marker(Recommendation::StrongSell), "📉");
        assert_eq!(trend_marker(Recommendation::Hold), "➖");
    }

    #[test]
    fn market_pulse_contains_every_section() {
        let btc = result("BTC", Sentiment::Bullish, 0.9, 52_000.0);
        let pulse = MarketPulse {
            entries: vec![PulseEntry {
                snapshot: MarketSnapshot::new("BTC", 52_000.0, 1_000_000.0, 53_000.0, 49_000.0),
                analysis: btc.clone(),
            }],
            profile: profile(),
            top_pick: Some(btc),
        };
        let text = market_pulse(&pulse);
        assert!(text.starts_with("🚀 *Crypto Market Pulse* 🚀"));
        assert!(text.contains("📈 *BTC* 📈"));
        assert!(text.contains("🔮 AI Sentiment: BULLISH (90.00%)"));
        assert!(text.contains("🎯 Recommendation: Strong Buy"));
        assert!(text.contains("📈 24h High: $53,000.00"));
        assert!(text.contains("🔗 Related: ETH, SOL, LINK"));
        assert!(text.contains("🎭 Risk Appetite: MEDIUM"));
        assert!(text.contains("⏱ Trading Style: Swing Trading"));
        assert!(text.contains("🏅 Top Pick: *BTC*"));
    }

    #[test]
    fn spotlight_without_pick() {
        let text = token_spotlight(None);
        assert!(text.contains("No standout bullish tokens"));
    }

    #[test]
    fn token_recommendation_without_pick() {
        assert_eq!(
            token_recommendation(None),
            "No bullish tokens found in the current market analysis."
        );
    }

    #[test]
    fn token_recommendation_with_pick() {
        let r = result("ETH", Sentiment::Bullish, 0.6, 3_000.0);
        let text = token_recommendation(Some(&r));
        assert!(text.contains("Recommended Token: ETH"));
        assert!(text.contains("Sentiment: BULLISH (60%)"));
        assert!(text.contains("Entry: $3,000.00 | SL: $2,850.00 | TP: $3,300.00"));
    }

    #[test]
    fn preset_profile_text() {
        let text = preset_profile(&profile());
        assert!(text.contains("Risk Tolerance: MEDIUM"));
        assert!(text.contains("Experience Level: Intermediate"));
    }

    #[test]
    fn not_found_lists_available_assets() {
        let text = asset_not_found("DOGE", &["BTC".into(), "ETH".into()]);
        assert_eq!(text, "Asset DOGE not found. Available assets: BTC, ETH");
    }

    #[test]
    fn simulation_report_shows_loss() {
        let r = result("SOL", Sentiment::Bearish, 0.8, 150.0);
        let outcome = InvestmentOutcome {
            amount: 100.0,
            multiplier: 0.9,
            final_value: 90.0,
            profit: -10.0,
        };
        let text = investment_simulation(&r, &outcome);
        assert!(text.contains("💰 Investment: $100.00 in SOL"));
        assert!(text.contains("Final Value: $90.00"));
        assert!(text.contains("Profit/Loss: ❌ -$10.00"));
    }

    #[test]
    fn portfolio_report() {
        assert!(portfolio(&Portfolio::new()).starts_with("Your portfolio is empty"));

        let mut p = Portfolio::new();
        p.add(Holding::new("BTC", 0.5, 30_000.0).unwrap());
        let text = portfolio(&p);
        assert!(text.contains("Asset: BTC"));
        assert!(text.contains("Value: $15,000.00"));
        assert!(text.ends_with("Total Portfolio Value: $15,000.00"));
    }
}
