//! Top-pick selection over a batch of sentiment results.

use crate::domain::sentiment::{Sentiment, SentimentResult};

/// The bullish result with the highest confidence.
///
/// Ties keep the earliest result in input order. Returns `None` when no
/// result is bullish.
pub fn top_pick(results: &[SentimentResult]) -> Option<&SentimentResult> {
    results
        .iter()
        .filter(|r| r.sentiment == Sentiment::Bullish)
        .fold(None, |best: Option<&SentimentResult>, candidate| match best {
            Some(b) if b.confidence >= candidate.confidence => Some(b),
            _ => Some(candidate),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sentiment::Recommendation;

    fn result(symbol: &str, sentiment: Sentiment, confidence: f64) -> SentimentResult {
        SentimentResult {
            symbol: symbol.into(),
            sentiment,
            confidence,
            recommendation: Recommendation::from_signal(sentiment, confidence),
            entry_point: 100.0,
            stop_loss: 95.0,
            take_profit: 110.0,
            related_assets: vec![],
        }
    }

    #[test]
    fn empty_input_has_no_pick() {
        assert!(top_pick(&[]).is_none());
    }

    #[test]
    fn no_bullish_results_has_no_pick() {
        let results = vec![
            result("ETH", Sentiment::Bearish, 0.9),
            result("BTC", Sentiment::Neutral, 0.95),
        ];
        assert!(top_pick(&results).is_none());
    }

    #[test]
    fn highest_confidence_bullish_wins() {
        let results = vec![
            result("BTC", Sentiment::Bullish, 0.9),
            result("ETH", Sentiment::Bullish, 0.6),
        ];
        assert_eq!(top_pick(&results).unwrap().symbol, "BTC");
    }

    #[test]
    fn ignores_more_confident_non_bullish() {
        let results = vec![
            result("SOL", Sentiment::Bearish, 1.0),
            result("ADA", Sentiment::Bullish, 0.55),
            result("DOT", Sentiment::Bullish, 0.65),
        ];
        assert_eq!(top_pick(&results).unwrap().symbol, "DOT");
    }

    #[test]
    fn ties_keep_first_occurrence() {
        let results = vec![
            result("ADA", Sentiment::Bullish, 0.4),
            result("LINK", Sentiment::Bullish, 0.8),
            result("UNI", Sentiment::Bullish, 0.8),
        ];
        assert_eq!(top_pick(&results).unwrap().symbol, "LINK");
    }
}
