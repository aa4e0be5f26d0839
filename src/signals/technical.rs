// =============================================================================
// Technical verdict — priority cascade over the indicator snapshot
// =============================================================================
//
// Score = number of bullish conditions satisfied (0..=6):
//   rsi > 50, macd > signal, momentum > 0, volume trend increasing,
//   sma5 > sma10, price trend > 0.
//
// Verdict cascade, first match wins:
//   1. rsi < 30        => Buy - Oversold
//   2. rsi > 70        => Sell - Overbought
//   3. volatility > 30 => Caution - High Volatility
//   4. score >= 4      => Buy - Strong Bullish Indicators
//   5. score <= 1      => Sell - Strong Bearish Indicators
//   6. otherwise       => Hold - Mixed Signals
//
// The RSI bands outrank the score branches: a run of all-gain days lands on
// "Sell - Overbought" even with a maximal bullish score. Downstream
// consumers rely on this ordering.

use serde::{Deserialize, Serialize};

use crate::types::{TechnicalIndicators, VolumeTrend};

/// Closed set of technical verdict categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TechnicalVerdict {
    #[serde(rename = "Buy - Oversold")]
    Oversold,
    #[serde(rename = "Sell - Overbought")]
    Overbought,
    #[serde(rename = "Caution - High Volatility")]
    HighVolatility,
    #[serde(rename = "Buy - Strong Bullish Indicators")]
    StrongBullish,
    #[serde(rename = "Sell - Strong Bearish Indicators")]
    StrongBearish,
    #[serde(rename = "Hold - Mixed Signals")]
    MixedSignals,
}

impl std::fmt::Display for TechnicalVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::Oversold => "Buy - Oversold",
            Self::Overbought => "Sell - Overbought",
            Self::HighVolatility => "Caution - High Volatility",
            Self::StrongBullish => "Buy - Strong Bullish Indicators",
            Self::StrongBearish => "Sell - Strong Bearish Indicators",
            Self::MixedSignals => "Hold - Mixed Signals",
        };
        write!(f, "{text}")
    }
}

/// Count of bullish conditions satisfied by the snapshot (0..=6).
pub fn bullish_score(indicators: &TechnicalIndicators) -> u8 {
    let conditions = [
        indicators.rsi > 50.0,
        indicators.macd > indicators.signal,
        indicators.momentum > 0.0,
        indicators.volume_trend == VolumeTrend::Increasing,
        indicators.sma_5 > indicators.sma_10,
        indicators.price_trend > 0.0,
    ];
    conditions.iter().filter(|&&met| met).count() as u8
}

/// Run the verdict cascade over a computed indicator snapshot.
pub fn technical_verdict(indicators: &TechnicalIndicators) -> TechnicalVerdict {
    let score = bullish_score(indicators);

    if indicators.rsi < 30.0 {
        TechnicalVerdict::Oversold
    } else if indicators.rsi > 70.0 {
        TechnicalVerdict::Overbought
    } else if indicators.volatility > 30.0 {
        TechnicalVerdict::HighVolatility
    } else if score >= 4 {
        TechnicalVerdict::StrongBullish
    } else if score <= 1 {
        TechnicalVerdict::StrongBearish
    } else {
        TechnicalVerdict::MixedSignals
    }
}
