// =============================================================================
// Stock Signal Engine — orchestration
// =============================================================================
//
// The single entry point of the crate. Pipeline:
//
//   1. Window & validate the price history (trailing 20 points).
//   2. Compute the indicator snapshot (SMA-5/10, Wilder RSI-14,
//      MACD 12/26 + signal-9, momentum, price/volume trend, volatility).
//   3. Run the technical verdict cascade and the fundamental scorer.
//   4. Emit the report: indicators rounded to two decimals, fundamentals
//      passed through with "N/A" for missing fields.
//
// Pure and stateless: identical input yields bit-identical output, nothing
// is retried, nothing is cached, and the input is never mutated.

use serde::Serialize;
use tracing::debug;

use crate::error::EngineError;
use crate::indicators::macd::calculate_macd;
use crate::indicators::rsi::wilder_rsi;
use crate::indicators::sma::trailing_sma;
use crate::indicators::trend::{momentum, price_trend, volume_trend};
use crate::indicators::volatility::annualized_volatility;
use crate::signals::fundamental::{fundamental_verdict, FundamentalVerdict};
use crate::signals::technical::{technical_verdict, TechnicalVerdict};
use crate::types::{
    Fundamentals, Metric, PricePoint, StockSnapshot, TechnicalIndicators, VolumeTrend,
};
use crate::window::{trailing_window, WINDOW_LEN};

/// Wilder RSI look-back.
pub const RSI_PERIOD: usize = 14;
/// Momentum reads the 11th-from-last close (~10 trading days back).
pub const MOMENTUM_OFFSET: usize = 11;
/// Trailing days in the volume-trend average.
pub const VOLUME_TREND_PERIOD: usize = 5;

const MACD_FAST_SPAN: usize = 12;
const MACD_SLOW_SPAN: usize = 26;
const MACD_SIGNAL_SPAN: usize = 9;

/// Technical half of the report. Numeric fields are rounded to two
/// decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TechnicalReport {
    pub verdict: TechnicalVerdict,
    pub current_price: f64,
    pub rsi: f64,
    pub macd: f64,
    pub signal: f64,
    pub momentum: f64,
    pub price_trend: f64,
    pub volume_trend: VolumeTrend,
    pub volatility: f64,
    pub sma_5: f64,
    pub sma_10: f64,
}

/// Fundamental half of the report. Ratios pass through unrounded; missing
/// fields serialize as `"N/A"`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FundamentalReport {
    pub verdict: FundamentalVerdict,
    pub eps: Metric,
    pub revenue_growth: Metric,
    pub pe_ratio: Metric,
    pub debt_to_equity: Metric,
    pub return_on_equity: Metric,
    pub dividend_yield: Metric,
}

/// Combined analysis result handed back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub technical: TechnicalReport,
    pub fundamental: FundamentalReport,
}

/// Analyze a price history and fundamentals record.
///
/// The history may be any length >= 20 (sorted ascending by date; the
/// engine re-sorts defensively) and is trimmed to its trailing 20 usable
/// points. Anything shorter fails with [`EngineError::DataInsufficient`] —
/// the only error this function returns. Missing fundamentals never fail;
/// they simply do not contribute to the score.
pub fn analyze(
    history: &[PricePoint],
    fundamentals: &Fundamentals,
) -> Result<AnalysisReport, EngineError> {
    let window = trailing_window(history)?;

    // A full window always yields a complete snapshot; a `None` here can
    // only mean the window invariant was broken.
    let indicators =
        compute_indicators(&window).ok_or(EngineError::DataInsufficient {
            required: WINDOW_LEN,
            actual: window.len(),
        })?;

    let verdict = technical_verdict(&indicators);
    debug!(
        %verdict,
        rsi = indicators.rsi,
        macd = indicators.macd,
        volatility = indicators.volatility,
        "technical analysis complete"
    );

    let technical = TechnicalReport {
        verdict,
        current_price: round2(indicators.current_price),
        rsi: round2(indicators.rsi),
        macd: round2(indicators.macd),
        signal: round2(indicators.signal),
        momentum: round2(indicators.momentum),
        price_trend: round2(indicators.price_trend),
        volume_trend: indicators.volume_trend,
        volatility: round2(indicators.volatility),
        sma_5: round2(indicators.sma_5),
        sma_10: round2(indicators.sma_10),
    };

    let fundamental = FundamentalReport {
        verdict: fundamental_verdict(fundamentals),
        eps: fundamentals.eps.into(),
        revenue_growth: fundamentals.revenue_growth.into(),
        pe_ratio: fundamentals.pe_ratio.into(),
        debt_to_equity: fundamentals.debt_to_equity.into(),
        return_on_equity: fundamentals.return_on_equity.into(),
        dividend_yield: fundamentals.dividend_yield.into(),
    };

    Ok(AnalysisReport {
        technical,
        fundamental,
    })
}

/// Convenience wrapper over [`analyze`] for the wire-shaped input.
pub fn analyze_snapshot(snapshot: &StockSnapshot) -> Result<AnalysisReport, EngineError> {
    analyze(&snapshot.price_history, &snapshot.fundamentals)
}

/// Derive the full-precision indicator snapshot from a validated window.
///
/// Returns `None` only when the window is too short for one of the
/// indicators — impossible for windows produced by `trailing_window`.
fn compute_indicators(window: &[PricePoint]) -> Option<TechnicalIndicators> {
    let closes: Vec<f64> = window.iter().map(|p| p.close).collect();
    let volumes: Vec<u64> = window.iter().map(|p| p.volume).collect();

    let current_price = *closes.last()?;
    let macd = calculate_macd(&closes, MACD_FAST_SPAN, MACD_SLOW_SPAN, MACD_SIGNAL_SPAN)?;

    Some(TechnicalIndicators {
        current_price,
        sma_5: trailing_sma(&closes, 5)?,
        sma_10: trailing_sma(&closes, 10)?,
        rsi: wilder_rsi(&closes, RSI_PERIOD)?,
        macd: macd.macd,
        signal: macd.signal,
        momentum: momentum(&closes, MOMENTUM_OFFSET),
        price_trend: price_trend(&closes),
        volume_trend: volume_trend(&volumes, VOLUME_TREND_PERIOD),
        volatility: annualized_volatility(&closes)?,
    })
}

/// Round to two decimal places for the outgoing representation.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
