// =============================================================================
// Moving Average Convergence Divergence (MACD)
// =============================================================================
//
// MACD line   = EMA(fast) - EMA(slow), pointwise over the close series.
// Signal line = EMA(signal span) of the MACD line.
//
// The engine reads the most recent value of each; a MACD line above its
// signal line counts as a bullish condition.

use super::ema::span_ema;

/// Most recent MACD and signal line values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacdOutput {
    pub macd: f64,
    pub signal: f64,
}

/// Compute the final MACD / signal values for `closes`.
///
/// Returns `None` when the input is empty or any span is zero.
pub fn calculate_macd(
    closes: &[f64],
    fast_span: usize,
    slow_span: usize,
    signal_span: usize,
) -> Option<MacdOutput> {
    let ema_fast = span_ema(closes, fast_span);
    let ema_slow = span_ema(closes, slow_span);
    if ema_fast.is_empty() || ema_slow.is_empty() {
        return None;
    }

    let macd_line: Vec<f64> = ema_fast
        .iter()
        .zip(ema_slow.iter())
        .map(|(fast, slow)| fast - slow)
        .collect();

    let signal_line = span_ema(&macd_line, signal_span);

    Some(MacdOutput {
        macd: *macd_line.last()?,
        signal: *signal_line.last()?,
    })
}
