// =============================================================================
// Relative Strength Index (RSI) — Wilder's Smoothing
// =============================================================================
//
// RSI measures the speed and magnitude of recent price changes to evaluate
// whether an asset is overbought or oversold.
//
// Step 1 — Compute price changes (deltas) from consecutive closes.
// Step 2 — Seed average gain / average loss with the mean of the first
//          `period` deltas.
// Step 3 — Apply Wilder's smoothing over the remaining deltas:
//            avg_gain = (prev_avg_gain * (period - 1) + gain) / period
//            avg_loss = (prev_avg_loss * (period - 1) + loss) / period
// Step 4 — RS  = avg_gain / (avg_loss + 1e-10)
//          RSI = 100 - 100 / (1 + RS)
//
// The epsilon in step 4 stands in for a divide-by-zero guard: when the
// series never falls, avg_loss is 0 and RSI saturates just below 100. The
// flip side is a perfectly flat series, where avg_gain is also 0, RS is 0
// and RSI comes out as exactly 0 rather than the idealized 50. Consumers
// depend on that exact value, so keep the formula as-is.
//
// Thresholds:  RSI > 70 => overbought,  RSI < 30 => oversold.
// =============================================================================

const EPSILON: f64 = 1e-10;

/// Final Wilder-smoothed RSI of `closes`, folded left-to-right over the
/// whole delta series.
///
/// Returns `None` when `period` is zero or there are fewer than `period`
/// deltas (i.e. `closes.len() < period + 1`).
pub fn wilder_rsi(closes: &[f64], period: usize) -> Option<f64> {
    if period == 0 || closes.len() < period + 1 {
        return None;
    }

    let deltas: Vec<f64> = closes.windows(2).map(|w| w[1] - w[0]).collect();

    // Seed: plain mean of the first `period` gains / losses.
    let (sum_gain, sum_loss) = deltas[..period]
        .iter()
        .fold((0.0_f64, 0.0_f64), |(g, l), &d| {
            if d > 0.0 {
                (g + d, l)
            } else {
                (g, l + d.abs())
            }
        });

    let period_f = period as f64;
    let mut avg_gain = sum_gain / period_f;
    let mut avg_loss = sum_loss / period_f;

    // Wilder's incremental smoothing over the remaining deltas.
    for &delta in &deltas[period..] {
        let gain = if delta > 0.0 { delta } else { 0.0 };
        let loss = if delta < 0.0 { delta.abs() } else { 0.0 };

        avg_gain = (avg_gain * (period_f - 1.0) + gain) / period_f;
        avg_loss = (avg_loss * (period_f - 1.0) + loss) / period_f;
    }

    let rs = avg_gain / (avg_loss + EPSILON);
    Some(100.0 - 100.0 / (1.0 + rs))
}
