// =============================================================================
// Annualized volatility
// =============================================================================
//
// Sample standard deviation of fractional day-over-day returns, scaled to a
// yearly percentage:
//
//   r_t        = (close_t - close_{t-1}) / close_{t-1}
//   volatility = stddev(r) * 100 * sqrt(252)
//
// 252 is the conventional number of trading days per year. The standard
// deviation uses the n-1 divisor, which needs at least two returns.

const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Annualized volatility of `closes`, in percent.
///
/// Returns `None` with fewer than three closes (fewer than two returns) or
/// when the result is non-finite (a zero close upstream).
pub fn annualized_volatility(closes: &[f64]) -> Option<f64> {
    if closes.len() < 3 {
        return None;
    }

    let returns: Vec<f64> = closes.windows(2).map(|w| (w[1] - w[0]) / w[0]).collect();

    let n = returns.len() as f64;
    let mean = returns.iter().sum::<f64>() / n;
    let variance = returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / (n - 1.0);

    let volatility = variance.sqrt() * 100.0 * TRADING_DAYS_PER_YEAR.sqrt();

    if volatility.is_finite() {
        Some(volatility)
    } else {
        None
    }
}
