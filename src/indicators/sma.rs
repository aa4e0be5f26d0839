// =============================================================================
// Simple Moving Average (SMA)
// =============================================================================
//
// Unweighted mean over a fixed trailing window, evaluated at the most recent
// point. The engine reports the 5- and 10-period SMAs of the windowed closes.

/// Mean of the last `period` values.
///
/// Returns `None` when `period` is zero or the series is shorter than
/// `period`.
pub fn trailing_sma(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }

    let window = &values[values.len() - period..];
    let mean = window.iter().sum::<f64>() / period as f64;

    if mean.is_finite() {
        Some(mean)
    } else {
        None
    }
}
