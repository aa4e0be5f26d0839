// =============================================================================
// Exponential Moving Average (EMA) — span form
// =============================================================================
//
// Recursively weighted average favouring recent values:
//
//   alpha = 2 / (span + 1)
//   EMA_0 = x_0                       (seeded from the first value,
//   EMA_t = x_t * alpha               no bias adjustment)
//         + EMA_{t-1} * (1 - alpha)
//
// The first-value seed matters: MACD windows are short (20 closes against a
// span of 26), and an SMA-of-first-`span` seed would leave the series empty.

/// Compute the span-`span` EMA series of `values`.
///
/// One output value per input value; the first output equals the first
/// input. Returns an empty `Vec` when `span` is zero or the input is empty.
pub fn span_ema(values: &[f64], span: usize) -> Vec<f64> {
    if span == 0 || values.is_empty() {
        return Vec::new();
    }

    let alpha = 2.0 / (span as f64 + 1.0);

    let mut result = Vec::with_capacity(values.len());
    let mut prev = values[0];
    result.push(prev);

    for &value in &values[1..] {
        let ema = value * alpha + prev * (1.0 - alpha);
        result.push(ema);
        prev = ema;
    }

    result
}
