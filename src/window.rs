// =============================================================================
// Windowing & validation
// =============================================================================
//
// Every indicator is computed over the trailing 20-point window of daily
// closes. This module turns an arbitrary caller-supplied history into that
// window:
//
//   1. Drop unusable points (non-finite or non-positive close).
//   2. Stable-sort ascending by date.
//   3. Collapse duplicate dates, keeping the entry supplied last.
//   4. Require at least 20 usable points, then trim to the tail 20.
//
// Anything shorter is rejected with `EngineError::DataInsufficient` — the
// engine's only error. The input slice is never mutated.

use tracing::{debug, warn};

use crate::error::EngineError;
use crate::types::PricePoint;

/// Number of trailing points every analysis runs on.
pub const WINDOW_LEN: usize = 20;

/// Select the trailing analysis window from `history`.
///
/// Returns the last [`WINDOW_LEN`] usable points sorted ascending by date,
/// or `DataInsufficient` when fewer remain after cleanup.
pub fn trailing_window(history: &[PricePoint]) -> Result<Vec<PricePoint>, EngineError> {
    let mut points: Vec<PricePoint> = history
        .iter()
        .copied()
        .filter(|p| p.close.is_finite() && p.close > 0.0)
        .collect();

    // Stable sort keeps supplied order among equal dates, so the collapse
    // below retains the most recently supplied entry per date.
    points.sort_by_key(|p| p.date);

    let mut deduped: Vec<PricePoint> = Vec::with_capacity(points.len());
    for point in points {
        match deduped.last_mut() {
            Some(prev) if prev.date == point.date => *prev = point,
            _ => deduped.push(point),
        }
    }

    if deduped.len() < WINDOW_LEN {
        warn!(
            usable = deduped.len(),
            required = WINDOW_LEN,
            "price history rejected: not enough usable points"
        );
        return Err(EngineError::DataInsufficient {
            required: WINDOW_LEN,
            actual: deduped.len(),
        });
    }

    let window = deduped.split_off(deduped.len() - WINDOW_LEN);
    debug!(
        from = %window[0].date,
        to = %window[WINDOW_LEN - 1].date,
        "trailing window selected"
    );
    Ok(window)
}
