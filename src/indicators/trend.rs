// =============================================================================
// Momentum, price trend, volume trend
// =============================================================================
//
// Three cheap directional reads over the analysis window:
//
//   momentum     = current close - close `offset` points from the end
//   price_trend  = current close - first windowed close
//   volume_trend = Increasing when the latest volume exceeds its trailing
//                  average, else Decreasing (ties are Decreasing)

use crate::types::VolumeTrend;

/// Price change versus the close `offset` points from the end of the series
/// (offset 11 reads the 11th-from-last close, roughly ten trading days
/// back).
///
/// A series shorter than `offset` yields 0 — never an error.
pub fn momentum(closes: &[f64], offset: usize) -> f64 {
    if offset == 0 || closes.len() < offset {
        return 0.0;
    }
    closes[closes.len() - 1] - closes[closes.len() - offset]
}

/// Net move across the whole window: last close minus first close.
/// Empty input yields 0.
pub fn price_trend(closes: &[f64]) -> f64 {
    match (closes.first(), closes.last()) {
        (Some(first), Some(last)) => last - first,
        _ => 0.0,
    }
}

/// Compare the latest volume against its trailing `period`-day average.
///
/// A series shorter than `period` (no full average to compare against)
/// reads as `Decreasing`, matching the "ties lose" rule.
pub fn volume_trend(volumes: &[u64], period: usize) -> VolumeTrend {
    if period == 0 || volumes.len() < period {
        return VolumeTrend::Decreasing;
    }

    let window = &volumes[volumes.len() - period..];
    let avg = window.iter().map(|&v| v as f64).sum::<f64>() / period as f64;
    let last = volumes[volumes.len() - 1] as f64;

    if last > avg {
        VolumeTrend::Increasing
    } else {
        VolumeTrend::Decreasing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn momentum_known_case() {
        // 100..=119: 11th from last is 109 => 119 - 109 = 10.
        let closes: Vec<f64> = (100..120).map(|x| x as f64).collect();
        assert_eq!(momentum(&closes, 11), 10.0);
    }

    #[test]
    fn momentum_short_series_is_zero_not_an_error() {
        let closes: Vec<f64> = (1..=10).map(|x| x as f64).collect();
        assert_eq!(momentum(&closes, 11), 0.0);
        assert_eq!(momentum(&[], 11), 0.0);
    }

    #[test]
    fn price_trend_first_vs_last() {
        let closes: Vec<f64> = (100..120).map(|x| x as f64).collect();
        assert_eq!(price_trend(&closes), 19.0);
        assert_eq!(price_trend(&[5.0]), 0.0);
        assert_eq!(price_trend(&[]), 0.0);
    }

    #[test]
    fn volume_above_average_is_increasing() {
        let volumes = [1000, 1000, 1000, 1000, 5000];
        assert_eq!(volume_trend(&volumes, 5), VolumeTrend::Increasing);
    }

    #[test]
    fn constant_volume_ties_read_as_decreasing() {
        // Last equals the 5-day average — not strictly above it.
        let volumes = [1000; 20];
        assert_eq!(volume_trend(&volumes, 5), VolumeTrend::Decreasing);
    }

    #[test]
    fn short_volume_series_is_decreasing() {
        assert_eq!(volume_trend(&[1000, 2000], 5), VolumeTrend::Decreasing);
    }
}
