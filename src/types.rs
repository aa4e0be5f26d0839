// =============================================================================
// Shared types used across the FinSight signal engine
// =============================================================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize, Serializer};

/// One day of price history: date, closing price, traded volume.
///
/// Histories are supplied sorted ascending by date. The close must be a
/// finite positive number; points that violate this are treated as unusable
/// and dropped during windowing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub close: f64,
    pub volume: u64,
}

/// Fundamental ratios for a single company.
///
/// Every field is optional: upstream data providers routinely omit or
/// mangle individual ratios, and a missing field simply contributes nothing
/// to the fundamental score. `None` means "not available" — it is never
/// coerced to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Fundamentals {
    #[serde(default)]
    pub eps: Option<f64>,
    /// Fractional, e.g. 0.05 = 5% year-over-year revenue growth.
    #[serde(default)]
    pub revenue_growth: Option<f64>,
    #[serde(default)]
    pub pe_ratio: Option<f64>,
    #[serde(default)]
    pub debt_to_equity: Option<f64>,
    /// Fractional, e.g. 0.15 = 15%.
    #[serde(default)]
    pub return_on_equity: Option<f64>,
    /// Fractional, e.g. 0.02 = 2%.
    #[serde(default)]
    pub dividend_yield: Option<f64>,
}

/// The single input of the engine: a trailing price history plus the
/// fundamentals record, exactly as the retrieval pipeline hands it over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockSnapshot {
    pub price_history: Vec<PricePoint>,
    #[serde(default)]
    pub fundamentals: Fundamentals,
}

/// Whether the latest day's volume sits above or below its trailing average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeTrend {
    Increasing,
    Decreasing,
}

impl std::fmt::Display for VolumeTrend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Increasing => write!(f, "Increasing"),
            Self::Decreasing => write!(f, "Decreasing"),
        }
    }
}

/// Full-precision technical indicator snapshot, derived from the trailing
/// 20-point window. Immutable once computed; rounding happens only in the
/// outgoing report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TechnicalIndicators {
    pub current_price: f64,
    pub sma_5: f64,
    pub sma_10: f64,
    /// 0–100 oscillator.
    pub rsi: f64,
    pub macd: f64,
    pub signal: f64,
    pub momentum: f64,
    pub price_trend: f64,
    pub volume_trend: VolumeTrend,
    /// Annualized, in percent.
    pub volatility: f64,
}

/// A fundamentals metric in the outgoing report: either a number or the
/// explicit `"N/A"` marker the frontend expects for missing data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Metric {
    Value(f64),
    NotAvailable,
}

impl From<Option<f64>> for Metric {
    fn from(value: Option<f64>) -> Self {
        match value {
            Some(v) => Self::Value(v),
            None => Self::NotAvailable,
        }
    }
}

impl Serialize for Metric {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Value(v) => serializer.serialize_f64(*v),
            Self::NotAvailable => serializer.serialize_str("N/A"),
        }
    }
}
