// =============================================================================
// FinSight Signal Engine
// =============================================================================

//! Pure, stateless stock signal engine.
//!
//! Given a trailing daily price/volume history and a record of fundamental
//! ratios, [`analyze`] computes the technical indicator snapshot (SMA-5/10,
//! Wilder RSI-14, MACD 12/26 with a 9-span signal line, momentum, price and
//! volume trend, annualized volatility), runs the verdict cascades, and
//! returns an [`AnalysisReport`] with indicators rounded to two decimals.
//!
//! The engine performs no I/O and holds no state: data retrieval, transport,
//! persistence, and narrative generation all belong to the caller. The only
//! error it raises is [`EngineError::DataInsufficient`], for histories with
//! fewer than 20 usable points.
//!
//! ```
//! use chrono::{Days, NaiveDate};
//! use finsight_engine::{analyze, Fundamentals, PricePoint};
//!
//! let base = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let history: Vec<PricePoint> = (0..20)
//!     .map(|i| PricePoint {
//!         date: base + Days::new(i),
//!         close: 100.0 + i as f64,
//!         volume: 1_000,
//!     })
//!     .collect();
//!
//! let report = analyze(&history, &Fundamentals::default()).unwrap();
//! assert_eq!(report.technical.sma_5, 117.0);
//! ```

pub mod engine;
pub mod error;
pub mod indicators;
pub mod signals;
pub mod types;
pub mod window;

pub use engine::{analyze, analyze_snapshot, AnalysisReport, FundamentalReport, TechnicalReport};
pub use error::EngineError;
pub use signals::fundamental::FundamentalVerdict;
pub use signals::technical::TechnicalVerdict;
pub use types::{Fundamentals, Metric, PricePoint, StockSnapshot, TechnicalIndicators, VolumeTrend};
