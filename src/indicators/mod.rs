// =============================================================================
// Technical Indicators Module
// =============================================================================
//
// Pure, side-effect-free implementations of the indicators behind the signal
// engine. Functions that can run out of data return `Option<T>` so callers
// are forced to handle insufficient-data and numerical-edge-case scenarios.

pub mod ema;
pub mod macd;
pub mod rsi;
pub mod sma;
pub mod trend;
pub mod volatility;
