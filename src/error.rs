// =============================================================================
// Engine errors
// =============================================================================
//
// The signal engine raises exactly one kind of error: the supplied price
// history does not contain enough usable points to fill the analysis window.
// Every other anomaly (a missing fundamentals field, a zero-volume day, a
// flat price series) is absorbed by a defined numeric fallback instead.

use thiserror::Error;

/// The only error that originates inside the signal engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Fewer usable price points than the minimum analysis window.
    ///
    /// "Usable" means: finite positive close, one point per calendar date
    /// (duplicates are collapsed before the length check).
    #[error("insufficient price history: {actual} usable points, need at least {required}")]
    DataInsufficient { required: usize, actual: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_both_counts() {
        let err = EngineError::DataInsufficient {
            required: 20,
            actual: 7,
        };
        let msg = err.to_string();
        assert!(msg.contains("7"));
        assert!(msg.contains("20"));
    }
}
