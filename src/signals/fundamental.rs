// =============================================================================
// Fundamental verdict — scoring over optional ratios
// =============================================================================
//
// Score = number of conditions satisfied (0..=6), each evaluated only when
// its field is present:
//   eps > 0, revenue growth > 5%, 10 <= P/E <= 25, debt-to-equity < 1,
//   return on equity > 15%, dividend yield > 2%.
//
// Verdict: score >= 5 => Buy, score >= 3 => Hold, else Sell. A missing
// field contributes nothing — an all-missing record scores 0 and lands on
// "Sell - Weak Fundamentals". Missing data never raises an error.

use serde::{Deserialize, Serialize};

use crate::types::Fundamentals;

/// Closed set of fundamental verdict categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FundamentalVerdict {
    #[serde(rename = "Buy - Strong Fundamentals")]
    Strong,
    #[serde(rename = "Hold - Moderately Strong")]
    ModeratelyStrong,
    #[serde(rename = "Sell - Weak Fundamentals")]
    Weak,
}

impl std::fmt::Display for FundamentalVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::Strong => "Buy - Strong Fundamentals",
            Self::ModeratelyStrong => "Hold - Moderately Strong",
            Self::Weak => "Sell - Weak Fundamentals",
        };
        write!(f, "{text}")
    }
}

/// Count of fundamental conditions satisfied (0..=6); absent fields do not
/// contribute.
pub fn fundamental_score(fundamentals: &Fundamentals) -> u8 {
    let conditions = [
        fundamentals.eps.is_some_and(|v| v > 0.0),
        fundamentals.revenue_growth.is_some_and(|v| v > 0.05),
        fundamentals.pe_ratio.is_some_and(|v| (10.0..=25.0).contains(&v)),
        fundamentals.debt_to_equity.is_some_and(|v| v < 1.0),
        fundamentals.return_on_equity.is_some_and(|v| v > 0.15),
        fundamentals.dividend_yield.is_some_and(|v| v > 0.02),
    ];
    conditions.iter().filter(|&&met| met).count() as u8
}

/// Map the fundamental score onto its verdict band.
pub fn fundamental_verdict(fundamentals: &Fundamentals) -> FundamentalVerdict {
    match fundamental_score(fundamentals) {
        5..=6 => FundamentalVerdict::Strong,
        3..=4 => FundamentalVerdict::ModeratelyStrong,
        _ => FundamentalVerdict::Weak,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strong() -> Fundamentals {
        Fundamentals {
            eps: Some(5.2),
            revenue_growth: Some(0.12),
            pe_ratio: Some(18.0),
            debt_to_equity: Some(0.4),
            return_on_equity: Some(0.22),
            dividend_yield: Some(0.03),
        }
    }

    #[test]
    fn all_missing_scores_zero_and_sells() {
        let f = Fundamentals::default();
        assert_eq!(fundamental_score(&f), 0);
        assert_eq!(fundamental_verdict(&f), FundamentalVerdict::Weak);
    }

    #[test]
    fn all_strong_scores_six_and_buys() {
        assert_eq!(fundamental_score(&strong()), 6);
        assert_eq!(fundamental_verdict(&strong()), FundamentalVerdict::Strong);
    }

    #[test]
    fn pe_band_is_inclusive_on_both_ends() {
        let mut f = Fundamentals {
            pe_ratio: Some(10.0),
            ..Fundamentals::default()
        };
        assert_eq!(fundamental_score(&f), 1);
        f.pe_ratio = Some(25.0);
        assert_eq!(fundamental_score(&f), 1);
        f.pe_ratio = Some(25.01);
        assert_eq!(fundamental_score(&f), 0);
    }

    #[test]
    fn thresholds_are_strict() {
        // Exactly-at-threshold values do not count.
        let f = Fundamentals {
            eps: Some(0.0),
            revenue_growth: Some(0.05),
            return_on_equity: Some(0.15),
            dividend_yield: Some(0.02),
            debt_to_equity: Some(1.0),
            pe_ratio: None,
        };
        assert_eq!(fundamental_score(&f), 0);
    }

    #[test]
    fn three_conditions_hold() {
        let f = Fundamentals {
            eps: Some(1.0),
            revenue_growth: Some(0.06),
            debt_to_equity: Some(0.5),
            ..Fundamentals::default()
        };
        assert_eq!(fundamental_score(&f), 3);
        assert_eq!(
            fundamental_verdict(&f),
            FundamentalVerdict::ModeratelyStrong
        );
    }

    #[test]
    fn negative_ratios_do_not_count() {
        let f = Fundamentals {
            eps: Some(-2.0),
            revenue_growth: Some(-0.10),
            debt_to_equity: Some(3.0),
            ..Fundamentals::default()
        };
        assert_eq!(fundamental_score(&f), 0);
        assert_eq!(fundamental_verdict(&f), FundamentalVerdict::Weak);
    }

    #[test]
    fn verdict_serializes_to_category_strings() {
        assert_eq!(
            serde_json::to_value(FundamentalVerdict::Weak).unwrap(),
            serde_json::json!("Sell - Weak Fundamentals")
        );
        assert_eq!(
            FundamentalVerdict::Strong.to_string(),
            "Buy - Strong Fundamentals"
        );
    }
}
