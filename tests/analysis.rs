// =============================================================================
// End-to-end wire contract tests for the public API
// =============================================================================
//
// Feed the engine the same JSON the backend hands it and check the shape of
// what comes back: field names, verdict category strings, rounding, and the
// "N/A" markers for missing fundamentals.

use finsight_engine::{analyze_snapshot, EngineError, StockSnapshot};
use serde_json::json;

/// Build snapshot JSON with `n` climbing closes and partial fundamentals.
fn snapshot_json(n: usize) -> serde_json::Value {
    let history: Vec<serde_json::Value> = (0..n)
        .map(|i| {
            json!({
                "date": format!("2024-06-{:02}", i + 1),
                "close": 100.0 + i as f64,
                "volume": 1000,
            })
        })
        .collect();

    json!({
        "price_history": history,
        "fundamentals": {
            "eps": 4.5,
            "revenue_growth": 0.08,
            "pe_ratio": 18.0,
        }
    })
}

#[test]
fn report_has_the_documented_wire_shape() {
    let snapshot: StockSnapshot = serde_json::from_value(snapshot_json(20)).unwrap();
    let report = analyze_snapshot(&snapshot).unwrap();
    let wire = serde_json::to_value(report).unwrap();

    let technical = &wire["technical"];
    for field in [
        "verdict",
        "current_price",
        "rsi",
        "macd",
        "signal",
        "momentum",
        "price_trend",
        "volume_trend",
        "volatility",
        "sma_5",
        "sma_10",
    ] {
        assert!(
            !technical[field].is_null(),
            "technical.{field} missing from wire format"
        );
    }

    // The worked numbers for a 100..=119 climb.
    assert_eq!(technical["sma_5"], json!(117.0));
    assert_eq!(technical["sma_10"], json!(114.5));
    assert_eq!(technical["price_trend"], json!(19.0));
    assert_eq!(technical["momentum"], json!(10.0));
    assert_eq!(technical["volume_trend"], json!("Decreasing"));
    // RSI saturates on an all-gain run, and the overbought band outranks
    // the bullish score branch.
    assert_eq!(technical["rsi"], json!(100.0));
    assert_eq!(technical["verdict"], json!("Sell - Overbought"));

    let fundamental = &wire["fundamental"];
    assert_eq!(fundamental["eps"], json!(4.5));
    assert_eq!(fundamental["pe_ratio"], json!(18.0));
    // Absent fields surface as the explicit marker, never null or zero.
    assert_eq!(fundamental["debt_to_equity"], json!("N/A"));
    assert_eq!(fundamental["return_on_equity"], json!("N/A"));
    assert_eq!(fundamental["dividend_yield"], json!("N/A"));
    // eps > 0, growth > 5%, P/E in band => score 3.
    assert_eq!(fundamental["verdict"], json!("Hold - Moderately Strong"));
}

#[test]
fn nineteen_points_are_rejected() {
    let snapshot: StockSnapshot = serde_json::from_value(snapshot_json(19)).unwrap();
    let err = analyze_snapshot(&snapshot).unwrap_err();
    assert_eq!(
        err,
        EngineError::DataInsufficient {
            required: 20,
            actual: 19
        }
    );
}

#[test]
fn longer_histories_use_only_the_trailing_window() {
    // 25 points: the leading 5 must not influence the result.
    let full: StockSnapshot = serde_json::from_value(snapshot_json(25)).unwrap();
    let mut trimmed = full.clone();
    trimmed.price_history.drain(..5);

    let a = analyze_snapshot(&full).unwrap();
    let b = analyze_snapshot(&trimmed).unwrap();
    assert_eq!(a, b);
}

#[test]
fn identical_input_yields_identical_json() {
    let snapshot: StockSnapshot = serde_json::from_value(snapshot_json(20)).unwrap();
    let a = serde_json::to_string(&analyze_snapshot(&snapshot).unwrap()).unwrap();
    let b = serde_json::to_string(&analyze_snapshot(&snapshot).unwrap()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn missing_fundamentals_object_scores_zero() {
    let mut wire = snapshot_json(20);
    wire.as_object_mut().unwrap().remove("fundamentals");
    let snapshot: StockSnapshot = serde_json::from_value(wire).unwrap();
    let report = analyze_snapshot(&snapshot).unwrap();
    assert_eq!(
        serde_json::to_value(report.fundamental.verdict).unwrap(),
        json!("Sell - Weak Fundamentals")
    );
}
