//! End-to-end model runs against an in-memory data source

use chrono::{Datelike, NaiveDate, Weekday};
use lognormal_options::core::calendar::{add_days, add_weeks};
use lognormal_options::prelude::*;

fn today() -> NaiveDate {
    // Thursday
    NaiveDate::from_ymd_opt(2024, 6, 13).unwrap()
}

/// 52 weeks ending the Monday of `today`'s week, newest first like a
/// quote export
fn weekly_export() -> Vec<HistoricPoint> {
    let last_monday = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
    let mut rows: Vec<HistoricPoint> = (0..52)
        .map(|i| {
            let date = add_weeks(last_monday, -(51 - i));
            let wiggle = if i % 3 == 0 { 1.03 } else { 0.99 };
            let close = 80.0 * (1.0 + 0.005 * i as f64) * wiggle;
            HistoricPoint::new(date, close * 0.995, close * 1.02, close * 0.97, close)
        })
        .collect();
    rows.reverse();
    rows
}

fn source() -> StaticSource {
    StaticSource::new()
        .with_history("ACME", weekly_export())
        .with_spot("ACME", 101.37)
        .with_treasury_yield(4.25)
}

#[test]
fn test_full_run() {
    let run = run_model(&source(), "acme", today()).unwrap();
    let snapshot = &run.snapshot;

    assert_eq!(snapshot.symbol(), "ACME");
    assert_eq!(snapshot.historic().len(), 52);
    assert!(snapshot
        .historic()
        .windows(2)
        .all(|w| (w[1].date - w[0].date).num_days() == 7));
    assert!(snapshot.historic().iter().all(|p| p.date.weekday() == Weekday::Mon));

    let forecast = snapshot.forecast();
    assert_eq!(forecast.len(), 52);
    assert_eq!(forecast[0].date, add_days(snapshot.historic()[51].date, 7));
    assert!(forecast.iter().all(|p| p.is_ordered()));

    let rows = run.rows();
    assert_eq!(rows.len(), 112);
    assert_eq!(rows[0].expiration, NaiveDate::from_ymd_opt(2024, 6, 14).unwrap());
    assert_eq!(rows[3].strike, 101.37);
    assert!(rows.iter().all(|r| r.call_price >= 0.0 && r.put_price >= 0.0));

    let expected_rate = (1.0325_f64).ln();
    assert!((run.table.rate - expected_rate).abs() < 1e-15);
    assert!(run.table.max_parity_error() < 1e-9);
}

#[test]
fn test_rounded_rows_respect_parity() {
    let run = run_model(&source(), "ACME", today()).unwrap();
    let table = &run.table;

    for (i, row) in run.rows().iter().enumerate() {
        let time = table.times[i / 7];
        let strike = table.ladder.strikes[i % 7];
        let gap = table.spot - strike * (-table.rate * time).exp();
        assert!((row.call_price - row.put_price - gap).abs() < 2e-4);
    }
}

#[test]
fn test_fetch_errors_pass_through() {
    let no_history = StaticSource::new().with_spot("ACME", 100.0).with_treasury_yield(4.0);
    let err = run_model(&no_history, "ACME", today()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DataFetch);

    let no_rate = StaticSource::new()
        .with_history("ACME", weekly_export())
        .with_spot("ACME", 100.0);
    let err = run_model(&no_rate, "ACME", today()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DataFetch);
}

#[test]
fn test_short_history_aborts_run() {
    let short: Vec<HistoricPoint> = weekly_export().into_iter().take(9).collect();
    let source = StaticSource::new()
        .with_history("ACME", short)
        .with_spot("ACME", 100.0)
        .with_treasury_yield(4.0);

    let err = run_model(&source, "ACME", today()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DataIntegrity);
}

#[test]
fn test_invalid_symbol() {
    let err = run_model(&source(), "AC-ME", today()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

#[test]
fn test_bad_spot_is_computation_error() {
    let source = StaticSource::new()
        .with_history("ACME", weekly_export())
        .with_spot("ACME", -5.0)
        .with_treasury_yield(4.0);

    let err = run_model(&source, "ACME", today()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Computation);
}

#[test]
fn test_run_serializes() {
    let run = run_model(&source(), "ACME", today()).unwrap();
    let text = run.to_json().unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();

    assert_eq!(json["snapshot"]["symbol"], "ACME");
    assert_eq!(json["snapshot"]["forecast"].as_array().unwrap().len(), 52);
    assert_eq!(json["table"]["ladder"]["expirations"].as_array().unwrap().len(), 16);
}

#[test]
fn test_csv_to_snapshot() {
    let mut csv = String::from("Date,Open,High,Low,Close,Volume,Adj Close\n");
    for p in weekly_export() {
        csv.push_str(&format!(
            "{},{},{},{},{},1000,{}\n",
            p.date, p.open, p.high, p.low, p.close, p.close
        ));
    }

    let raw = parse_weekly_csv(&csv).unwrap();
    let snapshot = build_snapshot("ACME", &raw).unwrap();
    let direct = build_snapshot("ACME", &weekly_export()).unwrap();

    assert_eq!(snapshot.annual_mean(), direct.annual_mean());
    assert_eq!(snapshot.annual_volatility(), direct.annual_volatility());
}
