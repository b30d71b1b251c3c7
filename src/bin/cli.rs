//! Black-Scholes calculator CLI
//!
//! Usage:
//!   bs-calc SYMBOL [--json]
//!   bs-calc --csv FILE --spot PRICE --rate PCT [SYMBOL] [--premium PCT] [--json]
//!
//! `--rate` is the raw 10-year treasury yield in percent; the risk premium
//! (default 1.0) is subtracted before pricing.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use lognormal_options::config::DEFAULT_RISK_PREMIUM_PCT;
use lognormal_options::prelude::*;
use tracing_subscriber::EnvFilter;

/// Lognormal forecast and Black-Scholes price ladder for one stock
#[derive(Parser, Debug)]
#[command(name = "bs-calc", version, about)]
struct Args {
    /// Ticker symbol (letters only)
    #[arg(required_unless_present = "csv")]
    symbol: Option<String>,

    /// Weekly history CSV to model offline instead of fetching
    #[arg(long, requires_all = ["spot", "rate"])]
    csv: Option<PathBuf>,

    /// Current stock price (with --csv)
    #[arg(long, requires = "csv")]
    spot: Option<f64>,

    /// Raw 10-year treasury yield in percent (with --csv)
    #[arg(long, requires = "csv", allow_negative_numbers = true)]
    rate: Option<f64>,

    /// Risk premium in percent subtracted from the treasury yield
    #[arg(long, default_value_t = DEFAULT_RISK_PREMIUM_PCT, allow_negative_numbers = true)]
    premium: f64,

    /// Print the run as JSON
    #[arg(long)]
    json: bool,
}

fn run(args: Args) -> ModelResult<()> {
    let today = chrono::Local::now().date_naive();
    let pricing = PricingConfig {
        risk_premium_pct: args.premium,
        ..Default::default()
    };
    let model = ModelConfig::default();

    let run = match (&args.csv, args.spot, args.rate) {
        (Some(path), Some(spot), Some(rate)) => {
            let symbol = args.symbol.as_deref().unwrap_or("CSV");
            let source = StaticSource::new()
                .with_history(symbol, read_weekly_csv(path)?)
                .with_spot(symbol, spot)
                .with_treasury_yield(rate);
            run_model_with_config(&source, symbol, today, &model, &pricing)?
        }
        _ => {
            let symbol = args
                .symbol
                .as_deref()
                .ok_or_else(|| ModelError::invalid_input("Enter a stock symbol"))?;
            let client = YahooClient::new()?;
            run_model_with_config(&client, symbol, today, &model, &pricing)?
        }
    };

    if args.json {
        println!("{}", run.to_json()?);
    } else {
        print_run(&run);
    }

    Ok(())
}

fn print_run(run: &ModelRun) {
    let snapshot = &run.snapshot;

    println!("Lognormal Stock Model: {}", snapshot.symbol());
    println!("==========================\n");
    println!("  Weeks modeled:     {}", snapshot.historic().len());
    println!("  Annual mean:       {:.4}", snapshot.annual_mean());
    println!("  Annual volatility: {:.4}", snapshot.annual_volatility());
    if let Some((low, high)) = snapshot.price_range() {
        println!("  Chart range:       {:.2} - {:.2}", low, high);
    }

    println!("\nForecast (every 4th week):");
    println!("  {:<12} {:>12} {:>12} {:>12}", "Week", "Lower", "Expected", "Upper");
    for point in snapshot.forecast().iter().skip(3).step_by(4) {
        println!(
            "  {:<12} {:>12.2} {:>12.2} {:>12.2}",
            point.date, point.lower_bound, point.expected, point.upper_bound
        );
    }

    println!("\nOption Prices (spot {:.2}, force {:.5}):", run.table.spot, run.table.rate);
    println!("  {:<12} {:>10} {:>12} {:>12}", "Expiration", "Strike", "Call Price", "Put Price");
    for row in run.rows() {
        println!(
            "  {:<12} {:>10.2} {:>12.4} {:>12.4}",
            row.expiration.format("%m/%d/%Y"),
            row.strike,
            row.call_price,
            row.put_price
        );
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_only() {
        let args = Args::try_parse_from(["bs-calc", "GOOG"]).unwrap();
        assert_eq!(args.symbol.as_deref(), Some("GOOG"));
        assert!(args.csv.is_none());
        assert_eq!(args.premium, DEFAULT_RISK_PREMIUM_PCT);
        assert!(!args.json);
    }

    #[test]
    fn test_csv_mode() {
        let args = Args::try_parse_from([
            "bs-calc", "--csv", "goog.csv", "--spot", "171.5", "--rate", "4.3", "--premium", "0.5",
            "--json",
        ])
        .unwrap();
        assert_eq!(args.csv, Some(PathBuf::from("goog.csv")));
        assert_eq!(args.spot, Some(171.5));
        assert_eq!(args.rate, Some(4.3));
        assert_eq!(args.premium, 0.5);
        assert!(args.json);
    }

    #[test]
    fn test_csv_needs_spot_and_rate() {
        assert!(Args::try_parse_from(["bs-calc", "--csv", "goog.csv", "--spot", "171.5"]).is_err());
        assert!(Args::try_parse_from(["bs-calc", "--csv", "goog.csv", "--rate", "4.3"]).is_err());
        assert!(Args::try_parse_from(["bs-calc", "GOOG", "--spot", "171.5"]).is_err());
    }

    #[test]
    fn test_rejects_missing_or_extra_symbol() {
        assert!(Args::try_parse_from(["bs-calc"]).is_err());
        assert!(Args::try_parse_from(["bs-calc", "GOOG", "MSFT"]).is_err());
    }
}
