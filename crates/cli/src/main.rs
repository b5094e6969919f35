//! # laboratorial
//!
//! Command-line interface for labor-market indicator forecasts and text
//! sentiment analysis.

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use forecast_facade::{export, ForecastConfig, ForecastSeries, IndicatorCatalog};
use sentiment_facade::{analyze_text, SentimentResult};
use session::{Page, SessionState};
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

type CliResult<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "laboratorial")]
#[command(about = "Labor-market indicator forecasts and text sentiment", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List forecastable indicators
    Indicators,

    /// Forecast an indicator from its stored model
    Forecast {
        /// Indicator key (e.g. UR_Total)
        #[arg(short, long)]
        indicator: Option<String>,

        /// Number of months to forecast
        #[arg(short, long, default_value = "12")]
        months: usize,

        /// Write the forecast as CSV to this file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Directory holding model artifacts (overrides LABORATORIAL_MODEL_DIR)
        #[arg(long)]
        model_dir: Option<PathBuf>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Analyze the sentiment of a text
    Analyze {
        /// Text to analyze
        #[arg(short, long, conflicts_with = "input")]
        text: Option<String>,

        /// Read text from a file ("-" for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Print JSON instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// Start the REST API server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8080")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "0.0.0.0")]
        host: String,
    },
}

fn run_indicators() -> CliResult<()> {
    let default = IndicatorCatalog::default_key();
    println!("{:<12} {}", "KEY", "LABEL");
    for indicator in IndicatorCatalog::all() {
        let marker = if indicator.key == default { " (default)" } else { "" };
        println!("{:<12} {}{}", indicator.key.as_str(), indicator.label, marker);
    }
    Ok(())
}

fn print_forecast(series: &ForecastSeries) {
    let key = series.indicator();
    println!("{} ({})", IndicatorCatalog::label(key), key);
    println!("{:<12} {:>12}", "Period", "Value");
    for point in series.points() {
        println!("{:<12} {:>12.4}", point.period.to_string(), point.value);
    }

    let summary = series.summary();
    println!();
    println!("Mean: {:.2}", summary.mean);
    println!("Max:  {:.2}", summary.max);
    println!("Min:  {:.2}", summary.min);
}

fn run_forecast(
    indicator: Option<String>,
    months: usize,
    output: Option<PathBuf>,
    model_dir: Option<PathBuf>,
    json: bool,
) -> CliResult<()> {
    let mut config = ForecastConfig::from_env()?;
    if let Some(dir) = model_dir {
        config.model_dir = dir;
    }

    let mut state = SessionState::new();
    if let Some(key) = indicator {
        state.set_selection(IndicatorCatalog::parse(&key)?);
    }
    state.set_page(Page::Predict);

    let engine = config.build_engine();
    let key = state.get_selection();
    state.record_forecast(engine.forecast(key, months))?;
    state.set_page(Page::ResultsAnalysis);

    let Some(series) = state.get_forecast() else {
        bail!("no forecast recorded for {}", key);
    };

    if json {
        println!("{}", serde_json::to_string_pretty(series)?);
    } else {
        print_forecast(series);
    }

    if let Some(path) = output {
        let path = if path.is_dir() {
            path.join(export::export_filename(key))
        } else {
            path
        };
        let file =
            File::create(&path).with_context(|| format!("Failed to create {:?}", path))?;
        export::write_csv(series, file)?;
        println!("\nForecast written to {:?}", path);
    }

    Ok(())
}

fn read_text(text: Option<String>, input: Option<PathBuf>) -> CliResult<String> {
    match (text, input) {
        (Some(text), _) => Ok(text),
        (None, Some(path)) if path.as_os_str() == "-" => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        (None, Some(path)) => {
            fs::read_to_string(&path).with_context(|| format!("Failed to read {:?}", path))
        }
        (None, None) => bail!("provide --text or --input"),
    }
}

fn print_sentiment(result: &SentimentResult) {
    println!("Tokens ({}): {}", result.token_count, result.tokens.join(" "));
    println!(
        "Scores: neg {:.3}  neu {:.3}  pos {:.3}",
        result.scores.neg, result.scores.neu, result.scores.pos
    );
    println!("Compound: {:.2}", result.compound());
    println!("Sentiment: {}", result.label);
}

fn run_analyze(text: Option<String>, input: Option<PathBuf>, json: bool) -> CliResult<()> {
    let text = read_text(text, input)?;
    let result = analyze_text(&text)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_sentiment(&result);
    }
    Ok(())
}

fn main() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "laboratorial=warn,forecast_core=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Indicators => run_indicators(),

        Commands::Forecast {
            indicator,
            months,
            output,
            model_dir,
            json,
        } => run_forecast(indicator, months, output, model_dir, json),

        Commands::Analyze { text, input, json } => run_analyze(text, input, json),

        Commands::Serve { port, host } => {
            println!("Starting server on {}:{}", host, port);
            println!("Use the laboratorial-server binary (HOST={} PORT={})", host, port);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
