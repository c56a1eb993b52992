//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::adapters::csv_adapter::{CsvHoldingsAdapter, CsvMarketAdapter};
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::sample_market_adapter::SampleMarketAdapter;
use crate::adapters::text_report;
use crate::adapters::writer_reply_adapter::WriterReplyAdapter;
use crate::domain::aggregate::top_pick;
use crate::domain::chunk::MAX_MESSAGE_LEN;
use crate::domain::config_validation::{parse_max_message_len, parse_seed, validate_config};
use crate::domain::error::LeofiError;
use crate::domain::portfolio::{Holding, Portfolio};
use crate::domain::profile::pick_preset_profile;
use crate::domain::pulse::build_market_pulse;
use crate::domain::sentiment::{analyze, analyze_all};
use crate::domain::simulation::{AssetLookup, find_snapshot, simulate_investment, validate_amount};
use crate::domain::universe::{AssetUniverse, parse_symbols};
use crate::ports::config_port::ConfigPort;
use crate::ports::market_data_port::{HoldingsPort, MarketDataPort};
use crate::ports::reply_port::ReplyPort;

#[derive(Parser, Debug)]
#[command(name = "leofi", about = "Market sentiment and trade recommendation engine")]
pub struct Cli {
    /// INI configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
    /// Market snapshot CSV (overrides [data] snapshots_path)
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,
    /// Seed for the random source (overrides [engine] seed)
    #[arg(long, global = true)]
    pub seed: Option<u64>,
    /// Maximum characters per reply message (overrides [reply] max_message_len)
    #[arg(long, global = true)]
    pub max_len: Option<usize>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze every asset and print the market pulse
    Analyze {
        #[arg(long)]
        json: bool,
    },
    /// Recommend the strongest bullish token
    Recommend,
    /// Suggest a preset trader profile
    Profile,
    /// Simulate an investment in one asset
    Simulate {
        #[arg(short, long)]
        symbol: String,
        #[arg(short, long)]
        amount: f64,
    },
    /// Tally holdings given as Asset,Amount,BuyPrice
    Portfolio {
        #[arg(long)]
        holdings: Option<PathBuf>,
        #[arg(long = "holding")]
        lines: Vec<String>,
    },
}

/// Values resolved from the config file and CLI overrides.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub snapshots_path: Option<PathBuf>,
    pub holdings_path: Option<PathBuf>,
    pub seed: Option<u64>,
    pub universe: AssetUniverse,
    pub max_message_len: usize,
    pub json: bool,
}

pub fn run(cli: Cli) -> ExitCode {
    let stdout = io::stdout().lock();
    match execute(cli, stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            (&e).into()
        }
    }
}

/// Runs one command, writing reply text to `out`.
pub fn execute<W: io::Write>(cli: Cli, out: W) -> Result<(), LeofiError> {
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => FileConfigAdapter::empty(),
    };
    validate_config(&config)?;
    let settings = build_settings(&config, &cli)?;

    let mut rng = build_rng(settings.seed);
    let mut reply = WriterReplyAdapter::with_max_len(out, settings.max_message_len);
    let market = market_source(settings.snapshots_path.as_deref());

    match cli.command {
        Command::Analyze { json } => run_analyze(
            market.as_ref(),
            &settings.universe,
            &mut rng,
            json || settings.json,
            &mut reply,
        ),
        Command::Recommend => {
            run_recommend(market.as_ref(), &settings.universe, &mut rng, &mut reply)
        }
        Command::Profile => run_profile(&mut rng, &mut reply),
        Command::Simulate { symbol, amount } => run_simulate(
            market.as_ref(),
            &settings.universe,
            &mut rng,
            &symbol,
            amount,
            &mut reply,
        ),
        Command::Portfolio { holdings, lines } => {
            let holdings = resolve_holdings(
                &lines,
                holdings.as_deref().or(settings.holdings_path.as_deref()),
            )?;
            run_portfolio(holdings, &mut reply)
        }
    }
}

pub fn load_config(path: &Path) -> Result<FileConfigAdapter, LeofiError> {
    tracing::info!("loading config from {}", path.display());
    FileConfigAdapter::from_file(path).map_err(|e| LeofiError::ConfigParse {
        file: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Merges config values with CLI flags; flags win.
pub fn build_settings(config: &dyn ConfigPort, cli: &Cli) -> Result<Settings, LeofiError> {
    let universe = match config.get_string("engine", "universe") {
        Some(list) => AssetUniverse::new(parse_symbols(&list)?),
        None => AssetUniverse::default(),
    };

    let max_message_len = match cli.max_len {
        Some(0) => {
            return Err(LeofiError::invalid_input(
                "--max-len must be greater than zero",
            ));
        }
        Some(n) => n,
        None => parse_max_message_len(config)?.unwrap_or(MAX_MESSAGE_LEN),
    };

    Ok(Settings {
        snapshots_path: cli
            .data
            .clone()
            .or_else(|| config.get_string("data", "snapshots_path").map(PathBuf::from)),
        holdings_path: config.get_string("data", "holdings_path").map(PathBuf::from),
        seed: match cli.seed {
            Some(seed) => Some(seed),
            None => parse_seed(config)?,
        },
        universe,
        max_message_len,
        json: config.get_bool("report", "json", false),
    })
}

pub fn build_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            tracing::debug!(seed, "seeded random source");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    }
}

/// CSV file when a path is configured, the built-in sample set otherwise.
pub fn market_source(snapshots_path: Option<&Path>) -> Box<dyn MarketDataPort> {
    match snapshots_path {
        Some(path) => Box::new(CsvMarketAdapter::new(path.to_path_buf())),
        None => Box::new(SampleMarketAdapter),
    }
}

pub fn run_analyze<R: Rng + ?Sized>(
    market: &dyn MarketDataPort,
    universe: &AssetUniverse,
    rng: &mut R,
    json: bool,
    reply: &mut dyn ReplyPort,
) -> Result<(), LeofiError> {
    let snapshots = market.fetch_snapshots()?;
    let pulse = build_market_pulse(&snapshots, universe, rng)?;

    let text = if json {
        serde_json::to_string_pretty(&pulse)?
    } else {
        text_report::market_pulse(&pulse)
    };
    reply.send_chunked(&text)?;
    Ok(())
}

pub fn run_recommend<R: Rng + ?Sized>(
    market: &dyn MarketDataPort,
    universe: &AssetUniverse,
    rng: &mut R,
    reply: &mut dyn ReplyPort,
) -> Result<(), LeofiError> {
    let snapshots = market.fetch_snapshots()?;
    let results = analyze_all(&snapshots, universe, rng)?;
    reply.send_chunked(&text_report::token_recommendation(top_pick(&results)))?;
    Ok(())
}

pub fn run_profile<R: Rng + ?Sized>(
    rng: &mut R,
    reply: &mut dyn ReplyPort,
) -> Result<(), LeofiError> {
    let profile = pick_preset_profile(rng);
    reply.send_chunked(&text_report::preset_profile(&profile))?;
    Ok(())
}

pub fn run_simulate<R: Rng + ?Sized>(
    market: &dyn MarketDataPort,
    universe: &AssetUniverse,
    rng: &mut R,
    symbol: &str,
    amount: f64,
    reply: &mut dyn ReplyPort,
) -> Result<(), LeofiError> {
    validate_amount(amount)?;
    let snapshots = market.fetch_snapshots()?;
    let snapshot = match find_snapshot(&snapshots, symbol) {
        AssetLookup::Found(snapshot) => snapshot,
        AssetLookup::NotFound { symbol, available } => {
            tracing::warn!(%symbol, "asset not in market data");
            reply.send_chunked(&text_report::asset_not_found(&symbol, &available))?;
            return Ok(());
        }
    };

    let analysis = analyze(snapshot, universe, rng)?;
    let outcome = simulate_investment(amount, &analysis)?;
    reply.send_chunked(&text_report::investment_simulation(&analysis, &outcome))?;
    Ok(())
}

/// `--holding` lines take precedence over a holdings file.
pub fn resolve_holdings(
    lines: &[String],
    holdings_path: Option<&Path>,
) -> Result<Vec<Holding>, LeofiError> {
    if !lines.is_empty() {
        return lines.iter().map(|l| Holding::parse_line(l)).collect();
    }
    match holdings_path {
        Some(path) => CsvHoldingsAdapter::new(path.to_path_buf()).fetch_holdings(),
        None => Ok(Vec::new()),
    }
}

pub fn run_portfolio(holdings: Vec<Holding>, reply: &mut dyn ReplyPort) -> Result<(), LeofiError> {
    let mut portfolio = Portfolio::new();
    for holding in holdings {
        portfolio.add(holding);
    }
    reply.send_chunked(&text_report::portfolio(&portfolio))?;
    Ok(())
}
