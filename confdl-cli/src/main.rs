use anyhow::{Context, Result, bail};
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use clap::{Args, Parser, Subcommand};
use confdl_core::{Clock, Conference, SortOrder, SystemClock, UrgencyTally, ViewState, select_upcoming};
use confdl_fetch::{ConferenceFetcher, DirSource, HttpSource};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod render;
mod state;

use config::{Config, config_path, init_config, load_config};

#[derive(Parser, Debug)]
#[command(
    name = "confdl",
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("CONFDL_BUILD_SHA"), ")"),
    about = "Upcoming academic conference submission deadlines, normalized to KST"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch the tracked conferences and list upcoming deadlines
    List(ListArgs),

    /// Print the tracked conference list with category labels
    Tracked,

    /// Config file helpers
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Args, Debug)]
struct ListArgs {
    /// Only show this category label (e.g. "Security")
    #[arg(long)]
    category: Option<String>,

    /// Sort order: deadline | name
    #[arg(long, default_value = "deadline")]
    sort: SortOrder,

    /// Limit number of conferences printed
    #[arg(long)]
    limit: Option<usize>,

    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,

    /// Pretend it is this KST time ("YYYY-MM-DD[ HH:MM[:SS]]")
    #[arg(long)]
    now: Option<String>,

    /// Read documents from a local dataset checkout instead of HTTP
    #[arg(long)]
    from_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write the default config.toml (no-op if present)
    Init,
    /// Print where config.toml is looked up
    Path,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::List(args) => list(args).await?,
        Command::Tracked => {
            let cfg = load_config()?;
            for t in &cfg.tracked {
                println!("{:<20} {}", t.to_string(), cfg.categories.label(&t.sub));
            }
        }
        Command::Config { command } => match command {
            ConfigCommand::Init => init_config()?,
            ConfigCommand::Path => println!("{}", config_path()?.display()),
        },
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Parse a `--now` override as KST wall-clock time. A bare date means midnight.
fn parse_now(s: &str) -> Result<NaiveDateTime> {
    let s = s.trim();
    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt);
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .with_context(|| format!("invalid --now '{s}' (expected YYYY-MM-DD[ HH:MM[:SS]])"))
}

async fn collect(cfg: &Config, from_dir: Option<PathBuf>) -> Result<Vec<Conference>> {
    let conferences = match from_dir {
        Some(dir) => {
            if !dir.is_dir() {
                bail!("dataset directory does not exist: {}", dir.display());
            }
            info!("reading dataset from {}", dir.display());
            ConferenceFetcher::new(DirSource::new(dir, &cfg.source.extension))
                .collect(&cfg.tracked, &cfg.categories)
                .await
        }
        None => {
            info!("fetching dataset from {}", cfg.source.base_url);
            ConferenceFetcher::new(HttpSource::new(&cfg.source.base_url, &cfg.source.extension))
                .collect(&cfg.tracked, &cfg.categories)
                .await
        }
    };
    Ok(conferences)
}

async fn list(args: ListArgs) -> Result<()> {
    let cfg = load_config()?;
    let now = match args.now.as_deref() {
        Some(s) => parse_now(s)?,
        None => SystemClock.now(),
    };

    let conferences = collect(&cfg, args.from_dir).await?;
    let upcoming = select_upcoming(conferences, now);
    info!(
        "upcoming ({}-{}): {} conference(s)",
        now.year(),
        now.year() + 1,
        upcoming.len()
    );

    if let Some(label) = args.category.as_deref() {
        let known = cfg.categories.labels();
        if !known.iter().any(|k| k.eq_ignore_ascii_case(label)) {
            warn!("unknown category '{label}' (known: {})", known.join(", "));
        }
    }

    let view = ViewState {
        category: args.category,
        sort: args.sort,
    };
    let mut shown = view.apply(&upcoming);
    let tally = UrgencyTally::count(shown.iter().copied());
    if let Some(limit) = args.limit {
        shown.truncate(limit);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&shown)?);
    } else {
        print!("{}", render::render_list(&shown, &tally));
    }

    Ok(())
}
