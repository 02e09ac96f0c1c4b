use std::path::PathBuf;

use anyhow::Result;
use chrono::Utc;
use clap::Parser;

use crate::config::{Config, DEFAULT_SINCE_HOURS};
use crate::output::OutputTarget;
use crate::transcript::run_transcript;
use crate::utils::{expand_tilde, get_codex_home};

#[derive(Parser, Debug)]
#[command(name = "codex-transcript")]
#[command(version)]
#[command(
    about = "Collect recent Codex conversations into a plain-text transcript",
    long_about = None
)]
pub struct Cli {
    /// Codex data directory [default: $CODEX_HOME or ~/.codex]
    #[arg(long, value_name = "DIR")]
    pub codex_home: Option<PathBuf>,

    /// Only include messages from the last HOURS hours
    #[arg(
        long,
        value_name = "HOURS",
        default_value_t = DEFAULT_SINCE_HOURS,
        allow_negative_numbers = true
    )]
    pub since_hours: f64,

    /// Write the transcript to this file instead of stdout
    #[arg(long, value_name = "PATH")]
    pub out: Option<String>,

    /// Also include prompts from history.jsonl
    #[arg(long)]
    pub include_history: bool,

    /// Maximum number of lines to write (0 = unlimited)
    #[arg(long, value_name = "N", default_value_t = 0)]
    pub limit: usize,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn into_config(self) -> Result<Config> {
        let codex_home = match self.codex_home {
            Some(dir) => expand_tilde(&dir, dirs::home_dir().as_deref()),
            None => get_codex_home()?,
        };

        Ok(Config {
            codex_home,
            since_hours: self.since_hours,
            output: OutputTarget::from_path(self.out.map(PathBuf::from)),
            include_history: self.include_history,
            limit: self.limit,
        })
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.into_config()?;
    run_transcript(&config, Utc::now())
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    let _ = builder.target(env_logger::Target::Stderr).try_init();
}
