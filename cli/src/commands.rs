pub mod expired;
pub mod new;
pub mod report;
pub mod run;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::{ArgAction, Args, Parser, Subcommand};
use domscout_common::config::{Config, Credentials};
use domscout_core::{Collaborators, Orchestrator};

use crate::terminal::progress::SpanProgress;

#[derive(Parser)]
#[command(name = "domscout", version)]
#[command(about = "Finds unregistered and recently expired domain names worth holding.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// More output, repeat for trace level
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Less output, repeat to hide everything but results
    #[arg(short, long, action = ArgAction::Count, global = true, conflicts_with = "verbose")]
    pub quiet: u8,

    #[command(flatten)]
    pub tuning: Tuning,

    #[command(flatten)]
    pub credentials: CredentialArgs,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate fresh names and keep the unregistered, unarchived ones
    #[command(alias = "n")]
    New,
    /// Look for recently expired domains that are free again
    #[command(alias = "e")]
    Expired,
    /// Run both pipelines, new domains first
    #[command(alias = "r")]
    Run,
}

#[derive(Args)]
pub struct Tuning {
    /// Probes running at the same time
    #[arg(short, long, global = true, value_name = "N")]
    pub workers: Option<usize>,

    /// Pause after every probe, per worker
    #[arg(long, global = true, value_name = "MS")]
    pub delay_ms: Option<u64>,

    /// Longest accepted name, TLD excluded
    #[arg(long, global = true, value_name = "CHARS")]
    pub max_len: Option<usize>,

    /// Expired domains must score above this
    #[arg(long, global = true, value_name = "SCORE")]
    pub threshold: Option<u32>,

    /// TLDs to try, comma separated (".com,.io")
    #[arg(long, global = true, value_delimiter = ',')]
    pub tlds: Option<Vec<String>>,

    /// Word list for the dictionary generator
    #[arg(long, global = true, value_name = "FILE")]
    pub dictionary: Option<PathBuf>,

    /// Keyword list for the trends generator
    #[arg(long, global = true, value_name = "FILE")]
    pub trends: Option<PathBuf>,

    /// RSS feed to mine for keywords, repeatable
    #[arg(long = "news", global = true, value_name = "URL")]
    pub news_sources: Vec<String>,

    /// Page listing recently deleted domains
    #[arg(long, global = true, value_name = "URL")]
    pub expired_url: Option<String>,

    /// Directory for the results files
    #[arg(short, long, global = true, value_name = "DIR")]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct CredentialArgs {
    #[arg(long, env = "MOZ_ACCESS_ID", hide = true, hide_env_values = true)]
    pub moz_access_id: Option<String>,
    #[arg(long, env = "MOZ_SECRET_KEY", hide = true, hide_env_values = true)]
    pub moz_secret_key: Option<String>,
    #[arg(long, env = "SEDO_API_KEY", hide = true, hide_env_values = true)]
    pub sedo_api_key: Option<String>,
    #[arg(long, env = "DAN_API_KEY", hide = true, hide_env_values = true)]
    pub dan_api_key: Option<String>,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Defaults overridden by whatever was given on the command line.
    pub fn config(&self) -> Config {
        let mut cfg = Config::default();
        let t = &self.tuning;

        if let Some(workers) = t.workers {
            cfg.workers = workers;
        }
        cfg.delay = t.delay_ms.map(Duration::from_millis);
        if let Some(max_len) = t.max_len {
            cfg.max_name_len = max_len;
        }
        if let Some(threshold) = t.threshold {
            cfg.score_threshold = threshold;
        }
        if let Some(tlds) = &t.tlds {
            cfg.tlds = tlds.iter().map(|tld| normalize_tld(tld)).collect();
        }
        if let Some(path) = &t.dictionary {
            cfg.dictionary_file = path.clone();
        }
        if let Some(path) = &t.trends {
            cfg.trends_file = path.clone();
        }
        if !t.news_sources.is_empty() {
            cfg.news_sources = t.news_sources.clone();
        }
        if let Some(url) = &t.expired_url {
            cfg.expired_list_url = url.clone();
        }
        if let Some(dir) = &t.output {
            cfg.output_dir = dir.clone();
        }

        let c = &self.credentials;
        cfg.credentials = Credentials {
            moz_access_id: c.moz_access_id.clone(),
            moz_secret_key: c.moz_secret_key.clone(),
            sedo_api_key: c.sedo_api_key.clone(),
            dan_api_key: c.dan_api_key.clone(),
        };

        cfg
    }
}

/// Builds the orchestrator wired to the live services.
pub fn orchestrator(cfg: &Config) -> anyhow::Result<Orchestrator> {
    let collaborators = Collaborators::live(cfg)?;
    Ok(Orchestrator::new(cfg, collaborators, Arc::new(SpanProgress::default())))
}

fn normalize_tld(raw: &str) -> String {
    let tld = raw.trim().to_lowercase();
    if tld.starts_with('.') { tld } else { format!(".{tld}") }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
