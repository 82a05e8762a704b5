use std::path::{Path, PathBuf};

use anyhow::Context;
use async_trait::async_trait;
use domscout_common::config::Config;
use domscout_common::domain::Candidate;

use super::expand;
use crate::ports::CandidateSource;

/// `word + tld` for every word in the dictionary file.
pub struct DictionarySource {
    path: PathBuf,
    tlds: Vec<String>,
}

impl DictionarySource {
    pub fn new(path: impl Into<PathBuf>, tlds: Vec<String>) -> Self {
        Self {
            path: path.into(),
            tlds,
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(&cfg.dictionary_file, cfg.tlds.clone())
    }
}

#[async_trait]
impl CandidateSource for DictionarySource {
    fn name(&self) -> &'static str {
        "dictionary"
    }

    async fn generate(&self) -> anyhow::Result<Vec<Candidate>> {
        let words = read_words(&self.path).await?;
        Ok(expand(&words, &[], &self.tlds))
    }
}

/// `keyword + suffix + tld` for every keyword in the trends file.
pub struct TrendSource {
    path: PathBuf,
    suffixes: Vec<String>,
    tlds: Vec<String>,
}

impl TrendSource {
    pub fn new(path: impl Into<PathBuf>, suffixes: Vec<String>, tlds: Vec<String>) -> Self {
        Self {
            path: path.into(),
            suffixes,
            tlds,
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(&cfg.trends_file, cfg.suffixes.clone(), cfg.tlds.clone())
    }
}

#[async_trait]
impl CandidateSource for TrendSource {
    fn name(&self) -> &'static str {
        "trends"
    }

    async fn generate(&self) -> anyhow::Result<Vec<Candidate>> {
        let keywords = read_words(&self.path).await?;
        Ok(expand(&keywords, &self.suffixes, &self.tlds))
    }
}

/// One entry per non-blank line. Lines starting with `#` are comments.
pub fn parse_words(contents: &str) -> Vec<String> {
    contents
        .lines()
        .filter(|line| !line.starts_with('#'))
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

async fn read_words(path: &Path) -> anyhow::Result<Vec<String>> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("word list not readable at {}", path.display()))?;
    Ok(parse_words(&contents))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
