use std::collections::BTreeSet;
use std::sync::LazyLock;

use async_trait::async_trait;
use domscout_common::config::Config;
use domscout_common::domain::Candidate;
use domscout_common::warn;
use domscout_protocols::rss;
use regex::Regex;
use reqwest::Client;
use tracing::debug;

use super::expand;
use crate::network::http::{build_client, fetch_text};
use crate::ports::CandidateSource;

const MIN_KEYWORD_LEN: usize = 4;

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\w+\b").expect("static regex"));

// Common English function words.
const STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "ain", "all", "am", "an", "and", "any",
    "are", "aren", "arent", "as", "at", "be", "because", "been", "before", "being", "below",
    "between", "both", "but", "by", "can", "couldn", "couldnt", "d", "did", "didn", "didnt", "do",
    "does", "doesn", "doesnt", "doing", "don", "dont", "down", "during", "each", "few", "for",
    "from", "further", "had", "hadn", "hadnt", "has", "hasn", "hasnt", "have", "haven", "havent",
    "having", "he", "her", "here", "hers", "herself", "him", "himself", "his", "how", "i", "if",
    "in", "into", "is", "isn", "isnt", "it", "its", "itself", "just", "ll", "m", "ma", "me",
    "mightn", "mightnt", "more", "most", "mustn", "mustnt", "my", "myself", "needn", "neednt",
    "no", "nor", "not", "now", "o", "of", "off", "on", "once", "only", "or", "other", "our",
    "ours", "ourselves", "out", "over", "own", "re", "s", "same", "shan", "shant", "she",
    "should", "shouldn", "shouldnt", "shouldve", "so", "some", "such", "t", "than", "that",
    "thatll", "the", "their", "theirs", "them", "themselves", "then", "there", "these", "they",
    "this", "those", "through", "to", "too", "under", "until", "up", "ve", "very", "was", "wasn",
    "wasnt", "we", "were", "weren", "werent", "what", "when", "where", "which", "while", "who",
    "whom", "why", "will", "with", "won", "wont", "wouldn", "wouldnt", "y", "you", "youd",
    "youll", "your", "youre", "yours", "yourself", "yourselves", "youve",
];

/// `keyword + suffix + tld` for keywords mined from RSS headlines.
pub struct NewsSource {
    client: Client,
    feeds: Vec<String>,
    suffixes: Vec<String>,
    tlds: Vec<String>,
}

impl NewsSource {
    pub fn new(client: Client, feeds: Vec<String>, suffixes: Vec<String>, tlds: Vec<String>) -> Self {
        Self {
            client,
            feeds,
            suffixes,
            tlds,
        }
    }

    pub fn from_config(cfg: &Config) -> anyhow::Result<Self> {
        Ok(Self::new(
            build_client(cfg.timeouts.fetch)?,
            cfg.news_sources.clone(),
            cfg.suffixes.clone(),
            cfg.tlds.clone(),
        ))
    }

    async fn headlines(&self, feed: &str) -> anyhow::Result<Vec<String>> {
        let body = fetch_text(&self.client, feed).await?;
        Ok(rss::extract_titles(&body)?)
    }
}

#[async_trait]
impl CandidateSource for NewsSource {
    fn name(&self) -> &'static str {
        "news"
    }

    async fn generate(&self) -> anyhow::Result<Vec<Candidate>> {
        let mut keywords: BTreeSet<String> = BTreeSet::new();

        for feed in &self.feeds {
            match self.headlines(feed).await {
                Ok(titles) => {
                    debug!(feed, headlines = titles.len(), "feed read");
                    keywords.extend(extract_keywords(&titles));
                }
                Err(err) => warn!("Skipping news feed {feed}: {err:#}"),
            }
        }

        let keywords: Vec<String> = keywords.into_iter().collect();
        Ok(expand(&keywords, &self.suffixes, &self.tlds))
    }
}

/// Lowercased headline words that are not stopwords, not numbers and at
/// least four characters long. Sorted and unique.
pub fn extract_keywords<S: AsRef<str>>(headlines: &[S]) -> BTreeSet<String> {
    let mut keywords = BTreeSet::new();

    for title in headlines {
        let lower = title.as_ref().to_lowercase();
        for word in WORD.find_iter(&lower).map(|m| m.as_str()) {
            if word.chars().count() < MIN_KEYWORD_LEN
                || word.chars().all(|c| c.is_numeric())
                || STOPWORDS.contains(&word)
            {
                continue;
            }
            keywords.insert(word.to_string());
        }
    }
    keywords
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
