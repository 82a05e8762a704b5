use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_TLDS: &[&str] = &[".com", ".io", ".ai"];
pub const DEFAULT_SUFFIXES: &[&str] = &[
    "solutions", "labs", "future", "systems", "tech", "works", "group", "ventures",
];
pub const DEFAULT_NEWS_SOURCES: &[&str] = &["https://techcrunch.com/feed/"];
pub const DEFAULT_EXPIRED_LIST_URL: &str = "https://www.expireddomains.net/deleted-com-domains/";

/// Run configuration, built once by the CLI and passed down explicitly.
#[derive(Debug, Clone)]
pub struct Config {
    /// TLDs appended to every generated name, dot included.
    pub tlds: Vec<String>,
    /// Words appended to trend and news keywords before the TLD.
    pub suffixes: Vec<String>,
    /// Longest accepted name portion, in characters.
    pub max_name_len: usize,
    /// Expired domains need a score strictly above this to survive.
    pub score_threshold: u32,
    /// Probes allowed in flight at once.
    pub workers: usize,
    /// Pause each worker slot takes after a probe. `None` disables it.
    pub delay: Option<Duration>,
    pub timeouts: Timeouts,
    pub dictionary_file: PathBuf,
    pub trends_file: PathBuf,
    pub news_sources: Vec<String>,
    pub expired_list_url: String,
    /// Directory receiving `<pipeline>_found.txt`.
    pub output_dir: PathBuf,
    pub credentials: Credentials,
}

/// Per-attempt network timeouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub whois: Duration,
    pub archive: Duration,
    pub fetch: Duration,
}

/// API credentials. Absent keys switch the matching collaborator to simulation.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub moz_access_id: Option<String>,
    pub moz_secret_key: Option<String>,
    pub sedo_api_key: Option<String>,
    pub dan_api_key: Option<String>,
}

impl Credentials {
    pub fn has_moz(&self) -> bool {
        is_set(&self.moz_access_id) && is_set(&self.moz_secret_key)
    }

    pub fn has_sedo(&self) -> bool {
        is_set(&self.sedo_api_key)
    }

    pub fn has_dan(&self) -> bool {
        is_set(&self.dan_api_key)
    }
}

fn is_set(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            whois: Duration::from_secs(10),
            archive: Duration::from_secs(10),
            fetch: Duration::from_secs(15),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tlds: to_owned(DEFAULT_TLDS),
            suffixes: to_owned(DEFAULT_SUFFIXES),
            max_name_len: 15,
            score_threshold: 20,
            workers: 5,
            delay: None,
            timeouts: Timeouts::default(),
            dictionary_file: PathBuf::from("data/dictionary.txt"),
            trends_file: PathBuf::from("data/trend_words.txt"),
            news_sources: to_owned(DEFAULT_NEWS_SOURCES),
            expired_list_url: DEFAULT_EXPIRED_LIST_URL.to_string(),
            output_dir: PathBuf::from("data"),
            credentials: Credentials::default(),
        }
    }
}

fn to_owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
