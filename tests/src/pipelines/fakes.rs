use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, mpsc};

use async_trait::async_trait;
use chrono::{Duration, Utc};
use domscout_common::domain::Candidate;
use domscout_common::error::LookupError;
use domscout_core::Collaborators;
use domscout_core::persist::{ResultWriter, SaveError};
use domscout_core::ports::{
    ArchiveLookup, CandidateSource, ExpiredListSource, Publisher, Registration, RegistrationLookup,
    ResultSink, Scorer,
};
use tokio::sync::oneshot;

pub fn candidates(names: &[&str]) -> Vec<Candidate> {
    names.iter().filter_map(|name| Candidate::new(name)).collect()
}

fn set(names: &[&str]) -> HashSet<String> {
    names.iter().map(|name| name.to_string()).collect()
}

pub struct StaticSource {
    name: &'static str,
    output: Option<Vec<Candidate>>,
}

impl StaticSource {
    pub fn new(name: &'static str, names: &[&str]) -> Arc<dyn CandidateSource> {
        Arc::new(Self {
            name,
            output: Some(candidates(names)),
        })
    }

    pub fn failing(name: &'static str) -> Arc<dyn CandidateSource> {
        Arc::new(Self { name, output: None })
    }
}

#[async_trait]
impl CandidateSource for StaticSource {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn generate(&self) -> anyhow::Result<Vec<Candidate>> {
        match &self.output {
            Some(output) => Ok(output.clone()),
            None => anyhow::bail!("word list missing"),
        }
    }
}

pub struct StaticExpired(pub Option<Vec<Candidate>>);

#[async_trait]
impl ExpiredListSource for StaticExpired {
    async fn fetch_expired(&self) -> anyhow::Result<Vec<Candidate>> {
        match &self.0 {
            Some(list) => Ok(list.clone()),
            None => anyhow::bail!("listing page unreachable"),
        }
    }
}

/// Registered names answer with a live record, flaky names always time out,
/// everything else is unknown to the registry.
#[derive(Default)]
pub struct FakeRegistry {
    registered: HashSet<String>,
    flaky: HashSet<String>,
}

impl FakeRegistry {
    pub fn new(registered: &[&str], flaky: &[&str]) -> Self {
        Self {
            registered: set(registered),
            flaky: set(flaky),
        }
    }
}

#[async_trait]
impl RegistrationLookup for FakeRegistry {
    async fn lookup(&self, candidate: &Candidate) -> Result<Registration, LookupError> {
        if self.flaky.contains(candidate.as_str()) {
            return Err(LookupError::transient("connection timed out"));
        }
        if self.registered.contains(candidate.as_str()) {
            return Ok(Registration {
                statuses: vec!["clientTransferProhibited".to_string()],
                expires: Some(Utc::now() + Duration::days(365)),
                ..Registration::default()
            });
        }
        Err(LookupError::NotFound)
    }
}

#[derive(Default)]
pub struct FakeArchive {
    archived: HashSet<String>,
    flaky: HashSet<String>,
}

impl FakeArchive {
    pub fn new(archived: &[&str], flaky: &[&str]) -> Self {
        Self {
            archived: set(archived),
            flaky: set(flaky),
        }
    }
}

#[async_trait]
impl ArchiveLookup for FakeArchive {
    async fn has_snapshot(&self, candidate: &Candidate) -> Result<bool, LookupError> {
        if self.flaky.contains(candidate.as_str()) {
            return Err(LookupError::transient("HTTP 503"));
        }
        Ok(self.archived.contains(candidate.as_str()))
    }
}

/// Fixed scores; unknown names score 0.
#[derive(Default)]
pub struct FixedScorer(HashMap<String, u32>);

impl FixedScorer {
    pub fn new(scores: &[(&str, u32)]) -> Self {
        Self(scores.iter().map(|(name, score)| (name.to_string(), *score)).collect())
    }
}

#[async_trait]
impl Scorer for FixedScorer {
    async fn score(&self, candidate: &Candidate) -> Result<u32, LookupError> {
        Ok(self.0.get(candidate.as_str()).copied().unwrap_or(0))
    }
}

#[derive(Default)]
pub struct RecordingPublisher {
    published: Mutex<Vec<Candidate>>,
}

impl RecordingPublisher {
    pub fn published(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .published
            .lock()
            .unwrap()
            .iter()
            .map(|c| c.to_string())
            .collect();
        names.sort();
        names
    }
}

#[async_trait]
impl Publisher for RecordingPublisher {
    async fn publish(&self, candidate: &Candidate) {
        self.published.lock().unwrap().push(candidate.clone());
    }
}

/// Builder for a [`Collaborators`] set writing into `output_dir`.
pub struct World {
    pub sources: Vec<Arc<dyn CandidateSource>>,
    pub expired: Option<Vec<Candidate>>,
    pub registry: FakeRegistry,
    pub archive: FakeArchive,
    pub scorer: FixedScorer,
    pub publisher: Arc<RecordingPublisher>,
    /// Replaces the file writer when set.
    pub sink: Option<Arc<dyn ResultSink>>,
}

impl Default for World {
    fn default() -> Self {
        Self {
            sources: Vec::new(),
            expired: Some(Vec::new()),
            registry: FakeRegistry::default(),
            archive: FakeArchive::default(),
            scorer: FixedScorer::default(),
            publisher: Arc::new(RecordingPublisher::default()),
            sink: None,
        }
    }
}

impl World {
    pub fn into_collaborators(self, output_dir: &Path) -> Collaborators {
        Collaborators {
            sources: self.sources,
            expired: Box::new(StaticExpired(self.expired)),
            registry: Arc::new(self.registry),
            archive: Arc::new(self.archive),
            scorer: Arc::new(self.scorer),
            publisher: self.publisher,
            sink: self
                .sink
                .unwrap_or_else(|| Arc::new(ResultWriter::new(output_dir))),
        }
    }
}

/// Sink that announces the save, then blocks until a runtime task answers.
/// A save running on a runtime thread starves that task and times out.
pub struct HandshakeSink {
    started: Mutex<Option<oneshot::Sender<()>>>,
    release: Mutex<mpsc::Receiver<()>>,
    inner: ResultWriter,
}

impl HandshakeSink {
    pub fn new(output_dir: &Path) -> (Arc<dyn ResultSink>, oneshot::Receiver<()>, mpsc::Sender<()>) {
        let (started_tx, started_rx) = oneshot::channel();
        let (release_tx, release_rx) = mpsc::channel();
        let sink: Arc<dyn ResultSink> = Arc::new(Self {
            started: Mutex::new(Some(started_tx)),
            release: Mutex::new(release_rx),
            inner: ResultWriter::new(output_dir),
        });
        (sink, started_rx, release_tx)
    }
}

impl ResultSink for HandshakeSink {
    fn save(&self, pipeline: &str, lines: &[String]) -> Result<PathBuf, SaveError> {
        if let Some(started) = self.started.lock().unwrap().take() {
            let _ = started.send(());
        }
        self.release
            .lock()
            .unwrap()
            .recv_timeout(std::time::Duration::from_secs(5))
            .map_err(|_| SaveError::Io {
                path: self.inner.path_for(pipeline),
                source: io::Error::new(io::ErrorKind::TimedOut, "runtime never answered"),
            })?;
        self.inner.save(pipeline, lines)
    }
}
