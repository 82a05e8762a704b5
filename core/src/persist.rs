use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use chrono::Local;
use thiserror::Error;

use crate::ports::ResultSink;

pub const FILE_SUFFIX: &str = "_found.txt";

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("could not write results to {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Writes `<dir>/<pipeline>_found.txt`, replacing any previous run's file.
#[derive(Debug, Clone)]
pub struct ResultWriter {
    dir: PathBuf,
}

impl ResultWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, pipeline: &str) -> PathBuf {
        self.dir.join(format!("{pipeline}{FILE_SUFFIX}"))
    }
}

impl ResultSink for ResultWriter {
    fn save(&self, pipeline: &str, lines: &[String]) -> Result<PathBuf, SaveError> {
        let path = self.path_for(pipeline);
        let io_err = |source| SaveError::Io {
            path: path.clone(),
            source,
        };

        fs::create_dir_all(&self.dir).map_err(io_err)?;

        let mut body = format!("# Results from {}\n", Local::now().format("%Y-%m-%d %H:%M:%S"));
        for line in lines {
            body.push_str(line);
            body.push('\n');
        }

        let mut file = fs::File::create(&path).map_err(io_err)?;
        file.write_all(body.as_bytes()).map_err(io_err)?;

        Ok(path)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
