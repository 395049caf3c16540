use crate::consts;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Somewhere to keep the best score across runs of the program.
///
/// Storage problems are never reported to the caller: an unreadable store
/// reads as zero, and a failed write is dropped.
pub(crate) trait HighScoreStore {
    /// Return the stored high score, or 0 if there is none or it cannot be
    /// read
    fn load(&self) -> u32;

    /// Store `score` if and only if it beats the currently-stored high score
    fn save(&self, score: u32);
}

/// A high score stored as a decimal integer in a plain text file
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct HighScoreFile {
    path: PathBuf,
}

impl HighScoreFile {
    pub(crate) fn new(path: PathBuf) -> HighScoreFile {
        HighScoreFile { path }
    }

    /// Return the default high score file path: a file in the same directory
    /// as the running executable.  Returns `None` if the executable's location
    /// could not be determined.
    pub(crate) fn default_path() -> Option<PathBuf> {
        let exe = std::env::current_exe().ok()?;
        Some(exe.parent()?.join(consts::HIGH_SCORE_FILE_NAME))
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Read the high score from the file.  A missing file is treated as a
    /// high score of 0.
    pub(crate) fn read(&self) -> Result<u32, LoadError> {
        let src = match fs_err::read_to_string(&self.path) {
            Ok(src) => src,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(LoadError::read(e)),
        };
        src.trim().parse::<u32>().map_err(LoadError::parse)
    }

    /// Overwrite the file with `score`
    pub(crate) fn write(&self, score: u32) -> Result<(), SaveError> {
        fs_err::write(&self.path, score.to_string()).map_err(SaveError)
    }
}

impl HighScoreStore for HighScoreFile {
    fn load(&self) -> u32 {
        match self.read() {
            Ok(score) => score,
            Err(e) => {
                log::warn!("{e}: {}", error_chain(&e));
                0
            }
        }
    }

    fn save(&self, score: u32) {
        let current = self.load();
        if score <= current {
            return;
        }
        match self.write(score) {
            Ok(()) => log::info!("New high score {score} saved to {}", self.path.display()),
            Err(e) => log::warn!("{e}: {}", error_chain(&e)),
        }
    }
}

fn error_chain(e: &dyn std::error::Error) -> String {
    let mut msgs = Vec::new();
    let mut source = e.source();
    while let Some(src) = source {
        msgs.push(src.to_string());
        source = src.source();
    }
    msgs.join(": ")
}

#[derive(Debug, Error)]
#[error("Failed to save high score to disk")]
pub(crate) struct SaveError(#[source] std::io::Error);

#[derive(Debug, Error)]
#[error("Failed to read high score from disk")]
pub(crate) struct LoadError(#[source] LoadErrorSource);

impl LoadError {
    fn read(e: std::io::Error) -> Self {
        LoadError(LoadErrorSource::Read(e))
    }

    fn parse(e: std::num::ParseIntError) -> Self {
        LoadError(LoadErrorSource::Parse(e))
    }
}

#[derive(Debug, Error)]
enum LoadErrorSource {
    #[error("failed to read high score file")]
    Read(#[source] std::io::Error),
    #[error("high score file does not contain a non-negative integer")]
    Parse(#[source] std::num::ParseIntError),
}
