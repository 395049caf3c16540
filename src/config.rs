use crate::highscore::HighScoreFile;
use log::LevelFilter;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
pub(crate) struct Config {
    /// Settings about data files
    #[serde(default)]
    pub(crate) files: FileConfig,

    /// Settings about the log file
    #[serde(default)]
    pub(crate) logging: LogConfig,
}

impl Config {
    /// Return the default configuration file path, or `None` if the local
    /// configuration directory could not be determined
    pub(crate) fn default_path() -> Option<PathBuf> {
        dirs::config_local_dir().map(|p| p.join("gridsnake").join("config.toml"))
    }

    /// Read configuration from a file on disk.  If the file does not exist, a
    /// default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }

    /// Load configuration from the default path, or use the defaults if there
    /// is no default path
    pub(crate) fn load_default() -> Result<Config, ConfigError> {
        match Config::default_path() {
            Some(p) => Config::load(&p),
            None => Ok(Config::default()),
        }
    }

    /// Return the high score file to use: the one given in the configuration
    /// or, if that is not set, the default.  Returns `None` if no path is
    /// configured and the default could not be computed.
    pub(crate) fn high_score_file(&self) -> Option<HighScoreFile> {
        self.files
            .high_score_file
            .clone()
            .or_else(HighScoreFile::default_path)
            .map(HighScoreFile::new)
    }
}

#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct FileConfig {
    /// Path at which the high score should be stored
    pub(crate) high_score_file: Option<PathBuf>,
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct LogConfig {
    /// File to write log messages to
    pub(crate) file: Option<PathBuf>,

    /// Minimum level of messages to log
    pub(crate) level: LevelFilter,
}

impl LogConfig {
    /// Return the log file to use: the one given in the configuration or, if
    /// that is not set, `gridsnake.log` in the local data directory
    pub(crate) fn path(&self) -> Option<PathBuf> {
        self.file.clone().or_else(|| {
            dirs::data_local_dir().map(|p| p.join("gridsnake").join("gridsnake.log"))
        })
    }
}

impl Default for LogConfig {
    fn default() -> LogConfig {
        LogConfig {
            file: None,
            level: LevelFilter::Warn,
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file() {
        let tmpdir = tempfile::tempdir().unwrap();
        let cfg = Config::load(&tmpdir.path().join("config.toml")).unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.logging.level, LevelFilter::Warn);
    }

    #[test]
    fn empty_file() {
        let cfg = toml::from_str::<Config>("").unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn full_file() {
        let cfg = toml::from_str::<Config>(concat!(
            "[files]\n",
            "high-score-file = \"/var/games/snake.txt\"\n",
            "\n",
            "[logging]\n",
            "file = \"/tmp/gridsnake.log\"\n",
            "level = \"debug\"\n",
        ))
        .unwrap();
        assert_eq!(
            cfg,
            Config {
                files: FileConfig {
                    high_score_file: Some(PathBuf::from("/var/games/snake.txt")),
                },
                logging: LogConfig {
                    file: Some(PathBuf::from("/tmp/gridsnake.log")),
                    level: LevelFilter::Debug,
                },
            }
        );
        assert_eq!(
            cfg.high_score_file(),
            Some(HighScoreFile::new(PathBuf::from("/var/games/snake.txt")))
        );
        assert_eq!(cfg.logging.path(), Some(PathBuf::from("/tmp/gridsnake.log")));
    }

    #[test]
    fn partial_logging() {
        let cfg = toml::from_str::<Config>("[logging]\nlevel = \"off\"\n").unwrap();
        assert_eq!(cfg.logging.level, LevelFilter::Off);
        assert_eq!(cfg.logging.file, None);
        assert_eq!(cfg.files, FileConfig::default());
    }

    #[test]
    fn bad_level() {
        assert!(toml::from_str::<Config>("[logging]\nlevel = \"loud\"\n").is_err());
    }

    #[test]
    fn malformed_file() {
        let tmpdir = tempfile::tempdir().unwrap();
        let path = tmpdir.path().join("config.toml");
        fs_err::write(&path, "[files\n").unwrap();
        assert!(matches!(Config::load(&path), Err(ConfigError::Parse(_))));
    }
}
