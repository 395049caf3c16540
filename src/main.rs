mod app;
mod command;
mod config;
mod consts;
mod game;
mod highscore;
mod session;
mod util;
use crate::app::App;
use crate::config::{Config, LogConfig};
use crate::game::{FoodSpawner, Grid};
use crate::highscore::HighScoreFile;
use crate::session::Session;
use anyhow::Context;
use signal_hook::consts::SIGTERM;
use simplelog::WriteLogger;
use std::io::{self, ErrorKind};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::{atomic::AtomicBool, Arc};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if is_broken_pipe(&e) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("gridsnake: {e:?}");
            ExitCode::from(2)
        }
    }
}

fn run() -> anyhow::Result<()> {
    let config = Config::load_default().context("failed to load configuration")?;
    init_logging(&config.logging).context("failed to set up logging")?;
    log::info!("Starting gridsnake");
    let store = config
        .high_score_file()
        .unwrap_or_else(|| HighScoreFile::new(PathBuf::from(consts::HIGH_SCORE_FILE_NAME)));
    log::debug!("Using high score file {}", store.path().display());
    let session = Session::new(FoodSpawner::new(Grid::default(), rand::rng()), store);
    let app = App::new(session);
    watch_termination_signals(&app.quit_flag())
        .context("failed to install signal handlers")?;
    let terminal = ratatui::init();
    let r = app.run(terminal);
    ratatui::restore();
    r.context("terminal I/O failed")
}

/// Send log messages to the configured log file.  If no log file location can
/// be determined, logging is left disabled.
fn init_logging(cfg: &LogConfig) -> anyhow::Result<()> {
    if cfg.level == log::LevelFilter::Off {
        return Ok(());
    }
    let Some(path) = cfg.path() else {
        return Ok(());
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs_err::create_dir_all(parent)?;
    }
    let file = fs_err::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)?;
    WriteLogger::init(cfg.level, simplelog::Config::default(), file)?;
    Ok(())
}

/// Make the game loop exit normally, saving the high score, when the process
/// is told to terminate or its terminal goes away
fn watch_termination_signals(flag: &Arc<AtomicBool>) -> io::Result<()> {
    signal_hook::flag::register(SIGTERM, Arc::clone(flag))?;
    #[cfg(unix)]
    signal_hook::flag::register(signal_hook::consts::SIGHUP, Arc::clone(flag))?;
    Ok(())
}

fn is_broken_pipe(e: &anyhow::Error) -> bool {
    e.chain().any(|cause| {
        cause
            .downcast_ref::<io::Error>()
            .is_some_and(|ioe| ioe.kind() == ErrorKind::BrokenPipe)
    })
}
