use crate::command::Command;
use crate::highscore::HighScoreStore;
use crate::session::Session;
use crossterm::event::{poll, read};
use rand::Rng;
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::ops::ControlFlow;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::time::{Duration, Instant};

/// The main loop: read input, advance the game when a tick is due, redraw,
/// and wait for either more input or the next tick.
#[derive(Debug)]
pub(crate) struct App<R, S> {
    session: Session<R, S>,
    last_tick: Instant,
    /// Raised from outside the loop, e.g. by a signal handler, to make the
    /// loop exit at the start of its next pass
    quit: Arc<AtomicBool>,
}

impl<R: Rng, S: HighScoreStore> App<R, S> {
    pub(crate) fn new(session: Session<R, S>) -> App<R, S> {
        App {
            session,
            last_tick: Instant::now(),
            quit: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Return a handle that can be set to ask the loop to quit
    pub(crate) fn quit_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.quit)
    }

    /// Run until the player quits.  The high score is saved on the way out,
    /// even if the terminal fails.
    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        let r = self.run_loop(&mut terminal);
        self.session.persist_high_score();
        r
    }

    fn run_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            if self.quit.load(Ordering::Relaxed) {
                log::info!("Quitting on termination signal");
                return Ok(());
            }
            while poll(Duration::ZERO)? {
                let Some(cmd) = read()?
                    .as_key_press_event()
                    .and_then(Command::from_key_event)
                else {
                    continue;
                };
                if self.handle_command(cmd).is_break() {
                    log::info!("Quitting");
                    return Ok(());
                }
            }
            self.advance(Instant::now());
            terminal.draw(|frame| self.session.game().draw(frame))?;
            let wait = self.next_tick().saturating_duration_since(Instant::now());
            // Wakes early if input arrives; the input is read on the next pass
            match poll(wait) {
                Ok(_) => (),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => (),
                Err(e) => return Err(e),
            }
        }
    }

    fn handle_command(&mut self, cmd: Command) -> ControlFlow<()> {
        match cmd {
            Command::Quit => return ControlFlow::Break(()),
            Command::Turn(direction) => self.session.set_direction(direction),
            Command::TogglePause => self.session.toggle_pause(),
            Command::Restart => {
                self.session.restart();
                self.last_tick = Instant::now();
            }
        }
        ControlFlow::Continue(())
    }

    /// Tick the game if a full tick period has passed since the last tick
    fn advance(&mut self, now: Instant) {
        if self.tick_due(now) {
            self.session.tick();
            self.last_tick = now;
        }
    }

    fn tick_due(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.last_tick) >= self.session.tick_period()
    }

    fn next_tick(&self) -> Instant {
        self.last_tick + self.session.tick_period()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts;
    use crate::game::{Cell, Direction, FoodSpawner, GameState, Grid, Tick};
    use crate::highscore::HighScoreFile;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use ratatui::backend::TestBackend;
    use tempfile::TempDir;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    fn app_in(dir: &TempDir) -> App<ChaCha12Rng, HighScoreFile> {
        App::new(Session::new(
            FoodSpawner::new(Grid::default(), ChaCha12Rng::seed_from_u64(RNG_SEED)),
            HighScoreFile::new(dir.path().join(consts::HIGH_SCORE_FILE_NAME)),
        ))
    }

    #[test]
    fn ticks_only_when_due() {
        let tmpdir = tempfile::tempdir().unwrap();
        let mut app = app_in(&tmpdir);
        let start = app.last_tick;
        app.advance(start + Duration::from_millis(40));
        assert_eq!(app.session.game().snake().head(), Cell::new(14, 11));
        assert_eq!(app.last_tick, start);
        app.advance(start + Duration::from_millis(100));
        assert_eq!(app.session.game().snake().head(), Cell::new(15, 11));
        assert_eq!(app.last_tick, start + Duration::from_millis(100));
        app.advance(start + Duration::from_millis(150));
        assert_eq!(app.session.game().snake().head(), Cell::new(15, 11));
        assert_eq!(
            app.next_tick(),
            app.last_tick + app.session.game().tick_period()
        );
    }

    #[test]
    fn at_most_one_tick_per_pass() {
        let tmpdir = tempfile::tempdir().unwrap();
        let mut app = app_in(&tmpdir);
        let start = app.last_tick;
        app.advance(start + Duration::from_millis(350));
        assert_eq!(app.session.game().snake().head(), Cell::new(15, 11));
    }

    #[test]
    fn commands() {
        let tmpdir = tempfile::tempdir().unwrap();
        let mut app = app_in(&tmpdir);
        assert!(app
            .handle_command(Command::Turn(Direction::North))
            .is_continue());
        assert_eq!(app.session.game().snake().direction(), Direction::North);
        assert!(app.handle_command(Command::TogglePause).is_continue());
        assert_eq!(app.session.game().state(), GameState::Paused);
        assert!(app.handle_command(Command::TogglePause).is_continue());
        assert_eq!(app.session.game().state(), GameState::Running);
        assert!(app.handle_command(Command::Quit).is_break());
    }

    #[test]
    fn restart_resets_clock() {
        let tmpdir = tempfile::tempdir().unwrap();
        let mut app = app_in(&tmpdir);
        let start = app.last_tick;
        app.advance(start + Duration::from_millis(100));
        assert!(app.handle_command(Command::Restart).is_continue());
        assert!(app.last_tick >= start);
        assert_eq!(app.session.game().snake().head(), Cell::new(14, 11));
        assert_eq!(app.session.game().score(), 0);
    }

    #[test]
    fn paused_game_does_not_move() {
        let tmpdir = tempfile::tempdir().unwrap();
        let mut app = app_in(&tmpdir);
        let start = app.last_tick;
        assert!(app.handle_command(Command::TogglePause).is_continue());
        for i in 1..10 {
            app.advance(start + Duration::from_millis(100 * i));
        }
        assert_eq!(app.session.game().snake().head(), Cell::new(14, 11));
    }

    #[test]
    fn quit_flag_ends_run_and_saves_score() {
        let tmpdir = tempfile::tempdir().unwrap();
        let path = tmpdir.path().join(consts::HIGH_SCORE_FILE_NAME);
        let mut app = App::new(Session::new(
            FoodSpawner::new(Grid::new(5, 1), ChaCha12Rng::seed_from_u64(RNG_SEED)),
            HighScoreFile::new(path.clone()),
        ));
        // On a 5×1 grid the first food is always reached within two ticks
        for _ in 0..2 {
            if app.session.tick() == Tick::Ate {
                break;
            }
        }
        assert_eq!(app.session.game().score(), 1);
        assert!(!path.exists());
        app.quit_flag().store(true, Ordering::Relaxed);
        let terminal = Terminal::new(TestBackend::new(58, 26)).unwrap();
        app.run(terminal).unwrap();
        assert_eq!(HighScoreFile::new(path).load(), 1);
    }

    #[test]
    fn quit_flag_keeps_better_stored_score() {
        let tmpdir = tempfile::tempdir().unwrap();
        let path = tmpdir.path().join(consts::HIGH_SCORE_FILE_NAME);
        fs_err::write(&path, "9").unwrap();
        let app = app_in(&tmpdir);
        app.quit_flag().store(true, Ordering::Relaxed);
        let terminal = Terminal::new(TestBackend::new(58, 26)).unwrap();
        app.run(terminal).unwrap();
        assert_eq!(fs_err::read_to_string(&path).unwrap(), "9");
    }
}
