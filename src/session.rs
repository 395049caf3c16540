use crate::game::{Direction, FoodSpawner, Game, Tick};
use crate::highscore::HighScoreStore;
use rand::Rng;
use std::time::Duration;

/// The games played during one run of the program, together with the
/// randomness and high score storage they share
#[derive(Debug)]
pub(crate) struct Session<R, S> {
    spawner: FoodSpawner<R>,
    store: S,
    game: Game,
}

impl<R: Rng, S: HighScoreStore> Session<R, S> {
    pub(crate) fn new(mut spawner: FoodSpawner<R>, store: S) -> Session<R, S> {
        let game = Game::new(&mut spawner, store.load());
        Session {
            spawner,
            store,
            game,
        }
    }

    pub(crate) fn game(&self) -> &Game {
        &self.game
    }

    pub(crate) fn tick(&mut self) -> Tick {
        let tick = self.game.tick(&mut self.spawner);
        match tick {
            Tick::Ate => log::debug!(
                "Score is now {}; next food at {:?}; speed {:.1} ticks/s",
                self.game.score(),
                self.game.food(),
                self.game.tick_rate()
            ),
            Tick::GameOver => {
                log::info!(
                    "Game over with a score of {} and a length of {}",
                    self.game.score(),
                    self.game.snake().len()
                );
                self.persist_high_score();
            }
            Tick::Idle | Tick::Moved => (),
        }
        tick
    }

    pub(crate) fn set_direction(&mut self, direction: Direction) {
        if !self.game.set_direction(direction) {
            log::trace!(
                "Ignoring turn from {:?} to {direction:?}",
                self.game.snake().direction()
            );
        }
    }

    pub(crate) fn toggle_pause(&mut self) {
        self.game.toggle_pause();
    }

    /// Throw away the current game and start a fresh one.  The current score
    /// is saved first if it's a new high score.
    pub(crate) fn restart(&mut self) {
        self.persist_high_score();
        log::info!("Starting a new game");
        self.game = Game::new(&mut self.spawner, self.store.load());
    }

    pub(crate) fn persist_high_score(&self) {
        self.store.save(self.game.score());
    }

    pub(crate) fn tick_period(&self) -> Duration {
        self.game.tick_period()
    }
}
