use super::grid::{Cell, Grid};
use crate::consts;
use rand::{seq::IteratorRandom, Rng};
use std::collections::HashSet;

/// Picks places to put food, using its own source of randomness
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct FoodSpawner<R> {
    grid: Grid,
    rng: R,
}

impl<R: Rng> FoodSpawner<R> {
    pub(crate) fn new(grid: Grid, rng: R) -> FoodSpawner<R> {
        FoodSpawner { grid, rng }
    }

    pub(crate) fn grid(&self) -> Grid {
        self.grid
    }

    /// Return a cell of the grid chosen uniformly at random from among those
    /// not in `occupied`, or `None` if every cell is occupied.
    ///
    /// Cells are drawn at random until a free one turns up; if that takes
    /// more than [`FOOD_SPAWN_ATTEMPTS`][consts::FOOD_SPAWN_ATTEMPTS] draws,
    /// the free cells are enumerated and one of them is chosen instead.
    pub(crate) fn spawn(&mut self, occupied: &HashSet<Cell>) -> Option<Cell> {
        if self.grid.area() == 0 {
            return None;
        }
        let width = i32::from(self.grid.width);
        let height = i32::from(self.grid.height);
        for _ in 0..consts::FOOD_SPAWN_ATTEMPTS {
            let cell = Cell::new(self.rng.random_range(0..width), self.rng.random_range(0..height));
            if !occupied.contains(&cell) {
                return Some(cell);
            }
        }
        log::debug!("No free cell found by random sampling; scanning grid");
        self.grid
            .cells()
            .filter(|c| !occupied.contains(c))
            .choose(&mut self.rng)
    }
}
