use super::direction::Direction;
use super::grid::Cell;
use std::collections::{HashSet, VecDeque};

/// Snake state.  Snate.
///
/// The snake always has a head; `body` holds the remaining segments, starting
/// with the one directly behind the head and ending with the tail.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    /// The position of the snake's head
    pub(super) head: Cell,

    /// The positions of all of the cells in the snake's body, nearest the
    /// head first
    pub(super) body: VecDeque<Cell>,

    /// The direction in which the snake is currently facing
    pub(super) direction: Direction,

    /// Number of upcoming steps on which the tail is kept in place
    pub(super) pending_growth: usize,
}

impl Snake {
    /// Create a new snake of `length` cells (at least one) with its head at
    /// `head`, facing in `direction`, and its body trailing straight behind.
    pub(crate) fn new(head: Cell, direction: Direction, length: usize) -> Snake {
        let behind = direction.reverse();
        let body = std::iter::successors(Some(head), |&c| Some(c.neighbor(behind)))
            .skip(1)
            .take(length.saturating_sub(1))
            .collect();
        Snake {
            head,
            body,
            direction,
            pending_growth: 0,
        }
    }

    /// Return the position of the snake's head
    pub(crate) fn head(&self) -> Cell {
        self.head
    }

    /// Return the positions of the cells behind the head
    pub(crate) fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    pub(crate) fn direction(&self) -> Direction {
        self.direction
    }

    /// Iterate over all of the snake's cells, head first
    pub(crate) fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        std::iter::once(self.head).chain(self.body.iter().copied())
    }

    pub(crate) fn len(&self) -> usize {
        self.body.len() + 1
    }

    /// Return a snapshot of the cells the snake currently occupies
    pub(crate) fn occupied(&self) -> HashSet<Cell> {
        self.cells().collect()
    }

    /// Change the snake's direction to `direction`, unless that would make it
    /// turn straight back into itself.  Returns whether the direction was
    /// accepted.
    pub(crate) fn set_direction(&mut self, direction: Direction) -> bool {
        if direction == self.direction.reverse() {
            false
        } else {
            self.direction = direction;
            true
        }
    }

    /// Move the snake forwards one cell in the current direction and return
    /// the new head.  The new head is not checked against the grid bounds,
    /// the food, or the body.
    pub(crate) fn step(&mut self) -> Cell {
        let new_head = self.head.neighbor(self.direction);
        self.body.push_front(self.head);
        self.head = new_head;
        if self.pending_growth > 0 {
            self.pending_growth -= 1;
        } else {
            let _ = self.body.pop_back();
        }
        new_head
    }

    /// Arrange for the snake to grow by `n` cells over the next `n` steps
    pub(crate) fn queue_growth(&mut self, n: usize) {
        self.pending_growth = self.pending_growth.saturating_add(n);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn starting_snake() -> Snake {
        Snake::new(Cell::new(14, 11), Direction::East, 3)
    }

    #[test]
    fn new_snake_trails_behind_head() {
        let snake = starting_snake();
        assert_eq!(
            snake.cells().collect::<Vec<_>>(),
            [Cell::new(14, 11), Cell::new(13, 11), Cell::new(12, 11)]
        );
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.direction(), Direction::East);
    }

    #[test]
    fn new_snake_minimum_length() {
        let snake = Snake::new(Cell::new(1, 1), Direction::North, 0);
        assert_eq!(snake.len(), 1);
        assert!(snake.body().is_empty());
    }

    #[rstest]
    #[case(Direction::North)]
    #[case(Direction::East)]
    #[case(Direction::South)]
    #[case(Direction::West)]
    fn reversing_is_rejected(#[case] d: Direction) {
        let mut snake = Snake::new(Cell::new(5, 5), d, 3);
        assert!(!snake.set_direction(d.reverse()));
        assert_eq!(snake.direction(), d);
        assert!(!snake.set_direction(d.reverse()));
        assert_eq!(snake.direction(), d);
    }

    #[rstest]
    #[case(Direction::East, Direction::North)]
    #[case(Direction::East, Direction::South)]
    #[case(Direction::East, Direction::East)]
    #[case(Direction::North, Direction::West)]
    fn turning_is_accepted(#[case] start: Direction, #[case] turn: Direction) {
        let mut snake = Snake::new(Cell::new(5, 5), start, 3);
        assert!(snake.set_direction(turn));
        assert_eq!(snake.direction(), turn);
    }

    #[test]
    fn turning_does_not_move() {
        let mut snake = starting_snake();
        let before = snake.occupied();
        snake.set_direction(Direction::South);
        assert_eq!(snake.occupied(), before);
    }

    #[test]
    fn step_keeps_length() {
        let mut snake = starting_snake();
        let head = snake.step();
        assert_eq!(head, Cell::new(15, 11));
        assert_eq!(snake.head(), head);
        assert_eq!(
            snake.cells().collect::<Vec<_>>(),
            [Cell::new(15, 11), Cell::new(14, 11), Cell::new(13, 11)]
        );
    }

    #[test]
    fn step_with_growth() {
        let mut snake = starting_snake();
        snake.queue_growth(2);
        snake.step();
        assert_eq!(snake.len(), 4);
        snake.step();
        assert_eq!(snake.len(), 5);
        snake.step();
        assert_eq!(snake.len(), 5);
        assert_eq!(snake.pending_growth, 0);
    }

    #[test]
    fn step_ignores_bounds() {
        let mut snake = Snake::new(Cell::new(0, 3), Direction::West, 2);
        assert_eq!(snake.step(), Cell::new(-1, 3));
    }

    #[test]
    fn steps_are_adjacent_under_turns() {
        let mut snake = starting_snake();
        let turns = [
            Direction::North,
            Direction::West,
            Direction::West,
            Direction::South,
            Direction::East,
            Direction::North,
            Direction::South,
        ];
        for d in turns {
            snake.set_direction(d);
            let old = snake.head();
            let new = snake.step();
            assert_eq!(new, old.neighbor(snake.direction()));
            assert_eq!((new.x - old.x).abs() + (new.y - old.y).abs(), 1);
            assert_eq!(snake.len(), 3);
        }
    }
}
