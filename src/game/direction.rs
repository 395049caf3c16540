use thiserror::Error;

/// A heading on the grid.  North is towards the top of the screen, i.e.,
/// towards decreasing `y`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Return the unit vector `(dx, dy)` for the direction
    pub(crate) fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }

    pub(crate) fn reverse(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }
}

/// Checked conversion from a raw `(dx, dy)` step.  A `Direction` value can
/// never be the zero vector or a diagonal, so turning the snake takes a
/// `Direction` and only this conversion has to reject such steps.
impl TryFrom<(i32, i32)> for Direction {
    type Error = InvalidDirection;

    fn try_from((dx, dy): (i32, i32)) -> Result<Direction, InvalidDirection> {
        match (dx, dy) {
            (0, -1) => Ok(Direction::North),
            (1, 0) => Ok(Direction::East),
            (0, 1) => Ok(Direction::South),
            (-1, 0) => Ok(Direction::West),
            _ => Err(InvalidDirection { dx, dy }),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("({dx}, {dy}) is not a unit vector along an axis")]
pub(crate) struct InvalidDirection {
    dx: i32,
    dy: i32,
}
