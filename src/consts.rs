//! Assorted constants & hard-coded configuration
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};

/// Width of the playing field, in cells
pub(crate) const GRID_WIDTH: u16 = 28;

/// Height of the playing field, in cells
pub(crate) const GRID_HEIGHT: u16 = 22;

/// Number of terminal columns used to draw a single grid cell.  Terminal
/// character cells are roughly twice as tall as they are wide, so this makes
/// the grid cells look square.
pub(crate) const CELL_WIDTH: u16 = 2;

/// Snake movements per second at the start of a game
pub(crate) const INITIAL_TICK_RATE: f64 = 10.0;

/// How much the tick rate increases each time the snake eats
pub(crate) const TICK_RATE_INCREMENT: f64 = 0.6;

/// Length of the snake at the start of a game
pub(crate) const INITIAL_SNAKE_LENGTH: usize = 3;

/// How many cells the snake's length increases by upon eating
pub(crate) const SNAKE_GROWTH: usize = 1;

/// Number of random draws the food spawner makes before falling back to
/// scanning the whole grid for free cells
pub(crate) const FOOD_SPAWN_ATTEMPTS: usize = 100;

/// Name of the file in which the high score is stored.  By default, this
/// lives in the same directory as the executable.
pub(crate) const HIGH_SCORE_FILE_NAME: &str = "snake_highscore.txt";

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window: a score bar, the bordered board, and a help line.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: GRID_WIDTH * CELL_WIDTH + 2,
    height: GRID_HEIGHT + 4,
};

/// Glyph for the snake's head
pub(crate) const SNAKE_HEAD_SYMBOL: &str = "██";

/// Glyph for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: &str = "▓▓";

/// Glyph for the food
pub(crate) const FOOD_SYMBOL: &str = "●";

/// Glyph for the snake's head when it's run into itself
pub(crate) const COLLISION_SYMBOL: &str = "××";

/// Background of the board cells whose coordinates sum to an even number
pub(crate) const GRID_LIGHT_STYLE: Style = Style::new().bg(Color::Rgb(24, 24, 24));

/// Background of the remaining board cells
pub(crate) const GRID_DARK_STYLE: Style = Style::new().bg(Color::Rgb(28, 28, 28));

/// Style for the snake's head
pub(crate) const SNAKE_HEAD_STYLE: Style = Style::new()
    .fg(Color::LightGreen)
    .add_modifier(Modifier::BOLD);

/// Style for the snake's body
pub(crate) const SNAKE_BODY_STYLE: Style = Style::new().fg(Color::Green);

/// Style for the food
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::LightRed);

/// Style for [`COLLISION_SYMBOL`]
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);
