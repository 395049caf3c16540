mod banner;
mod direction;
mod food;
mod grid;
mod snake;
pub(crate) use self::direction::Direction;
pub(crate) use self::food::FoodSpawner;
pub(crate) use self::grid::{Cell, Grid};
use self::banner::Banner;
use self::snake::Snake;
use crate::consts;
use crate::util::{center_rect, get_display_area};
use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Position, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Widget},
    Frame,
};
use std::time::Duration;

/// The complete state of a single game, from the snake's first move until
/// the player restarts
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Game {
    grid: Grid,
    snake: Snake,
    /// `None` only once the snake has left no room on the grid for food
    food: Option<Cell>,
    score: u32,
    high_score: u32,
    /// Snake movements per second
    tick_rate: f64,
    state: GameState,
}

impl Game {
    /// Start a new game on the spawner's grid.  `high_score` is the best score
    /// achieved in previous games.
    pub(crate) fn new<R: Rng>(spawner: &mut FoodSpawner<R>, high_score: u32) -> Game {
        let grid = spawner.grid();
        let snake = Snake::new(grid.center(), Direction::East, consts::INITIAL_SNAKE_LENGTH);
        let food = spawner.spawn(&snake.occupied());
        let state = if food.is_some() {
            GameState::Running
        } else {
            GameState::GameOver
        };
        Game {
            grid,
            snake,
            food,
            score: 0,
            high_score,
            tick_rate: consts::INITIAL_TICK_RATE,
            state,
        }
    }

    /// Advance the game by one step.  Does nothing unless the game is
    /// running.
    pub(crate) fn tick<R: Rng>(&mut self, spawner: &mut FoodSpawner<R>) -> Tick {
        if !self.running() {
            return Tick::Idle;
        }
        let head = self.snake.step();
        let hit_wall = !self.grid.contains(head);
        let hit_self = self.snake.body().contains(&head);
        if hit_wall || hit_self {
            self.state = GameState::GameOver;
            return Tick::GameOver;
        }
        if self.food != Some(head) {
            return Tick::Moved;
        }
        self.score = self.score.saturating_add(1);
        self.snake.queue_growth(consts::SNAKE_GROWTH);
        self.tick_rate += consts::TICK_RATE_INCREMENT;
        self.high_score = self.high_score.max(self.score);
        self.food = spawner.spawn(&self.snake.occupied());
        if self.food.is_none() {
            log::info!("No room left on the board for food");
            self.state = GameState::GameOver;
            return Tick::GameOver;
        }
        Tick::Ate
    }

    /// Point the snake in a new direction, unless that would reverse it.
    /// Returns whether the turn was accepted.
    pub(crate) fn set_direction(&mut self, direction: Direction) -> bool {
        self.snake.set_direction(direction)
    }

    /// Pause a running game or resume a paused one.  A finished game stays
    /// finished.
    pub(crate) fn toggle_pause(&mut self) {
        self.state = match self.state {
            GameState::Running => GameState::Paused,
            GameState::Paused => GameState::Running,
            GameState::GameOver => GameState::GameOver,
        };
    }

    pub(crate) fn state(&self) -> GameState {
        self.state
    }

    pub(crate) fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn high_score(&self) -> u32 {
        self.high_score
    }

    pub(crate) fn tick_rate(&self) -> f64 {
        self.tick_rate
    }

    /// Time between snake movements at the current tick rate
    pub(crate) fn tick_period(&self) -> Duration {
        Duration::from_secs_f64(self.tick_rate.recip())
    }

    pub(crate) fn snake(&self) -> &Snake {
        &self.snake
    }

    pub(crate) fn food(&self) -> Option<Cell> {
        self.food
    }

    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    fn running(&self) -> bool {
        self.state == GameState::Running
    }

    /// Whether the snake's head is sitting on one of its body cells
    fn bitten(&self) -> bool {
        self.snake.body().contains(&self.snake.head())
    }
}

impl Widget for &Game {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [score_area, board_area, help_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(display);
        Line::styled(format!(" Score: {}", self.score()), consts::SCORE_BAR_STYLE)
            .render(score_area, buf);
        Line::styled(format!("High: {} ", self.high_score()), consts::SCORE_BAR_STYLE)
            .right_aligned()
            .render(score_area, buf);

        let block_size = Size {
            width: self
                .grid
                .width
                .saturating_mul(consts::CELL_WIDTH)
                .saturating_add(2),
            height: self.grid.height.saturating_add(2),
        };
        let block_area = center_rect(board_area, block_size);
        Block::bordered().render(block_area, buf);

        let mut board = Canvas {
            area: block_area.inner(Margin::new(1, 1)),
            buf,
        };
        for c in self.grid.cells() {
            board.draw_cell(c, "  ", Style::new());
        }
        for &c in self.snake.body() {
            board.draw_cell(c, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_BODY_STYLE);
        }
        if let Some(food) = self.food {
            board.draw_cell(food, consts::FOOD_SYMBOL, consts::FOOD_STYLE);
        }
        // Draw the head last so that, if it's a collision, we overwrite
        // whatever it's colliding with
        if self.state() == GameState::GameOver && self.bitten() {
            board.draw_cell(
                self.snake.head(),
                consts::COLLISION_SYMBOL,
                consts::COLLISION_STYLE,
            );
        } else {
            board.draw_cell(
                self.snake.head(),
                consts::SNAKE_HEAD_SYMBOL,
                consts::SNAKE_HEAD_STYLE,
            );
        }

        let banner = match self.state() {
            GameState::Running => None,
            GameState::Paused => Some(Banner::paused()),
            GameState::GameOver => Some(Banner::game_over(self.score())),
        };
        if let Some(banner) = banner {
            let banner_area = center_rect(block_area, banner.size());
            banner.render(banner_area, buf);
        }

        Line::from_iter([
            Span::raw(" "),
            Span::styled("←↑↓→", consts::KEY_STYLE),
            Span::raw(" move  "),
            Span::styled("p", consts::KEY_STYLE),
            Span::raw(" pause  "),
            Span::styled("r", consts::KEY_STYLE),
            Span::raw(" restart  "),
            Span::styled("q", consts::KEY_STYLE),
            Span::raw(" quit"),
        ])
        .render(help_area, buf);
    }
}

/// The board area of the screen, addressed in grid cells
#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    /// Draw `symbol` in the given grid cell on top of the cell's checkerboard
    /// background.  Cells outside the board are skipped.
    fn draw_cell(&mut self, cell: Cell, symbol: &str, style: Style) {
        let (Ok(col), Ok(row)) = (u16::try_from(cell.x), u16::try_from(cell.y)) else {
            return;
        };
        let Some(x) = col
            .checked_mul(consts::CELL_WIDTH)
            .and_then(|x| x.checked_add(self.area.x))
        else {
            return;
        };
        let Some(y) = self.area.y.checked_add(row) else {
            return;
        };
        for (dx, ch) in (0..consts::CELL_WIDTH).zip(symbol.chars()) {
            let Some(pos) = x.checked_add(dx).map(|x| Position::new(x, y)) else {
                return;
            };
            if !self.area.contains(pos) {
                return;
            }
            if let Some(c) = self.buf.cell_mut(pos) {
                c.set_char(ch);
                c.set_style(Style::reset().patch(tile_style(cell)).patch(style));
            }
        }
    }
}

/// Background style for a grid cell, alternating in a checkerboard pattern
fn tile_style(cell: Cell) -> Style {
    if (cell.x + cell.y).rem_euclid(2) == 0 {
        consts::GRID_LIGHT_STYLE
    } else {
        consts::GRID_DARK_STYLE
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum GameState {
    Running,
    Paused,
    /// The snake hit a wall or itself, or filled the board.  Only a restart
    /// leaves this state.
    GameOver,
}

/// What happened during a call to [`Game::tick()`]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Tick {
    /// The game is paused or over, so nothing happened
    Idle,
    Moved,
    Ate,
    /// The game has just ended
    GameOver,
}
