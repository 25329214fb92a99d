use std::time::Duration;

use egui::{Pos2, Rect, Vec2};
use itertools::Itertools;

use crate::breakout::geometry::{rects_overlap, spans_overlap};

/// TOP / LEFT corner is 0/0
pub const MODEL_GRID_LEN_X: f32 = 800.0;
pub const MODEL_GRID_LEN_Y: f32 = 600.0;

pub const TIME_GRANULARITY: Duration = Duration::from_millis(20);

const PADDLE_LEN_X: f32 = 100.0;
const PADDLE_LEN_Y: f32 = 20.0;
/// the paddle hovers a bit above the lower screen edge
const PADDLE_POS_Y: f32 = MODEL_GRID_LEN_Y - PADDLE_LEN_Y - 10.0;
const PADDLE_SPEED_PER_SEC: f32 = 1000.0;

const BALL_SIZE: f32 = 10.0;
/// constant speed along each axis; collisions only flip a component's sign
const BALL_SPEED_PER_SEC: f32 = 240.0;

const BRICK_LEN_X: f32 = 75.0;
const BRICK_LEN_Y: f32 = 20.0;

const BRICKS_SETUP_SPACING: f32 = 10.0;
const BRICKS_SETUP_ROWS: usize = 5;
const BRICKS_SETUP_COLUMNS: usize = 8;
const BRICKS_SETUP_DISTANCE_LEFT_WALL: f32 = 35.0;
const BRICKS_SETUP_FIRST_ROW_TOP_Y: f32 = 50.0;

const BRICK_SCORE: u32 = 10;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameState {
    NotStarted,
    Playing,
    GameOver,
}

#[derive(Clone, Debug)]
pub struct BreakoutMechanics {
    pub state: GameState,
    pub bricks: Vec<Brick>,
    pub ball: Ball,
    pub paddle: Paddle,
    pub score: u32,
}

impl BreakoutMechanics {
    pub fn new() -> Self {
        Self {
            state: GameState::NotStarted,
            bricks: BreakoutMechanics::initial_bricks(),
            ball: BreakoutMechanics::initial_ball(),
            paddle: BreakoutMechanics::initial_paddle(),
            score: 0,
        }
    }

    fn initial_bricks() -> Vec<Brick> {
        fn create_brick(row: usize, col: usize) -> Brick {
            let min = Pos2::new(
                col as f32 * (BRICK_LEN_X + BRICKS_SETUP_SPACING) + BRICKS_SETUP_DISTANCE_LEFT_WALL,
                row as f32 * (BRICK_LEN_Y + BRICKS_SETUP_SPACING) + BRICKS_SETUP_FIRST_ROW_TOP_Y,
            );
            Brick {
                shape: Rect::from_min_size(min, Vec2::new(BRICK_LEN_X, BRICK_LEN_Y)),
                active: true,
            }
        }

        (0..BRICKS_SETUP_ROWS)
            .cartesian_product(0..BRICKS_SETUP_COLUMNS)
            .map(|(row, col)| create_brick(row, col))
            .collect()
    }

    /// ball starts centered on the paddle, its box touching the paddle's top,
    /// heading up-right
    fn initial_ball() -> Ball {
        let paddle = BreakoutMechanics::initial_paddle();
        Ball {
            pos: Pos2::new(
                paddle.pos.x + PADDLE_LEN_X / 2.0 - BALL_SIZE / 2.0,
                paddle.pos.y - BALL_SIZE,
            ),
            velocity: Vec2::new(BALL_SPEED_PER_SEC, -BALL_SPEED_PER_SEC),
        }
    }

    fn initial_paddle() -> Paddle {
        Paddle {
            pos: Pos2::new(MODEL_GRID_LEN_X / 2.0 - PADDLE_LEN_X / 2.0, PADDLE_POS_Y),
        }
    }

    /// physically move one time step forward
    pub fn time_step(&mut self, input: GameInput) {
        match self.state {
            GameState::NotStarted | GameState::GameOver => {
                if input.confirm {
                    self.start_new_game();
                }
            }
            GameState::Playing => self.play_step(input),
        }
    }

    /// One whole-struct assignment brings back paddle, ball, score and the
    /// full brick set, then the round starts.
    fn start_new_game(&mut self) {
        *self = BreakoutMechanics::new();
        self.state = GameState::Playing;
        log::debug!("round started");
    }

    fn play_step(&mut self, input: GameInput) {
        self.paddle.steer(input.control);
        self.ball.proceed();
        self.handle_wall_collisions();
        if self.ball_lost() {
            self.state = GameState::GameOver;
            log::info!("game over, score: {}", self.score);
            return;
        }
        self.handle_paddle_collision();
        self.handle_brick_collisions();
    }

    fn handle_wall_collisions(&mut self) {
        let ball = &mut self.ball;
        if ball.pos.y <= 0.0 {
            ball.velocity.y = -ball.velocity.y;
        }
        if ball.pos.x <= 0.0 || ball.pos.x >= MODEL_GRID_LEN_X - BALL_SIZE {
            ball.velocity.x = -ball.velocity.x;
        }
    }

    fn ball_lost(&self) -> bool {
        self.ball.shape().max.y >= MODEL_GRID_LEN_Y
    }

    /// A paddle contact reflects the ball straight up, no matter where on the
    /// paddle it lands; the horizontal component stays untouched.
    fn handle_paddle_collision(&mut self) {
        let paddle_shape = self.paddle.shape();
        let ball_shape = self.ball.shape();
        if ball_shape.max.y >= paddle_shape.min.y
            && spans_overlap(ball_shape.min.x..ball_shape.max.x, paddle_shape.min.x..paddle_shape.max.x)
        {
            self.ball.velocity.y = -self.ball.velocity.y;
        }
    }

    /// Every brick overlapped in this step counts: each one flips the
    /// vertical velocity again, so a pair hit at once cancels out.
    fn handle_brick_collisions(&mut self) {
        let ball_shape = self.ball.shape();
        for brick in self.bricks.iter_mut().filter(|b| b.active) {
            if rects_overlap(&ball_shape, &brick.shape) {
                brick.active = false;
                self.ball.velocity.y = -self.ball.velocity.y;
                self.score += BRICK_SCORE;
                log::debug!("brick destroyed, score: {}", self.score);
            }
        }
    }
}

#[derive(Copy, Clone)]
pub struct GameInput {
    pub control: PaddleControl,
    /// confirm key went down this step
    pub confirm: bool,
    /// cancel key went down this step
    pub cancel: bool,
}

impl GameInput {
    pub fn none() -> Self {
        Self {
            control: PaddleControl::None,
            confirm: false,
            cancel: false,
        }
    }

    pub fn steer(control: PaddleControl) -> Self {
        Self {
            control,
            confirm: false,
            cancel: false,
        }
    }

    pub fn confirmed() -> Self {
        Self {
            control: PaddleControl::None,
            confirm: true,
            cancel: false,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PaddleControl {
    None,
    MoveLeft,
    MoveRight,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Brick {
    pub shape: Rect,
    pub active: bool,
}

/// A square ball moving in model space; `pos` is its upper-left corner
#[derive(Clone, Debug)]
pub struct Ball {
    pub pos: Pos2,
    pub velocity: Vec2,
}

impl Ball {
    pub fn shape(&self) -> Rect {
        Rect::from_min_size(self.pos, Vec2::splat(BALL_SIZE))
    }

    fn proceed(&mut self) {
        self.pos += self.velocity * TIME_GRANULARITY.as_secs_f32();
    }
}

#[derive(Clone, Debug)]
pub struct Paddle {
    pub pos: Pos2,
}

impl Paddle {
    pub fn shape(&self) -> Rect {
        Rect::from_min_size(self.pos, Vec2::new(PADDLE_LEN_X, PADDLE_LEN_Y))
    }

    /// move one time step by player control, pinned to the screen
    fn steer(&mut self, control: PaddleControl) {
        let step_len = PADDLE_SPEED_PER_SEC * TIME_GRANULARITY.as_secs_f32();
        match control {
            PaddleControl::None => {}
            PaddleControl::MoveLeft => self.pos.x -= step_len,
            PaddleControl::MoveRight => self.pos.x += step_len,
        }
        self.pos.x = self.pos.x.clamp(0.0, MODEL_GRID_LEN_X - PADDLE_LEN_X);
    }
}
