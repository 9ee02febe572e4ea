/// width of the logical play field. the origin sits at its centre.
pub const GAME_WIDTH: f32 = 800.0;
pub const GAME_HEIGHT: f32 = 600.0;
pub const PADDLE_X: f32 = 350.0;
/// visual extent only. collisions use [`crate::rules::COLLISION_HALF_HEIGHT`].
pub const PADDLE_HALF_HEIGHT: f32 = 125.0;
pub const PADDLE_HALF_WIDTH: f32 = 10.0;
pub const PADDLE_STEP: f32 = 20.0;
pub const BALL_HALF_SIZE: f32 = 10.0;
pub const BALL_SPEED: i32 = 2;
pub const SCOREBOARD_Y: f32 = 260.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Player {
    A,
    B,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone)]
#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Paddle {
    owner: Player,
    position: Position,
}

impl Paddle {
    pub fn new(owner: Player, x: f32, y: f32) -> Self {
        Self {
            owner,
            position: Position::new(x, y),
        }
    }

    pub fn owner(&self) -> Player {
        self.owner
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn x(&self) -> f32 {
        self.position.x
    }

    pub fn y(&self) -> f32 {
        self.position.y
    }

    // no clamping: repeated input may push a paddle off the field.
    pub fn move_up(&mut self) {
        self.position.y += PADDLE_STEP;
    }

    pub fn move_down(&mut self) {
        self.position.y -= PADDLE_STEP;
    }
}

/// the ball's velocity only ever changes sign, never magnitude.
#[derive(Clone)]
#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Ball {
    position: Position,
    dx: i32,
    dy: i32,
}

impl Ball {
    pub fn new() -> Self {
        Self::with_state(Position::ORIGIN, BALL_SPEED, BALL_SPEED)
    }

    pub fn with_state(position: Position, dx: i32, dy: i32) -> Self {
        Self { position, dx, dy }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn x(&self) -> f32 {
        self.position.x
    }

    pub fn y(&self) -> f32 {
        self.position.y
    }

    pub fn dx(&self) -> i32 {
        self.dx
    }

    pub fn dy(&self) -> i32 {
        self.dy
    }

    pub fn advance(&mut self) {
        self.position.x += self.dx as f32;
        self.position.y += self.dy as f32;
    }

    pub fn set_y(&mut self, y: f32) {
        self.position.y = y;
    }

    pub fn reflect_x(&mut self) {
        self.dx = -self.dx;
    }

    pub fn reflect_y(&mut self) {
        self.dy = -self.dy;
    }

    /// back to the origin with the horizontal direction flipped from whatever it was at the time
    /// of the reset. there is no canonical serve direction.
    pub fn reset(&mut self) {
        self.position = Position::ORIGIN;
        self.reflect_x();
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone)]
#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Scoreboard {
    score_a: u32,
    score_b: u32,
    text: String,
}

impl Scoreboard {
    pub fn new() -> Self {
        let mut scoreboard = Self {
            score_a: 0,
            score_b: 0,
            text: String::new(),
        };
        scoreboard.update(0, 0);
        scoreboard
    }

    pub fn score_a(&self) -> u32 {
        self.score_a
    }

    pub fn score_b(&self) -> u32 {
        self.score_b
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// clears the previous text and renders it again from scratch.
    pub fn update(&mut self, score_a: u32, score_b: u32) {
        self.score_a = score_a;
        self.score_b = score_b;
        self.text = format!("Player A: {score_a} Player B: {score_b}");
    }

    pub fn award(&mut self, player: Player) {
        match player {
            Player::A => self.update(self.score_a + 1, self.score_b),
            Player::B => self.update(self.score_a, self.score_b + 1),
        }
    }
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone)]
#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct GameState {
    pub paddle_a: Paddle,
    pub paddle_b: Paddle,
    pub ball: Ball,
    pub scoreboard: Scoreboard,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            paddle_a: Paddle::new(Player::A, -PADDLE_X, 0.0),
            paddle_b: Paddle::new(Player::B, PADDLE_X, 0.0),
            ball: Ball::new(),
            scoreboard: Scoreboard::new(),
        }
    }

    pub fn paddle_mut(&mut self, player: Player) -> &mut Paddle {
        match player {
            Player::A => &mut self.paddle_a,
            Player::B => &mut self.paddle_b,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
