pub mod command;
pub mod game_state;
pub mod rules;
pub mod sound;

pub use command::{Direction, PaddleCommand};
pub use game_state::{Ball, GameState, Paddle, Player, Position, Scoreboard};
pub use rules::tick;
pub use sound::{Silence, SoundPlayer};

#[cfg(test)]
#[macro_export]
macro_rules! assert_position {
    ($position:expr, ($x:expr, $y:expr) $(,)?) => {
        assert_eq!($position, $crate::game_state::Position::new($x, $y))
    };
}

#[cfg(test)]
#[macro_export]
macro_rules! assert_velocity {
    ($ball:expr, ($dx:expr, $dy:expr) $(,)?) => {
        assert_eq!(($ball.dx(), $ball.dy()), ($dx, $dy))
    };
}

#[cfg(test)]
#[macro_export]
macro_rules! assert_score {
    ($state:expr, ($a:expr, $b:expr) $(,)?) => {
        assert_eq!(
            ($state.scoreboard.score_a(), $state.scoreboard.score_b()),
            ($a, $b)
        )
    };
}
