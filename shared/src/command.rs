use crate::game_state::{GameState, Player};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// a single discrete paddle move, produced by a key press and applied by the game loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaddleCommand {
    pub player: Player,
    pub direction: Direction,
}

impl PaddleCommand {
    pub fn new(player: Player, direction: Direction) -> Self {
        Self { player, direction }
    }

    pub fn apply(self, state: &mut GameState) {
        let paddle = state.paddle_mut(self.player);
        match self.direction {
            Direction::Up => paddle.move_up(),
            Direction::Down => paddle.move_down(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        assert_position,
        command::{Direction, PaddleCommand},
        game_state::{GameState, Player},
    };

    #[test]
    fn moves_only_the_owning_paddle() {
        let mut state = GameState::new();
        PaddleCommand::new(Player::A, Direction::Up).apply(&mut state);
        assert_position!(state.paddle_a.position(), (-350.0, 20.0));
        assert_position!(state.paddle_b.position(), (350.0, 0.0));

        PaddleCommand::new(Player::B, Direction::Down).apply(&mut state);
        PaddleCommand::new(Player::B, Direction::Down).apply(&mut state);
        assert_position!(state.paddle_a.position(), (-350.0, 20.0));
        assert_position!(state.paddle_b.position(), (350.0, -40.0));
    }

    #[test]
    fn commands_leave_the_ball_alone() {
        let mut state = GameState::new();
        let ball = state.ball.clone();
        PaddleCommand::new(Player::A, Direction::Down).apply(&mut state);
        assert_eq!(state.ball, ball);
    }
}
