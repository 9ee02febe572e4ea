use log::debug;

use crate::{
    game_state::{Ball, GameState, Player},
    sound::SoundPlayer,
};

pub const WALL_Y: f32 = 290.0;
pub const WALL_X: f32 = 390.0;
pub const PADDLE_LANE_X: f32 = 340.0;
/// half the band around a paddle's centre that bounces the ball. narrower than the drawn
/// paddle ([`crate::game_state::PADDLE_HALF_HEIGHT`]).
pub const COLLISION_HALF_HEIGHT: f32 = 50.0;

/// advances the simulation by one tick.
///
/// the checks run in a fixed order and are not mutually exclusive: a ball that satisfies several
/// of them in the same tick has every matching reflection applied.
pub fn tick<S: SoundPlayer + ?Sized>(state: &mut GameState, sound: &S) {
    state.ball.advance();
    check_y_walls(&mut state.ball);
    check_x_walls(state);
    check_paddle_collision(state, sound);
}

pub fn check_y_walls(ball: &mut Ball) {
    if ball.y() > WALL_Y {
        ball.set_y(WALL_Y);
        ball.reflect_y();
    } else if ball.y() < -WALL_Y {
        ball.set_y(-WALL_Y);
        ball.reflect_y();
    }
}

/// returns the player who scored, if any.
pub fn check_x_walls(state: &mut GameState) -> Option<Player> {
    let scorer = if state.ball.x() > WALL_X {
        Player::A
    } else if state.ball.x() < -WALL_X {
        Player::B
    } else {
        return None;
    };
    state.scoreboard.award(scorer);
    debug!("player {scorer:?} scored: {}", state.scoreboard.text());
    state.ball.reset();
    Some(scorer)
}

/// returns the player whose paddle the ball bounced off, if any.
pub fn check_paddle_collision<S: SoundPlayer + ?Sized>(
    state: &mut GameState,
    sound: &S,
) -> Option<Player> {
    let ball = &state.ball;
    let paddle = if ball.x() < -PADDLE_LANE_X && within_band(ball.y(), state.paddle_a.y()) {
        &state.paddle_a
    } else if ball.x() > PADDLE_LANE_X && within_band(ball.y(), state.paddle_b.y()) {
        &state.paddle_b
    } else {
        return None;
    };
    let hit = paddle.owner();
    state.ball.reflect_x();
    sound.play_bounce();
    debug!("ball bounced off paddle {hit:?}");
    Some(hit)
}

fn within_band(ball_y: f32, paddle_y: f32) -> bool {
    ball_y < paddle_y + COLLISION_HALF_HEIGHT && ball_y > paddle_y - COLLISION_HALF_HEIGHT
}
