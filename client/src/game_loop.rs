use std::{
    io::Write,
    ops::ControlFlow,
    sync::mpsc::{Receiver, TryRecvError},
    thread::sleep,
    time::Duration,
};

use log::info;
use shared::{tick, GameState, SoundPlayer};

use crate::{
    input::Input,
    surface::{Surface, SurfaceError},
};

/// the only thing that moves time forward. owns the game state outright, key presses reach it as
/// [`Input`] messages drained at the start of every tick.
pub struct GameLoop<W: Write> {
    state: GameState,
    surface: Surface<W>,
    sound: Box<dyn SoundPlayer>,
    input_rx: Receiver<Input>,
    /// `None` spins without pausing between ticks.
    pacing: Option<Duration>,
}

impl<W: Write> GameLoop<W> {
    pub fn new(
        state: GameState,
        surface: Surface<W>,
        sound: Box<dyn SoundPlayer>,
        input_rx: Receiver<Input>,
        pacing: Option<Duration>,
    ) -> Self {
        Self {
            state,
            surface,
            sound,
            input_rx,
            pacing,
        }
    }

    /// runs until a quit input arrives. there is no other way out.
    pub fn run(mut self) -> Result<GameState, SurfaceError> {
        info!("game loop started, pacing {:?}", self.pacing);
        while self.step()?.is_continue() {
            if let Some(pacing) = self.pacing {
                sleep(pacing);
            }
        }
        info!("game loop stopped: {}", self.state.scoreboard.text());
        Ok(self.state)
    }

    /// one tick: apply pending input, flush the previous tick's state to the screen, then move
    /// the ball and run the wall, scoring and paddle checks.
    pub fn step(&mut self) -> Result<ControlFlow<()>, SurfaceError> {
        if self.drain_inputs().is_break() {
            return Ok(ControlFlow::Break(()));
        }
        self.surface.redraw(&self.state)?;
        tick(&mut self.state, &*self.sound);
        Ok(ControlFlow::Continue(()))
    }

    fn drain_inputs(&mut self) -> ControlFlow<()> {
        loop {
            match self.input_rx.try_recv() {
                Ok(Input::Paddle(command)) => command.apply(&mut self.state),
                Ok(Input::Resize(cols, rows)) => self.surface.resize(cols, rows),
                Ok(Input::Quit) => return ControlFlow::Break(()),
                // a vanished key listener leaves the game running without input.
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => {
                    return ControlFlow::Continue(())
                }
            }
        }
    }

    #[cfg(test)]
    fn state(&self) -> &GameState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc::{channel, Sender};

    use shared::{Direction, GameState, PaddleCommand, Player, Silence};

    use super::GameLoop;
    use crate::{input::Input, surface::Surface};

    fn game_loop() -> (GameLoop<Vec<u8>>, Sender<Input>) {
        let (input_tx, input_rx) = channel();
        let game_loop = GameLoop::new(
            GameState::new(),
            Surface::with_writer(Vec::new(), 80, 30),
            Box::new(Silence),
            input_rx,
            None,
        );
        (game_loop, input_tx)
    }

    fn paddle(player: Player, direction: Direction) -> Input {
        Input::Paddle(PaddleCommand::new(player, direction))
    }

    #[test]
    fn step_advances_ball() {
        let (mut game_loop, _input_tx) = game_loop();
        assert!(game_loop.step().unwrap().is_continue());
        assert_eq!(game_loop.state().ball.x(), 2.0);
        assert_eq!(game_loop.state().ball.y(), 2.0);
    }

    #[test]
    fn inputs_applied_in_order_before_tick() {
        let (mut game_loop, input_tx) = game_loop();
        input_tx.send(paddle(Player::A, Direction::Up)).unwrap();
        input_tx.send(paddle(Player::A, Direction::Up)).unwrap();
        input_tx.send(paddle(Player::B, Direction::Down)).unwrap();
        input_tx.send(paddle(Player::A, Direction::Down)).unwrap();
        assert!(game_loop.step().unwrap().is_continue());
        assert_eq!(game_loop.state().paddle_a.y(), 20.0);
        assert_eq!(game_loop.state().paddle_b.y(), -20.0);
        assert_eq!(game_loop.state().paddle_a.x(), -350.0);
    }

    #[test]
    fn quit_stops_before_tick() {
        let (mut game_loop, input_tx) = game_loop();
        input_tx.send(Input::Quit).unwrap();
        assert!(game_loop.step().unwrap().is_break());
        assert_eq!(game_loop.state().ball.x(), 0.0);
    }

    #[test]
    fn run_until_quit() {
        let (game_loop, input_tx) = game_loop();
        input_tx.send(Input::Quit).unwrap();
        let state = game_loop.run().unwrap();
        assert_eq!(state.scoreboard.text(), "Player A: 0 Player B: 0");
    }

    #[test]
    fn disconnected_input_keeps_running() {
        let (mut game_loop, input_tx) = game_loop();
        drop(input_tx);
        for _ in 0..196 {
            assert!(game_loop.step().unwrap().is_continue());
        }
        assert_eq!(game_loop.state().scoreboard.text(), "Player A: 1 Player B: 0");
    }
}
