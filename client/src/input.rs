use std::{
    io,
    sync::mpsc::Sender,
    thread::{Builder, JoinHandle},
};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::warn;
use shared::{Direction, PaddleCommand, Player};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    Paddle(PaddleCommand),
    Resize(u16, u16),
    Quit,
}

/// maps a key-down event to what it does in the game. releases are never bound.
pub fn bind_key(key_event: KeyEvent) -> Option<Input> {
    if key_event.kind == KeyEventKind::Release {
        return None;
    }
    if key_event.modifiers.contains(KeyModifiers::CONTROL) && key_event.code == KeyCode::Char('c')
    {
        return Some(Input::Quit);
    }
    let paddle = |player, direction| Some(Input::Paddle(PaddleCommand::new(player, direction)));
    match key_event.code {
        KeyCode::Char('w') => paddle(Player::A, Direction::Up),
        KeyCode::Char('d') => paddle(Player::A, Direction::Down),
        KeyCode::Up => paddle(Player::B, Direction::Up),
        KeyCode::Down => paddle(Player::B, Direction::Down),
        KeyCode::Esc | KeyCode::Char('q') => Some(Input::Quit),
        _ => None,
    }
}

pub fn translate(event: Event) -> Option<Input> {
    match event {
        Event::Key(key_event) => bind_key(key_event),
        Event::Resize(cols, rows) => Some(Input::Resize(cols, rows)),
        _ => None,
    }
}

/// reads terminal events on their own thread and forwards the bound ones to the game loop.
/// must be started after the surface has put the terminal into raw mode.
pub fn spawn_key_listener(input_tx: Sender<Input>) -> io::Result<JoinHandle<()>> {
    Builder::new()
        .name("key_listener".to_owned())
        .spawn(move || loop {
            let event = match event::read() {
                Ok(event) => event,
                Err(err) => {
                    warn!("failed to read terminal event: {err}");
                    let _ = input_tx.send(Input::Quit);
                    return;
                }
            };
            if let Some(input) = translate(event) {
                if input_tx.send(input).is_err() {
                    // game loop is gone.
                    return;
                }
            }
        })
}
