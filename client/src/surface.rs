use std::{
    error::Error,
    fmt::Display,
    io::{self, stdout, Stdout, Write},
};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{
        self, disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen, SetTitle,
    },
    tty::IsTty,
};
use shared::{
    game_state::{
        BALL_HALF_SIZE, GAME_HEIGHT, GAME_WIDTH, PADDLE_HALF_HEIGHT, PADDLE_HALF_WIDTH,
        SCOREBOARD_Y,
    },
    GameState, Position,
};

const FILL: char = '█';
const EMPTY: char = ' ';

/// the terminal standing in for a window. nothing reaches the screen until [`Surface::redraw`].
pub struct Surface<W: Write> {
    out: W,
    cols: u16,
    rows: u16,
    buffer: Vec<u8>,
    owns_terminal: bool,
}

impl Surface<Stdout> {
    pub fn create(title: &str) -> Result<Self, SurfaceError> {
        let out = stdout();
        ensure_terminal(&out)?;
        let (cols, rows) = terminal::size().map_err(SurfaceError::DisplayUnavailable)?;
        enable_raw_mode().map_err(SurfaceError::DisplayUnavailable)?;
        // constructed before the remaining setup so a failure below still restores the terminal.
        let mut surface = Self {
            out,
            cols,
            rows,
            buffer: Vec::new(),
            owns_terminal: true,
        };
        execute!(
            surface.out,
            SetTitle(title),
            EnterAlternateScreen,
            Hide,
            SetBackgroundColor(Color::Black),
            Clear(ClearType::All),
        )
        .map_err(SurfaceError::DisplayUnavailable)?;
        Ok(surface)
    }
}

fn ensure_terminal(out: &impl IsTty) -> Result<(), SurfaceError> {
    if out.is_tty() {
        Ok(())
    } else {
        Err(SurfaceError::DisplayUnavailable(io::Error::new(
            io::ErrorKind::Unsupported,
            "stdout is not a terminal",
        )))
    }
}

impl<W: Write> Surface<W> {
    /// draws into any writer without touching terminal modes.
    #[cfg(test)]
    pub(crate) fn with_writer(out: W, cols: u16, rows: u16) -> Self {
        Self {
            out,
            cols,
            rows,
            buffer: Vec::new(),
            owns_terminal: false,
        }
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
    }

    /// composes the whole frame and writes it out with a single flush.
    pub fn redraw(&mut self, state: &GameState) -> Result<(), SurfaceError> {
        let frame = Frame::compose(state, self.cols, self.rows);
        self.buffer.clear();
        queue!(
            self.buffer,
            SetBackgroundColor(Color::Black),
            SetForegroundColor(Color::White),
        )?;
        for (row, line) in frame.lines().enumerate() {
            queue!(self.buffer, MoveTo(0, row as u16), Print(line))?;
        }
        self.out.write_all(&self.buffer)?;
        self.out.flush()?;
        Ok(())
    }

    #[cfg(test)]
    fn output(&self) -> &W {
        &self.out
    }
}

impl<W: Write> Drop for Surface<W> {
    fn drop(&mut self) {
        if self.owns_terminal {
            let _ = execute!(self.out, ResetColor, Show, LeaveAlternateScreen);
            let _ = disable_raw_mode();
        }
    }
}

/// the game state projected onto a grid of terminal cells.
#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Frame {
    cols: u16,
    rows: u16,
    cells: Vec<char>,
}

impl Frame {
    pub fn compose(state: &GameState, cols: u16, rows: u16) -> Self {
        let mut frame = Self {
            cols,
            rows,
            cells: vec![EMPTY; cols as usize * rows as usize],
        };
        for paddle in [&state.paddle_a, &state.paddle_b] {
            frame.fill_rect(paddle.position(), PADDLE_HALF_WIDTH, PADDLE_HALF_HEIGHT);
        }
        frame.fill_rect(state.ball.position(), BALL_HALF_SIZE, BALL_HALF_SIZE);
        frame.write_centred(Position::new(0.0, SCOREBOARD_Y), state.scoreboard.text());
        frame
    }

    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.cells
            .chunks(self.cols.max(1) as usize)
            .map(|line| line.iter().collect())
    }

    fn column(&self, x: f32) -> i32 {
        ((x + GAME_WIDTH / 2.0) / GAME_WIDTH * self.cols as f32).floor() as i32
    }

    fn row(&self, y: f32) -> i32 {
        ((GAME_HEIGHT / 2.0 - y) / GAME_HEIGHT * self.rows as f32).floor() as i32
    }

    fn set(&mut self, col: i32, row: i32, c: char) {
        if (0..self.cols as i32).contains(&col) && (0..self.rows as i32).contains(&row) {
            self.cells[row as usize * self.cols as usize + col as usize] = c;
        }
    }

    // every shape covers at least one cell, however coarse the grid.
    fn fill_rect(&mut self, centre: Position, half_width: f32, half_height: f32) {
        let left = self.column(centre.x - half_width);
        let right = self.column(centre.x + half_width).max(left + 1);
        let top = self.row(centre.y + half_height);
        let bottom = self.row(centre.y - half_height).max(top + 1);
        for row in top.max(0)..bottom.min(self.rows as i32) {
            for col in left.max(0)..right.min(self.cols as i32) {
                self.set(col, row, FILL);
            }
        }
    }

    fn write_centred(&mut self, centre: Position, text: &str) {
        let row = self.row(centre.y);
        let start = self.column(centre.x) - text.chars().count() as i32 / 2;
        for (i, c) in text.chars().enumerate() {
            self.set(start + i as i32, row, c);
        }
    }

    #[cfg(test)]
    fn cell(&self, col: usize, row: usize) -> char {
        self.cells[row * self.cols as usize + col]
    }
}

#[derive(Debug)]
pub enum SurfaceError {
    DisplayUnavailable(io::Error),
    Io(io::Error),
}

impl Display for SurfaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SurfaceError::DisplayUnavailable(err) => write!(f, "display unavailable: {err}"),
            SurfaceError::Io(err) => write!(f, "failed to draw to the terminal: {err}"),
        }
    }
}

impl Error for SurfaceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SurfaceError::DisplayUnavailable(err) | SurfaceError::Io(err) => Some(err),
        }
    }
}

impl From<io::Error> for SurfaceError {
    fn from(err: io::Error) -> Self {
        SurfaceError::Io(err)
    }
}
