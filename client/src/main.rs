use std::{
    fs::File,
    io,
    path::{Path, PathBuf},
    process,
    sync::mpsc::channel,
    time::Duration,
};

use clap::Parser;
use env_logger::{Env, Target};
use game_loop::GameLoop;
use log::info;
use shared::{GameState, Silence, SoundPlayer};
use sound::CommandSound;
use surface::{Surface, SurfaceError};

mod game_loop;
mod input;
mod sound;
mod surface;

const TITLE: &str = "Pong";

/// Two-player pong in the terminal.
///
/// Player A: w / d. Player B: Up / Down. Esc, q or Ctrl-c to quit.
#[derive(Parser)]
#[command(version)]
struct Cli {
    /// Milliseconds to pause between ticks, 0 to run unpaced
    #[arg(long, default_value_t = 5)]
    tick_ms: u64,
    /// Never play the bounce sound
    #[arg(long)]
    mute: bool,
    /// Program used to play the bounce sound
    #[arg(long, default_value = "afplay")]
    sound_command: String,
    /// Audio file handed to the sound program
    #[arg(long, default_value = "bounce.wav")]
    sound_file: PathBuf,
    /// Write logs to this file, filtered by RUST_LOG
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn pacing(&self) -> Option<Duration> {
        (self.tick_ms > 0).then(|| Duration::from_millis(self.tick_ms))
    }

    fn sound(&self) -> Box<dyn SoundPlayer> {
        if self.mute {
            Box::new(Silence)
        } else {
            Box::new(CommandSound::new(&self.sound_command, &self.sound_file))
        }
    }
}

fn main() {
    let cli = Cli::parse();
    if let Some(log_file) = &cli.log_file {
        if let Err(err) = init_logging(log_file) {
            eprintln!("failed to open log file {}: {err}", log_file.display());
            process::exit(1);
        }
    }
    match run(&cli) {
        Ok(state) => println!("{}", state.scoreboard.text()),
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}

fn init_logging(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

// the surface is dropped, and the terminal restored, before any error is printed.
fn run(cli: &Cli) -> Result<GameState, SurfaceError> {
    let surface = Surface::create(TITLE)?;
    let (input_tx, input_rx) = channel();
    input::spawn_key_listener(input_tx)?;
    info!("pong started");
    GameLoop::new(GameState::new(), surface, cli.sound(), input_rx, cli.pacing()).run()
}
