use std::{
    path::PathBuf,
    process::{Child, Command, Stdio},
    thread::Builder,
};

use log::debug;
use shared::SoundPlayer;

/// plays the bounce by handing an audio file to an external player program, e.g. `afplay`.
pub struct CommandSound {
    program: String,
    file: PathBuf,
}

impl CommandSound {
    pub fn new(program: impl Into<String>, file: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            file: file.into(),
        }
    }
}

impl SoundPlayer for CommandSound {
    fn play_bounce(&self) {
        // the terminal is in raw mode, so the player must not inherit it.
        let spawned = Command::new(&self.program)
            .arg(&self.file)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();
        match spawned {
            Ok(child) => reap(child),
            Err(err) => debug!("failed to run {} {}: {err}", self.program, self.file.display()),
        }
    }
}

fn reap(mut child: Child) {
    let spawned = Builder::new()
        .name("sound_reaper".to_owned())
        .spawn(move || {
            let _ = child.wait();
        });
    if let Err(err) = spawned {
        debug!("failed to spawn sound reaper: {err}");
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use shared::SoundPlayer;

    use super::CommandSound;

    #[test]
    fn does_not_wait_for_the_player() {
        let started = Instant::now();
        CommandSound::new("sleep", "3").play_bounce();
        assert!(started.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn missing_player_is_ignored() {
        CommandSound::new("definitely-not-an-audio-player", "bounce.wav").play_bounce();
    }

    #[test]
    fn missing_file_is_ignored() {
        // `true` ignores its arguments and exits straight away.
        CommandSound::new("true", "no-such-file.wav").play_bounce();
    }
}
