/// a fire-and-forget bounce effect. implementations must not block the caller and must swallow
/// their own failures, the game state never depends on whether a sound was heard.
pub trait SoundPlayer {
    fn play_bounce(&self);
}

pub struct Silence;

impl SoundPlayer for Silence {
    fn play_bounce(&self) {}
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::Cell;

    use super::SoundPlayer;

    #[derive(Default)]
    pub(crate) struct BounceCounter(Cell<u32>);

    impl BounceCounter {
        pub(crate) fn count(&self) -> u32 {
            self.0.get()
        }
    }

    impl SoundPlayer for BounceCounter {
        fn play_bounce(&self) {
            self.0.set(self.0.get() + 1);
        }
    }
}
