use rand::Rng;
use rand::rngs::StdRng;

/// A source of uniform draws in `[0, 1)`.
///
/// The simulator only ever asks for one number at a time, in a fixed order,
/// so any source that replays the same sequence replays the same trial.
pub trait DrawSource {
    /// The next uniform value in `[0, 1)`.
    fn next_draw(&mut self) -> f64;
}

impl DrawSource for StdRng {
    fn next_draw(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// A fixed script of draws, replayed in a loop.
///
/// An empty script yields `0.0` forever.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDraws {
    script: Vec<f64>,
    position: usize,
    drawn: u64,
}

impl ScriptedDraws {
    /// Create a source that cycles through `script`.
    pub fn new(script: impl Into<Vec<f64>>) -> Self {
        Self {
            script: script.into(),
            position: 0,
            drawn: 0,
        }
    }

    /// Number of values handed out so far.
    pub fn drawn(&self) -> u64 {
        self.drawn
    }
}

impl DrawSource for ScriptedDraws {
    fn next_draw(&mut self) -> f64 {
        self.drawn += 1;
        let Some(&value) = self.script.get(self.position) else {
            return 0.0;
        };
        self.position = (self.position + 1) % self.script.len();
        value
    }
}
