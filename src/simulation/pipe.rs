//! Moving barriers and pair spawning.
//!
//! Pipes always come in pairs: an upper barrier hanging from `y = 0` and a
//! lower one standing on the floor. The two barriers plus the gap between
//! them span the full field height.

use rand::Rng;

use super::params::Params;

/// A single barrier rectangle moving right to left.
#[derive(Debug, Clone, PartialEq)]
pub struct Pipe {
    /// Leading (left) edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Horizontal extent.
    pub width: f32,
    /// Vertical extent of the solid barrier.
    pub height: f32,
    /// Set once the pipe has scrolled out of play.
    pub retired: bool,
}

impl Pipe {
    /// Creates a pipe at the right edge of the field.
    ///
    /// With `height` given, the pipe stands on the floor: its top edge is at
    /// `field_height - height`. Without it, the pipe hangs from the ceiling
    /// with a random height of at least `min_pipe_height`, leaving room for
    /// a gap of `space` and a second minimum-height barrier.
    pub fn new<R: Rng>(height: Option<f32>, space: f32, params: &Params, rng: &mut R) -> Self {
        let (y, height) = match height {
            Some(height) => (params.field_height - height, height),
            None => {
                let range = (params.field_height - space - params.min_pipe_height * 2.0).max(0.0);
                (0.0, params.min_pipe_height + rng.random::<f32>() * range)
            }
        };

        Self {
            x: params.field_width,
            y,
            width: params.pipe_width,
            height,
            retired: false,
        }
    }

    /// Lower edge of the barrier. For an upper pipe this is the top of the gap.
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Trailing (right) edge.
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Scrolls the pipe one tick to the left.
    ///
    /// Retirement waits until `x + field_width < 0`, well after the pipe has
    /// left the visible field.
    pub fn update(&mut self, params: &Params) {
        self.x -= params.pipe_speed;
        if self.x + params.field_width < 0.0 {
            self.retired = true;
        }
    }

    /// Whether the point `(x, y)` lies inside the barrier, edges included.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.right() && y >= self.y && y <= self.bottom()
    }
}

/// Spawns an upper/lower pipe pair sharing one gap of `params.pipe_space`.
pub fn spawn_pair<R: Rng>(params: &Params, rng: &mut R) -> [Pipe; 2] {
    let upper = Pipe::new(None, params.pipe_space, params, rng);
    let lower_height = params.field_height - upper.height - params.pipe_space;
    let lower = Pipe::new(Some(lower_height), params.pipe_space, params, rng);
    log::trace!(
        "spawned pipe pair: upper height {:.1}, lower height {:.1}",
        upper.height,
        lower.height
    );
    [upper, lower]
}
