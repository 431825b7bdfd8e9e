//! Birds: a neural network coupled to simple vertical physics.

use ndarray::Array1;
use rand::Rng;

use super::brain::NeuralNetwork;
use super::params::Params;

/// Number of features a bird feeds its network.
pub const INPUT_SIZE: usize = 5;
/// Number of network outputs; the bird jumps when the second exceeds the first.
pub const OUTPUT_SIZE: usize = 2;

/// What a bird can see of the pipe ahead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeReading {
    /// Leading edge of the next pipe.
    pub next_x: f32,
    /// Upper edge of the gap.
    pub gap_top: f32,
    /// Lower edge of the gap.
    pub gap_bottom: f32,
}

impl PipeReading {
    /// Reading used when no pipe is in play: an open field ending at the right edge.
    pub fn open_field(params: &Params) -> Self {
        Self {
            next_x: params.field_width,
            gap_top: 0.0,
            gap_bottom: params.field_height,
        }
    }
}

/// A single agent in the population.
#[derive(Debug, Clone)]
pub struct Bird {
    /// Horizontal position, fixed for the bird's lifetime.
    pub x: f32,
    /// Vertical position (grows downward).
    pub y: f32,
    /// Vertical velocity.
    pub velocity: f32,
    /// Ticks survived.
    pub age: u32,
    /// Share of the generation's total age; zero until the generation ends.
    pub fitness: f32,
    /// Network that decides when to jump.
    pub brain: NeuralNetwork,
    /// Feature vector from the most recent decision.
    pub last_inputs: Array1<f32>,
    alive: bool,
}

impl Bird {
    /// Creates a founding bird with a fresh random network.
    pub fn new(params: &Params) -> Self {
        Self::with_brain(
            NeuralNetwork::new(INPUT_SIZE, params.hidden_size, OUTPUT_SIZE),
            params,
        )
    }

    /// Creates a founding bird whose network is drawn from `rng`.
    pub fn random<R: Rng>(params: &Params, rng: &mut R) -> Self {
        Self::with_brain(
            NeuralNetwork::new_with(INPUT_SIZE, params.hidden_size, OUTPUT_SIZE, rng),
            params,
        )
    }

    /// Creates a bird around an existing network, used as-is.
    pub fn with_brain(brain: NeuralNetwork, params: &Params) -> Self {
        Self {
            x: params.bird_x,
            y: params.bird_start_y,
            velocity: 0.0,
            age: 0,
            fitness: 0.0,
            brain,
            last_inputs: Array1::zeros(INPUT_SIZE),
            alive: true,
        }
    }

    /// Creates an offspring: a copy of `parent` mutated with `params.mutation`.
    pub fn from_parent<R: Rng>(parent: &NeuralNetwork, params: &Params, rng: &mut R) -> Self {
        let mut brain = parent.clone();
        brain.mutate_with(&params.mutation, rng);
        Self::with_brain(brain, params)
    }

    /// Checks if the bird is still in play.
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Marks the bird dead or alive.
    pub fn set_dead(&mut self, dead: bool) {
        self.alive = !dead;
    }

    /// Assigns the bird's fitness.
    pub fn set_fitness(&mut self, fitness: f32) {
        self.fitness = fitness;
    }

    /// Advances physics one tick, then lets the network decide whether to jump.
    ///
    /// Dead birds are left untouched.
    pub fn update(&mut self, reading: &PipeReading, params: &Params) {
        if !self.alive {
            return;
        }

        self.age += 1;
        self.velocity = (self.velocity + params.gravity).min(params.max_fall_speed);
        self.y += self.velocity;

        self.think(reading, params);
    }

    /// Feeds the current situation to the network and jumps if it says so.
    ///
    /// Dead birds neither think nor jump.
    pub fn think(&mut self, reading: &PipeReading, params: &Params) {
        if !self.alive {
            return;
        }

        let inputs = self.features(reading, params);
        let output = self.brain.predict(&inputs);
        self.last_inputs = inputs;

        if output[0] < output[1] {
            self.jump(params);
        }
    }

    /// Normalised inputs, each rounded to two decimals.
    pub fn features(&self, reading: &PipeReading, params: &Params) -> Array1<f32> {
        Array1::from_vec(vec![
            round2((reading.next_x - params.bird_x) / (params.field_width - params.bird_x)),
            round2(reading.gap_top / params.field_height),
            round2(reading.gap_bottom / params.field_height),
            round2(self.y / params.field_height),
            round2(self.velocity / params.velocity_scale),
        ])
    }

    /// Replaces the current velocity with the jump impulse.
    pub fn jump(&mut self, params: &Params) {
        self.velocity = params.jump_impulse;
    }

    /// Whether the bird has touched the ceiling or the floor.
    pub fn is_out_of_bounds(&self, params: &Params) -> bool {
        self.y <= 0.0 || self.y >= params.field_height
    }
}

/// Rounds to two decimal places, half away from zero.
pub fn round2(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}
