use std::path::Path;

use anyhow::{Context, bail, ensure};
use serde::{Deserialize, Serialize};

use super::mutation::MutationPolicy;

/// Simulation parameters that control the field, physics, and evolution.
///
/// Every field has a default, so a JSON file only needs to list the values
/// it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    /// Play-field width.
    pub field_width: f32,
    /// Play-field height.
    pub field_height: f32,
    /// Width of every pipe.
    pub pipe_width: f32,
    /// Smallest solid barrier a randomly sized pipe can have.
    pub min_pipe_height: f32,
    /// Vertical gap between the two pipes of a pair.
    pub pipe_space: f32,
    /// Ticks between two pipe-pair spawns.
    pub spawn_interval: u64,
    /// Horizontal distance a pipe travels per tick.
    pub pipe_speed: f32,
    /// Fixed horizontal position of every bird.
    pub bird_x: f32,
    /// Vertical position of a newly created bird.
    pub bird_start_y: f32,
    /// Radius used when drawing a bird.
    pub bird_radius: f32,
    /// Downward acceleration added to the velocity every tick.
    pub gravity: f32,
    /// Cap on downward velocity.
    pub max_fall_speed: f32,
    /// Velocity set by a jump (negative is upward).
    pub jump_impulse: f32,
    /// Divisor applied to the velocity before it is fed to the network.
    pub velocity_scale: f32,
    /// Width of the hidden layer.
    pub hidden_size: usize,
    /// Number of birds per generation.
    pub population: usize,
    /// Weight mutation applied to every offspring.
    pub mutation: MutationPolicy,
    /// Ticks per second in normal mode.
    pub tick_rate: u32,
    /// Ticks per second in fast mode.
    pub fast_tick_rate: u32,
    /// Start in fast mode.
    pub fast: bool,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            field_width: 800.0,
            field_height: 500.0,
            pipe_width: 60.0,
            min_pipe_height: 40.0,
            pipe_space: 80.0,
            spawn_interval: 300,
            pipe_speed: 1.0,
            bird_x: 150.0,
            bird_start_y: 150.0,
            bird_radius: 6.0,
            gravity: 0.1,
            max_fall_speed: 4.0,
            jump_impulse: -3.0,
            velocity_scale: 3.0,
            hidden_size: 5,
            population: 250,
            mutation: MutationPolicy::default(),
            tick_rate: 120,
            fast_tick_rate: 1000,
            fast: false,
        }
    }
}

impl Params {
    /// Loads parameters from a JSON file and validates them.
    pub fn load_from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let params: Params = serde_json::from_str(&json)
            .with_context(|| format!("parsing config {}", path.display()))?;
        params.validate()?;
        Ok(params)
    }

    /// Saves parameters as pretty-printed JSON.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).with_context(|| format!("writing config {}", path.display()))
    }

    /// Checks that the parameters describe a runnable simulation.
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            self.field_width > 0.0 && self.field_height > 0.0,
            "field dimensions must be positive (got {}x{})",
            self.field_width,
            self.field_height
        );
        ensure!(self.population > 0, "population must be at least 1");
        ensure!(self.hidden_size > 0, "hidden layer must have at least one neuron");
        ensure!(self.spawn_interval > 0, "spawn interval must be at least one tick");
        ensure!(
            self.pipe_width > 0.0 && self.min_pipe_height >= 0.0 && self.pipe_space >= 0.0,
            "pipe geometry must be non-negative"
        );
        if self.random_height_range() < 0.0 {
            bail!(
                "pipe space {} leaves no room for two {}-unit barriers in a field of height {}",
                self.pipe_space,
                self.min_pipe_height,
                self.field_height
            );
        }
        ensure!(
            self.tick_rate > 0 && self.fast_tick_rate > 0,
            "tick rates must be positive"
        );
        ensure!(
            (0.0..=1.0).contains(&self.mutation.probability),
            "mutation probability must be within [0, 1] (got {})",
            self.mutation.probability
        );
        ensure!(
            self.mutation.perturbation.is_valid(),
            "mutation range must be finite with low < high"
        );
        Ok(())
    }

    /// Applies command-line overrides and re-validates the result.
    pub fn apply_overrides(&mut self, population: Option<usize>, fast: bool) -> anyhow::Result<()> {
        if let Some(population) = population {
            self.population = population;
        }
        if fast {
            self.fast = true;
        }
        self.validate().context("invalid command-line override")
    }

    /// Span of the random part of a pipe's height.
    pub fn random_height_range(&self) -> f32 {
        self.field_height - self.pipe_space - self.min_pipe_height * 2.0
    }

    /// Tick rate for the current mode.
    pub fn active_tick_rate(&self) -> u32 {
        if self.fast {
            self.fast_tick_rate
        } else {
            self.tick_rate
        }
    }
}
