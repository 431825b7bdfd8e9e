//! # Neuroflap - Neuroevolution of Flappy Birds
//!
//! A population of birds learns to fly through a stream of gated pipes. Each
//! bird carries a small feedforward network; there is no gradient descent.
//! When the whole population has crashed, every bird is scored by how long it
//! survived and the next generation is bred from mutated copies of parents
//! chosen by fitness-proportionate selection.
//!
//! ## Features
//!
//! - Fixed 5-5-2 sigmoid network with configurable mutation policy
//! - Gravity/jump physics and pipe collision
//! - Roulette-wheel parent selection, mutation-only reproduction
//! - Fixed-rate tick driver with a fast mode
//! - Real-time visualization with egui/macroquad, plus a headless trainer
//!
//! ## Core Modules
//!
//! - [`simulation::brain`] - Neural network implementation
//! - [`simulation::bird`] - Bird physics and decisions
//! - [`simulation::pipe`] - Moving barriers
//! - [`simulation::world`] - Generation manager

/// Core simulation logic and data structures.
pub mod simulation {
    /// Bird state, physics, and decision making.
    pub mod bird;
    /// Neural network implementation for bird brains.
    pub mod brain;
    /// Fixed-rate tick driver.
    pub mod driver;
    /// Bounded log of notable generation events.
    pub mod event_log;
    /// Weight mutation policy.
    pub mod mutation;
    /// Simulation parameters.
    pub mod params;
    /// Pipes and pipe-pair spawning.
    pub mod pipe;
    /// Fitness assignment and parent selection.
    pub mod selection;
    /// Per-generation statistics.
    pub mod stats;
    /// Generation manager that owns birds and pipes.
    pub mod world;
}
