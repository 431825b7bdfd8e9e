//! Generation manager: owns the population and the pipes and runs the
//! tick/extinction/breeding cycle.
//!
//! A generation is RUNNING while at least one bird is alive. The tick that
//! kills the last bird assigns fitness to the whole generation, breeds a new
//! population from it, and resets the pipe field before returning.

use chrono::{DateTime, TimeDelta, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::bird::{Bird, PipeReading};
use super::brain::NeuralNetwork;
use super::event_log::{EventKind, EventLog};
use super::params::Params;
use super::pipe::{self, Pipe};
use super::selection;
use super::stats::{GenerationStats, GenerationSummary};

/// What happened during a single tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    /// Birds that died this tick.
    pub deaths: usize,
    /// Summary of the generation that went extinct this tick, if any.
    pub finished: Option<GenerationSummary>,
}

/// The simulation state shared by every generation.
#[derive(Debug, Clone)]
pub struct World {
    /// Parameters the world was created with.
    pub params: Params,
    /// Per-generation history.
    pub stats: GenerationStats,
    /// Recent notable events.
    pub event_log: EventLog,
    generation: u32,
    tick: u64,
    live: Vec<Bird>,
    completed: Vec<Bird>,
    pipes: Vec<Pipe>,
    started_at: Option<DateTime<Utc>>,
    best_survival: TimeDelta,
    rng: StdRng,
}

impl World {
    /// Creates a world and starts the founding generation.
    pub fn new(params: Params) -> Self {
        Self::with_rng(params, StdRng::from_os_rng())
    }

    /// Creates a world whose breeding and pipe heights are reproducible for a
    /// given `seed`.
    pub fn seeded(params: Params, seed: u64) -> Self {
        Self::with_rng(params, StdRng::seed_from_u64(seed))
    }

    /// Creates a world drawing all of its randomness from `rng`.
    pub fn with_rng(params: Params, rng: StdRng) -> Self {
        let mut world = Self::empty(params, rng);
        world.start_generation();
        world
    }

    /// Creates a world whose first generation uses `brains` unmodified.
    pub fn with_founders(params: Params, brains: Vec<NeuralNetwork>) -> Self {
        let mut world = Self::empty(params, StdRng::from_os_rng());
        world.seed(brains);
        world
    }

    fn empty(params: Params, rng: StdRng) -> Self {
        Self {
            params,
            stats: GenerationStats::default(),
            event_log: EventLog::default(),
            generation: 0,
            tick: 0,
            live: Vec::new(),
            completed: Vec::new(),
            pipes: Vec::new(),
            started_at: None,
            best_survival: TimeDelta::zero(),
            rng,
        }
    }

    /// Current generation ordinal (1 for the founders).
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Ticks since the current generation started.
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Birds still in play.
    pub fn live_birds(&self) -> &[Bird] {
        &self.live
    }

    /// Birds of the current generation that have already died.
    pub fn completed_birds(&self) -> &[Bird] {
        &self.completed
    }

    /// Pipes in play.
    pub fn pipes(&self) -> &[Pipe] {
        &self.pipes
    }

    /// Longest wall-clock duration of any finished generation.
    pub fn best_survival(&self) -> TimeDelta {
        self.best_survival
    }

    /// Longest survival of any finished generation, in ticks.
    pub fn best_age(&self) -> u32 {
        self.stats.best_age
    }

    /// Starts a new generation, breeding from the birds that just died.
    ///
    /// If no birds have died yet (the founding generation) every bird gets a
    /// fresh random network.
    pub fn start_generation(&mut self) {
        let parents = std::mem::take(&mut self.completed);
        let rng = &mut self.rng;
        let params = &self.params;
        let birds = (0..params.population)
            .map(|_| match selection::pick_parent(&parents, rng) {
                Some(parent) => Bird::from_parent(&parent.brain, params, rng),
                None => Bird::random(params, rng),
            })
            .collect();
        self.begin(birds);
    }

    /// Starts a new generation whose birds use `brains` without mutation.
    pub fn seed(&mut self, brains: Vec<NeuralNetwork>) {
        let birds = brains
            .into_iter()
            .map(|brain| Bird::with_brain(brain, &self.params))
            .collect();
        self.completed.clear();
        self.begin(birds);
    }

    fn begin(&mut self, birds: Vec<Bird>) {
        let now = Utc::now();
        if let Some(started_at) = self.started_at {
            self.best_survival = self.best_survival.max(now - started_at);
        }
        self.started_at = Some(now);

        self.generation += 1;
        self.tick = 0;
        self.pipes = pipe::spawn_pair(&self.params, &mut self.rng).into();
        self.live = birds;
        self.completed.clear();

        log::debug!(
            "generation {} started with {} birds",
            self.generation,
            self.live.len()
        );
    }

    /// Advances the simulation by one tick.
    pub fn tick(&mut self) -> TickReport {
        self.tick += 1;
        // A zero interval never spawns beyond the opening pair.
        if self.tick.checked_rem(self.params.spawn_interval) == Some(0) {
            let pair = pipe::spawn_pair(&self.params, &mut self.rng);
            self.pipes.extend(pair);
        }

        for pipe in &mut self.pipes {
            pipe.update(&self.params);
        }
        self.pipes.retain(|pipe| !pipe.retired);

        for bird in &mut self.live {
            let reading = next_pipe_reading(&self.pipes, bird.x, &self.params);
            bird.update(&reading, &self.params);
        }

        for bird in &mut self.live {
            if is_fatal(bird, &self.pipes, &self.params) {
                bird.set_dead(true);
            }
        }

        let (dead, alive): (Vec<Bird>, Vec<Bird>) =
            self.live.drain(..).partition(|bird| !bird.is_alive());
        self.live = alive;
        let deaths = dead.len();
        self.completed.extend(dead);

        let finished = if self.live.is_empty() {
            let summary = self.finish_generation();
            self.start_generation();
            Some(summary)
        } else {
            None
        };

        TickReport { deaths, finished }
    }

    fn finish_generation(&mut self) -> GenerationSummary {
        let assignment = selection::assign_fitness(&mut self.completed);

        let population = self.completed.len();
        let best = self.completed.iter().max_by_key(|bird| bird.age);
        let best_age = best.map_or(0, |bird| bird.age);
        let mean_age = if population == 0 {
            0.0
        } else {
            assignment.total_age as f32 / population as f32
        };
        let diversity = best.map_or(0.0, |best| {
            self.completed
                .iter()
                .map(|bird| NeuralNetwork::distance(&bird.brain, &best.brain))
                .sum::<f32>()
                / population as f32
        });
        let duration_ms = self
            .started_at
            .map_or(0, |started_at| (Utc::now() - started_at).num_milliseconds());

        let summary = GenerationSummary {
            generation: self.generation,
            population,
            ticks: self.tick,
            best_age,
            mean_age,
            total_age: assignment.total_age,
            uniform_fallback: assignment.uniform_fallback,
            diversity,
            duration_ms,
        };

        log::info!(
            "generation {} extinct after {} ticks: best age {}, mean age {:.1}, population {}",
            summary.generation,
            summary.ticks,
            summary.best_age,
            summary.mean_age,
            summary.population
        );

        if assignment.uniform_fallback {
            self.event_log.log(
                self.generation,
                "every bird died at age 0, parents picked uniformly".to_string(),
                EventKind::Fallback,
            );
        }
        if self.stats.record(summary.clone()) {
            log::info!(
                "new survival record: {} ticks in generation {}",
                summary.best_age,
                summary.generation
            );
            self.event_log.log(
                self.generation,
                format!("new record: {} ticks", summary.best_age),
                EventKind::Record,
            );
        }
        self.event_log.log(
            self.generation,
            format!(
                "extinct after {} ticks (mean age {:.0})",
                summary.ticks, summary.mean_age
            ),
            EventKind::Extinction,
        );

        summary
    }
}

/// Finds the first pipe whose leading edge is to the right of `bird_x` and
/// describes its gap.
///
/// If every pipe is behind the bird the first pipe in play is used instead.
/// With no pipes at all the bird sees an open field.
pub fn next_pipe_reading(pipes: &[Pipe], bird_x: f32, params: &Params) -> PipeReading {
    let next = pipes
        .iter()
        .find(|pipe| pipe.x > bird_x)
        .or_else(|| pipes.first());

    match next {
        Some(pipe) => {
            let gap_top = pipe.bottom();
            PipeReading {
                next_x: pipe.x,
                gap_top,
                gap_bottom: gap_top + params.pipe_space,
            }
        }
        None => PipeReading::open_field(params),
    }
}

/// Collision test for one bird against the whole pipe field.
///
/// Touching the ceiling or the floor is fatal regardless of where the pipes
/// are; otherwise the bird dies if its centre lies inside any barrier.
pub fn is_fatal(bird: &Bird, pipes: &[Pipe], params: &Params) -> bool {
    bird.is_out_of_bounds(params) || pipes.iter().any(|pipe| pipe.contains(bird.x, bird.y))
}
