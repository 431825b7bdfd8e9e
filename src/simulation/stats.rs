use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Outcome of one finished generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationSummary {
    /// Ordinal of the generation, starting at 1.
    pub generation: u32,
    /// Number of birds that took part.
    pub population: usize,
    /// Ticks from start to extinction.
    pub ticks: u64,
    /// Longest survival in ticks.
    pub best_age: u32,
    /// Mean survival in ticks.
    pub mean_age: f32,
    /// Sum of all survival times.
    pub total_age: u64,
    /// Whether fitness fell back to a uniform distribution.
    pub uniform_fallback: bool,
    /// Mean parameter distance of each bird's network to the best bird's.
    pub diversity: f32,
    /// Wall-clock duration of the generation in milliseconds.
    pub duration_ms: i64,
}

/// Rolling history of generation summaries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationStats {
    /// Most recent summaries, oldest first.
    pub history: VecDeque<GenerationSummary>,
    /// Maximum number of summaries to keep.
    pub max_history: usize,
    /// Number of generations recorded, including those dropped from history.
    pub generations: u32,
    /// Longest survival ever recorded, in ticks.
    pub best_age: u32,
}

impl Default for GenerationStats {
    fn default() -> Self {
        Self::new(500)
    }
}

impl GenerationStats {
    /// Creates empty stats keeping at most `max_history` summaries.
    pub fn new(max_history: usize) -> Self {
        Self {
            history: VecDeque::with_capacity(max_history),
            max_history,
            generations: 0,
            best_age: 0,
        }
    }

    /// Records a finished generation. Returns `true` if it set a new best age.
    pub fn record(&mut self, summary: GenerationSummary) -> bool {
        self.generations += 1;
        let record = summary.best_age > self.best_age;
        if record {
            self.best_age = summary.best_age;
        }

        self.history.push_back(summary);
        while self.history.len() > self.max_history {
            self.history.pop_front();
        }
        record
    }

    /// Most recent summary.
    pub fn last(&self) -> Option<&GenerationSummary> {
        self.history.back()
    }

    /// Mean of `best_age` over the last `window` generations.
    pub fn recent_mean_best_age(&self, window: usize) -> f32 {
        let recent: Vec<u32> = self
            .history
            .iter()
            .rev()
            .take(window)
            .map(|summary| summary.best_age)
            .collect();
        if recent.is_empty() {
            0.0
        } else {
            recent.iter().map(|&age| age as f32).sum::<f32>() / recent.len() as f32
        }
    }

    /// `(generation, best_age)` points for plotting.
    pub fn best_age_series(&self) -> Vec<[f64; 2]> {
        self.history
            .iter()
            .map(|summary| [f64::from(summary.generation), f64::from(summary.best_age)])
            .collect()
    }

    /// `(generation, mean_age)` points for plotting.
    pub fn mean_age_series(&self) -> Vec<[f64; 2]> {
        self.history
            .iter()
            .map(|summary| [f64::from(summary.generation), f64::from(summary.mean_age)])
            .collect()
    }
}
