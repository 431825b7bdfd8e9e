//! Fitness assignment and fitness-proportionate parent selection.

use rand::Rng;

use super::bird::Bird;

/// Result of turning ages into fitness values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitnessAssignment {
    /// Sum of all ages.
    pub total_age: u64,
    /// True when every age was zero and uniform fitness was used instead.
    pub uniform_fallback: bool,
}

/// Sets each bird's fitness to its share of the total age.
///
/// If the total is zero every bird receives `1 / n`, so the values still form
/// a probability distribution.
pub fn assign_fitness(birds: &mut [Bird]) -> FitnessAssignment {
    let total_age: u64 = birds.iter().map(|bird| u64::from(bird.age)).sum();

    if total_age == 0 {
        if !birds.is_empty() {
            log::warn!(
                "all {} birds died at age 0, using uniform fitness",
                birds.len()
            );
            let share = 1.0 / birds.len() as f32;
            for bird in birds.iter_mut() {
                bird.set_fitness(share);
            }
        }
        return FitnessAssignment {
            total_age,
            uniform_fallback: true,
        };
    }

    for bird in birds.iter_mut() {
        bird.set_fitness((f64::from(bird.age) / total_age as f64) as f32);
    }

    FitnessAssignment {
        total_age,
        uniform_fallback: false,
    }
}

/// Walks the fitness list subtracting each value from `r` until the remainder
/// is no longer positive, and returns the index reached.
///
/// If rounding leaves a positive remainder after the last entry, the last
/// index is returned. Returns `None` only for an empty list.
pub fn roulette_index<I>(fitness: I, r: f32) -> Option<usize>
where
    I: IntoIterator<Item = f32>,
{
    let mut remaining = r;
    let mut chosen = None;

    for (index, value) in fitness.into_iter().enumerate() {
        chosen = Some(index);
        remaining -= value;
        if remaining <= 0.0 {
            return chosen;
        }
    }

    if let Some(index) = chosen {
        log::warn!(
            "roulette remainder {remaining} left after all entries, clamping to index {index}"
        );
    }
    chosen
}

/// Picks a parent with probability proportional to its fitness.
pub fn pick_parent<'a, R: Rng>(birds: &'a [Bird], rng: &mut R) -> Option<&'a Bird> {
    let r = rng.random::<f32>();
    roulette_index(birds.iter().map(|bird| bird.fitness), r).map(|index| &birds[index])
}
