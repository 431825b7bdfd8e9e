#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use ndarray::{Array1, Array2};
use neuroflap::simulation::bird::Bird;
use neuroflap::simulation::brain::{Mlp, NeuralNetwork};
use neuroflap::simulation::event_log::EventKind;
use neuroflap::simulation::params::Params;
use neuroflap::simulation::pipe::Pipe;
use neuroflap::simulation::world::{World, is_fatal, next_pipe_reading};

fn constant_network(output_biases: [f32; 2]) -> NeuralNetwork {
    NeuralNetwork::from_layers(
        Mlp::from_parts(Array2::zeros((5, 5)), Array1::zeros(5)),
        Mlp::from_parts(Array2::zeros((2, 5)), Array1::from_vec(output_biases.to_vec())),
    )
}

fn never_jumps() -> NeuralNetwork {
    constant_network([1.0, -1.0])
}

fn always_jumps() -> NeuralNetwork {
    constant_network([-1.0, 1.0])
}

fn create_test_params(population: usize) -> Params {
    Params {
        population,
        ..Params::default()
    }
}

fn pipe_at(x: f32, y: f32, height: f32) -> Pipe {
    Pipe {
        x,
        y,
        width: 60.0,
        height,
        retired: false,
    }
}

#[test]
fn test_world_creation() {
    let params = create_test_params(25);
    let world = World::new(params.clone());

    assert_eq!(world.generation(), 1);
    assert_eq!(world.tick_count(), 0);
    assert_eq!(world.live_birds().len(), params.population);
    assert!(world.completed_birds().is_empty());
    assert_eq!(world.pipes().len(), 2);
    assert_eq!(world.best_age(), 0);
    for bird in world.live_birds() {
        assert!(bird.is_alive());
        assert_eq!(bird.fitness, 0.0);
    }
}

#[test]
fn test_initial_pipe_pair_partitions_field() {
    let params = create_test_params(1);
    let world = World::new(params.clone());

    let pipes = world.pipes();
    let sum = pipes[0].height + pipes[1].height + params.pipe_space;
    assert!((sum - params.field_height).abs() < 1e-3);
}

#[test]
fn test_tick_advances_pipes_and_birds() {
    let params = create_test_params(3);
    let mut world = World::with_founders(
        params.clone(),
        vec![never_jumps(), never_jumps(), never_jumps()],
    );
    let start_x = world.pipes()[0].x;

    let report = world.tick();

    assert_eq!(report.deaths, 0);
    assert!(report.finished.is_none());
    assert_eq!(world.tick_count(), 1);
    assert_eq!(world.pipes()[0].x, start_x - params.pipe_speed);
    for bird in world.live_birds() {
        assert_eq!(bird.age, 1);
    }
}

#[test]
fn test_pipe_pairs_spawn_on_interval() {
    let params = Params {
        spawn_interval: 10,
        ..create_test_params(1)
    };
    let mut world = World::with_founders(params, vec![never_jumps()]);

    for _ in 0..9 {
        world.tick();
    }
    assert_eq!(world.pipes().len(), 2);

    world.tick();
    assert_eq!(world.pipes().len(), 4);

    for _ in 0..10 {
        world.tick();
    }
    assert_eq!(world.pipes().len(), 6);
}

#[test]
fn test_falling_bird_dies_and_generation_restarts() {
    let params = create_test_params(1);
    let mut world = World::with_founders(params.clone(), vec![never_jumps()]);

    let mut last_y = world.live_birds()[0].y;
    let mut summary = None;
    for _ in 0..1_000 {
        let report = world.tick();
        if let Some(finished) = report.finished {
            assert_eq!(report.deaths, 1);
            summary = Some(finished);
            break;
        }
        let bird = &world.live_birds()[0];
        assert!(bird.y > last_y, "bird should fall monotonically");
        assert!(bird.y < params.field_height);
        last_y = bird.y;
    }

    let summary = summary.expect("bird should hit the floor");
    assert_eq!(summary.generation, 1);
    assert_eq!(summary.population, 1);
    assert!(summary.best_age > 0);
    assert_eq!(u64::from(summary.best_age), summary.ticks);
    assert_eq!(summary.total_age, u64::from(summary.best_age));
    assert!(!summary.uniform_fallback);

    // The new generation was started within the same tick.
    assert_eq!(world.generation(), 2);
    assert_eq!(world.tick_count(), 0);
    assert_eq!(world.live_birds().len(), 1);
    assert!(world.completed_birds().is_empty());
    assert_eq!(world.pipes().len(), 2);
    assert_eq!(world.best_age(), summary.best_age);
    assert_eq!(world.stats.generations, 1);
}

#[test]
fn test_climbing_bird_hits_ceiling() {
    let params = create_test_params(1);
    let mut world = World::with_founders(params, vec![always_jumps()]);

    // Gravity is applied before the first jump.
    world.tick();
    let mut last_y = world.live_birds()[0].y;
    let mut finished = None;
    for _ in 0..1_000 {
        let report = world.tick();
        if report.finished.is_some() {
            finished = report.finished;
            break;
        }
        let y = world.live_birds()[0].y;
        assert!(y < last_y);
        last_y = y;
    }

    let summary = finished.expect("bird should hit the ceiling");
    assert!(summary.best_age > 40 && summary.best_age < 60);
}

#[test]
fn test_live_and_completed_stay_disjoint() {
    let params = create_test_params(40);
    let mut world = World::new(params.clone());

    for _ in 0..2_000 {
        let generation = world.generation();
        let report = world.tick();
        if report.finished.is_none() {
            assert_eq!(world.generation(), generation);
            assert_eq!(
                world.live_birds().len() + world.completed_birds().len(),
                params.population
            );
            assert!(world.live_birds().iter().all(Bird::is_alive));
            assert!(world.completed_birds().iter().all(|b| !b.is_alive()));
        } else {
            assert_eq!(world.live_birds().len(), params.population);
            assert!(world.completed_birds().is_empty());
        }
    }
}

#[test]
fn test_generations_keep_population_size() {
    let params = create_test_params(10);
    let mut world = World::new(params.clone());

    while world.stats.generations < 3 {
        world.tick();
    }

    assert_eq!(world.generation(), 4);
    assert_eq!(world.live_birds().len(), params.population);
    assert_eq!(world.stats.history.len(), 3);
    assert!(
        world
            .event_log
            .events()
            .iter()
            .any(|e| e.kind == EventKind::Extinction)
    );
    assert!(world.best_survival() >= chrono::TimeDelta::zero());
}

#[test]
fn test_offspring_inherit_parent_network() {
    let params = Params {
        mutation: neuroflap::simulation::mutation::MutationPolicy::none(),
        ..create_test_params(5)
    };
    let founder = never_jumps();
    let mut world = World::with_founders(params, vec![founder.clone()]);

    while world.generation() == 1 {
        world.tick();
    }

    for bird in world.live_birds() {
        assert_eq!(bird.brain, founder);
    }
}

#[test]
fn test_seeded_worlds_replay_identically() {
    let params = create_test_params(20);
    let mut a = World::seeded(params.clone(), 2024);
    let mut b = World::seeded(params, 2024);

    let brains = |world: &World| {
        world
            .live_birds()
            .iter()
            .map(|bird| bird.brain.clone())
            .collect::<Vec<_>>()
    };
    let heights = |world: &World| {
        world
            .pipes()
            .iter()
            .map(|pipe| pipe.height)
            .collect::<Vec<_>>()
    };

    assert_eq!(brains(&a), brains(&b));
    assert_eq!(heights(&a), heights(&b));

    while a.generation() < 2 {
        let report_a = a.tick();
        let report_b = b.tick();
        assert_eq!(report_a.deaths, report_b.deaths);
    }

    assert_eq!(b.generation(), 2);
    assert_eq!(brains(&a), brains(&b));
    assert_eq!(heights(&a), heights(&b));
    assert_eq!(a.stats.last().map(|s| s.best_age), b.stats.last().map(|s| s.best_age));
}

#[test]
fn test_different_seeds_diverge() {
    let params = create_test_params(5);
    let a = World::seeded(params.clone(), 1);
    let b = World::seeded(params, 2);

    assert_ne!(a.live_birds()[0].brain, b.live_birds()[0].brain);
}

#[test]
fn test_zero_spawn_interval_does_not_panic() {
    let params = Params {
        spawn_interval: 0,
        ..create_test_params(1)
    };
    let mut world = World::with_founders(params, vec![never_jumps()]);

    for _ in 0..20 {
        world.tick();
    }

    assert_eq!(world.tick_count(), 20);
    assert_eq!(world.pipes().len(), 2);
}

#[test]
fn test_next_pipe_is_first_ahead_of_bird() {
    let params = Params::default();
    let pipes = vec![
        pipe_at(100.0, 0.0, 150.0),
        pipe_at(100.0, 230.0, 270.0),
        pipe_at(400.0, 0.0, 200.0),
        pipe_at(400.0, 280.0, 220.0),
    ];

    let reading = next_pipe_reading(&pipes, 150.0, &params);

    assert_eq!(reading.next_x, 400.0);
    assert_eq!(reading.gap_top, 200.0);
    assert_eq!(reading.gap_bottom, 200.0 + params.pipe_space);
}

#[test]
fn test_next_pipe_falls_back_to_first() {
    let params = Params::default();
    let pipes = vec![pipe_at(100.0, 0.0, 150.0), pipe_at(120.0, 230.0, 270.0)];

    let reading = next_pipe_reading(&pipes, 150.0, &params);

    assert_eq!(reading.next_x, 100.0);
    assert_eq!(reading.gap_top, 150.0);
}

#[test]
fn test_next_pipe_open_field_without_pipes() {
    let params = Params::default();

    let reading = next_pipe_reading(&[], 150.0, &params);

    assert_eq!(reading.next_x, params.field_width);
    assert_eq!(reading.gap_top, 0.0);
    assert_eq!(reading.gap_bottom, params.field_height);
}

#[test]
fn test_floor_and_ceiling_are_always_fatal() {
    let params = Params::default();
    let far_pipes = vec![pipe_at(700.0, 0.0, 100.0)];
    let mut bird = Bird::new(&params);

    bird.y = params.field_height;
    assert!(is_fatal(&bird, &far_pipes, &params));
    assert!(is_fatal(&bird, &[], &params));

    bird.y = 0.0;
    assert!(is_fatal(&bird, &far_pipes, &params));
    assert!(is_fatal(&bird, &[], &params));

    bird.y = 250.0;
    assert!(!is_fatal(&bird, &far_pipes, &params));
}

#[test]
fn test_pipe_collision() {
    let params = Params::default();
    let mut bird = Bird::new(&params);
    let pipes = vec![pipe_at(120.0, 0.0, 200.0), pipe_at(120.0, 280.0, 220.0)];

    bird.y = 100.0;
    assert!(is_fatal(&bird, &pipes, &params));

    bird.y = 240.0;
    assert!(!is_fatal(&bird, &pipes, &params));

    bird.y = 300.0;
    assert!(is_fatal(&bird, &pipes, &params));

    // Same heights but horizontally clear of the bird.
    let ahead = vec![pipe_at(151.0, 0.0, 200.0)];
    bird.y = 100.0;
    assert!(!is_fatal(&bird, &ahead, &params));
}
