#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use neuroflap::simulation::params::Params;
use neuroflap::simulation::pipe::{Pipe, spawn_pair};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn test_pair_partitions_field_height() {
    let params = Params::default();
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..100 {
        let [upper, lower] = spawn_pair(&params, &mut rng);
        let sum = upper.height + lower.height + params.pipe_space;
        assert!(
            (sum - params.field_height).abs() < 1e-3,
            "heights {} + {} + {} != {}",
            upper.height,
            lower.height,
            params.pipe_space,
            params.field_height
        );
    }
}

#[test]
fn test_pair_with_small_field() {
    let params = Params {
        field_height: 250.0,
        pipe_space: 80.0,
        ..Params::default()
    };
    let mut rng = StdRng::seed_from_u64(12);

    let [upper, lower] = spawn_pair(&params, &mut rng);

    assert_eq!(lower.height, 250.0 - upper.height - 80.0);
    assert_eq!(upper.y, 0.0);
    assert_eq!(lower.y, 250.0 - lower.height);
    assert!((lower.y - upper.bottom() - 80.0).abs() < 1e-3);
}

#[test]
fn test_random_height_respects_minimum() {
    let params = Params::default();
    let mut rng = StdRng::seed_from_u64(13);
    let max_height = params.min_pipe_height + params.random_height_range();

    for _ in 0..500 {
        let pipe = Pipe::new(None, params.pipe_space, &params, &mut rng);
        assert!(pipe.height >= params.min_pipe_height);
        assert!(pipe.height <= max_height);
        assert_eq!(pipe.y, 0.0);
    }
}

#[test]
fn test_sized_pipe_stands_on_floor() {
    let params = Params::default();
    let mut rng = StdRng::seed_from_u64(14);

    let pipe = Pipe::new(Some(120.0), params.pipe_space, &params, &mut rng);

    assert_eq!(pipe.height, 120.0);
    assert_eq!(pipe.y, params.field_height - 120.0);
    assert_eq!(pipe.bottom(), params.field_height);
    assert_eq!(pipe.x, params.field_width);
    assert_eq!(pipe.width, params.pipe_width);
    assert!(!pipe.retired);
}

#[test]
fn test_update_moves_left() {
    let params = Params::default();
    let mut rng = StdRng::seed_from_u64(15);
    let mut pipe = Pipe::new(None, params.pipe_space, &params, &mut rng);

    pipe.update(&params);
    pipe.update(&params);

    assert_eq!(pipe.x, params.field_width - 2.0 * params.pipe_speed);
}

#[test]
fn test_retires_only_after_field_width_past_left_edge() {
    let params = Params::default();
    let mut rng = StdRng::seed_from_u64(16);
    let mut pipe = Pipe::new(None, params.pipe_space, &params, &mut rng);

    // Starts at x = 800 and needs x + 800 < 0, i.e. 1601 steps.
    for _ in 0..1600 {
        pipe.update(&params);
        assert!(!pipe.retired, "retired too early at x = {}", pipe.x);
    }
    assert_eq!(pipe.x + params.field_width, 0.0);

    pipe.update(&params);
    assert!(pipe.retired);
}

#[test]
fn test_still_active_after_leaving_visible_field() {
    let params = Params::default();
    let mut rng = StdRng::seed_from_u64(17);
    let mut pipe = Pipe::new(None, params.pipe_space, &params, &mut rng);

    while pipe.right() >= 0.0 {
        pipe.update(&params);
    }

    assert!(!pipe.retired);
}

#[test]
fn test_contains_includes_edges() {
    let pipe = Pipe {
        x: 100.0,
        y: 0.0,
        width: 60.0,
        height: 200.0,
        retired: false,
    };

    assert!(pipe.contains(100.0, 0.0));
    assert!(pipe.contains(160.0, 200.0));
    assert!(pipe.contains(130.0, 100.0));
    assert!(!pipe.contains(99.9, 100.0));
    assert!(!pipe.contains(160.1, 100.0));
    assert!(!pipe.contains(130.0, 200.1));
}
