//! End-to-end runs: textual maze description through parsing, simulation,
//! and scoring.

use approx::assert_abs_diff_eq;

use maze_sim::{evaluate, maze, Outcome};

const OPEN_BOX: &str = "\
4
30 100
0
200 100
0 0 300 0
300 0 300 200
300 200 0 200
0 200 0 0
";

const BLOCKED_BOX: &str = "\
5
30 100
0
200 100
0 0 300 0
300 0 300 200
300 200 0 200
0 200 0 0
100 0 100 200
";

/// Full throttle straight ahead, neutral turning.
fn full_speed(_inputs: &[f64]) -> Vec<f64> {
    vec![0.5, 1.0]
}

#[test]
fn forward_policy_crosses_an_open_box() {
    let mut environment = maze::parse(OPEN_BOX).unwrap();
    assert_abs_diff_eq!(environment.initial_distance(), 170.0);

    let outcome = evaluate(&mut environment, &mut full_speed, 100).unwrap();
    match outcome {
        Outcome::Solved { steps } => assert!(steps < 100),
        Outcome::Timeout { .. } => panic!("open box should be solvable straight ahead"),
    }
    assert_abs_diff_eq!(outcome.fitness(), 1.0);
}

#[test]
fn forward_policy_is_stopped_by_a_cross_wall() {
    let mut environment = maze::parse(BLOCKED_BOX).unwrap();
    let outcome = evaluate(&mut environment, &mut full_speed, 100).unwrap();

    // The agent accelerates to the clamp and parks where the next step
    // would bring it within its collision radius of the wall at x = 100:
    // 30 -> 30.5, 31.5, 33, 35, 37.5, then +3 per step up to 91.5.
    assert_abs_diff_eq!(environment.agent().location().x(), 91.5);
    assert_abs_diff_eq!(environment.agent().location().y(), 100.0);

    let expected = (170.0 - 108.5) / 170.0;
    match outcome {
        Outcome::Timeout { fitness } => assert_abs_diff_eq!(fitness, expected),
        Outcome::Solved { .. } => panic!("wall at x = 100 cannot be crossed"),
    }

    // Sensors still see the wall ahead from the parked position.
    let forward_reading = environment.agent().range_finders()[2];
    assert_abs_diff_eq!(forward_reading, 8.5);
}
