//! Evaluation of a controller in a maze environment.
//!
//! The driver feeds sensor readings to an externally supplied controller for
//! a bounded number of steps and scores the resulting trajectory: a maximal
//! score when the exit is reached, otherwise a normalized measure of how far
//! the agent closed the initial distance to the exit.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use thiserror::Error;
use tracing::info;

use crate::domain::{Environment, Status};

/// Score floor for trajectories that made no progress toward the exit.
const MIN_FITNESS: f64 = 0.01;

/// Maps a sensor input vector to a control vector of length
/// [`CONTROL_SIGNALS`]. Both values are nominally in `[0, 1]` with 0.5 as
/// neutral.
pub trait Controller {
    fn activate(&mut self, inputs: &[f64]) -> Vec<f64>;
}

impl<F> Controller for F
where
    F: FnMut(&[f64]) -> Vec<f64>,
{
    fn activate(&mut self, inputs: &[f64]) -> Vec<f64> {
        self(inputs)
    }
}

/// Number of control signals the environment consumes per step.
pub const CONTROL_SIGNALS: usize = 2;

/// Deterministic random policy, mostly useful as a baseline and in the demo
/// binary.
#[derive(Clone, Debug)]
pub struct RandomController {
    rng: ChaCha8Rng,
}

impl RandomController {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Controller for RandomController {
    fn activate(&mut self, _inputs: &[f64]) -> Vec<f64> {
        (0..CONTROL_SIGNALS)
            .map(|_| self.rng.random_range(0.0..=1.0))
            .collect()
    }
}

#[derive(Error, Debug)]
pub enum SimulationError {
    #[error("controller produced {0} control signals, expected {CONTROL_SIGNALS}")]
    WrongControlArity(usize),
    #[error("controller produced a non-finite control signal at step {step}")]
    NonFiniteControl { step: usize },
}

/// Result of one bounded evaluation run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Outcome {
    /// The exit was reached at the given 1-indexed step.
    Solved { steps: usize },
    /// The step budget ran out; fitness is in `(0, 1)`, floored at
    /// [`MIN_FITNESS`].
    Timeout { fitness: f64 },
}

impl Outcome {
    pub fn is_solved(&self) -> bool {
        matches!(self, Outcome::Solved { .. })
    }

    /// Scalar score: the maximal value for a solved run, otherwise the
    /// normalized distance-based fitness.
    pub fn fitness(&self) -> f64 {
        match self {
            Outcome::Solved { .. } => 1.0,
            Outcome::Timeout { fitness } => *fitness,
        }
    }
}

/// Runs `controller` in `environment` for at most `time_steps` steps.
///
/// The step bound is a hard limit regardless of controller behavior; a
/// controller emitting NaN, infinite, or wrong-arity output aborts this
/// evaluation with an error instead of feeding bad state into the
/// environment.
pub fn evaluate<C: Controller>(
    environment: &mut Environment,
    controller: &mut C,
    time_steps: usize,
) -> Result<Outcome, SimulationError> {
    for step in 1..=time_steps {
        let status = simulation_step(environment, controller, step)?;
        if status == Status::Solved {
            info!(steps = step, "maze solved");
            return Ok(Outcome::Solved { steps: step });
        }
    }

    let final_distance = environment.agent_distance_to_exit();
    let initial_distance = environment.initial_distance();
    let mut fitness = (initial_distance - final_distance) / initial_distance;
    if fitness <= MIN_FITNESS {
        fitness = MIN_FITNESS;
    }

    Ok(Outcome::Timeout { fitness })
}

fn simulation_step<C: Controller>(
    environment: &mut Environment,
    controller: &mut C,
    step: usize,
) -> Result<Status, SimulationError> {
    let inputs = environment.sensor_inputs();
    let output = controller.activate(&inputs);

    if output.len() != CONTROL_SIGNALS {
        return Err(SimulationError::WrongControlArity(output.len()));
    }
    if output.iter().any(|signal| !signal.is_finite()) {
        return Err(SimulationError::NonFiniteControl { step });
    }

    Ok(environment.update([output[0], output[1]]))
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::{Agent, Point};

    fn open_field(exit_point: Point) -> Environment {
        Environment::new(Agent::new(Point::new(0.0, 0.0)), vec![], exit_point)
    }

    fn neutral(_inputs: &[f64]) -> Vec<f64> {
        vec![0.5, 0.5]
    }

    #[test]
    fn test_exit_inside_capture_radius_solves_at_step_one() {
        let mut environment = open_field(Point::new(4.0, 0.0));
        let outcome = evaluate(&mut environment, &mut neutral, 10).unwrap();
        assert_eq!(outcome, Outcome::Solved { steps: 1 });
        assert_abs_diff_eq!(outcome.fitness(), 1.0);
    }

    #[test]
    fn test_neutral_controller_exhausts_budget_with_floor_fitness() {
        let mut environment = open_field(Point::new(100.0, 0.0));
        let outcome = evaluate(&mut environment, &mut neutral, 10).unwrap();
        // The agent never moves, so (initial - final) / initial is 0,
        // floored to the minimum.
        assert_eq!(outcome, Outcome::Timeout { fitness: MIN_FITNESS });
        assert!(!outcome.is_solved());
    }

    #[test]
    fn test_forward_controller_is_rewarded_for_progress() {
        let mut environment = open_field(Point::new(100.0, 0.0));
        // Full throttle straight ahead, no turning.
        let mut full_speed = |_inputs: &[f64]| vec![0.5, 1.0];
        let outcome = evaluate(&mut environment, &mut full_speed, 5).unwrap();
        match outcome {
            Outcome::Timeout { fitness } => {
                assert!(fitness > MIN_FITNESS && fitness < 1.0);
            }
            Outcome::Solved { .. } => panic!("5 steps cannot cover 95 units"),
        }
    }

    #[test]
    fn test_forward_controller_reaches_a_near_exit() {
        let mut environment = open_field(Point::new(20.0, 0.0));
        let mut full_speed = |_inputs: &[f64]| vec![0.5, 1.0];
        let outcome = evaluate(&mut environment, &mut full_speed, 50).unwrap();
        assert!(outcome.is_solved());
        assert_abs_diff_eq!(outcome.fitness(), 1.0);
    }

    #[test]
    fn test_nan_controller_is_a_fatal_evaluation_error() {
        let mut environment = open_field(Point::new(100.0, 0.0));
        let mut broken = |_inputs: &[f64]| vec![f64::NAN, 0.5];
        let error = evaluate(&mut environment, &mut broken, 10).unwrap_err();
        assert!(matches!(
            error,
            SimulationError::NonFiniteControl { step: 1 }
        ));
    }

    #[test]
    fn test_wrong_arity_controller_is_rejected() {
        let mut environment = open_field(Point::new(100.0, 0.0));
        let mut broken = |_inputs: &[f64]| vec![0.5];
        let error = evaluate(&mut environment, &mut broken, 10).unwrap_err();
        assert!(matches!(error, SimulationError::WrongControlArity(1)));
    }

    #[test]
    fn test_random_controller_is_deterministic_per_seed() {
        let mut first = open_field(Point::new(100.0, 0.0));
        let mut second = open_field(Point::new(100.0, 0.0));
        let a = evaluate(&mut first, &mut RandomController::new(42), 100).unwrap();
        let b = evaluate(&mut second, &mut RandomController::new(42), 100).unwrap();
        assert_eq!(a, b);
        assert_abs_diff_eq!(
            first.agent().location().x(),
            second.agent().location().x()
        );
        assert_abs_diff_eq!(
            first.agent().location().y(),
            second.agent().location().y()
        );
    }

    #[test]
    fn test_controller_sees_full_sensor_vector() {
        let mut environment = open_field(Point::new(100.0, 0.0));
        let mut seen = 0usize;
        let mut probe = |inputs: &[f64]| {
            seen = inputs.len();
            vec![0.5, 0.5]
        };
        evaluate(&mut environment, &mut probe, 1).unwrap();
        let agent = environment.agent();
        assert_eq!(
            seen,
            agent.range_finders().len() + agent.radar().len()
        );
    }
}
