//! Demo driver: run a seeded random policy through a maze file.
//!
//! Usage: `maze-sim <maze-file> [seed] [steps]`

use std::{env, process::ExitCode};

use tracing::{error, info};

use maze_sim::{
    maze,
    simulation::{evaluate, RandomController},
    Outcome,
};

const DEFAULT_SEED: u64 = 42;
const DEFAULT_STEPS: usize = 400;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().collect();
    let Some(path) = args.get(1) else {
        error!("usage: maze-sim <maze-file> [seed] [steps]");
        return ExitCode::FAILURE;
    };
    let seed = args
        .get(2)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(DEFAULT_SEED);
    let steps = args
        .get(3)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(DEFAULT_STEPS);

    let mut environment = match maze::read_environment(path) {
        Ok(environment) => environment,
        Err(error) => {
            error!(%error, "could not configure the maze environment");
            return ExitCode::FAILURE;
        }
    };

    let mut controller = RandomController::new(seed);
    match evaluate(&mut environment, &mut controller, steps) {
        Ok(Outcome::Solved { steps }) => {
            info!(steps, fitness = 1.0, "random policy reached the exit");
        }
        Ok(Outcome::Timeout { fitness }) => {
            let agent = environment.agent();
            info!(
                fitness,
                x = agent.location().x(),
                y = agent.location().y(),
                "step budget exhausted"
            );
        }
        Err(error) => {
            error!(%error, "evaluation failed");
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
