//! Adapter for the textual maze description format.
//!
//! The format is line-oriented; blank lines are skipped. In order: the wall
//! count, the agent start point (`x y`), the agent start heading, the exit
//! point, then exactly `count` wall segments (`ax ay bx by`). Validation
//! happens here, before any simulation step runs.

use std::{fs, io, path::Path};

use thiserror::Error;
use tracing::info;

use crate::domain::{Agent, Environment, Point, Segment};

#[derive(Error, Debug)]
pub enum MazeError {
    #[error("failed to read maze description")]
    Io(#[from] io::Error),
    #[error("line {line}: expected {expected} numbers, got {got}")]
    WrongNumberCount {
        line: usize,
        expected: usize,
        got: usize,
    },
    #[error("line {line}: not a number: {token:?}")]
    InvalidNumber { line: usize, token: String },
    #[error("maze description ended before the {missing} was read")]
    Truncated { missing: &'static str },
    #[error("wall count mismatch: header says {declared}, found {found}")]
    WallCountMismatch { declared: usize, found: usize },
}

/// Reads a maze description from a file and builds the environment.
pub fn read_environment<P: AsRef<Path>>(path: P) -> Result<Environment, MazeError> {
    let contents = fs::read_to_string(path.as_ref())?;
    let environment = parse(&contents)?;
    info!(path = %path.as_ref().display(), "maze environment configured");
    Ok(environment)
}

/// Parses a maze description into an environment with default config.
pub fn parse(contents: &str) -> Result<Environment, MazeError> {
    let mut lines = contents
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (line, header) = lines.next().ok_or(MazeError::Truncated {
        missing: "wall count",
    })?;
    let declared = parse_count(line, header)?;

    let (line, start) = lines.next().ok_or(MazeError::Truncated {
        missing: "agent start point",
    })?;
    let start = parse_point(line, start)?;

    let (line, heading) = lines.next().ok_or(MazeError::Truncated {
        missing: "agent start heading",
    })?;
    let [heading] = parse_numbers::<1>(line, heading)?;

    let (line, exit_point) = lines.next().ok_or(MazeError::Truncated {
        missing: "exit point",
    })?;
    let exit_point = parse_point(line, exit_point)?;

    let walls = lines
        .map(|(line, wall)| parse_segment(line, wall))
        .collect::<Result<Vec<_>, _>>()?;
    if walls.len() != declared {
        return Err(MazeError::WallCountMismatch {
            declared,
            found: walls.len(),
        });
    }

    let agent = Agent::new(start).with_heading(heading);
    Ok(Environment::new(agent, walls, exit_point))
}

fn parse_count(line: usize, token: &str) -> Result<usize, MazeError> {
    token.parse().map_err(|_| MazeError::InvalidNumber {
        line,
        token: token.to_string(),
    })
}

fn parse_point(line: usize, text: &str) -> Result<Point, MazeError> {
    let [x, y] = parse_numbers::<2>(line, text)?;
    Ok(Point::new(x, y))
}

fn parse_segment(line: usize, text: &str) -> Result<Segment, MazeError> {
    let [ax, ay, bx, by] = parse_numbers::<4>(line, text)?;
    Ok(Segment::new(Point::new(ax, ay), Point::new(bx, by)))
}

fn parse_numbers<const N: usize>(line: usize, text: &str) -> Result<[f64; N], MazeError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() != N {
        return Err(MazeError::WrongNumberCount {
            line,
            expected: N,
            got: tokens.len(),
        });
    }

    let mut numbers = [0.0; N];
    for (number, token) in numbers.iter_mut().zip(tokens) {
        *number = token.parse().map_err(|_| MazeError::InvalidNumber {
            line,
            token: token.to_string(),
        })?;
    }
    Ok(numbers)
}
