//! Deterministic 2D maze-navigation simulator.
//!
//! A circular agent with rangefinder and radar sensors moves through a set
//! of polygonal walls toward an exit point, driven by an externally supplied
//! controller. [`simulation::evaluate`] turns a controller and a step budget
//! into either a solved outcome or a normalized fitness score.

pub mod domain;
pub mod maze;
pub mod records;
pub mod simulation;

pub use domain::{Agent, Environment, EnvironmentConfig, Point, Segment, Status};
pub use simulation::{evaluate, Controller, Outcome, SimulationError};
