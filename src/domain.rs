//! The domain module encapsulates the core simulation logic. It defines the
//! geometry kernel, the `Agent`, and the `Environment` entity, along with
//! the rules governing their interactions.
//!
//! By minimizing hard dependencies, this module ensures the simulation logic
//! remains adaptable and independent of specific implementation details.

mod agent;
mod basis;
mod environment;

pub use agent::{Agent, DEFAULT_RADIUS, DEFAULT_RANGE_FINDER_RANGE};
pub use basis::{deg_to_rad, Point, Segment};
pub use environment::{Environment, EnvironmentConfig, Status};
