//! Maze environment: walls, exit, and the agent navigating between them.
//!
//! The environment owns the per-step transition: control application,
//! collision-gated motion, sensor refresh, and the exit check. Walls are
//! fixed for the lifetime of a simulation run.

use super::{deg_to_rad, Agent, Point, Segment};

/// Tunables of the step transition, passed in at construction instead of
/// living as process-wide constants.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct EnvironmentConfig {
    /// Symmetric clamp applied to speed and angular velocity after control
    /// application.
    pub control_bound: f64,
    /// Capture distance within which the exit counts as reached.
    pub exit_range: f64,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            control_bound: 3.0,
            exit_range: 5.0,
        }
    }
}

/// Two-state machine of a simulation run. `Solved` is terminal: every
/// further step is a no-op.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Status {
    Running,
    Solved,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Environment {
    walls: Vec<Segment>,
    exit_point: Point,
    agent: Agent,
    config: EnvironmentConfig,
    initial_distance: f64,
    status: Status,
}

impl Environment {
    pub fn new(agent: Agent, walls: Vec<Segment>, exit_point: Point) -> Self {
        Self::with_config(agent, walls, exit_point, EnvironmentConfig::default())
    }

    /// Builds the environment and immediately computes both sensor arrays,
    /// so the first observation is available before any step.
    pub fn with_config(
        agent: Agent,
        walls: Vec<Segment>,
        exit_point: Point,
        config: EnvironmentConfig,
    ) -> Self {
        let initial_distance = agent.location().distance(exit_point);
        let mut environment = Self {
            walls,
            exit_point,
            agent,
            config,
            initial_distance,
            status: Status::Running,
        };
        environment.update_rangefinder_sensors();
        environment.update_radars();
        environment
    }

    pub fn agent(&self) -> &Agent {
        &self.agent
    }

    pub fn walls(&self) -> &[Segment] {
        &self.walls
    }

    pub fn exit_point(&self) -> Point {
        self.exit_point
    }

    pub fn config(&self) -> &EnvironmentConfig {
        &self.config
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Agent-to-exit distance cached at construction time, the baseline of
    /// the fitness score.
    pub fn initial_distance(&self) -> f64 {
        self.initial_distance
    }

    pub fn agent_distance_to_exit(&self) -> f64 {
        self.agent.location().distance(self.exit_point)
    }

    /// True when any wall comes closer to `location` than the agent's
    /// collision radius.
    pub fn test_wall_collision(&self, location: Point) -> bool {
        self.walls
            .iter()
            .any(|wall| wall.distance(location) < self.agent.radius())
    }

    /// Controller input vector: rangefinder readings followed by radar
    /// activations, order and length fixed.
    pub fn sensor_inputs(&self) -> Vec<f64> {
        self.agent
            .range_finders()
            .iter()
            .chain(self.agent.radar().iter())
            .copied()
            .collect()
    }

    /// Adds the 0.5-centered control deltas to angular velocity and speed,
    /// then clamps both to the configured bound.
    fn apply_control_signals(&mut self, control_signals: [f64; 2]) {
        let bound = self.config.control_bound;
        let angular_vel = self.agent.angular_vel() + (control_signals[0] - 0.5);
        let speed = self.agent.speed() + (control_signals[1] - 0.5);
        self.agent.set_angular_vel(angular_vel.clamp(-bound, bound));
        self.agent.set_speed(speed.clamp(-bound, bound));
    }

    /// Casts one ray per configured rangefinder and records the distance to
    /// the nearest wall struck, or the maximum range. O(rangefinders × walls).
    fn update_rangefinder_sensors(&mut self) {
        let location = self.agent.location();
        let range = self.agent.range_finder_range();

        for i in 0..self.agent.range_finder_angles().len() {
            let rad = deg_to_rad(self.agent.range_finder_angles()[i]);
            let projection = Point::new(
                location.x() + rad.cos() * range,
                location.y() + rad.sin() * range,
            )
            .rotate(self.agent.heading(), location);
            let ray = Segment::new(location, projection);

            let mut min_range = range;
            for wall in &self.walls {
                if let Some(intersection) = wall.intersect(ray) {
                    let found_range = intersection.distance(location);
                    if found_range < min_range {
                        min_range = found_range;
                    }
                }
            }

            self.agent.set_range_finder(i, min_range);
        }
    }

    /// Activates the radar sectors containing the exit direction in the
    /// agent's heading-relative frame.
    ///
    /// Sectors may extend past 360, so the test also checks `angle + 360`.
    /// The symmetric `angle - 360` case is not checked: no configured sector
    /// starts below 0.
    fn update_radars(&mut self) {
        let target = self
            .exit_point
            .rotate(self.agent.heading(), self.agent.location())
            - self.agent.location();
        let angle = target.angle();

        for i in 0..self.agent.radar_angles().len() {
            let (start, end) = self.agent.radar_angles()[i];
            let inside = (angle >= start && angle < end)
                || (angle + 360.0 >= start && angle + 360.0 < end);
            self.agent.set_radar(i, if inside { 1.0 } else { 0.0 });
        }
    }

    /// Advances the simulation by one step.
    ///
    /// Velocity is computed from the pre-rotation heading, so the heading
    /// change applies to the next step's motion. A colliding candidate
    /// location is rejected in place while the heading, speed, and angular
    /// velocity changes are retained.
    ///
    /// Precondition: the per-step angular change stays below 360 degrees
    /// (guaranteed by the control clamp), so a single conditional wrap
    /// keeps the heading in range.
    pub fn update(&mut self, control_signals: [f64; 2]) -> Status {
        if self.status == Status::Solved {
            return Status::Solved;
        }

        self.apply_control_signals(control_signals);

        let rad = deg_to_rad(self.agent.heading());
        let vx = rad.cos() * self.agent.speed();
        let vy = rad.sin() * self.agent.speed();

        let mut heading = self.agent.heading() + self.agent.angular_vel();
        if heading > 360.0 {
            heading -= 360.0;
        } else if heading < 0.0 {
            heading += 360.0;
        }
        self.agent.set_heading(heading);

        let candidate = self.agent.location() + Point::new(vx, vy);
        if !self.test_wall_collision(candidate) {
            self.agent.set_location(candidate);
        }

        self.update_rangefinder_sensors();
        self.update_radars();

        if self.agent_distance_to_exit() < self.config.exit_range {
            self.status = Status::Solved;
        }
        self.status
    }
}
