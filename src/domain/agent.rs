//! Maze-navigating agent: physical state plus fixed sensor geometry.

use super::Point;

/// Default collision radius of the agent body.
pub const DEFAULT_RADIUS: f64 = 8.0;
/// Default maximum rangefinder range.
pub const DEFAULT_RANGE_FINDER_RANGE: f64 = 100.0;

/// Rangefinder mounting directions relative to the heading, degrees.
const RANGE_FINDER_ANGLES: [f64; 6] = [-90.0, -45.0, 0.0, 45.0, 90.0, -180.0];

/// Radar sector boundaries relative to the heading, degrees. The forward
/// sector wraps past 360.
const RADAR_ANGLES: [(f64, f64); 4] = [
    (315.0, 405.0),
    (45.0, 135.0),
    (135.0, 225.0),
    (225.0, 315.0),
];

/// The navigating entity. Location, heading, speed, and angular velocity are
/// mutated once per simulation step; the sensor geometry is fixed for the
/// agent's lifetime, and the two reading vectors always match their angle
/// tables in length.
#[derive(Clone, Debug, PartialEq, PartialOrd)]
pub struct Agent {
    location: Point,
    heading: f64,
    speed: f64,
    angular_vel: f64,
    radius: f64,
    range_finder_range: f64,
    range_finder_angles: Vec<f64>,
    radar_angles: Vec<(f64, f64)>,
    range_finders: Vec<f64>,
    radar: Vec<f64>,
}

impl Agent {
    pub fn new(location: Point) -> Self {
        Self {
            location,
            heading: 0.0,
            speed: 0.0,
            angular_vel: 0.0,
            radius: DEFAULT_RADIUS,
            range_finder_range: DEFAULT_RANGE_FINDER_RANGE,
            range_finder_angles: RANGE_FINDER_ANGLES.to_vec(),
            radar_angles: RADAR_ANGLES.to_vec(),
            range_finders: vec![0.0; RANGE_FINDER_ANGLES.len()],
            radar: vec![0.0; RADAR_ANGLES.len()],
        }
    }

    pub fn with_heading(mut self, heading: f64) -> Self {
        self.heading = heading;
        self
    }

    pub fn location(&self) -> Point {
        self.location
    }

    pub fn heading(&self) -> f64 {
        self.heading
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn angular_vel(&self) -> f64 {
        self.angular_vel
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn range_finder_range(&self) -> f64 {
        self.range_finder_range
    }

    pub fn range_finder_angles(&self) -> &[f64] {
        &self.range_finder_angles
    }

    pub fn radar_angles(&self) -> &[(f64, f64)] {
        &self.radar_angles
    }

    /// Latest rangefinder readings, one per mounting angle.
    pub fn range_finders(&self) -> &[f64] {
        &self.range_finders
    }

    /// Latest radar activations, one per sector.
    pub fn radar(&self) -> &[f64] {
        &self.radar
    }

    pub fn set_location(&mut self, location: Point) {
        self.location = location;
    }

    pub fn set_heading(&mut self, heading: f64) {
        self.heading = heading;
    }

    pub fn set_speed(&mut self, speed: f64) {
        self.speed = speed;
    }

    pub fn set_angular_vel(&mut self, angular_vel: f64) {
        self.angular_vel = angular_vel;
    }

    pub(crate) fn set_range_finder(&mut self, idx: usize, reading: f64) {
        self.range_finders[idx] = reading;
    }

    pub(crate) fn set_radar(&mut self, idx: usize, activation: f64) {
        self.radar[idx] = activation;
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_agent_defaults() {
        let agent = Agent::new(Point::new(10.0, 20.0)).with_heading(45.0);
        assert_abs_diff_eq!(agent.location().x(), 10.0);
        assert_abs_diff_eq!(agent.location().y(), 20.0);
        assert_abs_diff_eq!(agent.heading(), 45.0);
        assert_abs_diff_eq!(agent.speed(), 0.0);
        assert_abs_diff_eq!(agent.angular_vel(), 0.0);
        assert_abs_diff_eq!(agent.radius(), DEFAULT_RADIUS);
        assert_abs_diff_eq!(agent.range_finder_range(), DEFAULT_RANGE_FINDER_RANGE);
    }

    #[test]
    fn test_reading_vectors_match_angle_tables() {
        let agent = Agent::new(Point::new(0.0, 0.0));
        assert_eq!(agent.range_finders().len(), agent.range_finder_angles().len());
        assert_eq!(agent.radar().len(), agent.radar_angles().len());
    }
}
