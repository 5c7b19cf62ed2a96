use crate::consts;
use crate::error::Error;

/// Round an angle to tenth degree resolution.
#[inline]
pub fn round_degrees(angle: f32) -> f32 {
    (angle * 10.0).round() / 10.0
}

/// Angular limits shared by all three joints, in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AngleConstraint {
    min: f32,
    max: f32,
}

impl Default for AngleConstraint {
    fn default() -> Self {
        Self {
            min: consts::ANGLE_MIN,
            max: consts::ANGLE_MAX,
        }
    }
}

impl AngleConstraint {
    /// Construct a new constraint from a lower and upper limit.
    ///
    /// The limits must be finite and must form a non empty range.
    pub fn new(min: f32, max: f32) -> Result<Self, Error> {
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(Error::InvalidLimits(min, max));
        }

        Ok(Self { min, max })
    }

    #[inline]
    pub fn min(&self) -> f32 {
        self.min
    }

    #[inline]
    pub fn max(&self) -> f32 {
        self.max
    }

    /// Saturate an angle to the constraint range.
    #[inline]
    pub fn clamp(&self, angle: f32) -> f32 {
        angle.max(self.min).min(self.max)
    }

    /// Whether an angle lies within the constraint range.
    #[inline]
    pub fn contains(&self, angle: f32) -> bool {
        angle >= self.min && angle <= self.max
    }
}

/// Joint angles of the arm linkage, in degrees.
///
/// Each angle is relative to the cumulative orientation of the segments
/// before it, not to the world frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JointAngles {
    /// Shoulder angle in degrees.
    pub shoulder: f32,
    /// Elbow angle in degrees.
    pub elbow: f32,
    /// Wrist angle in degrees.
    pub wrist: f32,
}

impl JointAngles {
    /// Construct new joint angles.
    pub fn new(shoulder: f32, elbow: f32, wrist: f32) -> Self {
        Self {
            shoulder,
            elbow,
            wrist,
        }
    }

    /// Total rotation over all three joints in degrees.
    #[inline]
    pub fn total(&self) -> f32 {
        self.shoulder + self.elbow + self.wrist
    }

    /// Effector elevation achieved by these angles, in degrees.
    ///
    /// A total rotation of zero leaves every segment pointing straight up,
    /// which reads as an elevation of 90°. The readout is rounded to tenth
    /// degree resolution. It matches the requested target exactly unless
    /// the limits clamped one of the joints.
    pub fn elevation(&self) -> f32 {
        round_degrees(90.0 - self.total())
    }
}

impl std::fmt::Display for JointAngles {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Shoulder {:>+6.1}° Elbow {:>+6.1}° Wrist {:>+6.1}°",
            self.shoulder, self.elbow, self.wrist
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp() {
        let constraint = AngleConstraint::default();

        assert_eq!(constraint.clamp(54.0), 54.0);
        assert_eq!(constraint.clamp(144.0), 125.0);
        assert_eq!(constraint.clamp(-300.0), -125.0);
    }

    #[test]
    fn test_clamp_idempotent() {
        let constraint = AngleConstraint::default();

        for angle in [-1_000.0, -125.0, -36.0, 0.0, 72.0, 125.0, 1_000.0] {
            let clamped = constraint.clamp(angle);
            assert_eq!(constraint.clamp(clamped), clamped);
        }
    }

    #[test]
    fn test_clamp_monotonic() {
        let constraint = AngleConstraint::default();

        let input = [-500.0, -125.1, -54.0, 0.0, 54.0, 125.1, 500.0];
        for pair in input.windows(2) {
            assert!(constraint.clamp(pair[0]) <= constraint.clamp(pair[1]));
        }
    }

    #[test]
    fn test_constraint_rejects_inverted_range() {
        assert_eq!(
            AngleConstraint::new(125.0, -125.0).unwrap_err(),
            Error::InvalidLimits(125.0, -125.0)
        );
        assert!(AngleConstraint::new(5.0, 5.0).is_err());
    }

    #[test]
    fn test_constraint_rejects_non_finite_limits() {
        assert!(AngleConstraint::new(f32::NAN, 125.0).is_err());
        assert!(AngleConstraint::new(-125.0, f32::INFINITY).is_err());
    }

    #[test]
    fn test_elevation_readout() {
        let tolerance = 0.05;

        let angles = JointAngles::new(-36.0, 72.0, 54.0);
        assert!((angles.elevation() - 0.0).abs() < tolerance);

        let angles = JointAngles::new(0.0, 0.0, 0.0);
        assert!((angles.elevation() - 90.0).abs() < tolerance);

        let angles = JointAngles::new(-72.0, 125.0, 125.0);
        assert!((angles.elevation() + 88.0).abs() < tolerance);
    }

    #[test]
    fn test_round_degrees() {
        assert_eq!(round_degrees(12.34), 12.3);
        assert_eq!(round_degrees(-12.36), -12.4);
        assert_eq!(round_degrees(125.0), 125.0);
    }
}
