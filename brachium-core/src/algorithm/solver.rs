use crate::joint::{round_degrees, AngleConstraint, JointAngles};

/// Share of the required rotation assigned to the shoulder.
const SHOULDER_GAIN: f32 = -0.4;
/// Share of the required rotation assigned to the elbow.
const ELBOW_GAIN: f32 = 0.8;

/// Distributes a target elevation over the three joints.
///
/// The split is a fixed pose selection policy where the elbow does most of
/// the work and the shoulder leans back against it. The wrist is solved
/// last from the already clamped shoulder and elbow, so it absorbs their
/// clipped share whenever its own limit allows. Out of range targets
/// degrade by clamping and are never an error.
pub struct ElevationSolver {
    constraint: AngleConstraint,
}

impl ElevationSolver {
    pub fn new(constraint: AngleConstraint) -> Self {
        Self { constraint }
    }

    /// Solve the joint angles for a target elevation in degrees.
    ///
    /// An elevation of 90° points the effector straight up and solves to
    /// the neutral pose. Without clamping the angles sum to 90° minus the
    /// target. Each angle is rounded to tenth degree resolution.
    pub fn solve(&self, target_elevation: f32) -> JointAngles {
        let total = 90.0 - target_elevation;

        let shoulder = self.constraint.clamp(SHOULDER_GAIN * total);
        let elbow = self.constraint.clamp(ELBOW_GAIN * total);
        let wrist = self.constraint.clamp(total - shoulder - elbow);

        JointAngles {
            shoulder: round_degrees(shoulder),
            elbow: round_degrees(elbow),
            wrist: round_degrees(wrist),
        }
    }
}
