use crate::algorithm::{ElevationSolver, ForwardKinematics};
use crate::consts;
use crate::error::Error;
use crate::joint::{AngleConstraint, JointAngles};
use crate::pose::Pose;

/// Configured arm description from which solves are performed.
///
/// The profile fixes the segment geometry and the shared angle constraint
/// for the lifetime of the process. Invalid geometry is rejected here, at
/// construction, never per solve call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArmProfile {
    segment_length: f32,
    effector_length: f32,
    constraint: AngleConstraint,
}

impl Default for ArmProfile {
    fn default() -> Self {
        Self {
            segment_length: consts::SEGMENT_LENGTH,
            effector_length: consts::EFFECTOR_LENGTH,
            constraint: AngleConstraint::default(),
        }
    }
}

impl ArmProfile {
    /// Construct a new profile from segment lengths and an angle constraint.
    ///
    /// Both lengths must be finite and positive.
    pub fn new(
        segment_length: f32,
        effector_length: f32,
        constraint: AngleConstraint,
    ) -> Result<Self, Error> {
        if !segment_length.is_finite() || segment_length <= 0.0 {
            return Err(Error::InvalidSegment(segment_length));
        }
        if !effector_length.is_finite() || effector_length <= 0.0 {
            return Err(Error::InvalidSegment(effector_length));
        }

        Ok(Self {
            segment_length,
            effector_length,
            constraint,
        })
    }

    /// Shoulder and elbow segment length.
    #[inline]
    pub fn segment_length(&self) -> f32 {
        self.segment_length
    }

    /// End effector length.
    #[inline]
    pub fn effector_length(&self) -> f32 {
        self.effector_length
    }

    /// Shared joint angle constraint.
    #[inline]
    pub fn constraint(&self) -> AngleConstraint {
        self.constraint
    }

    /// Solve the full pipeline for one target elevation in degrees.
    ///
    /// Runs the angle solver, the forward kinematics and the elevation
    /// readout and returns the result as one unit. A consumer holding a
    /// `Solution` therefore never observes angles from one target mixed
    /// with points from another. Non finite targets are rejected before
    /// any trigonometry runs.
    pub fn solve(&self, target_elevation: f32) -> Result<Solution, Error> {
        if !target_elevation.is_finite() {
            return Err(Error::InvalidElevation(target_elevation));
        }

        let angles = ElevationSolver::new(self.constraint).solve(target_elevation);
        let pose =
            ForwardKinematics::new(self.segment_length, self.effector_length).solve(&angles);
        let elevation = angles.elevation();

        Ok(Solution {
            angles,
            pose,
            elevation,
        })
    }
}

/// One complete recomputation result.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Solution {
    /// Clamped and rounded joint angles.
    pub angles: JointAngles,
    /// Joint and effector positions for the angles.
    pub pose: Pose,
    /// Achieved effector elevation in degrees.
    pub elevation: f32,
}

impl std::fmt::Display for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}; {}; Elevation: {:>+6.1}°",
            self.angles, self.pose, self.elevation
        )
    }
}
