use nalgebra::{Point2, Vector2};

use crate::joint::JointAngles;
use crate::pose::Pose;

/// Forward kinematics for the three segment linkage.
///
/// The shoulder and elbow segments share the length `l1`, the end effector
/// carries its own length `l2`.
pub struct ForwardKinematics {
    l1: f32,
    l2: f32,
}

impl ForwardKinematics {
    pub fn new(l1: f32, l2: f32) -> Self {
        Self { l1, l2 }
    }

    /// Solve the joint positions for the given joint angles.
    ///
    /// Angles accumulate along the chain: each segment is rotated by the
    /// sum of its own joint angle and every joint angle before it. At zero
    /// rotation a segment points straight up, which in the screen frame is
    /// a negative y offset from its pivot.
    pub fn solve(&self, angles: &JointAngles) -> Pose {
        let theta_1 = angles.shoulder.to_radians();
        let theta_2 = theta_1 + angles.elbow.to_radians();
        let theta_3 = theta_2 + angles.wrist.to_radians();

        let elbow = Point2::new(self.l1 * theta_1.sin(), -(self.l1 * theta_1.cos()));
        let wrist = elbow + Vector2::new(self.l1 * theta_2.sin(), -(self.l1 * theta_2.cos()));
        let tip = wrist + Vector2::new(self.l2 * theta_3.sin(), -(self.l2 * theta_3.cos()));

        Pose { elbow, wrist, tip }
    }
}
