use nalgebra::Point2;

/// Planar pose of the arm linkage.
///
/// All coordinates are in the screen frame: the shoulder pivot sits at the
/// origin and negative y points up. Units follow the configured segment
/// lengths.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    /// Elbow joint position.
    pub elbow: Point2<f32>,
    /// Wrist joint position.
    pub wrist: Point2<f32>,
    /// End effector tip position.
    pub tip: Point2<f32>,
}

impl Pose {
    /// Distance from the shoulder pivot to the effector tip.
    pub fn reach(&self) -> f32 {
        self.tip.coords.norm()
    }
}

impl std::fmt::Display for Pose {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Elbow: X {:>+7.1} Y {:>+7.1}; Wrist: X {:>+7.1} Y {:>+7.1}; Tip: X {:>+7.1} Y {:>+7.1}",
            self.elbow.x, self.elbow.y, self.wrist.x, self.wrist.y, self.tip.x, self.tip.y
        )
    }
}
