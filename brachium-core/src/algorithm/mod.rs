pub use self::fk::ForwardKinematics;
pub use self::solver::ElevationSolver;

mod fk;
mod solver;
