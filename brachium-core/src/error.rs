use std::{error, fmt};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Error {
    /// Target elevation was NaN or infinite.
    InvalidElevation(f32),
    /// Angle limits do not form a range.
    InvalidLimits(f32, f32),
    /// Segment length was zero, negative or not finite.
    InvalidSegment(f32),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidElevation(elevation) => {
                write!(f, "target elevation is not a finite number: {}", elevation)
            }
            Error::InvalidLimits(min, max) => {
                write!(f, "angle limits do not form a range: {}°..{}°", min, max)
            }
            Error::InvalidSegment(length) => {
                write!(f, "segment length must be positive: {}", length)
            }
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        None
    }
}
