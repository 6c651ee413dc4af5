//! Typed failure values surfaced by grid setup and search.

use std::fmt;

use gridway_core::Point;

/// Which endpoint of a search an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Goal => write!(f, "goal"),
        }
    }
}

/// Reasons a grid is not (validly) initialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitError {
    /// Width or height is zero or negative.
    NonPositiveDimensions { width: i32, height: i32 },
    /// The walkability mask does not match the grid dimensions.
    MaskSizeMismatch {
        expected: (i32, i32),
        actual: (i32, i32),
    },
    /// Start or goal lies outside `[0, width) x [0, height)`.
    OutOfBounds { endpoint: Endpoint, pos: Point },
    /// Start and goal denote the same cell.
    StartEqualsGoal { pos: Point },
    /// A search was attempted before a successful initialization.
    NotInitialized,
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveDimensions { width, height } => {
                write!(f, "grid dimensions must be positive, got {width}x{height}")
            }
            Self::MaskSizeMismatch { expected, actual } => {
                write!(
                    f,
                    "walkability mask is {}x{}, expected {}x{}",
                    actual.0, actual.1, expected.0, expected.1
                )
            }
            Self::OutOfBounds { endpoint, pos } => {
                write!(f, "{endpoint} position {pos} is out of bounds")
            }
            Self::StartEqualsGoal { pos } => {
                write!(f, "start and goal are both {pos}")
            }
            Self::NotInitialized => write!(f, "grid is not initialized"),
        }
    }
}

impl std::error::Error for InitError {}

/// Errors surfaced by [`SearchGrid::calculate_path`](crate::SearchGrid::calculate_path).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// The grid was never initialized, was reset, or had invalid input.
    Initialization(InitError),
    /// The open set was exhausted: start and goal are disconnected.
    NoPath,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Initialization(e) => write!(f, "search not ready: {e}"),
            Self::NoPath => write!(f, "no path exists between start and goal"),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Initialization(e) => Some(e),
            Self::NoPath => None,
        }
    }
}

impl From<InitError> for SearchError {
    fn from(e: InitError) -> Self {
        Self::Initialization(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = InitError::OutOfBounds {
            endpoint: Endpoint::Goal,
            pos: Point::new(9, -1),
        };
        assert_eq!(e.to_string(), "goal position (9, -1) is out of bounds");
        assert_eq!(
            SearchError::NoPath.to_string(),
            "no path exists between start and goal"
        );
    }

    #[test]
    fn init_error_converts() {
        let err: SearchError = InitError::NotInitialized.into();
        assert_eq!(err, SearchError::Initialization(InitError::NotInitialized));
    }
}
