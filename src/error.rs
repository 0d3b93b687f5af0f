//! Error types for notation parsing and move application.

/// Malformed token in algorithm text.
///
/// Parsing fails fast: the first bad token aborts the whole sequence.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Move \"{token}\" at position {index} is not recognized")]
pub struct ParseError {
    pub token: String,
    pub index: usize,
}

/// Move token whose face letter is not one of `U D L R F B`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Face \"{face}\" is not recognized")]
pub struct InvalidMoveError {
    pub face: char,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CubeError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    InvalidMove(#[from] InvalidMoveError),
}

/// Result type alias for cube operations
pub type CubeResult<T> = Result<T, CubeError>;
