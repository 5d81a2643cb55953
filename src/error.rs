use thiserror::Error;

/// Reasons a run stops without a path. The messages are the user-facing
/// report; the fields carry the same facts in structured form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TriangleError {
    #[error("Error - Row {row} - Non-Integer detected.")]
    NonIntegerToken {
        row: usize,
        column: usize,
        token: String,
    },

    #[error("Error - Row {row} - Input line is too short. {expected} integers expected. Only {found} integers found.")]
    RowTooShort {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Error - Row {row} - Input line is too long. {expected} integers expected. {found} integers found.")]
    RowTooLong {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Error - Input is empty and will result in an empty triangle and therefore no path.")]
    EmptyTriangle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NonIntegerToken,
    RowTooShort,
    RowTooLong,
    EmptyTriangle,
}

impl TriangleError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TriangleError::NonIntegerToken { .. } => ErrorKind::NonIntegerToken,
            TriangleError::RowTooShort { .. } => ErrorKind::RowTooShort,
            TriangleError::RowTooLong { .. } => ErrorKind::RowTooLong,
            TriangleError::EmptyTriangle => ErrorKind::EmptyTriangle,
        }
    }

    pub fn row(&self) -> Option<usize> {
        match self {
            TriangleError::NonIntegerToken { row, .. }
            | TriangleError::RowTooShort { row, .. }
            | TriangleError::RowTooLong { row, .. } => Some(*row),
            TriangleError::EmptyTriangle => None,
        }
    }
}
