/// Error categories.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Gauss-Jordan elimination found no non-zero pivot for a column.
    #[error("Matrix is singular: no non-zero pivot in column {column}")]
    SingularMatrix { column: usize },
}

impl Error {
    pub fn singular(column: usize) -> Self {
        Self::SingularMatrix { column }
    }
}
