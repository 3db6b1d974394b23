use derive_more::Display;

#[derive(Clone, PartialEq, Eq, Debug, Display)]
pub enum SolveError { 
    /// The augmented matrix does not have `n_vars + 1` columns.
    #[display("malformed input: augmented matrix must have {expected} columns, got {actual}.")]
    Malformed { expected: usize, actual: usize },

    /// A vector does not match the number of rows of its matrix.
    #[display("dimension mismatch: expected a vector of length {expected}, got {actual}.")]
    DimMismatch { expected: usize, actual: usize },

    #[display("row {row} has {actual} entries, expected {expected}.")]
    Ragged { row: usize, expected: usize, actual: usize },
}

impl std::error::Error for SolveError {}

#[cfg(test)]
mod tests { 
    use super::*;

    #[test]
    fn display() { 
        let e = SolveError::Malformed { expected: 4, actual: 3 };
        assert_eq!(e.to_string(), "malformed input: augmented matrix must have 4 columns, got 3.");

        let e = SolveError::Ragged { row: 1, expected: 3, actual: 2 };
        assert_eq!(e.to_string(), "row 1 has 2 entries, expected 3.");
    }
}
