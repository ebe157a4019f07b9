use thiserror::Error;

/// Errors produced by the algorithms in this crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An argument violated the algorithm's precondition.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The requested regular number does not fit in a `u64`.
    #[error("The {n}th regular number overflows u64")]
    Overflow { n: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = Error::InvalidInput("n must be at least 1".to_string());
        assert_eq!(err.to_string(), "Invalid input: n must be at least 1");

        let err = Error::Overflow { n: 13283 };
        assert_eq!(err.to_string(), "The 13283th regular number overflows u64");
    }
}
