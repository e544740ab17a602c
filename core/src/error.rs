use thiserror::Error;

/// Errors raised while computing or reporting factorials.
#[derive(Debug, Error)]
pub enum Error {
    // Recursion only terminates for non-negative input.
    #[error("invalid input: {0} is negative")]
    InvalidInput(i64),

    #[error("recursion limit exceeded: depth {n} is above {limit}")]
    RecursionLimit { n: i64, limit: i64 },

    #[error("factorial of {n} does not fit in 64 bits")]
    Overflow { n: i64 },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
