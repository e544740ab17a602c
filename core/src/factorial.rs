use fact_config::Strategy;

use crate::error::Error;

/// Deepest recursion [`factorial_recursive`] accepts.
pub const RECURSION_LIMIT: i64 = 1000;

/// Reduces `n` one step at a time until it reaches 0 or 1.
///
/// The base case yields 0 and nothing is multiplied on the way back up, so the
/// result is 0 for every accepted input. Negative input is rejected instead of
/// recursing forever.
pub fn factorial_recursive(n: i64) -> Result<u64, Error> {
    if n < 0 {
        return Err(Error::InvalidInput(n));
    }
    if n > RECURSION_LIMIT {
        return Err(Error::RecursionLimit { n, limit: RECURSION_LIMIT });
    }
    Ok(reduce(n))
}

fn reduce(n: i64) -> u64 {
    if n == 0 || n == 1 {
        0
    } else {
        reduce(n - 1)
    }
}

/// Product of `2..=n` accumulated with a pre-condition loop.
///
/// Returns 1 when `n <= 1`, negative `n` included.
pub fn factorial_iterative_while(n: i64) -> Result<u64, Error> {
    let mut result = 1;
    let mut i = 1;
    while i < n {
        result = step(result, i, n)?;
        i += 1;
    }
    Ok(result)
}

/// Product of `2..=n` accumulated over the range `1..n`.
///
/// Returns 1 when `n <= 1`, negative `n` included.
pub fn factorial_iterative_for(n: i64) -> Result<u64, Error> {
    let mut result = 1;
    for i in 1..n {
        result = step(result, i, n)?;
    }
    Ok(result)
}

// `i` is at least 1 in both loops.
fn step(result: u64, i: i64, n: i64) -> Result<u64, Error> {
    result
        .checked_mul(i as u64 + 1)
        .ok_or(Error::Overflow { n })
}

/// Runs the computation selected by `strategy`.
pub fn evaluate(strategy: Strategy, n: i64) -> Result<u64, Error> {
    let value = match strategy {
        Strategy::Recursive => factorial_recursive(n),
        Strategy::While => factorial_iterative_while(n),
        Strategy::For => factorial_iterative_for(n),
    }?;
    tracing::debug!(%strategy, n, value, "evaluated");
    Ok(value)
}
