use std::io::Write;

use serde::Serialize;

use crate::{
    error::Error,
    factorial::{factorial_iterative_for, factorial_iterative_while, factorial_recursive},
};

/// Input the check runs with when nothing else is configured.
pub const DEFAULT_INPUT: i64 = 5;

pub const SUCCESS: &str = "Great it works !";
pub const FAILURE: &str = "Not working :(";

/// Results of the three computations for a single input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Report {
    pub input: i64,
    pub recursive: u64,
    pub for_loop: u64,
    pub while_loop: u64,
    pub agrees: bool,
}

impl Report {
    pub fn new(input: i64, recursive: u64, for_loop: u64, while_loop: u64) -> Self {
        Self {
            input,
            recursive,
            for_loop,
            while_loop,
            agrees: recursive == for_loop && recursive == while_loop,
        }
    }

    pub fn message(&self) -> &'static str {
        if self.agrees {
            SUCCESS
        } else {
            FAILURE
        }
    }
}

/// Evaluates every computation at `n` and compares the results.
pub fn check(n: i64) -> Result<Report, Error> {
    let f1 = factorial_recursive(n)?;
    let f2 = factorial_iterative_for(n)?;
    let f3 = factorial_iterative_while(n)?;
    tracing::debug!(n, value = f1, "recursive");
    tracing::debug!(n, value = f2, "for loop");
    tracing::debug!(n, value = f3, "while loop");

    let report = Report::new(n, f1, f2, f3);
    tracing::info!(
        n,
        recursive = f1,
        for_loop = f2,
        while_loop = f3,
        agrees = report.agrees,
        "agreement check finished"
    );
    Ok(report)
}

/// Runs [`check`] and writes its verdict to `out`.
///
/// Disagreement is reported through the message, not as an error.
pub fn run<W: Write>(n: i64, out: &mut W) -> Result<Report, Error> {
    let report = check(n)?;
    writeln!(out, "{}", report.message())?;
    Ok(report)
}
