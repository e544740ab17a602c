//! Three ways to compute a factorial, and a check that they agree.
//!
//! ```
//! use fact_core::{check, FAILURE};
//!
//! let report = check(5).unwrap();
//! assert_eq!((report.recursive, report.for_loop, report.while_loop), (0, 120, 120));
//! assert_eq!(report.message(), FAILURE);
//! ```

mod driver;
pub mod error;
mod factorial;
mod print;

pub use driver::{check, run, Report, DEFAULT_INPUT, FAILURE, SUCCESS};
pub use error::Error;
pub use factorial::{
    evaluate, factorial_iterative_for, factorial_iterative_while, factorial_recursive,
    RECURSION_LIMIT,
};
pub use print::nothing;
