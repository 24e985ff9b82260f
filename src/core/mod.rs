//! Solver core plus the glue that feeds and presents it.

#[macro_use]
pub mod debug; // gated debug logging (QUADRATIC_DEBUG=1) provides debug_log! macro
pub mod error;
pub mod input;
pub mod plot;
pub mod report;
pub mod solver;

pub use error::SolveError;
pub use solver::{solve, Coefficients, RootKind, Roots, Solution, Vertex};
