//! src/commands/solve.rs
//! Solve once, print the report (text or JSON), optionally plot.

use anyhow::Result;

use crate::core::plot;
use crate::core::report::{self, Report};
use crate::core::solver::{self, Coefficients, Solution};

#[derive(Debug, Clone, Copy)]
pub struct SolveOptions {
    pub json: bool,
    pub plot: bool,
    pub precision: u32,
    pub color: bool,
    pub samples: usize,
}

pub fn main(coefficients: Coefficients, opts: &SolveOptions) -> Result<Solution> {
    crate::debug_log!(
        "coefficients a={} b={} c={}",
        coefficients.a(),
        coefficients.b(),
        coefficients.c()
    );
    let solution = solver::solve(coefficients);

    if opts.json {
        println!("{}", report::to_json(&solution)?);
    } else {
        Report::new(&solution, opts.precision).print(opts.color);
    }

    if opts.plot {
        plot::show(&solution, opts.samples, opts.precision)?;
    }
    Ok(solution)
}
