use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "quadratic",
    about = "Solve ax² + bx + c = 0: discriminant, roots, vertex, and a terminal plot",
    version
)]
pub struct QuadraticCli {
    /// Leading coefficient (must not be zero). Prompts for all three if omitted.
    #[arg(value_name = "A", requires = "b", allow_negative_numbers = true)]
    pub a: Option<String>,

    #[arg(value_name = "B", requires = "c", allow_negative_numbers = true)]
    pub b: Option<String>,

    #[arg(value_name = "C", allow_negative_numbers = true)]
    pub c: Option<String>,

    /// Print the solution as JSON instead of the text report
    #[arg(long = "json", action = ArgAction::SetTrue)]
    pub json: bool,

    /// Open a terminal chart of the parabola after the report
    #[arg(long = "plot", action = ArgAction::SetTrue)]
    pub plot: bool,

    /// Decimal places in the report (overrides config)
    #[arg(long = "precision", value_name = "N")]
    pub precision: Option<u32>,

    /// Disable colored output
    #[arg(long = "no-color", action = ArgAction::SetTrue)]
    pub no_color: bool,

    /// Path to config (TOML); default: ~/.quadratic/config.toml
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Debug output on stderr (same as QUADRATIC_DEBUG=1)
    #[arg(long = "debug", action = ArgAction::SetTrue)]
    pub debug: bool,
}

impl QuadraticCli {
    /// Positional coefficients, when all three were given.
    pub fn coefficients(&self) -> Option<(&str, &str, &str)> {
        match (&self.a, &self.b, &self.c) {
            (Some(a), Some(b), Some(c)) => Some((a, b, c)),
            _ => None,
        }
    }
}
