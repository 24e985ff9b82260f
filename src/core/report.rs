//! Console report for a `Solution`: plain, colored, or JSON.

use std::fmt;

use anyhow::{Context, Result};
use colored::Colorize;
use num_complex::Complex64;

use crate::core::solver::{RootKind, Roots, Solution};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Title,
    Heading,
    Value,
}

pub struct Report<'a> {
    solution: &'a Solution,
    precision: u32,
}

impl<'a> Report<'a> {
    pub fn new(solution: &'a Solution, precision: u32) -> Self {
        Self { solution, precision }
    }

    fn lines(&self) -> Vec<(Tone, String)> {
        let s = self.solution;
        let n = |v: f64| fmt_number(v, self.precision);
        let mut out = vec![(Tone::Title, format!("Solving {}", s.coefficients))];

        match s.kind() {
            RootKind::TwoReal => out.push((Tone::Heading, "Discriminant > 0".into())),
            RootKind::ComplexPair => out.push((Tone::Heading, "Discriminant < 0".into())),
            RootKind::OneReal => {}
        }
        out.push((Tone::Heading, format!("Discriminant = {}", n(s.discriminant))));
        out.push((Tone::Heading, s.kind().describe().to_string()));

        match s.roots {
            Roots::TwoReal { x1, x2 } => {
                out.push((Tone::Value, format!("x1 = {}", n(x1))));
                out.push((Tone::Value, format!("x2 = {}", n(x2))));
            }
            Roots::OneReal { x } => out.push((Tone::Value, format!("x = {}", n(x)))),
            Roots::ComplexPair { x1, x2 } => {
                out.push((Tone::Value, format!("x1 = {}", fmt_complex(x1, self.precision))));
                out.push((Tone::Value, format!("x2 = {}", fmt_complex(x2, self.precision))));
            }
        }
        out.push((
            Tone::Value,
            format!("Vertex = ({}, {})", n(s.vertex.x), n(s.vertex.y)),
        ));
        out
    }

    pub fn print(&self, color: bool) {
        for (tone, line) in self.lines() {
            if !color {
                println!("{}", line);
                continue;
            }
            match tone {
                Tone::Title => println!("{}", line.bright_white().bold()),
                Tone::Heading => println!("{}", line.yellow()),
                Tone::Value => match line.split_once(" = ") {
                    Some((label, value)) => println!("{} = {}", label.cyan(), value),
                    None => println!("{}", line),
                },
            }
        }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self.lines().into_iter().map(|(_, l)| l).collect();
        write!(f, "{}", lines.join("\n"))
    }
}

pub fn to_json(solution: &Solution) -> Result<String> {
    serde_json::to_string_pretty(solution).context("serializing solution")
}

/// Round half away from zero to `places` decimals.
pub fn round_to(value: f64, places: u32) -> f64 {
    let scale = 10f64.powi(places as i32);
    let scaled = (value * scale).round() / scale;
    if scaled.is_finite() { scaled } else { value }
}

/// Past this magnitude plain notation runs to hundreds of digits and
/// rounding to a few decimals changes nothing.
const SCIENTIFIC_FROM: f64 = 1e15;

/// Rounded, shortest form: trailing zeros dropped and `-0` shown as `0`.
pub fn fmt_number(value: f64, precision: u32) -> String {
    if value.abs() >= SCIENTIFIC_FROM {
        return format!("{:e}", value);
    }
    format!("{}", round_to(value, precision) + 0.0)
}

/// Unrounded form for echoing coefficients back; very large or very small
/// magnitudes switch to `1e200` notation.
pub fn fmt_exact(value: f64) -> String {
    let mag = value.abs();
    if mag >= SCIENTIFIC_FROM || (mag != 0.0 && mag < 1e-6) {
        format!("{:e}", value)
    } else {
        format!("{}", value + 0.0)
    }
}

pub fn fmt_complex(z: Complex64, precision: u32) -> String {
    let sign = if z.im < 0.0 { '-' } else { '+' };
    format!(
        "{} {} {}i",
        fmt_number(z.re, precision),
        sign,
        fmt_number(z.im.abs(), precision)
    )
}
