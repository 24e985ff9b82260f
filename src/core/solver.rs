//! Quadratic solver: discriminant → root kind → roots and vertex.
//!
//! Everything here is a pure function of the three coefficients. Rounding
//! for display lives in `core::report`; values here are full `f64`.

use std::fmt;

use num_complex::Complex64;
use serde::Serialize;

use crate::core::error::SolveError;
use crate::core::report::fmt_exact;

/// Coefficients of `ax² + bx + c = 0`. All finite, `a != 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coefficients {
    a: f64,
    b: f64,
    c: f64,
}

impl Coefficients {
    /// `a` is checked first, so a zero leading coefficient is reported
    /// no matter what `b` and `c` hold.
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self, SolveError> {
        let a = finite('a', a)?;
        if a == 0.0 {
            return Err(SolveError::ZeroLeadingCoefficient);
        }
        let b = finite('b', b)?;
        let c = finite('c', c)?;
        Ok(Self { a, b, c })
    }

    pub fn a(&self) -> f64 { self.a }
    pub fn b(&self) -> f64 { self.b }
    pub fn c(&self) -> f64 { self.c }

    /// f(x) = ax² + bx + c, in Horner form so `a·x² + b·x` cannot turn
    /// into `inf - inf` near the vertex.
    pub fn evaluate(&self, x: f64) -> f64 {
        (self.a * x + self.b) * x + self.c
    }

    /// b² − 4ac. Overflows to `±inf` when the true value is out of range,
    /// never to `NaN`.
    pub fn discriminant(&self) -> f64 {
        let (d, s) = self.scaled().discriminant();
        d * s * s
    }

    pub fn vertex(&self) -> Vertex {
        let x = self.scaled().axis();
        Vertex { x, y: self.evaluate(x) }
    }

    /// Coefficients divided by a power of two near `max(|a|, |b|, |c|)`.
    /// Roots are unchanged by the division and it is exact, so in normal
    /// range every result matches the unscaled arithmetic bit for bit.
    /// The exponent is capped so the scaled `a` never underflows to zero.
    fn scaled(&self) -> Scaled {
        let m = self.a.abs().max(self.b.abs()).max(self.c.abs());
        let e_a = self.a.abs().log2().floor() as i32;
        let e = (m.log2().floor() as i32).min(e_a + 1000).clamp(-1000, 1000);
        let s = 2f64.powi(e);
        Scaled { a: self.a / s, b: self.b / s, c: self.c / s, s }
    }
}

/// Coefficients divided by `s`; magnitude below 2 unless `a` is tiny
/// next to `b` or `c`.
#[derive(Debug, Clone, Copy)]
struct Scaled {
    a: f64,
    b: f64,
    c: f64,
    s: f64,
}

impl Scaled {
    /// (b² − 4ac) / s², and `s`.
    fn discriminant(&self) -> (f64, f64) {
        (self.b.powi(2) - 4.0 * self.a * self.c, self.s)
    }

    /// -b / 2a
    fn axis(&self) -> f64 {
        -self.b / (2.0 * self.a)
    }
}

fn finite(name: char, value: f64) -> Result<f64, SolveError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SolveError::invalid_number(name, &value.to_string()))
    }
}

/// Renders the equation, e.g. `1x² - 3x + 2 = 0`.
impl fmt::Display for Coefficients {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x²", fmt_exact(self.a))?;
        write_term(f, self.b, "x")?;
        write_term(f, self.c, "")?;
        write!(f, " = 0")
    }
}

fn write_term(f: &mut fmt::Formatter<'_>, value: f64, suffix: &str) -> fmt::Result {
    if value < 0.0 {
        write!(f, " - {}{}", fmt_exact(-value), suffix)
    } else {
        write!(f, " + {}{}", fmt_exact(value), suffix)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RootKind {
    TwoReal,
    OneReal,
    ComplexPair,
}

impl RootKind {
    pub fn describe(&self) -> &'static str {
        match self {
            RootKind::TwoReal => "Two real solutions",
            RootKind::OneReal => "One real solution",
            RootKind::ComplexPair => "Two complex solutions",
        }
    }
}

/// Real roots are ascending (`x1 < x2`). A complex pair lists the root
/// with the positive imaginary part first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Roots {
    TwoReal { x1: f64, x2: f64 },
    OneReal { x: f64 },
    ComplexPair { x1: Complex64, x2: Complex64 },
}

impl Roots {
    pub fn kind(&self) -> RootKind {
        match self {
            Roots::TwoReal { .. } => RootKind::TwoReal,
            Roots::OneReal { .. } => RootKind::OneReal,
            Roots::ComplexPair { .. } => RootKind::ComplexPair,
        }
    }

    pub fn real(&self) -> Vec<f64> {
        match *self {
            Roots::TwoReal { x1, x2 } => vec![x1, x2],
            Roots::OneReal { x } => vec![x],
            Roots::ComplexPair { .. } => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Solution {
    pub coefficients: Coefficients,
    pub discriminant: f64,
    pub roots: Roots,
    pub vertex: Vertex,
}

impl Solution {
    pub fn kind(&self) -> RootKind {
        self.roots.kind()
    }
}

pub fn solve(coefficients: Coefficients) -> Solution {
    let scaled = coefficients.scaled();
    let (a, b, c) = (scaled.a, scaled.b, scaled.c);
    // Classify on the scaled value: same sign as b² − 4ac, and finite.
    let (d, s) = scaled.discriminant();
    let discriminant = d * s * s;

    let roots = if d > 0.0 {
        // q carries the sign of b so -b and √d never cancel.
        let q = -(b + b.signum() * d.sqrt()) / 2.0;
        let (r1, r2) = (q / a, c / q);
        if r1 <= r2 {
            Roots::TwoReal { x1: r1, x2: r2 }
        } else {
            Roots::TwoReal { x1: r2, x2: r1 }
        }
    } else if d == 0.0 {
        Roots::OneReal { x: scaled.axis() }
    } else {
        let re = scaled.axis();
        let im = ((-d).sqrt() / (2.0 * a)).abs();
        Roots::ComplexPair {
            x1: Complex64::new(re, im),
            x2: Complex64::new(re, -im),
        }
    };

    crate::debug_log!(
        "solve {}: discriminant={} scale={} kind={:?}",
        coefficients,
        discriminant,
        s,
        roots.kind()
    );

    Solution {
        coefficients,
        discriminant,
        roots,
        vertex: coefficients.vertex(),
    }
}
