//! Coefficient input: text parsing and the interactive `a = ` prompts.

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::core::error::SolveError;
use crate::core::solver::Coefficients;

/// Parse one coefficient. Surrounding whitespace is ignored; `inf`/`NaN`
/// parse as floats but are rejected here.
pub fn parse_coefficient(name: char, text: &str) -> Result<f64, SolveError> {
    match text.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(SolveError::invalid_number(name, text.trim())),
    }
}

impl Coefficients {
    pub fn parse(a: &str, b: &str, c: &str) -> Result<Self, SolveError> {
        let a = parse_coefficient('a', a)?;
        if a == 0.0 {
            return Err(SolveError::ZeroLeadingCoefficient);
        }
        let b = parse_coefficient('b', b)?;
        let c = parse_coefficient('c', c)?;
        Coefficients::new(a, b, c)
    }
}

/// Prompt for `a`, `b`, `c` one line each. `a` is validated before `b` is
/// asked for, so a zero leading coefficient stops the run immediately.
pub fn prompt_coefficients<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> Result<Coefficients> {
    writeln!(writer, "The form of a quadratic equation is ax\u{00B2} + bx + c = 0")?;

    let a = parse_coefficient('a', &read_value(reader, writer, 'a')?)?;
    if a == 0.0 {
        return Err(SolveError::ZeroLeadingCoefficient.into());
    }
    let b = parse_coefficient('b', &read_value(reader, writer, 'b')?)?;
    let c = parse_coefficient('c', &read_value(reader, writer, 'c')?)?;
    Ok(Coefficients::new(a, b, c)?)
}

fn read_value<R: BufRead, W: Write>(reader: &mut R, writer: &mut W, name: char) -> Result<String> {
    write!(writer, "{} = ", name)?;
    writer.flush()?;
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        // EOF: surfaces as an invalid (empty) value for this coefficient
        return Ok(String::new());
    }
    Ok(line)
}
