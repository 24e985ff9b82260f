use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum SolveError {
    /// Coefficient text that is not a finite real number.
    InvalidNumber { name: char, input: String },
    ZeroLeadingCoefficient,
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::InvalidNumber { name, input } => {
                write!(f, "Invalid number for '{}': {:?}", name, input)
            }
            SolveError::ZeroLeadingCoefficient => {
                write!(f, "Variable 'a' can't be zero")
            }
        }
    }
}

impl std::error::Error for SolveError {}

impl SolveError {
    pub fn invalid_number(name: char, input: &str) -> Self {
        SolveError::InvalidNumber { name, input: input.to_string() }
    }
}
