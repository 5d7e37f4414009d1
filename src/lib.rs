use thiserror::Error;

pub mod config;
pub mod locale;
pub mod parser;
pub mod plot;
pub mod prompt;
pub mod report;
pub mod roots;

pub use roots::divisors::divisors;
pub use roots::evaluate::{find_rational_roots, rational_roots};
pub use roots::polynomial::Polynomial;

/// Absolute tolerance used when checking whether a candidate evaluates to zero.
pub const DEFAULT_TOLERANCE: f64 = 1e-8;

#[derive(Error, Debug)]
pub enum RootError {
  #[error("The polynomial must have a non-zero leading coefficient.")]
  InvalidPolynomial,
  #[error("Divisors: argument cannot be zero")]
  ZeroDivisors,
  #[error("Parse error: {0}")]
  ParseError(#[from] Box<pest::error::Error<parser::Rule>>),
  #[error("Invalid expression: {0}")]
  InvalidExpression(String),
  #[error("Plot error: {0}")]
  PlotError(String),
}
