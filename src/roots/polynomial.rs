use std::fmt;

use crate::RootError;

/// A univariate polynomial with integer coefficients, highest degree first.
///
/// The coefficient list is never empty and its first entry is never zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polynomial {
  coeffs: Vec<i64>,
}

impl Polynomial {
  pub fn new(coeffs: Vec<i64>) -> Result<Self, RootError> {
    match coeffs.first() {
      Some(&lead) if lead != 0 => Ok(Self { coeffs }),
      _ => Err(RootError::InvalidPolynomial),
    }
  }

  pub fn coefficients(&self) -> &[i64] {
    &self.coeffs
  }

  pub fn degree(&self) -> usize {
    self.coeffs.len() - 1
  }

  pub fn leading(&self) -> i64 {
    self.coeffs[0]
  }

  pub fn constant(&self) -> i64 {
    self.coeffs[self.coeffs.len() - 1]
  }

  /// Evaluate at `x` using Horner's method.
  pub fn evaluate(&self, x: f64) -> f64 {
    self
      .coeffs
      .iter()
      .fold(0.0, |acc, &c| acc.mul_add(x, c as f64))
  }

  /// Split off every factor of `x`: returns how many were removed and the
  /// remaining polynomial, whose constant term is nonzero.
  pub fn deflate_zero_roots(&self) -> (usize, Polynomial) {
    let zeros = self.coeffs.iter().rev().take_while(|&&c| c == 0).count();
    let remaining = self.coeffs[..self.coeffs.len() - zeros].to_vec();
    (zeros, Polynomial { coeffs: remaining })
  }
}

impl fmt::Display for Polynomial {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let degree = self.degree();
    let mut first = true;
    for (i, &c) in self.coeffs.iter().enumerate() {
      if c == 0 {
        continue;
      }
      let power = degree - i;
      if first {
        if c < 0 {
          write!(f, "-")?;
        }
      } else if c < 0 {
        write!(f, " - ")?;
      } else {
        write!(f, " + ")?;
      }
      first = false;

      let abs = c.unsigned_abs();
      if abs != 1 || power == 0 {
        write!(f, "{abs}")?;
      }
      match power {
        0 => {}
        1 => write!(f, "x")?,
        _ => write!(f, "x^{power}")?,
      }
    }
    Ok(())
  }
}
