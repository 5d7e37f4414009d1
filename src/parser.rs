//! Parses polynomials written as text, such as `2x^2 - 3x + 1`, into a
//! coefficient list with the highest degree first.

use pest::iterators::Pair;
use pest::Parser;
use pest_derive::Parser;

use crate::RootError;

/// Exponents above this are rejected before allocating the coefficient list.
pub const MAX_DEGREE: usize = 1024;

#[derive(Parser)]
#[grammar = "polynomial.pest"]
pub struct PolynomialParser;

/// A single parsed term: signed coefficient times `variable^exponent`.
#[derive(Debug, PartialEq, Eq)]
struct Monomial {
  coefficient: i64,
  variable: Option<char>,
  exponent: usize,
}

fn invalid(msg: impl Into<String>) -> RootError {
  RootError::InvalidExpression(msg.into())
}

fn parse_monomial(
  pair: Pair<Rule>,
  negative: bool,
) -> Result<Monomial, RootError> {
  let mut coefficient: i64 = 1;
  let mut variable = None;
  let mut exponent = 0;

  for part in pair.into_inner() {
    match part.as_rule() {
      Rule::Coefficient => {
        coefficient = part.as_str().parse().map_err(|_| {
          invalid(format!("coefficient {} is too large", part.as_str()))
        })?;
      }
      Rule::Power => {
        exponent = 1;
        for inner in part.into_inner() {
          match inner.as_rule() {
            Rule::Variable => variable = inner.as_str().chars().next(),
            Rule::Exponent => {
              exponent = inner
                .as_str()
                .parse()
                .ok()
                .filter(|&e| e <= MAX_DEGREE)
                .ok_or_else(|| {
                  invalid(format!(
                    "exponent {} exceeds the maximum degree {MAX_DEGREE}",
                    inner.as_str()
                  ))
                })?;
            }
            _ => unreachable!(),
          }
        }
      }
      _ => unreachable!(),
    }
  }

  if negative {
    coefficient = -coefficient;
  }
  Ok(Monomial {
    coefficient,
    variable,
    exponent,
  })
}

fn parse_term(pair: Pair<Rule>) -> Result<Monomial, RootError> {
  let mut negative = false;
  for part in pair.into_inner() {
    match part.as_rule() {
      Rule::Sign => negative = part.as_str() == "-",
      Rule::Monomial => return parse_monomial(part, negative),
      _ => unreachable!(),
    }
  }
  Err(invalid("empty term"))
}

/// Parse `input` into integer coefficients, highest degree first.
///
/// Like terms are summed and only one variable name may appear. Leading zero
/// coefficients are dropped, except that an identically zero expression
/// yields `[0]`.
pub fn parse_polynomial(input: &str) -> Result<Vec<i64>, RootError> {
  let mut pairs =
    PolynomialParser::parse(Rule::Expression, input).map_err(Box::new)?;
  let expression = pairs.next().ok_or_else(|| invalid("empty input"))?;

  let mut monomials = Vec::new();
  for pair in expression.into_inner() {
    match pair.as_rule() {
      Rule::FirstTerm | Rule::Term => monomials.push(parse_term(pair)?),
      Rule::EOI => {}
      _ => unreachable!(),
    }
  }

  let mut variable = None;
  for m in &monomials {
    match (variable, m.variable) {
      (None, Some(v)) => variable = Some(v),
      (Some(a), Some(b)) if a != b => {
        return Err(invalid(format!(
          "expected a polynomial in one variable, found {a} and {b}"
        )));
      }
      _ => {}
    }
  }

  let degree = monomials.iter().map(|m| m.exponent).max().unwrap_or(0);
  // by ascending power while summing, reversed at the end
  let mut by_power = vec![0i64; degree + 1];
  for m in &monomials {
    by_power[m.exponent] = by_power[m.exponent]
      .checked_add(m.coefficient)
      .ok_or_else(|| invalid("coefficient overflow"))?;
  }
  while by_power.len() > 1 && by_power[by_power.len() - 1] == 0 {
    by_power.pop();
  }
  by_power.reverse();
  Ok(by_power)
}
