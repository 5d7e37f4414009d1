use num_rational::Ratio;
use serde::Serialize;

use crate::locale::{self, Locale, Message};
use crate::roots::evaluate::ratio_to_f64;
use crate::Polynomial;

/// Exact roots as a comma separated list: `-2, 1/2, 1`.
pub fn format_roots(roots: &[Ratio<i64>]) -> String {
  roots
    .iter()
    .map(|r| r.to_string())
    .collect::<Vec<_>>()
    .join(", ")
}

/// The one-line result shown after a search.
pub fn render_text(locale: Locale, roots: &[Ratio<i64>]) -> String {
  if roots.is_empty() {
    locale::text(locale, Message::NoRootsFound).to_string()
  } else {
    format!(
      "{} {}",
      locale::text(locale, Message::RootsFound),
      format_roots(roots)
    )
  }
}

/// Machine-readable form of a search result.
#[derive(Debug, Serialize)]
pub struct RootReport {
  pub polynomial: String,
  pub coefficients: Vec<i64>,
  pub degree: usize,
  pub roots: Vec<f64>,
  pub exact_roots: Vec<String>,
}

impl RootReport {
  pub fn new(poly: &Polynomial, roots: &[Ratio<i64>]) -> Self {
    Self {
      polynomial: poly.to_string(),
      coefficients: poly.coefficients().to_vec(),
      degree: poly.degree(),
      roots: roots.iter().map(ratio_to_f64).collect(),
      exact_roots: roots.iter().map(|r| r.to_string()).collect(),
    }
  }

  pub fn to_json(&self) -> serde_json::Result<String> {
    serde_json::to_string_pretty(self)
  }
}
