use std::collections::BTreeSet;

use num_rational::Ratio;
use tracing::debug;

use super::divisors::divisors;
use super::polynomial::Polynomial;
use crate::RootError;

/// Candidate rational roots p/q of a polynomial with a nonzero constant term,
/// p dividing the constant term and q dividing the leading coefficient.
/// Equal values collapse; iteration order is ascending.
pub fn candidates(poly: &Polynomial) -> Result<BTreeSet<Ratio<i64>>, RootError> {
  let list_p = divisors(poly.constant())?;
  let list_q = divisors(poly.leading())?;

  let mut set = BTreeSet::new();
  for &p in &list_p {
    for &q in &list_q {
      set.insert(Ratio::new(p, q));
    }
  }
  debug!(
    p_count = list_p.len(),
    q_count = list_q.len(),
    candidates = set.len(),
    "generated rational root candidates"
  );
  Ok(set)
}

pub fn ratio_to_f64(r: &Ratio<i64>) -> f64 {
  *r.numer() as f64 / *r.denom() as f64
}

/// Whether `poly(r)` lies within `tolerance` of zero.
pub fn is_root(poly: &Polynomial, r: f64, tolerance: f64) -> bool {
  poly.evaluate(r).abs() <= tolerance
}

/// Exact test of `poly(p/q) == 0` on `q^n * poly(p/q)`, an integer.
/// `None` when the integer arithmetic overflows `i128`.
fn exact_zero(poly: &Polynomial, r: &Ratio<i64>) -> Option<bool> {
  let p = i128::from(*r.numer());
  let q = i128::from(*r.denom());
  let coeffs = poly.coefficients();
  let mut acc = i128::from(coeffs[0]);
  let mut q_pow: i128 = 1;
  for &c in &coeffs[1..] {
    q_pow = q_pow.checked_mul(q)?;
    acc = acc
      .checked_mul(p)?
      .checked_add(i128::from(c).checked_mul(q_pow)?)?;
  }
  Some(acc == 0)
}

/// Whether the candidate `r` is a root: exactly zero, or within `tolerance`
/// of zero in floating point.
///
/// The exact test catches roots whose float evaluation loses precision to
/// large intermediate terms.
pub fn is_rational_root(
  poly: &Polynomial,
  r: &Ratio<i64>,
  tolerance: f64,
) -> bool {
  exact_zero(poly, r) == Some(true)
    || is_root(poly, ratio_to_f64(r), tolerance)
}

/// Exact rational roots of `poly`, ascending.
///
/// A zero constant term means 0 is a root; the factors of `x` are divided
/// out first so the divisor search only ever sees a nonzero constant term.
pub fn rational_roots(
  poly: &Polynomial,
  tolerance: f64,
) -> Result<Vec<Ratio<i64>>, RootError> {
  let mut roots = BTreeSet::new();

  let (zero_multiplicity, reduced) = poly.deflate_zero_roots();
  if zero_multiplicity > 0 {
    debug!(multiplicity = zero_multiplicity, "zero constant term, 0 is a root");
    roots.insert(Ratio::from_integer(0));
  }

  for candidate in candidates(&reduced)? {
    // Verified against the undeflated polynomial
    if is_rational_root(poly, &candidate, tolerance) {
      roots.insert(candidate);
    }
  }

  debug!(polynomial = %poly, found = roots.len(), "rational root search done");
  Ok(roots.into_iter().collect())
}

/// Rational roots of the polynomial with coefficients `coeffs` (highest
/// degree first), as floating-point values sorted ascending.
pub fn find_rational_roots(
  coeffs: &[i64],
  tolerance: f64,
) -> Result<Vec<f64>, RootError> {
  let poly = Polynomial::new(coeffs.to_vec())?;
  let roots = rational_roots(&poly, tolerance)?;
  Ok(roots.iter().map(ratio_to_f64).collect())
}
