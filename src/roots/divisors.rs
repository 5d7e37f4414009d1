use crate::RootError;

/// All integer divisors of `n`, each positive divisor followed by its negation.
///
/// Plain trial division over `1..=|n|`. Zero has no finite divisor set and
/// is rejected.
pub fn divisors(n: i64) -> Result<Vec<i64>, RootError> {
  if n == 0 {
    return Err(RootError::ZeroDivisors);
  }
  let abs_n = n.unsigned_abs();
  let mut divs = Vec::new();
  for i in 1..=abs_n {
    if abs_n % i == 0 {
      match i64::try_from(i) {
        Ok(d) => divs.extend([d, -d]),
        // |i64::MIN| only fits as a negative value
        Err(_) => divs.push(i64::MIN),
      }
    }
  }
  Ok(divs)
}
