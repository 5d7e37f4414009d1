use super::*;
use num_rational::Ratio;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratroots::rational_roots;

#[test]
fn divisors_contain_trivial_pairs_and_divide() {
  let mut rng = StdRng::seed_from_u64(7);
  for _ in 0..200 {
    let n: i64 = rng.gen_range(-5000..=5000);
    if n == 0 {
      continue;
    }
    let divs = divisors(n).unwrap();
    for d in [1, -1, n, -n] {
      assert!(divs.contains(&d), "divisors({n}) is missing {d}");
    }
    for &d in &divs {
      assert_eq!(n % d, 0, "{d} does not divide {n}");
      assert!(divs.contains(&-d), "divisors({n}) is not symmetric at {d}");
    }
  }
}

fn exact_value(coeffs: &[i64], r: Ratio<i64>) -> Ratio<i128> {
  let r = Ratio::new(i128::from(*r.numer()), i128::from(*r.denom()));
  coeffs
    .iter()
    .fold(Ratio::from_integer(0), |acc, &c| acc * r + i128::from(c))
}

#[test]
fn returned_roots_evaluate_to_zero() {
  let mut rng = StdRng::seed_from_u64(42);
  for _ in 0..100 {
    let degree = rng.gen_range(1..=5);
    let mut coeffs: Vec<i64> =
      (0..=degree).map(|_| rng.gen_range(-30..=30)).collect();
    if coeffs[0] == 0 {
      coeffs[0] = 1;
    }
    let poly = Polynomial::new(coeffs.clone()).unwrap();
    for r in rational_roots(&poly, DEFAULT_TOLERANCE).unwrap() {
      let exact = exact_value(&coeffs, r);
      let float = poly.evaluate(*r.numer() as f64 / *r.denom() as f64);
      assert!(
        exact == Ratio::from_integer(0) || float.abs() <= DEFAULT_TOLERANCE,
        "{poly} at {r} = {exact}"
      );
    }
  }
}

#[test]
fn constructed_roots_are_recovered() {
  // Multiply out (q_i x - p_i) for random small p/q and check each p/q is found
  let mut rng = StdRng::seed_from_u64(2024);
  for _ in 0..50 {
    let count = rng.gen_range(1..=3);
    let mut coeffs = vec![1i64];
    let mut expected = Vec::new();
    for _ in 0..count {
      let p: i64 = rng.gen_range(-6..=6);
      let q: i64 = rng.gen_range(1..=4);
      expected.push(p as f64 / q as f64);
      let mut next = vec![0i64; coeffs.len() + 1];
      for (i, &c) in coeffs.iter().enumerate() {
        next[i] += c * q;
        next[i + 1] -= c * p;
      }
      coeffs = next;
    }
    let found = find_rational_roots(&coeffs, DEFAULT_TOLERANCE).unwrap();
    for root in expected {
      assert!(
        found.iter().any(|f| (f - root).abs() < 1e-12),
        "{root} not found in {found:?} for {coeffs:?}"
      );
    }
  }
}

#[test]
fn repeated_calls_agree() {
  let coeffs = [6, -5, -2, 1];
  let first = find_rational_roots(&coeffs, DEFAULT_TOLERANCE).unwrap();
  let second = find_rational_roots(&coeffs, DEFAULT_TOLERANCE).unwrap();
  assert_eq!(first, second);
}

#[test]
fn output_is_sorted_ascending() {
  // (x + 3)(x - 1)(2x + 1)(x - 5)
  let coeffs = [2, -5, -29, 17, 15];
  let found = find_rational_roots(&coeffs, DEFAULT_TOLERANCE).unwrap();
  assert!(found.windows(2).all(|w| w[0] < w[1]), "{found:?}");
  assert_eq!(found, vec![-3.0, -0.5, 1.0, 5.0]);
}
