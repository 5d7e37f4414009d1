use super::*;

fn roots(coeffs: &[i64]) -> Vec<f64> {
  find_rational_roots(coeffs, DEFAULT_TOLERANCE).unwrap()
}

mod invalid_polynomial {
  use super::*;

  #[test]
  fn empty_coefficients() {
    assert!(matches!(
      find_rational_roots(&[], DEFAULT_TOLERANCE),
      Err(RootError::InvalidPolynomial)
    ));
  }

  #[test]
  fn zero_leading_coefficient() {
    assert!(matches!(
      find_rational_roots(&[0, 3, 2], DEFAULT_TOLERANCE),
      Err(RootError::InvalidPolynomial)
    ));
  }

  #[test]
  fn message() {
    assert_eq!(
      RootError::InvalidPolynomial.to_string(),
      "The polynomial must have a non-zero leading coefficient."
    );
  }
}

mod known_roots {
  use super::*;

  #[test]
  fn monic_quadratic() {
    // x^2 - 3x + 2 = (x - 1)(x - 2)
    assert_eq!(roots(&[1, -3, 2]), vec![1.0, 2.0]);
  }

  #[test]
  fn non_monic_quadratic() {
    // 2x^2 - 3x + 1 = (2x - 1)(x - 1)
    assert_eq!(roots(&[2, -3, 1]), vec![0.5, 1.0]);
  }

  #[test]
  fn no_real_roots() {
    assert!(roots(&[1, 0, 1]).is_empty());
  }

  #[test]
  fn linear() {
    assert_eq!(roots(&[1, -1]), vec![1.0]);
    assert_eq!(roots(&[3, 2]), vec![-2.0 / 3.0]);
  }

  #[test]
  fn cubic_with_negative_and_fractional_roots() {
    // (x + 2)(3x - 1)(x - 4) = 3x^3 - 7x^2 - 22x + 8
    assert_eq!(roots(&[3, -7, -22, 8]), vec![-2.0, 1.0 / 3.0, 4.0]);
  }

  #[test]
  fn repeated_root_reported_once() {
    // (x - 1)^2
    assert_eq!(roots(&[1, -2, 1]), vec![1.0]);
  }

  #[test]
  fn irrational_roots_are_not_found() {
    // x^2 - 2
    assert!(roots(&[1, 0, -2]).is_empty());
  }

  #[test]
  fn nonzero_constant_polynomial() {
    assert!(roots(&[5]).is_empty());
  }
}

mod zero_constant_term {
  use super::*;

  #[test]
  fn zero_is_a_root() {
    // x^2 - x = x(x - 1)
    assert_eq!(roots(&[1, -1, 0]), vec![0.0, 1.0]);
  }

  #[test]
  fn pure_power() {
    assert_eq!(roots(&[1, 0, 0]), vec![0.0]);
    assert_eq!(roots(&[4, 0]), vec![0.0]);
  }

  #[test]
  fn zero_alongside_fractional_roots() {
    // x(2x + 1)(x - 3) = 2x^3 - 5x^2 - 3x
    assert_eq!(roots(&[2, -5, -3, 0]), vec![-0.5, 0.0, 3.0]);
  }
}

mod exact_roots {
  use super::*;
  use num_rational::Ratio;
  use ratroots::rational_roots;

  #[test]
  fn fractions_in_lowest_terms() {
    // (4x - 2)(x + 1) = 4x^2 + 2x - 2 has root 1/2, not 2/4
    let poly = Polynomial::new(vec![4, 2, -2]).unwrap();
    assert_eq!(
      rational_roots(&poly, DEFAULT_TOLERANCE).unwrap(),
      vec![Ratio::from_integer(-1), Ratio::new(1, 2)]
    );
  }

  #[test]
  fn zero_tolerance_still_finds_exact_roots() {
    let poly = Polynomial::new(vec![1, -3, 2]).unwrap();
    assert_eq!(rational_roots(&poly, 0.0).unwrap().len(), 2);
  }
}

mod large_terms {
  use super::*;
  use num_rational::Ratio;
  use ratroots::roots::evaluate::{is_rational_root, is_root, ratio_to_f64};

  // (3x - 1)(x - 1000)^3
  fn cubed_thousand() -> Polynomial {
    Polynomial::new(vec![3, -9001, 9003000, -3003000000, 1000000000]).unwrap()
  }

  #[test]
  fn float_check_alone_misses_a_third() {
    let poly = cubed_thousand();
    let third = Ratio::new(1, 3);
    assert!(!is_root(&poly, ratio_to_f64(&third), DEFAULT_TOLERANCE));
    assert!(is_rational_root(&poly, &third, DEFAULT_TOLERANCE));
  }

  #[test]
  fn exact_check_accepts_only_true_roots() {
    let poly = cubed_thousand();
    assert!(is_rational_root(
      &poly,
      &Ratio::from_integer(1000),
      DEFAULT_TOLERANCE
    ));
    assert!(!is_rational_root(&poly, &Ratio::new(1, 2), DEFAULT_TOLERANCE));
    assert!(!is_rational_root(
      &poly,
      &Ratio::from_integer(999),
      DEFAULT_TOLERANCE
    ));
  }

  #[test]
  fn scaled_roots_found_end_to_end() {
    // (7x - 1)(x - 200)^2 = 7x^3 - 2801x^2 + 280400x - 40000
    assert_eq!(
      roots(&[7, -2801, 280400, -40000]),
      vec![1.0 / 7.0, 200.0]
    );
  }
}
