use super::*;

mod divisor_set {
  use super::*;

  #[test]
  fn prime() {
    assert_eq!(divisors(7).unwrap(), vec![1, -1, 7, -7]);
  }

  #[test]
  fn one() {
    assert_eq!(divisors(1).unwrap(), vec![1, -1]);
    assert_eq!(divisors(-1).unwrap(), vec![1, -1]);
  }

  #[test]
  fn composite() {
    let mut divs = divisors(12).unwrap();
    divs.sort();
    assert_eq!(divs, vec![-12, -6, -4, -3, -2, -1, 1, 2, 3, 4, 6, 12]);
  }

  #[test]
  fn negative_argument() {
    let divs = divisors(-10).unwrap();
    for d in [1, -1, 2, -2, 5, -5, 10, -10] {
      assert!(divs.contains(&d), "missing {d}");
    }
    assert_eq!(divs.len(), 8);
  }

  #[test]
  fn zero_is_an_error() {
    assert!(matches!(divisors(0), Err(RootError::ZeroDivisors)));
  }
}
