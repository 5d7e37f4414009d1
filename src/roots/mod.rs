//! Rational root search: divisor enumeration, candidate generation and
//! tolerance-based verification.

pub mod divisors;
pub mod evaluate;
pub mod polynomial;
