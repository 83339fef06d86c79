//! `+`, `-` and `*` for [`Polynomial`].
//!
//! Addition and subtraction start from a copy of the higher-degree operand
//! and apply the operator only over the exponents both operands share.
//! Terms above the shorter operand's degree are carried over as they are,
//! so `a - b` with `deg b > deg a` keeps b's high-order signs.

use crate::Polynomial;
use std::ops::{Add, Mul, Sub};

fn combine_overlap(
  lhs: &Polynomial,
  rhs: &Polynomial,
  op: impl Fn(f64, f64) -> f64,
) -> Polynomial {
  let longer = if lhs.degree() > rhs.degree() {
    lhs
  } else {
    rhs
  };
  let mut coefficients = longer.coefficients().to_vec();
  let overlap = lhs.degree().min(rhs.degree());
  for (i, slot) in coefficients.iter_mut().enumerate().take(overlap + 1) {
    *slot = op(lhs.coefficients()[i], rhs.coefficients()[i]);
  }
  Polynomial::from_coefficients(coefficients)
}

fn sum(lhs: &Polynomial, rhs: &Polynomial) -> Polynomial {
  combine_overlap(lhs, rhs, |a, b| a + b)
}

fn difference(lhs: &Polynomial, rhs: &Polynomial) -> Polynomial {
  combine_overlap(lhs, rhs, |a, b| a - b)
}

/// Full discrete convolution of the two coefficient sequences.
fn convolve(lhs: &Polynomial, rhs: &Polynomial) -> Polynomial {
  let mut coefficients = vec![0.0; lhs.degree() + rhs.degree() + 1];
  for (i, a) in lhs.coefficients().iter().enumerate() {
    for (j, b) in rhs.coefficients().iter().enumerate() {
      coefficients[i + j] += a * b;
    }
  }
  Polynomial::from_coefficients(coefficients)
}

macro_rules! forward_binop {
  ($trait:ident, $method:ident, $body:ident) => {
    impl $trait<&Polynomial> for &Polynomial {
      type Output = Polynomial;

      fn $method(self, rhs: &Polynomial) -> Polynomial {
        $body(self, rhs)
      }
    }

    impl $trait<Polynomial> for Polynomial {
      type Output = Polynomial;

      fn $method(self, rhs: Polynomial) -> Polynomial {
        $body(&self, &rhs)
      }
    }

    impl $trait<&Polynomial> for Polynomial {
      type Output = Polynomial;

      fn $method(self, rhs: &Polynomial) -> Polynomial {
        $body(&self, rhs)
      }
    }

    impl $trait<Polynomial> for &Polynomial {
      type Output = Polynomial;

      fn $method(self, rhs: Polynomial) -> Polynomial {
        $body(self, &rhs)
      }
    }
  };
}

forward_binop!(Add, add, sum);
forward_binop!(Sub, sub, difference);
forward_binop!(Mul, mul, convolve);
