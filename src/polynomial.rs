//! The single-variable polynomial value type.
//!
//! Coefficients are stored by exponent, index 0 being the constant term.
//! The sequence always holds exactly `degree + 1` entries. A zero leading
//! coefficient is allowed and never normalized away.

use crate::PolyError;

#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
  coefficients: Vec<f64>,
}

impl Default for Polynomial {
  fn default() -> Self {
    Self::new()
  }
}

impl From<Vec<f64>> for Polynomial {
  fn from(coefficients: Vec<f64>) -> Self {
    Self::from_coefficients(coefficients)
  }
}

impl Polynomial {
  /// The zero polynomial: degree 0, coefficients `[0]`.
  pub fn new() -> Self {
    Polynomial {
      coefficients: vec![0.0],
    }
  }

  /// Takes ownership of `coefficients` (index = exponent).
  /// An empty vector yields the zero polynomial.
  pub fn from_coefficients(coefficients: Vec<f64>) -> Self {
    if coefficients.is_empty() {
      return Self::new();
    }
    Polynomial { coefficients }
  }

  /// Build from an explicit coefficient sequence and degree, which must
  /// agree in length.
  pub fn with_degree(
    coefficients: Vec<f64>,
    degree: usize,
  ) -> Result<Self, PolyError> {
    if degree.checked_add(1) != Some(coefficients.len()) {
      return Err(PolyError::DegreeMismatch {
        degree,
        len: coefficients.len(),
      });
    }
    Ok(Polynomial { coefficients })
  }

  pub fn degree(&self) -> usize {
    self.coefficients.len() - 1
  }

  pub fn coefficients(&self) -> &[f64] {
    &self.coefficients
  }

  /// Coefficient of `x^exponent`.
  pub fn coefficient(&self, exponent: usize) -> Result<f64, PolyError> {
    self
      .coefficients
      .get(exponent)
      .copied()
      .ok_or(PolyError::IndexOutOfRange {
        exponent,
        degree: self.degree(),
      })
  }

  pub fn set_coefficient(
    &mut self,
    exponent: usize,
    value: f64,
  ) -> Result<(), PolyError> {
    let degree = self.degree();
    let slot = self
      .coefficients
      .get_mut(exponent)
      .ok_or(PolyError::IndexOutOfRange { exponent, degree })?;
    *slot = value;
    Ok(())
  }

  /// Replace the whole coefficient sequence; the degree follows its length.
  pub fn set_coefficients(&mut self, coefficients: Vec<f64>) {
    *self = Self::from_coefficients(coefficients);
  }

  /// Change the degree. Dropped high-order slots are discarded, new ones
  /// start at zero. `usize::MAX` is rejected with `DegreeOverflow`.
  pub fn set_degree(&mut self, degree: usize) -> Result<(), PolyError> {
    let len = degree
      .checked_add(1)
      .ok_or(PolyError::DegreeOverflow { degree })?;
    self.coefficients.resize(len, 0.0);
    Ok(())
  }

  /// Value of Σ coef[i]·x^i, computed term by term.
  pub fn evaluate(&self, x: f64) -> f64 {
    self
      .coefficients
      .iter()
      .enumerate()
      .map(|(i, c)| c * x.powi(i as i32))
      .sum()
  }

  /// d/dx of the polynomial. The derivative of a constant is the zero
  /// polynomial, never a negative degree.
  pub fn derivative(&self) -> Polynomial {
    if self.degree() == 0 {
      return Polynomial::new();
    }
    let coefficients = self
      .coefficients
      .iter()
      .enumerate()
      .skip(1)
      .map(|(i, c)| c * i as f64)
      .collect();
    Polynomial { coefficients }
  }

  /// Antiderivative with a zero constant of integration.
  pub fn integral(&self) -> Polynomial {
    let mut coefficients = Vec::with_capacity(self.coefficients.len() + 1);
    coefficients.push(0.0);
    coefficients.extend(
      self
        .coefficients
        .iter()
        .enumerate()
        .map(|(i, c)| c / (i + 1) as f64),
    );
    Polynomial { coefficients }
  }

  /// True when every coefficient is exactly zero.
  pub fn is_zero(&self) -> bool {
    self.coefficients.iter().all(|c| *c == 0.0)
  }
}
