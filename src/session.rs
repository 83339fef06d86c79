//! The calculator run: two polynomials and a point in, every operation out.

use crate::{format_coefficient, Polynomial};

/// All results computed from one pair of polynomials.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
  pub first: Polynomial,
  pub second: Polynomial,
  pub x: f64,
  pub sum: Polynomial,
  pub difference: Polynomial,
  pub product: Polynomial,
  /// `first` evaluated at `x`.
  pub value: f64,
  pub derivative: Polynomial,
  pub integral: Polynomial,
}

impl Session {
  pub fn run(first: Polynomial, second: Polynomial, x: f64) -> Self {
    let sum = &first + &second;
    let difference = &first - &second;
    let product = &first * &second;
    let value = first.evaluate(x);
    let derivative = first.derivative();
    let integral = first.integral();
    Session {
      first,
      second,
      x,
      sum,
      difference,
      product,
      value,
      derivative,
      integral,
    }
  }

  fn labelled(&self) -> [(&'static str, &Polynomial); 7] {
    [
      ("Polynomial 1", &self.first),
      ("Polynomial 2", &self.second),
      ("Addition", &self.sum),
      ("Subtraction", &self.difference),
      ("Multiplication", &self.product),
      ("Derivative", &self.derivative),
      ("Integral", &self.integral),
    ]
  }

  /// Human readable transcript, one `Label: result` per line.
  pub fn report(&self) -> String {
    let labelled = self.labelled();
    let (arithmetic, calculus) = labelled.split_at(5);
    let mut out = String::new();
    for (label, polynomial) in arithmetic {
      out.push_str(&format!("{}: {}\n", label, polynomial));
    }
    out.push_str(&format!(
      "Evaluated: {}\n",
      format_coefficient(self.value)
    ));
    for (label, polynomial) in calculus {
      out.push_str(&format!("{}: {}\n", label, polynomial));
    }
    out
  }

  pub fn to_json(&self) -> serde_json::Value {
    let mut map = serde_json::Map::new();
    for (label, polynomial) in self.labelled() {
      map.insert(label.to_string(), polynomial.to_json());
    }
    map.insert("x".to_string(), serde_json::json!(self.x));
    map.insert("Evaluated".to_string(), serde_json::json!(self.value));
    serde_json::Value::Object(map)
  }
}

pub fn report(first: &Polynomial, second: &Polynomial, x: f64) -> String {
  Session::run(first.clone(), second.clone(), x).report()
}
