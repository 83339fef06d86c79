use crate::Polynomial;
use std::fmt;

/// Render a coefficient. Whole values print without a fractional part.
pub fn format_coefficient(value: f64) -> String {
  if value.fract() == 0.0 && value.abs() < 1e15 {
    format!("{}", value as i64)
  } else {
    format!("{}", value)
  }
}

/// Render one non-zero term `value·x^exponent`.
fn format_term(value: f64, exponent: usize) -> String {
  if exponent == 0 {
    format_coefficient(value)
  } else if value == 1.0 {
    format!("x^{}", exponent)
  } else if value == -1.0 {
    format!("-x^{}", exponent)
  } else {
    format!("{}x^{}", format_coefficient(value), exponent)
  }
}

/// Highest exponent first, zero terms skipped, joined with `" + "`.
/// Negative terms keep their own sign (`x^2 + -3x^1`).
impl fmt::Display for Polynomial {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let terms: Vec<String> = self
      .coefficients()
      .iter()
      .enumerate()
      .rev()
      .filter(|(_, c)| **c != 0.0)
      .map(|(exponent, c)| format_term(*c, exponent))
      .collect();

    if terms.is_empty() {
      f.write_str("0")
    } else {
      f.write_str(&terms.join(" + "))
    }
  }
}

impl Polynomial {
  pub fn to_json(&self) -> serde_json::Value {
    serde_json::json!({
      "degree": self.degree(),
      "coefficients": self.coefficients(),
    })
  }
}
