//! Parse direction of the term-list notation.
//!
//! Input is a whitespace separated list of `<coefficient>^<exponent>`
//! terms, e.g. `3^2 -1/2^1 4^0`. The coefficient may be a decimal or a
//! `numerator/denominator` fraction.
//!
//! The first accepted term fixes the degree, whatever order the remaining
//! terms come in. Later terms with a higher exponent do not fit and are
//! dropped. Bad terms are reported as [`ParseWarning`]s and skipped.

use crate::{parse, PolyError, Polynomial, Rule};
use pest::iterators::Pair;
use std::collections::BTreeMap;
use std::str::FromStr;
use thiserror::Error;

/// Exponents at or above this bound are rejected by default.
pub const MAX_EXPONENT: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
  /// Accepted exponents are `0..max_exponent`.
  pub max_exponent: usize,
}

impl Default for ParseOptions {
  fn default() -> Self {
    ParseOptions {
      max_exponent: MAX_EXPONENT,
    }
  }
}

/// A recoverable problem with a single term. The term is skipped and the
/// rest of the input is still read.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseWarning {
  #[error("Polynomial::nohat: No '^' found in term {term}.")]
  MalformedTerm { term: String },
  #[error(
    "Polynomial::range: Exponent {exponent} in term {term} is out of bounds [0, {limit})."
  )]
  ExponentOutOfRange {
    term: String,
    exponent: String,
    limit: usize,
  },
  #[error("Polynomial::num: Term {term} is not a valid number^exponent pair.")]
  NumericParseFailure { term: String },
  #[error("Polynomial::infy: Term {term} divides by zero.")]
  ZeroDenominator { term: String },
}

/// Outcome of a lenient parse.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed {
  pub polynomial: Polynomial,
  pub warnings: Vec<ParseWarning>,
}

impl Parsed {
  /// Fail with the first warning, if any.
  pub fn into_strict(self) -> Result<Polynomial, PolyError> {
    match self.warnings.into_iter().next() {
      Some(warning) => Err(PolyError::Term(warning)),
      None => Ok(self.polynomial),
    }
  }
}

impl FromStr for Polynomial {
  type Err = PolyError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    parse_polynomial(s)?.into_strict()
  }
}

pub fn parse_polynomial(input: &str) -> Result<Parsed, PolyError> {
  parse_polynomial_with(input, &ParseOptions::default())
}

pub fn parse_polynomial_with(
  input: &str,
  options: &ParseOptions,
) -> Result<Parsed, PolyError> {
  let mut terms: BTreeMap<usize, f64> = BTreeMap::new();
  let mut degree: Option<usize> = None;
  let mut warnings = Vec::new();

  let program = match parse(input)?.next() {
    Some(program) => program,
    None => {
      return Ok(Parsed {
        polynomial: Polynomial::new(),
        warnings,
      });
    }
  };

  for node in program.into_inner() {
    match node.as_rule() {
      Rule::Term => match term_to_pair(node, options) {
        Ok((exponent, coefficient)) => {
          terms.insert(exponent, coefficient);
          if degree.is_none() {
            degree = Some(exponent);
          }
        }
        Err(warning) => warnings.push(warning),
      },
      Rule::BareWord => warnings.push(ParseWarning::MalformedTerm {
        term: node.as_str().to_string(),
      }),
      Rule::Garbled => warnings.push(ParseWarning::NumericParseFailure {
        term: node.as_str().to_string(),
      }),
      _ => {} // EOI
    }
  }

  let degree = degree.unwrap_or(0);
  let coefficients = (0..=degree)
    .map(|exponent| terms.get(&exponent).copied().unwrap_or(0.0))
    .collect();

  Ok(Parsed {
    polynomial: Polynomial::from_coefficients(coefficients),
    warnings,
  })
}

/// Turn a `Term` pair into `(exponent, coefficient)`.
fn term_to_pair(
  pair: Pair<Rule>,
  options: &ParseOptions,
) -> Result<(usize, f64), ParseWarning> {
  let term = pair.as_str().to_string();
  let mut inner = pair.into_inner();
  let (Some(coefficient), Some(exponent)) = (inner.next(), inner.next())
  else {
    return Err(ParseWarning::NumericParseFailure { term });
  };

  let value = coefficient_value(coefficient, &term)?;

  let exponent_str = exponent.as_str();
  match exponent_str.parse::<i64>() {
    Ok(e) if e >= 0 && (e as u64) < options.max_exponent as u64 => {
      Ok((e as usize, value))
    }
    _ => Err(ParseWarning::ExponentOutOfRange {
      exponent: exponent_str.trim_start_matches('+').to_string(),
      limit: options.max_exponent,
      term,
    }),
  }
}

/// Real value of a `Coefficient` pair. Fractions divide as reals.
fn coefficient_value(
  pair: Pair<Rule>,
  term: &str,
) -> Result<f64, ParseWarning> {
  let numeric_failure = || ParseWarning::NumericParseFailure {
    term: term.to_string(),
  };
  let inner = pair.into_inner().next().ok_or_else(numeric_failure)?;

  let value = match inner.as_rule() {
    Rule::Decimal => {
      decimal_value(inner.as_str()).ok_or_else(numeric_failure)?
    }
    Rule::Fraction => {
      let mut parts = inner.into_inner();
      let numerator = parts
        .next()
        .and_then(|p| decimal_value(p.as_str()))
        .ok_or_else(numeric_failure)?;
      let denominator = parts
        .next()
        .and_then(|p| decimal_value(p.as_str()))
        .ok_or_else(numeric_failure)?;
      if denominator == 0.0 {
        return Err(ParseWarning::ZeroDenominator {
          term: term.to_string(),
        });
      }
      numerator / denominator
    }
    _ => return Err(numeric_failure()),
  };

  // Out of f64 range, e.g. 1e400 or 1e300/1e-300.
  if !value.is_finite() {
    return Err(numeric_failure());
  }
  Ok(value)
}

fn decimal_value(s: &str) -> Option<f64> {
  s.parse::<f64>().ok()
}
