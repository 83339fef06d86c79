use pest::Parser;
use pest_derive::Parser;
use thiserror::Error;

pub mod arithmetic;
pub mod format;
pub mod polynomial;
pub mod session;
pub mod syntax;

pub use format::format_coefficient;
pub use polynomial::Polynomial;
pub use syntax::{
  parse_polynomial, parse_polynomial_with, ParseOptions, ParseWarning,
  Parsed, MAX_EXPONENT,
};

#[derive(Parser)]
#[grammar = "polynomial.pest"]
pub struct TermParser;

#[derive(Error, Debug)]
pub enum PolyError {
  #[error("Parse error: {0}")]
  Syntax(#[from] Box<pest::error::Error<Rule>>),
  #[error(
    "Polynomial::partw: Exponent {exponent} is outside the coefficient range [0, {degree}]."
  )]
  IndexOutOfRange { exponent: usize, degree: usize },
  #[error("Polynomial::degm: Degree {degree} does not fit {len} coefficients.")]
  DegreeMismatch { degree: usize, len: usize },
  #[error("Polynomial::degovf: Degree {degree} leaves no room for a constant term.")]
  DegreeOverflow { degree: usize },
  #[error("{0}")]
  Term(ParseWarning),
}

impl TermParser {
  pub fn parse_terms(
    input: &str,
  ) -> Result<pest::iterators::Pairs<'_, Rule>, Box<pest::error::Error<Rule>>>
  {
    Self::parse(Rule::Program, input).map_err(Box::new)
  }
}

pub fn parse(
  input: &str,
) -> Result<pest::iterators::Pairs<'_, Rule>, Box<pest::error::Error<Rule>>> {
  TermParser::parse_terms(input)
}
