use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use polycalc::session::Session;
use polycalc::{parse_polynomial_with, ParseOptions, Polynomial, MAX_EXPONENT};
use std::io::{self, BufRead, Write};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Exponents must be below this bound
  #[arg(long, default_value_t = MAX_EXPONENT)]
  max_exponent: usize,

  /// Print results as JSON instead of term notation
  #[arg(long)]
  json: bool,

  #[command(subcommand)]
  command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
  /// Run every operation on two polynomials given as arguments
  Eval {
    /// First polynomial, e.g. "2^1 5^0"
    #[arg(allow_hyphen_values = true)]
    first: String,
    /// Second polynomial
    #[arg(allow_hyphen_values = true)]
    second: String,
    /// Point at which the first polynomial is evaluated
    #[arg(allow_hyphen_values = true)]
    x: f64,
  },
}

fn read_polynomial(text: &str, options: &ParseOptions) -> Result<Polynomial> {
  let parsed = parse_polynomial_with(text, options)?;
  for warning in &parsed.warnings {
    eprintln!("{}", warning);
  }
  Ok(parsed.polynomial)
}

fn prompt_line(
  lines: &mut impl Iterator<Item = io::Result<String>>,
  prompt: &str,
) -> Result<String> {
  print!("{}", prompt);
  io::stdout().flush()?;
  Ok(lines.next().transpose()?.unwrap_or_default())
}

fn interactive(options: &ParseOptions) -> Result<Session> {
  let stdin = io::stdin();
  let mut lines = stdin.lock().lines();

  let first = prompt_line(&mut lines, "Enter Polynomial: ")?;
  let first = read_polynomial(&first, options)?;
  let second = prompt_line(&mut lines, "Enter Polynomial: ")?;
  let second = read_polynomial(&second, options)?;
  let x = prompt_line(&mut lines, "Enter the number to evaluate at: ")?;
  let x: f64 = x
    .trim()
    .parse()
    .with_context(|| format!("Not a number: {:?}", x.trim()))?;
  println!();

  Ok(Session::run(first, second, x))
}

fn main() -> Result<()> {
  let cli = Cli::parse();
  let options = ParseOptions {
    max_exponent: cli.max_exponent,
  };

  let session = match cli.command {
    Some(Commands::Eval { first, second, x }) => Session::run(
      read_polynomial(&first, &options)?,
      read_polynomial(&second, &options)?,
      x,
    ),
    None => interactive(&options)?,
  };

  if cli.json {
    println!("{}", serde_json::to_string_pretty(&session.to_json())?);
  } else {
    print!("{}", session.report());
  }
  Ok(())
}
