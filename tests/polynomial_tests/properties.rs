use super::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const ROUNDS: usize = 200;

/// Small integer coefficients keep sums and products exact.
fn random_poly(rng: &mut StdRng) -> Polynomial {
  let degree = rng.gen_range(0..7);
  poly(
    &(0..=degree)
      .map(|_| rng.gen_range(-10..=10) as f64)
      .collect::<Vec<_>>(),
  )
}

fn close(a: f64, b: f64) -> bool {
  (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

#[test]
fn sum_degree_and_overlap() {
  let mut rng = StdRng::seed_from_u64(1);
  for _ in 0..ROUNDS {
    let (a, b) = (random_poly(&mut rng), random_poly(&mut rng));
    let sum = &a + &b;
    assert_eq!(sum.degree(), a.degree().max(b.degree()));
    for i in 0..=a.degree().min(b.degree()) {
      assert_eq!(
        sum.coefficient(i).unwrap(),
        a.coefficient(i).unwrap() + b.coefficient(i).unwrap()
      );
    }
  }
}

#[test]
fn product_is_convolution() {
  let mut rng = StdRng::seed_from_u64(2);
  for _ in 0..ROUNDS {
    let (a, b) = (random_poly(&mut rng), random_poly(&mut rng));
    let product = &a * &b;
    assert_eq!(product.degree(), a.degree() + b.degree());
    for k in 0..=product.degree() {
      let expected: f64 = (0..=k)
        .filter(|i| *i <= a.degree() && k - i <= b.degree())
        .map(|i| a.coefficients()[i] * b.coefficients()[k - i])
        .sum();
      assert_eq!(product.coefficients()[k], expected);
    }
  }
}

#[test]
fn derivative_of_integral() {
  let mut rng = StdRng::seed_from_u64(3);
  for _ in 0..ROUNDS {
    let a = random_poly(&mut rng);
    let back = a.integral().derivative();
    assert_eq!(back.degree(), a.degree());
    for (x, y) in back.coefficients().iter().zip(a.coefficients()) {
      assert!(close(*x, *y), "{} vs {}", x, y);
    }
  }
}

#[test]
fn evaluate_is_linear() {
  let mut rng = StdRng::seed_from_u64(4);
  for _ in 0..ROUNDS {
    let (a, b) = (random_poly(&mut rng), random_poly(&mut rng));
    let x: f64 = rng.gen_range(-3.0..3.0);
    let lhs = (&a + &b).evaluate(x);
    let rhs = a.evaluate(x) + b.evaluate(x);
    assert!(close(lhs, rhs), "{} vs {} at x = {}", lhs, rhs, x);
  }
}
