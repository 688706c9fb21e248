//! Random expression generator for property tests and fuzz seeding.
//!
//! The generator only ever builds well-formed trees. Given the same seed
//! and depth, [`from_seed`] returns the same expression on every
//! platform.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use twocalc_common::{Expr, Literal};

/// Generate an expression no deeper than `depth`.
///
/// At depth 0 the result is a literal. Otherwise the node is chosen
/// uniformly among literal, `+`, `*` and `/`, and both children are
/// generated with `depth - 1`. Literals are uniformly 1 or 2.
pub fn random_expr<R: Rng>(rng: &mut R, depth: usize) -> Expr {
    if depth == 0 {
        return random_literal(rng);
    }

    match rng.random_range(0..4) {
        0 => random_literal(rng),
        1 => {
            let left = random_expr(rng, depth - 1);
            let right = random_expr(rng, depth - 1);
            Expr::plus(left, right)
        }
        2 => {
            let left = random_expr(rng, depth - 1);
            let right = random_expr(rng, depth - 1);
            Expr::mult(left, right)
        }
        _ => {
            let left = random_expr(rng, depth - 1);
            let right = random_expr(rng, depth - 1);
            Expr::div(left, right)
        }
    }
}

/// Generate an expression from a 64-bit seed.
pub fn from_seed(seed: u64, depth: usize) -> Expr {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    random_expr(&mut rng, depth)
}

fn random_literal<R: Rng>(rng: &mut R) -> Expr {
    if rng.random_bool(0.5) {
        Expr::lit(Literal::Two)
    } else {
        Expr::lit(Literal::One)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_zero_is_literal() {
        for seed in 0..50 {
            assert!(from_seed(seed, 0).is_literal());
        }
    }

    #[test]
    fn respects_depth_bound() {
        for depth in 0..6 {
            for seed in 0..100 {
                let expr = from_seed(seed, depth);
                assert!(expr.depth() <= depth, "seed {seed}: {expr}");
            }
        }
    }

    #[test]
    fn same_seed_same_expression() {
        for seed in [0, 1, 2, 42, u64::MAX] {
            assert_eq!(from_seed(seed, 4), from_seed(seed, 4));
        }
    }

    #[test]
    fn produces_every_node_kind() {
        let mut seen = [false; 5];
        for seed in 0..500 {
            let expr = from_seed(seed, 1);
            let slot = match &expr {
                Expr::Int(Literal::One) => 0,
                Expr::Int(Literal::Two) => 1,
                Expr::Plus { .. } => 2,
                Expr::Mult { .. } => 3,
                Expr::Div { .. } => 4,
            };
            seen[slot] = true;
        }
        assert_eq!(seen, [true; 5]);
    }

    #[test]
    fn shared_rng_advances() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        let exprs: Vec<_> = (0..20).map(|_| random_expr(&mut rng, 3)).collect();
        assert!(exprs.iter().any(|e| e != &exprs[0]));
    }
}
