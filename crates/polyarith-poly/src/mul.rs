//! Polynomial multiplication.
//!
//! Every strategy computes the full distributive product: each pair of
//! terms `(c1, d1)`, `(c2, d2)` contributes `(c1 * c2, d1 + d2)`, equal
//! degrees are summed and exactly-zero sums vanish.
//!
//! ## Strategy Selection
//!
//! [`MulStrategy::Auto`] picks by the number of pairwise products:
//! - Below `parallel_threshold`: ordered degree map
//! - At or above: rayon fold/reduce over per-worker hash maps

use std::collections::BTreeMap;

use rayon::prelude::*;
use rustc_hash::FxHashMap;
use tracing::trace;

use crate::coefficient::Coefficient;
use crate::polynomial::{merge, Polynomial};
use crate::term::Term;

/// How pairwise term products are accumulated.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum MulStrategy {
    /// Choose by product size.
    #[default]
    Auto,

    /// Fold each single-term product into the running result with the
    /// same linear merge used by addition. O(n·m·(n+m)).
    Fold,

    /// Accumulate into an ordered map keyed by degree.
    DegreeMap,

    /// Distribute the outer loop across the rayon pool.
    ///
    /// Per-worker maps are combined by per-degree summation, which is
    /// associative and commutative.
    Parallel,
}

impl MulStrategy {
    /// Returns a short name for the strategy.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            MulStrategy::Auto => "auto",
            MulStrategy::Fold => "fold",
            MulStrategy::DegreeMap => "degree-map",
            MulStrategy::Parallel => "parallel",
        }
    }
}

impl std::fmt::Display for MulStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Configuration for polynomial multiplication.
#[derive(Clone, Debug)]
pub struct MulConfig {
    /// Accumulation strategy.
    pub strategy: MulStrategy,
    /// Minimum number of pairwise products before `Auto` goes parallel.
    pub parallel_threshold: usize,
}

impl MulConfig {
    /// Creates a configuration that always uses `strategy`.
    #[must_use]
    pub fn with_strategy(strategy: MulStrategy) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }

    /// Resolves `Auto` for a product of `lhs_len` by `rhs_len` terms.
    #[must_use]
    pub fn resolve(&self, lhs_len: usize, rhs_len: usize) -> MulStrategy {
        match self.strategy {
            MulStrategy::Auto => {
                if lhs_len.saturating_mul(rhs_len) < self.parallel_threshold {
                    MulStrategy::DegreeMap
                } else {
                    MulStrategy::Parallel
                }
            }
            s => s,
        }
    }
}

impl Default for MulConfig {
    fn default() -> Self {
        Self {
            strategy: MulStrategy::Auto,
            parallel_threshold: 4096,
        }
    }
}

impl<F: Coefficient> Polynomial<F> {
    /// Multiplies two polynomials.
    ///
    /// Neither operand is modified.
    ///
    /// # Panics
    ///
    /// Panics if the product degree does not fit in `u32`. Use
    /// [`Self::checked_multiply`] to get `None` instead.
    #[must_use]
    pub fn multiply(&self, other: &Self) -> Self {
        self.multiply_with(other, &MulConfig::default())
    }

    /// Multiplies two polynomials with an explicit configuration.
    ///
    /// # Panics
    ///
    /// Panics if the product degree does not fit in `u32`.
    #[must_use]
    pub fn multiply_with(&self, other: &Self, config: &MulConfig) -> Self {
        match self.checked_multiply_with(other, config) {
            Some(product) => product,
            None => panic!(
                "degree overflow: x^{} * x^{} exceeds u32::MAX",
                max_degree(self.terms()),
                max_degree(other.terms())
            ),
        }
    }

    /// Multiplies two polynomials, returning `None` if the product degree
    /// does not fit in `u32`.
    #[must_use]
    pub fn checked_multiply(&self, other: &Self) -> Option<Self> {
        self.checked_multiply_with(other, &MulConfig::default())
    }

    /// Multiplies two polynomials with an explicit configuration,
    /// returning `None` if the product degree does not fit in `u32`.
    #[must_use]
    pub fn checked_multiply_with(&self, other: &Self, config: &MulConfig) -> Option<Self> {
        if self.is_zero() || other.is_zero() {
            return Some(Self::zero());
        }

        // Every pairwise degree sum is bounded by this one
        max_degree(self.terms()).checked_add(max_degree(other.terms()))?;

        let strategy = config.resolve(self.len(), other.len());
        trace!(
            lhs_terms = self.len(),
            rhs_terms = other.len(),
            %strategy,
            "multiplying polynomials"
        );

        let terms = match strategy {
            MulStrategy::Fold => mul_fold(self.terms(), other.terms()),
            MulStrategy::Parallel => mul_parallel(self.terms(), other.terms()),
            MulStrategy::DegreeMap | MulStrategy::Auto => mul_degree_map(self.terms(), other.terms()),
        };

        Some(Self::from_terms(terms))
    }
}

/// Highest degree present, independent of storage order.
fn max_degree<F: Coefficient>(terms: &[Term<F>]) -> u32 {
    terms.iter().map(|t| t.degree).max().unwrap_or(0)
}

/// Folds every pairwise product into the result one term at a time.
fn mul_fold<F: Coefficient>(a: &[Term<F>], b: &[Term<F>]) -> Vec<Term<F>> {
    let mut result = Vec::new();

    for t1 in a {
        for t2 in b {
            let product = t1.mul(t2);
            if product.is_zero() {
                continue;
            }
            result = merge(&result, std::slice::from_ref(&product));
        }
    }

    result
}

/// Accumulates pairwise products in an ordered map keyed by degree.
fn mul_degree_map<F: Coefficient>(a: &[Term<F>], b: &[Term<F>]) -> Vec<Term<F>> {
    let mut acc: BTreeMap<u32, F> = BTreeMap::new();

    for t1 in a {
        for t2 in b {
            let product = t1.mul(t2);
            let c = acc.entry(product.degree).or_insert_with(F::zero);
            *c = *c + product.coeff;
        }
    }

    acc.into_iter()
        .rev()
        .filter(|(_, c)| !c.is_exact_zero())
        .map(|(d, c)| Term::new(c, d))
        .collect()
}

/// Accumulates pairwise products in parallel.
fn mul_parallel<F: Coefficient>(a: &[Term<F>], b: &[Term<F>]) -> Vec<Term<F>> {
    let acc = a
        .par_iter()
        .fold(FxHashMap::default, |mut acc: FxHashMap<u32, F>, t1| {
            for t2 in b {
                let product = t1.mul(t2);
                let c = acc.entry(product.degree).or_insert_with(F::zero);
                *c = *c + product.coeff;
            }
            acc
        })
        .reduce(FxHashMap::default, |mut left, right| {
            for (d, coeff) in right {
                let c = left.entry(d).or_insert_with(F::zero);
                *c = *c + coeff;
            }
            left
        });

    let mut terms: Vec<Term<F>> = acc
        .into_iter()
        .filter(|(_, c)| !c.is_exact_zero())
        .map(|(d, c)| Term::new(c, d))
        .collect();
    terms.sort_unstable_by(|x, y| y.degree.cmp(&x.degree));
    terms
}
