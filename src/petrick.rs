//! Petrick's method.
//!
//! Each clause lists the prime implicants covering one still-uncovered
//! minterm; the cover condition is the product of these sums. Multiplying
//! out clause by clause, every partial product is a [`BitSet`] of implicant
//! indices. After each multiplication the candidates are reduced by the
//! absorption law (`X + XY = X`): duplicates and strict supersets are dropped.
//!
//! The number of surviving candidates is capped after every step. The cap
//! keeps the smallest candidates, so the result is exact only while the cap
//! is never hit.

use std::collections::HashSet;

use log::{debug, warn};

use crate::bitset::BitSet;

/// Default soft cap on the number of candidate covers kept between steps.
pub const DEFAULT_LIMIT: usize = 512;

/// Multiplies out the clauses, returning the irredundant candidate covers.
///
/// Candidates come out ordered by size (stable with respect to discovery order).
/// With no clauses the only candidate is the empty cover.
pub fn petrick(clauses: &[Vec<usize>], limit: usize) -> Vec<BitSet> {
    let Some((first, rest)) = clauses.split_first() else {
        return vec![BitSet::default()];
    };

    let mut products: Vec<BitSet> = first.iter().map(|&i| BitSet::singleton(i)).collect();

    for (step, clause) in rest.iter().enumerate() {
        let mut next = Vec::with_capacity(products.len() * clause.len());
        for product in &products {
            for &i in clause {
                next.push(product.with(i));
            }
        }

        products = reduce(next);

        if products.len() > limit {
            warn!(
                "petrick: {} candidates after clause {}, keeping the {} smallest",
                products.len(),
                step + 2,
                limit
            );
            products.sort_by_key(|p| p.len());
            products.truncate(limit);
        }
        debug!("petrick: clause {} -> {} candidates", step + 2, products.len());
    }

    reduce(products)
}

/// Removes duplicates and any candidate that contains another candidate.
pub fn reduce(products: Vec<BitSet>) -> Vec<BitSet> {
    let mut seen = HashSet::with_capacity(products.len());
    let mut unique: Vec<BitSet> = products.into_iter().filter(|p| seen.insert(p.clone())).collect();

    unique.sort_by_key(|p| p.len());

    let mut kept: Vec<BitSet> = Vec::with_capacity(unique.len());
    for candidate in unique {
        if !kept.iter().any(|k| candidate.is_superset(k)) {
            kept.push(candidate);
        }
    }
    kept
}
