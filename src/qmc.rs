//! Quine–McCluskey minimization with don't-cares and Petrick's method.
//!
//! The same minimizer serves both normal forms: run on the 1-minterms it
//! yields an SOP cover, run on the 0-maxterms it yields the cover of the
//! complement, which is printed as a POS.
//!
//! # Algorithm
//!
//! 1. **Prime implicants.** Start with one implicant per minterm and
//!    don't-care. Group the implicants of the current round by the number of
//!    ones, merge every pair from adjacent groups that differs in a single
//!    fixed position, and record every implicant that took part in no merge
//!    as prime. Repeat on the merged implicants until nothing merges.
//! 2. **Essential implicants.** Build the cover chart over the true minterms
//!    (don't-cares need no cover). A minterm covered by a single prime makes
//!    that prime essential.
//! 3. **Petrick's method.** The minterms left uncovered by the essentials are
//!    handed to [`petrick`][crate::petrick::petrick]; the cheapest candidate
//!    cover is added to the selection.
//!
//! # Cover cost
//!
//! Candidates are compared by implicant count, then literal count. When
//! [`MinimizeOptions::layout_tie_break`] is set, remaining ties prefer the
//! cover spanning more K-map cells, then the one with longer row/column runs
//! in the K-map layout for this variable count. The last two criteria are
//! a presentation preference, not a logical one.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};

use log::debug;

use crate::bitset::BitSet;
use crate::kmap::layout_bits;
use crate::petrick::{petrick, DEFAULT_LIMIT};
use crate::types::{Implicant, Step};

/// Tunables of the minimizer.
#[derive(Debug, Clone)]
pub struct MinimizeOptions {
    /// Soft cap on Petrick candidates kept after each clause (default: 512).
    pub petrick_limit: usize,
    /// Break cost ties by K-map area and span (default: true).
    pub layout_tie_break: bool,
}

impl Default for MinimizeOptions {
    fn default() -> Self {
        Self {
            petrick_limit: DEFAULT_LIMIT,
            layout_tie_break: true,
        }
    }
}

/// Outcome of a minimization.
///
/// `essential` and `selected` are indices into `prime_implicants`.
/// `selected` starts with the essentials.
#[derive(Debug, Clone, Default)]
pub struct MinimizeResult {
    pub prime_implicants: Vec<Implicant>,
    pub essential: Vec<usize>,
    pub selected: Vec<usize>,
    pub steps: Vec<Step>,
}

impl MinimizeResult {
    /// The selected implicants, in selection order.
    pub fn selected_implicants(&self) -> impl Iterator<Item = Implicant> + '_ {
        self.selected.iter().map(move |&i| self.prime_implicants[i])
    }
}

/// Cost of a candidate cover.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct CoverCost {
    pub implicants: usize,
    pub literals: u32,
    pub area: u32,
    pub span: u32,
}

impl CoverCost {
    /// Computes the cost of the given prime implicants over `num_vars` variables.
    pub fn of(cover: impl IntoIterator<Item = Implicant>, num_vars: u32) -> Self {
        let (row_bits, col_bits) = layout_bits(num_vars);
        let col_mask = (1u32 << col_bits) - 1;
        let row_mask = ((1u32 << row_bits) - 1) << col_bits;

        let mut cost = CoverCost {
            implicants: 0,
            literals: 0,
            area: 0,
            span: 0,
        };
        for imp in cover {
            cost.implicants += 1;
            cost.literals += imp.literal_count(num_vars);
            cost.area += imp.area();
            let row_span = 1 << (imp.mask & row_mask).count_ones();
            let col_span = 1 << (imp.mask & col_mask).count_ones();
            cost.span += row_span + col_span;
        }
        cost
    }

    /// Ordering where `Less` means "cheaper".
    ///
    /// Fewer implicants, then fewer literals; with `layout` also more area,
    /// then more span.
    pub fn compare(&self, other: &Self, layout: bool) -> Ordering {
        let logical = self
            .implicants
            .cmp(&other.implicants)
            .then(self.literals.cmp(&other.literals));
        if !layout {
            return logical;
        }
        logical
            .then(other.area.cmp(&self.area))
            .then(other.span.cmp(&self.span))
    }
}

/// Minimizes with the default options.
pub fn minimize_sop(minterms: &[u32], dont_cares: &[u32], num_vars: u32) -> MinimizeResult {
    minimize_with(minterms, dont_cares, num_vars, &MinimizeOptions::default())
}

/// Minimizes the function that is 1 on `minterms`, free on `dont_cares`
/// and 0 elsewhere.
///
/// Deterministic: identical inputs give identical prime implicant order,
/// essential set and selection.
pub fn minimize_with(
    minterms: &[u32],
    dont_cares: &[u32],
    num_vars: u32,
    options: &MinimizeOptions,
) -> MinimizeResult {
    debug_assert!(num_vars <= 32, "at most 32 variables are supported");
    debug!(
        "minimize(minterms = {:?}, dont_cares = {:?}, num_vars = {})",
        minterms, dont_cares, num_vars
    );

    let mut steps = Vec::new();

    let mut all: Vec<u32> = minterms.iter().chain(dont_cares).copied().collect();
    all.sort_unstable();
    all.dedup();
    steps.push(Step::with_detail(
        "Initialize implicants",
        format!(
            "{} terms ({} minterms + {} don't cares)",
            all.len(),
            minterms.len(),
            dont_cares.len()
        ),
    ));

    let primes = prime_implicants(&all);
    steps.push(Step::with_detail("Prime implicants", format!("{} found", primes.len())));

    let mut mt = minterms.to_vec();
    mt.sort_unstable();
    mt.dedup();

    let chart = cover_chart(&primes, &mt);

    let mut essential: Vec<usize> = Vec::new();
    for row in &chart {
        if let [only] = row.as_slice() {
            if !essential.contains(only) {
                essential.push(*only);
            }
        }
    }
    debug!("minimize: {} essential implicants", essential.len());
    if !essential.is_empty() {
        steps.push(Step::with_detail(
            "Essential implicants",
            format!("{} essential selected", essential.len()),
        ));
    }

    let remaining: Vec<Vec<usize>> = chart
        .iter()
        .filter(|row| !row.iter().any(|pi| essential.contains(pi)))
        .cloned()
        .collect();

    let mut selected = essential.clone();

    if !remaining.is_empty() {
        debug!("minimize: {} minterms left for Petrick's method", remaining.len());
        let candidates = petrick(&remaining, options.petrick_limit);
        if let Some((best, cost)) = cheapest(&candidates, &primes, num_vars, options) {
            for i in best.iter() {
                if !selected.contains(&i) {
                    selected.push(i);
                }
            }
            debug!("minimize: petrick chose {:?} with cost {:?}", best, cost);
            steps.push(Step::with_detail(
                "Petrick's method",
                format!("selected {} implicants with {} literals", cost.implicants, cost.literals),
            ));
        }
    }

    MinimizeResult {
        prime_implicants: primes,
        essential,
        selected,
        steps,
    }
}

/// Tabulation phase: all prime implicants of the given (sorted, unique) terms.
pub fn prime_implicants(terms: &[u32]) -> Vec<Implicant> {
    let mut current: Vec<Implicant> = terms.iter().map(|&t| Implicant::minterm(t)).collect();
    let mut primes: Vec<Implicant> = Vec::new();
    let mut seen_primes: HashSet<Implicant> = HashSet::new();
    let mut round = 0;

    loop {
        let mut groups: BTreeMap<u32, Vec<(Implicant, bool)>> = BTreeMap::new();
        for imp in &current {
            groups.entry(imp.ones()).or_default().push((*imp, false));
        }

        let mut merged: Vec<Implicant> = Vec::new();
        let mut seen_merged: HashSet<Implicant> = HashSet::new();

        let keys: Vec<u32> = groups.keys().copied().collect();
        for pair in keys.windows(2) {
            let (lo, hi) = (pair[0], pair[1]);
            if hi != lo + 1 {
                continue;
            }
            // Split the borrow: take the upper group out while scanning.
            let mut upper = groups.remove(&hi).unwrap_or_default();
            if let Some(lower) = groups.get_mut(&lo) {
                for a in lower.iter_mut() {
                    for b in upper.iter_mut() {
                        if let Some(m) = a.0.combine(b.0) {
                            a.1 = true;
                            b.1 = true;
                            if seen_merged.insert(m) {
                                merged.push(m);
                            }
                        }
                    }
                }
            }
            groups.insert(hi, upper);
        }

        for group in groups.values() {
            for &(imp, used) in group {
                if !used && seen_primes.insert(imp) {
                    primes.push(imp);
                }
            }
        }

        debug!(
            "prime_implicants: round {}: {} implicants, {} merged, {} primes so far",
            round,
            current.len(),
            merged.len(),
            primes.len()
        );

        if merged.is_empty() {
            break;
        }
        current = merged;
        round += 1;
    }

    primes
}

/// For each minterm, the indices of the primes covering it.
pub fn cover_chart(primes: &[Implicant], minterms: &[u32]) -> Vec<Vec<usize>> {
    minterms
        .iter()
        .map(|&m| {
            primes
                .iter()
                .enumerate()
                .filter(|(_, p)| p.covers(m))
                .map(|(i, _)| i)
                .collect()
        })
        .collect()
}

/// Picks the cheapest candidate; the first one wins among equals.
fn cheapest<'a>(
    candidates: &'a [BitSet],
    primes: &[Implicant],
    num_vars: u32,
    options: &MinimizeOptions,
) -> Option<(&'a BitSet, CoverCost)> {
    let mut best: Option<(&BitSet, CoverCost)> = None;
    for candidate in candidates {
        let cost = CoverCost::of(candidate.iter().map(|i| primes[i]), num_vars);
        let better = match &best {
            None => true,
            Some((_, best_cost)) => cost.compare(best_cost, options.layout_tie_break) == Ordering::Less,
        };
        if better {
            best = Some((candidate, cost));
        }
    }
    best
}
