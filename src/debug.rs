//! Debug utilities for inspecting a minimization.
//!
//! These are primarily useful in tests, in the demos' traces and during
//! development.

use std::fmt;

use crate::format::implicant_to_product;
use crate::qmc::{cover_chart, MinimizeResult};
use crate::types::Implicant;

/// One prime implicant as seen by the cover chart.
#[derive(Debug, Clone)]
pub struct PrimeInfo {
    /// Index into the prime implicant list
    pub index: usize,
    pub implicant: Implicant,
    /// Product over the chart's variables
    pub product: String,
    pub is_essential: bool,
    pub is_selected: bool,
}

impl fmt::Display for PrimeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.is_essential {
            "*"
        } else if self.is_selected {
            "+"
        } else {
            " "
        };
        write!(f, "{}P{} {}", marker, self.index, self.product)
    }
}

/// One row of the chart: a required minterm and the primes covering it.
#[derive(Debug, Clone)]
pub struct ChartRow {
    pub minterm: u32,
    pub covering: Vec<usize>,
}

/// Prime implicant chart of a minimization.
///
/// Display marks essential primes with `*` and the other selected ones with `+`.
#[derive(Debug, Clone)]
pub struct CoverChart {
    pub primes: Vec<PrimeInfo>,
    pub rows: Vec<ChartRow>,
}

impl fmt::Display for CoverChart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Prime implicants ({}):", self.primes.len())?;
        for prime in &self.primes {
            writeln!(f, "  {}", prime)?;
        }
        writeln!(f, "Cover chart ({} minterms):", self.rows.len())?;
        for row in &self.rows {
            let covering: Vec<String> = row.covering.iter().map(|i| format!("P{}", i)).collect();
            writeln!(f, "  m{}: {}", row.minterm, covering.join(" "))?;
        }
        Ok(())
    }
}

impl CoverChart {
    /// Minterms covered by exactly one prime.
    pub fn single_cover_minterms(&self) -> Vec<u32> {
        self.rows
            .iter()
            .filter(|row| row.covering.len() == 1)
            .map(|row| row.minterm)
            .collect()
    }
}

impl MinimizeResult {
    /// Builds the cover chart of this result over the required `minterms`.
    pub fn cover_chart(&self, minterms: &[u32], vars: &[char]) -> CoverChart {
        let primes = self
            .prime_implicants
            .iter()
            .enumerate()
            .map(|(index, &implicant)| PrimeInfo {
                index,
                implicant,
                product: implicant_to_product(implicant, vars),
                is_essential: self.essential.contains(&index),
                is_selected: self.selected.contains(&index),
            })
            .collect();

        let mut sorted = minterms.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        let rows = cover_chart(&self.prime_implicants, &sorted)
            .into_iter()
            .zip(&sorted)
            .map(|(covering, &minterm)| ChartRow { minterm, covering })
            .collect();

        CoverChart { primes, rows }
    }

    /// Checks the selection against the function it was computed for.
    ///
    /// Returns every index in `0..2^num_vars` where the selected cover
    /// disagrees: a required minterm left uncovered, or a 0-cell covered.
    pub fn verify_cover(&self, minterms: &[u32], dont_cares: &[u32], num_vars: u32) -> Vec<u32> {
        (0..1u32 << num_vars)
            .filter(|m| {
                let covered = self.selected_implicants().any(|imp| imp.covers(*m));
                if minterms.contains(m) {
                    !covered
                } else if dont_cares.contains(m) {
                    false
                } else {
                    covered
                }
            })
            .collect()
    }
}
