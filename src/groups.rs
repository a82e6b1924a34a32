//! Grouping of K-map cells into the implicants of a minimal cover.
//!
//! [`solve_kmap`] minimizes the 1-cells (with the `X` cells as don't-cares)
//! and returns one [`Group`] per selected implicant, listing the grid cells
//! it covers. [`solve_kmap_pos`] does the same on the 0-cells, labelling the
//! groups with sum clauses.
//!
//! The loaders at the bottom build a cell array from index lists or from an
//! expression.

use log::debug;

use crate::engine::solve_expression;
use crate::error::{Result, ShapeError};
use crate::format::{format_pos, format_sop, implicant_to_product, implicant_to_sum};
use crate::kmap::{check_len, default_var_names, KMapShape, MAX_VARS, MIN_VARS};
use crate::qmc::{minimize_sop, MinimizeResult};
use crate::types::{CellValue, Implicant, Step};

/// A cell of the grid, with the minterm it holds.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
    pub index: u32,
}

/// Footprint of one selected implicant.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Group {
    /// Index into [`MinimizeResult::prime_implicants`].
    pub implicant_index: usize,
    pub implicant: Implicant,
    /// Covered cells, in [`Implicant::indices`] order.
    pub cells: Vec<Cell>,
    /// Product term (SOP) or sum clause (POS) of the implicant.
    pub label: String,
}

/// Groups and formatted expression for a cell grid.
#[derive(Debug, Clone)]
pub struct KMapSolveResult {
    /// The SOP string for [`solve_kmap`], the POS string for [`solve_kmap_pos`].
    pub expression: String,
    pub groups: Vec<Group>,
    pub steps: Vec<Step>,
    pub minimized: MinimizeResult,
}

/// Solves the grid for a minimal SOP.
///
/// `values` is indexed by minterm and must hold `2^num_vars` cells. Without
/// `vars`, the names default to `A`, `B`, ... A short `vars` slice is padded
/// with those defaults and a long one is cut to `num_vars` names.
pub fn solve_kmap(values: &[CellValue], num_vars: u32, vars: Option<&[char]>) -> Result<KMapSolveResult, ShapeError> {
    solve_side(values, num_vars, vars, CellValue::One)
}

/// Solves the grid for a minimal POS, grouping the 0-cells.
pub fn solve_kmap_pos(values: &[CellValue], num_vars: u32, vars: Option<&[char]>) -> Result<KMapSolveResult, ShapeError> {
    solve_side(values, num_vars, vars, CellValue::Zero)
}

fn solve_side(
    values: &[CellValue],
    num_vars: u32,
    vars: Option<&[char]>,
    target: CellValue,
) -> Result<KMapSolveResult, ShapeError> {
    let shape = KMapShape::new(num_vars)?;
    check_len(values, &shape)?;

    let mut terms = Vec::new();
    let mut dont_cares = Vec::new();
    for (m, &value) in values.iter().enumerate() {
        if value == target {
            terms.push(m as u32);
        } else if value == CellValue::DontCare {
            dont_cares.push(m as u32);
        }
    }

    let names = var_names(vars, num_vars);

    let res = minimize_sop(&terms, &dont_cares, num_vars);
    let groups: Vec<Group> = res
        .selected
        .iter()
        .map(|&idx| {
            let imp = res.prime_implicants[idx];
            let cells = imp
                .indices(num_vars)
                .into_iter()
                .map(|index| {
                    let (row, col) = shape.index_to_rc(index);
                    Cell { row, col, index }
                })
                .collect();
            let label = if target == CellValue::One {
                implicant_to_product(imp, &names)
            } else {
                implicant_to_sum(imp, &names)
            };
            Group {
                implicant_index: idx,
                implicant: imp,
                cells,
                label,
            }
        })
        .collect();

    let expression = if target == CellValue::One {
        format_sop(&res, &names)
    } else {
        format_pos(&res, &names)
    };
    debug!(
        "solve_kmap(n = {}, target = {}): {} groups, {}",
        num_vars,
        target,
        groups.len(),
        expression
    );

    Ok(KMapSolveResult {
        expression,
        groups,
        steps: res.steps.clone(),
        minimized: res,
    })
}

/// Exactly `num_vars` names: the given ones first, then the defaults.
fn var_names(vars: Option<&[char]>, num_vars: u32) -> Vec<char> {
    let mut names = default_var_names(num_vars);
    for (slot, &name) in names.iter_mut().zip(vars.unwrap_or_default()) {
        *slot = name;
    }
    names
}

/// Parses a free-form list of cell indices.
///
/// Tokens are separated by whitespace or commas. Tokens that are not
/// integers in `0..size` are skipped. Only plain decimal digits count, so
/// forms such as `0x3` or `1e1` are skipped too.
pub fn parse_index_list(text: &str, size: usize) -> Vec<usize> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .filter_map(|t| t.parse::<usize>().ok())
        .filter(|&i| i < size)
        .collect()
}

/// Builds a cell array from minterm and don't-care lists.
///
/// Don't-cares are applied first; a minterm never overrides an `X`.
pub fn cells_from_lists(minterms: &str, dont_cares: &str, num_vars: u32) -> Result<Vec<CellValue>, ShapeError> {
    let shape = KMapShape::new(num_vars)?;
    let size = shape.size();
    let mut cells = vec![CellValue::Zero; size];
    for i in parse_index_list(dont_cares, size) {
        cells[i] = CellValue::DontCare;
    }
    for i in parse_index_list(minterms, size) {
        if cells[i] != CellValue::DontCare {
            cells[i] = CellValue::One;
        }
    }
    Ok(cells)
}

/// Builds a cell array from the truth table of an expression.
///
/// Returns the expression's variables with one cell per minterm index.
/// Fails with [`ShapeError::UnsupportedVarCount`] unless the expression
/// has 2 to 6 variables.
pub fn cells_from_expression(text: &str) -> Result<(Vec<char>, Vec<CellValue>)> {
    let res = solve_expression(text)?;
    let n = res.vars.len() as u32;
    if !(MIN_VARS..=MAX_VARS).contains(&n) {
        return Err(ShapeError::UnsupportedVarCount(n).into());
    }
    let mut cells = vec![CellValue::Zero; 1 << n];
    for &m in &res.intermediate.minterms {
        cells[m as usize] = CellValue::One;
    }
    Ok((res.vars, cells))
}
