//! Karnaugh map geometry.
//!
//! A minterm index over `n` variables is split into a row number (the high
//! `row_bits` bits) and a column number (the low `col_bits` bits). Rows and
//! columns are laid out in reflected Gray code order, so any two cells that
//! touch on the grid (including across the edges) differ in one variable.
//!
//! | n | rows × cols | row variables | column variables |
//! |---|-------------|---------------|------------------|
//! | 2 | 2 × 2       | A             | B                |
//! | 3 | 2 × 4       | A             | BC               |
//! | 4 | 4 × 4       | AB            | CD               |
//! | 5 | 4 × 8       | AB            | CDE              |
//! | 6 | 8 × 8       | ABC           | DEF              |

use crate::error::ShapeError;
use crate::types::CellValue;

/// Smallest variable count with a K-map layout.
pub const MIN_VARS: u32 = 2;
/// Largest variable count with a K-map layout.
pub const MAX_VARS: u32 = 6;

/// Row and column bit counts for `num_vars` variables.
///
/// Counts outside `2..=6` fall back to `row_bits = num_vars / 2`.
/// [`KMapShape::new`] never reaches the fallback; the minimizer's span
/// tie-break may.
pub fn layout_bits(num_vars: u32) -> (u32, u32) {
    match num_vars {
        2 => (1, 1),
        3 => (1, 2),
        4 => (2, 2),
        5 => (2, 3),
        6 => (3, 3),
        n => {
            let row_bits = n / 2;
            (row_bits, n - row_bits)
        }
    }
}

/// Position `i` of the reflected binary code.
pub fn gray(i: u32) -> u32 {
    i ^ (i >> 1)
}

fn gray_sequence(bits: u32) -> Vec<u32> {
    (0..1u32 << bits).map(gray).collect()
}

fn invert(order: &[u32]) -> Vec<usize> {
    let mut inv = vec![0; order.len()];
    for (pos, &value) in order.iter().enumerate() {
        inv[value as usize] = pos;
    }
    inv
}

/// Layout of a K-map for a given variable count.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct KMapShape {
    pub num_vars: u32,
    pub rows: usize,
    pub cols: usize,
    pub row_bits: u32,
    pub col_bits: u32,
    /// Gray sequence by row position: position -> row number.
    pub row_order: Vec<u32>,
    /// Gray sequence by column position: position -> column number.
    pub col_order: Vec<u32>,
    /// Inverse of `row_order`: row number -> position.
    pub row_inv: Vec<usize>,
    /// Inverse of `col_order`: column number -> position.
    pub col_inv: Vec<usize>,
}

impl KMapShape {
    /// Derives the shape for `num_vars` variables.
    ///
    /// Fails with [`ShapeError::UnsupportedVarCount`] outside `2..=6`.
    pub fn new(num_vars: u32) -> Result<Self, ShapeError> {
        if !(MIN_VARS..=MAX_VARS).contains(&num_vars) {
            return Err(ShapeError::UnsupportedVarCount(num_vars));
        }
        let (row_bits, col_bits) = layout_bits(num_vars);
        let row_order = gray_sequence(row_bits);
        let col_order = gray_sequence(col_bits);
        let row_inv = invert(&row_order);
        let col_inv = invert(&col_order);
        Ok(KMapShape {
            num_vars,
            rows: row_order.len(),
            cols: col_order.len(),
            row_bits,
            col_bits,
            row_order,
            col_order,
            row_inv,
            col_inv,
        })
    }

    /// Number of cells, `2^num_vars`.
    pub fn size(&self) -> usize {
        self.rows * self.cols
    }

    /// Grid position `(row, col)` of the minterm `index`.
    pub fn index_to_rc(&self, index: u32) -> (usize, usize) {
        let row_num = index >> self.col_bits;
        let col_num = index & ((1 << self.col_bits) - 1);
        (self.row_inv[row_num as usize], self.col_inv[col_num as usize])
    }

    /// Minterm index of the cell at grid position `(row, col)`.
    pub fn rc_to_index(&self, row: usize, col: usize) -> u32 {
        (self.row_order[row] << self.col_bits) | self.col_order[col]
    }

    /// Header labels of the row and column axes.
    ///
    /// The row axis is labelled with the first `row_bits` names, the column
    /// axis with the following `col_bits` names.
    pub fn axis_labels(&self, vars: &[char]) -> (Vec<String>, Vec<String>) {
        let row_bits = self.row_bits as usize;
        let row_vars = &vars[..row_bits.min(vars.len())];
        let col_vars = &vars[row_vars.len()..(row_bits + self.col_bits as usize).min(vars.len())];
        let rows = self
            .row_order
            .iter()
            .map(|&v| header_label(v, row_vars, self.row_bits))
            .collect();
        let cols = self
            .col_order
            .iter()
            .map(|&v| header_label(v, col_vars, self.col_bits))
            .collect();
        (rows, cols)
    }
}

/// Label of one axis value: a product over the axis variables.
///
/// Without any names the label is the zero-padded binary string; a missing
/// name at position `i` is shown as `V{i+1}`.
pub fn header_label(value: u32, axis_vars: &[char], bits: u32) -> String {
    if bits == 0 {
        return String::new();
    }
    let binary = format!("{:0width$b}", value, width = bits as usize);
    if axis_vars.is_empty() {
        return binary;
    }
    let mut label = String::new();
    for (i, bit) in binary.chars().enumerate() {
        match axis_vars.get(i) {
            Some(name) => label.push(*name),
            None => label.push_str(&format!("V{}", i + 1)),
        }
        if bit == '0' {
            label.push('\'');
        }
    }
    label
}

/// Default variable names `A`, `B`, `C`, ...
pub fn default_var_names(num_vars: u32) -> Vec<char> {
    (b'A'..=b'Z').take(num_vars as usize).map(char::from).collect()
}

/// Lays out a flat cell array (indexed by minterm) as `grid[row][col]`.
pub fn build_grid(values: &[CellValue], num_vars: u32) -> Result<Vec<Vec<CellValue>>, ShapeError> {
    let shape = KMapShape::new(num_vars)?;
    check_len(values, &shape)?;
    let mut grid = vec![vec![CellValue::Zero; shape.cols]; shape.rows];
    for (m, &value) in values.iter().enumerate() {
        let (r, c) = shape.index_to_rc(m as u32);
        grid[r][c] = value;
    }
    Ok(grid)
}

pub(crate) fn check_len(values: &[CellValue], shape: &KMapShape) -> Result<(), ShapeError> {
    if values.len() != shape.size() {
        return Err(ShapeError::CellCountMismatch {
            expected: shape.size(),
            found: values.len(),
        });
    }
    Ok(())
}

/// A contiguous run of positions along one axis.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Segment {
    pub start: usize,
    pub span: usize,
}

/// Splits the positions a group occupies on an axis of length `total` into runs.
///
/// A cyclic run is returned as one segment, or as two when it wraps past
/// the last position. Positions that do not form a cyclic run fall back to
/// one segment each.
pub fn cyclic_segments(positions: &[usize], total: usize) -> Vec<Segment> {
    let mut sorted = positions.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    if sorted.is_empty() || total == 0 {
        return Vec::new();
    }
    let span = sorted.len();

    for &start in &sorted {
        let is_run = (0..span).all(|offset| sorted.binary_search(&((start + offset) % total)).is_ok());
        if !is_run {
            continue;
        }
        if start + span <= total {
            return vec![Segment { start, span }];
        }
        let first = total - start;
        return vec![
            Segment { start, span: first },
            Segment {
                start: 0,
                span: span - first,
            },
        ];
    }

    sorted.into_iter().map(|start| Segment { start, span: 1 }).collect()
}
