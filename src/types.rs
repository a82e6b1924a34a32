//! Value types shared by the minimizer, the engine and the K-map solver.
use std::fmt;

/// A product term over `n` variables, as a `(bits, mask)` pair.
///
/// Bit `i` of `mask` is set when the variable at bit position `i` is free
/// within this implicant. Bit `i` of `bits` holds the assigned value otherwise.
///
/// # Invariants
///
/// - `bits & mask == 0` for implicants produced by the minimizer
/// - Equality and hashing are by the `(bits, mask)` pair
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Implicant {
    pub bits: u32,
    pub mask: u32,
}

impl Implicant {
    pub fn new(bits: u32, mask: u32) -> Self {
        Implicant { bits, mask }
    }

    /// The implicant covering exactly one index.
    pub fn minterm(index: u32) -> Self {
        Implicant { bits: index, mask: 0 }
    }

    /// Returns true if the index `m` lies inside this implicant.
    pub fn covers(self, m: u32) -> bool {
        (m & !self.mask) == (self.bits & !self.mask)
    }

    /// Number of ones among the fixed (non-masked) positions.
    pub fn ones(self) -> u32 {
        (self.bits & !self.mask).count_ones()
    }

    /// Number of free positions.
    pub fn free_count(self) -> u32 {
        self.mask.count_ones()
    }

    /// Number of literals in the product over `num_vars` variables.
    pub fn literal_count(self, num_vars: u32) -> u32 {
        num_vars - self.free_count()
    }

    /// Number of indices covered.
    pub fn area(self) -> u32 {
        1 << self.free_count()
    }

    /// Returns true if every one of the `num_vars` positions is free.
    pub fn is_tautology(self, num_vars: u32) -> bool {
        self.mask == full_mask(num_vars)
    }

    /// Merges two implicants differing in exactly one fixed position.
    ///
    /// Both must have the same mask; the differing position becomes free.
    pub fn combine(self, other: Self) -> Option<Self> {
        if self.mask != other.mask {
            return None;
        }
        let diff = self.bits ^ other.bits;
        if diff == 0 || diff & (diff - 1) != 0 {
            return None;
        }
        Some(Implicant {
            bits: self.bits & !diff,
            mask: self.mask | diff,
        })
    }

    /// All covered indices, enumerating the free positions from the most significant one.
    ///
    /// The `k`-th index sets free position `j` (counting from the most
    /// significant free position) to bit `j` of `k`.
    pub fn indices(self, num_vars: u32) -> Vec<u32> {
        let free: Vec<u32> = (0..num_vars)
            .rev()
            .filter(|&pos| (self.mask >> pos) & 1 == 1)
            .collect();
        (0..1u32 << free.len())
            .map(|k| {
                let mut m = self.bits;
                for (j, &pos) in free.iter().enumerate() {
                    if (k >> j) & 1 == 1 {
                        m |= 1 << pos;
                    } else {
                        m &= !(1 << pos);
                    }
                }
                m
            })
            .collect()
    }
}

/// Mask with the low `num_vars` bits set.
pub fn full_mask(num_vars: u32) -> u32 {
    if num_vars >= 32 {
        u32::MAX
    } else {
        (1 << num_vars) - 1
    }
}

impl fmt::Display for Implicant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:#b}, mask={:#b})", self.bits, self.mask)
    }
}

/// One entry of a derivation trace.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Step {
    pub title: String,
    pub detail: Option<String>,
}

impl Step {
    pub fn new(title: impl Into<String>) -> Self {
        Step {
            title: title.into(),
            detail: None,
        }
    }

    pub fn with_detail(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Step {
            title: title.into(),
            detail: Some(detail.into()),
        }
    }

    /// Copy of this step with `prefix` prepended to the title.
    pub fn prefixed(&self, prefix: &str) -> Self {
        Step {
            title: format!("{}{}", prefix, self.title),
            detail: self.detail.clone(),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.detail {
            Some(detail) => write!(f, "{}: {}", self.title, detail),
            None => write!(f, "{}", self.title),
        }
    }
}

/// Value of a single K-map cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum CellValue {
    #[default]
    Zero,
    One,
    DontCare,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Zero => write!(f, "0"),
            CellValue::One => write!(f, "1"),
            CellValue::DontCare => write!(f, "X"),
        }
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        if value {
            CellValue::One
        } else {
            CellValue::Zero
        }
    }
}
