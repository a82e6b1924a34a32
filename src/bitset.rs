//! Sets of prime implicant indices.
//!
//! Petrick's method multiplies out sums of implicant indices; each partial
//! product is one of these sets. The reduction step hashes them, compares
//! them and tests inclusion, all word by word.

/// A set of small indices packed into `u64` words.
///
/// # Invariants
///
/// - The last word, if any, is non-zero.
///
/// Equal sets therefore have equal word vectors, so the derived `Eq` and
/// `Hash` compare contents.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct BitSet {
    words: Vec<u64>,
}

const WORD: usize = u64::BITS as usize;

impl BitSet {
    /// The set `{index}`.
    pub fn singleton(index: usize) -> Self {
        let mut words = vec![0; index / WORD + 1];
        words[index / WORD] = 1 << (index % WORD);
        BitSet { words }
    }

    /// Number of indices in the set.
    pub fn len(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.words
            .get(index / WORD)
            .is_some_and(|w| (w >> (index % WORD)) & 1 == 1)
    }

    /// Adds `index`; returns false if it was already present.
    pub fn insert(&mut self, index: usize) -> bool {
        let (w, bit) = (index / WORD, 1u64 << (index % WORD));
        if w >= self.words.len() {
            self.words.resize(w + 1, 0);
        }
        let fresh = self.words[w] & bit == 0;
        self.words[w] |= bit;
        fresh
    }

    /// This set with `index` added.
    pub fn with(&self, index: usize) -> Self {
        let mut set = self.clone();
        set.insert(index);
        set
    }

    /// Returns true if `other` is a subset of `self`.
    pub fn is_superset(&self, other: &BitSet) -> bool {
        other.words.len() <= self.words.len()
            && other
                .words
                .iter()
                .zip(&self.words)
                .all(|(&theirs, &mine)| theirs & !mine == 0)
    }

    /// Indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.words.iter().enumerate().flat_map(|(w, &word)| {
            let mut rest = word;
            std::iter::from_fn(move || {
                if rest == 0 {
                    return None;
                }
                let bit = rest.trailing_zeros() as usize;
                rest &= rest - 1;
                Some(w * WORD + bit)
            })
        })
    }
}

impl FromIterator<usize> for BitSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut set = BitSet::default();
        for index in iter {
            set.insert(index);
        }
        set
    }
}
