#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::FromIterator;

/// A letter `A..=Z`, stored as its 0-based alphabet index.
pub type Label = u8;

/// A bitset over the 26 letters `A..=Z`.
///
/// Used for the child labels of a trie node, and for deduplicating rack
/// letters at one level of the move search. Iteration is always in
/// ascending alphabetical order, which keeps the search deterministic.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LetterSet(u32);

impl LetterSet {
    pub fn new() -> LetterSet {
        LetterSet(0)
    }

    pub fn contains(&self, label: Label) -> bool {
        self.0 & (1 << label) != 0
    }

    /// Insert `label`, returning whether it was already present.
    pub fn insert(&mut self, label: Label) -> bool {
        assert!(label < 26);
        let r = self.contains(label);
        self.0 |= 1 << label;
        r
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> IteratorLetterSet {
        IteratorLetterSet::new(self.0)
    }

    /// Return the rank of `label` among the members, if present.
    pub fn index_of(&self, label: Label) -> Option<usize> {
        if !self.contains(label) {
            return None;
        }
        let below = self.0 & ((1 << label) - 1);
        Some(below.count_ones() as usize)
    }
}

impl fmt::Debug for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = self
            .iter()
            .map(|label| char::from(b'A' + label).to_string())
            .collect::<Vec<String>>()
            .join(",");
        write!(f, "{{{}}}", s)
    }
}

pub struct IteratorLetterSet {
    count: u32,
    value: u32,
}

impl IteratorLetterSet {
    fn new(value: u32) -> IteratorLetterSet {
        IteratorLetterSet { count: 0, value }
    }
}

impl Iterator for IteratorLetterSet {
    type Item = Label;
    fn next(&mut self) -> Option<Label> {
        while self.count < 26 {
            let i = self.count;
            self.count += 1;
            if self.value & (1 << i) != 0 {
                return Some(i as Label);
            }
        }
        None
    }
}

impl FromIterator<Label> for LetterSet {
    fn from_iter<I: IntoIterator<Item = Label>>(iter: I) -> Self {
        let mut c = LetterSet::new();
        for i in iter {
            c.insert(i);
        }
        c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letterset() {
        let mut labels = LetterSet::new();
        for &n in &[2, 25, 2, 1] {
            labels.insert(n);
        }
        for &n in &[1, 2, 25] {
            assert!(labels.contains(n));
        }
        assert!(!labels.contains(5));
        assert_eq!(labels.len(), 3);
    }

    #[test]
    fn test_iterator_is_sorted() {
        let labels: LetterSet = vec![7u8, 0, 19, 3].into_iter().collect();
        let v: Vec<Label> = labels.iter().collect();
        assert_eq!(v, vec![0, 3, 7, 19]);
    }

    #[test]
    fn test_index() {
        let labels: LetterSet = vec![0u8, 1, 4, 5, 7, 8, 10, 12, 14, 15].into_iter().collect();
        assert_eq!(labels.index_of(0), Some(0));
        assert_eq!(labels.index_of(15), Some(9));
        assert_eq!(labels.index_of(2), None);
        assert_eq!(labels.len(), 10);
    }
}
