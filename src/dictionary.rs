//! Word membership and the prefix trie that guides the move search.
use crate::letterset::{Label, LetterSet};
use crate::Error;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs::read_to_string;

#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
struct TrieNode {
    /// Labels of the child nodes.
    children: LetterSet,
    /// Child node indices, in the same (ascending) order as `children`.
    edges: Vec<u32>,
    /// True if the path from the root to this node spells a word.
    terminal: bool,
}

/// A prefix tree over the dictionary words.
///
/// Nodes live in one arena `Vec`; the root is node 0. A search only
/// follows existing child edges, so a branch dies as soon as no word
/// shares its prefix. Children iterate in alphabetical order, which
/// makes search results reproducible.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Trie {
    nodes: Vec<TrieNode>,
}

/// Index of the root node.
pub const ROOT: usize = 0;

impl Default for Trie {
    fn default() -> Trie {
        Trie::new()
    }
}

impl Trie {
    pub fn new() -> Trie {
        Trie {
            nodes: vec![TrieNode::default()],
        }
    }

    /// Insert a word, given as 0-based letter labels.
    fn insert(&mut self, labels: &[Label]) {
        let mut node = ROOT;
        for &label in labels {
            node = match self.child(node, label) {
                Some(child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(TrieNode::default());
                    self.nodes[node].children.insert(label);
                    // keep the edge list aligned with the label set order
                    let rank = self.nodes[node].children.index_of(label).unwrap();
                    self.nodes[node].edges.insert(rank, child as u32);
                    child
                }
            };
        }
        self.nodes[node].terminal = true;
    }

    /// Follow the edge for `label` from `node`, if it exists.
    pub fn child(&self, node: usize, label: Label) -> Option<usize> {
        let n = &self.nodes[node];
        n.children.index_of(label).map(|i| n.edges[i] as usize)
    }

    /// The labels of all children of `node`, in alphabetical order.
    pub fn child_labels(&self, node: usize) -> LetterSet {
        self.nodes[node].children
    }

    /// True if the path to `node` spells a complete word.
    pub fn is_terminal(&self, node: usize) -> bool {
        self.nodes[node].terminal
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn walk(&self, word: &[Label]) -> Option<usize> {
        let mut node = ROOT;
        for &label in word {
            node = self.child(node, label)?;
        }
        Some(node)
    }

    /// Check if any word starts with `prefix`.
    pub fn has_prefix(&self, prefix: &[Label]) -> bool {
        self.walk(prefix).is_some()
    }

    /// Check if `word` is in the trie.
    pub fn has_word(&self, word: &[Label]) -> bool {
        self.walk(word).map_or(false, |node| self.nodes[node].terminal)
    }
}

/// The set of valid words plus the [`Trie`] built over them.
///
/// Built once at load time, read-only afterwards.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dictionary {
    words: HashSet<String>,
    trie: Trie,
    /// Path of the wordfile used, empty if built from a word list.
    wordfile: String,
}

impl fmt::Display for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "<Dictionary: {} words, {} trie nodes from '{}'>",
            self.words.len(),
            self.trie.node_count(),
            self.wordfile
        )
    }
}

impl Dictionary {
    /// Read the dictionary from `wordfile`: one word per line,
    /// case-insensitive, surrounding whitespace trimmed, blank lines
    /// ignored. Entries with characters outside `a..=z` are skipped.
    ///
    /// ## Errors
    /// [`Error::ReadError`] if the file is missing or unreadable. A game
    /// cannot start without a dictionary, so the caller should treat
    /// this as fatal.
    pub fn from_file(wordfile: &str) -> Result<Dictionary, Error> {
        let contents = read_to_string(wordfile).map_err(|e| Error::ReadError {
            path: String::from(wordfile),
            source: e,
        })?;
        let mut dict = Dictionary::from_lines(contents.lines());
        dict.wordfile = String::from(wordfile);
        Ok(dict)
    }

    /// Build a dictionary from a list of words.
    pub fn from_words(words: &[&str]) -> Dictionary {
        Dictionary::from_lines(words.iter().copied())
    }

    fn from_lines<'a, I: Iterator<Item = &'a str>>(lines: I) -> Dictionary {
        let mut words = HashSet::new();
        let mut trie = Trie::new();
        for line in lines {
            let word = line.trim();
            if word.is_empty() || !word.chars().all(|c| c.is_ascii_alphabetic()) {
                continue;
            }
            let labels: Vec<Label> = word
                .chars()
                .map(|c| c.to_ascii_uppercase() as u8 - b'A')
                .collect();
            if words.insert(word.to_ascii_lowercase()) {
                trie.insert(&labels);
            }
        }
        Dictionary {
            words,
            trie,
            wordfile: String::new(),
        }
    }

    /// Case-insensitive word membership.
    pub fn is_valid(&self, word: &str) -> bool {
        self.words.contains(&word.to_ascii_lowercase())
    }

    /// Number of words in the dictionary.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }
}
