use std::fmt::{Debug, Formatter};

use crate::alphabet::get_idx;
use crate::dictionary::index::Index;
use crate::dictionary::trie::node::TrieNode;
use crate::error::InsertError;

/// Multiway trie over lowercase letters and space. Every stored word carries
/// a nonzero frequency on its terminal node.
#[derive(Default)]
pub struct Trie {
    root: TrieNode,
    len: usize,
}

impl Trie {
    pub fn new() -> Trie {
        Trie {
            root: Default::default(),
            len: 0,
        }
    }

    /// Number of word nodes.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Stores `word` with `freq`, extending the path as needed.
    ///
    /// The word is validated before any node is created, so a rejected word
    /// leaves the tree untouched. Re-inserting a stored word never changes
    /// its frequency. A frequency of zero is accepted but leaves the word
    /// indistinguishable from one never inserted.
    pub fn try_insert(&mut self, word: &str, freq: u32) -> Result<(), InsertError> {
        if word.is_empty() {
            return Err(InsertError::Empty);
        }
        let path = word.chars()
            .enumerate()
            .map(|(position, c)| get_idx(c)
                .ok_or(InsertError::InvalidCharacter { found: c, position }))
            .collect::<Result<Vec<_>, _>>()?;

        let mut current = &mut self.root;
        for idx in path {
            current = current.get_or_create_child(idx);
        }

        if current.is_word() {
            return Err(InsertError::Duplicate(word.to_string()));
        }
        current.freq = freq;
        if freq > 0 {
            self.len += 1;
        }
        Ok(())
    }

    pub fn frequency(&self, word: &str) -> Option<u32> {
        if word.is_empty() {
            return None;
        }
        self.get_node(word)
            .filter(|node| node.is_word())
            .map(|node| node.freq)
    }

    /// Node reached by spelling `word` from the root; the root itself for "".
    pub(crate) fn get_node(&self, word: &str) -> Option<&TrieNode> {
        word.chars().try_fold(&self.root, |node, c| {
            get_idx(c).and_then(|idx| node.get_child(idx))
        })
    }
}

impl Index for Trie {
    fn insert(&mut self, word: &str, freq: u32) -> bool {
        self.try_insert(word, freq).is_ok()
    }

    fn contains(&self, word: &str) -> bool {
        self.frequency(word).is_some()
    }
}

impl Debug for Trie {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut l = f.debug_map();
        self.root.subtree("").for_each(|c| { l.entry(&c.word, &c.freq); });
        l.finish()
    }
}
