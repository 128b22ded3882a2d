use std::fmt::{Debug, Formatter};

use crate::alphabet::{ALPHABET, letter};


/// One symbol position. Owns its children outright, so dropping a node
/// releases its whole subtree.
#[derive(Default)]
pub(crate) struct TrieNode {
    children: [Option<Box<TrieNode>>; ALPHABET.len()],
    /// Zero means the path to this node is not a stored word.
    pub(crate) freq: u32,
}

impl TrieNode {
    pub(crate) fn is_word(&self) -> bool {
        self.freq > 0
    }

    pub(crate) fn get_child(&self, idx: usize) -> Option<&TrieNode> {
        self.children[idx].as_deref()
    }

    pub(crate) fn get_or_create_child(&mut self, idx: usize) -> &mut TrieNode {
        self.children[idx].get_or_insert_with(Box::default)
    }
}

/// Detaches descendants onto a heap stack so dropping a deep path does not
/// recurse once per character.
impl Drop for TrieNode {
    fn drop(&mut self) {
        let mut stack: Vec<Box<TrieNode>> = self.children.iter_mut()
            .filter_map(Option::take)
            .collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.children.iter_mut().filter_map(Option::take));
        }
    }
}

impl Debug for TrieNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrieNode")
            .field("freq", &self.freq)
            .field("children", &self.into_iter()
                .map(|(c, _)| c)
                .collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Walks the occupied child slots in alphabet order.
#[derive(Debug)]
pub(crate) struct TrieCursor<'a> {
    idx: usize,
    node: &'a TrieNode,
}

impl<'a> Iterator for TrieCursor<'a> {
    type Item = (char, &'a TrieNode);

    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < self.node.children.len() {
            let idx = self.idx;
            self.idx += 1;
            if let Some(child) = self.node.children[idx].as_deref() {
                return Some((letter(idx), child));
            }
        }
        None
    }
}

impl<'a> IntoIterator for &'a TrieNode {
    type Item = (char, &'a TrieNode);
    type IntoIter = TrieCursor<'a>;

    fn into_iter(self) -> Self::IntoIter {
        TrieCursor { idx: 0, node: self }
    }
}
