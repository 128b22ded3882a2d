use std::collections::VecDeque;

use crate::dictionary::trie::node::TrieNode;
use crate::dictionary::trie::ranking::Candidate;

/// Breadth-first walk over every node below (and including) a start node,
/// yielding a candidate for each word node met.
pub(crate) struct Subtree<'a> {
    queue: VecDeque<(String, &'a TrieNode)>,
}

impl<'a> Iterator for Subtree<'a> {
    type Item = Candidate;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((path, node)) = self.queue.pop_front() {
            for (c, child) in node {
                let mut child_path = path.clone();
                child_path.push(c);
                self.queue.push_back((child_path, child));
            }
            if node.is_word() {
                return Some(Candidate::new(path, node.freq));
            }
        }
        None
    }
}

impl TrieNode {
    /// `path` is the string spelled by the route from the root to `self`.
    pub(crate) fn subtree(&self, path: &str) -> Subtree<'_> {
        let mut queue = VecDeque::new();
        queue.push_back((path.to_string(), self));
        Subtree { queue }
    }
}
