pub mod trie;
pub mod search;
pub mod ranking;

mod node;
mod iterators;

pub use ranking::Candidate;
pub use trie::Trie;
