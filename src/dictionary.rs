pub mod trie;
pub mod index;
pub mod dictionary;
