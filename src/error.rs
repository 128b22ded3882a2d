//! Error types for loading and querying a dictionary.
//!
//! Query operations never surface these: an invalid prefix or pattern simply
//! produces no results. They exist for callers that want to know *why* a word
//! or a dictionary line was rejected.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures that stop a dictionary file from being loaded at all.
#[derive(Error, Debug)]
pub enum DictionaryError {
    /// The file could not be opened.
    #[error("could not open dictionary file {path:?}: {source}")]
    Open {
        path: PathBuf,
        source: io::Error,
    },

    /// The file exists but holds no bytes.
    #[error("dictionary file {0:?} is empty")]
    EmptyFile(PathBuf),

    /// Reading failed part-way through.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Reasons a word is refused by the trie.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InsertError {
    #[error("cannot insert an empty word")]
    Empty,

    #[error("word {0:?} is already present")]
    Duplicate(String),

    #[error("character {found:?} at position {position} is outside the alphabet")]
    InvalidCharacter { found: char, position: usize },
}

/// Reasons a single dictionary line is malformed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LineError {
    #[error("line has no frequency column")]
    MissingFrequency,

    #[error("{0:?} is not a valid frequency")]
    BadFrequency(String),

    #[error("line has no word")]
    EmptyWord,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("pattern is empty")]
    Empty,

    #[error("pattern character {found:?} at position {position} is neither a letter, a space nor a wildcard")]
    InvalidCharacter { found: char, position: usize },
}
