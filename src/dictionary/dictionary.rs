use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use delegate::delegate;
use derive_new::new;
use tracing::{debug, info, warn};
use typed_builder::TypedBuilder;

use crate::alphabet::{normalize, WILDCARD};
use crate::dictionary::index::Index;
use crate::dictionary::trie::{Candidate, Trie};
use crate::error::{DictionaryError, LineError};

#[derive(Default)]
pub struct Dictionary {
    trie: Trie,
}

/// Layout of a word-frequency file, one entry per line.
#[derive(TypedBuilder, Debug, Clone)]
pub struct FileFormat {
    /// Column separator; any whitespace when unset.
    #[builder(default)]
    delimiter: Option<char>,
    /// Count before the word rather than after it.
    #[builder(default)]
    freq_first: bool,
    /// Lowercase words and drop characters outside the alphabet.
    #[builder(default)]
    normalize: bool,
}

impl Default for FileFormat {
    fn default() -> Self {
        FileFormat::builder().build()
    }
}

impl FileFormat {
    /// Splits at the delimiter nearest the count, so the word keeps any
    /// internal spaces.
    fn split<'a>(&self, line: &'a str) -> Option<(&'a str, &'a str)> {
        let delimiter = self.delimiter;
        let is_delimiter = move |c: char| match delimiter {
            Some(d) => c == d,
            None => c.is_whitespace(),
        };
        if self.freq_first {
            line.trim_start()
                .split_once(is_delimiter)
                .map(|(freq, word)| (word, freq))
        } else {
            line.trim_end().rsplit_once(is_delimiter)
        }
    }

    pub fn parse_line(&self, line: &str) -> Result<(String, u32), LineError> {
        let (word, freq) = self.split(line).ok_or(LineError::MissingFrequency)?;
        let freq = freq.trim();
        let freq = freq.parse::<u32>()
            .map_err(|_| LineError::BadFrequency(freq.to_string()))?;
        let word = if self.normalize {
            normalize(word.trim())
        } else {
            word.trim().to_string()
        };
        if word.is_empty() {
            return Err(LineError::EmptyWord);
        }
        Ok((word, freq))
    }
}

#[derive(new, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadStats {
    pub inserted: usize,
    pub rejected: usize,
}

impl Dictionary {
    pub fn new() -> Dictionary {
        Dictionary { trie: Trie::new() }
    }

    /// Loads a dictionary file. Unreadable and zero-length files are errors;
    /// bad lines inside a readable file are only counted and logged.
    pub fn from_file<P: AsRef<Path>>(path: P, format: &FileFormat) -> Result<Dictionary, DictionaryError> {
        let path = path.as_ref();
        info!("Reading words from {:?}", path);

        let file = File::open(path).map_err(|source| DictionaryError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        if file.metadata()?.len() == 0 {
            return Err(DictionaryError::EmptyFile(path.to_path_buf()));
        }

        let mut dictionary = Dictionary::new();
        dictionary.load_reader(BufReader::new(file), format)?;
        Ok(dictionary)
    }

    pub fn load_reader<R: BufRead>(&mut self, reader: R, format: &FileFormat) -> Result<LoadStats, DictionaryError> {
        let start = Instant::now();
        let mut stats = LoadStats::default();

        for (idx, bytes) in reader.split(b'\n').enumerate() {
            let line_number = idx + 1;
            let line = match String::from_utf8(bytes?) {
                Ok(line) => line,
                Err(e) => {
                    warn!(line = line_number, "line is not valid UTF-8: {}", e);
                    stats.rejected += 1;
                    continue;
                }
            };
            if line.trim().is_empty() {
                continue;
            }
            match format.parse_line(&line) {
                Ok((word, freq)) => match self.trie.try_insert(&word, freq) {
                    Ok(()) => stats.inserted += 1,
                    Err(e) => {
                        debug!(line = line_number, "rejected {:?}: {}", word, e);
                        stats.rejected += 1;
                    }
                },
                Err(e) => {
                    warn!(line = line_number, "malformed line {:?}: {}", line, e);
                    stats.rejected += 1;
                }
            }
            if line_number % 100_000 == 0 {
                info!("{} lines read", line_number);
            }
        }

        let elapsed = start.elapsed();
        info!(inserted = stats.inserted,
              rejected = stats.rejected,
              "Read {} words in {}s", stats.inserted, elapsed.as_millis() as f64 / 1000.0);
        Ok(stats)
    }

    /// Wildcard completion if `query` holds a wildcard, prefix completion otherwise.
    pub fn complete(&self, query: &str, num_completions: usize) -> Vec<Candidate> {
        if query.contains(WILDCARD) {
            self.trie.ranked_underscores(query, num_completions)
        } else {
            self.trie.ranked_completions(query, num_completions)
        }
    }

    delegate! {
        to self.trie {
            pub fn len(&self) -> usize;
            pub fn is_empty(&self) -> bool;
            pub fn frequency(&self, word: &str) -> Option<u32>;
            pub fn predict_completions(&self, prefix: &str, num_completions: usize) -> Vec<String>;
            pub fn predict_underscores(&self, pattern: &str, num_completions: usize) -> Vec<String>;
        }
    }
}

impl Index for Dictionary {
    delegate! {
        to self.trie {
            fn insert(&mut self, word: &str, freq: u32) -> bool;
            fn contains(&self, word: &str) -> bool;
        }
    }
}
