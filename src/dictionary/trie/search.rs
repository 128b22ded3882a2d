use tracing::debug;

use crate::dictionary::trie::ranking::{Candidate, top_k};
use crate::dictionary::trie::trie::Trie;
use crate::pattern::Pattern;

fn words(ranked: Vec<Candidate>) -> Vec<String> {
    ranked.into_iter().map(|c| c.word).collect()
}

impl Trie {
    /// Up to `num_completions` stored words starting with `prefix`, ranked by
    /// frequency then alphabetically. Empty for an empty prefix, a zero count
    /// or a prefix with no path in the trie.
    pub fn ranked_completions(&self, prefix: &str, num_completions: usize) -> Vec<Candidate> {
        if prefix.is_empty() || num_completions == 0 {
            return vec![];
        }
        match self.get_node(prefix) {
            None => vec![],
            Some(node) => top_k(node.subtree(prefix), num_completions),
        }
    }

    /// Up to `num_completions` stored words matching a wildcard pattern such
    /// as `c_t`.
    ///
    /// Only the literal run before the first wildcard narrows the search; the
    /// whole subtree below it is scanned and each word checked against every
    /// position of the pattern, so patterns with several wildcards work too.
    pub fn ranked_underscores(&self, pattern: &str, num_completions: usize) -> Vec<Candidate> {
        if pattern.is_empty() || num_completions == 0 {
            return vec![];
        }
        let pattern = match Pattern::parse(pattern) {
            Ok(pattern) => pattern,
            Err(e) => {
                debug!("ignoring pattern: {}", e);
                return vec![];
            }
        };
        let prefix = pattern.literal_prefix();
        match self.get_node(&prefix) {
            None => vec![],
            Some(node) => top_k(node.subtree(&prefix)
                                    .filter(|c| pattern.matches(&c.word)),
                                num_completions),
        }
    }

    pub fn predict_completions(&self, prefix: &str, num_completions: usize) -> Vec<String> {
        words(self.ranked_completions(prefix, num_completions))
    }

    pub fn predict_underscores(&self, pattern: &str, num_completions: usize) -> Vec<String> {
        words(self.ranked_underscores(pattern, num_completions))
    }
}


#[cfg(test)]
mod tests {
    use crate::dictionary::index::Index;
    use crate::dictionary::trie::Trie;

    fn trie(words: Vec<(&str, u32)>) -> Trie {
        let mut trie = Trie::new();
        trie.insert_all(words);
        trie
    }

    #[test]
    fn completes_by_frequency_then_alphabet() {
        let trie = trie(vec![("cat", 5), ("car", 3), ("cap", 3)]);
        assert_eq!(trie.predict_completions("ca", 2), vec!["cat", "cap"]);
        assert_eq!(trie.predict_completions("ca", 10), vec!["cat", "cap", "car"]);
    }

    #[test]
    fn completion_includes_prefix_itself() {
        let trie = trie(vec![("do", 1), ("dog", 4), ("door", 2), ("cat", 9)]);
        assert_eq!(trie.predict_completions("do", 5), vec!["dog", "door", "do"]);
        assert_eq!(trie.predict_completions("dog", 5), vec!["dog"]);
    }

    #[test]
    fn completion_results_share_the_prefix() {
        let trie = trie(vec![("the", 50), ("then", 12), ("there", 20), ("other", 30),
                             ("th", 1), ("a the", 3)]);
        let results = trie.predict_completions("th", 10);
        assert_eq!(results.len(), 4);
        assert!(results.iter().all(|w| w.starts_with("th")));
    }

    #[test]
    fn completion_fails_soft() {
        let trie = trie(vec![("cat", 5)]);
        assert!(trie.predict_completions("", 5).is_empty());
        assert!(trie.predict_completions("ca", 0).is_empty());
        assert!(trie.predict_completions("dog", 5).is_empty());
        assert!(trie.predict_completions("cats", 5).is_empty());
        assert!(trie.predict_completions("C", 5).is_empty());
        assert!(trie.predict_completions("c_", 5).is_empty());
    }

    #[test]
    fn completion_handles_spaces() {
        let trie = trie(vec![("new york", 8), ("new jersey", 5), ("newt", 2)]);
        assert_eq!(trie.predict_completions("new ", 5), vec!["new york", "new jersey"]);
        assert_eq!(trie.predict_completions("new", 5), vec!["new york", "new jersey", "newt"]);
    }

    #[test]
    fn ranked_completions_carry_frequencies() {
        let trie = trie(vec![("cat", 5), ("car", 3)]);
        let ranked = trie.ranked_completions("c", 5);
        assert_eq!(ranked.iter().map(|c| c.freq).collect::<Vec<_>>(), vec![5, 3]);
    }

    #[test]
    fn underscores_match_length_and_letters() {
        let trie = trie(vec![("cat", 5), ("cot", 2), ("cup", 1)]);
        assert_eq!(trie.predict_underscores("c_t", 5), vec!["cat", "cot"]);
        assert_eq!(trie.predict_underscores("c_t", 1), vec!["cat"]);
    }

    #[test]
    fn underscores_ignore_longer_and_shorter_words() {
        let trie = trie(vec![("cat", 5), ("cats", 7), ("ct", 4), ("cut", 1)]);
        assert_eq!(trie.predict_underscores("c_t", 5), vec!["cat", "cut"]);
        assert_eq!(trie.predict_underscores("c__", 5), vec!["cat", "cut"]);
        assert_eq!(trie.predict_underscores("c_", 5), vec!["ct"]);
    }

    #[test]
    fn underscores_with_leading_and_several_wildcards() {
        let trie = trie(vec![("bake", 3), ("cake", 9), ("cola", 4), ("lake", 3), ("make", 1)]);
        assert_eq!(trie.predict_underscores("_ake", 3), vec!["cake", "bake", "lake"]);
        assert_eq!(trie.predict_underscores("_a_e", 10), vec!["cake", "bake", "lake", "make"]);
        assert_eq!(trie.predict_underscores("____", 10),
                   vec!["cake", "cola", "bake", "lake", "make"]);
    }

    #[test]
    fn underscores_wildcard_matches_space() {
        let trie = trie(vec![("a b", 2), ("abb", 3)]);
        assert_eq!(trie.predict_underscores("a_b", 5), vec!["abb", "a b"]);
    }

    #[test]
    fn pattern_without_wildcard_matches_only_itself() {
        let trie = trie(vec![("cat", 5), ("cats", 7)]);
        assert_eq!(trie.predict_underscores("cat", 5), vec!["cat"]);
        assert!(trie.predict_underscores("cab", 5).is_empty());
    }

    #[test]
    fn underscores_fail_soft() {
        let trie = trie(vec![("cat", 5)]);
        assert!(trie.predict_underscores("", 5).is_empty());
        assert!(trie.predict_underscores("c_t", 0).is_empty());
        assert!(trie.predict_underscores("d_g", 5).is_empty());
        assert!(trie.predict_underscores("c?t", 5).is_empty());
        assert!(Trie::new().predict_underscores("___", 5).is_empty());
    }
}
