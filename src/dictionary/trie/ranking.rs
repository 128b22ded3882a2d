use std::cmp::Ordering;
use std::collections::BinaryHeap;

use derive_new::new;
use serde::Serialize;

/// A stored word found by a query, before ranking.
#[derive(new, Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub word: String,
    pub freq: u32,
}

/// Better candidates compare as smaller: higher frequency first, then the
/// lexicographically smaller word.
impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        other.freq.cmp(&self.freq)
            .then_with(|| self.word.cmp(&other.word))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Keeps the best `k` candidates and returns them best first.
///
/// The heap holds at most `k` entries with the worst of them on top, so a
/// newcomer only has to beat the top to get in.
pub(crate) fn top_k<I>(candidates: I, k: usize) -> Vec<Candidate>
    where I: IntoIterator<Item=Candidate> {
    let mut pq: BinaryHeap<Candidate> = BinaryHeap::new();

    for candidate in candidates {
        if pq.len() < k {
            pq.push(candidate);
        } else if let Some(mut worst) = pq.peek_mut() {
            if candidate < *worst {
                *worst = candidate;
            }
        }
    }
    pq.into_sorted_vec()
}
