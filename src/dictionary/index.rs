pub trait Index {
    fn insert(&mut self, word: &str, freq: u32) -> bool;
    fn contains(&self, word: &str) -> bool;

    /// Inserts every pair and returns how many were accepted.
    fn insert_all<'a, I>(&mut self, items: I) -> usize
        where I: IntoIterator<Item=(&'a str, u32)> {
        items.into_iter()
            .filter(|(word, freq)| self.insert(word, *freq))
            .count()
    }
}
