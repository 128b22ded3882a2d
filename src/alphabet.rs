
pub const ALPHABET: &[u8] = "abcdefghijklmnopqrstuvwxyz ".as_bytes();

/// Query-only placeholder; never stored and never labels an edge.
pub const WILDCARD: char = '_';

pub fn get_idx(a: char) -> Option<usize> {
    match a {
        'a'..='z' => Some((a as u8 - b'a') as usize),
        ' ' => Some(26),
        _ => None
    }
}

pub fn letter(idx: usize) -> char {
    ALPHABET[idx] as char
}

pub fn normalize(s: &str) -> String {
    s.to_ascii_lowercase().chars().filter(|&x| get_idx(x).is_some()).collect()
}
