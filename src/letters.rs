//! Letter helpers shared by the analyzer and the scorer.

pub const ALPHABET_SIZE: usize = 26;

/// Index of a lowercase ASCII letter within the alphabet ('a' = 0).
/// Returns `None` for anything else.
pub fn letter_index(byte: u8) -> Option<usize> {
    if byte.is_ascii_lowercase() {
        Some((byte - b'a') as usize)
    } else {
        None
    }
}

/// True when the byte at `i` is a final 's' not preceded by another 's'.
///
/// Such a letter is treated as simple pluralization and left out of every
/// frequency and uniqueness count.
pub fn skip_trailing_s(word: &[u8], i: usize) -> bool {
    let n = word.len();
    if n == 0 || i != n - 1 || word[i] != b's' {
        return false;
    }
    !(n >= 2 && word[n - 2] == b's')
}

/// Iterates `(position, letter index)` over the letters of `word` that count,
/// i.e. lowercase ASCII letters not excluded by the trailing-s rule.
pub fn counted_letters(word: &str) -> impl Iterator<Item = (usize, usize)> + '_ {
    let bytes = word.as_bytes();
    bytes.iter().enumerate().filter_map(move |(i, &b)| {
        if skip_trailing_s(bytes, i) {
            return None;
        }
        letter_index(b).map(|idx| (i, idx))
    })
}

/// Set of letters packed into the low 26 bits of a `u32`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LetterSet(u32);

impl LetterSet {
    pub fn new() -> Self {
        Self(0)
    }

    /// Marks `idx` as present; returns true if it was not present before.
    pub fn insert(&mut self, idx: usize) -> bool {
        let bit = 1u32 << idx;
        let fresh = self.0 & bit == 0;
        self.0 |= bit;
        fresh
    }

    pub fn contains(&self, idx: usize) -> bool {
        self.0 & (1u32 << idx) != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        (0..ALPHABET_SIZE).filter(move |&idx| self.contains(idx))
    }
}

/// Number of distinct counted letters in `word` (trailing-s rule applied).
pub fn unique_letter_count(word: &str) -> usize {
    let mut seen = LetterSet::new();
    for (_, idx) in counted_letters(word) {
        seen.insert(idx);
    }
    seen.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_trailing_s() {
        assert!(skip_trailing_s(b"fades", 4));
        assert!(!skip_trailing_s(b"bliss", 4));
        assert!(!skip_trailing_s(b"class", 4));
    }

    #[test]
    fn test_skip_trailing_s_only_applies_to_last_position() {
        assert!(!skip_trailing_s(b"fades", 3));
        assert!(!skip_trailing_s(b"snack", 0));
        assert!(!skip_trailing_s(b"apple", 4));
    }

    #[test]
    fn test_single_s_word_is_skipped() {
        assert!(skip_trailing_s(b"s", 0));
        assert!(!skip_trailing_s(b"", 0));
    }

    #[test]
    fn test_letter_index() {
        assert_eq!(letter_index(b'a'), Some(0));
        assert_eq!(letter_index(b'z'), Some(25));
        assert_eq!(letter_index(b'A'), None);
        assert_eq!(letter_index(b'-'), None);
    }

    #[test]
    fn test_counted_letters_drops_trailing_s() {
        let counted: Vec<_> = counted_letters("cats").collect();
        assert_eq!(counted, vec![(0, 2), (1, 0), (2, 19)]);
    }

    #[test]
    fn test_counted_letters_ignores_uppercase() {
        let counted: Vec<_> = counted_letters("Abc").collect();
        assert_eq!(counted, vec![(1, 1), (2, 2)]);
    }

    #[test]
    fn test_letter_set() {
        let mut set = LetterSet::new();
        assert!(set.is_empty());
        assert!(set.insert(3));
        assert!(!set.insert(3));
        assert!(set.insert(25));
        assert_eq!(set.len(), 2);
        assert!(set.contains(25));
        assert!(!set.contains(0));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![3, 25]);
    }

    #[test]
    fn test_unique_letter_count() {
        assert_eq!(unique_letter_count("apple"), 4);
        // trailing s excluded
        assert_eq!(unique_letter_count("fades"), 4);
        // double s kept
        assert_eq!(unique_letter_count("bliss"), 4);
        assert_eq!(unique_letter_count("sass"), 2);
    }
}
