use crate::letters::{counted_letters, letter_index, LetterSet, ALPHABET_SIZE};
use tracing::debug;

/// Letter counts gathered from one pass over the corpus.
///
/// Both tables ignore a final 's' unless it follows another 's'.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyTables {
    /// `letters[l]`: number of words containing letter `l` at least once.
    pub letters: [u32; ALPHABET_SIZE],
    /// `positions[i][l]`: number of words with letter `l` at position `i`.
    pub positions: Vec<[u32; ALPHABET_SIZE]>,
    /// Corpus size the counts were taken over.
    pub total_words: usize,
}

impl FrequencyTables {
    /// Scans `words` once, building both tables for words of `length` letters.
    pub fn compute<S: AsRef<str>>(words: &[S], length: usize) -> Self {
        let mut letters = [0u32; ALPHABET_SIZE];
        let mut positions = vec![[0u32; ALPHABET_SIZE]; length];

        for word in words {
            let mut seen = LetterSet::new();
            for (i, idx) in counted_letters(word.as_ref()) {
                if let Some(slot) = positions.get_mut(i) {
                    slot[idx] += 1;
                    seen.insert(idx);
                }
            }
            // Presence, not occurrences: at most one per word
            for idx in seen.iter() {
                letters[idx] += 1;
            }
        }

        debug!(words = words.len(), length, "computed frequency tables");

        Self {
            letters,
            positions,
            total_words: words.len(),
        }
    }

    /// Presence count for `letter`; 0 for anything outside 'a'..='z'.
    pub fn letter_count(&self, letter: u8) -> u32 {
        letter_index(letter).map_or(0, |idx| self.letters[idx])
    }

    pub fn position_count(&self, position: usize, letter: u8) -> u32 {
        match (self.positions.get(position), letter_index(letter)) {
            (Some(slot), Some(idx)) => slot[idx],
            _ => 0,
        }
    }

    /// Global presence counts divided by corpus size.
    pub fn letter_probabilities(&self) -> [f64; ALPHABET_SIZE] {
        let n = self.total_words.max(1) as f64;
        self.letters.map(|count| count as f64 / n)
    }

    /// Positional counts divided by corpus size.
    pub fn position_probabilities(&self) -> Vec<[f64; ALPHABET_SIZE]> {
        let n = self.total_words.max(1) as f64;
        self.positions
            .iter()
            .map(|slot| slot.map(|count| count as f64 / n))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequencies_ignore_trailing_s() {
        let tables = FrequencyTables::compute(&["fades", "bliss", "aback"], 5);
        // only "bliss" contributes an 's'
        assert_eq!(tables.letter_count(b's'), 1);
        assert_eq!(tables.position_count(4, b's'), 1);
        assert_eq!(tables.position_count(3, b's'), 1);
    }

    #[test]
    fn test_trailing_s_word_still_counts_other_positions() {
        let tables = FrequencyTables::compute(&["fades"], 5);
        assert_eq!(tables.position_count(0, b'f'), 1);
        assert_eq!(tables.position_count(3, b'e'), 1);
        assert_eq!(tables.positions[4].iter().sum::<u32>(), 0);
        assert_eq!(tables.letters.iter().sum::<u32>(), 4);
    }

    #[test]
    fn test_global_counts_presence_not_occurrences() {
        let tables = FrequencyTables::compute(&["aback", "mamma"], 5);
        assert_eq!(tables.letter_count(b'a'), 2);
        assert_eq!(tables.letter_count(b'm'), 1);
        assert_eq!(tables.position_count(0, b'a'), 1);
        assert_eq!(tables.position_count(2, b'a'), 1);
        assert_eq!(tables.position_count(4, b'a'), 1);
    }

    #[test]
    fn test_table_invariants() {
        let words = ["crane", "slate", "fades", "bliss", "geese", "aback"];
        let tables = FrequencyTables::compute(&words, 5);
        for count in tables.letters {
            assert!(count as usize <= words.len());
        }
        for slot in &tables.positions {
            assert!(slot.iter().sum::<u32>() as usize <= words.len());
        }
    }

    #[test]
    fn test_probabilities_divide_by_corpus_size() {
        let tables = FrequencyTables::compute(&["crane", "crate"], 5);
        let letters = tables.letter_probabilities();
        assert_eq!(letters[(b'c' - b'a') as usize], 1.0);
        assert_eq!(letters[(b'n' - b'a') as usize], 0.5);
        let positions = tables.position_probabilities();
        assert_eq!(positions[3][(b't' - b'a') as usize], 0.5);
        assert_eq!(positions[3][(b'n' - b'a') as usize], 0.5);
    }

    #[test]
    fn test_uppercase_lookups_are_zero() {
        let tables = FrequencyTables::compute(&["Crane"], 5);
        assert_eq!(tables.letter_count(b'C'), 0);
        assert_eq!(tables.position_count(0, b'C'), 0);
        assert_eq!(tables.letter_count(b'r'), 1);
        assert_eq!(tables.position_count(9, b'r'), 0);
    }

    #[test]
    fn test_empty_corpus_has_zero_tables() {
        let tables = FrequencyTables::compute::<&str>(&[], 5);
        assert_eq!(tables.positions.len(), 5);
        assert!(tables.letters.iter().all(|&c| c == 0));
        assert!(tables.letter_probabilities().iter().all(|&p| p == 0.0));
    }
}
