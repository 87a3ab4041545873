use crate::frequency::FrequencyTables;
use crate::letters::{counted_letters, unique_letter_count, LetterSet, ALPHABET_SIZE};
use crate::plural::is_likely_plural;

/// Multipliers combining the frequency signals into one score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    /// Applied to the sum of global presence probabilities of unique letters.
    pub letter: f64,
    /// Applied to the sum of positional probabilities.
    pub position: f64,
    /// Flat bonus per unique counted letter; 0 disables it.
    pub unique: f64,
    /// Subtracted from likely plurals; 0 disables it.
    pub plural_penalty: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            letter: 1.0,
            position: 1.0,
            unique: 0.0,
            plural_penalty: 0.75,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WordScore {
    pub word: String,
    pub score: f64,
}

/// Scores every word against the frequency tables.
///
/// ```text
/// score(w) = letter * sum_unique(letter_prob[l]) + position * sum_i(pos_prob[i][w[i]])
///          + unique * unique_letters(w) - plural_penalty * [plural(w)]
/// ```
pub fn score_words<S: AsRef<str>>(
    words: &[S],
    tables: &FrequencyTables,
    weights: &Weights,
) -> Vec<WordScore> {
    let scorer = Scorer::new(tables, *weights);
    words
        .iter()
        .map(|word| {
            let word = word.as_ref();
            WordScore {
                word: word.to_string(),
                score: scorer.score(word),
            }
        })
        .collect()
}

/// Probability tables plus weights, ready to score individual words.
pub struct Scorer {
    letter_prob: [f64; ALPHABET_SIZE],
    position_prob: Vec<[f64; ALPHABET_SIZE]>,
    weights: Weights,
}

impl Scorer {
    pub fn new(tables: &FrequencyTables, weights: Weights) -> Self {
        Self {
            letter_prob: tables.letter_probabilities(),
            position_prob: tables.position_probabilities(),
            weights,
        }
    }

    pub fn score(&self, word: &str) -> f64 {
        let mut seen = LetterSet::new();
        let mut letter_sum = 0.0;
        let mut position_sum = 0.0;

        for (i, idx) in counted_letters(word) {
            // repeated letters score positionally every time
            if let Some(slot) = self.position_prob.get(i) {
                position_sum += slot[idx];
            }
            if seen.insert(idx) {
                letter_sum += self.letter_prob[idx];
            }
        }

        let mut score = self.weights.letter * letter_sum + self.weights.position * position_sum;
        if self.weights.unique != 0.0 {
            score += self.weights.unique * unique_letter_count(word) as f64;
        }
        if self.weights.plural_penalty > 0.0 && is_likely_plural(word) {
            score -= self.weights.plural_penalty;
        }
        score
    }
}
