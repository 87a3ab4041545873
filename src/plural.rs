/// Suffix heuristic for common English plural forms.
///
/// Favours precision over recall. A bare trailing 's' also catches
/// third-person verbs; that over-approximation is accepted since the result
/// only lowers a score and never removes a word.
pub fn is_likely_plural(word: &str) -> bool {
    if word.len() < 4 {
        return false;
    }
    // Singulars that share plural endings
    if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
        return false;
    }
    if word.ends_with("ies") || word.ends_with("ves") || word.ends_with("es") {
        return true;
    }
    word.ends_with('s')
}
