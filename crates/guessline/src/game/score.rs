//! Guess scoring: position-exact matches first, then present-elsewhere
//! matches against the letters the first pass left over.

use std::collections::HashMap;

use guessline_widgets::board::LetterScore;

/// Score `attempt` against `word`, one [`LetterScore`] per attempt letter.
///
/// Duplicate letters are handled with a remaining-count map: every exact
/// match consumes one occurrence of its letter, and the second pass marks a
/// letter as present-elsewhere only while unconsumed occurrences remain.  So
/// guessing a letter twice when the word contains it once yields at most one
/// non-absent mark for it.
pub fn score_guess(word: &str, attempt: &str) -> Vec<LetterScore> {
    let word: Vec<char> = word.chars().collect();
    let attempt: Vec<char> = attempt.chars().collect();

    let mut result = vec![LetterScore::Absent; attempt.len()];
    let mut remaining: HashMap<char, usize> = HashMap::new();
    for &c in &word {
        *remaining.entry(c).or_insert(0) += 1;
    }

    for i in 0..attempt.len().min(word.len()) {
        if word[i] == attempt[i] {
            result[i] = LetterScore::Correct;
            if let Some(n) = remaining.get_mut(&attempt[i]) {
                *n -= 1;
            }
        }
    }

    for (i, c) in attempt.iter().enumerate() {
        if result[i] == LetterScore::Correct {
            continue;
        }
        if let Some(n) = remaining.get_mut(c) {
            if *n > 0 {
                *n -= 1;
                result[i] = LetterScore::Present;
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterScore::{Absent, Correct, Present};

    #[test]
    fn all_correct() {
        assert_eq!(
            score_guess("CRANE", "CRANE"),
            vec![Correct, Correct, Correct, Correct, Correct]
        );
    }

    #[test]
    fn none_correct() {
        assert_eq!(
            score_guess("CRANE", "LIGHT"),
            vec![Absent, Absent, Absent, Absent, Absent]
        );
    }

    #[test]
    fn present_letters_marked() {
        // E and A occur in CRANE but at other positions
        assert_eq!(
            score_guess("CRANE", "EARTH"),
            vec![Present, Present, Present, Absent, Absent]
        );
    }

    #[test]
    fn duplicate_guess_letter_consumes_single_occurrence() {
        // ALLEY vs LLAMA: the exact L at position 1 consumes one of the two
        // Ls, the leading L takes the other, and only one A can be present.
        assert_eq!(
            score_guess("ALLEY", "LLAMA"),
            vec![Present, Correct, Present, Absent, Absent]
        );
    }

    #[test]
    fn exact_match_consumes_before_present_pass() {
        // Word has one O, guessed twice with the second being exact:
        // the first O must not be marked present.
        assert_eq!(
            score_guess("ROBIN", "OOZES"),
            vec![Absent, Correct, Absent, Absent, Absent]
        );
    }

    #[test]
    fn repeated_word_letters_score_independently() {
        // LEVEE has E at positions 1, 3, and 4; guessing EEEEE marks those
        // exact and leaves no occurrence for the remaining two.
        assert_eq!(
            score_guess("LEVEE", "EEEEE"),
            vec![Absent, Correct, Absent, Correct, Correct]
        );
    }
}
