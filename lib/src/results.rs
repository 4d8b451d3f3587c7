use std::collections::HashMap;
use std::fmt;
use std::io;
use std::result::Result;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The result of a given letter at a specific location.
#[derive(Debug, Eq, PartialEq, Hash, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LetterResult {
    /// The letter is in the objective word at this location.
    Correct,
    /// The letter is in the objective word, but somewhere else.
    PresentNotHere,
    /// The letter is not in the objective word, or every occurrence of it has already been
    /// accounted for by other positions in the guess.
    NotPresent,
}

impl fmt::Display for LetterResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LetterResult::Correct => write!(f, "✓"),
            LetterResult::PresentNotHere => write!(f, "⟷"),
            LetterResult::NotPresent => write!(f, "x"),
        }
    }
}

/// Indicates that an error occurred while narrowing down the possible words.
#[derive(Debug, Error)]
pub enum WordleError {
    /// A word or result list didn't have the expected length. Contains the expected length.
    #[error("words and results must have length {0}")]
    WordLength(usize),
    /// There are no possible words left, so nothing can be recommended.
    #[error("no possible words remain")]
    EmptyDictionary,
    /// The board with the given index has no possible words left.
    #[error("no possible words remain on board {0}")]
    EmptyBoard(usize),
    /// The number of results given didn't match the number of boards.
    #[error("expected results for {expected} boards, got {actual}")]
    BoardCount { expected: usize, actual: usize },
    /// A word contained a character that isn't a letter.
    #[error("unsupported character '{0}'")]
    UnsupportedCharacter(char),
    /// Reading words from a source failed.
    #[error("failed to read words")]
    Io(#[from] io::Error),
}

/// A submitted guess along with the result of each of its letters.
///
/// A `Guess` can only be built with a result for each letter, so the word and results always have
/// the same length.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Guess {
    word: Arc<str>,
    results: Vec<LetterResult>,
}

impl Guess {
    /// Constructs a guess from the guessed word and the result of each of its letters.
    ///
    /// The word is trimmed and converted to lower case.
    ///
    /// ```
    /// use wordle_pruner::Guess;
    /// use wordle_pruner::LetterResult;
    ///
    /// let guess = Guess::new(
    ///     "Cigar",
    ///     vec![
    ///         LetterResult::Correct,
    ///         LetterResult::PresentNotHere,
    ///         LetterResult::NotPresent,
    ///         LetterResult::PresentNotHere,
    ///         LetterResult::NotPresent,
    ///     ],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(guess.word(), "cigar");
    /// assert_eq!(guess.to_string(), "[c(✓)][i(⟷)][g(x)][a(⟷)][r(x)]");
    /// ```
    pub fn new(word: &str, results: Vec<LetterResult>) -> Result<Guess, WordleError> {
        let word = normalize_word(word)?;
        if word.chars().count() != results.len() {
            return Err(WordleError::WordLength(results.len()));
        }
        Ok(Guess { word, results })
    }

    /// The guessed word.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// The result for each letter, in the same order as the letters of the word.
    pub fn results(&self) -> &[LetterResult] {
        &self.results
    }

    /// The number of letters in the guess.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Returns `true` iff every letter was correct, i.e. the guess was the objective word.
    pub fn is_correct(&self) -> bool {
        self.results
            .iter()
            .all(|result| *result == LetterResult::Correct)
    }

    /// Returns `true` iff the given word could still be the objective word, meaning that guessing
    /// this word against it would have produced exactly these results.
    pub fn matches(&self, candidate: &str) -> bool {
        let guess_letters: Vec<char> = self.word.chars().collect();
        self.matches_letters(&guess_letters, candidate)
    }

    /// Same as [`Guess::matches`], but reuses the already split letters of this guess.
    pub(crate) fn matches_letters(&self, guess_letters: &[char], candidate: &str) -> bool {
        let objective: Vec<char> = candidate.chars().collect();
        objective.len() == guess_letters.len()
            && compute_results(&objective, guess_letters) == self.results
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (letter, result) in self.word.chars().zip(self.results.iter()) {
            write!(f, "[{}({})]", letter, result)?;
        }
        Ok(())
    }
}

/// Whether the game was won or lost by the guesser.
#[derive(Debug, Eq, PartialEq)]
pub enum GameResult {
    /// Indicates that the guesser won the game, and provides the guesses that were given.
    Success(Vec<Arc<str>>),
    /// Indicates that the guesser failed to guess the word, and provides the guesses that were given.
    Failure(Vec<Arc<str>>),
    /// Indicates that the given word was not in the dictionary.
    UnknownWord,
}

/// Determines the result of the given `guess` when applied to the given `objective`.
///
/// Letters in the right place are marked first, and each one uses up an occurrence of that letter
/// in the objective. Only the remaining occurrences can mark other letters as present, so a letter
/// guessed more times than it appears in the objective is marked `NotPresent` for the extras.
///
/// ```
/// use wordle_pruner::get_result_for_guess;
/// use wordle_pruner::LetterResult;
///
/// let result = get_result_for_guess("erase", "speed").unwrap();
/// assert_eq!(
///     result.results(),
///     &[
///         LetterResult::PresentNotHere,
///         LetterResult::NotPresent,
///         LetterResult::PresentNotHere,
///         LetterResult::PresentNotHere,
///         LetterResult::NotPresent,
///     ]
/// );
/// ```
pub fn get_result_for_guess(objective: &str, guess: &str) -> Result<Guess, WordleError> {
    let objective = normalize_word(objective)?;
    let guess = normalize_word(guess)?;
    let objective_letters: Vec<char> = objective.chars().collect();
    let guess_letters: Vec<char> = guess.chars().collect();
    if objective_letters.len() != guess_letters.len() {
        return Err(WordleError::WordLength(objective_letters.len()));
    }
    Ok(Guess {
        results: compute_results(&objective_letters, &guess_letters),
        word: guess,
    })
}

/// Computes the results of guessing `guess` when the answer is `objective`. Both must have the
/// same length.
pub(crate) fn compute_results(objective: &[char], guess: &[char]) -> Vec<LetterResult> {
    let mut unmatched_counts: HashMap<char, usize> = HashMap::new();
    let mut results = vec![LetterResult::NotPresent; guess.len()];
    for (index, (objective_letter, guess_letter)) in objective.iter().zip(guess).enumerate() {
        if objective_letter == guess_letter {
            results[index] = LetterResult::Correct;
        } else {
            *unmatched_counts.entry(*objective_letter).or_insert(0) += 1;
        }
    }
    for (index, letter) in guess.iter().enumerate() {
        if results[index] == LetterResult::Correct {
            continue;
        }
        if let Some(count) = unmatched_counts.get_mut(letter) {
            if *count > 0 {
                *count -= 1;
                results[index] = LetterResult::PresentNotHere;
            }
        }
    }
    results
}

/// Trims and lower-cases the word, and checks that it only contains letters.
pub(crate) fn normalize_word(word: &str) -> Result<Arc<str>, WordleError> {
    let word = word.trim();
    if let Some(bad_char) = word.chars().find(|letter| !letter.is_alphabetic()) {
        return Err(WordleError::UnsupportedCharacter(bad_char));
    }
    // Some letters lower-case to more than one char, e.g. 'İ' becomes "i\u{307}".
    if let Some(bad_char) = word
        .chars()
        .find(|letter| letter.to_lowercase().any(|lower| !lower.is_alphabetic()))
    {
        return Err(WordleError::UnsupportedCharacter(bad_char));
    }
    Ok(Arc::from(word.to_lowercase().as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compute_results_consumes_correct_letters_first() {
        let objective: Vec<char> = "abba".chars().collect();
        let guess: Vec<char> = "babb".chars().collect();

        assert_eq!(
            compute_results(&objective, &guess),
            vec![
                LetterResult::PresentNotHere,
                LetterResult::PresentNotHere,
                LetterResult::Correct,
                LetterResult::NotPresent,
            ]
        );
    }

    #[test]
    fn normalize_word_lower_cases_and_trims() {
        assert_eq!(&*normalize_word("  CiGaR \n").unwrap(), "cigar");
    }

    #[test]
    fn normalize_word_rejects_non_letters() {
        assert!(matches!(
            normalize_word("ci9ar"),
            Err(WordleError::UnsupportedCharacter('9'))
        ));
        assert!(matches!(
            normalize_word("ci ar"),
            Err(WordleError::UnsupportedCharacter(' '))
        ));
    }

    #[test]
    fn guess_display() {
        let guess = Guess::new(
            "abc",
            vec![
                LetterResult::Correct,
                LetterResult::PresentNotHere,
                LetterResult::NotPresent,
            ],
        )
        .unwrap();

        assert_eq!(guess.to_string(), "[a(✓)][b(⟷)][c(x)]");
    }
}
