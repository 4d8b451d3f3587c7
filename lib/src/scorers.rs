use crate::data::*;
use std::collections::HashMap;
use std::sync::Arc;

/// Gives words a score, where the maximum score indicates the best guess.
///
/// [`Dictionary::recommend`](crate::Dictionary::recommend) uses the [`LetterFrequencyScorer`].
/// Any scorer can be used through
/// [`Dictionary::recommend_with`](crate::Dictionary::recommend_with).
pub trait WordScorer {
    /// Updates the scorer with the list of words that are still possible. This is called before
    /// scoring each time a word is recommended.
    fn update(&mut self, possible_words: &[Arc<str>]);
    /// Determines a score for the given word. The higher the score, the better the guess.
    fn score_word(&self, word: &str) -> i64;
}

/// Scores words by how common their letters are among the possible words, both at each location
/// and anywhere in the word. The score is computed for each letter and then summed:
///
/// * 1 point for every possible word with this letter in the same place.
/// * If this is the first time the letter appears in the word, 1 point for every possible word
///   that contains this letter anywhere. Each word is counted once, no matter how many times it
///   contains the letter.
///
/// Words that share the most letters with the other possible words split the remaining words into
/// the most evenly sized groups, so they tend to eliminate the most words.
///
/// ```
/// use wordle_pruner::Dictionary;
/// use wordle_pruner::scorers::LetterFrequencyScorer;
/// use wordle_pruner::scorers::WordScorer;
///
/// let dictionary = Dictionary::from_iterator(["alpha", "allot", "begot"]).unwrap();
/// let mut scorer = LetterFrequencyScorer::default();
/// scorer.update(&dictionary);
///
/// assert!(scorer.score_word("allot") > scorer.score_word("alpha"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct LetterFrequencyScorer {
    counter: WordCounter,
}

impl LetterFrequencyScorer {
    /// Constructs a `LetterFrequencyScorer` that is ready to score against the given words.
    pub fn new<S>(possible_words: &[S]) -> LetterFrequencyScorer
    where
        S: AsRef<str>,
    {
        LetterFrequencyScorer {
            counter: WordCounter::new(possible_words),
        }
    }
}

impl WordScorer for LetterFrequencyScorer {
    fn update(&mut self, possible_words: &[Arc<str>]) {
        self.counter = WordCounter::new(possible_words);
    }

    fn score_word(&self, word: &str) -> i64 {
        let mut sum = 0;
        for (index, letter) in word.chars().enumerate() {
            sum += self
                .counter
                .num_words_with_located_letter(&LocatedLetter::new(letter, index))
                as i64;
            if is_first_occurrence(word, index, letter) {
                sum += self.counter.num_words_with_letter(letter) as i64;
            }
        }
        sum
    }
}

const SCRABBLE_POINTS: [i64; 26] = [
    1, 3, 3, 2, 1, 4, 2, 4, 1, 8, 5, 1, 3, // a-m
    1, 1, 3, 10, 1, 1, 1, 1, 4, 4, 8, 4, 10, // n-z
];

/// Points for letters outside a-z.
const UNKNOWN_LETTER_POINTS: i64 = 10;

/// Scores words by Scrabble-style letter points, where common letters are worth fewer points.
/// Every repeat of a letter in the same word is worth one more point than the last.
///
/// The fewer points, the more common the word's letters, so the score is the negated point total.
/// This ignores the possible words entirely.
///
/// ```
/// use wordle_pruner::Dictionary;
/// use wordle_pruner::scorers::ScrabbleScorer;
///
/// let dictionary = Dictionary::from_iterator(["abc", "aba", "xyz"]).unwrap();
///
/// assert_eq!(
///     dictionary.recommend_with(&mut ScrabbleScorer).unwrap().as_ref(),
///     "aba"
/// );
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct ScrabbleScorer;

impl ScrabbleScorer {
    /// Returns the word's point total. Lower is better.
    pub fn points(word: &str) -> i64 {
        let mut repeats: HashMap<char, i64> = HashMap::new();
        word.chars()
            .map(|letter| {
                let base = if letter.is_ascii_lowercase() {
                    SCRABBLE_POINTS[(letter as u8 - b'a') as usize]
                } else {
                    UNKNOWN_LETTER_POINTS
                };
                let repeat = repeats.entry(letter).or_insert(0);
                let points = base + *repeat;
                *repeat += 1;
                points
            })
            .sum()
    }
}

impl WordScorer for ScrabbleScorer {
    fn update(&mut self, _possible_words: &[Arc<str>]) {}

    fn score_word(&self, word: &str) -> i64 {
        -ScrabbleScorer::points(word)
    }
}
