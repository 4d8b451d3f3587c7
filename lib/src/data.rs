use crate::results::*;
use crate::scorers::LetterFrequencyScorer;
use crate::scorers::WordScorer;
use log::debug;
use log::trace;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::collections::HashSet;
use std::io::BufRead;
use std::ops::Deref;
use std::result::Result;
use std::sync::Arc;

/// A letter along with its location in the word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LocatedLetter {
    pub letter: char,
    /// The zero-based location (i.e. index) for this letter in a word.
    pub location: usize,
}

impl LocatedLetter {
    pub fn new(letter: char, location: usize) -> LocatedLetter {
        LocatedLetter { letter, location }
    }
}

/// The words that could still be the objective word, in the order they were given.
///
/// All words have the same length. Pruning never modifies a dictionary, it returns a new one, so a
/// dictionary can be kept around and reused across games.
///
/// ```
/// use wordle_pruner::Dictionary;
/// use wordle_pruner::Guess;
/// use wordle_pruner::LetterResult;
///
/// let dictionary = Dictionary::from_iterator(["cigar", "rebut", "humph"]).unwrap();
/// let guess = Guess::new("cigar", vec![LetterResult::NotPresent; 5]).unwrap();
///
/// let pruned = dictionary.prune(&guess).unwrap();
///
/// assert_eq!(pruned.len(), 1);
/// assert_eq!(pruned.recommend().unwrap().as_ref(), "humph");
/// assert_eq!(dictionary.len(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dictionary {
    words: Vec<Arc<str>>,
    word_length: usize,
}

impl Dictionary {
    /// Constructs a new `Dictionary` by reading words from the given reader.
    ///
    /// The reader should provide one word per line. Each word will be trimmed and converted to
    /// lower case. Empty lines are skipped, and repeated words are only kept once.
    pub fn from_reader<R: BufRead>(word_reader: R) -> Result<Self, WordleError> {
        let words = word_reader.lines().collect::<Result<Vec<String>, _>>()?;
        Dictionary::from_iterator(words)
    }

    /// Constructs a new `Dictionary` using the words from the given iterator.
    ///
    /// Each word will be trimmed and converted to lower case. Empty words are skipped, and
    /// repeated words are only kept once. All remaining words must have the same length as the
    /// first.
    pub fn from_iterator<S>(words: impl IntoIterator<Item = S>) -> Result<Self, WordleError>
    where
        S: AsRef<str>,
    {
        let mut seen: HashSet<Arc<str>> = HashSet::new();
        let mut all_words: Vec<Arc<str>> = Vec::new();
        let mut word_length = 0;
        for word in words {
            let word = normalize_word(word.as_ref())?;
            let length = word.chars().count();
            if length == 0 {
                continue;
            }
            if word_length == 0 {
                word_length = length;
            } else if length != word_length {
                return Err(WordleError::WordLength(word_length));
            }
            if seen.insert(Arc::clone(&word)) {
                all_words.push(word);
            }
        }
        Ok(Dictionary {
            words: all_words,
            word_length,
        })
    }

    /// Returns the number of possible words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` iff no words remain, which means the guesses so far contradict each other or
    /// the objective word was never in the dictionary.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns `true` iff exactly one word remains.
    pub fn is_solved(&self) -> bool {
        self.words.len() == 1
    }

    /// Returns the length of every word in the dictionary, or 0 if it was built without any words.
    pub fn word_length(&self) -> usize {
        self.word_length
    }

    /// Returns `true` iff the given word is still possible.
    pub fn contains(&self, word: &str) -> bool {
        let word = word.trim().to_lowercase();
        self.words.iter().any(|possible| possible.as_ref() == word)
    }

    /// Returns a dictionary containing only the words that could produce the given guess's
    /// results, were they the objective word. The words keep their relative order.
    pub fn prune(&self, guess: &Guess) -> Result<Dictionary, WordleError> {
        if guess.len() != self.word_length {
            return Err(WordleError::WordLength(self.word_length));
        }
        let guess_letters: Vec<char> = guess.word().chars().collect();
        let words: Vec<Arc<str>> = self
            .words
            .iter()
            .filter(|word| guess.matches_letters(&guess_letters, word))
            .map(Arc::clone)
            .collect();
        debug!(
            "Pruned with {}: {} -> {} possible words",
            guess,
            self.words.len(),
            words.len()
        );
        Ok(Dictionary {
            words,
            word_length: self.word_length,
        })
    }

    /// Applies each of the guesses in turn.
    pub fn prune_all<'a>(
        &self,
        guesses: impl IntoIterator<Item = &'a Guess>,
    ) -> Result<Dictionary, WordleError> {
        let mut dictionary = self.clone();
        for guess in guesses {
            dictionary = dictionary.prune(guess)?;
        }
        Ok(dictionary)
    }

    /// Returns the most promising next guess, as ranked by the [`LetterFrequencyScorer`].
    pub fn recommend(&self) -> Result<Arc<str>, WordleError> {
        self.recommend_with(&mut LetterFrequencyScorer::default())
    }

    /// Returns the possible word with the highest score from the given scorer. Ties go to the
    /// earliest word.
    pub fn recommend_with<S>(&self, scorer: &mut S) -> Result<Arc<str>, WordleError>
    where
        S: WordScorer + ?Sized,
    {
        if self.words.is_empty() {
            return Err(WordleError::EmptyDictionary);
        }
        if self.is_solved() {
            return Ok(Arc::clone(&self.words[0]));
        }
        scorer.update(&self.words);
        let mut best: Option<(&Arc<str>, i64)> = None;
        for word in &self.words {
            let score = scorer.score_word(word);
            trace!("Scored {}: {}", word, score);
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((word, score));
            }
        }
        let (word, score) = best.ok_or(WordleError::EmptyDictionary)?;
        debug!(
            "Recommending {} (score {}) out of {} possible words",
            word,
            score,
            self.words.len()
        );
        Ok(Arc::clone(word))
    }
}

impl Deref for Dictionary {
    type Target = [Arc<str>];

    fn deref(&self) -> &Self::Target {
        &self.words
    }
}

/// Counts the number of words that have letters in certain locations.
#[derive(Clone, Debug, Default)]
pub struct WordCounter {
    num_words: u32,
    num_words_by_ll: HashMap<LocatedLetter, u32>,
    num_words_by_letter: HashMap<char, u32>,
}

impl WordCounter {
    /// Creates a new word counter based on the given word list.
    pub fn new<S>(words: &[S]) -> WordCounter
    where
        S: AsRef<str>,
    {
        let mut num_words_by_ll: HashMap<LocatedLetter, u32> = HashMap::new();
        let mut num_words_by_letter: HashMap<char, u32> = HashMap::new();
        for word in words {
            let word = word.as_ref();
            for (index, letter) in word.chars().enumerate() {
                *num_words_by_ll
                    .entry(LocatedLetter::new(letter, index))
                    .or_insert(0) += 1;
                if is_first_occurrence(word, index, letter) {
                    *num_words_by_letter.entry(letter).or_insert(0) += 1;
                }
            }
        }
        WordCounter {
            num_words: words.len() as u32,
            num_words_by_ll,
            num_words_by_letter,
        }
    }

    /// Returns the number of words that were counted.
    pub fn num_words(&self) -> u32 {
        self.num_words
    }

    /// Retrieves the count of words with the given letter at the given location.
    pub fn num_words_with_located_letter(&self, ll: &LocatedLetter) -> u32 {
        *self.num_words_by_ll.get(ll).unwrap_or(&0)
    }

    /// Retrieves the count of words that contain the given letter.
    pub fn num_words_with_letter(&self, letter: char) -> u32 {
        *self.num_words_by_letter.get(&letter).unwrap_or(&0)
    }
}

/// Returns `true` iff `letter` at `index` is its first appearance in `word`. Indices are counted
/// in chars.
pub(crate) fn is_first_occurrence(word: &str, index: usize, letter: char) -> bool {
    word.chars()
        .take(index)
        .all(|other_letter| other_letter != letter)
}
