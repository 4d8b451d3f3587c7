use crate::data::Dictionary;
use crate::results::*;
use crate::scorers::LetterFrequencyScorer;
use crate::scorers::WordScorer;
use log::debug;
use rayon::prelude::*;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::result::Result;
use std::sync::Arc;

/// Tracks the possible words for several boards that are played at the same time, such as the
/// four boards of Quordle. Every guess is played on all boards, but each board has its own
/// objective word, and so its own results.
///
/// Boards never share information: each one is pruned only by its own results, and
/// recommendations for a board only consider that board's possible words.
///
/// ```
/// use wordle_pruner::Dictionary;
/// use wordle_pruner::LetterResult;
/// use wordle_pruner::MultiBoard;
///
/// let dictionary = Dictionary::from_iterator(["cigar", "rebut", "humph"]).unwrap();
/// let board = MultiBoard::new(dictionary, 2);
///
/// let board = board
///     .prune_all(
///         "cigar",
///         &[
///             vec![LetterResult::Correct; 5],
///             vec![LetterResult::NotPresent; 5],
///         ],
///     )
///     .unwrap();
///
/// let recommended: Vec<String> = board
///     .recommend_all()
///     .unwrap()
///     .iter()
///     .map(|word| word.to_string())
///     .collect();
/// assert_eq!(recommended, vec!["cigar", "humph"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MultiBoard {
    boards: Vec<Dictionary>,
}

impl MultiBoard {
    /// Constructs `num_boards` boards that all start from the given dictionary.
    pub fn new(dictionary: Dictionary, num_boards: usize) -> MultiBoard {
        MultiBoard {
            boards: vec![dictionary; num_boards],
        }
    }

    /// Constructs a `MultiBoard` from already known possible words for each board.
    pub fn from_boards(boards: Vec<Dictionary>) -> MultiBoard {
        MultiBoard { boards }
    }

    /// Returns the number of boards.
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    /// Returns the possible words for the board with the given index.
    pub fn board(&self, index: usize) -> Option<&Dictionary> {
        self.boards.get(index)
    }

    /// Iterates over the possible words of each board, in board order.
    pub fn iter(&self) -> impl Iterator<Item = &Dictionary> {
        self.boards.iter()
    }

    /// Returns `true` iff every board has exactly one possible word left.
    pub fn is_solved(&self) -> bool {
        self.boards.iter().all(Dictionary::is_solved)
    }

    /// Applies the results of guessing `word` on every board. `results` must contain one entry per
    /// board, in board order.
    ///
    /// Boards that are already solved are kept as they are, whatever results they are given.
    pub fn prune_all(
        &self,
        word: &str,
        results: &[Vec<LetterResult>],
    ) -> Result<MultiBoard, WordleError> {
        if results.len() != self.boards.len() {
            return Err(WordleError::BoardCount {
                expected: self.boards.len(),
                actual: results.len(),
            });
        }
        let guesses = results
            .iter()
            .map(|board_results| Guess::new(word, board_results.clone()))
            .collect::<Result<Vec<Guess>, WordleError>>()?;
        let boards = self
            .boards
            .par_iter()
            .zip(guesses.par_iter())
            .enumerate()
            .map(|(index, (board, guess))| {
                if board.is_solved() {
                    debug!("Board {} is already solved", index);
                    if guess.len() != board.word_length() {
                        return Err(WordleError::WordLength(board.word_length()));
                    }
                    return Ok(board.clone());
                }
                board.prune(guess)
            })
            .collect::<Result<Vec<Dictionary>, WordleError>>()?;
        Ok(MultiBoard { boards })
    }

    /// Returns the recommended word for each board, in board order, as ranked by the
    /// [`LetterFrequencyScorer`]. Solved boards recommend their only word.
    pub fn recommend_all(&self) -> Result<Vec<Arc<str>>, WordleError> {
        self.recommend_all_with(&mut LetterFrequencyScorer::default())
    }

    /// Same as [`MultiBoard::recommend_all`], using the given scorer for every board.
    pub fn recommend_all_with<S>(&self, scorer: &mut S) -> Result<Vec<Arc<str>>, WordleError>
    where
        S: WordScorer + ?Sized,
    {
        self.boards
            .iter()
            .enumerate()
            .map(|(index, board)| {
                board.recommend_with(&mut *scorer).map_err(|err| match err {
                    WordleError::EmptyDictionary => WordleError::EmptyBoard(index),
                    other => other,
                })
            })
            .collect()
    }

    /// Returns a single word to guess next on all boards. The word is recommended from the
    /// unsolved board with the fewest possible words, as that board is the closest to being
    /// solved.
    ///
    /// Fails with [`WordleError::EmptyDictionary`] if no board is left to solve.
    pub fn recommend_shared(&self) -> Result<Arc<str>, WordleError> {
        self.recommend_shared_with(&mut LetterFrequencyScorer::default())
    }

    /// Same as [`MultiBoard::recommend_shared`], using the given scorer.
    pub fn recommend_shared_with<S>(&self, scorer: &mut S) -> Result<Arc<str>, WordleError>
    where
        S: WordScorer + ?Sized,
    {
        let (index, board) = self
            .boards
            .iter()
            .enumerate()
            .filter(|(_, board)| board.len() > 1)
            .min_by_key(|(_, board)| board.len())
            .ok_or(WordleError::EmptyDictionary)?;
        debug!(
            "Recommending from board {} with {} possible words",
            index,
            board.len()
        );
        board.recommend_with(scorer)
    }
}
