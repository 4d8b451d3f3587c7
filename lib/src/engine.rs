use crate::data::Dictionary;
use crate::multi_board::MultiBoard;
use crate::results::*;
use crate::scorers::WordScorer;
use log::debug;
use std::result::Result;
use std::sync::Arc;

/// Attempts to guess the given word within the maximum number of guesses, recommending each guess
/// from the words that are still possible.
///
/// ```
/// use wordle_pruner::Dictionary;
/// use wordle_pruner::GameResult;
/// use wordle_pruner::play_game;
/// use wordle_pruner::scorers::LetterFrequencyScorer;
///
/// let dictionary = Dictionary::from_iterator(["alpha", "allot", "begot", "below"]).unwrap();
///
/// let result =
///     play_game("below", 6, &dictionary, &mut LetterFrequencyScorer::default()).unwrap();
///
/// assert!(matches!(result, GameResult::Success(_)));
/// ```
pub fn play_game<S>(
    objective: &str,
    max_num_guesses: u32,
    dictionary: &Dictionary,
    scorer: &mut S,
) -> Result<GameResult, WordleError>
where
    S: WordScorer + ?Sized,
{
    if !dictionary.contains(objective) {
        return Ok(GameResult::UnknownWord);
    }
    let mut possible_words = dictionary.clone();
    let mut guesses: Vec<Arc<str>> = Vec::new();
    for _ in 1..=max_num_guesses {
        let guess = possible_words.recommend_with(&mut *scorer)?;
        guesses.push(Arc::clone(&guess));
        let result = get_result_for_guess(objective, &guess)?;
        if result.is_correct() {
            return Ok(GameResult::Success(guesses));
        }
        possible_words = possible_words.prune(&result)?;
    }
    Ok(GameResult::Failure(guesses))
}

/// Attempts to guess every objective word, one per board, within the maximum number of guesses.
///
/// Each guess is chosen with [`select_next_guess`].
pub fn play_multi_board_game<S>(
    objectives: &[&str],
    max_num_guesses: u32,
    board: &MultiBoard,
    scorer: &mut S,
) -> Result<GameResult, WordleError>
where
    S: WordScorer + ?Sized,
{
    if objectives.len() != board.len() {
        return Err(WordleError::BoardCount {
            expected: board.len(),
            actual: objectives.len(),
        });
    }
    if board
        .iter()
        .zip(objectives)
        .any(|(dictionary, objective)| !dictionary.contains(objective))
    {
        return Ok(GameResult::UnknownWord);
    }
    let mut board = board.clone();
    let mut found = vec![false; objectives.len()];
    let mut guesses: Vec<Arc<str>> = Vec::new();
    for _ in 1..=max_num_guesses {
        let guess = select_next_guess(&board, &found, &mut *scorer)?;
        guesses.push(Arc::clone(&guess));

        let mut all_results = Vec::with_capacity(objectives.len());
        for (index, objective) in objectives.iter().enumerate() {
            let result = get_result_for_guess(objective, &guess)?;
            if result.is_correct() {
                debug!("Found board {} with {}", index, guess);
                found[index] = true;
            }
            all_results.push(result.results().to_vec());
        }
        if found.iter().all(|is_found| *is_found) {
            return Ok(GameResult::Success(guesses));
        }
        board = board.prune_all(&guess, &all_results)?;
    }
    Ok(GameResult::Failure(guesses))
}

/// Chooses the next word to play on all boards. `found` marks the boards whose word has already
/// been guessed.
///
/// A board whose word is known but hasn't been guessed yet is guessed first; otherwise the guess
/// comes from [`MultiBoard::recommend_shared_with`].
pub fn select_next_guess<S>(
    board: &MultiBoard,
    found: &[bool],
    scorer: &mut S,
) -> Result<Arc<str>, WordleError>
where
    S: WordScorer + ?Sized,
{
    if found.len() != board.len() {
        return Err(WordleError::BoardCount {
            expected: board.len(),
            actual: found.len(),
        });
    }
    let known_unguessed = board
        .iter()
        .zip(found)
        .find(|(dictionary, is_found)| !**is_found && dictionary.is_solved())
        .map(|(dictionary, _)| Arc::clone(&dictionary[0]));
    match known_unguessed {
        Some(word) => Ok(word),
        None => board.recommend_shared_with(scorer),
    }
}
