//! Narrows down the possible words in Wordle-style games from the results of each guess, and
//! recommends the next guess. Multi-board variants such as Quordle are supported through
//! [`MultiBoard`].
//!
//! ```
//! use wordle_pruner::get_result_for_guess;
//! use wordle_pruner::Dictionary;
//!
//! let dictionary = Dictionary::from_iterator(["cigar", "rebut", "sissy", "humph", "awake"]).unwrap();
//! let guess = dictionary.recommend().unwrap();
//!
//! // Pretend the objective word is "humph".
//! let result = get_result_for_guess("humph", &guess).unwrap();
//! let dictionary = dictionary.prune(&result).unwrap();
//!
//! assert!(dictionary.contains("humph"));
//! ```

mod data;
mod engine;
mod multi_board;
mod results;
pub mod scorers;

pub use data::Dictionary;
pub use data::LocatedLetter;
pub use data::WordCounter;
pub use engine::*;
pub use multi_board::MultiBoard;
pub use results::*;
