use clap::{Parser, Subcommand, ValueEnum};
use log::{error, info};
use rand::seq::SliceRandom;
use std::collections::HashMap;
use std::error::Error;
use std::fs::File;
use std::io;
use std::time::Instant;
use wordle_pruner::scorers::{LetterFrequencyScorer, ScrabbleScorer, WordScorer};
use wordle_pruner::*;

const MULTI_BOARD_EXAMPLE: &str = "GBBYB BBYBB BBBBB GGYGB";
/// Solved boards still need a response of the right length.
const SOLVED_BOARD_EXAMPLE: &str = "BBBBB";

/// Narrows down the possible words in Wordle-style games and suggests what to guess next.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to a file that contains a list of possible words, with one word on each line.
    #[arg(short = 'f', long)]
    words_file: String,

    /// How to rank the possible words when choosing the next guess.
    #[arg(short, long, value_enum, default_value_t = ScorerKind::LetterFrequency)]
    scorer: ScorerKind,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Benchmark the solver against every word in the given words file.
    Benchmark,
    /// Run a single game with the given word, or a random word from the words file.
    Single { word: Option<String> },
    /// Suggest guesses for a game you are playing, narrowing down the words from the game's
    /// responses.
    Interactive {
        /// The number of boards played at once, e.g. 4 for Quordle.
        #[arg(short, long, default_value_t = 1)]
        boards: usize,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ScorerKind {
    /// Prefer words whose letters are common among the possible words.
    LetterFrequency,
    /// Prefer words with low Scrabble-style letter points.
    Scrabble,
}

impl ScorerKind {
    fn create(self) -> Box<dyn WordScorer> {
        match self {
            ScorerKind::LetterFrequency => Box::new(LetterFrequencyScorer::default()),
            ScorerKind::Scrabble => Box::new(ScrabbleScorer),
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let start_time = Instant::now();
    let args = Args::parse();
    info!("File: {}", args.words_file);

    let words_reader = io::BufReader::new(File::open(&args.words_file)?);
    let dictionary = Dictionary::from_reader(words_reader)?;
    info!("There are {} possible words.", dictionary.len());

    let mut scorer = args.scorer.create();
    match args.command {
        Command::Benchmark => run_benchmark(&dictionary, &mut *scorer)?,
        Command::Single { word } => play_single_game(word, &dictionary, &mut *scorer)?,
        Command::Interactive { boards } => {
            if boards == 0 {
                return Err("At least one board is needed.".into());
            }
            play_interactive_game(MultiBoard::new(dictionary, boards), &mut *scorer)?
        }
    }

    info!(
        "Command executed in {:.3}s.",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}

fn run_benchmark(dictionary: &Dictionary, scorer: &mut dyn WordScorer) -> Result<(), WordleError> {
    let mut num_guesses_per_game: Vec<u32> = Vec::new();
    for word in dictionary.iter() {
        match play_game(word, 128, dictionary, &mut *scorer)? {
            GameResult::Success(guesses) => num_guesses_per_game.push(guesses.len() as u32),
            other => error!("Failed to solve {}: {:?}", word, other),
        }
    }
    println!("Solved {} words. Results:", num_guesses_per_game.len());
    if num_guesses_per_game.is_empty() {
        return Ok(());
    }

    let mut num_games_per_round: HashMap<u32, u32> = HashMap::new();
    for num_guesses in num_guesses_per_game.iter() {
        *(num_games_per_round.entry(*num_guesses).or_insert(0)) += 1;
    }

    println!("|Num guesses|Num games|");
    println!("|-----------|---------|");
    let mut num_rounds: Vec<(u32, u32)> = num_games_per_round.into_iter().collect();
    num_rounds.sort_unstable();
    for (num_round, num_games) in num_rounds.iter() {
        println!("|{}|{}|", num_round, num_games);
    }

    let average: f64 = num_guesses_per_game.iter().sum::<u32>() as f64
        / num_guesses_per_game.len() as f64;
    let std_dev: f64 = (num_guesses_per_game
        .iter()
        .map(|num_guesses| (*num_guesses as f64 - average).powi(2))
        .sum::<f64>()
        / num_guesses_per_game.len() as f64)
        .sqrt();

    println!(
        "\n**Average number of guesses:** {:.2} +/- {:.2}",
        average, std_dev
    );
    Ok(())
}

fn play_single_game(
    word: Option<String>,
    dictionary: &Dictionary,
    scorer: &mut dyn WordScorer,
) -> Result<(), Box<dyn Error>> {
    let word = match word {
        Some(word) => word,
        None => match dictionary.choose(&mut rand::thread_rng()) {
            Some(word) => word.to_string(),
            None => return Err(WordleError::EmptyDictionary.into()),
        },
    };
    info!("Playing a game with {}", word);
    match play_game(&word, 128, dictionary, scorer)? {
        GameResult::Success(guesses) => {
            println!("Solved it! It took me {} guesses.", guesses.len());
            for guess in guesses.iter() {
                println!("\t{}", guess);
            }
        }
        GameResult::Failure(guesses) => {
            println!(
                "I still couldn't solve it after {} guesses :(",
                guesses.len()
            );
            for guess in guesses.iter() {
                println!("\t{}", guess);
            }
        }
        GameResult::UnknownWord => {
            error!("Given word not in the word list.");
            std::process::exit(1);
        }
    }
    Ok(())
}

fn play_interactive_game(
    mut board: MultiBoard,
    scorer: &mut dyn WordScorer,
) -> Result<(), Box<dyn Error>> {
    let num_boards = board.len();
    let mut found = vec![false; num_boards];

    println!(
        "Enter the game's response to each guess as:\n\n\
           * 'G'reen = this letter is in the word and in the right location\n\
           * 'Y'ellow = this letter is in the word, but not in this location\n\
           * 'B'lack = this letter is not in the word.\n\n\
         For example, if the word was \"spade\" and the guess was \"soapy\", you would enter \"GBGYB\"."
    );
    if num_boards > 1 {
        println!(
            "\nEnter one response per board, separated by spaces, in the same order every time, \
             e.g. \"{}\". Once a board is solved, enter any G/Y/B response for it, e.g. \"{}\".",
            MULTI_BOARD_EXAMPLE, SOLVED_BOARD_EXAMPLE
        );
    }

    let mut round = 1;
    loop {
        let guess = select_next_guess(&board, &found, &mut *scorer)?;
        println!("Try '{}'.", guess);

        let results = loop {
            match read_results(num_boards, guess.chars().count())? {
                Some(results) => break results,
                None => println!("Please try again."),
            }
        };

        for (index, board_results) in results.iter().enumerate() {
            if board_results
                .iter()
                .all(|result| *result == LetterResult::Correct)
            {
                found[index] = true;
            }
        }
        if found.iter().all(|is_found| *is_found) {
            println!("Solved! It took {} guesses.", round);
            return Ok(());
        }

        board = board.prune_all(&guess, &results)?;
        for (index, dictionary) in board.iter().enumerate() {
            info!(
                "Board {}: {} possible words remaining",
                index + 1,
                dictionary.len()
            );
            if dictionary.is_empty() {
                error!(
                    "Board {} has no more possible words. Sorry!",
                    index + 1
                );
                return Ok(());
            }
        }
        round += 1;
    }
}

/// Reads one line of responses from stdin. Returns `None` if the line was invalid.
fn read_results(
    num_boards: usize,
    word_length: usize,
) -> Result<Option<Vec<Vec<LetterResult>>>, io::Error> {
    let mut buffer = String::new();
    if io::stdin().read_line(&mut buffer)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "No more input.",
        ));
    }
    match parse_results(&buffer, num_boards, word_length) {
        Ok(results) => Ok(Some(results)),
        Err(err) => {
            println!("ERROR: {}", err);
            Ok(None)
        }
    }
}

/// Parses one "GYB" response per board, separated by whitespace.
fn parse_results(
    input: &str,
    num_boards: usize,
    word_length: usize,
) -> Result<Vec<Vec<LetterResult>>, io::Error> {
    let responses: Vec<&str> = input.split_whitespace().collect();
    if responses.len() != num_boards {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "Expected {} responses, received {}.",
                num_boards,
                responses.len()
            ),
        ));
    }
    responses
        .iter()
        .map(|response| {
            if response.chars().count() != word_length {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!(
                        "Response {} must be the same size as the guess ({} letters).",
                        response, word_length
                    ),
                ));
            }
            response
                .chars()
                .map(|code| match code.to_ascii_uppercase() {
                    'G' => Ok(LetterResult::Correct),
                    'Y' => Ok(LetterResult::PresentNotHere),
                    'B' => Ok(LetterResult::NotPresent),
                    _ => Err(io::Error::new(
                        io::ErrorKind::InvalidInput,
                        "Responses must only contain 'G', 'Y', or 'B'.",
                    )),
                })
                .collect::<Result<Vec<LetterResult>, io::Error>>()
        })
        .collect()
}
