#[macro_use]
extern crate assert_matches;

use wordle_pruner::*;

use std::io::Cursor;
use std::result::Result;
use std::sync::Arc;

macro_rules! assert_arc_eq {
    ($arc_vec:expr, $non_arc_vec:expr) => {
        assert_eq!(
            $arc_vec as &[Arc<str>],
            $non_arc_vec
                .iter()
                .map(|thing| Arc::from(*thing))
                .collect::<Vec<Arc<_>>>()
        );
    };
}

const WORDS: [&str; 6] = ["alpha", "allot", "begot", "below", "endow", "ingot"];

fn results(codes: &str) -> Vec<LetterResult> {
    codes
        .chars()
        .map(|code| match code {
            'g' => LetterResult::Correct,
            'y' => LetterResult::PresentNotHere,
            _ => LetterResult::NotPresent,
        })
        .collect()
}

#[test]
fn dictionary_from_reader_succeeds() -> Result<(), WordleError> {
    let mut cursor = Cursor::new(String::from("\n\nworda\n wordb\n"));

    let dictionary = Dictionary::from_reader(&mut cursor)?;

    assert_eq!(dictionary.len(), 2);
    assert_arc_eq!(&dictionary, &["worda", "wordb"]);
    assert_eq!(dictionary.word_length(), 5);
    Ok(())
}

#[test]
fn dictionary_from_iterator_succeeds() -> Result<(), WordleError> {
    let dictionary = Dictionary::from_iterator(vec!["", "worda", "Wordb ", "WORDA"])?;

    assert_eq!(dictionary.len(), 2);
    assert_arc_eq!(&dictionary, &["worda", "wordb"]);
    assert_eq!(dictionary.word_length(), 5);
    Ok(())
}

#[test]
fn dictionary_from_string_iterator_succeeds() -> Result<(), WordleError> {
    let dictionary = Dictionary::from_iterator(vec![
        "".to_string(),
        "worda".to_string(),
        "Wordb ".to_string(),
    ])?;

    assert_arc_eq!(&dictionary, &["worda", "wordb"]);
    Ok(())
}

#[test]
fn dictionary_from_reader_mismatched_word_length_fails() {
    let mut cursor = Cursor::new(String::from("\nlongword\n   short\n"));

    assert_matches!(
        Dictionary::from_reader(&mut cursor),
        Err(WordleError::WordLength(8))
    );
}

#[test]
fn dictionary_from_iterator_unsupported_character_fails() {
    assert_matches!(
        Dictionary::from_iterator(["worda", "wor1d"]),
        Err(WordleError::UnsupportedCharacter('1'))
    );
}

#[test]
fn dictionary_from_iterator_multi_char_lower_case_fails() {
    assert_matches!(
        Dictionary::from_iterator(["İabcd", "abcde"]),
        Err(WordleError::UnsupportedCharacter('İ'))
    );
}

#[test]
fn word_counter_long_words() {
    let first = "b".to_string() + &"a".repeat(256);
    let second = "a".repeat(256) + "b";
    let counter = WordCounter::new(&[first, second]);

    assert_eq!(
        counter.num_words_with_located_letter(&LocatedLetter::new('b', 0)),
        1
    );
    assert_eq!(
        counter.num_words_with_located_letter(&LocatedLetter::new('b', 256)),
        1
    );
    assert_eq!(
        counter.num_words_with_located_letter(&LocatedLetter::new('a', 0)),
        1
    );
}

#[test]
fn empty_dictionary() -> Result<(), WordleError> {
    let dictionary = Dictionary::from_iterator(Vec::<String>::new())?;

    assert!(dictionary.is_empty());
    assert_eq!(dictionary.word_length(), 0);
    assert_matches!(dictionary.recommend(), Err(WordleError::EmptyDictionary));
    Ok(())
}

#[test]
fn prune_first_letter_known() -> Result<(), WordleError> {
    let dictionary = Dictionary::from_iterator(["cigar", "rebut", "sissy", "humph", "awake"])?;

    // Only "cigar" starts with 'c', and it would have been all correct.
    let pruned = dictionary.prune(&Guess::new("cigar", results("gbbbb"))?)?;

    assert!(pruned.is_empty());
    assert_matches!(pruned.recommend(), Err(WordleError::EmptyDictionary));
    Ok(())
}

#[test]
fn prune_no_letters_present() -> Result<(), WordleError> {
    let dictionary = Dictionary::from_iterator(["cigar", "rebut", "sissy", "humph", "awake"])?;

    let pruned = dictionary.prune(&Guess::new("cigar", results("bbbbb"))?)?;

    assert_arc_eq!(&pruned, &["humph"]);
    assert!(pruned.is_solved());
    assert_eq!(pruned.recommend()?.as_ref(), "humph");
    // The original is untouched.
    assert_eq!(dictionary.len(), 5);
    Ok(())
}

#[test]
fn prune_mismatched_word_length_fails() -> Result<(), WordleError> {
    let dictionary = Dictionary::from_iterator(WORDS)?;

    assert_matches!(
        dictionary.prune(&Guess::new("cigars", results("bbbbbb"))?),
        Err(WordleError::WordLength(5))
    );
    Ok(())
}

#[test]
fn prune_to_single_word() -> Result<(), WordleError> {
    let dictionary = Dictionary::from_iterator(WORDS)?;

    let pruned = dictionary.prune(&get_result_for_guess("endow", "begot")?)?;

    assert_arc_eq!(&pruned, &["endow"]);
    Ok(())
}

#[test]
fn prune_order_does_not_matter() -> Result<(), WordleError> {
    let dictionary = Dictionary::from_iterator(WORDS)?;
    let first = Guess::new("other", results("ybbyb"))?;
    let second = Guess::new("bxxxx", results("bbbbb"))?;

    let forward = dictionary.prune(&first)?.prune(&second)?;
    let backward = dictionary.prune(&second)?.prune(&first)?;

    assert_arc_eq!(&forward, &["endow"]);
    assert_eq!(forward, backward);
    Ok(())
}

#[test]
fn prune_never_removes_objective() -> Result<(), WordleError> {
    let dictionary = Dictionary::from_iterator(WORDS)?;

    for objective in WORDS {
        for guess in WORDS.iter().chain(["other", "zzzzz", "lolly"].iter()) {
            let pruned = dictionary.prune(&get_result_for_guess(objective, guess)?)?;

            assert!(
                pruned.contains(objective),
                "{} was removed by {}",
                objective,
                guess
            );
            assert!(pruned.len() <= dictionary.len());
        }
    }
    Ok(())
}

#[test]
fn recommend_chooses_best_word() -> Result<(), WordleError> {
    let dictionary = Dictionary::from_iterator(WORDS)?;

    assert_eq!(dictionary.recommend()?.as_ref(), "begot");
    Ok(())
}

#[test]
fn recommend_ties_go_to_first_word() -> Result<(), WordleError> {
    let dictionary = Dictionary::from_iterator(["below", "endow"])?;
    let reversed = Dictionary::from_iterator(["endow", "below"])?;

    assert_eq!(dictionary.recommend()?.as_ref(), "below");
    assert_eq!(reversed.recommend()?.as_ref(), "endow");
    Ok(())
}
