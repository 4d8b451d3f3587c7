#[cfg(test)]
mod tests {

    use std::error::Error;
    use std::fs::File;
    use std::io;

    use ron;
    use wordle_pruner::*;

    #[test]
    fn guess_serde() -> Result<(), Box<dyn Error>> {
        let guess = get_result_for_guess("erase", "speed")?;

        let ser = ron::to_string(&guess)?;
        let deser = ron::from_str::<Guess>(&ser)?;

        assert_eq!(deser, guess);
        assert!(deser.matches("erase"));
        Ok(())
    }

    #[test]
    fn dictionary_serde() -> Result<(), Box<dyn Error>> {
        let all_words = io::BufReader::new(File::open("../data/sample-words.txt")?);

        let dictionary = Dictionary::from_reader(all_words)?;
        // Assume the word is "crate".
        let dictionary = dictionary.prune(&get_result_for_guess("crate", "react")?)?;
        let recommended = dictionary.recommend()?;

        let ser = ron::to_string(&dictionary)?;
        let deser = ron::from_str::<Dictionary>(&ser)?;

        assert_eq!(deser, dictionary);
        assert_eq!(deser.recommend()?, recommended);
        Ok(())
    }

    #[test]
    fn multi_board_serde() -> Result<(), Box<dyn Error>> {
        let dictionary = Dictionary::from_iterator(["cigar", "rebut", "sissy", "humph"])?;
        let board = MultiBoard::new(dictionary, 4).prune_all(
            "cigar",
            &[
                vec![LetterResult::Correct; 5],
                vec![LetterResult::NotPresent; 5],
                vec![LetterResult::NotPresent; 5],
                vec![LetterResult::NotPresent; 5],
            ],
        )?;

        let ser = ron::to_string(&board)?;
        let deser = ron::from_str::<MultiBoard>(&ser)?;

        assert_eq!(deser, board);
        assert_eq!(deser.recommend_all()?, board.recommend_all()?);
        Ok(())
    }
}
