#[macro_use]
extern crate assert_matches;

use std::io::Cursor;

use wordle_worst_case::alphabet::{self, ALL_LETTERS};
use wordle_worst_case::{load_dictionary, ConsistencyCache, Corpus, EncodedWord, Error};

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|word| word.to_string()).collect()
}

#[test]
fn test_letter_round_trip() {
    for letter in 'A'..='Z' {
        let code = alphabet::encode(letter).unwrap();
        assert_eq!(code.count_ones(), 1);
        assert_eq!(alphabet::decode(code), Some(letter));
    }
}

#[test]
fn test_invalid_letters_and_codes() {
    assert_eq!(alphabet::encode('a'), None);
    assert_eq!(alphabet::encode('1'), None);
    assert_eq!(alphabet::encode('É'), None);
    assert_eq!(alphabet::decode(0), None);
    assert_eq!(alphabet::decode(0b11), None);
    assert_eq!(alphabet::decode(1 << 26), None);
}

#[test]
fn test_mask_to_string() {
    let word = EncodedWord::encode("TRACE").unwrap();
    assert_eq!(alphabet::mask_to_string(word.presence()), "ACERT");
    assert_eq!(alphabet::mask_to_string(ALL_LETTERS).len(), 26);
    assert_eq!(alphabet::mask_to_string(0), "");
}

#[test]
fn test_encode_word() {
    let word = EncodedWord::encode("GEESE").unwrap();
    let decoded: String = word
        .positions()
        .iter()
        .map(|&code| alphabet::decode(code).unwrap())
        .collect();
    assert_eq!(decoded, "GEESE");
    assert_eq!(word.presence().count_ones(), 3);
    assert_eq!(word.to_string(), "GEESE");
}

#[test]
fn test_encode_rejects_invalid_character() {
    assert_matches!(
        EncodedWord::encode("CR4NE"),
        Err(Error::InvalidCharacter { character: '4', .. })
    );
    assert_matches!(
        EncodedWord::encode("crane"),
        Err(Error::InvalidCharacter { character: 'c', .. })
    );
}

#[test]
fn test_presence_is_or_of_positions() {
    let corpus = Corpus::new(words(&["CRANE", "GEESE", "FUZZY", "MAMMA"]), 2).unwrap();
    for (positions, &presence) in corpus.positional_matrix().iter().zip(corpus.presence_masks()) {
        assert_eq!(positions.iter().fold(0, |acc, code| acc | code), presence);
    }
}

#[test]
fn test_corpus_accessors() {
    let corpus = Corpus::new(words(&["CRANE", "SLATE", "TRACE", "FUZZY"]), 3).unwrap();
    assert_eq!(corpus.len(), 4);
    assert_eq!(corpus.num_solutions(), 3);
    assert_eq!(corpus.text(3).unwrap(), "FUZZY");
    assert_eq!(corpus.word(1).unwrap(), EncodedWord::encode("SLATE").unwrap());
    assert_eq!(corpus.presence(0).unwrap(), EncodedWord::encode("CRANE").unwrap().presence());
    assert_matches!(corpus.word(4), Err(Error::IndexOutOfRange { index: 4, len: 4 }));
    assert_matches!(corpus.text(9), Err(Error::IndexOutOfRange { index: 9, len: 4 }));
}

#[test]
fn test_corpus_find() {
    let corpus = Corpus::new(words(&["CRANE", "SLATE", "TRACE"]), 3).unwrap();
    assert_eq!(corpus.find("TRACE").unwrap(), Some(2));
    assert_eq!(corpus.find("slate").unwrap(), Some(1));
    assert_eq!(corpus.find("CRATE").unwrap(), None);
    assert_matches!(corpus.find("SL8TE"), Err(Error::InvalidCharacter { .. }));
}

#[test]
fn test_corpus_aggregate() {
    let corpus = Corpus::new(words(&["CRANE", "CRATE", "TOAST"]), 3).unwrap();
    let merged = corpus.aggregate(&[0, 1]).unwrap();
    assert_eq!(merged.to_string(), "CRA[NT]E");
    assert_eq!(corpus.aggregate(&[]).unwrap(), EncodedWord::default());
    assert_matches!(corpus.aggregate(&[0, 3]), Err(Error::IndexOutOfRange { index: 3, len: 3 }));
}

#[test]
fn test_solution_count_bounds() {
    assert_matches!(
        Corpus::new(words(&["CRANE", "SLATE"]), 3),
        Err(Error::SolutionCount { solutions: 3, words: 2 })
    );
    assert_matches!(
        Corpus::new(words(&["CRANE"]), 0),
        Err(Error::SolutionCount { solutions: 0, words: 1 })
    );
    assert_matches!(
        Corpus::new(words(&["CRANE", "SL!TE"]), 1),
        Err(Error::InvalidCharacter { character: '!', .. })
    );
}

#[test]
fn test_load_dictionary_filters_lines() {
    let input = "crane\nSlate\n\ntoo\ntoolong\nab1de\n  trace\nfuzzy\r\nmamma";
    let loaded = load_dictionary(Cursor::new(input)).unwrap();
    assert_eq!(loaded, words(&["CRANE", "SLATE", "FUZZY", "MAMMA"]));
}

#[test]
fn test_corpus_from_reader() {
    let corpus = Corpus::from_reader(Cursor::new("crane\nslate\n#comment\ntrace\n"), 2).unwrap();
    assert_eq!(corpus.len(), 3);
    assert_eq!(corpus.text(2).unwrap(), "TRACE");
}

#[test]
fn test_cache_candidates() {
    let corpus = Corpus::new(words(&["CRANE", "SLATE", "TRACE", "FUZZY"]), 3).unwrap();
    let cache = ConsistencyCache::build(&corpus);
    let letters = |text: &str| EncodedWord::encode(text).unwrap().presence();

    assert_eq!(cache.candidates(0), &[0, 1, 2, 3]);
    assert_eq!(cache.candidates(letters("AEEEE")), &[0, 1, 2]);
    assert_eq!(cache.candidates(letters("CRRRR")), &[0, 2]);
    assert_eq!(cache.candidates(letters("ZZZZZ")), &[3]);
    assert!(cache.candidates(letters("QQQQQ")).is_empty());
    assert!(cache.candidates(letters("CLLLL")).is_empty());
}
