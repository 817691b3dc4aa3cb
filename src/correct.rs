use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analyze::Corrector;
use crate::errors::{BoxedError, ModelLoadingError, ModelSavingError};
use crate::tokenizer::{tokenize, words, Token};
use crate::utils::uppercase_first_letter;

static ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz'";

/// Spelling correction model: word frequencies gathered from a corpus.
///
/// Feed it text with the `train_on_*` methods, then use `correct` to fix
/// misspellings. See [crate documentation](index.html) for examples.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct SpellingModel {
    frequencies: HashMap<String, u32>,
}

impl SpellingModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count the words of a training corpus file.
    pub fn train_on_file<P: AsRef<Path>>(&mut self, path: P) -> io::Result<&mut Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        for line in reader.lines() {
            self.train_on_text(&line?);
        }

        Ok(self)
    }

    /// Count the words of every string produced by an iterator.
    pub fn train_on_iter<I>(&mut self, iter: I) -> &mut Self
    where
        I: Iterator,
        I::Item: AsRef<str>,
    {
        for text in iter {
            self.train_on_text(text.as_ref());
        }

        self
    }

    /// Count the words of one piece of text, case-normalized.
    pub fn train_on_text(&mut self, text: &str) -> &mut Self {
        for token in words(text) {
            if token.has_digit() {
                continue;
            }

            // entry() would clone the word even when it's already counted
            let word = token.normalized.as_ref();
            if let Some(count) = self.frequencies.get_mut(word) {
                *count += 1;
                continue;
            }

            self.frequencies.insert(word.to_owned(), 1);
        }

        self
    }

    /// Save this model into a file with the given filename.
    /// The format is simple JSON right now.
    pub fn save_to_file(&self, filename: &str) -> Result<(), ModelSavingError> {
        let serialized = serde_json::to_string(&self)?;
        File::create(filename)?.write_all(serialized.as_bytes())?;

        Ok(())
    }

    /// Load a previously saved model from a file.
    pub fn load_from_file(filename: &str) -> Result<Self, ModelLoadingError> {
        let mut string = String::new();
        File::open(filename)?.read_to_string(&mut string)?;
        let model = serde_json::from_str(&string)?;

        Ok(model)
    }

    pub fn vocabulary_size(&self) -> usize {
        self.frequencies.len()
    }

    /// Fix misspellings in a text, keeping punctuation and spacing intact.
    ///
    /// Known words and words containing digits pass through unchanged. An
    /// unknown word is replaced by the most frequent known word within edit
    /// distance 1, then 2; with no candidate, the original stays. A
    /// replacement keeps the original's leading capital.
    pub fn correct(&self, text: &str) -> String {
        let mut result = String::with_capacity(text.len());

        for token in tokenize(text) {
            if !token.is_meaningful() || token.has_digit() {
                result.push_str(token.original);
                continue;
            }

            result.push_str(&self.correct_word(&token));
        }

        result
    }

    fn correct_word(&self, token: &Token) -> String {
        let word = token.normalized.as_ref();
        if self.frequencies.contains_key(word) {
            return token.original.to_owned();
        }

        let candidate = match self.best_candidate(word) {
            Some(candidate) => candidate,
            None => return token.original.to_owned(),
        };

        if token.original.starts_with(char::is_uppercase) {
            uppercase_first_letter(&candidate)
        } else {
            candidate
        }
    }

    fn best_candidate(&self, word: &str) -> Option<String> {
        let close = edits1(word);
        if let Some(found) = self.most_frequent(close.iter().cloned()) {
            return Some(found);
        }

        let further = close.iter().flat_map(|edit| edits1(edit));
        self.most_frequent(further)
    }

    fn most_frequent<I>(&self, candidates: I) -> Option<String>
    where
        I: Iterator<Item = String>,
    {
        candidates
            .filter_map(|candidate| {
                self.frequencies
                    .get(&candidate)
                    .map(|&count| (candidate, count))
            })
            .max_by_key(|&(_, count)| count)
            .map(|(candidate, _)| candidate)
    }
}

impl Corrector for SpellingModel {
    fn correct(&self, text: &str) -> Result<String, BoxedError> {
        Ok(SpellingModel::correct(self, text))
    }
}

/// Every string one delete, transpose, replace or insert away from the word.
fn edits1(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut edits = Vec::new();

    for i in 0..chars.len() {
        let mut deleted: String = chars[..i].iter().collect();
        deleted.extend(chars[i + 1..].iter());
        edits.push(deleted);
    }

    for i in 0..chars.len().saturating_sub(1) {
        let mut transposed = chars.clone();
        transposed.swap(i, i + 1);
        edits.push(transposed.into_iter().collect());
    }

    for i in 0..chars.len() {
        for letter in ALPHABET.chars() {
            if letter == chars[i] {
                continue;
            }
            let mut replaced: String = chars[..i].iter().collect();
            replaced.push(letter);
            replaced.extend(chars[i + 1..].iter());
            edits.push(replaced);
        }
    }

    for i in 0..=chars.len() {
        for letter in ALPHABET.chars() {
            let mut inserted: String = chars[..i].iter().collect();
            inserted.push(letter);
            inserted.extend(chars[i..].iter());
            edits.push(inserted);
        }
    }

    edits
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> SpellingModel {
        let mut model = SpellingModel::new();
        model.train_on_iter(
            [
                "the quick brown fox jumps over the lazy dog",
                "the product arrived quickly and works well",
                "spelling is hard",
            ]
            .iter(),
        );
        model
    }

    #[test]
    fn known_words_pass_through() {
        assert_eq!(model().correct("the quick fox"), "the quick fox");
    }

    #[test]
    fn transposed_letters_are_fixed() {
        assert_eq!(model().correct("teh quick borwn fox"), "the quick brown fox");
    }

    #[test]
    fn an_edit_distance_of_two_is_still_found() {
        assert_eq!(model().correct("quck"), "quick");
        assert_eq!(model().correct("qck"), "quick");
    }

    #[test]
    fn hopeless_words_are_left_alone() {
        assert_eq!(model().correct("xyzzyx"), "xyzzyx");
    }

    #[test]
    fn punctuation_and_spacing_survive() {
        assert_eq!(model().correct("teh fox, teh dog!"), "the fox, the dog!");
    }

    #[test]
    fn leading_capitals_are_restored() {
        assert_eq!(model().correct("Teh fox"), "The fox");
    }

    #[test]
    fn words_with_digits_are_skipped() {
        assert_eq!(model().correct("th3 fox"), "th3 fox");
    }

    #[test]
    fn the_most_frequent_candidate_wins() {
        // both "cat" and "cot" are one insert away from "ct"
        let mut model = SpellingModel::new();
        model.train_on_text("cat cat cat cot");
        assert_eq!(model.correct("ct"), "cat");
    }

    #[test]
    fn training_is_case_insensitive() {
        let mut model = SpellingModel::new();
        model.train_on_text("Spelling SPELLING spelling");
        assert_eq!(model.vocabulary_size(), 1);
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(model().correct(""), "");
    }
}
