use std::borrow::Cow;
use std::iter::Filter;

use lazy_static::lazy_static;
use regex::Regex;

use crate::utils::split_in_three;

pub(crate) type Tokens<'a> = Filter<Tokenizer<'a>, fn(&Token) -> bool>;

/// Split a text into word and separator tokens, dropping empty ones.
pub(crate) fn tokenize(text: &str) -> Tokens {
    let tokens = Tokenizer {
        string: text,
        next_token: None,
    };
    tokens.filter(|t| !t.is_empty())
}

/// Word tokens only, in text order.
pub(crate) fn words(text: &str) -> impl Iterator<Item = Token<'_>> {
    tokenize(text).filter(Token::is_meaningful)
}

lazy_static! {
    static ref WORD_SEPARATORS: Regex = Regex::new(r#"[,.?!¿¡:;()\[\]{}«»„“”"—\s]+"#).unwrap();
}

pub(crate) struct Tokenizer<'a> {
    next_token: Option<Token<'a>>,
    string: &'a str,
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(token) = self.next_token.take() {
            return Some(token);
        }

        if self.string.is_empty() {
            return None;
        }

        match WORD_SEPARATORS.find(self.string) {
            Some(mat) => {
                let (before, separator, rest) = split_in_three(self.string, mat.start(), mat.end());
                self.string = rest;
                self.next_token = Some(Token::new(separator, TokenKind::Separator));
                Some(Token::new(before, TokenKind::Word))
            }
            None => {
                let rest = self.string;
                self.string = "";
                Some(Token::new(rest, TokenKind::Word))
            }
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) enum TokenKind {
    Word,
    Separator,
}

#[derive(Debug, Clone)]
pub(crate) struct Token<'a> {
    pub original: &'a str,
    pub normalized: Cow<'a, str>,
    pub kind: TokenKind,
}

impl<'a> Token<'a> {
    pub fn new(original: &'a str, kind: TokenKind) -> Self {
        let normalized = if kind == TokenKind::Word && original.contains(char::is_uppercase) {
            Cow::Owned(original.to_lowercase())
        } else {
            Cow::Borrowed(original)
        };

        Self {
            original,
            normalized,
            kind,
        }
    }

    pub fn is_meaningful(&self) -> bool {
        self.kind == TokenKind::Word
    }

    pub fn is_empty(&self) -> bool {
        self.original.is_empty()
    }

    /// Tokens with digits are left alone by the spelling corrector.
    pub fn has_digit(&self) -> bool {
        self.original.chars().any(|c| c.is_ascii_digit())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_are_lowercased() {
        let normalized: Vec<_> = words("I LOVE this Product")
            .map(|token| token.normalized.into_owned())
            .collect();
        assert_eq!(normalized, vec!["i", "love", "this", "product"]);
    }

    #[test]
    fn tokens_reassemble_into_the_input() {
        let text = "Hello, world! ¿Qué tal? It's fine.";
        let reassembled: String = tokenize(text).map(|token| token.original).collect();
        assert_eq!(reassembled, text);
    }

    #[test]
    fn apostrophes_stay_inside_words() {
        let normalized: Vec<_> = words("it isn't bad")
            .map(|token| token.normalized.into_owned())
            .collect();
        assert_eq!(normalized, vec!["it", "isn't", "bad"]);
    }

    #[test]
    fn empty_text_has_no_tokens() {
        assert_eq!(tokenize("").count(), 0);
    }

    #[test]
    fn digit_detection() {
        let tokens: Vec<_> = words("room 101 is fine").collect();
        assert!(tokens[1].has_digit());
        assert!(!tokens[3].has_digit());
    }
}
