//! Splits one line of graph text into whitespace-separated words.
//!
//! Whether a word is a valid vertex key depends on the key type, so the lexer
//! does not look inside words; that is left to the codec.

use logos::Logos;

use crate::document::{Span, Spanned};

#[derive(Logos, Debug, Clone, PartialEq, Eq, Hash)]
#[logos(skip r"\s+")]
pub enum Token<'src> {
    #[regex(r"[^\s]+", |lex| lex.slice())]
    Word(&'src str),
}

impl std::fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Word(word) => write!(f, "{}", word),
        }
    }
}

pub fn tokenize(line: &str) -> Vec<Spanned<Token>> {
    Token::lexer(line)
        .spanned()
        .filter_map(|(result, span)| {
            // Every run of non-whitespace is a word, so the lexer cannot fail.
            result.ok().map(|token| Spanned::new(token, Span::from(span)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words<'src>(tokens: &[Spanned<Token<'src>>]) -> Vec<&'src str> {
        tokens
            .iter()
            .map(|token| match token.value {
                Token::Word(word) => word,
            })
            .collect()
    }

    #[test]
    fn empty() {
        assert_eq!(tokenize(""), Vec::<Spanned<Token>>::new());
    }

    #[test]
    fn whitespace_only() {
        assert_eq!(tokenize(" \t \r"), Vec::<Spanned<Token>>::new());
    }

    #[test]
    fn single_word() {
        let tokens = tokenize("  42 ");
        assert_eq!(tokens, vec![Spanned::new(Token::Word("42"), Span::new(2, 4))]);
    }

    #[test]
    fn two_words() {
        let tokens = tokenize("a\tbc");
        assert_eq!(
            tokens,
            vec![
                Spanned::new(Token::Word("a"), Span::new(0, 1)),
                Spanned::new(Token::Word("bc"), Span::new(2, 4)),
            ]
        );
    }

    #[test]
    fn punctuation_stays_inside_words() {
        assert_eq!(words(&tokenize("x-1 y.2 -3")), vec!["x-1", "y.2", "-3"]);
    }
}
