use chumsky::{prelude::*, Stream};

use crate::document::{Span, Spanned};

use super::lexer::Token;

pub type ParseError<'src> = Simple<Token<'src>, Span>;

/// What a single line of graph text declares.
#[derive(Debug, Clone, PartialEq)]
pub enum Line<'src> {
    Blank,
    Vertex(Spanned<&'src str>),
    Edge(Spanned<&'src str>, Spanned<&'src str>),
}

/// Parses the tokens of one line. `width` is the length of the line, used to
/// place an error at its end.
pub fn parse<'src>(
    tokens: Vec<Spanned<Token<'src>>>,
    width: usize,
) -> Result<Line<'src>, Vec<ParseError<'src>>> {
    let end_of_line = Span::new(width, width + 1);
    let stream = Stream::from_iter(
        end_of_line,
        tokens
            .into_iter()
            .map(|Spanned { span, value }| (value, span)),
    );

    line_parser().parse(stream)
}

// line := ε | key | key key
fn line_parser<'src>() -> impl Parser<Token<'src>, Line<'src>, Error = ParseError<'src>> {
    key_parser()
        .then(key_parser().or_not())
        .or_not()
        .then_ignore(end())
        .map(|line| match line {
            None => Line::Blank,
            Some((key, None)) => Line::Vertex(key),
            Some((source, Some(target))) => Line::Edge(source, target),
        })
        .labelled("line")
}

fn key_parser<'src>() -> impl Parser<Token<'src>, Spanned<&'src str>, Error = ParseError<'src>> + Clone
{
    select! {
        Token::Word(word) => word,
    }
    .map_with_span(Spanned::new)
    .labelled("vertex key")
}
