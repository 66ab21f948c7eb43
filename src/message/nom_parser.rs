//! Nom-based IRC line parser.
//!
//! Produces borrowed slices into the input line. Tags and prefix are kept
//! raw; the ISUPPORT tracker only needs the command and parameters.

use nom::{
    branch::alt,
    bytes::complete::{take_until, take_while1},
    character::complete::{char, space0, space1},
    combinator::{opt, verify},
    error::{context, VerboseError, VerboseErrorKind},
    multi::many0,
    sequence::preceded,
    IResult,
};

use crate::error::{MessageParseError, Result};

type ParseResult<I, O> = IResult<I, O, VerboseError<I>>;

/// Parse IRCv3 message tags (the part after `@` and before the first space).
fn parse_tags(input: &str) -> ParseResult<&str, &str> {
    context(
        "parsing IRCv3 message tags",
        preceded(char('@'), take_until(" ")),
    )(input)
}

/// Parse message prefix (the part after `:` and before the first space).
fn parse_prefix(input: &str) -> ParseResult<&str, &str> {
    context(
        "parsing message prefix",
        preceded(char(':'), take_while1(|c| c != ' ')),
    )(input)
}

/// Parse the command name: a word (`PRIVMSG`) or a numeric (`005`).
fn parse_command(input: &str) -> ParseResult<&str, &str> {
    context(
        "parsing IRC command",
        take_while1(|c: char| c.is_ascii_alphanumeric()),
    )(input)
}

fn parse_trailing(input: &str) -> ParseResult<&str, &str> {
    context(
        "parsing trailing parameter",
        preceded(char(':'), nom::combinator::rest),
    )(input)
}

fn parse_middle(input: &str) -> ParseResult<&str, &str> {
    context(
        "parsing middle parameter",
        verify(take_while1(|c: char| c != ' '), |p: &str| {
            !p.starts_with(':')
        }),
    )(input)
}

/// Parse a complete IRC line into its components.
///
/// ```text
/// [@tags] [:prefix] <command> [middle...] [:trailing]
/// ```
fn parse_message(input: &str) -> ParseResult<&str, ParsedLine<'_>> {
    let (input, tags) = context("parsing optional tags", opt(parse_tags))(input)?;
    let (input, _) = space0(input)?;

    let (input, prefix) = context("parsing optional prefix", opt(parse_prefix))(input)?;
    let (input, _) = space0(input)?;

    let (input, command) = context("parsing required command", parse_command)(input)?;

    let (input, params) = many0(preceded(space1, alt((parse_trailing, parse_middle))))(input)?;

    Ok((
        input,
        ParsedLine {
            tags,
            prefix,
            command,
            params,
        },
    ))
}

/// A parsed IRC line with borrowed string slices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ParsedLine<'a> {
    pub tags: Option<&'a str>,
    pub prefix: Option<&'a str>,
    pub command: &'a str,
    pub params: Vec<&'a str>,
}

impl<'a> ParsedLine<'a> {
    /// Parse a line that has already had its CR/LF terminator removed.
    pub fn parse(input: &'a str) -> Result<Self> {
        match parse_message(input) {
            Ok((_remaining, line)) => Ok(line),
            Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => Err(describe(input, &e)),
            Err(nom::Err::Incomplete(_)) => Err(MessageParseError::ParseContext {
                position: input.len(),
                context: "incomplete input".to_string(),
            }),
        }
    }
}

/// Report the innermost labelled failure, which names the piece being read.
fn describe(input: &str, err: &VerboseError<&str>) -> MessageParseError {
    let labelled = err.errors.iter().find_map(|(rest, kind)| match kind {
        VerboseErrorKind::Context(ctx) => Some((*rest, *ctx)),
        _ => None,
    });

    let (rest, ctx) = labelled.unwrap_or(("", "parsing IRC message"));
    MessageParseError::ParseContext {
        position: input.len() - rest.len(),
        context: ctx.to_string(),
    }
}
