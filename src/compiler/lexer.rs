use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use super::tokens::{Token, TokenKind};

#[derive(Debug, Clone, PartialEq, Error)]
#[error("Unexpected token at {offset}: {remainder}")]
pub struct LexError {
    pub remainder: String,
    pub offset: usize,
}

// alternatives are tried left to right, so group order is token priority
static TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?xi)
        ^(?:
            (?P<Keyword> draw|circle|rectangle|line|at|radius|width|height|color|from|to) |
            (?P<Number> -?[0-9]+(?:\.[0-9]+)?) |
            (?P<Color> red|green|blue|yellow|black|white|purple|orange|gray|\#[0-9a-f]{6}) |
            (?P<Symbol> [(),]) |
            (?P<WhiteSpace> \s+)
        )"
    ).unwrap()
});

const KINDS: [(&str, TokenKind); 4] = [
    ("Keyword", TokenKind::Keyword),
    ("Number", TokenKind::Number),
    ("Color", TokenKind::Color),
    ("Symbol", TokenKind::Symbol),
];

pub fn tokenize(text: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens: Vec<Token> = vec![];
    let mut offset = 0;

    while offset < text.len() {
        let remaining = &text[offset..];

        let Some(captures) = TOKEN_REGEX.captures(remaining) else {
            return Err(LexError { remainder: remaining.to_string(), offset });
        };

        for (group, kind) in KINDS {
            if let Some(matched) = captures.name(group) {
                tokens.push(Token::new(kind, matched.as_str()));
                break;
            }
        }

        // group 0 is anchored at the start and never empty
        offset += captures.get(0).map_or(remaining.len(), |m| m.end());
    }

    Ok(tokens)
}

#[cfg(test)]
#[path = "lexer_test.rs"]
mod tests;
