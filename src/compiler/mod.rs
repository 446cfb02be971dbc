//! Text to SVG compiler: normalize, tokenize, parse, generate.

pub mod generator;
pub mod lexer;
pub mod normalizer;
pub mod parser;
pub mod tokens;

use serde::Serialize;
use thiserror::Error;

pub use generator::generate;
pub use lexer::{LexError, tokenize};
pub use normalizer::normalize;
pub use parser::{Command, ParseError, Point, Shape, parse};
pub use tokens::{Token, TokenKind};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompileError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Every artifact of a successful compilation, from canonical text to markup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Compilation {
    pub normalized: String,
    pub tokens: Vec<Token>,
    pub command: Command,
    pub output: String,
}

/// Result shape handed to callers: either the artifacts or a single message.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Success(Compilation),
    Failure { error: String },
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }
}

impl From<Result<Compilation, CompileError>> for Outcome {
    fn from(result: Result<Compilation, CompileError>) -> Self {
        match result {
            Ok(compilation) => Outcome::Success(compilation),
            Err(CompileError::Lex(err)) => Outcome::Failure { error: format!("Lexical error: {err}") },
            Err(CompileError::Parse(err)) => Outcome::Failure { error: format!("Syntax error: {err}") },
        }
    }
}

/// Compile free-form text: normalization runs before lexing.
pub fn compile(raw: &str) -> Result<Compilation, CompileError> {
    let normalized = normalize(raw);
    tracing::debug!(raw, %normalized, "normalized command");

    compile_canonical(&normalized)
}

/// Compile text that is already in canonical form.
pub fn compile_canonical(text: &str) -> Result<Compilation, CompileError> {
    let tokens = tokenize(text)?;
    tracing::trace!(count = tokens.len(), "tokenized command");

    let command = parse(&tokens)?;
    tracing::debug!(shape = %command.shape(), "parsed command");

    let output = generate(&command);

    Ok(Compilation { normalized: text.to_string(), tokens, command, output })
}

pub fn process_command(raw: &str) -> Outcome {
    let result = compile(raw);

    if let Err(err) = &result {
        tracing::warn!(error = %err, "command failed to compile");
    }

    result.into()
}

/// Same as [`process_command`] but without the normalization pre-pass.
pub fn process_canonical_command(text: &str) -> Outcome {
    let result = compile_canonical(text);

    if let Err(err) = &result {
        tracing::warn!(error = %err, "command failed to compile");
    }

    result.into()
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
