use std::{fmt, str::FromStr};

use serde::Serialize;
use thiserror::Error;

use crate::constants::DEFAULT_STROKE_WIDTH;
use super::tokens::{Token, TokenKind};

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Circle,
    Rectangle,
    Line,
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("Expected shape: 'circle', 'rectangle', or 'line', got {0}")]
pub struct UnknownShape(pub String);

impl FromStr for Shape {
    type Err = UnknownShape;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "circle" => Ok(Shape::Circle),
            "rectangle" => Ok(Shape::Rectangle),
            "line" => Ok(Shape::Line),
            _ => Err(UnknownShape(s.to_string())),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Shape::Circle => "circle",
            Shape::Rectangle => "rectangle",
            Shape::Line => "line",
        };

        f.write_str(name)
    }
}

// colors are lowercased, numbers are already f64
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "shape", content = "properties", rename_all = "lowercase")]
pub enum Command {
    Circle { center: Point, radius: f64, color: String },
    Rectangle { origin: Point, width: f64, height: f64, color: String },
    Line {
        from: Point,
        to: Point,
        color: String,
        #[serde(rename = "strokeWidth")]
        stroke_width: f64,
    },
}

impl Command {
    pub fn shape(&self) -> Shape {
        match self {
            Command::Circle { .. } => Shape::Circle,
            Command::Rectangle { .. } => Shape::Rectangle,
            Command::Line { .. } => Shape::Line,
        }
    }

    pub fn color(&self) -> &str {
        match self {
            Command::Circle { color, .. }
            | Command::Rectangle { color, .. }
            | Command::Line { color, .. } => color,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("Expected {expected}, got {found}")]
    Expected { expected: String, found: String },

    #[error(transparent)]
    UnknownShape(#[from] UnknownShape),

    #[error("Expected end of input, got {0}")]
    TrailingInput(String),
}

pub fn parse(tokens: &[Token]) -> Result<Command, ParseError> {
    Parser::new(tokens).parse()
}

pub struct Parser<'a> {
    tokens: &'a [Token],
    current: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, current: 0 }
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.tokens.len()
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.current)
    }

    fn advance(&mut self) -> Option<&'a Token> {
        let token = self.peek();
        if !self.is_at_end() {
            self.current += 1;
        }
        token
    }

    fn check(&self, kind: TokenKind, value: Option<&str>) -> bool {
        match self.peek() {
            Some(token) if token.kind == kind => value.is_none_or(|value| token.is(value)),
            _ => false,
        }
    }

    fn consume(&mut self, kind: TokenKind, value: Option<&str>, expected: &str) -> Result<&'a Token, ParseError> {
        if self.check(kind, value) && let Some(token) = self.advance() {
            return Ok(token);
        }

        Err(ParseError::Expected { expected: expected.to_string(), found: self.describe_current() })
    }

    fn describe_current(&self) -> String {
        self.peek().map_or_else(|| "end of input".to_string(), Token::to_string)
    }

    pub fn parse(mut self) -> Result<Command, ParseError> {
        let command = self.command()?;

        if let Some(token) = self.peek() {
            return Err(ParseError::TrailingInput(token.to_string()));
        }

        Ok(command)
    }

    // "draw" <shape> <properties>
    fn command(&mut self) -> Result<Command, ParseError> {
        self.consume(TokenKind::Keyword, Some("draw"), "'draw' at the start of the command")?;

        let shape_token = match self.peek() {
            Some(token) if token.kind == TokenKind::Keyword => token,
            _ => return Err(UnknownShape(self.describe_current()).into()),
        };
        let shape: Shape = shape_token.text.parse()?;
        self.advance();

        match shape {
            Shape::Circle => self.circle_properties(),
            Shape::Rectangle => self.rectangle_properties(),
            Shape::Line => self.line_properties(),
        }
    }

    // "at" <point> "radius" <number> "color" <color>
    fn circle_properties(&mut self) -> Result<Command, ParseError> {
        self.consume(TokenKind::Keyword, Some("at"), "'at' after 'circle'")?;
        let center = self.point()?;

        self.consume(TokenKind::Keyword, Some("radius"), "'radius' after point")?;
        let radius = self.number()?;

        self.consume(TokenKind::Keyword, Some("color"), "'color' after radius")?;
        let color = self.color()?;

        Ok(Command::Circle { center, radius, color })
    }

    // "at" <point> "width" <number> "height" <number> "color" <color>
    fn rectangle_properties(&mut self) -> Result<Command, ParseError> {
        self.consume(TokenKind::Keyword, Some("at"), "'at' after 'rectangle'")?;
        let origin = self.point()?;

        self.consume(TokenKind::Keyword, Some("width"), "'width' after point")?;
        let width = self.number()?;

        self.consume(TokenKind::Keyword, Some("height"), "'height' after width")?;
        let height = self.number()?;

        self.consume(TokenKind::Keyword, Some("color"), "'color' after height")?;
        let color = self.color()?;

        Ok(Command::Rectangle { origin, width, height, color })
    }

    // "from" <point> "to" <point> "color" <color> ["width" <number>]
    fn line_properties(&mut self) -> Result<Command, ParseError> {
        self.consume(TokenKind::Keyword, Some("from"), "'from' after 'line'")?;
        let from = self.point()?;

        self.consume(TokenKind::Keyword, Some("to"), "'to' after point")?;
        let to = self.point()?;

        self.consume(TokenKind::Keyword, Some("color"), "'color' after point")?;
        let color = self.color()?;

        let mut stroke_width = DEFAULT_STROKE_WIDTH;
        if self.check(TokenKind::Keyword, Some("width")) {
            self.advance();
            stroke_width = self.number()?;
        }

        Ok(Command::Line { from, to, color, stroke_width })
    }

    // "(" <number> "," <number> ")"
    fn point(&mut self) -> Result<Point, ParseError> {
        self.consume(TokenKind::Symbol, Some("("), "'(' for point")?;
        let x = self.number()?;
        self.consume(TokenKind::Symbol, Some(","), "',' after x coordinate")?;
        let y = self.number()?;
        self.consume(TokenKind::Symbol, Some(")"), "')' after y coordinate")?;

        Ok(Point { x, y })
    }

    fn number(&mut self) -> Result<f64, ParseError> {
        let token = self.consume(TokenKind::Number, None, "a number")?;

        match token.text.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(ParseError::Expected { expected: "a finite number".to_string(), found: token.to_string() }),
        }
    }

    fn color(&mut self) -> Result<String, ParseError> {
        let token = self.consume(TokenKind::Color, None, "a color")?;

        Ok(token.text.to_lowercase())
    }
}

#[cfg(test)]
#[path = "parser_test.rs"]
mod tests;
