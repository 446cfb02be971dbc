//! Rewrites free-form phrasing into the canonical command syntax.
//!
//! Every pass is a total `&str -> String` function and the passes run in the
//! fixed order of [`PASSES`]: later passes rely on the text shape produced by
//! earlier ones (numbers are digits before commas are inserted, commas exist
//! before coordinates are parenthesized, and so on). Normalization never fails;
//! text it cannot make sense of is passed through for the lexer to reject.

use std::{
    borrow::Cow,
    f64::consts::PI,
    sync::LazyLock,
};

use regex::{Captures, Regex};

use crate::constants::{COLOR_SYNONYMS, TENS, UNITS};

pub type Pass = fn(&str) -> String;

pub const PASSES: [(&str, Pass); 11] = [
    ("remove_filler", remove_filler),
    ("normalize_actions", normalize_actions),
    ("words_to_numbers", words_to_numbers),
    ("normalize_commas", normalize_commas),
    ("normalize_hashtags", normalize_hashtags),
    ("normalize_parentheses", normalize_parentheses),
    ("normalize_coordinate_phrases", normalize_coordinate_phrases),
    ("expand_color_vocabulary", expand_color_vocabulary),
    ("normalize_dimensions", normalize_dimensions),
    ("strip_units", strip_units),
    ("final_cleanup", final_cleanup),
];

pub fn normalize(text: &str) -> String {
    PASSES.iter().fold(text.to_string(), |text, (_, pass)| pass(&text))
}

// a signed decimal standing on its own, "-12.5" but not the "12" in "x12"
const NUM: &str = r"(?:\B-)?\b[0-9]+(?:\.[0-9]+)?\b";
const UNIT_WORDS: &str = "zero|one|two|three|four|five|six|seven|eight|nine";
const TEEN_WORDS: &str = "ten|eleven|twelve|thirteen|fourteen|fifteen|sixteen|seventeen|eighteen|nineteen";
const TENS_WORDS: &str = "twenty|thirty|forty|fifty|sixty|seventy|eighty|ninety";

fn regex(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap()
}

/* FILLER */

static FILLER_RE: LazyLock<Regex> =
    LazyLock::new(|| regex(r"(?i)\b(?:please|could you|can you|i want to|i would like to)\b"));

pub fn remove_filler(text: &str) -> String {
    FILLER_RE.replace_all(text, "").into_owned()
}

/* ACTIONS */

static ACTION_RE: LazyLock<Regex> =
    LazyLock::new(|| regex(r"(?i)\b(?:create|make|add|place|draw)(?:\s+an?)?\b"));
static SQUARE_RE: LazyLock<Regex> = LazyLock::new(|| regex(r"(?i)\bsquare\b"));
static POSITION_RE: LazyLock<Regex> = LazyLock::new(|| regex(r"(?i)\b(?:(at|from|to)\s+)?position\b"));
static SIZE_RE: LazyLock<Regex> = LazyLock::new(|| regex(r"(?i)\b(?:with|of)\s+size\b"));
static COLOR_WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| regex(r"(?i)\b(?:in|using|with\s+color|colored)\b"));

pub fn normalize_actions(text: &str) -> String {
    let text = ACTION_RE.replace_all(text, "draw");
    let text = SQUARE_RE.replace_all(&text, "rectangle");
    let text = POSITION_RE.replace_all(&text, |caps: &Captures| {
        caps.get(1).map_or("at", |preposition| preposition.as_str()).to_string()
    });
    let text = SIZE_RE.replace_all(&text, "with");

    COLOR_WORD_RE.replace_all(&text, "color").into_owned()
}

/* NUMBERS */

static HUNDREDS_RE: LazyLock<Regex> = LazyLock::new(|| {
    regex(&format!(
        r"(?i)\b({UNIT_WORDS})\s+hundred(?:(?:\s+and)?\s+(?:({TENS_WORDS})(?:(?:\s+|-)({UNIT_WORDS}))?|({UNIT_WORDS}|{TEEN_WORDS})))?\b"
    ))
});
static PAIR_RE: LazyLock<Regex> =
    LazyLock::new(|| regex(&format!(r"(?i)\b({TENS_WORDS})(?:\s+|-)({UNIT_WORDS})\b")));
static SINGLE_RE: LazyLock<Regex> =
    LazyLock::new(|| regex(&format!(r"(?i)\b({UNIT_WORDS}|{TEEN_WORDS}|{TENS_WORDS})\b")));
static DIGIT_LETTER_RE: LazyLock<Regex> = LazyLock::new(|| regex(r"#[0-9A-Fa-f]{6}\b|([0-9])([A-Za-z])"));
static LETTER_DIGIT_RE: LazyLock<Regex> = LazyLock::new(|| regex(r"#[0-9A-Fa-f]{6}\b|([A-Za-z])([0-9])"));

fn number_word(word: &str) -> u32 {
    let word = word.to_ascii_lowercase();

    UNITS
        .iter()
        .chain(TENS.iter())
        .find(|(name, _)| *name == word)
        .map_or(0, |(_, value)| *value)
}

fn captured_value(caps: &Captures, group: usize) -> u32 {
    caps.get(group).map_or(0, |word| number_word(word.as_str()))
}

// splits "25radius" into "25 radius" but leaves "#ff00aa" whole
fn split_boundary(caps: &Captures) -> String {
    match (caps.get(1), caps.get(2)) {
        (Some(left), Some(right)) => format!("{} {}", left.as_str(), right.as_str()),
        _ => caps[0].to_string(),
    }
}

pub fn words_to_numbers(text: &str) -> String {
    let text = HUNDREDS_RE.replace_all(text, |caps: &Captures| {
        let value = captured_value(caps, 1) * 100 + captured_value(caps, 2) + captured_value(caps, 3) + captured_value(caps, 4);
        value.to_string()
    });
    let text = PAIR_RE.replace_all(&text, |caps: &Captures| {
        (captured_value(caps, 1) + captured_value(caps, 2)).to_string()
    });
    let text = SINGLE_RE.replace_all(&text, |caps: &Captures| captured_value(caps, 1).to_string());

    let text = DIGIT_LETTER_RE.replace_all(&text, split_boundary);
    LETTER_DIGIT_RE.replace_all(&text, split_boundary).into_owned()
}

/* COMMAS */

static COMMA_WORD_RE: LazyLock<Regex> = LazyLock::new(|| regex(r"(?i)\s*\bcomma\b\s*"));
static ADJACENT_NUMBERS_RE: LazyLock<Regex> = LazyLock::new(|| regex(&format!(r"({NUM})\s+({NUM})")));

pub fn normalize_commas(text: &str) -> String {
    let text = COMMA_WORD_RE.replace_all(text, ",");

    ADJACENT_NUMBERS_RE.replace_all(&text, "$1,$2").into_owned()
}

/* HEX COLORS */

// speech often splits the digits up, sometimes with commas from the previous pass
static HASHTAG_RE: LazyLock<Regex> =
    LazyLock::new(|| regex(r"(?i)\bhashtag\s+([0-9a-f](?:[\s,]*[0-9a-f]){5})\b"));

pub fn normalize_hashtags(text: &str) -> String {
    HASHTAG_RE
        .replace_all(text, |caps: &Captures| {
            let hex: String = caps[1].chars().filter(char::is_ascii_hexdigit).collect();
            format!("#{hex}")
        })
        .into_owned()
}

/* PARENTHESES */

static OPEN_PAREN_RE: LazyLock<Regex> =
    LazyLock::new(|| regex(r"(?i)\s*\b(?:open|left)\s+paren(?:thesis)?\b\s*"));
static CLOSE_PAREN_RE: LazyLock<Regex> =
    LazyLock::new(|| regex(r"(?i)\s*\b(?:close|right)\s+paren(?:thesis)?\b"));

pub fn normalize_parentheses(text: &str) -> String {
    let text = OPEN_PAREN_RE.replace_all(text, " (");

    CLOSE_PAREN_RE.replace_all(&text, ")").into_owned()
}

/* COORDINATES */

static COORDINATE_RE: LazyLock<Regex> =
    LazyLock::new(|| regex(&format!(r"(?i)\b(at|from|to)\s+(?:position\s+)?({NUM})[,\s]+({NUM})")));
static POINT_RE: LazyLock<Regex> = LazyLock::new(|| regex(&format!(r"(?i)\bpoint\s+({NUM})[,\s]+({NUM})")));

pub fn normalize_coordinate_phrases(text: &str) -> String {
    let text = COORDINATE_RE.replace_all(text, "$1 ($2, $3)");

    POINT_RE.replace_all(&text, "($1, $2)").into_owned()
}

/* COLORS */

static COLOR_SYNONYM_RES: LazyLock<Vec<(Regex, &str)>> = LazyLock::new(|| {
    COLOR_SYNONYMS
        .iter()
        .map(|(synonym, color)| (regex(&format!(r"(?i)\b{}\b", synonym.replace(' ', r"\s+"))), *color))
        .collect()
});
static RGB_RE: LazyLock<Regex> =
    LazyLock::new(|| regex(r"(?i)\brgb\s*\(\s*([0-9]+)\s*,\s*([0-9]+)\s*,\s*([0-9]+)\s*\)"));

fn channel(value: &str) -> u8 {
    value.parse::<u32>().map_or(u8::MAX, |v| v.min(255) as u8)
}

pub fn expand_color_vocabulary(text: &str) -> String {
    let mut text: Cow<str> = Cow::Borrowed(text);

    for (synonym, color) in COLOR_SYNONYM_RES.iter() {
        text = Cow::Owned(synonym.replace_all(&text, *color).into_owned());
    }

    RGB_RE
        .replace_all(&text, |caps: &Captures| {
            format!("#{:02x}{:02x}{:02x}", channel(&caps[1]), channel(&caps[2]), channel(&caps[3]))
        })
        .into_owned()
}

/* DIMENSIONS */

static SIZE_PAIR_RE: LazyLock<Regex> =
    LazyLock::new(|| regex(&format!(r"(?i)\b(?:(?:with|of)\s+size|with)\s+({NUM})[,\s]+({NUM})")));
static WITH_KEYWORD_RE: LazyLock<Regex> =
    LazyLock::new(|| regex(r"(?i)\bwith\s+(radius|diameter|circumference|width|height|color)\b"));
static WITH_RE: LazyLock<Regex> = LazyLock::new(|| regex(r"(?i)\bwith\b"));
static BY_RE: LazyLock<Regex> = LazyLock::new(|| regex(&format!(r"(?i)({NUM})\s*\bby\b\s*({NUM})")));
static DIAMETER_RE: LazyLock<Regex> = LazyLock::new(|| regex(&format!(r"(?i)\bdiameter\s+({NUM})")));
static CIRCUMFERENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| regex(&format!(r"(?i)\bcircumference\s+({NUM})")));

fn radius_from(caps: &Captures, divisor: f64) -> String {
    let measure: f64 = caps[1].parse().unwrap_or(0.0);
    let radius = (measure / divisor).round();

    // avoid printing "-0"
    format!("radius {}", radius + 0.0)
}

pub fn normalize_dimensions(text: &str) -> String {
    let text = SIZE_PAIR_RE.replace_all(text, "width $1 height $2");
    let text = WITH_KEYWORD_RE.replace_all(&text, "$1");
    let text = WITH_RE.replace_all(&text, "width");
    let text = BY_RE.replace_all(&text, "width $1 height $2");
    let text = DIAMETER_RE.replace_all(&text, |caps: &Captures| radius_from(caps, 2.0));

    CIRCUMFERENCE_RE
        .replace_all(&text, |caps: &Captures| radius_from(caps, 2.0 * PI))
        .into_owned()
}

/* UNITS */

// no trailing boundary on the number so "10px" is caught as well as "10 px"
static UNIT_RE: LazyLock<Regex> =
    LazyLock::new(|| regex(r"(?i)((?:\B-)?\b[0-9]+(?:\.[0-9]+)?)\s*(?:pixels?|px|points?|pt)\b"));

pub fn strip_units(text: &str) -> String {
    UNIT_RE.replace_all(text, "$1").into_owned()
}

/* CLEANUP */

static BARE_PAIR_RE: LazyLock<Regex> = LazyLock::new(|| regex(&format!(r"({NUM})\s*,\s*({NUM})")));
static DOUBLE_PAREN_RE: LazyLock<Regex> =
    LazyLock::new(|| regex(&format!(r"\(\s*\(({NUM}), ({NUM})\)\s*\)")));
static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| regex(r"\s+"));

pub fn final_cleanup(text: &str) -> String {
    let text = BARE_PAIR_RE.replace_all(text, "($1, $2)");
    let text = DOUBLE_PAREN_RE.replace_all(&text, "($1, $2)");

    WHITESPACE_RE.replace_all(&text, " ").trim().to_string()
}

#[cfg(test)]
#[path = "normalizer_test.rs"]
mod tests;
