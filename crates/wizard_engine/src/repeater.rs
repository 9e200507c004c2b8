use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{EngineError, Result};

pub const MIN_REPEAT_COUNT: u32 = 1;
pub const MAX_REPEAT_COUNT: u32 = 100_000;

/// Quick pick repeat counts.
pub const PRESET_COUNTS: [u32; 4] = [10, 100, 1000, 10000];

const RANGE_MESSAGE: &str = "Please enter an integer between 1 and 100000";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Separator {
    /// One copy per line
    #[default]
    Newline,
    /// `", "` between copies
    Comma,
    Space,
    None,
}

impl Separator {
    pub const ALL: [Separator; 4] = [Separator::Newline, Separator::Comma, Separator::Space, Separator::None];

    pub fn as_str(&self) -> &'static str {
        match self {
            Separator::Newline => "\n",
            Separator::Comma => ", ",
            Separator::Space => " ",
            Separator::None => "",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Separator::Newline => "newline",
            Separator::Comma => "comma",
            Separator::Space => "space",
            Separator::None => "none",
        }
    }
}

impl Display for Separator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Separator {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        Separator::ALL
            .into_iter()
            .find(|sep| sep.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| EngineError::validation(format!("Unknown separator '{s}' (expected newline, comma, space or none)")))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RepeatRequest {
    pub text: String,
    pub count: u32,
    #[serde(default)]
    pub separator: Separator,
}

impl RepeatRequest {
    pub fn new(text: impl Into<String>, count: u32, separator: Separator) -> Self {
        Self {
            text: text.into(),
            count,
            separator,
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_count(self.count)?;
        if self.text.trim().is_empty() {
            return Err(EngineError::validation("Please enter some text to repeat"));
        }
        Ok(())
    }

    pub fn execute(&self) -> Result<String> {
        repeat_text(&self.text, self.count, self.separator)
    }
}

pub fn validate_count(count: u32) -> Result<u32> {
    if !(MIN_REPEAT_COUNT..=MAX_REPEAT_COUNT).contains(&count) {
        return Err(EngineError::validation(RANGE_MESSAGE));
    }
    Ok(count)
}

/// Parse a repeat count typed by a user. Only whole decimal numbers in range are accepted.
pub fn parse_count(input: &str) -> Result<u32> {
    let input = input.trim();
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(EngineError::validation(RANGE_MESSAGE));
    }
    // digit strings too long for u32 are out of range anyway
    let count = input.parse::<u32>().map_err(|_| EngineError::validation(RANGE_MESSAGE))?;
    validate_count(count)
}

/// Join `count` copies of the trimmed `text` with `separator`.
///
/// Everything is validated before the output is built, a failure never yields partial output.
pub fn repeat_text(text: &str, count: u32, separator: Separator) -> Result<String> {
    validate_count(count)?;
    let text = text.trim();
    if text.is_empty() {
        return Err(EngineError::validation("Please enter some text to repeat"));
    }

    let sep = separator.as_str();
    let count = count as usize;
    let mut result = String::with_capacity(text.len() * count + sep.len() * (count - 1));
    for i in 0..count {
        if i > 0 {
            result.push_str(sep);
        }
        result.push_str(text);
    }
    Ok(result)
}
