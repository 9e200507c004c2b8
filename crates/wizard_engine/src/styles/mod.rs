//! Unicode letter styles.
//!
//! Every style maps the 52 ASCII letters to styled look-alikes and leaves all
//! other characters alone. When the probe rejects a styled letter the entry's
//! fallback literal is used, or, for styles without per letter fallbacks, the
//! style's decoration of the original letter.

use once_cell::sync::Lazy;

use crate::{compatibility::CompatibilityReport, probe::RenderProbe, EngineError, Result};

mod tables;
use tables::{letter_index, LETTER_COUNT};

/// Applied to the original letter when its styled literal can't be rendered.
pub type Decoration = fn(char) -> String;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleEntry {
    /// Code point of the styled letter
    pub primary: u32,
    pub fallback: Option<char>,
}

pub struct Style {
    name: &'static str,
    entries: [StyleEntry; LETTER_COUNT],
    decoration: Decoration,
}

impl std::fmt::Debug for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Style").field("name", &self.name).finish_non_exhaustive()
    }
}

impl Style {
    fn with_fallbacks(name: &'static str, primaries: &[u32; LETTER_COUNT], fallbacks: &str) -> Self {
        let mut fallbacks = fallbacks.chars();
        let entries = std::array::from_fn(|i| StyleEntry {
            primary: primaries[i],
            fallback: fallbacks.next(),
        });
        Self {
            name,
            entries,
            decoration: bare,
        }
    }

    fn decorated(name: &'static str, letters: &str, decoration: Decoration) -> Self {
        let mut letters = letters.chars();
        let entries = std::array::from_fn(|_| StyleEntry {
            primary: letters.next().map_or(0, u32::from),
            fallback: None,
        });
        Self { name, entries, decoration }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn entry(&self, ch: char) -> Option<&StyleEntry> {
        letter_index(ch).map(|i| &self.entries[i])
    }

    /// Append the styled form of `ch` to `out`.
    pub fn push_styled(&self, out: &mut String, ch: char, probe: &dyn RenderProbe) {
        let Some(entry) = self.entry(ch) else {
            out.push(ch);
            return;
        };
        match char::from_u32(entry.primary).filter(|&styled| probe.can_render(styled)) {
            Some(styled) => out.push(styled),
            None => match entry.fallback {
                Some(fallback) => out.push(fallback),
                None => out.push_str(&(self.decoration)(ch)),
            },
        }
    }

    pub fn transform(&self, text: &str, probe: &dyn RenderProbe) -> String {
        let mut out = String::with_capacity(text.len() * 4);
        for ch in text.chars() {
            self.push_styled(&mut out, ch, probe);
        }
        out
    }
}

fn bare(ch: char) -> String {
    ch.to_string()
}

fn asterisks(ch: char) -> String {
    format!("*{ch}*")
}

fn brackets(ch: char) -> String {
    format!("[{ch}]")
}

fn tildes(ch: char) -> String {
    format!("~{ch}~")
}

fn diamonds(ch: char) -> String {
    format!("◆{ch}◆")
}

const EMPTY_TEXT_MESSAGE: &str = "Please enter some text to convert";

static STYLES: Lazy<Vec<Style>> = Lazy::new(|| {
    vec![
        Style::with_fallbacks("Fraktur", &tables::FRAKTUR_PRIMARY, tables::FRAKTUR_FALLBACK),
        Style::decorated("Cryptic Italic", tables::CRYPTIC_ITALIC, asterisks),
        Style::decorated("Math Sans", tables::MATH_SANS, brackets),
        Style::decorated("Light Text Bubbles", tables::LIGHT_TEXT_BUBBLES, bare),
        Style::decorated("Script Bold Italic", tables::SCRIPT_BOLD_ITALIC, tildes),
        Style::decorated("Fairytale", tables::FAIRYTALE, diamonds),
    ]
});

/// All registered styles, in presentation order:
/// Fraktur, Cryptic Italic, Math Sans, Light Text Bubbles, Script Bold Italic, Fairytale.
pub fn styles() -> &'static [Style] {
    &STYLES
}

/// Look up a style by name, ignoring ASCII case.
pub fn find_style(name: &str) -> Option<&'static Style> {
    let name = name.trim();
    styles().iter().find(|style| style.name.eq_ignore_ascii_case(name))
}

#[derive(Debug, Clone, PartialEq)]
pub struct StyledText {
    pub style_name: &'static str,
    pub text: String,
    pub compatibility: CompatibilityReport,
}

pub fn transform_with(style: &Style, text: &str, probe: &dyn RenderProbe) -> StyledText {
    let text = style.transform(text, probe);
    let compatibility = CompatibilityReport::analyze(&text, probe);
    StyledText {
        style_name: style.name,
        text,
        compatibility,
    }
}

/// Transform `text` with every registered style.
///
/// Fails with a validation error when `text` is blank. The text itself is
/// transformed as given, surrounding whitespace included.
pub fn transform_styles(text: &str, probe: &dyn RenderProbe) -> Result<Vec<StyledText>> {
    check_text(text)?;
    Ok(styles().iter().map(|style| transform_with(style, text, probe)).collect())
}

/// Transform `text` with the style called `name`, see [`find_style`].
pub fn transform_named(name: &str, text: &str, probe: &dyn RenderProbe) -> Result<StyledText> {
    let style = find_style(name).ok_or_else(|| EngineError::validation(format!("Unknown style '{name}'")))?;
    check_text(text)?;
    Ok(transform_with(style, text, probe))
}

fn check_text(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Err(EngineError::validation(EMPTY_TEXT_MESSAGE));
    }
    Ok(())
}
