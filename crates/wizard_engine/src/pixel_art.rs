//! Emoji pixel art rendering
//!
//! Text is split into user perceived characters, every character is resolved to
//! a 7x5 bitmap through the [`Atlas`] and the bitmaps are painted cell by cell
//! into a [`PixelTarget`]. Lit cells get the foreground glyph, unlit cells the
//! background glyph.

use std::{convert::Infallible, fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use crate::{
    atlas::{Atlas, Bitmap, BITMAP_HEIGHT, BITMAP_WIDTH},
    EngineError,
};

pub const DEFAULT_FOREGROUND: &str = "❤️";
pub const DEFAULT_BACKGROUND: &str = "⬜";

/// How the character blocks are arranged.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// One 7 row block per character, stacked top to bottom with a blank line between blocks.
    #[default]
    Vertical,
    /// All characters side by side in one 7 row grid, one background column between them.
    Horizontal,
}

impl Layout {
    pub const ALL: [Layout; 2] = [Layout::Vertical, Layout::Horizontal];

    pub fn name(&self) -> &'static str {
        match self {
            Layout::Vertical => "vertical",
            Layout::Horizontal => "horizontal",
        }
    }
}

impl Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Layout {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Layout::ALL
            .into_iter()
            .find(|layout| layout.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| EngineError::validation(format!("Unknown layout '{s}' (expected vertical or horizontal)")))
    }
}

/// Receives the painted grid one cell at a time.
pub trait PixelTarget {
    type Error;

    /// Paint the next cell of the current line.
    fn draw(&mut self, lit: bool) -> std::result::Result<(), Self::Error>;

    /// Terminate the current line.
    fn next_line(&mut self) -> std::result::Result<(), Self::Error>;
}

/// Paints into a string, one glyph string per cell.
pub struct TextTarget<'a> {
    foreground: &'a str,
    background: &'a str,
    output: String,
}

impl<'a> TextTarget<'a> {
    pub fn new(foreground: &'a str, background: &'a str) -> Self {
        Self {
            foreground,
            background,
            output: String::new(),
        }
    }

    pub fn into_string(self) -> String {
        self.output
    }
}

impl PixelTarget for TextTarget<'_> {
    type Error = Infallible;

    fn draw(&mut self, lit: bool) -> std::result::Result<(), Self::Error> {
        self.output.push_str(if lit { self.foreground } else { self.background });
        Ok(())
    }

    fn next_line(&mut self) -> std::result::Result<(), Self::Error> {
        self.output.push('\n');
        Ok(())
    }
}

/// Collects the raw on/off grid, mainly for inspection.
#[derive(Debug, Default)]
pub struct MaskTarget {
    pub lines: Vec<Vec<bool>>,
}

impl PixelTarget for MaskTarget {
    type Error = Infallible;

    fn draw(&mut self, lit: bool) -> std::result::Result<(), Self::Error> {
        if self.lines.is_empty() {
            self.lines.push(Vec::new());
        }
        if let Some(line) = self.lines.last_mut() {
            line.push(lit);
        }
        Ok(())
    }

    fn next_line(&mut self) -> std::result::Result<(), Self::Error> {
        if self.lines.is_empty() {
            self.lines.push(Vec::new());
        }
        self.lines.push(Vec::new());
        Ok(())
    }
}

/// Resolve every user perceived character of `text` to a bitmap.
/// Characters without an atlas entry become blank blocks.
pub fn resolve_glyphs(atlas: &Atlas, text: &str) -> Vec<Bitmap> {
    text.graphemes(true)
        .map(|grapheme| match atlas.lookup_grapheme(grapheme) {
            Some(bitmap) => *bitmap,
            None => {
                log::debug!("no bitmap for {grapheme:?}, using a blank block");
                Bitmap::BLANK
            }
        })
        .collect()
}

/// Paint `glyphs` into `target` using `layout`.
pub fn render_to<T: PixelTarget>(glyphs: &[Bitmap], layout: Layout, target: &mut T) -> std::result::Result<(), T::Error> {
    match layout {
        Layout::Vertical => {
            for (i, glyph) in glyphs.iter().enumerate() {
                if i > 0 {
                    // end the previous block's last row, then the blank separator line
                    target.next_line()?;
                    target.next_line()?;
                }
                for y in 0..BITMAP_HEIGHT {
                    if y > 0 {
                        target.next_line()?;
                    }
                    for x in 0..BITMAP_WIDTH {
                        target.draw(glyph.pixel(x, y))?;
                    }
                }
            }
        }
        Layout::Horizontal => {
            if glyphs.is_empty() {
                return Ok(());
            }
            for y in 0..BITMAP_HEIGHT {
                if y > 0 {
                    target.next_line()?;
                }
                for (i, glyph) in glyphs.iter().enumerate() {
                    if i > 0 {
                        target.draw(false)?;
                    }
                    for x in 0..BITMAP_WIDTH {
                        target.draw(glyph.pixel(x, y))?;
                    }
                }
            }
        }
    }
    Ok(())
}

/// Render `text` as emoji pixel art.
///
/// Returns `None` when there is nothing to render: `text`, `foreground` or
/// `background` is empty or whitespace only. The glyph strings are used verbatim.
pub fn render_pixel_art(text: &str, foreground: &str, background: &str, layout: Layout) -> Option<String> {
    let text = text.trim();
    if text.is_empty() || foreground.trim().is_empty() || background.trim().is_empty() {
        return None;
    }

    let glyphs = resolve_glyphs(Atlas::builtin(), text);
    let mut target = TextTarget::new(foreground, background);
    match render_to(&glyphs, layout, &mut target) {
        Ok(()) => {}
        Err(never) => match never {},
    }
    Some(target.into_string())
}
