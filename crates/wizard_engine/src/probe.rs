//! Rendering capability probes.
//!
//! A probe answers whether the active display surface can show a character.
//! The style transformer takes the probe as a parameter so hosts without any
//! display surface, test suites and real font checks can be swapped freely.

use std::{
    fs,
    path::{Path, PathBuf},
};

use ab_glyph::{point, Font, FontVec, PxScale};

use crate::{EngineError, Result};

/// Pixel size glyphs are rasterized at when probing fonts.
pub const PROBE_SCALE: f32 = 20.0;

pub trait RenderProbe {
    fn can_render(&self, ch: char) -> bool;
}

impl<F: Fn(char) -> bool> RenderProbe for F {
    fn can_render(&self, ch: char) -> bool {
        self(ch)
    }
}

/// For hosts without a display surface: everything is assumed to render.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeRenderable;

impl RenderProbe for AssumeRenderable {
    fn can_render(&self, _ch: char) -> bool {
        true
    }
}

/// Accepts every character up to and including the given code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodepointCeiling(pub u32);

impl RenderProbe for CodepointCeiling {
    fn can_render(&self, ch: char) -> bool {
        ch as u32 <= self.0
    }
}

/// Draws characters offscreen with a stack of fonts and checks whether any pixel got painted.
///
/// A character renders when at least one font of the stack has a glyph for it
/// that produces coverage. An empty stack has no surface to draw on and accepts everything.
#[derive(Default)]
pub struct FontStackProbe {
    fonts: Vec<(PathBuf, FontVec)>,
}

impl FontStackProbe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every font in `paths`, in order. Fonts that fail to load are skipped.
    pub fn load(paths: &[PathBuf]) -> Self {
        let mut probe = Self::new();
        for path in paths {
            if let Err(err) = probe.push_font_file(path) {
                log::warn!("Skipping probe font: {err}");
            }
        }
        probe
    }

    pub fn push_font_file(&mut self, path: &Path) -> Result<()> {
        let data = fs::read(path).map_err(|err| EngineError::font_load(path, err))?;
        self.push_font_data(path, data)
    }

    pub fn push_font_data(&mut self, path: impl Into<PathBuf>, data: Vec<u8>) -> Result<()> {
        let path = path.into();
        let font = FontVec::try_from_vec(data).map_err(|err| EngineError::font_load(&path, err))?;
        log::debug!("probe font loaded: {}", path.display());
        self.fonts.push((path, font));
        Ok(())
    }

    pub fn font_paths(&self) -> impl Iterator<Item = &Path> {
        self.fonts.iter().map(|(path, _)| path.as_path())
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }
}

impl RenderProbe for FontStackProbe {
    fn can_render(&self, ch: char) -> bool {
        if self.fonts.is_empty() {
            return true;
        }
        self.fonts.iter().any(|(_, font)| paints_pixels(font, ch))
    }
}

fn paints_pixels(font: &FontVec, ch: char) -> bool {
    let glyph_id = font.glyph_id(ch);
    // id 0 is .notdef, drawing it would only produce a replacement box
    if glyph_id.0 == 0 {
        return false;
    }
    let glyph = glyph_id.with_scale_and_position(PxScale::from(PROBE_SCALE), point(10.0, 25.0));
    let Some(outlined) = font.outline_glyph(glyph) else {
        return false;
    };
    let mut painted = false;
    outlined.draw(|_, _, coverage| {
        if coverage > 0.0 {
            painted = true;
        }
    });
    painted
}
