//! Side effects the engine asks its host for.
//!
//! Neither effect is essential for a result: a failed copy or an unknown font
//! status is logged and otherwise ignored.

use crate::Result;

/// Fonts whose availability is reported before style conversion.
pub const PROBED_FONTS: [&str; 5] = ["Noto Sans Math", "Code2000", "Symbola", "DejaVu Sans", "STIX"];

pub trait Clipboard {
    fn copy_text(&mut self, text: &str) -> Result<()>;
}

pub trait FontAvailability {
    fn is_available(&self, family: &str) -> bool;
}

/// Hand `text` to the clipboard. Returns whether the copy succeeded; empty results aren't copied.
pub fn copy_result(clipboard: &mut dyn Clipboard, text: &str) -> bool {
    if text.is_empty() {
        return false;
    }
    match clipboard.copy_text(text) {
        Ok(()) => true,
        Err(err) => {
            log::warn!("Copy failed: {err}");
            false
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontStatus {
    pub family: &'static str,
    pub available: bool,
}

pub fn font_status(fonts: &dyn FontAvailability) -> Vec<FontStatus> {
    PROBED_FONTS
        .iter()
        .map(|&family| FontStatus {
            family,
            available: fonts.is_available(family),
        })
        .collect()
}
