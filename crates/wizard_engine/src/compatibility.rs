//! Compatibility summary for a transformed string.

use regex::Regex;

use crate::probe::RenderProbe;

lazy_static::lazy_static! {
    static ref HIGH_UNICODE: Regex = Regex::new(concat!(
        "[",
        r"\x{1D400}-\x{1D7FF}", // mathematical alphanumeric symbols
        r"\x{1D800}-\x{1D9FF}", // sutton signwriting
        r"\x{1DA00}-\x{1DA7F}",
        r"\x{1F100}-\x{1F1FF}", // enclosed alphanumeric supplement
        r"\x{2460}-\x{24FF}",   // enclosed alphanumerics
        r"\x{1F300}-\x{1F5FF}", // misc symbols and pictographs
        r"\x{1F600}-\x{1F64F}", // emoticons
        r"\x{1F680}-\x{1F6FF}", // transport and map symbols
        r"\x{2600}-\x{26FF}",   // misc symbols
        r"\x{2700}-\x{27BF}",   // dingbats
        "]"
    ))
    .unwrap();
}

/// Fonts that cover the mathematical and enclosed alphanumerics.
pub const HIGH_UNICODE_FONTS: [&str; 3] = ["Noto Sans Math", "Code2000", "Symbola"];

/// Broad coverage fonts suggested when characters failed to render.
pub const FALLBACK_FONTS: [&str; 2] = ["DejaVu Sans", "Arial Unicode MS"];

/// Below this share of renderable characters a result deserves a warning.
pub const WARNING_RATIO: f64 = 0.8;

#[derive(Debug, Clone, PartialEq)]
pub struct CompatibilityReport {
    pub contains_high_unicode: bool,
    pub unsupported_chars: Vec<char>,
    /// Share of characters that render, 0.0 - 1.0
    pub supported_ratio: f64,
    /// Deduplicated, in order of recommendation
    pub recommended_fonts: Vec<String>,
}

impl CompatibilityReport {
    /// Analyze `text` code point by code point. ASCII always counts as supported.
    pub fn analyze(text: &str, probe: &dyn RenderProbe) -> Self {
        let mut unsupported_chars = Vec::new();
        let mut total = 0usize;
        for ch in text.chars() {
            total += 1;
            if !ch.is_ascii() && !probe.can_render(ch) {
                unsupported_chars.push(ch);
            }
        }
        let supported_ratio = if total == 0 {
            1.0
        } else {
            (total - unsupported_chars.len()) as f64 / total as f64
        };
        let contains_high_unicode = HIGH_UNICODE.is_match(text);

        let mut recommended_fonts: Vec<String> = Vec::new();
        let mut recommend = |fonts: &[&str]| {
            for font in fonts {
                if !recommended_fonts.iter().any(|f| f == font) {
                    recommended_fonts.push((*font).to_string());
                }
            }
        };
        if contains_high_unicode {
            recommend(&HIGH_UNICODE_FONTS);
        }
        if !unsupported_chars.is_empty() {
            recommend(&FALLBACK_FONTS);
        }

        Self {
            contains_high_unicode,
            unsupported_chars,
            supported_ratio,
            recommended_fonts,
        }
    }

    pub fn needs_warning(&self) -> bool {
        self.contains_high_unicode || self.supported_ratio < WARNING_RATIO
    }

    pub fn is_fully_supported(&self) -> bool {
        self.unsupported_chars.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::{AssumeRenderable, CodepointCeiling};

    #[test]
    fn test_plain_ascii() {
        let report = CompatibilityReport::analyze("Hello", &CodepointCeiling(0));
        assert!(!report.contains_high_unicode);
        assert!(report.is_fully_supported());
        assert_eq!(report.supported_ratio, 1.0);
        assert!(report.recommended_fonts.is_empty());
        assert!(!report.needs_warning());
    }

    #[test]
    fn test_math_letters_are_high_unicode() {
        let report = CompatibilityReport::analyze("𝔄b", &AssumeRenderable);
        assert!(report.contains_high_unicode);
        assert!(report.needs_warning());
        assert_eq!(report.recommended_fonts, vec!["Noto Sans Math", "Code2000", "Symbola"]);
    }

    #[test]
    fn test_unsupported_chars() {
        let report = CompatibilityReport::analyze("ⒶⒷ c", &CodepointCeiling(0x2460));
        assert_eq!(report.unsupported_chars, vec!['Ⓐ', 'Ⓑ']);
        assert_eq!(report.supported_ratio, 0.5);
        assert_eq!(
            report.recommended_fonts,
            vec!["Noto Sans Math", "Code2000", "Symbola", "DejaVu Sans", "Arial Unicode MS"]
        );
    }

    #[test]
    fn test_low_ratio_without_high_unicode_warns() {
        let report = CompatibilityReport::analyze("éèa", &CodepointCeiling(0x7F));
        assert!(!report.contains_high_unicode);
        assert_eq!(report.recommended_fonts, vec!["DejaVu Sans", "Arial Unicode MS"]);
        assert!(report.needs_warning());
    }

    #[test]
    fn test_empty_text() {
        let report = CompatibilityReport::analyze("", &AssumeRenderable);
        assert_eq!(report.supported_ratio, 1.0);
        assert!(!report.needs_warning());
    }
}
