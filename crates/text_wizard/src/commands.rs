use std::{fmt::Write, path::PathBuf};

use wizard_engine::{
    compatibility::HIGH_UNICODE_FONTS,
    effects::{font_status, FontStatus},
    palette, parse_count, render_pixel_art, repeat_text, transform_named, transform_styles,
    AssumeRenderable, CodepointCeiling, EngineError, FontStackProbe, Layout, RenderProbe, Separator, StyledText,
};

use crate::{fonts::SystemFonts, Options};

const STYLE_NAME_WIDTH: usize = 20;
const PALETTE_COLUMNS: usize = 13;

pub fn repeat(options: &Options, text: &str, count: Option<&str>, separator: Option<Separator>) -> anyhow::Result<String> {
    let count = match count {
        Some(count) => parse_count(count)?,
        None => options.repeat_count,
    };
    Ok(repeat_text(text, count, separator.unwrap_or(options.separator))?)
}

pub fn pixel(options: &Options, text: &str, foreground: Option<&str>, background: Option<&str>, layout: Option<Layout>) -> anyhow::Result<String> {
    let foreground = foreground.unwrap_or(&options.foreground);
    let background = background.unwrap_or(&options.background);
    render_pixel_art(text, foreground, background, layout.unwrap_or(options.layout))
        .ok_or_else(|| EngineError::validation("Please enter some text and both paint glyphs").into())
}

/// Pick the probe for style conversion. A code point ceiling wins over fonts;
/// without any loadable font every character is assumed to render.
pub fn build_probe(options: &Options, max_codepoint: Option<u32>, fonts: &[PathBuf], system: Option<&SystemFonts>) -> Box<dyn RenderProbe> {
    if let Some(ceiling) = max_codepoint.or(options.max_codepoint) {
        log::debug!("probing with code point ceiling U+{ceiling:04X}");
        return Box::new(CodepointCeiling(ceiling));
    }
    let mut paths = fonts.to_vec();
    paths.extend(options.probe_fonts.iter().cloned());
    if let Some(system) = system {
        paths.extend(system.resolve(&HIGH_UNICODE_FONTS));
    }
    let stack = FontStackProbe::load(&paths);
    if stack.is_empty() {
        log::info!("no probe fonts available, assuming every character renders");
        return Box::new(AssumeRenderable);
    }
    Box::new(stack)
}

pub fn styles(text: &str, style: Option<&str>, probe: &dyn RenderProbe) -> anyhow::Result<Vec<StyledText>> {
    match style {
        Some(name) => Ok(vec![transform_named(name, text, probe)?]),
        None => Ok(transform_styles(text, probe)?),
    }
}

pub fn format_styles(results: &[StyledText], report: bool) -> String {
    let mut out = String::new();
    for result in results {
        let _ = writeln!(out, "{:<width$}{}", result.style_name, result.text, width = STYLE_NAME_WIDTH);
        if !report {
            continue;
        }
        let compat = &result.compatibility;
        let unsupported: Vec<String> = compat.unsupported_chars.iter().map(char::to_string).collect();
        let _ = writeln!(
            out,
            "    high unicode: {}, renders: {:.0}%, unsupported: {}",
            if compat.contains_high_unicode { "yes" } else { "no" },
            compat.supported_ratio * 100.0,
            if unsupported.is_empty() { "-".to_string() } else { unsupported.join(" ") }
        );
        if compat.needs_warning() && !compat.recommended_fonts.is_empty() {
            let _ = writeln!(out, "    ⚠ may not display everywhere, install: {}", compat.recommended_fonts.join(", "));
        }
    }
    out
}

/// The text that gets copied for a style conversion: one styled line per style.
pub fn styled_copy_text(results: &[StyledText]) -> String {
    results.iter().map(|r| r.text.as_str()).collect::<Vec<_>>().join("\n")
}

pub fn format_palette() -> String {
    palette::palette().chunks(PALETTE_COLUMNS).map(|row| row.join(" ")).collect::<Vec<_>>().join("\n")
}

pub fn format_font_status(status: &[FontStatus]) -> String {
    status
        .iter()
        .map(|s| format!("{:<width$}{}", s.family, if s.available { "available" } else { "missing" }, width = STYLE_NAME_WIDTH))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn log_font_status(fonts: &SystemFonts) {
    for status in font_status(fonts) {
        log::debug!("font {}: {}", status.family, if status.available { "available" } else { "missing" });
    }
}

/// Parse a code point given as `0x2500`, `U+2500` or decimal `9472`.
pub fn parse_codepoint(input: &str) -> Result<u32, String> {
    let input = input.trim();
    let parsed = if let Some(hex) = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .or_else(|| input.strip_prefix("U+"))
        .or_else(|| input.strip_prefix("u+"))
    {
        u32::from_str_radix(hex, 16)
    } else {
        input.parse::<u32>()
    };
    match parsed {
        Ok(cp) if cp <= u32::from(char::MAX) => Ok(cp),
        Ok(_) => Err(format!("'{input}' is above the last Unicode code point")),
        Err(err) => Err(format!("invalid code point '{input}': {err}")),
    }
}
