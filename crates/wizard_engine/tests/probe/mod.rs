use std::path::{Path, PathBuf};

use wizard_engine::{transform_styles, FontStackProbe, RenderProbe};

const SERIF: &str = "tests/probe/fonts/DejaVuSerif.ttf";
const MATH: &str = "tests/probe/fonts/DejaVuMathTeXGyre.ttf";

fn stack(paths: &[&str]) -> FontStackProbe {
    super::init_logging();
    let paths: Vec<PathBuf> = paths.iter().map(PathBuf::from).collect();
    let probe = FontStackProbe::load(&paths);
    assert_eq!(probe.len(), paths.len(), "fixture fonts must load");
    probe
}

#[test]
fn test_covered_letter_renders() {
    let probe = stack(&[SERIF]);
    assert!(probe.can_render('A'));
    assert!(probe.can_render('z'));
}

#[test]
fn test_missing_glyph_does_not_render() {
    let probe = stack(&[SERIF]);
    // no cmap entry, the lookup lands on .notdef
    assert!(!probe.can_render('你'));
    assert!(!probe.can_render('𝔄'));
}

#[test]
fn test_second_font_covers_gap() {
    let probe = stack(&[SERIF, MATH]);
    assert!(probe.can_render('𝔄'));
    assert!(probe.can_render('A'));
    assert!(!probe.can_render('你'));
    assert_eq!(probe.font_paths().collect::<Vec<_>>(), vec![Path::new(SERIF), Path::new(MATH)]);
}

#[test]
fn test_font_data_from_memory() {
    let mut probe = FontStackProbe::new();
    probe.push_font_data(MATH, std::fs::read(MATH).unwrap()).unwrap();
    assert!(probe.can_render('𝔄'));
}

#[test]
fn test_styles_fall_back_without_fraktur_font() {
    let probe = stack(&[SERIF]);
    let results = transform_styles("Ab", &probe).unwrap();
    let fraktur = &results[0];
    assert_eq!(fraktur.style_name, "Fraktur");
    assert_eq!(fraktur.text, "𝔄𝔟");
    assert_eq!(fraktur.compatibility.unsupported_chars, vec!['𝔄', '𝔟']);
    assert!(fraktur.compatibility.needs_warning());
}
