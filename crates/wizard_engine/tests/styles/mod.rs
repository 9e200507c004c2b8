use pretty_assertions::assert_eq;
use wizard_engine::{find_style, styles::styles, transform_styles, AssumeRenderable, CodepointCeiling};

fn always_false(_: char) -> bool {
    false
}

#[test]
fn test_results_follow_registry_order() {
    let results = transform_styles("Hello", &AssumeRenderable).unwrap();
    let names: Vec<&str> = results.iter().map(|r| r.style_name).collect();
    let registry: Vec<&str> = styles().iter().map(|s| s.name()).collect();
    assert_eq!(names, registry);
    assert_eq!(results.len(), 6);
}

#[test]
fn test_unrenderable_fallbacks() {
    let results = transform_styles("A", &always_false).unwrap();
    assert_eq!(results[0].style_name, "Fraktur");
    assert_eq!(results[0].text, "𝔄");
    assert_eq!(results[1].style_name, "Cryptic Italic");
    assert_eq!(results[1].text, "*A*");
}

#[test]
fn test_styled_output() {
    let results = transform_styles("I Love U ❤️", &AssumeRenderable).unwrap();
    let texts: Vec<&str> = results.iter().map(|r| r.text.as_str()).collect();
    assert_eq!(
        texts,
        vec![
            "ℑ 𝔏𝔬𝔳𝔢 𝔘 ❤️",
            "ℐ ℒ𝑜𝓋𝑒 𝒰 ❤️",
            "𝖨 𝖫𝗈𝗏𝖾 𝖴 ❤️",
            "Ⓘ Ⓛⓞⓥⓔ Ⓤ ❤️",
            "𝓘 𝓛𝓸𝓿𝓮 𝓤 ❤️",
            "𝕴 𝕷𝖔𝖛𝖊 𝖀 ❤️",
        ]
    );
}

#[test]
fn test_compatibility_with_ceiling_probe() {
    let probe = CodepointCeiling(0x2500);
    let results = transform_styles("ab", &probe).unwrap();

    // bubbles are in range, everything else falls back to ASCII decorations
    let bubbles = results.iter().find(|r| r.style_name == "Light Text Bubbles").unwrap();
    assert_eq!(bubbles.text, "ⓐⓑ");
    assert!(bubbles.compatibility.contains_high_unicode);
    assert!(bubbles.compatibility.unsupported_chars.is_empty());

    let sans = results.iter().find(|r| r.style_name == "Math Sans").unwrap();
    assert_eq!(sans.text, "[a][b]");
    assert!(!sans.compatibility.needs_warning());

    // fallback literals are checked too and reported when they don't render either
    let fraktur = &results[0];
    assert_eq!(fraktur.text, "𝔞𝔟");
    assert_eq!(fraktur.compatibility.unsupported_chars, vec!['𝔞', '𝔟']);
    assert_eq!(fraktur.compatibility.supported_ratio, 0.0);
    assert!(fraktur.compatibility.recommended_fonts.contains(&"DejaVu Sans".to_string()));
}

#[test]
fn test_whitespace_is_preserved() {
    let style = find_style("Fairytale").unwrap();
    assert_eq!(style.transform("  a  ", &AssumeRenderable), "  𝖆  ");
}

#[test]
fn test_transform_is_deterministic() {
    let first = transform_styles("Text Wizard 2024", &CodepointCeiling(0x2500)).unwrap();
    let second = transform_styles("Text Wizard 2024", &CodepointCeiling(0x2500)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_blank_text_is_rejected() {
    let err = transform_styles("\t", &AssumeRenderable).unwrap_err();
    assert!(err.is_validation());
}
