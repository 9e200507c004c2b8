use pretty_assertions::assert_eq;
use wizard_engine::{render_pixel_art, Atlas, Layout};

const FG: &str = "❤️";
const BG: &str = "⬜";

fn token_count(line: &str) -> usize {
    line.matches(FG).count() + line.matches(BG).count()
}

#[test]
fn test_single_letter_vertical() {
    crate::init_logging();
    let art = render_pixel_art("A", FG, BG, Layout::Vertical).unwrap();
    let lines: Vec<&str> = art.split('\n').collect();
    assert_eq!(lines.len(), 7);
    assert_eq!(
        lines,
        vec![
            "⬜❤️❤️❤️⬜",
            "❤️⬜⬜⬜❤️",
            "❤️⬜⬜⬜❤️",
            "❤️❤️❤️❤️❤️",
            "❤️⬜⬜⬜❤️",
            "❤️⬜⬜⬜❤️",
            "❤️⬜⬜⬜❤️",
        ]
    );
}

#[test]
fn test_rows_follow_bitmap() {
    let art = render_pixel_art("z", "#", ".", Layout::Vertical).unwrap();
    let z = Atlas::builtin().lookup('Z').unwrap();
    for (line, row) in art.lines().zip(z.rows()) {
        let expected: String = row.iter().map(|&lit| if lit { '#' } else { '.' }).collect();
        assert_eq!(line, expected);
    }
}

#[test]
fn test_two_letters_horizontal() {
    let art = render_pixel_art("AB", FG, BG, Layout::Horizontal).unwrap();
    let lines: Vec<&str> = art.split('\n').collect();
    assert_eq!(lines.len(), 7);
    for line in &lines {
        assert_eq!(token_count(line), 11);
    }
    assert_eq!(lines[0], "⬜❤️❤️❤️⬜⬜❤️❤️❤️❤️⬜");
}

#[test]
fn test_horizontal_ascii_glyphs() {
    let art = render_pixel_art("HI", "#", ".", Layout::Horizontal).unwrap();
    assert_eq!(
        art,
        "#...#.#####\n#...#...#..\n#...#...#..\n#####...#..\n#...#...#..\n#...#...#..\n#...#.#####"
    );
}

#[test]
fn test_vertical_blocks_are_separated_by_blank_line() {
    let art = render_pixel_art("I 1", "#", ".", Layout::Vertical).unwrap();
    let blocks: Vec<&str> = art.split("\n\n").collect();
    assert_eq!(blocks.len(), 3);
    assert_eq!(blocks[1], [".....", ".....", ".....", ".....", ".....", ".....", "....."].join("\n"));
    assert!(!art.ends_with('\n'));
}

#[test]
fn test_unknown_character_renders_blank() {
    crate::init_logging();
    let art = render_pixel_art("😀", FG, BG, Layout::Vertical).unwrap();
    assert_eq!(art, vec!["⬜⬜⬜⬜⬜"; 7].join("\n"));

    let art = render_pixel_art("A😀B", "#", ".", Layout::Horizontal).unwrap();
    for line in art.lines() {
        assert_eq!(line.len(), 17);
        assert_eq!(&line[5..12], ".......");
    }
}

#[test]
fn test_multi_codepoint_emoji_is_one_block() {
    let art = render_pixel_art("❤️", "#", ".", Layout::Horizontal).unwrap();
    assert_eq!(art, vec!["....."; 7].join("\n"));
}

#[test]
fn test_cjk_glyphs() {
    let art = render_pixel_art("我爱你", "#", ".", Layout::Horizontal).unwrap();
    let first = art.lines().next().unwrap();
    assert_eq!(first, "..#....#.#...#..#");
}

#[test]
fn test_text_is_trimmed() {
    let trimmed = render_pixel_art("OK", "#", ".", Layout::Horizontal);
    assert_eq!(render_pixel_art("  OK \t", "#", ".", Layout::Horizontal), trimmed);
}

#[test]
fn test_case_insensitive() {
    assert_eq!(
        render_pixel_art("love", FG, BG, Layout::Vertical),
        render_pixel_art("LOVE", FG, BG, Layout::Vertical)
    );
}

#[test]
fn test_render_is_deterministic() {
    for layout in Layout::ALL {
        let first = render_pixel_art("I Love U ❤️", FG, BG, layout);
        assert!(first.is_some());
        assert_eq!(render_pixel_art("I Love U ❤️", FG, BG, layout), first);
    }
}

#[test]
fn test_declines_to_render() {
    assert_eq!(render_pixel_art(" \n ", FG, BG, Layout::Vertical), None);
    assert_eq!(render_pixel_art("A", "", BG, Layout::Vertical), None);
    assert_eq!(render_pixel_art("A", FG, "  ", Layout::Horizontal), None);
}
