//! Unit tests for the formatting-code engine

use mclang::formatting::{
    code_for_color, codes_of_kind, contains_formatting, lookup, plain_text, segment,
    strip_formatting, unknown_codes, CodeKind, Rgb, Scanner, Segment, TextStyle,
    UnknownCodePolicy, FORMAT_CODES,
};

fn colored(hex: &str) -> TextStyle {
    TextStyle {
        color: Rgb::from_hex(hex).unwrap(),
        ..TextStyle::default()
    }
}

#[test]
fn table_has_sixteen_colors_five_styles_one_reset() {
    assert_eq!(FORMAT_CODES.len(), 22);
    assert_eq!(codes_of_kind(CodeKind::Color).count(), 16);
    assert_eq!(codes_of_kind(CodeKind::Style).count(), 5);
    assert_eq!(codes_of_kind(CodeKind::Reset).count(), 1);
}

#[test]
fn suffixes_are_case_sensitive() {
    assert!(lookup('c').is_some());
    assert!(lookup('C').is_none());
    assert!(!contains_formatting("§C"));
    assert_eq!(strip_formatting("§LBold"), "§LBold");
}

#[test]
fn color_lookup_by_rgb() {
    let gold = code_for_color(Rgb::new(0xFF, 0xAA, 0x00)).unwrap();
    assert_eq!(gold.suffix, '6');
    assert_eq!(gold.name, "Gold");
    assert!(code_for_color(Rgb::new(1, 2, 3)).is_none());
}

#[test]
fn contains_formatting_examples() {
    assert!(contains_formatting("§aHello"));
    assert!(contains_formatting("plain §r"));
    assert!(!contains_formatting("Hello"));
    assert!(!contains_formatting("§"));
    assert!(!contains_formatting("§z"));
    assert!(!contains_formatting(""));
}

#[test]
fn strip_formatting_examples() {
    assert_eq!(strip_formatting("§aHello §lWorld"), "Hello World");
    assert_eq!(strip_formatting("No codes"), "No codes");
    assert_eq!(strip_formatting("trailing §"), "trailing §");
    assert_eq!(strip_formatting("§zkept"), "§zkept");
    assert_eq!(strip_formatting(""), "");
}

#[test]
fn strip_is_single_pass() {
    assert_eq!(strip_formatting("§§ll"), "§l");
}

#[test]
fn strip_twice_removes_code_exposed_by_adjacent_sentinels() {
    let once = strip_formatting("§§ll");
    assert_eq!(once, "§l");
    assert_eq!(strip_formatting(&once), "");
}

#[test]
fn strip_is_idempotent_for_separated_sentinels() {
    let text = "§6§lThe §zBeginning§";
    let once = strip_formatting(text);
    assert_eq!(once, "The §zBeginning§");
    assert_eq!(strip_formatting(&once), once);
}

#[test]
fn segment_empty_input() {
    assert!(segment("").is_empty());
}

#[test]
fn segment_plain_text_is_one_default_segment() {
    assert_eq!(
        segment("Hello"),
        vec![Segment::new("Hello", TextStyle::default())]
    );
}

#[test]
fn segment_color_then_decoration() {
    let segments = segment("§6Gold §lBold");
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0], Segment::new("Gold ", colored("#FFAA00")));
    assert_eq!(
        segments[1],
        Segment::new(
            "Bold",
            TextStyle {
                bold: true,
                ..colored("#FFAA00")
            }
        )
    );
}

#[test]
fn decorations_are_sticky_across_color_changes() {
    let segments = segment("§l§cRed§9Blue");
    assert_eq!(segments.len(), 2);
    assert!(segments[0].style.bold);
    assert!(segments[1].style.bold);
    assert_eq!(segments[1].style.color, Rgb::new(0x55, 0x55, 0xFF));
}

#[test]
fn reset_restores_default_style() {
    let segments = segment("§c§nRed§rPlain");
    assert_eq!(segments.len(), 2);
    assert!(segments[0].style.underline);
    assert_eq!(segments[1].style, TextStyle::default());
    assert_eq!(segments[1].text, "Plain");
}

#[test]
fn codes_at_end_produce_no_empty_segment() {
    let segments = segment("Text§c§l");
    assert_eq!(segments, vec![Segment::new("Text", TextStyle::default())]);
}

#[test]
fn trailing_sentinel_is_literal() {
    let segments = segment("§aEnd§");
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].text, "End§");
}

#[test]
fn redundant_code_does_not_split_run() {
    let bold = TextStyle {
        bold: true,
        ..TextStyle::default()
    };
    assert_eq!(segment("§lA§lB"), vec![Segment::new("AB", bold)]);
    assert_eq!(
        segment("A§fB"),
        vec![Segment::new("AB", TextStyle::default())]
    );
}

#[test]
fn obfuscated_has_no_visible_effect() {
    let segments = segment("A§kB");
    assert_eq!(segments, vec![Segment::new("AB", TextStyle::default())]);
}

#[test]
fn unknown_code_is_swallowed_by_default() {
    assert_eq!(
        segment("A§zB"),
        vec![Segment::new("AB", TextStyle::default())]
    );
}

#[test]
fn unknown_code_is_kept_with_literal_policy() {
    let scanner = Scanner::new(UnknownCodePolicy::Literal);
    let segments = scanner.segment("A§zB");
    assert_eq!(plain_text(&segments), "A§zB");
    assert_eq!(plain_text(&segments), strip_formatting("A§zB"));
}

#[test]
fn concatenation_matches_strip_for_known_codes() {
    let text = "§6§lThe §r§bBeginning of §ntime§";
    assert_eq!(plain_text(&segment(text)), strip_formatting(text));
}

#[test]
fn unknown_codes_reports_character_offsets() {
    let unknown = unknown_codes("ä§zb§c§Y");
    assert_eq!(unknown.len(), 2);
    assert_eq!(unknown[0].offset, 1);
    assert_eq!(unknown[0].token(), "§z");
    assert_eq!(unknown[1].offset, 6);
    assert_eq!(unknown[1].suffix, 'Y');
}

#[test]
fn multibyte_text_survives_segmentation() {
    let segments = segment("§a日本語§oテキスト");
    assert_eq!(plain_text(&segments), "日本語テキスト");
    assert!(segments[1].style.italic);
}
