//! Unit tests for segment rendering

use mclang::formatting::render::{describe, to_ansi, to_html, ANSI_RESET};
use mclang::formatting::segment;

#[test]
fn ansi_uses_truecolor_and_flags() {
    let out = to_ansi(&segment("§c§lHot"));
    assert_eq!(out, format!("\x1b[0;38;2;255;85;85;1mHot{}", ANSI_RESET));
}

#[test]
fn ansi_of_empty_text_is_empty() {
    assert_eq!(to_ansi(&segment("")), "");
}

#[test]
fn html_escapes_text_and_sets_styles() {
    let out = to_html(&segment("§n<b>&"));
    assert!(out.contains("&lt;b&gt;&amp;"));
    assert!(out.contains("text-decoration: underline"));
    assert!(out.contains("color: #FFFFFF"));
}

#[test]
fn describe_lists_one_segment_per_line() {
    let out = describe(&segment("§6Gold §lBold"));
    assert_eq!(out.lines().count(), 2);
    assert!(out.contains("\"Gold \""));
    assert!(out.contains("#FFAA00"));
    assert!(out.contains("bold"));
}
