//! The fixed table of `§` formatting codes.
//!
//! Every code is the section sign followed by a single suffix character.
//! The table is constant data; lookups go through [`lookup`].

use super::types::{Rgb, TextStyle};

/// The control sentinel that starts every formatting code (U+00A7).
pub const SENTINEL: char = '\u{00A7}';

/// Broad category of a formatting code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodeKind {
    Color,
    Style,
    Reset,
}

/// What a code does to the style state when the scanner meets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Color(Rgb),
    Obfuscated,
    Bold,
    Strikethrough,
    Underline,
    Italic,
    Reset,
}

/// One entry of the formatting code table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatCode {
    /// Character following the sentinel (case-sensitive)
    pub suffix: char,
    /// Display name, e.g. "Dark Aqua"
    pub name: &'static str,
    pub effect: Effect,
}

impl FormatCode {
    const fn color(suffix: char, name: &'static str, r: u8, g: u8, b: u8) -> Self {
        Self {
            suffix,
            name,
            effect: Effect::Color(Rgb::new(r, g, b)),
        }
    }

    const fn other(suffix: char, name: &'static str, effect: Effect) -> Self {
        Self {
            suffix,
            name,
            effect,
        }
    }

    /// The two-character token, e.g. `"§c"`.
    pub fn token(&self) -> String {
        format!("{}{}", SENTINEL, self.suffix)
    }

    pub fn kind(&self) -> CodeKind {
        match self.effect {
            Effect::Color(_) => CodeKind::Color,
            Effect::Reset => CodeKind::Reset,
            _ => CodeKind::Style,
        }
    }

    /// RGB value, present only for color codes.
    pub fn rgb(&self) -> Option<Rgb> {
        match self.effect {
            Effect::Color(rgb) => Some(rgb),
            _ => None,
        }
    }

    /// Apply this code to a style state.
    ///
    /// Colors overwrite the color only; decoration codes set their flag;
    /// obfuscated has no visible effect; reset restores the defaults.
    pub fn apply(&self, style: &mut TextStyle) {
        match self.effect {
            Effect::Color(rgb) => style.color = rgb,
            Effect::Bold => style.bold = true,
            Effect::Italic => style.italic = true,
            Effect::Underline => style.underline = true,
            Effect::Strikethrough => style.strikethrough = true,
            Effect::Obfuscated => {}
            Effect::Reset => *style = TextStyle::default(),
        }
    }
}

/// All 22 formatting codes in table order.
pub static FORMAT_CODES: [FormatCode; 22] = [
    FormatCode::color('0', "Black", 0x00, 0x00, 0x00),
    FormatCode::color('1', "Dark Blue", 0x00, 0x00, 0xAA),
    FormatCode::color('2', "Dark Green", 0x00, 0xAA, 0x00),
    FormatCode::color('3', "Dark Aqua", 0x00, 0xAA, 0xAA),
    FormatCode::color('4', "Dark Red", 0xAA, 0x00, 0x00),
    FormatCode::color('5', "Dark Purple", 0xAA, 0x00, 0xAA),
    FormatCode::color('6', "Gold", 0xFF, 0xAA, 0x00),
    FormatCode::color('7', "Gray", 0xAA, 0xAA, 0xAA),
    FormatCode::color('8', "Dark Gray", 0x55, 0x55, 0x55),
    FormatCode::color('9', "Blue", 0x55, 0x55, 0xFF),
    FormatCode::color('a', "Green", 0x55, 0xFF, 0x55),
    FormatCode::color('b', "Aqua", 0x55, 0xFF, 0xFF),
    FormatCode::color('c', "Red", 0xFF, 0x55, 0x55),
    FormatCode::color('d', "Light Purple", 0xFF, 0x55, 0xFF),
    FormatCode::color('e', "Yellow", 0xFF, 0xFF, 0x55),
    FormatCode::color('f', "White", 0xFF, 0xFF, 0xFF),
    FormatCode::other('k', "Obfuscated", Effect::Obfuscated),
    FormatCode::other('l', "Bold", Effect::Bold),
    FormatCode::other('m', "Strikethrough", Effect::Strikethrough),
    FormatCode::other('n', "Underline", Effect::Underline),
    FormatCode::other('o', "Italic", Effect::Italic),
    FormatCode::other('r', "Reset", Effect::Reset),
];

/// Find the code for a suffix character.
pub fn lookup(suffix: char) -> Option<&'static FormatCode> {
    FORMAT_CODES.iter().find(|code| code.suffix == suffix)
}

/// Check whether a character is a valid code suffix.
pub fn is_code_suffix(c: char) -> bool {
    matches!(c, '0'..='9' | 'a'..='f' | 'k'..='o' | 'r')
}

/// Find the code whose color matches `rgb`, if any.
pub fn code_for_color(rgb: Rgb) -> Option<&'static FormatCode> {
    FORMAT_CODES.iter().find(|code| code.rgb() == Some(rgb))
}

/// Codes of one kind, in table order.
pub fn codes_of_kind(kind: CodeKind) -> impl Iterator<Item = &'static FormatCode> {
    FORMAT_CODES.iter().filter(move |code| code.kind() == kind)
}
