// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

//! The escaping table.
//!
//! Every character rendered into a pattern goes through
//! `escape_mode_for` first. The escape action depends on whether the
//! character appears inside a bracketed character group, because the
//! two positions have different metacharacter sets, e.g. '-' is only
//! special inside a group while '|' is only special outside one.

use crate::error::PatternError;

/// The highest character code accepted by the numeric code APIs.
pub const MAX_CHAR_CODE: u32 = 0xFFFF;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum EscapeMode {
    /// Emit the character literally.
    None,

    /// Emit `\xHH`.
    AsciiHexEscape,

    /// Emit a backslash followed by the character itself.
    BackslashLiteral,

    // Named control escapes.
    Bell,           // 0x07, `\a`
    CarriageReturn, // 0x0D, `\r`
    Escape,         // 0x1B, `\e`
    FormFeed,       // 0x0C, `\f`
    Linefeed,       // 0x0A, `\n`
    Tab,            // 0x09, `\t`
    VerticalTab,    // 0x0B, `\v`
}

/**
 * Select the escape action for a character code.
 *
 * Total over all code points. Control characters without a dedicated
 * mnemonic are hex-escaped. The caret and the hyphen are only special
 * at particular positions inside a character group, but both are
 * escaped unconditionally so the produced text never depends on the
 * item position.
 */
pub fn escape_mode_for(code: u32, in_char_group: bool) -> EscapeMode {
    match code {
        0x00..=0x06 => EscapeMode::AsciiHexEscape,
        0x07 => EscapeMode::Bell,
        0x08 => EscapeMode::AsciiHexEscape,
        0x09 => EscapeMode::Tab,
        0x0A => EscapeMode::Linefeed,
        0x0B => EscapeMode::VerticalTab,
        0x0C => EscapeMode::FormFeed,
        0x0D => EscapeMode::CarriageReturn,
        0x0E..=0x1A => EscapeMode::AsciiHexEscape,
        0x1B => EscapeMode::Escape,
        0x1C..=0x1F => EscapeMode::AsciiHexEscape,
        0x7F => EscapeMode::AsciiHexEscape,
        _ => {
            let is_meta = if in_char_group {
                matches!(code, 0x5E /* ^ */ | 0x2D /* - */ | 0x5B /* [ */ | 0x5D /* ] */ | 0x5C /* \ */)
            } else {
                matches!(
                    code,
                    0x2E /* . */
                        | 0x24 /* $ */
                        | 0x5E /* ^ */
                        | 0x7B /* { */
                        | 0x5B /* [ */
                        | 0x28 /* ( */
                        | 0x7C /* | */
                        | 0x29 /* ) */
                        | 0x2A /* * */
                        | 0x2B /* + */
                        | 0x3F /* ? */
                        | 0x5C /* \ */
                )
            };

            if is_meta {
                EscapeMode::BackslashLiteral
            } else {
                EscapeMode::None
            }
        }
    }
}

/// Append the escaped form of a character code to the buffer.
///
/// The code must be a valid Unicode scalar value; the numeric code
/// constructors guarantee this by validating with `check_char_code`.
pub fn append_escaped(buffer: &mut String, code: u32, in_char_group: bool) {
    match escape_mode_for(code, in_char_group) {
        EscapeMode::None => {
            if let Some(c) = char::from_u32(code) {
                buffer.push(c);
            }
        }
        EscapeMode::AsciiHexEscape => {
            buffer.push_str(&format!("\\x{:02X}", code));
        }
        EscapeMode::BackslashLiteral => {
            buffer.push('\\');
            if let Some(c) = char::from_u32(code) {
                buffer.push(c);
            }
        }
        EscapeMode::Bell => buffer.push_str("\\a"),
        EscapeMode::CarriageReturn => buffer.push_str("\\r"),
        EscapeMode::Escape => buffer.push_str("\\e"),
        EscapeMode::FormFeed => buffer.push_str("\\f"),
        EscapeMode::Linefeed => buffer.push_str("\\n"),
        EscapeMode::Tab => buffer.push_str("\\t"),
        EscapeMode::VerticalTab => buffer.push_str("\\v"),
    }
}

/// Append the escaped form of every character of the text.
pub fn append_escaped_text(buffer: &mut String, text: &str, in_char_group: bool) {
    for c in text.chars() {
        append_escaped(buffer, c as u32, in_char_group);
    }
}

/// Validate a numeric character code.
///
/// Codes above `0xFFFF` are rejected, as are the surrogate codes
/// `0xD800..=0xDFFF` which are not Unicode scalar values and cannot
/// be placed into the output string.
pub fn check_char_code(code: u32) -> Result<(), PatternError> {
    if code > MAX_CHAR_CODE || (0xD800..=0xDFFF).contains(&code) {
        Err(PatternError::CharCodeOutOfRange(code))
    } else {
        Ok(())
    }
}

/// Validate a capture group name: non-empty, word characters only,
/// not starting with a digit.
pub fn check_group_name(name: &str) -> Result<(), PatternError> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(PatternError::InvalidGroupName(name.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{append_escaped, check_char_code, check_group_name, escape_mode_for, EscapeMode};
    use crate::error::PatternError;

    fn escaped(code: u32, in_char_group: bool) -> String {
        let mut s = String::new();
        append_escaped(&mut s, code, in_char_group);
        s
    }

    #[test]
    fn test_escape_mode_for_control_chars() {
        assert_eq!(escape_mode_for(0x00, false), EscapeMode::AsciiHexEscape);
        assert_eq!(escape_mode_for(0x06, false), EscapeMode::AsciiHexEscape);
        assert_eq!(escape_mode_for(0x07, false), EscapeMode::Bell);
        assert_eq!(escape_mode_for(0x08, false), EscapeMode::AsciiHexEscape);
        assert_eq!(escape_mode_for(0x09, false), EscapeMode::Tab);
        assert_eq!(escape_mode_for(0x0A, false), EscapeMode::Linefeed);
        assert_eq!(escape_mode_for(0x0B, false), EscapeMode::VerticalTab);
        assert_eq!(escape_mode_for(0x0C, false), EscapeMode::FormFeed);
        assert_eq!(escape_mode_for(0x0D, false), EscapeMode::CarriageReturn);
        assert_eq!(escape_mode_for(0x0E, false), EscapeMode::AsciiHexEscape);
        assert_eq!(escape_mode_for(0x1A, false), EscapeMode::AsciiHexEscape);
        assert_eq!(escape_mode_for(0x1B, false), EscapeMode::Escape);
        assert_eq!(escape_mode_for(0x1C, false), EscapeMode::AsciiHexEscape);
        assert_eq!(escape_mode_for(0x1F, false), EscapeMode::AsciiHexEscape);
        assert_eq!(escape_mode_for(0x7F, false), EscapeMode::AsciiHexEscape);

        // the mnemonics apply inside a character group as well
        assert_eq!(escape_mode_for(0x07, true), EscapeMode::Bell);
        assert_eq!(escape_mode_for(0x0A, true), EscapeMode::Linefeed);
    }

    #[test]
    fn test_escape_mode_for_metachars() {
        // outside a character group
        for c in ['.', '$', '^', '{', '[', '(', '|', ')', '*', '+', '?', '\\'] {
            assert_eq!(
                escape_mode_for(c as u32, false),
                EscapeMode::BackslashLiteral,
                "char {:?}",
                c
            );
        }

        // ']' and '}' are never ambiguous where the builder emits them
        assert_eq!(escape_mode_for(']' as u32, false), EscapeMode::None);
        assert_eq!(escape_mode_for('}' as u32, false), EscapeMode::None);

        // inside a character group
        for c in ['^', '-', '[', ']', '\\'] {
            assert_eq!(
                escape_mode_for(c as u32, true),
                EscapeMode::BackslashLiteral,
                "char {:?}",
                c
            );
        }

        // these lose their special meaning inside a group
        for c in ['.', '$', '{', '(', '|', ')', '*', '+', '?'] {
            assert_eq!(escape_mode_for(c as u32, true), EscapeMode::None, "char {:?}", c);
        }
    }

    #[test]
    fn test_escape_mode_for_ordinary_chars() {
        assert_eq!(escape_mode_for('a' as u32, false), EscapeMode::None);
        assert_eq!(escape_mode_for('Z' as u32, false), EscapeMode::None);
        assert_eq!(escape_mode_for('0' as u32, false), EscapeMode::None);
        assert_eq!(escape_mode_for('_' as u32, false), EscapeMode::None);
        assert_eq!(escape_mode_for(' ' as u32, false), EscapeMode::None);
        assert_eq!(escape_mode_for('中' as u32, false), EscapeMode::None);
    }

    #[test]
    fn test_append_escaped() {
        assert_eq!(escaped(0x00, false), "\\x00");
        assert_eq!(escaped(0x1F, false), "\\x1F");
        assert_eq!(escaped(0x7F, false), "\\x7F");
        assert_eq!(escaped(0x07, false), "\\a");
        assert_eq!(escaped(0x09, false), "\\t");
        assert_eq!(escaped(0x0A, false), "\\n");
        assert_eq!(escaped(0x0B, false), "\\v");
        assert_eq!(escaped(0x0C, false), "\\f");
        assert_eq!(escaped(0x0D, false), "\\r");
        assert_eq!(escaped(0x1B, false), "\\e");
        assert_eq!(escaped('.' as u32, false), "\\.");
        assert_eq!(escaped('.' as u32, true), ".");
        assert_eq!(escaped('-' as u32, false), "-");
        assert_eq!(escaped('-' as u32, true), "\\-");
        assert_eq!(escaped('a' as u32, false), "a");
    }

    #[test]
    fn test_check_char_code() {
        assert!(check_char_code(0).is_ok());
        assert!(check_char_code(0xFFFF).is_ok());
        assert!(matches!(
            check_char_code(0x10000),
            Err(PatternError::CharCodeOutOfRange(0x10000))
        ));
        assert!(matches!(
            check_char_code(0xD800),
            Err(PatternError::CharCodeOutOfRange(0xD800))
        ));
        assert!(matches!(
            check_char_code(0xDFFF),
            Err(PatternError::CharCodeOutOfRange(_))
        ));
    }

    #[test]
    fn test_check_group_name() {
        assert!(check_group_name("word").is_ok());
        assert!(check_group_name("_1").is_ok());
        assert!(check_group_name("group_2").is_ok());
        assert!(matches!(
            check_group_name(""),
            Err(PatternError::InvalidGroupName(_))
        ));
        assert!(matches!(
            check_group_name("1a"),
            Err(PatternError::InvalidGroupName(_))
        ));
        assert!(matches!(
            check_group_name("a-b"),
            Err(PatternError::InvalidGroupName(_))
        ));
        assert!(matches!(
            check_group_name("a b"),
            Err(PatternError::InvalidGroupName(_))
        ));
    }
}
