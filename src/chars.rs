// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

//! The character group factory functions.
//!
//! Each function starts a [`CharGrouping`] chain; further members are
//! appended with the fluent methods on the returned value:
//!
//! ```
//! use regex_fluent::{chars, patterns};
//!
//! let hex = patterns::char_group(chars::digit().range('a', 'f').unwrap());
//! assert_eq!(hex.to_regex_string().unwrap(), "[\\da-f]");
//! ```

use crate::ast::CharClassKind;
use crate::chargroup::{CharGrouping, GroupItemKind};
use crate::error::PatternError;
use crate::syntax::check_char_code;
use crate::unicode::{GeneralCategory, NamedBlock};

/// A single character member.
pub fn character(c: char) -> CharGrouping {
    CharGrouping::from_kind(GroupItemKind::Char(c as u32))
}

/// A single character member by numeric code within `[0, 0xFFFF]`.
pub fn code(code: u32) -> Result<CharGrouping, PatternError> {
    check_char_code(code)?;
    Ok(CharGrouping::from_kind(GroupItemKind::Char(code)))
}

/// A member holding every character of the text; the text must not
/// be empty.
pub fn chars(text: &str) -> Result<CharGrouping, PatternError> {
    if text.is_empty() {
        return Err(PatternError::EmptyCharSet);
    }
    Ok(CharGrouping::from_kind(GroupItemKind::Chars(
        text.to_owned(),
    )))
}

/// An inclusive character range member.
pub fn range(first: char, last: char) -> Result<CharGrouping, PatternError> {
    range_codes(first as u32, last as u32)
}

/// An inclusive character range member by numeric codes.
pub fn range_codes(first: u32, last: u32) -> Result<CharGrouping, PatternError> {
    crate::chargroup::check_range_codes(first, last)?;
    Ok(CharGrouping::from_kind(GroupItemKind::Range {
        first,
        last,
    }))
}

/// A predefined class member.
pub fn char_class(kind: CharClassKind) -> CharGrouping {
    CharGrouping::from_kind(GroupItemKind::CharClass(kind))
}

/// `\d`
pub fn digit() -> CharGrouping {
    char_class(CharClassKind::Digit)
}

/// `\D`
pub fn not_digit() -> CharGrouping {
    char_class(CharClassKind::NotDigit)
}

/// `\w`
pub fn word_char() -> CharGrouping {
    char_class(CharClassKind::WordChar)
}

/// `\W`
pub fn not_word_char() -> CharGrouping {
    char_class(CharClassKind::NotWordChar)
}

/// `\s`
pub fn white_space() -> CharGrouping {
    char_class(CharClassKind::WhiteSpace)
}

/// `\S`
pub fn not_white_space() -> CharGrouping {
    char_class(CharClassKind::NotWhiteSpace)
}

/// A Unicode general category member, `\p{Xx}`.
pub fn general_category(category: GeneralCategory) -> CharGrouping {
    CharGrouping::from_kind(GroupItemKind::GeneralCategory {
        category,
        negative: false,
    })
}

/// A negated Unicode general category member, `\P{Xx}`.
pub fn not_general_category(category: GeneralCategory) -> CharGrouping {
    CharGrouping::from_kind(GroupItemKind::GeneralCategory {
        category,
        negative: true,
    })
}

/// A Unicode named block member, `\p{IsXxx}`.
pub fn named_block(block: NamedBlock) -> CharGrouping {
    CharGrouping::from_kind(GroupItemKind::NamedBlock {
        block,
        negative: false,
    })
}

/// A negated Unicode named block member, `\P{IsXxx}`.
pub fn not_named_block(block: NamedBlock) -> CharGrouping {
    CharGrouping::from_kind(GroupItemKind::NamedBlock {
        block,
        negative: true,
    })
}

/// `_`
pub fn underscore() -> CharGrouping {
    character('_')
}

/// `a-z` and `A-Z`.
pub fn latin_letters() -> CharGrouping {
    CharGrouping::from_kind(GroupItemKind::Range {
        first: 'a' as u32,
        last: 'z' as u32,
    })
    .concat(CharGrouping::from_kind(GroupItemKind::Range {
        first: 'A' as u32,
        last: 'Z' as u32,
    }))
}

/// `a-z`, `A-Z` and `0-9`.
pub fn alphanumeric() -> CharGrouping {
    latin_letters().concat(CharGrouping::from_kind(GroupItemKind::Range {
        first: '0' as u32,
        last: '9' as u32,
    }))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::patterns::char_group;

    fn rendered(items: CharGrouping) -> String {
        char_group(items).to_regex_string().unwrap()
    }

    #[test]
    fn test_factory_members() {
        assert_eq!(rendered(character('a')), "[a]");
        assert_eq!(rendered(code(0x41).unwrap()), "[A]");
        assert_eq!(rendered(chars("abc").unwrap()), "[abc]");
        assert_eq!(rendered(range('0', '9').unwrap()), "[0-9]");
        assert_eq!(rendered(digit()), "[\\d]");
        assert_eq!(rendered(underscore()), "[_]");
        assert_eq!(rendered(latin_letters()), "[a-zA-Z]");
        assert_eq!(rendered(alphanumeric()), "[a-zA-Z0-9]");
    }

    #[test]
    fn test_unicode_members() {
        assert_eq!(
            rendered(general_category(GeneralCategory::LetterUppercase)),
            "[\\p{Lu}]"
        );
        assert_eq!(
            rendered(not_general_category(GeneralCategory::LetterUppercase)),
            "[\\P{Lu}]"
        );
        assert_eq!(rendered(named_block(NamedBlock::BasicLatin)), "[\\p{IsBasicLatin}]");
        assert_eq!(
            rendered(not_named_block(NamedBlock::BasicLatin)),
            "[\\P{IsBasicLatin}]"
        );
    }

    #[test]
    fn test_chained_members_keep_order() {
        let items = digit().underscore().range('a', 'f').unwrap();
        assert_eq!(rendered(items), "[\\d_a-f]");
    }

    #[test]
    fn test_validation() {
        assert!(matches!(chars(""), Err(PatternError::EmptyCharSet)));
        assert!(matches!(
            range('z', 'a'),
            Err(PatternError::InvalidCharRange { .. })
        ));
        assert!(matches!(
            code(0xD800),
            Err(PatternError::CharCodeOutOfRange(_))
        ));
    }
}
