// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use crate::chargroup::{CharGrouping, CharSubtraction};
use crate::pattern::Pattern;
use crate::settings::RegexOptions;

/**
 * The pattern node variants.
 *
 * A node is a value with structural identity. Content nesting
 * (the `Pattern` fields below) uses ordinary ownership; sequential
 * concatenation is a sibling relationship recorded separately by
 * the node's back link, see the `pattern` module.
 */
#[derive(Debug, Clone)]
pub enum NodeKind {
    /// A text literal. With `ignore_case` the text renders inside a
    /// `(?i:...)` scope.
    Literal { text: String, ignore_case: bool },

    /// A single character, stored as its code point.
    Char(u32),

    /// `.`
    AnyChar,

    /// One of the predefined classes: `\d` `\D` `\s` `\S` `\w` `\W`.
    CharClass(CharClassKind),

    /// A bracketed character group, `[...]` or `[^...]`.
    CharGroup { items: CharGrouping, negative: bool },

    /// A character class subtraction, `[base-[excluded]]`.
    CharSubtraction(CharSubtraction),

    Group { kind: GroupKind, content: Pattern },

    /// A quantified element. Whether the content needs an implicit
    /// noncapturing group is decided structurally at render time,
    /// see the `quantify` module.
    Quantifier {
        content: Pattern,
        kind: QuantifierKind,
        lazy: bool,
    },

    /// A zero-width lookaround assertion.
    Assertion { kind: AssertionKind, content: Pattern },

    /// Branches joined by `|`, with no surrounding delimiters.
    Alternation(Vec<Pattern>),

    /// `(?(test)yes|no)`
    Conditional {
        test: ConditionalTest,
        yes: Pattern,
        no: Option<Pattern>,
    },

    Backreference(GroupReference),

    /// Scoped inline options `(?imnsx-imnsx:...)`, or the standalone
    /// form `(?imnsx-imnsx)` when `content` is absent.
    InlineOptions {
        apply: RegexOptions,
        disable: RegexOptions,
        content: Option<Pattern>,
    },

    /// `(?#...)`
    Comment(String),

    /// Arbitrary content wrapped between two other patterns.
    Surround {
        before: Pattern,
        content: Pattern,
        after: Pattern,
    },

    /// A zero-width anchor: `\A` `^` `\z` `$` `\Z` `\b` `\B` `\G`.
    Anchor(AnchorKind),
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum CharClassKind {
    Digit,
    NotDigit,
    WordChar,
    NotWordChar,
    WhiteSpace,
    NotWhiteSpace,
}

impl CharClassKind {
    /// The structural complement, e.g. digit to non-digit.
    pub fn invert(&self) -> CharClassKind {
        match self {
            CharClassKind::Digit => CharClassKind::NotDigit,
            CharClassKind::NotDigit => CharClassKind::Digit,
            CharClassKind::WordChar => CharClassKind::NotWordChar,
            CharClassKind::NotWordChar => CharClassKind::WordChar,
            CharClassKind::WhiteSpace => CharClassKind::NotWhiteSpace,
            CharClassKind::NotWhiteSpace => CharClassKind::WhiteSpace,
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            CharClassKind::Digit => "\\d",
            CharClassKind::NotDigit => "\\D",
            CharClassKind::WordChar => "\\w",
            CharClassKind::NotWordChar => "\\W",
            CharClassKind::WhiteSpace => "\\s",
            CharClassKind::NotWhiteSpace => "\\S",
        }
    }
}

#[derive(Debug, Clone)]
pub enum GroupKind {
    /// `(...)`
    Capturing,

    /// `(?<name>...)` or `(?'name'...)` depending on the settings.
    Named(String),

    /// `(?:...)`
    Noncapturing,

    /// `(?>...)`
    Nonbacktracking,

    /// `(?<name-previous_name>...)`
    Balancing { name: String, previous_name: String },
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum QuantifierKind {
    Maybe,                // ?
    MaybeMany,            // *
    OneMany,              // +
    Count(u32),           // {n}
    CountFrom(u32),       // {n,}
    CountRange(u32, u32), // {n,m}
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum AssertionKind {
    Ahead,     // (?=
    NotAhead,  // (?!
    Behind,    // (?<=
    NotBehind, // (?<!
}

impl AssertionKind {
    pub fn invert(&self) -> AssertionKind {
        match self {
            AssertionKind::Ahead => AssertionKind::NotAhead,
            AssertionKind::NotAhead => AssertionKind::Ahead,
            AssertionKind::Behind => AssertionKind::NotBehind,
            AssertionKind::NotBehind => AssertionKind::Behind,
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            AssertionKind::Ahead => "(?=",
            AssertionKind::NotAhead => "(?!",
            AssertionKind::Behind => "(?<=",
            AssertionKind::NotBehind => "(?<!",
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum AnchorKind {
    BeginningOfInput,                // \A
    BeginningOfLine,                 // ^
    EndOfInput,                      // \z
    EndOfLine,                       // $
    EndOfInputOrBeforeEndingNewline, // \Z
    WordBoundary,                    // \b
    NotWordBoundary,                 // \B
    PreviousMatchEnd,                // \G
}

impl AnchorKind {
    pub fn token(&self) -> &'static str {
        match self {
            AnchorKind::BeginningOfInput => "\\A",
            AnchorKind::BeginningOfLine => "^",
            AnchorKind::EndOfInput => "\\z",
            AnchorKind::EndOfLine => "$",
            AnchorKind::EndOfInputOrBeforeEndingNewline => "\\Z",
            AnchorKind::WordBoundary => "\\b",
            AnchorKind::NotWordBoundary => "\\B",
            AnchorKind::PreviousMatchEnd => "\\G",
        }
    }
}

/// The target of a backreference.
#[derive(Debug, PartialEq, Clone)]
pub enum GroupReference {
    Number(u32),
    Name(String),
}

/// The test part of a conditional.
#[derive(Debug, Clone)]
pub enum ConditionalTest {
    GroupNumber(u32),
    GroupName(String),

    /// An arbitrary pattern; rendered in lookahead assertion form
    /// when the settings request it.
    Assertion(Pattern),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{AssertionKind, CharClassKind};

    #[test]
    fn test_char_class_invert() {
        assert_eq!(CharClassKind::Digit.invert(), CharClassKind::NotDigit);
        assert_eq!(CharClassKind::NotDigit.invert(), CharClassKind::Digit);
        assert_eq!(CharClassKind::WordChar.invert(), CharClassKind::NotWordChar);
        assert_eq!(
            CharClassKind::WhiteSpace.invert(),
            CharClassKind::NotWhiteSpace
        );
        assert_eq!(
            CharClassKind::WhiteSpace.invert().invert(),
            CharClassKind::WhiteSpace
        );
    }

    #[test]
    fn test_assertion_invert() {
        assert_eq!(AssertionKind::Ahead.invert(), AssertionKind::NotAhead);
        assert_eq!(AssertionKind::Behind.invert(), AssertionKind::NotBehind);
        assert_eq!(AssertionKind::NotBehind.invert(), AssertionKind::Behind);
    }
}
