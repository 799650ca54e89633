// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

//! The pattern factory functions.
//!
//! Thin convenience constructors over the node model; the starting
//! point of most fluent chains:
//!
//! ```
//! use regex_fluent::patterns;
//!
//! let pattern = patterns::named_group(
//!     "word",
//!     patterns::one_many(patterns::word_char()),
//! )
//! .unwrap();
//! assert_eq!(pattern.to_regex_string().unwrap(), "(?<word>\\w+)");
//! ```

use crate::ast::{
    AnchorKind, AssertionKind, CharClassKind, ConditionalTest, GroupKind, GroupReference,
    NodeKind, QuantifierKind,
};
use crate::chargroup::{BaseOperand, CharGrouping, CharSubtraction, ExcludedOperand};
use crate::error::PatternError;
use crate::pattern::{IntoPattern, Pattern};
use crate::settings::RegexOptions;
use crate::syntax::{check_char_code, check_group_name};

fn content_of(content: impl IntoPattern) -> Pattern {
    content.into_pattern().unwrap_or_else(Pattern::empty)
}

// ---------------------------------------------------------------
// literals and characters
// ---------------------------------------------------------------

/// A text literal; every character is escaped as needed.
pub fn text(value: &str) -> Pattern {
    match value.into_pattern() {
        Some(pattern) => pattern,
        None => Pattern::empty(),
    }
}

/// A text literal matched case-insensitively, rendered inside a
/// `(?i:...)` scope.
pub fn text_ignore_case(value: &str) -> Pattern {
    Pattern::from_kind(NodeKind::Literal {
        text: value.to_owned(),
        ignore_case: true,
    })
}

/// A single character.
pub fn character(c: char) -> Pattern {
    Pattern::from_kind(NodeKind::Char(c as u32))
}

/// A single character by numeric code within `[0, 0xFFFF]`.
pub fn unicode(code: u32) -> Result<Pattern, PatternError> {
    check_char_code(code)?;
    Ok(Pattern::from_kind(NodeKind::Char(code)))
}

/// `.`
pub fn any_char() -> Pattern {
    Pattern::from_kind(NodeKind::AnyChar)
}

pub fn tab() -> Pattern {
    Pattern::from_kind(NodeKind::Char(0x09))
}

pub fn linefeed() -> Pattern {
    Pattern::from_kind(NodeKind::Char(0x0A))
}

pub fn carriage_return() -> Pattern {
    Pattern::from_kind(NodeKind::Char(0x0D))
}

// ---------------------------------------------------------------
// predefined character classes
// ---------------------------------------------------------------

/// `\d`
pub fn digit() -> Pattern {
    Pattern::from_kind(NodeKind::CharClass(CharClassKind::Digit))
}

/// `\D`
pub fn not_digit() -> Pattern {
    Pattern::from_kind(NodeKind::CharClass(CharClassKind::NotDigit))
}

/// `\w`
pub fn word_char() -> Pattern {
    Pattern::from_kind(NodeKind::CharClass(CharClassKind::WordChar))
}

/// `\W`
pub fn not_word_char() -> Pattern {
    Pattern::from_kind(NodeKind::CharClass(CharClassKind::NotWordChar))
}

/// `\s`
pub fn white_space() -> Pattern {
    Pattern::from_kind(NodeKind::CharClass(CharClassKind::WhiteSpace))
}

/// `\S`
pub fn not_white_space() -> Pattern {
    Pattern::from_kind(NodeKind::CharClass(CharClassKind::NotWhiteSpace))
}

// ---------------------------------------------------------------
// anchors
// ---------------------------------------------------------------

/// `\A`
pub fn beginning_of_input() -> Pattern {
    Pattern::from_kind(NodeKind::Anchor(AnchorKind::BeginningOfInput))
}

/// `^`
pub fn beginning_of_line() -> Pattern {
    Pattern::from_kind(NodeKind::Anchor(AnchorKind::BeginningOfLine))
}

/// `\z`
pub fn end_of_input() -> Pattern {
    Pattern::from_kind(NodeKind::Anchor(AnchorKind::EndOfInput))
}

/// `$`
pub fn end_of_line() -> Pattern {
    Pattern::from_kind(NodeKind::Anchor(AnchorKind::EndOfLine))
}

/// `\Z`
pub fn end_of_input_or_before_ending_newline() -> Pattern {
    Pattern::from_kind(NodeKind::Anchor(
        AnchorKind::EndOfInputOrBeforeEndingNewline,
    ))
}

/// `\b`
pub fn word_boundary() -> Pattern {
    Pattern::from_kind(NodeKind::Anchor(AnchorKind::WordBoundary))
}

/// `\B`
pub fn not_word_boundary() -> Pattern {
    Pattern::from_kind(NodeKind::Anchor(AnchorKind::NotWordBoundary))
}

/// `\G`
pub fn previous_match_end() -> Pattern {
    Pattern::from_kind(NodeKind::Anchor(AnchorKind::PreviousMatchEnd))
}

// ---------------------------------------------------------------
// groups
// ---------------------------------------------------------------

/// A capturing group, `(...)`.
pub fn group(content: impl IntoPattern) -> Pattern {
    Pattern::from_kind(NodeKind::Group {
        kind: GroupKind::Capturing,
        content: content_of(content),
    })
}

/// A named capturing group, `(?<name>...)`.
pub fn named_group(name: &str, content: impl IntoPattern) -> Result<Pattern, PatternError> {
    check_group_name(name)?;
    Ok(Pattern::from_kind(NodeKind::Group {
        kind: GroupKind::Named(name.to_owned()),
        content: content_of(content),
    }))
}

/// A noncapturing group, `(?:...)`.
pub fn noncapturing_group(content: impl IntoPattern) -> Pattern {
    Pattern::from_kind(NodeKind::Group {
        kind: GroupKind::Noncapturing,
        content: content_of(content),
    })
}

/// A nonbacktracking (atomic) group, `(?>...)`.
pub fn nonbacktracking_group(content: impl IntoPattern) -> Pattern {
    Pattern::from_kind(NodeKind::Group {
        kind: GroupKind::Nonbacktracking,
        content: content_of(content),
    })
}

/// A balancing group, `(?<name-previous_name>...)`.
pub fn balancing_group(
    name: &str,
    previous_name: &str,
    content: impl IntoPattern,
) -> Result<Pattern, PatternError> {
    check_group_name(name)?;
    check_group_name(previous_name)?;
    Ok(Pattern::from_kind(NodeKind::Group {
        kind: GroupKind::Balancing {
            name: name.to_owned(),
            previous_name: previous_name.to_owned(),
        },
        content: content_of(content),
    }))
}

// ---------------------------------------------------------------
// lookaround assertions
// ---------------------------------------------------------------

/// A positive lookahead, `(?=...)`.
pub fn look_ahead(content: impl IntoPattern) -> Pattern {
    assertion(AssertionKind::Ahead, content)
}

/// A negative lookahead, `(?!...)`.
pub fn not_look_ahead(content: impl IntoPattern) -> Pattern {
    assertion(AssertionKind::NotAhead, content)
}

/// A positive lookbehind, `(?<=...)`.
pub fn look_behind(content: impl IntoPattern) -> Pattern {
    assertion(AssertionKind::Behind, content)
}

/// A negative lookbehind, `(?<!...)`.
pub fn not_look_behind(content: impl IntoPattern) -> Pattern {
    assertion(AssertionKind::NotBehind, content)
}

fn assertion(kind: AssertionKind, content: impl IntoPattern) -> Pattern {
    Pattern::from_kind(NodeKind::Assertion {
        kind,
        content: content_of(content),
    })
}

// ---------------------------------------------------------------
// quantifiers
// ---------------------------------------------------------------

/// `?`; the content is wrapped in a noncapturing group when it is
/// not a single quantifiable element.
pub fn maybe(content: impl IntoPattern) -> Pattern {
    quantified(content, QuantifierKind::Maybe)
}

/// `*`
pub fn maybe_many(content: impl IntoPattern) -> Pattern {
    quantified(content, QuantifierKind::MaybeMany)
}

/// `+`
pub fn one_many(content: impl IntoPattern) -> Pattern {
    quantified(content, QuantifierKind::OneMany)
}

/// `{n}`
pub fn count(number: u32, content: impl IntoPattern) -> Pattern {
    quantified(content, QuantifierKind::Count(number))
}

/// `{n,}`
pub fn count_from(min: u32, content: impl IntoPattern) -> Pattern {
    quantified(content, QuantifierKind::CountFrom(min))
}

/// `{n,m}`; `max` must not be lower than `min`.
pub fn count_range(
    min: u32,
    max: u32,
    content: impl IntoPattern,
) -> Result<Pattern, PatternError> {
    if max < min {
        return Err(PatternError::InvalidRepeatRange { min, max });
    }
    Ok(quantified(content, QuantifierKind::CountRange(min, max)))
}

fn quantified(content: impl IntoPattern, kind: QuantifierKind) -> Pattern {
    Pattern::from_kind(NodeKind::Quantifier {
        content: content_of(content),
        kind,
        lazy: false,
    })
}

// ---------------------------------------------------------------
// alternation and conditionals
// ---------------------------------------------------------------

/// Any of the branches, `(?:a|b|c)`.
pub fn any<I, T>(branches: I) -> Pattern
where
    I: IntoIterator<Item = T>,
    T: IntoPattern,
{
    let branches: Vec<Pattern> = branches
        .into_iter()
        .map(|branch| branch.into_pattern().unwrap_or_else(Pattern::empty))
        .collect();
    noncapturing_group(Pattern::from_kind(NodeKind::Alternation(branches)))
}

/// `(?(n)yes|no)`; matches `yes` when group number `n` participated
/// in the match.
pub fn if_group(number: u32, yes: impl IntoPattern, no: impl IntoPattern) -> Pattern {
    conditional(ConditionalTest::GroupNumber(number), yes, no)
}

/// `(?(name)yes|no)`
pub fn if_group_name(
    name: &str,
    yes: impl IntoPattern,
    no: impl IntoPattern,
) -> Result<Pattern, PatternError> {
    check_group_name(name)?;
    Ok(conditional(
        ConditionalTest::GroupName(name.to_owned()),
        yes,
        no,
    ))
}

/// `(?(test)yes|no)`, or `(?(?=test)yes|no)` when the settings
/// request the assertion form.
pub fn if_assert(test: impl IntoPattern, yes: impl IntoPattern, no: impl IntoPattern) -> Pattern {
    conditional(ConditionalTest::Assertion(content_of(test)), yes, no)
}

fn conditional(test: ConditionalTest, yes: impl IntoPattern, no: impl IntoPattern) -> Pattern {
    Pattern::from_kind(NodeKind::Conditional {
        test,
        yes: content_of(yes),
        no: no.into_pattern(),
    })
}

// ---------------------------------------------------------------
// backreferences
// ---------------------------------------------------------------

/// A numbered backreference, `\n`.
pub fn backreference(number: u32) -> Pattern {
    Pattern::from_kind(NodeKind::Backreference(GroupReference::Number(number)))
}

/// A named backreference, `\k<name>`.
pub fn backreference_name(name: &str) -> Result<Pattern, PatternError> {
    check_group_name(name)?;
    Ok(Pattern::from_kind(NodeKind::Backreference(
        GroupReference::Name(name.to_owned()),
    )))
}

// ---------------------------------------------------------------
// inline options and comments
// ---------------------------------------------------------------

/// Apply options to the content, `(?i:...)`.
pub fn options(apply: RegexOptions, content: impl IntoPattern) -> Pattern {
    Pattern::from_kind(NodeKind::InlineOptions {
        apply,
        disable: RegexOptions::NONE,
        content: Some(content_of(content)),
    })
}

/// Disable options for the content, `(?-i:...)`.
pub fn disable_options(disable: RegexOptions, content: impl IntoPattern) -> Pattern {
    Pattern::from_kind(NodeKind::InlineOptions {
        apply: RegexOptions::NONE,
        disable,
        content: Some(content_of(content)),
    })
}

/// The standalone option form, `(?i-m)`; effective until the
/// enclosing group closes.
pub fn inline_options(apply: RegexOptions, disable: RegexOptions) -> Pattern {
    Pattern::from_kind(NodeKind::InlineOptions {
        apply,
        disable,
        content: None,
    })
}

/// An inline comment, `(?#...)`. The text must not contain a
/// closing parenthesis, which cannot be escaped in this position.
pub fn comment(text: &str) -> Result<Pattern, PatternError> {
    if text.contains(')') {
        return Err(PatternError::InvalidComment(text.to_owned()));
    }
    Ok(Pattern::from_kind(NodeKind::Comment(text.to_owned())))
}

// ---------------------------------------------------------------
// character groups
// ---------------------------------------------------------------

/// A bracketed character group, `[...]`.
pub fn char_group(items: CharGrouping) -> Pattern {
    Pattern::from_kind(NodeKind::CharGroup {
        items,
        negative: false,
    })
}

/// A negated character group, `[^...]`.
pub fn not_char_group(items: CharGrouping) -> Pattern {
    Pattern::from_kind(NodeKind::CharGroup {
        items,
        negative: true,
    })
}

/// A group of literal characters, `[abc]`.
pub fn chars(text: &str) -> Result<Pattern, PatternError> {
    Ok(char_group(crate::chars::chars(text)?))
}

/// A negated group of literal characters, `[^abc]`.
pub fn not_chars(text: &str) -> Result<Pattern, PatternError> {
    Ok(not_char_group(crate::chars::chars(text)?))
}

/// A character range group, `[a-z]`.
pub fn range(first: char, last: char) -> Result<Pattern, PatternError> {
    Ok(char_group(crate::chars::range(first, last)?))
}

/// A negated character range group, `[^a-z]`.
pub fn not_range(first: char, last: char) -> Result<Pattern, PatternError> {
    Ok(not_char_group(crate::chars::range(first, last)?))
}

/// A character class subtraction, `[base-[excluded]]`.
pub fn subtract(
    base: impl Into<BaseOperand>,
    excluded: impl Into<ExcludedOperand>,
) -> Pattern {
    Pattern::from_kind(NodeKind::CharSubtraction(CharSubtraction::new(
        base, excluded,
    )))
}

/// A negated character class subtraction, `[^base-[excluded]]`.
pub fn not_subtract(
    base: impl Into<BaseOperand>,
    excluded: impl Into<ExcludedOperand>,
) -> Pattern {
    Pattern::from_kind(NodeKind::CharSubtraction(
        CharSubtraction::new(base, excluded).invert(),
    ))
}

// ---------------------------------------------------------------
// wrappers
// ---------------------------------------------------------------

/// Content wrapped between two other patterns.
pub fn surround(
    before: impl IntoPattern,
    content: impl IntoPattern,
    after: impl IntoPattern,
) -> Pattern {
    Pattern::from_kind(NodeKind::Surround {
        before: content_of(before),
        content: content_of(content),
        after: content_of(after),
    })
}
