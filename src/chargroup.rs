// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

//! The character class algebra.
//!
//! A `CharGrouping` is an ordered bag of set members rendered
//! consecutively inside `[...]`. Members chain through the same
//! intrusive back link as pattern nodes, so a fluent call chain like
//! `digit().underscore().range('a', 'f')` accumulates members without
//! rebuilding anything.

use std::cell::OnceCell;
use std::collections::HashSet;
use std::rc::Rc;

use crate::ast::CharClassKind;
use crate::error::PatternError;
use crate::syntax::{check_char_code, MAX_CHAR_CODE};
use crate::unicode::{GeneralCategory, NamedBlock};

/// A chain of character group members.
///
/// The handle points at the newest member; earlier members are
/// reached through back links and rendered in append order.
#[derive(Debug, Clone)]
pub struct CharGrouping {
    pub(crate) item: Rc<GroupItem>,
}

#[derive(Debug)]
pub(crate) struct GroupItem {
    pub(crate) kind: GroupItemKind,
    pub(crate) previous: OnceCell<Rc<GroupItem>>,
}

/// Iterative teardown of the member chain; see the `Drop` impl of
/// the pattern node.
impl Drop for GroupItem {
    fn drop(&mut self) {
        let mut current = self.previous.take();
        while let Some(item) = current {
            current = match Rc::try_unwrap(item) {
                Ok(mut inner) => inner.previous.take(),
                Err(_) => None,
            };
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) enum GroupItemKind {
    /// A single character by code point.
    Char(u32),

    /// A literal character set; never empty.
    Chars(String),

    /// An inclusive character range.
    Range { first: u32, last: u32 },

    /// A predefined class, `\d` and friends.
    CharClass(CharClassKind),

    /// `\p{Xx}` or `\P{Xx}`.
    GeneralCategory {
        category: GeneralCategory,
        negative: bool,
    },

    /// `\p{IsXxx}` or `\P{IsXxx}`.
    NamedBlock { block: NamedBlock, negative: bool },
}

impl CharGrouping {
    pub(crate) fn from_kind(kind: GroupItemKind) -> Self {
        CharGrouping {
            item: Rc::new(GroupItem {
                kind,
                previous: OnceCell::new(),
            }),
        }
    }

    pub fn character(self, c: char) -> Self {
        self.concat(CharGrouping::from_kind(GroupItemKind::Char(c as u32)))
    }

    /// Append a character by numeric code. The code must be within
    /// `[0, 0xFFFF]` and not a surrogate.
    pub fn code(self, code: u32) -> Result<Self, PatternError> {
        check_char_code(code)?;
        Ok(self.concat(CharGrouping::from_kind(GroupItemKind::Char(code))))
    }

    /// Append every character of the text as a set member.
    /// An empty text is rejected.
    pub fn chars(self, text: &str) -> Result<Self, PatternError> {
        if text.is_empty() {
            return Err(PatternError::EmptyCharSet);
        }
        Ok(self.concat(CharGrouping::from_kind(GroupItemKind::Chars(
            text.to_owned(),
        ))))
    }

    /// Append an inclusive character range. `last` must not be lower
    /// than `first`.
    pub fn range(self, first: char, last: char) -> Result<Self, PatternError> {
        self.range_codes(first as u32, last as u32)
    }

    /// Append an inclusive range of character codes.
    pub fn range_codes(self, first: u32, last: u32) -> Result<Self, PatternError> {
        check_range_codes(first, last)?;
        Ok(self.concat(CharGrouping::from_kind(GroupItemKind::Range {
            first,
            last,
        })))
    }

    pub fn char_class(self, kind: CharClassKind) -> Self {
        self.concat(CharGrouping::from_kind(GroupItemKind::CharClass(kind)))
    }

    pub fn digit(self) -> Self {
        self.char_class(CharClassKind::Digit)
    }

    pub fn not_digit(self) -> Self {
        self.char_class(CharClassKind::NotDigit)
    }

    pub fn word_char(self) -> Self {
        self.char_class(CharClassKind::WordChar)
    }

    pub fn not_word_char(self) -> Self {
        self.char_class(CharClassKind::NotWordChar)
    }

    pub fn white_space(self) -> Self {
        self.char_class(CharClassKind::WhiteSpace)
    }

    pub fn not_white_space(self) -> Self {
        self.char_class(CharClassKind::NotWhiteSpace)
    }

    pub fn general_category(self, category: GeneralCategory) -> Self {
        self.concat(CharGrouping::from_kind(GroupItemKind::GeneralCategory {
            category,
            negative: false,
        }))
    }

    pub fn not_general_category(self, category: GeneralCategory) -> Self {
        self.concat(CharGrouping::from_kind(GroupItemKind::GeneralCategory {
            category,
            negative: true,
        }))
    }

    pub fn named_block(self, block: NamedBlock) -> Self {
        self.concat(CharGrouping::from_kind(GroupItemKind::NamedBlock {
            block,
            negative: false,
        }))
    }

    pub fn not_named_block(self, block: NamedBlock) -> Self {
        self.concat(CharGrouping::from_kind(GroupItemKind::NamedBlock {
            block,
            negative: true,
        }))
    }

    // named ASCII characters, for fluent chains like
    // `digit().underscore().hyphen()`

    pub fn underscore(self) -> Self {
        self.character('_')
    }

    pub fn hyphen(self) -> Self {
        self.character('-')
    }

    pub fn dot(self) -> Self {
        self.character('.')
    }

    pub fn comma(self) -> Self {
        self.character(',')
    }

    pub fn colon(self) -> Self {
        self.character(':')
    }

    pub fn semicolon(self) -> Self {
        self.character(';')
    }

    pub fn slash(self) -> Self {
        self.character('/')
    }

    pub fn backslash(self) -> Self {
        self.character('\\')
    }

    pub fn apostrophe(self) -> Self {
        self.character('\'')
    }

    pub fn quote_mark(self) -> Self {
        self.character('"')
    }

    pub fn space(self) -> Self {
        self.character(' ')
    }

    /**
     * Concatenate two member chains.
     *
     * The incoming chain is attached at its own head: the head's
     * back link is rewritten to point at this chain's tail, so the
     * incoming chain keeps its internal order. The back link is
     * write-once; the head discovered by the walk has none by
     * definition, except when the incoming chain is already circular,
     * in which case the link is left alone and serialization reports
     * the cycle.
     */
    pub fn concat(self, other: CharGrouping) -> CharGrouping {
        let mut visited: HashSet<*const GroupItem> = HashSet::new();
        let mut head = Rc::clone(&other.item);
        loop {
            if !visited.insert(Rc::as_ptr(&head)) {
                break;
            }
            let previous = head.previous.get().cloned();
            match previous {
                Some(p) => head = p,
                None => break,
            }
        }

        if head.previous.get().is_none() && head.previous.set(Rc::clone(&self.item)).is_err() {
            unreachable!()
        }

        CharGrouping { item: other.item }
    }

    /// The number of members; a circular chain is truncated at the
    /// first repeat.
    #[cfg(test)]
    pub(crate) fn member_count(&self) -> usize {
        let mut visited: HashSet<*const GroupItem> = HashSet::new();
        let mut current = Some(Rc::clone(&self.item));
        let mut count = 0;
        while let Some(item) = current {
            if !visited.insert(Rc::as_ptr(&item)) {
                break;
            }
            count += 1;
            current = item.previous.get().cloned();
        }
        count
    }
}

pub(crate) fn check_range_codes(first: u32, last: u32) -> Result<(), PatternError> {
    check_char_code(first)?;
    check_char_code(last)?;
    if last < first {
        return Err(PatternError::InvalidCharRange { first, last });
    }
    debug_assert!(last <= MAX_CHAR_CODE);
    Ok(())
}

/**
 * A character class subtraction, rendered as `[base-[excluded]]`.
 *
 * The operand positions have different rendering contracts: the base
 * renders unwrapped inside the outer brackets, while the excluded
 * side always renders as a bracketed class of its own, even when it
 * is a single character or another subtraction. The operand types
 * enforce which constructs may appear on each side.
 */
#[derive(Debug, Clone)]
pub struct CharSubtraction {
    pub(crate) base: BaseOperand,
    pub(crate) excluded: ExcludedOperand,
    pub(crate) negative: bool,
}

impl CharSubtraction {
    pub fn new(base: impl Into<BaseOperand>, excluded: impl Into<ExcludedOperand>) -> Self {
        CharSubtraction {
            base: base.into(),
            excluded: excluded.into(),
            negative: false,
        }
    }

    /// Flip the outer negation flag; the operands are untouched.
    pub fn invert(self) -> Self {
        CharSubtraction {
            negative: !self.negative,
            ..self
        }
    }
}

/// A construct allowed on the left of a subtraction: it knows how to
/// render itself unwrapped, directly inside the outer brackets.
#[derive(Debug, Clone)]
pub enum BaseOperand {
    Items(CharGrouping),
    Class(CharClassKind),
}

/// A construct allowed on the right of a subtraction: it knows how
/// to render itself as a self-contained bracketed class.
#[derive(Debug, Clone)]
pub enum ExcludedOperand {
    Items(CharGrouping),
    Class(CharClassKind),
    Subtraction(Box<CharSubtraction>),
}

impl From<CharGrouping> for BaseOperand {
    fn from(items: CharGrouping) -> Self {
        BaseOperand::Items(items)
    }
}

impl From<CharClassKind> for BaseOperand {
    fn from(kind: CharClassKind) -> Self {
        BaseOperand::Class(kind)
    }
}

impl From<char> for BaseOperand {
    fn from(c: char) -> Self {
        BaseOperand::Items(CharGrouping::from_kind(GroupItemKind::Char(c as u32)))
    }
}

impl From<CharGrouping> for ExcludedOperand {
    fn from(items: CharGrouping) -> Self {
        ExcludedOperand::Items(items)
    }
}

impl From<CharClassKind> for ExcludedOperand {
    fn from(kind: CharClassKind) -> Self {
        ExcludedOperand::Class(kind)
    }
}

impl From<char> for ExcludedOperand {
    fn from(c: char) -> Self {
        ExcludedOperand::Items(CharGrouping::from_kind(GroupItemKind::Char(c as u32)))
    }
}

impl From<CharSubtraction> for ExcludedOperand {
    fn from(subtraction: CharSubtraction) -> Self {
        ExcludedOperand::Subtraction(Box::new(subtraction))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{CharGrouping, CharSubtraction, GroupItemKind};
    use crate::error::PatternError;

    #[test]
    fn test_grouping_chain_order() {
        let grouping = CharGrouping::from_kind(GroupItemKind::Char('a' as u32))
            .character('b')
            .digit()
            .underscore();
        assert_eq!(grouping.member_count(), 4);

        // the handle points at the newest member
        assert!(matches!(
            grouping.item.kind,
            GroupItemKind::Char(code) if code == '_' as u32
        ));
    }

    #[test]
    fn test_grouping_concat_attaches_at_head() {
        let left = CharGrouping::from_kind(GroupItemKind::Char('a' as u32)).character('b');
        let right = CharGrouping::from_kind(GroupItemKind::Char('c' as u32)).character('d');
        let joined = left.concat(right);
        assert_eq!(joined.member_count(), 4);
    }

    #[test]
    fn test_long_member_chain_drop_does_not_overflow() {
        let mut grouping = CharGrouping::from_kind(GroupItemKind::Char('a' as u32));
        for _ in 0..100_000 {
            grouping = grouping.character('a');
        }
        drop(grouping);
    }

    #[test]
    fn test_empty_char_set_is_rejected() {
        let grouping = CharGrouping::from_kind(GroupItemKind::Char('a' as u32));
        assert!(matches!(
            grouping.chars(""),
            Err(PatternError::EmptyCharSet)
        ));
    }

    #[test]
    fn test_range_validation() {
        let grouping = CharGrouping::from_kind(GroupItemKind::Char('a' as u32));
        assert!(matches!(
            grouping.clone().range_codes(10, 5),
            Err(PatternError::InvalidCharRange { first: 10, last: 5 })
        ));
        assert!(matches!(
            grouping.clone().range_codes(0, 0x10000),
            Err(PatternError::CharCodeOutOfRange(0x10000))
        ));
        assert!(grouping.range('a', 'z').is_ok());
    }

    #[test]
    fn test_code_validation() {
        let grouping = CharGrouping::from_kind(GroupItemKind::Char('a' as u32));
        assert!(matches!(
            grouping.clone().code(0xD800),
            Err(PatternError::CharCodeOutOfRange(0xD800))
        ));
        assert!(grouping.code(0xFFFF).is_ok());
    }

    #[test]
    fn test_subtraction_invert_flips_only_outer_flag() {
        let grouping = CharGrouping::from_kind(GroupItemKind::Range {
            first: 'a' as u32,
            last: 'z' as u32,
        });
        let subtraction = CharSubtraction::new(grouping, 'q');
        assert!(!subtraction.negative);
        let inverted = subtraction.invert();
        assert!(inverted.negative);
        let restored = inverted.invert();
        assert!(!restored.negative);
    }
}
