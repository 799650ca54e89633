// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

//! The pattern handle and the composition list.
//!
//! A composite expression is the tail of a singly linked list of
//! nodes: every node carries a write-once back link to the node
//! concatenated before it. Concatenation is therefore O(1) and never
//! rebuilds existing nodes; rendering walks the links tail-to-head
//! onto a stack and pops to recover append order.

use std::cell::OnceCell;
use std::collections::HashSet;
use std::fmt::Display;
use std::rc::Rc;

use crate::ast::{AnchorKind, CharClassKind, NodeKind, QuantifierKind};
use crate::chargroup::{CharGrouping, CharSubtraction, GroupItemKind};
use crate::error::PatternError;
use crate::settings::PatternSettings;
use crate::writer;

/// A handle to a pattern expression.
///
/// Cloning is cheap and produces an alias of the same nodes, not a
/// deep copy. A pattern whose nodes have been concatenated into
/// another expression should not be reused by its original owner;
/// the back link of a node is set exactly once.
#[derive(Debug, Clone)]
pub struct Pattern {
    pub(crate) node: Rc<Node>,
}

#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) kind: NodeKind,
    pub(crate) previous: OnceCell<Rc<Node>>,
}

/// Dropping the tail of a chain must not recurse through the back
/// links, so each `previous` is taken out iteratively while this
/// node is its sole owner. A shared node is left alone; its other
/// handle continues the teardown when it drops.
impl Drop for Node {
    fn drop(&mut self) {
        let mut current = self.previous.take();
        while let Some(node) = current {
            current = match Rc::try_unwrap(node) {
                Ok(mut inner) => inner.previous.take(),
                Err(_) => None,
            };
        }
    }
}

impl Pattern {
    pub(crate) fn from_kind(kind: NodeKind) -> Self {
        Pattern {
            node: Rc::new(Node {
                kind,
                previous: OnceCell::new(),
            }),
        }
    }

    /// A pattern that renders nothing.
    pub(crate) fn empty() -> Self {
        Pattern::from_kind(NodeKind::Literal {
            text: String::new(),
            ignore_case: false,
        })
    }

    /// Rebuild the tail node with a different kind, keeping the
    /// back link of the original tail.
    pub(crate) fn replace_tail_kind(&self, kind: NodeKind) -> Pattern {
        let node = Node {
            kind,
            previous: OnceCell::new(),
        };
        if let Some(previous) = self.node.previous.get() {
            if node.previous.set(Rc::clone(previous)).is_err() {
                unreachable!()
            }
        }
        Pattern { node: Rc::new(node) }
    }

    /**
     * Append content after this pattern.
     *
     * Appending rewrites the back link of the *head* of the incoming
     * fragment, found by walking its links; the fragment keeps its
     * internal order. Rendering the result emits this pattern first,
     * then the fragment. Empty content is a no-op.
     *
     * A fragment whose chain already loops (or which aliases a node
     * of this chain) produces a circular list; the cycle is reported
     * when the pattern is serialized.
     */
    pub fn concat(self, content: impl IntoPattern) -> Pattern {
        let other = match content.into_pattern() {
            Some(p) => p,
            None => return self,
        };

        let mut visited: HashSet<*const Node> = HashSet::new();
        let mut head = Rc::clone(&other.node);
        loop {
            if !visited.insert(Rc::as_ptr(&head)) {
                // already circular, leave it for the serializer to report
                break;
            }
            let previous = head.previous.get().cloned();
            match previous {
                Some(p) => head = p,
                None => break,
            }
        }

        if head.previous.get().is_none() && head.previous.set(Rc::clone(&self.node)).is_err() {
            unreachable!()
        }

        Pattern { node: other.node }
    }

    /// Append an alternation branch. `a.or(b).or(c)` renders as
    /// `a|b|c`; the branches carry no surrounding delimiters.
    pub fn or(self, content: impl IntoPattern) -> Pattern {
        let branch = content
            .into_pattern()
            .unwrap_or_else(Pattern::empty);

        // extend the branch list instead of nesting when the whole
        // expression is a single alternation node
        if self.node.previous.get().is_none() {
            if let NodeKind::Alternation(branches) = &self.node.kind {
                let mut branches = branches.clone();
                branches.push(branch);
                return Pattern::from_kind(NodeKind::Alternation(branches));
            }
        }

        Pattern::from_kind(NodeKind::Alternation(vec![self, branch]))
    }

    /// Apply the `?` quantifier to this whole expression.
    pub fn maybe(self) -> Pattern {
        self.quantified(QuantifierKind::Maybe)
    }

    /// Apply the `*` quantifier to this whole expression.
    pub fn maybe_many(self) -> Pattern {
        self.quantified(QuantifierKind::MaybeMany)
    }

    /// Apply the `+` quantifier to this whole expression.
    pub fn one_many(self) -> Pattern {
        self.quantified(QuantifierKind::OneMany)
    }

    /// Apply the `{n}` quantifier to this whole expression.
    pub fn count(self, count: u32) -> Pattern {
        self.quantified(QuantifierKind::Count(count))
    }

    /// Apply the `{n,}` quantifier to this whole expression.
    pub fn count_from(self, min: u32) -> Pattern {
        self.quantified(QuantifierKind::CountFrom(min))
    }

    /// Apply the `{n,m}` quantifier to this whole expression.
    /// `max` must not be lower than `min`.
    pub fn count_range(self, min: u32, max: u32) -> Result<Pattern, PatternError> {
        if max < min {
            return Err(PatternError::InvalidRepeatRange { min, max });
        }
        Ok(self.quantified(QuantifierKind::CountRange(min, max)))
    }

    fn quantified(self, kind: QuantifierKind) -> Pattern {
        Pattern::from_kind(NodeKind::Quantifier {
            content: self,
            kind,
            lazy: false,
        })
    }

    /// Make the final quantifier lazy, appending `?` to its token.
    /// Has no effect when the final element is not a quantifier.
    pub fn lazy(self) -> Pattern {
        match &self.node.kind {
            NodeKind::Quantifier {
                content,
                kind,
                lazy: _,
            } => self.replace_tail_kind(NodeKind::Quantifier {
                content: content.clone(),
                kind: *kind,
                lazy: true,
            }),
            _ => self,
        }
    }

    /**
     * Replace the final element with its structural complement:
     * digit to non-digit, a character group to its negated group, a
     * lookahead to a negative lookahead, and so on. A single
     * character becomes a negated group containing it. Elements
     * without a complement are rejected.
     */
    pub fn invert(self) -> Result<Pattern, PatternError> {
        let kind = match &self.node.kind {
            NodeKind::Char(code) => NodeKind::CharGroup {
                items: CharGrouping::from_kind(GroupItemKind::Char(*code)),
                negative: true,
            },
            NodeKind::Literal { text, .. } if text.chars().count() == 1 => {
                let c = match text.chars().next() {
                    Some(c) => c,
                    None => unreachable!(),
                };
                NodeKind::CharGroup {
                    items: CharGrouping::from_kind(GroupItemKind::Char(c as u32)),
                    negative: true,
                }
            }
            NodeKind::CharClass(kind) => NodeKind::CharClass(kind.invert()),
            NodeKind::CharGroup { items, negative } => NodeKind::CharGroup {
                items: items.clone(),
                negative: !negative,
            },
            NodeKind::CharSubtraction(subtraction) => {
                NodeKind::CharSubtraction(subtraction.clone().invert())
            }
            NodeKind::Anchor(AnchorKind::WordBoundary) => {
                NodeKind::Anchor(AnchorKind::NotWordBoundary)
            }
            NodeKind::Anchor(AnchorKind::NotWordBoundary) => {
                NodeKind::Anchor(AnchorKind::WordBoundary)
            }
            NodeKind::Assertion { kind, content } => NodeKind::Assertion {
                kind: kind.invert(),
                content: content.clone(),
            },
            _ => return Err(PatternError::NotInvertible),
        };

        Ok(self.replace_tail_kind(kind))
    }

    /// Serialize with default settings.
    pub fn to_regex_string(&self) -> Result<String, PatternError> {
        writer::serialize(self, &PatternSettings::default())
    }

    /// Serialize with the given settings.
    pub fn to_regex_string_with(
        &self,
        settings: &PatternSettings,
    ) -> Result<String, PatternError> {
        writer::serialize(self, settings)
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = self.to_regex_string().map_err(|_| std::fmt::Error)?;
        f.write_str(&text)
    }
}

impl<T> std::ops::Add<T> for Pattern
where
    T: IntoPattern,
{
    type Output = Pattern;

    fn add(self, rhs: T) -> Self::Output {
        self.concat(rhs)
    }
}

impl<T> std::ops::BitOr<T> for Pattern
where
    T: IntoPattern,
{
    type Output = Pattern;

    fn bitor(self, rhs: T) -> Self::Output {
        self.or(rhs)
    }
}

/**
 * Normalization of heterogeneous content.
 *
 * Every API boundary that accepts "content" takes `impl IntoPattern`
 * so that strings, characters, groupings and existing patterns can
 * be passed interchangeably. `None` means "no content": concatenation
 * treats it as a no-op and never emits anything for it.
 */
pub trait IntoPattern {
    fn into_pattern(self) -> Option<Pattern>;
}

impl IntoPattern for Pattern {
    fn into_pattern(self) -> Option<Pattern> {
        Some(self)
    }
}

impl IntoPattern for &Pattern {
    fn into_pattern(self) -> Option<Pattern> {
        Some(self.clone())
    }
}

impl IntoPattern for char {
    fn into_pattern(self) -> Option<Pattern> {
        Some(Pattern::from_kind(NodeKind::Char(self as u32)))
    }
}

impl IntoPattern for &str {
    fn into_pattern(self) -> Option<Pattern> {
        if self.is_empty() {
            None
        } else {
            Some(Pattern::from_kind(NodeKind::Literal {
                text: self.to_owned(),
                ignore_case: false,
            }))
        }
    }
}

impl IntoPattern for String {
    fn into_pattern(self) -> Option<Pattern> {
        if self.is_empty() {
            None
        } else {
            Some(Pattern::from_kind(NodeKind::Literal {
                text: self,
                ignore_case: false,
            }))
        }
    }
}

impl IntoPattern for CharClassKind {
    fn into_pattern(self) -> Option<Pattern> {
        Some(Pattern::from_kind(NodeKind::CharClass(self)))
    }
}

impl IntoPattern for CharGrouping {
    fn into_pattern(self) -> Option<Pattern> {
        Some(Pattern::from_kind(NodeKind::CharGroup {
            items: self,
            negative: false,
        }))
    }
}

impl IntoPattern for CharSubtraction {
    fn into_pattern(self) -> Option<Pattern> {
        Some(Pattern::from_kind(NodeKind::CharSubtraction(self)))
    }
}

impl<T> IntoPattern for Option<T>
where
    T: IntoPattern,
{
    fn into_pattern(self) -> Option<Pattern> {
        self.and_then(|content| content.into_pattern())
    }
}

impl<T> IntoPattern for Vec<T>
where
    T: IntoPattern,
{
    fn into_pattern(self) -> Option<Pattern> {
        let mut result: Option<Pattern> = None;
        for item in self {
            result = match (result, item.into_pattern()) {
                (Some(acc), Some(next)) => Some(acc.concat(next)),
                (None, next) => next,
                (acc, None) => acc,
            };
        }
        result
    }
}
