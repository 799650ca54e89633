// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

//! The implicit grouping decision for quantifiers.
//!
//! A quantifier binds to the preceding element only, so content that
//! renders as more than one element must be wrapped in a
//! noncapturing group first: `(?:ab)+` rather than `ab+`. The
//! decision is made by inspecting the shape of the content node,
//! never by re-parsing rendered text.

use crate::ast::{NodeKind, QuantifierKind};
use crate::pattern::Pattern;

/**
 * Whether the content must be wrapped in `(?:...)` before a
 * quantifier token is appended.
 *
 * - Chained content (the node has a predecessor) always wraps: the
 *   quantifier must bind to the whole sequence, not its last element.
 * - A literal of more than one character wraps: the quantifier must
 *   bind to the whole text, not its last character.
 * - A single character, a predefined class, or a construct that is
 *   already delimited by its own tokens (a group, a bracketed class,
 *   an assertion, a conditional) never wraps.
 * - A bare alternation wraps, as does an already-quantified element
 *   (`(?:a?)*` rather than the ambiguous `a?*`).
 */
pub(crate) fn requires_group(content: &Pattern) -> bool {
    if content.node.previous.get().is_some() {
        return true;
    }

    match &content.node.kind {
        NodeKind::Literal { text, ignore_case } => {
            // with ignore_case the text renders inside (?i:...),
            // which is already delimited
            if *ignore_case {
                false
            } else {
                text.chars().count() > 1
            }
        }
        NodeKind::Char(_)
        | NodeKind::AnyChar
        | NodeKind::CharClass(_)
        | NodeKind::CharGroup { .. }
        | NodeKind::CharSubtraction(_)
        | NodeKind::Group { .. }
        | NodeKind::Assertion { .. }
        | NodeKind::Backreference(_)
        | NodeKind::Comment(_)
        | NodeKind::Conditional { .. }
        | NodeKind::Anchor(_) => false,
        NodeKind::InlineOptions { content, .. } => content.is_none(),
        NodeKind::Alternation(_) | NodeKind::Quantifier { .. } | NodeKind::Surround { .. } => {
            true
        }
    }
}

/// Append the quantifier token, and the lazy `?` suffix if requested.
pub(crate) fn append_quantifier_token(buffer: &mut String, kind: &QuantifierKind, lazy: bool) {
    match kind {
        QuantifierKind::Maybe => buffer.push('?'),
        QuantifierKind::MaybeMany => buffer.push('*'),
        QuantifierKind::OneMany => buffer.push('+'),
        QuantifierKind::Count(n) => {
            buffer.push('{');
            buffer.push_str(&n.to_string());
            buffer.push('}');
        }
        QuantifierKind::CountFrom(n) => {
            buffer.push('{');
            buffer.push_str(&n.to_string());
            buffer.push_str(",}");
        }
        QuantifierKind::CountRange(min, max) => {
            buffer.push('{');
            buffer.push_str(&min.to_string());
            buffer.push(',');
            buffer.push_str(&max.to_string());
            buffer.push('}');
        }
    }

    if lazy {
        buffer.push('?');
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{append_quantifier_token, requires_group};
    use crate::ast::QuantifierKind;
    use crate::pattern::IntoPattern;
    use crate::patterns;

    #[test]
    fn test_quantifier_tokens() {
        let cases = [
            (QuantifierKind::Maybe, false, "?"),
            (QuantifierKind::Maybe, true, "??"),
            (QuantifierKind::MaybeMany, false, "*"),
            (QuantifierKind::MaybeMany, true, "*?"),
            (QuantifierKind::OneMany, false, "+"),
            (QuantifierKind::OneMany, true, "+?"),
            (QuantifierKind::Count(3), false, "{3}"),
            (QuantifierKind::CountFrom(2), false, "{2,}"),
            (QuantifierKind::CountRange(2, 5), false, "{2,5}"),
            (QuantifierKind::CountRange(2, 5), true, "{2,5}?"),
        ];
        for (kind, lazy, expected) in cases {
            let mut buffer = String::new();
            append_quantifier_token(&mut buffer, &kind, lazy);
            assert_eq!(buffer, expected);
        }
    }

    #[test]
    fn test_atomic_content_needs_no_group() {
        assert!(!requires_group(&'x'.into_pattern().unwrap()));
        assert!(!requires_group(&"x".into_pattern().unwrap()));
        assert!(!requires_group(&patterns::digit()));
        assert!(!requires_group(&patterns::any_char()));
        assert!(!requires_group(&patterns::group("ab")));
        assert!(!requires_group(&patterns::look_ahead("ab")));
    }

    #[test]
    fn test_multi_char_literal_needs_group() {
        assert!(requires_group(&"ab".into_pattern().unwrap()));
    }

    #[test]
    fn test_chained_content_needs_group() {
        let chained = 'a'.into_pattern().unwrap().concat('b');
        assert!(requires_group(&chained));
    }

    #[test]
    fn test_alternation_and_quantified_content_need_group() {
        let alternation = patterns::text("a").or("b");
        assert!(requires_group(&alternation));

        let quantified = patterns::text("a").maybe();
        assert!(requires_group(&quantified));
    }

    #[test]
    fn test_rendered_wrapping() {
        assert_eq!(patterns::maybe("ab").to_regex_string().unwrap(), "(?:ab)?");
        assert_eq!(patterns::maybe("a").to_regex_string().unwrap(), "a?");
        assert_eq!(
            patterns::one_many(patterns::text("a").concat("b"))
                .to_regex_string()
                .unwrap(),
            "(?:ab)+"
        );
        assert_eq!(
            patterns::maybe_many(patterns::digit())
                .to_regex_string()
                .unwrap(),
            "\\d*"
        );
    }
}
