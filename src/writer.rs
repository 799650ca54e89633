// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

//! The serializer.
//!
//! Walks a composition list in append order and accumulates the
//! final pattern text. The chain is discovered newest-first through
//! the back links, so the walk pushes the nodes onto an explicit
//! stack and pops them to render head-to-tail; no recursion is
//! proportional to chain length, only to content nesting depth.
//!
//! The writer also tracks the ambient applied/disabled inline
//! options (restored when an option scope closes; bookkeeping only,
//! the emitted text is self-contained) and guards against circular
//! chains: a per-chain visited set during discovery, plus a set of
//! the nodes currently being rendered for re-entry through content.

use std::collections::HashSet;
use std::rc::Rc;

use crate::ast::{ConditionalTest, GroupKind, GroupReference, NodeKind};
use crate::chargroup::{
    BaseOperand, CharGrouping, CharSubtraction, ExcludedOperand, GroupItem, GroupItemKind,
};
use crate::error::PatternError;
use crate::pattern::{Node, Pattern};
use crate::quantify;
use crate::settings::{IdentifierBoundary, PatternSettings, RegexOptions};
use crate::syntax::{append_escaped, append_escaped_text};

/// Serialize a pattern into regex text.
///
/// Either fully completes or raises before producing a usable
/// string; nothing about the nodes themselves is mutated.
pub(crate) fn serialize(
    pattern: &Pattern,
    settings: &PatternSettings,
) -> Result<String, PatternError> {
    let mut writer = PatternWriter::new(settings);
    writer.write_pattern(pattern)?;
    Ok(writer.buffer)
}

struct PatternWriter<'a> {
    buffer: String,
    settings: &'a PatternSettings,

    // ambient inline option state, scoped by option groups
    applied_options: RegexOptions,
    disabled_options: RegexOptions,
    option_scopes: Vec<(RegexOptions, RegexOptions)>,

    // addresses of the nodes currently being rendered
    rendering: HashSet<usize>,
}

impl<'a> PatternWriter<'a> {
    fn new(settings: &'a PatternSettings) -> Self {
        PatternWriter {
            buffer: String::new(),
            settings,
            applied_options: RegexOptions::NONE,
            disabled_options: RegexOptions::NONE,
            option_scopes: vec![],
            rendering: HashSet::new(),
        }
    }

    /// Render a composition list in append order.
    ///
    /// The discovery walk carries its own visited set, so a looped
    /// chain is reported before anything renders. The `rendering`
    /// guard holds a node only while that node renders: a node
    /// aliased into the content of a *later* chain member forms a
    /// DAG and legitimately renders twice, while a node reached
    /// again through its own nested content is a cycle.
    fn write_pattern(&mut self, pattern: &Pattern) -> Result<(), PatternError> {
        let mut stack: Vec<Rc<Node>> = vec![];
        let mut walked: HashSet<usize> = HashSet::new();
        let mut current = Some(Rc::clone(&pattern.node));
        while let Some(node) = current {
            if !walked.insert(Rc::as_ptr(&node) as usize) {
                return Err(PatternError::CircularReference);
            }
            current = node.previous.get().cloned();
            stack.push(node);
        }

        // the stack holds the chain newest-first; popping renders
        // the head (oldest) node first
        while let Some(node) = stack.pop() {
            let key = Rc::as_ptr(&node) as usize;
            if !self.rendering.insert(key) {
                return Err(PatternError::CircularReference);
            }
            let rendered = self.write_node(&node);
            self.rendering.remove(&key);
            rendered?;
        }
        Ok(())
    }

    fn write_node(&mut self, node: &Rc<Node>) -> Result<(), PatternError> {
        match &node.kind {
            NodeKind::Literal { text, ignore_case } => {
                if *ignore_case {
                    self.buffer.push_str("(?i:");
                    self.enter_option_scope(RegexOptions::IGNORE_CASE, RegexOptions::NONE);
                    append_escaped_text(&mut self.buffer, text, false);
                    self.leave_option_scope();
                    self.buffer.push(')');
                } else {
                    append_escaped_text(&mut self.buffer, text, false);
                }
            }
            NodeKind::Char(code) => {
                append_escaped(&mut self.buffer, *code, false);
            }
            NodeKind::AnyChar => {
                self.buffer.push('.');
            }
            NodeKind::CharClass(kind) => {
                self.buffer.push_str(kind.token());
            }
            NodeKind::CharGroup { items, negative } => {
                self.buffer.push_str(if *negative { "[^" } else { "[" });
                self.write_grouping(items)?;
                self.buffer.push(']');
            }
            NodeKind::CharSubtraction(subtraction) => {
                self.write_subtraction(subtraction)?;
            }
            NodeKind::Group { kind, content } => {
                self.append_group_start(kind);
                self.write_pattern(content)?;
                self.buffer.push(')');
            }
            NodeKind::Quantifier {
                content,
                kind,
                lazy,
            } => {
                if quantify::requires_group(content) {
                    self.buffer.push_str("(?:");
                    self.write_pattern(content)?;
                    self.buffer.push(')');
                } else {
                    self.write_pattern(content)?;
                }
                quantify::append_quantifier_token(&mut self.buffer, kind, *lazy);
            }
            NodeKind::Assertion { kind, content } => {
                self.buffer.push_str(kind.token());
                self.write_pattern(content)?;
                self.buffer.push(')');
            }
            NodeKind::Alternation(branches) => {
                for (index, branch) in branches.iter().enumerate() {
                    if index > 0 {
                        self.buffer.push('|');
                    }
                    self.write_pattern(branch)?;
                }
            }
            NodeKind::Conditional { test, yes, no } => {
                match test {
                    ConditionalTest::GroupNumber(number) => {
                        self.buffer.push_str("(?(");
                        self.buffer.push_str(&number.to_string());
                        self.buffer.push(')');
                    }
                    ConditionalTest::GroupName(name) => {
                        self.buffer.push_str("(?(");
                        self.buffer.push_str(name);
                        self.buffer.push(')');
                    }
                    ConditionalTest::Assertion(pattern) => {
                        if self.settings.condition_with_assertion {
                            self.buffer.push_str("(?(?=");
                        } else {
                            self.buffer.push_str("(?(");
                        }
                        self.write_pattern(pattern)?;
                        self.buffer.push(')');
                    }
                }
                self.write_pattern(yes)?;
                if let Some(no) = no {
                    self.buffer.push('|');
                    self.write_pattern(no)?;
                }
                self.buffer.push(')');
            }
            NodeKind::Backreference(reference) => match reference {
                GroupReference::Number(number) => {
                    self.buffer.push('\\');
                    self.buffer.push_str(&number.to_string());
                    if self.settings.separate_numbered_group_reference {
                        self.buffer.push_str("(?:)");
                    }
                }
                GroupReference::Name(name) => {
                    self.buffer.push_str("\\k");
                    self.append_name(name);
                }
            },
            NodeKind::InlineOptions {
                apply,
                disable,
                content,
            } => {
                self.buffer.push_str("(?");
                self.buffer.push_str(&apply.symbols());
                if !disable.is_empty() {
                    self.buffer.push('-');
                    self.buffer.push_str(&disable.symbols());
                }
                match content {
                    Some(pattern) => {
                        self.buffer.push(':');
                        self.enter_option_scope(*apply, *disable);
                        self.write_pattern(pattern)?;
                        self.leave_option_scope();
                        self.buffer.push(')');
                    }
                    None => {
                        // the standalone form changes the ambient
                        // options until the enclosing scope closes
                        self.applied_options |= *apply;
                        self.disabled_options |= *disable;
                        self.buffer.push(')');
                    }
                }
            }
            NodeKind::Comment(text) => {
                self.buffer.push_str("(?#");
                self.buffer.push_str(text);
                self.buffer.push(')');
            }
            NodeKind::Surround {
                before,
                content,
                after,
            } => {
                self.write_pattern(before)?;
                self.write_pattern(content)?;
                self.write_pattern(after)?;
            }
            NodeKind::Anchor(kind) => {
                self.buffer.push_str(kind.token());
            }
        }

        Ok(())
    }

    fn write_grouping(&mut self, grouping: &CharGrouping) -> Result<(), PatternError> {
        let mut stack: Vec<Rc<GroupItem>> = vec![];
        let mut walked: HashSet<usize> = HashSet::new();
        let mut current = Some(Rc::clone(&grouping.item));
        while let Some(item) = current {
            if !walked.insert(Rc::as_ptr(&item) as usize) {
                return Err(PatternError::CircularReference);
            }
            current = item.previous.get().cloned();
            stack.push(item);
        }

        while let Some(item) = stack.pop() {
            self.write_group_item(&item.kind);
        }

        Ok(())
    }

    fn write_group_item(&mut self, kind: &GroupItemKind) {
        match kind {
            GroupItemKind::Char(code) => {
                append_escaped(&mut self.buffer, *code, true);
            }
            GroupItemKind::Chars(text) => {
                append_escaped_text(&mut self.buffer, text, true);
            }
            GroupItemKind::Range { first, last } => {
                append_escaped(&mut self.buffer, *first, true);
                self.buffer.push('-');
                append_escaped(&mut self.buffer, *last, true);
            }
            GroupItemKind::CharClass(class) => {
                self.buffer.push_str(class.token());
            }
            GroupItemKind::GeneralCategory { category, negative } => {
                self.buffer
                    .push_str(if *negative { "\\P{" } else { "\\p{" });
                self.buffer.push_str(category.designation());
                self.buffer.push('}');
            }
            GroupItemKind::NamedBlock { block, negative } => {
                self.buffer
                    .push_str(if *negative { "\\P{" } else { "\\p{" });
                self.buffer.push_str(block.designation());
                self.buffer.push('}');
            }
        }
    }

    /// `[base-[excluded]]`, with the base side rendered unwrapped
    /// and the excluded side rendered as a bracketed class of its own.
    fn write_subtraction(&mut self, subtraction: &CharSubtraction) -> Result<(), PatternError> {
        self.buffer
            .push_str(if subtraction.negative { "[^" } else { "[" });

        match &subtraction.base {
            BaseOperand::Items(grouping) => self.write_grouping(grouping)?,
            BaseOperand::Class(class) => self.buffer.push_str(class.token()),
        }

        self.buffer.push('-');

        match &subtraction.excluded {
            ExcludedOperand::Items(grouping) => {
                self.buffer.push('[');
                self.write_grouping(grouping)?;
                self.buffer.push(']');
            }
            ExcludedOperand::Class(class) => {
                self.buffer.push('[');
                self.buffer.push_str(class.token());
                self.buffer.push(']');
            }
            ExcludedOperand::Subtraction(nested) => {
                // a subtraction is already self-bracketing
                self.write_subtraction(nested)?;
            }
        }

        self.buffer.push(']');
        Ok(())
    }

    fn append_group_start(&mut self, kind: &GroupKind) {
        match kind {
            GroupKind::Capturing => self.buffer.push('('),
            GroupKind::Named(name) => {
                self.buffer.push_str("(?");
                self.append_name(name);
            }
            GroupKind::Noncapturing => self.buffer.push_str("(?:"),
            GroupKind::Nonbacktracking => self.buffer.push_str("(?>"),
            GroupKind::Balancing {
                name,
                previous_name,
            } => {
                self.buffer.push_str("(?");
                match self.settings.identifier_boundary {
                    IdentifierBoundary::AngleBrackets => {
                        self.buffer.push('<');
                        self.buffer.push_str(name);
                        self.buffer.push('-');
                        self.buffer.push_str(previous_name);
                        self.buffer.push('>');
                    }
                    IdentifierBoundary::Apostrophe => {
                        self.buffer.push('\'');
                        self.buffer.push_str(name);
                        self.buffer.push('-');
                        self.buffer.push_str(previous_name);
                        self.buffer.push('\'');
                    }
                }
            }
        }
    }

    fn append_name(&mut self, name: &str) {
        match self.settings.identifier_boundary {
            IdentifierBoundary::AngleBrackets => {
                self.buffer.push('<');
                self.buffer.push_str(name);
                self.buffer.push('>');
            }
            IdentifierBoundary::Apostrophe => {
                self.buffer.push('\'');
                self.buffer.push_str(name);
                self.buffer.push('\'');
            }
        }
    }

    fn enter_option_scope(&mut self, apply: RegexOptions, disable: RegexOptions) {
        self.option_scopes
            .push((self.applied_options, self.disabled_options));
        self.applied_options |= apply;
        self.disabled_options |= disable;
    }

    fn leave_option_scope(&mut self) {
        if let Some((applied, disabled)) = self.option_scopes.pop() {
            self.applied_options = applied;
            self.disabled_options = disabled;
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::patterns;
    use crate::settings::{IdentifierBoundary, PatternSettings, RegexOptions};

    #[test]
    fn test_named_group_identifier_boundary() {
        let pattern = patterns::named_group("word", patterns::one_many(patterns::word_char()))
            .unwrap();

        assert_eq!(pattern.to_regex_string().unwrap(), "(?<word>\\w+)");

        let apostrophe = PatternSettings {
            identifier_boundary: IdentifierBoundary::Apostrophe,
            ..PatternSettings::default()
        };
        assert_eq!(
            pattern.to_regex_string_with(&apostrophe).unwrap(),
            "(?'word'\\w+)"
        );
    }

    #[test]
    fn test_named_backreference_identifier_boundary() {
        let pattern = patterns::backreference_name("word").unwrap();
        assert_eq!(pattern.to_regex_string().unwrap(), "\\k<word>");

        let apostrophe = PatternSettings {
            identifier_boundary: IdentifierBoundary::Apostrophe,
            ..PatternSettings::default()
        };
        assert_eq!(
            pattern.to_regex_string_with(&apostrophe).unwrap(),
            "\\k'word'"
        );
    }

    #[test]
    fn test_numbered_backreference_separator() {
        let pattern = patterns::backreference(1).concat("2");
        assert_eq!(pattern.to_regex_string().unwrap(), "\\12");

        let separated = PatternSettings {
            separate_numbered_group_reference: true,
            ..PatternSettings::default()
        };
        assert_eq!(
            pattern.to_regex_string_with(&separated).unwrap(),
            "\\1(?:)2"
        );
    }

    #[test]
    fn test_balancing_group() {
        let pattern = patterns::balancing_group("open", "close", patterns::any_char()).unwrap();
        assert_eq!(pattern.to_regex_string().unwrap(), "(?<open-close>.)");

        let apostrophe = PatternSettings {
            identifier_boundary: IdentifierBoundary::Apostrophe,
            ..PatternSettings::default()
        };
        assert_eq!(
            pattern.to_regex_string_with(&apostrophe).unwrap(),
            "(?'open-close'.)"
        );
    }

    #[test]
    fn test_conditional_forms() {
        let by_name =
            patterns::if_group_name("quoted", "\"", "'").unwrap();
        assert_eq!(by_name.to_regex_string().unwrap(), "(?(quoted)\"|')");

        let by_number = patterns::if_group(1, "a", None::<&str>);
        assert_eq!(by_number.to_regex_string().unwrap(), "(?(1)a)");

        let by_test = patterns::if_assert(patterns::text("x"), "a", "b");
        assert_eq!(by_test.to_regex_string().unwrap(), "(?(x)a|b)");

        let with_assertion = PatternSettings {
            condition_with_assertion: true,
            ..PatternSettings::default()
        };
        assert_eq!(
            by_test.to_regex_string_with(&with_assertion).unwrap(),
            "(?(?=x)a|b)"
        );
    }

    #[test]
    fn test_inline_options() {
        let scoped = patterns::options(RegexOptions::IGNORE_CASE, "abc");
        assert_eq!(scoped.to_regex_string().unwrap(), "(?i:abc)");

        let with_disable = patterns::disable_options(
            RegexOptions::MULTILINE | RegexOptions::SINGLELINE,
            "abc",
        );
        assert_eq!(with_disable.to_regex_string().unwrap(), "(?-ms:abc)");

        let standalone =
            patterns::inline_options(RegexOptions::IGNORE_CASE, RegexOptions::MULTILINE)
                .concat("a");
        assert_eq!(standalone.to_regex_string().unwrap(), "(?i-m)a");
    }

    #[test]
    fn test_nested_option_scopes() {
        let inner = patterns::options(RegexOptions::MULTILINE, "b");
        let outer = patterns::options(
            RegexOptions::IGNORE_CASE,
            patterns::text("a").concat(inner).concat("c"),
        );
        assert_eq!(outer.to_regex_string().unwrap(), "(?i:a(?m:b)c)");
    }

    #[test]
    fn test_comment() {
        let pattern = patterns::text("a")
            .concat(patterns::comment("match the letter a").unwrap());
        assert_eq!(
            pattern.to_regex_string().unwrap(),
            "a(?#match the letter a)"
        );
    }

    #[test]
    fn test_anchors() {
        let pattern = patterns::beginning_of_input()
            .concat(patterns::beginning_of_line())
            .concat(patterns::word_boundary())
            .concat(patterns::not_word_boundary())
            .concat(patterns::previous_match_end())
            .concat(patterns::end_of_input_or_before_ending_newline())
            .concat(patterns::end_of_line())
            .concat(patterns::end_of_input());
        assert_eq!(
            pattern.to_regex_string().unwrap(),
            "\\A^\\b\\B\\G\\Z$\\z"
        );
    }

    #[test]
    fn test_aliased_chain_member_renders_twice() {
        // the same node sits in the chain and inside the content of
        // a later member; the graph is acyclic and both occurrences
        // render
        let a = patterns::text("a");
        let pattern = a.clone().concat(patterns::group(&a));
        assert_eq!(pattern.to_regex_string().unwrap(), "a(a)");

        let x = patterns::digit();
        let quantified = x.clone().concat(patterns::maybe(&x));
        assert_eq!(quantified.to_regex_string().unwrap(), "\\d\\d?");
    }

    #[test]
    fn test_surround() {
        let pattern = patterns::surround("\"", "abc", "\"");
        assert_eq!(pattern.to_regex_string().unwrap(), "\"abc\"");
    }

    #[test]
    fn test_text_ignore_case() {
        let pattern = patterns::text_ignore_case("a.c");
        assert_eq!(pattern.to_regex_string().unwrap(), "(?i:a\\.c)");
    }
}
