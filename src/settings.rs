// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::ops::{BitAnd, BitOr, BitOrAssign};

/// The delimiter style for group names in `(?<name>...)` constructs
/// and named backreferences.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum IdentifierBoundary {
    /// `(?<name>...)` and `\k<name>`
    AngleBrackets,
    /// `(?'name'...)` and `\k'name'`
    Apostrophe,
}

/**
 * Serialization settings.
 *
 * A settings value is attached to a serialization session, not to
 * individual nodes; it is created once by the caller and never
 * mutated mid-serialization.
 */
#[derive(Debug, PartialEq, Clone)]
pub struct PatternSettings {
    pub identifier_boundary: IdentifierBoundary,

    /// Force the test of a plain conditional into lookahead assertion
    /// form, i.e. `(?(?=test)yes|no)` instead of `(?(test)yes|no)`.
    pub condition_with_assertion: bool,

    /// Append an empty noncapturing group `(?:)` after a numbered
    /// backreference, so that `\1` followed by the literal "2" cannot
    /// be misread as `\12`.
    pub separate_numbered_group_reference: bool,
}

impl Default for PatternSettings {
    fn default() -> Self {
        Self {
            identifier_boundary: IdentifierBoundary::AngleBrackets,
            condition_with_assertion: false,
            separate_numbered_group_reference: false,
        }
    }
}

/**
 * The dialect option flags, rendered as the letters of the
 * `(?imnsx-imnsx:...)` construct.
 */
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct RegexOptions(u8);

impl RegexOptions {
    pub const NONE: RegexOptions = RegexOptions(0);
    pub const IGNORE_CASE: RegexOptions = RegexOptions(1); // i
    pub const MULTILINE: RegexOptions = RegexOptions(1 << 1); // m
    pub const EXPLICIT_CAPTURE: RegexOptions = RegexOptions(1 << 2); // n
    pub const SINGLELINE: RegexOptions = RegexOptions(1 << 3); // s
    pub const IGNORE_PATTERN_WHITESPACE: RegexOptions = RegexOptions(1 << 4); // x

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn contains(&self, other: RegexOptions) -> bool {
        self.0 & other.0 == other.0
    }

    /// The option letters in the canonical "imnsx" order.
    pub fn symbols(&self) -> String {
        let mut s = String::new();
        if self.contains(RegexOptions::IGNORE_CASE) {
            s.push('i');
        }
        if self.contains(RegexOptions::MULTILINE) {
            s.push('m');
        }
        if self.contains(RegexOptions::EXPLICIT_CAPTURE) {
            s.push('n');
        }
        if self.contains(RegexOptions::SINGLELINE) {
            s.push('s');
        }
        if self.contains(RegexOptions::IGNORE_PATTERN_WHITESPACE) {
            s.push('x');
        }
        s
    }
}

impl BitOr for RegexOptions {
    type Output = RegexOptions;

    fn bitor(self, rhs: Self) -> Self::Output {
        RegexOptions(self.0 | rhs.0)
    }
}

impl BitOrAssign for RegexOptions {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for RegexOptions {
    type Output = RegexOptions;

    fn bitand(self, rhs: Self) -> Self::Output {
        RegexOptions(self.0 & rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::RegexOptions;

    #[test]
    fn test_options_symbols() {
        assert_eq!(RegexOptions::NONE.symbols(), "");
        assert_eq!(RegexOptions::IGNORE_CASE.symbols(), "i");
        assert_eq!(
            (RegexOptions::IGNORE_CASE | RegexOptions::SINGLELINE).symbols(),
            "is"
        );
        assert_eq!(
            (RegexOptions::IGNORE_PATTERN_WHITESPACE
                | RegexOptions::EXPLICIT_CAPTURE
                | RegexOptions::MULTILINE)
                .symbols(),
            "mnx"
        );
    }

    #[test]
    fn test_options_contains() {
        let options = RegexOptions::IGNORE_CASE | RegexOptions::MULTILINE;
        assert!(options.contains(RegexOptions::IGNORE_CASE));
        assert!(options.contains(RegexOptions::MULTILINE));
        assert!(!options.contains(RegexOptions::SINGLELINE));
        assert!(options.contains(RegexOptions::NONE));
        assert!(!options.is_empty());
        assert!(RegexOptions::NONE.is_empty());
    }
}
