// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

//! The replacement text builder.
//!
//! A [`Substitution`] assembles the right-hand side of a replace
//! operation: literal text with `$` doubled, plus references to the
//! captured groups and to the match context.
//!
//! ```
//! use regex_fluent::substitutions;
//!
//! let replacement = substitutions::group_name("last").unwrap()
//!     + substitutions::text(", ")
//!     + substitutions::group_name("first").unwrap();
//! assert_eq!(replacement.as_str(), "${last}, ${first}");
//! ```

use std::fmt::{self, Display};
use std::ops::Add;

use crate::error::PatternError;
use crate::syntax::check_group_name;

/// An assembled replacement text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    text: String,
}

impl Substitution {
    fn from_text(text: String) -> Self {
        Substitution { text }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl Display for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<Substitution> for String {
    fn from(substitution: Substitution) -> Self {
        substitution.text
    }
}

impl Add for Substitution {
    type Output = Substitution;

    fn add(mut self, other: Substitution) -> Substitution {
        self.text.push_str(&other.text);
        self
    }
}

impl Add<&str> for Substitution {
    type Output = Substitution;

    fn add(self, other: &str) -> Substitution {
        self + text(other)
    }
}

/// Literal replacement text; `$` is doubled so it is not taken as a
/// reference marker.
pub fn text(value: &str) -> Substitution {
    Substitution::from_text(value.replace('$', "$$"))
}

/// The text captured by the numbered group, `$n`.
pub fn group_number(number: u32) -> Substitution {
    Substitution::from_text(format!("${{{}}}", number))
}

/// The text captured by the named group, `${name}`.
pub fn group_name(name: &str) -> Result<Substitution, PatternError> {
    check_group_name(name)?;
    Ok(Substitution::from_text(format!("${{{}}}", name)))
}

/// The text captured by the last capturing group, `$+`.
pub fn last_captured_group() -> Substitution {
    Substitution::from_text("$+".to_owned())
}

/// The whole matched text, `$&`.
pub fn entire_match() -> Substitution {
    Substitution::from_text("$&".to_owned())
}

/// The whole input text, `$_`.
pub fn entire_input() -> Substitution {
    Substitution::from_text("$_".to_owned())
}

/// The input text before the match, `` $` ``.
pub fn before_match() -> Substitution {
    Substitution::from_text("$`".to_owned())
}

/// The input text after the match, `$'`.
pub fn after_match() -> Substitution {
    Substitution::from_text("$'".to_owned())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_literal_text_doubles_dollar() {
        assert_eq!(text("cost: $5").as_str(), "cost: $$5");
        assert_eq!(text("plain").as_str(), "plain");
    }

    #[test]
    fn test_references() {
        assert_eq!(group_number(2).as_str(), "${2}");
        assert_eq!(group_name("word").unwrap().as_str(), "${word}");
        assert_eq!(last_captured_group().as_str(), "$+");
        assert_eq!(entire_match().as_str(), "$&");
        assert_eq!(entire_input().as_str(), "$_");
        assert_eq!(before_match().as_str(), "$`");
        assert_eq!(after_match().as_str(), "$'");
    }

    #[test]
    fn test_group_name_validation() {
        assert!(matches!(
            group_name("not a name"),
            Err(PatternError::InvalidGroupName(_))
        ));
    }

    #[test]
    fn test_concatenation() {
        let replacement = group_name("first").unwrap() + " " + group_number(3) + text("$");
        assert_eq!(replacement.as_str(), "${first} ${3}$$");
        assert_eq!(replacement.to_string(), "${first} ${3}$$");
    }
}
