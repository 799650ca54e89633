// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

//! A fluent, strongly-typed builder for textual regular expression
//! patterns.
//!
//! Patterns are assembled from typed elements instead of written by
//! hand, so metacharacter escaping, grouping and operator precedence
//! are handled structurally:
//!
//! ```
//! use regex_fluent::patterns;
//!
//! let pattern = patterns::beginning_of_line()
//!     .concat(patterns::named_group("key", patterns::one_many(patterns::word_char())).unwrap())
//!     .concat(patterns::maybe_many(patterns::white_space()))
//!     .concat('=')
//!     .concat(patterns::maybe_many(patterns::white_space()))
//!     .concat(patterns::named_group("value", patterns::maybe_many(patterns::any_char())).unwrap())
//!     .concat(patterns::end_of_line());
//!
//! assert_eq!(
//!     pattern.to_regex_string().unwrap(),
//!     "^(?<key>\\w+)\\s*=\\s*(?<value>.*)$"
//! );
//! ```
//!
//! The rendered text can be matched directly through [`Regex`], which
//! compiles it with the `fancy-regex` engine on first use.

mod ast;
mod chargroup;
mod error;
mod pattern;
mod quantify;
mod regex;
mod settings;
mod unicode;
mod writer;

pub mod chars;
pub mod patterns;
pub mod substitutions;
pub mod syntax;

pub use ast::{AnchorKind, AssertionKind, CharClassKind, GroupKind, GroupReference, QuantifierKind};
pub use chargroup::{BaseOperand, CharGrouping, CharSubtraction, ExcludedOperand};
pub use error::PatternError;
pub use pattern::{IntoPattern, Pattern};
pub use regex::Regex;
pub use settings::{IdentifierBoundary, PatternSettings, RegexOptions};
pub use substitutions::Substitution;
pub use unicode::{GeneralCategory, NamedBlock};
