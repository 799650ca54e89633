// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::fmt::Display;

/**
 * All failures are raised at the call that receives the offending
 * argument, with one exception: a circular concatenation graph can
 * only be discovered while serializing, so `CircularReference` is
 * raised by the serialization entry point.
 */
#[derive(Debug, PartialEq, Clone)]
pub enum PatternError {
    /// A numeric character code outside `[0, 0xFFFF]`, or a lone
    /// surrogate code which cannot appear in a Rust string.
    CharCodeOutOfRange(u32),

    /// A literal character set was built from an empty string.
    EmptyCharSet,

    /// A character range whose last code is lower than its first code.
    InvalidCharRange { first: u32, last: u32 },

    /// A repetition range `{min,max}` with `max < min`.
    InvalidRepeatRange { min: u32, max: u32 },

    /// A capture group name that is empty, starts with a digit, or
    /// contains characters other than letters, digits and underscores.
    InvalidGroupName(String),

    /// An inline comment containing a closing parenthesis, which
    /// cannot be escaped inside `(?#...)`.
    InvalidComment(String),

    /// The node has no structural complement.
    NotInvertible,

    /// A node that (directly or through intermediate nodes) is
    /// concatenated to itself.
    CircularReference,

    /// The external matching engine rejected the pattern or failed
    /// while matching. The engine message is passed through unmodified.
    Engine(String),
}

impl Display for PatternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PatternError::CharCodeOutOfRange(code) => {
                write!(
                    f,
                    "Character code {:#x} is out of the supported range [0, 0xFFFF].",
                    code
                )
            }
            PatternError::EmptyCharSet => {
                f.write_str("A character set requires at least one character.")
            }
            PatternError::InvalidCharRange { first, last } => {
                write!(
                    f,
                    "Invalid character range: the last code {:#x} is lower than the first code {:#x}.",
                    last, first
                )
            }
            PatternError::InvalidRepeatRange { min, max } => {
                write!(
                    f,
                    "Invalid repetition range: the maximum count {} is lower than the minimum count {}.",
                    max, min
                )
            }
            PatternError::InvalidGroupName(name) => {
                write!(f, "Invalid capture group name: \"{}\".", name)
            }
            PatternError::InvalidComment(text) => {
                write!(
                    f,
                    "An inline comment cannot contain a closing parenthesis: \"{}\".",
                    text
                )
            }
            PatternError::NotInvertible => {
                f.write_str("The pattern element has no structural complement.")
            }
            PatternError::CircularReference => {
                f.write_str("The pattern contains a circular reference.")
            }
            PatternError::Engine(message) => f.write_str(message),
        }
    }
}

impl std::error::Error for PatternError {}
