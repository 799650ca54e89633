// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

//! The matcher front end.
//!
//! A [`Regex`] pairs a rendered pattern text with a set of
//! [`RegexOptions`] and compiles lazily through `fancy-regex` on the
//! first matching call. The compilation outcome, success or failure,
//! is cached; a pattern the engine rejects fails every call with the
//! same [`PatternError::Engine`] message.
//!
//! Options are passed to the engine as an inline flag prefix
//! (`(?im)` and so on). The `n` (explicit capture) flag is a
//! serialization-side concept and is not understood by the engine;
//! a [`Regex`] carrying it fails to compile.

use std::fmt::{self, Display};
use std::sync::OnceLock;

use crate::error::PatternError;
use crate::pattern::Pattern;
use crate::settings::{PatternSettings, RegexOptions};

pub struct Regex {
    pattern_text: String,
    options: RegexOptions,
    engine: OnceLock<Result<fancy_regex::Regex, String>>,
}

impl Regex {
    /// Render the pattern and wrap it without compiling.
    pub fn new(pattern: &Pattern) -> Result<Self, PatternError> {
        Self::with_options(pattern, RegexOptions::NONE)
    }

    pub fn with_options(pattern: &Pattern, options: RegexOptions) -> Result<Self, PatternError> {
        Self::with_settings(pattern, &PatternSettings::default(), options)
    }

    pub fn with_settings(
        pattern: &Pattern,
        settings: &PatternSettings,
        options: RegexOptions,
    ) -> Result<Self, PatternError> {
        let pattern_text = pattern.to_regex_string_with(settings)?;
        Ok(Self::from_pattern_text(pattern_text, options))
    }

    /// Wrap an already-rendered pattern text. The text is not
    /// validated until the first matching call.
    pub fn from_pattern_text(pattern_text: impl Into<String>, options: RegexOptions) -> Self {
        Regex {
            pattern_text: pattern_text.into(),
            options,
            engine: OnceLock::new(),
        }
    }

    /// The rendered pattern text, without the option prefix.
    pub fn as_str(&self) -> &str {
        &self.pattern_text
    }

    pub fn options(&self) -> RegexOptions {
        self.options
    }

    fn engine(&self) -> Result<&fancy_regex::Regex, PatternError> {
        let compiled = self.engine.get_or_init(|| {
            let text = if self.options.is_empty() {
                self.pattern_text.clone()
            } else {
                format!("(?{}){}", self.options.symbols(), self.pattern_text)
            };
            fancy_regex::Regex::new(&text).map_err(|e| e.to_string())
        });

        match compiled {
            Ok(engine) => Ok(engine),
            Err(message) => Err(PatternError::Engine(message.clone())),
        }
    }

    pub fn is_match(&self, text: &str) -> Result<bool, PatternError> {
        self.engine()?
            .is_match(text)
            .map_err(|e| PatternError::Engine(e.to_string()))
    }

    pub fn find<'t>(&self, text: &'t str) -> Result<Option<fancy_regex::Match<'t>>, PatternError> {
        self.engine()?
            .find(text)
            .map_err(|e| PatternError::Engine(e.to_string()))
    }

    pub fn find_iter<'r, 't>(
        &'r self,
        text: &'t str,
    ) -> Result<fancy_regex::Matches<'r, 't>, PatternError> {
        Ok(self.engine()?.find_iter(text))
    }

    pub fn captures<'t>(
        &self,
        text: &'t str,
    ) -> Result<Option<fancy_regex::Captures<'t>>, PatternError> {
        self.engine()?
            .captures(text)
            .map_err(|e| PatternError::Engine(e.to_string()))
    }

    /// Replace the first match with the substitution text.
    pub fn replace(&self, text: &str, substitution: &str) -> Result<String, PatternError> {
        Ok(self.engine()?.replace(text, substitution).into_owned())
    }

    /// Replace every match with the substitution text.
    pub fn replace_all(&self, text: &str, substitution: &str) -> Result<String, PatternError> {
        Ok(self.engine()?.replace_all(text, substitution).into_owned())
    }

    /// Split the text around every match.
    pub fn split<'t>(&self, text: &'t str) -> Result<Vec<&'t str>, PatternError> {
        self.engine()?
            .split(text)
            .collect::<Result<Vec<&str>, fancy_regex::Error>>()
            .map_err(|e| PatternError::Engine(e.to_string()))
    }
}

impl Display for Regex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern_text)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::Regex;
    use crate::error::PatternError;
    use crate::patterns;
    use crate::settings::RegexOptions;

    #[test]
    fn test_match_named_group() {
        let pattern = patterns::named_group("word", patterns::one_many(patterns::word_char()))
            .unwrap();
        let regex = Regex::new(&pattern).unwrap();
        assert_eq!(regex.as_str(), "(?<word>\\w+)");

        assert!(regex.is_match("hello world").unwrap());

        let captures = regex.captures("hello world").unwrap().unwrap();
        assert_eq!(captures.name("word").unwrap().as_str(), "hello");
    }

    #[test]
    fn test_find_and_iterate() {
        let pattern = patterns::one_many(patterns::digit());
        let regex = Regex::new(&pattern).unwrap();

        let first = regex.find("a1b22c333").unwrap().unwrap();
        assert_eq!(first.as_str(), "1");

        let all: Vec<&str> = regex
            .find_iter("a1b22c333")
            .unwrap()
            .map(|m| m.unwrap().as_str())
            .collect();
        assert_eq!(all, ["1", "22", "333"]);
    }

    #[test]
    fn test_options_prefix() {
        let pattern = patterns::text("abc");
        let regex = Regex::with_options(&pattern, RegexOptions::IGNORE_CASE).unwrap();
        assert!(regex.is_match("xABCx").unwrap());

        let plain = Regex::new(&pattern).unwrap();
        assert!(!plain.is_match("xABCx").unwrap());
    }

    #[test]
    fn test_replace_all_with_substitution() {
        let pattern = patterns::named_group("digits", patterns::one_many(patterns::digit()))
            .unwrap();
        let regex = Regex::new(&pattern).unwrap();
        let replacement = crate::substitutions::text("<")
            + crate::substitutions::group_name("digits").unwrap()
            + ">";
        let replaced = regex.replace_all("a1b22", replacement.as_str()).unwrap();
        assert_eq!(replaced, "a<1>b<22>");
    }

    #[test]
    fn test_split() {
        let pattern = patterns::one_many(',');
        let regex = Regex::new(&pattern).unwrap();
        assert_eq!(regex.split("a,b,,c").unwrap(), ["a", "b", "c"]);
    }

    #[test]
    fn test_invalid_pattern_text_fails_on_first_use() {
        let regex = Regex::from_pattern_text("(?<", RegexOptions::NONE);
        let first = regex.is_match("anything");
        assert!(matches!(first, Err(PatternError::Engine(_))));

        // the cached failure is returned again
        let second = regex.is_match("anything");
        assert_eq!(first, second);
    }

    #[test]
    fn test_lookbehind_is_supported() {
        let pattern = patterns::look_behind("$").concat(patterns::one_many(patterns::digit()));
        let regex = Regex::new(&pattern).unwrap();
        assert_eq!(regex.as_str(), "(?<=\\$)\\d+");
        assert_eq!(regex.find("price: $42").unwrap().unwrap().as_str(), "42");
    }
}
