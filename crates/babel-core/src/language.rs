//! Language tag value object.
//!
//! Accepts well-formed BCP 47 tags (`en`, `pt-BR`, `zh-Hant-TW`, `sl-rozaj`,
//! `de-DE-u-co-phonebk`, `x-klingon`) and stores them in canonical case.
//! Registry membership is not checked; the translation provider is the
//! authority on which languages it actually serves.

use crate::BabelError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error type for language tag parsing.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid language tag: {0}")]
pub struct LanguageTagError(String);

impl From<LanguageTagError> for BabelError {
    fn from(err: LanguageTagError) -> Self {
        BabelError::invalid_language(err.0)
    }
}

/// Normalized language identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LanguageTag(String);

impl LanguageTag {
    /// Parses and normalizes a language tag.
    pub fn parse(input: impl AsRef<str>) -> Result<Self, LanguageTagError> {
        let raw = input.as_ref();
        let trimmed = raw.trim();
        let error = || LanguageTagError(raw.to_string());

        if trimmed.is_empty() {
            return Err(error());
        }

        let subtags: Vec<&str> = trimmed.split(['-', '_']).collect();
        if subtags.iter().any(|s| s.is_empty()) {
            return Err(error());
        }

        let mut parser = SubtagParser {
            subtags: &subtags,
            pos: 0,
            out: Vec::with_capacity(subtags.len()),
        };

        if parser.peek().is_some_and(is_private_use_singleton) {
            parser.private_use().ok_or_else(error)?;
        } else {
            parser.language().ok_or_else(error)?;
            parser.script();
            parser.region();
            parser.variants().ok_or_else(error)?;
            parser.extensions().ok_or_else(error)?;
            if parser.peek().is_some_and(is_private_use_singleton) {
                parser.private_use().ok_or_else(error)?;
            }
        }

        if parser.pos != subtags.len() {
            return Err(error());
        }

        Ok(Self(parser.out.join("-")))
    }

    /// The `und` tag, used when a language could not be determined.
    #[must_use]
    pub fn undetermined() -> Self {
        Self("und".to_string())
    }

    /// Returns the tag as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

struct SubtagParser<'a> {
    subtags: &'a [&'a str],
    pos: usize,
    out: Vec<String>,
}

impl<'a> SubtagParser<'a> {
    fn peek(&self) -> Option<&'a str> {
        self.subtags.get(self.pos).copied()
    }

    fn take_if(&mut self, predicate: impl Fn(&str) -> bool) -> Option<&'a str> {
        let subtag = self.peek().filter(|s| predicate(s))?;
        self.pos += 1;
        Some(subtag)
    }

    fn language(&mut self) -> Option<()> {
        let language = self.take_if(|s| is_alpha(s) && matches!(s.len(), 2 | 3 | 5..=8))?;
        self.out.push(language.to_ascii_lowercase());

        if language.len() <= 3 {
            for _ in 0..3 {
                match self.take_if(|s| is_alpha(s) && s.len() == 3) {
                    Some(extlang) => self.out.push(extlang.to_ascii_lowercase()),
                    None => break,
                }
            }
        }
        Some(())
    }

    fn script(&mut self) {
        if let Some(script) = self.take_if(|s| is_alpha(s) && s.len() == 4) {
            let mut chars = script.chars();
            let mut normalized = String::with_capacity(4);
            if let Some(first) = chars.next() {
                normalized.push(first.to_ascii_uppercase());
            }
            normalized.extend(chars.map(|c| c.to_ascii_lowercase()));
            self.out.push(normalized);
        }
    }

    fn region(&mut self) {
        if let Some(region) = self.take_if(|s| {
            (is_alpha(s) && s.len() == 2) || (s.len() == 3 && s.bytes().all(|b| b.is_ascii_digit()))
        }) {
            self.out.push(region.to_ascii_uppercase());
        }
    }

    fn variants(&mut self) -> Option<()> {
        let mut seen = HashSet::new();
        while let Some(variant) = self.take_if(|s| {
            is_alnum(s)
                && (matches!(s.len(), 5..=8)
                    || (s.len() == 4 && s.as_bytes()[0].is_ascii_digit()))
        }) {
            let variant = variant.to_ascii_lowercase();
            if !seen.insert(variant.clone()) {
                return None;
            }
            self.out.push(variant);
        }
        Some(())
    }

    fn extensions(&mut self) -> Option<()> {
        let mut seen = HashSet::new();
        while let Some(singleton) =
            self.take_if(|s| s.len() == 1 && is_alnum(s) && !is_private_use_singleton(s))
        {
            let singleton = singleton.to_ascii_lowercase();
            if !seen.insert(singleton.clone()) {
                return None;
            }
            self.out.push(singleton);

            let mut count = 0;
            while let Some(subtag) = self.take_if(|s| is_alnum(s) && matches!(s.len(), 2..=8)) {
                self.out.push(subtag.to_ascii_lowercase());
                count += 1;
            }
            if count == 0 {
                return None;
            }
        }
        Some(())
    }

    fn private_use(&mut self) -> Option<()> {
        self.take_if(is_private_use_singleton)?;
        self.out.push("x".to_string());

        let mut count = 0;
        while let Some(subtag) = self.take_if(|s| is_alnum(s) && s.len() <= 8) {
            self.out.push(subtag.to_ascii_lowercase());
            count += 1;
        }
        (count > 0).then_some(())
    }
}

fn is_alpha(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_alphabetic())
}

fn is_alnum(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_alphanumeric())
}

fn is_private_use_singleton(s: &str) -> bool {
    s.eq_ignore_ascii_case("x")
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LanguageTag {
    type Err = LanguageTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for LanguageTag {
    type Error = LanguageTagError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<LanguageTag> for String {
    fn from(tag: LanguageTag) -> Self {
        tag.0
    }
}

impl AsRef<str> for LanguageTag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
