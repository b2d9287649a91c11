//! Splits a formatted currency value into typed tokens
//!
//! The formatted string comes from the locale; the tokenizer only knows the
//! four punctuation strings and treats every other character as a digit.

use std::fmt;

use serde::Serialize;

use crate::digit::DigitGlyphs;
use crate::locale::{Amount, LocaleFormat};
use crate::{Error, Result};

/// The minus sign every supported locale puts in front of negative values
pub const NEGATIVE_SIGN: &str = "-";

/// Non-digit roles a fragment of a formatted value can play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PunctuationRole {
    CurrencySymbol,
    GroupingSeparator,
    DecimalSeparator,
    NegativeSign,
}

impl PunctuationRole {
    /// Prefix match order when scanning a formatted value
    pub const PRECEDENCE: [PunctuationRole; 4] = [
        PunctuationRole::CurrencySymbol,
        PunctuationRole::GroupingSeparator,
        PunctuationRole::DecimalSeparator,
        PunctuationRole::NegativeSign,
    ];

    /// Roles that appear at most once per formatted value
    pub fn is_singleton(self) -> bool {
        !matches!(self, PunctuationRole::GroupingSeparator)
    }
}

impl fmt::Display for PunctuationRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PunctuationRole::CurrencySymbol => "currency symbol",
            PunctuationRole::GroupingSeparator => "grouping separator",
            PunctuationRole::DecimalSeparator => "decimal separator",
            PunctuationRole::NegativeSign => "negative sign",
        };
        f.write_str(name)
    }
}

/// A classified fragment of a formatted currency value
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "glyph", rename_all = "snake_case")]
pub enum Token {
    CurrencySymbol,
    GroupingSeparator,
    DecimalSeparator,
    NegativeSign,
    Digit(String),
}

impl Token {
    /// Punctuation role, or `None` for digits
    pub fn role(&self) -> Option<PunctuationRole> {
        match self {
            Token::CurrencySymbol => Some(PunctuationRole::CurrencySymbol),
            Token::GroupingSeparator => Some(PunctuationRole::GroupingSeparator),
            Token::DecimalSeparator => Some(PunctuationRole::DecimalSeparator),
            Token::NegativeSign => Some(PunctuationRole::NegativeSign),
            Token::Digit(_) => None,
        }
    }

    pub fn digit(glyph: impl Into<String>) -> Self {
        Token::Digit(glyph.into())
    }
}

impl From<PunctuationRole> for Token {
    fn from(role: PunctuationRole) -> Self {
        match role {
            PunctuationRole::CurrencySymbol => Token::CurrencySymbol,
            PunctuationRole::GroupingSeparator => Token::GroupingSeparator,
            PunctuationRole::DecimalSeparator => Token::DecimalSeparator,
            PunctuationRole::NegativeSign => Token::NegativeSign,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Digit(glyph) => write!(f, "digit({})", glyph),
            other => match other.role() {
                Some(role) => write!(f, "{}", role),
                None => Ok(()),
            },
        }
    }
}

/// Punctuation strings of one locale
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Punctuation {
    currency_symbol: String,
    grouping_separator: String,
    decimal_separator: String,
    negative_sign: String,
}

impl Punctuation {
    /// Resolve the punctuation of a locale
    ///
    /// Fails when the locale has no currency symbol, grouping separator or
    /// decimal separator, or reports one of them as an empty string.
    pub fn from_locale(locale: &dyn LocaleFormat) -> Result<Self> {
        let required = |value: Option<&str>, what: &str| -> Result<String> {
            match value {
                Some(text) if !text.is_empty() => Ok(text.to_string()),
                _ => Err(Error::UnsupportedLocale(format!(
                    "{} has no {}",
                    locale.identifier(),
                    what
                ))),
            }
        };

        Ok(Self {
            currency_symbol: required(locale.currency_symbol(), "currency symbol")?,
            grouping_separator: required(locale.grouping_separator(), "grouping separator")?,
            decimal_separator: required(locale.decimal_separator(), "decimal separator")?,
            negative_sign: NEGATIVE_SIGN.to_string(),
        })
    }

    /// Text displayed for a role
    pub fn text(&self, role: PunctuationRole) -> &str {
        match role {
            PunctuationRole::CurrencySymbol => &self.currency_symbol,
            PunctuationRole::GroupingSeparator => &self.grouping_separator,
            PunctuationRole::DecimalSeparator => &self.decimal_separator,
            PunctuationRole::NegativeSign => &self.negative_sign,
        }
    }

    /// First role, in precedence order, whose text starts `input`
    fn prefix_of(&self, input: &str) -> Option<PunctuationRole> {
        PunctuationRole::PRECEDENCE
            .into_iter()
            .find(|role| input.starts_with(self.text(*role)))
    }
}

/// Locale-bound tokenizer for cent values
pub struct Tokenizer {
    locale: Box<dyn LocaleFormat>,
    punctuation: Punctuation,
    glyphs: DigitGlyphs,
}

impl fmt::Debug for Tokenizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tokenizer")
            .field("locale", &self.locale.identifier())
            .field("punctuation", &self.punctuation)
            .field("glyphs", &self.glyphs)
            .finish()
    }
}

impl Tokenizer {
    /// Bind a tokenizer to a locale, failing if the locale lacks punctuation
    pub fn new(locale: Box<dyn LocaleFormat>) -> Result<Self> {
        let punctuation = Punctuation::from_locale(locale.as_ref())?;
        let glyphs = DigitGlyphs::from_locale(locale.as_ref());
        Ok(Self {
            locale,
            punctuation,
            glyphs,
        })
    }

    pub fn locale(&self) -> &dyn LocaleFormat {
        self.locale.as_ref()
    }

    pub fn punctuation(&self) -> &Punctuation {
        &self.punctuation
    }

    pub fn glyphs(&self) -> &DigitGlyphs {
        &self.glyphs
    }

    /// Locale formatted string for a cent value
    pub fn format(&self, cents: i64) -> String {
        self.locale.format_currency(Amount::from_cents(cents))
    }

    /// Tokens for a cent value, left to right
    pub fn tokenize(&self, cents: i64) -> Vec<Token> {
        self.tokenize_str(&self.format(cents))
    }

    /// Tokens for an already formatted string
    ///
    /// Whitespace is dropped. At each position the punctuation strings are
    /// tried in [`PunctuationRole::PRECEDENCE`] order; anything else becomes a
    /// one-character digit token.
    pub fn tokenize_str(&self, formatted: &str) -> Vec<Token> {
        let compact: String = formatted.chars().filter(|c| !c.is_whitespace()).collect();

        let mut tokens = Vec::with_capacity(compact.len());
        let mut rest = compact.as_str();

        loop {
            if let Some(role) = self.punctuation.prefix_of(rest) {
                rest = &rest[self.punctuation.text(role).len()..];
                tokens.push(Token::from(role));
                continue;
            }

            let mut chars = rest.chars();
            match chars.next() {
                Some(ch) => {
                    tokens.push(Token::Digit(ch.to_string()));
                    rest = chars.as_str();
                }
                None => break,
            }
        }

        tokens
    }
}
