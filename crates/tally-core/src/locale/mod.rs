//! Locale formatting capability
//!
//! The counter never formats numbers itself. Everything locale specific comes
//! through [`LocaleFormat`]: the punctuation strings, the full currency string
//! for an amount, and the ten digit glyphs.

mod builtin;

use std::fmt;

pub use builtin::{BuiltinLocale, GroupingStyle, SymbolPlacement};

/// Exact decimal amount backed by integer cents
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount {
    cents: i64,
}

impl Amount {
    pub fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    pub fn cents(&self) -> i64 {
        self.cents
    }

    pub fn is_negative(&self) -> bool {
        self.cents < 0
    }

    /// Whole currency units, without sign
    pub fn whole_units(&self) -> u64 {
        self.cents.unsigned_abs() / 100
    }

    /// Minor units after the decimal point (0..=99), without sign
    pub fn fraction(&self) -> u8 {
        (self.cents.unsigned_abs() % 100) as u8
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.whole_units(), self.fraction())
    }
}

/// Locale-bound currency formatting, treated as an opaque service
pub trait LocaleFormat: Send + Sync {
    /// Identifier such as `en_US`
    fn identifier(&self) -> &str;

    fn currency_symbol(&self) -> Option<&str>;

    fn grouping_separator(&self) -> Option<&str>;

    fn decimal_separator(&self) -> Option<&str>;

    /// Fully formatted currency string, including symbol, grouping, decimal
    /// separator and a leading `-` for negative amounts
    fn format_currency(&self, amount: Amount) -> String;

    /// Localized glyph for a single digit in `0..=9`
    fn format_decimal_digit(&self, digit: u8) -> String;
}
