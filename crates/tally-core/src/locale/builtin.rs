use super::{Amount, LocaleFormat};

const ASCII_DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
const ARABIC_INDIC_DIGITS: [&str; 10] = ["٠", "١", "٢", "٣", "٤", "٥", "٦", "٧", "٨", "٩"];

/// Where the currency symbol sits relative to the number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPlacement {
    /// `$1.00`, `-$1.00`
    Prefix,
    /// `CHF 1.00`, `CHF-1.00`
    PrefixSpaced,
    /// `1,00 €`, `-1,00 €`
    SuffixSpaced,
}

/// Digit grouping pattern for the integer part
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupingStyle {
    /// Groups of three: 1,234,567
    Thousands,
    /// Last group of three, then groups of two: 12,34,567
    Indian,
}

impl GroupingStyle {
    /// Whether a separator goes before a digit followed by `remaining - 1` more
    fn is_boundary(self, remaining: usize) -> bool {
        match self {
            GroupingStyle::Thousands => remaining % 3 == 0,
            GroupingStyle::Indian => remaining == 3 || (remaining > 3 && (remaining - 3) % 2 == 0),
        }
    }
}

/// A locale from the built-in table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltinLocale {
    identifier: &'static str,
    name: &'static str,
    currency_symbol: &'static str,
    grouping_separator: &'static str,
    decimal_separator: &'static str,
    digits: [&'static str; 10],
    placement: SymbolPlacement,
    grouping: GroupingStyle,
}

static LOCALES: [BuiltinLocale; 7] = [
    BuiltinLocale {
        identifier: "en_US",
        name: "English (United States)",
        currency_symbol: "$",
        grouping_separator: ",",
        decimal_separator: ".",
        digits: ASCII_DIGITS,
        placement: SymbolPlacement::Prefix,
        grouping: GroupingStyle::Thousands,
    },
    BuiltinLocale {
        identifier: "en_GB",
        name: "English (United Kingdom)",
        currency_symbol: "£",
        grouping_separator: ",",
        decimal_separator: ".",
        digits: ASCII_DIGITS,
        placement: SymbolPlacement::Prefix,
        grouping: GroupingStyle::Thousands,
    },
    BuiltinLocale {
        identifier: "de_DE",
        name: "German (Germany)",
        currency_symbol: "€",
        grouping_separator: ".",
        decimal_separator: ",",
        digits: ASCII_DIGITS,
        placement: SymbolPlacement::SuffixSpaced,
        grouping: GroupingStyle::Thousands,
    },
    BuiltinLocale {
        identifier: "fr_FR",
        name: "French (France)",
        currency_symbol: "€",
        grouping_separator: "\u{202f}",
        decimal_separator: ",",
        digits: ASCII_DIGITS,
        placement: SymbolPlacement::SuffixSpaced,
        grouping: GroupingStyle::Thousands,
    },
    BuiltinLocale {
        identifier: "de_CH",
        name: "German (Switzerland)",
        currency_symbol: "CHF",
        grouping_separator: "’",
        decimal_separator: ".",
        digits: ASCII_DIGITS,
        placement: SymbolPlacement::PrefixSpaced,
        grouping: GroupingStyle::Thousands,
    },
    BuiltinLocale {
        identifier: "hi_IN",
        name: "Hindi (India)",
        currency_symbol: "₹",
        grouping_separator: ",",
        decimal_separator: ".",
        digits: ASCII_DIGITS,
        placement: SymbolPlacement::Prefix,
        grouping: GroupingStyle::Indian,
    },
    BuiltinLocale {
        identifier: "ar_EG",
        name: "Arabic (Egypt)",
        currency_symbol: "ج.م.",
        grouping_separator: "٬",
        decimal_separator: "٫",
        digits: ARABIC_INDIC_DIGITS,
        placement: SymbolPlacement::SuffixSpaced,
        grouping: GroupingStyle::Thousands,
    },
];

impl BuiltinLocale {
    /// All built-in locales
    pub fn all() -> &'static [BuiltinLocale] {
        &LOCALES
    }

    /// Find a locale by identifier; `en-us`, `en_US` and `EN_us` are equivalent
    pub fn lookup(identifier: &str) -> Option<&'static BuiltinLocale> {
        let wanted = identifier.trim().replace('-', "_");
        LOCALES
            .iter()
            .find(|locale| locale.identifier.eq_ignore_ascii_case(&wanted))
    }

    /// Human readable name
    pub fn name(&self) -> &'static str {
        self.name
    }

    fn localize_digits(&self, ascii: &str) -> String {
        ascii
            .bytes()
            .map(|b| self.digits[usize::from(b - b'0')])
            .collect()
    }

    fn format_number(&self, amount: Amount) -> String {
        let whole = amount.whole_units().to_string();
        let count = whole.len();

        let mut number = String::new();
        for (i, b) in whole.bytes().enumerate() {
            if i > 0 && self.grouping.is_boundary(count - i) {
                number.push_str(self.grouping_separator);
            }
            number.push_str(self.digits[usize::from(b - b'0')]);
        }

        number.push_str(self.decimal_separator);
        number.push_str(&self.localize_digits(&format!("{:02}", amount.fraction())));
        number
    }
}

impl LocaleFormat for BuiltinLocale {
    fn identifier(&self) -> &str {
        self.identifier
    }

    fn currency_symbol(&self) -> Option<&str> {
        Some(self.currency_symbol)
    }

    fn grouping_separator(&self) -> Option<&str> {
        Some(self.grouping_separator)
    }

    fn decimal_separator(&self) -> Option<&str> {
        Some(self.decimal_separator)
    }

    fn format_currency(&self, amount: Amount) -> String {
        let number = self.format_number(amount);
        let sign = if amount.is_negative() { "-" } else { "" };

        match self.placement {
            SymbolPlacement::Prefix => format!("{}{}{}", sign, self.currency_symbol, number),
            SymbolPlacement::PrefixSpaced => {
                format!("{}\u{a0}{}{}", self.currency_symbol, sign, number)
            }
            SymbolPlacement::SuffixSpaced => {
                format!("{}{}\u{a0}{}", sign, number, self.currency_symbol)
            }
        }
    }

    fn format_decimal_digit(&self, digit: u8) -> String {
        self.digits[usize::from(digit)].to_string()
    }
}
