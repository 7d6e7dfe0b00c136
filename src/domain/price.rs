// src/domain/price.rs

use std::fmt;

/// A listing price held as integer cents.
///
/// Formatting (`$300,000`) is a one-way presentation step; filtering
/// compares the structured amount directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Price {
    cents: u64,
}

impl Price {
    pub fn from_dollars(dollars: u64) -> Self {
        Self {
            cents: dollars.saturating_mul(100),
        }
    }

    /// Converts a raw feed amount. Negative and non-finite values become zero.
    pub fn from_amount(amount: f64) -> Self {
        if !amount.is_finite() || amount <= 0.0 {
            return Self::default();
        }
        Self {
            cents: (amount * 100.0).round() as u64,
        }
    }

    pub fn cents(&self) -> u64 {
        self.cents
    }

    /// Whole currency units (cents truncated).
    pub fn dollars(&self) -> u64 {
        self.cents / 100
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = format_price(self.dollars());
        match self.cents % 100 {
            0 => f.write_str(&whole),
            rest => write!(f, "{whole}.{rest:02}"),
        }
    }
}

/// `"$" + grouped integer`, e.g. `1250000` -> `$1,250,000`.
pub fn format_price(dollars: u64) -> String {
    let digits = dollars.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

/// Parses amounts like `$1,250,000`, `250000` or `$99.95` into whole units.
///
/// Currency symbol, grouping separators and surrounding whitespace are
/// stripped and a fractional part is dropped. Returns `None` if anything else
/// is left over.
pub fn parse_amount(input: &str) -> Option<u64> {
    let cleaned: String = input
        .trim()
        .chars()
        .filter(|c| !matches!(c, '$' | ','))
        .collect();

    let (whole, fraction) = match cleaned.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (cleaned.as_str(), ""),
    };

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if whole.is_empty() || !all_digits(whole) || !all_digits(fraction) {
        return None;
    }

    whole.parse().ok()
}
