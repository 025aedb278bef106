//! Salary band extraction and currency formatting.
//!
//! Amounts are rendered the way an en-US locale renders currency with no
//! fractional digits: symbol prefix, comma grouping, half-away-from-zero
//! rounding.

use super::RawJobRecord;
use std::fmt;

/// Currency assumed when the record names none.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Salary fields pulled out of a raw record.
///
/// Only built when a non-zero minimum amount is present. A zero amount is
/// treated the same as a missing one.
#[derive(Debug, Clone, PartialEq)]
pub struct SalaryBand<'a> {
    pub min: f64,
    pub max: Option<f64>,
    pub currency: &'a str,
    pub pay_period: Option<&'a str>,
}

fn usable(amount: Option<f64>) -> Option<f64> {
    amount.filter(|a| a.is_finite() && *a != 0.0)
}

impl<'a> SalaryBand<'a> {
    pub fn from_raw(raw: &'a RawJobRecord) -> Option<Self> {
        let min = usable(raw.min_amount)?;
        Some(Self {
            min,
            max: usable(raw.max_amount),
            currency: raw.currency.as_deref().unwrap_or(DEFAULT_CURRENCY),
            pay_period: raw.pay_period.as_deref().filter(|p| !p.is_empty()),
        })
    }
}

impl fmt::Display for SalaryBand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let min = format_currency(self.min, self.currency);
        match self.max {
            Some(max) => {
                write!(f, "{min} – {}", format_currency(max, self.currency))?;
                if let Some(period) = self.pay_period {
                    write!(f, " / {}", period.to_lowercase())?;
                }
                Ok(())
            }
            None => write!(f, "From {min}"),
        }
    }
}

/// Symbol used for a currency code in the en-US locale, if it has one.
fn currency_symbol(code: &str) -> Option<&'static str> {
    let symbol = match code {
        "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "JPY" => "¥",
        "CNY" => "CN¥",
        "INR" => "₹",
        "KRW" => "₩",
        "ILS" => "₪",
        "VND" => "₫",
        "PHP" => "₱",
        "CAD" => "CA$",
        "AUD" => "A$",
        "NZD" => "NZ$",
        "HKD" => "HK$",
        "MXN" => "MX$",
        "TWD" => "NT$",
        "BRL" => "R$",
        _ => return None,
    };
    Some(symbol)
}

/// Format `amount` as a whole-unit currency string, e.g. `$50,000`.
///
/// Codes without a known symbol are written as the code followed by a
/// non-breaking space (`CHF 50,000`). A malformed code (not three ASCII
/// letters) falls back to USD.
pub fn format_currency(amount: f64, currency: &str) -> String {
    let code = currency.trim().to_ascii_uppercase();
    let code = if code.len() == 3 && code.bytes().all(|b| b.is_ascii_alphabetic()) {
        code
    } else {
        tracing::debug!(currency, "unrecognized currency code, using USD");
        DEFAULT_CURRENCY.to_string()
    };

    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = group_thousands(rounded.abs() as u128);

    match currency_symbol(&code) {
        Some(symbol) => format!("{sign}{symbol}{digits}"),
        None => format!("{sign}{code}\u{a0}{digits}"),
    }
}

fn group_thousands(value: u128) -> String {
    let raw = value.to_string();
    let mut out = String::with_capacity(raw.len() + raw.len() / 3);
    for (idx, ch) in raw.chars().enumerate() {
        if idx > 0 && (raw.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
