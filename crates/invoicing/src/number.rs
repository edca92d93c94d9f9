//! Order numbers.
//!
//! An order number is accepted only when it is carried as text *and* that text
//! reads as a number: `"2024001"`, `"  42"`, `"1.5e3"`. Bare integers are
//! rejected even though they are numeric, and so are the falsy texts `""` and
//! `"0"`.

use core::str::FromStr;

use invoicekit_core::{DomainError, DomainResult, ValueObject};

/// Description reported in [`DomainError::InvalidIdentifier`] for rejected numbers.
pub const ORDER_NUMBER_EXPECTATION: &str = "non-empty string or numeric";

/// An order number as handed in by the caller, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RawOrderNumber {
    Integer(i64),
    Text(String),
}

impl core::fmt::Display for RawOrderNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RawOrderNumber::Integer(n) => core::fmt::Display::fmt(n, f),
            RawOrderNumber::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RawOrderNumber {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<String> for RawOrderNumber {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for RawOrderNumber {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

/// Validated order number. The text is kept exactly as supplied.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderNumber(String);

impl OrderNumber {
    pub fn parse(raw: impl Into<RawOrderNumber>) -> DomainResult<Self> {
        let raw = raw.into();
        match raw {
            RawOrderNumber::Text(text) if is_truthy(&text) && is_numeric(&text) => Ok(Self(text)),
            other => {
                tracing::warn!(number = %other, "rejected order number");
                Err(DomainError::invalid_identifier(
                    ORDER_NUMBER_EXPECTATION,
                    other.to_string(),
                ))
            }
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for OrderNumber {}

impl core::fmt::Display for OrderNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for OrderNumber {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<RawOrderNumber> for OrderNumber {
    type Error = DomainError;

    fn try_from(value: RawOrderNumber) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl AsRef<str> for OrderNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn is_truthy(text: &str) -> bool {
    !text.is_empty() && text != "0"
}

fn is_numeric_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

/// Decimal numeric string: optional surrounding whitespace, optional sign,
/// digits with an optional fraction (at least one digit overall), optional
/// exponent with at least one digit.
fn is_numeric(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut start = 0;
    let mut end = bytes.len();
    while start < end && is_numeric_space(bytes[start]) {
        start += 1;
    }
    while end > start && is_numeric_space(bytes[end - 1]) {
        end -= 1;
    }
    let body = &bytes[start..end];

    let mut i = 0;
    if matches!(body.first().copied(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_digits = count_digits(&body[i..]);
    i += int_digits;

    let mut frac_digits = 0;
    if body.get(i).copied() == Some(b'.') {
        i += 1;
        frac_digits = count_digits(&body[i..]);
        i += frac_digits;
    }

    if int_digits + frac_digits == 0 {
        return false;
    }

    if matches!(body.get(i).copied(), Some(b'e' | b'E')) {
        i += 1;
        if matches!(body.get(i).copied(), Some(b'+' | b'-')) {
            i += 1;
        }
        let exp_digits = count_digits(&body[i..]);
        if exp_digits == 0 {
            return false;
        }
        i += exp_digits;
    }

    i == body.len()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
