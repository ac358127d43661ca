//! Integer scanning helpers
//!
//! Shared by subcommands that take a numeric positional argument.

/// Error type for integer scanning
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseIntError {
    Empty,
    InvalidDigit(String),
    OutOfRange(String),
}

impl std::fmt::Display for ParseIntError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseIntError::Empty => write!(f, "no digits found"),
            ParseIntError::InvalidDigit(raw) => write!(f, "invalid digit in {:?}", raw),
            ParseIntError::OutOfRange(raw) => write!(f, "{} is out of range", raw),
        }
    }
}

impl std::error::Error for ParseIntError {}

/// Scan a signed decimal integer
///
/// Surrounding whitespace is ignored and a single leading `+` or `-` is
/// accepted. Everything else must be an ASCII digit.
pub fn parse_int(input: &str) -> Result<i64, ParseIntError> {
    let trimmed = input.trim();

    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    if digits.is_empty() {
        return Err(ParseIntError::Empty);
    }

    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseIntError::InvalidDigit(trimmed.to_string()));
    }

    // Accumulate negatively so i64::MIN is representable
    let mut value: i64 = 0;
    for b in digits.bytes() {
        let digit = i64::from(b - b'0');
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_sub(digit))
            .ok_or_else(|| ParseIntError::OutOfRange(trimmed.to_string()))?;
    }

    if negative {
        Ok(value)
    } else {
        value
            .checked_neg()
            .ok_or_else(|| ParseIntError::OutOfRange(trimmed.to_string()))
    }
}
