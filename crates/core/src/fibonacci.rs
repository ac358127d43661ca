//! Fibonacci sequence generation

/// Largest sequence length whose last term fits in a `u128`
pub const MAX_TERMS: usize = 187;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SequenceError {
    #[error("Sequence of {requested} terms overflows 128-bit integers (max {max})")]
    Overflow { requested: i64, max: usize },
}

/// Return the first `n` Fibonacci numbers, starting at 0
///
/// Non-positive lengths produce an empty sequence. Lengths above
/// [`MAX_TERMS`] are rejected before anything is allocated.
pub fn fibonacci(n: i64) -> Result<Vec<u128>, SequenceError> {
    if n <= 0 {
        return Ok(Vec::new());
    }

    let len = usize::try_from(n)
        .ok()
        .filter(|len| *len <= MAX_TERMS)
        .ok_or(SequenceError::Overflow {
            requested: n,
            max: MAX_TERMS,
        })?;

    let mut sequence = Vec::with_capacity(len);
    sequence.push(0u128);
    if len > 1 {
        sequence.push(1);
    }
    for i in 2..len {
        // Cannot overflow while len <= MAX_TERMS
        sequence.push(sequence[i - 1] + sequence[i - 2]);
    }

    Ok(sequence)
}
