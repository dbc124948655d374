//! Valset and batch nonces

use crate::IdentifierError;

/// Monotonically increasing sequence number of a valset epoch or an outgoing batch
pub type Nonce = u64;

/// Parses a nonce from its decimal text encoding.
///
/// Only ASCII digits are accepted: no sign, no whitespace and no radix prefix.
/// Leading zeros are allowed.
/// # Errors
/// Returns [`IdentifierError::InvalidNonce`] if the text is empty, contains a
/// non-digit character or does not fit in a `u64`.
pub fn parse_nonce(text: &str) -> Result<Nonce, IdentifierError> {
    let invalid = |reason: &str| IdentifierError::InvalidNonce {
        input: text.to_string(),
        reason: reason.to_string(),
    };

    if text.is_empty() {
        return Err(invalid("empty nonce"));
    }
    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid("nonce must only contain decimal digits"));
    }

    text.parse::<Nonce>().map_err(|e| invalid(&e.to_string()))
}
