use ciphra_hashes::{compare, HashFunction};
use log::debug;
use thiserror::Error;

/// Reasons why an expected digest supplied as text cannot be checked.
#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("expected digest is not hexadecimal text: {0}")]
    MalformedHex(#[from] hex::FromHexError),

    #[error("expected digest has {actual} bytes, but {algorithm} digests have {expected}")]
    LengthMismatch {
        algorithm: &'static str,
        expected: usize,
        actual: usize,
    },
}

/// Hash ``message`` with ``H`` and check it against ``expected``, a digest rendered as hexadecimal text. Surrounding
/// whitespace is ignored and upper case digits are accepted.
///
/// # Returns
/// ``Ok(true)`` if the digests match, ``Ok(false)`` if they differ, or an error if ``expected`` is not a valid digest
/// of the algorithm.
pub fn verify_hex<H: HashFunction>(message: &[u8], expected: &str) -> Result<bool, VerifyError> {
    let expected = hex::decode(expected.trim()).map_err(|e| {
        debug!("rejecting expected {} digest: {}", H::NAME, e);
        VerifyError::from(e)
    })?;

    if expected.len() != H::OUTPUT_SIZE {
        debug!(
            "rejecting expected {} digest of {} bytes",
            H::NAME,
            expected.len()
        );
        return Err(VerifyError::LengthMismatch {
            algorithm: H::NAME,
            expected: H::OUTPUT_SIZE,
            actual: expected.len(),
        });
    }

    let actual = H::digest_message(message).raw();
    let matches = compare(actual.as_ref(), &expected);
    if !matches {
        debug!("{} digest mismatch for message of {} bytes", H::NAME, message.len());
    }

    Ok(matches)
}
