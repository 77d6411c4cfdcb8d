//! Password generation.

use rand::Rng;

use crate::error::EmptyCharsetError;

/// Produce a password of exactly `length` characters, each drawn uniformly
/// (with replacement) from `chars`.
///
/// The caller supplies the RNG; production uses a fast non-cryptographic
/// one on purpose. Uniformity comes from `gen_range`, which re-samples
/// instead of taking a biased modulo.
pub fn generate<R: Rng>(
    length: usize,
    chars: &[u8],
    rng: &mut R,
) -> Result<String, EmptyCharsetError> {
    if chars.is_empty() {
        return Err(EmptyCharsetError);
    }

    let bytes: Vec<u8> = (0..length)
        .map(|_| chars[rng.gen_range(0..chars.len())])
        .collect();

    // Safety: charset is all ASCII
    Ok(unsafe { String::from_utf8_unchecked(bytes) })
}
