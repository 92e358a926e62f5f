use rand::rngs::OsRng;
use rand::RngCore as _;

use crate::error::DrawError;

/// One 32-bit word of OS entropy. Fails loudly when the OS source is
/// unavailable; there is no fallback generator.
fn random_u32() -> Result<u32, DrawError> {
    let mut buf = [0_u8; 4];
    OsRng.try_fill_bytes(&mut buf)?;
    Ok(u32::from_le_bytes(buf))
}

/// Uniform index in `[0, bound)`. Modulo reduction of a 32-bit word is not
/// exactly uniform when `bound` does not divide 2^32; for lottery-sized
/// pools the bias is negligible.
pub(crate) fn random_index(bound: usize) -> Result<usize, DrawError> {
    debug_assert!(bound > 0);
    Ok(random_u32()? as usize % bound)
}

/// Returns a uniformly random permutation of `input` without mutating it.
///
/// Fisher–Yates over a copy: walk `i` from the last index down to `1`,
/// swapping each position with a uniformly chosen one in `[0, i]`.
pub fn shuffle<T: Clone>(input: &[T]) -> Result<Vec<T>, DrawError> {
    let mut shuffled = input.to_vec();
    if shuffled.len() <= 1 {
        return Ok(shuffled);
    }
    for i in (1..shuffled.len()).rev() {
        let j = random_index(i + 1)?;
        shuffled.swap(i, j);
    }
    Ok(shuffled)
}
