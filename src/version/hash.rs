//! Stable string hash used as a deterministic ordering proxy
//!
//! Version strings carry trailing components that grow over time, so a
//! rolling hash of the full string gives the color engine a usable
//! recency proxy without comparing the components semantically.

/// Compute a 31-based rolling 32-bit hash of a string.
///
/// Stable across runs and platforms; wrapping arithmetic, not cryptographic.
/// Used only to order version strings deterministically.
pub fn string_hash(s: &str) -> u32 {
    s.bytes()
        .fold(0u32, |hash, byte| hash.wrapping_mul(31).wrapping_add(u32::from(byte)))
}
