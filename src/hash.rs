//! Bucket selection.
//!
//! A key is rendered through its `Display` impl and every Unicode scalar of
//! the rendering is hashed on its own. The absolute values of those hashes are
//! summed and the sum is reduced modulo the bucket count.

use std::fmt::{self, Display, Write};

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Hash of a single scalar value: FNV-1a over the little-endian bytes of its
/// code point, read back as a signed integer.
pub fn scalar_hash(scalar: char) -> i64 {
    let mut hash = FNV_OFFSET_BASIS;
    for byte in u32::from(scalar).to_le_bytes() {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash as i64
}

// fmt::Write sink so the key is never materialized as a String
struct ScalarSum(u64);

impl Write for ScalarSum {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for scalar in s.chars() {
            self.0 = self.0.wrapping_add(scalar_hash(scalar).unsigned_abs());
        }
        Ok(())
    }
}

/// Returns the home bucket of `key` in a table of `capacity` buckets.
///
/// The result is always in `0..capacity`. A key that renders as the empty
/// string lands in bucket 0.
///
/// # Panics
///
/// Panics if `capacity` is zero.
pub fn hash_index<K: Display + ?Sized>(key: &K, capacity: usize) -> usize {
    assert!(capacity > 0, "capacity must be positive");
    let mut sum = ScalarSum(0);
    // ScalarSum never fails, so only a broken Display impl can end this early
    let _ = write!(sum, "{}", key);
    (sum.0 % capacity as u64) as usize
}
