//! Branch-free selection over fixed-width byte images.
//!
//! Big integers are decomposed into a fixed number of little-endian bytes and
//! every byte goes through `subtle`'s masked select, so the work done is the
//! same for either choice. The underlying `BigInt` arithmetic is not itself
//! constant time.

use num_bigint::{BigInt, Sign};
use subtle::{Choice, ConditionallySelectable};

fn fixed_width_bytes(value: &BigInt, byte_length: usize) -> Vec<u8> {
    let (_, mut bytes) = value.to_bytes_le();
    bytes.resize(byte_length.max(bytes.len()), 0);
    bytes
}

/// `when_unset` if `choice` is 0, `when_set` if it is 1.
///
/// Values are selected by magnitude, so both must be non-negative; canonical
/// field elements always fit into `byte_length` bytes.
pub fn select_integer(choice: Choice, when_unset: &BigInt, when_set: &BigInt, byte_length: usize) -> BigInt {
    let mut unset = fixed_width_bytes(when_unset, byte_length);
    let mut set = fixed_width_bytes(when_set, byte_length);
    let width = unset.len().max(set.len());
    unset.resize(width, 0);
    set.resize(width, 0);

    let selected: Vec<u8> = unset
        .iter()
        .zip(set.iter())
        .map(|(a, b)| u8::conditional_select(a, b, choice))
        .collect();
    BigInt::from_bytes_le(Sign::Plus, &selected)
}

pub fn select_flag(choice: Choice, when_unset: bool, when_set: bool) -> bool {
    u8::conditional_select(&(when_unset as u8), &(when_set as u8), choice) == 1
}

/// Swap `a` and `b` when `choice` is 1.
pub fn conditional_swap(choice: Choice, a: &mut BigInt, b: &mut BigInt, byte_length: usize) {
    let new_a = select_integer(choice, a, b, byte_length);
    let new_b = select_integer(choice, b, a, byte_length);
    *a = new_a;
    *b = new_b;
}

/// Fixed-width bit view of a non-negative scalar.
///
/// The scalar is expanded once into `ceil(bit_length / 8)` bytes so reading a
/// bit costs the same for every index and every scalar value.
pub struct ScalarBits {
    bytes: Vec<u8>,
    bit_length: usize,
}

impl ScalarBits {
    /// `scalar` must be non-negative and at most `bit_length` bits wide.
    pub fn new(scalar: &BigInt, bit_length: usize) -> Self {
        ScalarBits {
            bytes: fixed_width_bytes(scalar, bit_length.div_ceil(8)),
            bit_length,
        }
    }

    #[inline]
    pub fn bit_length(&self) -> usize {
        self.bit_length
    }

    #[inline]
    pub fn bit(&self, index: usize) -> Choice {
        Choice::from((self.bytes[index / 8] >> (index % 8)) & 1)
    }
}
