use num_bigint::{BigInt, Sign};
use rand::Rng;

use crate::errors::{Error, Result};

/// Sample an integer uniformly from `[0, bound)`.
///
/// Draws fixed-width buffers of `ceil(bits(bound) / 8)` bytes, clears the bits
/// above the bound's bit length and retries while the draw is not below the
/// bound. Each draw is accepted with probability greater than one half.
pub fn random_below<R: Rng + ?Sized>(bound: &BigInt, rng: &mut R) -> Result<BigInt> {
    if bound.sign() != Sign::Plus {
        return Err(Error::InvalidArgument("sampling bound must be positive"));
    }

    let bit_length = bound.bits();
    let byte_length = bit_length.div_ceil(8);
    let surplus_bits = byte_length * 8 - bit_length;
    let top_mask = 0xffu8 >> surplus_bits;

    let mut buffer = vec![0u8; byte_length as usize];
    loop {
        rng.fill(&mut buffer[..]);
        if let Some(top) = buffer.last_mut() {
            *top &= top_mask;
        }
        let candidate = BigInt::from_bytes_le(Sign::Plus, &buffer);
        if &candidate < bound {
            return Ok(candidate);
        }
    }
}

/// Sample an integer uniformly from `[low, high)`.
pub fn random_between<R: Rng + ?Sized>(low: &BigInt, high: &BigInt, rng: &mut R) -> Result<BigInt> {
    if low >= high {
        return Err(Error::InvalidArgument("empty sampling interval"));
    }
    Ok(low + random_below(&(high - low), rng)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_samples_stay_below_bound() {
        let mut rng = StdRng::seed_from_u64(42);
        let bound = BigInt::from(1000);
        for _ in 0..500 {
            let value = random_below(&bound, &mut rng).unwrap();
            assert!(value >= BigInt::from(0));
            assert!(value < bound);
        }
    }

    #[test]
    fn test_samples_cover_small_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let bound = BigInt::from(11);
        let seen: HashSet<BigInt> = (0..500)
            .map(|_| random_below(&bound, &mut rng).unwrap())
            .collect();
        assert_eq!(seen.len(), 11);
    }

    #[test]
    fn test_bound_of_one_yields_zero() {
        let mut rng = StdRng::seed_from_u64(1);
        let value = random_below(&BigInt::from(1), &mut rng).unwrap();
        assert_eq!(value, BigInt::from(0));
    }

    #[test]
    fn test_rejects_non_positive_bound() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            random_below(&BigInt::from(0), &mut rng),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            random_below(&BigInt::from(-5), &mut rng),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_random_between() {
        let mut rng = StdRng::seed_from_u64(3);
        let low = BigInt::from(2);
        let high = BigInt::from(5);
        for _ in 0..100 {
            let value = random_between(&low, &high, &mut rng).unwrap();
            assert!(value >= low && value < high);
        }
        assert!(random_between(&high, &low, &mut rng).is_err());
    }
}
