use core::fmt::{self, Display, Formatter};

use num_bigint::{BigInt, Sign};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};
use crate::random::random_between;

/// Witness count for the Miller-Rabin test; a composite survives with
/// probability at most 4^-64.
const MILLER_RABIN_ROUNDS: usize = 64;

const SMALL_PRIMES: [u32; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

/// An integer known to be prime.
///
/// The evidence is either a probabilistic primality test run by
/// [`BigPrime::new`] or the caller's word via [`BigPrime::new_unchecked`].
/// Deserialization trusts its source in the same way as `new_unchecked`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BigPrime(BigInt);

impl BigPrime {
    /// Create a prime after checking it with the Miller-Rabin test.
    pub fn new<R: Rng + ?Sized>(value: BigInt, rng: &mut R) -> Result<Self> {
        if !is_probable_prime(&value, MILLER_RABIN_ROUNDS, rng)? {
            return Err(Error::InvalidArgument("value is not prime"));
        }
        Ok(BigPrime(value))
    }

    /// Wrap a value the caller vouches for. Only cheap sanity checks run, and
    /// only in debug builds.
    pub fn new_unchecked(value: BigInt) -> Self {
        debug_assert!(value > BigInt::from(1), "primes are greater than one");
        debug_assert!(
            value == BigInt::from(2) || &value % 2u32 == BigInt::from(1),
            "the only even prime is two"
        );
        BigPrime(value)
    }

    #[inline]
    pub fn value(&self) -> &BigInt {
        &self.0
    }

    #[inline]
    pub fn bit_length(&self) -> usize {
        self.0.bits() as usize
    }

    pub fn into_inner(self) -> BigInt {
        self.0
    }
}

impl AsRef<BigInt> for BigPrime {
    fn as_ref(&self) -> &BigInt {
        &self.0
    }
}

impl From<BigPrime> for BigInt {
    fn from(prime: BigPrime) -> Self {
        prime.0
    }
}

impl Display for BigPrime {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// Miller-Rabin probabilistic primality test with `rounds` random witnesses.
pub fn is_probable_prime<R: Rng + ?Sized>(
    candidate: &BigInt,
    rounds: usize,
    rng: &mut R,
) -> Result<bool> {
    let one = BigInt::from(1);
    let two = BigInt::from(2);
    if candidate < &two {
        return Ok(false);
    }

    for small in SMALL_PRIMES {
        let small = BigInt::from(small);
        if candidate == &small {
            return Ok(true);
        }
        if (candidate % &small).sign() == Sign::NoSign {
            return Ok(false);
        }
    }

    // candidate - 1 = odd_part * 2^twos
    let candidate_minus_one = candidate - &one;
    let twos = candidate_minus_one.trailing_zeros().unwrap_or(0);
    let odd_part = &candidate_minus_one >> twos;

    'witness: for _ in 0..rounds {
        let base = random_between(&two, &candidate_minus_one, rng)?;
        let mut x = base.modpow(&odd_part, candidate);
        if x == one || x == candidate_minus_one {
            continue;
        }
        for _ in 1..twos {
            x = x.modpow(&two, candidate);
            if x == candidate_minus_one {
                continue 'witness;
            }
        }
        return Ok(false);
    }

    Ok(true)
}
