//! Deterministic Random Number Generator
//!
//! Uses Xorshift128+ algorithm for fast, high-quality, deterministic randomness.
//! Given the same seed, produces identical sequence on all platforms, so a
//! recorded list of moves replays to the same tile spawns.

use serde::{Serialize, Deserialize};
use sha2::{Sha256, Digest};

use super::fixed::{Fixed, FIXED_ONE, FIXED_SCALE};

/// Deterministic PRNG using Xorshift128+ algorithm.
///
/// # Example
///
/// ```
/// use twenty48::core::rng::DeterministicRng;
///
/// let mut a = DeterministicRng::new(12345);
/// let mut b = DeterministicRng::new(12345);
/// assert_eq!(a.next_u64(), b.next_u64());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DeterministicRng {
    state: [u64; 2],
}

impl Default for DeterministicRng {
    fn default() -> Self {
        Self::new(0)
    }
}

impl DeterministicRng {
    /// Create a new RNG from a 64-bit seed.
    ///
    /// Uses SplitMix64 to initialize the internal state, ensuring
    /// good distribution even from weak seeds.
    pub fn new(seed: u64) -> Self {
        let mut s = seed;
        let state0 = splitmix64(&mut s);
        let state1 = splitmix64(&mut s);

        // Ensure state is never all zeros
        let state = if state0 == 0 && state1 == 0 {
            [1, 1]
        } else {
            [state0, state1]
        };

        Self { state }
    }

    /// Generate the next 64-bit random value.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let s0 = self.state[0];
        let mut s1 = self.state[1];
        let result = s0.wrapping_add(s1);

        s1 ^= s0;
        self.state[0] = s0.rotate_left(24) ^ s1 ^ (s1 << 16);
        self.state[1] = s1.rotate_left(37);

        result
    }

    /// Generate a random integer in range [0, max).
    #[inline]
    pub fn next_int(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        // Simple modulo - bias is negligible for grid-sized ranges
        (self.next_u64() % max as u64) as u32
    }

    /// Generate a random Fixed in range [0, FIXED_ONE).
    #[inline]
    pub fn next_unit(&mut self) -> Fixed {
        // Upper bits only; the low bits of Xorshift128+ are weakest
        (self.next_u64() >> (64 - FIXED_SCALE)) as Fixed
    }

    /// Generate a random boolean with given probability.
    ///
    /// probability is in range [0, FIXED_ONE] where FIXED_ONE = 100%
    #[inline]
    pub fn next_bool(&mut self, probability: Fixed) -> bool {
        if probability >= FIXED_ONE {
            return true;
        }
        self.next_unit() < probability
    }

    /// Select a random element from a slice.
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        if slice.is_empty() {
            None
        } else {
            let idx = self.next_int(slice.len() as u32) as usize;
            slice.get(idx)
        }
    }

    /// Current generator state (fed into the turn state hash).
    pub fn state(&self) -> [u64; 2] {
        self.state
    }
}

/// SplitMix64 for seed initialization.
/// Produces well-distributed values from sequential seeds.
#[inline]
fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9E3779B97F4A7C15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

/// Derive a session seed from a session identifier.
///
/// `salt` lets the same session id produce independent games
/// (e.g. a restart after game over).
pub fn derive_session_seed(session_id: &[u8; 16], salt: u64) -> u64 {
    let mut hasher = Sha256::new();

    // Domain separator
    hasher.update(b"TWENTY48_SEED_V1");
    hasher.update(session_id);
    hasher.update(salt.to_le_bytes());

    let hash = hasher.finalize();

    let mut seed = [0u8; 8];
    seed.copy_from_slice(&hash[0..8]);
    u64::from_le_bytes(seed)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_determinism() {
        let mut rng1 = DeterministicRng::new(12345);
        let mut rng2 = DeterministicRng::new(12345);

        for _ in 0..1000 {
            assert_eq!(rng1.next_u64(), rng2.next_u64());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = DeterministicRng::new(12345);
        let mut rng2 = DeterministicRng::new(54321);

        // Very unlikely to match
        assert_ne!(rng1.next_u64(), rng2.next_u64());
    }

    #[test]
    fn test_next_int() {
        let mut rng = DeterministicRng::new(1234);

        for _ in 0..1000 {
            assert!(rng.next_int(16) < 16);
        }

        // Edge cases
        assert_eq!(rng.next_int(0), 0);
        assert_eq!(rng.next_int(1), 0);
    }

    #[test]
    fn test_next_unit_range() {
        let mut rng = DeterministicRng::new(9999);

        for _ in 0..1000 {
            let val = rng.next_unit();
            assert!((0..FIXED_ONE).contains(&val));
        }
    }

    #[test]
    fn test_next_bool_extremes() {
        let mut rng = DeterministicRng::new(42);

        for _ in 0..100 {
            assert!(!rng.next_bool(0));
            assert!(rng.next_bool(FIXED_ONE));
        }
    }

    #[test]
    fn test_choose() {
        let mut rng = DeterministicRng::new(7);
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());

        let items = [1, 2, 3];
        for _ in 0..100 {
            let picked = rng.choose(&items).copied();
            assert!(matches!(picked, Some(1..=3)));
        }
    }

    #[test]
    fn test_derive_session_seed() {
        let session = [1u8; 16];

        let seed1 = derive_session_seed(&session, 0);
        let seed2 = derive_session_seed(&session, 0);
        assert_eq!(seed1, seed2);

        assert_ne!(seed1, derive_session_seed(&session, 1));
        assert_ne!(seed1, derive_session_seed(&[2u8; 16], 0));
    }

    #[test]
    fn test_state_tracks_draws() {
        let mut a = DeterministicRng::new(5555);
        let mut b = DeterministicRng::new(5555);
        assert_eq!(a.state(), b.state());

        a.next_u64();
        assert_ne!(a.state(), b.state());

        b.next_u64();
        assert_eq!(a.state(), b.state());
    }
}
