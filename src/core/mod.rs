//! Core deterministic primitives.
//!
//! Integer-only math, a seeded PRNG and state hashing. Everything the
//! game logic needs to replay a session bit-for-bit.

pub mod fixed;
pub mod vec2;
pub mod rng;
pub mod hash;

// Re-export core types
pub use fixed::{Fixed, FIXED_ONE, FIXED_HALF, FIXED_SCALE};
pub use vec2::FixedVec2;
pub use rng::DeterministicRng;
pub use hash::{StateHash, compute_state_hash};
