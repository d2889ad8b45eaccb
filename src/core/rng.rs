//! Seeded randomness for reproducible sampling.
//!
//! Sampling takes any `rand::Rng`. `EnumRng` is the seeded source used
//! where draws must repeat, such as tests and benchmarks.
//!
//! ```
//! use poker_enums::core::EnumRng;
//! use poker_enums::enums::EnumDecl;
//!
//! let coin = EnumDecl::new("Coin")
//!     .with_member("Heads", ["h", "heads"])
//!     .with_member("Tails", ["t", "tails"])
//!     .declare()
//!     .unwrap();
//!
//! let mut rng = EnumRng::new(42);
//! let mut again = EnumRng::new(42);
//! assert_eq!(coin.sample(&mut rng), coin.sample(&mut again));
//! ```

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// ChaCha8 stream fixed by a `u64` seed.
#[derive(Clone, Debug)]
pub struct EnumRng {
    inner: ChaCha8Rng,
}

impl EnumRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl RngCore for EnumRng {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.inner.try_fill_bytes(dest)
    }
}
