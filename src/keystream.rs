use crate::error::{Error, Result};
use chacha20::ChaCha20;
use chacha20::cipher::{KeyIvInit, StreamCipher};
use tracing::debug;
use zeroize::Zeroizing;

const SEED_LEN: usize = 32;
const BUFFER_LEN: usize = 512;

/// ChaCha20 keystream used for every random draw made by the generator.
///
/// The key comes from the operating system CSPRNG in normal use. Draws are
/// taken as little-endian `u64` words and mapped onto a range by rejection
/// sampling, so every index is equally likely.
pub struct Keystream {
    cipher: ChaCha20,
    buffer: Zeroizing<[u8; BUFFER_LEN]>,
    pos: usize,
}

impl Keystream {
    pub fn from_entropy() -> Result<Self> {
        let mut seed = Zeroizing::new([0u8; SEED_LEN]);
        getrandom::fill(&mut seed[..]).map_err(Error::Entropy)?;
        debug!("Seeded keystream from system entropy");
        Ok(Self::from_seed(&seed))
    }

    /// Reproducible stream for a fixed key. Only suitable for tests.
    pub fn from_seed(seed: &[u8; SEED_LEN]) -> Self {
        let mut stream = Self {
            cipher: ChaCha20::new(seed.into(), &[0u8; 12].into()),
            buffer: Zeroizing::new([0u8; BUFFER_LEN]),
            pos: 0,
        };
        stream.refill();
        stream
    }

    fn refill(&mut self) {
        self.buffer.fill(0);
        self.cipher.apply_keystream(&mut self.buffer[..]);
        self.pos = 0;
    }

    fn next_u64(&mut self) -> u64 {
        if self.pos + 8 > BUFFER_LEN {
            self.refill();
        }

        let mut word = [0u8; 8];
        word.copy_from_slice(&self.buffer[self.pos..self.pos + 8]);
        self.pos += 8;

        u64::from_le_bytes(word)
    }

    /// Uniform index in `0..bound`. `bound` must be non-zero.
    pub fn below(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0, "Cannot sample from an empty range");

        let bound = bound as u64;
        let rejection_threshold = u64::MAX - (u64::MAX % bound);

        loop {
            let random_u64 = self.next_u64();
            if random_u64 < rejection_threshold {
                return (random_u64 % bound) as usize;
            }
        }
    }

    pub fn pick(&mut self, charset: &[u8]) -> u8 {
        charset[self.below(charset.len())]
    }
}

impl std::fmt::Debug for Keystream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Keystream").finish_non_exhaustive()
    }
}
