use crate::charset::{ALL, MANDATORY, MAX_CONSECUTIVE};
use crate::error::{Error, Result};
use crate::keystream::Keystream;
use tracing::{debug, trace};
use zeroize::Zeroizing;

/// One digit, one lowercase and one uppercase letter are always placed.
pub const MIN_LENGTH: usize = 3;

/// Redraws allowed for a single filler character before giving up.
pub const MAX_FILLER_ATTEMPTS: usize = 10_000;

/// Marks an unfilled slot. Zeroizing the buffer resets every slot to it.
const EMPTY: u8 = 0;

/// Password generator for a fixed output length.
///
/// Each call works on its own buffer, so a shared `&Generator` can be used
/// from several threads at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generator {
    length: usize,
}

impl Generator {
    pub fn new(length: usize) -> Result<Self> {
        if length < MIN_LENGTH {
            return Err(Error::InvalidLength {
                length,
                min: MIN_LENGTH,
            });
        }

        debug!(length, "Created password generator");
        Ok(Self { length })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Generates a password using a keystream freshly seeded from the OS.
    pub fn generate(&self) -> Result<Zeroizing<String>> {
        let mut rng = Keystream::from_entropy()?;
        self.generate_with(&mut rng)
    }

    /// Generates a password drawing every random value from `rng`.
    ///
    /// The mandatory characters are placed first, each at a random start slot
    /// with forward probing. The remaining slots are filled from the full
    /// character set, redrawing whenever a character fits nowhere.
    pub fn generate_with(&self, rng: &mut Keystream) -> Result<Zeroizing<String>> {
        let mut buffer = Zeroizing::new(vec![EMPTY; self.length]);

        for class in MANDATORY {
            place_mandatory(&mut buffer, class, rng)?;
        }

        for _ in MIN_LENGTH..self.length {
            place_filler(&mut buffer, rng)?;
        }

        let password: String = buffer.iter().map(|&b| b as char).collect();

        Ok(Zeroizing::new(password))
    }
}

/// Places one character from `class`. With at most two slots taken and
/// disjoint classes a legal slot always exists, so this fails only on a
/// buffer that is already full.
fn place_mandatory(buffer: &mut [u8], class: &[u8], rng: &mut Keystream) -> Result<()> {
    let ch = rng.pick(class);
    let start = rng.below(buffer.len());

    if insert_next(buffer, start, ch) {
        Ok(())
    } else {
        Err(Error::PlacementExhausted { attempts: 1 })
    }
}

fn place_filler(buffer: &mut [u8], rng: &mut Keystream) -> Result<()> {
    for attempt in 1..=MAX_FILLER_ATTEMPTS {
        let ch = rng.pick(ALL);
        let start = rng.below(buffer.len());

        if insert_next(buffer, start, ch) {
            if attempt > 1 {
                trace!(attempt, "Placed filler character after redraw");
            }
            return Ok(());
        }
    }

    Err(Error::PlacementExhausted {
        attempts: MAX_FILLER_ATTEMPTS,
    })
}

/// Writes `ch` into the first empty slot at or after `start` (wrapping) where
/// it does not form an over-long run. Each slot is visited once.
fn insert_next(buffer: &mut [u8], start: usize, ch: u8) -> bool {
    let len = buffer.len();

    for offset in 0..len {
        let pos = (start + offset) % len;
        if buffer[pos] == EMPTY && run_allows(buffer, pos, ch) {
            buffer[pos] = ch;
            return true;
        }
    }

    false
}

fn run_allows(buffer: &[u8], pos: usize, ch: u8) -> bool {
    let backward = buffer[..pos].iter().rev().take_while(|&&b| b == ch).count();
    let forward = buffer[pos + 1..].iter().take_while(|&&b| b == ch).count();

    backward + forward + 1 <= MAX_CONSECUTIVE
}
