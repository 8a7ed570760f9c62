use log::warn;
use thiserror::Error;

use crate::word::Word;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("seed is zero, the register can only ever emit zeros")]
    ZeroSeed,
    #[error("polynomial has no tap above the constant term, feedback never fires")]
    NoFeedbackTap,
}

/// A Galois-configuration linear feedback shift register over the word `T`.
///
/// The polynomial sets bit `i` for every `x^i` term of the feedback
/// polynomial, degree term included. Bit 0 is forced on at construction.
/// On every step the register shifts left by one; if the bit at the highest
/// tap position is now set, the step emits 1 and folds the polynomial back
/// into the state with XOR, otherwise it emits 0.
#[derive(Debug, Clone)]
pub struct Register<T: Word> {
    polynomial: T,
    mask: T,
    data: T,
}

impl<T: Word> Register<T> {
    /// Builds a register from a feedback polynomial and a seed.
    ///
    /// Never fails: any polynomial and any seed are accepted, including
    /// degenerate ones. A zero seed shifts to zero forever and emits only
    /// zeros. A polynomial with no tap between bit 1 and bit `BITS - 2`
    /// (the tap scan covers only that range, the top bit of the word is
    /// never treated as a tap) leaves the feedback mask at zero, so the
    /// register degenerates to a plain shift. Use [`Register::try_new`] to
    /// reject both cases up front.
    pub fn new(polynomial: T, seed: T) -> Self {
        let mask = Self::feedback_mask(polynomial);
        if mask == T::ZERO {
            warn!(
                "polynomial {:x} has no usable tap, output degenerates to zeros",
                polynomial.to_u64()
            );
        }

        Self {
            polynomial: polynomial | T::ONE,
            mask,
            data: seed,
        }
    }

    /// Like [`Register::new`] but rejects configurations that cannot
    /// produce a useful sequence.
    pub fn try_new(polynomial: T, seed: T) -> Result<Self, ConfigError> {
        if seed == T::ZERO {
            return Err(ConfigError::ZeroSeed);
        }
        if Self::feedback_mask(polynomial) == T::ZERO {
            return Err(ConfigError::NoFeedbackTap);
        }

        Ok(Self::new(polynomial, seed))
    }

    // Highest set bit of the polynomial as given, before bit 0 is forced.
    // The counter starts at BITS - 1 and is decremented before each probe,
    // so bit BITS - 1 is never tested; the loop stops before probing bit 0.
    fn feedback_mask(polynomial: T) -> T {
        let mut shift = T::BITS - 1;

        while shift > 1 {
            shift -= 1;
            let probe = T::ONE << shift;
            if polynomial & probe != T::ZERO {
                return probe;
            }
        }

        T::ZERO
    }

    /// Advances the register one step and returns the output bit.
    pub fn next_bit(&mut self) -> u8 {
        self.data <<= 1;

        if self.data & self.mask != T::ZERO {
            self.data ^= self.polynomial;
            1
        } else {
            0
        }
    }

    /// Packs the next eight output bits into a byte, LSB first.
    pub fn next_byte(&mut self) -> u8 {
        let mut r = 0;
        for i in 0..8 {
            r += self.next_bit() << i;
        }
        r
    }

    pub fn state(&self) -> T {
        self.data
    }
}

impl<T: Word> Iterator for Register<T> {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_bit())
    }
}
