use crate::Result;
use std::num::Wrapping;
use std::ops::RangeInclusive;

type State = [Wrapping<u64>; 2];

/// XorShift128+, the generator behind `Math.random` in V8.
///
/// Only used to make up demo rosters, so it favours being reproducible from a pair of seed words
/// over statistical quality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rng {
    state: State,
}

impl Rng {
    /// # Errors
    ///
    /// Returns [`crate::Error::Entropy`] if the OS random source fails.
    pub fn from_entropy() -> Result<Rng> {
        let mut buf = [0; 16];
        getrandom::getrandom(&mut buf)?;
        let (s0, s1) = buf.split_at(8);
        Ok(Rng::seeded(
            u64::from_le_bytes(s0.try_into().unwrap_or_default()),
            u64::from_le_bytes(s1.try_into().unwrap_or_default()),
        ))
    }

    pub fn seeded(s0: u64, s1: u64) -> Rng {
        // an all-zero state never leaves zero
        let state = if s0 == 0 && s1 == 0 {
            [Wrapping(0x9e37_79b9_7f4a_7c15), Wrapping(0xbf58_476d_1ce4_e5b9)]
        } else {
            [Wrapping(s0), Wrapping(s1)]
        };
        Rng { state }
    }

    fn next_u52(&mut self) -> u64 {
        let [mut s1, s0] = self.state;
        s1 ^= s1 << 23;
        s1 ^= s1 >> 17;
        s1 ^= s0;
        s1 ^= s0 >> 26;
        self.state = [s0, s1];
        (s0 >> 12).0
    }

    pub fn next_f64(&mut self) -> f64 {
        f64::from_bits(self.next_u52() | 0x3ff0_0000_0000_0000) - 1.0
    }

    pub fn choose<I>(&mut self, choices: I) -> Option<I::Item>
    where
        I: IntoIterator,
        I::IntoIter: ExactSizeIterator,
    {
        let mut choices = choices.into_iter();
        #[allow(clippy::cast_precision_loss)]
        let len = choices.len() as f64;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let n = (self.next_f64() * len).floor() as usize;
        choices.nth(n)
    }

    /// Uniform integer in `range`, both ends included. An empty range yields its start.
    pub fn range(&mut self, range: RangeInclusive<u32>) -> u32 {
        let (start, end) = range.into_inner();
        if end <= start {
            return start;
        }
        let span = f64::from(end - start) + 1.0;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let n = (self.next_f64() * span).floor() as u32;
        start + n.min(end - start)
    }
}

impl Iterator for Rng {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_f64())
    }
}
