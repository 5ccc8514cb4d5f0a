// Copyright 2024 The PECOS Developers
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not use this file except
// in compliance with the License.You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software distributed under the License
// is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express
// or implied. See the License for the specific language governing permissions and limitations under
// the License.

use super::sim_rng::SimRng;
use rand::{RngCore, SeedableRng};

const N: usize = 64;

#[derive(Debug, Clone)]
pub struct CyclicSeed(pub [u8; N]);

impl Default for CyclicSeed {
    #[inline]
    fn default() -> Self {
        Self([0; N])
    }
}

impl AsRef<[u8]> for CyclicSeed {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl AsMut<[u8]> for CyclicSeed {
    #[inline]
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.0
    }
}

/// A deterministic, scriptable stand-in for a real RNG.
///
/// Replays a fixed sequence of booleans set via [`CyclicRng::set_bools`],
/// cycling back to the start once exhausted. Used to drive a measurement
/// engine through an exact, reproducible sequence of non-deterministic
/// outcomes in tests, without depending on any particular `rand` algorithm's
/// output stream.
#[derive(Debug, Clone)]
pub struct CyclicRng {
    seed: CyclicSeed,
    bools: Vec<bool>,
    cursor: usize,
}

impl CyclicRng {
    /// Sets the sequence of booleans `next_bool` will replay, in order,
    /// cycling back to the first entry once the sequence is exhausted.
    #[inline]
    pub fn set_bools(&mut self, bools: &[bool]) {
        bools.clone_into(&mut self.bools);
        self.cursor = 0;
    }

    fn pop_bool(&mut self) -> bool {
        if self.bools.is_empty() {
            return false;
        }
        let value = self.bools[self.cursor % self.bools.len()];
        self.cursor = self.cursor.wrapping_add(1);
        value
    }
}

impl RngCore for CyclicRng {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        if self.pop_bool() {
            u32::MAX
        } else {
            0
        }
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        if self.pop_bool() {
            u64::MAX
        } else {
            0
        }
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let fill = u8::from(self.pop_bool()) * 0xFF;
        dest.fill(fill);
    }
}

impl SeedableRng for CyclicRng {
    type Seed = CyclicSeed;

    #[inline]
    fn from_seed(seed: Self::Seed) -> Self {
        Self {
            seed,
            bools: vec![],
            cursor: 0,
        }
    }
}

// `SimRng` is picked up via the blanket `impl<T: RngCore> SimRng for T`
// in `sim_rng.rs`; its default `next_bool` (`next_u32() & 1 == 1`) already
// matches `pop_bool` bit-for-bit since `next_u32` returns all-ones or all-zeros.

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_the_configured_sequence() {
        let mut rng = CyclicRng::from_seed(CyclicSeed::default());
        rng.set_bools(&[true, false, true]);
        assert_eq!(
            (0..6).map(|_| rng.next_bool()).collect::<Vec<_>>(),
            vec![true, false, true, true, false, true]
        );
    }

    #[test]
    fn empty_sequence_always_returns_false() {
        let mut rng = CyclicRng::from_seed(CyclicSeed::default());
        assert!(!rng.next_bool());
    }
}
