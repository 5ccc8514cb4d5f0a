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

use rand::RngCore;

/// The source of randomness a simulator needs: a single coin flip per
/// non-deterministic measurement outcome.
///
/// Blanket-implemented for any `RngCore` (so `ChaCha8Rng`, `StdRng`, a
/// deterministic replay source like [`CyclicRng`](super::cyclic_rng::CyclicRng),
/// etc. all work out of the box) but kept as its own trait so callers that
/// only need a coin flip aren't forced to depend on the full `rand` API.
pub trait SimRng: RngCore {
    /// Samples a single uniformly-random bit.
    ///
    /// This is the only randomness the measurement engine consumes: the
    /// outcome of a non-deterministic measurement on a freshly collapsing
    /// stabilizer state is a fair coin flip.
    fn next_bool(&mut self) -> bool {
        self.next_u32() & 1 == 1
    }
}

impl<T: RngCore> SimRng for T {}
