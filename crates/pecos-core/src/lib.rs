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

pub mod element;
pub mod error;
pub mod gate;
pub mod pauli;
pub mod phase;
pub mod qubit_id;
pub mod sets;
pub mod sims_rngs;

pub use element::{Element, IndexableElement};
pub use error::TableauError;
pub use phase::{QuarterPhase, Sign};
pub use qubit_id::QubitId;
pub use sets::hash_set::HashIdSet;
pub use sets::set::Set;
pub use sets::vec_set::VecSet;

pub use crate::sims_rngs::cyclic_rng::{CyclicRng, CyclicSeed};
pub use crate::sims_rngs::sim_rng::SimRng;
pub use gate::Gate;
pub use pauli::pauli_bitmap::PauliBitmap;
pub use pauli::pauli_sparse::PauliSparse;
pub use pauli::pauli_string::PauliString;
pub use pauli::{Pauli, PauliOperator};

pub use rand_chacha::{ChaCha12Rng, ChaCha20Rng, ChaCha8Rng};
