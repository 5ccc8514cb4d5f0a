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

use crate::{
    IndexableElement, Pauli, PauliBitmap, PauliOperator, PauliSparse, QuarterPhase, QubitId,
    VecSet,
};

/// A string of Pauli operators acting on multiple qubits, e.g. `-iX0 Z2 Y5`.
///
/// This is the human-facing representation: a `Vec` of `(Pauli, QubitId)`
/// pairs plus an overall phase. It converts to and from the compact
/// [`PauliSparse`] and [`PauliBitmap`] representations used internally.
#[allow(clippy::module_name_repetitions)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PauliString {
    phase: QuarterPhase,
    paulis: Vec<(Pauli, QubitId)>,
}

impl Default for PauliString {
    fn default() -> Self {
        Self::new()
    }
}

impl PauliString {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: QuarterPhase::PlusOne,
            paulis: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn get_phase(&self) -> QuarterPhase {
        self.phase
    }

    #[inline]
    #[must_use]
    pub fn get_paulis(&self) -> &Vec<(Pauli, QubitId)> {
        &self.paulis
    }

    /// # Errors
    ///
    /// Results in an error if failed to create a valid `PauliSparse`
    pub fn into_pauli_sparse(self) -> Result<PauliSparse<VecSet<usize>>, String> {
        let mut x_positions = Vec::new();
        let mut y_positions = Vec::new();
        let mut z_positions = Vec::new();

        for (pauli, qubit) in self.paulis {
            let idx = qubit.to_index();
            match pauli {
                Pauli::X => x_positions.push(idx),
                Pauli::Z => z_positions.push(idx),
                Pauli::Y => y_positions.push(idx),
                Pauli::I => {}
            }
        }

        PauliSparse::with_operators(self.phase, &x_positions, &y_positions, &z_positions)
    }

    /// # Errors
    ///
    /// Results in an error if `QubitId`s are larger than 64 bits or if failed to create a valid `PauliBitmap`
    pub fn into_pauli_bitmap(self) -> Result<PauliBitmap, String> {
        if self.paulis.iter().any(|(_, q)| q.to_index() >= 64) {
            return Err("QubitId larger than 64 bits".to_string());
        }

        let mut x_positions = Vec::new();
        let mut y_positions = Vec::new();
        let mut z_positions = Vec::new();

        for (pauli, qubit) in self.paulis {
            let idx = qubit.to_index() as u64;
            match pauli {
                Pauli::X => x_positions.push(idx),
                Pauli::Z => z_positions.push(idx),
                Pauli::Y => y_positions.push(idx),
                Pauli::I => {}
            }
        }

        PauliBitmap::with_operators(self.phase, &x_positions, &y_positions, &z_positions)
    }
}

impl From<PauliSparse<VecSet<usize>>> for PauliString {
    fn from(pauli_sparse: PauliSparse<VecSet<usize>>) -> Self {
        let x_positions = pauli_sparse.x_positions();
        let z_positions = pauli_sparse.z_positions();

        let mut all_positions: Vec<_> = x_positions
            .iter()
            .chain(z_positions.iter())
            .copied()
            .collect();
        all_positions.sort_unstable();
        all_positions.dedup();

        let mut paulis = Vec::new();
        for pos in all_positions {
            let qubit = QubitId::from_index(pos);
            let pauli = match (x_positions.contains(&pos), z_positions.contains(&pos)) {
                (true, false) => Pauli::X,
                (false, true) => Pauli::Z,
                (true, true) => Pauli::Y,
                (false, false) => continue,
            };
            paulis.push((pauli, qubit));
        }

        Self {
            phase: pauli_sparse.phase(),
            paulis,
        }
    }
}

impl TryFrom<PauliBitmap> for PauliString {
    type Error = &'static str;

    fn try_from(pauli_bit: PauliBitmap) -> Result<Self, Self::Error> {
        let mut paulis = Vec::new();

        for i in 0..64 {
            let x_set = (pauli_bit.get_x_bits() >> i) & 1 == 1;
            let z_set = (pauli_bit.get_z_bits() >> i) & 1 == 1;

            let pauli = match (x_set, z_set) {
                (true, false) => Pauli::X,
                (false, true) => Pauli::Z,
                (true, true) => Pauli::Y,
                (false, false) => continue,
            };

            paulis.push((pauli, QubitId::from_index(i)));
        }

        Ok(Self {
            phase: pauli_bit.get_phase(),
            paulis,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_pauli_sparse() {
        let mut s = PauliString::new();
        s.paulis.push((Pauli::X, QubitId(0)));
        s.paulis.push((Pauli::Y, QubitId(2)));
        let sparse = s.clone().into_pauli_sparse().unwrap();
        let back = PauliString::from(sparse);
        assert_eq!(back.paulis.len(), 2);
    }

    #[test]
    fn round_trips_through_pauli_bitmap() {
        let mut s = PauliString::new();
        s.paulis.push((Pauli::Z, QubitId(1)));
        let bitmap = s.clone().into_pauli_bitmap().unwrap();
        let back = PauliString::try_from(bitmap).unwrap();
        assert_eq!(back.paulis, vec![(Pauli::Z, QubitId(1))]);
    }
}
