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

use super::{GeneratorId, TableauStorage};
use pecos_core::{HashIdSet, Set};

#[derive(Debug, Clone, Default)]
struct Column {
    x: HashIdSet<GeneratorId>,
    z: HashIdSet<GeneratorId>,
}

/// A tableau storage indexed only by qubit column.
///
/// The measurement engine's pivot search ("which stabilizers anticommute
/// with Z on this qubit") is a column query, so this layout serves it
/// directly. Row queries (what a single generator's full support is) fall
/// back to scanning every column.
#[derive(Debug, Clone)]
pub struct ColIndexed {
    num_qubits: usize,
    columns: Vec<Column>,
}

impl TableauStorage for ColIndexed {
    fn new(num_qubits: usize) -> Self {
        let mut storage = Self {
            num_qubits,
            columns: vec![Column::default(); num_qubits],
        };
        storage.reset();
        storage
    }

    fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    fn reset(&mut self) {
        for column in &mut self.columns {
            column.x.clear();
            column.z.clear();
        }
        for qubit in 0..self.num_qubits {
            self.columns[qubit].x.insert(qubit);
            self.columns[qubit].z.insert(qubit + self.num_qubits);
        }
    }

    fn x(&self, gen: GeneratorId, qubit: usize) -> bool {
        self.columns[qubit].x.contains(&gen)
    }

    fn z(&self, gen: GeneratorId, qubit: usize) -> bool {
        self.columns[qubit].z.contains(&gen)
    }

    fn set_x(&mut self, gen: GeneratorId, qubit: usize, value: bool) {
        if value {
            self.columns[qubit].x.insert(gen);
        } else {
            self.columns[qubit].x.remove(&gen);
        }
    }

    fn set_z(&mut self, gen: GeneratorId, qubit: usize, value: bool) {
        if value {
            self.columns[qubit].z.insert(gen);
        } else {
            self.columns[qubit].z.remove(&gen);
        }
    }

    fn row_x_support(&self, gen: GeneratorId) -> Vec<usize> {
        (0..self.num_qubits)
            .filter(|&qubit| self.columns[qubit].x.contains(&gen))
            .collect()
    }

    fn row_z_support(&self, gen: GeneratorId) -> Vec<usize> {
        (0..self.num_qubits)
            .filter(|&qubit| self.columns[qubit].z.contains(&gen))
            .collect()
    }

    fn col_x_support(&self, qubit: usize) -> Vec<GeneratorId> {
        self.columns[qubit].x.iter().copied().collect()
    }

    fn col_z_support(&self, qubit: usize) -> Vec<GeneratorId> {
        self.columns[qubit].z.iter().copied().collect()
    }

    fn swap_qubits(&mut self, q1: usize, q2: usize) {
        if q1 == q2 {
            return;
        }
        self.columns.swap(q1, q2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tableau::conformance;

    #[test]
    fn identity_layout() {
        conformance::assert_identity_layout::<ColIndexed>(4);
    }

    #[test]
    fn set_get_roundtrip() {
        conformance::assert_set_get_roundtrip::<ColIndexed>();
    }

    #[test]
    fn swap_qubits() {
        conformance::assert_swap_qubits::<ColIndexed>();
    }
}
