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

/// A tableau storage that keeps row sets (per generator) and column sets
/// (per qubit) both up to date.
///
/// This is the representation the original sparse stabilizer simulator
/// uses throughout: every gate kernel's row rewrites and every
/// measurement's column pivot search are O(1)-average, at the cost of
/// updating two data structures on every bit flip instead of one. It's the
/// right default once both row- and column-shaped queries are common,
/// which is the case for a simulator that both applies gates and measures.
#[derive(Debug, Clone)]
pub struct DualIndexed {
    num_qubits: usize,
    row_x: Vec<HashIdSet<usize>>,
    row_z: Vec<HashIdSet<usize>>,
    col_x: Vec<HashIdSet<GeneratorId>>,
    col_z: Vec<HashIdSet<GeneratorId>>,
}

impl TableauStorage for DualIndexed {
    fn new(num_qubits: usize) -> Self {
        let mut storage = Self {
            num_qubits,
            row_x: vec![HashIdSet::default(); 2 * num_qubits],
            row_z: vec![HashIdSet::default(); 2 * num_qubits],
            col_x: vec![HashIdSet::default(); num_qubits],
            col_z: vec![HashIdSet::default(); num_qubits],
        };
        storage.reset();
        storage
    }

    fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    fn reset(&mut self) {
        for set in &mut self.row_x {
            set.clear();
        }
        for set in &mut self.row_z {
            set.clear();
        }
        for set in &mut self.col_x {
            set.clear();
        }
        for set in &mut self.col_z {
            set.clear();
        }
        for qubit in 0..self.num_qubits {
            self.set_x(qubit, qubit, true);
            self.set_z(qubit + self.num_qubits, qubit, true);
        }
    }

    fn x(&self, gen: GeneratorId, qubit: usize) -> bool {
        self.row_x[gen].contains(&qubit)
    }

    fn z(&self, gen: GeneratorId, qubit: usize) -> bool {
        self.row_z[gen].contains(&qubit)
    }

    fn set_x(&mut self, gen: GeneratorId, qubit: usize, value: bool) {
        if value {
            self.row_x[gen].insert(qubit);
            self.col_x[qubit].insert(gen);
        } else {
            self.row_x[gen].remove(&qubit);
            self.col_x[qubit].remove(&gen);
        }
    }

    fn set_z(&mut self, gen: GeneratorId, qubit: usize, value: bool) {
        if value {
            self.row_z[gen].insert(qubit);
            self.col_z[qubit].insert(gen);
        } else {
            self.row_z[gen].remove(&qubit);
            self.col_z[qubit].remove(&gen);
        }
    }

    fn row_x_support(&self, gen: GeneratorId) -> Vec<usize> {
        self.row_x[gen].iter().copied().collect()
    }

    fn row_z_support(&self, gen: GeneratorId) -> Vec<usize> {
        self.row_z[gen].iter().copied().collect()
    }

    fn col_x_support(&self, qubit: usize) -> Vec<GeneratorId> {
        self.col_x[qubit].iter().copied().collect()
    }

    fn col_z_support(&self, qubit: usize) -> Vec<GeneratorId> {
        self.col_z[qubit].iter().copied().collect()
    }

    fn swap_qubits(&mut self, q1: usize, q2: usize) {
        if q1 == q2 {
            return;
        }
        for gen in 0..self.num_generators() {
            let x1 = self.x(gen, q1);
            let x2 = self.x(gen, q2);
            if x1 != x2 {
                self.set_x(gen, q1, x2);
                self.set_x(gen, q2, x1);
            }
            let z1 = self.z(gen, q1);
            let z2 = self.z(gen, q2);
            if z1 != z2 {
                self.set_z(gen, q1, z2);
                self.set_z(gen, q2, z1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tableau::conformance;

    #[test]
    fn identity_layout() {
        conformance::assert_identity_layout::<DualIndexed>(4);
    }

    #[test]
    fn set_get_roundtrip() {
        conformance::assert_set_get_roundtrip::<DualIndexed>();
    }

    #[test]
    fn swap_qubits() {
        conformance::assert_swap_qubits::<DualIndexed>();
    }

    #[test]
    fn row_and_column_views_stay_consistent() {
        let mut storage = DualIndexed::new(3);
        storage.set_x(0, 2, true);
        storage.set_z(0, 1, true);
        assert!(storage.row_x_support(0).contains(&2));
        assert!(storage.col_x_support(2).contains(&0));
        assert!(storage.col_z_support(1).contains(&0));
    }
}
