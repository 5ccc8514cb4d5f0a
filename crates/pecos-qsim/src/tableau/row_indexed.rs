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
struct Row {
    x: HashIdSet<usize>,
    z: HashIdSet<usize>,
}

/// A tableau storage indexed only by generator row.
///
/// Every gate kernel touches a handful of rows directly, so this is the
/// natural layout when those rows are all the caller ever needs. Column
/// queries ("which generators have X on qubit q") fall back to a linear
/// scan over every row, which is what makes
/// [`DualIndexed`](super::dual_indexed::DualIndexed) worth its bookkeeping
/// once the measurement engine's column lookups dominate.
#[derive(Debug, Clone)]
pub struct RowIndexed {
    num_qubits: usize,
    rows: Vec<Row>,
}

impl TableauStorage for RowIndexed {
    fn new(num_qubits: usize) -> Self {
        let mut storage = Self {
            num_qubits,
            rows: vec![Row::default(); 2 * num_qubits],
        };
        storage.reset();
        storage
    }

    fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    fn reset(&mut self) {
        for row in &mut self.rows {
            row.x.clear();
            row.z.clear();
        }
        for qubit in 0..self.num_qubits {
            self.rows[qubit].x.insert(qubit);
            self.rows[qubit + self.num_qubits].z.insert(qubit);
        }
    }

    fn x(&self, gen: GeneratorId, qubit: usize) -> bool {
        self.rows[gen].x.contains(&qubit)
    }

    fn z(&self, gen: GeneratorId, qubit: usize) -> bool {
        self.rows[gen].z.contains(&qubit)
    }

    fn set_x(&mut self, gen: GeneratorId, qubit: usize, value: bool) {
        if value {
            self.rows[gen].x.insert(qubit);
        } else {
            self.rows[gen].x.remove(&qubit);
        }
    }

    fn set_z(&mut self, gen: GeneratorId, qubit: usize, value: bool) {
        if value {
            self.rows[gen].z.insert(qubit);
        } else {
            self.rows[gen].z.remove(&qubit);
        }
    }

    fn row_x_support(&self, gen: GeneratorId) -> Vec<usize> {
        self.rows[gen].x.iter().copied().collect()
    }

    fn row_z_support(&self, gen: GeneratorId) -> Vec<usize> {
        self.rows[gen].z.iter().copied().collect()
    }

    fn col_x_support(&self, qubit: usize) -> Vec<GeneratorId> {
        (0..self.num_generators())
            .filter(|&gen| self.rows[gen].x.contains(&qubit))
            .collect()
    }

    fn col_z_support(&self, qubit: usize) -> Vec<GeneratorId> {
        (0..self.num_generators())
            .filter(|&gen| self.rows[gen].z.contains(&qubit))
            .collect()
    }

    fn swap_qubits(&mut self, q1: usize, q2: usize) {
        if q1 == q2 {
            return;
        }
        for row in &mut self.rows {
            let x1 = row.x.contains(&q1);
            let x2 = row.x.contains(&q2);
            if x1 != x2 {
                row.x.symmetric_difference_item_update(&q1);
                row.x.symmetric_difference_item_update(&q2);
            }
            let z1 = row.z.contains(&q1);
            let z2 = row.z.contains(&q2);
            if z1 != z2 {
                row.z.symmetric_difference_item_update(&q1);
                row.z.symmetric_difference_item_update(&q2);
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
        conformance::assert_identity_layout::<RowIndexed>(4);
    }

    #[test]
    fn set_get_roundtrip() {
        conformance::assert_set_get_roundtrip::<RowIndexed>();
    }

    #[test]
    fn swap_qubits() {
        conformance::assert_swap_qubits::<RowIndexed>();
    }
}
