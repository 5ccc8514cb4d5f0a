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

pub mod col_indexed;
pub mod dual_indexed;
pub mod row_indexed;

pub use col_indexed::ColIndexed;
pub use dual_indexed::DualIndexed;
pub use row_indexed::RowIndexed;

/// Identifies one of the `2 * num_qubits` Pauli generators tracked by a
/// tableau: ids `0..num_qubits` are destabilizers, ids `num_qubits..2 *
/// num_qubits` are stabilizers. Generator `i` and `i + num_qubits` are the
/// symplectic pair for qubit `i`.
pub type GeneratorId = usize;

/// Backing storage for a sparse stabilizer tableau.
///
/// A tableau tracks `2 * num_qubits` Pauli generators (destabilizers then
/// stabilizers) over `num_qubits` qubits. Each generator carries an X-bit
/// and a Z-bit per qubit; the sign/phase of each generator is tracked
/// separately by [`SparseStab`](crate::sparse_stab::SparseStab), not here.
///
/// Implementors choose which direction is indexed for fast lookup:
/// [`RowIndexed`](row_indexed::RowIndexed) is fast when gate kernels mostly
/// need "what is on this generator's row", [`ColIndexed`](col_indexed::ColIndexed)
/// is fast when the measurement engine mostly needs "which generators touch
/// this qubit", and [`DualIndexed`](dual_indexed::DualIndexed) keeps both
/// directions in sync for simulators that do a mix of both at scale.
pub trait TableauStorage: Clone + std::fmt::Debug {
    fn new(num_qubits: usize) -> Self;

    fn num_qubits(&self) -> usize;

    fn num_generators(&self) -> usize {
        2 * self.num_qubits()
    }

    /// Resets to the identity tableau: destabilizer `i` is a lone X on qubit
    /// `i`, stabilizer `i` is a lone Z on qubit `i`.
    fn reset(&mut self);

    fn x(&self, gen: GeneratorId, qubit: usize) -> bool;
    fn z(&self, gen: GeneratorId, qubit: usize) -> bool;

    fn set_x(&mut self, gen: GeneratorId, qubit: usize, value: bool);
    fn set_z(&mut self, gen: GeneratorId, qubit: usize, value: bool);

    #[inline]
    fn toggle_x(&mut self, gen: GeneratorId, qubit: usize) {
        let value = self.x(gen, qubit);
        self.set_x(gen, qubit, !value);
    }

    #[inline]
    fn toggle_z(&mut self, gen: GeneratorId, qubit: usize) {
        let value = self.z(gen, qubit);
        self.set_z(gen, qubit, !value);
    }

    /// Qubits where generator `gen` has a non-identity X component (i.e. is
    /// X or Y there).
    fn row_x_support(&self, gen: GeneratorId) -> Vec<usize>;

    /// Qubits where generator `gen` has a non-identity Z component (i.e. is
    /// Z or Y there).
    fn row_z_support(&self, gen: GeneratorId) -> Vec<usize>;

    /// Generators with a non-identity X component at `qubit`.
    fn col_x_support(&self, qubit: usize) -> Vec<GeneratorId>;

    /// Generators with a non-identity Z component at `qubit`.
    fn col_z_support(&self, qubit: usize) -> Vec<GeneratorId>;

    fn swap_qubits(&mut self, q1: usize, q2: usize);
}

#[cfg(test)]
pub(crate) mod conformance {
    //! Shared behavioral tests run against every `TableauStorage` impl so the
    //! three representations can't silently diverge from each other.
    use super::*;

    pub(crate) fn assert_identity_layout<S: TableauStorage>(num_qubits: usize) {
        let storage = S::new(num_qubits);
        for i in 0..num_qubits {
            assert!(storage.x(i, i), "destabilizer {i} should carry X on qubit {i}");
            assert!(!storage.z(i, i));
            let stab = i + num_qubits;
            assert!(storage.z(stab, i), "stabilizer {i} should carry Z on qubit {i}");
            assert!(!storage.x(stab, i));
        }
    }

    pub(crate) fn assert_set_get_roundtrip<S: TableauStorage>() {
        let mut storage = S::new(3);
        storage.set_x(0, 2, true);
        assert!(storage.x(0, 2));
        assert!(storage.col_x_support(2).contains(&0));
        storage.set_x(0, 2, false);
        assert!(!storage.x(0, 2));
        assert!(!storage.col_x_support(2).contains(&0));
    }

    pub(crate) fn assert_swap_qubits<S: TableauStorage>() {
        let mut storage = S::new(2);
        storage.set_x(0, 0, true);
        storage.set_z(3, 1, true);
        storage.swap_qubits(0, 1);
        assert!(storage.x(0, 1));
        assert!(!storage.x(0, 0));
    }
}
