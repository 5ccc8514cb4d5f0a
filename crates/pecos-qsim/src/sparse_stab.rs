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

use crate::clifford_gateable::{CliffordGateable, MeasurementResult};
use crate::quantum_simulator::QuantumSimulator;
use crate::tableau::{dual_indexed::DualIndexed, GeneratorId, TableauStorage};
use pecos_core::{HashIdSet, Set, TableauError};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Type alias for the common case: dual row/column indexed storage and the
/// default `ChaCha8Rng` randomness source.
#[expect(clippy::module_name_repetitions)]
pub type StdSparseStab = SparseStab<DualIndexed, ChaCha8Rng>;

/// A sparse stabilizer tableau simulator restricted to the Clifford group.
///
/// # Overview
/// Tracks a quantum state of `num_qubits` qubits by its stabilizer group,
/// represented as `2 * num_qubits` Pauli generators: `num_qubits`
/// destabilizers and `num_qubits` stabilizers, stored as sparse per-qubit
/// X/Z bit supports (see [`TableauStorage`]) plus a sign bit per generator.
/// Clifford gates update this tableau in time proportional to the number of
/// non-identity entries touched, never the full `O(n^2)` dense tableau, so
/// circuits with sparse, local structure simulate efficiently even at large
/// qubit counts.
///
/// # Required primitives
/// Only [`CliffordGateable::sz`], [`CliffordGateable::h`],
/// [`CliffordGateable::cx`], and [`CliffordGateable::mz`] are implemented
/// directly here, using the standard tableau update rules. Every other
/// Clifford gate is one of [`CliffordGateable`]'s default compositions of
/// these four; `swap` is overridden to use the storage's native qubit swap
/// instead of three `cx`s.
///
/// # References
/// - Aaronson & Gottesman, "Improved Simulation of Stabilizer Circuits"
///   <https://arxiv.org/abs/quant-ph/0406196>
#[derive(Debug, Clone)]
pub struct SparseStab<S, R> {
    storage: S,
    signs_minus: HashIdSet<GeneratorId>,
    rng: R,
}

impl<S: TableauStorage> SparseStab<S, ChaCha8Rng> {
    /// Creates a new simulator in the all-zero computational basis state,
    /// seeding its randomness from the OS entropy source.
    #[must_use]
    pub fn new(num_qubits: usize) -> Self {
        Self::with_rng(num_qubits, ChaCha8Rng::from_entropy())
    }
}

impl<S: TableauStorage, R> SparseStab<S, R> {
    /// Creates a new simulator with an explicit randomness source. Useful
    /// for deterministic tests with
    /// [`CyclicRng`](pecos_core::CyclicRng).
    pub fn with_rng(num_qubits: usize, rng: R) -> Self {
        Self {
            storage: S::new(num_qubits),
            signs_minus: HashIdSet::default(),
            rng,
        }
    }

    #[must_use]
    pub fn num_qubits(&self) -> usize {
        self.storage.num_qubits()
    }

    fn sign(&self, gen: GeneratorId) -> bool {
        self.signs_minus.contains(&gen)
    }

    fn flip_sign(&mut self, gen: GeneratorId) {
        self.signs_minus.symmetric_difference_item_update(&gen);
    }

    fn flip_sign_if(&mut self, gen: GeneratorId, condition: bool) {
        if condition {
            self.flip_sign(gen);
        }
    }

    fn check_qubit(&self, qubit: usize) -> Result<(), TableauError> {
        if qubit >= self.storage.num_qubits() {
            Err(TableauError::InvalidQubit {
                qubit,
                num_qubits: self.storage.num_qubits(),
            })
        } else {
            Ok(())
        }
    }

    /// Applies the Hadamard update rule to every one of the `2n` generators:
    /// `sign ^= x & z`, then swap the X and Z bits.
    fn apply_h(&mut self, qubit: usize) {
        for gen in 0..self.storage.num_generators() {
            let x = self.storage.x(gen, qubit);
            let z = self.storage.z(gen, qubit);
            self.flip_sign_if(gen, x && z);
            self.storage.set_x(gen, qubit, z);
            self.storage.set_z(gen, qubit, x);
        }
    }

    /// Applies the S-gate (`sz`) update rule: `sign ^= x & z`, then `z ^= x`.
    fn apply_sz(&mut self, qubit: usize) {
        for gen in 0..self.storage.num_generators() {
            let x = self.storage.x(gen, qubit);
            let z = self.storage.z(gen, qubit);
            self.flip_sign_if(gen, x && z);
            self.storage.toggle_z(gen, qubit);
        }
    }

    /// Applies the CNOT update rule with control `c`, target `t`:
    /// `sign ^= x_c & z_t & (x_t ^ z_c ^ 1)`, then `x_t ^= x_c`, `z_c ^= z_t`.
    fn apply_cx(&mut self, control: usize, target: usize) {
        for gen in 0..self.storage.num_generators() {
            let x_c = self.storage.x(gen, control);
            let z_c = self.storage.z(gen, control);
            let x_t = self.storage.x(gen, target);
            let z_t = self.storage.z(gen, target);

            let flips = x_c && z_t && (x_t ^ z_c ^ true);
            self.flip_sign_if(gen, flips);

            self.storage.set_x(gen, target, x_t ^ x_c);
            self.storage.set_z(gen, control, z_c ^ z_t);
        }
    }

    /// Multiplies generator row `target` by generator row `source` in
    /// place, including the sign: the classic CHP `rowsum` primitive.
    ///
    /// `g` below computes, for a single qubit, the power of `i` contributed
    /// by multiplying the Pauli at `source` onto the Pauli at `target`.
    fn rowsum(&mut self, target: GeneratorId, source: GeneratorId) -> Result<(), TableauError> {
        #[inline]
        fn g(x1: bool, z1: bool, x2: bool, z2: bool) -> i32 {
            match (x1, z1) {
                (false, false) => 0,
                (true, true) => i32::from(z2) - i32::from(x2),
                (true, false) => {
                    if z2 {
                        2 * i32::from(x2) - 1
                    } else {
                        0
                    }
                }
                (false, true) => {
                    if x2 {
                        1 - 2 * i32::from(z2)
                    } else {
                        0
                    }
                }
            }
        }

        let mut exponent = 2 * i32::from(self.sign(target)) + 2 * i32::from(self.sign(source));
        for qubit in 0..self.storage.num_qubits() {
            exponent += g(
                self.storage.x(source, qubit),
                self.storage.z(source, qubit),
                self.storage.x(target, qubit),
                self.storage.z(target, qubit),
            );
        }
        let residue = exponent.rem_euclid(4);
        if residue != 0 && residue != 2 {
            return Err(TableauError::InternalInvariant(format!(
                "rowsum(target={target}, source={source}) produced phase exponent {exponent} \
                 (residue {residue} mod 4); expected 0 or 2 — tableau symplectic structure is corrupted"
            )));
        }

        let new_sign = residue == 2;
        if new_sign != self.sign(target) {
            self.flip_sign(target);
        }

        for qubit in 0..self.storage.num_qubits() {
            if self.storage.x(source, qubit) {
                self.storage.toggle_x(target, qubit);
            }
            if self.storage.z(source, qubit) {
                self.storage.toggle_z(target, qubit);
            }
        }
        Ok(())
    }

    /// The deterministic path of a Z-basis measurement: no stabilizer
    /// anticommutes with `Z_q`, so the eigenvalue is read off by
    /// multiplying, into a scratch accumulator starting at the identity,
    /// every stabilizer generator whose paired destabilizer has an X-bit on
    /// `q`. The scratch row never aliases a real generator id, so it is
    /// tracked locally rather than through [`TableauStorage`].
    fn deterministic_measure(&mut self, qubit: usize) -> Result<bool, TableauError> {
        #[inline]
        fn g(x1: bool, z1: bool, x2: bool, z2: bool) -> i32 {
            match (x1, z1) {
                (false, false) => 0,
                (true, true) => i32::from(z2) - i32::from(x2),
                (true, false) => {
                    if z2 {
                        2 * i32::from(x2) - 1
                    } else {
                        0
                    }
                }
                (false, true) => {
                    if x2 {
                        1 - 2 * i32::from(z2)
                    } else {
                        0
                    }
                }
            }
        }

        let n = self.storage.num_qubits();
        let mut scratch_x: HashIdSet<usize> = HashIdSet::default();
        let mut scratch_z: HashIdSet<usize> = HashIdSet::default();
        let mut scratch_sign = false;

        for destab in 0..n {
            if !self.storage.x(destab, qubit) {
                continue;
            }
            let stab = destab + n;
            let mut exponent = 2 * i32::from(scratch_sign) + 2 * i32::from(self.sign(stab));
            for qb in 0..n {
                exponent += g(
                    self.storage.x(stab, qb),
                    self.storage.z(stab, qb),
                    scratch_x.contains(&qb),
                    scratch_z.contains(&qb),
                );
            }
            let residue = exponent.rem_euclid(4);
            if residue != 0 && residue != 2 {
                return Err(TableauError::InternalInvariant(format!(
                    "deterministic sign reconstruction on qubit {qubit} produced phase exponent \
                     {exponent} (residue {residue} mod 4) while folding in stabilizer {stab}; \
                     expected 0 or 2"
                )));
            }
            scratch_sign = residue == 2;

            for qb in 0..n {
                if self.storage.x(stab, qb) {
                    scratch_x.symmetric_difference_item_update(&qb);
                }
                if self.storage.z(stab, qb) {
                    scratch_z.symmetric_difference_item_update(&qb);
                }
            }
        }

        Ok(scratch_sign)
    }

    /// The non-deterministic path: pick a stabilizer that anticommutes with
    /// `Z_q`, clear every other generator's dependence on it, demote it to
    /// a destabilizer, and install a fresh `±Z_q` stabilizer with a
    /// randomly (or forcibly) chosen sign.
    fn nondeterministic_measure(
        &mut self,
        qubit: usize,
        forced_outcome: Option<bool>,
    ) -> Result<bool, TableauError>
    where
        R: pecos_core::SimRng,
    {
        let n = self.storage.num_qubits();
        let pivot = (n..2 * n)
            .find(|&gen| self.storage.x(gen, qubit))
            .expect("nondeterministic_measure requires an anticommuting stabilizer");

        for gen in 0..2 * n {
            if gen != pivot && self.storage.x(gen, qubit) {
                self.rowsum(gen, pivot)?;
            }
        }

        let destab_partner = pivot - n;
        self.copy_row(destab_partner, pivot);

        self.clear_row(pivot);
        self.storage.set_z(pivot, qubit, true);

        // `clear_row` above zeroed the pivot's sign, so a `true` outcome is
        // the only case that needs a flip.
        let outcome = forced_outcome.unwrap_or_else(|| self.rng_bool());
        if outcome {
            self.flip_sign(pivot);
        }

        Ok(outcome)
    }

    fn copy_row(&mut self, dst: GeneratorId, src: GeneratorId) {
        self.clear_row(dst);
        for qubit in 0..self.storage.num_qubits() {
            if self.storage.x(src, qubit) {
                self.storage.set_x(dst, qubit, true);
            }
            if self.storage.z(src, qubit) {
                self.storage.set_z(dst, qubit, true);
            }
        }
        // `clear_row` already zeroed dst's sign, so only a true src sign
        // needs to flip it.
        if self.sign(src) {
            self.flip_sign(dst);
        }
    }

    fn clear_row(&mut self, gen: GeneratorId) {
        for qubit in 0..self.storage.num_qubits() {
            self.storage.set_x(gen, qubit, false);
            self.storage.set_z(gen, qubit, false);
        }
        if self.sign(gen) {
            self.flip_sign(gen);
        }
    }

    fn rng_bool(&mut self) -> bool
    where
        R: pecos_core::SimRng,
    {
        self.rng.next_bool()
    }

    /// Performs a Z-basis measurement, optionally forcing the outcome.
    ///
    /// Equivalent to [`measure_z_collapse`](Self::measure_z_collapse) with
    /// `collapse = true`: the only mode the [`CliffordGateable`] trait's
    /// `mz` exposes.
    ///
    /// # Errors
    /// Returns [`TableauError::InvalidQubit`] if `qubit` is out of range, or
    /// [`TableauError::InternalInvariant`] if the tableau's sign-tracking
    /// invariant is found violated while reading off a deterministic
    /// outcome or rewriting the tableau for a non-deterministic one.
    pub fn measure_z(
        &mut self,
        qubit: usize,
        forced_outcome: Option<bool>,
    ) -> Result<MeasurementResult, TableauError>
    where
        R: pecos_core::SimRng,
    {
        self.measure_z_collapse(qubit, forced_outcome, true)
    }

    /// Performs a Z-basis measurement, optionally forcing the outcome and
    /// optionally skipping the tableau rewrite on a random outcome.
    ///
    /// When the pre-measurement state is deterministic, the measured
    /// observable is already a stabilizer and reading it never mutates the
    /// tableau, so `collapse` makes no difference. When the outcome is
    /// random and `collapse = false`, the forced-or-sampled bit is returned
    /// without retiring a stabilizer generator, leaving the tableau as a
    /// superposition over both outcomes — callers that pass `collapse =
    /// false` take on the responsibility of not relying on the
    /// post-measurement state being an eigenstate of `Z_q`.
    ///
    /// `forced_outcome` overrides sampling on the non-deterministic path.
    /// On the deterministic path it is ignored entirely: the returned
    /// outcome is always the tableau's true, pre-existing eigenvalue, even
    /// when a caller forces the opposite bit. Forcing an outcome that
    /// disagrees with a deterministic state is accepted, not an error — it
    /// simply has no effect, since there is nothing left to collapse.
    ///
    /// # Errors
    /// Returns [`TableauError::InvalidQubit`] if `qubit` is out of range, or
    /// [`TableauError::InternalInvariant`] if the tableau's sign-tracking
    /// invariant is found violated while reading off a deterministic
    /// outcome or rewriting the tableau for a non-deterministic one.
    pub fn measure_z_collapse(
        &mut self,
        qubit: usize,
        forced_outcome: Option<bool>,
        collapse: bool,
    ) -> Result<MeasurementResult, TableauError>
    where
        R: pecos_core::SimRng,
    {
        self.check_qubit(qubit)?;

        let n = self.storage.num_qubits();
        let anticommuting_stabilizer = (n..2 * n).any(|gen| self.storage.x(gen, qubit));

        if anticommuting_stabilizer {
            let outcome = if collapse {
                self.nondeterministic_measure(qubit, forced_outcome)?
            } else {
                forced_outcome.unwrap_or_else(|| self.rng_bool())
            };
            Ok(MeasurementResult {
                outcome,
                is_deterministic: false,
            })
        } else {
            let outcome = self.deterministic_measure(qubit)?;
            Ok(MeasurementResult {
                outcome,
                is_deterministic: true,
            })
        }
    }
}

impl<S: TableauStorage, R> QuantumSimulator for SparseStab<S, R> {
    fn reset(&mut self) -> &mut Self {
        self.storage.reset();
        self.signs_minus.clear();
        self
    }
}

impl<S: TableauStorage, R: pecos_core::SimRng> CliffordGateable<usize> for SparseStab<S, R> {
    #[inline]
    fn sz(&mut self, q: usize) -> &mut Self {
        self.apply_sz(q);
        self
    }

    #[inline]
    fn h(&mut self, q: usize) -> &mut Self {
        self.apply_h(q);
        self
    }

    #[inline]
    fn cx(&mut self, q1: usize, q2: usize) -> &mut Self {
        self.apply_cx(q1, q2);
        self
    }

    #[inline]
    fn swap(&mut self, q1: usize, q2: usize) -> &mut Self {
        self.storage.swap_qubits(q1, q2);
        self
    }

    #[inline]
    fn mz(&mut self, q: usize) -> MeasurementResult {
        log::trace!("measuring qubit {q} in the Z basis");
        self.measure_z(q, None)
            .unwrap_or_else(|err| panic!("mz called with invalid qubit: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tableau::dual_indexed::DualIndexed;
    use pecos_core::{CyclicRng, CyclicSeed};
    use rand::SeedableRng;

    fn fresh(num_qubits: usize) -> SparseStab<DualIndexed, CyclicRng> {
        SparseStab::with_rng(num_qubits, CyclicRng::from_seed(CyclicSeed::default()))
    }

    #[test]
    fn fresh_qubit_measures_zero_deterministically() {
        let mut sim = fresh(1);
        let result = sim.mz(0);
        assert!(!result.outcome);
        assert!(result.is_deterministic);
    }

    #[test]
    fn x_then_measure_is_deterministic_one() {
        let mut sim = fresh(1);
        sim.x(0);
        let result = sim.mz(0);
        assert!(result.outcome);
        assert!(result.is_deterministic);
    }

    #[test]
    fn hadamard_then_measure_is_nondeterministic() {
        let mut sim = fresh(1);
        sim.h(0);
        let result = sim.mz(0);
        assert!(!result.is_deterministic);
    }

    #[test]
    fn bell_pair_measurements_are_correlated() {
        let mut sim = fresh(2);
        sim.h(0).cx(0, 1);
        let first = sim.mz(0);
        let second = sim.mz(1);
        assert!(!first.is_deterministic);
        assert!(second.is_deterministic);
        assert_eq!(first.outcome, second.outcome);
    }

    #[test]
    fn forced_outcome_on_hadamard_state_is_honored() {
        let mut sim = fresh(1);
        sim.h(0);
        let result = sim.measure_z(0, Some(true)).unwrap();
        assert!(result.outcome);
        assert!(!result.is_deterministic);
    }

    #[test]
    fn non_collapsing_measurement_leaves_superposition_intact() {
        let mut sim = fresh(1);
        sim.h(0);
        let first = sim.measure_z_collapse(0, Some(true), false).unwrap();
        assert!(first.outcome);
        assert!(!first.is_deterministic);
        // collapse was skipped, so the qubit is still in superposition and a
        // second non-collapsing read can come out either way.
        let second = sim.mz(0);
        assert!(!second.is_deterministic);
    }

    #[test]
    fn forced_outcome_incompatible_with_deterministic_state_is_ignored() {
        let mut sim = fresh(1);
        // Qubit 0 is deterministically 0; forcing the opposite outcome is
        // accepted rather than rejected, and has no effect on a state with
        // no stabilizer left to collapse.
        let result = sim.measure_z(0, Some(true)).unwrap();
        assert!(result.is_deterministic);
        assert!(!result.outcome);
    }

    #[test]
    fn out_of_range_qubit_errors() {
        let mut sim = fresh(1);
        let err = sim.measure_z(5, None).unwrap_err();
        assert!(matches!(err, TableauError::InvalidQubit { qubit: 5, .. }));
    }

    #[test]
    fn double_hadamard_is_identity() {
        let mut sim = fresh(1);
        sim.h(0).h(0);
        let result = sim.mz(0);
        assert!(!result.outcome);
        assert!(result.is_deterministic);
    }

    #[test]
    fn s_gate_four_times_is_identity() {
        let mut sim = fresh(1);
        sim.h(0);
        sim.sz(0).sz(0).sz(0).sz(0);
        let after = sim.mz(0);
        let mut reference = fresh(1);
        reference.h(0);
        let expected = reference.mz(0);
        assert_eq!(after.outcome, expected.outcome);
    }

    #[test]
    fn reset_returns_to_computational_zero() {
        let mut sim = fresh(2);
        sim.x(0).h(1);
        sim.reset();
        assert!(!sim.mz(0).outcome);
        assert!(sim.mz(1).is_deterministic);
    }
}
