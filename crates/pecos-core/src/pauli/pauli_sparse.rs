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

use crate::{IndexableElement, Pauli, PauliOperator, QuarterPhase, Set};

/// Represents a Pauli operator with positions for X and Z components.
///
/// The `PauliSparse` struct uses a generic [`Set`] (`x_positions` and
/// `z_positions`) to track qubit positions affected by the X and Z
/// components of the operator.
///
/// - Positions in `x_positions` are affected by the X operator.
/// - Positions in `z_positions` are affected by the Z operator.
/// - Positions in both are affected by the Y operator.
#[allow(clippy::module_name_repetitions)]
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct PauliSparse<T: Set> {
    phase: QuarterPhase,
    x_positions: T,
    z_positions: T,
}

impl<E, T> PauliSparse<T>
where
    T: Set<Element = E> + FromIterator<E>,
    E: IndexableElement,
{
    /// Initializes a new empty Pauli operator, which is equivalent to the identity.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a `PauliSparse` instance with the specified phase and qubit positions for X, Y, and Z operators.
    ///
    /// - `x`: Positions affected by the X operator.
    /// - `y`: Positions affected by both X and Z operators.
    /// - `z`: Positions affected by the Z operator.
    ///
    /// # Errors
    /// Returns an `Err` if any qubit appears in both `x` and `z`: a single
    /// qubit cannot simultaneously carry a bare X and a bare Z component in
    /// the same operator (that combination is Y, passed via `y` instead).
    ///
    /// # Examples
    /// ```
    /// use pecos_core::{PauliSparse, QuarterPhase, VecSet};
    ///
    /// let phase = QuarterPhase::PlusOne;
    /// let x = [1, 2];
    /// let y = [3];
    /// let z = [4];
    ///
    /// let pauli: PauliSparse<VecSet<usize>> = PauliSparse::with_operators(phase, &x, &y, &z).unwrap();
    /// ```
    pub fn with_operators(phase: QuarterPhase, x: &[E], y: &[E], z: &[E]) -> Result<Self, String> {
        let mut x_set: T = x.iter().copied().collect();
        let mut z_set: T = z.iter().copied().collect();

        if x_set.intersection_count(&z_set) > 0 {
            return Err("x and z share common elements".to_string());
        }

        for &elem in y {
            x_set.insert(elem);
            z_set.insert(elem);
        }

        Ok(Self {
            phase,
            x_positions: x_set,
            z_positions: z_set,
        })
    }
}

impl<E, T> PauliOperator for PauliSparse<T>
where
    T: Set<Element = E> + FromIterator<E>,
    E: IndexableElement,
{
    fn phase(&self) -> QuarterPhase {
        self.phase
    }

    fn x_positions(&self) -> Vec<usize> {
        self.x_positions.iter().map(E::to_index).collect()
    }

    fn z_positions(&self) -> Vec<usize> {
        self.z_positions.iter().map(E::to_index).collect()
    }

    /// Multiplies two `PauliSparse` operators and returns the result.
    #[inline]
    #[must_use]
    fn multiply(&self, other: &Self) -> Self {
        let mut phase = self.phase.multiply(other.phase);

        // x on self, z on other overlapping contributes -i per crossing; the
        // symmetric case contributes +i. Odd overlap counts flip the phase.
        let x_self_z_other = self.x_positions.intersection_count(&other.z_positions);
        let z_self_x_other = self.z_positions.intersection_count(&other.x_positions);

        if x_self_z_other % 2 == 1 {
            phase = phase.multiply(QuarterPhase::MinusI);
        }
        if z_self_x_other % 2 == 1 {
            phase = phase.multiply(QuarterPhase::PlusI);
        }

        Self {
            phase,
            x_positions: self.x_positions.symmetric_difference(&other.x_positions),
            z_positions: self.z_positions.symmetric_difference(&other.z_positions),
        }
    }

    /// The total number of unique positions affected by the X and Z components.
    #[inline]
    fn weight(&self) -> usize {
        self.x_positions.union_count(&self.z_positions)
    }

    /// `true` if the operators commute, `false` if they anti-commute.
    #[inline]
    fn commutes_with(&self, other: &Self) -> bool {
        let x_and_z = self.x_positions.intersection_count(&other.z_positions);
        let z_and_x = self.z_positions.intersection_count(&other.x_positions);

        (x_and_z + z_and_x) % 2 == 0
    }

    /// Creates a `PauliSparse` operator with a single qubit in the specified state.
    fn from_single(qubit: usize, pauli: Pauli) -> Self {
        let mut x_positions = T::default();
        let mut z_positions = T::default();

        match pauli {
            Pauli::X => {
                x_positions.insert(E::from_index(qubit));
            }
            Pauli::Z => {
                z_positions.insert(E::from_index(qubit));
            }
            Pauli::Y => {
                x_positions.insert(E::from_index(qubit));
                z_positions.insert(E::from_index(qubit));
            }
            Pauli::I => {}
        }

        Self {
            phase: QuarterPhase::PlusOne,
            x_positions,
            z_positions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::VecSet;
    use std::fmt::Debug;

    fn assert_sets_equal<E: Copy + Debug + PartialEq + Ord, T: Set<Element = E>>(
        left: &T,
        right: &T,
    ) {
        let mut left_elements: Vec<E> = left.iter().copied().collect();
        let mut right_elements: Vec<E> = right.iter().copied().collect();
        left_elements.sort();
        right_elements.sort();
        assert_eq!(left_elements, right_elements);
    }

    #[test]
    fn test_valid_pauli_creation() {
        let pauli =
            PauliSparse::with_operators(QuarterPhase::PlusOne, &[1usize, 2], &[3usize], &[4usize])
                .unwrap();

        assert_eq!(pauli.phase, QuarterPhase::PlusOne);
        assert_sets_equal(&pauli.x_positions, &VecSet::from_iter([1usize, 2, 3]));
        assert_sets_equal(&pauli.z_positions, &VecSet::from_iter([3usize, 4]));
    }

    #[test]
    fn test_overlap_in_x_and_z() {
        let result = PauliSparse::<VecSet<usize>>::with_operators(
            QuarterPhase::MinusOne,
            &[1usize, 2],
            &[3usize],
            &[2usize, 4],
        );
        assert!(result.is_err());
        assert_eq!(result.unwrap_err(), "x and z share common elements");
    }

    #[test]
    fn test_y_addition_to_x_and_z() {
        let pauli =
            PauliSparse::with_operators(QuarterPhase::PlusOne, &[1usize], &[2usize], &[3usize])
                .unwrap();
        assert_sets_equal(&pauli.x_positions, &VecSet::from_iter([1usize, 2]));
        assert_sets_equal(&pauli.z_positions, &VecSet::from_iter([2usize, 3]));
    }

    #[test]
    fn test_empty_inputs() {
        let pauli = PauliSparse::<VecSet<usize>>::new();
        assert_eq!(pauli.phase, QuarterPhase::PlusOne);
        assert!(pauli.x_positions.is_empty());
        assert!(pauli.z_positions.is_empty());
    }

    #[test]
    fn test_partial_inputs() {
        let pauli = PauliSparse::<VecSet<usize>>::with_operators(
            QuarterPhase::MinusOne,
            &[1usize, 2],
            &[],
            &[],
        )
        .unwrap();
        assert_eq!(pauli.phase, QuarterPhase::MinusOne);
        assert_sets_equal(&pauli.x_positions, &VecSet::from_iter([1usize, 2]));
        assert!(pauli.z_positions.is_empty());
    }

    #[test]
    fn test_pauli_sparse_anticommutes() {
        let p1 = PauliSparse::<VecSet<usize>>::with_operators(
            QuarterPhase::PlusOne,
            &[0, 1],
            &[],
            &[2],
        )
        .unwrap();
        let p2 =
            PauliSparse::<VecSet<usize>>::with_operators(QuarterPhase::PlusOne, &[1], &[], &[0])
                .unwrap();
        assert!(!p1.commutes_with(&p2));
    }
}
