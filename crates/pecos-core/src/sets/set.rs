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

use crate::IndexableElement;
use std::fmt::Debug;

/// A set of integer-like ids with average O(1) insert/remove/contains.
///
/// This is the building block for every sparse row and column in the
/// tableau: a stabilizer's X-support, a qubit's column of anticommuting
/// generators, and a `PauliSparse`'s positions are all a `Set`. Ordered
/// iteration is never required, only membership and set algebra.
///
/// The trait is deliberately small. Implementors are free to back it with a
/// hash set, a sorted vector, a tree, or (for small fixed qubit counts) a
/// bitmap; [`VecSet`](super::vec_set::VecSet) and
/// [`HashIdSet`](super::hash_set::HashIdSet) are the two provided here.
pub trait Set: Default + Clone + Debug + PartialEq + Eq {
    type Element: IndexableElement;

    #[must_use]
    fn new() -> Self {
        Self::default()
    }

    /// Inserts `item`, returning `true` if it was not already present.
    fn insert(&mut self, item: Self::Element) -> bool;

    /// Removes `item`, returning `true` if it was present.
    fn remove(&mut self, item: &Self::Element) -> bool;

    fn contains(&self, item: &Self::Element) -> bool;

    fn clear(&mut self);

    fn len(&self) -> usize;

    #[must_use]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates the members. No particular order is guaranteed.
    fn iter(&self) -> Box<dyn Iterator<Item = &Self::Element> + '_>;

    /// Number of elements that both sets have in common.
    ///
    /// Used to decide phase corrections when multiplying Pauli rows: the
    /// parity of an intersection size is what determines a sign flip.
    #[must_use]
    fn intersection_count(&self, other: &Self) -> usize {
        self.iter().filter(|item| other.contains(item)).count()
    }

    #[must_use]
    fn union_count(&self, other: &Self) -> usize {
        self.len() + other.len() - self.intersection_count(other)
    }

    /// Returns the symmetric difference (XOR) of the two sets as a new set.
    ///
    /// This is exactly the set-algebra behind multiplying two Pauli rows
    /// together: a qubit ends up in the product's support iff it was in
    /// exactly one of the two operands.
    #[must_use]
    fn symmetric_difference(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.symmetric_difference_update(other);
        result
    }

    /// In-place version of [`Set::symmetric_difference`].
    fn symmetric_difference_update(&mut self, other: &Self) {
        for item in other.iter().copied().collect::<Vec<_>>() {
            self.symmetric_difference_item_update(&item);
        }
    }

    /// Toggles membership of a single item: inserts it if absent, removes it
    /// if present. This is the primitive every gate kernel's Pauli rewrite
    /// bottoms out in ("XOR this qubit into the row").
    fn symmetric_difference_item_update(&mut self, item: &Self::Element) {
        if self.contains(item) {
            self.remove(item);
        } else {
            self.insert(*item);
        }
    }
}
