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

use crate::sets::set::Set;
use crate::IndexableElement;

/// A `Set` backed by an unsorted `Vec`.
///
/// Good for the small, usually-sparse supports that show up in
/// [`PauliSparse`](crate::PauliSparse) and `PauliString` (a handful of
/// non-identity qubits per operator). Insert/contains/remove are O(len), but
/// `len` rarely exceeds single digits for realistic Pauli operators, so the
/// constant-factor simplicity wins over a hash set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VecSet<E: IndexableElement> {
    items: Vec<E>,
}

impl<E: IndexableElement> FromIterator<E> for VecSet<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut set = Self::default();
        for item in iter {
            set.insert(item);
        }
        set
    }
}

impl<E: IndexableElement> Set for VecSet<E> {
    type Element = E;

    #[inline]
    fn insert(&mut self, item: Self::Element) -> bool {
        if self.contains(&item) {
            false
        } else {
            self.items.push(item);
            true
        }
    }

    #[inline]
    fn remove(&mut self, item: &Self::Element) -> bool {
        if let Some(pos) = self.items.iter().position(|existing| existing == item) {
            self.items.swap_remove(pos);
            true
        } else {
            false
        }
    }

    #[inline]
    fn contains(&self, item: &Self::Element) -> bool {
        self.items.contains(item)
    }

    #[inline]
    fn clear(&mut self) {
        self.items.clear();
    }

    #[inline]
    fn len(&self) -> usize {
        self.items.len()
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &Self::Element> + '_> {
        Box::new(self.items.iter())
    }
}
