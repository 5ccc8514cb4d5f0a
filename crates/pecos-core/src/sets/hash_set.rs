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
use std::collections::HashSet;

/// A `Set` backed by `std::collections::HashSet`.
///
/// This is the workhorse for the tableau's rows and columns: a generator's
/// X-support or a qubit's anticommuting-generator column can hold on the
/// order of the qubit count, so average O(1) insert/remove/contains matters
/// once circuits grow past toy sizes. See `pecos_qsim::tableau` for where
/// this gets plugged in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HashIdSet<E: IndexableElement> {
    items: HashSet<E>,
}

impl<E: IndexableElement> FromIterator<E> for HashIdSet<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self {
            items: HashSet::from_iter(iter),
        }
    }
}

impl<E: IndexableElement> Set for HashIdSet<E> {
    type Element = E;

    #[inline]
    fn insert(&mut self, item: Self::Element) -> bool {
        self.items.insert(item)
    }

    #[inline]
    fn remove(&mut self, item: &Self::Element) -> bool {
        self.items.remove(item)
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

    #[inline]
    fn intersection_count(&self, other: &Self) -> usize {
        self.items.intersection(&other.items).count()
    }
}
