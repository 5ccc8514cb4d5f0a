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

use std::fmt::Debug;
use std::hash::Hash;

/// An element that can live inside a [`Set`](crate::Set).
///
/// This is deliberately minimal: sets of generator ids, qubit ids, or plain
/// `usize`s all satisfy it.
pub trait Element: Copy + Eq + Ord + Hash + Debug {}

impl<T: Copy + Eq + Ord + Hash + Debug> Element for T {}

/// An element that can be converted to and from a dense `usize` index.
///
/// Qubit ids, generator ids, and raw indices all implement this so that
/// sparse-set backed structures can be generic over "the kind of thing being
/// indexed" while still being able to size dense fallbacks (e.g. a bitmap) by
/// index.
pub trait IndexableElement: Element {
    fn to_index(&self) -> usize;
    fn from_index(value: usize) -> Self;
}

impl IndexableElement for usize {
    #[inline]
    fn to_index(&self) -> usize {
        *self
    }

    #[inline]
    fn from_index(value: usize) -> Self {
        value
    }
}
