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

use std::fmt;

/// Errors a tableau-backed stabilizer simulator can raise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableauError {
    /// A qubit index was outside `0..num_qubits`.
    InvalidQubit { qubit: usize, num_qubits: usize },
    /// An internal invariant (e.g. symplectic commutation structure) was
    /// found violated. This indicates a bug in the simulator itself, not a
    /// misuse by the caller.
    InternalInvariant(String),
}

impl fmt::Display for TableauError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableauError::InvalidQubit { qubit, num_qubits } => write!(
                f,
                "qubit index {qubit} is out of range for a {num_qubits}-qubit tableau"
            ),
            TableauError::InternalInvariant(msg) => {
                write!(f, "internal tableau invariant violated: {msg}")
            }
        }
    }
}

impl std::error::Error for TableauError {}
