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

/// A named Clifford-group operation, for callers that want to dispatch on a
/// gate value (e.g. replaying a recorded `(Gate, qubits)` circuit) rather
/// than call a dedicated method on [`CliffordGateable`](crate::CliffordGateable)
/// directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gate {
    // Paulis
    I,
    X,
    Y,
    Z,

    // Sqrt of Paulis
    SX,
    SXdg,
    SY,
    SYdg,
    SZ,
    SZdg,

    // Hadamards (the six order-2 single-qubit face rotations)
    H,
    H2,
    H3,
    H4,
    H5,
    H6,

    // Face rotations (the eight order-3 single-qubit face rotations)
    F,
    Fdg,
    F2,
    F2dg,
    F3,
    F3dg,
    F4,
    F4dg,

    // Two-qubit Cliffords
    CX,
    CY,
    CZ,
    SWAP,

    // Measurements
    MX,
    MY,
    MZ,

    // Preps
    PX,
    PY,
    PZ,
}
