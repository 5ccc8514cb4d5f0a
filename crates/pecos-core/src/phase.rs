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

use num_complex::Complex64;
use std::ops::Mul;

/// A two-valued sign, `+1` or `-1`.
///
/// Most tableau bookkeeping only ever needs this: whether a row currently
/// carries a minus sign. The full four-valued [`QuarterPhase`] (which adds
/// `+i`/`-i`) only shows up where a genuine global phase must be tracked,
/// e.g. a `PauliOperator`'s overall phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Sign {
    #[default]
    Plus,
    Minus,
}

impl Sign {
    #[must_use]
    pub fn flip(self) -> Self {
        match self {
            Sign::Plus => Sign::Minus,
            Sign::Minus => Sign::Plus,
        }
    }

    #[must_use]
    pub fn flip_if(self, condition: bool) -> Self {
        if condition {
            self.flip()
        } else {
            self
        }
    }

    #[must_use]
    pub fn is_negative(self) -> bool {
        matches!(self, Sign::Minus)
    }
}

impl Mul for Sign {
    type Output = Sign;

    fn mul(self, rhs: Sign) -> Sign {
        self.flip_if(rhs.is_negative())
    }
}

impl From<bool> for Sign {
    /// `true` maps to `Minus`, matching the tableau's `signs_minus` bitset
    /// convention (membership means "this generator's sign bit is set").
    fn from(is_minus: bool) -> Self {
        if is_minus {
            Sign::Minus
        } else {
            Sign::Plus
        }
    }
}

/// A quarter-turn global phase: one of `{+1, -1, +i, -i}`.
///
/// Represented internally as a two-bit rotation count so that composition is
/// plain modular addition, matching the `i * i = -1` normalization the
/// measurement and gate kernels rely on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum QuarterPhase {
    #[default]
    PlusOne,
    PlusI,
    MinusOne,
    MinusI,
}

impl QuarterPhase {
    #[must_use]
    fn quarter_turns(self) -> u8 {
        match self {
            QuarterPhase::PlusOne => 0,
            QuarterPhase::PlusI => 1,
            QuarterPhase::MinusOne => 2,
            QuarterPhase::MinusI => 3,
        }
    }

    #[must_use]
    fn from_quarter_turns(turns: u8) -> Self {
        match turns % 4 {
            0 => QuarterPhase::PlusOne,
            1 => QuarterPhase::PlusI,
            2 => QuarterPhase::MinusOne,
            _ => QuarterPhase::MinusI,
        }
    }

    #[must_use]
    pub fn multiply(self, other: Self) -> Self {
        Self::from_quarter_turns(self.quarter_turns() + other.quarter_turns())
    }

    #[must_use]
    pub fn conjugate(self) -> Self {
        Self::from_quarter_turns(4 - self.quarter_turns())
    }

    #[must_use]
    pub fn sign(self) -> Sign {
        match self {
            QuarterPhase::PlusOne | QuarterPhase::PlusI => Sign::Plus,
            QuarterPhase::MinusOne | QuarterPhase::MinusI => Sign::Minus,
        }
    }

    #[must_use]
    pub fn to_complex(self) -> Complex64 {
        match self {
            QuarterPhase::PlusOne => Complex64::new(1.0, 0.0),
            QuarterPhase::PlusI => Complex64::new(0.0, 1.0),
            QuarterPhase::MinusOne => Complex64::new(-1.0, 0.0),
            QuarterPhase::MinusI => Complex64::new(0.0, -1.0),
        }
    }
}

impl Mul for QuarterPhase {
    type Output = QuarterPhase;

    fn mul(self, rhs: QuarterPhase) -> QuarterPhase {
        self.multiply(rhs)
    }
}

impl From<Sign> for QuarterPhase {
    fn from(sign: Sign) -> Self {
        match sign {
            Sign::Plus => QuarterPhase::PlusOne,
            Sign::Minus => QuarterPhase::MinusOne,
        }
    }
}

impl TryFrom<QuarterPhase> for Sign {
    type Error = &'static str;

    fn try_from(phase: QuarterPhase) -> Result<Self, Self::Error> {
        match phase {
            QuarterPhase::PlusOne => Ok(Sign::Plus),
            QuarterPhase::MinusOne => Ok(Sign::Minus),
            QuarterPhase::PlusI | QuarterPhase::MinusI => {
                Err("imaginary phase has no real sign")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_multiplication_is_xor() {
        assert_eq!(Sign::Plus * Sign::Plus, Sign::Plus);
        assert_eq!(Sign::Plus * Sign::Minus, Sign::Minus);
        assert_eq!(Sign::Minus * Sign::Minus, Sign::Plus);
    }

    #[test]
    fn i_times_i_is_minus_one() {
        assert_eq!(QuarterPhase::PlusI.multiply(QuarterPhase::PlusI), QuarterPhase::MinusOne);
    }

    #[test]
    fn conjugate_round_trips() {
        for phase in [
            QuarterPhase::PlusOne,
            QuarterPhase::PlusI,
            QuarterPhase::MinusOne,
            QuarterPhase::MinusI,
        ] {
            assert_eq!(phase.conjugate().conjugate(), phase);
        }
    }
}
