use anchor_lang::prelude::*;
use std::panic::Location;

// Copyright 2021 Drift Labs
// Copyright 2025 INSTADAPP LABS INC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

// Portions of this code are derived from Drift Protocol
// Original source: https://github.com/drift-labs/protocol-v2/blob/master/programs/drift/src/math/safe_math.rs

use crate::errors::{ErrorCodes, FluidResult};

pub trait SafeMath: Sized {
    fn safe_add(self, rhs: Self) -> FluidResult<Self>;
    fn safe_sub(self, rhs: Self) -> FluidResult<Self>;
    fn safe_mul(self, rhs: Self) -> FluidResult<Self>;
    fn safe_div(self, rhs: Self) -> FluidResult<Self>;
}

#[track_caller]
#[inline(always)]
fn math_error<T>() -> FluidResult<T> {
    let caller = Location::caller();
    msg!("Math error thrown at {}:{}", caller.file(), caller.line());
    Err(ErrorCodes::LibraryMathError)
}

macro_rules! checked_impl {
    ($t:ty) => {
        impl SafeMath for $t {
            #[track_caller]
            #[inline(always)]
            fn safe_add(self, v: $t) -> FluidResult<$t> {
                match self.checked_add(v) {
                    Some(result) => Ok(result),
                    None => math_error(),
                }
            }

            #[track_caller]
            #[inline(always)]
            fn safe_sub(self, v: $t) -> FluidResult<$t> {
                match self.checked_sub(v) {
                    Some(result) => Ok(result),
                    None => math_error(),
                }
            }

            #[track_caller]
            #[inline(always)]
            fn safe_mul(self, v: $t) -> FluidResult<$t> {
                match self.checked_mul(v) {
                    Some(result) => Ok(result),
                    None => math_error(),
                }
            }

            #[track_caller]
            #[inline(always)]
            fn safe_div(self, v: $t) -> FluidResult<$t> {
                match self.checked_div(v) {
                    Some(result) => Ok(result),
                    None => math_error(),
                }
            }
        }
    };
}

checked_impl!(u128);
checked_impl!(u64);
checked_impl!(u32);
checked_impl!(u16);
checked_impl!(i64);

#[cfg(test)]
mod test {
    use crate::math::safe_math::SafeMath;

    #[test]
    fn safe_add() {
        assert_eq!(1_u64.safe_add(1).unwrap(), 2);
        assert!(1_u64.safe_add(u64::MAX).is_err());
    }

    #[test]
    fn safe_sub() {
        assert_eq!(10_u64.safe_sub(4).unwrap(), 6);
        assert!(0_u64.safe_sub(1).is_err());
    }

    #[test]
    fn safe_mul_and_div() {
        assert_eq!(2_500_u128.safe_mul(10_000).unwrap(), 25_000_000);
        assert!(2_u128.safe_mul(u128::MAX).is_err());

        assert_eq!(25_000_000_u128.safe_div(10_000).unwrap(), 2_500);
        assert!(1_u32.safe_div(0).is_err());
    }
}
