// SPDX-License-Identifier: MIT

use anchor_lang::prelude::*;
use primitive_types::{U256, U512};
use static_assertions::{const_assert, const_assert_eq};

use crate::error::ErrorCode;
use super::math::Math;

/**
 * @dev Binary fixed point numbers with 32 fractional bits held in a 256 bit register.
 *
 * A value `v` represents the real number `v / 2^32`. `MAX_VAL` is the largest plain operand that can still be
 * upscaled by `ONE` without leaving the register.
 */
pub struct FixedPoint;

impl FixedPoint {
    pub const PRECISION: usize = 32; // fractional bits

    pub const ONE: U256 = U256([0x1_0000_0000, 0, 0, 0]); // 2^32
    pub const TWO: U256 = U256([0x2_0000_0000, 0, 0, 0]); // 2^33
    pub const MAX_VAL: U256 = U256([0, 0, 0, 0x1_0000_0000]); // 2^(256 - PRECISION)

    /**
     * @dev Fixed point multiplication rounding down: floor(a * b / ONE).
     *
     * The product is formed in 512 bits so the only failure is a result that does not fit back into 256 bits.
     */
    pub fn mul_down(a: U256, b: U256) -> Result<U256> {
        let product: U512 = a.full_mul(b) >> Self::PRECISION;
        let result = U256::try_from(product).map_err(|_| ErrorCode::MathOverflow)?;
        Ok(result)
    }

    /**
     * @dev Fixed point division rounding down: floor(a * ONE / b). Reverts if `a * ONE` overflows.
     */
    pub fn div_down(a: U256, b: U256) -> Result<U256> {
        require!(!b.is_zero(), ErrorCode::MathOverflow);

        let a_inflated = Math::mul(a, Self::ONE)?;
        Ok(a_inflated / b)
    }
}

const_assert_eq!(FixedPoint::PRECISION, 32);
const_assert_eq!(1u64 << FixedPoint::PRECISION, 0x1_0000_0000);
const_assert_eq!(2u64 << FixedPoint::PRECISION, 0x2_0000_0000);
// MAX_VAL sits PRECISION bits below the top of the register, i.e. bit 32 of the highest limb.
const_assert!(192 + FixedPoint::PRECISION == 256 - FixedPoint::PRECISION);
