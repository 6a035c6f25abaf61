// SPDX-License-Identifier: MIT

use anchor_lang::prelude::*;
use primitive_types::U256;

use crate::error::ErrorCode;

/**
 * @dev Arithmetic over unsigned 256 bit integers with overflow checks.
 * Every operation errors instead of wrapping.
 */
pub struct Math;

impl Math {
    /**
     * @dev Returns the addition of two unsigned integers of 256 bits, reverting on overflow.
     */
    pub fn add(a: U256, b: U256) -> Result<U256> {
        let c = a.checked_add(b).ok_or(ErrorCode::MathOverflow)?;
        Ok(c)
    }

    /**
     * @dev Returns the subtraction of two unsigned integers of 256 bits, reverting on underflow.
     */
    pub fn sub(a: U256, b: U256) -> Result<U256> {
        require!(b <= a, ErrorCode::MathOverflow);
        Ok(a - b)
    }

    /**
     * @dev Returns the multiplication of two unsigned integers of 256 bits, reverting on overflow.
     */
    pub fn mul(a: U256, b: U256) -> Result<U256> {
        let c = a.checked_mul(b).ok_or(ErrorCode::MathOverflow)?;
        Ok(c)
    }

    /**
     * @dev Narrows a 256 bit value into the u128 used by instruction arguments and return data.
     */
    pub fn to_u128(a: U256) -> Result<u128> {
        require!(a <= U256::from(u128::MAX), ErrorCode::MathOverflow);
        Ok(a.as_u128())
    }
}
