// SPDX-License-Identifier: MIT

use anchor_lang::prelude::*;
use primitive_types::U256;

use crate::error::ErrorCode;
use super::fixedpoint::FixedPoint;
use super::math::Math;

/**
 * @dev Logarithm, exponentiation and rational power for 32 bit binary fixed point numbers.
 *
 * Powers with rational exponents are implemented by conversion to natural exponentiation and logarithm:
 * (baseN / baseD) ^ (expN / expD) = exp(ln(baseN / baseD) * expN / expD).
 *
 * Only non-negative logarithms are supported, i.e. bases must be at least one. Every stage validates its own
 * input range and reverts instead of wrapping.
 */
pub struct LogExpMath;

// ln(2) scaled by 2^56.
pub const LN2_MANTISSA: U256 = U256([0x00b17217f7d1cf78, 0, 0, 0]);
pub const LN2_SHIFT: usize = 56;

// Largest argument of fixed_exp for which the degree 34 expansion is still evaluated correctly.
// MAX_EXP_INPUT = 0x386bfdba29 = 242_329_958_953 (about 56.42 in fixed point)
pub const MAX_EXP_INPUT: U256 = U256([0x386bfdba29, 0, 0, 0]);

pub const EXP_DEGREE: usize = 34;

// Coefficients of the Maclaurin expansion of e^x brought to the common denominator 34!:
// EXP_COEFFICIENTS[k] = 34! / k!, so that sum(x^k * 34!/k!) / 34! = sum(x^k / k!).
// Every entry is exact.
pub static EXP_COEFFICIENTS: [U256; EXP_DEGREE + 1] = [
    U256([0x445da75b00000000, 0xde1bc4d19efcac82, 0, 0]), // 34!/0!
    U256([0x445da75b00000000, 0xde1bc4d19efcac82, 0, 0]), // 34!/1!
    U256([0x222ed3ad80000000, 0x6f0de268cf7e5641, 0, 0]), // 34!/2!
    U256([0xb60f9be480000000, 0x2504a0cd9a7f7215, 0, 0]), // 34!/3!
    U256([0x6d83e6f920000000, 0x09412833669fdc85, 0, 0]), // 34!/4!
    U256([0xe2b3fafea0000000, 0x01d9d4d714865f4d, 0, 0]), // 34!/5!
    U256([0xfb1dff2a70000000, 0x004ef8ce836bba8c, 0, 0]), // 34!/6!
    U256([0x6d04490610000000, 0x000b481d807d1aa6, 0, 0]), // 34!/7!
    U256([0xcda08920c2000000, 0x00016903b00fa354, 0, 0]), // 34!/8!
    U256([0x334ab9e732000000, 0x0000281cdaac677b, 0, 0]), // 34!/9!
    U256([0xeb8778fd85000000, 0x00000402e2aad725, 0, 0]), // 34!/10!
    U256([0xfe2396a2af000000, 0x0000005d5a6c9f31, 0, 0]), // 34!/11!
    U256([0x2a82f73839400000, 0x00000007c7890d44, 0, 0]), // 34!/12!
    U256([0x034526b58e400000, 0x000000009931ed54, 0, 0]), // 34!/13!
    U256([0x24ce150cf7e00000, 0x000000000af147cf, 0, 0]), // 34!/14!
    U256([0x46b867cdaa200000, 0x0000000000bac085, 0, 0]), // 34!/15!
    U256([0x546b867cdaa20000, 0x00000000000bac08, 0, 0]), // 34!/16!
    U256([0x41338061b2820000, 0x000000000000afc4, 0, 0]), // 34!/17!
    U256([0xcabbc0056d790000, 0x00000000000009c3, 0, 0]), // 34!/18!
    U256([0x9168328705c30000, 0x0000000000000083, 0, 0]), // 34!/19!
    U256([0x94120286c049c000, 0x0000000000000006, 0, 0]), // 34!/20!
    U256([0x50319e98b3d2c000, 0, 0, 0]), // 34!/21!
    U256([0x03a52a1e36b82000, 0, 0, 0]), // 34!/22!
    U256([0x00289286e0fce000, 0, 0, 0]), // 34!/23!
    U256([0x0001b0c59eb53400, 0, 0, 0]), // 34!/24!
    U256([0x0000114f95b55400, 0, 0, 0]), // 34!/25!
    U256([0x000000aa7210d200, 0, 0, 0]), // 34!/26!
    U256([0x0000000650139600, 0, 0, 0]), // 34!/27!
    U256([0x0000000039b78e80, 0, 0, 0]), // 34!/28!
    U256([0x0000000001fd8080, 0, 0, 0]), // 34!/29!
    U256([0x000000000010fbc0, 0, 0, 0]), // 34!/30!
    U256([0x0000000000008c40, 0, 0, 0]), // 34!/31!
    U256([0x0000000000000462, 0, 0, 0]), // 34!/32!
    U256([0x0000000000000022, 0, 0, 0]), // 34!/33!
    U256([0x0000000000000001, 0, 0, 0]), // 34!/34!
];

// EXP_DENOMINATOR = 34! = 295232799039604140847618609643520000000
pub const EXP_DENOMINATOR: U256 = U256([0x445da75b00000000, 0xde1bc4d19efcac82, 0, 0]);

impl LogExpMath {
    /**
     * @dev (baseN / baseD) ^ (expN / expD), returned as a fixed point number.
     *
     * Reverts if baseN < baseD, if either base is zero or not below MAX_VAL, or if ln(base) * expN / expD exceeds
     * MAX_EXP_INPUT.
     */
    pub fn power(base_n: U256, base_d: U256, exp_n: u32, exp_d: u32) -> Result<U256> {
        require!(exp_d != 0, ErrorCode::InvalidArgument);

        let log_base = Self::ln(base_n, base_d)?;
        // Plain division: the precision lost here is inherent to the approximation, both ln and fixed_exp are
        // overflow checked on their own.
        let exponent = Math::mul(log_base, U256::from(exp_n))? / U256::from(exp_d);
        Self::fixed_exp(exponent)
    }

    /**
     * @dev Natural logarithm of numerator / denominator, returned as a fixed point number.
     *
     * Reverts if the ratio is below one, if either operand is zero, or if either operand is not below MAX_VAL (the
     * upscaling by ONE would overflow).
     */
    pub fn ln(numerator: U256, denominator: U256) -> Result<U256> {
        // Ratios below one have negative logarithms, which are not representable.
        require!(denominator <= numerator, ErrorCode::LogarithmRange);
        require!(!denominator.is_zero() && !numerator.is_zero(), ErrorCode::LogarithmRange);
        require!(numerator < FixedPoint::MAX_VAL, ErrorCode::LogarithmRange);
        require!(denominator < FixedPoint::MAX_VAL, ErrorCode::LogarithmRange);

        Self::fixed_loge(FixedPoint::div_down(numerator, denominator)?)
    }

    /**
     * @dev Natural logarithm of a fixed point number not below ONE: log2(x) * ln(2).
     */
    pub fn fixed_loge(x: U256) -> Result<U256> {
        let log2 = Self::fixed_log2(x)?;
        Ok(Math::mul(log2, LN2_MANTISSA)? >> LN2_SHIFT)
    }

    /**
     * @dev Binary logarithm of a fixed point number not below ONE, rounding down.
     *
     * The integer part is the number of halvings that bring x into [ONE, TWO). Each fractional bit, most significant
     * first, is then read off by squaring x: if the square reaches TWO the bit is set and x is halved again.
     *
     * The result lies in [0, 0xdfffffffff] and never exceeds the true value.
     */
    pub fn fixed_log2(x: U256) -> Result<U256> {
        require!(x >= FixedPoint::ONE, ErrorCode::LogarithmRange);

        let mut x = x;
        let mut hi = U256::zero();
        while x >= FixedPoint::TWO {
            x = x >> 1u32;
            hi = hi + FixedPoint::ONE;
        }

        // x < TWO from here on, so x * x fits easily.
        for i in 0..FixedPoint::PRECISION {
            x = FixedPoint::mul_down(x, x)?;
            if x >= FixedPoint::TWO {
                x = x >> 1u32;
                hi = hi + (U256::one() << (FixedPoint::PRECISION - 1 - i));
            }
        }

        Ok(hi)
    }

    /**
     * @dev e^x for a fixed point x not above MAX_EXP_INPUT.
     */
    pub fn fixed_exp(x: U256) -> Result<U256> {
        require!(x <= MAX_EXP_INPUT, ErrorCode::ExponentRange);
        Self::fixed_exp_unsafe(x)
    }

    /**
     * @dev e^x through the Maclaurin series truncated at degree 34, without the input bound.
     *
     * res = sum(xi_k * 34!/k!) where xi_k = x^k in fixed point (xi_0 = ONE, xi_k+1 = xi_k * x / ONE), and the result
     * is res / 34!. All partial sums are exact integers so the only rounding, besides the per-step truncation of
     * xi, is the final division.
     *
     * Past MAX_EXP_INPUT this still reverts on overflow rather than returning a wrapped value, but the bound is
     * what fixed_exp guarantees.
     */
    pub fn fixed_exp_unsafe(x: U256) -> Result<U256> {
        let mut xi = FixedPoint::ONE;
        let mut res = Math::mul(EXP_COEFFICIENTS[0], xi)?;

        for coefficient in EXP_COEFFICIENTS.iter().skip(1) {
            xi = FixedPoint::mul_down(xi, x)?;
            res = Math::add(res, Math::mul(xi, *coefficient)?)?;
        }

        Ok(res / EXP_DENOMINATOR)
    }
}
