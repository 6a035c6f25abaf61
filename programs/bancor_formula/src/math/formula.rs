// SPDX-License-Identifier: MIT

use anchor_lang::prelude::*;
use primitive_types::U256;

use crate::error::ErrorCode;
use super::fixedpoint::FixedPoint;
use super::logexpmath::LogExpMath;
use super::math::Math;

// A reserve ratio of 100% is a linear curve.
pub const MAX_RESERVE_RATIO: u16 = 100;

/**
 * @dev Continuous token conversion between a smart token and its reserve.
 *
 * The reserve ratio (1..=100, in percent) fixes how much of the token's market cap the reserve backs. Below 100 the
 * conversions follow the curve supply ~ balance ^ ratio, evaluated with LogExpMath::power.
 */
pub struct BancorFormula;

impl BancorFormula {
    /**
     * @dev Tokens minted for `deposit_amount` of reserve:
     *
     * return = supply * ((1 + deposit_amount / reserve_balance) ^ (reserve_ratio / 100) - 1)
     */
    pub fn calculate_purchase_return(
        supply: U256,
        reserve_balance: U256,
        reserve_ratio: u16,
        deposit_amount: U256,
    ) -> Result<U256> {
        Self::validate(supply, reserve_balance, reserve_ratio)?;

        if deposit_amount.is_zero() {
            return Ok(U256::zero());
        }

        let base_n = Math::add(deposit_amount, reserve_balance)?;
        if reserve_ratio == MAX_RESERVE_RATIO {
            let temp = Math::mul(supply, base_n)? / reserve_balance;
            return Math::sub(temp, supply);
        }

        let res_n = LogExpMath::power(base_n, reserve_balance, u32::from(reserve_ratio), u32::from(MAX_RESERVE_RATIO))?;
        let temp = Math::mul(supply, res_n)? / FixedPoint::ONE;
        Math::sub(temp, supply)
    }

    /**
     * @dev Reserve released for selling `sell_amount` tokens:
     *
     * return = reserve_balance * (1 - (1 - sell_amount / supply) ^ (100 / reserve_ratio))
     *
     * computed as reserve_balance * (resN - ONE) / resN with resN = (supply / (supply - sell_amount)) ^ (100 / ratio),
     * which keeps the power base above one.
     */
    pub fn calculate_sale_return(
        supply: U256,
        reserve_balance: U256,
        reserve_ratio: u16,
        sell_amount: U256,
    ) -> Result<U256> {
        Self::validate(supply, reserve_balance, reserve_ratio)?;
        require!(sell_amount <= supply, ErrorCode::InvalidArgument);

        if sell_amount.is_zero() {
            return Ok(U256::zero());
        }

        let base_d = Math::sub(supply, sell_amount)?;
        if reserve_ratio == MAX_RESERVE_RATIO {
            let temp1 = Math::mul(reserve_balance, supply)?;
            let temp2 = Math::mul(reserve_balance, base_d)?;
            return Ok(Math::sub(temp1, temp2)? / supply);
        }

        // Selling the whole supply drains the reserve; the curve would need 0 as a power base.
        if sell_amount == supply {
            return Ok(reserve_balance);
        }

        let res_n = LogExpMath::power(supply, base_d, u32::from(MAX_RESERVE_RATIO), u32::from(reserve_ratio))?;
        let temp1 = Math::mul(reserve_balance, res_n)?;
        let temp2 = Math::mul(reserve_balance, FixedPoint::ONE)?;
        Ok(Math::sub(temp1, temp2)? / res_n)
    }

    fn validate(supply: U256, reserve_balance: U256, reserve_ratio: u16) -> Result<()> {
        require!(!supply.is_zero(), ErrorCode::InvalidArgument);
        require!(!reserve_balance.is_zero(), ErrorCode::InvalidArgument);
        require!(
            reserve_ratio > 0 && reserve_ratio <= MAX_RESERVE_RATIO,
            ErrorCode::InvalidArgument
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;

    fn error_code(err: Error) -> u32 {
        match err {
            Error::AnchorError(e) => e.error_code_number,
            Error::ProgramError(e) => panic!("unexpected program error: {:?}", e),
        }
    }

    fn u(n: u128) -> U256 {
        U256::from(n)
    }

    const WAD: u128 = 1_000_000_000_000_000_000;

    #[test]
    fn test_zero_amount() {
        for ratio in [1u16, 10, 50, 99, 100] {
            assert_eq!(BancorFormula::calculate_purchase_return(u(100), u(100), ratio, U256::zero()).unwrap(), U256::zero());
            assert_eq!(BancorFormula::calculate_sale_return(u(100), u(100), ratio, U256::zero()).unwrap(), U256::zero());
        }
    }

    #[test]
    fn test_purchase_square_root_curve() {
        // 1000 * (sqrt(2) - 1) = 414.21...
        let result = BancorFormula::calculate_purchase_return(u(1000), u(1000), 50, u(1000)).unwrap();
        assert_eq!(result, u(414));
    }

    #[test]
    fn test_purchase_pinned() {
        assert_eq!(BancorFormula::calculate_purchase_return(u(1_000_000), u(1_000_000), 10, u(100_000)).unwrap(), u(9_576));
        assert_eq!(BancorFormula::calculate_purchase_return(u(1000), u(250), 20, u(100)).unwrap(), u(69));
        assert_eq!(
            BancorFormula::calculate_purchase_return(u(WAD), u(WAD), 50, u(WAD / 10)).unwrap(),
            u(48_808_847_554_028_034)
        );
    }

    #[test]
    fn test_sale_pinned() {
        assert_eq!(BancorFormula::calculate_sale_return(u(1000), u(1000), 50, u(500)).unwrap(), u(749));
        assert_eq!(BancorFormula::calculate_sale_return(u(1_000_000), u(1_000_000), 10, u(100_000)).unwrap(), u(651_321));
        assert_eq!(
            BancorFormula::calculate_sale_return(u(WAD), u(WAD), 50, u(WAD / 10)).unwrap(),
            u(189_999_999_466_282_315)
        );
    }

    #[test]
    fn test_linear_curve() {
        // supply * (deposit + balance) / balance - supply
        assert_eq!(BancorFormula::calculate_purchase_return(u(1000), u(1000), 100, u(1000)).unwrap(), u(1000));
        assert_eq!(BancorFormula::calculate_purchase_return(u(300), u(7), 100, u(2)).unwrap(), u(300 * 9 / 7 - 300));
        // (balance * supply - balance * (supply - sell)) / supply
        assert_eq!(BancorFormula::calculate_sale_return(u(100), u(100), 100, u(37)).unwrap(), u(37));
        assert_eq!(
            BancorFormula::calculate_sale_return(u(300), u(7), 100, u(100)).unwrap(),
            u((7 * 300 - 7 * 200) / 300)
        );
    }

    #[test]
    fn test_sell_entire_supply() {
        for ratio in 1..=MAX_RESERVE_RATIO {
            assert_eq!(BancorFormula::calculate_sale_return(u(1000), u(777), ratio, u(1000)).unwrap(), u(777));
        }
    }

    #[test]
    fn test_round_trip_does_not_profit() {
        for ratio in [10u16, 50, 90] {
            let (supply, balance, deposit) = (u(WAD), u(WAD), u(WAD / 100));
            let minted = BancorFormula::calculate_purchase_return(supply, balance, ratio, deposit).unwrap();
            let returned = BancorFormula::calculate_sale_return(supply + minted, balance + deposit, ratio, minted).unwrap();
            assert!(returned <= deposit, "ratio {}: {} > {}", ratio, returned, deposit);
            // rounding keeps the loss tiny
            assert!(deposit - returned < deposit / u(100_000));
        }
    }

    #[test]
    fn test_purchase_monotonic() {
        for ratio in [1u16, 10, 33, 50, 90, 99] {
            let mut prev = U256::zero();
            for amount in (0..5000u128).step_by(37) {
                let result = BancorFormula::calculate_purchase_return(u(1_000_000), u(100_000), ratio, u(amount)).unwrap();
                assert!(result >= prev);
                prev = result;
            }
        }
    }

    #[test]
    fn test_sale_monotonic() {
        for ratio in [33u16, 50, 90, 99] {
            let mut prev = U256::zero();
            for amount in (0..1_000_000u128).step_by(9973) {
                let result = BancorFormula::calculate_sale_return(u(1_000_000), u(100_000), ratio, u(amount)).unwrap();
                assert!(result >= prev);
                prev = result;
            }
        }
    }

    #[test]
    fn test_sale_outside_numeric_range() {
        // (10 / 1) ^ 100 needs an exponent well above the exp ceiling
        let err = BancorFormula::calculate_sale_return(u(1_000_000), u(100_000), 1, u(900_000)).unwrap_err();
        assert_eq!(error_code(err), u32::from(ErrorCode::ExponentRange));
    }

    #[test]
    fn test_sell_more_than_supply() {
        let err = BancorFormula::calculate_sale_return(u(100), u(100), 50, u(101)).unwrap_err();
        assert_eq!(error_code(err), u32::from(ErrorCode::InvalidArgument));
    }

    #[test]
    fn test_invalid_arguments() {
        let invalid = [
            (U256::zero(), u(100), 50u16),
            (u(100), U256::zero(), 50),
            (u(100), u(100), 0),
            (u(100), u(100), 101),
        ];
        for (supply, balance, ratio) in invalid {
            let err = BancorFormula::calculate_purchase_return(supply, balance, ratio, u(10)).unwrap_err();
            assert_eq!(error_code(err), u32::from(ErrorCode::InvalidArgument));
            let err = BancorFormula::calculate_sale_return(supply, balance, ratio, u(10)).unwrap_err();
            assert_eq!(error_code(err), u32::from(ErrorCode::InvalidArgument));
        }
    }

    #[test]
    #[should_panic]
    fn test_purchase_overflow() {
        let _ = BancorFormula::calculate_purchase_return(U256::MAX, u(1), 100, u(1)).unwrap();
    }
}
