use anchor_lang::prelude::*;
use primitive_types::U256;
use crate::math::{BancorFormula, Math};

/// 只读计算，不需要任何账户
#[derive(Accounts)]
pub struct CalculatePurchaseReturn {}

/// 计算存入 deposit_amount 个 reserve token 可以铸造多少 smart token
/// 结果通过 return data 返回
pub fn calculate_purchase_return(
    _ctx: Context<CalculatePurchaseReturn>,
    supply: u128,
    reserve_balance: u128,
    reserve_ratio: u16,
    deposit_amount: u128,
) -> Result<u128> {
    let minted = BancorFormula::calculate_purchase_return(
        U256::from(supply),
        U256::from(reserve_balance),
        reserve_ratio,
        U256::from(deposit_amount),
    )?;
    let minted = Math::to_u128(minted)?;

    msg!(
        "Purchase return: supply: {}, reserve_balance: {}, reserve_ratio: {}, deposit_amount: {}, minted: {}",
        supply, reserve_balance, reserve_ratio, deposit_amount, minted
    );
    Ok(minted)
}
