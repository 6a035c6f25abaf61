use anchor_lang::prelude::*;
use primitive_types::U256;
use crate::math::{BancorFormula, Math};

/// 只读计算，不需要任何账户
#[derive(Accounts)]
pub struct CalculateSaleReturn {}

/// 计算卖出 sell_amount 个 smart token 可以取回多少 reserve token
/// sell_amount 不能超过 supply；全部卖出时返回全部 reserve_balance
pub fn calculate_sale_return(
    _ctx: Context<CalculateSaleReturn>,
    supply: u128,
    reserve_balance: u128,
    reserve_ratio: u16,
    sell_amount: u128,
) -> Result<u128> {
    let released = BancorFormula::calculate_sale_return(
        U256::from(supply),
        U256::from(reserve_balance),
        reserve_ratio,
        U256::from(sell_amount),
    )?;
    // released <= reserve_balance, so this never fails in practice
    let released = Math::to_u128(released)?;

    msg!(
        "Sale return: supply: {}, reserve_balance: {}, reserve_ratio: {}, sell_amount: {}, released: {}",
        supply, reserve_balance, reserve_ratio, sell_amount, released
    );
    Ok(released)
}
