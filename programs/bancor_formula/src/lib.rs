use anchor_lang::prelude::*;

pub mod instructions;
pub mod error;
pub mod math;

use instructions::*;
declare_id!("HvnEnT4frU7oJ6QBLPv7rBCtkTJA3YQr1v2EWYz9EYje");

#[program]
pub mod bancor_formula {
    use super::*;

    /// 计算 purchase return（存入 reserve，铸造 smart token）
    /// reserve_ratio: 百分比，1..=100；100 表示线性曲线
    pub fn calculate_purchase_return(
        ctx: Context<CalculatePurchaseReturn>,
        supply: u128,
        reserve_balance: u128,
        reserve_ratio: u16,
        deposit_amount: u128,
    ) -> Result<u128> {
        instructions::calculate_purchase_return(ctx, supply, reserve_balance, reserve_ratio, deposit_amount)
    }

    /// 计算 sale return（卖出 smart token，取回 reserve）
    pub fn calculate_sale_return(
        ctx: Context<CalculateSaleReturn>,
        supply: u128,
        reserve_balance: u128,
        reserve_ratio: u16,
        sell_amount: u128,
    ) -> Result<u128> {
        instructions::calculate_sale_return(ctx, supply, reserve_balance, reserve_ratio, sell_amount)
    }
}
