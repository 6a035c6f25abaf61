use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    /// 零 supply / 零 reserve balance / reserve ratio 不在 [1, 100] / sell amount 超过 supply
    #[msg("Invalid conversion argument")]
    InvalidArgument,
    /// ln 的参数小于 1、为零，或者不小于 MAX_VAL
    #[msg("Logarithm argument out of range")]
    LogarithmRange,
    /// fixed_exp 的参数超过多项式上限
    #[msg("Exponent argument out of range")]
    ExponentRange,
    #[msg("Math overflow")]
    MathOverflow,
}
