use anchor_lang::prelude::*;

use crate::state::*;
use library::math::casting::*;

fn current_timestamp() -> Result<u64> {
    Ok(Clock::get()?.unix_timestamp.cast()?)
}

pub fn update_gho_borrow_rate(
    context: Context<UpdateGhoBorrowRate>,
    new_rate_data: InterestRateData,
) -> Result<()> {
    let now = current_timestamp()?;
    let risk_council = context.accounts.risk_council.key();
    let pool = context.accounts.get_pool_accounts();

    context
        .accounts
        .gho_steward
        .update_gho_borrow_rate(&pool, &risk_council, now, new_rate_data)
}

pub fn update_gho_borrow_cap(context: Context<UpdateGhoCaps>, new_borrow_cap: u64) -> Result<()> {
    let now = current_timestamp()?;
    let risk_council = context.accounts.risk_council.key();
    let pool = context.accounts.get_pool_accounts();

    context
        .accounts
        .gho_steward
        .update_gho_borrow_cap(&pool, &risk_council, now, new_borrow_cap)
}

pub fn update_gho_supply_cap(context: Context<UpdateGhoCaps>, new_supply_cap: u64) -> Result<()> {
    let now = current_timestamp()?;
    let risk_council = context.accounts.risk_council.key();
    let pool = context.accounts.get_pool_accounts();

    context
        .accounts
        .gho_steward
        .update_gho_supply_cap(&pool, &risk_council, now, new_supply_cap)
}
