use anchor_lang::prelude::*;
use crate::{
    constants::MAX_BPS,
    error::QuestRewardsError,
    MainState,
    DisputeDepositRateUpdated
};

// This function sets the dispute deposit rate
// Params
//   ctx - Rate update context
//   dispute_deposit_bp - Deposit rate in basis points of the quest payment
// Return
//   Ok on success, TaxRateTooHigh when the rate exceeds 100%
pub fn set_dispute_deposit_rate(
    ctx: Context<ASetDisputeDepositRate>,
    dispute_deposit_bp: u64
) -> Result<()> {
    require!(dispute_deposit_bp <= MAX_BPS, QuestRewardsError::TaxRateTooHigh);

    let main_state = &mut ctx.accounts.main_state;
    main_state.dispute_deposit_bp = dispute_deposit_bp;

    emit!(DisputeDepositRateUpdated { dispute_deposit_bp });

    Ok(())
}

// Dispute deposit rate update context - passed with accounts
#[derive(Accounts)]
pub struct ASetDisputeDepositRate<'info> {
    #[account()]
    pub owner: Signer<'info>, // Custodian

    #[account(
        mut,
        seeds = [MainState::PREFIX_SEED],
        bump,
        has_one = owner @ QuestRewardsError::Unauthorized
    )]
    pub main_state: Box<Account<'info, MainState>> // MainState account
}
