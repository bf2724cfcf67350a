use anchor_lang::prelude::*;
use crate::{
    error::QuestRewardsError,
    MainState, SeekerFees,
    SeekerFeesUpdated
};

// This function sets the seeker-side tax rates
// Params
//   ctx - Fee update context
//   referral_bp - Referral-chain share in basis points
//   platform_bp - Platform revenue share in basis points
// Return
//   Ok on success, TaxRateTooHigh when the sum exceeds 100%
pub fn set_seeker_fees(
    ctx: Context<ASetSeekerFees>,
    referral_bp: u64,
    platform_bp: u64
) -> Result<()> {
    let fees = SeekerFees { referral_bp, platform_bp };
    fees.validate()?;

    let main_state = &mut ctx.accounts.main_state;
    main_state.seeker_fees = fees;

    emit!(SeekerFeesUpdated { fees });

    Ok(())
}

// Seeker fee update context - passed with accounts
#[derive(Accounts)]
pub struct ASetSeekerFees<'info> {
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
