use anchor_lang::prelude::*;
use crate::{
    error::QuestRewardsError,
    MainState, ReferralAccount, TierUpEligibilityUpdated
};

// This function sets the tier-up eligibility gate on an account
// Params
//   ctx - Eligibility update context
//   eligible - New gate value
// Return
//   Ok on success, Unauthorized for a non-master caller
pub fn set_tier_up_eligibility(
    ctx: Context<ASetTierUpEligibility>,
    eligible: bool
) -> Result<()> {
    let account = &mut ctx.accounts.referral_account;
    account.eligible_for_tier_up = eligible;

    emit!(TierUpEligibilityUpdated {
        account: account.key(),
        eligible
    });

    Ok(())
}

// Eligibility update context - passed with accounts
#[derive(Accounts)]
pub struct ASetTierUpEligibility<'info> {
    #[account(mut)]
    pub master: Signer<'info>, // Master role

    #[account(
        seeds = [MainState::PREFIX_SEED],
        bump,
        constraint = main_state.master == master.key() @ QuestRewardsError::Unauthorized
    )]
    pub main_state: Box<Account<'info, MainState>>, // MainState account (role check)

    #[account(mut)]
    pub referral_account: Box<Account<'info, ReferralAccount>> // The gated node
}
