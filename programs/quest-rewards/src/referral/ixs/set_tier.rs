use anchor_lang::prelude::*;
use crate::{
    constants::MAX_TIER,
    error::QuestRewardsError,
    referral::state::{collect_chain, migrate_referral_counts},
    MainState, ReferralAccount, TierOverridden
};

// This function overrides an account's tier, bypassing the self-service
// eligibility checks, and performs the same ancestor bucket migration as
// update_referral_tree - but leniently: ancestors with no entry for the old
// tier are skipped instead of failing, so administrative correction works
// against partial or missing history.
// Params
//   ctx - Tier override context
//   new_tier - Tier to set (0..=5, arbitrary jumps allowed)
// Return
//   Ok on success, InvalidTier for a tier above 5
pub fn set_tier(mut ctx: Context<ASetTier>, new_tier: u8) -> Result<()> {
    require!(new_tier <= MAX_TIER, QuestRewardsError::InvalidTier);

    let account_key = ctx.accounts.referral_account.key();
    let old_tier = ctx.accounts.referral_account.tier;
    let start = ctx.accounts.referral_account.referred_by;
    let accounts = &mut ctx.accounts;

    let links = [
        accounts.ancestor1.as_mut(),
        accounts.ancestor2.as_mut(),
        accounts.ancestor3.as_mut(),
        accounts.ancestor4.as_mut()
    ];
    let mut chain = collect_chain(start, links)?;
    migrate_referral_counts(&mut chain, old_tier, new_tier, false)?;

    accounts.referral_account.tier = new_tier;

    emit!(TierOverridden {
        account: account_key,
        old_tier,
        new_tier
    });

    Ok(())
}

// Tier override context - passed with accounts
#[derive(Accounts)]
pub struct ASetTier<'info> {
    #[account(mut)]
    pub master: Signer<'info>, // Master role

    #[account(
        seeds = [MainState::PREFIX_SEED],
        bump,
        constraint = main_state.master == master.key() @ QuestRewardsError::Unauthorized
    )]
    pub main_state: Box<Account<'info, MainState>>, // MainState account (role check)

    #[account(mut)]
    pub referral_account: Box<Account<'info, ReferralAccount>>, // The overridden node

    #[account(mut)]
    pub ancestor1: Option<Box<Account<'info, ReferralAccount>>>, // Depth-1 ancestor
    #[account(mut)]
    pub ancestor2: Option<Box<Account<'info, ReferralAccount>>>, // Depth-2 ancestor
    #[account(mut)]
    pub ancestor3: Option<Box<Account<'info, ReferralAccount>>>, // Depth-3 ancestor
    #[account(mut)]
    pub ancestor4: Option<Box<Account<'info, ReferralAccount>>>  // Depth-4 ancestor
}
