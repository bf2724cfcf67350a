use anchor_lang::prelude::*;
use crate::{
    error::QuestRewardsError,
    utils::transfer_lamports,
    MainState, ReferralAccount,
    RewardsClaimEvent
};

// This function pays out an account's accrued referral rewards
// Params
//   ctx - Claim context
// Return
//   Ok on success, NothingToClaim when no rewards accrued
pub fn claim_rewards(ctx: Context<AClaimRewards>) -> Result<()> {
    let user = ctx.accounts.user.to_account_info();
    let main_state = ctx.accounts.main_state.to_account_info();
    let referral_account = &mut ctx.accounts.referral_account;
    let reward_amount = referral_account.earned_rewards;

    require!(reward_amount > 0, QuestRewardsError::NothingToClaim);

    // Transfer earned_rewards (SOL) from main_state to user
    transfer_lamports(&main_state, &user, reward_amount)?;

    // Reset earned rewards
    referral_account.earned_rewards = 0;

    emit!(RewardsClaimEvent {
        user: user.key(),
        rewards: reward_amount,
        timestamp: Clock::get()?.unix_timestamp
    });

    Ok(())
}

// Claim context - passed with accounts
#[derive(Accounts)]
pub struct AClaimRewards<'info> {
    #[account(mut)]
    pub user: Signer<'info>, // Account owner

    #[account(
        mut,
        seeds = [MainState::PREFIX_SEED],
        bump
    )]
    pub main_state: Box<Account<'info, MainState>>, // MainState account (reward custody)

    #[account(
        mut,
        seeds = [ReferralAccount::PREFIX_SEED, user.key().as_ref()],
        bump
    )]
    pub referral_account: Box<Account<'info, ReferralAccount>> // The claiming node
}
