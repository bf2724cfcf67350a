use anchor_lang::prelude::*;
use anchor_spl::token_interface::TokenAccount;
use crate::{
    error::QuestRewardsError,
    MainState, ReferralAccount, TieredUp
};

// This function advances an account by exactly one tier once the tier-table
// condition for tier + 1 is met. It does NOT propagate the bucket move to the
// ancestors - the account must follow up with update_referral_tree. Keeping
// the increment local makes it checkable from this account's state alone,
// while the upward walk stays a separate, boundable-cost step.
// Params
//   ctx - Tier-up context
// Return
//   Ok on success, UpgradeConditionNotMet when the gate or the tier-table
//   condition fails
pub fn tier_up(ctx: Context<ATierUp>) -> Result<()> {
    let main_state = &ctx.accounts.main_state;
    let account = &mut ctx.accounts.referral_account;

    require!(account.eligible_for_tier_up, QuestRewardsError::UpgradeConditionNotMet);

    let target_tier = account.tier + 1;
    let condition = main_state
        .tier_condition(target_tier)
        .ok_or(QuestRewardsError::UpgradeConditionNotMet)?;

    let xp_balance = ctx.accounts.xp_account.amount;
    require!(
        condition.is_met(xp_balance, &account.tier_counts()),
        QuestRewardsError::UpgradeConditionNotMet
    );

    account.tier = target_tier;

    emit!(TieredUp {
        account: account.key(),
        new_tier: target_tier,
        timestamp: Clock::get()?.unix_timestamp
    });

    Ok(())
}

// Tier-up context - passed with accounts
#[derive(Accounts)]
pub struct ATierUp<'info> {
    #[account(mut)]
    pub user: Signer<'info>, // Account owner

    #[account(
        seeds = [MainState::PREFIX_SEED],
        bump
    )]
    pub main_state: Box<Account<'info, MainState>>, // MainState account (tier table)

    #[account(
        mut,
        seeds = [ReferralAccount::PREFIX_SEED, user.key().as_ref()],
        bump
    )]
    pub referral_account: Box<Account<'info, ReferralAccount>>, // The upgrading node

    #[account(
        constraint = xp_account.mint == main_state.xp_mint @ QuestRewardsError::UnsupportedCurrency,
        constraint = xp_account.owner == user.key() @ QuestRewardsError::Unauthorized
    )]
    pub xp_account: Box<InterfaceAccount<'info, TokenAccount>> // Owner's experience-point balance
}
