use anchor_lang::prelude::*;
use crate::{
    constants::MAX_TIER,
    error::QuestRewardsError,
    referral::state::{collect_chain, migrate_referral_counts},
    ReferralAccount, ReferralTreeUpdated
};

// This function propagates an account's tier change up the referral tree:
// every ancestor's bucket for old_tier is debited and the bucket for
// new_tier credited at the matching depth, keeping per-ancestor totals
// unchanged. Self-service counterpart of set_tier - a missing old entry
// fails loudly with NoSuchEntry, since it can only mean desynchronized
// sequencing.
// Params
//   ctx - Tree update context
//   old_tier - Tier this account held when last counted
//   new_tier - Tier this account holds now
// Return
//   Ok on success, InvalidTier / NoSuchEntry on failure
pub fn update_referral_tree(
    mut ctx: Context<AUpdateReferralTree>,
    old_tier: u8,
    new_tier: u8
) -> Result<()> {
    require!(old_tier <= MAX_TIER, QuestRewardsError::InvalidTier);
    require!(new_tier <= MAX_TIER, QuestRewardsError::InvalidTier);

    let account_key = ctx.accounts.referral_account.key();
    let start = ctx.accounts.referral_account.referred_by;
    let accounts = &mut ctx.accounts;

    let links = [
        accounts.ancestor1.as_mut(),
        accounts.ancestor2.as_mut(),
        accounts.ancestor3.as_mut(),
        accounts.ancestor4.as_mut()
    ];
    let mut chain = collect_chain(start, links)?;
    let depth_updated = chain.len() as u8;
    migrate_referral_counts(&mut chain, old_tier, new_tier, true)?;

    emit!(ReferralTreeUpdated {
        account: account_key,
        old_tier,
        new_tier,
        depth_updated
    });

    Ok(())
}

// Tree update context - passed with accounts
#[derive(Accounts)]
pub struct AUpdateReferralTree<'info> {
    #[account(mut)]
    pub user: Signer<'info>, // Account owner (self-reporting its own transition)

    #[account(
        seeds = [ReferralAccount::PREFIX_SEED, user.key().as_ref()],
        bump
    )]
    pub referral_account: Box<Account<'info, ReferralAccount>>, // The transitioned node

    #[account(mut)]
    pub ancestor1: Option<Box<Account<'info, ReferralAccount>>>, // Depth-1 ancestor
    #[account(mut)]
    pub ancestor2: Option<Box<Account<'info, ReferralAccount>>>, // Depth-2 ancestor
    #[account(mut)]
    pub ancestor3: Option<Box<Account<'info, ReferralAccount>>>, // Depth-3 ancestor
    #[account(mut)]
    pub ancestor4: Option<Box<Account<'info, ReferralAccount>>>  // Depth-4 ancestor
}
