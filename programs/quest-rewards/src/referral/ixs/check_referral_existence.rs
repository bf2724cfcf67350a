use anchor_lang::prelude::*;
use crate::{
    constants::MAX_REFERRAL_DEPTH,
    error::QuestRewardsError,
    ReferralAccount
};

// This function verifies that candidate sits at exactly the queried depth on
// the calling account's ancestor chain
// Params
//   ctx - Existence query context
//   depth - Relative depth to check (1..=4)
//   candidate - Expected ancestor's ReferralAccount address
// Return
//   The tier the candidate currently holds; InvalidDepth for a depth outside
//   1..=4, InvalidReferredAddress for the zero identity, InvalidReferrer when
//   the chain is shorter than depth or the candidate is not on it
pub fn check_referral_existence(
    ctx: Context<ACheckReferralExistence>,
    depth: u8,
    candidate: Pubkey
) -> Result<u8> {
    require!(
        depth >= 1 && depth as usize <= MAX_REFERRAL_DEPTH,
        QuestRewardsError::InvalidDepth
    );
    require!(
        candidate.ne(&Pubkey::default()),
        QuestRewardsError::InvalidReferredAddress
    );

    let links = [
        &ctx.accounts.ancestor1,
        &ctx.accounts.ancestor2,
        &ctx.accounts.ancestor3,
        &ctx.accounts.ancestor4
    ];

    // Walk exactly `depth` hops up from the caller
    let mut next = ctx.accounts.referral_account.referred_by;
    for hop in 1..=depth {
        require!(next.ne(&Pubkey::default()), QuestRewardsError::InvalidReferrer);
        let ancestor = match &links[hop as usize - 1] {
            Some(account) => account,
            None => return err!(QuestRewardsError::InvalidReferrer)
        };
        require!(ancestor.key().eq(&next), QuestRewardsError::InvalidReferrer);
        if hop == depth {
            require!(ancestor.key().eq(&candidate), QuestRewardsError::InvalidReferrer);
            return Ok(ancestor.tier);
        }
        next = ancestor.referred_by;
    }

    err!(QuestRewardsError::InvalidReferrer)
}

// Existence query context - passed with accounts
#[derive(Accounts)]
pub struct ACheckReferralExistence<'info> {
    pub user: Signer<'info>, // Querying account owner

    #[account(
        seeds = [ReferralAccount::PREFIX_SEED, user.key().as_ref()],
        bump
    )]
    pub referral_account: Box<Account<'info, ReferralAccount>>, // The walk origin

    pub ancestor1: Option<Box<Account<'info, ReferralAccount>>>, // Depth-1 ancestor
    pub ancestor2: Option<Box<Account<'info, ReferralAccount>>>, // Depth-2 ancestor
    pub ancestor3: Option<Box<Account<'info, ReferralAccount>>>, // Depth-3 ancestor
    pub ancestor4: Option<Box<Account<'info, ReferralAccount>>>  // Depth-4 ancestor
}
