use anchor_lang::prelude::*;
use crate::{constants::TIER_BUCKETS, ReferralAccount};

// This function reads an account's referral counts summed into the five tier
// buckets, for callers that consume them off-chain (the tier-table check at
// tier-up reads the same numbers in-program)
// Params
//   ctx - Tier count query context
// Return
//   Referral counts per tier bucket 1..=5, as instruction return data
pub fn get_tier_counts(ctx: Context<AGetTierCounts>) -> Result<[u64; TIER_BUCKETS]> {
    Ok(ctx.accounts.referral_account.tier_counts())
}

// Tier count query context - passed with accounts
#[derive(Accounts)]
pub struct AGetTierCounts<'info> {
    pub referral_account: Box<Account<'info, ReferralAccount>> // The queried node
}
