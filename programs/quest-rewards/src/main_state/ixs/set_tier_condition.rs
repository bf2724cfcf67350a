use anchor_lang::prelude::*;
use crate::{
    constants::{MAX_TIER, TIER_BUCKETS},
    error::QuestRewardsError,
    MainState, TierCondition,
    TierConditionUpdated
};

// This function writes one tier-table row
// Params
//   ctx - Tier table update context
//   tier - Target tier the row gates (1..=5)
//   xp_threshold - Minimum experience-point balance
//   min_referrals - Minimum referral count per tier bucket 1..=5
// Return
//   Ok on success, InvalidTier for a tier outside 1..=5
pub fn set_tier_condition(
    ctx: Context<ASetTierCondition>,
    tier: u8,
    xp_threshold: u64,
    min_referrals: [u64; TIER_BUCKETS]
) -> Result<()> {
    require!(tier >= 1 && tier <= MAX_TIER, QuestRewardsError::InvalidTier);

    let main_state = &mut ctx.accounts.main_state;
    main_state.tier_conditions[tier as usize - 1] = TierCondition {
        xp_threshold,
        min_referrals
    };

    emit!(TierConditionUpdated { tier, xp_threshold, min_referrals });

    Ok(())
}

// Tier table update context - passed with accounts
#[derive(Accounts)]
pub struct ASetTierCondition<'info> {
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
