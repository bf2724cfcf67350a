use anchor_lang::prelude::*;
use crate::{
    constants::{MAX_BPS, MAX_REFERRAL_DEPTH, MAX_TIER},
    error::QuestRewardsError,
    MainState,
    ReferralRatesUpdated
};

// This function sets all four layer rates for one tier in a single call
// Params
//   ctx - Rate update context
//   tier - Tier the rates apply to (1..=5)
//   layer_rates - Referral pool share per layer 1..=4, in basis points
// Return
//   Ok on success, InvalidTier / TaxRateTooHigh on bad inputs
pub fn set_bulk_referral_rate(
    ctx: Context<ASetBulkReferralRate>,
    tier: u8,
    layer_rates: [u64; MAX_REFERRAL_DEPTH]
) -> Result<()> {
    require!(tier >= 1 && tier <= MAX_TIER, QuestRewardsError::InvalidTier);

    // The four layer shares are carved out of one referral pool
    let mut sum: u64 = 0;
    for rate in layer_rates.iter() {
        sum = sum.checked_add(*rate).unwrap();
    }
    require!(sum <= MAX_BPS, QuestRewardsError::TaxRateTooHigh);

    let main_state = &mut ctx.accounts.main_state;
    main_state.referral_rates[tier as usize - 1] = layer_rates;

    emit!(ReferralRatesUpdated { tier, layer_rates });

    Ok(())
}

// Referral rate update context - passed with accounts
#[derive(Accounts)]
pub struct ASetBulkReferralRate<'info> {
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
