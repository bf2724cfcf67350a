use anchor_lang::prelude::*;
use crate::{
    error::QuestRewardsError,
    main_state::state::{
        TREASURY_DISPUTE_FEES, TREASURY_PLATFORM, TREASURY_REFERRAL_TAX, TREASURY_REVENUE_POOL
    },
    MainState,
    TreasuryUpdated
};

// This function re-points one of the four treasury addresses
// Params
//   ctx - Treasury update context
//   kind - Treasury selector (TREASURY_* constant)
//   treasury - New treasury address
// Return
//   Ok on success, ZeroAddress / InvalidTreasuryKind on bad inputs
pub fn set_treasury(
    ctx: Context<ASetTreasury>,
    kind: u8,
    treasury: Pubkey
) -> Result<()> {
    require!(treasury.ne(&Pubkey::default()), QuestRewardsError::ZeroAddress);

    let main_state = &mut ctx.accounts.main_state;
    match kind {
        TREASURY_PLATFORM => main_state.platform_treasury = treasury,
        TREASURY_REVENUE_POOL => main_state.platform_revenue_pool = treasury,
        TREASURY_REFERRAL_TAX => main_state.referral_tax_treasury = treasury,
        TREASURY_DISPUTE_FEES => main_state.dispute_fees_treasury = treasury,
        _ => return Err(QuestRewardsError::InvalidTreasuryKind.into())
    }

    emit!(TreasuryUpdated { kind, treasury });

    Ok(())
}

// Treasury update context - passed with accounts
#[derive(Accounts)]
pub struct ASetTreasury<'info> {
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
