use anchor_lang::prelude::*;
use crate::{
    constants::{
        DEF_DISPUTE_DEPOSIT_BP, DEF_REFERRAL_RATES, DEF_SEEKER_PLATFORM_BP,
        DEF_SEEKER_REFERRAL_BP, DEF_SOLVER_PLATFORM_BP, DEF_SOLVER_REFERRAL_BP,
        DEF_SOLVER_TREASURY_BP, DEF_TIER_MIN_REFERRALS, DEF_TIER_XP_THRESHOLDS, TIER_BUCKETS
    },
    MainState, MainStateInitialized, SeekerFees, SolverFees, TierCondition
};

// This function initializes main state
// Params
//   ctx - MainState initialization context
//   master - Address of the tier-override role
//   quest_authority - Address of the escrow/quest-lifecycle caller
//   xp_mint - Experience-point mint
// Return
//   Ok on success, ErrorCode on failure
pub fn init_main_state(
    ctx: Context<AInitMainState>,
    master: Pubkey,
    quest_authority: Pubkey,
    xp_mint: Pubkey
) -> Result<()> {
    let state = &mut ctx.accounts.main_state;

    // Initialize all members
    state.owner = ctx.accounts.owner.key();
    state.master = master;
    state.quest_authority = quest_authority;
    state.xp_mint = xp_mint;
    state.quest_currency_mint = Pubkey::default(); // native-only until configured

    // All treasuries start at the owner and are re-pointed via set_treasury
    state.platform_treasury = ctx.accounts.owner.key();
    state.platform_revenue_pool = ctx.accounts.owner.key();
    state.referral_tax_treasury = ctx.accounts.owner.key();
    state.dispute_fees_treasury = ctx.accounts.owner.key();

    state.seeker_fees = SeekerFees {
        referral_bp: DEF_SEEKER_REFERRAL_BP,
        platform_bp: DEF_SEEKER_PLATFORM_BP
    };
    state.solver_fees = SolverFees {
        referral_bp: DEF_SOLVER_REFERRAL_BP,
        platform_bp: DEF_SOLVER_PLATFORM_BP,
        treasury_bp: DEF_SOLVER_TREASURY_BP
    };
    state.dispute_deposit_bp = DEF_DISPUTE_DEPOSIT_BP;

    state.referral_rates = DEF_REFERRAL_RATES;
    for tier in 0..TIER_BUCKETS {
        state.tier_conditions[tier] = TierCondition {
            xp_threshold: DEF_TIER_XP_THRESHOLDS[tier],
            min_referrals: DEF_TIER_MIN_REFERRALS[tier]
        };
    }

    state.next_account_id = 1; // id 0 is the root sentinel

    emit!(MainStateInitialized {
        owner: state.owner,
        master: state.master,
        quest_authority: state.quest_authority,
        xp_mint: state.xp_mint
    });

    Ok(())
}

// MainState initialization struct - passed with accounts
#[derive(Accounts)]
pub struct AInitMainState<'info> {
    #[account(mut)]
    pub owner: Signer<'info>, // Program owner

    #[account(
        init,
        payer = owner,
        seeds = [MainState::PREFIX_SEED],
        bump,
        space = 8 + MainState::MAX_SIZE
    )]
    pub main_state: Box<Account<'info, MainState>>, // MainState account

    pub system_program: Program<'info, System>
}
