use anchor_lang::prelude::*;
use crate::{
    error::QuestRewardsError,
    MainState, SolverFees,
    SolverFeesUpdated
};

// This function sets the solver-side tax rates
// Params
//   ctx - Fee update context
//   referral_bp - Referral-chain share in basis points
//   platform_bp - Platform revenue share in basis points
//   treasury_bp - Platform treasury share in basis points
// Return
//   Ok on success, TaxRateTooHigh when the sum exceeds 100%
pub fn set_solver_fees(
    ctx: Context<ASetSolverFees>,
    referral_bp: u64,
    platform_bp: u64,
    treasury_bp: u64
) -> Result<()> {
    let fees = SolverFees { referral_bp, platform_bp, treasury_bp };
    fees.validate()?;

    let main_state = &mut ctx.accounts.main_state;
    main_state.solver_fees = fees;

    emit!(SolverFeesUpdated { fees });

    Ok(())
}

// Solver fee update context - passed with accounts
#[derive(Accounts)]
pub struct ASetSolverFees<'info> {
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
