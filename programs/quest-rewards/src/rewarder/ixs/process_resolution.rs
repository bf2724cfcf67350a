use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::{
    constants::MAX_BPS,
    error::QuestRewardsError,
    rewarder::split::resolution_split,
    utils::{transfer_from_signer, transfer_tokens},
    MainState, ReferralAccount, ResolutionProcessed
};

// This function settles a resolved dispute in native SOL. The disputed
// amount is split by the ruled solver fault: the solver-fault fraction is
// refunded to the seeker and the rest is paid to the solver.
// Params
//   ctx - Resolution settlement context
//   amount - Disputed amount held by the escrow
//   solver_fault_bp - Ruled solver fault in basis points
// Return
//   Ok on success, TaxRateTooHigh when solver_fault_bp exceeds 10_000
//     ResolutionProcessed event is emitted on success
pub fn process_resolution(
    ctx: Context<AProcessResolution>,
    amount: u64,
    solver_fault_bp: u64
) -> Result<()> {
    require!(solver_fault_bp <= MAX_BPS, QuestRewardsError::TaxRateTooHigh);
    let (seeker_amount, solver_amount) = resolution_split(amount, solver_fault_bp);

    let escrow = ctx.accounts.escrow.to_account_info();
    let system_program = ctx.accounts.system_program.to_account_info();

    transfer_from_signer(
        escrow.clone(),
        ctx.accounts.seeker_owner.to_account_info(),
        system_program.clone(),
        seeker_amount
    )?;
    transfer_from_signer(
        escrow,
        ctx.accounts.solver_owner.to_account_info(),
        system_program,
        solver_amount
    )?;

    emit!(ResolutionProcessed {
        seeker_account: ctx.accounts.seeker_account.key(),
        solver_account: ctx.accounts.solver_account.key(),
        solver_fault_bp,
        seeker_amount,
        solver_amount,
        currency_mint: Pubkey::default(),
        timestamp: Clock::get()?.unix_timestamp
    });

    Ok(())
}

// Fungible-token counterpart of process_resolution.
pub fn process_resolution_token(
    ctx: Context<AProcessResolutionToken>,
    amount: u64,
    solver_fault_bp: u64
) -> Result<()> {
    require!(solver_fault_bp <= MAX_BPS, QuestRewardsError::TaxRateTooHigh);
    let (seeker_amount, solver_amount) = resolution_split(amount, solver_fault_bp);

    let mint_key = ctx.accounts.currency_mint.key();
    let decimals = ctx.accounts.currency_mint.decimals;
    let escrow = ctx.accounts.escrow.to_account_info();
    let escrow_ata = ctx.accounts.escrow_ata.to_account_info();
    let mint_info = ctx.accounts.currency_mint.to_account_info();
    let token_program = ctx.accounts.token_program.to_account_info();

    transfer_tokens(
        escrow_ata.clone(),
        ctx.accounts.seeker_ata.to_account_info(),
        escrow.clone(),
        mint_info.clone(),
        token_program.clone(),
        seeker_amount,
        decimals
    )?;
    transfer_tokens(
        escrow_ata,
        ctx.accounts.solver_ata.to_account_info(),
        escrow,
        mint_info,
        token_program,
        solver_amount,
        decimals
    )?;

    emit!(ResolutionProcessed {
        seeker_account: ctx.accounts.seeker_account.key(),
        solver_account: ctx.accounts.solver_account.key(),
        solver_fault_bp,
        seeker_amount,
        solver_amount,
        currency_mint: mint_key,
        timestamp: Clock::get()?.unix_timestamp
    });

    Ok(())
}

// Native resolution context - passed with accounts
#[derive(Accounts)]
pub struct AProcessResolution<'info> {
    #[account(
        mut,
        constraint = escrow.key() == main_state.quest_authority @ QuestRewardsError::Unauthorized
    )]
    pub escrow: Signer<'info>, // Paying escrow (quest lifecycle boundary)

    #[account(
        seeds = [MainState::PREFIX_SEED],
        bump
    )]
    pub main_state: Box<Account<'info, MainState>>, // MainState account

    pub seeker_account: Box<Account<'info, ReferralAccount>>, // Disputing seeker's graph node
    pub solver_account: Box<Account<'info, ReferralAccount>>, // Disputed solver's graph node

    #[account(
        mut,
        address = seeker_account.owner @ QuestRewardsError::Unauthorized
    )]
    /// CHECK: refund destination, pinned to the seeker account's owner
    pub seeker_owner: AccountInfo<'info>,

    #[account(
        mut,
        address = solver_account.owner @ QuestRewardsError::Unauthorized
    )]
    /// CHECK: payout destination, pinned to the solver account's owner
    pub solver_owner: AccountInfo<'info>,

    pub system_program: Program<'info, System>
}

// Token resolution context - passed with accounts
#[derive(Accounts)]
pub struct AProcessResolutionToken<'info> {
    #[account(
        constraint = escrow.key() == main_state.quest_authority @ QuestRewardsError::Unauthorized
    )]
    pub escrow: Signer<'info>, // Paying escrow (quest lifecycle boundary)

    #[account(
        seeds = [MainState::PREFIX_SEED],
        bump
    )]
    pub main_state: Box<Account<'info, MainState>>, // MainState account

    #[account(
        constraint = currency_mint.key() == main_state.quest_currency_mint @ QuestRewardsError::UnsupportedCurrency
    )]
    pub currency_mint: Box<InterfaceAccount<'info, Mint>>, // Settlement currency

    #[account(
        mut,
        constraint = escrow_ata.mint == currency_mint.key() @ QuestRewardsError::UnsupportedCurrency,
        constraint = escrow_ata.owner == escrow.key() @ QuestRewardsError::Unauthorized
    )]
    pub escrow_ata: Box<InterfaceAccount<'info, TokenAccount>>, // Escrow's currency account

    pub seeker_account: Box<Account<'info, ReferralAccount>>, // Disputing seeker's graph node
    pub solver_account: Box<Account<'info, ReferralAccount>>, // Disputed solver's graph node

    #[account(
        mut,
        constraint = seeker_ata.mint == currency_mint.key() @ QuestRewardsError::UnsupportedCurrency,
        constraint = seeker_ata.owner == seeker_account.owner @ QuestRewardsError::Unauthorized
    )]
    pub seeker_ata: Box<InterfaceAccount<'info, TokenAccount>>, // Seeker owner's currency account

    #[account(
        mut,
        constraint = solver_ata.mint == currency_mint.key() @ QuestRewardsError::UnsupportedCurrency,
        constraint = solver_ata.owner == solver_account.owner @ QuestRewardsError::Unauthorized
    )]
    pub solver_ata: Box<InterfaceAccount<'info, TokenAccount>>, // Solver owner's currency account

    pub token_program: Interface<'info, TokenInterface>
}
