use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::{
    error::QuestRewardsError,
    utils::{transfer_from_signer, transfer_tokens},
    DisputeDepositPaid, MainState, ReferralAccount
};

// This function collects a dispute deposit in native SOL. The escrow sizes
// the deposit from the configured dispute_deposit_bp when the seeker opens
// the dispute; the full amount is parked in the dispute fees treasury until
// process_resolution settles the outcome.
// Params
//   ctx - Dispute deposit context
//   amount - Deposit taken from the seeker
// Return
//   Ok on success
//     DisputeDepositPaid event is emitted on success
pub fn handle_start_dispute(ctx: Context<AHandleStartDispute>, amount: u64) -> Result<()> {
    let escrow = ctx.accounts.escrow.to_account_info();
    let dispute_fees_treasury = ctx.accounts.dispute_fees_treasury.to_account_info();
    let system_program = ctx.accounts.system_program.to_account_info();

    let seeker_key = match &ctx.accounts.seeker_account {
        Some(account) => account.key(),
        None => Pubkey::default()
    };

    transfer_from_signer(escrow, dispute_fees_treasury, system_program, amount)?;

    emit!(DisputeDepositPaid {
        escrow: ctx.accounts.escrow.key(),
        seeker_account: seeker_key,
        amount,
        currency_mint: Pubkey::default(),
        timestamp: Clock::get()?.unix_timestamp
    });

    Ok(())
}

// Fungible-token counterpart of handle_start_dispute.
pub fn handle_start_dispute_token(
    ctx: Context<AHandleStartDisputeToken>,
    amount: u64
) -> Result<()> {
    let mint_key = ctx.accounts.currency_mint.key();
    let decimals = ctx.accounts.currency_mint.decimals;

    let seeker_key = match &ctx.accounts.seeker_account {
        Some(account) => account.key(),
        None => Pubkey::default()
    };

    transfer_tokens(
        ctx.accounts.escrow_ata.to_account_info(),
        ctx.accounts.dispute_fees_ata.to_account_info(),
        ctx.accounts.escrow.to_account_info(),
        ctx.accounts.currency_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        decimals
    )?;

    emit!(DisputeDepositPaid {
        escrow: ctx.accounts.escrow.key(),
        seeker_account: seeker_key,
        amount,
        currency_mint: mint_key,
        timestamp: Clock::get()?.unix_timestamp
    });

    Ok(())
}

// Native dispute deposit context - passed with accounts
#[derive(Accounts)]
pub struct AHandleStartDispute<'info> {
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

    pub seeker_account: Option<Box<Account<'info, ReferralAccount>>>, // Depositing seeker's graph node

    #[account(
        mut,
        address = main_state.dispute_fees_treasury @ QuestRewardsError::Unauthorized
    )]
    /// CHECK: this should be set by owner
    pub dispute_fees_treasury: AccountInfo<'info>,

    pub system_program: Program<'info, System>
}

// Token dispute deposit context - passed with accounts
#[derive(Accounts)]
pub struct AHandleStartDisputeToken<'info> {
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

    pub seeker_account: Option<Box<Account<'info, ReferralAccount>>>, // Depositing seeker's graph node

    #[account(
        mut,
        constraint = dispute_fees_ata.mint == currency_mint.key() @ QuestRewardsError::UnsupportedCurrency,
        constraint = dispute_fees_ata.owner == main_state.dispute_fees_treasury @ QuestRewardsError::Unauthorized
    )]
    pub dispute_fees_ata: Box<InterfaceAccount<'info, TokenAccount>>, // Dispute fees treasury currency account

    pub token_program: Interface<'info, TokenInterface>
}
