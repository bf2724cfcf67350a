use anchor_lang::prelude::*;
use crate::{
    error::QuestRewardsError,
    MainState,
    MainStateUpdated
};

// MainState update parameters
#[derive(AnchorDeserialize, AnchorSerialize, Debug, Clone, Copy)]
pub struct UpdateMainStateInput {
    master: Pubkey,              // New master role
    quest_authority: Pubkey,     // New escrow/quest-lifecycle caller
    xp_mint: Pubkey,             // New experience-point mint
    quest_currency_mint: Pubkey  // New fungible settlement currency (default = native only)
}

// This function updates main state
// Params
//   ctx - MainState update context
//   input - MainState update parameters
// Return
//   Ok on success, ErrorCode on failure
pub fn update_main_state(
    ctx: Context<AUpdateMainState>,
    input: UpdateMainStateInput
) -> Result<()> {
    require!(input.master.ne(&Pubkey::default()), QuestRewardsError::ZeroAddress);
    require!(input.quest_authority.ne(&Pubkey::default()), QuestRewardsError::ZeroAddress);

    let main_state = &mut ctx.accounts.main_state;

    // Update new members
    main_state.master = input.master;
    main_state.quest_authority = input.quest_authority;
    main_state.xp_mint = input.xp_mint;
    main_state.quest_currency_mint = input.quest_currency_mint;

    emit!(MainStateUpdated {
        master: input.master,
        quest_authority: input.quest_authority,
        xp_mint: input.xp_mint,
        quest_currency_mint: input.quest_currency_mint
    });

    Ok(())
}

// MainState update context - passed with accounts
#[derive(Accounts)]
#[instruction(input: UpdateMainStateInput)]
pub struct AUpdateMainState<'info> {
    #[account(mut)]
    pub owner: Signer<'info>, // Current owner

    #[account(
        mut,
        seeds = [MainState::PREFIX_SEED],
        bump,
        has_one = owner @ QuestRewardsError::Unauthorized
    )]
    pub main_state: Box<Account<'info, MainState>> // MainState account with new values
}
