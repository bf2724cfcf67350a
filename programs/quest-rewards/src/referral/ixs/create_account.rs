use anchor_lang::prelude::*;
use crate::{
    error::QuestRewardsError,
    referral::state::{collect_chain, credit_new_referral},
    AccountCreated, MainState, ReferralAccount
};

// This function registers a new participant in the referral graph
// Params
//   ctx - Account creation context
//   referrer - Optional referrer wallet (None registers a root account)
// Return
//   Ok on success
//     The new node starts at tier 0; up to 4 ancestors get their depth
//     buckets credited, stopping at the first missing ancestor
pub fn create_account(mut ctx: Context<ACreateAccount>, referrer: Option<Pubkey>) -> Result<()> {
    let user_key = ctx.accounts.user.key();
    let account_key = ctx.accounts.referral_account.key();
    let accounts = &mut ctx.accounts;

    // Resolve the referrer link before touching any state
    let referrer_node_key = match referrer {
        Some(referrer_key) => {
            require!(referrer_key.ne(&user_key), QuestRewardsError::CannotReferSelf);
            require!(referrer_key.ne(&Pubkey::default()), QuestRewardsError::InvalidReferrer);
            match &accounts.referrer_account {
                Some(account) => account.key(),
                None => return err!(QuestRewardsError::InvalidReferrer)
            }
        }
        None => Pubkey::default()
    };

    let id = accounts.main_state.next_account_id;
    accounts.main_state.next_account_id += 1;

    let account = &mut accounts.referral_account;
    account.id = id;
    account.owner = user_key;
    account.referred_by = referrer_node_key; // immutable from here on
    account.tier = 0;
    account.eligible_for_tier_up = true;
    account.earned_rewards = 0;

    // Count the new (tier 0) account into up to 4 ancestors
    if referrer_node_key.ne(&Pubkey::default()) {
        let links = [
            accounts.referrer_account.as_mut(),
            accounts.ancestor2.as_mut(),
            accounts.ancestor3.as_mut(),
            accounts.ancestor4.as_mut()
        ];
        let mut chain = collect_chain(referrer_node_key, links)?;
        credit_new_referral(&mut chain)?;
    }

    emit!(AccountCreated {
        account: account_key,
        id,
        owner: user_key,
        referrer: referrer_node_key,
        timestamp: Clock::get()?.unix_timestamp
    });

    Ok(())
}

// Account creation context - passed with accounts
#[derive(Accounts)]
#[instruction(referrer: Option<Pubkey>)]
pub struct ACreateAccount<'info> {
    #[account(mut)]
    pub user: Signer<'info>, // New participant

    #[account(
        mut,
        seeds = [MainState::PREFIX_SEED],
        bump
    )]
    pub main_state: Box<Account<'info, MainState>>, // MainState account (id counter)

    #[account(
        init,
        payer = user,
        seeds = [ReferralAccount::PREFIX_SEED, user.key().as_ref()],
        bump,
        space = 8 + ReferralAccount::MAX_SIZE
    )]
    pub referral_account: Box<Account<'info, ReferralAccount>>, // New graph node

    #[account(
        mut,
        seeds = [ReferralAccount::PREFIX_SEED, referrer.unwrap().as_ref()],
        bump
    )]
    pub referrer_account: Option<Box<Account<'info, ReferralAccount>>>, // Depth-1 ancestor

    #[account(mut)]
    pub ancestor2: Option<Box<Account<'info, ReferralAccount>>>, // Depth-2 ancestor
    #[account(mut)]
    pub ancestor3: Option<Box<Account<'info, ReferralAccount>>>, // Depth-3 ancestor
    #[account(mut)]
    pub ancestor4: Option<Box<Account<'info, ReferralAccount>>>, // Depth-4 ancestor

    pub system_program: Program<'info, System>
}
