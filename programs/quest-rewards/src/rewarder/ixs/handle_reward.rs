use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::{
    constants::MAX_REFERRAL_DEPTH,
    error::QuestRewardsError,
    referral::state::collect_chain,
    rewarder::split::{layer_shares, solver_reward_split},
    utils::{transfer_from_signer, transfer_tokens},
    MainState, ReferralAccount, RewardClaimed
};

// This function settles a completed quest's payment in native SOL: the solver
// is paid net of tax, the platform cuts go to their treasuries, and the
// referral pool is split over up to 4 solver ancestors at the solver-tier
// layer rates. Layer shares accrue on the ancestor nodes (funded by a
// transfer into main_state) and are claimed later via claim_rewards; whatever
// the pool does not assign to a live ancestor - plus all rounding dust - is
// swept to the referral tax treasury, so exactly gross_amount leaves the
// escrow.
// Params
//   ctx - Reward settlement context
//   gross_amount - Gross quest payment
// Return
//   Ok on success
//     RewardClaimed event is emitted on success
pub fn handle_reward(mut ctx: Context<AHandleReward>, gross_amount: u64) -> Result<()> {
    let escrow = ctx.accounts.escrow.to_account_info();
    let escrow_key = ctx.accounts.escrow.key();
    let solver_owner = ctx.accounts.solver_owner.to_account_info();
    let platform_revenue_pool = ctx.accounts.platform_revenue_pool.to_account_info();
    let platform_treasury = ctx.accounts.platform_treasury.to_account_info();
    let referral_tax_treasury = ctx.accounts.referral_tax_treasury.to_account_info();
    let main_state_info = ctx.accounts.main_state.to_account_info();
    let system_program = ctx.accounts.system_program.to_account_info();

    let solver_key = ctx.accounts.solver_account.key();
    let chain_start = ctx.accounts.solver_account.referred_by;
    let fees = ctx.accounts.main_state.solver_fees;
    let rates = ctx.accounts.main_state.layer_rates(ctx.accounts.solver_account.tier);

    let split = solver_reward_split(gross_amount, &fees);
    let shares = layer_shares(split.referral_pool, &rates);

    // Pay the solver net of tax, then the two platform cuts
    transfer_from_signer(escrow.clone(), solver_owner, system_program.clone(), split.net_to_solver)?;
    transfer_from_signer(escrow.clone(), platform_revenue_pool, system_program.clone(), split.platform_amount)?;
    transfer_from_signer(escrow.clone(), platform_treasury, system_program.clone(), split.treasury_amount)?;

    // Accrue layer shares on the ancestors that exist
    let accounts = &mut ctx.accounts;
    let links = [
        accounts.layer1.as_mut(),
        accounts.layer2.as_mut(),
        accounts.layer3.as_mut(),
        accounts.layer4.as_mut()
    ];
    let mut chain = collect_chain(chain_start, links)?;
    let mut accrued: u64 = 0;
    for (i, ancestor) in chain.iter_mut().enumerate() {
        if shares[i] > 0 {
            ancestor.earned_rewards += shares[i];
            accrued += shares[i];
        }
    }

    // Fund the accrued shares, then sweep the rest of the tax
    transfer_from_signer(escrow.clone(), main_state_info, system_program.clone(), accrued)?;
    let remainder = split.tax_amount - split.platform_amount - split.treasury_amount - accrued;
    transfer_from_signer(escrow, referral_tax_treasury, system_program, remainder)?;

    emit!(RewardClaimed {
        solver_account: solver_key,
        escrow: escrow_key,
        net_amount: split.net_to_solver,
        currency_mint: Pubkey::default(),
        timestamp: Clock::get()?.unix_timestamp
    });

    Ok(())
}

// This function is the fungible-token counterpart of handle_reward. Layer
// shares are transferred straight to each ancestor owner's token account;
// ancestors without one leave their share in the remainder.
// Params
//   ctx - Token reward settlement context
//   gross_amount - Gross quest payment in tokens
// Return
//   Ok on success, UnsupportedCurrency for any mint other than the
//   configured settlement currency
pub fn handle_reward_token(ctx: Context<AHandleRewardToken>, gross_amount: u64) -> Result<()> {
    let mint_key = ctx.accounts.currency_mint.key();
    let decimals = ctx.accounts.currency_mint.decimals;
    let escrow = ctx.accounts.escrow.to_account_info();
    let escrow_key = ctx.accounts.escrow.key();
    let escrow_ata = ctx.accounts.escrow_ata.to_account_info();
    let mint_info = ctx.accounts.currency_mint.to_account_info();
    let token_program = ctx.accounts.token_program.to_account_info();

    let solver_key = ctx.accounts.solver_account.key();
    let chain_start = ctx.accounts.solver_account.referred_by;
    let fees = ctx.accounts.main_state.solver_fees;
    let rates = ctx.accounts.main_state.layer_rates(ctx.accounts.solver_account.tier);

    let split = solver_reward_split(gross_amount, &fees);
    let shares = layer_shares(split.referral_pool, &rates);

    transfer_tokens(
        escrow_ata.clone(),
        ctx.accounts.solver_ata.to_account_info(),
        escrow.clone(),
        mint_info.clone(),
        token_program.clone(),
        split.net_to_solver,
        decimals
    )?;
    transfer_tokens(
        escrow_ata.clone(),
        ctx.accounts.revenue_pool_ata.to_account_info(),
        escrow.clone(),
        mint_info.clone(),
        token_program.clone(),
        split.platform_amount,
        decimals
    )?;
    transfer_tokens(
        escrow_ata.clone(),
        ctx.accounts.platform_treasury_ata.to_account_info(),
        escrow.clone(),
        mint_info.clone(),
        token_program.clone(),
        split.treasury_amount,
        decimals
    )?;

    // Verify the ancestor chain and remember each live ancestor's owner
    let links = [
        &ctx.accounts.layer1,
        &ctx.accounts.layer2,
        &ctx.accounts.layer3,
        &ctx.accounts.layer4
    ];
    let mut owners: [Option<Pubkey>; MAX_REFERRAL_DEPTH] = [None; MAX_REFERRAL_DEPTH];
    let mut next = chain_start;
    for (i, link) in links.iter().enumerate() {
        if next.eq(&Pubkey::default()) {
            break;
        }
        match link {
            Some(ancestor) => {
                require!(ancestor.key().eq(&next), QuestRewardsError::InvalidReferrer);
                owners[i] = Some(ancestor.owner);
                next = ancestor.referred_by;
            }
            None => break
        }
    }

    // Pay each reachable ancestor directly
    let atas = [
        &ctx.accounts.layer1_ata,
        &ctx.accounts.layer2_ata,
        &ctx.accounts.layer3_ata,
        &ctx.accounts.layer4_ata
    ];
    let mut paid: u64 = 0;
    for i in 0..MAX_REFERRAL_DEPTH {
        let owner = match owners[i] {
            Some(owner) => owner,
            None => continue
        };
        if shares[i] == 0 {
            continue;
        }
        match &atas[i] {
            Some(ata) => {
                require!(ata.mint.eq(&mint_key), QuestRewardsError::UnsupportedCurrency);
                require!(ata.owner.eq(&owner), QuestRewardsError::InvalidReferredAddress);
                transfer_tokens(
                    escrow_ata.clone(),
                    ata.to_account_info(),
                    escrow.clone(),
                    mint_info.clone(),
                    token_program.clone(),
                    shares[i],
                    decimals
                )?;
                paid += shares[i];
            }
            None => {} // no token account supplied; share stays in the remainder
        }
    }

    let remainder = split.tax_amount - split.platform_amount - split.treasury_amount - paid;
    transfer_tokens(
        escrow_ata,
        ctx.accounts.referral_tax_ata.to_account_info(),
        escrow,
        mint_info,
        token_program,
        remainder,
        decimals
    )?;

    emit!(RewardClaimed {
        solver_account: solver_key,
        escrow: escrow_key,
        net_amount: split.net_to_solver,
        currency_mint: mint_key,
        timestamp: Clock::get()?.unix_timestamp
    });

    Ok(())
}

// Native reward settlement context - passed with accounts
#[derive(Accounts)]
pub struct AHandleReward<'info> {
    #[account(
        mut,
        constraint = escrow.key() == main_state.quest_authority @ QuestRewardsError::Unauthorized
    )]
    pub escrow: Signer<'info>, // Paying escrow (quest lifecycle boundary)

    #[account(
        mut,
        seeds = [MainState::PREFIX_SEED],
        bump
    )]
    pub main_state: Box<Account<'info, MainState>>, // MainState account (rates + reward custody)

    pub solver_account: Box<Account<'info, ReferralAccount>>, // Solver's graph node

    #[account(
        mut,
        address = solver_account.owner @ QuestRewardsError::Unauthorized
    )]
    /// CHECK: payout destination, pinned to the solver account's owner
    pub solver_owner: AccountInfo<'info>,

    #[account(mut)]
    pub layer1: Option<Box<Account<'info, ReferralAccount>>>, // Depth-1 solver ancestor
    #[account(mut)]
    pub layer2: Option<Box<Account<'info, ReferralAccount>>>, // Depth-2 solver ancestor
    #[account(mut)]
    pub layer3: Option<Box<Account<'info, ReferralAccount>>>, // Depth-3 solver ancestor
    #[account(mut)]
    pub layer4: Option<Box<Account<'info, ReferralAccount>>>, // Depth-4 solver ancestor

    #[account(
        mut,
        address = main_state.platform_revenue_pool @ QuestRewardsError::Unauthorized
    )]
    /// CHECK: this should be set by owner
    pub platform_revenue_pool: AccountInfo<'info>,

    #[account(
        mut,
        address = main_state.platform_treasury @ QuestRewardsError::Unauthorized
    )]
    /// CHECK: this should be set by owner
    pub platform_treasury: AccountInfo<'info>,

    #[account(
        mut,
        address = main_state.referral_tax_treasury @ QuestRewardsError::Unauthorized
    )]
    /// CHECK: this should be set by owner
    pub referral_tax_treasury: AccountInfo<'info>,

    pub system_program: Program<'info, System>
}

// Token reward settlement context - passed with accounts
#[derive(Accounts)]
pub struct AHandleRewardToken<'info> {
    #[account(
        constraint = escrow.key() == main_state.quest_authority @ QuestRewardsError::Unauthorized
    )]
    pub escrow: Signer<'info>, // Paying escrow (quest lifecycle boundary)

    #[account(
        seeds = [MainState::PREFIX_SEED],
        bump
    )]
    pub main_state: Box<Account<'info, MainState>>, // MainState account (rates)

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

    pub solver_account: Box<Account<'info, ReferralAccount>>, // Solver's graph node

    #[account(
        mut,
        constraint = solver_ata.mint == currency_mint.key() @ QuestRewardsError::UnsupportedCurrency,
        constraint = solver_ata.owner == solver_account.owner @ QuestRewardsError::Unauthorized
    )]
    pub solver_ata: Box<InterfaceAccount<'info, TokenAccount>>, // Solver owner's currency account

    pub layer1: Option<Box<Account<'info, ReferralAccount>>>, // Depth-1 solver ancestor
    pub layer2: Option<Box<Account<'info, ReferralAccount>>>, // Depth-2 solver ancestor
    pub layer3: Option<Box<Account<'info, ReferralAccount>>>, // Depth-3 solver ancestor
    pub layer4: Option<Box<Account<'info, ReferralAccount>>>, // Depth-4 solver ancestor

    #[account(mut)]
    pub layer1_ata: Option<Box<InterfaceAccount<'info, TokenAccount>>>, // Depth-1 owner's currency account
    #[account(mut)]
    pub layer2_ata: Option<Box<InterfaceAccount<'info, TokenAccount>>>, // Depth-2 owner's currency account
    #[account(mut)]
    pub layer3_ata: Option<Box<InterfaceAccount<'info, TokenAccount>>>, // Depth-3 owner's currency account
    #[account(mut)]
    pub layer4_ata: Option<Box<InterfaceAccount<'info, TokenAccount>>>, // Depth-4 owner's currency account

    #[account(
        mut,
        constraint = revenue_pool_ata.mint == currency_mint.key() @ QuestRewardsError::UnsupportedCurrency,
        constraint = revenue_pool_ata.owner == main_state.platform_revenue_pool @ QuestRewardsError::Unauthorized
    )]
    pub revenue_pool_ata: Box<InterfaceAccount<'info, TokenAccount>>, // Revenue pool currency account

    #[account(
        mut,
        constraint = platform_treasury_ata.mint == currency_mint.key() @ QuestRewardsError::UnsupportedCurrency,
        constraint = platform_treasury_ata.owner == main_state.platform_treasury @ QuestRewardsError::Unauthorized
    )]
    pub platform_treasury_ata: Box<InterfaceAccount<'info, TokenAccount>>, // Platform treasury currency account

    #[account(
        mut,
        constraint = referral_tax_ata.mint == currency_mint.key() @ QuestRewardsError::UnsupportedCurrency,
        constraint = referral_tax_ata.owner == main_state.referral_tax_treasury @ QuestRewardsError::Unauthorized
    )]
    pub referral_tax_ata: Box<InterfaceAccount<'info, TokenAccount>>, // Referral tax treasury currency account

    pub token_program: Interface<'info, TokenInterface>
}
