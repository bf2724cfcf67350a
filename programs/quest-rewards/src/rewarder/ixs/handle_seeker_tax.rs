use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::{
    constants::MAX_REFERRAL_DEPTH,
    error::QuestRewardsError,
    referral::state::collect_chain,
    rewarder::split::layer_shares,
    utils::{transfer_from_signer, transfer_tokens},
    MainState, ReferralAccount, SeekerTaxClaimed
};

// This function collects the seeker-side tax charged on top of a quest's
// posted reward, in native SOL. The escrow computes the two amounts from the
// configured seeker fees when it takes the deposit and hands them over here:
// the platform share goes to the revenue pool, the referral share is split
// over up to 4 seeker ancestors at the seeker-tier layer rates, and whatever
// the split leaves unassigned is swept to the referral tax treasury.
// Params
//   ctx - Seeker tax settlement context
//   platform_tax - Platform share of the seeker tax
//   referral_tax - Referral share of the seeker tax
// Return
//   Ok on success
//     SeekerTaxClaimed event is emitted on success
pub fn handle_seeker_tax(
    mut ctx: Context<AHandleSeekerTax>,
    platform_tax: u64,
    referral_tax: u64
) -> Result<()> {
    let escrow = ctx.accounts.escrow.to_account_info();
    let escrow_key = ctx.accounts.escrow.key();
    let platform_revenue_pool = ctx.accounts.platform_revenue_pool.to_account_info();
    let referral_tax_treasury = ctx.accounts.referral_tax_treasury.to_account_info();
    let main_state_info = ctx.accounts.main_state.to_account_info();
    let system_program = ctx.accounts.system_program.to_account_info();

    let seeker_key = ctx.accounts.seeker_account.key();
    let chain_start = ctx.accounts.seeker_account.referred_by;
    let rates = ctx.accounts.main_state.layer_rates(ctx.accounts.seeker_account.tier);
    let shares = layer_shares(referral_tax, &rates);

    transfer_from_signer(
        escrow.clone(),
        platform_revenue_pool,
        system_program.clone(),
        platform_tax
    )?;

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

    transfer_from_signer(escrow.clone(), main_state_info, system_program.clone(), accrued)?;
    transfer_from_signer(escrow, referral_tax_treasury, system_program, referral_tax - accrued)?;

    emit!(SeekerTaxClaimed {
        seeker_account: seeker_key,
        escrow: escrow_key,
        platform_tax,
        referral_tax,
        currency_mint: Pubkey::default(),
        timestamp: Clock::get()?.unix_timestamp
    });

    Ok(())
}

// Fungible-token counterpart of handle_seeker_tax. Layer shares go straight
// to each ancestor owner's token account; ancestors without one leave their
// share in the remainder.
pub fn handle_seeker_tax_token(
    ctx: Context<AHandleSeekerTaxToken>,
    platform_tax: u64,
    referral_tax: u64
) -> Result<()> {
    let mint_key = ctx.accounts.currency_mint.key();
    let decimals = ctx.accounts.currency_mint.decimals;
    let escrow = ctx.accounts.escrow.to_account_info();
    let escrow_key = ctx.accounts.escrow.key();
    let escrow_ata = ctx.accounts.escrow_ata.to_account_info();
    let mint_info = ctx.accounts.currency_mint.to_account_info();
    let token_program = ctx.accounts.token_program.to_account_info();

    let seeker_key = ctx.accounts.seeker_account.key();
    let chain_start = ctx.accounts.seeker_account.referred_by;
    let rates = ctx.accounts.main_state.layer_rates(ctx.accounts.seeker_account.tier);
    let shares = layer_shares(referral_tax, &rates);

    transfer_tokens(
        escrow_ata.clone(),
        ctx.accounts.revenue_pool_ata.to_account_info(),
        escrow.clone(),
        mint_info.clone(),
        token_program.clone(),
        platform_tax,
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

    transfer_tokens(
        escrow_ata,
        ctx.accounts.referral_tax_ata.to_account_info(),
        escrow,
        mint_info,
        token_program,
        referral_tax - paid,
        decimals
    )?;

    emit!(SeekerTaxClaimed {
        seeker_account: seeker_key,
        escrow: escrow_key,
        platform_tax,
        referral_tax,
        currency_mint: mint_key,
        timestamp: Clock::get()?.unix_timestamp
    });

    Ok(())
}

// Native seeker tax context - passed with accounts
#[derive(Accounts)]
pub struct AHandleSeekerTax<'info> {
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

    pub seeker_account: Box<Account<'info, ReferralAccount>>, // Seeker's graph node

    #[account(mut)]
    pub layer1: Option<Box<Account<'info, ReferralAccount>>>, // Depth-1 seeker ancestor
    #[account(mut)]
    pub layer2: Option<Box<Account<'info, ReferralAccount>>>, // Depth-2 seeker ancestor
    #[account(mut)]
    pub layer3: Option<Box<Account<'info, ReferralAccount>>>, // Depth-3 seeker ancestor
    #[account(mut)]
    pub layer4: Option<Box<Account<'info, ReferralAccount>>>, // Depth-4 seeker ancestor

    #[account(
        mut,
        address = main_state.platform_revenue_pool @ QuestRewardsError::Unauthorized
    )]
    /// CHECK: this should be set by owner
    pub platform_revenue_pool: AccountInfo<'info>,

    #[account(
        mut,
        address = main_state.referral_tax_treasury @ QuestRewardsError::Unauthorized
    )]
    /// CHECK: this should be set by owner
    pub referral_tax_treasury: AccountInfo<'info>,

    pub system_program: Program<'info, System>
}

// Token seeker tax context - passed with accounts
#[derive(Accounts)]
pub struct AHandleSeekerTaxToken<'info> {
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

    pub seeker_account: Box<Account<'info, ReferralAccount>>, // Seeker's graph node

    pub layer1: Option<Box<Account<'info, ReferralAccount>>>, // Depth-1 seeker ancestor
    pub layer2: Option<Box<Account<'info, ReferralAccount>>>, // Depth-2 seeker ancestor
    pub layer3: Option<Box<Account<'info, ReferralAccount>>>, // Depth-3 seeker ancestor
    pub layer4: Option<Box<Account<'info, ReferralAccount>>>, // Depth-4 seeker ancestor

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
        constraint = referral_tax_ata.mint == currency_mint.key() @ QuestRewardsError::UnsupportedCurrency,
        constraint = referral_tax_ata.owner == main_state.referral_tax_treasury @ QuestRewardsError::Unauthorized
    )]
    pub referral_tax_ata: Box<InterfaceAccount<'info, TokenAccount>>, // Referral tax treasury currency account

    pub token_program: Interface<'info, TokenInterface>
}
