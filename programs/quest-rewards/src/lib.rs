#![allow(unused)]

use anchor_lang::prelude::*;

pub mod main_state;
pub mod referral;
pub mod rewarder;

pub mod constants;
pub mod error;
pub mod utils;

use constants::{MAX_REFERRAL_DEPTH, TIER_BUCKETS};
use main_state::*;
use referral::*;
use rewarder::*;

declare_id!("2oxZhT4tqz9ZUANnEBm2taLZSbYhpGQpgUkzHJvCL2F8");

#[program]
pub mod quest_rewards {
    use super::*;

    pub fn init_main_state(ctx: Context<AInitMainState>, master: Pubkey, quest_authority: Pubkey, xp_mint: Pubkey) -> Result<()> {
        main_state::init_main_state(ctx, master, quest_authority, xp_mint)
    }

    pub fn transfer_ownership(ctx: Context<ATransferOwnership>, new_owner: Pubkey) -> Result<()> {
        main_state::transfer_ownership(ctx, new_owner)
    }

    pub fn update_main_state(ctx: Context<AUpdateMainState>, input: UpdateMainStateInput) -> Result<()> {
        main_state::update_main_state(ctx, input)
    }

    pub fn set_seeker_fees(ctx: Context<ASetSeekerFees>, referral_bp: u64, platform_bp: u64) -> Result<()> {
        main_state::set_seeker_fees(ctx, referral_bp, platform_bp)
    }

    pub fn set_solver_fees(ctx: Context<ASetSolverFees>, referral_bp: u64, platform_bp: u64, treasury_bp: u64) -> Result<()> {
        main_state::set_solver_fees(ctx, referral_bp, platform_bp, treasury_bp)
    }

    pub fn set_bulk_referral_rate(ctx: Context<ASetBulkReferralRate>, tier: u8, layer_rates: [u64; MAX_REFERRAL_DEPTH]) -> Result<()> {
        main_state::set_bulk_referral_rate(ctx, tier, layer_rates)
    }

    pub fn set_dispute_deposit_rate(ctx: Context<ASetDisputeDepositRate>, dispute_deposit_bp: u64) -> Result<()> {
        main_state::set_dispute_deposit_rate(ctx, dispute_deposit_bp)
    }

    pub fn set_treasury(ctx: Context<ASetTreasury>, kind: u8, treasury: Pubkey) -> Result<()> {
        main_state::set_treasury(ctx, kind, treasury)
    }

    pub fn set_tier_condition(ctx: Context<ASetTierCondition>, tier: u8, xp_threshold: u64, min_referrals: [u64; TIER_BUCKETS]) -> Result<()> {
        main_state::set_tier_condition(ctx, tier, xp_threshold, min_referrals)
    }

    pub fn create_account(ctx: Context<ACreateAccount>, referrer: Option<Pubkey>) -> Result<()> {
        referral::create_account(ctx, referrer)
    }

    pub fn tier_up(ctx: Context<ATierUp>) -> Result<()> {
        referral::tier_up(ctx)
    }

    pub fn update_referral_tree(ctx: Context<AUpdateReferralTree>, old_tier: u8, new_tier: u8) -> Result<()> {
        referral::update_referral_tree(ctx, old_tier, new_tier)
    }

    pub fn set_tier(ctx: Context<ASetTier>, new_tier: u8) -> Result<()> {
        referral::set_tier(ctx, new_tier)
    }

    pub fn set_tier_up_eligibility(ctx: Context<ASetTierUpEligibility>, eligible: bool) -> Result<()> {
        referral::set_tier_up_eligibility(ctx, eligible)
    }

    pub fn check_referral_existence(ctx: Context<ACheckReferralExistence>, depth: u8, candidate: Pubkey) -> Result<u8> {
        referral::check_referral_existence(ctx, depth, candidate)
    }

    pub fn get_tier_counts(ctx: Context<AGetTierCounts>) -> Result<[u64; TIER_BUCKETS]> {
        referral::get_tier_counts(ctx)
    }

    pub fn claim_rewards(ctx: Context<AClaimRewards>) -> Result<()> {
        referral::claim_rewards(ctx)
    }

    pub fn handle_reward(ctx: Context<AHandleReward>, gross_amount: u64) -> Result<()> {
        rewarder::handle_reward(ctx, gross_amount)
    }

    pub fn handle_reward_token(ctx: Context<AHandleRewardToken>, gross_amount: u64) -> Result<()> {
        rewarder::handle_reward_token(ctx, gross_amount)
    }

    pub fn handle_seeker_tax(ctx: Context<AHandleSeekerTax>, platform_tax: u64, referral_tax: u64) -> Result<()> {
        rewarder::handle_seeker_tax(ctx, platform_tax, referral_tax)
    }

    pub fn handle_seeker_tax_token(ctx: Context<AHandleSeekerTaxToken>, platform_tax: u64, referral_tax: u64) -> Result<()> {
        rewarder::handle_seeker_tax_token(ctx, platform_tax, referral_tax)
    }

    pub fn handle_start_dispute(ctx: Context<AHandleStartDispute>, amount: u64) -> Result<()> {
        rewarder::handle_start_dispute(ctx, amount)
    }

    pub fn handle_start_dispute_token(ctx: Context<AHandleStartDisputeToken>, amount: u64) -> Result<()> {
        rewarder::handle_start_dispute_token(ctx, amount)
    }

    pub fn process_resolution(ctx: Context<AProcessResolution>, amount: u64, solver_fault_bp: u64) -> Result<()> {
        rewarder::process_resolution(ctx, amount, solver_fault_bp)
    }

    pub fn process_resolution_token(ctx: Context<AProcessResolutionToken>, amount: u64, solver_fault_bp: u64) -> Result<()> {
        rewarder::process_resolution_token(ctx, amount, solver_fault_bp)
    }
}
