use anchor_lang::prelude::*;
use crate::main_state::state::{SeekerFees, SolverFees};

// MainState initialization event
#[event]
pub struct MainStateInitialized {
    pub owner: Pubkey,
    pub master: Pubkey,
    pub quest_authority: Pubkey,
    pub xp_mint: Pubkey
}

// Transfer ownership event
#[event]
pub struct OwnershipTransferred {
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey
}

// MainState updated event
#[event]
pub struct MainStateUpdated {
    pub master: Pubkey,
    pub quest_authority: Pubkey,
    pub xp_mint: Pubkey,
    pub quest_currency_mint: Pubkey
}

// Seeker tax rates updated event
#[event]
pub struct SeekerFeesUpdated {
    pub fees: SeekerFees
}

// Solver tax rates updated event
#[event]
pub struct SolverFeesUpdated {
    pub fees: SolverFees
}

// Referral reward rates updated for one tier
#[event]
pub struct ReferralRatesUpdated {
    pub tier: u8,
    pub layer_rates: [u64; 4]
}

// Dispute deposit rate updated event
#[event]
pub struct DisputeDepositRateUpdated {
    pub dispute_deposit_bp: u64
}

// Treasury address updated event
#[event]
pub struct TreasuryUpdated {
    pub kind: u8,
    pub treasury: Pubkey
}

// Tier-table row updated event
#[event]
pub struct TierConditionUpdated {
    pub tier: u8,
    pub xp_threshold: u64,
    pub min_referrals: [u64; 5]
}
