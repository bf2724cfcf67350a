use anchor_lang::prelude::*;

// Solver reward settled event (currency_mint is default for native settlements)
#[event]
pub struct RewardClaimed {
    pub solver_account: Pubkey, // Solver's ReferralAccount address
    pub escrow: Pubkey,         // Paying escrow
    pub net_amount: u64,        // Amount paid to the solver net of tax
    pub currency_mint: Pubkey,
    pub timestamp: i64
}

// Seeker tax settled event
#[event]
pub struct SeekerTaxClaimed {
    pub seeker_account: Pubkey, // Seeker's ReferralAccount address
    pub escrow: Pubkey,
    pub platform_tax: u64,      // Caller-computed platform share
    pub referral_tax: u64,      // Caller-computed referral pool
    pub currency_mint: Pubkey,
    pub timestamp: i64
}

// Dispute deposit paid event
#[event]
pub struct DisputeDepositPaid {
    pub escrow: Pubkey,
    pub seeker_account: Pubkey, // Depositing seeker's account (default when not supplied)
    pub amount: u64,
    pub currency_mint: Pubkey,
    pub timestamp: i64
}

// Dispute resolution settled event
#[event]
pub struct ResolutionProcessed {
    pub seeker_account: Pubkey,
    pub solver_account: Pubkey,
    pub solver_fault_bp: u64,
    pub seeker_amount: u64,
    pub solver_amount: u64,
    pub currency_mint: Pubkey,
    pub timestamp: i64
}
