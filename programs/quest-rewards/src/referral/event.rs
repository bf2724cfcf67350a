use anchor_lang::prelude::*;

// Referral account created event
#[event]
pub struct AccountCreated {
    pub account: Pubkey,    // New ReferralAccount address
    pub id: u64,            // Assigned account id
    pub owner: Pubkey,      // Owner wallet
    pub referrer: Pubkey,   // Referrer's ReferralAccount address (default for roots)
    pub timestamp: i64
}

// Self-service tier upgrade event
#[event]
pub struct TieredUp {
    pub account: Pubkey,
    pub new_tier: u8,
    pub timestamp: i64
}

// Referral tree propagation event
#[event]
pub struct ReferralTreeUpdated {
    pub account: Pubkey,
    pub old_tier: u8,
    pub new_tier: u8,
    pub depth_updated: u8   // Number of ancestors whose buckets moved
}

// Administrative tier override event
#[event]
pub struct TierOverridden {
    pub account: Pubkey,
    pub old_tier: u8,
    pub new_tier: u8
}

// Tier-up eligibility gate event
#[event]
pub struct TierUpEligibilityUpdated {
    pub account: Pubkey,
    pub eligible: bool
}

// Rewards claimed event
#[event]
pub struct RewardsClaimEvent {
    pub user: Pubkey,   // User wallet address
    pub rewards: u64,   // Rewards amount
    pub timestamp: i64  // Claimed time
}
