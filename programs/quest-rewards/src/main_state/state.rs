use anchor_lang::prelude::*;
use crate::{
    constants::{MAX_BPS, MAX_REFERRAL_DEPTH, MAX_TIER, TIER_BUCKETS},
    error::QuestRewardsError
};

// Seeker-side tax rates
#[derive(AnchorSerialize, AnchorDeserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeekerFees {
    pub referral_bp: u64, // Share routed to the seeker's referral chain
    pub platform_bp: u64  // Share routed to the platform revenue pool
}

impl SeekerFees {
    // This function validates the rate sum (must not exceed 100%)
    pub fn validate(&self) -> Result<()> {
        let sum = self
            .referral_bp
            .checked_add(self.platform_bp)
            .ok_or(QuestRewardsError::TaxRateTooHigh)?;
        require!(sum <= MAX_BPS, QuestRewardsError::TaxRateTooHigh);
        Ok(())
    }

    pub fn total_bp(&self) -> u64 {
        self.referral_bp + self.platform_bp
    }
}

// Solver-side tax rates
#[derive(AnchorSerialize, AnchorDeserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolverFees {
    pub referral_bp: u64, // Share routed to the solver's referral chain
    pub platform_bp: u64, // Share routed to the platform revenue pool
    pub treasury_bp: u64  // Share routed to the platform treasury
}

impl SolverFees {
    // This function validates the rate sum (must not exceed 100%)
    pub fn validate(&self) -> Result<()> {
        let sum = self
            .referral_bp
            .checked_add(self.platform_bp)
            .and_then(|sum| sum.checked_add(self.treasury_bp))
            .ok_or(QuestRewardsError::TaxRateTooHigh)?;
        require!(sum <= MAX_BPS, QuestRewardsError::TaxRateTooHigh);
        Ok(())
    }

    pub fn total_bp(&self) -> u64 {
        self.referral_bp + self.platform_bp + self.treasury_bp
    }
}

// One tier-table row: upgrade conditions for reaching a tier
#[derive(AnchorSerialize, AnchorDeserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TierCondition {
    pub xp_threshold: u64,                   // Minimum experience-point balance
    pub min_referrals: [u64; TIER_BUCKETS]   // Minimum referral count per tier bucket 1..=5
}

impl TierCondition {
    // This function checks the upgrade condition against an account's stats
    // Params
    //   xp - The account's experience-point balance
    //   tier_counts - The account's referral counts per tier bucket, summed over depths
    // Return
    //   true if every threshold is satisfied
    pub fn is_met(&self, xp: u64, tier_counts: &[u64; TIER_BUCKETS]) -> bool {
        if xp < self.xp_threshold {
            return false;
        }
        for (count, min) in tier_counts.iter().zip(self.min_referrals.iter()) {
            if count < min {
                return false;
            }
        }
        true
    }
}

// Treasury selectors for set_treasury
pub const TREASURY_PLATFORM: u8 = 0;
pub const TREASURY_REVENUE_POOL: u8 = 1;
pub const TREASURY_REFERRAL_TAX: u8 = 2;
pub const TREASURY_DISPUTE_FEES: u8 = 3;

// Main state of Program
#[account]
pub struct MainState {
    pub owner: Pubkey,                  // Custodian: the only role allowed to change configuration
    pub master: Pubkey,                 // Master: the only role allowed to override tiers and eligibility
    pub quest_authority: Pubkey,        // Escrow/quest-lifecycle caller allowed into the settlement engine

    pub xp_mint: Pubkey,                // Experience-point mint read at tier-up time
    pub quest_currency_mint: Pubkey,    // The one fungible settlement currency (default = native only)

    pub platform_treasury: Pubkey,      // Solver-tax treasury cut destination
    pub platform_revenue_pool: Pubkey,  // Platform revenue destination
    pub referral_tax_treasury: Pubkey,  // Unassigned referral-pool remainder destination
    pub dispute_fees_treasury: Pubkey,  // Dispute deposit destination

    pub seeker_fees: SeekerFees,        // Seeker-side tax rates
    pub solver_fees: SolverFees,        // Solver-side tax rates
    pub dispute_deposit_bp: u64,        // Dispute deposit rate

    // Referral reward rates: [tier - 1][layer - 1], basis points of the referral pool
    pub referral_rates: [[u64; MAX_REFERRAL_DEPTH]; TIER_BUCKETS],
    // Tier table: upgrade conditions for tiers 1..=5
    pub tier_conditions: [TierCondition; TIER_BUCKETS],

    pub next_account_id: u64            // Monotonic referral-account id counter
}

impl MainState {
    pub const MAX_SIZE: usize = std::mem::size_of::<Self>();    // Size of MainState
    pub const PREFIX_SEED: &'static [u8] = b"main";             // Seed of MainState

    // This function reads a referral reward rate
    // Params
    //   tier - Earner's tier (1..=5)
    //   layer - Referral layer (1..=4)
    // Return
    //   Rate in basis points; 0 for any out-of-range input (never fails)
    pub fn referral_rate(&self, tier: u8, layer: u8) -> u64 {
        if tier == 0 || tier > MAX_TIER || layer == 0 || layer as usize > MAX_REFERRAL_DEPTH {
            return 0;
        }
        self.referral_rates[tier as usize - 1][layer as usize - 1]
    }

    // This function reads all four layer rates for one tier
    pub fn layer_rates(&self, tier: u8) -> [u64; MAX_REFERRAL_DEPTH] {
        let mut rates = [0u64; MAX_REFERRAL_DEPTH];
        for (layer, rate) in rates.iter_mut().enumerate() {
            *rate = self.referral_rate(tier, layer as u8 + 1);
        }
        rates
    }

    // This function reads the tier-table row for upgrading to target_tier
    // Return
    //   None when target_tier is outside 1..=5
    pub fn tier_condition(&self, target_tier: u8) -> Option<TierCondition> {
        if target_tier == 0 || target_tier > MAX_TIER {
            return None;
        }
        Some(self.tier_conditions[target_tier as usize - 1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DEF_REFERRAL_RATES, DEF_TIER_MIN_REFERRALS, DEF_TIER_XP_THRESHOLDS};

    fn main_state() -> MainState {
        let mut tier_conditions = [TierCondition::default(); TIER_BUCKETS];
        for (i, condition) in tier_conditions.iter_mut().enumerate() {
            condition.xp_threshold = DEF_TIER_XP_THRESHOLDS[i];
            condition.min_referrals = DEF_TIER_MIN_REFERRALS[i];
        }
        MainState {
            owner: Pubkey::new_unique(),
            master: Pubkey::new_unique(),
            quest_authority: Pubkey::new_unique(),
            xp_mint: Pubkey::new_unique(),
            quest_currency_mint: Pubkey::default(),
            platform_treasury: Pubkey::new_unique(),
            platform_revenue_pool: Pubkey::new_unique(),
            referral_tax_treasury: Pubkey::new_unique(),
            dispute_fees_treasury: Pubkey::new_unique(),
            seeker_fees: SeekerFees { referral_bp: 200, platform_bp: 300 },
            solver_fees: SolverFees { referral_bp: 200, platform_bp: 700, treasury_bp: 100 },
            dispute_deposit_bp: 500,
            referral_rates: DEF_REFERRAL_RATES,
            tier_conditions,
            next_account_id: 1
        }
    }

    #[test]
    fn test_seeker_fees_sum_boundary() {
        assert!(SeekerFees { referral_bp: 9999, platform_bp: 1 }.validate().is_ok());
        assert!(SeekerFees { referral_bp: 9999, platform_bp: 2 }.validate().is_err());
    }

    #[test]
    fn test_solver_fees_sum_boundary() {
        let ok = SolverFees { referral_bp: 5000, platform_bp: 4000, treasury_bp: 1000 };
        assert!(ok.validate().is_ok());
        assert_eq!(ok.total_bp(), 10_000);
        let too_high = SolverFees { referral_bp: 5000, platform_bp: 4000, treasury_bp: 1001 };
        assert!(too_high.validate().is_err());
    }

    #[test]
    fn test_fees_validate_overflowing_sum_is_rejected() {
        // Sums past u64::MAX must come back TaxRateTooHigh, not panic
        let seeker = SeekerFees { referral_bp: u64::MAX, platform_bp: 1 };
        assert!(seeker.validate().is_err());
        let solver = SolverFees { referral_bp: u64::MAX, platform_bp: 1, treasury_bp: 0 };
        assert!(solver.validate().is_err());
        let solver = SolverFees { referral_bp: 1, platform_bp: u64::MAX, treasury_bp: u64::MAX };
        assert!(solver.validate().is_err());
    }

    #[test]
    fn test_referral_rate_permissive_out_of_range() {
        let state = main_state();
        assert_eq!(state.referral_rate(0, 1), 0);
        assert_eq!(state.referral_rate(1, 0), 0);
        assert_eq!(state.referral_rate(6, 1), 0);
        assert_eq!(state.referral_rate(1, 5), 0);
    }

    #[test]
    fn test_referral_rate_in_range() {
        let state = main_state();
        assert_eq!(state.referral_rate(1, 1), DEF_REFERRAL_RATES[0][0]);
        assert_eq!(state.referral_rate(5, 4), DEF_REFERRAL_RATES[4][3]);
        assert_eq!(state.layer_rates(3), DEF_REFERRAL_RATES[2]);
        assert_eq!(state.layer_rates(0), [0; MAX_REFERRAL_DEPTH]);
    }

    #[test]
    fn test_tier_condition_lookup_bounds() {
        let state = main_state();
        assert!(state.tier_condition(0).is_none());
        assert!(state.tier_condition(6).is_none());
        assert_eq!(
            state.tier_condition(1).unwrap().xp_threshold,
            DEF_TIER_XP_THRESHOLDS[0]
        );
    }

    #[test]
    fn test_tier_condition_is_met() {
        let condition = TierCondition {
            xp_threshold: 500,
            min_referrals: [5, 1, 0, 0, 0]
        };
        assert!(condition.is_met(500, &[5, 1, 0, 0, 0]));
        assert!(condition.is_met(9999, &[10, 2, 3, 4, 5]));
        assert!(!condition.is_met(499, &[5, 1, 0, 0, 0])); // not enough xp
        assert!(!condition.is_met(500, &[4, 1, 0, 0, 0])); // bucket 1 short
        assert!(!condition.is_met(500, &[5, 0, 0, 0, 0])); // bucket 2 short
    }
}
