use crate::{
    constants::MAX_REFERRAL_DEPTH,
    main_state::state::SolverFees,
    utils::bp_share
};

// One solver-side settlement, fully decomposed. Each component is floored
// independently; the floor dust is swept into the referral-tax remainder by
// the caller, so the gross amount is always disbursed exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewardSplit {
    pub tax_amount: u64,      // floor(gross * total_bp / 10000)
    pub net_to_solver: u64,   // gross - tax_amount
    pub platform_amount: u64, // floor(gross * platform_bp / 10000)
    pub treasury_amount: u64, // floor(gross * treasury_bp / 10000)
    pub referral_pool: u64    // floor(gross * referral_bp / 10000)
}

// This function splits a gross quest payment per the solver tax rates
pub fn solver_reward_split(gross_amount: u64, fees: &SolverFees) -> RewardSplit {
    let tax_amount = bp_share(gross_amount, fees.total_bp());
    RewardSplit {
        tax_amount,
        net_to_solver: gross_amount - tax_amount,
        platform_amount: bp_share(gross_amount, fees.platform_bp),
        treasury_amount: bp_share(gross_amount, fees.treasury_bp),
        referral_pool: bp_share(gross_amount, fees.referral_bp)
    }
}

// This function carves the referral pool into per-layer shares
// Params
//   referral_pool - Referral tax amount for this settlement
//   layer_rates - Pool share per layer in basis points (from the earner's tier row)
// Return
//   Share per layer 1..=4; shares for layers with no live ancestor stay in the pool
pub fn layer_shares(
    referral_pool: u64,
    layer_rates: &[u64; MAX_REFERRAL_DEPTH]
) -> [u64; MAX_REFERRAL_DEPTH] {
    let mut shares = [0u64; MAX_REFERRAL_DEPTH];
    for (share, rate) in shares.iter_mut().zip(layer_rates.iter()) {
        *share = bp_share(referral_pool, *rate);
    }
    shares
}

// This function splits a disputed amount between seeker and solver
// Params
//   amount - Amount under resolution (no tax applies)
//   solver_fault_bp - Fault attributed to the solver; 10000 sends everything
//                     to the seeker
// Return
//   (seeker_amount, solver_amount), summing to amount exactly
pub fn resolution_split(amount: u64, solver_fault_bp: u64) -> (u64, u64) {
    let seeker_amount = bp_share(amount, solver_fault_bp);
    (seeker_amount, amount - seeker_amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solver_reward_split_scenario() {
        // 10% total tax: 2% referral, 7% platform, 1% treasury
        let fees = SolverFees { referral_bp: 200, platform_bp: 700, treasury_bp: 100 };
        let split = solver_reward_split(1000, &fees);
        assert_eq!(split.tax_amount, 100);
        assert_eq!(split.net_to_solver, 900);
        assert_eq!(split.platform_amount, 70);
        assert_eq!(split.treasury_amount, 10);
        assert_eq!(split.referral_pool, 20);
    }

    #[test]
    fn test_solver_reward_split_dust_never_negative() {
        // Amounts where each component floors independently
        let fees = SolverFees { referral_bp: 333, platform_bp: 333, treasury_bp: 333 };
        for gross in [1u64, 7, 99, 1001, 12_345] {
            let split = solver_reward_split(gross, &fees);
            let parts = split.platform_amount + split.treasury_amount + split.referral_pool;
            assert!(parts <= split.tax_amount);
            assert_eq!(split.net_to_solver + split.tax_amount, gross);
        }
    }

    #[test]
    fn test_solver_reward_split_zero_fees() {
        let split = solver_reward_split(1000, &SolverFees::default());
        assert_eq!(split.tax_amount, 0);
        assert_eq!(split.net_to_solver, 1000);
    }

    #[test]
    fn test_layer_shares() {
        let shares = layer_shares(20, &[2000, 500, 250, 125]);
        assert_eq!(shares, [4, 1, 0, 0]);
        let total: u64 = shares.iter().sum();
        assert!(total <= 20);
    }

    #[test]
    fn test_layer_shares_full_pool() {
        assert_eq!(layer_shares(1000, &[5000, 2500, 1500, 1000]), [500, 250, 150, 100]);
        assert_eq!(layer_shares(1000, &[0, 0, 0, 0]), [0, 0, 0, 0]);
    }

    #[test]
    fn test_resolution_split_bounds() {
        assert_eq!(resolution_split(1000, 10_000), (1000, 0));
        assert_eq!(resolution_split(1000, 0), (0, 1000));
        assert_eq!(resolution_split(1000, 5000), (500, 500));
    }

    #[test]
    fn test_resolution_split_rounds_toward_solver() {
        let (seeker, solver) = resolution_split(999, 5000);
        assert_eq!(seeker, 499);
        assert_eq!(solver, 500);
        assert_eq!(seeker + solver, 999);
    }
}
