pub const MAX_BPS: u64 = 10_000; // 100% in basis points

pub const MAX_TIER: u8 = 5; // Tier ceiling (tiers run 0..=5)
pub const MAX_REFERRAL_DEPTH: usize = 4; // Ancestor walks stop here
pub const TIER_BUCKETS: usize = 5; // Count buckets, indexed by effective tier 1..=5

pub const DEF_SEEKER_REFERRAL_BP: u64 = 200; // 2%
pub const DEF_SEEKER_PLATFORM_BP: u64 = 300; // 3%

pub const DEF_SOLVER_REFERRAL_BP: u64 = 200; // 2%
pub const DEF_SOLVER_PLATFORM_BP: u64 = 700; // 7%
pub const DEF_SOLVER_TREASURY_BP: u64 = 100; // 1%

pub const DEF_DISPUTE_DEPOSIT_BP: u64 = 500; // 5%

// Default referral reward rates, referral pool shares per layer (row = tier - 1)
pub const DEF_REFERRAL_RATES: [[u64; MAX_REFERRAL_DEPTH]; TIER_BUCKETS] = [
    [2000, 500, 250, 125],
    [2500, 750, 375, 200],
    [3000, 1000, 500, 250],
    [3500, 1250, 625, 300],
    [4000, 1500, 750, 375],
];

// Default experience-point thresholds for upgrading to tier 1..=5
pub const DEF_TIER_XP_THRESHOLDS: [u64; TIER_BUCKETS] = [
    100,
    500,
    2_500,
    10_000,
    50_000,
];

// Default referral-count minimums for upgrading to tier 1..=5 (row = target tier - 1,
// column = tier bucket the counted referrals sit in)
pub const DEF_TIER_MIN_REFERRALS: [[u64; TIER_BUCKETS]; TIER_BUCKETS] = [
    [2, 0, 0, 0, 0],
    [5, 1, 0, 0, 0],
    [10, 3, 1, 0, 0],
    [20, 5, 2, 1, 0],
    [50, 10, 5, 2, 1],
];
