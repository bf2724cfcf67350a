pub mod create_account;
pub use create_account::*;

pub mod tier_up;
pub use tier_up::*;

pub mod update_referral_tree;
pub use update_referral_tree::*;

pub mod set_tier;
pub use set_tier::*;

pub mod set_tier_up_eligibility;
pub use set_tier_up_eligibility::*;

pub mod check_referral_existence;
pub use check_referral_existence::*;

pub mod get_tier_counts;
pub use get_tier_counts::*;

pub mod claim_rewards;
pub use claim_rewards::*;
