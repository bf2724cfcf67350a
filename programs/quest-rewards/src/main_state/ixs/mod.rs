pub mod init_main_state;
pub use init_main_state::*;

pub mod transfer_ownership;
pub use transfer_ownership::*;

pub mod update_main_state;
pub use update_main_state::*;

pub mod set_seeker_fees;
pub use set_seeker_fees::*;

pub mod set_solver_fees;
pub use set_solver_fees::*;

pub mod set_bulk_referral_rate;
pub use set_bulk_referral_rate::*;

pub mod set_dispute_deposit_rate;
pub use set_dispute_deposit_rate::*;

pub mod set_treasury;
pub use set_treasury::*;

pub mod set_tier_condition;
pub use set_tier_condition::*;
