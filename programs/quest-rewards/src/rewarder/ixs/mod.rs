pub mod handle_reward;
pub use handle_reward::*;

pub mod handle_seeker_tax;
pub use handle_seeker_tax::*;

pub mod handle_start_dispute;
pub use handle_start_dispute::*;

pub mod process_resolution;
pub use process_resolution::*;
