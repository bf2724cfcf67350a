pub mod ixs;
pub use ixs::*;

pub mod split;
pub use split::*;

pub mod event;
pub use event::*;
