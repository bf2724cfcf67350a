use anchor_lang::prelude::error_code;

#[error_code]
pub enum QuestRewardsError {
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("Already became an owner")]
    AlreadyBecameOwner,

    #[msg("Tax rate too high")]
    TaxRateTooHigh,
    #[msg("Zero address")]
    ZeroAddress,
    #[msg("Invalid treasury kind")]
    InvalidTreasuryKind,

    #[msg("Invalid referral depth")]
    InvalidDepth,
    #[msg("Invalid referrer")]
    InvalidReferrer,
    #[msg("Cannot refer self")]
    CannotReferSelf,
    #[msg("Invalid referred address")]
    InvalidReferredAddress,

    #[msg("Invalid tier")]
    InvalidTier,
    #[msg("Upgrade condition not met")]
    UpgradeConditionNotMet,
    #[msg("No such referral count entry")]
    NoSuchEntry,

    #[msg("Unsupported currency")]
    UnsupportedCurrency,
    #[msg("Insufficient fund")]
    InsufficientFund,
    #[msg("Nothing to claim")]
    NothingToClaim,
}
