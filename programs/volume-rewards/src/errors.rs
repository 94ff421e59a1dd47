use anchor_lang::prelude::*;

/// Volume Rewards Error Codes
///
/// Every error aborts the whole instruction; the transaction is rolled back
/// and no partial state is committed.
#[error_code]
pub enum ErrorCode {
    // Capability checks (venue-only, admin-only, self-only)
    #[msg("Unauthorized")]
    Unauthorized,

    // Argument validation
    #[msg("Invalid argument - null identity or zero amount")]
    InvalidArgument,

    #[msg("Invalid fee collector")]
    InvalidFeeCollector,

    // Ledger
    #[msg("Nothing to claim")]
    NothingToClaim,

    // Value movement
    #[msg("Token transfer failed")]
    TransferFailed,

    #[msg("Arithmetic overflow")]
    MathOverflow,

    #[msg("Reentrant call rejected")]
    ReentrantCall,

    // Account validation
    #[msg("Mint does not match the input side of the pool")]
    MintMismatch,

    #[msg("Reward mint authority must be the rewards ledger")]
    InvalidRewardMint,

    // Admin operations
    #[msg("No pending admin transfer")]
    NoPendingAdminTransfer,
}
