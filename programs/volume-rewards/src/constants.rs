// ══════════════════════════════════════════════════════════════════════════════
// PDA SEEDS
// ══════════════════════════════════════════════════════════════════════════════

/// Interceptor configuration and aggregate volume
pub const INTERCEPTOR_STATE_SEED: &[u8] = b"interceptor_v1";

/// Interceptor fee vault authority (signs the forward leg of the fee transfer)
pub const FEE_VAULT_AUTHORITY_SEED: &[u8] = b"fee_vault_auth_v1";

/// Per-trader volume: ["user_volume_v1", trader]
pub const USER_VOLUME_SEED: &[u8] = b"user_volume_v1";

/// Rewards ledger (also the reward mint authority)
pub const REWARDS_LEDGER_SEED: &[u8] = b"rewards_ledger_v1";

/// Per-holder credit: ["reward_account_v1", holder]
pub const REWARD_ACCOUNT_SEED: &[u8] = b"reward_account_v1";

// ══════════════════════════════════════════════════════════════════════════════
// FEE PARAMETERS
// ══════════════════════════════════════════════════════════════════════════════

/// Extra fee numerator: 10 bps = 0.1% of the exact-input amount
pub const FEE_RATE_NUMERATOR: u64 = 10;

/// Basis point denominator
pub const FEE_RATE_DENOMINATOR: u64 = 10_000;

// The fee must be a fraction in [0, 1)
const _: () = assert!(FEE_RATE_DENOMINATOR > 0 && FEE_RATE_NUMERATOR < FEE_RATE_DENOMINATOR);

// ══════════════════════════════════════════════════════════════════════════════
// VENUE CALL CONTRACT
// ══════════════════════════════════════════════════════════════════════════════

/// Success selector returned to the venue: sha256("global:before_swap")[..8]
pub const BEFORE_SWAP_SELECTOR: [u8; 8] = [227, 59, 240, 68, 164, 9, 29, 254];

/// "No delta" sentinel: the interceptor never changes swap amounts
pub const ZERO_DELTA: i64 = 0;

/// Dynamic LP fee override sentinel meaning "unchanged"
pub const LP_FEE_UNCHANGED: u32 = 0;
