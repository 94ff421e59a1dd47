use anchor_lang::prelude::*;

/// Cumulative trade volume of one trader
///
/// Created on the trader's first trade and only ever increased by
/// `InterceptorState::record_trade`.
///
/// PDA Seeds: ["user_volume_v1", trader_pubkey]
#[account]
pub struct UserVolume {
    /// PDA bump seed
    pub bump: u8,

    /// The trader's wallet address
    pub trader: Pubkey,

    /// Lifetime exact-input volume (raw input-token units)
    pub volume: u128,

    /// Lifetime extra fees paid
    pub fees_paid: u64,

    /// Number of trades observed
    pub trade_count: u64,

    /// Timestamp of last modification
    pub last_update_timestamp: i64,

    /// Slot of last modification
    pub last_update_slot: u64,
}

impl UserVolume {
    /// Account size calculation:
    /// - bump: 1 byte
    /// - trader: 32 bytes (Pubkey)
    /// - volume: 16 bytes (u128)
    /// - fees_paid: 8 bytes (u64)
    /// - trade_count: 8 bytes (u64)
    /// - last_update_timestamp: 8 bytes (i64)
    /// - last_update_slot: 8 bytes (u64)
    /// Total: 81 bytes
    pub const LEN: usize = 1 + 32 + 16 + 8 + 8 + 8 + 8;
}
