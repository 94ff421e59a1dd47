use anchor_lang::prelude::*;

/// Claimable credit of one holder
///
/// `earned_credit` is incremented by the admin's `credit` call and zeroed,
/// exactly once per cycle, by the holder's `claim`.
///
/// PDA Seeds: ["reward_account_v1", holder_pubkey]
#[account]
pub struct RewardAccount {
    /// PDA bump seed
    pub bump: u8,

    /// The holder's wallet address
    pub holder: Pubkey,

    /// Pending credit awaiting claim
    pub earned_credit: u64,

    /// Lifetime credit received
    pub total_credited: u64,

    /// Lifetime reward tokens minted to this holder
    pub total_claimed: u64,

    /// Timestamp of last modification
    pub last_update_timestamp: i64,

    /// Slot of last modification
    pub last_update_slot: u64,
}

/// Lifecycle of a credit entry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CreditStatus {
    /// credit > 0, awaiting claim
    Pending,
    /// credit == 0
    Settled,
}

impl RewardAccount {
    /// Account size calculation:
    /// - bump: 1 byte
    /// - holder: 32 bytes (Pubkey)
    /// - earned_credit: 8 bytes (u64)
    /// - total_credited: 8 bytes (u64)
    /// - total_claimed: 8 bytes (u64)
    /// - last_update_timestamp: 8 bytes (i64)
    /// - last_update_slot: 8 bytes (u64)
    /// Total: 73 bytes
    pub const LEN: usize = 1 + 32 + 8 + 8 + 8 + 8 + 8;

    pub fn status(&self) -> CreditStatus {
        if self.earned_credit > 0 {
            CreditStatus::Pending
        } else {
            CreditStatus::Settled
        }
    }
}
