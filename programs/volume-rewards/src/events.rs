use anchor_lang::prelude::*;

// ══════════════════════════════════════════════════════════════════════════════
// INITIALIZATION EVENTS
// ══════════════════════════════════════════════════════════════════════════════

/// Emitted when the interceptor state is initialized
#[event]
pub struct InterceptorInitialized {
    pub admin: Pubkey,
    pub venue: Pubkey,
    pub fee_collector: Pubkey,
    pub timestamp: i64,
}

/// Emitted when the rewards ledger is initialized
#[event]
pub struct LedgerInitialized {
    pub admin: Pubkey,
    pub reward_mint: Pubkey,
    pub timestamp: i64,
}

// ══════════════════════════════════════════════════════════════════════════════
// TRADE EVENTS
// ══════════════════════════════════════════════════════════════════════════════

/// Emitted when a trade adds volume for its trader
#[event]
pub struct VolumeUpdated {
    pub trader: Pubkey,
    pub currency: Pubkey,
    pub amount: u64,
    pub user_volume: u128,
    pub total_volume: u128,
    pub timestamp: i64,
}

/// Emitted when the extra fee reaches the collector
#[event]
pub struct FeeCollected {
    pub trader: Pubkey,
    pub currency: Pubkey,
    pub collector: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

// ══════════════════════════════════════════════════════════════════════════════
// LEDGER EVENTS
// ══════════════════════════════════════════════════════════════════════════════

/// Emitted when the admin credits a trader
#[event]
pub struct CreditEarned {
    pub trader: Pubkey,
    pub amount: u64,
    pub pending: u64,
    pub timestamp: i64,
}

/// Emitted when a holder realizes pending credit as reward tokens
#[event]
pub struct RewardsClaimed {
    pub holder: Pubkey,
    pub amount: u64,
    pub total_claimed: u64,
    pub timestamp: i64,
}

/// Emitted when the admin reports collected fees to the ledger
#[event]
pub struct FeesRecorded {
    pub amount: u64,
    pub total_fees_recorded: u64,
    pub timestamp: i64,
}

// ══════════════════════════════════════════════════════════════════════════════
// ADMIN EVENTS
// ══════════════════════════════════════════════════════════════════════════════

#[event]
pub struct FeeCollectorUpdated {
    pub old_collector: Pubkey,
    pub new_collector: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct VenueUpdated {
    pub old_venue: Pubkey,
    pub new_venue: Pubkey,
    pub timestamp: i64,
}

/// Emitted when an admin handoff is proposed (step 1)
#[event]
pub struct AdminTransferProposed {
    pub component: Pubkey,
    pub current_admin: Pubkey,
    pub proposed_admin: Pubkey,
    pub timestamp: i64,
}

/// Emitted when the proposed admin accepts (step 2)
#[event]
pub struct AdminTransferred {
    pub component: Pubkey,
    pub old_admin: Pubkey,
    pub new_admin: Pubkey,
    pub timestamp: i64,
}
