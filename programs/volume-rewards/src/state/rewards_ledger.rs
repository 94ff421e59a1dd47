use anchor_lang::prelude::*;
use std::ops::DerefMut;
use crate::errors::ErrorCode;
use crate::helpers::auth::is_null;
use crate::helpers::guard::NonReentrant;
use crate::helpers::math::proportional_share;
use super::RewardAccount;

/// Rewards ledger: credit issuance, claim settlement and reward supply
///
/// The ledger PDA is the mint authority of `reward_mint`. Reward supply only
/// grows through `claim`.
///
/// PDA Seeds: ["rewards_ledger_v1"]
#[account]
pub struct RewardsLedger {
    /// Current admin authority (sole credit issuer)
    pub admin: Pubkey,

    /// Two-step admin transfer: proposed new admin
    pub pending_admin: Option<Pubkey>,

    /// Reward token mint
    pub reward_mint: Pubkey,

    /// Fees reported by the admin, used by the reward preview
    pub total_fees_recorded: u64,

    /// Total credit ever issued
    pub total_credited: u64,

    /// Reward tokens minted through claims
    pub total_claimed: u64,

    /// Number of successful claims
    pub claims_count: u64,

    /// Timestamp when the ledger was initialized
    pub initialized_at: i64,

    /// PDA bump seed
    pub bump: u8,

    /// Held while a claim settles
    pub locked: bool,

    /// Reserved for future use
    pub _reserved: [u8; 32],
}

impl RewardsLedger {
    /// Account size calculation:
    /// - 2 Pubkeys: 32 * 2 = 64 bytes (admin, reward_mint)
    /// - 1 Option<Pubkey>: 33 bytes (pending_admin)
    /// - 5 u64/i64: 8 * 5 = 40 bytes (total_fees_recorded, total_credited,
    ///   total_claimed, claims_count, initialized_at)
    /// - 2 u8/bool: 2 bytes (bump, locked)
    /// - _reserved: 32 bytes
    /// Total: 64 + 33 + 40 + 2 + 32 = 171 bytes
    pub const LEN: usize = 32 * 2 + 33 + 8 * 5 + 2 + 32;

    /// Settled -> Pending (or Pending -> Pending). Returns the new pending credit.
    pub fn credit(
        &mut self,
        account: &mut RewardAccount,
        trader: Pubkey,
        amount: u64,
        timestamp: i64,
        slot: u64,
    ) -> Result<u64> {
        require!(!is_null(&trader), ErrorCode::InvalidArgument);
        require!(amount > 0, ErrorCode::InvalidArgument);
        if is_null(&account.holder) {
            account.holder = trader;
        }
        require_keys_eq!(account.holder, trader, ErrorCode::InvalidArgument);

        let pending = account
            .earned_credit
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;
        let account_credited = account
            .total_credited
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;
        let ledger_credited = self
            .total_credited
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;

        account.earned_credit = pending;
        account.total_credited = account_credited;
        account.last_update_timestamp = timestamp;
        account.last_update_slot = slot;
        self.total_credited = ledger_credited;

        Ok(pending)
    }

    /// Pending -> Settled, first half of a claim.
    ///
    /// Zeroes the holder's credit and enters the ledger scope. The caller must
    /// persist both accounts before moving value, then call `finish_claim`.
    /// A claim arriving while the credit is already zeroed fails with
    /// `NothingToClaim`, whether or not the scope is still held.
    pub fn begin_claim(
        &mut self,
        account: &mut RewardAccount,
        timestamp: i64,
        slot: u64,
    ) -> Result<u64> {
        let amount = account.earned_credit;
        require!(amount > 0, ErrorCode::NothingToClaim);

        let account_claimed = account
            .total_claimed
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;
        let ledger_claimed = self
            .total_claimed
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;

        self.enter_scope()?;

        account.earned_credit = 0;
        account.total_claimed = account_claimed;
        account.last_update_timestamp = timestamp;
        account.last_update_slot = slot;
        self.total_claimed = ledger_claimed;
        self.claims_count = self.claims_count.saturating_add(1);

        Ok(amount)
    }

    /// Second half of a claim, after the reward tokens moved
    pub fn finish_claim(&mut self) {
        self.leave_scope();
    }

    /// Claim settlement order: begin, persist, mint, finish.
    ///
    /// `persist` writes the zeroed credit and the held scope back to the
    /// accounts before `mint` moves any value. Returns the minted amount.
    pub fn settle_claim<L, A, P, M>(
        ledger: &mut L,
        account: &mut A,
        timestamp: i64,
        slot: u64,
        persist: P,
        mint: M,
    ) -> Result<u64>
    where
        L: DerefMut<Target = RewardsLedger>,
        A: DerefMut<Target = RewardAccount>,
        P: FnOnce(&mut L, &mut A) -> Result<()>,
        M: FnOnce(&L, u64) -> Result<()>,
    {
        let amount = ledger.begin_claim(&mut **account, timestamp, slot)?;
        persist(ledger, account)?;
        mint(ledger, amount)?;
        ledger.finish_claim();
        Ok(amount)
    }

    /// Add reported fees; returns the new total
    pub fn record_fees(&mut self, amount: u64) -> Result<u64> {
        require!(amount > 0, ErrorCode::InvalidArgument);
        self.total_fees_recorded = self
            .total_fees_recorded
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;
        Ok(self.total_fees_recorded)
    }

    /// Read-only share of recorded fees for the given volumes
    pub fn preview_reward(&self, user_volume: u128, total_volume: u128) -> Result<u64> {
        proportional_share(user_volume, self.total_fees_recorded, total_volume)
    }
}
