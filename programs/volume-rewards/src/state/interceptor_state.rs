use anchor_lang::prelude::*;
use std::ops::DerefMut;
use crate::errors::ErrorCode;
use crate::helpers::auth::is_null;
use crate::helpers::guard::NonReentrant;
use crate::helpers::math::{compute_extra_fee, volume_contribution};
use super::UserVolume;

/// Fee/volume interceptor configuration and aggregates
///
/// Invariant: `total_volume` equals the sum of every `UserVolume::volume`.
/// Only one InterceptorState account exists per program instance.
///
/// PDA Seeds: ["interceptor_v1"]
#[account]
pub struct InterceptorState {
    /// Current admin authority
    pub admin: Pubkey,

    /// Two-step admin transfer: proposed new admin
    pub pending_admin: Option<Pubkey>,

    /// Swap venue identity allowed to call before_swap
    pub venue: Pubkey,

    /// Recipient of the extra fee (never the null key)
    pub fee_collector: Pubkey,

    /// Sum of all traders' volume
    pub total_volume: u128,

    /// Total extra fees forwarded to the collector
    pub total_fees_levied: u64,

    /// Number of trades observed
    pub trade_count: u64,

    /// Timestamp when the interceptor was initialized
    pub initialized_at: i64,

    /// PDA bump for this account
    pub bump: u8,

    /// PDA bump for the fee vault authority
    pub fee_vault_authority_bump: u8,

    /// Held while the fee transfers run
    pub locked: bool,

    /// Reserved for future use
    pub _reserved: [u8; 32],
}

/// Outcome of recording one trade
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TradeReceipt {
    pub extra_fee: u64,
    pub volume: u64,
}

impl InterceptorState {
    /// Account size calculation:
    /// - 3 Pubkeys: 32 * 3 = 96 bytes (admin, venue, fee_collector)
    /// - 1 Option<Pubkey>: 33 bytes (pending_admin)
    /// - 1 u128: 16 bytes (total_volume)
    /// - 3 u64/i64: 8 * 3 = 24 bytes (total_fees_levied, trade_count, initialized_at)
    /// - 3 u8/bool: 3 bytes (bump, fee_vault_authority_bump, locked)
    /// - _reserved: 32 bytes
    /// Total: 96 + 33 + 16 + 24 + 3 + 32 = 204 bytes
    pub const LEN: usize = 32 * 3 + 33 + 16 + 8 * 3 + 3 + 32;

    /// Apply one trade's volume and fee to the trader and the aggregates.
    ///
    /// Rejected with ReentrantCall while a fee transfer holds the scope,
    /// whatever the amount. All sums are computed before any field is
    /// written, so a rejected trade leaves both accounts untouched.
    pub fn record_trade(
        &mut self,
        user: &mut UserVolume,
        trader: Pubkey,
        amount_specified: i64,
        timestamp: i64,
        slot: u64,
    ) -> Result<TradeReceipt> {
        require!(!self.locked, ErrorCode::ReentrantCall);
        require!(!is_null(&trader), ErrorCode::InvalidArgument);
        if !is_null(&user.trader) {
            require_keys_eq!(user.trader, trader, ErrorCode::InvalidArgument);
        }

        let extra_fee = compute_extra_fee(amount_specified);
        let volume = volume_contribution(amount_specified);

        let user_volume = user
            .volume
            .checked_add(volume as u128)
            .ok_or(ErrorCode::MathOverflow)?;
        let total_volume = self
            .total_volume
            .checked_add(volume as u128)
            .ok_or(ErrorCode::MathOverflow)?;
        let fees_paid = user
            .fees_paid
            .checked_add(extra_fee)
            .ok_or(ErrorCode::MathOverflow)?;
        let total_fees_levied = self
            .total_fees_levied
            .checked_add(extra_fee)
            .ok_or(ErrorCode::MathOverflow)?;

        user.trader = trader;
        user.volume = user_volume;
        user.fees_paid = fees_paid;
        user.trade_count = user.trade_count.saturating_add(1);
        user.last_update_timestamp = timestamp;
        user.last_update_slot = slot;

        self.total_volume = total_volume;
        self.total_fees_levied = total_fees_levied;
        self.trade_count = self.trade_count.saturating_add(1);

        #[cfg(feature = "verbose")]
        msg!("record_trade: amount={}, fee={}, user_volume={}, total_volume={}", amount_specified, extra_fee, user_volume, total_volume);

        Ok(TradeReceipt { extra_fee, volume })
    }

    /// Before-swap state flow around the fee transfers.
    ///
    /// Records the trade, then for a nonzero fee enters the scope, persists
    /// both accounts through `persist` and runs `collect` with the fee. The
    /// scope is left only once `collect` has returned, so nothing that
    /// re-enters during the transfers can record a trade.
    #[allow(clippy::too_many_arguments)]
    pub fn process_trade<S, U, P, C>(
        state: &mut S,
        user: &mut U,
        trader: Pubkey,
        amount_specified: i64,
        timestamp: i64,
        slot: u64,
        persist: P,
        collect: C,
    ) -> Result<TradeReceipt>
    where
        S: DerefMut<Target = InterceptorState>,
        U: DerefMut<Target = UserVolume>,
        P: FnOnce(&mut S, &mut U) -> Result<()>,
        C: FnOnce(u64) -> Result<()>,
    {
        let receipt = state.record_trade(&mut **user, trader, amount_specified, timestamp, slot)?;

        if receipt.extra_fee > 0 {
            state.enter_scope()?;
            persist(state, user)?;
            collect(receipt.extra_fee)?;
            state.leave_scope();
        }

        Ok(receipt)
    }

    /// Replace the fee collector; returns the previous one.
    /// The null key is rejected before the single write.
    pub fn set_fee_collector(&mut self, new_collector: Pubkey) -> Result<Pubkey> {
        require!(!is_null(&new_collector), ErrorCode::InvalidFeeCollector);
        let old_collector = self.fee_collector;
        self.fee_collector = new_collector;
        Ok(old_collector)
    }

    /// Replace the venue; returns the previous one
    pub fn set_venue(&mut self, new_venue: Pubkey) -> Result<Pubkey> {
        require!(!is_null(&new_venue), ErrorCode::InvalidArgument);
        let old_venue = self.venue;
        self.venue = new_venue;
        Ok(old_venue)
    }
}
