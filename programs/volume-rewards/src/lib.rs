use anchor_lang::prelude::*;

pub mod constants;
pub mod contexts;
pub mod errors;
pub mod events;
pub mod helpers;
pub mod state;

#[cfg(test)]
mod formal_verification;

pub use constants::*;
pub use contexts::*;
pub use errors::ErrorCode;
pub use events::*;
pub use state::*;

use helpers::auth::{is_null, Administered};
use helpers::cpi::{collect_swap_fee, mint_reward};
use helpers::math::format_tokens;

declare_id!("A362QVyn8ZgH4vChqddWrDrPVA1k2EPFaBfWgqiQfQ5E");

#[program]
pub mod volume_rewards {
    use super::*;

    // ══════════════════════════════════════════════════════════════════════════
    // INTERCEPTOR
    // ══════════════════════════════════════════════════════════════════════════

    pub fn initialize_interceptor(
        ctx: Context<InitializeInterceptor>,
        venue: Pubkey,
        fee_collector: Pubkey,
    ) -> Result<()> {
        require!(!is_null(&venue), ErrorCode::InvalidArgument);
        require!(!is_null(&fee_collector), ErrorCode::InvalidFeeCollector);

        let state = &mut ctx.accounts.interceptor_state;
        let clock = Clock::get()?;

        state.admin = ctx.accounts.admin.key();
        state.pending_admin = None;
        state.venue = venue;
        state.fee_collector = fee_collector;
        state.total_volume = 0;
        state.total_fees_levied = 0;
        state.trade_count = 0;
        state.initialized_at = clock.unix_timestamp;
        state.bump = ctx.bumps.interceptor_state;
        state.fee_vault_authority_bump = ctx.bumps.fee_vault_authority;
        state.locked = false;

        emit!(InterceptorInitialized {
            admin: state.admin,
            venue,
            fee_collector,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }

    /// Called by the venue before every swap. Levies the extra fee on
    /// exact-input trades, records the trader's volume and hands the swap
    /// back unchanged.
    pub fn before_swap(
        ctx: Context<BeforeSwap>,
        pool_key: PoolKey,
        params: SwapParams,
        _hook_data: Vec<u8>,
    ) -> Result<BeforeSwapReturn> {
        let clock = Clock::get()?;
        let trader = ctx.accounts.trader.key();
        let currency = pool_key.input_currency(params.zero_for_one);

        let accounts = &mut *ctx.accounts;
        if is_null(&accounts.user_volume.trader) {
            accounts.user_volume.bump = ctx.bumps.user_volume;
        }

        let vault_bump = [accounts.interceptor_state.fee_vault_authority_bump];
        let vault_seeds: &[&[u8]] = &[FEE_VAULT_AUTHORITY_SEED, &vault_bump];
        let token_program = &accounts.token_program;
        let fee_mint = &accounts.fee_mint;
        let trader_signer = &accounts.trader;
        let trader_token_account = &accounts.trader_token_account;
        let fee_vault_authority = &accounts.fee_vault_authority;
        let fee_vault = &mut accounts.fee_vault;
        let collector_token_account = &mut accounts.collector_token_account;

        // Aggregates are persisted and the scope held before any value moves
        let receipt = InterceptorState::process_trade(
            &mut accounts.interceptor_state,
            &mut accounts.user_volume,
            trader,
            params.amount_specified,
            clock.unix_timestamp,
            clock.slot,
            |state, user| {
                state.exit(&crate::ID)?;
                user.exit(&crate::ID)
            },
            |fee| {
                collect_swap_fee(
                    token_program,
                    fee_mint,
                    trader_signer,
                    trader_token_account,
                    fee_vault_authority,
                    fee_vault,
                    collector_token_account,
                    fee,
                    vault_seeds,
                )
            },
        )?;

        let state = &accounts.interceptor_state;

        if receipt.volume > 0 {
            emit!(VolumeUpdated {
                trader,
                currency,
                amount: receipt.volume,
                user_volume: accounts.user_volume.volume,
                total_volume: state.total_volume,
                timestamp: clock.unix_timestamp,
            });
        }

        if receipt.extra_fee > 0 {
            msg!("Extra fee {} of {} forwarded to {}", receipt.extra_fee, currency, state.fee_collector);

            emit!(FeeCollected {
                trader,
                currency,
                collector: state.fee_collector,
                amount: receipt.extra_fee,
                timestamp: clock.unix_timestamp,
            });
        }

        #[cfg(feature = "verbose")]
        msg!("before_swap: pool fee={}, tick_spacing={}, amount={}", pool_key.fee, pool_key.tick_spacing, params.amount_specified);

        Ok(BeforeSwapReturn::unchanged())
    }

    pub fn update_fee_collector(ctx: Context<InterceptorAdmin>, new_collector: Pubkey) -> Result<()> {
        let state = &mut ctx.accounts.interceptor_state;
        let old_collector = state.set_fee_collector(new_collector)?;

        msg!("Fee collector: {} -> {}", old_collector, new_collector);

        emit!(FeeCollectorUpdated {
            old_collector,
            new_collector,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }

    pub fn update_venue(ctx: Context<InterceptorAdmin>, new_venue: Pubkey) -> Result<()> {
        let state = &mut ctx.accounts.interceptor_state;
        let old_venue = state.set_venue(new_venue)?;

        emit!(VenueUpdated {
            old_venue,
            new_venue,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }

    // Two-step admin transfer (step 1)
    pub fn propose_interceptor_admin(ctx: Context<InterceptorAdmin>, new_admin: Pubkey) -> Result<()> {
        let state = &mut ctx.accounts.interceptor_state;
        state.propose_admin(new_admin)?;

        emit!(AdminTransferProposed {
            component: state.key(),
            current_admin: state.admin,
            proposed_admin: new_admin,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }

    // Two-step admin transfer (step 2)
    pub fn accept_interceptor_admin(ctx: Context<AcceptInterceptorAdmin>) -> Result<()> {
        let state = &mut ctx.accounts.interceptor_state;
        let old_admin = state.accept_admin(&ctx.accounts.new_admin.key())?;

        emit!(AdminTransferred {
            component: state.key(),
            old_admin,
            new_admin: state.admin,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }

    // ══════════════════════════════════════════════════════════════════════════
    // LEDGER
    // ══════════════════════════════════════════════════════════════════════════

    pub fn initialize_ledger(ctx: Context<InitializeLedger>) -> Result<()> {
        let ledger = &mut ctx.accounts.rewards_ledger;
        let clock = Clock::get()?;

        ledger.admin = ctx.accounts.admin.key();
        ledger.pending_admin = None;
        ledger.reward_mint = ctx.accounts.reward_mint.key();
        ledger.total_fees_recorded = 0;
        ledger.total_credited = 0;
        ledger.total_claimed = 0;
        ledger.claims_count = 0;
        ledger.initialized_at = clock.unix_timestamp;
        ledger.bump = ctx.bumps.rewards_ledger;
        ledger.locked = false;

        emit!(LedgerInitialized {
            admin: ledger.admin,
            reward_mint: ledger.reward_mint,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }

    /// Admin-only credit issuance. The amount is computed off-chain (see
    /// preview_reward) and issued as a deliberate, separately signed act.
    pub fn credit(ctx: Context<Credit>, trader: Pubkey, amount: u64) -> Result<()> {
        let clock = Clock::get()?;

        if is_null(&ctx.accounts.reward_account.holder) {
            ctx.accounts.reward_account.bump = ctx.bumps.reward_account;
        }

        let pending = ctx.accounts.rewards_ledger.credit(
            &mut ctx.accounts.reward_account,
            trader,
            amount,
            clock.unix_timestamp,
            clock.slot,
        )?;

        emit!(CreditEarned {
            trader,
            amount,
            pending,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }

    /// Holder realizes all pending credit as reward tokens.
    ///
    /// The zeroed credit and the held ledger scope are persisted before the
    /// mint CPI, so anything re-entering during the mint sees nothing to claim.
    /// A never-credited holder reaches a fresh entry and fails NothingToClaim.
    pub fn claim(ctx: Context<Claim>) -> Result<()> {
        let clock = Clock::get()?;
        let accounts = &mut *ctx.accounts;
        let holder = accounts.holder.key();

        let ledger_bump = [accounts.rewards_ledger.bump];
        let ledger_seeds: &[&[u8]] = &[REWARDS_LEDGER_SEED, &ledger_bump];
        let token_program = &accounts.token_program;
        let reward_mint = &accounts.reward_mint;
        let holder_reward_account = &accounts.holder_reward_account;

        let amount = RewardsLedger::settle_claim(
            &mut accounts.rewards_ledger,
            &mut accounts.reward_account,
            clock.unix_timestamp,
            clock.slot,
            |ledger, reward_account| {
                reward_account.exit(&crate::ID)?;
                ledger.exit(&crate::ID)
            },
            |ledger, amount| {
                mint_reward(
                    token_program,
                    reward_mint,
                    holder_reward_account,
                    &ledger.to_account_info(),
                    amount,
                    ledger_seeds,
                )
            },
        )?;

        let (whole, fractional) = format_tokens(amount, reward_mint.decimals);
        msg!("Claimed {}.{} reward tokens for {}", whole, fractional, holder);

        emit!(RewardsClaimed {
            holder,
            amount,
            total_claimed: accounts.reward_account.total_claimed,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }

    /// Report fees into the ledger; feeds preview_reward only
    pub fn update_fees_collected(ctx: Context<LedgerAdmin>, amount: u64) -> Result<()> {
        let total_fees_recorded = ctx.accounts.rewards_ledger.record_fees(amount)?;

        emit!(FeesRecorded {
            amount,
            total_fees_recorded,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }

    pub fn propose_ledger_admin(ctx: Context<LedgerAdmin>, new_admin: Pubkey) -> Result<()> {
        let ledger = &mut ctx.accounts.rewards_ledger;
        ledger.propose_admin(new_admin)?;

        emit!(AdminTransferProposed {
            component: ledger.key(),
            current_admin: ledger.admin,
            proposed_admin: new_admin,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }

    pub fn accept_ledger_admin(ctx: Context<AcceptLedgerAdmin>) -> Result<()> {
        let ledger = &mut ctx.accounts.rewards_ledger;
        let old_admin = ledger.accept_admin(&ctx.accounts.new_admin.key())?;

        emit!(AdminTransferred {
            component: ledger.key(),
            old_admin,
            new_admin: ledger.admin,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }

    // ══════════════════════════════════════════════════════════════════════════
    // READ-ONLY VIEWS (returned via Anchor return data)
    // ══════════════════════════════════════════════════════════════════════════

    pub fn get_user_swap_volume(ctx: Context<ReadUserVolume>, _trader: Pubkey) -> Result<u128> {
        Ok(ctx.accounts.user_volume.as_ref().map_or(0, |v| v.volume))
    }

    pub fn get_claimable_rewards(ctx: Context<ReadClaimable>, _trader: Pubkey) -> Result<u64> {
        Ok(ctx.accounts.reward_account.as_ref().map_or(0, |r| r.earned_credit))
    }

    pub fn preview_reward(ctx: Context<PreviewReward>, _trader: Pubkey) -> Result<u64> {
        let user_volume = ctx.accounts.user_volume.as_ref().map_or(0, |v| v.volume);
        ctx.accounts
            .rewards_ledger
            .preview_reward(user_volume, ctx.accounts.interceptor_state.total_volume)
    }
}
