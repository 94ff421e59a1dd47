use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_option::COption;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{Mint, TokenAccount, TokenInterface},
};
use crate::constants::*;
use crate::errors::ErrorCode;
use crate::helpers::auth::{is_venue, may_claim, Administered};
use crate::state::*;

// ACCOUNTS - Instruction account validation structs

// ══════════════════════════════════════════════════════════════════════════════
// INTERCEPTOR
// ══════════════════════════════════════════════════════════════════════════════

#[derive(Accounts)]
pub struct InitializeInterceptor<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + InterceptorState::LEN,
        seeds = [INTERCEPTOR_STATE_SEED],
        bump
    )]
    pub interceptor_state: Account<'info, InterceptorState>,
    /// CHECK: PDA - owns the per-mint fee vaults
    #[account(seeds = [FEE_VAULT_AUTHORITY_SEED], bump)]
    pub fee_vault_authority: AccountInfo<'info>,
    #[account(mut)]
    pub admin: Signer<'info>,
    pub system_program: Program<'info, System>,
}

/// BeforeSwap - Venue-driven fee levy and volume update
///
/// SECURITY NOTES:
/// - venue_authority must sign and match interceptor_state.venue; any other
///   caller fails with Unauthorized before state is touched.
/// - A call arriving while the fee transfers hold the scope fails with
///   ReentrantCall, whatever the amount.
/// - fee_mint must be the input side of the pool for this trade direction.
/// - collector_token_account must be owned by the configured fee collector.
#[derive(Accounts)]
#[instruction(pool_key: PoolKey, params: SwapParams)]
pub struct BeforeSwap<'info> {
    #[account(mut, seeds = [INTERCEPTOR_STATE_SEED], bump = interceptor_state.bump)]
    pub interceptor_state: Account<'info, InterceptorState>,
    #[account(
        constraint = is_venue(&interceptor_state, &venue_authority.key()) @ ErrorCode::Unauthorized,
        constraint = !interceptor_state.locked @ ErrorCode::ReentrantCall
    )]
    pub venue_authority: Signer<'info>,
    #[account(mut)]
    pub trader: Signer<'info>,
    #[account(
        init_if_needed,
        payer = trader,
        space = 8 + UserVolume::LEN,
        seeds = [USER_VOLUME_SEED, trader.key().as_ref()],
        bump
    )]
    pub user_volume: Account<'info, UserVolume>,
    #[account(
        constraint = fee_mint.key() == pool_key.input_currency(params.zero_for_one) @ ErrorCode::MintMismatch,
        mint::token_program = token_program
    )]
    pub fee_mint: InterfaceAccount<'info, Mint>,
    #[account(
        mut,
        token::mint = fee_mint,
        token::authority = trader,
        token::token_program = token_program
    )]
    pub trader_token_account: InterfaceAccount<'info, TokenAccount>,
    /// CHECK: Fee vault authority PDA - signs the forward leg
    #[account(seeds = [FEE_VAULT_AUTHORITY_SEED], bump = interceptor_state.fee_vault_authority_bump)]
    pub fee_vault_authority: AccountInfo<'info>,
    #[account(
        init_if_needed,
        payer = trader,
        associated_token::mint = fee_mint,
        associated_token::authority = fee_vault_authority,
        associated_token::token_program = token_program
    )]
    pub fee_vault: InterfaceAccount<'info, TokenAccount>,
    #[account(
        mut,
        constraint = collector_token_account.mint == fee_mint.key() @ ErrorCode::MintMismatch,
        constraint = collector_token_account.owner == interceptor_state.fee_collector @ ErrorCode::InvalidFeeCollector
    )]
    pub collector_token_account: InterfaceAccount<'info, TokenAccount>,
    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct InterceptorAdmin<'info> {
    #[account(mut, seeds = [INTERCEPTOR_STATE_SEED], bump = interceptor_state.bump)]
    pub interceptor_state: Account<'info, InterceptorState>,
    #[account(constraint = interceptor_state.is_admin(&admin.key()) @ ErrorCode::Unauthorized)]
    pub admin: Signer<'info>,
}

/// Step 2 of the interceptor admin handoff, signed by the proposed admin
#[derive(Accounts)]
pub struct AcceptInterceptorAdmin<'info> {
    #[account(mut, seeds = [INTERCEPTOR_STATE_SEED], bump = interceptor_state.bump)]
    pub interceptor_state: Account<'info, InterceptorState>,
    pub new_admin: Signer<'info>,
}

// ══════════════════════════════════════════════════════════════════════════════
// LEDGER
// ══════════════════════════════════════════════════════════════════════════════

#[derive(Accounts)]
pub struct InitializeLedger<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + RewardsLedger::LEN,
        seeds = [REWARDS_LEDGER_SEED],
        bump
    )]
    pub rewards_ledger: Account<'info, RewardsLedger>,
    #[account(
        constraint = reward_mint.mint_authority == COption::Some(rewards_ledger.key()) @ ErrorCode::InvalidRewardMint
    )]
    pub reward_mint: InterfaceAccount<'info, Mint>,
    #[account(mut)]
    pub admin: Signer<'info>,
    pub system_program: Program<'info, System>,
}

/// Credit - Admin issues claimable credit to one trader
#[derive(Accounts)]
#[instruction(trader: Pubkey)]
pub struct Credit<'info> {
    #[account(mut, seeds = [REWARDS_LEDGER_SEED], bump = rewards_ledger.bump)]
    pub rewards_ledger: Account<'info, RewardsLedger>,
    #[account(
        init_if_needed,
        payer = admin,
        space = 8 + RewardAccount::LEN,
        seeds = [REWARD_ACCOUNT_SEED, trader.as_ref()],
        bump
    )]
    pub reward_account: Account<'info, RewardAccount>,
    #[account(mut, constraint = rewards_ledger.is_admin(&admin.key()) @ ErrorCode::Unauthorized)]
    pub admin: Signer<'info>,
    pub system_program: Program<'info, System>,
}

/// Claim - Holder converts pending credit into reward tokens
///
/// The reward account is derived from the signer and its recorded holder must
/// be the signer. A holder that was never credited gets a fresh empty entry
/// and fails with NothingToClaim (the transaction, and the account creation
/// with it, is rolled back).
#[derive(Accounts)]
pub struct Claim<'info> {
    #[account(
        mut,
        seeds = [REWARDS_LEDGER_SEED],
        bump = rewards_ledger.bump,
        has_one = reward_mint @ ErrorCode::InvalidRewardMint
    )]
    pub rewards_ledger: Account<'info, RewardsLedger>,
    #[account(
        init_if_needed,
        payer = holder,
        space = 8 + RewardAccount::LEN,
        seeds = [REWARD_ACCOUNT_SEED, holder.key().as_ref()],
        bump
    )]
    pub reward_account: Account<'info, RewardAccount>,
    #[account(mut, constraint = may_claim(&holder.key(), &reward_account) @ ErrorCode::Unauthorized)]
    pub holder: Signer<'info>,
    #[account(mut, mint::token_program = token_program)]
    pub reward_mint: InterfaceAccount<'info, Mint>,
    #[account(
        init_if_needed,
        payer = holder,
        associated_token::mint = reward_mint,
        associated_token::authority = holder,
        associated_token::token_program = token_program
    )]
    pub holder_reward_account: InterfaceAccount<'info, TokenAccount>,
    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct LedgerAdmin<'info> {
    #[account(mut, seeds = [REWARDS_LEDGER_SEED], bump = rewards_ledger.bump)]
    pub rewards_ledger: Account<'info, RewardsLedger>,
    #[account(constraint = rewards_ledger.is_admin(&admin.key()) @ ErrorCode::Unauthorized)]
    pub admin: Signer<'info>,
}

/// Step 2 of the ledger admin handoff, signed by the proposed admin
#[derive(Accounts)]
pub struct AcceptLedgerAdmin<'info> {
    #[account(mut, seeds = [REWARDS_LEDGER_SEED], bump = rewards_ledger.bump)]
    pub rewards_ledger: Account<'info, RewardsLedger>,
    pub new_admin: Signer<'info>,
}

// ══════════════════════════════════════════════════════════════════════════════
// READ-ONLY VIEWS
// ══════════════════════════════════════════════════════════════════════════════
// Per-trader accounts are optional: a trader without one reads as zero.

#[derive(Accounts)]
#[instruction(trader: Pubkey)]
pub struct ReadUserVolume<'info> {
    #[account(seeds = [USER_VOLUME_SEED, trader.as_ref()], bump)]
    pub user_volume: Option<Account<'info, UserVolume>>,
}

#[derive(Accounts)]
#[instruction(trader: Pubkey)]
pub struct ReadClaimable<'info> {
    #[account(seeds = [REWARD_ACCOUNT_SEED, trader.as_ref()], bump)]
    pub reward_account: Option<Account<'info, RewardAccount>>,
}

#[derive(Accounts)]
#[instruction(trader: Pubkey)]
pub struct PreviewReward<'info> {
    #[account(seeds = [INTERCEPTOR_STATE_SEED], bump = interceptor_state.bump)]
    pub interceptor_state: Account<'info, InterceptorState>,
    #[account(seeds = [REWARDS_LEDGER_SEED], bump = rewards_ledger.bump)]
    pub rewards_ledger: Account<'info, RewardsLedger>,
    #[account(seeds = [USER_VOLUME_SEED, trader.as_ref()], bump)]
    pub user_volume: Option<Account<'info, UserVolume>>,
}
