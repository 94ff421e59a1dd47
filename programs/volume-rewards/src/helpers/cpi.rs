use anchor_lang::prelude::*;
use anchor_spl::token_interface::{
    self as token_interface, Mint, MintTo, TokenAccount, TokenInterface, TransferChecked,
};
use crate::errors::ErrorCode;
use crate::helpers::math::received_in_full;

/// Move the extra fee trader -> fee vault -> collector as one unit.
///
/// Both legs use transfer_checked and both recipients are reloaded to verify
/// they received the full amount. Any shortfall or CPI failure aborts the
/// instruction with TransferFailed, so no partial fee is ever captured.
///
/// The collector's baseline is read between the legs: when the collector
/// trades, its token account is also `trader_token_account` and leg 1 has
/// already debited it.
#[inline(never)]
#[allow(clippy::too_many_arguments)]
pub fn collect_swap_fee<'info>(
    token_program: &Interface<'info, TokenInterface>,
    fee_mint: &InterfaceAccount<'info, Mint>,
    trader: &Signer<'info>,
    trader_token_account: &InterfaceAccount<'info, TokenAccount>,
    fee_vault_authority: &AccountInfo<'info>,
    fee_vault: &mut InterfaceAccount<'info, TokenAccount>,
    collector_token_account: &mut InterfaceAccount<'info, TokenAccount>,
    amount: u64,
    vault_seeds: &[&[u8]],
) -> Result<()> {
    let vault_before = fee_vault.amount;

    // Leg 1: trader -> fee vault (trader signs)
    token_interface::transfer_checked(
        CpiContext::new(
            token_program.to_account_info(),
            TransferChecked {
                from: trader_token_account.to_account_info(),
                mint: fee_mint.to_account_info(),
                to: fee_vault.to_account_info(),
                authority: trader.to_account_info(),
            },
        ),
        amount,
        fee_mint.decimals,
    )
    .map_err(|_| error!(ErrorCode::TransferFailed))?;

    fee_vault.reload()?;
    require!(
        received_in_full(vault_before, fee_vault.amount, amount),
        ErrorCode::TransferFailed
    );

    collector_token_account.reload()?;
    let collector_before = collector_token_account.amount;

    // Leg 2: fee vault -> collector (vault authority PDA signs)
    token_interface::transfer_checked(
        CpiContext::new_with_signer(
            token_program.to_account_info(),
            TransferChecked {
                from: fee_vault.to_account_info(),
                mint: fee_mint.to_account_info(),
                to: collector_token_account.to_account_info(),
                authority: fee_vault_authority.to_account_info(),
            },
            &[vault_seeds],
        ),
        amount,
        fee_mint.decimals,
    )
    .map_err(|_| error!(ErrorCode::TransferFailed))?;

    collector_token_account.reload()?;
    require!(
        received_in_full(collector_before, collector_token_account.amount, amount),
        ErrorCode::TransferFailed
    );

    #[cfg(feature = "verbose")]
    msg!("collect_swap_fee: vault {} -> {}, collector {} -> {}", vault_before, fee_vault.amount, collector_before, collector_token_account.amount);

    Ok(())
}

/// Mint claimed rewards to the holder (rewards ledger PDA signs as mint authority)
#[inline(never)]
pub fn mint_reward<'info>(
    token_program: &Interface<'info, TokenInterface>,
    reward_mint: &InterfaceAccount<'info, Mint>,
    holder_reward_account: &InterfaceAccount<'info, TokenAccount>,
    ledger: &AccountInfo<'info>,
    amount: u64,
    ledger_seeds: &[&[u8]],
) -> Result<()> {
    token_interface::mint_to(
        CpiContext::new_with_signer(
            token_program.to_account_info(),
            MintTo {
                mint: reward_mint.to_account_info(),
                to: holder_reward_account.to_account_info(),
                authority: ledger.clone(),
            },
            &[ledger_seeds],
        ),
        amount,
    )
    .map_err(|_| error!(ErrorCode::TransferFailed))
}
