use anchor_lang::prelude::*;
use crate::errors::ErrorCode;
use crate::constants::*;

/// Extra fee levied on a trade
/// Formula: extra_fee = floor(amount_specified * FEE_RATE_NUMERATOR / FEE_RATE_DENOMINATOR)
///
/// Only exact-input trades (positive amount) carry a fee basis. Exact-output
/// and zero-amount trades are charged nothing.
pub fn compute_extra_fee(amount_specified: i64) -> u64 {
    if amount_specified <= 0 {
        return 0;
    }

    // i64::MAX * u64::MAX < u128::MAX, so the product cannot overflow
    let fee = (amount_specified as u128) * (FEE_RATE_NUMERATOR as u128)
        / (FEE_RATE_DENOMINATOR as u128);

    // fee <= amount_specified < u64::MAX
    fee as u64
}

/// Volume a trade contributes, using the same signed-amount rule as the fee
pub fn volume_contribution(amount_specified: i64) -> u64 {
    if amount_specified > 0 {
        amount_specified as u64
    } else {
        0
    }
}

/// Proportional share of recorded fees owed to a trader
/// Formula: user_volume * total_fees / total_volume (floor)
///
/// Returns 0 when either volume is zero so there is never a division by zero.
pub fn proportional_share(user_volume: u128, total_fees: u64, total_volume: u128) -> Result<u64> {
    if user_volume == 0 || total_volume == 0 {
        return Ok(0);
    }

    let numerator = user_volume
        .checked_mul(total_fees as u128)
        .ok_or(ErrorCode::MathOverflow)?;
    let share = numerator / total_volume;

    #[cfg(feature = "verbose")]
    msg!("proportional_share: user={}, fees={}, total={}, share={}", user_volume, total_fees, total_volume, share);

    Ok(u64::try_from(share).map_err(|_| ErrorCode::MathOverflow)?)
}

/// True when a balance read after one transfer leg shows the full amount
/// arrived since the read taken just before that leg
pub fn received_in_full(before: u64, after: u64, amount: u64) -> bool {
    before
        .checked_add(amount)
        .map_or(false, |expected| after >= expected)
}

/// Format token amount with decimals for readable logs
pub fn format_tokens(amount: u64, decimals: u8) -> (u64, u64) {
    let scale = 10u64.saturating_pow(decimals as u32);
    (amount / scale, amount % scale)
}
