use anchor_lang::prelude::*;
use crate::constants::*;

/// Pool identity as passed by the venue
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct PoolKey {
    /// Lower-sorted currency of the pair
    pub currency0: Pubkey,
    /// Higher-sorted currency of the pair
    pub currency1: Pubkey,
    /// Pool LP fee in hundredths of a bip
    pub fee: u32,
    pub tick_spacing: i32,
    /// Hook program attached to the pool
    pub hooks: Pubkey,
}

impl PoolKey {
    /// Currency the trader provides: currency0 when selling 0 for 1
    pub fn input_currency(&self, zero_for_one: bool) -> Pubkey {
        if zero_for_one {
            self.currency0
        } else {
            self.currency1
        }
    }
}

/// Swap request as seen by the interceptor
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct SwapParams {
    pub zero_for_one: bool,
    /// Positive: exact input the trader provides. Zero or negative: exact output.
    pub amount_specified: i64,
    pub sqrt_price_limit_x64: u128,
}

/// Triple handed back to the venue
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct BeforeSwapReturn {
    pub selector: [u8; 8],
    pub delta: i64,
    pub lp_fee_override: u32,
}

impl BeforeSwapReturn {
    /// Swap proceeds with its original amounts and LP fee
    pub fn unchanged() -> Self {
        Self {
            selector: BEFORE_SWAP_SELECTOR,
            delta: ZERO_DELTA,
            lp_fee_override: LP_FEE_UNCHANGED,
        }
    }
}
