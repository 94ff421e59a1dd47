// ============================================================================
// FORMAL PROPERTIES & INVARIANT TESTS
// ============================================================================
//
// Run with: cargo test --lib formal_verification
//
// This module implements:
// 1. Fee properties over deterministic input grids
// 2. Volume conservation across generated trade sequences
// 3. Reward share bounds
// 4. Credit state machine and exactly-once claims
// ============================================================================

#[cfg(test)]
mod formal_tests {
    use crate::constants::*;
    use crate::helpers::math::*;
    use crate::state::*;
    use anchor_lang::prelude::*;

    /// Deterministic linear congruential generator for reproducible sequences
    struct Lcg(u64);

    impl Lcg {
        fn next(&mut self) -> u64 {
            self.0 = self
                .0
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            self.0 >> 33
        }
    }

    fn key(seed: u8) -> Pubkey {
        Pubkey::new_from_array([seed; 32])
    }

    fn interceptor() -> InterceptorState {
        InterceptorState {
            admin: key(1),
            pending_admin: None,
            venue: key(2),
            fee_collector: key(3),
            total_volume: 0,
            total_fees_levied: 0,
            trade_count: 0,
            initialized_at: 0,
            bump: 255,
            fee_vault_authority_bump: 254,
            locked: false,
            _reserved: [0; 32],
        }
    }

    fn volume_for(trader: Pubkey) -> UserVolume {
        UserVolume {
            bump: 0,
            trader,
            volume: 0,
            fees_paid: 0,
            trade_count: 0,
            last_update_timestamp: 0,
            last_update_slot: 0,
        }
    }

    fn amount_grid() -> Vec<i64> {
        let mut grid = vec![
            i64::MIN, -1_000_000_000, -1, 0, 1, 9, 999, 1_000, 1_001, 9_999,
            10_000, 10_001, 123_456_789, 1_000_000_000_000, i64::MAX - 1, i64::MAX,
        ];
        let mut rng = Lcg(7);
        for _ in 0..200 {
            grid.push(rng.next() as i64 - (1 << 30));
        }
        grid
    }

    // ========================================================================
    // SECTION 1: FEE PROPERTIES
    // ========================================================================

    mod fee_properties {
        use super::*;

        /// PROP-1: No fee and no volume without an exact-input amount
        #[test]
        fn prop1_non_positive_amounts_are_free() {
            for amount in amount_grid().into_iter().filter(|a| *a <= 0) {
                assert_eq!(compute_extra_fee(amount), 0, "fee for {}", amount);
                assert_eq!(volume_contribution(amount), 0, "volume for {}", amount);
            }
        }

        /// PROP-2: fee == floor(amount * num / den), and fee < amount
        #[test]
        fn prop2_fee_is_exact_floor() {
            for amount in amount_grid().into_iter().filter(|a| *a > 0) {
                let fee = compute_extra_fee(amount) as u128;
                let scaled = amount as u128 * FEE_RATE_NUMERATOR as u128;
                let den = FEE_RATE_DENOMINATOR as u128;

                assert!(fee * den <= scaled, "fee too high for {}", amount);
                assert!((fee + 1) * den > scaled, "fee too low for {}", amount);
                assert!(fee < amount as u128);
                assert_eq!(volume_contribution(amount), amount as u64);
            }
        }

        /// PROP-3: Fee is monotone in the amount
        #[test]
        fn prop3_fee_monotone() {
            let mut amounts: Vec<i64> = amount_grid();
            amounts.sort_unstable();
            for pair in amounts.windows(2) {
                assert!(compute_extra_fee(pair[0]) <= compute_extra_fee(pair[1]));
            }
        }
    }

    // ========================================================================
    // SECTION 2: VOLUME CONSERVATION
    // ========================================================================

    mod volume_conservation {
        use super::*;

        /// INV-1: total_volume == sum(user volume) after every trade
        /// INV-2: total_fees_levied == sum(fees_paid) after every trade
        #[test]
        fn inv1_inv2_aggregates_match_per_trader_sums() {
            let mut state = interceptor();
            let mut traders: Vec<UserVolume> = (10..18).map(|s| volume_for(key(s))).collect();
            let mut rng = Lcg(42);

            for step in 0..2_000u64 {
                let idx = (rng.next() % traders.len() as u64) as usize;
                let amount = (rng.next() % 20_000_000) as i64 - 5_000_000;
                let trader = traders[idx].trader;

                let before = traders[idx].volume;
                let receipt = state
                    .record_trade(&mut traders[idx], trader, amount, step as i64, step)
                    .unwrap();

                assert_eq!(traders[idx].volume - before, receipt.volume as u128);

                let volume_sum: u128 = traders.iter().map(|t| t.volume).sum();
                let fee_sum: u64 = traders.iter().map(|t| t.fees_paid).sum();
                assert_eq!(state.total_volume, volume_sum, "INV-1 violated at step {}", step);
                assert_eq!(state.total_fees_levied, fee_sum, "INV-2 violated at step {}", step);
            }

            assert_eq!(state.trade_count, 2_000);
        }

        /// INV-3: Volume never decreases
        #[test]
        fn inv3_volume_monotone() {
            let mut state = interceptor();
            let mut user = volume_for(key(10));
            let mut last = 0u128;

            for amount in amount_grid() {
                state.record_trade(&mut user, key(10), amount, 0, 0).unwrap();
                assert!(user.volume >= last);
                last = user.volume;
            }
        }
    }

    // ========================================================================
    // SECTION 3: REWARD SHARE BOUNDS
    // ========================================================================

    mod share_bounds {
        use super::*;

        /// INV-4: Shares never exceed recorded fees and lose < 1 unit per trader
        #[test]
        fn inv4_shares_bounded_by_fees() {
            let mut rng = Lcg(99);

            for _ in 0..200 {
                let volumes: Vec<u128> = (0..6).map(|_| (rng.next() % 1_000_000) as u128).collect();
                let total: u128 = volumes.iter().sum();
                let fees = rng.next() % 10_000_000;

                let shares: Vec<u64> = volumes
                    .iter()
                    .map(|v| proportional_share(*v, fees, total).unwrap())
                    .collect();
                let paid: u64 = shares.iter().sum();

                if total == 0 {
                    assert_eq!(paid, 0);
                    continue;
                }
                assert!(paid <= fees, "shares {} exceed fees {}", paid, fees);
                assert!(fees - paid < volumes.len() as u64, "rounding dust too large");
            }
        }

        /// INV-5: Zero volume on either side never divides
        #[test]
        fn inv5_zero_guards() {
            for fees in [0u64, 1, u64::MAX] {
                assert_eq!(proportional_share(0, fees, 0).unwrap(), 0);
                assert_eq!(proportional_share(5, fees, 0).unwrap(), 0);
                assert_eq!(proportional_share(0, fees, 5).unwrap(), 0);
            }
        }
    }

    // ========================================================================
    // SECTION 4: CREDIT STATE MACHINE
    // ========================================================================

    mod credit_state_machine {
        use super::*;

        fn ledger() -> RewardsLedger {
            RewardsLedger {
                admin: key(1),
                pending_admin: None,
                reward_mint: key(99),
                total_fees_recorded: 0,
                total_credited: 0,
                total_claimed: 0,
                claims_count: 0,
                initialized_at: 0,
                bump: 255,
                locked: false,
                _reserved: [0; 32],
            }
        }

        fn account() -> RewardAccount {
            RewardAccount {
                bump: 0,
                holder: Pubkey::default(),
                earned_credit: 0,
                total_credited: 0,
                total_claimed: 0,
                last_update_timestamp: 0,
                last_update_slot: 0,
            }
        }

        /// INV-6: credited == claimed + pending, and each credited unit is
        /// claimed at most once, across random credit/claim interleavings
        #[test]
        fn inv6_exactly_once_settlement() {
            let mut ledger = ledger();
            let mut holder = account();
            let mut rng = Lcg(2024);
            let mut minted = 0u64;

            for step in 0..1_000u64 {
                let status_before = holder.status();

                if rng.next() % 3 == 0 {
                    let amount = rng.next() % 5_000 + 1;
                    ledger.credit(&mut holder, key(10), amount, step as i64, step).unwrap();
                    assert_eq!(holder.status(), CreditStatus::Pending);
                } else {
                    match ledger.begin_claim(&mut holder, step as i64, step) {
                        Ok(amount) => {
                            assert_eq!(status_before, CreditStatus::Pending);
                            minted += amount;
                            ledger.finish_claim();
                        }
                        Err(_) => assert_eq!(status_before, CreditStatus::Settled),
                    }
                    assert_eq!(holder.status(), CreditStatus::Settled);
                }

                assert_eq!(holder.total_credited, holder.total_claimed + holder.earned_credit);
                assert_eq!(ledger.total_claimed, minted);
                assert!(!ledger.locked);
            }
        }
    }
}
