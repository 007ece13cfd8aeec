#[cfg(test)]
mod tests {
    use anchor_lang::prelude::*;

    use crate::error::IncentiveError;
    use crate::state::*;
    use crate::test::fixtures::*;
    use crate::utils::*;

    struct Scenario {
        distribution: Distribution,
        user: Pubkey,
    }

    fn scenario() -> Scenario {
        Scenario {
            distribution: scenario_distribution(
                Pubkey::new_unique(),
                Pubkey::new_unique(),
                Pubkey::new_unique(),
            ),
            user: Pubkey::new_unique(),
        }
    }

    const VK_HASH: [u8; 32] = [7u8; 32];

    fn authorized_key() -> VerificationKey {
        VerificationKey {
            vk_hash: VK_HASH,
            authorized: true,
            bump: 255,
        }
    }

    fn settle(
        distribution: &Distribution,
        record: &mut CumulativeClaim,
        payload: &[u8],
        recipient: &Pubkey,
    ) -> std::result::Result<u64, IncentiveError> {
        let key = authorized_key();
        record.settle_from_output(
            Some(&key),
            &VK_HASH,
            payload,
            distribution,
            BLOCKS_PER_EPOCH,
            recipient,
        )?;
        Ok(record.amount)
    }

    #[test]
    fn test_scenario_settles_once() {
        println!("=== Testing settle-once scenario ===");
        let s = scenario();
        let payload = matching_output(&s.distribution, &s.user, 1_200, 1_700, 500).encode();
        let mut record = CumulativeClaim::default();

        let paid = settle(&s.distribution, &mut record, &payload, &s.user).unwrap();
        assert_eq!(paid, 500);
        assert_eq!(record.amount, 500);
        assert_eq!(record.start_block, 1_200);
        assert_eq!(record.end_block, 1_700);
        assert!(record.is_claimed());

        // Replaying the same payload is refused and leaves the record alone
        assert!(matches!(
            settle(&s.distribution, &mut record, &payload, &s.user),
            Err(IncentiveError::AlreadyClaimed)
        ));

        // So is a different, otherwise valid window for the same triple
        let other = matching_output(&s.distribution, &s.user, 1_000, 2_000, 990).encode();
        assert!(matches!(
            settle(&s.distribution, &mut record, &other, &s.user),
            Err(IncentiveError::AlreadyClaimed)
        ));
        assert_eq!(record.amount, 500);
        assert_eq!(record.end_block, 1_700);
    }

    #[test]
    fn test_full_window_accepted() {
        let s = scenario();
        let output = matching_output(&s.distribution, &s.user, 1_000, 2_000, 990);
        assert_eq!(
            s.distribution.check_claim(&output, BLOCKS_PER_EPOCH, &s.user).unwrap(),
            990
        );
    }

    #[test]
    fn test_window_outside_distribution_rejected() {
        let s = scenario();
        let windows = [(900, 1_200), (1_900, 2_100), (500, 900), (2_000, 2_300), (900, 2_100)];

        for (start, end) in windows {
            let output = matching_output(&s.distribution, &s.user, start, end, 100);
            assert!(
                matches!(
                    s.distribution.check_claim(&output, BLOCKS_PER_EPOCH, &s.user),
                    Err(IncentiveError::ClaimWindowOutsideDistribution)
                ),
                "window {}..{} should be rejected",
                start,
                end
            );
        }
    }

    #[test]
    fn test_invalid_window_rejected() {
        let s = scenario();
        for (start, end) in [(1_500, 1_500), (1_600, 1_500), (1_000, 1_050)] {
            let output = matching_output(&s.distribution, &s.user, start, end, 100);
            assert!(matches!(
                s.distribution.check_claim(&output, BLOCKS_PER_EPOCH, &s.user),
                Err(IncentiveError::InvalidClaimWindow)
            ));
        }
    }

    #[test]
    fn test_parameter_mismatch_rejected() {
        let s = scenario();
        let base = matching_output(&s.distribution, &s.user, 1_000, 1_500, 100);

        let mut wrong_pool = base.clone();
        wrong_pool.pool = evm_address(&Pubkey::new_unique());

        let mut wrong_token = base.clone();
        wrong_token.reward_token = evm_address(&Pubkey::new_unique());

        let mut wrong_rate = base.clone();
        wrong_rate.amount_per_epoch = Uint248::from_u64(100);

        for output in [wrong_pool, wrong_token, wrong_rate] {
            assert!(matches!(
                s.distribution.check_claim(&output, BLOCKS_PER_EPOCH, &s.user),
                Err(IncentiveError::ParameterMismatch)
            ));
        }
    }

    #[test]
    fn test_zero_reward_rejected() {
        let s = scenario();
        let output = matching_output(&s.distribution, &s.user, 1_000, 1_500, 0);
        assert!(matches!(
            s.distribution.check_claim(&output, BLOCKS_PER_EPOCH, &s.user),
            Err(IncentiveError::ZeroReward)
        ));
    }

    #[test]
    fn test_unknown_distribution_rejected() {
        let s = scenario();
        let mut output = matching_output(&s.distribution, &s.user, 1_000, 1_500, 100);
        output.distribution_id = [0u8; 32];
        assert!(matches!(
            s.distribution.check_claim(&output, BLOCKS_PER_EPOCH, &s.user),
            Err(IncentiveError::UnknownDistribution)
        ));
    }

    #[test]
    fn test_recipient_must_match_user() {
        let s = scenario();
        let output = matching_output(&s.distribution, &s.user, 1_000, 1_500, 100);
        assert!(matches!(
            s.distribution.check_claim(&output, BLOCKS_PER_EPOCH, &Pubkey::new_unique()),
            Err(IncentiveError::RecipientMismatch)
        ));
    }

    #[test]
    fn test_reward_wider_than_u64_rejected() {
        let s = scenario();
        let mut output = matching_output(&s.distribution, &s.user, 1_000, 1_500, 100);
        output.total_amount.0[0] = 1;
        assert!(matches!(
            s.distribution.check_claim(&output, BLOCKS_PER_EPOCH, &s.user),
            Err(IncentiveError::ArithmeticOverflow)
        ));
    }

    #[test]
    fn test_short_payload_rejected_before_checks() {
        let s = scenario();
        let payload = matching_output(&s.distribution, &s.user, 1_000, 1_500, 100).encode();
        let mut record = CumulativeClaim::default();
        assert!(matches!(
            settle(&s.distribution, &mut record, &payload[..177], &s.user),
            Err(IncentiveError::MalformedProofOutput)
        ));
        assert!(!record.is_claimed());
    }

    #[test]
    fn test_verification_key_allow_list() {
        let mut entry = authorized_key();
        assert!(entry.authorizes(&VK_HASH));
        assert!(!entry.authorizes(&[8u8; 32]));

        entry.authorized = false;
        assert!(!entry.authorizes(&VK_HASH));
    }

    #[test]
    fn test_unauthorized_key_rejects_valid_output() {
        println!("=== Testing verification key gate ===");
        let s = scenario();
        let payload = matching_output(&s.distribution, &s.user, 1_200, 1_700, 500).encode();

        let mut revoked = authorized_key();
        revoked.authorized = false;
        let other_hash = VerificationKey {
            vk_hash: [8u8; 32],
            ..authorized_key()
        };

        for entry in [None, Some(&revoked), Some(&other_hash)] {
            let mut record = CumulativeClaim::default();
            assert!(matches!(
                record.settle_from_output(
                    entry,
                    &VK_HASH,
                    &payload,
                    &s.distribution,
                    BLOCKS_PER_EPOCH,
                    &s.user,
                ),
                Err(IncentiveError::UnauthorizedVerificationKey)
            ));
            assert!(!record.is_claimed());
        }
    }

    #[test]
    fn test_key_checked_before_decoding() {
        let s = scenario();
        let payload = matching_output(&s.distribution, &s.user, 1_200, 1_700, 500).encode();
        let mut record = CumulativeClaim::default();

        assert!(matches!(
            record.settle_from_output(
                None,
                &VK_HASH,
                &payload[..177],
                &s.distribution,
                BLOCKS_PER_EPOCH,
                &s.user,
            ),
            Err(IncentiveError::UnauthorizedVerificationKey)
        ));
        assert!(!record.is_claimed());
    }

    #[test]
    fn test_zero_amount_never_recorded() {
        let mut record = CumulativeClaim::default();
        assert!(matches!(record.settle(0, 1_000, 1_100), Err(IncentiveError::ZeroReward)));
        assert!(!record.is_claimed());
    }
}
