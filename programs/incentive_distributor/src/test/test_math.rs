#[cfg(test)]
mod tests {
    use crate::constants::FEE_BASE;
    use crate::error::IncentiveError;
    use crate::test::fixtures::*;
    use crate::utils::*;

    #[test]
    fn test_split_fee_one_percent() {
        let (fee, net) = split_fee(1_000, ONE_PERCENT_FEE);
        assert_eq!(fee, 10);
        assert_eq!(net, 990);
    }

    #[test]
    fn test_split_fee_conserves_amount() {
        let rates = [0, 1, ONE_PERCENT_FEE, 333_333_333, FEE_BASE - 1];
        let amounts = [0, 1, 7, 999, 1_000_000_007, u64::MAX];

        for rate in rates {
            for amount in amounts {
                let (fee, net) = split_fee(amount, rate);
                assert_eq!(fee + net, amount, "amount={} rate={}", amount, rate);
                assert!(fee <= amount);
            }
        }
    }

    #[test]
    fn test_split_fee_rounds_down() {
        // 199 * 1% = 1.99
        assert_eq!(split_fee(199, ONE_PERCENT_FEE), (1, 198));
        assert_eq!(split_fee(99, ONE_PERCENT_FEE), (0, 99));
    }

    #[test]
    fn test_split_fee_max_supply_does_not_overflow() {
        let (fee, net) = split_fee(u64::MAX, FEE_BASE - 1);
        assert_eq!(fee, (u64::MAX as u128 * (FEE_BASE - 1) as u128 / FEE_BASE as u128) as u64);
        assert_eq!(net, u64::MAX - fee);
    }

    #[test]
    fn test_per_epoch_amount_scenario() {
        let per_epoch = derive_per_epoch_amount(990, 1_000, 2_000, BLOCKS_PER_EPOCH).unwrap();
        assert_eq!(per_epoch, 99);
    }

    #[test]
    fn test_per_epoch_amount_keeps_remainder() {
        for net in [0u64, 1, 9, 10, 11, 989, 991, 123_456_789] {
            let epochs = epoch_count(500, 1_500, BLOCKS_PER_EPOCH).unwrap();
            let per_epoch = derive_per_epoch_amount(net, 500, 1_500, BLOCKS_PER_EPOCH).unwrap();
            assert!(per_epoch * epochs <= net);
            assert!(net - per_epoch * epochs < epochs);
        }
    }

    #[test]
    fn test_epoch_alignment_errors() {
        assert!(matches!(
            epoch_count(1_000, 1_050, BLOCKS_PER_EPOCH),
            Err(IncentiveError::InvalidEpochAlignment)
        ));
        assert!(matches!(
            epoch_count(1_000, 1_000, BLOCKS_PER_EPOCH),
            Err(IncentiveError::InvalidEpochAlignment)
        ));
        assert!(matches!(
            epoch_count(2_000, 1_000, BLOCKS_PER_EPOCH),
            Err(IncentiveError::InvalidEpochAlignment)
        ));
        assert!(matches!(
            epoch_count(1_000, 2_000, 0),
            Err(IncentiveError::InvalidEpochAlignment)
        ));
        assert_eq!(epoch_count(1_000, 1_100, BLOCKS_PER_EPOCH).unwrap(), 1);
    }
}
