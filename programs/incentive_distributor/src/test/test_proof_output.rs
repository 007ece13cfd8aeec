#[cfg(test)]
mod tests {
    use crate::constants::PROOF_OUTPUT_LEN;
    use crate::error::IncentiveError;
    use crate::utils::*;

    /// Hand-packed payload with a distinct byte pattern per field
    fn packed_payload() -> Vec<u8> {
        let mut data = Vec::with_capacity(PROOF_OUTPUT_LEN);
        data.extend_from_slice(&[0x11; 20]); // user
        data.extend_from_slice(&[0x22; 20]); // pool
        data.extend_from_slice(&[0xEE; 8]); // unused
        data.extend_from_slice(&1_200u64.to_be_bytes());
        data.extend_from_slice(&1_500u64.to_be_bytes());
        data.extend_from_slice(&[0x33; 32]); // distribution id
        data.extend_from_slice(&[0x44; 20]); // reward token
        let mut per_epoch = [0u8; 31];
        per_epoch[30] = 99;
        data.extend_from_slice(&per_epoch);
        let mut total = [0u8; 31];
        total[29] = 0x01;
        total[30] = 0xF4; // 500
        data.extend_from_slice(&total);
        data
    }

    #[test]
    fn test_decode_field_offsets() {
        let data = packed_payload();
        assert_eq!(data.len(), PROOF_OUTPUT_LEN);

        let output = ProofOutput::decode(&data).unwrap();
        assert_eq!(output.user, [0x11; 20]);
        assert_eq!(output.pool, [0x22; 20]);
        assert_eq!(output.start_block, 1_200);
        assert_eq!(output.end_block, 1_500);
        assert_eq!(output.distribution_id, [0x33; 32]);
        assert_eq!(output.reward_token, [0x44; 20]);
        assert_eq!(output.amount_per_epoch.to_u64(), Some(99));
        assert_eq!(output.total_amount.to_u64(), Some(500));
    }

    #[test]
    fn test_decode_rejects_short_payload() {
        let data = packed_payload();
        assert!(matches!(
            ProofOutput::decode(&data[..PROOF_OUTPUT_LEN - 1]),
            Err(IncentiveError::MalformedProofOutput)
        ));
        assert!(matches!(
            ProofOutput::decode(&[]),
            Err(IncentiveError::MalformedProofOutput)
        ));
    }

    #[test]
    fn test_decode_ignores_trailing_bytes() {
        let mut data = packed_payload();
        let expected = ProofOutput::decode(&data).unwrap();
        data.extend_from_slice(&[0xFF; 14]);
        assert_eq!(ProofOutput::decode(&data).unwrap(), expected);
    }

    #[test]
    fn test_encode_zeroes_unused_bytes() {
        let output = ProofOutput::decode(&packed_payload()).unwrap();
        let encoded = output.encode();
        assert_eq!(&encoded[40..48], &[0u8; 8]);
        assert_eq!(ProofOutput::decode(&encoded).unwrap(), output);
    }

    #[test]
    fn test_uint248_narrowing() {
        assert_eq!(Uint248::from_u64(u64::MAX).to_u64(), Some(u64::MAX));
        assert!(Uint248::from_u64(0).is_zero());
        assert!(!Uint248::from_u64(1).is_zero());

        let mut wide = [0u8; 31];
        wide[0] = 1;
        let wide = Uint248(wide);
        assert!(!wide.is_zero());
        assert_eq!(wide.to_u64(), None);
    }
}
