use crate::constants::{EVM_ADDRESS_LEN, PROOF_OUTPUT_LEN, UINT248_LEN};
use crate::error::IncentiveError;
use crate::utils::EvmAddress;

/// Big-endian unsigned 248-bit integer as committed by the claim circuit
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Uint248(pub [u8; UINT248_LEN]);

impl Uint248 {
    pub fn from_u64(value: u64) -> Self {
        let mut bytes = [0u8; UINT248_LEN];
        bytes[UINT248_LEN - 8..].copy_from_slice(&value.to_be_bytes());
        Self(bytes)
    }

    /// Narrows to u64, `None` if any of the high 23 bytes is set
    pub fn to_u64(&self) -> Option<u64> {
        let (high, low) = self.0.split_at(UINT248_LEN - 8);
        if high.iter().any(|b| *b != 0) {
            return None;
        }
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(low);
        Some(u64::from_be_bytes(bytes))
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }
}

/// Claim fields committed by the claim circuit
///
/// Layout (packed, big-endian):
///   [0..20]     user:              address
///   [20..40]    pool:              address
///   [40..48]    unused
///   [48..56]    start_block:       uint64
///   [56..64]    end_block:         uint64
///   [64..96]    distribution_id:   bytes32
///   [96..116]   reward_token:      address
///   [116..147]  amount_per_epoch:  uint248
///   [147..178]  total_amount:      uint248
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProofOutput {
    pub user: EvmAddress,
    pub pool: EvmAddress,
    pub start_block: u64,
    pub end_block: u64,
    pub distribution_id: [u8; 32],
    pub reward_token: EvmAddress,
    pub amount_per_epoch: Uint248,
    pub total_amount: Uint248,
}

impl ProofOutput {
    /// Extracts the claim fields without judging their meaning
    ///
    /// Bytes past `PROOF_OUTPUT_LEN` are ignored.
    pub fn decode(data: &[u8]) -> Result<Self, IncentiveError> {
        if data.len() < PROOF_OUTPUT_LEN {
            return Err(IncentiveError::MalformedProofOutput);
        }

        let mut user = [0u8; EVM_ADDRESS_LEN];
        user.copy_from_slice(&data[0..20]);

        let mut pool = [0u8; EVM_ADDRESS_LEN];
        pool.copy_from_slice(&data[20..40]);

        let mut start_bytes = [0u8; 8];
        start_bytes.copy_from_slice(&data[48..56]);

        let mut end_bytes = [0u8; 8];
        end_bytes.copy_from_slice(&data[56..64]);

        let mut distribution_id = [0u8; 32];
        distribution_id.copy_from_slice(&data[64..96]);

        let mut reward_token = [0u8; EVM_ADDRESS_LEN];
        reward_token.copy_from_slice(&data[96..116]);

        let mut amount_per_epoch = [0u8; UINT248_LEN];
        amount_per_epoch.copy_from_slice(&data[116..147]);

        let mut total_amount = [0u8; UINT248_LEN];
        total_amount.copy_from_slice(&data[147..178]);

        Ok(Self {
            user,
            pool,
            start_block: u64::from_be_bytes(start_bytes),
            end_block: u64::from_be_bytes(end_bytes),
            distribution_id,
            reward_token,
            amount_per_epoch: Uint248(amount_per_epoch),
            total_amount: Uint248(total_amount),
        })
    }

    /// Packs the fields into the circuit layout, unused bytes zeroed
    pub fn encode(&self) -> [u8; PROOF_OUTPUT_LEN] {
        let mut buf = [0u8; PROOF_OUTPUT_LEN];
        buf[0..20].copy_from_slice(&self.user);
        buf[20..40].copy_from_slice(&self.pool);
        buf[48..56].copy_from_slice(&self.start_block.to_be_bytes());
        buf[56..64].copy_from_slice(&self.end_block.to_be_bytes());
        buf[64..96].copy_from_slice(&self.distribution_id);
        buf[96..116].copy_from_slice(&self.reward_token);
        buf[116..147].copy_from_slice(&self.amount_per_epoch.0);
        buf[147..178].copy_from_slice(&self.total_amount.0);
        buf
    }
}
