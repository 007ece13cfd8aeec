use anchor_lang::prelude::*;

use crate::constants::FEE_BASE;
use crate::error::IncentiveError;

/**
 * Global configuration account
 *
 * Holds the settings every instruction reads, and the distribution counter
 * that orders the registry. Also the token authority of every reward vault.
 *
 * Derivation: ["config"]
 *
 * Lifecycle:
 * 1. Created once by initialize_config; the upgrade authority becomes admin
 * 2. Settings updated by the admin only
 * 3. distribution_count incremented by each distribution creation
 */
#[account]
#[derive(Default, Debug)]
pub struct IncentiveConfig {
    /// Bump seed for PDA derivation
    /// - Saved to sign vault transfers without recomputation
    pub bump: u8,

    /// Admin allowed to change configuration, whitelist and verification keys
    pub admin: Pubkey,

    /// Signer allowed to deliver verified proof outputs
    pub proof_verifier: Pubkey,

    /// Epoch length in slots
    /// - Distribution and claim windows must be whole multiples of it
    pub blocks_per_epoch: u64,

    /// Protocol fee rate (base 1e9), always below FEE_BASE
    pub protocol_fee: u64,

    /// Owner of the token accounts receiving protocol fees
    /// - Distribution creation is refused while this is the default pubkey
    pub protocol_fee_recipient: Pubkey,

    /// Number of distributions created so far
    /// - Next creation-order index
    pub distribution_count: u64,
}

impl IncentiveConfig {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<IncentiveConfig>();

    /// Whether `signer` is the upgrade authority recorded in the program data
    /// - An immutable program has none, so nobody can initialize it
    pub fn is_upgrade_authority(upgrade_authority: Option<Pubkey>, signer: &Pubkey) -> bool {
        upgrade_authority.is_some_and(|authority| authority == *signer)
    }

    pub fn validate_blocks_per_epoch(blocks_per_epoch: u64) -> std::result::Result<(), IncentiveError> {
        if blocks_per_epoch == 0 {
            return Err(IncentiveError::InvalidBlocksPerEpoch);
        }
        Ok(())
    }

    pub fn validate_protocol_fee(protocol_fee: u64) -> std::result::Result<(), IncentiveError> {
        if protocol_fee >= FEE_BASE {
            return Err(IncentiveError::InvalidProtocolFee);
        }
        Ok(())
    }

    pub fn fee_recipient_configured(&self) -> bool {
        self.protocol_fee_recipient != Pubkey::default()
    }

    /// Reserves the next creation-order index
    pub fn next_index(&mut self) -> std::result::Result<u64, IncentiveError> {
        let index = self.distribution_count;
        self.distribution_count = index
            .checked_add(1)
            .ok_or(IncentiveError::ArithmeticOverflow)?;
        Ok(index)
    }
}
