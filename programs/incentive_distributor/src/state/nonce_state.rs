use anchor_lang::prelude::*;

use crate::error::IncentiveError;
use crate::utils::distribution_id;

/**
 * Creator nonce account
 *
 * Tracks how many distributions a creator has made. The current value is
 * hashed with the creator key into the next distribution identifier.
 *
 * Derivation: ["creator_nonce", creator]
 *
 * Lifecycle:
 * 1. Created on first distribution creation (using init_if_needed)
 * 2. Incremented with each distribution creation
 * 3. Never reset or closed
 */
#[account]
#[derive(Default, Debug)]
pub struct NonceState {
    /// Nonce to be consumed by the creator's next distribution
    pub nonce: u64,
}

impl NonceState {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<NonceState>();

    /// Identifier the creator's next distribution will receive
    pub fn next_distribution_id(&self, creator: &Pubkey) -> [u8; 32] {
        distribution_id(creator, self.nonce)
    }

    /// Consumes the current nonce, returning it
    pub fn advance(&mut self) -> std::result::Result<u64, IncentiveError> {
        let consumed = self.nonce;
        self.nonce = consumed
            .checked_add(1)
            .ok_or(IncentiveError::ArithmeticOverflow)?;
        Ok(consumed)
    }
}
