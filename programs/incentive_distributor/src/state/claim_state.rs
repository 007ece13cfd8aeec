use anchor_lang::prelude::*;

use crate::error::IncentiveError;
use crate::state::{Distribution, VerificationKey};
use crate::utils::ProofOutput;

/**
 * Cumulative claim record
 *
 * Settlement record for one (user, reward token, distribution) triple.
 * A zero amount means unclaimed; any other amount is terminal.
 *
 * Derivation: ["claim", user, reward_mint, distribution_id]
 *
 * Lifecycle:
 * 1. Created by the first settlement attempt (using init_if_needed)
 * 2. Written exactly once, before the reward transfer
 * 3. Never updated or closed afterwards
 */
#[account]
#[derive(Default, Debug)]
pub struct CumulativeClaim {
    /// Amount paid out for this triple
    pub amount: u64,
    /// First slot of the settled claim window
    pub start_block: u64,
    /// Last slot of the settled claim window
    pub end_block: u64,
}

impl CumulativeClaim {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<CumulativeClaim>();

    pub fn is_claimed(&self) -> bool {
        self.amount != 0
    }

    /// Moves the record from unclaimed to claimed
    pub fn settle(
        &mut self,
        amount: u64,
        start_block: u64,
        end_block: u64,
    ) -> std::result::Result<(), IncentiveError> {
        if self.is_claimed() {
            return Err(IncentiveError::AlreadyClaimed);
        }
        if amount == 0 {
            return Err(IncentiveError::ZeroReward);
        }
        self.amount = amount;
        self.start_block = start_block;
        self.end_block = end_block;
        Ok(())
    }

    /**
     * Runs the whole settlement check on a raw proof output and records it
     *
     * Order:
     * 1. The key hash has an authorized allow-list entry
     * 2. The output decodes
     * 3. The output matches `distribution` and `recipient`
     * 4. The record is still unclaimed
     *
     * Nothing is written unless every step passes. Returns the decoded output;
     * the settled amount is in `self.amount`.
     */
    pub fn settle_from_output(
        &mut self,
        vk_entry: Option<&VerificationKey>,
        vk_hash: &[u8; 32],
        output: &[u8],
        distribution: &Distribution,
        blocks_per_epoch: u64,
        recipient: &Pubkey,
    ) -> std::result::Result<ProofOutput, IncentiveError> {
        if !vk_entry.is_some_and(|entry| entry.authorizes(vk_hash)) {
            return Err(IncentiveError::UnauthorizedVerificationKey);
        }
        let claim = ProofOutput::decode(output)?;
        let amount = distribution.check_claim(&claim, blocks_per_epoch, recipient)?;
        self.settle(amount, claim.start_block, claim.end_block)?;
        Ok(claim)
    }
}
