use anchor_lang::prelude::*;

use crate::constants::MAX_DISTRIBUTION_BLOCKS;
use crate::error::IncentiveError;
use crate::utils::{derive_per_epoch_amount, epoch_count, evm_address, split_fee, ProofOutput, Uint248};

/**
 * Distribution parameters account
 *
 * This struct represents one funded incentive program for a pool/token pair
 * over a fixed slot range. Each creation-order slot references exactly one
 * distribution, so the parameters are stored once.
 *
 * Derivation: ["distribution", distribution_id]
 *
 * Lifecycle:
 * 1. Created during create_distribution, after the deposit is split and moved
 * 2. Read by every claim settlement against it
 * 3. Never mutated or closed
 */
#[account]
#[derive(Default, Debug)]
pub struct Distribution {
    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Identifier derived from (creator, nonce)
    pub id: [u8; 32],

    /// Creation-order index in the registry
    pub index: u64,

    /// Creator nonce consumed by this distribution
    pub nonce: u64,

    /// Incentivizor who funded the distribution
    pub creator: Pubkey,

    /// Pool whose participants are rewarded
    pub pool: Pubkey,

    /// Token the rewards are paid in
    pub reward_mint: Pubkey,

    /// Amount released per epoch after the protocol fee
    /// - Floor of net deposit / number of epochs
    pub amount_per_epoch: u64,

    /// First slot of the distribution
    pub start_block: u64,

    /// Last slot of the distribution
    /// - end_block - start_block is a whole number of epochs
    pub end_block: u64,
}

impl Distribution {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<Distribution>();

    /// Checks a decoded proof output against this distribution
    ///
    /// Returns the reward to pay. `recipient` is the owner of the token account
    /// that would receive it.
    pub fn check_claim(
        &self,
        output: &ProofOutput,
        blocks_per_epoch: u64,
        recipient: &Pubkey,
    ) -> std::result::Result<u64, IncentiveError> {
        if output.distribution_id != self.id {
            return Err(IncentiveError::UnknownDistribution);
        }

        epoch_count(output.start_block, output.end_block, blocks_per_epoch)
            .map_err(|_| IncentiveError::InvalidClaimWindow)?;

        if output.start_block < self.start_block || output.end_block > self.end_block {
            return Err(IncentiveError::ClaimWindowOutsideDistribution);
        }

        if output.pool != evm_address(&self.pool)
            || output.reward_token != evm_address(&self.reward_mint)
            || output.amount_per_epoch != Uint248::from_u64(self.amount_per_epoch)
        {
            return Err(IncentiveError::ParameterMismatch);
        }

        if output.total_amount.is_zero() {
            return Err(IncentiveError::ZeroReward);
        }
        let amount = output
            .total_amount
            .to_u64()
            .ok_or(IncentiveError::ArithmeticOverflow)?;

        if output.user != evm_address(recipient) {
            return Err(IncentiveError::RecipientMismatch);
        }

        Ok(amount)
    }
}

/**
 * Creation-order registry entry
 *
 * Holds a reference to the distribution created at `index`, giving the
 * registry a stable order without duplicating the parameters.
 *
 * Derivation: ["distribution_slot", index]
 */
#[account]
#[derive(Default, Debug)]
pub struct DistributionSlot {
    /// Bump seed for PDA derivation
    pub bump: u8,
    /// Creation-order index
    pub index: u64,
    /// Identifier of the referenced distribution
    pub distribution_id: [u8; 32],
    /// Address of the referenced distribution account
    pub distribution: Pubkey,
}

impl DistributionSlot {
    pub const LEN: usize = 8 + std::mem::size_of::<DistributionSlot>();
}

/// Caller-supplied terms of a new distribution
#[derive(Clone, Debug)]
pub struct DistributionRequest {
    pub pool: Pubkey,
    pub reward_mint: Pubkey,
    pub amount: u64,
    pub start_block: u64,
    pub end_block: u64,
}

/// Environment a distribution request is checked against
#[derive(Clone, Debug)]
pub struct CreationContext {
    pub current_block: u64,
    pub blocks_per_epoch: u64,
    pub token_whitelisted: bool,
    pub available_balance: u64,
    pub fee_recipient_configured: bool,
}

/// Amounts derived from an accepted request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DistributionTerms {
    pub fee: u64,
    pub net: u64,
    pub amount_per_epoch: u64,
}

impl DistributionRequest {
    /// Runs the creation checks in order, stopping at the first failure
    pub fn validate(&self, ctx: &CreationContext) -> std::result::Result<(), IncentiveError> {
        if self.pool == Pubkey::default() || self.reward_mint == Pubkey::default() {
            return Err(IncentiveError::ZeroAddress);
        }
        if self.end_block <= self.start_block {
            return Err(IncentiveError::InvalidBlockRange);
        }
        if self.start_block <= ctx.current_block
            || self.end_block - self.start_block > MAX_DISTRIBUTION_BLOCKS
        {
            return Err(IncentiveError::InvalidBlockRange);
        }
        if self.amount == 0 {
            return Err(IncentiveError::InvalidAmount);
        }
        epoch_count(self.start_block, self.end_block, ctx.blocks_per_epoch)?;
        if !ctx.token_whitelisted {
            return Err(IncentiveError::TokenNotWhitelisted);
        }
        if ctx.available_balance < self.amount {
            return Err(IncentiveError::InsufficientFunds);
        }
        if !ctx.fee_recipient_configured {
            return Err(IncentiveError::FeeRecipientNotSet);
        }
        Ok(())
    }

    /// Splits off the protocol fee and spreads the rest over the epochs
    ///
    /// A deposit too small to pay anything per epoch is rejected.
    pub fn terms(
        &self,
        protocol_fee: u64,
        blocks_per_epoch: u64,
    ) -> std::result::Result<DistributionTerms, IncentiveError> {
        let (fee, net) = split_fee(self.amount, protocol_fee);
        let amount_per_epoch =
            derive_per_epoch_amount(net, self.start_block, self.end_block, blocks_per_epoch)?;
        if amount_per_epoch == 0 {
            return Err(IncentiveError::InvalidAmount);
        }
        Ok(DistributionTerms {
            fee,
            net,
            amount_per_epoch,
        })
    }
}
