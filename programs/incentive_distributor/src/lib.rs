use anchor_lang::prelude::*;

declare_id!("AL1BYNzNFGHUAPGDhv6Jk1iN8M28ZdrDUrkDkbUVAfm7");

pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;

/**
 * Incentive Distributor Program
 *
 * A Solana program for epoch-based incentive distributions whose claims are
 * settled from proof outputs delivered by a trusted proof verifier.
 *
 * Key Features:
 * - Distributions span a whole number of epochs over a future slot range
 * - Protocol fee skimmed at creation, remainder spread evenly per epoch (rounded down)
 * - Deterministic distribution ids derived from (creator, creator nonce)
 * - Creation-order registry with count / id / pool queries
 * - Fixed-layout 178-byte proof outputs checked against the stored distribution
 * - One settlement per (user, reward token, distribution), recorded before payout
 * - Admin-managed reward token whitelist and verification key allow-list
 * - Support for both SPL Token and Token 2022
 *
 * Architecture:
 * - Config PDA: Global settings, distribution counter, authority of all vaults
 * - Nonce State PDA: Per-creator nonce feeding id derivation
 * - Distribution PDA: Immutable distribution parameters, keyed by id
 * - Distribution Slot PDA: Creation-order reference to a distribution
 * - Vault PDA: Per-mint token custody
 * - Cumulative Claim PDAs: Settle-once records
 * - Token Whitelist / Verification Key PDAs: Admin allow-lists
 *
 * Workflow:
 * 1. Admin initializes config, whitelists reward tokens, authorizes verification keys
 * 2. Incentivizor creates a distribution and deposits tokens
 * 3. Off-chain prover computes a user's reward; verifier checks the proof
 * 4. Verifier calls on_proof_verified, which settles and pays the claim
 */
#[program]
pub mod incentive_distributor {
    use super::*;

    /**
     * Initializes the global config
     *
     * @param blocks_per_epoch - Epoch length in slots, non-zero
     * @param protocol_fee - Fee rate base 1e9, below 1e9
     * @param protocol_fee_recipient - Owner of fee-receiving token accounts
     * @param proof_verifier - Signer allowed to deliver proof outputs
     *
     * Access Control: Program upgrade authority, once; the signer becomes admin
     */
    pub fn initialize_config(
        ctx: Context<InitializeConfig>,
        blocks_per_epoch: u64,
        protocol_fee: u64,
        protocol_fee_recipient: Pubkey,
        proof_verifier: Pubkey,
    ) -> Result<()> {
        handle_initialize_config(ctx, blocks_per_epoch, protocol_fee, protocol_fee_recipient, proof_verifier)
    }

    /// Hands the admin role to another key. Access Control: Admin only
    pub fn set_admin(ctx: Context<UpdateConfig>, new_admin: Pubkey) -> Result<()> {
        handle_set_admin(ctx, new_admin)
    }

    /// Sets the epoch length in slots. Access Control: Admin only
    pub fn set_blocks_per_epoch(ctx: Context<UpdateConfig>, blocks_per_epoch: u64) -> Result<()> {
        handle_set_blocks_per_epoch(ctx, blocks_per_epoch)
    }

    /// Sets the protocol fee rate (base 1e9). Access Control: Admin only
    pub fn set_protocol_fee(ctx: Context<UpdateConfig>, protocol_fee: u64) -> Result<()> {
        handle_set_protocol_fee(ctx, protocol_fee)
    }

    /// Sets the protocol fee recipient. Access Control: Admin only
    pub fn set_protocol_fee_recipient(ctx: Context<UpdateConfig>, protocol_fee_recipient: Pubkey) -> Result<()> {
        handle_set_protocol_fee_recipient(ctx, protocol_fee_recipient)
    }

    /// Sets the signer allowed to deliver proof outputs. Access Control: Admin only
    pub fn set_proof_verifier(ctx: Context<UpdateConfig>, proof_verifier: Pubkey) -> Result<()> {
        handle_set_proof_verifier(ctx, proof_verifier)
    }

    /// Lists or delists a reward token. Access Control: Admin only
    pub fn set_token_whitelist(ctx: Context<SetTokenWhitelist>, whitelisted: bool) -> Result<()> {
        handle_set_token_whitelist(ctx, whitelisted)
    }

    /// Authorizes a verification key hash. Access Control: Admin only
    pub fn add_verification_key(ctx: Context<SetVerificationKey>, vk_hash: [u8; 32]) -> Result<()> {
        handle_add_verification_key(ctx, vk_hash)
    }

    /// Revokes a verification key hash. Access Control: Admin only
    pub fn remove_verification_key(ctx: Context<SetVerificationKey>, vk_hash: [u8; 32]) -> Result<()> {
        handle_remove_verification_key(ctx, vk_hash)
    }

    /**
     * Creates a new distribution
     *
     * Validates the slot range and deposit, skims the protocol fee, spreads the
     * rest over the epochs and moves both amounts out of the creator's account.
     *
     * @param pool - Pool whose participants are rewarded
     * @param amount - Gross deposit in reward token units
     * @param start_block - First slot, strictly after the current slot
     * @param end_block - Last slot; the span is a whole number of epochs
     *
     * Access Control: Any creator
     */
    pub fn create_distribution(
        ctx: Context<CreateDistribution>,
        pool: Pubkey,
        amount: u64,
        start_block: u64,
        end_block: u64,
    ) -> Result<()> {
        handle_create_distribution(ctx, pool, amount, start_block, end_block)
    }

    /**
     * Settles a claim from a verified proof output
     *
     * @param request_id - Verifier request identifier
     * @param vk_hash - Hash of the verification key the proof was checked under
     * @param output - 178-byte proof output
     *
     * Access Control: Configured proof verifier only
     * Note: Each (user, reward token, distribution) settles at most once
     */
    pub fn on_proof_verified(
        ctx: Context<OnProofVerified>,
        request_id: [u8; 32],
        vk_hash: [u8; 32],
        output: Vec<u8>,
    ) -> Result<()> {
        handle_on_proof_verified(ctx, request_id, vk_hash, output)
    }

    /// Number of distributions created so far
    pub fn get_distribution_count(ctx: Context<DistributionCount>) -> Result<u64> {
        handle_get_distribution_count(ctx)
    }

    /// Identifier of the distribution created at `index`
    pub fn get_distribution_id(ctx: Context<DistributionAtIndex>, index: u64) -> Result<[u8; 32]> {
        handle_get_distribution_id(ctx, index)
    }

    /// Pool of the distribution created at `index`
    pub fn get_distribution_pool(ctx: Context<DistributionAtIndex>, index: u64) -> Result<Pubkey> {
        handle_get_distribution_pool(ctx, index)
    }
}
