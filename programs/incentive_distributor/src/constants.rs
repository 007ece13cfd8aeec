use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * This module defines the constant values used throughout the incentive distributor program.
 * These constants control fee arithmetic, distribution bounds, proof payload layout and PDA derivation.
 */

#[constant]
/// ===== FEE CONSTANTS =====

/// Fixed-point base of the protocol fee rate
/// - A rate of 10_000_000 is 1%
/// - Configured rates must stay strictly below this value
pub const FEE_BASE: u64 = 1_000_000_000;

/// ===== DISTRIBUTION CONSTANTS =====

/// Upper bound on the total slot span of a single distribution (90 days)
/// - Value: 90 days * 24 hours * 60 minutes * 60 seconds * 1000 / 400ms per slot = 19,440,000 slots
pub const MAX_DISTRIBUTION_BLOCKS: u64 = 19_440_000;

/// ===== PROOF OUTPUT CONSTANTS =====

/// Minimum length of a proof output payload
/// - 20 (user) + 20 (pool) + 8 (unused) + 8 (start) + 8 (end)
///   + 32 (distribution id) + 20 (reward token) + 31 (per-epoch amount) + 31 (total amount)
pub const PROOF_OUTPUT_LEN: usize = 178;

/// Length of an EVM-style address carried in proof outputs
pub const EVM_ADDRESS_LEN: usize = 20;

/// Length of a big-endian uint248 carried in proof outputs
pub const UINT248_LEN: usize = 31;

/// ===== PDA SEED CONSTANTS =====

/// Seed for the global config PDA
/// - Used in: ["config"]
/// - Also the token authority of every reward vault
pub const CONFIG_SEED: &str = "config";

/// Seed for creator nonce PDA derivation
/// - Used in: ["creator_nonce", creator]
/// - Feeds distribution id derivation
pub const CREATOR_NONCE_SEED: &str = "creator_nonce";

/// Seed for distribution PDA derivation
/// - Used in: ["distribution", distribution_id]
pub const DISTRIBUTION_SEED: &str = "distribution";

/// Seed for creation-order slot PDA derivation
/// - Used in: ["distribution_slot", index]
pub const DISTRIBUTION_SLOT_SEED: &str = "distribution_slot";

/// Seed for reward vault PDA derivation
/// - Used in: ["vault", reward_mint]
/// - One vault per reward token, shared by all distributions of that token
pub const VAULT_SEED: &str = "vault";

/// Seed for cumulative claim PDA derivation
/// - Used in: ["claim", user, reward_mint, distribution_id]
/// - The PDA address itself is the settle-once key
pub const CLAIM_SEED: &str = "claim";

/// Seed for reward token whitelist PDA derivation
/// - Used in: ["token_whitelist", reward_mint]
pub const TOKEN_WHITELIST_SEED: &str = "token_whitelist";

/// Seed for verification key PDA derivation
/// - Used in: ["verification_key", vk_hash]
pub const VERIFICATION_KEY_SEED: &str = "verification_key";
