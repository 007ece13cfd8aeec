use anchor_lang::prelude::*;

/**
 * Verification key allow-list entry
 *
 * Proof outputs are only honored when the key hash they were produced under
 * has an entry flagged as authorized. Removal clears the flag and keeps the account.
 *
 * Derivation: ["verification_key", vk_hash]
 */
#[account]
#[derive(Default, Debug)]
pub struct VerificationKey {
    /// Hash of the circuit verification key
    pub vk_hash: [u8; 32],
    /// Whether proofs under this key are honored
    pub authorized: bool,
    /// Bump seed for PDA derivation
    pub bump: u8,
}

impl VerificationKey {
    pub const LEN: usize = 8 + std::mem::size_of::<VerificationKey>();

    pub fn authorizes(&self, vk_hash: &[u8; 32]) -> bool {
        self.authorized && self.vk_hash == *vk_hash
    }
}
