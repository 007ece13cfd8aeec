use anchor_lang::prelude::*;

/**
 * Reward token whitelist entry
 *
 * Distributions can only be funded in mints whose entry is flagged.
 *
 * Derivation: ["token_whitelist", reward_mint]
 */
#[account]
#[derive(Default, Debug)]
pub struct TokenWhitelist {
    /// Reward token mint this entry refers to
    pub reward_mint: Pubkey,
    /// Whether distributions may use this mint
    pub whitelisted: bool,
    /// Bump seed for PDA derivation
    pub bump: u8,
}

impl TokenWhitelist {
    pub const LEN: usize = 8 + std::mem::size_of::<TokenWhitelist>();
}
