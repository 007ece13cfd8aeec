use anchor_lang::prelude::*;

/// Event emitted when the config is initialized
#[event]
pub struct ConfigInitialized {
    /// Admin allowed to change configuration
    pub admin: Pubkey,
    /// Signer allowed to deliver verified proof outputs
    pub proof_verifier: Pubkey,
    /// Epoch length in slots
    pub blocks_per_epoch: u64,
    /// Protocol fee rate (base 1e9)
    pub protocol_fee: u64,
    /// Owner of the token accounts receiving protocol fees
    pub protocol_fee_recipient: Pubkey,
}

#[event]
pub struct AdminUpdated {
    pub previous_admin: Pubkey,
    pub new_admin: Pubkey,
}

#[event]
pub struct BlocksPerEpochUpdated {
    pub blocks_per_epoch: u64,
}

#[event]
pub struct ProtocolFeeUpdated {
    pub protocol_fee: u64,
}

#[event]
pub struct ProtocolFeeRecipientUpdated {
    pub protocol_fee_recipient: Pubkey,
}

#[event]
pub struct ProofVerifierUpdated {
    pub proof_verifier: Pubkey,
}

/// Event emitted when a reward token is added to or removed from the whitelist
#[event]
pub struct TokenWhitelistUpdated {
    /// Reward token mint
    pub reward_mint: Pubkey,
    /// New whitelist flag
    pub whitelisted: bool,
}

#[event]
pub struct VerificationKeyAdded {
    pub vk_hash: [u8; 32],
}

#[event]
pub struct VerificationKeyRemoved {
    pub vk_hash: [u8; 32],
}

/// Event emitted when a new distribution is created
#[event]
pub struct DistributionCreated {
    /// Distribution identifier
    pub distribution_id: [u8; 32],
    /// Creation-order index
    pub index: u64,
    /// Creator (incentivizor) of the distribution
    pub creator: Pubkey,
    /// Nonce consumed to derive the identifier
    pub nonce: u64,
    /// Incentivized pool
    pub pool: Pubkey,
    /// Reward token mint
    pub reward_mint: Pubkey,
    /// Amount distributed per epoch after the protocol fee
    pub amount_per_epoch: u64,
    /// Protocol fee taken from the deposit
    pub fee: u64,
    /// First slot of the distribution
    pub start_block: u64,
    /// Last slot of the distribution
    pub end_block: u64,
}

/// Event emitted when a claim is settled
#[event]
pub struct ClaimSettled {
    /// Owner of the recipient token account
    pub user: Pubkey,
    /// Distribution the claim was settled against
    pub distribution_id: [u8; 32],
    /// Reward token mint
    pub reward_mint: Pubkey,
    /// First slot of the claim window
    pub start_block: u64,
    /// Last slot of the claim window
    pub end_block: u64,
    /// Amount of tokens paid
    pub amount: u64,
}
