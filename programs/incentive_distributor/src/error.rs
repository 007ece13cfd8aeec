use anchor_lang::prelude::*;

#[error_code]
pub enum IncentiveError {
    // Access control errors
    #[msg("Only admin can perform this action")]
    OnlyAdmin,
    #[msg("Caller is not the configured proof verifier")]
    UnauthorizedVerifier,
    #[msg("Verification key is not authorized")]
    UnauthorizedVerificationKey,
    #[msg("Only the program upgrade authority can initialize the config")]
    NotUpgradeAuthority,

    // Configuration errors
    #[msg("Blocks per epoch must be greater than zero")]
    InvalidBlocksPerEpoch,
    #[msg("Protocol fee must be below the fee base")]
    InvalidProtocolFee,
    #[msg("Protocol fee recipient not set")]
    FeeRecipientNotSet,
    #[msg("Token account owner does not match the protocol fee recipient")]
    FeeRecipientMismatch,

    // Distribution creation errors
    #[msg("Address must not be the default pubkey")]
    ZeroAddress,
    #[msg("Invalid block range")]
    InvalidBlockRange,
    #[msg("Invalid amount")]
    InvalidAmount,
    #[msg("Block range is not a multiple of the epoch length")]
    InvalidEpochAlignment,
    #[msg("Reward token is not whitelisted")]
    TokenNotWhitelisted,
    #[msg("Insufficient funds for the requested distribution")]
    InsufficientFunds,

    // Registry query errors
    #[msg("Distribution index out of range")]
    IndexOutOfRange,

    // Claim settlement errors
    #[msg("Proof output is malformed")]
    MalformedProofOutput,
    #[msg("Unknown distribution")]
    UnknownDistribution,
    #[msg("Invalid claim window")]
    InvalidClaimWindow,
    #[msg("Claim window outside the distribution")]
    ClaimWindowOutsideDistribution,
    #[msg("Proof output does not match the distribution")]
    ParameterMismatch,
    #[msg("Reward amount is zero")]
    ZeroReward,
    #[msg("Recipient does not match the proof output user")]
    RecipientMismatch,
    #[msg("Reward already claimed")]
    AlreadyClaimed,

    // System level errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
    #[msg("Token mint does not match distribution's reward mint")]
    TokenMintMismatch,
}
