use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::state::*;
use crate::error::*;
use crate::constants::*;
use crate::event::*;
use crate::utils::transfer_token;

/**
 * Account context for settling a claim from a verified proof output
 *
 * Invoked by the configured proof verifier once it has checked a proof.
 * The program trusts the proof itself and only checks that the key hash it
 * was produced under is on the allow-list.
 *
 * Access Control: Configured proof verifier only
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(request_id: [u8; 32], vk_hash: [u8; 32])]
pub struct OnProofVerified<'info> {
    /// Global config account (PDA)
    /// - Token authority of the reward vault
    #[account(
        seeds = [CONFIG_SEED.as_bytes()],
        bump = config.bump
    )]
    pub config: Box<Account<'info, IncentiveConfig>>,

    /// Allow-list entry for the proof's verification key, if one exists
    /// - Derived from: ["verification_key", vk_hash]
    #[account(
        seeds = [VERIFICATION_KEY_SEED.as_bytes(), vk_hash.as_ref()],
        bump
    )]
    pub verification_key: Option<Account<'info, VerificationKey>>,

    /// Distribution the proof output refers to
    /// - Its id is compared with the decoded distribution id
    pub distribution: Box<Account<'info, Distribution>>,

    /// Settlement record for (recipient owner, reward mint, distribution)
    /// - Derived from: ["claim", user, reward_mint, distribution_id]
    /// - Created on the first attempt, never rewritten
    #[account(
        init_if_needed,
        payer = verifier,
        space = CumulativeClaim::LEN,
        seeds = [
            CLAIM_SEED.as_bytes(),
            recipient_token_account.owner.as_ref(),
            distribution.reward_mint.as_ref(),
            distribution.id.as_ref()
        ],
        bump
    )]
    pub cumulative_claim: Box<Account<'info, CumulativeClaim>>,

    /// Reward vault holding the distribution's deposit
    /// - Derived from: ["vault", reward_mint]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), distribution.reward_mint.as_ref()],
        bump
    )]
    pub token_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Token account of the rewarded user
    /// - Its owner must map to the decoded user address
    #[account(
        mut,
        token::mint = distribution.reward_mint,
        token::token_program = token_program,
    )]
    pub recipient_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    /// The reward token mint
    #[account(
        token::token_program = token_program,
        constraint = reward_mint.key() == distribution.reward_mint @ IncentiveError::TokenMintMismatch
    )]
    pub reward_mint: Box<InterfaceAccount<'info, Mint>>,

    /// The proof verifier delivering the output
    /// - Pays for the claim record
    #[account(
        mut,
        constraint = verifier.key() == config.proof_verifier @ IncentiveError::UnauthorizedVerifier
    )]
    pub verifier: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Settles one claim described by a verified proof output
 *
 * @param ctx - The account context containing all required accounts
 * @param request_id - Verifier request the output belongs to, logged only
 * @param vk_hash - Hash of the key the proof was verified under
 * @param output - Raw proof output bytes
 *
 * Validation Process:
 * 1. Verification key is on the allow-list
 * 2. Output decodes
 * 3. Output matches the supplied distribution (window, pool, token, per-epoch amount)
 * 4. Reward is non-zero and the recipient matches the decoded user
 * 5. The claim record is still unclaimed
 */
pub fn handle_on_proof_verified(
    ctx: Context<OnProofVerified>,
    request_id: [u8; 32],
    vk_hash: [u8; 32],
    output: Vec<u8>,
) -> Result<()> {
    // ===== VALIDATION + EFFECTS PHASE =====

    let user = ctx.accounts.recipient_token_account.owner;
    let blocks_per_epoch = ctx.accounts.config.blocks_per_epoch;
    let distribution_id = ctx.accounts.distribution.id;
    let reward_mint = ctx.accounts.distribution.reward_mint;

    let claim = ctx.accounts.cumulative_claim.settle_from_output(
        ctx.accounts.verification_key.as_deref(),
        &vk_hash,
        &output,
        &ctx.accounts.distribution,
        blocks_per_epoch,
        &user,
    )?;
    let amount = ctx.accounts.cumulative_claim.amount;

    // Persist the record before the transfer CPI so the account data already
    // reads claimed while the token program runs
    ctx.accounts.cumulative_claim.exit(&crate::ID)?;

    // ===== INTERACTIONS PHASE (Token Transfer) =====

    let config_bump = ctx.accounts.config.bump;
    let seeds = &[CONFIG_SEED.as_bytes(), &[config_bump]];
    let signer = &[&seeds[..]];

    transfer_token(
        ctx.accounts.config.to_account_info(),
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.recipient_token_account.to_account_info(),
        ctx.accounts.reward_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        ctx.accounts.reward_mint.decimals,
        Some(signer),
    )?;

    msg!(
        "Claim settled for request {:?}: amount={}",
        &request_id[..8],
        amount
    );

    emit_cpi!(ClaimSettled {
        user,
        distribution_id,
        reward_mint,
        start_block: claim.start_block,
        end_block: claim.end_block,
        amount,
    });

    Ok(())
}
