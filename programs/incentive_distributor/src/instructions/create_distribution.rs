use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::transfer_token;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/**
 * Account context for creating a new distribution
 *
 * This instruction funds a new incentive program with automatic nonce management:
 * - Creates or updates the creator nonce PDA used to derive the distribution id
 * - Creates the distribution PDA keyed by that id
 * - Creates the creation-order slot PDA at the current distribution count
 * - Creates the reward vault for the mint on first use
 * - Moves the protocol fee to the fee recipient and the rest to the vault
 *
 * Access Control: Any creator holding enough of a whitelisted reward token
 */
#[event_cpi]
#[derive(Accounts)]
pub struct CreateDistribution<'info> {
    /// Global config account (PDA)
    /// - distribution_count is incremented
    #[account(
        mut,
        seeds = [CONFIG_SEED.as_bytes()],
        bump = config.bump
    )]
    pub config: Box<Account<'info, IncentiveConfig>>,

    /// Nonce state account (PDA) that tracks nonces for this creator
    /// - Derived from: ["creator_nonce", creator]
    #[account(
        init_if_needed,
        payer = creator,
        space = NonceState::LEN,
        seeds = [CREATOR_NONCE_SEED.as_bytes(), creator.key().as_ref()],
        bump
    )]
    pub creator_nonce: Box<Account<'info, NonceState>>,

    /// The distribution account (PDA)
    /// - Derived from: ["distribution", keccak(creator, creator_nonce.nonce)]
    #[account(
        init,
        payer = creator,
        space = Distribution::LEN,
        seeds = [
            DISTRIBUTION_SEED.as_bytes(),
            creator_nonce.next_distribution_id(&creator.key()).as_ref()
        ],
        bump
    )]
    pub distribution: Box<Account<'info, Distribution>>,

    /// Creation-order slot (PDA) referencing the new distribution
    /// - Derived from: ["distribution_slot", config.distribution_count]
    #[account(
        init,
        payer = creator,
        space = DistributionSlot::LEN,
        seeds = [
            DISTRIBUTION_SLOT_SEED.as_bytes(),
            config.distribution_count.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub distribution_slot: Box<Account<'info, DistributionSlot>>,

    /// Whitelist entry for the reward mint, if one was ever created
    /// - Derived from: ["token_whitelist", reward_mint]
    #[account(
        seeds = [TOKEN_WHITELIST_SEED.as_bytes(), reward_mint.key().as_ref()],
        bump
    )]
    pub token_whitelist: Option<Account<'info, TokenWhitelist>>,

    /// Reward vault (PDA) holding deposits for this mint
    /// - Controlled by the config PDA as token authority
    /// - Derived from: ["vault", reward_mint]
    #[account(
        init_if_needed,
        payer = creator,
        token::mint = reward_mint,
        token::authority = config,
        token::token_program = token_program,
        seeds = [VAULT_SEED.as_bytes(), reward_mint.key().as_ref()],
        bump
    )]
    pub token_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// The reward token mint
    /// - Supports both SPL Token and Token 2022 programs
    #[account(
        token::token_program = token_program,
    )]
    pub reward_mint: Box<InterfaceAccount<'info, Mint>>,

    /// Creator's token account funding the deposit
    #[account(
        mut,
        token::mint = reward_mint,
        token::authority = creator,
        token::token_program = token_program,
    )]
    pub creator_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Token account receiving the protocol fee
    /// - Owner is checked against config.protocol_fee_recipient in the handler
    #[account(
        mut,
        token::mint = reward_mint,
        token::token_program = token_program,
    )]
    pub fee_recipient_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    /// The incentivizor funding the distribution
    #[account(mut)]
    pub creator: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Creates a new distribution
 *
 * @param ctx - The account context containing all required accounts
 * @param pool - Pool whose participants are rewarded
 * @param amount - Gross deposit, protocol fee included
 * @param start_block - First slot of the distribution, strictly in the future
 * @param end_block - Last slot of the distribution
 */
pub fn handle_create_distribution(
    ctx: Context<CreateDistribution>,
    pool: Pubkey,
    amount: u64,
    start_block: u64,
    end_block: u64,
) -> Result<()> {
    // ===== VALIDATION PHASE =====

    let config = &ctx.accounts.config;
    let request = DistributionRequest {
        pool,
        reward_mint: ctx.accounts.reward_mint.key(),
        amount,
        start_block,
        end_block,
    };
    let creation_ctx = CreationContext {
        current_block: Clock::get()?.slot,
        blocks_per_epoch: config.blocks_per_epoch,
        token_whitelisted: ctx
            .accounts
            .token_whitelist
            .as_ref()
            .is_some_and(|entry| entry.whitelisted),
        available_balance: ctx.accounts.creator_token_account.amount,
        fee_recipient_configured: config.fee_recipient_configured(),
    };
    request.validate(&creation_ctx)?;

    require_keys_eq!(
        ctx.accounts.fee_recipient_token_account.owner,
        config.protocol_fee_recipient,
        IncentiveError::FeeRecipientMismatch
    );

    let terms = request.terms(config.protocol_fee, config.blocks_per_epoch)?;

    // ===== EFFECTS PHASE (State Updates) =====

    let creator_key = ctx.accounts.creator.key();
    let distribution_id = ctx.accounts.creator_nonce.next_distribution_id(&creator_key);
    let nonce = ctx.accounts.creator_nonce.advance()?;
    let index = ctx.accounts.config.next_index()?;

    let distribution = &mut ctx.accounts.distribution;
    distribution.bump = ctx.bumps.distribution;
    distribution.id = distribution_id;
    distribution.index = index;
    distribution.nonce = nonce;
    distribution.creator = creator_key;
    distribution.pool = pool;
    distribution.reward_mint = request.reward_mint;
    distribution.amount_per_epoch = terms.amount_per_epoch;
    distribution.start_block = start_block;
    distribution.end_block = end_block;
    let distribution_key = distribution.key();

    let slot = &mut ctx.accounts.distribution_slot;
    slot.bump = ctx.bumps.distribution_slot;
    slot.index = index;
    slot.distribution_id = distribution_id;
    slot.distribution = distribution_key;

    // ===== INTERACTIONS PHASE (Token Transfers) =====

    // Fee first; a failed transfer aborts the whole transaction
    transfer_token(
        ctx.accounts.creator.to_account_info(),
        ctx.accounts.creator_token_account.to_account_info(),
        ctx.accounts.fee_recipient_token_account.to_account_info(),
        ctx.accounts.reward_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        terms.fee,
        ctx.accounts.reward_mint.decimals,
        None,
    )?;

    transfer_token(
        ctx.accounts.creator.to_account_info(),
        ctx.accounts.creator_token_account.to_account_info(),
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.reward_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        terms.net,
        ctx.accounts.reward_mint.decimals,
        None,
    )?;

    msg!(
        "Distribution {} created: amount_per_epoch={}, fee={}",
        index,
        terms.amount_per_epoch,
        terms.fee
    );

    emit_cpi!(DistributionCreated {
        distribution_id,
        index,
        creator: creator_key,
        nonce,
        pool,
        reward_mint: request.reward_mint,
        amount_per_epoch: terms.amount_per_epoch,
        fee: terms.fee,
        start_block,
        end_block,
    });

    Ok(())
}
