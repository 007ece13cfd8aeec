use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenInterface};
use crate::state::*;
use crate::error::*;
use crate::constants::*;
use crate::event::*;

/**
 * Account context for toggling a reward token's whitelist entry
 *
 * The entry is created on first use and flipped in place afterwards.
 *
 * Access Control: Admin only
 */
#[event_cpi]
#[derive(Accounts)]
pub struct SetTokenWhitelist<'info> {
    /// Global config account (PDA)
    #[account(
        seeds = [CONFIG_SEED.as_bytes()],
        bump = config.bump
    )]
    pub config: Account<'info, IncentiveConfig>,

    /// Whitelist entry for the reward mint
    /// - Derived from: ["token_whitelist", reward_mint]
    #[account(
        init_if_needed,
        payer = admin,
        space = TokenWhitelist::LEN,
        seeds = [TOKEN_WHITELIST_SEED.as_bytes(), reward_mint.key().as_ref()],
        bump
    )]
    pub token_whitelist: Account<'info, TokenWhitelist>,

    /// The reward token mint being listed or delisted
    #[account(
        token::token_program = token_program,
    )]
    pub reward_mint: InterfaceAccount<'info, Mint>,

    /// Must match the admin stored in the config
    #[account(
        mut,
        constraint = admin.key() == config.admin @ IncentiveError::OnlyAdmin
    )]
    pub admin: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program owning the mint
    pub token_program: Interface<'info, TokenInterface>,
}

pub fn handle_set_token_whitelist(ctx: Context<SetTokenWhitelist>, whitelisted: bool) -> Result<()> {
    let entry = &mut ctx.accounts.token_whitelist;
    entry.reward_mint = ctx.accounts.reward_mint.key();
    entry.whitelisted = whitelisted;
    entry.bump = ctx.bumps.token_whitelist;

    emit_cpi!(TokenWhitelistUpdated {
        reward_mint: ctx.accounts.reward_mint.key(),
        whitelisted,
    });

    Ok(())
}
