use anchor_lang::prelude::*;
use crate::state::*;
use crate::error::*;
use crate::constants::*;
use crate::event::*;

/**
 * Account context for adding or removing an authorized verification key
 *
 * Access Control: Admin only
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(vk_hash: [u8; 32])]
pub struct SetVerificationKey<'info> {
    /// Global config account (PDA)
    #[account(
        seeds = [CONFIG_SEED.as_bytes()],
        bump = config.bump
    )]
    pub config: Account<'info, IncentiveConfig>,

    /// Allow-list entry for the key hash
    /// - Derived from: ["verification_key", vk_hash]
    #[account(
        init_if_needed,
        payer = admin,
        space = VerificationKey::LEN,
        seeds = [VERIFICATION_KEY_SEED.as_bytes(), vk_hash.as_ref()],
        bump
    )]
    pub verification_key: Account<'info, VerificationKey>,

    /// Must match the admin stored in the config
    #[account(
        mut,
        constraint = admin.key() == config.admin @ IncentiveError::OnlyAdmin
    )]
    pub admin: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

pub fn handle_add_verification_key(ctx: Context<SetVerificationKey>, vk_hash: [u8; 32]) -> Result<()> {
    let entry = &mut ctx.accounts.verification_key;
    entry.vk_hash = vk_hash;
    entry.authorized = true;
    entry.bump = ctx.bumps.verification_key;

    emit_cpi!(VerificationKeyAdded { vk_hash });

    Ok(())
}

pub fn handle_remove_verification_key(ctx: Context<SetVerificationKey>, vk_hash: [u8; 32]) -> Result<()> {
    let entry = &mut ctx.accounts.verification_key;
    entry.vk_hash = vk_hash;
    entry.authorized = false;
    entry.bump = ctx.bumps.verification_key;

    emit_cpi!(VerificationKeyRemoved { vk_hash });

    Ok(())
}
