use anchor_lang::prelude::*;
use crate::state::*;
use crate::error::*;
use crate::constants::*;
use crate::event::*;

/**
 * Account context for admin configuration updates
 *
 * Shared by every setter on the global config.
 *
 * Access Control: Admin only
 */
#[event_cpi]
#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    /// Global config account (PDA)
    #[account(
        mut,
        seeds = [CONFIG_SEED.as_bytes()],
        bump = config.bump
    )]
    pub config: Account<'info, IncentiveConfig>,

    /// Must match the admin stored in the config
    #[account(constraint = admin.key() == config.admin @ IncentiveError::OnlyAdmin)]
    pub admin: Signer<'info>,
}

pub fn handle_set_admin(ctx: Context<UpdateConfig>, new_admin: Pubkey) -> Result<()> {
    require!(new_admin != Pubkey::default(), IncentiveError::ZeroAddress);

    let config = &mut ctx.accounts.config;
    let previous_admin = config.admin;
    config.admin = new_admin;

    emit_cpi!(AdminUpdated {
        previous_admin,
        new_admin,
    });

    Ok(())
}

/**
 * Sets the epoch length
 *
 * Applies to later creations and to every later claim settlement, including
 * claims against existing distributions.
 */
pub fn handle_set_blocks_per_epoch(ctx: Context<UpdateConfig>, blocks_per_epoch: u64) -> Result<()> {
    IncentiveConfig::validate_blocks_per_epoch(blocks_per_epoch)?;
    ctx.accounts.config.blocks_per_epoch = blocks_per_epoch;

    emit_cpi!(BlocksPerEpochUpdated { blocks_per_epoch });

    Ok(())
}

pub fn handle_set_protocol_fee(ctx: Context<UpdateConfig>, protocol_fee: u64) -> Result<()> {
    IncentiveConfig::validate_protocol_fee(protocol_fee)?;
    ctx.accounts.config.protocol_fee = protocol_fee;

    emit_cpi!(ProtocolFeeUpdated { protocol_fee });

    Ok(())
}

pub fn handle_set_protocol_fee_recipient(
    ctx: Context<UpdateConfig>,
    protocol_fee_recipient: Pubkey,
) -> Result<()> {
    ctx.accounts.config.protocol_fee_recipient = protocol_fee_recipient;

    emit_cpi!(ProtocolFeeRecipientUpdated {
        protocol_fee_recipient,
    });

    Ok(())
}

pub fn handle_set_proof_verifier(ctx: Context<UpdateConfig>, proof_verifier: Pubkey) -> Result<()> {
    ctx.accounts.config.proof_verifier = proof_verifier;

    emit_cpi!(ProofVerifierUpdated { proof_verifier });

    Ok(())
}
