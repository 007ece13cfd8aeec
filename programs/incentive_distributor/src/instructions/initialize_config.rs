use anchor_lang::prelude::*;
use crate::state::*;
use crate::constants::*;
use crate::event::*;
use crate::error::*;

/**
 * Account context for initializing the global config
 *
 * Creates the singleton config PDA. The signer pays for it and becomes admin.
 *
 * Access Control: Program upgrade authority only
 */
#[event_cpi]
#[derive(Accounts)]
pub struct InitializeConfig<'info> {
    /// Global config account (PDA)
    /// - Derived from: ["config"]
    #[account(
        init,
        payer = admin,
        space = IncentiveConfig::LEN,
        seeds = [CONFIG_SEED.as_bytes()],
        bump
    )]
    pub config: Account<'info, IncentiveConfig>,

    /// Initial admin, pays for the config account
    #[account(mut)]
    pub admin: Signer<'info>,

    /// This program, used to locate its program data account
    #[account(
        constraint = incentive_program.programdata_address()? == Some(program_data.key()) @ IncentiveError::NotUpgradeAuthority
    )]
    pub incentive_program: Program<'info, crate::program::IncentiveDistributor>,

    /// Upgradeable loader state of this program
    /// - Its upgrade authority must be the signer
    #[account(
        constraint = IncentiveConfig::is_upgrade_authority(
            program_data.upgrade_authority_address,
            &admin.key()
        ) @ IncentiveError::NotUpgradeAuthority
    )]
    pub program_data: Account<'info, ProgramData>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

pub fn handle_initialize_config(
    ctx: Context<InitializeConfig>,
    blocks_per_epoch: u64,
    protocol_fee: u64,
    protocol_fee_recipient: Pubkey,
    proof_verifier: Pubkey,
) -> Result<()> {
    IncentiveConfig::validate_blocks_per_epoch(blocks_per_epoch)?;
    IncentiveConfig::validate_protocol_fee(protocol_fee)?;

    let config = &mut ctx.accounts.config;
    config.bump = ctx.bumps.config;
    config.admin = ctx.accounts.admin.key();
    config.proof_verifier = proof_verifier;
    config.blocks_per_epoch = blocks_per_epoch;
    config.protocol_fee = protocol_fee;
    config.protocol_fee_recipient = protocol_fee_recipient;
    config.distribution_count = 0;

    msg!(
        "Config initialized: blocks_per_epoch={}, protocol_fee={}",
        blocks_per_epoch,
        protocol_fee
    );

    emit_cpi!(ConfigInitialized {
        admin: ctx.accounts.admin.key(),
        proof_verifier,
        blocks_per_epoch,
        protocol_fee,
        protocol_fee_recipient,
    });

    Ok(())
}
